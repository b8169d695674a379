use std::{fmt::Display, path::PathBuf};

/// a remote document fetched over HTTP or a local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataLocation {
    Url(String),
    File(PathBuf),
}

impl From<&str> for DataLocation {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DataLocation::Url(trimmed.to_string())
        } else {
            DataLocation::File(PathBuf::from(trimmed))
        }
    }
}

impl Display for DataLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataLocation::Url(url) => write!(f, "{url}"),
            DataLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::DataLocation;
    use std::path::PathBuf;

    #[test]
    fn test_url_or_file() {
        assert_eq!(
            DataLocation::from(" https://example.com/stations.json"),
            DataLocation::Url(String::from("https://example.com/stations.json"))
        );
        assert_eq!(
            DataLocation::from("data/trips.csv"),
            DataLocation::File(PathBuf::from("data/trips.csv"))
        );
    }
}
