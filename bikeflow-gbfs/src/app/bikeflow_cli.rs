use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use super::{AppError, DataArgs};
use crate::export::OutputFormat;

/// command line tool aggregating bike-share station traffic for map overlays
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct BikeflowCliArguments {
    /// select the bikeflow operation to run
    #[command(subcommand)]
    pub op: BikeflowOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum BikeflowOperation {
    /// loads stations and trips and writes per-station traffic counts and
    /// circle radii.
    Traffic {
        #[command(flatten)]
        data: DataArgs,
        /// output file path.
        #[arg(short, long)]
        output_file: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
        /// replace the output file if it exists.
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// writes a map style document with the bike-lane layer and the station
    /// traffic circle layer.
    Style {
        #[command(flatten)]
        data: DataArgs,
        /// output file path.
        #[arg(short, long)]
        output_file: PathBuf,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// prints how well the trip log matches the station list, and the
    /// busiest stations.
    Summary {
        #[command(flatten)]
        data: DataArgs,
        /// number of busiest stations to list.
        #[arg(long, default_value_t = 10)]
        top_n: usize,
    },
}

impl BikeflowOperation {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            BikeflowOperation::Traffic {
                data,
                output_file,
                format,
                overwrite,
            } => super::run::run_traffic(data, output_file, *format, *overwrite),
            BikeflowOperation::Style {
                data,
                output_file,
                overwrite,
            } => super::run::run_style(data, output_file, *overwrite),
            BikeflowOperation::Summary { data, top_n } => super::run::run_summary(data, *top_n),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{BikeflowCliArguments, BikeflowOperation};
    use crate::{export::OutputFormat, source::StationIdField};
    use clap::Parser;
    use std::time::Duration;

    #[test]
    fn test_parse_traffic_command() {
        let args = BikeflowCliArguments::try_parse_from([
            "bikeflow",
            "traffic",
            "--trips",
            "trips.csv",
            "--station-id-field",
            "station-id",
            "--request-timeout",
            "2m",
            "-o",
            "out.geojson",
            "--format",
            "geojson",
        ])
        .expect("arguments should parse");
        match args.op {
            BikeflowOperation::Traffic {
                data,
                output_file,
                format,
                overwrite,
            } => {
                assert_eq!(data.trips.as_deref(), Some("trips.csv"));
                assert_eq!(data.stations, None);
                assert_eq!(data.station_id_field, Some(StationIdField::StationId));
                assert_eq!(data.request_timeout, Some(Duration::from_secs(120)));
                assert_eq!(output_file.to_str(), Some("out.geojson"));
                assert_eq!(format, OutputFormat::GeoJson);
                assert!(!overwrite);
            }
            _ => panic!("expected traffic operation"),
        }
    }

    #[test]
    fn test_parse_summary_defaults() {
        let args = BikeflowCliArguments::try_parse_from(["bikeflow", "summary"])
            .expect("arguments should parse");
        match args.op {
            BikeflowOperation::Summary { top_n, .. } => assert_eq!(top_n, 10),
            _ => panic!("expected summary operation"),
        }
    }
}
