use std::io::Write;

use bikeflow_core::{model::EnrichedStation, traffic::RadiusScale};
use serde::{Deserialize, Serialize};

use super::ExportError;

/// flat output row for one station: location, counts and circle radius.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StationTrafficRow {
    pub id: String,
    pub name: Option<String>,
    pub lon: f64,
    pub lat: f64,
    pub arrivals: u64,
    pub departures: u64,
    pub total_traffic: u64,
    pub radius: f64,
}

impl StationTrafficRow {
    pub fn new(station: &EnrichedStation, scale: &RadiusScale) -> StationTrafficRow {
        StationTrafficRow {
            id: station.id().to_string(),
            name: station.station.name.clone(),
            lon: station.station.lon(),
            lat: station.station.lat(),
            arrivals: station.arrivals(),
            departures: station.departures(),
            total_traffic: station.total_traffic(),
            radius: scale.apply(station.total_traffic()),
        }
    }
}

/// writes one CSV row per station, with a header.
pub fn write_station_csv<W: Write>(
    writer: W,
    stations: &[EnrichedStation],
    scale: &RadiusScale,
) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for station in stations {
        wtr.serialize(StationTrafficRow::new(station, scale))?;
    }
    wtr.flush().map_err(|e| ExportError::CsvError(e.into()))?;
    Ok(())
}

/// a station's place in a traffic ranking.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RankedStationRow {
    pub rank: usize,
    pub id: String,
    pub name: Option<String>,
    pub arrivals: u64,
    pub departures: u64,
    pub total_traffic: u64,
    pub radius: f64,
}

/// writes ranked stations as CSV, numbering them from 1 in the given order.
pub fn write_ranked_station_csv<W: Write>(
    writer: W,
    ranked: &[&EnrichedStation],
    scale: &RadiusScale,
) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (idx, station) in ranked.iter().enumerate() {
        wtr.serialize(RankedStationRow {
            rank: idx + 1,
            id: station.id().to_string(),
            name: station.station.name.clone(),
            arrivals: station.arrivals(),
            departures: station.departures(),
            total_traffic: station.total_traffic(),
            radius: scale.apply(station.total_traffic()),
        })?;
    }
    wtr.flush().map_err(|e| ExportError::CsvError(e.into()))?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{write_ranked_station_csv, write_station_csv, RankedStationRow};
    use bikeflow_core::model::{EnrichedStation, Station, TrafficCounts};
    use bikeflow_core::traffic::make_radius_scale;

    #[test]
    fn test_csv_rows() {
        let stations = vec![
            EnrichedStation::new(
                Station::new("A", -71.5, 42.25).with_name("Kendall"),
                TrafficCounts::new(1, 3),
            ),
            EnrichedStation::new(Station::new("B", -71.0, 42.5), TrafficCounts::new(1, 0)),
        ];
        let scale = make_radius_scale(&stations);
        let mut out = Vec::new();
        write_station_csv(&mut out, &stations, &scale).expect("csv should write");
        let text = String::from_utf8(out).expect("utf8");
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(
            lines[0],
            "id,name,lon,lat,arrivals,departures,total_traffic,radius"
        );
        assert_eq!(lines[1], "A,Kendall,-71.5,42.25,1,3,4,25.0");
        assert_eq!(lines[2], "B,,-71.0,42.5,1,0,1,12.5");
    }

    #[test]
    fn test_ranked_rows_quote_names() {
        let name = r#"Mass Ave "North", Lot 2"#;
        let stations = vec![EnrichedStation::new(
            Station::new("A", -71.1, 42.3).with_name(name),
            TrafficCounts::new(1, 1),
        )];
        let scale = make_radius_scale(&stations);
        let ranked = stations.iter().collect::<Vec<_>>();
        let mut out = Vec::new();
        write_ranked_station_csv(&mut out, &ranked, &scale).expect("csv should write");
        let text = String::from_utf8(out).expect("utf8");
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(
            lines[0],
            "rank,id,name,arrivals,departures,total_traffic,radius"
        );
        assert_eq!(lines[1], r#"1,A,"Mass Ave ""North"", Lot 2",1,1,2,25.0"#);

        let mut rdr = csv::Reader::from_reader(text.as_bytes());
        let rows = rdr
            .deserialize::<RankedStationRow>()
            .collect::<Result<Vec<_>, _>>()
            .expect("ranked rows should read back");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name.as_deref(), Some(name));
        assert_eq!(rows[0].total_traffic, 2);
    }
}
