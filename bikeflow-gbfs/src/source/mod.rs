mod data_location;
mod data_source;
mod gbfs_station;
mod location_source;
mod source_error;
mod station_id_field;
mod trip_row;

pub use data_location::DataLocation;
pub use data_source::DataSource;
pub use gbfs_station::{
    parse_station_information, GbfsName, GbfsStationData, GbfsStationInformation,
    GbfsStationRecord, LocalizedString,
};
pub use location_source::LocationSource;
pub use source_error::SourceError;
pub use station_id_field::StationIdField;
pub use trip_row::{parse_timestamp, read_trips, TripLog, TripRow};
