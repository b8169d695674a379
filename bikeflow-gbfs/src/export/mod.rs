mod export_error;
mod map_style;
mod output_format;
mod station_geojson;
mod station_row;

pub use export_error::ExportError;
pub use map_style::{map_style_document, BIKE_LANE_LAYER_ID, STATION_LAYER_ID, STATION_SOURCE_ID};
pub use output_format::OutputFormat;
pub use station_geojson::station_feature_collection;
pub use station_row::{
    write_ranked_station_csv, write_station_csv, RankedStationRow, StationTrafficRow,
};
