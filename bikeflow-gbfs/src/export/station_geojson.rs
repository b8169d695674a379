use bikeflow_core::{model::EnrichedStation, traffic::RadiusScale};
use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject, Value};

use super::{ExportError, StationTrafficRow};

/// stations as GeoJSON points, with the [`StationTrafficRow`] fields as
/// feature properties.
pub fn station_feature_collection<'a, I>(
    stations: I,
    scale: &RadiusScale,
) -> Result<FeatureCollection, ExportError>
where
    I: IntoIterator<Item = &'a EnrichedStation>,
{
    let features = stations
        .into_iter()
        .map(|station| -> Result<Feature, ExportError> {
            let row = StationTrafficRow::new(station, scale);
            let properties: Option<JsonObject> = match serde_json::to_value(&row)? {
                serde_json::Value::Object(map) => Some(map),
                _ => None,
            };
            let geometry = Geometry::new(Value::Point(vec![row.lon, row.lat]));
            Ok(Feature {
                bbox: None,
                geometry: Some(geometry),
                id: Some(Id::String(row.id)),
                properties,
                foreign_members: None,
            })
        })
        .collect::<Result<Vec<_>, ExportError>>()?;
    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}
