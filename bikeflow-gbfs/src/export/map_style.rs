use bikeflow_core::render::CircleLayer;
use serde_json::{json, Value};

use super::{station_feature_collection, ExportError};
use crate::config::MapConfig;

pub const STATION_SOURCE_ID: &str = "stations";
pub const STATION_LAYER_ID: &str = "station-traffic";
pub const BIKE_LANE_LAYER_ID: &str = "bike-lanes";

/// builds a Mapbox GL style document for the overlay: the initial camera,
/// the bike-lane line layer and the station circle layer. root keys are
/// style-spec keys only. the base style, zoom bounds and scale domain have no
/// style-spec slot and go under `metadata` with a `bikeflow:` prefix. circle
/// radii are read per feature from the `radius` property.
pub fn map_style_document(map: &MapConfig, layer: &CircleLayer) -> Result<Value, ExportError> {
    let scale = layer.scale();
    let stations = layer.circles().iter().map(|c| &c.station);
    let station_data = serde_json::to_value(station_feature_collection(stations, scale)?)?;
    let lanes = &map.bike_lanes;
    let circles = layer.style();
    let doc = json!({
        "version": 8,
        "name": "bikeflow station traffic",
        "center": [map.center.lon, map.center.lat],
        "zoom": map.zoom,
        "sources": {
            lanes.source_id.clone(): {
                "type": "geojson",
                "data": lanes.url,
            },
            STATION_SOURCE_ID: {
                "type": "geojson",
                "data": station_data,
            },
        },
        "layers": [
            {
                "id": BIKE_LANE_LAYER_ID,
                "type": "line",
                "source": lanes.source_id,
                "paint": {
                    "line-color": lanes.color,
                    "line-width": lanes.width,
                    "line-opacity": lanes.opacity,
                },
            },
            {
                "id": STATION_LAYER_ID,
                "type": "circle",
                "source": STATION_SOURCE_ID,
                "paint": {
                    "circle-radius": ["get", "radius"],
                    "circle-color": circles.fill,
                    "circle-opacity": circles.fill_opacity * circles.opacity,
                    "circle-stroke-color": circles.stroke,
                    "circle-stroke-width": circles.stroke_width,
                    "circle-stroke-opacity": circles.opacity,
                },
            },
        ],
        "metadata": {
            "bikeflow:base_style": map.style,
            "bikeflow:min_zoom": map.min_zoom,
            "bikeflow:max_zoom": map.max_zoom,
            "bikeflow:max_traffic": scale.max_traffic(),
            "bikeflow:max_radius": scale.max_radius(),
        },
    });
    Ok(doc)
}

#[cfg(test)]
mod test {
    use super::{map_style_document, BIKE_LANE_LAYER_ID, STATION_LAYER_ID};
    use crate::config::BikeflowConfig;
    use bikeflow_core::model::{EnrichedStation, Station, TrafficCounts};
    use bikeflow_core::render::CircleLayer;
    use bikeflow_core::traffic::make_radius_scale;

    #[test]
    fn test_layers_and_sources() {
        let conf = BikeflowConfig::from_toml_str("").expect("defaults");
        let stations = vec![EnrichedStation::new(
            Station::new("A", -71.1, 42.3),
            TrafficCounts::new(5, 4),
        )];
        let scale = make_radius_scale(&stations);
        let layer = CircleLayer::new(stations, scale, conf.map.circles.clone());
        let doc = map_style_document(&conf.map, &layer).expect("style document");
        assert_eq!(doc["center"], serde_json::json!([-71.09415, 42.36027]));
        assert_eq!(doc["layers"][0]["id"], BIKE_LANE_LAYER_ID);
        assert_eq!(doc["layers"][0]["source"], "boston_route");
        assert_eq!(doc["layers"][0]["paint"]["line-color"], "#32D400");
        assert_eq!(doc["layers"][1]["id"], STATION_LAYER_ID);
        assert_eq!(doc["sources"]["boston_route"]["type"], "geojson");
        assert_eq!(
            doc["sources"]["stations"]["data"]["features"][0]["properties"]["total_traffic"],
            9
        );
        assert_eq!(doc["metadata"]["bikeflow:max_traffic"], 9);
        assert_eq!(doc["layers"][1]["paint"]["circle-color"], "steelblue");
    }

    #[test]
    fn test_root_keys_follow_style_spec() {
        let conf = BikeflowConfig::from_toml_str("").expect("defaults");
        let stations = vec![EnrichedStation::new(
            Station::new("A", -71.1, 42.3),
            TrafficCounts::new(1, 0),
        )];
        let scale = make_radius_scale(&stations);
        let layer = CircleLayer::new(stations, scale, conf.map.circles.clone());
        let doc = map_style_document(&conf.map, &layer).expect("style document");
        let root = doc.as_object().expect("document is an object");
        let style_spec_keys = [
            "version", "name", "center", "zoom", "sources", "layers", "metadata",
        ];
        for key in root.keys() {
            assert!(style_spec_keys.contains(&key.as_str()), "unexpected root key {key}");
        }
        assert_eq!(
            doc["metadata"]["bikeflow:base_style"],
            "mapbox://styles/mapbox/streets-v12"
        );
        assert_eq!(doc["metadata"]["bikeflow:min_zoom"], 5.0);
        assert_eq!(doc["metadata"]["bikeflow:max_zoom"], 18.0);
    }
}
