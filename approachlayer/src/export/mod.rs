//! Scene export for external renderers.
//!
//! Two wire shapes are provided: a flat record list (one entry per styled
//! geometry, in draw order) and a GeoJSON FeatureCollection for renderers
//! that consume GeoJSON directly. Both carry the style id as an opaque
//! string; resolving it to colors and stroke widths is the renderer's job.

use serde::Serialize;
use serde_json::{json, Value};

use crate::scene::{Geometry, Scene};

/// One scene entry in renderer wire format.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneRecord {
    /// Geometry discriminator: "point", "lineString", or "polygon".
    pub geometry_kind: &'static str,
    /// Vertices as `[lon, lat]` pairs, in order.
    pub coordinates: Vec<[f64; 2]>,
    /// Opaque style token resolved by the renderer.
    pub style_id: &'static str,
}

/// Flatten a scene into wire records, preserving draw order.
pub fn scene_records(scene: &Scene) -> Vec<SceneRecord> {
    scene
        .entries()
        .iter()
        .map(|entry| SceneRecord {
            geometry_kind: entry.geometry.kind(),
            coordinates: entry
                .geometry
                .vertices()
                .iter()
                .map(|p| p.to_lon_lat())
                .collect(),
            style_id: entry.style.as_str(),
        })
        .collect()
}

/// Serialize a scene as a JSON array of records.
pub fn to_json(scene: &Scene) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&scene_records(scene))
}

/// Serialize a scene as a GeoJSON FeatureCollection.
///
/// Each entry becomes a Feature whose `styleId` property carries the style
/// token. Draw order is preserved as feature order.
pub fn to_geojson(scene: &Scene) -> serde_json::Result<String> {
    let features: Vec<Value> = scene
        .entries()
        .iter()
        .map(|entry| {
            let coords: Vec<[f64; 2]> = entry
                .geometry
                .vertices()
                .iter()
                .map(|p| p.to_lon_lat())
                .collect();
            let geometry = match &entry.geometry {
                Geometry::Point(p) => json!({
                    "type": "Point",
                    "coordinates": p.to_lon_lat(),
                }),
                Geometry::LineString(_) => json!({
                    "type": "LineString",
                    "coordinates": coords,
                }),
                // GeoJSON polygons are a list of rings; ours have one.
                Geometry::Polygon(_) => json!({
                    "type": "Polygon",
                    "coordinates": [coords],
                }),
            };
            json!({
                "type": "Feature",
                "geometry": geometry,
                "properties": { "styleId": entry.style.as_str() },
            })
        })
        .collect();

    serde_json::to_string_pretty(&json!({
        "type": "FeatureCollection",
        "features": features,
    }))
}
