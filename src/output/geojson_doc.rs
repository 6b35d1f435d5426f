use crate::models::{Trip, TripStats};
use crate::output::color::trip_color;
use anyhow::Result;
use geojson::{feature::Id, Feature, FeatureCollection, Geometry, Value};
use serde::Serialize;
use uuid::Uuid;

const STROKE_WIDTH: u32 = 3;
const STROKE_OPACITY: u32 = 1;

#[derive(Debug, Serialize)]
struct TripProperties<'a> {
    trip_id: &'a str,
    device_id: &'a str,
    start_time: &'a str,
    end_time: &'a str,
    point_count: usize,
    stroke: String,
    #[serde(rename = "stroke-width")]
    stroke_width: u32,
    #[serde(rename = "stroke-opacity")]
    stroke_opacity: u32,
    #[serde(flatten)]
    stats: &'a TripStats,
}

/// Stable across runs for the same input.
pub fn feature_id(trip: &Trip) -> Uuid {
    let first = trip.first();
    let key = format!("{}:{}:{}", trip.trip_id, first.device_id, first.timestamp);
    Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes())
}

fn trip_feature(index: usize, trip: &Trip, stats: &TripStats) -> Result<Feature> {
    let coordinates = trip.points.iter().map(|p| vec![p.lon, p.lat]).collect();

    let properties = TripProperties {
        trip_id: &trip.trip_id,
        device_id: &trip.first().device_id,
        start_time: &trip.first().timestamp,
        end_time: &trip.last().timestamp,
        point_count: trip.points.len(),
        stroke: trip_color(index),
        stroke_width: STROKE_WIDTH,
        stroke_opacity: STROKE_OPACITY,
        stats,
    };

    Ok(Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::LineString(coordinates))),
        id: Some(Id::String(feature_id(trip).to_string())),
        properties: serde_json::to_value(&properties)?.as_object().cloned(),
        foreign_members: None,
    })
}

pub fn build_collection(trips: &[(Trip, TripStats)]) -> Result<FeatureCollection> {
    let features = trips
        .iter()
        .enumerate()
        .map(|(index, (trip, stats))| trip_feature(index, trip, stats))
        .collect::<Result<Vec<_>>>()?;

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

pub fn render(trips: &[(Trip, TripStats)]) -> Result<String> {
    let collection = build_collection(trips)?;
    Ok(serde_json::to_string_pretty(&collection)?)
}
