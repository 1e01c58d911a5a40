// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the MapGL bridge.
//
// Native code speaks (latitude, longitude). The engine speaks [lng, lat]
// arrays. Every conversion between the two lives in this file or in the
// bridge's literal encoder; nothing else should index into a raw pair.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MapGlError;

/// A WGS84 position in native (latitude, longitude) order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Decode an engine `[lng, lat]` pair.
    ///
    /// Returns `None` unless `value` is an array of exactly two numbers.
    pub fn from_lng_lat(value: &Value) -> Option<Self> {
        let [lng, lat] = numeric_pair(value)?;
        Some(Self::new(lat, lng))
    }
}

/// A position on screen, in points, relative to the map view's top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// Visible area of the map as reported by `getBounds()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicalBounds {
    pub north_east: Coordinate,
    pub south_west: Coordinate,
}

impl GeographicalBounds {
    /// Decode `{"northEast": [lng, lat], "southWest": [lng, lat]}`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let north_east = Coordinate::from_lng_lat(object.get("northEast")?)?;
        let south_west = Coordinate::from_lng_lat(object.get("southWest")?)?;
        Some(Self {
            north_east,
            south_west,
        })
    }
}

/// A tap on the map surface.
#[derive(Debug, Clone, PartialEq)]
pub struct MapClickEvent {
    /// Geographic position under the tap.
    pub coordinate: Coordinate,
    /// Screen position of the tap.
    pub point: ScreenPoint,
    /// Id of the map object that was hit, if any.
    pub target_id: Option<String>,
}

/// Wire shape of the `mapClick` payload once the inner JSON string is parsed.
#[derive(Deserialize)]
struct RawMapClick {
    #[serde(rename = "lngLat")]
    lng_lat: [f64; 2],
    point: [f64; 2],
    #[serde(default)]
    target: Option<RawClickTarget>,
}

#[derive(Deserialize)]
struct RawClickTarget {
    id: String,
}

impl MapClickEvent {
    /// Parse the JSON-encoded event string the engine posts for `mapClick`.
    pub fn from_json_str(encoded: &str) -> Option<Self> {
        let raw: RawMapClick = serde_json::from_str(encoded).ok()?;
        let [lng, lat] = raw.lng_lat;
        let [x, y] = raw.point;
        Some(Self {
            coordinate: Coordinate::new(lat, lng),
            point: ScreenPoint { x, y },
            target_id: raw.target.map(|t| t.id),
        })
    }
}

/// A tap on a marker cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterClickEvent {
    pub cluster_id: String,
    /// Ids of the markers under the tap, in engine order. Always a list,
    /// even when the engine reported a single marker.
    pub marker_ids: Vec<String>,
}

/// Result of an asynchronous car route request.
#[derive(Debug)]
pub struct RouteCompletion {
    pub direction_id: String,
    pub completion_id: String,
    /// `None` when the engine reported an empty error string.
    pub error: Option<MapGlError>,
}

impl RouteCompletion {
    pub fn new(direction_id: String, completion_id: String, error_text: &str) -> Self {
        let error = if error_text.is_empty() {
            None
        } else {
            Some(MapGlError::Route(error_text.to_owned()))
        };
        Self {
            direction_id,
            completion_id,
            error,
        }
    }
}

/// RGBA colour for map object styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 0xff)
    }

    /// CSS `#rrggbbaa` form understood by the engine.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

/// Exactly two JSON numbers, in array order.
fn numeric_pair(value: &Value) -> Option<[f64; 2]> {
    match value.as_array()?.as_slice() {
        [first, second] => Some([first.as_f64()?, second.as_f64()?]),
        _ => None,
    }
}
