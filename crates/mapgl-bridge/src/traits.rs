// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Seams between the bridge and the code around it.
//
// The host owns the WebView (which runs scripts) and the delegate (which
// receives events). Map objects own their own script format. The bridge
// only sees these traits.

use mapgl_core::error::Result;
use mapgl_core::{ClusterClickEvent, Coordinate, MapClickEvent, RouteCompletion};
use serde_json::Value;

/// Result of running one script: the script's JSON-like value, or the
/// engine's error.
pub type ScriptResult = Result<Value>;

/// Callback invoked once per evaluated script.
pub type ScriptCallback = Box<dyn FnOnce(ScriptResult)>;

/// Runs script inside the embedded map engine.
///
/// Implementations must invoke `callback` at most once, on the host's UI
/// thread. A script whose result never arrives simply never calls back;
/// the bridge has no timeout.
pub trait ScriptExecutor {
    fn evaluate_javascript(&self, script: &str, callback: ScriptCallback);
}

/// Receives typed map events decoded from engine messages.
///
/// Every method defaults to a no-op so hosts implement only what they use.
pub trait MapEventDelegate {
    /// The camera centre moved.
    fn map_center_did_change(&self, _center: Coordinate) {}

    fn map_zoom_did_change(&self, _zoom: f64) {}

    fn map_rotation_did_change(&self, _rotation: f64) {}

    fn map_pitch_did_change(&self, _pitch: f64) {}

    /// The user tapped the map surface.
    fn did_click_map(&self, _event: MapClickEvent) {}

    /// The user tapped a map object.
    fn did_click_object(&self, _object_id: &str) {}

    /// The user tapped a marker cluster.
    fn did_click_cluster(&self, _event: ClusterClickEvent) {}

    /// A car route request finished, successfully or not.
    fn car_route_did_finish(&self, _completion: RouteCompletion) {}
}

/// Something that can be placed on, and later removed from, the map.
///
/// Each object kind decides its own script. The bridge submits whatever
/// these return, so adding a kind never touches the encoder.
pub trait JsMapObject {
    /// Engine-side identifier; also what `objectClick` reports.
    fn id(&self) -> &str;

    /// Script that adds this object to the map.
    fn create_js_code(&self) -> String;

    /// Script that removes this object from the map.
    fn destroy_js_code(&self) -> String;
}
