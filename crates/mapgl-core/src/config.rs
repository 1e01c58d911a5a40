// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Map and bridge configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Coordinate;

/// Settings handed to `window.initializeMap` once per map.
///
/// The engine takes ownership of these values at initialisation; changing a
/// field afterwards has no effect on a running map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    /// Initial camera position.
    pub center: Coordinate,
    pub max_zoom: f64,
    pub min_zoom: f64,
    pub zoom: f64,
    pub max_pitch: f64,
    pub min_pitch: f64,
    pub pitch: f64,
    /// Bearing in degrees, clockwise from north.
    pub rotation: f64,
    /// MapGL API key.
    pub api_key: String,
    pub auto_hide_osm_copyright: bool,
    pub disable_rotation_by_user_interaction: bool,
    pub disable_pitch_by_user_interaction: bool,
}

impl MapOptions {
    /// Load options from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: Coordinate::new(55.750574, 37.618317),
            max_zoom: 20.0,
            min_zoom: 2.0,
            zoom: 17.0,
            max_pitch: 45.0,
            min_pitch: 0.0,
            pitch: 0.0,
            rotation: 0.0,
            api_key: String::new(),
            auto_hide_osm_copyright: false,
            disable_rotation_by_user_interaction: false,
            disable_pitch_by_user_interaction: false,
        }
    }
}

/// What the dispatcher does when the engine breaks the message contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationPolicy {
    /// Panic with the violation text. Default for debug builds.
    Panic,
    /// Log at error level and drop the message. Default for release builds.
    Log,
}

impl Default for ViolationPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Panic
        } else {
            Self::Log
        }
    }
}

/// Bridge-level settings shared by the encoder and the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Script message handler the engine posts map events to.
    pub message_handler_name: String,
    /// Script message handler the engine posts uncaught script errors to.
    pub error_handler_name: String,
    pub violation_policy: ViolationPolicy,
}

impl BridgeConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            message_handler_name: "dgsMessage".into(),
            error_handler_name: "error".into(),
            violation_policy: ViolationPolicy::default(),
        }
    }
}
