// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use mapgl_core::Coordinate;

use super::{destroy_command, new_object_id};
use crate::js::{JsCommand, JsObject};
use crate::traits::JsMapObject;

/// A point marker, optionally with a custom icon.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    id: String,
    pub coordinate: Coordinate,
    /// Icon URL. The engine's default pin is used when absent.
    pub icon: Option<String>,
    /// Icon size in points, `[width, height]`.
    pub size: Option<[f64; 2]>,
    /// Icon anchor in points from the icon's top-left, `[x, y]`.
    pub anchor: Option<[f64; 2]>,
    pub z_index: Option<i32>,
}

impl Marker {
    pub fn new(coordinate: Coordinate) -> Self {
        Self::with_id(new_object_id(), coordinate)
    }

    pub fn with_id(id: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            id: id.into(),
            coordinate,
            icon: None,
            size: None,
            anchor: None,
            z_index: None,
        }
    }

    pub fn icon(mut self, url: impl Into<String>) -> Self {
        self.icon = Some(url.into());
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.size = Some([width, height]);
        self
    }

    pub fn anchor(mut self, x: f64, y: f64) -> Self {
        self.anchor = Some([x, y]);
        self
    }

    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    /// Marker options object, also embedded by `Cluster`.
    pub(crate) fn options(&self) -> JsObject {
        JsObject::new()
            .field("id", &self.id)
            .field("coordinates", self.coordinate)
            .optional_field("icon", self.icon.as_ref())
            .optional_field("size", self.size.map(Vec::from))
            .optional_field("anchor", self.anchor.map(Vec::from))
            .optional_field("zIndex", self.z_index)
    }
}

impl JsMapObject for Marker {
    fn id(&self) -> &str {
        &self.id
    }

    fn create_js_code(&self) -> String {
        JsCommand::window("addMarker").arg(self.options()).to_string()
    }

    fn destroy_js_code(&self) -> String {
        destroy_command(&self.id)
    }
}
