// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use super::{destroy_command, new_object_id};
use crate::js::{JsCommand, JsLiteral, JsObject, ToJs};
use crate::objects::Marker;
use crate::traits::JsMapObject;

/// A group of markers the engine merges when they overlap on screen.
///
/// Taps on a merged group arrive as `clusterClick` with this cluster's id
/// and the ids of the markers under the tap.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    id: String,
    /// Merge radius in points.
    pub radius: f64,
    pub markers: Vec<Marker>,
}

impl Cluster {
    pub fn new(markers: Vec<Marker>) -> Self {
        Self::with_id(new_object_id(), markers)
    }

    pub fn with_id(id: impl Into<String>, markers: Vec<Marker>) -> Self {
        Self {
            id: id.into(),
            radius: 80.0,
            markers,
        }
    }
}

impl JsMapObject for Cluster {
    fn id(&self) -> &str {
        &self.id
    }

    fn create_js_code(&self) -> String {
        let markers: Vec<JsLiteral> = self.markers.iter().map(|m| m.options().to_js()).collect();
        let options = JsObject::new()
            .field("id", &self.id)
            .field("radius", self.radius)
            .field("markers", markers);
        JsCommand::window("addCluster").arg(options).to_string()
    }

    fn destroy_js_code(&self) -> String {
        destroy_command(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use mapgl_core::Coordinate;

    use super::*;

    #[test]
    fn cluster_embeds_marker_options() {
        let cluster = Cluster::with_id(
            "cl",
            vec![
                Marker::with_id("a", Coordinate::new(1.0, 2.0)),
                Marker::with_id("b", Coordinate::new(3.0, 4.0)).z_index(1),
            ],
        );
        assert_eq!(
            cluster.create_js_code(),
            concat!(
                r#"window.addCluster({"id":"cl","radius":80,"markers":["#,
                r#"{"id":"a","coordinates":[2,1]},"#,
                r#"{"id":"b","coordinates":[4,3],"zIndex":1}]});"#
            )
        );
        assert_eq!(cluster.destroy_js_code(), r#"window.destroyObject("cl");"#);
    }
}
