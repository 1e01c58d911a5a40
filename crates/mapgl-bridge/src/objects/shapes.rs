// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Vector shapes: circles, polylines and polygons.

use mapgl_core::{Color, Coordinate};

use super::{destroy_command, new_object_id};
use crate::js::{JsCommand, JsObject};
use crate::traits::JsMapObject;

const DEFAULT_FILL: Color = Color::rgba(0x1e, 0x88, 0xe5, 0x40);
const DEFAULT_STROKE: Color = Color::rgb(0x1e, 0x88, 0xe5);

/// A circle of fixed radius in metres.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    id: String,
    pub center: Coordinate,
    /// Radius in metres.
    pub radius: f64,
    pub color: Color,
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub z_index: Option<i32>,
}

impl Circle {
    pub fn new(center: Coordinate, radius: f64) -> Self {
        Self::with_id(new_object_id(), center, radius)
    }

    pub fn with_id(id: impl Into<String>, center: Coordinate, radius: f64) -> Self {
        Self {
            id: id.into(),
            center,
            radius,
            color: DEFAULT_FILL,
            stroke_color: DEFAULT_STROKE,
            stroke_width: 2.0,
            z_index: None,
        }
    }
}

impl JsMapObject for Circle {
    fn id(&self) -> &str {
        &self.id
    }

    fn create_js_code(&self) -> String {
        let options = JsObject::new()
            .field("id", &self.id)
            .field("coordinates", self.center)
            .field("radius", self.radius)
            .field("color", self.color)
            .field("strokeColor", self.stroke_color)
            .field("strokeWidth", self.stroke_width)
            .optional_field("zIndex", self.z_index);
        JsCommand::window("addCircle").arg(options).to_string()
    }

    fn destroy_js_code(&self) -> String {
        destroy_command(&self.id)
    }
}

/// An open line through `points`, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    id: String,
    pub points: Vec<Coordinate>,
    /// Line width in points.
    pub width: f64,
    pub color: Color,
    pub z_index: Option<i32>,
}

impl Polyline {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self::with_id(new_object_id(), points)
    }

    pub fn with_id(id: impl Into<String>, points: Vec<Coordinate>) -> Self {
        Self {
            id: id.into(),
            points,
            width: 4.0,
            color: DEFAULT_STROKE,
            z_index: None,
        }
    }
}

impl JsMapObject for Polyline {
    fn id(&self) -> &str {
        &self.id
    }

    fn create_js_code(&self) -> String {
        let options = JsObject::new()
            .field("id", &self.id)
            .field("coordinates", &self.points)
            .field("width", self.width)
            .field("color", self.color)
            .optional_field("zIndex", self.z_index);
        JsCommand::window("addPolyline").arg(options).to_string()
    }

    fn destroy_js_code(&self) -> String {
        destroy_command(&self.id)
    }
}

/// A filled area. The first contour is the outer ring; any further
/// contours are holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    id: String,
    pub contours: Vec<Vec<Coordinate>>,
    pub color: Color,
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub z_index: Option<i32>,
}

impl Polygon {
    pub fn new(contours: Vec<Vec<Coordinate>>) -> Self {
        Self::with_id(new_object_id(), contours)
    }

    pub fn with_id(id: impl Into<String>, contours: Vec<Vec<Coordinate>>) -> Self {
        Self {
            id: id.into(),
            contours,
            color: DEFAULT_FILL,
            stroke_color: DEFAULT_STROKE,
            stroke_width: 2.0,
            z_index: None,
        }
    }
}

impl JsMapObject for Polygon {
    fn id(&self) -> &str {
        &self.id
    }

    fn create_js_code(&self) -> String {
        let options = JsObject::new()
            .field("id", &self.id)
            .field("coordinates", &self.contours)
            .field("color", self.color)
            .field("strokeColor", self.stroke_color)
            .field("strokeWidth", self.stroke_width)
            .optional_field("zIndex", self.z_index);
        JsCommand::window("addPolygon").arg(options).to_string()
    }

    fn destroy_js_code(&self) -> String {
        destroy_command(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_script() {
        let mut circle = Circle::with_id("c1", Coordinate::new(55.0, 37.0), 250.0);
        circle.z_index = Some(2);
        assert_eq!(
            circle.create_js_code(),
            concat!(
                r##"window.addCircle({"id":"c1","coordinates":[37,55],"radius":250,"##,
                r##""color":"#1e88e540","strokeColor":"#1e88e5ff","strokeWidth":2,"zIndex":2});"##
            )
        );
        assert_eq!(circle.destroy_js_code(), r#"window.destroyObject("c1");"#);
    }

    #[test]
    fn polyline_points_are_longitude_first() {
        let line = Polyline::with_id(
            "l1",
            vec![Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0)],
        );
        assert_eq!(
            line.create_js_code(),
            r##"window.addPolyline({"id":"l1","coordinates":[[2,1],[4,3]],"width":4,"color":"#1e88e5ff"});"##
        );
    }

    #[test]
    fn polygon_nests_contours() {
        let outer = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 1.0),
            Coordinate::new(1.0, 1.0),
        ];
        let polygon = Polygon::with_id("p1", vec![outer]);
        let script = polygon.create_js_code();
        assert!(script.starts_with(
            r#"window.addPolygon({"id":"p1","coordinates":[[[0,0],[1,0],[1,1]]],"#
        ));
        assert_eq!(polygon.destroy_js_code(), r#"window.destroyObject("p1");"#);
    }
}
