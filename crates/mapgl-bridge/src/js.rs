// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Native value -> script literal encoding.
//
// Every argument that crosses into the engine goes through `JsLiteral`, so
// there is exactly one place that decides how a string is quoted. Commands
// never splice raw text into a script.

use std::fmt::{self, Display, Write as _};

use mapgl_core::{Color, Coordinate, MapOptions};
use serde_json::Value;

/// A script value ready to be rendered into an invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum JsLiteral {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<JsLiteral>),
    /// Object literal with keys in insertion order.
    Object(Vec<(String, JsLiteral)>),
}

impl Display for JsLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write_number(f, *n),
            Self::String(s) => f.write_str(&quote(s)),
            Self::Array(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
            Self::Object(fields) => {
                f.write_char('{')?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{}:{value}", quote(key))?;
                }
                f.write_char('}')
            }
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n == f64::INFINITY {
        f.write_str("Infinity")
    } else if n == f64::NEG_INFINITY {
        f.write_str("-Infinity")
    } else {
        write!(f, "{n}")
    }
}

/// Quote and escape `s` as a script string literal.
///
/// JSON string escaping covers quotes, backslashes and control characters.
/// U+2028 and U+2029 are legal inside JSON strings but terminate a line in
/// older script parsers, so they are escaped as well.
pub fn quote(s: &str) -> String {
    Value::String(s.to_owned())
        .to_string()
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

/// Conversion into a script literal.
pub trait ToJs {
    fn to_js(&self) -> JsLiteral;
}

impl ToJs for JsLiteral {
    fn to_js(&self) -> JsLiteral {
        self.clone()
    }
}

impl ToJs for bool {
    fn to_js(&self) -> JsLiteral {
        JsLiteral::Bool(*self)
    }
}

impl ToJs for f64 {
    fn to_js(&self) -> JsLiteral {
        JsLiteral::Number(*self)
    }
}

impl ToJs for i32 {
    fn to_js(&self) -> JsLiteral {
        JsLiteral::Number(f64::from(*self))
    }
}

impl ToJs for str {
    fn to_js(&self) -> JsLiteral {
        JsLiteral::String(self.to_owned())
    }
}

impl ToJs for String {
    fn to_js(&self) -> JsLiteral {
        self.as_str().to_js()
    }
}

impl<T: ToJs + ?Sized> ToJs for &T {
    fn to_js(&self) -> JsLiteral {
        (**self).to_js()
    }
}

impl<T: ToJs> ToJs for Option<T> {
    fn to_js(&self) -> JsLiteral {
        self.as_ref().map_or(JsLiteral::Null, ToJs::to_js)
    }
}

impl<T: ToJs> ToJs for [T] {
    fn to_js(&self) -> JsLiteral {
        JsLiteral::Array(self.iter().map(ToJs::to_js).collect())
    }
}

impl<T: ToJs> ToJs for Vec<T> {
    fn to_js(&self) -> JsLiteral {
        self.as_slice().to_js()
    }
}

/// Engine order is `[lng, lat]`, the reverse of the native field order.
impl ToJs for Coordinate {
    fn to_js(&self) -> JsLiteral {
        JsLiteral::Array(vec![
            JsLiteral::Number(self.longitude),
            JsLiteral::Number(self.latitude),
        ])
    }
}

impl ToJs for Color {
    fn to_js(&self) -> JsLiteral {
        JsLiteral::String(self.to_hex())
    }
}

impl ToJs for MapOptions {
    fn to_js(&self) -> JsLiteral {
        JsObject::new()
            .field("center", self.center)
            .field("maxZoom", self.max_zoom)
            .field("minZoom", self.min_zoom)
            .field("zoom", self.zoom)
            .field("maxPitch", self.max_pitch)
            .field("minPitch", self.min_pitch)
            .field("pitch", self.pitch)
            .field("rotation", self.rotation)
            .field("zoomControl", false)
            .field("key", &self.api_key)
            .field("interactiveCopyright", false)
            .field("autoHideOSMCopyright", self.auto_hide_osm_copyright)
            .field("preserveDrawingBuffer", true)
            .field(
                "disableRotationByUserInteraction",
                self.disable_rotation_by_user_interaction,
            )
            .field(
                "disablePitchByUserInteraction",
                self.disable_pitch_by_user_interaction,
            )
            .to_js()
    }
}

/// Builder for object literals with a fixed key order.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    fields: Vec<(String, JsLiteral)>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: &str, value: impl ToJs) -> Self {
        self.fields.push((key.to_owned(), value.to_js()));
        self
    }

    /// Add `key` only when `value` is present. The engine treats an absent
    /// key as "use the default", which `null` does not always mean.
    pub fn optional_field<T: ToJs>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.field(key, v),
            None => self,
        }
    }
}

impl ToJs for JsObject {
    fn to_js(&self) -> JsLiteral {
        JsLiteral::Object(self.fields.clone())
    }
}

/// Object the script is invoked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receiver {
    /// Global functions installed by the bridge page (`window.*`).
    Window,
    /// The live map instance (`window.map.*`).
    Map,
}

impl Receiver {
    fn path(self) -> &'static str {
        match self {
            Self::Window => "window",
            Self::Map => "window.map",
        }
    }
}

/// A single outbound call: receiver, method name, ordered arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct JsCommand {
    receiver: Receiver,
    method: &'static str,
    args: Vec<JsLiteral>,
}

impl JsCommand {
    pub fn window(method: &'static str) -> Self {
        Self {
            receiver: Receiver::Window,
            method,
            args: Vec::new(),
        }
    }

    pub fn map(method: &'static str) -> Self {
        Self {
            receiver: Receiver::Map,
            method,
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, value: impl ToJs) -> Self {
        self.args.push(value.to_js());
        self
    }

    pub fn method(&self) -> &'static str {
        self.method
    }
}

impl Display for JsCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}(", self.receiver.path(), self.method)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(");")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_render_as_literals() {
        assert_eq!(true.to_js().to_string(), "true");
        assert_eq!(3.5f64.to_js().to_string(), "3.5");
        assert_eq!(17.0f64.to_js().to_string(), "17");
        assert_eq!((-2i32).to_js().to_string(), "-2");
        assert_eq!(None::<f64>.to_js().to_string(), "null");
    }

    #[test]
    fn non_finite_numbers_use_script_names() {
        assert_eq!(f64::NAN.to_js().to_string(), "NaN");
        assert_eq!(f64::INFINITY.to_js().to_string(), "Infinity");
        assert_eq!(f64::NEG_INFINITY.to_js().to_string(), "-Infinity");
    }

    #[test]
    fn strings_cannot_break_out_of_their_literal() {
        let hostile = r#"a"); window.evil(); ("b"#;
        let rendered = hostile.to_js().to_string();
        assert_eq!(rendered, r#""a\"); window.evil(); (\"b""#);

        let command = JsCommand::window("destroyObject").arg(hostile).to_string();
        // One call, one argument: the only unescaped quotes are the delimiters.
        assert!(command.starts_with("window.destroyObject(\""));
        assert!(command.ends_with("\");"));
        assert_eq!(command.matches("\\\"").count(), 2);
    }

    #[test]
    fn line_terminators_and_controls_are_escaped() {
        let rendered = "x\u{2028}y\u{2029}z\n\\".to_js().to_string();
        assert_eq!(rendered, r#""x\u2028y\u2029z\n\\""#);
        assert!(!rendered.contains('\n'));
    }

    #[test]
    fn coordinate_renders_longitude_first() {
        let c = Coordinate::new(55.75, 37.62);
        assert_eq!(c.to_js().to_string(), "[37.62,55.75]");
    }

    #[test]
    fn lists_render_as_arrays() {
        let ids = vec!["a".to_owned(), "b\"c".to_owned()];
        assert_eq!(ids.to_js().to_string(), r#"["a","b\"c"]"#);
        assert_eq!(Vec::<String>::new().to_js().to_string(), "[]");
    }

    #[test]
    fn object_keeps_insertion_order_and_skips_absent_fields() {
        let object = JsObject::new()
            .field("b", 1.0)
            .optional_field("skip", None::<f64>)
            .field("a", "x")
            .to_js();
        assert_eq!(object.to_string(), r#"{"b":1,"a":"x"}"#);
    }

    #[test]
    fn command_renders_receiver_method_and_args() {
        assert_eq!(
            JsCommand::map("getZoom").to_string(),
            "window.map.getZoom();"
        );
        assert_eq!(
            JsCommand::map("setZoom").arg(12.5).to_string(),
            "window.map.setZoom(12.5);"
        );
        assert_eq!(
            JsCommand::window("setSelectedObjects")
                .arg(vec!["m1", "m2"])
                .to_string(),
            r#"window.setSelectedObjects(["m1","m2"]);"#
        );
    }

    #[test]
    fn map_options_render_fixed_keys_in_order() {
        let options = MapOptions {
            center: Coordinate::new(55.75, 37.62),
            api_key: "key-123".into(),
            auto_hide_osm_copyright: true,
            disable_pitch_by_user_interaction: true,
            ..MapOptions::default()
        };
        let rendered = options.to_js().to_string();
        assert_eq!(
            rendered,
            concat!(
                r#"{"center":[37.62,55.75],"maxZoom":20,"minZoom":2,"zoom":17,"#,
                r#""maxPitch":45,"minPitch":0,"pitch":0,"rotation":0,"#,
                r#""zoomControl":false,"key":"key-123","interactiveCopyright":false,"#,
                r#""autoHideOSMCopyright":true,"preserveDrawingBuffer":true,"#,
                r#""disableRotationByUserInteraction":false,"#,
                r#""disablePitchByUserInteraction":true}"#
            )
        );
    }

    #[test]
    fn map_options_literal_is_valid_json() {
        let rendered = MapOptions::default().to_js().to_string();
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        let object = parsed.as_object().unwrap();
        for key in [
            "center",
            "maxZoom",
            "minZoom",
            "zoom",
            "maxPitch",
            "minPitch",
            "pitch",
            "rotation",
            "zoomControl",
            "key",
            "interactiveCopyright",
            "autoHideOSMCopyright",
            "preserveDrawingBuffer",
            "disableRotationByUserInteraction",
            "disablePitchByUserInteraction",
        ] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert_eq!(object.len(), 15);
        assert_eq!(parsed["zoomControl"], Value::Bool(false));
        assert_eq!(parsed["preserveDrawingBuffer"], Value::Bool(true));
        assert!(parsed["key"].is_string());
    }
}
