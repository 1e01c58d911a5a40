// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Inbound engine messages.
//
// The engine posts `{"type": ..., "value": ..., "id"?: ...}` objects. This
// module turns one of those into a `BridgeMessage` or a protocol violation.
// The set of message types is closed and lives in `DECODERS`; adding a type
// means one constant, one decoder, one table row, one `deliver` arm.

use mapgl_core::error::{MapGlError, Result};
use mapgl_core::{ClusterClickEvent, Coordinate, MapClickEvent, RouteCompletion};
use serde_json::{Map, Value};

use crate::traits::MapEventDelegate;

pub const CENTER_CHANGED: &str = "centerChanged";
pub const ZOOM_CHANGED: &str = "zoomChanged";
pub const ROTATION_CHANGED: &str = "rotationChanged";
pub const PITCH_CHANGED: &str = "pitchChanged";
pub const MAP_CLICK: &str = "mapClick";
pub const OBJECT_CLICK: &str = "objectClick";
pub const CLUSTER_CLICK: &str = "clusterClick";
pub const CAR_ROUTE_COMPLETION: &str = "carRouteCompletion";

type Envelope = Map<String, Value>;
type Decoder = fn(&Envelope) -> Result<BridgeMessage>;

/// Message type -> decoder. The whole inbound protocol.
const DECODERS: &[(&str, Decoder)] = &[
    (CENTER_CHANGED, decode_center_changed),
    (ZOOM_CHANGED, decode_zoom_changed),
    (ROTATION_CHANGED, decode_rotation_changed),
    (PITCH_CHANGED, decode_pitch_changed),
    (MAP_CLICK, decode_map_click),
    (OBJECT_CLICK, decode_object_click),
    (CLUSTER_CLICK, decode_cluster_click),
    (CAR_ROUTE_COMPLETION, decode_car_route_completion),
];

/// A validated engine event.
#[derive(Debug)]
pub enum BridgeMessage {
    CenterChanged(Coordinate),
    ZoomChanged(f64),
    RotationChanged(f64),
    PitchChanged(f64),
    MapClick(MapClickEvent),
    ObjectClick(String),
    ClusterClick(ClusterClickEvent),
    CarRouteCompletion(RouteCompletion),
}

impl BridgeMessage {
    /// Validate a raw message body and decode it.
    ///
    /// Any shape mismatch, including an unknown `type`, is returned as
    /// `MapGlError::ProtocolViolation`. Nothing is read from the body before
    /// its shape has been checked.
    pub fn decode(body: &Value) -> Result<Self> {
        let envelope = body
            .as_object()
            .ok_or_else(|| violation("message body is not an object"))?;
        let kind = envelope
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| violation("message has no string `type`"))?;
        let decode = DECODERS
            .iter()
            .find_map(|(name, decode)| (*name == kind).then_some(decode))
            .ok_or_else(|| violation(format!("unknown message type `{kind}`")))?;
        decode(envelope)
    }

    /// Wire name of this message's type.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CenterChanged(_) => CENTER_CHANGED,
            Self::ZoomChanged(_) => ZOOM_CHANGED,
            Self::RotationChanged(_) => ROTATION_CHANGED,
            Self::PitchChanged(_) => PITCH_CHANGED,
            Self::MapClick(_) => MAP_CLICK,
            Self::ObjectClick(_) => OBJECT_CLICK,
            Self::ClusterClick(_) => CLUSTER_CLICK,
            Self::CarRouteCompletion(_) => CAR_ROUTE_COMPLETION,
        }
    }

    /// Hand the event to the matching delegate callback.
    pub fn deliver(self, delegate: &dyn MapEventDelegate) {
        match self {
            Self::CenterChanged(center) => delegate.map_center_did_change(center),
            Self::ZoomChanged(zoom) => delegate.map_zoom_did_change(zoom),
            Self::RotationChanged(rotation) => delegate.map_rotation_did_change(rotation),
            Self::PitchChanged(pitch) => delegate.map_pitch_did_change(pitch),
            Self::MapClick(event) => delegate.did_click_map(event),
            Self::ObjectClick(id) => delegate.did_click_object(&id),
            Self::ClusterClick(event) => delegate.did_click_cluster(event),
            Self::CarRouteCompletion(completion) => delegate.car_route_did_finish(completion),
        }
    }
}

fn violation(reason: impl Into<String>) -> MapGlError {
    MapGlError::ProtocolViolation(reason.into())
}

fn kind_of(envelope: &Envelope) -> &str {
    envelope.get("type").and_then(Value::as_str).unwrap_or_default()
}

fn value_of(envelope: &Envelope) -> Result<&Value> {
    envelope
        .get("value")
        .ok_or_else(|| violation(format!("`{}` has no `value`", kind_of(envelope))))
}

fn number(envelope: &Envelope) -> Result<f64> {
    value_of(envelope)?
        .as_f64()
        .ok_or_else(|| violation(format!("`{}` value is not a number", kind_of(envelope))))
}

fn decode_center_changed(envelope: &Envelope) -> Result<BridgeMessage> {
    Coordinate::from_lng_lat(value_of(envelope)?)
        .map(BridgeMessage::CenterChanged)
        .ok_or_else(|| violation("`centerChanged` value is not a [lng, lat] pair"))
}

fn decode_zoom_changed(envelope: &Envelope) -> Result<BridgeMessage> {
    number(envelope).map(BridgeMessage::ZoomChanged)
}

fn decode_rotation_changed(envelope: &Envelope) -> Result<BridgeMessage> {
    number(envelope).map(BridgeMessage::RotationChanged)
}

fn decode_pitch_changed(envelope: &Envelope) -> Result<BridgeMessage> {
    number(envelope).map(BridgeMessage::PitchChanged)
}

fn decode_map_click(envelope: &Envelope) -> Result<BridgeMessage> {
    let encoded = value_of(envelope)?
        .as_str()
        .ok_or_else(|| violation("`mapClick` value is not a string"))?;
    MapClickEvent::from_json_str(encoded)
        .map(BridgeMessage::MapClick)
        .ok_or_else(|| violation(format!("`mapClick` event is malformed: {encoded}")))
}

fn decode_object_click(envelope: &Envelope) -> Result<BridgeMessage> {
    value_of(envelope)?
        .as_str()
        .map(|id| BridgeMessage::ObjectClick(id.to_owned()))
        .ok_or_else(|| violation("`objectClick` value is not a string id"))
}

/// `value` is either one marker object or a list of them. Both become a
/// list of ids; a member without an id rejects the whole message.
fn decode_cluster_click(envelope: &Envelope) -> Result<BridgeMessage> {
    let cluster_id = envelope
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| violation("`clusterClick` has no string cluster `id`"))?;

    let marker_ids = match value_of(envelope)? {
        marker @ Value::Object(_) => vec![marker_id(marker)?],
        Value::Array(markers) => markers.iter().map(marker_id).collect::<Result<_>>()?,
        _ => {
            return Err(violation(
                "`clusterClick` value is neither a marker nor a marker list",
            ));
        }
    };

    Ok(BridgeMessage::ClusterClick(ClusterClickEvent {
        cluster_id: cluster_id.to_owned(),
        marker_ids,
    }))
}

fn marker_id(marker: &Value) -> Result<String> {
    marker
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| violation("`clusterClick` marker has no string `id`"))
}

fn decode_car_route_completion(envelope: &Envelope) -> Result<BridgeMessage> {
    let data = value_of(envelope)?
        .as_object()
        .ok_or_else(|| violation("`carRouteCompletion` value is not an object"))?;
    let field = |key: &str| {
        data.get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| violation(format!("`carRouteCompletion` has no string `{key}`")))
    };
    let direction_id = field("directionId")?;
    let completion_id = field("completionId")?;
    let error = field("error")?;
    Ok(BridgeMessage::CarRouteCompletion(RouteCompletion::new(
        direction_id.to_owned(),
        completion_id.to_owned(),
        error,
    )))
}
