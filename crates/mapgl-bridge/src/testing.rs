// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory executor and delegate shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use mapgl_core::{ClusterClickEvent, Coordinate, MapClickEvent, RouteCompletion};
use serde_json::Value;

use crate::traits::{MapEventDelegate, ScriptCallback, ScriptExecutor, ScriptResult};

/// Records every script and answers with queued results (default `null`).
#[derive(Default)]
pub(crate) struct RecordingExecutor {
    scripts: RefCell<Vec<String>>,
    responses: RefCell<VecDeque<ScriptResult>>,
}

impl RecordingExecutor {
    pub(crate) fn respond_with(&self, result: ScriptResult) {
        self.responses.borrow_mut().push_back(result);
    }

    pub(crate) fn scripts(&self) -> Vec<String> {
        self.scripts.borrow().clone()
    }

    pub(crate) fn last_script(&self) -> Option<String> {
        self.scripts.borrow().last().cloned()
    }
}

impl ScriptExecutor for RecordingExecutor {
    fn evaluate_javascript(&self, script: &str, callback: ScriptCallback) {
        self.scripts.borrow_mut().push(script.to_owned());
        let response = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(Value::Null));
        callback(response);
    }
}

/// Flattened delegate call, comparable in assertions.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Event {
    Center(Coordinate),
    Zoom(f64),
    Rotation(f64),
    Pitch(f64),
    MapClick(MapClickEvent),
    Object(String),
    Cluster(String, Vec<String>),
    Route(String, String, Option<String>),
}

#[derive(Default)]
pub(crate) struct RecordingDelegate {
    events: RefCell<Vec<Event>>,
}

impl RecordingDelegate {
    pub(crate) fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

impl MapEventDelegate for RecordingDelegate {
    fn map_center_did_change(&self, center: Coordinate) {
        self.push(Event::Center(center));
    }

    fn map_zoom_did_change(&self, zoom: f64) {
        self.push(Event::Zoom(zoom));
    }

    fn map_rotation_did_change(&self, rotation: f64) {
        self.push(Event::Rotation(rotation));
    }

    fn map_pitch_did_change(&self, pitch: f64) {
        self.push(Event::Pitch(pitch));
    }

    fn did_click_map(&self, event: MapClickEvent) {
        self.push(Event::MapClick(event));
    }

    fn did_click_object(&self, object_id: &str) {
        self.push(Event::Object(object_id.to_owned()));
    }

    fn did_click_cluster(&self, event: ClusterClickEvent) {
        self.push(Event::Cluster(event.cluster_id, event.marker_ids));
    }

    fn car_route_did_finish(&self, completion: RouteCompletion) {
        self.push(Event::Route(
            completion.direction_id,
            completion.completion_id,
            completion.error.map(|e| e.to_string()),
        ));
    }
}
