// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Native -> engine command encoder.
//
// Every public method builds exactly one `JsCommand`, submits it to the
// executor and returns immediately. Results come back through the
// completion on the host's UI thread. Nothing here blocks, retries, times
// out or can be cancelled once submitted.

use std::rc::Weak;

use mapgl_core::error::{MapGlError, Result};
use mapgl_core::{BridgeConfig, Coordinate, GeographicalBounds, MapOptions};
use serde_json::Value;
use tracing::{debug, instrument, trace, warn};

use crate::dispatch::{DispatchOutcome, MessageDispatcher};
use crate::js::JsCommand;
use crate::traits::{
    JsMapObject, MapEventDelegate, ScriptCallback, ScriptExecutor, ScriptResult,
};

/// Completion for commands whose only result is success or failure.
pub type Completion = Box<dyn FnOnce(Result<()>)>;

/// Two-way bridge between native code and the embedded map engine.
///
/// Holds the executor weakly: the host owns the WebView, and once it is
/// gone commands are dropped and their completions never run.
pub struct JsBridge {
    executor: Weak<dyn ScriptExecutor>,
    dispatcher: MessageDispatcher,
}

impl JsBridge {
    pub fn new(executor: Weak<dyn ScriptExecutor>) -> Self {
        Self::with_config(executor, BridgeConfig::default())
    }

    pub fn with_config(executor: Weak<dyn ScriptExecutor>, config: BridgeConfig) -> Self {
        Self {
            executor,
            dispatcher: MessageDispatcher::new(config),
        }
    }

    // -- Inbound --------------------------------------------------------

    pub fn dispatcher(&self) -> &MessageDispatcher {
        &self.dispatcher
    }

    pub fn set_delegate(&self, delegate: Weak<dyn MapEventDelegate>) {
        self.dispatcher.set_delegate(delegate);
    }

    /// Forward a message the engine posted to one of the bridge's handlers.
    /// See [`MessageDispatcher::handle_script_message`].
    pub fn handle_script_message(&self, handler: &str, body: &Value) -> Result<DispatchOutcome> {
        self.dispatcher.handle_script_message(handler, body)
    }

    // -- Lifecycle ------------------------------------------------------

    /// Create the engine-side map. The host must call this once per page.
    #[instrument(skip_all)]
    pub fn initialize_map(&self, options: &MapOptions, completion: Option<Completion>) {
        self.run(JsCommand::window("initializeMap").arg(options), completion);
    }

    /// Tell the engine its container was resized.
    pub fn invalidate_size(&self, completion: Option<Completion>) {
        self.run(JsCommand::map("invalidateSize"), completion);
    }

    pub fn fetch_geographical_bounds(
        &self,
        completion: impl FnOnce(Result<GeographicalBounds>) + 'static,
    ) {
        self.query(
            JsCommand::map("getBounds"),
            GeographicalBounds::from_value,
            completion,
        );
    }

    // -- Camera ---------------------------------------------------------

    pub fn fetch_map_center(&self, completion: impl FnOnce(Result<Coordinate>) + 'static) {
        self.query(
            JsCommand::map("getCenter"),
            Coordinate::from_lng_lat,
            completion,
        );
    }

    pub fn set_map_center(&self, center: Coordinate, completion: Option<Completion>) {
        self.run(JsCommand::map("setCenter").arg(center), completion);
    }

    pub fn fetch_map_zoom(&self, completion: impl FnOnce(Result<f64>) + 'static) {
        self.query(JsCommand::map("getZoom"), Value::as_f64, completion);
    }

    pub fn set_map_zoom(&self, zoom: f64, completion: Option<Completion>) {
        self.run(JsCommand::map("setZoom").arg(zoom), completion);
    }

    pub fn set_map_max_zoom(&self, max_zoom: f64, completion: Option<Completion>) {
        self.run(JsCommand::map("setMaxZoom").arg(max_zoom), completion);
    }

    pub fn set_map_min_zoom(&self, min_zoom: f64, completion: Option<Completion>) {
        self.run(JsCommand::map("setMinZoom").arg(min_zoom), completion);
    }

    pub fn fetch_map_rotation(&self, completion: impl FnOnce(Result<f64>) + 'static) {
        self.query(JsCommand::map("getRotation"), Value::as_f64, completion);
    }

    pub fn set_map_rotation(&self, rotation: f64, completion: Option<Completion>) {
        self.run(JsCommand::map("setRotation").arg(rotation), completion);
    }

    pub fn fetch_map_pitch(&self, completion: impl FnOnce(Result<f64>) + 'static) {
        self.query(JsCommand::map("getPitch"), Value::as_f64, completion);
    }

    pub fn set_map_pitch(&self, pitch: f64, completion: Option<Completion>) {
        self.run(JsCommand::map("setPitch").arg(pitch), completion);
    }

    pub fn set_map_max_pitch(&self, max_pitch: f64, completion: Option<Completion>) {
        self.run(JsCommand::map("setMaxPitch").arg(max_pitch), completion);
    }

    pub fn set_map_min_pitch(&self, min_pitch: f64, completion: Option<Completion>) {
        self.run(JsCommand::map("setMinPitch").arg(min_pitch), completion);
    }

    // -- Objects --------------------------------------------------------

    /// Place `object` on the map using the script the object produces.
    pub fn add(&self, object: &dyn JsMapObject, completion: Option<Completion>) {
        debug!(object_id = object.id(), "adding map object");
        self.evaluate_js(&object.create_js_code(), completion);
    }

    pub fn destroy(&self, object: &dyn JsMapObject, completion: Option<Completion>) {
        debug!(object_id = object.id(), "destroying map object");
        self.evaluate_js(&object.destroy_js_code(), completion);
    }

    /// Replace the engine's selection with `object_ids`, in order.
    pub fn set_selected_objects(&self, object_ids: &[String], completion: Option<Completion>) {
        self.run(
            JsCommand::window("setSelectedObjects").arg(object_ids),
            completion,
        );
    }

    // -- Primitives -----------------------------------------------------

    /// Run raw script, discarding its value. Every command above ends here
    /// or in [`Self::query`].
    pub fn evaluate_js(&self, script: &str, completion: Option<Completion>) {
        self.submit(
            script,
            Box::new(move |result: ScriptResult| {
                if let Err(err) = &result {
                    warn!(%err, "script evaluation failed");
                }
                if let Some(completion) = completion {
                    completion(result.map(|_| ()));
                }
            }),
        );
    }

    fn run(&self, command: JsCommand, completion: Option<Completion>) {
        trace!(method = command.method(), "running command");
        self.evaluate_js(&command.to_string(), completion);
    }

    /// Run a zero-argument getter and decode its value. A value of the
    /// wrong shape is reported as `MapGlError::Parsing`, never passed on.
    fn query<T: 'static>(
        &self,
        command: JsCommand,
        decode: fn(&Value) -> Option<T>,
        completion: impl FnOnce(Result<T>) + 'static,
    ) {
        let method = command.method();
        self.submit(
            &command.to_string(),
            Box::new(move |result: ScriptResult| {
                let decoded = result.and_then(|value| {
                    decode(&value).ok_or_else(|| {
                        warn!(method, %value, "unexpected query result shape");
                        MapGlError::Parsing
                    })
                });
                completion(decoded);
            }),
        );
    }

    fn submit(&self, script: &str, callback: ScriptCallback) {
        match self.executor.upgrade() {
            Some(executor) => executor.evaluate_javascript(script, callback),
            None => warn!("script executor is gone; command dropped"),
        }
    }
}
