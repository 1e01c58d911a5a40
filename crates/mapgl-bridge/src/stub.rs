// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub executor for desktop/CI builds where no WebView is available.
//
// Every script fails with `PlatformUnavailable`. Real executors wrap the
// host's WebView and live in the host application.

use mapgl_core::error::MapGlError;

use crate::traits::{ScriptCallback, ScriptExecutor};

/// Executor that refuses every script.
pub struct StubExecutor;

impl ScriptExecutor for StubExecutor {
    fn evaluate_javascript(&self, _script: &str, callback: ScriptCallback) {
        tracing::warn!("ScriptExecutor::evaluate_javascript called on stub executor");
        callback(Err(MapGlError::PlatformUnavailable));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::bridge::JsBridge;

    #[test]
    fn stub_fails_every_command() {
        let executor: Rc<dyn ScriptExecutor> = Rc::new(StubExecutor);
        let bridge = JsBridge::new(Rc::downgrade(&executor));
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);

        bridge.fetch_map_zoom(move |result| *sink.borrow_mut() = Some(result));

        assert!(matches!(
            seen.borrow_mut().take(),
            Some(Err(MapGlError::PlatformUnavailable))
        ));
    }
}
