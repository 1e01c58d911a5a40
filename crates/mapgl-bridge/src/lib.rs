// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! MapGL bridge: the native side of a WebView-hosted map engine.
//!
//! Outbound, [`JsBridge`] turns typed map operations into script
//! invocations and runs them through a host-supplied [`ScriptExecutor`].
//! Inbound, [`MessageDispatcher`] validates the messages the engine posts
//! back and forwards them to a [`MapEventDelegate`].
//!
//! Everything here runs on the host's UI thread. The bridge never owns the
//! executor or the delegate; both are held through `Weak` handles.

pub mod bridge;
pub mod dispatch;
pub mod js;
pub mod message;
pub mod objects;
pub mod stub;
pub mod traits;

#[cfg(test)]
mod testing;

pub use bridge::{Completion, JsBridge};
pub use dispatch::{DispatchOutcome, MessageDispatcher};
pub use message::BridgeMessage;
pub use stub::StubExecutor;
pub use traits::{JsMapObject, MapEventDelegate, ScriptCallback, ScriptExecutor, ScriptResult};
