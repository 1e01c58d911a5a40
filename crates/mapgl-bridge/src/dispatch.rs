// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Routes script messages posted by the engine to the host's delegate.
//
// Dispatch is synchronous: a message is decoded and delivered before
// `handle_script_message` returns, so events reach the delegate in the order
// the host received them. The dispatcher keeps no state between messages.

use std::cell::RefCell;
use std::rc::Weak;

use mapgl_core::error::{MapGlError, Result};
use mapgl_core::{BridgeConfig, ViolationPolicy};
use serde_json::Value;
use tracing::{debug, error, instrument, trace};

use crate::message::BridgeMessage;
use crate::traits::MapEventDelegate;

/// What happened to a message that did not break the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Decoded and handed to the delegate.
    Delivered,
    /// Decoded, but no delegate is attached.
    NoDelegate,
    /// Not a map event: an engine error report or an unrelated handler.
    Ignored,
}

/// Decodes engine messages and forwards them to a weakly held delegate.
pub struct MessageDispatcher {
    delegate: RefCell<Option<Weak<dyn MapEventDelegate>>>,
    config: BridgeConfig,
}

impl MessageDispatcher {
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            delegate: RefCell::new(None),
            config,
        }
    }

    /// Attach the event receiver. The dispatcher never keeps it alive.
    pub fn set_delegate(&self, delegate: Weak<dyn MapEventDelegate>) {
        *self.delegate.borrow_mut() = Some(delegate);
    }

    pub fn clear_delegate(&self) {
        *self.delegate.borrow_mut() = None;
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Entry point for everything the engine posts, keyed by handler name.
    ///
    /// Protocol violations are reported according to the configured
    /// `ViolationPolicy` and then returned, so the caller can tell them apart
    /// from messages that were valid but needed no action.
    ///
    /// # Panics
    ///
    /// Panics on a protocol violation when the policy is `Panic`.
    #[instrument(skip(self, body))]
    pub fn handle_script_message(&self, handler: &str, body: &Value) -> Result<DispatchOutcome> {
        if handler == self.config.message_handler_name {
            self.handle_message(body)
        } else if handler == self.config.error_handler_name {
            error!(engine_error = %body, "map engine reported a script error");
            Ok(DispatchOutcome::Ignored)
        } else {
            debug!("message for unrelated handler ignored");
            Ok(DispatchOutcome::Ignored)
        }
    }

    /// Decode one map-event body and deliver it.
    ///
    /// Decoding happens even without a delegate so that protocol skew is
    /// caught regardless of whether anyone is listening.
    ///
    /// # Panics
    ///
    /// Panics on a protocol violation when the policy is `Panic`.
    pub fn handle_message(&self, body: &Value) -> Result<DispatchOutcome> {
        let outcome = self.deliver(body);
        if let Err(MapGlError::ProtocolViolation(reason)) = &outcome {
            self.report_violation(reason);
        }
        outcome
    }

    fn deliver(&self, body: &Value) -> Result<DispatchOutcome> {
        let message = BridgeMessage::decode(body)?;
        let kind = message.kind();

        let delegate = self.delegate.borrow().as_ref().and_then(Weak::upgrade);
        match delegate {
            Some(delegate) => {
                trace!(kind, "delivering map event");
                message.deliver(delegate.as_ref());
                Ok(DispatchOutcome::Delivered)
            }
            None => {
                trace!(kind, "no delegate attached; event dropped");
                Ok(DispatchOutcome::NoDelegate)
            }
        }
    }

    fn report_violation(&self, reason: &str) {
        error!(reason, "map engine protocol violation");
        if self.config.violation_policy == ViolationPolicy::Panic {
            panic!("map engine protocol violation: {reason}");
        }
    }
}
