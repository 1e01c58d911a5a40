// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the MapGL bridge.

use thiserror::Error;

/// Top-level error type for all bridge operations.
#[derive(Debug, Error)]
pub enum MapGlError {
    // -- Script engine --
    /// The embedded engine reported a failure while running a script.
    /// Executors put the engine's own message here untouched.
    #[error("script evaluation failed: {0}")]
    Script(String),

    /// A query result did not have the shape its decoder expects.
    #[error("Parsing error")]
    Parsing,

    /// The engine sent something the native side does not understand.
    /// Both sides ship together, so this is a bug, not a runtime condition.
    #[error("protocol violation: {0}")]
    ProtocolViolation(String),

    /// Error text reported by the engine for a finished route request.
    #[error("{0}")]
    Route(String),

    // -- Configuration --
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform --
    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, MapGlError>;
