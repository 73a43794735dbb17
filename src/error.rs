//! Error types for the gate.
//!
//! Transient login failures are not errors: they are carried as
//! [`LoginOutcome::Failure`](crate::auth::LoginOutcome) and recovered by
//! retrying. `GateError` covers the conditions that must reach the engine's
//! own error-handling path: misconfiguration, an exhausted retry budget, a
//! failed login action, and a rejected resubmission.

use thiserror::Error;

/// Errors surfaced by the gate to the caller or the engine.
#[derive(Debug, Error)]
pub enum GateError {
    /// The gate was assembled with invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The retry budget was exceeded. The gate stays paused; queued
    /// requests are neither dropped nor retried without operator
    /// intervention.
    #[error("max login attempts exceeded after {attempts} tries")]
    AttemptsExhausted { attempts: u32 },

    /// The caller-supplied login action failed outright.
    #[error("login action failed: {0}")]
    LoginAction(String),

    /// The engine rejected a resubmitted request.
    #[error("engine rejected request: {0}")]
    Engine(String),
}
