//! A "prelude" for users of the `session-gate` crate.
//!
//! This prelude re-exports the most commonly used traits, structs, and
//! macros so that they can be easily imported.
//!
//! # Example
//!
//! ```
//! use session_gate::prelude::*;
//! ```

pub use crate::{
    // Core structs
    GateBuilder,
    GateFlow,
    LoginGate,
    // Core traits
    Authenticator,
    Engine,
    // Boundary types
    Credentials,
    GateError,
    LoginOutcome,
    LoginResult,
    Origin,
    Request,
    Response,
    TrafficClass,
    // Essential re-export for trait implementation
    async_trait,
};
