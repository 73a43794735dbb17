//! # Gate Module
//!
//! Implements the pause/resume state machine guarding the pipeline during
//! re-authentication.
//!
//! ## Overview
//!
//! Every outbound request and every inbound response passes through the
//! [`LoginGate`] first. The gate classifies traffic, decides whether to
//! admit, park, or reroute it, and on responses evaluates login status and
//! transitions state accordingly.
//!
//! ## Key Components
//!
//! - **LoginGate**: the orchestrator owning the paused/active flag, the
//!   suspended-request queue, and the attempt counter
//! - **Completion Adapter**: normalizes the two shapes a login action may
//!   return into one "login attempt finished" event
//! - **GateFlow**: the verdict handed back to the pipeline for each item
//!
//! ## Architecture
//!
//! State lives in a single mutex-guarded `GateState`; each classification
//! and evaluation step holds the lock only for its own bookkeeping and
//! releases it before any call into the authenticator or the engine.
//! Deferred login completions are driven by a spawned Tokio task, so the
//! waiting side never blocks the pipeline.

mod completion;
mod core;

pub use self::core::{GateFlow, LoginGate};
