//! # session-gate
//!
//! A gating layer for web-crawling pipelines that transparently handles
//! session expiry and re-authentication.
//!
//! A crawl consists of many outstanding requests flowing to a response
//! handler; at any point the target site may silently invalidate the
//! session, making subsequent responses look logged out. The gate detects
//! this, suspends ordinary traffic, drives a login exchange (which may be
//! synchronous or asynchronous and may rotate credentials across attempts),
//! and resumes — replaying the requests that were in flight when the pause
//! began, in arrival order, without loss or duplication.
//!
//! ## Example
//!
//! ```rust,ignore
//! use session_gate::{Credentials, GateBuilder, GateFlow, Origin};
//!
//! let origin = Origin::new("catalog-spider");
//! let gate = GateBuilder::new(SiteAuth, engine.clone())
//!     .account_pool(vec![
//!         Credentials::new("alice", "p1"),
//!         Credentials::new("bob", "p2"),
//!     ])
//!     .max_attempts(5)
//!     .build()?;
//!
//! // Outbound: every request passes the admission check first.
//! match gate.process_request(request, &origin) {
//!     GateFlow::Admit(request) => engine.submit(request, &origin).await?,
//!     GateFlow::Parked => { /* fail fast; replayed after resume */ }
//!     _ => unreachable!("requests are admitted or parked"),
//! }
//!
//! // Inbound: every response is evaluated before the handler sees it.
//! match gate.process_response(response, &origin).await? {
//!     GateFlow::Admit(response) => handle(response),
//!     GateFlow::FollowUp(login_request) => engine.submit(*login_request, &origin).await?,
//!     GateFlow::Parked | GateFlow::Absorbed => {}
//! }
//! ```
//!
//! The engine's idle loop should poll [`LoginGate::liveness`] and keep the
//! crawl alive while the gate is paused.

pub mod attempts;
pub mod auth;
pub mod builder;
pub mod credentials;
pub mod engine;
pub mod error;
pub mod gate;
pub mod liveness;
pub mod prelude;
pub mod queue;
pub mod request;
pub mod response;

pub use attempts::{AttemptCounter, AttemptVerdict};
pub use auth::{Authenticator, Credentials, LoginOutcome, LoginResult};
pub use builder::{GateBuilder, GateConfig};
pub use credentials::CredentialProvider;
pub use engine::Engine;
pub use error::GateError;
pub use gate::{GateFlow, LoginGate};
pub use liveness::{Liveness, LivenessGuard};
pub use queue::SuspendedQueue;
pub use request::{Origin, Request, TrafficClass};
pub use response::Response;

pub use async_trait::async_trait;
pub use tokio;
