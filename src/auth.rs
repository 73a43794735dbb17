//! # Authenticator Module
//!
//! Defines the capability interface the gate depends on for site-specific
//! login behavior.
//!
//! ## Overview
//!
//! The gate itself never decides *how* to log in. Implementors supply an
//! [`Authenticator`] at construction time: a check predicate that evaluates
//! whether a response looks logged in, a login action that produces either
//! an immediately usable follow-up request or a deferred one, and an
//! optional continuation invoked with the successful login response when
//! automatic replay is disabled.
//!
//! ## Example
//!
//! ```rust,ignore
//! use session_gate::{Authenticator, Credentials, LoginOutcome, LoginResult, Request, Response};
//! use session_gate::GateError;
//! use async_trait::async_trait;
//! use http::Method;
//!
//! struct SiteAuth;
//!
//! #[async_trait]
//! impl Authenticator for SiteAuth {
//!     async fn check(&self, response: &Response) -> LoginOutcome {
//!         if response.text().contains("Sign out") {
//!             LoginOutcome::Success
//!         } else {
//!             LoginOutcome::failure("session cookie rejected")
//!         }
//!     }
//!
//!     async fn login(
//!         &self,
//!         response: &Response,
//!         credentials: &Credentials,
//!     ) -> Result<LoginResult, GateError> {
//!         let form = format!(
//!             "user={}&pass={}",
//!             credentials.username, credentials.password
//!         );
//!         let request = Request::new(response.url.join("/login").unwrap())
//!             .with_method(Method::POST)
//!             .with_body(form);
//!         Ok(LoginResult::Immediate(Box::new(request)))
//!     }
//! }
//! ```

use crate::error::GateError;
use crate::request::Request;
use crate::response::Response;
use async_trait::async_trait;
use futures_util::future::BoxFuture;

/// A username/password pair used for a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Creates a credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// The result of evaluating a response for authenticated status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The response looks logged in.
    Success,
    /// The response looks logged out, optionally with a reason from the
    /// check predicate.
    Failure(Option<String>),
}

impl LoginOutcome {
    /// Creates a failure outcome carrying a reason.
    pub fn failure(reason: impl Into<String>) -> Self {
        LoginOutcome::Failure(Some(reason.into()))
    }

    /// Returns `true` for [`LoginOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success)
    }
}

/// What a login action hands back to the gate.
///
/// The two completion styles feed the same state machine: an `Immediate`
/// follow-up request is admitted into the pipeline directly, while a
/// `Deferred` one is resubmitted to the engine once the future resolves.
/// The contract admits exactly these shapes; there is no third case for the
/// gate to guess about.
pub enum LoginResult {
    /// A follow-up request available synchronously.
    Immediate(Box<Request>),
    /// A handle to a follow-up request that becomes available later.
    Deferred(BoxFuture<'static, Result<Request, GateError>>),
}

impl std::fmt::Debug for LoginResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginResult::Immediate(request) => {
                f.debug_tuple("Immediate").field(request).finish()
            }
            LoginResult::Deferred(_) => f.debug_tuple("Deferred").field(&"..").finish(),
        }
    }
}

/// Site-specific login behavior, injected into the gate at construction.
#[async_trait]
pub trait Authenticator: Send + Sync + 'static {
    /// Evaluates whether a response looks logged in.
    async fn check(&self, response: &Response) -> LoginOutcome;

    /// Performs a login attempt against the given response with the given
    /// credentials.
    ///
    /// Must return either an immediately usable follow-up request or a
    /// deferred handle to one; the follow-up's response is what the gate
    /// evaluates to decide whether the attempt succeeded.
    async fn login(
        &self,
        response: &Response,
        credentials: &Credentials,
    ) -> Result<LoginResult, GateError>;

    /// Continuation invoked with the successful login response when
    /// automatic queue replay is disabled (`dont_resume`).
    ///
    /// The returned requests are submitted to the engine in place of the
    /// discarded queue. The default yields nothing.
    async fn on_success(&self, _response: &Response) -> Vec<Request> {
        Vec::new()
    }
}
