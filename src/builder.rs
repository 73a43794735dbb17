//! # Builder Module
//!
//! Provides the `GateBuilder`, a fluent API for constructing and configuring
//! `LoginGate` instances.
//!
//! ## Overview
//!
//! The builder wires the caller-supplied collaborators — the authenticator
//! and the engine — together with the credential source and the gate's
//! configuration, and validates the combination before handing back a gate.
//! A gate cannot be built without credentials: the capability interface is
//! checked at construction instead of probed at runtime.
//!
//! ## Example
//!
//! ```rust,ignore
//! use session_gate::{Credentials, GateBuilder};
//!
//! let gate = GateBuilder::new(SiteAuth, engine)
//!     .account_pool(vec![
//!         Credentials::new("alice", "p1"),
//!         Credentials::new("bob", "p2"),
//!     ])
//!     .max_attempts(5)
//!     .build()?;
//! ```

use crate::auth::{Authenticator, Credentials};
use crate::credentials::CredentialProvider;
use crate::engine::Engine;
use crate::error::GateError;
use crate::gate::LoginGate;
use std::sync::Arc;

/// Configuration for the gate's retry and resume behavior.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Whether exceeding the retry budget raises a fatal error (`true`) or
    /// silently drops the triggering response (`false`).
    pub fail_if_not_logged_in: bool,
    /// Ceiling on consecutive failed login attempts. `<= 0` disables the
    /// ceiling.
    pub max_attempts: i32,
    /// Enables response-inspection logging for failed checks.
    pub debug: bool,
    /// Disables automatic queue replay on success; the authenticator's
    /// continuation decides what happens next and the queue is discarded.
    pub dont_resume: bool,
    /// Whether the suspended queue is discarded when the retry budget is
    /// exhausted. By default it is left populated for operator inspection.
    pub discard_queue_on_failure: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        GateConfig {
            fail_if_not_logged_in: true,
            max_attempts: 10,
            debug: false,
            dont_resume: false,
            discard_queue_on_failure: false,
        }
    }
}

/// Fluent constructor for [`LoginGate`].
pub struct GateBuilder<A, E> {
    config: GateConfig,
    authenticator: A,
    engine: Arc<E>,
    credentials: Option<CredentialProvider>,
}

impl<A, E> GateBuilder<A, E>
where
    A: Authenticator,
    E: Engine,
{
    /// Creates a builder for the given authenticator and engine.
    pub fn new(authenticator: A, engine: Arc<E>) -> Self {
        GateBuilder {
            config: GateConfig::default(),
            authenticator,
            engine,
            credentials: None,
        }
    }

    /// Sets a fixed credential pair used for every attempt.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(CredentialProvider::Fixed(credentials));
        self
    }

    /// Sets an account pool drawn from uniformly at random per attempt.
    pub fn account_pool(mut self, accounts: Vec<Credentials>) -> Self {
        self.credentials = Some(CredentialProvider::Pool(accounts));
        self
    }

    /// Sets the ceiling on consecutive failed attempts. `<= 0` disables it.
    pub fn max_attempts(mut self, max_attempts: i32) -> Self {
        self.config.max_attempts = max_attempts;
        self
    }

    /// Sets whether exhausting the retry budget raises a fatal error.
    pub fn fail_if_not_logged_in(mut self, fail: bool) -> Self {
        self.config.fail_if_not_logged_in = fail;
        self
    }

    /// Enables response-inspection logging for failed checks.
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Disables automatic queue replay on success.
    pub fn dont_resume(mut self, dont_resume: bool) -> Self {
        self.config.dont_resume = dont_resume;
        self
    }

    /// Discards the suspended queue when the retry budget is exhausted.
    pub fn discard_queue_on_failure(mut self, discard: bool) -> Self {
        self.config.discard_queue_on_failure = discard;
        self
    }

    /// Builds the gate, validating the configuration.
    pub fn build(self) -> Result<LoginGate<A, E>, GateError> {
        let credentials = match self.credentials {
            Some(CredentialProvider::Fixed(pair)) => CredentialProvider::Fixed(pair),
            Some(CredentialProvider::Pool(accounts)) => CredentialProvider::pool(accounts)?,
            None => {
                return Err(GateError::Configuration(
                    "gate requires fixed credentials or an account pool".to_string(),
                ));
            }
        };

        Ok(LoginGate::new(
            self.authenticator,
            self.engine,
            credentials,
            self.config,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{LoginOutcome, LoginResult};
    use crate::error::GateError;
    use crate::request::{Origin, Request};
    use crate::response::Response;
    use async_trait::async_trait;

    struct NoopAuth;

    #[async_trait]
    impl Authenticator for NoopAuth {
        async fn check(&self, _response: &Response) -> LoginOutcome {
            LoginOutcome::Success
        }

        async fn login(
            &self,
            _response: &Response,
            _credentials: &Credentials,
        ) -> Result<LoginResult, GateError> {
            Err(GateError::LoginAction("noop".to_string()))
        }
    }

    struct NoopEngine;

    #[async_trait]
    impl Engine for NoopEngine {
        async fn submit(&self, _request: Request, _origin: &Origin) -> Result<(), GateError> {
            Ok(())
        }
    }

    #[test]
    fn build_requires_a_credential_source() {
        let result = GateBuilder::new(NoopAuth, Arc::new(NoopEngine)).build();
        assert!(matches!(result, Err(GateError::Configuration(_))));
    }

    #[test]
    fn build_rejects_an_empty_pool() {
        let result = GateBuilder::new(NoopAuth, Arc::new(NoopEngine))
            .account_pool(Vec::new())
            .build();
        assert!(matches!(result, Err(GateError::Configuration(_))));
    }

    #[test]
    fn build_accepts_fixed_credentials() {
        let result = GateBuilder::new(NoopAuth, Arc::new(NoopEngine))
            .credentials(Credentials::new("a", "p"))
            .max_attempts(3)
            .build();
        assert!(result.is_ok());
    }
}
