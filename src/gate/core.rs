//! The core gate state machine.
//!
//! This module defines the `LoginGate` struct, which owns the paused/active
//! flag, the suspended-request queue, and the attempt counter. It consumes
//! classified requests and responses, drives the credential selector and the
//! caller-supplied login action through the completion adapter, and decides
//! when to flush or discard the queue.
//!
//! The gate treats its state as a critical section: every step acquires the
//! state mutex for its own bookkeeping only and releases it before awaiting
//! the authenticator, the engine, or a deferred completion. The mutex guard
//! is not `Send`, so holding it across a suspension point does not compile.

use crate::attempts::{AttemptCounter, AttemptVerdict};
use crate::auth::{Authenticator, LoginOutcome};
use crate::builder::GateConfig;
use crate::credentials::CredentialProvider;
use crate::engine::Engine;
use crate::error::GateError;
use crate::gate::completion::{self, LoginCompletion};
use crate::liveness::{Liveness, LivenessGuard};
use crate::queue::SuspendedQueue;
use crate::request::{Origin, Request, TrafficClass};
use crate::response::Response;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, error, info, trace, warn};

/// The gate's verdict for one request or response.
#[derive(Debug)]
pub enum GateFlow<T> {
    /// Proceed to the normal pipeline step.
    Admit(T),
    /// The item was parked in the suspended queue; the pipeline step must
    /// fail fast for it and let the replay resubmit it after resume.
    Parked,
    /// The response was absorbed into the login exchange; admit this
    /// follow-up request into the pipeline in its place.
    FollowUp(Box<Request>),
    /// The item was absorbed with nothing to admit in its place (a deferred
    /// login is in flight, or the response was dropped by configuration).
    Absorbed,
}

struct GateState {
    paused: bool,
    attempts: AttemptCounter,
    queue: SuspendedQueue,
    // Held exactly while paused so the engine's idle loop keeps the crawl
    // alive for the parked requests it cannot see.
    pause_hold: Option<LivenessGuard>,
}

enum ResumePlan {
    Replay(Vec<(Request, Origin)>),
    Continuation,
    AlreadyActive,
}

/// The pause/resume state machine guarding a crawl pipeline during
/// re-authentication.
pub struct LoginGate<A, E> {
    authenticator: Arc<A>,
    engine: Arc<E>,
    credentials: CredentialProvider,
    config: GateConfig,
    liveness: Arc<Liveness>,
    state: Mutex<GateState>,
}

impl<A, E> LoginGate<A, E>
where
    A: Authenticator,
    E: Engine,
{
    pub(crate) fn new(
        authenticator: A,
        engine: Arc<E>,
        credentials: CredentialProvider,
        config: GateConfig,
    ) -> Self {
        let max_attempts = config.max_attempts;
        LoginGate {
            authenticator: Arc::new(authenticator),
            engine,
            credentials,
            config,
            liveness: Liveness::new(),
            state: Mutex::new(GateState {
                paused: false,
                attempts: AttemptCounter::new(max_attempts),
                queue: SuspendedQueue::new(),
                pause_hold: None,
            }),
        }
    }

    /// Returns the keep-alive handle engines poll in their idle loop.
    pub fn liveness(&self) -> Arc<Liveness> {
        Arc::clone(&self.liveness)
    }

    /// Checks whether the gate is currently paused.
    pub fn is_paused(&self) -> bool {
        self.state.lock().paused
    }

    /// Returns the number of requests parked in the suspended queue.
    pub fn queued(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// Returns the current consecutive-failure count.
    pub fn attempts(&self) -> u32 {
        self.state.lock().attempts.count()
    }

    /// Returns a reference to the injected authenticator.
    pub fn authenticator(&self) -> &A {
        &self.authenticator
    }

    /// Applies the admission check to an outbound request.
    ///
    /// Control traffic and final login traffic are always admitted
    /// untouched; ordinary traffic is admitted iff the gate is active, and
    /// parked otherwise.
    pub fn process_request(&self, request: Request, origin: &Origin) -> GateFlow<Request> {
        match request.class {
            TrafficClass::LoginControl | TrafficClass::CaptchaControl | TrafficClass::LoginFinal => {
                GateFlow::Admit(request)
            }
            TrafficClass::Ordinary => {
                let mut state = self.state.lock();
                if state.paused {
                    debug!("crawl paused, parking request: {}", request.url);
                    state.queue.enqueue(request, origin.clone());
                    GateFlow::Parked
                } else {
                    GateFlow::Admit(request)
                }
            }
        }
    }

    /// Evaluates an inbound response and transitions state accordingly.
    ///
    /// Control traffic passes through untouched. Ordinary responses arriving
    /// while paused are parked. Everything else is evaluated against the
    /// check predicate: success resumes the crawl if it was paused for a
    /// login, failure enters or extends the login exchange.
    pub async fn process_response(
        &self,
        response: Response,
        origin: &Origin,
    ) -> Result<GateFlow<Response>, GateError> {
        let class = response.request().class;
        if class.is_exempt() {
            trace!("control traffic passes through: {}", response.url);
            return Ok(GateFlow::Admit(response));
        }

        // The final login response must reach evaluation even while paused,
        // otherwise nothing can ever drive the resume.
        if class == TrafficClass::Ordinary {
            let mut state = self.state.lock();
            if state.paused {
                debug!("crawl paused, parking request: {}", response.request().url);
                let request = response.into_request();
                state.queue.enqueue(request, origin.clone());
                return Ok(GateFlow::Parked);
            }
        }

        match self.authenticator.check(&response).await {
            LoginOutcome::Success => self.handle_check_success(response, origin).await,
            LoginOutcome::Failure(reason) => {
                self.handle_check_failure(response, origin, reason).await
            }
        }
    }

    async fn handle_check_success(
        &self,
        response: Response,
        origin: &Origin,
    ) -> Result<GateFlow<Response>, GateError> {
        let plan = {
            let mut state = self.state.lock();
            if state.attempts.count() == 0 {
                trace!("logged in, nothing to recover: {}", response.url);
                return Ok(GateFlow::Admit(response));
            }
            info!("logged in after {} failed attempt(s)", state.attempts.count());
            state.attempts.reset();
            self.resume_locked(&mut state)
        };

        match plan {
            ResumePlan::AlreadyActive => {}
            ResumePlan::Replay(entries) => {
                info!("resuming crawl, replaying {} parked request(s)", entries.len());
                for (mut request, request_origin) in entries {
                    request.dont_filter = true;
                    if let Err(e) = self.engine.submit(request, &request_origin).await {
                        error!("failed to resubmit parked request: {e}");
                    }
                }
            }
            ResumePlan::Continuation => {
                let follow_ups = self.authenticator.on_success(&response).await;
                info!(
                    "resuming crawl via continuation with {} new request(s), queue discarded",
                    follow_ups.len()
                );
                for request in follow_ups {
                    if let Err(e) = self.engine.submit(request, origin).await {
                        error!("failed to submit continuation request: {e}");
                    }
                }
            }
        }

        Ok(GateFlow::Admit(response))
    }

    async fn handle_check_failure(
        &self,
        response: Response,
        origin: &Origin,
        reason: Option<String>,
    ) -> Result<GateFlow<Response>, GateError> {
        match reason {
            Some(reason) => warn!("not logged in: {reason}"),
            None => warn!("not logged in"),
        }
        if self.config.debug {
            debug!(
                "logged-out response from {} (status {}): {:.512}",
                response.url,
                response.status,
                response.text()
            );
        }

        let credentials = {
            let mut state = self.state.lock();
            if !state.paused {
                state.paused = true;
                state.pause_hold = Some(self.liveness.hold());
                info!("pausing crawl for login exchange");
            }
            // Only ordinary traffic is retried after the exchange; replaying
            // the exchange's own final request would resubmit a stale login.
            if response.request().class == TrafficClass::Ordinary {
                state.queue.enqueue(response.request().clone(), origin.clone());
            }

            match state.attempts.record_failure() {
                AttemptVerdict::Exhausted { attempts } => {
                    error!("max login attempts exceeded ({} tries)", attempts);
                    if self.config.discard_queue_on_failure {
                        warn!(
                            "discarding {} parked request(s) after exhaustion",
                            state.queue.len()
                        );
                        state.queue.discard();
                    }
                    if self.config.fail_if_not_logged_in {
                        return Err(GateError::AttemptsExhausted { attempts });
                    }
                    // The configured swallow: drop the response, stay paused.
                    return Ok(GateFlow::Absorbed);
                }
                AttemptVerdict::Retry { number } => {
                    info!("logging in (attempt {number})");
                    self.credentials.select()
                }
            }
        };

        let result = self
            .authenticator
            .login(&response, &credentials)
            .await?;

        match completion::route(result, &self.engine, origin) {
            LoginCompletion::FollowUp(request) => Ok(GateFlow::FollowUp(request)),
            LoginCompletion::Deferred => Ok(GateFlow::Absorbed),
        }
    }

    fn resume_locked(&self, state: &mut GateState) -> ResumePlan {
        if !state.paused {
            return ResumePlan::AlreadyActive;
        }
        state.paused = false;
        state.pause_hold = None;
        if self.config.dont_resume {
            state.queue.discard();
            ResumePlan::Continuation
        } else {
            ResumePlan::Replay(state.queue.flush())
        }
    }
}
