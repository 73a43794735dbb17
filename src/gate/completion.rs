//! Contains the completion adapter for login attempts.
//!
//! A login action may hand back its follow-up request synchronously, or as
//! a deferred handle that resolves later. Both shapes must feed the same
//! state machine: the follow-up is tagged as final login traffic, marked to
//! bypass duplicate suppression, and put back on the wire — directly when
//! immediate, via explicit resubmission to the engine when deferred (there
//! is no synchronous return path for a value that does not exist yet).
//!
//! Deferred failures are reported and not retried; a caller that wants
//! retry-on-async-failure implements it inside the login action.

use crate::auth::LoginResult;
use crate::engine::Engine;
use crate::request::{Origin, Request, TrafficClass};
use log::{debug, error};
use std::sync::Arc;

/// How a routed login attempt will finish.
pub(crate) enum LoginCompletion {
    /// A follow-up request to admit into the pipeline directly.
    FollowUp(Box<Request>),
    /// The follow-up will be resubmitted by a spawned task once the
    /// deferred handle resolves.
    Deferred,
}

/// Routes a login action's result into one uniform completion.
pub(crate) fn route<E: Engine>(
    result: LoginResult,
    engine: &Arc<E>,
    origin: &Origin,
) -> LoginCompletion {
    match result {
        LoginResult::Immediate(mut request) => {
            prepare_follow_up(&mut request);
            debug!(
                "login action returned immediate follow-up: {}",
                request.url
            );
            LoginCompletion::FollowUp(request)
        }
        LoginResult::Deferred(future) => {
            let engine = Arc::clone(engine);
            let origin = origin.clone();
            tokio::spawn(async move {
                match future.await {
                    Ok(mut request) => {
                        prepare_follow_up(&mut request);
                        debug!(
                            "deferred login resolved with follow-up: {}",
                            request.url
                        );
                        if let Err(e) = engine.submit(request, &origin).await {
                            error!("failed to submit deferred login follow-up: {e}");
                        }
                    }
                    Err(e) => {
                        error!("deferred login attempt failed, not retrying: {e}");
                    }
                }
            });
            LoginCompletion::Deferred
        }
    }
}

fn prepare_follow_up(request: &mut Request) {
    request.class = TrafficClass::LoginFinal;
    request.dont_filter = true;
}
