//! Response type carried back through the gate.
//!
//! A [`Response`] pairs the downloaded payload with the [`Request`] that
//! produced it, so the gate can classify a response by its request's traffic
//! class and park the request again when the pipeline is paused.

use crate::request::Request;
use http::StatusCode;
use std::borrow::Cow;
use url::Url;

/// A downloaded response, as delivered by the engine.
#[derive(Debug, Clone)]
pub struct Response {
    /// The final URL (after redirects).
    pub url: Url,
    /// The HTTP status.
    pub status: StatusCode,
    /// The raw body.
    pub body: Vec<u8>,
    request: Box<Request>,
}

impl Response {
    /// Creates a response for the given request.
    pub fn new(url: Url, status: StatusCode, body: Vec<u8>, request: Request) -> Self {
        Response {
            url,
            status,
            body,
            request: Box::new(request),
        }
    }

    /// Returns the request that produced this response.
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// Consumes the response and returns the request that produced it.
    pub fn into_request(self) -> Request {
        *self.request
    }

    /// Returns the body decoded as UTF-8, lossily.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
