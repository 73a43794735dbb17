//! # Request Module
//!
//! Defines the unit of work flowing through the gated pipeline.
//!
//! ## Overview
//!
//! A [`Request`] is an opaque unit of work submitted to the crawl engine.
//! The gate never executes requests; it only reads their [`TrafficClass`],
//! sets the `dont_filter` flag when replaying them, and forwards them. The
//! traffic class is attached at request-creation time and switched over
//! exhaustively inside the gate, so routing decisions are visible in the
//! type rather than hidden in a mutable tag set.
//!
//! An [`Origin`] names the crawl context (spider/session) a request belongs
//! to. It is stored alongside queued requests so that each one can be
//! resubmitted to the correct context after a resume.

use http::Method;
use url::Url;

/// Classifies a request for gating purposes.
///
/// Control traffic (`LoginControl`, `CaptchaControl`) belongs to the login
/// exchange itself and is never queued or re-evaluated; gating it would
/// deadlock the exchange. `LoginFinal` marks the closing request of the
/// exchange: it bypasses the outbound admission check but its response still
/// flows through login evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficClass {
    /// Ordinary pipeline traffic, subject to gating.
    Ordinary,
    /// A request that is part of the login exchange (e.g. fetching the
    /// login form).
    LoginControl,
    /// A request that is part of a captcha exchange.
    CaptchaControl,
    /// The final request of the login exchange, whose response decides
    /// whether the login succeeded.
    LoginFinal,
}

impl TrafficClass {
    /// Returns `true` for traffic that passes through the gate untouched in
    /// both directions.
    pub fn is_exempt(&self) -> bool {
        matches!(self, TrafficClass::LoginControl | TrafficClass::CaptchaControl)
    }
}

/// A unit of work for the crawl engine.
#[derive(Debug, Clone)]
pub struct Request {
    /// The target URL.
    pub url: Url,
    /// The HTTP method.
    pub method: Method,
    /// Optional request body (e.g. a login form submission).
    pub body: Option<Vec<u8>>,
    /// Traffic classification, fixed at creation time.
    pub class: TrafficClass,
    /// When set, the engine must bypass duplicate suppression for this
    /// request. The gate sets this on every replayed or follow-up request.
    pub dont_filter: bool,
}

impl Request {
    /// Creates an ordinary GET request for the given URL.
    pub fn new(url: Url) -> Self {
        Request {
            url,
            method: Method::GET,
            body: None,
            class: TrafficClass::Ordinary,
            dont_filter: false,
        }
    }

    /// Sets the traffic class.
    pub fn with_class(mut self, class: TrafficClass) -> Self {
        self.class = class;
        self
    }

    /// Sets the HTTP method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Sets the request body.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Returns the fingerprint used by engines for duplicate suppression.
    pub fn fingerprint(&self) -> String {
        format!("{} {}", self.method, self.url)
    }
}

/// The crawl context a request belongs to.
///
/// Cheap to clone; engines use it to route resubmitted requests back to the
/// context that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    name: std::sync::Arc<str>,
}

impl Origin {
    /// Creates an origin with the given context name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Origin {
            name: std::sync::Arc::from(name.as_ref()),
        }
    }

    /// Returns the context name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
