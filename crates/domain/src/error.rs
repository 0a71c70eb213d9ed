//! Error types for the submission lifecycle
//!
//! Two kinds of failure reach the user, both rendered inline in the form:
//! an application error signalled by the server inside a structured body, and
//! a transport error where no structured body could be obtained at all.
//!
//! The `Display` output of each variant is exactly the text placed in the
//! error banner.

use thiserror::Error;

/// A request that failed before a structured response could be read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request never produced an HTTP response (offline, DNS, CORS, ...)
    #[error("error: {0}")]
    Network(String),

    /// Non-2xx status without a structured body
    #[error("{code}: {reason}")]
    Status { code: u16, reason: String },

    /// 2xx status whose body is not a structured response
    #[error("parsererror: {0}")]
    Malformed(String),

    /// The configured request timeout elapsed
    #[error("timeout: no response after {0} ms")]
    Timeout(u32),
}

impl TransportError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a status error, falling back to a generic reason when the
    /// server (or an HTTP/2 connection) supplies an empty status text.
    pub fn status(code: u16, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        let reason = if reason.trim().is_empty() {
            default_reason(code).to_string()
        } else {
            reason
        };
        Self::Status { code, reason }
    }

    /// Create a malformed-body error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}

fn default_reason(code: u16) -> &'static str {
    match code {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        409 => "Conflict",
        413 => "Payload Too Large",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        400..=499 => "Client Error",
        500..=599 => "Server Error",
        _ => "Unexpected Status",
    }
}

/// Any failure a submission can end in.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The server answered with a structured body carrying `error`
    #[error("{0}")]
    Application(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The redirect target was received but the page could not leave
    #[error("navigation failed: {0}")]
    Navigation(String),
}

impl SubmissionError {
    pub fn application(msg: impl Into<String>) -> Self {
        Self::Application(msg.into())
    }

    /// Text shown in the inline banner.
    pub fn banner_text(&self) -> String {
        self.to_string()
    }

    pub fn navigation(msg: impl Into<String>) -> Self {
        Self::Navigation(msg.into())
    }

    /// The server answered and refused; anything else is a fault on the
    /// way there or back.
    pub fn is_application(&self) -> bool {
        matches!(self, Self::Application(_))
    }
}
