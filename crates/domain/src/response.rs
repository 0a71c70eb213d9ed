//! Structured server responses
//!
//! The dashboard endpoints answer form posts with a small JSON object:
//!
//! ```json
//! { "success": "/repos/5" }
//! { "error": "Name already taken" }
//! ```
//!
//! [`StructuredResponse`] is the wire shape. [`SubmitOutcome`] is the
//! discriminated form the rest of the client branches on.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{SubmissionError, TransportError};

/// Wire shape of a structured response. Unknown keys are ignored and
/// non-string values for known keys are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredResponse {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

impl StructuredResponse {
    pub fn redirect(url: impl Into<String>) -> Self {
        Self {
            success: Some(url.into()),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: None,
            error: Some(message.into()),
        }
    }

    /// True when at least one recognized key carries a value.
    pub fn is_meaningful(&self) -> bool {
        self.success.is_some() || self.error.is_some()
    }

    /// Parse a response body. An empty body is an empty response.
    pub fn from_body(body: &str) -> Result<Self, TransportError> {
        if body.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(body).map_err(|e| TransportError::malformed(e.to_string()))
    }

    /// Classify a completed HTTP exchange.
    ///
    /// A 2xx body must parse as a structured response. A non-2xx answer still
    /// counts as structured when its body carries `success` or `error`; any
    /// other non-2xx answer is a transport failure with the status attached.
    pub fn from_http(status: u16, reason: &str, body: &str) -> Result<Self, TransportError> {
        if (200..300).contains(&status) {
            return Self::from_body(body);
        }
        match Self::from_body(body) {
            Ok(response) if response.is_meaningful() => Ok(response),
            _ => Err(TransportError::status(status, reason)),
        }
    }
}

/// What the client does once a structured response arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Navigate the page to the given URL. Terminal.
    Redirect(String),
    /// Show the message inline as a transient banner.
    Failure(String),
    /// Neither key present: no visible action.
    NoAction,
}

impl From<StructuredResponse> for SubmitOutcome {
    fn from(response: StructuredResponse) -> Self {
        // Navigation unloads the page, so a redirect wins over an error
        // carried in the same body.
        match (response.success, response.error) {
            (Some(url), _) => Self::Redirect(url),
            (None, Some(message)) => Self::Failure(message),
            (None, None) => Self::NoAction,
        }
    }
}

impl SubmitOutcome {
    /// Fold a transport result into an outcome-or-error.
    pub fn from_result(
        result: Result<StructuredResponse, TransportError>,
    ) -> Result<Self, SubmissionError> {
        let outcome = Self::from(result?);
        match outcome {
            Self::Failure(message) => Err(SubmissionError::Application(message)),
            other => Ok(other),
        }
    }

    /// Whether following this outcome unloads the page. A fragment-only
    /// target (`#saved`) scrolls in place and the form stays live.
    pub fn leaves_page(&self) -> bool {
        matches!(self, Self::Redirect(url) if !url.starts_with('#'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_becomes_redirect() {
        let response = StructuredResponse::from_body(r#"{"success": "/repos/5"}"#)
            .expect("valid body");
        assert_eq!(SubmitOutcome::from(response), SubmitOutcome::Redirect("/repos/5".into()));
    }

    #[test]
    fn error_becomes_failure() {
        let response = StructuredResponse::from_body(r#"{"error": "Name already taken"}"#)
            .expect("valid body");
        assert_eq!(
            SubmitOutcome::from(response),
            SubmitOutcome::Failure("Name already taken".into())
        );
    }

    #[test]
    fn redirect_wins_when_both_keys_are_present() {
        let response = StructuredResponse::from_body(r#"{"success": "/a", "error": "b"}"#)
            .expect("valid body");
        assert_eq!(SubmitOutcome::from(response), SubmitOutcome::Redirect("/a".into()));
    }

    #[test]
    fn empty_or_non_string_values_are_absent() {
        let response =
            StructuredResponse::from_body(r#"{"success": "", "error": false, "extra": 1}"#)
                .expect("valid body");
        assert!(!response.is_meaningful());
        assert_eq!(SubmitOutcome::from(response), SubmitOutcome::NoAction);
    }

    #[test]
    fn empty_body_is_no_action() {
        let response = StructuredResponse::from_http(200, "OK", "").expect("empty is fine");
        assert_eq!(SubmitOutcome::from(response), SubmitOutcome::NoAction);
    }

    #[test]
    fn unparsable_2xx_body_is_malformed() {
        let err = StructuredResponse::from_http(200, "OK", "<html>").expect_err("not json");
        assert!(matches!(err, TransportError::Malformed(_)));
    }

    #[test]
    fn non_2xx_without_structured_body_is_status_error() {
        let err = StructuredResponse::from_http(500, "Internal Server Error", "<h1>oops</h1>")
            .expect_err("server error");
        assert_eq!(err, TransportError::status(500, "Internal Server Error"));
    }

    #[test]
    fn non_2xx_with_structured_error_is_application_failure() {
        let result = StructuredResponse::from_http(409, "Conflict", r#"{"error": "exists"}"#);
        assert_eq!(
            SubmitOutcome::from_result(result),
            Err(SubmissionError::Application("exists".into()))
        );
    }

    #[test]
    fn from_result_passes_transport_errors_through() {
        let result = Err(TransportError::network("offline"));
        assert_eq!(
            SubmitOutcome::from_result(result),
            Err(SubmissionError::Transport(TransportError::network("offline")))
        );
    }

    #[test]
    fn only_non_fragment_redirects_leave_the_page() {
        assert!(SubmitOutcome::Redirect("/repos/5".into()).leaves_page());
        assert!(!SubmitOutcome::Redirect("#saved".into()).leaves_page());
        assert!(!SubmitOutcome::NoAction.leaves_page());
    }
}
