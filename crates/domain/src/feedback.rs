//! Transient feedback elements
//!
//! Every node the client inserts into a form carries the [`TRANSIENT_CLASS`]
//! marker and is cleared at the start of the next submission. The class names
//! match the dashboard stylesheet (Foundation alerts, Font Awesome spinner).

/// Marker class for nodes removed on the next submission.
pub const TRANSIENT_CLASS: &str = "temporary";

/// Classes of the in-progress spinner.
pub const INDICATOR_CLASSES: &str = "temporary fa fa-circle-o-notch fa-spin";

/// Classes of the inline error banner.
pub const ALERT_CLASSES: &str = "temporary alert-box alert";

/// Attribute Foundation uses to make an alert dismissible.
pub const ALERT_DATA_ATTRIBUTE: &str = "data-alert";

/// A transient node the client can insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Spinner shown while a request is in flight
    Indicator,
    /// Dismissible error banner; the message is text content, never markup
    Alert { message: String },
}

impl Feedback {
    pub fn alert(message: impl Into<String>) -> Self {
        Self::Alert {
            message: message.into(),
        }
    }

    pub fn tag_name(&self) -> &'static str {
        match self {
            Feedback::Indicator => "i",
            Feedback::Alert { .. } => "div",
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Feedback::Indicator => INDICATOR_CLASSES,
            Feedback::Alert { .. } => ALERT_CLASSES,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Feedback::Indicator => None,
            Feedback::Alert { message } => Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_feedback_node_is_transient() {
        for feedback in [Feedback::Indicator, Feedback::alert("x")] {
            assert!(feedback
                .class_name()
                .split_whitespace()
                .any(|c| c == TRANSIENT_CLASS));
        }
    }

    #[test]
    fn indicator_has_no_text() {
        assert_eq!(Feedback::Indicator.text(), None);
        assert_eq!(Feedback::Indicator.tag_name(), "i");
    }
}
