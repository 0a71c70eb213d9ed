//! Feedback Port - transient nodes inside a form or panel

use repodash_domain::Feedback;

/// Surface that can show and clear transient feedback.
///
/// Every node appended through this port is transient: the next call to
/// [`clear_transient`](FeedbackPort::clear_transient) removes it.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait FeedbackPort: Send + Sync {
    /// Remove every transient node (spinners and banners).
    fn clear_transient(&self);

    /// Append a transient node.
    fn show(&self, feedback: Feedback);

    /// Remove the in-progress indicator only, keeping banners.
    fn remove_indicator(&self);
}
