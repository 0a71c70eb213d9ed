//! Remote action panels.
//!
//! A panel carries a `data-url`; each time it opens, the client `GET`s that
//! URL and treats the answer like a form submission's: redirect, or show the
//! error inside the panel.

use std::sync::Arc;

use repodash_domain::{SubmissionError, SubmitOutcome};

use crate::application::services::outcome::apply_outcome;
use crate::ports::outbound::{FeedbackPort, HttpPort, NavigationPort};

/// Event fired by the dashboard's reveal modal when it opens.
pub const PANEL_OPENED_EVENT: &str = "opened";

#[derive(Clone)]
pub struct RemoteAction {
    url: String,
    panel: Arc<dyn FeedbackPort>,
    http: Arc<dyn HttpPort>,
    navigation: Arc<dyn NavigationPort>,
}

impl RemoteAction {
    pub fn new(
        url: impl Into<String>,
        panel: Arc<dyn FeedbackPort>,
        http: Arc<dyn HttpPort>,
        navigation: Arc<dyn NavigationPort>,
    ) -> Self {
        Self {
            url: url.into(),
            panel,
            http,
            navigation,
        }
    }

    /// Run the action once.
    pub async fn trigger(&self) -> Result<SubmitOutcome, SubmissionError> {
        self.panel.clear_transient();
        tracing::debug!(url = %self.url, "Triggering remote action");
        let result = self.http.get(&self.url).await;
        apply_outcome(self.panel.as_ref(), self.navigation.as_ref(), result, false)
    }
}
