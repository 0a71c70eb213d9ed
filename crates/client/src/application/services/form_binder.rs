//! Form Submission Binder
//!
//! Turns a form's submit events into asynchronous POSTs with transient
//! feedback. A submission has two halves:
//!
//! 1. [`FormBinder::begin`] runs synchronously when the submit event arrives:
//!    it clears stale feedback, shows the indicator, and captures the payload.
//! 2. [`FormBinder::complete`] sends the request and applies the outcome once
//!    the response settles.
//!
//! Splitting them keeps the payload pinned to the moment of submission and
//! lets the double-submit guard run before any request leaves.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::Arc;

use futures_util::{Stream, StreamExt};
use repodash_domain::{
    Feedback, FormPayload, StructuredResponse, SubmissionError, SubmissionState, SubmitOutcome,
    TransportError,
};

use crate::application::config::{ClientConfig, DoubleSubmitPolicy};
use crate::application::services::outcome::apply_outcome;
use crate::ports::outbound::{FeedbackPort, FormPort, HttpPort, NavigationPort};

/// Future handed to the executor for each accepted submission.
pub type SubmissionTask = Pin<Box<dyn Future<Output = ()> + 'static>>;

/// A submission that passed the synchronous phase and is ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub url: String,
    pub payload: FormPayload,
}

/// Binds one form to AJAX submission.
///
/// Cheap to clone; clones share the same lifecycle state.
#[derive(Clone)]
pub struct FormBinder {
    form: Arc<dyn FormPort>,
    feedback: Arc<dyn FeedbackPort>,
    http: Arc<dyn HttpPort>,
    navigation: Arc<dyn NavigationPort>,
    policy: DoubleSubmitPolicy,
    disable_controls: bool,
    state: Arc<AtomicU8>,
    in_flight: Arc<AtomicUsize>,
}

impl FormBinder {
    pub fn new(
        form: Arc<dyn FormPort>,
        feedback: Arc<dyn FeedbackPort>,
        http: Arc<dyn HttpPort>,
        navigation: Arc<dyn NavigationPort>,
        config: &ClientConfig,
    ) -> Self {
        Self {
            form,
            feedback,
            http,
            navigation,
            policy: config.double_submit,
            disable_controls: config.disable_submit_controls,
            state: Arc::new(AtomicU8::new(SubmissionState::Idle.to_u8())),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn state(&self) -> SubmissionState {
        SubmissionState::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// Synchronous half of a submission.
    ///
    /// Returns `None` when the submission is dropped: the page is already
    /// navigating away, or a request is in flight under
    /// [`DoubleSubmitPolicy::Ignore`].
    pub fn begin(&self) -> Option<PendingSubmission> {
        let idle = SubmissionState::Idle.to_u8();
        let submitting = SubmissionState::Submitting.to_u8();

        if let Err(current) =
            self.state
                .compare_exchange(idle, submitting, Ordering::SeqCst, Ordering::SeqCst)
        {
            let current = SubmissionState::from_u8(current);
            let overlap_allowed = current == SubmissionState::Submitting
                && self.policy == DoubleSubmitPolicy::Allow;
            if !overlap_allowed {
                tracing::debug!(state = ?current, "Ignoring submit event");
                return None;
            }
        }
        self.in_flight.fetch_add(1, Ordering::SeqCst);

        self.feedback.clear_transient();
        self.feedback.show(Feedback::Indicator);

        let payload = self.form.serialize();
        let url = self.form.action();
        if self.disable_controls {
            self.form.set_submit_enabled(false);
        }

        tracing::debug!(action = %url, fields = payload.len(), "Submitting form");
        Some(PendingSubmission { url, payload })
    }

    /// Asynchronous half: send the request and apply its outcome.
    pub async fn complete(
        &self,
        pending: PendingSubmission,
    ) -> Result<SubmitOutcome, SubmissionError> {
        let result = self.http.post_form(&pending.url, &pending.payload).await;
        self.finish(result)
    }

    /// Apply a settled request. Exposed separately so callers holding the
    /// response already (and tests) can drive the lifecycle directly.
    pub fn finish(
        &self,
        result: Result<StructuredResponse, TransportError>,
    ) -> Result<SubmitOutcome, SubmissionError> {
        let previous = self
            .in_flight
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                Some(n.saturating_sub(1))
            })
            .unwrap_or(0);
        let remaining = previous.saturating_sub(1);

        let outcome = apply_outcome(
            self.feedback.as_ref(),
            self.navigation.as_ref(),
            result,
            remaining > 0,
        );

        if matches!(&outcome, Ok(o) if o.leaves_page()) {
            self.transition(SubmissionState::Redirecting);
        } else if remaining == 0
            && self.transition(SubmissionState::Idle)
            && self.disable_controls
        {
            self.form.set_submit_enabled(true);
        }

        outcome
    }

    /// Move to `next` if the lifecycle allows it. Returns whether the state
    /// is now `next`.
    fn transition(&self, next: SubmissionState) -> bool {
        let current = self.state();
        if current == next {
            return true;
        }
        if !current.can_transition_to(next) {
            tracing::debug!(from = ?current, to = ?next, "Ignoring state change");
            return false;
        }
        self.state.store(next.to_u8(), Ordering::SeqCst);
        true
    }

    /// Both halves in sequence. `None` when the submission was dropped.
    pub async fn submit(&self) -> Option<Result<SubmitOutcome, SubmissionError>> {
        let pending = self.begin()?;
        Some(self.complete(pending).await)
    }

    /// Consume submit events until the stream ends.
    ///
    /// Each accepted submission's request runs as a separate task handed to
    /// `spawn`, so a slow response never delays handling of the next event.
    /// Default prevention must already have happened in the listener.
    pub async fn drive<S, E, F>(self, events: S, spawn: F)
    where
        S: Stream<Item = E> + Unpin,
        F: Fn(SubmissionTask),
    {
        let mut events = events;
        while events.next().await.is_some() {
            if let Some(pending) = self.begin() {
                let binder = self.clone();
                spawn(Box::pin(async move {
                    // Failures are already rendered in the form.
                    let _ = binder.complete(pending).await;
                }));
            }
        }
        tracing::debug!("Submit event stream closed");
    }
}
