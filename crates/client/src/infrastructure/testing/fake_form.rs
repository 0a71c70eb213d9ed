//! Stateful stand-in for a DOM form.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use repodash_domain::{Feedback, FormPayload};

use crate::ports::outbound::{FeedbackPort, FormPort};

/// One mutation applied to the fake, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    ClearTransient,
    Show(Feedback),
    RemoveIndicator,
    SubmitEnabled(bool),
}

/// Form with an action, field values, and the transient nodes currently
/// attached to it.
#[derive(Debug)]
pub struct FakeForm {
    action: String,
    fields: Mutex<FormPayload>,
    nodes: Mutex<Vec<Feedback>>,
    events: Mutex<Vec<FormEvent>>,
    submit_enabled: AtomicBool,
}

impl Default for FakeForm {
    fn default() -> Self {
        Self::new("")
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl FakeForm {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            fields: Mutex::new(FormPayload::new()),
            nodes: Mutex::new(Vec::new()),
            events: Mutex::new(Vec::new()),
            submit_enabled: AtomicBool::new(true),
        }
    }

    pub fn with_field(self, name: &str, value: &str) -> Self {
        lock(&self.fields).push(name, value);
        self
    }

    /// Replace every field value, as if the user edited the form.
    pub fn set_fields(&self, payload: FormPayload) {
        *lock(&self.fields) = payload;
    }

    pub fn visible_feedback(&self) -> Vec<Feedback> {
        lock(&self.nodes).clone()
    }

    pub fn indicator_count(&self) -> usize {
        lock(&self.nodes)
            .iter()
            .filter(|f| **f == Feedback::Indicator)
            .count()
    }

    /// Messages of the banners currently shown.
    pub fn alerts(&self) -> Vec<String> {
        lock(&self.nodes)
            .iter()
            .filter_map(|f| f.text().map(str::to_string))
            .collect()
    }

    pub fn events(&self) -> Vec<FormEvent> {
        lock(&self.events).clone()
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled.load(Ordering::SeqCst)
    }

    fn record(&self, event: FormEvent) {
        lock(&self.events).push(event);
    }
}

impl FormPort for FakeForm {
    fn action(&self) -> String {
        self.action.clone()
    }

    fn serialize(&self) -> FormPayload {
        lock(&self.fields).clone()
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.submit_enabled.store(enabled, Ordering::SeqCst);
        self.record(FormEvent::SubmitEnabled(enabled));
    }
}

impl FeedbackPort for FakeForm {
    fn clear_transient(&self) {
        lock(&self.nodes).clear();
        self.record(FormEvent::ClearTransient);
    }

    fn show(&self, feedback: Feedback) {
        lock(&self.nodes).push(feedback.clone());
        self.record(FormEvent::Show(feedback));
    }

    fn remove_indicator(&self) {
        lock(&self.nodes).retain(|f| *f != Feedback::Indicator);
        self.record(FormEvent::RemoveIndicator);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_indicator_keeps_banners() {
        let form = FakeForm::default();
        form.show(Feedback::alert("old"));
        form.show(Feedback::Indicator);

        form.remove_indicator();

        assert_eq!(form.visible_feedback(), vec![Feedback::alert("old")]);
        assert_eq!(
            form.events().last(),
            Some(&FormEvent::RemoveIndicator)
        );
    }
}
