//! In-memory fakes for host tests.
//!
//! Mocks from `mockall` cover call expectations; these fakes keep state so
//! tests can assert on what the page would show after a sequence of events.

#[cfg(any(test, feature = "testing"))]
mod fake_form;
#[cfg(any(test, feature = "testing"))]
mod recording_navigator;

#[cfg(any(test, feature = "testing"))]
pub use fake_form::{FakeForm, FormEvent};
#[cfg(any(test, feature = "testing"))]
pub use recording_navigator::RecordingNavigator;
