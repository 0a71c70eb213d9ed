//! repodash domain types.
//!
//! Pure data and rules shared by the browser client: what a form submission
//! sends, what the server may answer, and how an answer maps to UI outcomes.
//! Nothing here touches the DOM or the network.

pub mod error;
pub mod feedback;
pub mod form_payload;
pub mod response;
pub mod submission_state;

pub use error::{SubmissionError, TransportError};
pub use feedback::{Feedback, ALERT_CLASSES, INDICATOR_CLASSES, TRANSIENT_CLASS};
pub use form_payload::{FormPayload, FORM_CONTENT_TYPE};
pub use response::{StructuredResponse, SubmitOutcome};
pub use submission_state::SubmissionState;
