//! Application services
//!
//! Page behaviors expressed against the outbound ports.

pub mod form_binder;
pub mod inline_delete;
pub mod outcome;
pub mod remote_action;

pub use form_binder::{FormBinder, PendingSubmission, SubmissionTask};
pub use inline_delete::{InlineDelete, DELETE_LINK_SELECTOR};
pub use outcome::apply_outcome;
pub use remote_action::{RemoteAction, PANEL_OPENED_EVENT};
