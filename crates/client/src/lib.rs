//! repodash browser client.
//!
//! Binds the dashboard's forms to AJAX submission, runs remote actions when
//! their panels open, and deletes list items inline. Application logic talks
//! to the page through ports, so it is tested on the host with mocks and runs
//! against the DOM when compiled to `wasm32`.

pub mod application;
pub mod infrastructure;
pub mod ports;

#[cfg(target_arch = "wasm32")]
pub mod bootstrap;

pub use application::services::{FormBinder, InlineDelete, RemoteAction};
pub use application::{ClientConfig, DoubleSubmitPolicy};
