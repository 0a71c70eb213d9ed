//! HTTP adapters for [`HttpPort`](crate::ports::outbound::HttpPort).
//!
//! The browser build uses `gloo-net` (fetch); host builds use `reqwest`.
//! Both send the same headers and classify responses through
//! `StructuredResponse::from_http`.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
pub use wasm::HttpClient;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::HttpClient;

/// Marks the request as AJAX so the server answers with JSON.
pub const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

/// Structured responses are JSON.
pub const ACCEPT_JSON: (&str, &str) = ("Accept", "application/json, text/javascript, */*; q=0.01");
