//! HTTP Port - structured-response transport
//!
//! Adapters classify the HTTP exchange with
//! [`StructuredResponse::from_http`](repodash_domain::StructuredResponse::from_http),
//! so every implementation agrees on what counts as a transport failure.

use repodash_domain::{FormPayload, StructuredResponse, TransportError};

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait HttpPort: Send + Sync {
    /// `POST` an urlencoded payload.
    async fn post_form(
        &self,
        url: &str,
        payload: &FormPayload,
    ) -> Result<StructuredResponse, TransportError>;

    /// `GET` a URL expecting a structured response.
    async fn get(&self, url: &str) -> Result<StructuredResponse, TransportError>;
}
