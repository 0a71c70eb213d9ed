//! Host HTTP client using reqwest.

use std::time::Duration;

use repodash_domain::{FormPayload, StructuredResponse, TransportError, FORM_CONTENT_TYPE};
use url::Url;

use super::{ACCEPT_JSON, REQUESTED_WITH};
use crate::ports::outbound::HttpPort;

/// reqwest-backed client. Relative URLs (form actions, `data-url`s) are
/// resolved against `base_url`.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: Option<Url>,
    timeout_ms: Option<u32>,
}

impl HttpClient {
    pub fn new(base_url: Option<Url>, timeout_ms: Option<u32>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(ms) = timeout_ms {
            builder = builder.timeout(Duration::from_millis(u64::from(ms)));
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::network(e.to_string()))?;
        Ok(Self {
            client,
            base_url,
            timeout_ms,
        })
    }

    fn resolve(&self, url: &str) -> Result<Url, TransportError> {
        let resolved = match &self.base_url {
            Some(base) => base.join(url),
            None => Url::parse(url),
        };
        resolved.map_err(|e| TransportError::network(format!("invalid URL {url}: {e}")))
    }

    fn map_error(&self, e: reqwest::Error) -> TransportError {
        match self.timeout_ms {
            Some(ms) if e.is_timeout() => TransportError::Timeout(ms),
            _ => TransportError::network(e.to_string()),
        }
    }

    async fn read(&self, request: reqwest::RequestBuilder) -> Result<StructuredResponse, TransportError> {
        let response = request
            .header(REQUESTED_WITH.0, REQUESTED_WITH.1)
            .header(ACCEPT_JSON.0, ACCEPT_JSON.1)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default();
        let body = response.text().await.map_err(|e| self.map_error(e))?;

        StructuredResponse::from_http(status.as_u16(), reason, &body)
    }
}

#[async_trait::async_trait]
impl HttpPort for HttpClient {
    async fn post_form(
        &self,
        url: &str,
        payload: &FormPayload,
    ) -> Result<StructuredResponse, TransportError> {
        let url = self.resolve(url)?;
        tracing::debug!(url = %url, "POST");
        let request = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(payload.encode());
        self.read(request).await
    }

    async fn get(&self, url: &str) -> Result<StructuredResponse, TransportError> {
        let url = self.resolve(url)?;
        tracing::debug!(url = %url, "GET");
        self.read(self.client.get(url)).await
    }
}
