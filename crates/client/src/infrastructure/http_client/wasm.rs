//! Browser HTTP client using gloo-net (fetch).

use futures_util::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use repodash_domain::{FormPayload, StructuredResponse, TransportError, FORM_CONTENT_TYPE};

use super::{ACCEPT_JSON, REQUESTED_WITH};
use crate::ports::outbound::HttpPort;

/// fetch-backed client. Relative URLs resolve against the page, as fetch does.
#[derive(Clone, Debug, Default)]
pub struct HttpClient {
    timeout_ms: Option<u32>,
}

impl HttpClient {
    pub fn new(timeout_ms: Option<u32>) -> Self {
        Self { timeout_ms }
    }

    async fn read(&self, request: Request) -> Result<StructuredResponse, TransportError> {
        let exchange = async move {
            let response = request
                .send()
                .await
                .map_err(|e| TransportError::network(e.to_string()))?;
            let status = response.status();
            let reason = response.status_text();
            let body = response
                .text()
                .await
                .map_err(|e| TransportError::network(e.to_string()))?;
            StructuredResponse::from_http(status, &reason, &body)
        };

        let Some(ms) = self.timeout_ms else {
            return exchange.await;
        };

        match select(Box::pin(exchange), Box::pin(TimeoutFuture::new(ms))).await {
            Either::Left((result, _)) => result,
            Either::Right((_, _)) => {
                tracing::debug!(timeout_ms = ms, "Request timed out");
                Err(TransportError::Timeout(ms))
            }
        }
    }
}

fn with_ajax_headers(builder: RequestBuilder) -> RequestBuilder {
    builder
        .header(REQUESTED_WITH.0, REQUESTED_WITH.1)
        .header(ACCEPT_JSON.0, ACCEPT_JSON.1)
}

#[async_trait::async_trait(?Send)]
impl HttpPort for HttpClient {
    async fn post_form(
        &self,
        url: &str,
        payload: &FormPayload,
    ) -> Result<StructuredResponse, TransportError> {
        tracing::debug!(url = %url, "POST");
        let request = with_ajax_headers(Request::post(url))
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(payload.encode())
            .map_err(|e| TransportError::network(e.to_string()))?;
        self.read(request).await
    }

    async fn get(&self, url: &str) -> Result<StructuredResponse, TransportError> {
        tracing::debug!(url = %url, "GET");
        let request = with_ajax_headers(Request::get(url))
            .build()
            .map_err(|e| TransportError::network(e.to_string()))?;
        self.read(request).await
    }
}
