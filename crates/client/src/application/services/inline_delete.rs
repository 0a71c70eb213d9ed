//! Inline delete links.
//!
//! Each link inside a bound list deletes its item server-side with a plain
//! `GET` of its `href`, and the item fades out at once. The request's result
//! is only logged; the page does not wait for it.

use std::sync::Arc;

use repodash_domain::TransportError;

use crate::ports::outbound::{HttpPort, ListItemPort};

/// Selector for delete links, relative to the bound container.
pub const DELETE_LINK_SELECTOR: &str = "li a";

#[derive(Clone)]
pub struct InlineDelete {
    http: Arc<dyn HttpPort>,
    fade_out_ms: u32,
}

impl InlineDelete {
    pub fn new(http: Arc<dyn HttpPort>, fade_out_ms: u32) -> Self {
        Self { http, fade_out_ms }
    }

    /// Fade the item out and issue the delete request.
    ///
    /// A link without `href` is left alone.
    pub async fn delete(&self, item: &dyn ListItemPort) -> Result<(), TransportError> {
        let Some(href) = item.href() else {
            tracing::warn!("Delete link has no href; ignoring click");
            return Ok(());
        };

        item.fade_out(self.fade_out_ms);

        match self.http.get(&href).await {
            Ok(_) => {
                tracing::debug!(href = %href, "Deleted list item");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(href = %href, error = %e, "Delete request failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{MockHttpPort, MockListItemPort};
    use mockall::predicate::*;
    use repodash_domain::StructuredResponse;

    #[tokio::test]
    async fn deletes_and_fades_the_item() {
        let mut http = MockHttpPort::new();
        http.expect_get()
            .with(eq("/user/emails/3/delete"))
            .times(1)
            .returning(|_| Ok(StructuredResponse::default()));
        let mut item = MockListItemPort::new();
        item.expect_href()
            .return_const(Some("/user/emails/3/delete".to_string()));
        item.expect_fade_out().with(eq(250)).times(1).return_const(());

        let delete = InlineDelete::new(Arc::new(http), 250);
        assert!(delete.delete(&item).await.is_ok());
    }

    #[tokio::test]
    async fn item_fades_even_when_the_request_fails() {
        let mut http = MockHttpPort::new();
        http.expect_get()
            .times(1)
            .returning(|_| Err(TransportError::status(500, "Internal Server Error")));
        let mut item = MockListItemPort::new();
        item.expect_href().return_const(Some("/x".to_string()));
        item.expect_fade_out().times(1).return_const(());

        let delete = InlineDelete::new(Arc::new(http), 400);
        let result = delete.delete(&item).await;

        assert_eq!(result, Err(TransportError::status(500, "Internal Server Error")));
    }

    #[tokio::test]
    async fn link_without_href_is_ignored() {
        let mut http = MockHttpPort::new();
        http.expect_get().never();
        let mut item = MockListItemPort::new();
        item.expect_href().return_const(None::<String>);
        item.expect_fade_out().never();

        let delete = InlineDelete::new(Arc::new(http), 400);
        assert!(delete.delete(&item).await.is_ok());
    }
}
