//! DOM adapters (browser only).
//!
//! Each adapter wraps a `web-sys` handle in `SendWrapper` so it satisfies the
//! `Send + Sync` bounds of the ports; the browser runs everything on one
//! thread, so the wrapper is never crossed.

mod event_stream;
mod form;
mod list_item;
mod navigator;
mod surface;

pub use event_stream::{to_event_stream, to_event_stream_with, EventStream};
pub use crate::infrastructure::listener::EventStreamOptions;
pub use form::DomForm;
pub use list_item::DomListItem;
pub use navigator::WindowNavigator;
pub use surface::DomSurface;

use wasm_bindgen::JsValue;

/// Convert a thrown JS value into an `anyhow` error with context.
pub(crate) fn js_error(context: &'static str) -> impl FnOnce(JsValue) -> anyhow::Error {
    move |e| anyhow::anyhow!("{context}: {e:?}")
}
