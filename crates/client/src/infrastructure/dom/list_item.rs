//! Delete link inside a `<li>`.

use gloo_timers::callback::Timeout;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::ports::outbound::ListItemPort;

pub struct DomListItem {
    link: SendWrapper<Element>,
}

impl DomListItem {
    pub fn new(link: Element) -> Self {
        Self {
            link: SendWrapper::new(link),
        }
    }
}

impl ListItemPort for DomListItem {
    fn href(&self) -> Option<String> {
        self.link.get_attribute("href")
    }

    fn fade_out(&self, duration_ms: u32) {
        let item = match self.link.closest("li") {
            Ok(Some(item)) => item,
            _ => {
                tracing::debug!("Delete link is not inside a list item");
                return;
            }
        };
        let Ok(item) = item.dyn_into::<HtmlElement>() else {
            return;
        };

        let style = item.style();
        let faded = style
            .set_property("transition", &format!("opacity {duration_ms}ms"))
            .and_then(|_| style.set_property("opacity", "0"));
        if let Err(e) = faded {
            tracing::debug!(error = ?e, "Failed to start fade");
        }

        Timeout::new(duration_ms, move || {
            if let Err(e) = item.style().set_property("display", "none") {
                tracing::debug!(error = ?e, "Failed to hide faded item");
            }
        })
        .forget();
    }
}
