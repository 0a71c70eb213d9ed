//! Transient feedback inside an arbitrary element.

use repodash_domain::feedback::ALERT_DATA_ATTRIBUTE;
use repodash_domain::{Feedback, TRANSIENT_CLASS};
use send_wrapper::SendWrapper;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::ports::outbound::FeedbackPort;

pub struct DomSurface {
    element: SendWrapper<Element>,
}

impl DomSurface {
    pub fn new(element: Element) -> Self {
        Self {
            element: SendWrapper::new(element),
        }
    }

    fn remove_matching(&self, selector: &str) {
        let nodes = match self.element.query_selector_all(selector) {
            Ok(nodes) => nodes,
            Err(e) => {
                tracing::warn!(selector, error = ?e, "Invalid feedback selector");
                return;
            }
        };
        for i in 0..nodes.length() {
            if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                element.remove();
            }
        }
    }

    fn build(&self, feedback: &Feedback) -> Result<Element, JsValue> {
        let document = self
            .element
            .owner_document()
            .ok_or_else(|| JsValue::from_str("element is detached from any document"))?;
        let node = document.create_element(feedback.tag_name())?;
        node.set_class_name(feedback.class_name());
        if matches!(feedback, Feedback::Alert { .. }) {
            node.set_attribute(ALERT_DATA_ATTRIBUTE, "")?;
        }
        // Text content, never inner HTML: server messages are not markup.
        node.set_text_content(feedback.text());
        Ok(node)
    }
}

impl FeedbackPort for DomSurface {
    fn clear_transient(&self) {
        self.remove_matching(&format!(".{TRANSIENT_CLASS}"));
    }

    fn show(&self, feedback: Feedback) {
        let appended = self
            .build(&feedback)
            .and_then(|node| self.element.append_child(&node));
        if let Err(e) = appended {
            tracing::warn!(error = ?e, "Failed to insert feedback");
        }
    }

    fn remove_indicator(&self) {
        self.remove_matching(&format!("i.{TRANSIENT_CLASS}"));
    }
}
