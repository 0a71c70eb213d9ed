//! `<form>` adapter.

use repodash_domain::{Feedback, FormPayload};
use send_wrapper::SendWrapper;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, FormData, HtmlFormElement};

use super::DomSurface;
use crate::ports::outbound::{FeedbackPort, FormPort};

const SUBMIT_CONTROLS: &str = r#"button[type="submit"], button:not([type]), input[type="submit"]"#;

/// Marks controls this adapter disabled, so controls the page disabled on its
/// own stay disabled.
const DISABLED_MARKER: &str = "data-repodash-disabled";

pub struct DomForm {
    form: SendWrapper<HtmlFormElement>,
    surface: DomSurface,
}

impl DomForm {
    pub fn new(form: HtmlFormElement) -> Self {
        let surface = DomSurface::new(form.clone().into());
        Self {
            form: SendWrapper::new(form),
            surface,
        }
    }

    fn submit_controls(&self) -> Vec<Element> {
        let Ok(nodes) = self.form.query_selector_all(SUBMIT_CONTROLS) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|n| n.dyn_into::<Element>().ok())
            .collect()
    }
}

/// Name/value pairs of the form's successful controls, in document order.
/// File inputs are skipped; they cannot be urlencoded.
fn serialize_form(form: &HtmlFormElement) -> Result<FormPayload, JsValue> {
    let data = FormData::new_with_form(form)?;
    let mut payload = FormPayload::new();

    let Some(entries) = js_sys::try_iter(&data)? else {
        return Ok(payload);
    };
    for entry in entries {
        let pair: js_sys::Array = entry?.dyn_into()?;
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            payload.push(name, value);
        }
    }
    Ok(payload)
}

impl FormPort for DomForm {
    fn action(&self) -> String {
        self.form.action()
    }

    fn serialize(&self) -> FormPayload {
        serialize_form(&self.form).unwrap_or_else(|e| {
            tracing::warn!(error = ?e, "Failed to serialize form; sending no fields");
            FormPayload::new()
        })
    }

    fn set_submit_enabled(&self, enabled: bool) {
        for control in self.submit_controls() {
            let result = if enabled {
                if !control.has_attribute(DISABLED_MARKER) {
                    continue;
                }
                control
                    .remove_attribute("disabled")
                    .and_then(|_| control.remove_attribute(DISABLED_MARKER))
            } else {
                if control.has_attribute("disabled") {
                    continue;
                }
                control
                    .set_attribute("disabled", "")
                    .and_then(|_| control.set_attribute(DISABLED_MARKER, ""))
            };
            if let Err(e) = result {
                tracing::warn!(error = ?e, enabled, "Failed to toggle submit control");
            }
        }
    }
}

impl FeedbackPort for DomForm {
    fn clear_transient(&self) {
        self.surface.clear_transient();
    }

    fn show(&self, feedback: Feedback) {
        self.surface.show(feedback);
    }

    fn remove_indicator(&self) {
        self.surface.remove_indicator();
    }
}
