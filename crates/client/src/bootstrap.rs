//! Page bootstrap.
//!
//! Finds the dashboard's known forms, panels, and delete links by id and binds
//! them. Called once from the composition root after the document has loaded;
//! every binding lives for the rest of the page.

use std::sync::Arc;

use anyhow::Context;
use futures_util::StreamExt;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlFormElement};

use crate::application::config::{ClientConfig, CONFIG_ELEMENT_ID};
use crate::application::services::{
    FormBinder, InlineDelete, RemoteAction, DELETE_LINK_SELECTOR, PANEL_OPENED_EVENT,
};
use crate::infrastructure::dom::{
    js_error, to_event_stream, to_event_stream_with, DomForm, DomListItem, DomSurface,
    EventStreamOptions,
};
use crate::ports::outbound::{HttpPort, NavigationPort};

/// Forms submitted over AJAX.
pub const BOUND_FORM_IDS: [&str; 4] = [
    "repository_form",
    "tag_form",
    "apply_tags_form",
    "add_emails_form",
];

/// Panel that fetches a repository when opened.
pub const REMOTE_ACTION_ID: &str = "fetch_repository";

/// Container whose `li a` links delete their item.
pub const DELETE_CONTAINER_ID: &str = "add_emails_form";

const PREVENT_DEFAULT: EventStreamOptions = EventStreamOptions {
    prevent_default: true,
};

pub struct ClientDeps {
    pub http: Arc<dyn HttpPort>,
    pub navigation: Arc<dyn NavigationPort>,
    pub config: ClientConfig,
}

/// Read the embedded JSON configuration, if the page has one.
pub fn load_config(document: &Document) -> ClientConfig {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(json) => ClientConfig::from_json_or_default(&json),
        None => ClientConfig::default(),
    }
}

/// Bind every known element present in `document`.
pub fn bootstrap(document: &Document, deps: &ClientDeps) {
    let (mut forms, mut remote_actions, mut delete_links) = (0, 0, 0);

    for id in BOUND_FORM_IDS {
        let Some(element) = document.get_element_by_id(id) else {
            tracing::debug!(id, "Form not on this page");
            continue;
        };
        match bind_form(element, deps) {
            Ok(()) => forms += 1,
            Err(e) => tracing::warn!(id, error = %e, "Failed to bind form"),
        }
    }

    if let Some(panel) = document.get_element_by_id(REMOTE_ACTION_ID) {
        match bind_remote_action(panel, deps) {
            Ok(()) => remote_actions += 1,
            Err(e) => tracing::warn!(error = %e, "Failed to bind remote action"),
        }
    }

    if let Some(container) = document.get_element_by_id(DELETE_CONTAINER_ID) {
        match bind_delete_links(&container, deps) {
            Ok(count) => delete_links += count,
            Err(e) => tracing::warn!(error = %e, "Failed to bind delete links"),
        }
    }

    tracing::info!(forms, remote_actions, delete_links, "Page bound");
}

/// Bind one `<form>` to AJAX submission.
pub fn bind_form(element: Element, deps: &ClientDeps) -> anyhow::Result<()> {
    let form: HtmlFormElement = element
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("element is not a <form>"))?;

    let events = to_event_stream_with(form.as_ref(), "submit", PREVENT_DEFAULT)
        .context("subscribing to submit")?;

    let dom_form = Arc::new(DomForm::new(form));
    let binder = FormBinder::new(
        dom_form.clone(),
        dom_form,
        deps.http.clone(),
        deps.navigation.clone(),
        &deps.config,
    );

    spawn_local(binder.drive(events, |task| spawn_local(task)));
    Ok(())
}

/// Bind a panel whose `data-url` is fetched each time it opens.
pub fn bind_remote_action(panel: Element, deps: &ClientDeps) -> anyhow::Result<()> {
    let url = panel
        .get_attribute("data-url")
        .context("remote action panel has no data-url")?;

    let mut events =
        to_event_stream(panel.as_ref(), PANEL_OPENED_EVENT).context("subscribing to opened")?;

    let action = RemoteAction::new(
        url,
        Arc::new(DomSurface::new(panel)),
        deps.http.clone(),
        deps.navigation.clone(),
    );

    spawn_local(async move {
        while events.next().await.is_some() {
            // Failures are already rendered in the panel.
            let _ = action.trigger().await;
        }
    });
    Ok(())
}

/// Bind every delete link inside `container`. Returns how many were bound.
pub fn bind_delete_links(container: &Element, deps: &ClientDeps) -> anyhow::Result<usize> {
    let links = container
        .query_selector_all(DELETE_LINK_SELECTOR)
        .map_err(js_error("querying delete links"))?;

    let delete = InlineDelete::new(deps.http.clone(), deps.config.fade_out_ms);
    let mut bound = 0;

    for i in 0..links.length() {
        let Some(link) = links.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let mut clicks = to_event_stream_with(link.as_ref(), "click", PREVENT_DEFAULT)
            .context("subscribing to click")?;
        let item = DomListItem::new(link);
        let delete = delete.clone();

        spawn_local(async move {
            while clicks.next().await.is_some() {
                // Logged inside; the item fades regardless.
                let _ = delete.delete(&item).await;
            }
        });
        bound += 1;
    }

    Ok(bound)
}
