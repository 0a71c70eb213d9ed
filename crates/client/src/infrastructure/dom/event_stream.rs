//! DOM events as a `futures` stream.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_channel::mpsc::{unbounded, UnboundedReceiver};
use futures_util::{Stream, StreamExt};
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

use super::js_error;
use crate::infrastructure::listener::{forward_event, EventStreamOptions};

/// Events of one type from one target. Dropping the stream removes the
/// listener.
pub struct EventStream {
    target: EventTarget,
    event_name: String,
    callback: Closure<dyn FnMut(Event)>,
    receiver: UnboundedReceiver<Event>,
}

/// Subscribe to `event_name` on `target`.
pub fn to_event_stream(target: &EventTarget, event_name: &str) -> anyhow::Result<EventStream> {
    to_event_stream_with(target, event_name, EventStreamOptions::default())
}

pub fn to_event_stream_with(
    target: &EventTarget,
    event_name: &str,
    options: EventStreamOptions,
) -> anyhow::Result<EventStream> {
    let (sender, receiver) = unbounded();

    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        forward_event(event, options, &sender, Event::prevent_default);
    });

    target
        .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
        .map_err(js_error("Failed to add event listener"))?;

    Ok(EventStream {
        target: target.clone(),
        event_name: event_name.to_string(),
        callback,
        receiver,
    })
}

impl Stream for EventStream {
    type Item = Event;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Event>> {
        self.receiver.poll_next_unpin(cx)
    }
}

impl Drop for EventStream {
    fn drop(&mut self) {
        if let Err(e) = self.target.remove_event_listener_with_callback(
            &self.event_name,
            self.callback.as_ref().unchecked_ref(),
        ) {
            tracing::debug!(event = %self.event_name, error = ?e, "Failed to remove listener");
        }
    }
}
