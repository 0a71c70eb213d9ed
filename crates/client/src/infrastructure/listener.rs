//! Listener bodies shared by the DOM event streams.
//!
//! Kept free of `web-sys` so the ordering guarantee (default prevented before
//! the event is queued) holds for any event type and is checked on the host.

use futures_channel::mpsc::UnboundedSender;

#[derive(Clone, Copy, Debug, Default)]
pub struct EventStreamOptions {
    /// Call `preventDefault()` inside the listener, while the event is still
    /// being dispatched. Consumers of the stream run later and are too late
    /// to cancel the default action.
    pub prevent_default: bool,
}

/// Handle one dispatched event: cancel its default action when `options`
/// ask for it, then queue it for the stream.
pub fn forward_event<E>(
    event: E,
    options: EventStreamOptions,
    sender: &UnboundedSender<E>,
    prevent_default: impl FnOnce(&E),
) {
    if options.prevent_default {
        prevent_default(&event);
    }
    // Fails only after the stream is dropped, and then the listener is
    // already being removed.
    let _ = sender.unbounded_send(event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::FormBinder;
    use crate::infrastructure::testing::{FakeForm, RecordingNavigator};
    use crate::ports::outbound::MockHttpPort;
    use crate::ClientConfig;
    use futures_channel::mpsc::unbounded;
    use futures_util::StreamExt;
    use repodash_domain::StructuredResponse;
    use std::cell::Cell;
    use std::sync::Arc;

    #[derive(Debug, Default)]
    struct SubmitEvent {
        default_prevented: Cell<bool>,
    }

    fn prevent(event: &SubmitEvent) {
        event.default_prevented.set(true);
    }

    const PREVENT: EventStreamOptions = EventStreamOptions {
        prevent_default: true,
    };

    #[test]
    fn default_is_prevented_before_the_event_is_queued() {
        let (tx, mut rx) = unbounded();

        forward_event(SubmitEvent::default(), PREVENT, &tx, |event| {
            assert!(rx.try_recv().is_err(), "nothing queued yet");
            prevent(event);
        });

        let event = rx.try_recv().expect("queued");
        assert!(event.default_prevented.get());
    }

    #[test]
    fn default_is_kept_unless_requested() {
        let (tx, mut rx) = unbounded();

        forward_event(
            SubmitEvent::default(),
            EventStreamOptions::default(),
            &tx,
            prevent,
        );

        let event = rx.try_recv().expect("queued");
        assert!(!event.default_prevented.get());
    }

    #[test]
    fn closed_stream_drops_the_event_quietly() {
        let (tx, rx) = unbounded();
        drop(rx);

        forward_event(SubmitEvent::default(), PREVENT, &tx, prevent);
    }

    #[tokio::test]
    async fn every_submit_reaching_the_binder_was_already_prevented() {
        let form = Arc::new(FakeForm::new("/tags").with_field("tag", "rust"));
        let mut http = MockHttpPort::new();
        http.expect_post_form()
            .times(1)
            .returning(|_, _| Ok(StructuredResponse::default()));
        let binder = FormBinder::new(
            form.clone(),
            form.clone(),
            Arc::new(http),
            Arc::new(RecordingNavigator::default()),
            &ClientConfig::default(),
        );

        let (tx, rx) = unbounded();
        for _ in 0..3 {
            forward_event(SubmitEvent::default(), PREVENT, &tx, prevent);
        }
        drop(tx);

        let seen = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let counter = seen.clone();
        let events = rx.inspect(move |event: &SubmitEvent| {
            assert!(event.default_prevented.get());
            counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        });

        let tasks = std::cell::RefCell::new(Vec::new());
        binder.drive(events, |task| tasks.borrow_mut().push(task)).await;
        for task in tasks.into_inner() {
            task.await;
        }

        assert_eq!(seen.load(std::sync::atomic::Ordering::SeqCst), 3);
    }
}
