//! Capturing `tracing` events emitted by code under test.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// An event recorded while capturing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEvent {
    /// Level the event was emitted at.
    pub level: Level,
    /// Rendered `message` field.
    pub message: String,
}

/// Events recorded by [`capture_events`].
#[derive(Debug, Clone, Default)]
pub struct CapturedEvents {
    events: Vec<CapturedEvent>,
}

impl CapturedEvents {
    /// Messages of events emitted at `WARN`.
    #[must_use]
    pub fn warnings(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter(|event| event.level == Level::WARN)
            .map(|event| event.message.as_str())
            .collect()
    }
}

#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.events.lock().push(CapturedEvent {
            level: *event.metadata().level(),
            message: visitor.message,
        });
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}

/// Runs `f` with a thread-local subscriber that records every event.
///
/// ```rust
/// use freecol_messages_test_helpers::logs::capture_events;
///
/// let ((), events) = capture_events(|| tracing::warn!("careful"));
/// assert_eq!(events.warnings(), ["careful"]);
/// ```
pub fn capture_events<T>(f: impl FnOnce() -> T) -> (T, CapturedEvents) {
    let recorder = Recorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let output = tracing::subscriber::with_default(subscriber, f);
    let events = recorder.events.lock().clone();
    (output, CapturedEvents { events })
}
