/// A completed server-sent event.
///
/// `id` and `event_type` are `None` when the stream never set them (or
/// explicitly cleared them with an empty field line). Multi-line data is
/// joined with `\n`, with no trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: Option<String>,
    pub event_type: Option<String>,
    pub data: String,
}

/// Receives parsed events and retry directives as they complete.
pub trait EventSink {
    /// Called exactly once per dispatched event.
    fn on_event(&mut self, event: Event);

    /// Called whenever a syntactically valid `retry` line is parsed,
    /// independently of event dispatch.
    fn on_retry_change(&mut self, delay_ms: u64);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn on_event(&mut self, event: Event) {
        (**self).on_event(event);
    }

    fn on_retry_change(&mut self, delay_ms: u64) {
        (**self).on_retry_change(delay_ms);
    }
}
