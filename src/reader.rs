use std::io::Read;
use std::str;

use crate::error::ReaderError;
use crate::event::{Event, EventSink};
use crate::source::LineSource;
use crate::token::Token;

/// Pull-based reader for an SSE stream.
///
/// Each call to [`process_next_event`](Self::process_next_event) consumes
/// field lines until one event boundary (a blank line) is reached, invoking
/// the sink for the completed event and for any `retry` directives seen
/// along the way. The reader keeps the last dispatched event id across
/// calls, so events without an explicit `id` line inherit it.
pub struct SseReader<R, S> {
    source: LineSource<R>,
    sink: S,
    last_id: Option<String>,
}

impl<R: Read, S: EventSink> SseReader<R, S> {
    /// Creates a reader with the default 8 KiB buffer.
    pub fn new(reader: R, sink: S) -> Self {
        Self {
            source: LineSource::new(reader),
            sink,
            last_id: None,
        }
    }

    /// Creates a reader with specified buffer capacity.
    pub fn with_capacity(capacity: usize, reader: R, sink: S) -> Self {
        Self {
            source: LineSource::with_capacity(capacity, reader),
            sink,
            last_id: None,
        }
    }

    /// The id persisted by the most recently dispatched event, for use as
    /// `Last-Event-ID` when the caller re-establishes the connection.
    pub fn last_event_id(&self) -> Option<&str> {
        self.last_id.as_deref()
    }

    /// Consumes the reader, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Processes lines up to and including the next event boundary.
    ///
    /// Returns `Ok(true)` once a boundary was handled (whether or not an
    /// event was dispatched) and `Ok(false)` when the stream is exhausted
    /// with no further complete lines; an incomplete unrecognized trailing
    /// line is silently dropped. May block while the source waits for
    /// bytes. After an error the reader is unusable.
    pub fn process_next_event(&mut self) -> Result<bool, ReaderError> {
        let mut id = self.last_id.clone();
        let mut event_type: Option<String> = None;
        let mut data: Vec<u8> = Vec::new();
        let mut line: Vec<u8> = Vec::new();

        loop {
            match self.source.select()? {
                Some(Token::Terminator) => {
                    self.complete_event(id, event_type, data)?;
                    return Ok(true);
                }
                Some(Token::Data) => {
                    data.push(b'\n');
                    self.source.read_to_terminator(&mut data)?;
                    self.source.select()?; // consume the line's terminator
                }
                Some(Token::Id) => {
                    let value = self.read_field_line(&mut line)?;
                    id = if value.is_empty() {
                        None
                    } else {
                        Some(value.to_owned())
                    };
                }
                Some(Token::EventType) => {
                    let value = self.read_field_line(&mut line)?;
                    event_type = if value.is_empty() {
                        None
                    } else {
                        Some(value.to_owned())
                    };
                }
                Some(Token::Retry) => {
                    line.clear();
                    self.source.read_to_terminator(&mut line)?;
                    self.source.select()?;
                    // Malformed values carry no callback and no error.
                    let parsed = str::from_utf8(&line)
                        .ok()
                        .and_then(|v| v.parse::<u64>().ok());
                    if let Some(delay_ms) = parsed {
                        self.sink.on_retry_change(delay_ms);
                    }
                }
                None => {
                    if self.source.skip_to_terminator()? {
                        // Unrecognized line: drop it, terminator included.
                        // Not a boundary.
                        self.source.select()?;
                    } else {
                        return Ok(false);
                    }
                }
            }
        }
    }

    /// Strict UTF-8 read of the rest of the current line, terminator
    /// consumed but excluded.
    fn read_field_line<'a>(&mut self, line: &'a mut Vec<u8>) -> Result<&'a str, ReaderError> {
        line.clear();
        self.source.read_to_terminator(line)?;
        self.source.select()?;
        Ok(str::from_utf8(line)?)
    }

    fn complete_event(
        &mut self,
        id: Option<String>,
        event_type: Option<String>,
        data: Vec<u8>,
    ) -> Result<(), ReaderError> {
        // A boundary with no accumulated data dispatches nothing and
        // leaves the persisted id alone.
        if data.is_empty() {
            return Ok(());
        }
        let text = str::from_utf8(&data[1..])?.to_owned();
        self.last_id = id.clone();
        self.sink.on_event(Event {
            id,
            event_type,
            data: text,
        });
        Ok(())
    }
}
