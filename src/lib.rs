mod error;
mod event;
mod reader;
mod source;
mod token;

pub use error::ReaderError;
pub use event::{Event, EventSink};
pub use reader::SseReader;
