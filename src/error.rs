use std::io;
use std::str::Utf8Error;

use thiserror::Error;

/// Errors from SSE stream parsing.
///
/// Any of these leaves the reader and its underlying source unusable;
/// the caller must re-establish the connection before reading again.
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("stream ended in the middle of a field line")]
    UnexpectedEof,

    #[error("invalid UTF-8 in field value: {0}")]
    Utf8(#[from] Utf8Error),
}
