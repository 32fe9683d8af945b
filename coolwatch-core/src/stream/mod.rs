//! Reading streams
//!
//! Sources that deliver [`Reading`](crate::reading::Reading)s one at a
//! time, with minimal memory overhead:
//! - Core trait and errors (this file)
//! - `memory` - in-memory streams for testing and replay
//! - `file` - CSV file streams (requires `std`)

use core::fmt;

// Re-export submodules based on features
#[cfg(feature = "stream-memory")]
pub mod memory;

#[cfg(feature = "std")]
pub mod file;

// Re-export commonly used types
#[cfg(feature = "stream-memory")]
pub use memory::MemoryStream;

#[cfg(feature = "std")]
pub use file::{load_readings, CsvStream, CsvStreamStats};

/// Non-blocking source of readings
pub trait Stream {
    /// Item produced by the stream
    type Item;
    /// Transport-level error type
    type Error;

    /// Poll for the next item
    fn poll_next(&mut self) -> nb::Result<Self::Item, Self::Error>;
}

/// Errors that can occur during stream processing
///
/// These cover the plumbing only. Unparseable *cells* are not errors:
/// the file stream coerces them to missing values and keeps the row.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamError<E> {
    /// Transport-level error (e.g., I/O error)
    Transport(E),
    /// Data format error
    Format(&'static str),
    /// End of stream reached
    EndOfStream,
    /// Buffer overflow
    Overflow,
}

impl<E: fmt::Display> fmt::Display for StreamError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Transport error: {}", e),
            Self::Format(msg) => write!(f, "Format error: {}", msg),
            Self::EndOfStream => write!(f, "End of stream"),
            Self::Overflow => write!(f, "Buffer overflow"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_error_display() {
        let err: StreamError<&str> = StreamError::Transport("connection lost");
        assert_eq!(format!("{}", err), "Transport error: connection lost");

        let err: StreamError<&str> = StreamError::EndOfStream;
        assert_eq!(format!("{}", err), "End of stream");
    }
}
