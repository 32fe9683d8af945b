//! Memory-based streams for testing and replay
//!
//! Useful for unit tests, replaying recorded data sets, and simulating
//! logger input without touching the filesystem.

use crate::reading::Reading;

use super::{Stream, StreamError};

/// Memory-based reading stream
///
/// ## Example
///
/// ```
/// use coolwatch_core::stream::{MemoryStream, Stream};
/// use coolwatch_core::Reading;
///
/// let readings = [
///     Reading::builder(1000).temperature(25.0).build(),
///     Reading::builder(2000).temperature(25.5).build(),
/// ];
///
/// let mut stream = MemoryStream::new(&readings);
/// while let Ok(reading) = stream.poll_next() {
///     // Process reading
/// }
/// ```
pub struct MemoryStream<'a> {
    /// Slice of readings to stream
    readings: &'a [Reading],
    /// Current position
    position: usize,
}

impl<'a> MemoryStream<'a> {
    /// Create new memory stream from slice
    pub fn new(readings: &'a [Reading]) -> Self {
        Self {
            readings,
            position: 0,
        }
    }

    /// Reset to beginning
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Get current position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Check if stream is exhausted
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.readings.len()
    }
}

impl<'a> Stream for MemoryStream<'a> {
    type Item = Reading;
    type Error = StreamError<()>;

    fn poll_next(&mut self) -> nb::Result<Self::Item, Self::Error> {
        if self.position >= self.readings.len() {
            return Err(nb::Error::Other(StreamError::EndOfStream));
        }

        let reading = self.readings[self.position];
        self.position += 1;
        Ok(reading)
    }
}
