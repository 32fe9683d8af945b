//! Recency window filtering for the dashboard table
//!
//! The "last X minutes" view keeps readings whose timestamp is at or
//! after `now - window`. Readings without a timestamp are excluded:
//! with no sample time there is no way to place them in the window.
//! Input order is preserved and the source slice is never touched.

use crate::config::RecencyWindow;
use crate::reading::Reading;
use crate::time::Timestamp;

/// Filter a reading set down to the recency window
///
/// `now` normally comes from a [`crate::time::TimeSource`]; tests pass
/// a fixed instant. The returned iterator is lazy and `Clone`, so it
/// can be restarted by cloning before consumption.
///
/// ```
/// use coolwatch_core::{select_recent, Reading, RecencyWindow};
///
/// let readings = [
///     Reading::builder(0).temperature(20.0).build(),
///     Reading::builder(3_600_000).temperature(21.0).build(),
/// ];
///
/// // One hour window ending at t=1h: both endpoints are inside
/// let recent = select_recent(&readings, 3_600_000, RecencyWindow::default());
/// assert_eq!(recent.count(), 2);
/// ```
pub fn select_recent(
    readings: &[Reading],
    now: Timestamp,
    window: RecencyWindow,
) -> RecentReadings<'_> {
    RecentReadings {
        inner: readings.iter(),
        cutoff: now.saturating_sub(window.as_millis()),
    }
}

/// Iterator over the readings inside a recency window
///
/// Produced by [`select_recent`]. Walks the source slice in order,
/// yielding only readings stamped at or after the cutoff.
#[derive(Debug, Clone)]
pub struct RecentReadings<'a> {
    inner: core::slice::Iter<'a, Reading>,
    cutoff: Timestamp,
}

impl<'a> RecentReadings<'a> {
    /// The earliest timestamp still inside the window
    pub fn cutoff(&self) -> Timestamp {
        self.cutoff
    }
}

impl<'a> Iterator for RecentReadings<'a> {
    type Item = &'a Reading;

    fn next(&mut self) -> Option<Self::Item> {
        let cutoff = self.cutoff;
        self.inner
            .by_ref()
            .find(|r| matches!(r.timestamp, Some(ts) if ts >= cutoff))
    }
}
