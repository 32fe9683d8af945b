//! Error types for rejected operator input
//!
//! The only recoverable failure class in this crate is an operator
//! control set outside its declared range. Malformed *data* cells are
//! not errors at all: the loading layer coerces them to missing values
//! (see `stream::file`), so nothing downstream can fail on them.
//!
//! Errors here follow the same rules as the rest of the workspace:
//! small, `Copy`, no heap, and carrying enough context (value plus the
//! violated bounds) to render a useful message without another lookup.

use thiserror_no_std::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Rejected operator input - kept small for cheap return paths
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Threshold outside its selectable range
    #[error("Threshold {value} outside range [{min}, {max}]")]
    ThresholdOutOfBounds {
        /// The requested threshold value
        value: f32,
        /// Lowest selectable value for this control
        min: f32,
        /// Highest selectable value for this control
        max: f32,
    },

    /// Recency window outside its selectable range
    #[error("Window {minutes} min outside range [{min}, {max}] min")]
    WindowOutOfBounds {
        /// The requested window length in minutes
        minutes: u32,
        /// Shortest selectable window
        min: u32,
        /// Longest selectable window
        max: u32,
    },
}
