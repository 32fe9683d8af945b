//! Core rules engine for CoolWatch
//!
//! Classifies timestamped sensor readings into cooling modes using
//! operator-set thresholds, and derives the dashboard numbers (alert
//! count, mode distribution, recency window) from the classified set.
//!
//! Key constraints:
//! - Classification is a pure function of (reading, config)
//! - Unparseable input cells degrade to missing values, never errors
//! - Each operator interaction triggers a full re-classification pass
//!
//! ```no_run
//! use coolwatch_core::{Classifier, ThresholdConfig, Reading};
//!
//! let classifier = Classifier::new(ThresholdConfig::default());
//! let reading = Reading::builder(1_000).temperature(25.0).build();
//!
//! let result = classifier.classify(&reading);
//! assert!(!result.alert);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod classifier;
pub mod config;
pub mod constants;
pub mod errors;
pub mod reading;
pub mod recent;
pub mod stream;
pub mod summary;
pub mod time;

#[cfg(feature = "std")]
pub mod export;

// Public API
pub use classifier::Classifier;
pub use config::{RecencyWindow, ThresholdConfig};
pub use errors::{ConfigError, ConfigResult};
pub use reading::{Classification, CoolingMode, Reading, ReadingBuilder};
pub use recent::{select_recent, RecentReadings};
pub use summary::{ModeCounts, Overview};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
