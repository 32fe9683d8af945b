//! Operator-adjustable configuration values
//!
//! The station exposes exactly four numeric controls: three
//! classification thresholds and the dashboard recency window. Each is
//! modeled as an immutable value type whose bounds are enforced at
//! construction, so a classification pass can trust its config without
//! re-checking (the classifier's input contract).
//!
//! Two construction paths:
//! - [`ThresholdConfig::new`] rejects out-of-range input with a
//!   [`ConfigError`], for programmatic callers.
//! - [`ThresholdConfig::clamped`] saturates into bounds, matching how
//!   a slider control behaves at its end stops.
//!
//! Configuration is never persisted and never read from files or the
//! environment; the surrounding glue passes one value per pass.

use crate::constants::{
    CHARGE_THRESHOLD_DEFAULT, CHARGE_THRESHOLD_MAX, CHARGE_THRESHOLD_MIN,
    LIGHT_THRESHOLD_DEFAULT, LIGHT_THRESHOLD_MAX, LIGHT_THRESHOLD_MIN, MS_PER_MINUTE,
    TEMP_THRESHOLD_DEFAULT_C, TEMP_THRESHOLD_MAX_C, TEMP_THRESHOLD_MIN_C,
    WINDOW_DEFAULT_MINUTES, WINDOW_MAX_MINUTES, WINDOW_MIN_MINUTES,
};
use crate::errors::{ConfigError, ConfigResult};

fn check_threshold(value: f32, min: f32, max: f32) -> ConfigResult<f32> {
    // NaN fails both comparisons below, so reject it explicitly
    if !value.is_finite() || value < min || value > max {
        return Err(ConfigError::ThresholdOutOfBounds { value, min, max });
    }
    Ok(value)
}

/// Classification thresholds for one pass
///
/// Fields are private; any constructed value is inside its declared
/// bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdConfig {
    temp_threshold: f32,
    light_threshold: f32,
    charge_threshold: f32,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            temp_threshold: TEMP_THRESHOLD_DEFAULT_C,
            light_threshold: LIGHT_THRESHOLD_DEFAULT,
            charge_threshold: CHARGE_THRESHOLD_DEFAULT,
        }
    }
}

impl ThresholdConfig {
    /// Create a config, rejecting out-of-range thresholds
    pub fn new(temp: f32, light: f32, charge: f32) -> ConfigResult<Self> {
        Ok(Self {
            temp_threshold: check_threshold(temp, TEMP_THRESHOLD_MIN_C, TEMP_THRESHOLD_MAX_C)?,
            light_threshold: check_threshold(light, LIGHT_THRESHOLD_MIN, LIGHT_THRESHOLD_MAX)?,
            charge_threshold: check_threshold(charge, CHARGE_THRESHOLD_MIN, CHARGE_THRESHOLD_MAX)?,
        })
    }

    /// Create a config with slider semantics: values saturate at the
    /// end stops, NaN falls back to the default for that control
    pub fn clamped(temp: f32, light: f32, charge: f32) -> Self {
        let clamp_or = |value: f32, min: f32, max: f32, fallback: f32| {
            if value.is_finite() {
                value.clamp(min, max)
            } else {
                fallback
            }
        };

        Self {
            temp_threshold: clamp_or(
                temp,
                TEMP_THRESHOLD_MIN_C,
                TEMP_THRESHOLD_MAX_C,
                TEMP_THRESHOLD_DEFAULT_C,
            ),
            light_threshold: clamp_or(
                light,
                LIGHT_THRESHOLD_MIN,
                LIGHT_THRESHOLD_MAX,
                LIGHT_THRESHOLD_DEFAULT,
            ),
            charge_threshold: clamp_or(
                charge,
                CHARGE_THRESHOLD_MIN,
                CHARGE_THRESHOLD_MAX,
                CHARGE_THRESHOLD_DEFAULT,
            ),
        }
    }

    /// Alert/no-cooling temperature threshold in °C
    pub fn temp_threshold(&self) -> f32 {
        self.temp_threshold
    }

    /// Solar-circuit luminosity threshold in ADC counts
    pub fn light_threshold(&self) -> f32 {
        self.light_threshold
    }

    /// Solar-circuit charge threshold in ADC counts
    pub fn charge_threshold(&self) -> f32 {
        self.charge_threshold
    }
}

/// Dashboard recency window
///
/// Bounds the "last X minutes" view; see [`crate::select_recent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyWindow {
    minutes: u32,
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self {
            minutes: WINDOW_DEFAULT_MINUTES,
        }
    }
}

impl RecencyWindow {
    /// Create a window, rejecting out-of-range lengths
    pub fn new(minutes: u32) -> ConfigResult<Self> {
        if minutes < WINDOW_MIN_MINUTES || minutes > WINDOW_MAX_MINUTES {
            return Err(ConfigError::WindowOutOfBounds {
                minutes,
                min: WINDOW_MIN_MINUTES,
                max: WINDOW_MAX_MINUTES,
            });
        }
        Ok(Self { minutes })
    }

    /// Create a window with slider semantics, saturating at the end stops
    pub fn clamped(minutes: u32) -> Self {
        Self {
            minutes: minutes.clamp(WINDOW_MIN_MINUTES, WINDOW_MAX_MINUTES),
        }
    }

    /// Window length in minutes
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Window length in milliseconds
    pub fn as_millis(&self) -> u64 {
        self.minutes as u64 * MS_PER_MINUTE
    }
}
