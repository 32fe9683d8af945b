//! Constants for CoolWatch Core
//!
//! Centralized numeric values used throughout the crate: the operator
//! control ranges (threshold sliders, recency window) and time unit
//! conversions. Bounds and defaults match the monitoring station's
//! control panel; raw luminosity and charge are 10-bit ADC counts.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u32 = 60;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: u64 = MS_PER_SECOND * SECONDS_PER_MINUTE as u64;

// ===== TEMPERATURE THRESHOLD (°C) =====

/// Lowest selectable alert temperature threshold.
pub const TEMP_THRESHOLD_MIN_C: f32 = 10.0;

/// Highest selectable alert temperature threshold.
pub const TEMP_THRESHOLD_MAX_C: f32 = 50.0;

/// Default alert temperature threshold.
pub const TEMP_THRESHOLD_DEFAULT_C: f32 = 30.0;

// ===== LUMINOSITY THRESHOLD (ADC counts) =====

/// Lowest selectable luminosity threshold.
pub const LIGHT_THRESHOLD_MIN: f32 = 0.0;

/// Highest selectable luminosity threshold (10-bit ADC full scale).
pub const LIGHT_THRESHOLD_MAX: f32 = 1023.0;

/// Default luminosity threshold for solar cooling.
pub const LIGHT_THRESHOLD_DEFAULT: f32 = 400.0;

// ===== CHARGE THRESHOLD (ADC counts) =====

/// Lowest selectable charge threshold.
pub const CHARGE_THRESHOLD_MIN: f32 = 0.0;

/// Highest selectable charge threshold (10-bit ADC full scale).
pub const CHARGE_THRESHOLD_MAX: f32 = 1023.0;

/// Default charge threshold for solar cooling.
pub const CHARGE_THRESHOLD_DEFAULT: f32 = 900.0;

// ===== RECENCY WINDOW (minutes) =====

/// Shortest selectable dashboard window.
pub const WINDOW_MIN_MINUTES: u32 = 10;

/// Longest selectable dashboard window.
pub const WINDOW_MAX_MINUTES: u32 = 180;

/// Default dashboard window.
pub const WINDOW_DEFAULT_MINUTES: u32 = 60;
