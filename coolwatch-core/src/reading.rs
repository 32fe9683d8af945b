//! Sensor sample and classification types
//!
//! ## Overview
//!
//! A [`Reading`] is one row of the monitoring station's data table: a
//! timestamp plus four measurements. Every field is optional: the
//! logger writes whatever the serial link delivered, and the loading
//! layer coerces anything it cannot parse to a missing value rather
//! than dropping the row.
//!
//! ## Missing-Value Semantics
//!
//! A missing operand fails whatever comparison it appears in, matching
//! the NaN comparison behavior of the station's original data path: a
//! row with no temperature can never look "cold" and a row with no
//! luminosity can never look "sunny". The classifier builds on this in
//! its rule ordering.
//!
//! ## Memory Model
//!
//! `Reading` is `Copy` and 48 bytes: five `Option` fields with no
//! indirection. Whole data sets are plain slices, and a classification
//! pass is a map over the slice.

use crate::time::Timestamp;

/// One timestamped sensor sample
///
/// Fields that could not be parsed from the source table are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// Sample time in milliseconds since the Unix epoch
    pub timestamp: Option<Timestamp>,
    /// Air temperature in °C
    pub temperature: Option<f32>,
    /// Relative humidity in %
    pub humidity: Option<f32>,
    /// Luminosity in raw ADC counts (0-1023)
    pub luminosity: Option<f32>,
    /// Battery charge in raw ADC counts (0-1023)
    pub charge: Option<f32>,
}

impl Reading {
    /// Start building a reading at the given timestamp
    pub fn builder(timestamp: Timestamp) -> ReadingBuilder {
        ReadingBuilder {
            reading: Reading {
                timestamp: Some(timestamp),
                ..Reading::default()
            },
        }
    }

    /// Check whether any measurement is present
    pub fn has_data(&self) -> bool {
        self.temperature.is_some()
            || self.humidity.is_some()
            || self.luminosity.is_some()
            || self.charge.is_some()
    }
}

/// Builder for convenient reading construction
pub struct ReadingBuilder {
    reading: Reading,
}

impl ReadingBuilder {
    /// Set temperature in °C
    pub fn temperature(mut self, celsius: f32) -> Self {
        self.reading.temperature = Some(celsius);
        self
    }

    /// Set relative humidity in %
    pub fn humidity(mut self, percent: f32) -> Self {
        self.reading.humidity = Some(percent);
        self
    }

    /// Set luminosity in ADC counts
    pub fn luminosity(mut self, counts: f32) -> Self {
        self.reading.luminosity = Some(counts);
        self
    }

    /// Set charge in ADC counts
    pub fn charge(mut self, counts: f32) -> Self {
        self.reading.charge = Some(counts);
        self
    }

    /// Finish building
    pub fn build(self) -> Reading {
        self.reading
    }
}

/// Cooling mode selected for a reading
///
/// Exactly one mode is assigned per reading; the classifier's rule
/// order guarantees totality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CoolingMode {
    /// Temperature below threshold - compressor idle
    NoCooling = 0,
    /// Enough light and charge to run on the solar circuit
    Solar = 1,
    /// Fallback to the auxiliary (grid/battery) circuit
    Auxiliary = 2,
}

impl CoolingMode {
    /// Get machine-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            CoolingMode::NoCooling => "no_cooling",
            CoolingMode::Solar => "solar",
            CoolingMode::Auxiliary => "auxiliary",
        }
    }

    /// Get the dashboard label, as written to the enriched export
    ///
    /// The station's operator console is French; exports must keep the
    /// labels byte-identical so downstream tooling can group on them.
    pub const fn label(&self) -> &'static str {
        match self {
            CoolingMode::NoCooling => "Pas de refroidissement",
            CoolingMode::Solar => "Refroidissement Solaire",
            CoolingMode::Auxiliary => "Refroidissement Auxiliaire",
        }
    }

    /// All modes, in rule-precedence order
    pub const ALL: [CoolingMode; 3] = [
        CoolingMode::NoCooling,
        CoolingMode::Solar,
        CoolingMode::Auxiliary,
    ];
}

/// Classification outcome for a single reading
///
/// Derived from (reading, config) and never stored apart from its
/// reading.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification {
    /// Selected cooling mode
    pub mode: CoolingMode,
    /// Whether the reading meets the alert predicate
    pub alert: bool,
}
