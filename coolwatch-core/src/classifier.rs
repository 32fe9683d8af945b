//! Threshold-based cooling mode classifier
//!
//! ## Overview
//!
//! The classifier assigns every reading exactly one cooling mode by
//! walking three rules in order, first match wins:
//!
//! ```text
//! 1. temperature < temp_threshold                      → NoCooling
//! 2. luminosity > light_threshold
//!    AND charge  > charge_threshold                    → Solar
//! 3. otherwise                                         → Auxiliary
//! ```
//!
//! All comparisons are strict. A value sitting exactly on its threshold
//! fails the rule and falls through: temperature equal to the threshold
//! is not "below", luminosity or charge equal to theirs does not light
//! up the solar circuit.
//!
//! ## Missing Operands
//!
//! A missing operand fails the comparison it appears in, so evaluation
//! falls through to the next rule. A reading with no temperature can
//! therefore never be NoCooling; a reading with nothing at all lands in
//! Auxiliary. This mirrors the NaN comparison semantics of the
//! station's original data path.
//!
//! ## Purity
//!
//! `classify` is a pure function of (reading, config); it reads nothing
//! beyond its two arguments. Calling it twice with the same inputs
//! yields the same result, which is what lets the dashboard re-run a
//! full pass on every threshold change without invalidation logic.

use crate::config::ThresholdConfig;
use crate::reading::{Classification, CoolingMode, Reading};

/// Strict less-than where a missing operand fails the comparison
fn opt_below(value: Option<f32>, limit: f32) -> bool {
    matches!(value, Some(v) if v < limit)
}

/// Strict greater-than where a missing operand fails the comparison
fn opt_above(value: Option<f32>, limit: f32) -> bool {
    matches!(value, Some(v) if v > limit)
}

/// Cooling mode classifier for a fixed threshold configuration
///
/// Holds the config for one classification pass. Operator changes
/// produce a new `Classifier`; in-flight passes keep the old one.
#[derive(Debug, Clone)]
pub struct Classifier {
    config: ThresholdConfig,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(ThresholdConfig::default())
    }
}

impl Classifier {
    /// Create a classifier for the given thresholds
    pub fn new(config: ThresholdConfig) -> Self {
        Self { config }
    }

    /// The thresholds this classifier applies
    pub fn config(&self) -> &ThresholdConfig {
        &self.config
    }

    /// Select the cooling mode for a reading
    pub fn cooling_mode(&self, reading: &Reading) -> CoolingMode {
        if opt_below(reading.temperature, self.config.temp_threshold()) {
            CoolingMode::NoCooling
        } else if opt_above(reading.luminosity, self.config.light_threshold())
            && opt_above(reading.charge, self.config.charge_threshold())
        {
            CoolingMode::Solar
        } else {
            CoolingMode::Auxiliary
        }
    }

    /// Evaluate the alert predicate for an already-classified reading
    ///
    /// A reading alerts when its temperature has reached the threshold
    /// while its mode is NoCooling. Under a single config the mode rule
    /// already requires temperature below the threshold, so the two
    /// clauses are mutually exclusive and this returns `false`; it can
    /// only fire when `classification` was produced under different
    /// thresholds than this classifier's.
    pub fn is_alert(&self, reading: &Reading, classification: &Classification) -> bool {
        matches!(reading.temperature, Some(t) if t >= self.config.temp_threshold())
            && classification.mode == CoolingMode::NoCooling
    }

    /// Classify one reading: mode plus alert flag
    pub fn classify(&self, reading: &Reading) -> Classification {
        let mode = self.cooling_mode(reading);
        let mut result = Classification { mode, alert: false };
        result.alert = self.is_alert(reading, &result);
        result
    }

    /// Map the classifier over a reading slice
    ///
    /// The explicit full-pass form used by the dashboard: yields each
    /// reading paired with its classification, in input order. The
    /// iterator is `Clone`, so consumers (export, summary, table view)
    /// can each walk the same pass.
    pub fn annotate<'a>(
        &'a self,
        readings: &'a [Reading],
    ) -> impl Iterator<Item = (&'a Reading, Classification)> + Clone + 'a {
        readings.iter().map(move |r| (r, self.classify(r)))
    }
}
