//! Dashboard aggregates: alert banner and mode distribution
//!
//! One pass over the classified set produces everything the overview
//! widgets need: the alert count for the banner and per-mode tallies
//! for the distribution chart.

use crate::classifier::Classifier;
use crate::reading::{Classification, CoolingMode, Reading};

/// Per-mode tally of a classification pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ModeCounts {
    no_cooling: usize,
    solar: usize,
    auxiliary: usize,
}

impl ModeCounts {
    /// Count one mode occurrence
    pub fn record(&mut self, mode: CoolingMode) {
        match mode {
            CoolingMode::NoCooling => self.no_cooling += 1,
            CoolingMode::Solar => self.solar += 1,
            CoolingMode::Auxiliary => self.auxiliary += 1,
        }
    }

    /// Tally an iterator of modes
    pub fn tally(modes: impl IntoIterator<Item = CoolingMode>) -> Self {
        let mut counts = Self::default();
        for mode in modes {
            counts.record(mode);
        }
        counts
    }

    /// Occurrences of the given mode
    pub fn count(&self, mode: CoolingMode) -> usize {
        match mode {
            CoolingMode::NoCooling => self.no_cooling,
            CoolingMode::Solar => self.solar,
            CoolingMode::Auxiliary => self.auxiliary,
        }
    }

    /// Total readings tallied
    pub fn total(&self) -> usize {
        self.no_cooling + self.solar + self.auxiliary
    }
}

/// One-pass dashboard overview of a classified reading set
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Overview {
    /// Number of readings in the set
    pub rows: usize,
    /// Readings meeting the alert predicate
    pub alerts: usize,
    /// Mode distribution
    pub modes: ModeCounts,
}

impl Overview {
    /// Classify the full set and aggregate in one pass
    pub fn compute(readings: &[Reading], classifier: &Classifier) -> Self {
        Self::from_classifications(classifier.annotate(readings).map(|(_, c)| c))
    }

    /// Aggregate an already-classified pass
    pub fn from_classifications(pass: impl IntoIterator<Item = Classification>) -> Self {
        let mut overview = Self::default();
        for classification in pass {
            overview.rows += 1;
            if classification.alert {
                overview.alerts += 1;
            }
            overview.modes.record(classification.mode);
        }
        overview
    }

    /// Whether the alert banner should show
    pub fn has_alerts(&self) -> bool {
        self.alerts > 0
    }
}
