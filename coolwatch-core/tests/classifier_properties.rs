//! Property tests for the classification rules
//!
//! Encodes the universal statements about the rule set: precedence,
//! strict boundaries, totality, idempotence, and the mutual exclusion
//! inside the alert predicate.

use coolwatch_core::{Classifier, CoolingMode, Reading, ThresholdConfig};
use proptest::prelude::*;

/// Thresholds drawn from the operator control ranges
fn arb_config() -> impl Strategy<Value = ThresholdConfig> {
    (10.0f32..=50.0, 0.0f32..=1023.0, 0.0f32..=1023.0)
        .prop_map(|(t, l, c)| ThresholdConfig::new(t, l, c).unwrap())
}

/// A measurement that may be missing
fn arb_measurement() -> impl Strategy<Value = Option<f32>> {
    prop_oneof![
        1 => Just(None),
        4 => (-100.0f32..1200.0).prop_map(Some),
    ]
}

/// Any reading the loader can produce
fn arb_reading() -> impl Strategy<Value = Reading> {
    (
        proptest::option::of(0u64..4_000_000_000_000),
        arb_measurement(),
        arb_measurement(),
        arb_measurement(),
        arb_measurement(),
    )
        .prop_map(|(ts, temp, hum, lum, charge)| Reading {
            timestamp: ts,
            temperature: temp,
            humidity: hum,
            luminosity: lum,
            charge,
        })
}

proptest! {
    #[test]
    fn below_threshold_is_always_no_cooling(
        config in arb_config(),
        margin in 0.5f32..100.0,
        lum in arb_measurement(),
        charge in arb_measurement(),
    ) {
        let classifier = Classifier::new(config);
        let reading = Reading {
            timestamp: Some(0),
            temperature: Some(config.temp_threshold() - margin),
            humidity: None,
            luminosity: lum,
            charge,
        };

        prop_assert_eq!(classifier.cooling_mode(&reading), CoolingMode::NoCooling);
    }

    #[test]
    fn hot_bright_and_charged_is_always_solar(
        config in arb_config(),
        temp_margin in 0.0f32..100.0,
        lum_margin in 0.5f32..500.0,
        charge_margin in 0.5f32..500.0,
    ) {
        let classifier = Classifier::new(config);
        let reading = Reading::builder(0)
            .temperature(config.temp_threshold() + temp_margin)
            .luminosity(config.light_threshold() + lum_margin)
            .charge(config.charge_threshold() + charge_margin)
            .build();

        prop_assert_eq!(classifier.cooling_mode(&reading), CoolingMode::Solar);
    }

    #[test]
    fn hot_without_full_solar_conditions_is_auxiliary(
        config in arb_config(),
        temp_margin in 0.0f32..100.0,
        lum in arb_measurement(),
        charge in arb_measurement(),
    ) {
        let solar_ready = matches!(lum, Some(l) if l > config.light_threshold())
            && matches!(charge, Some(c) if c > config.charge_threshold());
        prop_assume!(!solar_ready);

        let classifier = Classifier::new(config);
        let reading = Reading {
            timestamp: Some(0),
            temperature: Some(config.temp_threshold() + temp_margin),
            humidity: None,
            luminosity: lum,
            charge,
        };

        prop_assert_eq!(classifier.cooling_mode(&reading), CoolingMode::Auxiliary);
    }

    #[test]
    fn boundary_values_fall_through(config in arb_config()) {
        let classifier = Classifier::new(config);

        // Exactly at the temperature threshold: not "below"
        let at_temp = Reading::builder(0)
            .temperature(config.temp_threshold())
            .luminosity(config.light_threshold())
            .charge(config.charge_threshold())
            .build();

        // And exactly at the solar thresholds: not "above" either
        prop_assert_eq!(classifier.cooling_mode(&at_temp), CoolingMode::Auxiliary);
    }

    #[test]
    fn classify_is_pure_and_idempotent(
        config in arb_config(),
        reading in arb_reading(),
    ) {
        let classifier = Classifier::new(config);
        prop_assert_eq!(classifier.classify(&reading), classifier.classify(&reading));
    }

    #[test]
    fn no_cooling_never_alerts(
        config in arb_config(),
        reading in arb_reading(),
    ) {
        let classifier = Classifier::new(config);
        let result = classifier.classify(&reading);

        if result.mode == CoolingMode::NoCooling {
            prop_assert!(!result.alert);
        }
    }

    #[test]
    fn every_reading_gets_exactly_one_mode(
        config in arb_config(),
        reading in arb_reading(),
    ) {
        let classifier = Classifier::new(config);
        let mode = classifier.cooling_mode(&reading);
        prop_assert!(CoolingMode::ALL.contains(&mode));
    }
}
