//! Tests that generated samples agree with the validator.
#![allow(clippy::expect_used)]

use zipcode_bench::{SampleConfig, SizeTier, generate_samples};
use zipcode_core::{MapContext, PostalCodeMatcher, ZipCodeOptions, ZipCodeValidator};

#[test]
fn well_formed_samples_are_accepted() {
    let matcher = PostalCodeMatcher::new();
    for seed in [1, 42, 1234] {
        for sample in generate_samples(&SizeTier::Medium.config(seed)) {
            if sample.well_formed {
                assert!(
                    matcher.is_valid(sample.country, &sample.value),
                    "seed {seed}: {} rejected {:?}",
                    sample.country,
                    sample.value
                );
            }
        }
    }
}

#[test]
fn validator_agrees_with_matcher() {
    let matcher = PostalCodeMatcher::new();
    let ctx = MapContext::new();
    for sample in generate_samples(&SizeTier::Small.config(7)) {
        let validator = ZipCodeValidator::with_matcher(
            ZipCodeOptions::with_country(sample.country),
            matcher.clone(),
        );
        let expected =
            sample.value.trim().is_empty() || matcher.is_valid(sample.country, &sample.value);
        assert_eq!(
            validator.validate(&sample.value, &ctx).expect("no callbacks"),
            expected,
            "{} {:?}",
            sample.country,
            sample.value
        );
    }
}

#[test]
fn generation_is_deterministic() {
    let config = SizeTier::Small.config(99);
    assert_eq!(generate_samples(&config), generate_samples(&config));
}

#[test]
fn ratio_bounds_are_respected() {
    let all = generate_samples(&SampleConfig {
        seed: 3,
        count: 200,
        well_formed_ratio: 1.0,
    });
    assert!(all.iter().all(|s| s.well_formed));
    let none = generate_samples(&SampleConfig {
        seed: 3,
        count: 200,
        well_formed_ratio: 0.0,
    });
    assert!(none.iter().all(|s| !s.well_formed));
    assert_eq!(none.len(), 200);
}

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn well_formed_samples_pass_for_any_seed(seed in 0u64..10_000) {
            let matcher = PostalCodeMatcher::new();
            let config = SampleConfig { seed, count: 64, well_formed_ratio: 1.0 };
            for sample in generate_samples(&config) {
                prop_assert!(
                    matcher.is_valid(sample.country, &sample.value),
                    "{} {:?}", sample.country, sample.value
                );
            }
        }

        #[test]
        fn count_is_exact(seed in 0u64..1000, count in 0usize..300) {
            let config = SampleConfig { seed, count, well_formed_ratio: 0.5 };
            prop_assert_eq!(generate_samples(&config).len(), count);
        }
    }
}
