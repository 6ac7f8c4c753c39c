//! End-to-end scenarios through the public validator API.
#![allow(clippy::expect_used)]

use std::collections::BTreeMap;

use zipcode_core::{
    CountryDirective, MapContext, Outcome, SupportedCountry, ZipCodeOptions, ZipCodeValidator,
};

fn is_valid(country: &str, value: &str) -> bool {
    ZipCodeValidator::new(ZipCodeOptions::with_country(country))
        .validate(value, &MapContext::new())
        .expect("no callbacks involved")
}

#[test]
fn united_states() {
    assert!(is_valid("US", "12345"));
    assert!(is_valid("US", "1234"));
    assert!(is_valid("US", "12345-6789"));
    assert!(is_valid("US", "123456789"));
    assert!(!is_valid("US", "1234567"));
    assert!(!is_valid("US", "123"));
}

#[test]
fn canada() {
    assert!(is_valid("CA", "K1A 0B1"));
    assert!(is_valid("CA", "k1a0b1"));
    assert!(!is_valid("CA", "D1A 0B1"));
}

#[test]
fn united_kingdom() {
    assert!(is_valid("GB", "EC1A 1BB"));
    assert!(is_valid("GB", "GIR 0AA"));
    assert!(is_valid("GB", "AI-2640"));
    assert!(!is_valid("GB", "12345"));
}

#[test]
fn netherlands() {
    assert!(!is_valid("NL", "1234 SA"));
    assert!(is_valid("NL", "1234 AB"));
    assert!(is_valid("NL", "1234AB"));
}

#[test]
fn singapore() {
    assert!(is_valid("SG", "739999"));
    assert!(!is_valid("SG", "749999"));
}

#[test]
fn denmark_italy_sweden() {
    assert!(is_valid("DK", "DK-2100"));
    assert!(is_valid("DK", "2100"));
    assert!(is_valid("IT", "IT-00184"));
    assert!(is_valid("IT", "00184"));
    assert!(is_valid("SE", "S-114 55"));
    assert!(is_valid("SE", "11455"));
    assert!(!is_valid("SE", "1145"));
}

#[test]
fn country_from_field_reference() {
    let validator = ZipCodeValidator::new(ZipCodeOptions::with_country("countryFieldName"));
    let ctx = MapContext::new().with_field("countryFieldName", "ca");
    assert_eq!(
        validator.validate_detailed("K1A 0B1", &ctx),
        Ok(Outcome::Checked {
            country: SupportedCountry::Ca,
            valid: true,
        })
    );
}

#[test]
fn plain_map_works_as_context() {
    let mut fields = BTreeMap::new();
    fields.insert("shipping".to_owned(), "gb".to_owned());
    let validator = ZipCodeValidator::new(ZipCodeOptions::with_country("shipping"));
    assert_eq!(validator.validate("SW1A 1AA", &fields), Ok(true));
    assert_eq!(validator.validate("90210", &fields), Ok(false));
}

#[test]
fn callback_directive_decides_per_value() {
    let options = ZipCodeOptions {
        country: Some(CountryDirective::callback(|value, _| {
            let code = if value.chars().any(|c| c.is_ascii_alphabetic()) {
                "ca"
            } else {
                "us"
            };
            Ok(Some(code.to_owned()))
        })),
        message: None,
    };
    let validator = ZipCodeValidator::new(options);
    let ctx = MapContext::new();
    assert_eq!(validator.validate("K1A 0B1", &ctx), Ok(true));
    assert_eq!(validator.validate("90210", &ctx), Ok(true));
    assert_eq!(validator.validate("K1A 0B", &ctx), Ok(false));
}

#[test]
fn validator_is_shareable_across_threads() {
    let validator = std::sync::Arc::new(ZipCodeValidator::new(ZipCodeOptions::with_country(
        "SG",
    )));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let v = std::sync::Arc::clone(&validator);
            std::thread::spawn(move || v.validate("739999", &MapContext::new()))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("thread panicked"), Ok(true));
    }
}
