//! The fixed set of countries whose postal codes can be checked.
//!
//! [`SupportedCountry`] is the only form in which a country reaches the
//! matcher: every string produced by a directive, a field, or a callback is
//! parsed through [`SupportedCountry::parse`] first, and anything outside the
//! eight codes is rejected there.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Returned when a string is not one of the supported two-letter codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryParseError {
    /// The input that was rejected.
    pub got: String,
}

impl fmt::Display for CountryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported country code {:?}: expected one of {}",
            self.got,
            SupportedCountry::codes().join(", ")
        )
    }
}

impl std::error::Error for CountryParseError {}

// ---------------------------------------------------------------------------
// SupportedCountry
// ---------------------------------------------------------------------------

/// An ISO 3166-1 alpha-2 country with a postal code rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SupportedCountry {
    /// Canada.
    Ca,
    /// Denmark.
    Dk,
    /// United Kingdom.
    Gb,
    /// Italy.
    It,
    /// Netherlands.
    Nl,
    /// Sweden.
    Se,
    /// Singapore.
    Sg,
    /// United States.
    Us,
}

impl SupportedCountry {
    /// Every supported country, in code order.
    pub const ALL: [Self; 8] = [
        Self::Ca,
        Self::Dk,
        Self::Gb,
        Self::It,
        Self::Nl,
        Self::Se,
        Self::Sg,
        Self::Us,
    ];

    /// Returns the uppercase two-letter code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Ca => "CA",
            Self::Dk => "DK",
            Self::Gb => "GB",
            Self::It => "IT",
            Self::Nl => "NL",
            Self::Se => "SE",
            Self::Sg => "SG",
            Self::Us => "US",
        }
    }

    /// Returns the display label used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ca => "Canadian postal code",
            Self::Dk => "Danish postal code",
            Self::Gb => "United Kingdom postal code",
            Self::It => "Italian postal code",
            Self::Nl => "Dutch postal code",
            Self::Se => "Swedish postal code",
            Self::Sg => "Singapore postal code",
            Self::Us => "US zip code",
        }
    }

    /// Returns the codes of all supported countries, in [`Self::ALL`] order.
    pub fn codes() -> Vec<&'static str> {
        Self::ALL.iter().copied().map(Self::code).collect()
    }

    /// Parses `s` as a supported code, ignoring ASCII case.
    ///
    /// Surrounding whitespace is not trimmed: `" us"` is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for SupportedCountry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SupportedCountry {
    type Err = CountryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CountryParseError { got: s.to_owned() })
    }
}

impl TryFrom<&str> for SupportedCountry {
    type Error = CountryParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for SupportedCountry {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for SupportedCountry {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn parse_accepts_every_code_in_any_case() {
        for country in SupportedCountry::ALL {
            let upper = country.code();
            let lower = upper.to_ascii_lowercase();
            let mixed = format!("{}{}", &upper[..1], &lower[1..]);
            assert_eq!(SupportedCountry::parse(upper), Some(country));
            assert_eq!(SupportedCountry::parse(&lower), Some(country));
            assert_eq!(SupportedCountry::parse(&mixed), Some(country));
        }
    }

    #[test]
    fn parse_rejects_unsupported_and_malformed() {
        for s in ["", "FR", "USA", "U", " us", "us ", "C A", "ZZ"] {
            assert_eq!(SupportedCountry::parse(s), None, "input {s:?}");
        }
    }

    #[test]
    fn from_str_error_names_the_input() {
        let err = "fr".parse::<SupportedCountry>().expect_err("FR is unsupported");
        assert_eq!(err.got, "fr");
        let msg = err.to_string();
        assert!(msg.contains("\"fr\""), "message: {msg}");
        assert!(msg.contains("CA, DK, GB, IT, NL, SE, SG, US"), "message: {msg}");
    }

    #[test]
    fn display_is_uppercase_code() {
        assert_eq!(SupportedCountry::Gb.to_string(), "GB");
        assert_eq!(SupportedCountry::Se.to_string(), "SE");
    }

    #[test]
    fn sweden_is_labelled_swedish() {
        assert_eq!(SupportedCountry::Se.label(), "Swedish postal code");
    }

    #[test]
    fn codes_follow_all_order() {
        assert_eq!(
            SupportedCountry::codes(),
            vec!["CA", "DK", "GB", "IT", "NL", "SE", "SG", "US"]
        );
    }

    #[test]
    fn serde_uses_code_and_parses_case_insensitively() {
        let json = serde_json::to_string(&SupportedCountry::Nl).expect("serialize");
        assert_eq!(json, "\"NL\"");
        let back: SupportedCountry = serde_json::from_str("\"nl\"").expect("deserialize");
        assert_eq!(back, SupportedCountry::Nl);
        assert!(serde_json::from_str::<SupportedCountry>("\"BE\"").is_err());
    }
}
