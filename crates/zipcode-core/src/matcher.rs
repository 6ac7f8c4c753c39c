//! Per-country postal code rules.
//!
//! [`PostalCodeMatcher`] owns every compiled pattern. It is built once with
//! [`PostalCodeMatcher::new`] and then shared by reference or clone; cloning
//! is cheap because compiled regexes share their program.
//!
//! Every pattern is anchored at both ends. Letter classes fold case over
//! ASCII only, so `K` never matches the Kelvin sign. Whitespace between the
//! parts of a code is `(?u:\s)`, which includes the no-break space.
use regex::Regex;

use crate::country::SupportedCountry;
use crate::gb::GbMatcher;
use crate::pattern::compile;


// ---------------------------------------------------------------------------
// Pattern sources
// ---------------------------------------------------------------------------

/// Canadian FSA + LDU; D, F, I, O, Q, U, W and Z never appear.
const CA_PATTERN: &str = r"(?i-u)^[ABCEGHJKLMNPRSTVXY][0-9][ABCEGHJKLMNPRSTVXY](?u:\s)?[0-9][ABCEGHJKLMNPRSTVXY][0-9]$";

const DK_PATTERN: &str = r"(?i-u)^(?:DK(?:-|(?u:\s))?)?[0-9]{4}$";

const IT_PATTERN: &str = r"(?i-u)^(?:I-|IT-)?[0-9]{5}$";

/// The letter pair is captured so the excluded combinations can be checked
/// after matching; `regex` has no lookahead.
const NL_PATTERN: &str = r"(?i-u)^[1-9][0-9]{3} ?([A-Z]{2})$";

/// Letter pairs never issued as a Dutch postcode suffix.
const NL_EXCLUDED_SUFFIXES: [&str; 3] = ["SA", "SD", "SS"];

const SE_PATTERN: &str = r"(?i-u)^(?:S-)?[0-9]{3}(?u:\s)?[0-9]{2}$";

/// Sector prefixes 01-73, 75-79 and 80-82; 74 and 83 upwards are unused.
const SG_PATTERN: &str = r"(?-u)^(?:0[1-9]|[1-6][0-9]|7[0-35-9]|8[0-2])[0-9]{4}$";

/// ZIP and ZIP+4.
const DEFAULT_PATTERN: &str = r"(?-u)^[0-9]{4,5}(?:-?[0-9]{4})?$";

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// The rule applied to a country's postal codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `A1A 1A1` with the Canadian letter restrictions.
    Canada,
    /// Four digits, optionally prefixed with `DK`, `DK-` or `DK `.
    Denmark,
    /// Any of the UK postcode formats; see [`crate::gb`].
    UnitedKingdom,
    /// Five digits, optionally prefixed with `I-` or `IT-`.
    Italy,
    /// Four digits (no leading zero) and two letters, except `SA`, `SD`, `SS`.
    Netherlands,
    /// Three and two digits, optionally prefixed with `S-`.
    Sweden,
    /// Six digits starting with a valid sector.
    Singapore,
    /// Four or five digits with an optional four-digit extension.
    ///
    /// Used for the United States. Any country added to
    /// [`SupportedCountry`] must be mapped explicitly in
    /// [`Rule::for_country`]; nothing falls through to this rule implicitly.
    Default,
}

impl Rule {
    /// Returns the rule for `country`.
    pub fn for_country(country: SupportedCountry) -> Self {
        match country {
            SupportedCountry::Ca => Self::Canada,
            SupportedCountry::Dk => Self::Denmark,
            SupportedCountry::Gb => Self::UnitedKingdom,
            SupportedCountry::It => Self::Italy,
            SupportedCountry::Nl => Self::Netherlands,
            SupportedCountry::Se => Self::Sweden,
            SupportedCountry::Sg => Self::Singapore,
            SupportedCountry::Us => Self::Default,
        }
    }
}

// ---------------------------------------------------------------------------
// PostalCodeMatcher
// ---------------------------------------------------------------------------

/// Compiled postal code rules for every [`SupportedCountry`].
///
/// ```
/// use zipcode_core::{PostalCodeMatcher, SupportedCountry};
///
/// let matcher = PostalCodeMatcher::new();
/// assert!(matcher.is_valid(SupportedCountry::Ca, "K1A 0B1"));
/// assert!(!matcher.is_valid(SupportedCountry::Ca, "D1A 0B1"));
/// ```
#[derive(Debug, Clone)]
pub struct PostalCodeMatcher {
    ca: Regex,
    dk: Regex,
    it: Regex,
    nl: Regex,
    se: Regex,
    sg: Regex,
    default: Regex,
    gb: GbMatcher,
}

impl PostalCodeMatcher {
    /// Compiles all country patterns.
    pub fn new() -> Self {
        Self {
            ca: compile(CA_PATTERN),
            dk: compile(DK_PATTERN),
            it: compile(IT_PATTERN),
            nl: compile(NL_PATTERN),
            se: compile(SE_PATTERN),
            sg: compile(SG_PATTERN),
            default: compile(DEFAULT_PATTERN),
            gb: GbMatcher::new(),
        }
    }

    /// Returns `true` if `value` is a well-formed postal code for `country`.
    ///
    /// The whole value must match; nothing is trimmed or reformatted.
    pub fn is_valid(&self, country: SupportedCountry, value: &str) -> bool {
        let rule = Rule::for_country(country);
        let valid = self.matches_rule(rule, value);
        tracing::debug!(%country, ?rule, valid, "checked postal code");
        valid
    }

    /// Returns `true` if `value` satisfies `rule`.
    pub fn matches_rule(&self, rule: Rule, value: &str) -> bool {
        match rule {
            Rule::Canada => self.ca.is_match(value),
            Rule::Denmark => self.dk.is_match(value),
            Rule::UnitedKingdom => self.gb.is_valid(value),
            Rule::Italy => self.it.is_match(value),
            Rule::Netherlands => self.is_valid_nl(value),
            Rule::Sweden => self.se.is_match(value),
            Rule::Singapore => self.sg.is_match(value),
            Rule::Default => self.default.is_match(value),
        }
    }

    /// Returns the UK sub-matcher.
    pub fn gb(&self) -> &GbMatcher {
        &self.gb
    }

    fn is_valid_nl(&self, value: &str) -> bool {
        let Some(caps) = self.nl.captures(value) else {
            return false;
        };
        caps.get(1).is_some_and(|suffix| {
            !NL_EXCLUDED_SUFFIXES
                .iter()
                .any(|excluded| excluded.eq_ignore_ascii_case(suffix.as_str()))
        })
    }
}

impl Default for PostalCodeMatcher {
    fn default() -> Self {
        Self::new()
    }
}
