//! United Kingdom postcode matching.
//!
//! UK postcodes come in several structurally incompatible shapes: the
//! standard outward/inward forms, British Forces Post Office codes, the
//! Girobank code, Overseas Territories, and Anguilla. No single pattern
//! covers all of them, so [`GbMatcher`] holds one compiled pattern per
//! [`GbFormat`] and tries them in [`GbFormat::ALL`] order until one matches.
//!
//! Letter classes exclude the letters never used in each position:
//!
//! | Position | Allowed |
//! |---|---|
//! | 1st | `ABCDEFGHIJKLMNOPRSTUWYZ` (no Q, V, X) |
//! | 2nd | `ABCDEFGHKLMNOPQRSTUVWXY` (no I, J, Z) |
//! | 3rd | `ABCDEFGHJKPMNRSTUVWXY` |
//! | 4th | `ABEHMNPRVWXY` |
//! | inward letters | `ABDEFGHJLNPQRSTUWXYZ` (no C, I, K, M, O, V) |
//!
//! All patterns are anchored and ASCII case-insensitive. Separators accept
//! any Unicode whitespace.
use regex::Regex;

use crate::pattern::compile;


const FIRST: &str = "[ABCDEFGHIJKLMNOPRSTUWYZ]";
const SECOND: &str = "[ABCDEFGHKLMNOPQRSTUVWXY]";
const THIRD: &str = "[ABCDEFGHJKPMNRSTUVWXY]";
const FOURTH: &str = "[ABEHMNPRVWXY]";
const INWARD: &str = "[ABDEFGHJLNPQRSTUWXYZ]";

// BFPO postcode tail letters. These are their own sets, not the inward
// class: the last position also admits U.
const BF1_THIRD: &str = "[ABDEFGHJLNPQRST]";
const BF1_FOURTH: &str = "[ABDEFGHJLNPQRSTUWZYZ]";

/// One structural form of a UK postcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GbFormat {
    /// `AN NAA`, `ANN NAA`, `AAN NAA`, `AANN NAA` (e.g. `M1 1AA`, `DN55 1PT`).
    Standard,
    /// `ANA NAA` (e.g. `W1A 1HQ`).
    LetterDigitLetter,
    /// `AANA NAA` (e.g. `EC1A 1BB`).
    LetterLetterDigitLetter,
    /// British Forces postcode starting `BF1` (e.g. `BF1 3AU`).
    BfpoPostcode,
    /// The Girobank code `GIR 0AA`.
    Girobank,
    /// Numeric BFPO address (e.g. `BFPO 1234`).
    BfpoNumber,
    /// Care-of BFPO address (e.g. `BFPO c/o 123`).
    BfpoCareOf,
    /// Overseas Territories: four letters then `1ZZ` (e.g. `ASCN 1ZZ`).
    OverseasTerritory,
    /// Anguilla's fixed code `AI-2640`.
    Anguilla,
}

impl GbFormat {
    /// Every format, in the order they are tried.
    pub const ALL: [Self; 9] = [
        Self::Standard,
        Self::LetterDigitLetter,
        Self::LetterLetterDigitLetter,
        Self::BfpoPostcode,
        Self::Girobank,
        Self::BfpoNumber,
        Self::BfpoCareOf,
        Self::OverseasTerritory,
        Self::Anguilla,
    ];

    /// Returns a short human-readable name for the format.
    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::LetterDigitLetter => "ANA NAA",
            Self::LetterLetterDigitLetter => "AANA NAA",
            Self::BfpoPostcode => "BFPO postcode",
            Self::Girobank => "Girobank",
            Self::BfpoNumber => "BFPO number",
            Self::BfpoCareOf => "BFPO c/o",
            Self::OverseasTerritory => "Overseas Territory",
            Self::Anguilla => "Anguilla",
        }
    }

    /// Returns the anchored pattern source for this format.
    fn pattern(self) -> String {
        let body = match self {
            Self::Standard => format!(r"{FIRST}{SECOND}?[0-9]{{1,2}}(?u:\s)*[0-9]{INWARD}{{2}}"),
            Self::LetterDigitLetter => format!(r"{FIRST}[0-9]{THIRD}(?u:\s)*[0-9]{INWARD}{{2}}"),
            Self::LetterLetterDigitLetter => {
                format!(r"{FIRST}{SECOND}[0-9]{FOURTH}(?u:\s)*[0-9]{INWARD}{{2}}")
            }
            Self::BfpoPostcode => format!(r"BF1(?u:\s)*[0-6]{BF1_THIRD}{BF1_FOURTH}"),
            Self::Girobank => r"GIR(?u:\s)*0AA".to_owned(),
            Self::BfpoNumber => r"BFPO(?u:\s)*[0-9]{1,4}".to_owned(),
            Self::BfpoCareOf => r"BFPO(?u:\s)*c/o(?u:\s)*[0-9]{1,3}".to_owned(),
            Self::OverseasTerritory => r"[A-Z]{4}(?u:\s)*1ZZ".to_owned(),
            Self::Anguilla => "AI-2640".to_owned(),
        };
        format!("(?i-u)^{body}$")
    }
}

/// Ordered set of compiled UK postcode patterns.
#[derive(Debug, Clone)]
pub struct GbMatcher {
    formats: Vec<(GbFormat, Regex)>,
}

impl GbMatcher {
    /// Compiles every [`GbFormat`] pattern.
    pub fn new() -> Self {
        let formats = GbFormat::ALL
            .iter()
            .map(|&format| (format, compile(&format.pattern())))
            .collect();
        Self { formats }
    }

    /// Returns the first format, in [`GbFormat::ALL`] order, that matches the
    /// whole of `value`.
    pub fn matching_format(&self, value: &str) -> Option<GbFormat> {
        let found = self
            .formats
            .iter()
            .find(|(_, re)| re.is_match(value))
            .map(|(format, _)| *format);
        if let Some(format) = found {
            tracing::trace!(format = format.name(), "matched UK postcode format");
        }
        found
    }

    /// Returns `true` if `value` matches a single, specific format,
    /// regardless of whether an earlier format would also match.
    pub fn matches_format(&self, format: GbFormat, value: &str) -> bool {
        self.formats
            .iter()
            .any(|(f, re)| *f == format && re.is_match(value))
    }

    /// Returns `true` if `value` is a UK postcode in any supported format.
    pub fn is_valid(&self, value: &str) -> bool {
        self.matching_format(value).is_some()
    }
}

impl Default for GbMatcher {
    fn default() -> Self {
        Self::new()
    }
}
