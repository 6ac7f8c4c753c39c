//! Default validation messages.
//!
//! Plain English text for display. Hosts that localise their messages should
//! key off [`SupportedCountry`] themselves.
use crate::country::SupportedCountry;
use crate::directive::CountryDirective;

/// Message used when the country is not known statically.
pub const DEFAULT_MESSAGE: &str = "Please enter a valid zip code";

/// Returns the message naming `country`'s postal code format.
pub fn country_message(country: SupportedCountry) -> String {
    format!("Please enter a valid {}", country.label())
}

/// Returns the message for a field configured with `directive`.
///
/// Only a directive spelled exactly as a supported code (`"GB"`, not `"gb"`)
/// names a country. Everything else, including field references and
/// callbacks, gets [`DEFAULT_MESSAGE`]. Resolution itself ignores case; the
/// message lookup does not.
pub fn message_for(directive: Option<&CountryDirective>) -> String {
    let named = directive
        .and_then(CountryDirective::as_str)
        .and_then(|code| SupportedCountry::ALL.into_iter().find(|c| c.code() == code));
    match named {
        Some(country) => country_message(country),
        None => DEFAULT_MESSAGE.to_owned(),
    }
}
