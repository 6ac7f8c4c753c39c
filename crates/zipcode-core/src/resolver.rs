//! Country resolution: from a [`CountryDirective`] to a [`SupportedCountry`].
//!
//! A string directive is interpreted in three steps, stopping at the first
//! that produces a candidate:
//!
//! 1. the string itself, if it is a supported code (ASCII case-insensitive);
//! 2. the current value of the field with that name, if the field exists;
//! 3. the callback registered under that name, if there is one.
//!
//! A callback directive is simply invoked. Whatever the source, the candidate
//! is then uppercased (Unicode rules) and must be a supported code, otherwise the country is
//! unresolved. Callback failures are passed back to the caller untouched.
use crate::context::{CallbackError, ValidationContext};
use crate::country::SupportedCountry;
use crate::directive::CountryDirective;


/// Where a resolution candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The directive string was itself a supported code.
    Literal,
    /// The value of the field named by the directive.
    Field,
    /// A callback passed directly in the directive.
    Callback,
    /// A callback registered in the context under the directive's name.
    NamedCallback,
}

/// Resolves `directive` to a supported country.
///
/// Returns `Ok(None)` when no candidate is produced, when the candidate is
/// empty, or when it is not one of the supported codes.
///
/// # Errors
///
/// Returns the [`CallbackError`] raised by a directive callback or by a
/// named callback looked up in `context`.
///
/// # Examples
///
/// ```
/// use zipcode_core::{CountryDirective, MapContext, SupportedCountry, resolve};
///
/// let ctx = MapContext::new().with_field("country", "ca");
/// let got = resolve(&CountryDirective::from("country"), "K1A 0B1", &ctx);
/// assert_eq!(got, Ok(Some(SupportedCountry::Ca)));
/// ```
pub fn resolve(
    directive: &CountryDirective,
    value: &str,
    context: &dyn ValidationContext,
) -> Result<Option<SupportedCountry>, CallbackError> {
    let Some((source, candidate)) = candidate(directive, value, context)? else {
        tracing::debug!(?directive, "no country candidate produced");
        return Ok(None);
    };

    if candidate.is_empty() {
        tracing::debug!(?directive, ?source, "country candidate is empty");
        return Ok(None);
    }

    // Full Unicode uppercasing: `"ſe"` becomes `"SE"`.
    let resolved = SupportedCountry::parse(&candidate.to_uppercase());
    match resolved {
        Some(country) => tracing::debug!(?source, %country, "resolved country"),
        None => tracing::debug!(?source, %candidate, "country candidate is not supported"),
    }
    Ok(resolved)
}

/// Produces the raw candidate string for `directive`, with its source.
fn candidate(
    directive: &CountryDirective,
    value: &str,
    context: &dyn ValidationContext,
) -> Result<Option<(Source, String)>, CallbackError> {
    match directive {
        CountryDirective::Callback(callback) => {
            Ok(callback(value, context)?.map(|code| (Source::Callback, code)))
        }
        CountryDirective::Literal(name) | CountryDirective::FieldReference(name) => {
            named_candidate(name, value, context)
        }
    }
}

/// Interprets a string directive as a code, then a field, then a callback.
fn named_candidate(
    name: &str,
    value: &str,
    context: &dyn ValidationContext,
) -> Result<Option<(Source, String)>, CallbackError> {
    if let Some(country) = SupportedCountry::parse(name) {
        return Ok(Some((Source::Literal, country.code().to_owned())));
    }

    // A field that exists always wins, even when blank; a blank field then
    // leaves the country unresolved instead of falling through to a callback.
    if let Some(field_value) = context.field_value(name) {
        return Ok(Some((Source::Field, field_value)));
    }

    match context.call_named(name, value) {
        Some(result) => Ok(result?.map(|code| (Source::NamedCallback, code))),
        None => Ok(None),
    }
}
