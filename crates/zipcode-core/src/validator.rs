//! The postal code validator: short-circuit, resolve, then match.
//!
//! [`ZipCodeValidator::validate`] follows the same contract for every call:
//!
//! - a blank value, or a field with no country configured, is valid;
//! - a non-blank value whose country cannot be resolved is invalid;
//! - otherwise the resolved country's rule decides.
//!
//! The validator holds no mutable state and can be shared across threads.
use serde::{Deserialize, Serialize};

use crate::context::{CallbackError, ValidationContext};
use crate::country::SupportedCountry;
use crate::directive::CountryDirective;
use crate::matcher::PostalCodeMatcher;
use crate::messages::message_for;
use crate::resolver::resolve;


/// Per-field configuration of the validator.
///
/// Deserializes from JSON such as `{"country": "billing_country"}`; the
/// country string becomes a [`CountryDirective::Literal`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZipCodeOptions {
    /// Where the country comes from. `None` disables the check.
    pub country: Option<CountryDirective>,
    /// Overrides the default message.
    pub message: Option<String>,
}

impl ZipCodeOptions {
    /// Options that validate against `country`.
    pub fn with_country(country: impl Into<CountryDirective>) -> Self {
        Self {
            country: Some(country.into()),
            message: None,
        }
    }
}

/// What a single validation call concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The value was blank or no country is configured.
    Skipped,
    /// The value is present but no supported country could be resolved.
    Unresolved,
    /// The value was checked against `country`'s rule.
    Checked {
        /// The resolved country.
        country: SupportedCountry,
        /// Whether the value matched.
        valid: bool,
    },
}

impl Outcome {
    /// Collapses the outcome to the validator's boolean contract.
    pub fn is_valid(self) -> bool {
        match self {
            Self::Skipped => true,
            Self::Unresolved => false,
            Self::Checked { valid, .. } => valid,
        }
    }

    /// Returns the resolved country, if the value was checked.
    pub fn country(self) -> Option<SupportedCountry> {
        match self {
            Self::Checked { country, .. } => Some(country),
            Self::Skipped | Self::Unresolved => None,
        }
    }
}

/// Validates postal codes for one configured field.
///
/// ```
/// use zipcode_core::{MapContext, ZipCodeOptions, ZipCodeValidator};
///
/// let validator = ZipCodeValidator::new(ZipCodeOptions::with_country("country"));
/// let ctx = MapContext::new().with_field("country", "ca");
/// assert_eq!(validator.validate("K1A 0B1", &ctx), Ok(true));
/// assert_eq!(validator.validate("12345", &ctx), Ok(false));
/// assert_eq!(validator.validate("", &ctx), Ok(true));
/// ```
#[derive(Debug, Clone)]
pub struct ZipCodeValidator {
    options: ZipCodeOptions,
    matcher: PostalCodeMatcher,
}

impl ZipCodeValidator {
    /// Creates a validator with a freshly compiled [`PostalCodeMatcher`].
    pub fn new(options: ZipCodeOptions) -> Self {
        Self::with_matcher(options, PostalCodeMatcher::new())
    }

    /// Creates a validator that uses an already compiled matcher.
    pub fn with_matcher(options: ZipCodeOptions, matcher: PostalCodeMatcher) -> Self {
        Self { options, matcher }
    }

    /// Returns the validator's options.
    pub fn options(&self) -> &ZipCodeOptions {
        &self.options
    }

    /// Returns `true` if `value` is acceptable for this field.
    ///
    /// # Errors
    ///
    /// Returns the [`CallbackError`] of a failing country callback.
    pub fn validate(
        &self,
        value: &str,
        context: &dyn ValidationContext,
    ) -> Result<bool, CallbackError> {
        self.validate_detailed(value, context).map(Outcome::is_valid)
    }

    /// Like [`validate`][Self::validate], but reports how the result was
    /// reached.
    ///
    /// # Errors
    ///
    /// Returns the [`CallbackError`] of a failing country callback.
    pub fn validate_detailed(
        &self,
        value: &str,
        context: &dyn ValidationContext,
    ) -> Result<Outcome, CallbackError> {
        if value.trim().is_empty() {
            return Ok(Outcome::Skipped);
        }
        let Some(directive) = self.options.country.as_ref().filter(|d| !d.is_empty()) else {
            return Ok(Outcome::Skipped);
        };

        let Some(country) = resolve(directive, value, context)? else {
            tracing::debug!(?directive, "postal code rejected: country unresolved");
            return Ok(Outcome::Unresolved);
        };

        Ok(Outcome::Checked {
            country,
            valid: self.matcher.is_valid(country, value),
        })
    }

    /// Returns the message to show when validation fails.
    pub fn message(&self) -> String {
        self.options
            .message
            .clone()
            .unwrap_or_else(|| message_for(self.options.country.as_ref()))
    }
}
