//! How the caller says which country a value belongs to.
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};

use crate::context::{CallbackError, ValidationContext};
use crate::country::SupportedCountry;

/// A callback that computes a country code from the value being validated.
///
/// Returning `Ok(None)` (or an empty string) means "no country"; the value is
/// then rejected. Returning `Err` aborts validation and hands the error to the
/// caller.
pub type CountryCallback = Arc<
    dyn Fn(&str, &dyn ValidationContext) -> Result<Option<String>, CallbackError> + Send + Sync,
>;

/// The country configuration for one validation call.
///
/// `Literal` and `FieldReference` resolve identically: a string that is a
/// supported code is always used as that code, and anything else is tried as
/// a field name and then as a callback name. The two variants only record
/// what the caller meant.
#[derive(Clone)]
pub enum CountryDirective {
    /// A country code, e.g. `"US"` or `"gb"`.
    Literal(String),
    /// The name of another field whose value is the country code.
    FieldReference(String),
    /// A callback invoked with the value and the context.
    Callback(CountryCallback),
}

impl CountryDirective {
    /// Wraps a closure as a [`CountryDirective::Callback`].
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&str, &dyn ValidationContext) -> Result<Option<String>, CallbackError>
            + Send
            + Sync
            + 'static,
    {
        Self::Callback(Arc::new(f))
    }

    /// Returns the directive string for the `Literal` and `FieldReference`
    /// variants.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Literal(s) | Self::FieldReference(s) => Some(s.as_str()),
            Self::Callback(_) => None,
        }
    }

    /// Returns `true` for a string directive that is empty.
    ///
    /// An empty directive counts as "no country configured".
    pub fn is_empty(&self) -> bool {
        self.as_str().is_some_and(str::is_empty)
    }
}

impl fmt::Debug for CountryDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Self::FieldReference(s) => f.debug_tuple("FieldReference").field(s).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl From<&str> for CountryDirective {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_owned())
    }
}

impl From<String> for CountryDirective {
    fn from(s: String) -> Self {
        Self::Literal(s)
    }
}

impl From<SupportedCountry> for CountryDirective {
    fn from(country: SupportedCountry) -> Self {
        Self::Literal(country.code().to_owned())
    }
}

/// Deserializes from a plain string into [`CountryDirective::Literal`].
///
/// Callbacks cannot be expressed in serialized configuration.
impl<'de> Deserialize<'de> for CountryDirective {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        String::deserialize(d).map(Self::Literal)
    }
}
