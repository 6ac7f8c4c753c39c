//! The host capability consulted while resolving a country.
//!
//! The resolver never inspects a form directly. Everything it needs from the
//! surrounding framework goes through [`ValidationContext`]: the current
//! value of another field, and callbacks registered under a name. Hosts
//! implement the trait over their own field storage; [`MapContext`] is an
//! in-memory implementation used by the CLI and by tests.
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::directive::CountryCallback;

// ---------------------------------------------------------------------------
// CallbackError
// ---------------------------------------------------------------------------

/// A failure raised by a caller-supplied country callback.
///
/// The resolver returns this to the caller unchanged; it is never converted
/// into an "unresolved country" result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackError {
    /// Name of the callback that failed, or `"<anonymous>"` for a callback
    /// passed by reference.
    pub callback: String,
    /// Human-readable description of the failure.
    pub detail: String,
}

impl CallbackError {
    /// Constructs a [`CallbackError`].
    pub fn new(callback: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            callback: callback.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for CallbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "country callback `{}` failed: {}", self.callback, self.detail)
    }
}

impl std::error::Error for CallbackError {}

// ---------------------------------------------------------------------------
// ValidationContext
// ---------------------------------------------------------------------------

/// Field lookup and named-callback dispatch supplied by the host.
///
/// The trait is object-safe; the resolver receives it as
/// `&dyn ValidationContext`.
pub trait ValidationContext {
    /// Returns the current text value of the field called `name`.
    ///
    /// Returns `None` when no such field exists. A field that exists but is
    /// blank returns `Some(String::new())`.
    fn field_value(&self, name: &str) -> Option<String>;

    /// Invokes the callback registered under `name` with the value being
    /// validated.
    ///
    /// Returns `None` when no callback of that name exists. The default
    /// implementation knows no callbacks.
    fn call_named(
        &self,
        _name: &str,
        _value: &str,
    ) -> Option<Result<Option<String>, CallbackError>> {
        None
    }
}

impl ValidationContext for BTreeMap<String, String> {
    fn field_value(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

// ---------------------------------------------------------------------------
// MapContext
// ---------------------------------------------------------------------------

/// An in-memory [`ValidationContext`] backed by ordered maps.
///
/// ```
/// use zipcode_core::{MapContext, ValidationContext};
///
/// let ctx = MapContext::new().with_field("country", "ca");
/// assert_eq!(ctx.field_value("country").as_deref(), Some("ca"));
/// assert_eq!(ctx.field_value("missing"), None);
/// ```
#[derive(Clone, Default)]
pub struct MapContext {
    fields: BTreeMap<String, String>,
    callbacks: BTreeMap<String, CountryCallback>,
}

impl MapContext {
    /// Creates an empty context with no fields and no callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a field and returns the context.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert_field(name, value);
        self
    }

    /// Adds (or replaces) a field in place.
    pub fn insert_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Registers a callback under `name` and returns the context.
    #[must_use]
    pub fn with_callback<F>(mut self, name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&str, &dyn ValidationContext) -> Result<Option<String>, CallbackError>
            + Send
            + Sync
            + 'static,
    {
        self.callbacks.insert(name.into(), Arc::new(callback));
        self
    }

    /// Returns the number of fields in the context.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl From<BTreeMap<String, String>> for MapContext {
    fn from(fields: BTreeMap<String, String>) -> Self {
        Self {
            fields,
            callbacks: BTreeMap::new(),
        }
    }
}

impl ValidationContext for MapContext {
    fn field_value(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    fn call_named(&self, name: &str, value: &str) -> Option<Result<Option<String>, CallbackError>> {
        let callback = self.callbacks.get(name)?;
        Some(callback(value, self))
    }
}

impl fmt::Debug for MapContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapContext")
            .field("fields", &self.fields)
            .field("callbacks", &self.callbacks.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
