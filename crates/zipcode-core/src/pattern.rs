//! Regex compilation for the built-in postal code patterns.
use regex::Regex;

/// Compiles one of the crate's own pattern literals.
///
/// Every pattern passed here is a string constant covered by the matcher
/// tests. A pattern that fails to compile is logged and replaced by one that
/// matches nothing.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| {
        tracing::error!(%pattern, %err, "built-in postal code pattern failed to compile");
        Regex::new("a^").unwrap_or_else(|_| unreachable!("regex engine broken"))
    })
}
