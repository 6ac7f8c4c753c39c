//! Implementation of `zipcode check <VALUE>`.
//!
//! Validates one value. `--country` is the country directive and each
//! `--field NAME=VALUE` adds a field the directive may refer to.
//!
//! Exit codes:
//! - 0 = valid, or skipped (blank value or no country)
//! - 1 = rejected
//! - 2 = malformed `--field` argument
use std::io::Write;

use zipcode_core::{CountryDirective, MapContext, ZipCodeOptions, ZipCodeValidator};

use super::write_failed;
use crate::error::CliError;
use crate::format::{FormatterConfig, Report, write_report};

/// Arguments of `zipcode check`.
#[derive(Debug, Clone, Copy)]
pub struct CheckArgs<'a> {
    /// The value to validate.
    pub value: &'a str,
    /// Raw `--country` directive.
    pub country: Option<&'a str>,
    /// Raw `--field` arguments.
    pub fields: &'a [String],
    /// Raw `--message` override.
    pub message: Option<&'a str>,
}

/// Runs the `check` command, writing the result line to `out`.
///
/// # Errors
///
/// - [`CliError::InvalidField`] when a `--field` is not `NAME=VALUE`.
/// - [`CliError::ValidationFailed`] when the value is rejected.
/// - [`CliError::IoError`] when `out` cannot be written.
pub fn run<W: Write>(
    args: CheckArgs<'_>,
    config: &FormatterConfig,
    out: &mut W,
) -> Result<(), CliError> {
    let mut context = MapContext::new();
    for arg in args.fields {
        let (name, value) = parse_field(arg)?;
        context.insert_field(name, value);
    }

    let validator = ZipCodeValidator::new(ZipCodeOptions {
        country: args.country.map(CountryDirective::from),
        message: args.message.map(str::to_owned),
    });
    tracing::debug!(
        country = ?args.country,
        fields = context.field_count(),
        "checking postal code"
    );

    let outcome = validator.validate_detailed(args.value, &context)?;
    let report = Report::new(None, args.value, outcome, validator.message());
    write_report(out, &report, config).map_err(|e| write_failed("stdout", &e))?;

    if report.accepted {
        Ok(())
    } else {
        Err(CliError::ValidationFailed { invalid: 1 })
    }
}

/// Splits a `NAME=VALUE` argument at the first `=`.
///
/// The name must be non-empty; the value may be empty, which models a field
/// that exists but is blank.
fn parse_field(arg: &str) -> Result<(&str, &str), CliError> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        Some(_) | None => Err(CliError::InvalidField {
            arg: arg.to_owned(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
