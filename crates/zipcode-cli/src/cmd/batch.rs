//! Implementation of `zipcode batch <file>`.
//!
//! Reads a JSON document of records and validates each one:
//!
//! ```json
//! { "records": [
//!     { "value": "K1A 0B1", "country": "shipping", "fields": { "shipping": "ca" } },
//!     { "value": "12345", "country": "US" },
//!     { "value": "anything" }
//! ] }
//! ```
//!
//! A record without `country` is skipped. One result line per record goes to
//! `out`; the summary and timing go to `err`.
//!
//! Exit codes:
//! - 0 = every record valid or skipped
//! - 1 = at least one record rejected
//! - 2 = the document could not be parsed
use std::collections::BTreeMap;
use std::io::Write;
use std::time::Instant;

use serde::Deserialize;
use zipcode_core::{CountryDirective, PostalCodeMatcher, ZipCodeOptions, ZipCodeValidator};

use super::write_failed;
use crate::error::CliError;
use crate::format::{FormatterConfig, Report, Tally, write_report, write_summary, write_timing};

/// Top-level batch document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchDocument {
    /// Records in input order.
    pub records: Vec<BatchRecord>,
}

/// One value to validate, with the form state it is validated against.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchRecord {
    /// The postal code as entered.
    pub value: String,
    /// Country directive; absent means no country is configured.
    #[serde(default)]
    pub country: Option<String>,
    /// Other fields on the same form.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
    /// Message override for this record.
    #[serde(default)]
    pub message: Option<String>,
}

impl BatchRecord {
    fn options(&self) -> ZipCodeOptions {
        ZipCodeOptions {
            country: self.country.as_deref().map(CountryDirective::from),
            message: self.message.clone(),
        }
    }
}

/// Parses `content` as a [`BatchDocument`].
///
/// # Errors
///
/// Returns [`CliError::ParseFailed`] with the line and column of the error.
pub fn parse(content: &str) -> Result<BatchDocument, CliError> {
    serde_json::from_str(content).map_err(|e| CliError::ParseFailed {
        detail: format!("line {}, column {}: {e}", e.line(), e.column()),
    })
}

/// Runs the `batch` command over already-read `content`.
///
/// # Errors
///
/// - [`CliError::ParseFailed`] when `content` is not a batch document.
/// - [`CliError::ValidationFailed`] when any record is rejected.
/// - [`CliError::IoError`] when an output stream cannot be written.
pub fn run<W: Write, E: Write>(
    content: &str,
    config: &FormatterConfig,
    out: &mut W,
    err: &mut E,
) -> Result<(), CliError> {
    let document = parse(content)?;
    let start = Instant::now();

    // Compiled once; each record's validator gets a cheap clone.
    let matcher = PostalCodeMatcher::new();
    let mut tally = Tally::default();

    for (index, record) in document.records.iter().enumerate() {
        let validator = ZipCodeValidator::with_matcher(record.options(), matcher.clone());
        let outcome = validator.validate_detailed(&record.value, &record.fields)?;
        tally.record(outcome);
        let report = Report::new(Some(index), &record.value, outcome, validator.message());
        write_report(out, &report, config).map_err(|e| write_failed("stdout", &e))?;
    }

    tracing::debug!(
        records = tally.total(),
        invalid = tally.invalid,
        "batch validated"
    );
    write_summary(err, &tally, config).map_err(|e| write_failed("stderr", &e))?;
    write_timing(err, "validated", start.elapsed(), config)
        .map_err(|e| write_failed("stderr", &e))?;

    if tally.invalid > 0 {
        Err(CliError::ValidationFailed {
            invalid: tally.invalid,
        })
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;
    use crate::format::FormatMode;

    const ALL_VALID: &str = r#"{
        "records": [
            { "value": "12345", "country": "US" },
            { "value": "K1A 0B1", "country": "shipping", "fields": { "shipping": "ca" } },
            { "value": "", "country": "GB" },
            { "value": "whatever" }
        ]
    }"#;

    const MIXED: &str = r#"{
        "records": [
            { "value": "1234 AB", "country": "NL" },
            { "value": "1234 SA", "country": "NL" },
            { "value": "749999", "country": "sg" },
            { "value": "75001", "country": "FR" }
        ]
    }"#;

    fn config(mode: FormatMode) -> FormatterConfig {
        FormatterConfig {
            mode,
            colors: false,
            quiet: false,
            verbose: false,
        }
    }

    fn run_batch(content: &str, mode: FormatMode) -> (Result<(), CliError>, String, String) {
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        let result = run(content, &config(mode), &mut out, &mut err);
        (
            result,
            String::from_utf8(out).expect("utf8"),
            String::from_utf8(err).expect("utf8"),
        )
    }

    // ── parse ─────────────────────────────────────────────────────────────────

    #[test]
    fn parse_defaults_optional_record_fields() {
        let doc = parse(r#"{"records":[{"value":"2100"}]}"#).expect("parse");
        let record = &doc.records[0];
        assert_eq!(record.value, "2100");
        assert!(record.country.is_none());
        assert!(record.fields.is_empty());
        assert!(record.options().country.is_none());
    }

    #[test]
    fn parse_rejects_unknown_record_keys() {
        let err = parse(r#"{"records":[{"value":"2100","contry":"DK"}]}"#)
            .expect_err("unknown key");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn parse_error_mentions_line_and_column() {
        let err = parse("{\n  \"records\": [ !!\n}").expect_err("bad JSON");
        let msg = err.message();
        assert!(msg.contains("line 2"), "message: {msg}");
        assert!(msg.contains("column"), "message: {msg}");
    }

    // ── run ───────────────────────────────────────────────────────────────────

    #[test]
    fn all_valid_batch_returns_ok() {
        let (result, out, err) = run_batch(ALL_VALID, FormatMode::Human);
        assert!(result.is_ok(), "{result:?}");
        assert_eq!(out.lines().count(), 4, "output: {out}");
        assert_eq!(err, "4 records: 2 valid, 0 invalid, 2 skipped\n");
    }

    #[test]
    fn mixed_batch_counts_rejections() {
        let (result, out, err) = run_batch(MIXED, FormatMode::Human);
        match result {
            Err(CliError::ValidationFailed { invalid }) => assert_eq!(invalid, 3),
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("#0  valid"), "output: {out}");
        assert!(lines[1].starts_with("#1  invalid"), "output: {out}");
        assert!(lines[3].contains("unresolved"), "output: {out}");
        assert!(err.contains("1 valid, 3 invalid"), "summary: {err}");
    }

    #[test]
    fn json_mode_emits_one_object_per_record() {
        let (_, out, err) = run_batch(MIXED, FormatMode::Json);
        let values: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).expect("NDJSON line"))
            .collect();
        assert_eq!(values.len(), 4);
        assert_eq!(values[1]["index"], 1);
        assert_eq!(values[1]["accepted"], false);
        assert_eq!(values[1]["message"], "Please enter a valid Dutch postal code");
        assert_eq!(values[3]["status"], "unresolved");
        let summary: serde_json::Value = serde_json::from_str(err.trim()).expect("summary");
        assert_eq!(summary["summary"]["records"], 4);
    }

    #[test]
    fn blank_field_leaves_country_unresolved() {
        let doc = r#"{"records":[{"value":"12345","country":"c","fields":{"c":""}}]}"#;
        let (result, out, _) = run_batch(doc, FormatMode::Human);
        assert_eq!(result.expect_err("rejected").exit_code(), 1);
        assert!(out.contains("unresolved"), "output: {out}");
    }

    #[test]
    fn empty_batch_is_ok() {
        let (result, out, err) = run_batch(r#"{"records":[]}"#, FormatMode::Human);
        assert!(result.is_ok());
        assert!(out.is_empty());
        assert_eq!(err, "0 records: 0 valid, 0 invalid, 0 skipped\n");
    }

    #[test]
    fn not_json_is_parse_failure() {
        let (result, out, _) = run_batch("this is not json", FormatMode::Human);
        match result {
            Err(CliError::ParseFailed { .. }) => {}
            other => panic!("expected ParseFailed, got {other:?}"),
        }
        assert!(out.is_empty());
    }
}
