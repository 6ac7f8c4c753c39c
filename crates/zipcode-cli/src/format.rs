/// Result formatting: human-readable and JSON (NDJSON) modes.
///
/// Each validated value becomes one [`Report`] line on stdout:
///
/// - **Human mode** (default): `valid`, `invalid` or `skipped`, then the
///   value and the resolved country, color-coded when colors are enabled.
///   Colors are off when `--no-color` is set, when `NO_COLOR` is present
///   (per <https://no-color.org>), or when stdout is not a TTY.
/// - **JSON mode**: one self-contained JSON object per line.
///
/// Summaries and timing go to stderr. The **quiet** flag drops accepted
/// values and the summary; the **verbose** flag adds timing.
use std::io::{IsTerminal as _, Write};
use std::time::Duration;

use serde::Serialize;
use zipcode_core::Outcome;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stdout.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

const ANSI_RED: &str = "\x1b[31m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_YELLOW: &str = "\x1b[33m";
const ANSI_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Output format selection, mirroring the CLI `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Human-readable, optionally colored output.
    Human,
    /// Structured NDJSON output.
    Json,
}

/// Configuration for the result formatter, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Human or JSON output.
    pub mode: FormatMode,
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Only report rejected values; no summary.
    pub quiet: bool,
    /// Emit timing to stderr.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(mode: FormatMode, no_color_flag: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            mode,
            colors: colors_enabled(no_color_flag),
            quiet,
            verbose,
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// The result of validating one value, ready for output.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    /// Position in the batch; `None` for `check`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    /// The value as given.
    pub value: &'a str,
    /// Whether the value was accepted.
    pub accepted: bool,
    /// How the validator reached its verdict.
    #[serde(flatten)]
    pub outcome: Outcome,
    /// The rejection message; `None` when accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<'a> Report<'a> {
    /// Builds a report; `message` is kept only for rejected values.
    pub fn new(index: Option<usize>, value: &'a str, outcome: Outcome, message: String) -> Self {
        let accepted = outcome.is_valid();
        Self {
            index,
            value,
            accepted,
            outcome,
            message: (!accepted).then_some(message),
        }
    }
}

/// Writes a single [`Report`] to `writer` in the configured format.
///
/// In quiet mode accepted values are suppressed.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &Report<'_>,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet && report.accepted {
        return Ok(());
    }
    match config.mode {
        FormatMode::Human => write_report_human(writer, report, config),
        FormatMode::Json => {
            serde_json::to_writer(&mut *writer, report)?;
            writeln!(writer)
        }
    }
}

/// Human format: `invalid  "12345"  CA: Please enter a valid Canadian postal code`
fn write_report_human<W: Write>(
    writer: &mut W,
    report: &Report<'_>,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    let (tag, color) = match report.outcome {
        Outcome::Skipped => ("skipped", ANSI_YELLOW),
        Outcome::Unresolved | Outcome::Checked { valid: false, .. } => ("invalid", ANSI_RED),
        Outcome::Checked { valid: true, .. } => ("valid", ANSI_GREEN),
    };
    let country = match report.outcome {
        Outcome::Checked { country, .. } => country.code(),
        Outcome::Unresolved => "unresolved",
        Outcome::Skipped => "-",
    };

    if let Some(index) = report.index {
        write!(writer, "#{index}  ")?;
    }
    if config.colors {
        write!(writer, "{color}{tag:<7}{ANSI_RESET}")?;
    } else {
        write!(writer, "{tag:<7}")?;
    }
    write!(writer, "  {:?}  {country}", report.value)?;
    match &report.message {
        Some(message) => writeln!(writer, ": {message}"),
        None => writeln!(writer),
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Running totals over a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Values checked and accepted.
    pub valid: usize,
    /// Values rejected, including those whose country was unresolved.
    pub invalid: usize,
    /// Values skipped because they were blank or had no country.
    pub skipped: usize,
}

impl Tally {
    /// Counts one outcome.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Skipped => self.skipped += 1,
            Outcome::Unresolved | Outcome::Checked { valid: false, .. } => self.invalid += 1,
            Outcome::Checked { valid: true, .. } => self.valid += 1,
        }
    }

    /// Total number of values counted.
    pub fn total(&self) -> usize {
        self.valid + self.invalid + self.skipped
    }
}

/// Writes the batch summary to `writer`; suppressed in quiet mode.
///
/// Human format: `3 records: 2 valid, 1 invalid, 0 skipped`.
/// JSON format: `{"summary":{"records":3,"valid":2,"invalid":1,"skipped":0}}`.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    tally: &Tally,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    let records = tally.total();
    match config.mode {
        FormatMode::Human => writeln!(
            writer,
            "{records} {}: {} valid, {} invalid, {} skipped",
            pluralize(records, "record", "records"),
            tally.valid,
            tally.invalid,
            tally.skipped,
        ),
        FormatMode::Json => writeln!(
            writer,
            r#"{{"summary":{{"records":{records},"valid":{},"invalid":{},"skipped":{}}}}}"#,
            tally.valid, tally.invalid, tally.skipped,
        ),
    }
}

/// Writes timing information to `writer` in verbose mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_timing<W: Write>(
    writer: &mut W,
    label: &str,
    duration: Duration,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    writeln!(writer, "{label} in {}ms", duration.as_millis())
}

/// Returns the singular or plural form of `word` depending on `count`.
fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
