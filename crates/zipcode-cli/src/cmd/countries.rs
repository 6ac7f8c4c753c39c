//! Implementation of `zipcode countries`.
//!
//! Lists each supported code with its label. Human mode prints one aligned
//! line per country; JSON mode prints a single object.
use std::io::Write;

use serde::Serialize;
use zipcode_core::SupportedCountry;

use super::write_failed;
use crate::error::CliError;
use crate::format::{FormatMode, FormatterConfig};

#[derive(Serialize)]
struct CountryEntry {
    code: &'static str,
    label: &'static str,
}

#[derive(Serialize)]
struct CountryList {
    countries: Vec<CountryEntry>,
}

/// Runs the `countries` command.
///
/// # Errors
///
/// Returns [`CliError::IoError`] when `out` cannot be written.
pub fn run<W: Write>(config: &FormatterConfig, out: &mut W) -> Result<(), CliError> {
    write_countries(config.mode, out).map_err(|e| write_failed("stdout", &e))
}

fn write_countries<W: Write>(mode: FormatMode, out: &mut W) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => {
            for country in SupportedCountry::ALL {
                writeln!(out, "{:<4}{}", country.code(), country.label())?;
            }
            Ok(())
        }
        FormatMode::Json => {
            let list = CountryList {
                countries: SupportedCountry::ALL
                    .iter()
                    .map(|c| CountryEntry {
                        code: c.code(),
                        label: c.label(),
                    })
                    .collect(),
            };
            serde_json::to_writer(&mut *out, &list)?;
            writeln!(out)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn capture(mode: FormatMode) -> String {
        let config = FormatterConfig {
            mode,
            colors: false,
            quiet: false,
            verbose: false,
        };
        let mut out: Vec<u8> = Vec::new();
        run(&config, &mut out).expect("write");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn human_lists_every_code_in_order() {
        let out = capture(FormatMode::Human);
        let codes: Vec<&str> = out
            .lines()
            .filter_map(|l| l.split_whitespace().next())
            .collect();
        assert_eq!(codes, SupportedCountry::codes());
        assert!(out.contains("SE  Swedish postal code"), "output: {out}");
    }

    #[test]
    fn json_is_single_object() {
        let out = capture(FormatMode::Json);
        let v: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
        let list = v["countries"].as_array().expect("array");
        assert_eq!(list.len(), 8);
        assert_eq!(list[0]["code"], "CA");
        assert_eq!(list[0]["label"], "Canadian postal code");
    }
}
