#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod context;
pub mod country;
pub mod directive;
pub mod gb;
pub mod matcher;
pub mod messages;
mod pattern;
pub mod resolver;
pub mod validator;

pub use context::{CallbackError, MapContext, ValidationContext};
pub use country::{CountryParseError, SupportedCountry};
pub use directive::{CountryCallback, CountryDirective};
pub use gb::{GbFormat, GbMatcher};
pub use matcher::{PostalCodeMatcher, Rule};
pub use messages::{DEFAULT_MESSAGE, country_message, message_for};
pub use resolver::{Source, resolve};
pub use validator::{Outcome, ZipCodeOptions, ZipCodeValidator};

/// Returns the current version of the zipcode-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
