//! Seeded postal code generator.
//!
//! Well-formed samples follow each country's rule exactly. Noise samples are
//! random strings over the postal code alphabet and are usually rejected.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zipcode_core::SupportedCountry;

const CA_LETTERS: &[u8] = b"ABCEGHJKLMNPRSTVXY";
const GB_FIRST: &[u8] = b"ABCDEFGHIJKLMNOPRSTUWYZ";
const GB_SECOND: &[u8] = b"ABCDEFGHKLMNOPQRSTUVWXY";
const GB_INWARD: &[u8] = b"ABDEFGHJLNPQRSTUWXYZ";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NOISE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789 -";
const SG_SECTORS: &[u8] = &[
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26,
    27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50,
    51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 75,
    76, 77, 78, 79, 80, 81, 82,
];

/// Configuration for [`generate_samples`].
#[derive(Debug, Clone)]
pub struct SampleConfig {
    /// Seed for the random number generator.
    pub seed: u64,
    /// Number of samples to produce.
    pub count: usize,
    /// Fraction of samples that are well-formed (0.0-1.0).
    pub well_formed_ratio: f64,
}

/// Predefined batch sizes for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 100 samples.
    Small,
    /// 1 000 samples.
    Medium,
    /// 10 000 samples.
    Large,
}

impl SizeTier {
    /// Returns the default [`SampleConfig`] for this tier.
    pub fn config(self, seed: u64) -> SampleConfig {
        let count = match self {
            SizeTier::Small => 100,
            SizeTier::Medium => 1_000,
            SizeTier::Large => 10_000,
        };
        SampleConfig {
            seed,
            count,
            well_formed_ratio: 0.8,
        }
    }
}

/// One generated postal code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// The country the value was generated for.
    pub country: SupportedCountry,
    /// The postal code text.
    pub value: String,
    /// `true` if the value was built to satisfy the country's rule.
    pub well_formed: bool,
}

/// Generates `config.count` samples, cycling evenly through the countries.
pub fn generate_samples(config: &SampleConfig) -> Vec<Sample> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let countries = SupportedCountry::ALL;
    (0..config.count)
        .map(|i| {
            let country = countries[i % countries.len()];
            if rng.gen_bool(config.well_formed_ratio.clamp(0.0, 1.0)) {
                Sample {
                    country,
                    value: well_formed(country, &mut rng),
                    well_formed: true,
                }
            } else {
                Sample {
                    country,
                    value: noise(&mut rng),
                    well_formed: false,
                }
            }
        })
        .collect()
}

/// Builds a value that satisfies `country`'s rule.
pub fn well_formed(country: SupportedCountry, rng: &mut StdRng) -> String {
    match country {
        SupportedCountry::Ca => {
            let sep = if rng.gen_bool(0.5) { " " } else { "" };
            format!(
                "{}{}{}{sep}{}{}{}",
                pick(rng, CA_LETTERS),
                digit(rng),
                pick(rng, CA_LETTERS),
                digit(rng),
                pick(rng, CA_LETTERS),
                digit(rng),
            )
        }
        SupportedCountry::Dk => {
            let prefix = if rng.gen_bool(0.3) { "DK-" } else { "" };
            format!("{prefix}{}", digits(rng, 4))
        }
        SupportedCountry::Gb => {
            let second = if rng.gen_bool(0.5) {
                pick(rng, GB_SECOND).to_string()
            } else {
                String::new()
            };
            let district_len = rng.gen_range(1..=2);
            let district = digits(rng, district_len);
            format!(
                "{}{second}{district} {}{}{}",
                pick(rng, GB_FIRST),
                digit(rng),
                pick(rng, GB_INWARD),
                pick(rng, GB_INWARD),
            )
        }
        SupportedCountry::It => {
            let prefix = if rng.gen_bool(0.3) { "IT-" } else { "" };
            format!("{prefix}{}", digits(rng, 5))
        }
        SupportedCountry::Nl => {
            let suffix = loop {
                let pair = format!("{}{}", pick(rng, UPPER), pick(rng, UPPER));
                if !matches!(pair.as_str(), "SA" | "SD" | "SS") {
                    break pair;
                }
            };
            format!("{}{} {suffix}", rng.gen_range(1..=9), digits(rng, 3))
        }
        SupportedCountry::Se => {
            let prefix = if rng.gen_bool(0.3) { "S-" } else { "" };
            format!("{prefix}{} {}", digits(rng, 3), digits(rng, 2))
        }
        SupportedCountry::Sg => {
            let sector = SG_SECTORS[rng.gen_range(0..SG_SECTORS.len())];
            format!("{sector:02}{}", digits(rng, 4))
        }
        SupportedCountry::Us => {
            if rng.gen_bool(0.3) {
                format!("{}-{}", digits(rng, 5), digits(rng, 4))
            } else {
                digits(rng, 5)
            }
        }
    }
}

/// Random text over the postal code alphabet, 1 to 10 characters long.
pub fn noise(rng: &mut StdRng) -> String {
    let len = rng.gen_range(1..=10);
    (0..len).map(|_| pick(rng, NOISE)).collect()
}

fn pick(rng: &mut StdRng, alphabet: &[u8]) -> char {
    char::from(alphabet[rng.gen_range(0..alphabet.len())])
}

fn digit(rng: &mut StdRng) -> char {
    char::from(rng.gen_range(b'0'..=b'9'))
}

fn digits(rng: &mut StdRng, n: usize) -> String {
    (0..n).map(|_| digit(rng)).collect()
}
