//! Postal code sample generator and benchmark utilities.
//!
//! Produces deterministic, seeded batches of postal codes for benchmarking
//! and property checks of `zipcode-core`.

pub mod generator;

pub use generator::{Sample, SampleConfig, SizeTier, generate_samples};
