//! Matcher benchmarks: per-country rule checks and full validation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use zipcode_bench::{SizeTier, generate_samples};
use zipcode_core::{GbFormat, MapContext, PostalCodeMatcher, ZipCodeOptions, ZipCodeValidator};

fn bench_compile(c: &mut Criterion) {
    c.bench_function("matcher/compile", |b| b.iter(PostalCodeMatcher::new));
}

fn bench_matching(c: &mut Criterion) {
    let matcher = PostalCodeMatcher::new();
    let mut group = c.benchmark_group("matching");

    for (name, tier) in [
        ("S", SizeTier::Small),
        ("M", SizeTier::Medium),
        ("L", SizeTier::Large),
    ] {
        let samples = generate_samples(&tier.config(42));
        group.throughput(Throughput::Elements(samples.len() as u64));

        group.bench_with_input(BenchmarkId::new("is_valid", name), &samples, |b, samples| {
            b.iter(|| {
                samples
                    .iter()
                    .filter(|s| matcher.is_valid(s.country, black_box(&s.value)))
                    .count()
            });
        });

        group.bench_with_input(BenchmarkId::new("validate", name), &samples, |b, samples| {
            let ctx = MapContext::new();
            let validators: Vec<ZipCodeValidator> = samples
                .iter()
                .map(|s| {
                    ZipCodeValidator::with_matcher(
                        ZipCodeOptions::with_country(s.country),
                        matcher.clone(),
                    )
                })
                .collect();
            b.iter(|| {
                validators
                    .iter()
                    .zip(samples)
                    .filter(|(v, s)| v.validate(black_box(&s.value), &ctx).unwrap_or(false))
                    .count()
            });
        });
    }
    group.finish();
}

fn bench_gb_formats(c: &mut Criterion) {
    let matcher = PostalCodeMatcher::new();
    let mut group = c.benchmark_group("gb");
    // An early format, the last format, and no match at all.
    for value in ["EC1A 1BB", "AI-2640", "not a postcode"] {
        group.bench_with_input(BenchmarkId::new("matching_format", value), value, |b, v| {
            b.iter(|| matcher.gb().matching_format(black_box(v)));
        });
    }
    // A single format checked directly, skipping the ordered scan.
    for format in [GbFormat::LetterLetterDigitLetter, GbFormat::Anguilla] {
        group.bench_with_input(
            BenchmarkId::new("matches_format", format.name()),
            &format,
            |b, &format| {
                b.iter(|| matcher.gb().matches_format(format, black_box("EC1A 1BB")));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_compile, bench_matching, bench_gb_formats);
criterion_main!(benches);
