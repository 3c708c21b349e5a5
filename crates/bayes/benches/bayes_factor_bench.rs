//! Criterion benchmarks for the Bayes factor engine.
//!
//! - Half-normal prior against a point null (no normalising integral)
//! - Cauchy prior on a noncentral t statistic
//! - Truncated normal prior on a binomial (normalising integral + marginal)
//! - Sampling a predictive curve for plotting

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use bayesfactor::{
    bayes_factor, build_likelihood, build_prior, predictive, GaussKronrod, LikelihoodSpec,
    PriorSpec,
};

fn bench_half_normal(c: &mut Criterion) {
    let data = LikelihoodSpec::normal(5.5, 32.35);
    let alt = PriorSpec::normal(0.0, 13.3, 0.0, f64::INFINITY);
    let null = PriorSpec::point(0.0);

    c.bench_function("half_normal_vs_point", |bench| {
        bench.iter(|| bayes_factor(black_box(&data), black_box(&alt), black_box(&null)))
    });
}

fn bench_noncentral_t(c: &mut Criterion) {
    let data = LikelihoodSpec::noncentral_t(2.03, 79.0);
    let alt = PriorSpec::cauchy(0.0, 80f64.sqrt(), f64::NEG_INFINITY, f64::INFINITY);
    let null = PriorSpec::point(0.0);

    c.bench_function("noncentral_t_cauchy_vs_point", |bench| {
        bench.iter(|| bayes_factor(black_box(&data), black_box(&alt), black_box(&null)))
    });
}

fn bench_truncated_binomial(c: &mut Criterion) {
    let data = LikelihoodSpec::binomial(2.0, 10.0);
    let alt = PriorSpec::normal(0.0, 1.0, 0.0, 1.0);
    let null = PriorSpec::point(0.5);

    c.bench_function("binomial_truncated_normal_vs_point", |bench| {
        bench.iter(|| bayes_factor(black_box(&data), black_box(&alt), black_box(&null)))
    });
}

fn bench_curve(c: &mut Criterion) {
    let gk = GaussKronrod::default();
    let likelihood = build_likelihood(&LikelihoodSpec::noncentral_t(2.03, 79.0)).unwrap();
    let prior = build_prior(
        &PriorSpec::cauchy(0.0, 80f64.sqrt(), f64::NEG_INFINITY, f64::INFINITY),
        &gk,
    )
    .unwrap();
    let pred = predictive(&likelihood, &prior, &gk);

    c.bench_function("predictive_curve_1000_points", |bench| {
        bench.iter(|| pred.curve(black_box(-10.0), black_box(10.0), 1000))
    });
}

criterion_group!(
    benches,
    bench_half_normal,
    bench_noncentral_t,
    bench_truncated_binomial,
    bench_curve
);
criterion_main!(benches);
