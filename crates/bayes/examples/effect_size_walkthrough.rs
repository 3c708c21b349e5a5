//! Bayes factors for an observed effect
//!
//! Run with: RUST_LOG=debug cargo run -p bayesfactor --example effect_size_walkthrough
//!
//! This example demonstrates:
//! - Comparing a Cauchy prior against a point null for a t statistic
//! - How the prior scale changes the evidence
//! - One-sided priors and their normalisation
//! - Running an analysis described in TOML
//! - Sampling curves for plotting

use bayesfactor::{
    build_likelihood, build_prior, compare, predictive, Analysis, GaussKronrod, LikelihoodSpec,
    PriorSpec,
};
use tracing_subscriber::EnvFilter;

const INF: f64 = f64::INFINITY;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Bayes Factors for an Observed Effect ===\n");

    let gk = GaussKronrod::default();
    let data = LikelihoodSpec::noncentral_d(2.03 / 80f64.sqrt(), 79.0);
    let null = PriorSpec::point(0.0);

    // -------------------------------------------------------------------------
    // 1. Cauchy prior against no effect
    // -------------------------------------------------------------------------
    println!("1. Cauchy prior against no effect");
    println!("---------------------------------\n");

    let bf = compare(&data, &PriorSpec::cauchy(0.0, 1.0, -INF, INF), &null, &gk)
        .expect("valid specs");
    println!("d = {:.4}, df = 79", 2.03 / 80f64.sqrt());
    println!(
        "  marginal likelihood, alternative: {:.6}",
        bf.alternative().marginal_likelihood()
    );
    println!(
        "  marginal likelihood, null:        {:.6}",
        bf.null().marginal_likelihood()
    );
    println!("  BF10 = {:.6}", bf.value());
    println!("  BF01 = {:.6}", bf.inverse().value());
    println!();

    // -------------------------------------------------------------------------
    // 2. Sensitivity to the prior scale
    // -------------------------------------------------------------------------
    println!("2. Sensitivity to the prior scale");
    println!("---------------------------------\n");

    for scale in [0.1, 0.5, 0.707, 1.0, 2.0] {
        let alt = PriorSpec::cauchy(0.0, scale, -INF, INF);
        let bf = compare(&data, &alt, &null, &gk).expect("valid specs");
        println!("  Cauchy(0, {scale:<5}): BF10 = {:.6}", bf.value());
    }
    println!();

    // -------------------------------------------------------------------------
    // 3. One-sided and truncated priors
    // -------------------------------------------------------------------------
    println!("3. One-sided and truncated priors");
    println!("---------------------------------\n");

    let one_sided = [
        ("positive effects", PriorSpec::cauchy(0.0, 0.707, 0.0, INF)),
        ("negative effects", PriorSpec::cauchy(0.0, 0.707, -INF, 0.0)),
        ("small positive", PriorSpec::cauchy(0.0, 0.707, 0.0, 0.5)),
    ];
    for (name, alt) in one_sided {
        let prior = build_prior(&alt, &gk).expect("valid prior");
        let bf = compare(&data, &alt, &null, &gk).expect("valid specs");
        println!(
            "  {name:<17} normalization {:?}, BF10 = {:.6}",
            prior.normalization(),
            bf.value()
        );
    }
    println!();

    // -------------------------------------------------------------------------
    // 4. An analysis file
    // -------------------------------------------------------------------------
    println!("4. An analysis file");
    println!("-------------------\n");

    let analysis =
        Analysis::from_toml(include_str!("one_sample_t.toml")).expect("valid analysis file");
    let bf = analysis.run().expect("valid analysis");
    println!("  {:?} vs {:?}", analysis.alternative.family, analysis.null.family);
    println!("  BF10 = {:.6} (same data on the t scale)", bf.value());
    println!();

    // -------------------------------------------------------------------------
    // 5. Curves for plotting
    // -------------------------------------------------------------------------
    println!("5. Curves for plotting");
    println!("----------------------\n");

    let likelihood = build_likelihood(&data).expect("valid likelihood");
    let prior = build_prior(&PriorSpec::cauchy(0.0, 0.707, -INF, INF), &gk).expect("valid prior");
    let pred = predictive(&likelihood, &prior, &gk);

    println!("  {:>6} {:>10} {:>10} {:>10}", "delta", "likelihood", "prior", "product");
    let l = likelihood.curve(-0.5, 1.0, 7);
    let p = prior.curve(-0.5, 1.0, 7);
    let q = pred.curve(-0.5, 1.0, 7);
    for ((l, p), q) in l.iter().zip(&p).zip(&q) {
        println!("  {:>6.2} {:>10.5} {:>10.5} {:>10.5}", l.x, l.y, p.y, q.y);
    }

    println!("\n=== Done ===");
}
