//! Densities and adaptive quadrature
//!
//! Run with: RUST_LOG=debug cargo run -p bayesfactor-dist --example quadrature_tour
//!
//! This example demonstrates:
//! - Building validated densities
//! - Integrating over finite, half-infinite and infinite ranges
//! - Reading the error estimate of an integral
//! - The noncentral t density as a function of its noncentrality

use bayesfactor_dist::{Density, GaussKronrod, NoncentralT, QuadratureConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Densities and Adaptive Quadrature ===\n");

    let gk = GaussKronrod::default();

    // -------------------------------------------------------------------------
    // 1. Mass over different ranges
    // -------------------------------------------------------------------------
    println!("1. Mass over different ranges");
    println!("-----------------------------\n");

    let normal = Density::normal(0.0, 1.0).expect("valid normal");
    let cauchy = Density::cauchy(0.0, 1.0).expect("valid cauchy");

    for (name, density) in [("Normal(0, 1)", &normal), ("Cauchy(0, 1)", &cauchy)] {
        let whole = gk.integrate_with_error(&|x| density.pdf(x), f64::NEG_INFINITY, f64::INFINITY);
        let right = gk.integrate_with_error(&|x| density.pdf(x), 1.0, f64::INFINITY);
        let middle = gk.integrate_with_error(&|x| density.pdf(x), -1.0, 1.0);
        println!("{name}:");
        println!(
            "  (-inf, inf): {:.10}  (err {:.1e}, {} segments)",
            whole.value, whole.abs_error, whole.subdivisions
        );
        println!("  [1, inf):    {:.10}", right.value);
        println!("  [-1, 1]:     {:.10}", middle.value);
        println!();
    }

    // -------------------------------------------------------------------------
    // 2. A work limit that is too small
    // -------------------------------------------------------------------------
    println!("2. A work limit that is too small");
    println!("---------------------------------\n");

    let tight = GaussKronrod::new(QuadratureConfig {
        max_subdivisions: 3,
        ..QuadratureConfig::default()
    });
    let step = |x: f64| if x < 0.3 { 0.0 } else { 1.0 };
    let rough = tight.integrate_with_error(&step, 0.0, 1.0);
    let fine = gk.integrate_with_error(&step, 0.0, 1.0);
    println!("step at 0.3 over [0, 1] (exact 0.7):");
    println!("  3 segments:   {:.10} converged={}", rough.value, rough.converged);
    println!(
        "  default:      {:.10} converged={} ({} segments)",
        fine.value, fine.converged, fine.subdivisions
    );
    println!();

    // -------------------------------------------------------------------------
    // 3. The noncentral t as a likelihood
    // -------------------------------------------------------------------------
    println!("3. Noncentral t as a likelihood of its noncentrality");
    println!("----------------------------------------------------\n");

    let nct = NoncentralT::new(79.0).expect("valid df");
    let observed = 2.03;
    println!("observed t = {observed}, df = 79");
    for ncp in [-1.0, 0.0, 1.0, 2.0, 3.0, 4.0] {
        println!("  ncp = {ncp:>4}: {:.6}", nct.pdf(observed, ncp));
    }
}
