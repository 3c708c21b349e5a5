//! Analyses loaded from TOML and curve output.

use std::path::Path;

use bayesfactor::{
    build_likelihood, Analysis, BayesError, CurvePoint, LikelihoodFamily, LikelihoodSpec,
    PriorFamily, PriorSpec, QuadratureConfig,
};

fn example_file() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("examples/one_sample_t.toml")
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn example_analysis_runs() {
    let analysis = Analysis::load(example_file()).unwrap();
    assert_eq!(analysis.likelihood.family, LikelihoodFamily::NoncentralT);
    assert_eq!(analysis.alternative.family, PriorFamily::Cauchy);
    assert_eq!(analysis.alternative.params[2], f64::NEG_INFINITY);

    let bf = analysis.run().unwrap();
    let expected = 1.0 / 1.557447;
    assert!((bf.value() - expected).abs() / expected < 1e-4);
}

#[test]
fn quadrature_settings_are_read() {
    let toml = r#"
        [likelihood]
        family = "binomial"
        params = [8.0, 11.0]

        [alternative]
        family = "beta"
        params = [2.5, 1.0]

        [null]
        family = "point"
        params = [0.5]

        [quadrature]
        rel_tolerance = 1e-6
    "#;
    let analysis = Analysis::from_toml(toml).unwrap();
    assert_eq!(analysis.quadrature.rel_tolerance, 1e-6);
    assert_eq!(
        analysis.quadrature.max_subdivisions,
        QuadratureConfig::default().max_subdivisions
    );
    let expected = 1.0 / 0.6632996;
    assert!((analysis.run().unwrap().value() - expected).abs() / expected < 1e-4);
}

#[test]
fn toml_round_trip_keeps_infinite_bounds() {
    let analysis = Analysis::new(
        LikelihoodSpec::normal(5.5, 32.35),
        PriorSpec::normal(0.0, 13.3, 0.0, f64::INFINITY),
        PriorSpec::point(0.0),
    );
    let text = analysis.to_toml().unwrap();
    assert!(text.contains("inf"));
    assert_eq!(Analysis::from_toml(&text).unwrap(), analysis);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn unknown_family_is_a_config_error() {
    let toml = r#"
        [likelihood]
        family = "poisson"
        params = [3.0]

        [alternative]
        family = "cauchy"
        params = [0.0, 1.0, -inf, inf]

        [null]
        family = "point"
        params = [0.0]
    "#;
    let err = Analysis::from_toml(toml).unwrap_err();
    match err {
        BayesError::Config { message } => assert!(message.contains("poisson"), "{message}"),
        other => panic!("expected a config error, got {other:?}"),
    }
}

#[test]
fn bad_parameters_surface_when_run() {
    let toml = r#"
        [likelihood]
        family = "normal"
        params = [0.0]

        [alternative]
        family = "cauchy"
        params = [0.0, 1.0, -inf, inf]

        [null]
        family = "point"
        params = [0.0]
    "#;
    let analysis = Analysis::from_toml(toml).unwrap();
    assert!(matches!(
        analysis.run(),
        Err(BayesError::MalformedParams { expected: 2, got: 1, .. })
    ));
}

// ============================================================================
// Curves
// ============================================================================

#[test]
fn curves_serialize_as_points() {
    let likelihood = build_likelihood(&LikelihoodSpec::binomial(2.0, 4.0)).unwrap();
    let curve = likelihood.curve(0.0, 1.0, 3);
    let json = serde_json::to_value(&curve).unwrap();
    assert_eq!(json[1]["x"], 0.5);
    let y = json[1]["y"].as_f64().unwrap();
    assert!((y - 0.375).abs() < 1e-12);

    let back: Vec<CurvePoint> = serde_json::from_value(json).unwrap();
    assert_eq!(back, curve);
}
