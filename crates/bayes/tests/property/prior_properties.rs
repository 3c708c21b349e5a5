use bayesfactor::{
    bayes_factor, build_likelihood, build_prior, compare, GaussKronrod, Integrator,
    LikelihoodSpec, Normalization, PriorSpec,
};
use proptest::prelude::*;

const INF: f64 = f64::INFINITY;

fn prior_mass(spec: &PriorSpec) -> f64 {
    let gk = GaussKronrod::default();
    let prior = build_prior(spec, &gk).unwrap();
    let support = prior.support();
    gk.integrate(&|x| prior.evaluate(x), support.min, support.max)
}

/// A location-scale prior truncated to `[location + a·scale, location + (a + w)·scale]`.
fn truncated_prior(
    kind: u8,
    location: f64,
    scale: f64,
    a: f64,
    w: f64,
    open_above: bool,
) -> PriorSpec {
    let min = location + a * scale;
    let max = if open_above { INF } else { min + w * scale };
    match kind % 3 {
        0 => PriorSpec::normal(location, scale, min, max),
        1 => PriorSpec::cauchy(location, scale, min, max),
        _ => PriorSpec::student_t(location, scale, 4.0, min, max),
    }
}

proptest! {
    #[test]
    fn truncated_priors_have_unit_mass(
        kind in 0u8..3,
        location in -3.0f64..3.0,
        scale in 0.2f64..5.0,
        a in -4.0f64..2.0,
        w in 0.1f64..8.0,
        open_above in any::<bool>(),
    ) {
        let spec = truncated_prior(kind, location, scale, a, w, open_above);
        let mass = prior_mass(&spec);
        prop_assert!((mass - 1.0).abs() < 1e-4, "{:?}: mass {}", spec, mass);
    }

    #[test]
    fn half_lines_at_zero_have_unit_mass(
        kind in 0u8..3,
        scale in 0.2f64..20.0,
        upper in any::<bool>(),
    ) {
        let (min, max) = if upper { (0.0, INF) } else { (-INF, 0.0) };
        let spec = match kind {
            0 => PriorSpec::normal(0.0, scale, min, max),
            1 => PriorSpec::cauchy(0.0, scale, min, max),
            _ => PriorSpec::student_t(0.0, scale, 3.0, min, max),
        };
        let gk = GaussKronrod::default();
        prop_assert_eq!(build_prior(&spec, &gk).unwrap().normalization(), Normalization::HalfLine);
        let mass = prior_mass(&spec);
        prop_assert!((mass - 1.0).abs() < 1e-4, "{:?}: mass {}", spec, mass);
    }

    #[test]
    fn swapping_hypotheses_inverts(
        successes in 0u32..20,
        extra in 1u32..20,
        alpha in 0.5f64..5.0,
        beta in 0.5f64..5.0,
        p in 0.05f64..0.95,
    ) {
        let data = LikelihoodSpec::binomial(f64::from(successes), f64::from(successes + extra));
        let alt = PriorSpec::beta(alpha, beta);
        let null = PriorSpec::point(p);
        let forward = bayes_factor(&data, &alt, &null).unwrap();
        let backward = bayes_factor(&data, &null, &alt).unwrap();
        prop_assert!((forward * backward - 1.0).abs() < 1e-9);
    }

    #[test]
    fn point_null_is_likelihood_at_point(
        mean in -10.0f64..10.0,
        sd in 0.5f64..5.0,
        point in -5.0f64..5.0,
    ) {
        let data = LikelihoodSpec::normal(mean, sd);
        let bf = compare(
            &data,
            &PriorSpec::cauchy(0.0, 1.0, -INF, INF),
            &PriorSpec::point(point),
            &GaussKronrod::default(),
        )
        .unwrap();
        let likelihood = build_likelihood(&data).unwrap();
        prop_assert_eq!(bf.null().marginal_likelihood(), likelihood.evaluate(point));
        prop_assert_eq!(bf.value(), bf.alternative().marginal_likelihood() / likelihood.evaluate(point));
    }
}
