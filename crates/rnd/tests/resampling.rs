//! Integration tests for roulette-wheel resampling.

use estim_rnd::{
    RndError, RouletteConfig, RouletteWheel, ZeroWeightPolicy, resample_columns, weighted_draw,
    weighted_draw_with,
};
use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn frequencies(draws: &[usize], len: usize) -> Vec<f64> {
    let mut counts = vec![0usize; len];
    for &d in draws {
        counts[d] += 1;
    }
    counts
        .into_iter()
        .map(|c| c as f64 / draws.len() as f64)
        .collect()
}

#[test]
fn degenerate_weights_always_pick_first() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let draws = weighted_draw(&[1.0, 0.0, 0.0], 1 + seed as usize, &mut rng).unwrap();
        assert_eq!(draws.len(), 1 + seed as usize);
        assert!(draws.iter().all(|&i| i == 0), "seed {seed}: {draws:?}");
    }
}

#[test]
fn equal_weights_approach_quarter() {
    let mut rng = StdRng::seed_from_u64(2024);
    let draws = weighted_draw(&[1.0, 1.0, 1.0, 1.0], 100_000, &mut rng).unwrap();
    for (i, f) in frequencies(&draws, 4).into_iter().enumerate() {
        assert!((f - 0.25).abs() < 0.01, "index {i}: frequency {f}");
    }
}

#[test]
fn frequencies_follow_weights() {
    let weights = [0.1, 0.0, 3.0, 0.9, 6.0];
    let total: f64 = weights.iter().sum();
    let mut rng = StdRng::seed_from_u64(31);
    let draws = weighted_draw(&weights, 100_000, &mut rng).unwrap();
    for (i, f) in frequencies(&draws, weights.len()).into_iter().enumerate() {
        let expected = weights[i] / total;
        assert!(
            (f - expected).abs() < 0.01,
            "index {i}: frequency {f}, expected {expected}"
        );
    }
}

#[test]
fn empty_weights_rejected_for_any_count() {
    let mut rng = StdRng::seed_from_u64(0);
    for k in [0, 1, 5, 1000] {
        assert!(matches!(
            weighted_draw(&[], k, &mut rng),
            Err(RndError::EmptyWeights)
        ));
    }
}

#[test]
fn all_zero_weights_follow_policy() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        weighted_draw(&[0.0; 4], 10, &mut rng),
        Err(RndError::ZeroTotalWeight { len: 4 })
    ));

    let config = RouletteConfig::new().with_zero_weight_policy(ZeroWeightPolicy::Uniform);
    let draws = weighted_draw_with(&[0.0; 4], 10, &config, &mut rng).unwrap();
    assert_eq!(draws.len(), 10);
    assert!(draws.iter().all(|&i| i < 4));
}

#[test]
fn wheel_reuse_is_reproducible() {
    let wheel = RouletteWheel::new(&[2.0, 1.0, 1.0], &RouletteConfig::default()).unwrap();
    let a = wheel.draw_n(100, &mut StdRng::seed_from_u64(6));
    let b = wheel.draw_n(100, &mut StdRng::seed_from_u64(6));
    assert_eq!(a, b);
}

#[test]
fn particle_ensemble_resampling_preserves_shape() {
    // 2-D particles, 5 of them; particle j sits at (j, -j)
    let particles = Array2::from_shape_fn((2, 5), |(i, j)| if i == 0 { j as f64 } else { -(j as f64) });
    let weights = [0.0, 1.0, 0.0, 1.0, 0.0];
    let mut rng = StdRng::seed_from_u64(10);
    let resampled = resample_columns(&particles, &weights, &mut rng).unwrap();

    assert_eq!(resampled.dim(), (2, 5));
    for col in resampled.columns() {
        assert!(col[0] == 1.0 || col[0] == 3.0, "unexpected particle {col:?}");
        assert_eq!(col[1], -col[0]);
    }
}
