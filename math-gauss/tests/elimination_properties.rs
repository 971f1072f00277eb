//! Elimination Property Tests
//!
//! Checks the engine end to end: worker-count invariance, the shape of the
//! eliminated matrix, the small hand-computed scenarios, and that `y`
//! back-substituted through the result solves the original system.

use approx::assert_relative_eq;
use math_gauss::{
    EliminationEngine, EngineConfig, GaussConfig, InitMode, LinearSystem, eliminate,
    eliminate_sequential, init_system,
};
use ndarray::{Array1, array};

/// Solve the unit upper-triangular system left by elimination
fn back_substitute(system: &LinearSystem) -> Array1<f64> {
    let n = system.n();
    let mut x = system.y().clone();
    for i in (0..n).rev() {
        for j in (i + 1)..n {
            x[i] -= system.a()[[i, j]] * x[j];
        }
    }
    x
}

/// Random system made strictly diagonally dominant so every pivot is safe
fn dominant_system(n: usize, seed: u64) -> LinearSystem {
    let random = init_system(n, InitMode::Rand, 15, Some(seed)).expect("valid init");
    let (mut a, b, y) = random.into_parts();
    for i in 0..n {
        a[[i, i]] += 16.0 * n as f64;
    }
    LinearSystem::from_parts(a, b, y).expect("valid system")
}

#[test]
fn test_worker_count_does_not_change_results() {
    let input = dominant_system(37, 2024);
    let reference = eliminate(input.clone(), 1).expect("elimination should succeed");

    for workers in [2, 3, 4, 5, 7, 36, 37, 64] {
        let result = eliminate(input.clone(), workers).expect("elimination should succeed");
        assert_eq!(result.a(), reference.a(), "A differs for workers = {workers}");
        assert_eq!(result.y(), reference.y(), "y differs for workers = {workers}");
        assert_eq!(result.b(), reference.b(), "b differs for workers = {workers}");
    }
}

#[test]
fn test_parallel_matches_sequential_reference() {
    let input = dominant_system(50, 9);
    let mut reference = input.clone();
    eliminate_sequential(&mut reference);

    let result = eliminate(input, 4).expect("elimination should succeed");
    assert_eq!(result, reference);
}

#[test]
fn test_diagonal_is_one_and_lower_part_is_zero() {
    let input = dominant_system(64, 11);
    let result = eliminate(input, 4).expect("elimination should succeed");

    let n = result.n();
    for k in 0..n {
        assert_eq!(result.a()[[k, k]], 1.0);
        for i in (k + 1)..n {
            assert_eq!(result.a()[[i, k]], 0.0);
        }
    }
}

#[test]
fn test_eliminating_twice_keeps_matrix() {
    let input = init_system(20, InitMode::Fast, 15, None).expect("valid init");
    let once = eliminate(input, 3).expect("elimination should succeed");
    let twice = eliminate(once.clone(), 3).expect("elimination should succeed");
    assert_eq!(twice.a(), once.a());
}

#[test]
fn test_two_by_two_scenario() {
    let system = LinearSystem::new(array![[2.0, 1.0], [1.0, 3.0]], array![3.0, 4.0])
        .expect("valid system");

    for workers in [1, 2, 4] {
        let result = eliminate(system.clone(), workers).expect("elimination should succeed");
        assert_eq!(result.a(), &array![[1.0, 0.5], [0.0, 1.0]]);
        assert_eq!(result.y(), &array![1.5, 1.0]);
    }
}

#[test]
fn test_single_pivot_with_idle_workers() {
    let system = LinearSystem::new(array![[5.0]], array![10.0]).expect("valid system");
    let result = eliminate(system, 8).expect("elimination should succeed");
    assert_eq!(result.a(), &array![[1.0]]);
    assert_eq!(result.y(), &array![2.0]);
}

#[test]
fn test_back_substitution_solves_original_system() {
    let input = dominant_system(40, 5);
    let result = eliminate(input.clone(), 4).expect("elimination should succeed");

    let x = back_substitute(&result);
    let ax = input.a().dot(&x);
    for i in 0..input.n() {
        assert_relative_eq!(ax[i], input.b()[i], epsilon = 1e-9);
    }
}

#[test]
fn test_fast_init_solution() {
    // A = 3I + 2J and b = 2, so every x_i equals 2 / (3 + 2n)
    let n = 10;
    let input = init_system(n, InitMode::Fast, 15, None).expect("valid init");
    let result = eliminate(input, 3).expect("elimination should succeed");

    let x = back_substitute(&result);
    let expected = 2.0 / (3.0 + 2.0 * n as f64);
    for value in x.iter() {
        assert_relative_eq!(*value, expected, epsilon = 1e-12);
    }
}

#[test]
fn test_zero_pivot_propagates_without_panic() {
    let system = LinearSystem::new(array![[0.0, 1.0], [1.0, 1.0]], array![1.0, 1.0])
        .expect("valid system");
    let result = eliminate(system, 2).expect("elimination runs to completion");
    assert!(result.y().iter().any(|v| !v.is_finite()));
    assert_eq!(result.a()[[0, 0]], 1.0);
    assert_eq!(result.a()[[1, 0]], 0.0);
}

#[test]
fn test_engine_from_config() {
    let config = GaussConfig {
        size: 24,
        workers: 3,
        init: InitMode::Rand,
        seed: Some(77),
        pivot_tolerance: Some(1e-12),
        ..Default::default()
    };
    let engine = EliminationEngine::new(config.engine_config()).expect("valid engine");
    let system = config.build_system().expect("valid system");
    let result = engine.run(system).expect("elimination should succeed");

    assert!(result.system.is_unit_upper_triangular());
    assert_eq!(result.report.pivot_steps, 24);
    assert_eq!(result.report.rendezvous, 48);
    assert_eq!(result.report.small_pivots, 0);
}

#[test]
fn test_engine_rejects_zero_workers() {
    let err = EliminationEngine::new(EngineConfig {
        workers: 0,
        pivot_tolerance: None,
    })
    .unwrap_err();
    assert!(err.is_config_error());
}
