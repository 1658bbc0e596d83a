//! Matching integration tests.
//!
//! Concrete scenarios plus the properties that must hold for any input.

mod common;

use bindu_match::{Error, MatchMode, MatcherConfig, Point2D, PointMatcher, SearchStrategy};

const NONE: [(f64, f64); 0] = [];

// ============================================================================
// Concrete Scenarios
// ============================================================================

#[test]
fn test_exact_subset_matches() {
    let m = PointMatcher::new(
        [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)],
        [(1.0, 1.0), (2.0, 2.0)],
        0.0,
    )
    .unwrap();
    assert!(m.exact_match());
}

#[test]
fn test_exact_missing_point_fails() {
    let m = PointMatcher::new([(0.0, 0.0), (1.0, 1.0)], [(1.0, 1.0), (3.0, 3.0)], 0.0).unwrap();
    assert!(!m.exact_match());
}

#[test]
fn test_fuzzy_close_point_matches() {
    // distance ≈ 0.0707
    let m = PointMatcher::new([(0.0, 0.0), (1.0, 1.0)], [(1.05, 1.05)], 0.1).unwrap();
    assert!(m.fuzzy_match());
}

#[test]
fn test_fuzzy_far_point_fails() {
    // distance ≈ 0.707
    let m = PointMatcher::new([(0.0, 0.0), (1.0, 1.0)], [(1.5, 1.5)], 0.1).unwrap();
    assert!(!m.fuzzy_match());
}

#[test]
fn test_fuzzy_empty_reference_fails() {
    let m = PointMatcher::new(NONE, [(0.0, 0.0)], 5.0).unwrap();
    assert!(!m.fuzzy_match());
}

#[test]
fn test_empty_pattern_matches_both_modes() {
    let m = PointMatcher::new([(0.0, 0.0)], NONE, 0.0).unwrap();
    assert!(m.exact_match());
    assert!(m.fuzzy_match());
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_empty_pattern_is_vacuously_true_for_any_eps() {
    let reference = common::grid(4, 1.0);
    for eps in [0.0, 0.001, 1.0, 1e6] {
        for a in [reference.clone(), Vec::new()] {
            let m = PointMatcher::new(a, NONE, eps).unwrap();
            assert!(m.exact_match(), "eps {}", eps);
            assert!(m.fuzzy_match(), "eps {}", eps);
        }
    }
}

#[test]
fn test_exact_match_is_set_membership() {
    let reference = common::grid(5, 0.5);

    // Any subset, in any order, with repeats
    let mut pattern: Vec<Point2D> = reference.iter().rev().step_by(3).copied().collect();
    pattern.push(reference[0]);
    pattern.push(reference[0]);
    assert!(PointMatcher::exact(reference.clone(), pattern.clone()).unwrap().exact_match());

    // One point off by a hair breaks it
    pattern.push(Point2D::new(0.5, 0.5 + 1e-12));
    assert!(!PointMatcher::exact(reference, pattern).unwrap().exact_match());
}

#[test]
fn test_exact_match_ignores_reference_duplicates_and_order() {
    let m = PointMatcher::exact(
        [(2.0, 2.0), (1.0, 1.0), (2.0, 2.0), (1.0, 1.0)],
        [(1.0, 1.0), (2.0, 2.0)],
    )
    .unwrap();
    assert!(m.exact_match());
}

#[test]
fn test_fuzzy_matches_brute_force_definition() {
    let reference = common::grid(6, 1.0);
    let pattern = common::jitter(&common::translate(&reference, 0.1, -0.1), 0.2);

    for eps in [0.05, 0.1, 0.2, 0.3, 0.45, 1.0] {
        let m = PointMatcher::new(reference.clone(), pattern.clone(), eps).unwrap();
        assert_eq!(
            m.fuzzy_match(),
            common::brute_force_fuzzy(&reference, &pattern, eps),
            "eps {}",
            eps
        );
    }
}

#[test]
fn test_fuzzy_boundary_is_inclusive() {
    // 3-4-5 triangle: distance is exactly 5
    let m = PointMatcher::new([(0.0, 0.0)], [(3.0, 4.0)], 5.0).unwrap();
    assert!(m.fuzzy_match());
    let m = PointMatcher::new([(0.0, 0.0)], [(3.0, 4.0)], 4.999_999).unwrap();
    assert!(!m.fuzzy_match());
}

#[test]
fn test_fuzzy_is_monotonic_in_eps() {
    let reference = common::circle(Point2D::ZERO, 2.0, 24);
    let pattern = common::jitter(&common::circle(Point2D::ZERO, 2.1, 17), 0.05);

    let mut seen_true = false;
    for step in 0..60 {
        let eps = step as f64 * 0.01;
        let matched = PointMatcher::new(reference.clone(), pattern.clone(), eps)
            .unwrap()
            .fuzzy_match();
        if seen_true {
            assert!(matched, "became false again at eps {}", eps);
        }
        seen_true |= matched;
    }
    assert!(seen_true);
}

#[test]
fn test_empty_reference_never_fuzzy_matches() {
    for eps in [0.0, 1.0, 1e9] {
        let m = PointMatcher::new(NONE, [(1.0, 2.0), (3.0, 4.0)], eps).unwrap();
        assert!(!m.fuzzy_match());
        assert!(m.matched_pairs().is_empty());
    }
}

#[test]
fn test_mode_follows_eps() {
    assert_eq!(
        PointMatcher::new(NONE, NONE, 0.0).unwrap().mode(),
        MatchMode::Exact
    );
    assert_eq!(
        PointMatcher::new(NONE, NONE, 0.5).unwrap().mode(),
        MatchMode::Fuzzy
    );
}

#[test]
fn test_search_strategies_agree_on_large_sets() {
    let reference = common::grid(20, 0.25);
    let pattern = common::jitter(&common::grid(15, 0.33), 0.04);

    for eps in [0.0, 0.02, 0.06, 0.13] {
        let linear =
            PointMatcher::with_config(reference.clone(), pattern.clone(), &MatcherConfig::with_eps(eps))
                .unwrap();
        let indexed = PointMatcher::with_config(
            reference.clone(),
            pattern.clone(),
            &MatcherConfig::with_eps(eps).search(SearchStrategy::SpatialIndex),
        )
        .unwrap();

        assert_eq!(linear.fuzzy_match(), indexed.fuzzy_match(), "eps {}", eps);
        assert_eq!(linear.matched_pairs(), indexed.matched_pairs(), "eps {}", eps);
    }
}

// ============================================================================
// Input Validation
// ============================================================================

#[test]
fn test_negative_eps_is_invalid_input() {
    let err = PointMatcher::new([(0.0, 0.0)], [(0.0, 0.0)], -1e-9).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn test_non_finite_eps_is_invalid_input() {
    assert!(matches!(
        PointMatcher::new(NONE, NONE, f64::NAN),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        PointMatcher::new(NONE, NONE, f64::INFINITY),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn test_non_finite_point_is_invalid_input() {
    let err = PointMatcher::new([(0.0, 0.0), (f64::NAN, 0.0)], NONE, 0.1).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}
