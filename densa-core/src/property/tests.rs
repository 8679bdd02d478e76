//! Property-based test runners for the clustering engine.
//!
//! Hosts proptest runners for each property, rstest cases pinned to specific
//! layouts and seeds, and unit tests for the oracle itself.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rstest::rstest;

use crate::Point;
use crate::test_utils::suite_proptest_config;

#[cfg(feature = "parallel")]
use super::equivalence::run_schedule_independence_property;
use super::equivalence::{run_oracle_equivalence_property, run_strategy_equivalence_property};
use super::oracle::{NOISE, sentinel_labels};
use super::strategies::{densa_fixture_strategy, generate_fixture};
use super::structural::run_structural_invariants_property;
use super::types::PointLayout;

/// Generates an rstest-parameterised function that exercises a property
/// runner across a fixed set of layouts and seeds.
macro_rules! parameterised_property_test {
    ($test_name:ident, $runner:path, $expectation:expr) => {
        #[rstest]
        #[case::uniform_42(PointLayout::Uniform, 42)]
        #[case::uniform_999(PointLayout::Uniform, 999)]
        #[case::blobs_42(PointLayout::Blobs, 42)]
        #[case::blobs_999(PointLayout::Blobs, 999)]
        #[case::blobs_7777(PointLayout::Blobs, 7777)]
        #[case::lattice_42(PointLayout::Lattice, 42)]
        #[case::lattice_999(PointLayout::Lattice, 999)]
        #[case::duplicates_42(PointLayout::Duplicates, 42)]
        #[case::duplicates_999(PointLayout::Duplicates, 999)]
        fn $test_name(#[case] layout: PointLayout, #[case] seed: u64) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let fixture = generate_fixture(layout, &mut rng);
            $runner(&fixture).expect($expectation);
        }
    };
}

// ========================================================================
// Proptest Runners
// ========================================================================

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn densa_oracle_equivalence(fixture in densa_fixture_strategy()) {
        run_oracle_equivalence_property(&fixture)?;
    }

    #[test]
    fn densa_strategy_equivalence(fixture in densa_fixture_strategy()) {
        run_strategy_equivalence_property(&fixture)?;
    }

    #[test]
    fn densa_structural_invariants(fixture in densa_fixture_strategy()) {
        run_structural_invariants_property(&fixture)?;
    }
}

#[cfg(feature = "parallel")]
proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn densa_schedule_independence(fixture in densa_fixture_strategy()) {
        run_schedule_independence_property(&fixture)?;
    }
}

// ========================================================================
// rstest Parameterised Cases
// ========================================================================

parameterised_property_test!(
    oracle_equivalence_rstest,
    run_oracle_equivalence_property,
    "oracle equivalence must hold"
);

parameterised_property_test!(
    strategy_equivalence_rstest,
    run_strategy_equivalence_property,
    "strategy equivalence must hold"
);

parameterised_property_test!(
    structural_invariants_rstest,
    run_structural_invariants_property,
    "structural invariants must hold"
);

#[cfg(feature = "parallel")]
parameterised_property_test!(
    schedule_independence_rstest,
    run_schedule_independence_property,
    "schedule independence must hold"
);

// ========================================================================
// Oracle Unit Tests
// ========================================================================

fn row(xs: &[f64]) -> Vec<Point> {
    xs.iter().map(|&x| Point::new(x, 0.0)).collect()
}

#[test]
fn oracle_labels_dense_run_and_outlier() {
    let points = row(&[0.0, 0.01, 0.02, 5.0]);
    assert_eq!(sentinel_labels(&points, 0.05, 3), vec![0, 0, 0, NOISE]);
}

#[test]
fn oracle_reclaims_first_hop_noise() {
    assert_eq!(sentinel_labels(&row(&[0.0, 1.0, 2.0]), 1.0, 3), vec![0, 0, 0]);
}

#[test]
fn oracle_keeps_second_hop_noise() {
    assert_eq!(
        sentinel_labels(&row(&[0.0, 2.0, 1.0, 3.0]), 1.0, 3),
        vec![NOISE, 0, 0, 0]
    );
}

#[test]
fn oracle_handles_empty_input() {
    assert!(sentinel_labels(&[], 1.0, 3).is_empty());
}
