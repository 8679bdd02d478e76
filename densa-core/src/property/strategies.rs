//! Strategy builders for clustering property tests.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Point;
use crate::test_utils::suite_point_limit;

use super::types::{DensaFixture, PointLayout};

/// Minimum point count for generated inputs.
const MIN_POINTS: usize = 1;
/// Maximum point count for generated inputs before the CI cap is applied.
/// Brute-force queries are quadratic, so this stays small.
const MAX_POINTS: usize = 96;
/// Lattice spacing. Generated radii sometimes equal it exactly.
const LATTICE_STEP: f64 = 0.05;

/// Generates fixtures covering every [`PointLayout`].
pub(super) fn densa_fixture_strategy() -> impl Strategy<Value = DensaFixture> {
    (any::<PointLayout>(), any::<u64>()).prop_map(|(layout, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(layout, &mut rng)
    })
}

/// Generates a fixture for a specific layout.
///
/// Used by rstest cases where the layout is chosen explicitly.
pub(super) fn generate_fixture(layout: PointLayout, rng: &mut SmallRng) -> DensaFixture {
    let count = rng.gen_range(MIN_POINTS..=suite_point_limit(MAX_POINTS));
    let points = match layout {
        PointLayout::Uniform => uniform(count, rng),
        PointLayout::Blobs => blobs(count, rng),
        PointLayout::Lattice => lattice(count),
        PointLayout::Duplicates => duplicates(count, rng),
    };
    let eps = if layout == PointLayout::Lattice && rng.gen_bool(0.5) {
        LATTICE_STEP
    } else {
        rng.gen_range(0.01_f64..0.2)
    };
    DensaFixture {
        points,
        eps,
        min_pts: rng.gen_range(1..=8),
        layout,
    }
}

fn uniform(count: usize, rng: &mut SmallRng) -> Vec<Point> {
    (0..count)
        .map(|_| Point::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect()
}

fn blobs(count: usize, rng: &mut SmallRng) -> Vec<Point> {
    let centres = uniform(rng.gen_range(1..=4), rng);
    let spread: f64 = rng.gen_range(0.01..0.1);
    (0..count)
        .map(|index| {
            let centre = centres[index % centres.len()];
            Point::new(
                centre.x + rng.gen_range(-spread..=spread),
                centre.y + rng.gen_range(-spread..=spread),
            )
        })
        .collect()
}

fn lattice(count: usize) -> Vec<Point> {
    let side = (1..).find(|side: &usize| side * side >= count).unwrap_or(1);
    (0..count)
        .map(|index| {
            let column = u32::try_from(index % side).expect("lattice fits in u32");
            let row = u32::try_from(index / side).expect("lattice fits in u32");
            Point::new(
                f64::from(column) * LATTICE_STEP,
                f64::from(row) * LATTICE_STEP,
            )
        })
        .collect()
}

fn duplicates(count: usize, rng: &mut SmallRng) -> Vec<Point> {
    let distinct = uniform(rng.gen_range(1..=5), rng);
    (0..count)
        .map(|_| distinct[rng.gen_range(0..distinct.len())])
        .collect()
}
