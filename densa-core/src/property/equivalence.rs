//! Equivalence properties.
//!
//! The engine must agree with the sentinel oracle, and every combination of
//! neighbour strategy and execution schedule must agree with every other.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{ClusteringResult, DensaBuilder, ExecutionStrategy, NeighborStrategy, PointCollection};

use super::oracle::{as_sentinels, sentinel_labels};
use super::types::DensaFixture;

/// Worker counts used when checking schedule independence.
#[cfg(feature = "parallel")]
const POOL_SIZES: [usize; 3] = [1, 2, 4];

pub(super) fn run_fixture(
    fixture: &DensaFixture,
    neighbors: NeighborStrategy,
    execution: ExecutionStrategy,
    threads: Option<usize>,
) -> Result<ClusteringResult, TestCaseError> {
    let source = PointCollection::new("property", fixture.points.clone());
    DensaBuilder::new()
        .with_eps(fixture.eps)
        .with_min_pts(fixture.min_pts)
        .with_neighbor_strategy(neighbors)
        .with_execution_strategy(execution)
        .with_threads(threads.and_then(std::num::NonZeroUsize::new))
        .build()
        .and_then(|densa| densa.run(&source))
        .map_err(|error| {
            TestCaseError::fail(format!(
                "run failed: {error} (layout={:?}, points={}, eps={}, min_pts={})",
                fixture.layout,
                fixture.points.len(),
                fixture.eps,
                fixture.min_pts,
            ))
        })
}

/// Compares the engine with the sentinel oracle.
pub(super) fn run_oracle_equivalence_property(fixture: &DensaFixture) -> TestCaseResult {
    let result = run_fixture(
        fixture,
        NeighborStrategy::Precomputed,
        ExecutionStrategy::Sequential,
        None,
    )?;
    let expected = sentinel_labels(&fixture.points, fixture.eps, fixture.min_pts);
    let actual = as_sentinels(result.labels());
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "oracle mismatch: engine={actual:?}, oracle={expected:?} \
             (layout={:?}, eps={}, min_pts={})",
            fixture.layout, fixture.eps, fixture.min_pts,
        )));
    }
    Ok(())
}

/// Compares the precomputed and inline neighbour strategies.
pub(super) fn run_strategy_equivalence_property(fixture: &DensaFixture) -> TestCaseResult {
    let precomputed = run_fixture(
        fixture,
        NeighborStrategy::Precomputed,
        ExecutionStrategy::Sequential,
        None,
    )?;
    let inline = run_fixture(
        fixture,
        NeighborStrategy::Inline,
        ExecutionStrategy::Sequential,
        None,
    )?;
    if precomputed != inline {
        return Err(TestCaseError::fail(format!(
            "strategy mismatch: precomputed={:?}, inline={:?} (layout={:?})",
            precomputed.labels(),
            inline.labels(),
            fixture.layout,
        )));
    }
    Ok(())
}

/// Re-runs parallel classification on pools of several sizes and compares
/// each result with the sequential schedule.
#[cfg(feature = "parallel")]
pub(super) fn run_schedule_independence_property(fixture: &DensaFixture) -> TestCaseResult {
    let sequential = run_fixture(
        fixture,
        NeighborStrategy::Precomputed,
        ExecutionStrategy::Sequential,
        None,
    )?;
    for threads in POOL_SIZES {
        let parallel = run_fixture(
            fixture,
            NeighborStrategy::Precomputed,
            ExecutionStrategy::Parallel,
            Some(threads),
        )?;
        if parallel != sequential {
            return Err(TestCaseError::fail(format!(
                "schedule mismatch with {threads} workers: parallel={:?}, sequential={:?} \
                 (layout={:?})",
                parallel.labels(),
                sequential.labels(),
                fixture.layout,
            )));
        }
    }
    Ok(())
}
