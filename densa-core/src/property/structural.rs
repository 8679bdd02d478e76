//! Structural label invariants.
//!
//! Independently of any oracle, a labelling must satisfy:
//! - one label per point, with cluster identifiers contiguous from zero;
//! - every core point belongs to a cluster;
//! - every cluster member is core or lies within `eps` of a core member of
//!   the same cluster;
//! - `min_pts == 1` leaves no noise.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    ClusteringResult, ExecutionStrategy, Label, NeighborStrategy, Neighborhoods, Radius,
};

use super::equivalence::run_fixture;
use super::types::DensaFixture;
use crate::test_utils::min_pts;

pub(super) fn run_structural_invariants_property(fixture: &DensaFixture) -> TestCaseResult {
    let result = run_fixture(
        fixture,
        NeighborStrategy::Inline,
        ExecutionStrategy::Sequential,
        None,
    )?;
    let labels = result.labels();
    if labels.len() != fixture.points.len() {
        return Err(TestCaseError::fail(format!(
            "label count {} != point count {}",
            labels.len(),
            fixture.points.len(),
        )));
    }

    let revalidated = ClusteringResult::try_from_labels(labels.to_vec())
        .map_err(|error| TestCaseError::fail(format!("identifiers invalid: {error}")))?;
    if revalidated.cluster_count() != result.cluster_count() {
        return Err(TestCaseError::fail(format!(
            "cluster count {} disagrees with labels ({})",
            result.cluster_count(),
            revalidated.cluster_count(),
        )));
    }

    let radius = Radius::new(fixture.eps)
        .map_err(|error| TestCaseError::fail(format!("radius rejected: {error}")))?;
    let hoods = Neighborhoods::sequential(&fixture.points, radius, min_pts(fixture.min_pts));
    for (index, label) in labels.iter().enumerate() {
        match label {
            Label::Noise if hoods.is_core(index) => {
                return Err(TestCaseError::fail(format!(
                    "core point {index} labelled noise"
                )));
            }
            Label::Cluster(id) if !hoods.is_core(index) => {
                let anchored = hoods
                    .neighbors(index)
                    .iter()
                    .any(|&other| hoods.is_core(other) && labels[other] == Label::Cluster(*id));
                if !anchored {
                    return Err(TestCaseError::fail(format!(
                        "border point {index} has no core neighbour in cluster {}",
                        id.get()
                    )));
                }
            }
            _ => {}
        }
    }

    if fixture.min_pts == 1 && result.noise_count() != 0 {
        return Err(TestCaseError::fail(
            "min_pts of one must not produce noise".to_string(),
        ));
    }
    Ok(())
}
