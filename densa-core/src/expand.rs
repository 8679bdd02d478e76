//! Sequential cluster expansion.
//!
//! The expander owns the label array outright. It visits points in index
//! order and grows each new cluster breadth-first from the core point that
//! founded it. Neighbourhoods come from a [`NeighborIndex`], which is either
//! the precomputed [`Neighborhoods`] batch or a live query per point; both
//! feed the same loop, so they label every input identically.
//!
//! Noise handling is asymmetric. When a core point founds a cluster, every
//! one of its neighbours is queued, including points already marked noise,
//! so those points are reclaimed as border points. During the drain only
//! `Unvisited` neighbours are queued. A noise point that is adjacent to some
//! later core point of the cluster, but not to the founding point, therefore
//! stays noise. Tests pin this behaviour so that changing it is a visible
//! decision.

use std::{borrow::Cow, collections::VecDeque, num::NonZeroUsize};

use crate::{
    classify::Neighborhoods,
    distance::Radius,
    label::LabelState,
    neighbors::region_query,
    point::Point,
    result::{ClusterId, ClusteringResult},
};

/// The neighbourhood of one point as seen by the expander.
pub(crate) struct Neighborhood<'a> {
    neighbors: Cow<'a, [usize]>,
    core: bool,
}

/// Supplies neighbourhoods to the expander.
pub(crate) trait NeighborIndex {
    /// Number of points covered by the index.
    fn len(&self) -> usize;

    /// Returns the neighbourhood of `index`.
    fn neighborhood(&self, index: usize) -> Neighborhood<'_>;
}

impl NeighborIndex for Neighborhoods {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn neighborhood(&self, index: usize) -> Neighborhood<'_> {
        Neighborhood {
            neighbors: Cow::Borrowed(self.neighbors(index)),
            core: self.is_core(index),
        }
    }
}

/// Answers every neighbourhood request with a fresh brute-force scan.
pub(crate) struct InlineQuery<'a> {
    points: &'a [Point],
    radius: Radius,
    min_pts: NonZeroUsize,
}

impl<'a> InlineQuery<'a> {
    pub(crate) const fn new(points: &'a [Point], radius: Radius, min_pts: NonZeroUsize) -> Self {
        Self {
            points,
            radius,
            min_pts,
        }
    }
}

impl NeighborIndex for InlineQuery<'_> {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn neighborhood(&self, index: usize) -> Neighborhood<'_> {
        let list = region_query(self.points, index, self.radius);
        let core = list.is_core(self.min_pts.get());
        Neighborhood {
            neighbors: Cow::Owned(list.into()),
            core,
        }
    }
}

/// Labels every point using precomputed neighbourhoods.
///
/// Cluster identifiers are allocated from zero in the order their founding
/// core points are met by the index scan.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use densa_core::{Label, Neighborhoods, Point, Radius, expand_clusters};
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(0.01, 0.0),
///     Point::new(0.02, 0.0),
///     Point::new(5.0, 5.0),
/// ];
/// let min_pts = NonZeroUsize::new(3).expect("non-zero");
/// let hoods = Neighborhoods::sequential(&points, Radius::new(0.05)?, min_pts);
/// let result = expand_clusters(&hoods);
/// assert_eq!(result.cluster_count(), 1);
/// assert_eq!(result.labels()[3], Label::Noise);
/// # Ok::<(), densa_core::DensaError>(())
/// ```
#[must_use]
pub fn expand_clusters(neighborhoods: &Neighborhoods) -> ClusteringResult {
    expand(neighborhoods)
}

pub(crate) fn expand<N: NeighborIndex>(index: &N) -> ClusteringResult {
    let mut labels = vec![LabelState::Unvisited; index.len()];
    let mut queue = VecDeque::new();
    let mut next_cluster = 0_u64;

    for point in 0..labels.len() {
        if labels[point].is_cluster() {
            continue;
        }
        let founder = index.neighborhood(point);
        if !founder.core {
            labels[point].mark_noise();
            continue;
        }

        let cluster = ClusterId::new(next_cluster);
        next_cluster += 1;
        labels[point].claim(cluster);

        // First hop: queue every neighbour, noise included.
        queue.extend(founder.neighbors.iter().copied());
        drain(index, &mut labels, &mut queue, cluster);
    }

    let cluster_count = usize::try_from(next_cluster).unwrap_or(usize::MAX);
    ClusteringResult::from_expansion(
        labels.into_iter().map(LabelState::settle).collect(),
        cluster_count,
    )
}

fn drain<N: NeighborIndex>(
    index: &N,
    labels: &mut [LabelState],
    queue: &mut VecDeque<usize>,
    cluster: ClusterId,
) {
    while let Some(member) = queue.pop_front() {
        if !labels[member].claim(cluster) {
            continue;
        }
        let hood = index.neighborhood(member);
        if !hood.core {
            continue;
        }
        // Later hops: only points nobody has looked at yet.
        queue.extend(
            hood.neighbors
                .iter()
                .copied()
                .filter(|&next| labels[next].is_unvisited()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::Label;
    use crate::test_utils::min_pts;
    use rstest::rstest;

    fn on_a_line(xs: &[f64]) -> Vec<Point> {
        xs.iter().map(|&x| Point::new(x, 0.0)).collect()
    }

    fn run_both(points: &[Point], eps: f64, min: usize) -> Vec<Label> {
        let radius = Radius::new(eps).expect("radius is valid");
        let hoods = Neighborhoods::sequential(points, radius, min_pts(min));
        let precomputed = expand(&hoods);
        let inline = expand(&InlineQuery::new(points, radius, min_pts(min)));
        assert_eq!(precomputed, inline, "strategies must agree");
        precomputed.labels().to_vec()
    }

    fn cluster(id: u64) -> Label {
        Label::Cluster(ClusterId::new(id))
    }

    #[test]
    fn dense_run_and_outlier() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(0.01, 0.0),
            Point::new(0.02, 0.0),
            Point::new(5.0, 5.0),
        ];
        let labels = run_both(&points, 0.05, 3);
        assert_eq!(labels, vec![cluster(0), cluster(0), cluster(0), Label::Noise]);
    }

    #[test]
    fn first_hop_neighbour_is_reclaimed_from_noise() {
        // Point 0 is seen first and is not core; point 1 is core and adjacent.
        let labels = run_both(&on_a_line(&[0.0, 1.0, 2.0]), 1.0, 3);
        assert_eq!(labels, vec![cluster(0), cluster(0), cluster(0)]);
    }

    #[test]
    fn second_hop_noise_is_not_reclaimed() {
        // 0 (x=0) is noise when visited. 1 (x=2) founds cluster 0 and queues
        // 2 (x=1) and 3 (x=3). 2 is core and adjacent to 0, but 0 is already
        // noise and only unvisited points are queued during the drain.
        let labels = run_both(&on_a_line(&[0.0, 2.0, 1.0, 3.0]), 1.0, 3);
        assert_eq!(labels, vec![Label::Noise, cluster(0), cluster(0), cluster(0)]);
    }

    #[test]
    fn clusters_are_numbered_in_discovery_order() {
        let labels = run_both(&on_a_line(&[10.0, 10.5, 0.0, 0.5, 20.0]), 0.6, 2);
        assert_eq!(
            labels,
            vec![cluster(0), cluster(0), cluster(1), cluster(1), Label::Noise]
        );
    }

    #[test]
    fn shared_border_point_keeps_its_first_cluster() {
        // Index 4 sits between two cores that are not density-connected.
        let points = [
            Point::new(-1.0, 0.0),
            Point::new(-1.0, 1.0),
            Point::new(-1.0, -1.0),
            Point::new(-2.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, -1.0),
            Point::new(2.0, 0.0),
        ];
        let labels = run_both(&points, 1.0, 4);
        let expected: Vec<Label> = [0, 0, 0, 0, 0, 1, 1, 1, 1]
            .into_iter()
            .map(cluster)
            .collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn chains_of_core_points_form_one_cluster() {
        let labels = run_both(&on_a_line(&[0.0, 1.0, 2.0, 3.0, 4.0]), 1.0, 3);
        assert_eq!(labels, vec![cluster(0); 5]);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    fn single_point(#[case] min: usize) {
        let labels = run_both(&[Point::new(1.0, 1.0)], 0.5, min);
        let expected = if min == 1 { cluster(0) } else { Label::Noise };
        assert_eq!(labels, vec![expected]);
    }

    #[test]
    fn empty_input_has_no_labels() {
        let result = expand(&Neighborhoods::default());
        assert!(result.labels().is_empty());
        assert_eq!(result.cluster_count(), 0);
    }

    #[test]
    fn min_pts_of_one_leaves_no_noise() {
        let labels = run_both(&on_a_line(&[0.0, 5.0, 5.5, 20.0]), 1.0, 1);
        assert_eq!(labels, vec![cluster(0), cluster(1), cluster(1), cluster(2)]);
    }
}
