//! Type definitions for clustering property tests.

use test_strategy::Arbitrary;

use crate::Point;

/// Shape of the generated point set.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum PointLayout {
    /// Points sampled uniformly in the unit square.
    #[weight(2)]
    Uniform,
    /// Tight blobs around a handful of random centres.
    #[weight(3)]
    Blobs,
    /// A square lattice whose spacing can coincide with `eps`.
    #[weight(2)]
    Lattice,
    /// A few distinct locations, each repeated many times.
    #[weight(1)]
    Duplicates,
}

/// Fixture for clustering property tests.
///
/// Carries the layout alongside the inputs so failures are easy to diagnose.
#[derive(Clone, Debug)]
pub(super) struct DensaFixture {
    /// Points in input order.
    pub points: Vec<Point>,
    /// Neighbourhood radius.
    pub eps: f64,
    /// Minimum neighbourhood size, counting the point itself.
    pub min_pts: usize,
    /// Layout used during generation.
    pub layout: PointLayout,
}
