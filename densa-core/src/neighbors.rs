//! Brute-force radius queries.

use std::ops::Deref;

use crate::{distance::Radius, point::Point};

/// Indices of the points within the radius of a query point.
///
/// The query point itself is never included and indices are stored in
/// increasing order (scan order), not distance order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NeighborList(Vec<usize>);

impl NeighborList {
    /// Returns the neighbour indices.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Returns whether a point with this neighbourhood is a core point.
    ///
    /// The point itself counts towards `min_pts`.
    #[must_use]
    pub fn is_core(&self, min_pts: usize) -> bool {
        self.0.len().saturating_add(1) >= min_pts
    }
}

impl Deref for NeighborList {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<NeighborList> for Vec<usize> {
    fn from(list: NeighborList) -> Self {
        list.0
    }
}

/// Returns every index `j != query` whose point lies within `radius` of
/// `points[query]`, scanning `points` in order.
///
/// Points at exactly `eps` are neighbours. An out-of-range `query` yields an
/// empty list.
///
/// # Examples
/// ```
/// use densa_core::{Point, Radius, region_query};
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(3.0, 0.0),
///     Point::new(0.0, 1.0),
/// ];
/// let radius = Radius::new(1.0)?;
/// assert_eq!(region_query(&points, 0, radius).as_slice(), &[1, 3]);
/// # Ok::<(), densa_core::DensaError>(())
/// ```
#[must_use]
pub fn region_query(points: &[Point], query: usize, radius: Radius) -> NeighborList {
    let Some(&centre) = points.get(query) else {
        return NeighborList::default();
    };
    let neighbors = points
        .iter()
        .enumerate()
        .filter(|&(index, &other)| index != query && radius.contains(centre, other))
        .map(|(index, _)| index)
        .collect();
    NeighborList(neighbors)
}
