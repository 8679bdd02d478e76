//! Core-point classification.
//!
//! Every point's neighbourhood is a pure function of the immutable point
//! slice, so the per-index work can be split across workers in any way. Each
//! worker writes only its own output slot and the expander reads the arrays
//! only after the whole batch has completed.

use std::num::NonZeroUsize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    distance::Radius,
    neighbors::{NeighborList, region_query},
    point::Point,
};

/// Precomputed neighbour lists and core flags, indexed by point.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use densa_core::{Neighborhoods, Point, Radius};
///
/// let points = [Point::new(0.0, 0.0), Point::new(0.5, 0.0), Point::new(9.0, 9.0)];
/// let min_pts = NonZeroUsize::new(2).expect("non-zero");
/// let hoods = Neighborhoods::sequential(&points, Radius::new(1.0)?, min_pts);
/// assert_eq!(hoods.neighbors(0), &[1]);
/// assert!(hoods.is_core(0));
/// assert!(!hoods.is_core(2));
/// # Ok::<(), densa_core::DensaError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Neighborhoods {
    lists: Vec<NeighborList>,
    core: Vec<bool>,
}

impl Neighborhoods {
    /// Classifies every point on the calling thread, in index order.
    #[must_use]
    pub fn sequential(points: &[Point], radius: Radius, min_pts: NonZeroUsize) -> Self {
        let (lists, core) = (0..points.len())
            .map(|index| classify_one(points, index, radius, min_pts))
            .unzip();
        Self { lists, core }
    }

    /// Classifies every point on the current rayon pool.
    ///
    /// The output is identical to [`Self::sequential`] whatever the pool size
    /// or work split.
    #[cfg(feature = "parallel")]
    #[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
    #[must_use]
    pub fn parallel(points: &[Point], radius: Radius, min_pts: NonZeroUsize) -> Self {
        let (lists, core) = (0..points.len())
            .into_par_iter()
            .map(|index| classify_one(points, index, radius, min_pts))
            .unzip();
        Self { lists, core }
    }

    /// Returns the number of classified points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns whether no points were classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Returns the neighbours of `index`, or an empty slice when out of range.
    #[must_use]
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.lists
            .get(index)
            .map(NeighborList::as_slice)
            .unwrap_or_default()
    }

    /// Returns whether `index` is a core point.
    #[must_use]
    pub fn is_core(&self, index: usize) -> bool {
        self.core.get(index).copied().unwrap_or(false)
    }

    /// Counts the core points.
    #[must_use]
    pub fn core_count(&self) -> usize {
        self.core.iter().filter(|&&core| core).count()
    }
}

fn classify_one(
    points: &[Point],
    index: usize,
    radius: Radius,
    min_pts: NonZeroUsize,
) -> (NeighborList, bool) {
    let list = region_query(points, index, radius);
    let core = list.is_core(min_pts.get());
    (list, core)
}
