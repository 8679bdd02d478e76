//! Result types for clustering operations.
//!
//! Provides structures to represent clustering results including per-point
//! labels and validation of cluster identifier constraints.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::label::Label;

/// Represents the output of a [`crate::Densa::run`] invocation.
///
/// Labels are stored in input order: `labels()[i]` belongs to point `i`.
///
/// # Examples
/// ```
/// use densa_core::{ClusterId, ClusteringResult, Label};
///
/// let result = ClusteringResult::try_from_labels(vec![
///     Label::Cluster(ClusterId::new(0)),
///     Label::Noise,
///     Label::Cluster(ClusterId::new(1)),
/// ])?;
/// assert_eq!(result.labels().len(), 3);
/// assert_eq!(result.cluster_count(), 2);
/// assert_eq!(result.noise_count(), 1);
/// # Ok::<(), densa_core::NonContiguousClusterIds>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusteringResult {
    labels: Vec<Label>,
    cluster_count: usize,
}

/// Error returned when cluster identifiers are not contiguous starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NonContiguousClusterIds {
    /// Clusters exist but none of them is cluster `0`.
    #[error("cluster identifiers must include 0")]
    MissingZero,
    /// The labels skip identifiers.
    #[error("cluster identifiers must be contiguous without gaps")]
    Gap,
    /// The labels require identifiers beyond the host pointer width.
    #[error("cluster identifiers exceed or reach the host pointer-width limit")]
    Overflow,
}

impl ClusteringResult {
    /// Built by the expander, which allocates identifiers contiguously.
    pub(crate) fn from_expansion(labels: Vec<Label>, cluster_count: usize) -> Self {
        Self {
            labels,
            cluster_count,
        }
    }

    /// Attempts to build a result from externally supplied labels.
    ///
    /// Cluster identifiers in use must form the range `0..cluster_count`.
    /// Noise labels are allowed anywhere, and an empty or all-noise label
    /// vector yields `cluster_count == 0`.
    ///
    /// # Errors
    /// Returns [`NonContiguousClusterIds::MissingZero`] when clusters exist but
    /// cluster `0` does not, [`NonContiguousClusterIds::Gap`] when identifiers
    /// skip values, and [`NonContiguousClusterIds::Overflow`] when identifiers
    /// exceed the host pointer width.
    ///
    /// # Examples
    /// ```
    /// use densa_core::{ClusterId, ClusteringResult, Label, NonContiguousClusterIds};
    ///
    /// let err = ClusteringResult::try_from_labels(vec![Label::Cluster(ClusterId::new(2))])
    ///     .expect_err("cluster 0 is missing");
    /// assert_eq!(err, NonContiguousClusterIds::MissingZero);
    /// ```
    pub fn try_from_labels(labels: Vec<Label>) -> Result<Self, NonContiguousClusterIds> {
        let mut seen = BTreeSet::new();
        for id in labels.iter().filter_map(|label| label.cluster()) {
            if id.get() >= usize::MAX as u64 {
                return Err(NonContiguousClusterIds::Overflow);
            }
            seen.insert(id.get());
        }

        let Some(&max_id) = seen.last() else {
            return Ok(Self {
                labels,
                cluster_count: 0,
            });
        };
        if !seen.contains(&0) {
            return Err(NonContiguousClusterIds::MissingZero);
        }
        let expected =
            usize::try_from(max_id + 1).map_err(|_| NonContiguousClusterIds::Overflow)?;
        if seen.len() != expected {
            return Err(NonContiguousClusterIds::Gap);
        }

        Ok(Self {
            labels,
            cluster_count: expected,
        })
    }

    /// Returns the labels in input order.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Consumes the result and returns the labels.
    #[must_use]
    pub fn into_labels(self) -> Vec<Label> {
        self.labels
    }

    /// Counts how many distinct clusters exist within the labels.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// Counts the points labelled as noise.
    #[must_use]
    pub fn noise_count(&self) -> usize {
        self.labels.iter().filter(|label| label.is_noise()).count()
    }

    /// Returns the number of points in each cluster, indexed by cluster id.
    ///
    /// # Examples
    /// ```
    /// use densa_core::{ClusterId, ClusteringResult, Label};
    ///
    /// let result = ClusteringResult::try_from_labels(vec![
    ///     Label::Cluster(ClusterId::new(1)),
    ///     Label::Cluster(ClusterId::new(0)),
    ///     Label::Cluster(ClusterId::new(1)),
    /// ])?;
    /// assert_eq!(result.cluster_sizes(), vec![1, 2]);
    /// # Ok::<(), densa_core::NonContiguousClusterIds>(())
    /// ```
    #[must_use]
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.cluster_count];
        for id in self.labels.iter().filter_map(|label| label.cluster()) {
            if let Some(size) = usize::try_from(id.get())
                .ok()
                .and_then(|slot| sizes.get_mut(slot))
            {
                *size += 1;
            }
        }
        sizes
    }
}

/// Identifier assigned to a cluster.
///
/// # Examples
/// ```
/// use densa_core::ClusterId;
///
/// let id = ClusterId::new(4);
/// assert_eq!(id.get(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterId(u64);

impl ClusterId {
    /// Creates a new cluster identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: u64) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> u64 { self.0 }
}
