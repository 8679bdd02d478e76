//! Point labels and the transitions the expander may apply to them.

use std::fmt;

use crate::result::ClusterId;

/// Final label of a point.
///
/// # Examples
/// ```
/// use densa_core::{ClusterId, Label};
///
/// let label = Label::Cluster(ClusterId::new(3));
/// assert_eq!(label.cluster(), Some(ClusterId::new(3)));
/// assert!(Label::Noise.is_noise());
/// assert_eq!(Label::Noise.to_string(), "noise");
/// assert_eq!(label.to_string(), "3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    /// The point was not reachable from any core point.
    Noise,
    /// The point belongs to the given cluster.
    Cluster(ClusterId),
}

impl Label {
    /// Returns the cluster the point belongs to, if any.
    #[must_use]
    pub const fn cluster(self) -> Option<ClusterId> {
        match self {
            Self::Cluster(id) => Some(id),
            Self::Noise => None,
        }
    }

    /// Returns whether the point is noise.
    #[must_use]
    pub const fn is_noise(self) -> bool {
        matches!(self, Self::Noise)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Noise => f.write_str("noise"),
            Self::Cluster(id) => write!(f, "{}", id.get()),
        }
    }
}

/// Working label held by the expander.
///
/// Legal transitions are `Unvisited -> Noise`, `Unvisited -> Cluster` and
/// `Noise -> Cluster`. `Cluster` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LabelState {
    Unvisited,
    Noise,
    Cluster(ClusterId),
}

impl LabelState {
    pub(crate) const fn is_unvisited(self) -> bool {
        matches!(self, Self::Unvisited)
    }

    pub(crate) const fn is_cluster(self) -> bool {
        matches!(self, Self::Cluster(_))
    }

    /// Marks an unvisited point as noise. Other states are left untouched.
    pub(crate) fn mark_noise(&mut self) {
        if self.is_unvisited() {
            *self = Self::Noise;
        }
    }

    /// Assigns `cluster` unless the point already belongs to a cluster.
    ///
    /// Returns whether the label changed.
    pub(crate) fn claim(&mut self, cluster: ClusterId) -> bool {
        if self.is_cluster() {
            return false;
        }
        *self = Self::Cluster(cluster);
        true
    }

    /// Converts the working state into its final label.
    ///
    /// The driving loop visits every index, so `Unvisited` never reaches
    /// this point; it would be reported as noise.
    pub(crate) fn settle(self) -> Label {
        debug_assert!(!self.is_unvisited(), "expansion left a point unvisited");
        match self {
            Self::Unvisited | Self::Noise => Label::Noise,
            Self::Cluster(id) => Label::Cluster(id),
        }
    }
}
