//! Distance primitives for planar points.
//!
//! Neighbourhood tests never take a square root: [`Radius`] keeps the squared
//! radius alongside the radius and every comparison is made against it.

use crate::{Result, error::DensaError, point::Point};

/// Squared Euclidean distance between two points.
///
/// # Examples
/// ```
/// use densa_core::{Point, squared_distance};
///
/// let d2 = squared_distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
/// assert_eq!(d2, 25.0);
/// ```
#[must_use]
#[inline]
pub fn squared_distance(left: Point, right: Point) -> f64 {
    let dx = left.x - right.x;
    let dy = left.y - right.y;
    dx * dx + dy * dy
}

/// A validated neighbourhood radius (`eps`).
///
/// Only finite, strictly positive radii can be constructed, so a neighbour
/// query is never asked about a degenerate or negative ball.
///
/// # Examples
/// ```
/// use densa_core::Radius;
///
/// let radius = Radius::new(0.5)?;
/// assert_eq!(radius.get(), 0.5);
/// assert_eq!(radius.squared(), 0.25);
/// assert!(Radius::new(0.0).is_err());
/// # Ok::<(), densa_core::DensaError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Radius {
    eps: f64,
    eps_squared: f64,
}

impl Radius {
    /// Validates `eps` and caches its square.
    ///
    /// # Errors
    /// Returns [`DensaError::InvalidEps`] when `eps` is NaN, infinite, zero,
    /// or negative.
    pub fn new(eps: f64) -> Result<Self> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(DensaError::InvalidEps { got: eps });
        }
        Ok(Self {
            eps,
            eps_squared: eps * eps,
        })
    }

    /// Returns the radius.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.eps
    }

    /// Returns the squared radius used for comparisons.
    #[must_use]
    pub const fn squared(self) -> f64 {
        self.eps_squared
    }

    /// Returns whether `left` and `right` lie within the closed ball.
    #[must_use]
    #[inline]
    pub fn contains(self, left: Point, right: Point) -> bool {
        squared_distance(left, right) <= self.eps_squared
    }
}
