//! Planar points and the ordered collections the engine clusters.

use std::fmt;

use crate::{datasource::DataSource, error::DataSourceError};

/// A point in the plane.
///
/// # Examples
/// ```
/// use densa_core::Point;
///
/// let point = Point::new(1.5, -2.0);
/// assert_eq!(point.x, 1.5);
/// assert_eq!(point.y, -2.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the first coordinate that is NaN or infinite, if any.
    pub(crate) fn non_finite_axis(self) -> Option<(Axis, f64)> {
        if !self.x.is_finite() {
            return Some((Axis::X, self.x));
        }
        if !self.y.is_finite() {
            return Some((Axis::Y, self.y));
        }
        None
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Names a coordinate of a [`Point`] in diagnostics.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Axis {
    /// The horizontal coordinate.
    X,
    /// The vertical coordinate.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// A named, ordered sequence of points.
///
/// A point's position in the collection is its identity for the whole run:
/// labels are reported in the same order.
///
/// # Examples
/// ```
/// use densa_core::{DataSource, Point, PointCollection};
///
/// let points = PointCollection::from_pairs("demo", [(0.0, 0.0), (1.0, 1.0)]);
/// assert_eq!(points.len(), 2);
/// assert_eq!(points.name(), "demo");
/// assert_eq!(points.point(1)?, Point::new(1.0, 1.0));
/// # Ok::<(), densa_core::DataSourceError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PointCollection {
    name: String,
    points: Vec<Point>,
}

impl PointCollection {
    /// Wraps `points` under `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Builds a collection from `(x, y)` pairs, preserving their order.
    #[must_use]
    pub fn from_pairs(name: impl Into<String>, pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self::new(name, pairs.into_iter().map(Point::from).collect())
    }

    /// Consumes the collection and returns the points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl DataSource for PointCollection {
    fn name(&self) -> &str {
        &self.name
    }

    fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Checks every coordinate in `points` is finite.
pub(crate) fn validate_finite(points: &[Point]) -> Result<(), DataSourceError> {
    for (index, point) in points.iter().enumerate() {
        if let Some((axis, value)) = point.non_finite_axis() {
            return Err(DataSourceError::NonFiniteCoordinate { index, axis, value });
        }
    }
    Ok(())
}
