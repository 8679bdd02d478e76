//! Data source abstractions for the densa core runtime.

use crate::{error::DataSourceError, point::Point};

/// Abstraction over an ordered collection of planar points.
///
/// The engine reads the whole slice returned by [`DataSource::points`]; the
/// index of a point in that slice is the index its label is reported under.
///
/// # Examples
/// ```
/// use densa_core::{DataSource, DataSourceError, Point};
///
/// struct Line(Vec<Point>);
///
/// impl DataSource for Line {
///     fn name(&self) -> &str { "line" }
///     fn points(&self) -> &[Point] { &self.0 }
/// }
///
/// let src = Line(vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0)]);
/// assert_eq!(src.len(), 2);
/// assert_eq!(src.point(1)?, Point::new(2.0, 0.0));
/// assert!(matches!(src.point(2), Err(DataSourceError::OutOfBounds { index: 2 })));
/// # Ok::<(), DataSourceError>(())
/// ```
pub trait DataSource {
    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Returns the points in identity order.
    fn points(&self) -> &[Point];

    /// Returns number of points in the source.
    fn len(&self) -> usize {
        self.points().len()
    }

    /// Returns whether the source contains no points.
    ///
    /// # Examples
    /// ```
    /// use densa_core::{DataSource, PointCollection};
    ///
    /// let src = PointCollection::new("empty", Vec::new());
    /// assert!(src.is_empty());
    /// ```
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the point stored at `index`.
    ///
    /// # Errors
    /// Returns [`DataSourceError::OutOfBounds`] when `index >= len()`.
    fn point(&self, index: usize) -> Result<Point, DataSourceError> {
        self.points()
            .get(index)
            .copied()
            .ok_or(DataSourceError::OutOfBounds { index })
    }
}

impl<D: DataSource + ?Sized> DataSource for &D {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn points(&self) -> &[Point] {
        (**self).points()
    }
}
