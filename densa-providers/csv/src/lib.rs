//! Delimited-text provider for planar points.
//!
//! Reads one point per line from loosely formatted CSV: commas, semicolons
//! and whitespace all separate fields, the first two fields are the
//! coordinates, and lines that do not start with two finite numbers (headers,
//! blanks, comments) are skipped. Also writes labelled rows back out.
use std::io::{self, BufRead, Write};

use densa_core::{DataSource, Label, Point};
use thiserror::Error;
use tracing::debug;

/// Value written to the `label` column for noise points.
pub const NOISE_LABEL: i64 = -2;

/// Header row written by [`write_labelled_rows`].
pub const RESULTS_HEADER: &str = "idx,x,y,label";

/// Errors produced while reading or writing point files.
#[derive(Debug, Error)]
pub enum CsvProviderError {
    /// Reading from or writing to the underlying stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// Points and labels passed to the writer differ in length.
    #[error("cannot write {labels} labels for {points} points")]
    LengthMismatch {
        /// Number of points supplied.
        points: usize,
        /// Number of labels supplied.
        labels: usize,
    },
}

/// Points loaded from a delimited text file.
#[derive(Clone, Debug)]
pub struct CsvPointSource {
    name: String,
    points: Vec<Point>,
    skipped_lines: usize,
}

impl CsvPointSource {
    /// Wraps already-parsed points.
    ///
    /// # Examples
    /// ```
    /// use densa_core::{DataSource, Point};
    /// use densa_providers_csv::CsvPointSource;
    ///
    /// let src = CsvPointSource::new("demo", vec![Point::new(0.0, 1.0)]);
    /// assert_eq!(src.len(), 1);
    /// assert_eq!(src.skipped_lines(), 0);
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            points,
            skipped_lines: 0,
        }
    }

    /// Parses every line of `reader`, in order.
    ///
    /// Empty input yields an empty source. Lines that are not valid UTF-8
    /// are skipped like any other unparseable line.
    ///
    /// # Errors
    /// Returns [`CsvProviderError::Io`] when reading fails.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use densa_core::{DataSource, Point};
    /// use densa_providers_csv::CsvPointSource;
    ///
    /// let src = CsvPointSource::try_from_reader("demo", Cursor::new("x,y\n1,2\n3;4\n"))?;
    /// assert_eq!(src.points(), &[Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
    /// assert_eq!(src.skipped_lines(), 1);
    /// # Ok::<(), densa_providers_csv::CsvProviderError>(())
    /// ```
    pub fn try_from_reader(
        name: impl Into<String>,
        reader: impl BufRead,
    ) -> Result<Self, CsvProviderError> {
        let mut points = Vec::new();
        let mut skipped_lines = 0;
        for line in reader.split(b'\n') {
            let bytes = line?;
            match std::str::from_utf8(&bytes).ok().and_then(parse_point_line) {
                Some(point) => points.push(point),
                None if bytes.iter().all(u8::is_ascii_whitespace) => {}
                None => skipped_lines += 1,
            }
        }
        let source = Self {
            name: name.into(),
            points,
            skipped_lines,
        };
        debug!(
            data_source = source.name.as_str(),
            points = source.points.len(),
            skipped = source.skipped_lines,
            "parsed point file"
        );
        Ok(source)
    }

    /// Number of non-blank lines that did not yield a point.
    #[must_use]
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }
}

impl DataSource for CsvPointSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Parses the leading two coordinates of a single line.
///
/// Fields beyond the second are ignored. Returns `None` when either of the
/// first two fields is missing, not a number, or not finite.
///
/// # Examples
/// ```
/// use densa_core::Point;
/// use densa_providers_csv::parse_point_line;
///
/// assert_eq!(parse_point_line("1.5; -2 ,extra"), Some(Point::new(1.5, -2.0)));
/// assert_eq!(parse_point_line("x,y"), None);
/// assert_eq!(parse_point_line("7"), None);
/// ```
#[must_use]
pub fn parse_point_line(line: &str) -> Option<Point> {
    let mut fields = line
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|field| !field.is_empty());
    let x = parse_coordinate(fields.next()?)?;
    let y = parse_coordinate(fields.next()?)?;
    Some(Point::new(x, y))
}

fn parse_coordinate(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Writes `idx,x,y,label` rows for `points` and their `labels`.
///
/// Noise is written as [`NOISE_LABEL`]; clusters as their identifier.
///
/// # Errors
/// Returns [`CsvProviderError::LengthMismatch`] when the slices differ in
/// length and [`CsvProviderError::Io`] when writing fails.
///
/// # Examples
/// ```
/// use densa_core::{ClusterId, Label, Point};
/// use densa_providers_csv::write_labelled_rows;
///
/// let mut out = Vec::new();
/// write_labelled_rows(
///     &mut out,
///     &[Point::new(0.5, 1.0), Point::new(9.0, 9.0)],
///     &[Label::Cluster(ClusterId::new(0)), Label::Noise],
/// )?;
/// assert_eq!(String::from_utf8_lossy(&out), "idx,x,y,label\n0,0.5,1,0\n1,9,9,-2\n");
/// # Ok::<(), densa_providers_csv::CsvProviderError>(())
/// ```
pub fn write_labelled_rows(
    mut writer: impl Write,
    points: &[Point],
    labels: &[Label],
) -> Result<(), CsvProviderError> {
    if points.len() != labels.len() {
        return Err(CsvProviderError::LengthMismatch {
            points: points.len(),
            labels: labels.len(),
        });
    }
    writeln!(writer, "{RESULTS_HEADER}")?;
    for (index, (point, label)) in points.iter().zip(labels).enumerate() {
        match label {
            Label::Noise => writeln!(writer, "{index},{},{},{NOISE_LABEL}", point.x, point.y)?,
            Label::Cluster(id) => writeln!(writer, "{index},{},{},{}", point.x, point.y, id.get())?,
        }
    }
    writer.flush()?;
    Ok(())
}
