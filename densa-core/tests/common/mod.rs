use densa_core::{DataSource, Point};

/// Data source with a fixed name over caller-supplied coordinates.
#[derive(Clone)]
pub struct Dummy {
    points: Vec<Point>,
}

impl Dummy {
    #[must_use]
    pub fn new(pairs: &[(f64, f64)]) -> Self {
        Self {
            points: pairs.iter().copied().map(Point::from).collect(),
        }
    }

    #[must_use]
    pub fn on_a_line(xs: &[f64]) -> Self {
        Self {
            points: xs.iter().map(|&x| Point::new(x, 0.0)).collect(),
        }
    }
}

impl DataSource for Dummy {
    fn name(&self) -> &str {
        "dummy"
    }

    fn points(&self) -> &[Point] {
        &self.points
    }
}
