//! Seeded planar point generators.
//!
//! Points are drawn as Gaussian blobs around centroids spaced on a circle,
//! plus a fraction of uniform background points that mostly end up as noise.

use std::f64::consts::PI;

use densa_core::{Point, PointCollection};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur while preparing benchmark data sources.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SyntheticError {
    /// The requested point count was zero.
    #[error("point count must be greater than zero")]
    ZeroPoints,
    /// The requested cluster count was zero.
    #[error("cluster count must be greater than zero")]
    ZeroClusters,
    /// The configured cluster count exceeded the available points.
    #[error("cluster count ({cluster_count}) must not exceed point count ({point_count})")]
    ClusterCountExceedsPointCount {
        /// Number of clusters requested.
        cluster_count: usize,
        /// Number of points requested.
        point_count: usize,
    },
    /// A floating-point parameter was non-finite or out of range.
    #[error("invalid value for `{parameter}`")]
    InvalidFloatParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
}

/// Configuration for Gaussian blob data in the unit square's neighbourhood.
#[derive(Clone, Debug)]
pub struct BlobConfig {
    /// Number of points to generate.
    pub point_count: usize,
    /// Number of Gaussian clusters.
    pub cluster_count: usize,
    /// Radius of the circle the centroids sit on.
    pub separation: f64,
    /// Standard deviation of each blob.
    pub spread: f64,
    /// Share of points drawn uniformly from the bounding box instead.
    pub background: f64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl BlobConfig {
    /// A layout where `eps = 0.05` separates blobs cleanly.
    #[must_use]
    pub const fn planar(point_count: usize, seed: u64) -> Self {
        Self {
            point_count,
            cluster_count: 4,
            separation: 0.35,
            spread: 0.03,
            background: 0.05,
            seed,
        }
    }

    fn validate(&self) -> Result<(), SyntheticError> {
        if self.point_count == 0 {
            return Err(SyntheticError::ZeroPoints);
        }
        if self.cluster_count == 0 {
            return Err(SyntheticError::ZeroClusters);
        }
        if self.cluster_count > self.point_count {
            return Err(SyntheticError::ClusterCountExceedsPointCount {
                cluster_count: self.cluster_count,
                point_count: self.point_count,
            });
        }
        check_float(self.separation, "separation", false)?;
        check_float(self.spread, "spread", false)?;
        check_float(self.background, "background", true)?;
        if self.background > 1.0 {
            return Err(SyntheticError::InvalidFloatParameter {
                parameter: "background",
            });
        }
        Ok(())
    }
}

fn check_float(value: f64, parameter: &'static str, allow_zero: bool) -> Result<(), SyntheticError> {
    let valid = value.is_finite() && (value > 0.0 || (allow_zero && value == 0.0));
    if valid {
        Ok(())
    } else {
        Err(SyntheticError::InvalidFloatParameter { parameter })
    }
}

/// Generates a named point collection according to `config`.
///
/// # Errors
/// Returns [`SyntheticError`] when the configuration is invalid.
///
/// # Examples
/// ```
/// use densa_benches::source::{BlobConfig, generate_blobs};
/// use densa_core::DataSource;
///
/// let source = generate_blobs(&BlobConfig::planar(64, 7)).expect("valid config");
/// assert_eq!(source.len(), 64);
/// ```
pub fn generate_blobs(config: &BlobConfig) -> Result<PointCollection, SyntheticError> {
    config.validate()?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let centroids = centroids(config);
    let extent = config.separation + 4.0 * config.spread;

    let mut points = Vec::with_capacity(config.point_count);
    for centroid in centroids.iter().cycle().take(config.point_count) {
        let point = if rng.gen_bool(config.background) {
            Point::new(
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
            )
        } else {
            Point::new(
                centroid.x + standard_normal(&mut rng) * config.spread,
                centroid.y + standard_normal(&mut rng) * config.spread,
            )
        };
        points.push(point);
    }
    Ok(PointCollection::new("synthetic-blobs", points))
}

fn centroids(config: &BlobConfig) -> Vec<Point> {
    (0..config.cluster_count)
        .map(|index| {
            let angle = (index as f64 / config.cluster_count as f64) * (2.0 * PI);
            Point::new(
                config.separation * angle.cos(),
                config.separation * angle.sin(),
            )
        })
        .collect()
}

/// Box-Muller sample from the standard normal distribution.
fn standard_normal(rng: &mut SmallRng) -> f64 {
    let u1 = rng.gen_range(f64::EPSILON..1.0);
    let u2 = rng.gen_range(0.0..1.0);
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}
