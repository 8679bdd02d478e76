//! Core clustering orchestration for the densa library.
//!
//! Provides the [`Densa`] runtime entry point. A run classifies points
//! (possibly in parallel) and then expands clusters on the calling thread.
//! The expander only starts once classification has returned, so the label
//! array is never shared with a worker.

use std::{num::NonZeroUsize, sync::Arc};

use tracing::{debug, info, instrument};

use crate::{
    Result,
    builder::{ExecutionStrategy, NeighborStrategy},
    classify::Neighborhoods,
    datasource::DataSource,
    distance::Radius,
    error::DensaError,
    expand::{InlineQuery, NeighborIndex, expand},
    point::{Point, validate_finite},
    result::ClusteringResult,
};

/// Entry point for running density clustering.
///
/// # Examples
/// ```
/// use densa_core::{ClusterId, DensaBuilder, Label, PointCollection};
///
/// let points = PointCollection::from_pairs(
///     "demo",
///     [(0.0, 0.0), (0.01, 0.0), (0.02, 0.0), (5.0, 5.0)],
/// );
/// let densa = DensaBuilder::new()
///     .with_eps(0.05)
///     .with_min_pts(3)
///     .build()
///     .expect("builder must succeed");
/// let result = densa.run(&points).expect("run must succeed");
/// assert_eq!(result.cluster_count(), 1);
/// assert_eq!(
///     result.labels(),
///     &[
///         Label::Cluster(ClusterId::new(0)),
///         Label::Cluster(ClusterId::new(0)),
///         Label::Cluster(ClusterId::new(0)),
///         Label::Noise,
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Densa {
    radius: Radius,
    min_pts: NonZeroUsize,
    neighbor_strategy: NeighborStrategy,
    execution_strategy: ExecutionStrategy,
    threads: Option<NonZeroUsize>,
}

impl Densa {
    pub(crate) fn new(
        radius: Radius,
        min_pts: NonZeroUsize,
        neighbor_strategy: NeighborStrategy,
        execution_strategy: ExecutionStrategy,
        threads: Option<NonZeroUsize>,
    ) -> Self {
        Self {
            radius,
            min_pts,
            neighbor_strategy,
            execution_strategy,
            threads,
        }
    }

    /// Returns the neighbourhood radius configured for this instance.
    #[must_use]
    pub fn radius(&self) -> Radius {
        self.radius
    }

    /// Returns the minimum neighbourhood size configured for this instance.
    #[must_use]
    pub fn min_pts(&self) -> NonZeroUsize {
        self.min_pts
    }

    /// Returns how neighbourhoods are obtained during expansion.
    #[must_use]
    pub fn neighbor_strategy(&self) -> NeighborStrategy {
        self.neighbor_strategy
    }

    /// Returns the resolved execution strategy. Never `Auto`.
    ///
    /// # Examples
    /// ```
    /// use densa_core::{DensaBuilder, ExecutionStrategy};
    ///
    /// let densa = DensaBuilder::new()
    ///     .with_execution_strategy(ExecutionStrategy::Sequential)
    ///     .build()
    ///     .expect("builder must apply execution strategy");
    /// assert_eq!(densa.execution_strategy(), ExecutionStrategy::Sequential);
    /// ```
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Returns the dedicated worker count, if one was configured.
    #[must_use]
    pub fn threads(&self) -> Option<NonZeroUsize> {
        self.threads
    }

    /// Clusters the points held by `source` and returns one label per point
    /// in input order.
    ///
    /// An empty source yields an empty result.
    ///
    /// # Errors
    /// Returns [`DensaError::DataSource`] when a point has a non-finite
    /// coordinate and [`DensaError::ThreadPool`] when a dedicated worker pool
    /// cannot be created.
    pub fn run<D: DataSource + ?Sized>(&self, source: &D) -> Result<ClusteringResult> {
        self.run_points(source.name(), source.points())
    }

    #[instrument(
        name = "core.run",
        err,
        skip_all,
        fields(
            data_source = %name,
            items = points.len(),
            eps = self.radius.get(),
            min_pts = %self.min_pts,
            neighbors = ?self.neighbor_strategy,
            strategy = ?self.execution_strategy,
        ),
    )]
    fn run_points(&self, name: &str, points: &[Point]) -> Result<ClusteringResult> {
        validate_finite(points).map_err(|error| DensaError::DataSource {
            data_source: Arc::from(name),
            error,
        })?;
        if points.is_empty() {
            debug!(data_source = name, "data source is empty");
            return Ok(ClusteringResult::from_expansion(Vec::new(), 0));
        }

        let result = match self.neighbor_strategy {
            NeighborStrategy::Precomputed => {
                let neighborhoods = self.classify(points)?;
                expand_precomputed(&neighborhoods)
            }
            NeighborStrategy::Inline => {
                expand_inline(&InlineQuery::new(points, self.radius, self.min_pts))
            }
        };
        info!(
            clusters = result.cluster_count(),
            noise = result.noise_count(),
            "clustering completed"
        );
        Ok(result)
    }

    /// Computes every point's neighbour list and core flag.
    ///
    /// This is the stage selected by [`ExecutionStrategy`]; its output does
    /// not depend on the schedule.
    ///
    /// # Errors
    /// Returns [`DensaError::ThreadPool`] when a dedicated worker pool cannot
    /// be created.
    ///
    /// # Examples
    /// ```
    /// use densa_core::{DensaBuilder, Point};
    ///
    /// let densa = DensaBuilder::new().with_eps(1.0).with_min_pts(2).build()?;
    /// let hoods = densa.classify(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)])?;
    /// assert_eq!(hoods.core_count(), 2);
    /// # Ok::<(), densa_core::DensaError>(())
    /// ```
    #[instrument(
        name = "core.classify",
        err,
        skip_all,
        fields(items = points.len(), strategy = ?self.execution_strategy),
    )]
    pub fn classify(&self, points: &[Point]) -> Result<Neighborhoods> {
        let neighborhoods = match self.execution_strategy {
            #[cfg(feature = "parallel")]
            ExecutionStrategy::Parallel => self.classify_parallel(points)?,
            _ => Neighborhoods::sequential(points, self.radius, self.min_pts),
        };
        debug!(
            core_points = neighborhoods.core_count(),
            "classification completed"
        );
        Ok(neighborhoods)
    }

    #[cfg(feature = "parallel")]
    fn classify_parallel(&self, points: &[Point]) -> Result<Neighborhoods> {
        let Some(threads) = self.threads else {
            return Ok(Neighborhoods::parallel(points, self.radius, self.min_pts));
        };
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads.get())
            .build()
            .map_err(|error| DensaError::ThreadPool {
                message: Arc::from(error.to_string()),
            })?;
        Ok(pool.install(|| Neighborhoods::parallel(points, self.radius, self.min_pts)))
    }
}

#[instrument(name = "core.expand", skip_all, fields(items = neighborhoods.len(), source = "precomputed"))]
fn expand_precomputed(neighborhoods: &Neighborhoods) -> ClusteringResult {
    expand(neighborhoods)
}

#[instrument(name = "core.expand", skip_all, fields(items = query.len(), source = "inline"))]
fn expand_inline(query: &InlineQuery<'_>) -> ClusteringResult {
    expand(query)
}
