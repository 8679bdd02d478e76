//! Builder utilities for configuring densa runs.
//!
//! Exposes the neighbour and execution strategy selection surface and the
//! parameter validation performed before constructing [`Densa`] instances.

use std::num::NonZeroUsize;

use crate::{Result, densa::Densa, distance::Radius, error::DensaError};

/// Radius used when the caller does not override it.
pub const DEFAULT_EPS: f64 = 0.05;
/// Minimum neighbourhood size used when the caller does not override it.
pub const DEFAULT_MIN_PTS: usize = 10;

/// Selects how the expander obtains each point's neighbourhood.
///
/// Both strategies produce identical labels for the same input.
///
/// # Examples
/// ```
/// use densa_core::NeighborStrategy;
///
/// assert_eq!(NeighborStrategy::default(), NeighborStrategy::Precomputed);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NeighborStrategy {
    /// Classify every point up front, then expand over the stored lists.
    #[default]
    Precomputed,
    /// Query neighbours on demand while expanding. Nothing is precomputed.
    Inline,
}

/// Indicates how the precomputation stage is scheduled when
/// [`NeighborStrategy::Precomputed`] is selected.
///
/// `Auto` resolves to `Parallel` when the `parallel` feature is compiled in
/// and to `Sequential` otherwise. Expansion always runs on the calling
/// thread.
///
/// # Examples
/// ```
/// use densa_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::Auto;
/// assert!(matches!(strategy, ExecutionStrategy::Auto));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Allow the library to select the schedule automatically.
    #[default]
    Auto,
    /// Classify points one after another on the calling thread.
    Sequential,
    /// Classify points on a rayon pool.
    Parallel,
}

/// Configures and constructs [`Densa`] instances.
///
/// # Examples
/// ```
/// use densa_core::{DensaBuilder, ExecutionStrategy, NeighborStrategy};
///
/// let densa = DensaBuilder::new()
///     .with_eps(0.25)
///     .with_min_pts(4)
///     .with_neighbor_strategy(NeighborStrategy::Inline)
///     .with_execution_strategy(ExecutionStrategy::Sequential)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(densa.radius().get(), 0.25);
/// assert_eq!(densa.min_pts().get(), 4);
/// assert_eq!(densa.neighbor_strategy(), NeighborStrategy::Inline);
/// ```
#[derive(Debug, Clone)]
pub struct DensaBuilder {
    eps: f64,
    min_pts: usize,
    neighbor_strategy: NeighborStrategy,
    execution_strategy: ExecutionStrategy,
    threads: Option<NonZeroUsize>,
}

impl Default for DensaBuilder {
    fn default() -> Self {
        Self {
            eps: DEFAULT_EPS,
            min_pts: DEFAULT_MIN_PTS,
            neighbor_strategy: NeighborStrategy::default(),
            execution_strategy: ExecutionStrategy::default(),
            threads: None,
        }
    }
}

impl DensaBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use densa_core::{DensaBuilder, ExecutionStrategy};
    ///
    /// let builder = DensaBuilder::new();
    /// assert_eq!(builder.eps(), 0.05);
    /// assert_eq!(builder.min_pts(), 10);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Auto);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the neighbourhood radius.
    #[must_use]
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Returns the configured neighbourhood radius.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Overrides the minimum neighbourhood size, which counts the point itself.
    #[must_use]
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Returns the configured minimum neighbourhood size.
    #[must_use]
    pub fn min_pts(&self) -> usize {
        self.min_pts
    }

    /// Sets how neighbourhoods are obtained during expansion.
    #[must_use]
    pub fn with_neighbor_strategy(mut self, strategy: NeighborStrategy) -> Self {
        self.neighbor_strategy = strategy;
        self
    }

    /// Returns the configured neighbour strategy.
    #[must_use]
    pub fn neighbor_strategy(&self) -> NeighborStrategy {
        self.neighbor_strategy
    }

    /// Sets how the precomputation stage is scheduled.
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the currently configured execution strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Runs parallel precomputation on a dedicated pool with this many
    /// workers. `None` uses the global rayon pool.
    ///
    /// # Examples
    /// ```
    /// use std::num::NonZeroUsize;
    /// use densa_core::DensaBuilder;
    ///
    /// let builder = DensaBuilder::new().with_threads(NonZeroUsize::new(2));
    /// assert_eq!(builder.threads().map(NonZeroUsize::get), Some(2));
    /// ```
    #[must_use]
    pub fn with_threads(mut self, threads: Option<NonZeroUsize>) -> Self {
        self.threads = threads;
        self
    }

    /// Returns the configured worker count.
    #[must_use]
    pub fn threads(&self) -> Option<NonZeroUsize> {
        self.threads
    }

    /// Validates the configuration and constructs a [`Densa`] instance.
    ///
    /// # Errors
    /// Returns [`DensaError::InvalidEps`] when `eps` is not finite and
    /// positive, [`DensaError::InvalidMinPts`] when `min_pts` is zero, and
    /// [`DensaError::BackendUnavailable`] when `Parallel` is requested in a
    /// build without the `parallel` feature.
    ///
    /// # Examples
    /// ```
    /// use densa_core::{DensaBuilder, DensaError};
    ///
    /// let err = DensaBuilder::new().with_min_pts(0).build().unwrap_err();
    /// assert!(matches!(err, DensaError::InvalidMinPts { got: 0 }));
    /// ```
    pub fn build(self) -> Result<Densa> {
        let radius = Radius::new(self.eps)?;
        let min_pts = NonZeroUsize::new(self.min_pts)
            .ok_or(DensaError::InvalidMinPts { got: self.min_pts })?;
        let execution_strategy = resolve_execution(self.execution_strategy)?;

        Ok(Densa::new(
            radius,
            min_pts,
            self.neighbor_strategy,
            execution_strategy,
            self.threads,
        ))
    }
}

#[cfg(feature = "parallel")]
const fn resolve_execution(requested: ExecutionStrategy) -> Result<ExecutionStrategy> {
    match requested {
        ExecutionStrategy::Auto | ExecutionStrategy::Parallel => Ok(ExecutionStrategy::Parallel),
        ExecutionStrategy::Sequential => Ok(ExecutionStrategy::Sequential),
    }
}

#[cfg(not(feature = "parallel"))]
const fn resolve_execution(requested: ExecutionStrategy) -> Result<ExecutionStrategy> {
    match requested {
        ExecutionStrategy::Auto | ExecutionStrategy::Sequential => {
            Ok(ExecutionStrategy::Sequential)
        }
        ExecutionStrategy::Parallel => Err(DensaError::BackendUnavailable {
            requested: ExecutionStrategy::Parallel,
        }),
    }
}
