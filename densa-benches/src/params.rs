//! Benchmark parameter types.

use std::fmt;

use densa_core::{ExecutionStrategy, NeighborStrategy};

/// Parameters identifying one engine benchmark case.
#[derive(Clone, Copy, Debug)]
pub struct EngineBenchParams {
    /// Number of points in the dataset.
    pub point_count: usize,
    /// How neighbourhoods are obtained.
    pub neighbors: NeighborStrategy,
    /// How precomputation is scheduled.
    pub execution: ExecutionStrategy,
    /// Dedicated worker count, or `None` for the global pool.
    pub threads: Option<usize>,
}

impl fmt::Display for EngineBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neighbors = match self.neighbors {
            NeighborStrategy::Precomputed => "precomputed",
            NeighborStrategy::Inline => "inline",
        };
        let execution = match self.execution {
            ExecutionStrategy::Auto => "auto",
            ExecutionStrategy::Sequential => "seq",
            ExecutionStrategy::Parallel => "par",
        };
        write!(f, "n={},{neighbors},{execution}", self.point_count)?;
        if let Some(threads) = self.threads {
            write!(f, ",t={threads}")?;
        }
        Ok(())
    }
}
