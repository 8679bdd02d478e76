//! Benchmark support crate for densa.
//!
//! Provides seeded planar point generators and parameter types used by the
//! Criterion benchmarks comparing neighbour and execution strategies.

pub mod error;
pub mod params;
pub mod source;
