//! Property-based tests for the clustering engine.
//!
//! Checks the engine against a sentinel-array oracle, validates structural
//! label invariants, and verifies that neither the neighbour strategy nor
//! the classification schedule changes the labels.

mod equivalence;
mod oracle;
mod strategies;
mod structural;
#[cfg(test)]
mod tests;
mod types;
