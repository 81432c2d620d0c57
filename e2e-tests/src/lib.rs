//! End-to-End Tests for Side-Effect Hints
//!
//! This crate drives whole transactions through the pipeline:
//! - The `types` crate that models side effects and their fixed-capacity lists
//! - The `hints` crate that merges, sorts and deduplicates them into the bundle a circuit consumes

#[cfg(test)]
mod tests;
