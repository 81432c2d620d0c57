//! Side-effect hint generation
//!
//! Circuits cannot afford to sort or deduplicate in constraints. Instead they
//! receive the original data together with non-deterministic hints and check
//! a permutation argument against them. This crate computes those hints:
//! - `merge`: concatenate the non-revertible and revertible halves
//! - `sort`: reorder by a key and record the permutation as index hints
//! - `dedupe`: collapse runs of equal keys and record the run lengths
//! - `combine`: run the whole pipeline for one transaction
//!
//! # Architecture
//! Every operation is a pure function over caller-owned fixed-capacity
//! lists. No state is shared between invocations, so transactions can be
//! processed in parallel by calling the pipeline once per transaction.

pub mod combine;
pub mod dedupe;
pub mod merge;
pub mod sort;

#[cfg(test)]
mod test;

pub use combine::CombineHints;
pub use dedupe::{deduplicate_sorted_array, deduplicate_sorted_array_by_key};
pub use merge::merge_accumulated_data;
pub use sort::{
    HintBasis, SortOptions, SortOrder, fill_empty_hints_with_identity, sort_by_counter,
    sort_by_counter_get_sorted_hints, sort_by_position_then_counter_get_sorted_hints,
    sort_get_sorted_hints,
};
