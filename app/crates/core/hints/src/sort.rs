//! Sorting with permutation hints
//!
//! The circuit receives both an array and its sorted counterpart and checks
//! that one is a permutation of the other. The index hints produced here
//! name, for every slot, where the matching element lives in the other array.

use core::cmp::Ordering;

use types::{Empty, FixedCapacityList, Fr, IndexHint, Ordered, Positioned, SortedHints};

/// Direction in which non-empty items are ordered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest key first
    #[default]
    Ascending,
    /// Largest key first
    Descending,
}

impl SortOrder {
    /// Orient an ascending comparison in this direction
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Array the returned index hints are expressed against
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HintBasis {
    /// `hints[i]` is the sorted position of original item `i`:
    /// `sorted[hints[i]] == original[i]`
    Original,
    /// `hints[i]` is the original position of sorted item `i`:
    /// `sorted[i] == original[hints[i]]`
    #[default]
    Sorted,
}

/// Options for [`sort_get_sorted_hints`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortOptions {
    /// Direction of the sort
    pub order: SortOrder,
    /// Basis of the returned hints
    pub basis: HintBasis,
}

impl SortOptions {
    /// Options with an explicit order and basis
    pub fn new(order: SortOrder, basis: HintBasis) -> Self {
        Self { order, basis }
    }

    /// Replace the sort direction
    pub fn with_order(self, order: SortOrder) -> Self {
        Self { order, ..self }
    }

    /// Replace the hint basis
    pub fn with_basis(self, basis: HintBasis) -> Self {
        Self { basis, ..self }
    }
}

/// Sort `list` by `key` and compute the index hints relating it to the input
///
/// The sort is stable. Empty items always go to the end, whatever the
/// direction, and keep their relative order. Once the permutation is built,
/// every hint slot whose item is empty is reset to its own index (see
/// [`fill_empty_hints_with_identity`]).
///
/// The hints form a permutation only when `list` is compact, as
/// [`merge_accumulated_data`](crate::merge::merge_accumulated_data) output
/// is. Gaps between non-empty items leave padding hints that repeat an index.
pub fn sort_get_sorted_hints<T, K, F, const N: usize>(
    list: &FixedCapacityList<T, N>,
    key: F,
    options: SortOptions,
) -> (FixedCapacityList<T, N>, SortedHints<N>)
where
    T: Empty + Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    const { assert!(N <= IndexHint::MAX as usize, "list capacity must fit in an index hint") };

    let mut indexed: Vec<(usize, &T)> = list.iter().enumerate().collect();
    indexed.sort_by(|(_, a), (_, b)| match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => options.order.apply(key(*a).cmp(&key(*b))),
    });

    let sorted = FixedCapacityList::new(core::array::from_fn(|i| indexed[i].1.clone()));

    let mut hints: [IndexHint; N] = [0; N];
    for (sorted_index, (original_index, _)) in indexed.iter().enumerate() {
        match options.basis {
            HintBasis::Sorted => hints[sorted_index] = to_hint(*original_index),
            HintBasis::Original => hints[*original_index] = to_hint(sorted_index),
        }
    }

    // A hint slot describes the item at the same index of its basis array
    let hints = match options.basis {
        HintBasis::Sorted => fill_empty_hints_with_identity(&sorted, hints.into()),
        HintBasis::Original => fill_empty_hints_with_identity(list, hints.into()),
    };

    (sorted, hints)
}

/// Point every hint whose item in `reference` is empty back at itself
///
/// Consuming circuits expect padding slots to map to themselves
/// (`hints[i] == i`) rather than to wherever the sort left them.
pub fn fill_empty_hints_with_identity<T: Empty, const N: usize>(
    reference: &FixedCapacityList<T, N>,
    hints: SortedHints<N>,
) -> SortedHints<N> {
    const { assert!(N <= IndexHint::MAX as usize, "list capacity must fit in an index hint") };

    let mut hints = hints.into_array();
    for (index, (hint, item)) in hints.iter_mut().zip(reference).enumerate() {
        if item.is_empty() {
            *hint = to_hint(index);
        }
    }
    hints.into()
}

/// Sort by ascending counter, returning hints in the requested basis
pub fn sort_by_counter_get_sorted_hints<T, const N: usize>(
    list: &FixedCapacityList<T, N>,
    basis: HintBasis,
) -> (FixedCapacityList<T, N>, SortedHints<N>)
where
    T: Ordered + Empty + Clone,
{
    sort_get_sorted_hints(
        list,
        |item: &T| item.counter(),
        SortOptions::new(SortOrder::Ascending, basis),
    )
}

/// Sort by position, breaking ties by counter
pub fn sort_by_position_then_counter_get_sorted_hints<T, const N: usize>(
    list: &FixedCapacityList<T, N>,
    options: SortOptions,
) -> (FixedCapacityList<T, N>, SortedHints<N>)
where
    T: Positioned + Ordered + Empty + Clone,
{
    sort_get_sorted_hints(
        list,
        |item: &T| -> (Fr, u32) { (item.position(), item.counter()) },
        options,
    )
}

/// Sort by ascending counter without computing hints
pub fn sort_by_counter<T, const N: usize>(list: &FixedCapacityList<T, N>) -> FixedCapacityList<T, N>
where
    T: Ordered + Empty + Clone,
{
    sort_by_counter_get_sorted_hints(list, HintBasis::Sorted).0
}

/// Convert a slot index into a hint value
///
/// Callers only pass indexes below a capacity checked at compile time.
fn to_hint(index: usize) -> IndexHint {
    match IndexHint::try_from(index) {
        Ok(hint) => hint,
        Err(err) => unreachable!("slot index {index} exceeds capacity bound: {err}"),
    }
}
