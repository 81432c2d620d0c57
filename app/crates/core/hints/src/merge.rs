//! Merging the two halves of a transaction's side effects

use log::trace;
use types::{Empty, FixedCapacityList};

/// Concatenate the non-empty items of both halves into one list
///
/// Non-revertible side effects are created strictly before revertible ones,
/// so when each half is ordered by counter the result is too.
///
/// # Panics
///
/// Panics if the halves hold more than `N` non-empty items between them.
/// The protocol bounds both halves together, so this is an upstream bug.
pub fn merge_accumulated_data<T: Empty + Clone, const N: usize>(
    non_revertible: &FixedCapacityList<T, N>,
    revertible: &FixedCapacityList<T, N>,
) -> FixedCapacityList<T, N> {
    let num_non_revertible = non_revertible.count_non_empty();
    let num_revertible = revertible.count_non_empty();
    let total = num_non_revertible.saturating_add(num_revertible);
    assert!(
        total <= N,
        "merged side effects ({num_non_revertible} non-revertible + {num_revertible} revertible) exceed capacity {N}",
    );
    trace!("merging {num_non_revertible} non-revertible and {num_revertible} revertible items");

    let merged = non_revertible
        .non_empty_items()
        .chain(revertible.non_empty_items())
        .cloned();
    match FixedCapacityList::from_items(merged) {
        Ok(list) => list,
        Err(err) => unreachable!("capacity checked above: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{Fr, NoteHash};

    fn note(value: u64, counter: u32) -> NoteHash {
        NoteHash::new(Fr::from(value), counter)
    }

    #[test]
    fn test_merge_concatenates_in_order() {
        let non_revertible =
            FixedCapacityList::<NoteHash, 4>::from_items([note(1, 1)]).unwrap();
        let revertible =
            FixedCapacityList::<NoteHash, 4>::from_items([note(2, 5), note(3, 3)]).unwrap();

        let merged = merge_accumulated_data(&non_revertible, &revertible);
        assert_eq!(
            merged,
            FixedCapacityList::new([note(1, 1), note(2, 5), note(3, 3), NoteHash::empty()])
        );
    }

    #[test]
    fn test_merge_skips_interspersed_empties() {
        let non_revertible =
            FixedCapacityList::new([NoteHash::empty(), note(1, 1), NoteHash::empty()]);
        let revertible = FixedCapacityList::new([note(2, 2), NoteHash::empty(), note(3, 3)]);

        let merged = merge_accumulated_data(&non_revertible, &revertible);
        assert_eq!(
            merged,
            FixedCapacityList::new([note(1, 1), note(2, 2), note(3, 3)])
        );
    }

    #[test]
    fn test_merge_empty_halves() {
        let empty = FixedCapacityList::<NoteHash, 3>::empty();
        assert_eq!(merge_accumulated_data(&empty, &empty), empty);
    }

    #[test]
    fn test_merge_exactly_full() {
        let non_revertible = FixedCapacityList::new([note(1, 1), NoteHash::empty()]);
        let revertible = FixedCapacityList::new([note(2, 2), NoteHash::empty()]);
        let merged = merge_accumulated_data(&non_revertible, &revertible);
        assert_eq!(merged, FixedCapacityList::new([note(1, 1), note(2, 2)]));
    }

    #[test]
    #[should_panic(expected = "exceed capacity 2")]
    fn test_merge_over_capacity_panics() {
        let non_revertible = FixedCapacityList::new([note(1, 1), note(2, 2)]);
        let revertible = FixedCapacityList::new([note(3, 3), NoteHash::empty()]);
        let _ = merge_accumulated_data(&non_revertible, &revertible);
    }
}
