//! Deduplication of sorted lists
//!
//! Runs of consecutive items sharing a key collapse into their first item.
//! The run lengths let the circuit check that every original item was
//! accounted for.

use types::{Empty, FixedCapacityList, Positioned, RunLengths};

/// Deduplicate a list already sorted by `key`
///
/// Returns the first item of every run of equal keys, packed at the front and
/// padded with `T::empty()`, together with the length of each run (zero for
/// padding). Processing stops at the first empty item.
pub fn deduplicate_sorted_array_by_key<T, K, F, const N: usize>(
    sorted: &FixedCapacityList<T, N>,
    key: F,
) -> (FixedCapacityList<T, N>, RunLengths<N>)
where
    T: Empty + Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut deduped: Vec<T> = Vec::with_capacity(N);
    let mut runs: Vec<u32> = Vec::with_capacity(N);
    let mut previous_key: Option<K> = None;

    for item in sorted.iter().take_while(|item| !item.is_empty()) {
        let item_key = key(item);
        let same_run = previous_key
            .as_ref()
            .is_some_and(|previous| *previous == item_key);
        if same_run {
            if let Some(run) = runs.last_mut() {
                *run = run.saturating_add(1);
            }
        } else {
            deduped.push(item.clone());
            runs.push(1);
        }
        previous_key = Some(item_key);
    }

    // Both vectors hold at most one entry per input slot
    match (
        FixedCapacityList::from_items(deduped),
        FixedCapacityList::from_items(runs),
    ) {
        (Ok(deduped), Ok(runs)) => (deduped, runs),
        _ => unreachable!("deduplicated output cannot exceed the input capacity"),
    }
}

/// Deduplicate a list already sorted by position
pub fn deduplicate_sorted_array<T, const N: usize>(
    sorted: &FixedCapacityList<T, N>,
) -> (FixedCapacityList<T, N>, RunLengths<N>)
where
    T: Positioned + Empty + Clone,
{
    deduplicate_sorted_array_by_key(sorted, |item: &T| item.position())
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{Fr, PublicDataUpdateRequest};

    fn request(slot: u64, counter: u32) -> PublicDataUpdateRequest {
        PublicDataUpdateRequest::new(Fr::from(slot), Fr::from(u64::from(counter) + 1000), counter)
    }

    #[test]
    fn test_dedupe_collapses_runs() {
        let sorted = FixedCapacityList::new([
            request(10, 1),
            request(10, 2),
            request(20, 1),
            PublicDataUpdateRequest::empty(),
        ]);
        let (deduped, runs) = deduplicate_sorted_array(&sorted);

        assert_eq!(
            deduped,
            FixedCapacityList::new([
                request(10, 1),
                request(20, 1),
                PublicDataUpdateRequest::empty(),
                PublicDataUpdateRequest::empty(),
            ])
        );
        assert_eq!(runs, FixedCapacityList::new([2, 1, 0, 0]));
    }

    #[test]
    fn test_dedupe_stops_at_first_empty() {
        let sorted = FixedCapacityList::new([
            request(5, 1),
            PublicDataUpdateRequest::empty(),
            request(6, 2),
        ]);
        let (deduped, runs) = deduplicate_sorted_array(&sorted);
        assert_eq!(
            deduped,
            FixedCapacityList::new([
                request(5, 1),
                PublicDataUpdateRequest::empty(),
                PublicDataUpdateRequest::empty(),
            ])
        );
        assert_eq!(runs, FixedCapacityList::new([1, 0, 0]));
    }

    #[test]
    fn test_dedupe_all_same_key() {
        let sorted = FixedCapacityList::new([request(7, 1), request(7, 2), request(7, 3)]);
        let (deduped, runs) = deduplicate_sorted_array(&sorted);
        assert_eq!(deduped[0], request(7, 1));
        assert_eq!(deduped.count_non_empty(), 1);
        assert_eq!(runs, FixedCapacityList::new([3, 0, 0]));
    }

    #[test]
    fn test_dedupe_empty_list() {
        let sorted = FixedCapacityList::<PublicDataUpdateRequest, 4>::empty();
        let (deduped, runs) = deduplicate_sorted_array(&sorted);
        assert_eq!(deduped, sorted);
        assert_eq!(runs, FixedCapacityList::new([0, 0, 0, 0]));
    }

    #[test]
    fn test_dedupe_is_idempotent() {
        let sorted = FixedCapacityList::new([
            request(1, 1),
            request(1, 4),
            request(2, 2),
            request(3, 3),
            request(3, 5),
        ]);
        let (once, _) = deduplicate_sorted_array(&sorted);
        let (twice, runs) = deduplicate_sorted_array(&once);
        assert_eq!(twice, once);
        assert_eq!(runs, FixedCapacityList::new([1, 1, 1, 0, 0]));
    }

    #[test]
    fn test_dedupe_by_custom_key() {
        let sorted = FixedCapacityList::new([1u32, 1, 2, 3, 3]);
        // Zero is the empty value for plain integers, so use non-zero keys
        let (deduped, runs) = deduplicate_sorted_array_by_key(&sorted, |value: &u32| *value);
        assert_eq!(deduped, FixedCapacityList::new([1, 2, 3, 0, 0]));
        assert_eq!(runs, FixedCapacityList::new([2, 1, 2, 0, 0]));
    }
}
