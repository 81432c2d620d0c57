//! Strategies for generating side-effect lists

use proptest::{collection::vec, prelude::*};
use types::{
    AccumulatedData, Empty, FixedCapacityList, Fr, LogHash, NoteHash, PublicDataUpdateRequest,
};

/// Capacity used by the generic property tests
pub const CAP: usize = 8;

pub fn note_hash() -> impl Strategy<Value = NoteHash> + Clone {
    (1u64.., any::<u32>()).prop_map(|(value, counter)| NoteHash::new(Fr::from(value), counter))
}

pub fn log_hash() -> impl Strategy<Value = LogHash> + Clone {
    (1u64.., any::<u32>(), 0u64..1024).prop_map(|(value, counter, length)| {
        LogHash::new(Fr::from(value), counter, Fr::from(length))
    })
}

/// Update requests over a handful of slots so that duplicates are common
pub fn update_request() -> impl Strategy<Value = PublicDataUpdateRequest> + Clone {
    (1u64..6, any::<u64>(), 0u32..64).prop_map(|(slot, value, counter)| {
        PublicDataUpdateRequest::new(Fr::from(slot), Fr::from(value), counter)
    })
}

/// Pad generated items into a list
pub fn padded<T: Empty, const N: usize>(items: Vec<T>) -> FixedCapacityList<T, N> {
    FixedCapacityList::from_items(items).expect("strategy respects capacity")
}

/// A compact list: `0..=CAP` items followed by padding
pub fn compact_list<T, S>(item: S) -> impl Strategy<Value = FixedCapacityList<T, CAP>>
where
    T: Empty + Clone + core::fmt::Debug,
    S: Strategy<Value = T>,
{
    vec(item, 0..=CAP).prop_map(padded::<T, CAP>)
}

/// Two item vectors whose combined length fits in `CAP`
pub fn halves<T, S>(item: S) -> impl Strategy<Value = (Vec<T>, Vec<T>)>
where
    T: Clone + core::fmt::Debug,
    S: Strategy<Value = T> + Clone,
{
    vec(item.clone(), 0..=CAP).prop_flat_map(move |first| {
        let room = CAP - first.len();
        (Just(first), vec(item.clone(), 0..=room))
    })
}

/// Accumulated data with a few items of every kind
pub fn accumulated_data() -> impl Strategy<Value = AccumulatedData> {
    (
        vec(note_hash(), 0..=8),
        vec(log_hash(), 0..=4),
        vec(update_request(), 0..=8),
    )
        .prop_map(|(note_hashes, logs_hashes, requests)| {
            AccumulatedData::builder()
                .with_note_hashes(note_hashes)
                .with_unencrypted_logs_hashes(logs_hashes)
                .with_public_data_update_requests(requests)
                .build()
                .expect("strategy respects capacity")
        })
}
