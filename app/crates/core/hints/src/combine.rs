//! Combined hints for one transaction
//!
//! Runs merge, sort and dedupe over both halves of a transaction's
//! accumulated data and packages every intermediate array the circuit needs
//! into one immutable bundle.
//!
//! The binary layout is the field order of [`CombineHints`], each list
//! written as its full capacity of fixed-width elements.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use types::{
    AccumulatedData, BufferReader, DecodeError, FixedCapacityList, LogHash, NoteHash,
    PublicDataUpdateRequest, RunLengths, Serializable, SortedHints,
    constants::{
        MAX_NOTE_HASHES_PER_TX, MAX_PUBLIC_DATA_UPDATE_REQUESTS_PER_TX,
        MAX_UNENCRYPTED_LOGS_PER_TX,
    },
};

use crate::{
    dedupe::deduplicate_sorted_array,
    merge::merge_accumulated_data,
    sort::{
        HintBasis, SortOptions, SortOrder, sort_by_counter_get_sorted_hints,
        sort_by_position_then_counter_get_sorted_hints,
    },
};

type NoteHashes = FixedCapacityList<NoteHash, MAX_NOTE_HASHES_PER_TX>;
type LogHashes = FixedCapacityList<LogHash, MAX_UNENCRYPTED_LOGS_PER_TX>;
type UpdateRequests =
    FixedCapacityList<PublicDataUpdateRequest, MAX_PUBLIC_DATA_UPDATE_REQUESTS_PER_TX>;

/// Hints for combining the non-revertible and revertible side effects
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedCombineHints")]
pub struct CombineHints {
    /// Merged note hashes sorted by counter
    sorted_note_hashes: NoteHashes,
    /// For each sorted note hash, its index in the merged list
    sorted_note_hashes_indexes: SortedHints<MAX_NOTE_HASHES_PER_TX>,
    /// Merged unencrypted log hashes sorted by counter
    sorted_unencrypted_logs_hashes: LogHashes,
    /// For each sorted log hash, its index in the merged list
    sorted_unencrypted_logs_hashes_indexes: SortedHints<MAX_UNENCRYPTED_LOGS_PER_TX>,
    /// Merged update requests sorted by leaf slot, then counter
    sorted_public_data_update_requests: UpdateRequests,
    /// For each merged update request, its index in the sorted list
    sorted_public_data_update_requests_indexes:
        SortedHints<MAX_PUBLIC_DATA_UPDATE_REQUESTS_PER_TX>,
    /// One update request per leaf slot
    deduped_public_data_update_requests: UpdateRequests,
    /// Number of sorted update requests folded into each deduplicated slot
    deduped_public_data_update_requests_runs: RunLengths<MAX_PUBLIC_DATA_UPDATE_REQUESTS_PER_TX>,
}

/// Serde form of [`CombineHints`] before its index hints are range-checked
#[derive(Deserialize)]
struct UncheckedCombineHints {
    sorted_note_hashes: NoteHashes,
    sorted_note_hashes_indexes: SortedHints<MAX_NOTE_HASHES_PER_TX>,
    sorted_unencrypted_logs_hashes: LogHashes,
    sorted_unencrypted_logs_hashes_indexes: SortedHints<MAX_UNENCRYPTED_LOGS_PER_TX>,
    sorted_public_data_update_requests: UpdateRequests,
    sorted_public_data_update_requests_indexes:
        SortedHints<MAX_PUBLIC_DATA_UPDATE_REQUESTS_PER_TX>,
    deduped_public_data_update_requests: UpdateRequests,
    deduped_public_data_update_requests_runs: RunLengths<MAX_PUBLIC_DATA_UPDATE_REQUESTS_PER_TX>,
}

impl TryFrom<UncheckedCombineHints> for CombineHints {
    type Error = DecodeError;

    fn try_from(unchecked: UncheckedCombineHints) -> Result<Self, Self::Error> {
        check_hints(&unchecked.sorted_note_hashes_indexes)?;
        check_hints(&unchecked.sorted_unencrypted_logs_hashes_indexes)?;
        check_hints(&unchecked.sorted_public_data_update_requests_indexes)?;
        Ok(Self {
            sorted_note_hashes: unchecked.sorted_note_hashes,
            sorted_note_hashes_indexes: unchecked.sorted_note_hashes_indexes,
            sorted_unencrypted_logs_hashes: unchecked.sorted_unencrypted_logs_hashes,
            sorted_unencrypted_logs_hashes_indexes: unchecked
                .sorted_unencrypted_logs_hashes_indexes,
            sorted_public_data_update_requests: unchecked.sorted_public_data_update_requests,
            sorted_public_data_update_requests_indexes: unchecked
                .sorted_public_data_update_requests_indexes,
            deduped_public_data_update_requests: unchecked.deduped_public_data_update_requests,
            deduped_public_data_update_requests_runs: unchecked
                .deduped_public_data_update_requests_runs,
        })
    }
}

impl CombineHints {
    /// Compute all hints from the two halves of a transaction
    ///
    /// # Panics
    ///
    /// Panics if, for any side-effect kind, the halves together exceed the
    /// protocol capacity.
    pub fn from_accumulated_halves(
        non_revertible: &AccumulatedData,
        revertible: &AccumulatedData,
    ) -> Self {
        let merged_note_hashes =
            merge_accumulated_data(&non_revertible.note_hashes, &revertible.note_hashes);
        let (sorted_note_hashes, sorted_note_hashes_indexes) =
            sort_by_counter_get_sorted_hints(&merged_note_hashes, HintBasis::Sorted);
        trace!("sorted note hashes: {}", sorted_note_hashes.non_empty());

        let merged_logs_hashes = merge_accumulated_data(
            &non_revertible.unencrypted_logs_hashes,
            &revertible.unencrypted_logs_hashes,
        );
        let (sorted_unencrypted_logs_hashes, sorted_unencrypted_logs_hashes_indexes) =
            sort_by_counter_get_sorted_hints(&merged_logs_hashes, HintBasis::Sorted);
        trace!(
            "sorted unencrypted log hashes: {}",
            sorted_unencrypted_logs_hashes.non_empty()
        );

        // The circuit checks the update-request permutation from the original
        // array's side, so these hints are indexed by original position. Empty
        // slots are pinned to themselves by the sort.
        let merged_requests = merge_accumulated_data(
            &non_revertible.public_data_update_requests,
            &revertible.public_data_update_requests,
        );
        let (sorted_public_data_update_requests, sorted_public_data_update_requests_indexes) =
            sort_by_position_then_counter_get_sorted_hints(
                &merged_requests,
                SortOptions::new(SortOrder::Ascending, HintBasis::Original),
            );
        let (deduped_public_data_update_requests, deduped_public_data_update_requests_runs) =
            deduplicate_sorted_array(&sorted_public_data_update_requests);
        trace!(
            "deduplicated update requests: {}",
            deduped_public_data_update_requests.non_empty()
        );

        debug!(
            "combine hints: {} note hashes, {} log hashes, {} update requests ({} unique slots)",
            sorted_note_hashes.count_non_empty(),
            sorted_unencrypted_logs_hashes.count_non_empty(),
            sorted_public_data_update_requests.count_non_empty(),
            deduped_public_data_update_requests.count_non_empty(),
        );

        Self {
            sorted_note_hashes,
            sorted_note_hashes_indexes,
            sorted_unencrypted_logs_hashes,
            sorted_unencrypted_logs_hashes_indexes,
            sorted_public_data_update_requests,
            sorted_public_data_update_requests_indexes,
            deduped_public_data_update_requests,
            deduped_public_data_update_requests_runs,
        }
    }

    /// Note hashes sorted by counter
    pub fn sorted_note_hashes(&self) -> &NoteHashes {
        &self.sorted_note_hashes
    }

    /// Merged-list index of each sorted note hash
    pub fn sorted_note_hashes_indexes(&self) -> &SortedHints<MAX_NOTE_HASHES_PER_TX> {
        &self.sorted_note_hashes_indexes
    }

    /// Unencrypted log hashes sorted by counter
    pub fn sorted_unencrypted_logs_hashes(&self) -> &LogHashes {
        &self.sorted_unencrypted_logs_hashes
    }

    /// Merged-list index of each sorted log hash
    pub fn sorted_unencrypted_logs_hashes_indexes(
        &self,
    ) -> &SortedHints<MAX_UNENCRYPTED_LOGS_PER_TX> {
        &self.sorted_unencrypted_logs_hashes_indexes
    }

    /// Update requests sorted by leaf slot, then counter
    pub fn sorted_public_data_update_requests(&self) -> &UpdateRequests {
        &self.sorted_public_data_update_requests
    }

    /// Sorted-list index of each merged update request
    pub fn sorted_public_data_update_requests_indexes(
        &self,
    ) -> &SortedHints<MAX_PUBLIC_DATA_UPDATE_REQUESTS_PER_TX> {
        &self.sorted_public_data_update_requests_indexes
    }

    /// One update request per leaf slot
    pub fn deduped_public_data_update_requests(&self) -> &UpdateRequests {
        &self.deduped_public_data_update_requests
    }

    /// Run length behind each deduplicated update request
    pub fn deduped_public_data_update_requests_runs(
        &self,
    ) -> &RunLengths<MAX_PUBLIC_DATA_UPDATE_REQUESTS_PER_TX> {
        &self.deduped_public_data_update_requests_runs
    }

    /// Encode as a lowercase hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Decode from a hex string, with or without `0x`
    pub fn from_hex(hex: &str) -> Result<Self, DecodeError> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        Self::from_bytes(&hex::decode(hex)?)
    }
}

impl Serializable for CombineHints {
    const SIZE_IN_BYTES: usize = NoteHashes::SIZE_IN_BYTES
        .saturating_add(SortedHints::<MAX_NOTE_HASHES_PER_TX>::SIZE_IN_BYTES)
        .saturating_add(LogHashes::SIZE_IN_BYTES)
        .saturating_add(SortedHints::<MAX_UNENCRYPTED_LOGS_PER_TX>::SIZE_IN_BYTES)
        .saturating_add(UpdateRequests::SIZE_IN_BYTES)
        .saturating_add(SortedHints::<MAX_PUBLIC_DATA_UPDATE_REQUESTS_PER_TX>::SIZE_IN_BYTES)
        .saturating_add(UpdateRequests::SIZE_IN_BYTES)
        .saturating_add(RunLengths::<MAX_PUBLIC_DATA_UPDATE_REQUESTS_PER_TX>::SIZE_IN_BYTES);

    fn write_to(&self, out: &mut Vec<u8>) {
        self.sorted_note_hashes.write_to(out);
        self.sorted_note_hashes_indexes.write_to(out);
        self.sorted_unencrypted_logs_hashes.write_to(out);
        self.sorted_unencrypted_logs_hashes_indexes.write_to(out);
        self.sorted_public_data_update_requests.write_to(out);
        self.sorted_public_data_update_requests_indexes.write_to(out);
        self.deduped_public_data_update_requests.write_to(out);
        self.deduped_public_data_update_requests_runs.write_to(out);
    }

    fn read_from(reader: &mut BufferReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            sorted_note_hashes: reader.read()?,
            sorted_note_hashes_indexes: read_hints(reader)?,
            sorted_unencrypted_logs_hashes: reader.read()?,
            sorted_unencrypted_logs_hashes_indexes: read_hints(reader)?,
            sorted_public_data_update_requests: reader.read()?,
            sorted_public_data_update_requests_indexes: read_hints(reader)?,
            deduped_public_data_update_requests: reader.read()?,
            deduped_public_data_update_requests_runs: reader.read()?,
        })
    }
}

/// Read an index-hint list, rejecting hints that point outside it
fn read_hints<const N: usize>(
    reader: &mut BufferReader<'_>,
) -> Result<SortedHints<N>, DecodeError> {
    let hints: SortedHints<N> = reader.read()?;
    check_hints(&hints)?;
    Ok(hints)
}

/// Every hint must name a slot of a list with the same capacity
fn check_hints<const N: usize>(hints: &SortedHints<N>) -> Result<(), DecodeError> {
    for (slot, value) in hints.iter().enumerate() {
        let in_range = usize::try_from(*value).is_ok_and(|index| index < N);
        if !in_range {
            return Err(DecodeError::HintOutOfRange {
                slot,
                value: *value,
                capacity: N,
            });
        }
    }
    Ok(())
}
