//! Side effects accumulated by one phase of a transaction
//!
//! A transaction produces two of these: the non-revertible half, whose
//! effects persist even if later phases abort, and the revertible half.
//! Within each half, items are ordered by ascending counter.

use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        MAX_NOTE_HASHES_PER_TX, MAX_PUBLIC_DATA_UPDATE_REQUESTS_PER_TX,
        MAX_UNENCRYPTED_LOGS_PER_TX,
    },
    error::{CapacityError, DecodeError},
    fixed_list::FixedCapacityList,
    serialization::{BufferReader, Serializable},
    side_effects::{LogHash, NoteHash, PublicDataUpdateRequest},
};

/// Side effects of one transaction phase
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccumulatedData {
    /// Note hashes, ordered by counter
    pub note_hashes: FixedCapacityList<NoteHash, MAX_NOTE_HASHES_PER_TX>,
    /// Unencrypted log hashes, ordered by counter
    pub unencrypted_logs_hashes: FixedCapacityList<LogHash, MAX_UNENCRYPTED_LOGS_PER_TX>,
    /// Public data update requests, ordered by counter
    pub public_data_update_requests:
        FixedCapacityList<PublicDataUpdateRequest, MAX_PUBLIC_DATA_UPDATE_REQUESTS_PER_TX>,
}

impl AccumulatedData {
    /// Accumulated data with every list empty
    pub fn empty() -> Self {
        Self {
            note_hashes: FixedCapacityList::empty(),
            unencrypted_logs_hashes: FixedCapacityList::empty(),
            public_data_update_requests: FixedCapacityList::empty(),
        }
    }

    /// Start building accumulated data item by item
    pub fn builder() -> AccumulatedDataBuilder {
        AccumulatedDataBuilder::default()
    }

    /// Whether no list holds any item
    pub fn is_empty(&self) -> bool {
        self.note_hashes.count_non_empty() == 0
            && self.unencrypted_logs_hashes.count_non_empty() == 0
            && self.public_data_update_requests.count_non_empty() == 0
    }
}

impl Serializable for AccumulatedData {
    const SIZE_IN_BYTES: usize =
        FixedCapacityList::<NoteHash, MAX_NOTE_HASHES_PER_TX>::SIZE_IN_BYTES
            .saturating_add(
                FixedCapacityList::<LogHash, MAX_UNENCRYPTED_LOGS_PER_TX>::SIZE_IN_BYTES,
            )
            .saturating_add(FixedCapacityList::<
                PublicDataUpdateRequest,
                MAX_PUBLIC_DATA_UPDATE_REQUESTS_PER_TX,
            >::SIZE_IN_BYTES);

    fn write_to(&self, out: &mut Vec<u8>) {
        self.note_hashes.write_to(out);
        self.unencrypted_logs_hashes.write_to(out);
        self.public_data_update_requests.write_to(out);
    }

    fn read_from(reader: &mut BufferReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            note_hashes: reader.read()?,
            unencrypted_logs_hashes: reader.read()?,
            public_data_update_requests: reader.read()?,
        })
    }
}

/// Fluent builder for [`AccumulatedData`]
///
/// Items are placed in the order they are added; callers add them by
/// ascending counter.
#[derive(Clone, Debug, Default)]
pub struct AccumulatedDataBuilder {
    /// Pending note hashes
    note_hashes: Vec<NoteHash>,
    /// Pending unencrypted log hashes
    unencrypted_logs_hashes: Vec<LogHash>,
    /// Pending public data update requests
    public_data_update_requests: Vec<PublicDataUpdateRequest>,
}

impl AccumulatedDataBuilder {
    /// Add a note hash
    pub fn with_note_hash(mut self, note_hash: NoteHash) -> Self {
        self.note_hashes.push(note_hash);
        self
    }

    /// Add several note hashes
    pub fn with_note_hashes<I: IntoIterator<Item = NoteHash>>(mut self, note_hashes: I) -> Self {
        self.note_hashes.extend(note_hashes);
        self
    }

    /// Add an unencrypted log hash
    pub fn with_unencrypted_log_hash(mut self, log_hash: LogHash) -> Self {
        self.unencrypted_logs_hashes.push(log_hash);
        self
    }

    /// Add several unencrypted log hashes
    pub fn with_unencrypted_logs_hashes<I: IntoIterator<Item = LogHash>>(
        mut self,
        log_hashes: I,
    ) -> Self {
        self.unencrypted_logs_hashes.extend(log_hashes);
        self
    }

    /// Add a public data update request
    pub fn with_public_data_update_request(mut self, request: PublicDataUpdateRequest) -> Self {
        self.public_data_update_requests.push(request);
        self
    }

    /// Add several public data update requests
    pub fn with_public_data_update_requests<I: IntoIterator<Item = PublicDataUpdateRequest>>(
        mut self,
        requests: I,
    ) -> Self {
        self.public_data_update_requests.extend(requests);
        self
    }

    /// Pad every list to its protocol capacity
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if any list received more items than its
    /// capacity allows.
    pub fn build(self) -> Result<AccumulatedData, CapacityError> {
        Ok(AccumulatedData {
            note_hashes: FixedCapacityList::from_items(self.note_hashes)?,
            unencrypted_logs_hashes: FixedCapacityList::from_items(self.unencrypted_logs_hashes)?,
            public_data_update_requests: FixedCapacityList::from_items(
                self.public_data_update_requests,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{field::Fr, traits::Empty};

    #[test]
    fn test_builder_places_items_in_order() {
        let data = AccumulatedData::builder()
            .with_note_hash(NoteHash::new(Fr::from(10u64), 1))
            .with_note_hash(NoteHash::new(Fr::from(11u64), 2))
            .with_unencrypted_log_hash(LogHash::new(Fr::from(12u64), 3, Fr::from(64u64)))
            .with_public_data_update_request(PublicDataUpdateRequest::new(
                Fr::from(1u64),
                Fr::from(2u64),
                4,
            ))
            .build()
            .unwrap();

        assert_eq!(data.note_hashes[0].counter, 1);
        assert_eq!(data.note_hashes[1].counter, 2);
        assert!(data.note_hashes[2].is_empty());
        assert_eq!(data.unencrypted_logs_hashes.count_non_empty(), 1);
        assert_eq!(data.public_data_update_requests.count_non_empty(), 1);
        assert!(!data.is_empty());
        assert!(AccumulatedData::empty().is_empty());
    }

    #[test]
    fn test_builder_capacity_error() {
        let logs = (1..=9u32).map(|i| LogHash::new(Fr::from(u64::from(i)), i, Fr::from(1u64)));
        let err = AccumulatedData::builder()
            .with_unencrypted_logs_hashes(logs)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            CapacityError {
                capacity: MAX_UNENCRYPTED_LOGS_PER_TX,
                len: 9
            }
        );
    }

    #[test]
    fn test_binary_round_trip() {
        let data = AccumulatedData::builder()
            .with_note_hashes((1..=3u32).map(|i| NoteHash::new(Fr::from(u64::from(i)), i)))
            .build()
            .unwrap();
        let bytes = data.to_bytes();
        assert_eq!(bytes.len(), AccumulatedData::SIZE_IN_BYTES);
        assert_eq!(bytes.len(), 64 * 36 + 8 * 68 + 32 * 68);
        assert_eq!(AccumulatedData::from_bytes(&bytes).unwrap(), data);
    }
}
