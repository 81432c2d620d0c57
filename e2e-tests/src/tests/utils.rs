//! Utility functions and types for end-to-end tests

use anyhow::Result;
use types::{AccumulatedData, AccumulatedDataBuilder, Fr, LogHash, NoteHash, PublicDataUpdateRequest};

/// Records side effects of an executing transaction, handing out counters
/// in execution order
pub struct Execution {
    next_counter: u32,
}

impl Execution {
    /// Start counting at `counter`
    pub fn starting_at(counter: u32) -> Self {
        Self {
            next_counter: counter,
        }
    }

    fn tick(&mut self) -> u32 {
        let counter = self.next_counter;
        self.next_counter = self.next_counter.saturating_add(1);
        counter
    }

    /// Emit a note hash with the next counter
    pub fn note_hash(&mut self, value: u64) -> NoteHash {
        NoteHash::new(Fr::from(value), self.tick())
    }

    /// Emit an unencrypted log hash with the next counter
    pub fn log_hash(&mut self, value: u64, length: u64) -> LogHash {
        LogHash::new(Fr::from(value), self.tick(), Fr::from(length))
    }

    /// Emit a storage write with the next counter
    pub fn write(&mut self, slot: u64, value: u64) -> PublicDataUpdateRequest {
        PublicDataUpdateRequest::new(Fr::from(slot), Fr::from(value), self.tick())
    }
}

/// Finish a phase, checking it fits the protocol capacities
pub fn phase(builder: AccumulatedDataBuilder) -> Result<AccumulatedData> {
    Ok(builder.build()?)
}

/// Note hashes with consecutive counters from `first_counter`
pub fn note_hashes(first_counter: u32, count: u32) -> Vec<NoteHash> {
    let mut execution = Execution::starting_at(first_counter);
    (0..count)
        .map(|i| execution.note_hash(u64::from(i).saturating_add(1)))
        .collect()
}
