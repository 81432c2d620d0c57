//! Side effects emitted by a transaction
//!
//! Each kind is padded into fixed-capacity lists with an all-zero empty
//! value, and carries the counter it was created with.

use core::fmt;

use ark_ff::Zero;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{FIELD_SIZE, U32_SIZE},
    error::DecodeError,
    field::{Fr, fr_to_hex},
    serialization::{BufferReader, Serializable},
    traits::{Empty, Ordered, Positioned},
};

/// Commitment to a newly created note
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteHash {
    /// Note hash value
    #[serde(with = "crate::field::serde_fr")]
    pub value: Fr,
    /// Creation counter
    pub counter: u32,
}

impl NoteHash {
    /// Create a note hash
    pub fn new(value: Fr, counter: u32) -> Self {
        Self { value, counter }
    }
}

impl Empty for NoteHash {
    fn empty() -> Self {
        Self::new(Fr::zero(), 0)
    }

    fn is_empty(&self) -> bool {
        self.value.is_zero() && self.counter == 0
    }
}

impl Ordered for NoteHash {
    fn counter(&self) -> u32 {
        self.counter
    }
}

impl Serializable for NoteHash {
    const SIZE_IN_BYTES: usize = FIELD_SIZE.saturating_add(U32_SIZE);

    fn write_to(&self, out: &mut Vec<u8>) {
        self.value.write_to(out);
        self.counter.write_to(out);
    }

    fn read_from(reader: &mut BufferReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            value: reader.read()?,
            counter: reader.read()?,
        })
    }
}

impl fmt::Display for NoteHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteHash({}, counter={})", fr_to_hex(&self.value), self.counter)
    }
}

/// Hash of a log together with its preimage length
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogHash {
    /// Log hash value
    #[serde(with = "crate::field::serde_fr")]
    pub value: Fr,
    /// Creation counter
    pub counter: u32,
    /// Length of the hashed log preimage
    #[serde(with = "crate::field::serde_fr")]
    pub length: Fr,
}

impl LogHash {
    /// Create a log hash
    pub fn new(value: Fr, counter: u32, length: Fr) -> Self {
        Self {
            value,
            counter,
            length,
        }
    }
}

impl Empty for LogHash {
    fn empty() -> Self {
        Self::new(Fr::zero(), 0, Fr::zero())
    }

    fn is_empty(&self) -> bool {
        self.value.is_zero() && self.counter == 0 && self.length.is_zero()
    }
}

impl Ordered for LogHash {
    fn counter(&self) -> u32 {
        self.counter
    }
}

impl Serializable for LogHash {
    const SIZE_IN_BYTES: usize = FIELD_SIZE.saturating_mul(2).saturating_add(U32_SIZE);

    fn write_to(&self, out: &mut Vec<u8>) {
        self.value.write_to(out);
        self.counter.write_to(out);
        self.length.write_to(out);
    }

    fn read_from(reader: &mut BufferReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            value: reader.read()?,
            counter: reader.read()?,
            length: reader.read()?,
        })
    }
}

impl fmt::Display for LogHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LogHash({}, counter={}, length={})",
            fr_to_hex(&self.value),
            self.counter,
            fr_to_hex(&self.length)
        )
    }
}

/// Request to write a new value into a public storage slot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicDataUpdateRequest {
    /// Leaf slot in the public data tree
    #[serde(with = "crate::field::serde_fr")]
    pub leaf_slot: Fr,
    /// Value to be written
    #[serde(with = "crate::field::serde_fr")]
    pub new_value: Fr,
    /// Creation counter
    pub counter: u32,
}

impl PublicDataUpdateRequest {
    /// Create an update request
    pub fn new(leaf_slot: Fr, new_value: Fr, counter: u32) -> Self {
        Self {
            leaf_slot,
            new_value,
            counter,
        }
    }
}

impl Empty for PublicDataUpdateRequest {
    fn empty() -> Self {
        Self::new(Fr::zero(), Fr::zero(), 0)
    }

    fn is_empty(&self) -> bool {
        self.leaf_slot.is_zero() && self.new_value.is_zero()
    }
}

impl Ordered for PublicDataUpdateRequest {
    fn counter(&self) -> u32 {
        self.counter
    }
}

impl Positioned for PublicDataUpdateRequest {
    fn position(&self) -> Fr {
        self.leaf_slot
    }
}

impl Serializable for PublicDataUpdateRequest {
    const SIZE_IN_BYTES: usize = FIELD_SIZE.saturating_mul(2).saturating_add(U32_SIZE);

    fn write_to(&self, out: &mut Vec<u8>) {
        self.leaf_slot.write_to(out);
        self.new_value.write_to(out);
        self.counter.write_to(out);
    }

    fn read_from(reader: &mut BufferReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            leaf_slot: reader.read()?,
            new_value: reader.read()?,
            counter: reader.read()?,
        })
    }
}

impl fmt::Display for PublicDataUpdateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PublicDataUpdateRequest(slot={}, value={}, counter={})",
            fr_to_hex(&self.leaf_slot),
            fr_to_hex(&self.new_value),
            self.counter
        )
    }
}
