//! Error types shared by the side-effect crates

use thiserror::Error;

/// Errors raised while decoding the fixed-width binary layout
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The buffer ended before a complete element could be read
    #[error("Unexpected end of buffer: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        /// Bytes required by the element being read
        needed: usize,
        /// Bytes left in the buffer
        remaining: usize,
    },
    /// Bytes were left over after the value was fully decoded
    #[error("{remaining} trailing bytes after decoding")]
    TrailingBytes {
        /// Number of unread bytes
        remaining: usize,
    },
    /// A field element was not exactly 32 bytes long
    #[error("Expected 32 bytes for a field element, got {0}")]
    InvalidFieldLength(usize),
    /// A field element encoding was not reduced modulo the field order
    #[error("Field element encoding is not canonical")]
    NonCanonicalField,
    /// A hex string could not be decoded
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    /// An index hint points outside its list
    #[error("Index hint {value} at slot {slot} is out of range for capacity {capacity}")]
    HintOutOfRange {
        /// Slot holding the hint
        slot: usize,
        /// Decoded hint value
        value: u32,
        /// Capacity of the list the hint refers to
        capacity: usize,
    },
}

/// More items were supplied than a fixed-capacity list can hold
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{len} items exceed the list capacity of {capacity}")]
pub struct CapacityError {
    /// Capacity of the target list
    pub capacity: usize,
    /// Number of items supplied
    pub len: usize,
}
