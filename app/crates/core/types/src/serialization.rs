//! Fixed-width binary encoding
//!
//! Every value has a size known at compile time. Lists are written as their
//! N elements back to back, with no length prefix and no delimiters, so the
//! native consumer can read them bit-for-bit.

use crate::{
    constants::{FIELD_SIZE, U32_SIZE},
    error::DecodeError,
    field::{Fr, fr_from_be_bytes, fr_to_be_bytes},
};

/// Cursor over an encoded byte buffer
#[derive(Clone, Debug)]
pub struct BufferReader<'a> {
    /// Underlying buffer
    bytes: &'a [u8],
    /// Offset of the next unread byte
    offset: usize,
}

impl<'a> BufferReader<'a> {
    /// Create a reader positioned at the start of `bytes`
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Number of bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.offset)
    }

    /// Whether the whole buffer has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Consume the next `len` bytes
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(DecodeError::UnexpectedEof {
                needed: len,
                remaining,
            });
        }
        let end = self.offset.saturating_add(len);
        let bytes = &self.bytes[self.offset..end];
        self.offset = end;
        Ok(bytes)
    }

    /// Consume the next `L` bytes as an array
    pub fn read_array<const L: usize>(&mut self) -> Result<[u8; L], DecodeError> {
        let mut out = [0u8; L];
        out.copy_from_slice(self.read_bytes(L)?);
        Ok(out)
    }

    /// Read a value of any serializable type
    pub fn read<T: Serializable>(&mut self) -> Result<T, DecodeError> {
        T::read_from(self)
    }

    /// Fail if any bytes are left unread
    pub fn finish(self) -> Result<(), DecodeError> {
        match self.remaining() {
            0 => Ok(()),
            remaining => Err(DecodeError::TrailingBytes { remaining }),
        }
    }
}

/// Values with a fixed-width binary encoding
pub trait Serializable: Sized {
    /// Exact number of bytes produced by [`Serializable::write_to`]
    const SIZE_IN_BYTES: usize;

    /// Append the encoding of `self` to `out`
    fn write_to(&self, out: &mut Vec<u8>);

    /// Decode one value from the reader
    fn read_from(reader: &mut BufferReader<'_>) -> Result<Self, DecodeError>;

    /// Encode into a freshly allocated buffer
    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::SIZE_IN_BYTES);
        self.write_to(&mut out);
        out
    }

    /// Decode from a buffer holding exactly one value
    fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = BufferReader::new(bytes);
        let value = Self::read_from(&mut reader)?;
        reader.finish()?;
        Ok(value)
    }
}

impl Serializable for u32 {
    const SIZE_IN_BYTES: usize = U32_SIZE;

    fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_be_bytes());
    }

    fn read_from(reader: &mut BufferReader<'_>) -> Result<Self, DecodeError> {
        Ok(u32::from_be_bytes(reader.read_array::<U32_SIZE>()?))
    }
}

impl Serializable for Fr {
    const SIZE_IN_BYTES: usize = FIELD_SIZE;

    fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&fr_to_be_bytes(self));
    }

    fn read_from(reader: &mut BufferReader<'_>) -> Result<Self, DecodeError> {
        fr_from_be_bytes(reader.read_bytes(FIELD_SIZE)?)
    }
}
