//! Fixed-capacity lists
//!
//! Circuits only accept arrays of a size fixed at compile time. A
//! `FixedCapacityList<T, N>` always holds exactly `N` slots; slots that carry
//! no data hold `T::empty()`.

use core::{
    fmt,
    ops::Index,
    slice,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::{CapacityError, DecodeError},
    serialization::{BufferReader, Serializable},
    traits::Empty,
};

/// Index into a list of the same capacity
pub type IndexHint = u32;

/// Permutation hints relating an original list to its sorted counterpart
pub type SortedHints<const N: usize> = FixedCapacityList<IndexHint, N>;

/// Number of original entries folded into each deduplicated slot
pub type RunLengths<const N: usize> = FixedCapacityList<u32, N>;

/// Exactly `N` logically ordered slots
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FixedCapacityList<T, const N: usize> {
    /// Slot storage
    items: [T; N],
}

impl<T, const N: usize> FixedCapacityList<T, N> {
    /// Number of slots in the list
    pub const CAPACITY: usize = N;

    /// Wrap an array of slots
    pub fn new(items: [T; N]) -> Self {
        Self { items }
    }

    /// View all slots
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate over all slots, empty ones included
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Slot at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Unwrap into the underlying array
    pub fn into_array(self) -> [T; N] {
        self.items
    }
}

impl<T: Empty, const N: usize> FixedCapacityList<T, N> {
    /// A list where every slot is empty
    pub fn empty() -> Self {
        Self {
            items: core::array::from_fn(|_| T::empty()),
        }
    }

    /// Place `items` in the leading slots and pad the rest with empties
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if more than `N` items are supplied.
    pub fn from_items<I: IntoIterator<Item = T>>(items: I) -> Result<Self, CapacityError> {
        let mut items = items.into_iter();
        let slots = core::array::from_fn(|_| items.next().unwrap_or_else(T::empty));
        let overflow = items.count();
        if overflow > 0 {
            return Err(CapacityError {
                capacity: N,
                len: N.saturating_add(overflow),
            });
        }
        Ok(Self { items: slots })
    }

    /// Number of slots holding a non-empty item
    pub fn count_non_empty(&self) -> usize {
        self.items.iter().filter(|item| !item.is_empty()).count()
    }

    /// Iterate over non-empty items, in slot order
    pub fn non_empty_items(&self) -> impl Iterator<Item = &T> {
        self.items.iter().filter(|item| !item.is_empty())
    }

    /// Whether every non-empty item precedes every empty slot
    pub fn is_compact(&self) -> bool {
        self.items
            .iter()
            .skip_while(|item| !item.is_empty())
            .all(Empty::is_empty)
    }

    /// Formatter that prints only the non-empty items
    pub fn non_empty(&self) -> NonEmptyItems<'_, T, N> {
        NonEmptyItems(self)
    }
}

impl<T, const N: usize> Index<usize> for FixedCapacityList<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T, const N: usize> From<[T; N]> for FixedCapacityList<T, N> {
    fn from(items: [T; N]) -> Self {
        Self::new(items)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedCapacityList<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, const N: usize> IntoIterator for FixedCapacityList<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: Serializable, const N: usize> Serializable for FixedCapacityList<T, N> {
    const SIZE_IN_BYTES: usize = T::SIZE_IN_BYTES.saturating_mul(N);

    fn write_to(&self, out: &mut Vec<u8>) {
        for item in &self.items {
            item.write_to(out);
        }
    }

    fn read_from(reader: &mut BufferReader<'_>) -> Result<Self, DecodeError> {
        let items = (0..N)
            .map(|_| reader.read::<T>())
            .collect::<Result<Vec<_>, _>>()?;
        match <[T; N]>::try_from(items) {
            Ok(items) => Ok(Self { items }),
            Err(_) => unreachable!("exactly N items were read"),
        }
    }
}

impl<T: Serialize, const N: usize> Serialize for FixedCapacityList<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for FixedCapacityList<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        let len = items.len();
        <[T; N]>::try_from(items)
            .map(Self::new)
            .map_err(|_| serde::de::Error::invalid_length(len, &"exactly the list capacity"))
    }
}

/// Debug view of a list that skips empty slots
pub struct NonEmptyItems<'a, T, const N: usize>(&'a FixedCapacityList<T, N>);

impl<T: Empty + fmt::Debug, const N: usize> fmt::Debug for NonEmptyItems<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.non_empty_items()).finish()
    }
}

impl<T: Empty + fmt::Display, const N: usize> fmt::Display for NonEmptyItems<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.0.non_empty_items().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
