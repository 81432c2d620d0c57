//! Transaction side-effect types
//!
//! Shared data model for the hint generators:
//! - Side-effect items (note hashes, log hashes, public data update requests)
//! - `FixedCapacityList`, the "array of exactly N slots" every circuit input uses
//! - Fixed-width binary encoding matching the native proving system
//!
//! # Architecture
//! Capacities are protocol constants carried as const generics. A list and
//! its capacity can never disagree at runtime; unused slots hold the item's
//! empty sentinel.

pub mod accumulated_data;
pub mod constants;
pub mod error;
pub mod field;
pub mod fixed_list;
pub mod serialization;
pub mod side_effects;
pub mod traits;

pub use accumulated_data::{AccumulatedData, AccumulatedDataBuilder};
pub use error::{CapacityError, DecodeError};
pub use field::Fr;
pub use fixed_list::{FixedCapacityList, IndexHint, NonEmptyItems, RunLengths, SortedHints};
pub use serialization::{BufferReader, Serializable};
pub use side_effects::{LogHash, NoteHash, PublicDataUpdateRequest};
pub use traits::{Empty, Ordered, Positioned};
