//! Capabilities shared by side-effect items

use crate::field::Fr;

/// Items with a distinguished "empty" value used to pad fixed-capacity lists
pub trait Empty: Sized {
    /// The empty sentinel for this item kind
    fn empty() -> Self;

    /// Whether this item is the empty sentinel
    fn is_empty(&self) -> bool;
}

/// Items carrying the counter assigned at creation during execution
pub trait Ordered {
    /// Creation counter; establishes the canonical order of side effects
    fn counter(&self) -> u32;
}

/// Items targeting a storage position
pub trait Positioned {
    /// Storage slot the item refers to
    fn position(&self) -> Fr;
}

impl Empty for u32 {
    fn empty() -> Self {
        0
    }

    fn is_empty(&self) -> bool {
        *self == 0
    }
}
