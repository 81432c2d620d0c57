//! Protocol parameters
//!
//! These MUST match the constants the consuming circuits were compiled with,
//! otherwise every hint produced against them is meaningless.

/// Maximum number of note hashes a transaction can emit
pub const MAX_NOTE_HASHES_PER_TX: usize = 64;

/// Maximum number of unencrypted log hashes a transaction can emit
pub const MAX_UNENCRYPTED_LOGS_PER_TX: usize = 8;

/// Maximum number of public data update requests a transaction can emit
pub const MAX_PUBLIC_DATA_UPDATE_REQUESTS_PER_TX: usize = 32;

/// Field element size in bytes (BN254 scalar field)
pub const FIELD_SIZE: usize = 32;

/// Encoded size of counters, index hints and run lengths
pub const U32_SIZE: usize = 4;
