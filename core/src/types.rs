//! Shared primitive types used across the entire model.

/// Whole US dollars. Signed so margins can go negative.
pub type Dollars = i64;

/// A head or member count.
pub type Count = u32;
