//! ELITE capacity and staffing model.
//!
//! Pure, deterministic derivations from a small interactive state:
//! member count, capacity scenario, and center count.

pub mod break_even;
pub mod config;
pub mod error;
pub mod format;
pub mod metrics;
pub mod multi_center;
pub mod scenario;
pub mod session;
pub mod staffing;
pub mod types;
