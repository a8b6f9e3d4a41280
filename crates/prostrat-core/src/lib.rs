//! prostrat-core
//!
//! Pure domain types for prostate biopsy report analysis.
//! Shared vocabulary of the prostrat workspace. No regex or I/O.

pub mod error;
pub mod models;
