//! prostrat-extract
//!
//! Turns pasted pathology report text into structured encounter reports:
//! chunking, diagnosis-block isolation, specimen tokenizing, per-specimen
//! field extraction and core aggregation. Risk classification is delegated
//! to `prostrat-scoring`.

pub mod aggregate;
pub mod chunk;
pub mod diagnosis;
pub mod error;
pub mod fields;
pub mod metadata;
pub mod pipeline;
pub mod rules;
pub mod specimen;

pub use pipeline::{ReportBatch, parse_reports};
