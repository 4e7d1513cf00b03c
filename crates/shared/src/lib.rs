//! Shared types for Kontiva.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - The `YearMonth` period key used by monthly info lookups

pub mod types;

pub use types::{PostingLineId, YearMonth};
