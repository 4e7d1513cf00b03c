//! Calculation engine for Kontiva.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Given an accounting graph loaded by the (external) repository layer and an
//! arbitrary status date, it derives date-scoped, memoized balance snapshots
//! for accounts, budget accounts, and contact accounts, and projects those
//! snapshots onto individual posting lines.
//!
//! # Modules
//!
//! - `accounting` - The accounting aggregate: entity arena and calculation fan-out
//! - `account` - Account-family entities and their per-date snapshots
//! - `posting` - Posting lines and the windowed summation primitive
//! - `info` - Month-keyed credit/budget/contact info collections
//! - `calculate` - Memoization state, period helpers, and error types

pub mod account;
pub mod accounting;
pub mod calculate;
pub mod info;
pub mod posting;
