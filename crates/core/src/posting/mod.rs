//! Posting lines and the windowed summation primitive.

pub mod collection;
pub mod line;

#[cfg(test)]
mod collection_props;
#[cfg(test)]
mod tests;

pub use collection::{PostingEntry, PostingLineCollection};
pub use line::PostingLine;
