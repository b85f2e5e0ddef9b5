//! .
//!
//! The only failure this crate knows about is writing the document out; everything on the
//! geometry side is total. Errors are carried as [`anyhow::Error`] with the offending path
//! attached as context.

pub use anyhow::Context;

/// Convenient wrapper around `std::Result`.
pub type Result<T> = anyhow::Result<T>;
