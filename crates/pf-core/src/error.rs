//! Core error type.
//!
//! Sub-crates define their own error enums (`ModelError`, `SpatialError`,
//! `SimError`) and convert between them with `#[from]` impls; `CoreError`
//! covers only faults that originate in this crate's boundary parsing.

use thiserror::Error;

/// Errors produced by `pf-core` itself.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A time string did not match the `HH:MM AM/PM` manifest format.
    #[error("invalid time string {0:?}")]
    InvalidTime(String),
}

/// Shorthand result type for `pf-core` operations.
pub type CoreResult<T> = Result<T, CoreError>;
