//! `pf-model` — the mutable entities of the parcel-fleet simulator and the
//! append-only log that remembers every state they have ever been in.
//!
//! # Ownership model
//!
//! The [`EntityStore`] owns the canonical, mutable [`Package`] and [`Truck`]
//! values; the [`StatusLog`] holds independent snapshots taken at record
//! time.  Mutating a live entity after a record never rewrites history —
//! historical truth lives only in the log.
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`package`]    | `Package`, `PackageStatus` lifecycle                 |
//! | [`truck`]      | `Truck`, `TruckStatus`, `TruckSnapshot`              |
//! | [`store`]      | `EntityStore<K, V>` keyed lookup collaborator        |
//! | [`status_log`] | `StatusLog<K, S>` time-bounded status intervals      |
//! | [`error`]      | `ModelError`, `ModelResult`                          |

pub mod error;
pub mod package;
pub mod status_log;
pub mod store;
pub mod truck;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ModelError, ModelResult};
pub use package::{Package, PackageStatus};
pub use status_log::{LogEntry, StatusLog};
pub use store::{EntityKey, EntityStore};
pub use truck::{Truck, TruckSnapshot, TruckStatus};
