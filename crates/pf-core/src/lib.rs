//! `pf-core` — foundational types for the parcel-fleet day simulator.
//!
//! This crate is a dependency of every other `pf-*` crate.  It intentionally
//! has no `pf-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`ids`]      | `PackageId`, `TruckId`, `GroupId`                 |
//! | [`location`] | `Location` street-address value type              |
//! | [`time`]     | `Minute` (day-wrapped), `DayClock`                |
//! | [`error`]    | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod location;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{GroupId, PackageId, TruckId};
pub use location::Location;
pub use time::{DayClock, Minute};
