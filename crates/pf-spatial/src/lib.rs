//! `pf-spatial` — the distance collaborator of the parcel-fleet simulator.
//!
//! The engine never computes geometry; it asks [`DistanceMap`] for the road
//! miles between two street addresses.  The loader populates a cost for
//! every ordered pair it will ever be asked about before the first tick,
//! and the map is queried (never mutated) for the rest of the run.
//!
//! # Data layout
//!
//! A dictionary-backed weighted digraph: `FxHashMap<Location, FxHashMap<..>>`.
//! A city-scale delivery matrix is a few dozen addresses, so the nested-map
//! lookup is two O(1) hashes — no CSR or spatial tree is warranted here.

pub mod distance;
pub mod error;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use distance::DistanceMap;
pub use error::{SpatialError, SpatialResult};
