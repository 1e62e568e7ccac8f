//! The weighted location-pair index.

use rustc_hash::FxHashMap;

use pf_core::Location;

use crate::error::{SpatialError, SpatialResult};

/// Road miles between every ordered pair of known street addresses.
///
/// Directed: `insert` loads one leg, [`insert_symmetric`](Self::insert_symmetric)
/// loads both.  The loader is responsible for making every pair the engine
/// will query reachable; a missing leg at query time surfaces as
/// [`SpatialError::MissingLeg`] rather than being treated as infinite cost.
#[derive(Default, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMap {
    legs: FxHashMap<Location, FxHashMap<Location, f32>>,
}

impl DistanceMap {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Loading ───────────────────────────────────────────────────────────

    /// Load the directed leg `from → to` at `miles`.
    ///
    /// Both endpoints become known addresses, so a location reachable only
    /// through directed legs still passes [`contains`](Self::contains).
    /// Re-inserting a pair overwrites the previous cost.
    pub fn insert(&mut self, from: Location, to: Location, miles: f32) {
        self.legs.entry(to.clone()).or_default();
        self.legs.entry(from).or_default().insert(to, miles);
    }

    /// Load `a → b` and `b → a` at the same cost (the common case for a
    /// distance table read off a symmetric matrix).
    pub fn insert_symmetric(&mut self, a: Location, b: Location, miles: f32) {
        self.insert(a.clone(), b.clone(), miles);
        self.insert(b, a, miles);
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` if `loc` has been loaded (with or without outgoing legs).
    pub fn contains(&self, loc: &Location) -> bool {
        self.legs.contains_key(loc)
    }

    /// Number of loaded addresses.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Road miles for the directed leg `from → to`.
    ///
    /// A zero-length self-leg is returned without requiring it to be loaded.
    pub fn distance(&self, from: &Location, to: &Location) -> SpatialResult<f32> {
        if from == to {
            return Ok(0.0);
        }
        let out = self
            .legs
            .get(from)
            .ok_or_else(|| SpatialError::UnknownLocation(from.clone()))?;
        out.get(to).copied().ok_or_else(|| SpatialError::MissingLeg {
            from: from.clone(),
            to:   to.clone(),
        })
    }

    /// Total miles for the closed tour `start → stops… → start`.
    ///
    /// Diagnostic only — the route planner orders stops without it.
    pub fn round_trip<'a>(
        &self,
        start: &Location,
        stops: impl IntoIterator<Item = &'a Location>,
    ) -> SpatialResult<f32> {
        let mut total = 0.0;
        let mut at = start;
        for stop in stops {
            total += self.distance(at, stop)?;
            at = stop;
        }
        total += self.distance(at, start)?;
        Ok(total)
    }
}
