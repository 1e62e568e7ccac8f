//! `StatusLog` — the append-only, time-indexed history of entity state.
//!
//! # Interval invariant
//!
//! A log is a per-entity sequence of `[start, end)` intervals that are
//! contiguous and non-overlapping: entry *k*'s end equals entry *k+1*'s
//! start, and the final entry is open (`end == None`, read as "still
//! current").  Any minute from the first record onward therefore falls in
//! exactly one entry, and a point-in-time query is a single
//! `partition_point` binary search over the starts.
//!
//! # Same-minute nudge
//!
//! Two records in the same minute would produce a zero-length interval that
//! no timestamp could select.  When a record arrives while the open entry
//! started that same minute, both the closed end and the new start are
//! nudged one minute forward.  This sacrifices exact simultaneity to keep
//! every entry addressable by a single timestamp.

use rustc_hash::FxHashMap;

use pf_core::Minute;

use crate::error::{ModelError, ModelResult};
use crate::store::EntityKey;

// ── LogEntry ──────────────────────────────────────────────────────────────────

/// One time-bounded status record.  Immutable once its end is set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry<S> {
    /// The entity state captured at record time (a copy, never a reference
    /// into the live store).
    pub snapshot: S,
    pub start: Minute,
    /// `None` while this is the entity's current entry.
    pub end: Option<Minute>,
}

impl<S> LogEntry<S> {
    /// `true` if `at` falls inside `[start, end)`, with an open end treated
    /// as extending to "now".
    #[inline]
    pub fn contains(&self, at: Minute) -> bool {
        self.start <= at && self.end.is_none_or(|end| at < end)
    }
}

// ── StatusLog ─────────────────────────────────────────────────────────────────

/// Per-entity ordered status history supporting append and point-in-time
/// lookup.  This is the sole mechanism for historical queries — the live
/// entity fields reflect only the latest state.
#[derive(Clone, Debug, Default)]
pub struct StatusLog<K: EntityKey, S> {
    inner: FxHashMap<K, Vec<LogEntry<S>>>,
}

impl<K: EntityKey, S: Clone> StatusLog<K, S> {
    pub fn new() -> Self {
        Self { inner: FxHashMap::default() }
    }

    /// Append a new open entry for `id`, closing the previous open entry at
    /// `now` (nudged forward one minute if the previous entry also started
    /// at `now`).
    pub fn record(&mut self, id: K, snapshot: S, now: Minute) {
        let entries = self.inner.entry(id).or_default();

        let start = match entries.last_mut() {
            None => now,
            Some(open) => {
                debug_assert!(open.end.is_none(), "last entry must be open");
                // `>=` rather than `==`: a third record in the same minute
                // would otherwise close an entry before it started.
                let boundary = if open.start >= now {
                    open.start.plus_minutes(1)
                } else {
                    now
                };
                open.end = Some(boundary);
                boundary
            }
        };

        entries.push(LogEntry { snapshot, start, end: None });
    }

    /// The entry whose interval contains `at`.
    ///
    /// A query earlier than the first record clamps to the first entry, so
    /// the only failure is an id with no history at all.
    pub fn query(&self, id: K, at: Minute) -> ModelResult<&LogEntry<S>> {
        let entries = self.entries(id)?;
        // First index whose start is after `at`; the entry before it is the
        // interval `at` falls in (index 0 clamps).
        let idx = entries.partition_point(|e| e.start <= at);
        Ok(&entries[idx.saturating_sub(1)])
    }

    /// The full recorded history for `id`, oldest first.
    pub fn history(&self, id: K) -> ModelResult<&[LogEntry<S>]> {
        self.entries(id).map(Vec::as_slice)
    }

    fn entries(&self, id: K) -> ModelResult<&Vec<LogEntry<S>>> {
        self.inner
            .get(&id)
            .ok_or(ModelError::EntityNotLogged(id.raw()))
    }
}
