//! Simulation time model.
//!
//! # Design
//!
//! The whole simulation covers one synthetic operating day, so time is a
//! minute-of-day counter wrapped modulo 1,440.  Using an integer minute as
//! the canonical unit means all deadline and arrival arithmetic is exact and
//! comparisons are O(1) integer compares.
//!
//! Unset time constraints (a package with no deadline, a package available
//! from the open of day) are `Option<Minute>` at the call sites — minute 0
//! is an ordinary timestamp here, never a sentinel.

use std::fmt;

use crate::error::{CoreError, CoreResult};

// ── Minute ────────────────────────────────────────────────────────────────────

/// Minutes in one simulated day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A minute-of-day timestamp in `0..1440`, wrapping at midnight.
///
/// Ordering compares the raw minute count, so "later in the day" is simply
/// "greater".  Arithmetic that crosses midnight wraps; a single-day run is
/// expected to finish well before that matters.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minute(u16);

impl Minute {
    pub const MIDNIGHT: Minute = Minute(0);

    /// Build from an hour/minute pair, wrapping into one day.
    #[inline]
    pub fn hm(hours: u16, minutes: u16) -> Minute {
        Minute((hours * 60 + minutes) % MINUTES_PER_DAY)
    }

    /// Build from a total minute count, wrapping into one day.
    #[inline]
    pub fn from_minutes(total: u32) -> Minute {
        Minute((total % MINUTES_PER_DAY as u32) as u16)
    }

    /// Raw minute-of-day count.
    #[inline]
    pub fn minute_of_day(self) -> u16 {
        self.0
    }

    /// The `(hour, minute)` components in 24-hour form.
    #[inline]
    pub fn hhmm(self) -> (u16, u16) {
        (self.0 / 60, self.0 % 60)
    }

    /// The minute `n` minutes later, wrapping at midnight.
    #[inline]
    pub fn plus_minutes(self, n: u32) -> Minute {
        Minute::from_minutes(self.0 as u32 + n)
    }

    /// Parse `"H:MM AM"` / `"HH:MM PM"` (case-insensitive) into a `Minute`.
    ///
    /// This is the boundary format delivery manifests use.  Malformed input
    /// is rejected with [`CoreError::InvalidTime`] before it can reach the
    /// engine.
    pub fn parse(s: &str) -> CoreResult<Minute> {
        let invalid = || CoreError::InvalidTime(s.to_string());

        let (clock, midday) = s.trim().rsplit_once(' ').ok_or_else(invalid)?;
        let (hh, mm) = clock.split_once(':').ok_or_else(invalid)?;
        let hours: u16 = hh.parse().map_err(|_| invalid())?;
        let minutes: u16 = mm.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&hours) || minutes > 59 {
            return Err(invalid());
        }

        // 12 AM is 00:xx and 12 PM is 12:xx; every other PM hour adds 12.
        let hours = match midday.to_ascii_uppercase().as_str() {
            "AM" => hours % 12,
            "PM" => hours % 12 + 12,
            _ => return Err(invalid()),
        };
        Ok(Minute::hm(hours, minutes))
    }
}

impl fmt::Display for Minute {
    /// `HH:MM AM/PM`, matching the manifest input format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h24, m) = self.hhmm();
        let midday = if h24 < 12 { "AM" } else { "PM" };
        let h12 = match h24 % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{h12:02}:{m:02} {midday}")
    }
}

// ── DayClock ──────────────────────────────────────────────────────────────────

/// The simulation clock — one `Minute` of state, advanced once per tick by
/// the driver loop and read-only for every other component.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayClock {
    now: Minute,
}

impl DayClock {
    /// Create a clock positioned at `start` (the hub's opening minute).
    pub fn starting_at(start: Minute) -> Self {
        Self { now: start }
    }

    /// The current simulated minute.
    #[inline]
    pub fn now(&self) -> Minute {
        self.now
    }

    /// Advance the clock by one minute, wrapping at midnight.
    #[inline]
    pub fn advance(&mut self) {
        self.now = self.now.plus_minutes(1);
    }
}

impl fmt::Display for DayClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.now)
    }
}
