//! The minute-stepped driver loop.

use pf_core::{Minute, time::MINUTES_PER_DAY};
use pf_model::{PackageStatus, TruckStatus};

use crate::error::{SimError, SimResult};
use crate::hub::Hub;
use crate::observer::SimObserver;

// ── RunSummary ────────────────────────────────────────────────────────────────

/// Aggregate figures for a completed run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Simulated minutes elapsed from the opening minute.
    pub ticks: u32,
    /// Road miles driven by the whole fleet.
    pub total_miles: f32,
    /// Packages delivered on time.
    pub delivered: usize,
    /// Packages delivered after their deadline.
    pub delivered_late: usize,
}

// ── Driver loop ───────────────────────────────────────────────────────────────

impl Hub {
    /// Run the simulation to completion: no package left undelivered, no
    /// truck still on the road.
    ///
    /// A hub with zero packages terminates immediately at tick zero without
    /// dispatching anything.  A run that crosses a full synthetic day
    /// (1,440 ticks) aborts with [`SimError::DayExhausted`] — timestamps
    /// wrap at midnight, so continuing would corrupt every comparison.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        let mut ticks: u32 = 0;

        while self.has_undelivered() || self.trucks_en_route() {
            if ticks >= MINUTES_PER_DAY as u32 {
                return Err(SimError::DayExhausted {
                    ticks,
                    undelivered: self.undelivered_count(),
                });
            }

            let now = self.now();
            observer.on_tick_start(now);
            self.promote_arrived(now)?;
            self.update_trucks(now, observer)?;
            observer.on_tick_end(now);

            self.clock.advance();
            ticks += 1;
        }

        let finished = self.now();
        observer.on_run_end(finished);
        tracing::info!(hub = %self.name, ticks, at = %finished, "delivery day complete");

        Ok(self.summarize(ticks))
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    /// Phase ①: move packages whose availability minute has passed from
    /// `Pending` to `ReadyForPickup`.
    ///
    /// Packages still `Pending` are re-logged every minute so the status
    /// timeline stays dense and any minute of the day is queryable.
    fn promote_arrived(&mut self, now: Minute) -> SimResult<()> {
        for id in self.packages.ids() {
            let package = self.packages.get_mut(id)?;
            if package.status != PackageStatus::Pending {
                continue;
            }
            if package.is_available(now) {
                package.mark_ready();
                tracing::trace!(package = id.raw(), at = %now, "package ready for pickup");
            }
            let status = package.status;
            self.package_log.record(id, status, now);
        }
        Ok(())
    }

    /// Phase ②: load docked trucks, then advance en-route ones, each in
    /// ascending id order for determinism.
    ///
    /// A truck that reaches the hub during the advance sweep docks there
    /// and becomes loadable on the next tick, not this one.
    fn update_trucks<O: SimObserver>(&mut self, now: Minute, observer: &mut O) -> SimResult<()> {
        for id in self.trucks.ids() {
            if self.trucks.get(id)?.is_docked() {
                self.try_load(id, now, observer)?;
            }
        }
        for id in self.trucks.ids() {
            self.advance_en_route(id, now, observer)?;
        }
        Ok(())
    }

    // ── Termination predicates ────────────────────────────────────────────

    fn has_undelivered(&self) -> bool {
        self.packages.values().any(|p| !p.status.is_terminal())
    }

    fn trucks_en_route(&self) -> bool {
        self.trucks
            .values()
            .any(|t| t.status == TruckStatus::OutForDeliveries)
    }

    fn undelivered_count(&self) -> usize {
        self.packages
            .values()
            .filter(|p| !p.status.is_terminal())
            .count()
    }

    fn summarize(&self, ticks: u32) -> RunSummary {
        let total_miles = self.trucks.values().map(|t| t.miles_traveled).sum();
        let delivered = self
            .packages
            .values()
            .filter(|p| p.status == PackageStatus::Delivered)
            .count();
        let delivered_late = self
            .packages
            .values()
            .filter(|p| p.status == PackageStatus::DeliveredLate)
            .count();
        RunSummary { ticks, total_miles, delivered, delivered_late }
    }
}
