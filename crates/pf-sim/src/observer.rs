//! Simulation observer trait for progress reporting and data collection.

use pf_core::{Minute, PackageId, TruckId};

/// Callbacks invoked by [`Hub::run`][crate::Hub::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers get ids and minutes, not
/// entity references — report layers read state through the hub's
/// point-in-time queries instead of reaching into the tick.
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _now: Minute) {}

    /// Called at the end of each tick, before the clock advances.
    fn on_tick_end(&mut self, _now: Minute) {}

    /// A docked truck was loaded, routed, and sent out with `stops` packages.
    fn on_truck_dispatched(&mut self, _truck: TruckId, _now: Minute, _stops: usize) {}

    /// A package reached its destination.
    fn on_package_delivered(&mut self, _package: PackageId, _truck: TruckId, _now: Minute, _late: bool) {}

    /// An empty truck returned to the hub.
    fn on_truck_docked(&mut self, _truck: TruckId, _now: Minute) {}

    /// Called once after the final tick completes.
    fn on_run_end(&mut self, _now: Minute) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
