//! The `Hub` context object and its builder.
//!
//! The hub owns everything the tick loop touches: the clock, the canonical
//! package and truck entities, their status logs, and the distance map.
//! Components receive it explicitly — there is no ambient global state —
//! and report layers consume it read-only through the point-in-time
//! queries at the bottom of this file.

use pf_core::{DayClock, Location, Minute, PackageId, TruckId};
use pf_model::{
    EntityStore, ModelResult, Package, PackageStatus, StatusLog, Truck, TruckSnapshot,
};
use pf_spatial::DistanceMap;

use crate::error::{SimError, SimResult};

// ── Hub ───────────────────────────────────────────────────────────────────────

/// All simulation state for one operating day.
///
/// Construct via [`HubBuilder`]; drive via [`run`](Hub::run).
#[derive(Debug)]
pub struct Hub {
    /// Depot name, for logging only.
    pub name: String,

    /// The depot address — start and end of every truck route.
    pub location: Location,

    /// The minute-stepped clock.  Advanced only by the driver loop.
    pub clock: DayClock,

    /// Canonical mutable packages, keyed by id.
    pub packages: EntityStore<PackageId, Package>,

    /// Canonical mutable trucks, keyed by id.
    pub trucks: EntityStore<TruckId, Truck>,

    /// Append-only package status history (value snapshots).
    pub package_log: StatusLog<PackageId, PackageStatus>,

    /// Append-only truck status history (value snapshots).
    pub truck_log: StatusLog<TruckId, TruckSnapshot>,

    /// Road miles between every pair of addresses.  Queried, never mutated,
    /// after build.
    pub distances: DistanceMap,
}

impl Hub {
    /// The current simulated minute.
    #[inline]
    pub fn now(&self) -> Minute {
        self.clock.now()
    }

    // ── Point-in-time queries (the reporting surface) ─────────────────────

    /// The status a package had at minute `at`.
    pub fn package_status_at(&self, id: PackageId, at: Minute) -> ModelResult<PackageStatus> {
        self.package_log.query(id, at).map(|entry| entry.snapshot)
    }

    /// The full truck state (status, miles, route, next stop) at minute `at`.
    pub fn truck_snapshot_at(&self, id: TruckId, at: Minute) -> ModelResult<TruckSnapshot> {
        self.truck_log.query(id, at).map(|entry| entry.snapshot.clone())
    }
}

// ── HubBuilder ────────────────────────────────────────────────────────────────

/// Assemble a [`Hub`] from loader output, then call [`build`](Self::build).
///
/// `build` enforces the loader guarantees the engine relies on: every
/// pinned truck id refers to a truck that exists, and every address the run
/// can visit (the hub and each package destination) is in the distance map.
///
/// # Example
///
/// ```rust,ignore
/// let hub = HubBuilder::new("WGUPS", hub_location, Minute::hm(8, 0))
///     .distances(distances)
///     .truck(Truck::new(TruckId(1), 16, 18.0, 2))
///     .package(Package::new(PackageId(1), dest, None, None, 2.0))
///     .build()?;
/// ```
pub struct HubBuilder {
    name:      String,
    location:  Location,
    start_at:  Minute,
    distances: DistanceMap,
    trucks:    Vec<Truck>,
    packages:  Vec<Package>,
}

impl HubBuilder {
    pub fn new(name: impl Into<String>, location: Location, start_at: Minute) -> Self {
        Self {
            name: name.into(),
            location,
            start_at,
            distances: DistanceMap::new(),
            trucks: Vec::new(),
            packages: Vec::new(),
        }
    }

    /// Supply the pre-loaded distance map.
    pub fn distances(mut self, distances: DistanceMap) -> Self {
        self.distances = distances;
        self
    }

    pub fn truck(mut self, truck: Truck) -> Self {
        self.trucks.push(truck);
        self
    }

    pub fn package(mut self, package: Package) -> Self {
        self.packages.push(package);
        self
    }

    /// Validate the inputs and produce a ready-to-run [`Hub`].
    ///
    /// Each truck's initial `AtHub` snapshot is recorded at the opening
    /// minute, so truck logs answer queries from tick zero onward.
    pub fn build(self) -> SimResult<Hub> {
        if !self.distances.contains(&self.location) {
            return Err(SimError::Config(format!(
                "hub address \"{}\" is not in the distance map",
                self.location
            )));
        }

        let mut trucks = EntityStore::new();
        for truck in self.trucks {
            let id = truck.id;
            if trucks.insert(id, truck).is_some() {
                return Err(SimError::Config(format!("duplicate truck id {id}")));
            }
        }

        let mut packages = EntityStore::new();
        for package in self.packages {
            if !self.distances.contains(&package.destination) {
                return Err(SimError::Config(format!(
                    "package {} destination \"{}\" is not in the distance map",
                    package.id, package.destination
                )));
            }
            if let Some(required) = package.required_truck {
                if !trucks.contains(required) {
                    return Err(SimError::Config(format!(
                        "package {} is pinned to unknown truck {required}",
                        package.id
                    )));
                }
            }
            let id = package.id;
            if packages.insert(id, package).is_some() {
                return Err(SimError::Config(format!("duplicate package id {id}")));
            }
        }

        let mut truck_log = StatusLog::new();
        for id in trucks.ids() {
            let snapshot = trucks.get(id)?.snapshot();
            truck_log.record(id, snapshot, self.start_at);
        }

        Ok(Hub {
            name: self.name,
            location: self.location,
            clock: DayClock::starting_at(self.start_at),
            packages,
            trucks,
            package_log: StatusLog::new(),
            truck_log,
            distances: self.distances,
        })
    }
}
