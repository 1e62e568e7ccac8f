//! The truck-loading policy: decide whether a docked truck should load
//! now, then fill it.
//!
//! # The decision cascade
//!
//! With a 75-minute look-ahead window from the current minute, the first
//! matching rule decides — the rules are a priority order, not independent
//! conditions:
//!
//! 1. some undelivered package's deadline falls inside the window →
//!    load now, a deadline is pressing;
//! 2. some still-pending package becomes available inside the window →
//!    hold, more of the pool is about to reach the hub;
//! 3. the whole remaining pool fits on this one truck, some of it is
//!    pinned, and no pin names this truck → hold, let a pinned truck take
//!    the lot;
//! 4. otherwise load now.
//!
//! # The loading pass
//!
//! Candidates are the packages that are ready at the hub and not pinned
//! elsewhere.  A group is all-or-nothing: if any member of a delivery
//! group is not a candidate this pass, the whole group waits; if a group
//! is a candidate but does not fit in the remaining capacity, it is
//! skipped for this pass and smaller cargo keeps loading.  Deadline
//! packages board first (earliest deadline first); everything else follows
//! in a deterministic destination order so identical hubs load
//! identically.

use rustc_hash::FxHashSet;

use pf_core::{GroupId, Location, Minute, PackageId, TruckId};
use pf_model::{EntityStore, Package, Truck};

use crate::error::SimResult;
use crate::hub::Hub;
use crate::observer::SimObserver;

/// Look-ahead window for the decision cascade, minutes.
pub const LOOKAHEAD_MIN: u32 = 75;

// ── LoadDecision ──────────────────────────────────────────────────────────────

/// Outcome of the decision cascade for one docked truck.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum LoadDecision {
    /// Fill the truck this tick.
    LoadNow,
    /// More packages become available within the look-ahead window; wait
    /// for them so they can share the trip.
    HoldForArrivals,
    /// The remaining pool fits on one truck, pins exist, and none of them
    /// names this truck; leave the lot for a pinned truck.
    HoldForPinned,
}

/// Run the decision cascade for `truck` against the current package pool.
pub fn loading_decision(
    truck: &Truck,
    packages: &EntityStore<PackageId, Package>,
    now: Minute,
) -> LoadDecision {
    let threshold = now.plus_minutes(LOOKAHEAD_MIN);
    let pool: Vec<&Package> = packages
        .values()
        .filter(|p| p.status.needs_delivery())
        .collect();

    // Rule 1: a deadline inside the window forces a departure.
    let earliest_deadline = pool.iter().filter_map(|p| p.deadline).min();
    if earliest_deadline.is_some_and(|d| d < threshold) {
        return LoadDecision::LoadNow;
    }

    // Rule 2: a package reaching the hub inside the window is worth
    // waiting for.
    let earliest_arrival = pool
        .iter()
        .filter_map(|p| p.available_at)
        .filter(|&a| a > now)
        .min();
    if earliest_arrival.is_some_and(|a| a < threshold) {
        return LoadDecision::HoldForArrivals;
    }

    // Rule 3: the whole pool fits on one truck and pins exist, but none
    // of them names this truck.  A truck that is itself pinned to loads
    // now, so two trucks with one pin each never wait on each other.
    let pins: Vec<TruckId> = pool.iter().filter_map(|p| p.required_truck).collect();
    if pool.len() <= truck.capacity && !pins.is_empty() && !pins.contains(&truck.id) {
        return LoadDecision::HoldForPinned;
    }

    LoadDecision::LoadNow
}

// ── The loading pass ──────────────────────────────────────────────────────────

/// A loadable package, copied out of the store so the pass can sort and
/// group without holding a borrow on it.
struct Candidate {
    id:          PackageId,
    destination: Location,
    pin:         Option<TruckId>,
    deadline:    Option<Minute>,
    group:       Option<GroupId>,
}

impl Hub {
    /// Run the loading policy for one docked truck.  May fill the truck,
    /// plan its delivery order, and dispatch it.
    pub(crate) fn try_load<O: SimObserver>(
        &mut self,
        truck_id: TruckId,
        now: Minute,
        observer: &mut O,
    ) -> SimResult<()> {
        let truck = self.trucks.get(truck_id)?;
        debug_assert!(truck.is_docked(), "loading a truck that is not docked");
        let mut remaining = truck.remaining_capacity();
        if remaining == 0 {
            return Ok(());
        }
        if !self.packages.values().any(|p| p.status.needs_delivery()) {
            return Ok(());
        }

        let decision = loading_decision(truck, &self.packages, now);
        if decision != LoadDecision::LoadNow {
            tracing::trace!(truck = truck_id.raw(), ?decision, at = %now, "truck holding");
            return Ok(());
        }

        // A group is only loadable when every member passes the candidate
        // filter; any member that is still pending or pinned elsewhere
        // pulls the whole group out of this pass.
        let mut excluded_groups: FxHashSet<GroupId> = FxHashSet::default();
        for package in self.packages.values() {
            if !package.status.needs_delivery() {
                continue;
            }
            let loadable = package.is_ready()
                && package.required_truck.is_none_or(|t| t == truck_id);
            if !loadable {
                if let Some(group) = package.group {
                    excluded_groups.insert(group);
                }
            }
        }

        let mut candidates: Vec<Candidate> = self
            .packages
            .values()
            .filter(|p| p.is_ready())
            .filter(|p| p.required_truck.is_none_or(|t| t == truck_id))
            .filter(|p| p.group.is_none_or(|g| !excluded_groups.contains(&g)))
            .map(|p| Candidate {
                id:          p.id,
                destination: p.destination.clone(),
                pin:         p.required_truck,
                deadline:    p.deadline,
                group:       p.group,
            })
            .collect();
        if candidates.is_empty() {
            return Ok(());
        }

        // Deterministic boarding queue: deadline packages first by
        // deadline, the rest grouped by destination with pinned cargo
        // ahead of unpinned, package id breaking all ties.
        candidates.sort_by(|a, b| {
            a.destination
                .cmp(&b.destination)
                .then_with(|| (a.pin.is_none(), a.pin.map(TruckId::raw)).cmp(
                    &(b.pin.is_none(), b.pin.map(TruckId::raw)),
                ))
                .then_with(|| a.id.cmp(&b.id))
        });
        let (mut with_deadline, rest): (Vec<Candidate>, Vec<Candidate>) =
            candidates.into_iter().partition(|c| c.deadline.is_some());
        with_deadline.sort_by_key(|c| (c.deadline, c.id));
        with_deadline.extend(rest);
        let queue = with_deadline;

        let mut boarded: FxHashSet<PackageId> = FxHashSet::default();
        let mut skipped_groups: FxHashSet<GroupId> = FxHashSet::default();
        for candidate in &queue {
            if remaining == 0 {
                break;
            }
            if boarded.contains(&candidate.id) {
                continue;
            }
            match candidate.group {
                Some(group) => {
                    if skipped_groups.contains(&group) {
                        continue;
                    }
                    let members: Vec<PackageId> = queue
                        .iter()
                        .filter(|c| c.group == Some(group))
                        .map(|c| c.id)
                        .collect();
                    if members.len() > remaining {
                        // The group cannot board whole this pass; smaller
                        // cargo keeps loading behind it.
                        skipped_groups.insert(group);
                        continue;
                    }
                    for id in members {
                        self.board(truck_id, id, now)?;
                        boarded.insert(id);
                        remaining -= 1;
                    }
                }
                None => {
                    self.board(truck_id, candidate.id, now)?;
                    boarded.insert(candidate.id);
                    remaining -= 1;
                }
            }
        }

        if !self.trucks.get(truck_id)?.load.is_empty() {
            self.plan_and_dispatch(truck_id, now, observer)?;
        }
        Ok(())
    }

    /// Move one package onto the truck and log the transition.
    fn board(&mut self, truck_id: TruckId, package_id: PackageId, now: Minute) -> SimResult<()> {
        let package = self.packages.get_mut(package_id)?;
        package.load_onto(truck_id);
        let status = package.status;
        self.package_log.record(package_id, status, now);
        self.trucks.get_mut(truck_id)?.load.push(package_id);
        tracing::trace!(package = package_id.raw(), truck = truck_id.raw(), at = %now, "package loaded");
        Ok(())
    }
}
