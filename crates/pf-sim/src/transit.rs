//! Truck movement: dispatch, per-leg arrival arithmetic, delivery on
//! arrival, and docking.
//!
//! A truck is never simulated between stops.  Each leg is collapsed to an
//! arrival minute computed once at departure from the leg's road miles and
//! the truck's average speed; until that minute the truck is a no-op, at
//! that minute it "arrives".  Mile and route accounting happens when the
//! truck's position actually changes, so repeated calls at the same
//! location add nothing.

use pf_core::{Location, Minute, TruckId};
use pf_model::{Truck, TruckStatus};
use pf_spatial::DistanceMap;

use crate::error::SimResult;
use crate::hub::Hub;
use crate::observer::SimObserver;

// ── Position accounting ───────────────────────────────────────────────────────

/// Record that `truck` is standing at `at`: extend the visited-route
/// history and accumulate the miles of the leg that got it here.
/// Idempotent — calling again at the same location changes nothing.
fn note_position(truck: &mut Truck, distances: &DistanceMap, at: &Location) -> SimResult<()> {
    match truck.route_traveled.last().cloned() {
        Some(prev) if prev == *at => {}
        Some(prev) => {
            truck.miles_traveled += distances.distance(&prev, at)?;
            truck.route_traveled.push(at.clone());
        }
        None => truck.route_traveled.push(at.clone()),
    }
    Ok(())
}

// ── Transit operations ────────────────────────────────────────────────────────

impl Hub {
    /// Send a freshly loaded truck out: first leg is hub → first stop.
    pub(crate) fn dispatch<O: SimObserver>(
        &mut self,
        truck_id: TruckId,
        now: Minute,
        observer: &mut O,
    ) -> SimResult<()> {
        let truck = self.trucks.get_mut(truck_id)?;
        debug_assert!(truck.is_docked(), "dispatching a truck that is not docked");
        debug_assert!(!truck.load.is_empty(), "dispatching an empty truck");
        truck.status = TruckStatus::OutForDeliveries;

        let first_stop = self.packages.get(truck.load[0])?.destination.clone();
        let stops = truck.load.len();

        let hub_location = self.location.clone();
        self.set_leg(truck_id, &hub_location, first_stop, now)?;

        tracing::debug!(truck = truck_id.raw(), stops, at = %now, "truck dispatched");
        observer.on_truck_dispatched(truck_id, now, stops);
        Ok(())
    }

    /// Plan the delivery order of a just-loaded truck, then send it out.
    pub(crate) fn plan_and_dispatch<O: SimObserver>(
        &mut self,
        truck_id: TruckId,
        now: Minute,
        observer: &mut O,
    ) -> SimResult<()> {
        let mut load = std::mem::take(&mut self.trucks.get_mut(truck_id)?.load);
        crate::route::plan_delivery_order(&mut load, &self.location, &self.packages, &self.distances)?;

        let stops: Vec<&Location> = load
            .iter()
            .map(|&id| self.packages.get(id).map(|p| &p.destination))
            .collect::<Result<_, _>>()?;
        let planned_miles = self.distances.round_trip(&self.location, stops)?;
        tracing::debug!(truck = truck_id.raw(), planned_miles, "route planned");

        self.trucks.get_mut(truck_id)?.load = load;
        self.dispatch(truck_id, now, observer)
    }

    /// Advance one en-route truck by one tick: no-op until the arrival
    /// minute, then deliver the head of the load and aim at the next stop
    /// (or home when the load runs out).
    pub(crate) fn advance_en_route<O: SimObserver>(
        &mut self,
        truck_id: TruckId,
        now: Minute,
        observer: &mut O,
    ) -> SimResult<()> {
        let truck = self.trucks.get(truck_id)?;
        if truck.status != TruckStatus::OutForDeliveries {
            return Ok(());
        }
        let Some(stop) = truck.next_destination.clone() else {
            return Ok(());
        };
        let arrival = truck
            .arrival_at
            .expect("en-route truck without an arrival minute");
        if arrival > now {
            return Ok(());
        }
        if truck.load.is_empty() {
            debug_assert_eq!(stop, self.location, "empty truck heading somewhere other than home");
            return self.dock(truck_id, now, observer);
        }

        // Arrived: deliver the package this stop belongs to.
        let package_id = truck.load[0];
        let package = self.packages.get_mut(package_id)?;
        debug_assert_eq!(package.destination, stop, "route order out of sync with load");
        package.mark_delivered(now);
        let status = package.status;
        let late = !matches!(status, pf_model::PackageStatus::Delivered);
        self.package_log.record(package_id, status, now);
        self.trucks.get_mut(truck_id)?.load.remove(0);

        tracing::debug!(
            package = package_id.raw(),
            truck = truck_id.raw(),
            late,
            at = %now,
            "package delivered"
        );
        observer.on_package_delivered(package_id, truck_id, now, late);

        // Aim at the next stop, or home when empty.
        match self.trucks.get(truck_id)?.load.first().copied() {
            Some(next_id) => {
                let next_stop = self.packages.get(next_id)?.destination.clone();
                self.set_leg(truck_id, &stop, next_stop, now)?;
            }
            None => {
                let home = self.location.clone();
                self.set_leg(truck_id, &stop, home, now)?;
            }
        }
        Ok(())
    }

    /// Revert an empty truck that has reached the hub to `AtHub`, freeing
    /// it for reloading on the next pass.
    pub(crate) fn dock<O: SimObserver>(
        &mut self,
        truck_id: TruckId,
        now: Minute,
        observer: &mut O,
    ) -> SimResult<()> {
        let hub_location = self.location.clone();
        let truck = self.trucks.get_mut(truck_id)?;
        debug_assert!(truck.load.is_empty(), "docking a loaded truck");

        note_position(truck, &self.distances, &hub_location)?;
        truck.status = TruckStatus::AtHub;
        truck.next_destination = None;
        let snapshot = truck.snapshot();
        self.truck_log.record(truck_id, snapshot, now);

        tracing::debug!(truck = truck_id.raw(), at = %now, "truck docked at hub");
        observer.on_truck_docked(truck_id, now);
        Ok(())
    }

    /// Point the truck at `to`, standing at `from`: compute the arrival
    /// minute as `now + trunc(miles / mph * 60)`, account for the position
    /// change, and log the new snapshot.
    pub(crate) fn set_leg(
        &mut self,
        truck_id: TruckId,
        from: &Location,
        to: Location,
        now: Minute,
    ) -> SimResult<()> {
        let miles = self.distances.distance(from, &to)?;
        let truck = self.trucks.get_mut(truck_id)?;
        let travel_min = (miles / truck.avg_speed_mph * 60.0) as u32;

        note_position(truck, &self.distances, from)?;
        truck.next_destination = Some(to);
        truck.arrival_at = Some(now.plus_minutes(travel_min));
        let snapshot = truck.snapshot();
        self.truck_log.record(truck_id, snapshot, now);
        Ok(())
    }
}
