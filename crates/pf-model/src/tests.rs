//! Unit tests for pf-model.

use pf_core::{Location, Minute, PackageId, TruckId};

use crate::{
    EntityStore, ModelError, Package, PackageStatus, StatusLog, Truck, TruckStatus,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn dest() -> Location {
    Location::new("195 W Oakland Ave", "Salt Lake City", "UT", "84115")
}

fn package(id: u32) -> Package {
    Package::new(PackageId(id), dest(), None, None, 2.5)
}

// ── EntityStore ───────────────────────────────────────────────────────────────

mod store {
    use super::*;

    #[test]
    fn insert_returns_previous_value() {
        let mut store = EntityStore::new();
        assert!(store.insert(PackageId(1), package(1)).is_none());
        let prev = store.insert(PackageId(1), package(1));
        assert!(prev.is_some());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store: EntityStore<PackageId, Package> = EntityStore::new();
        assert_eq!(store.get(PackageId(9)).unwrap_err(), ModelError::NotFound(9));
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut store = EntityStore::new();
        store.insert(PackageId(1), package(1));
        store.get_mut(PackageId(1)).unwrap().mass_kg = 40.0;
        assert_eq!(store.get(PackageId(1)).unwrap().mass_kg, 40.0);
    }

    #[test]
    fn ids_are_ascending() {
        let mut store = EntityStore::new();
        for raw in [7u32, 2, 9, 1] {
            store.insert(PackageId(raw), package(raw));
        }
        assert_eq!(
            store.ids(),
            vec![PackageId(1), PackageId(2), PackageId(7), PackageId(9)]
        );
    }
}

// ── StatusLog ─────────────────────────────────────────────────────────────────

mod status_log {
    use super::*;

    #[test]
    fn first_record_opens_history() {
        let mut log = StatusLog::new();
        log.record(PackageId(1), PackageStatus::Pending, Minute::hm(8, 0));

        let history = log.history(PackageId(1)).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].start, Minute::hm(8, 0));
        assert_eq!(history[0].end, None);
    }

    #[test]
    fn record_closes_previous_open_entry() {
        let mut log = StatusLog::new();
        log.record(PackageId(1), PackageStatus::Pending, Minute::hm(8, 0));
        log.record(PackageId(1), PackageStatus::ReadyForPickup, Minute::hm(9, 5));

        let history = log.history(PackageId(1)).unwrap();
        assert_eq!(history[0].end, Some(Minute::hm(9, 5)));
        assert_eq!(history[1].start, Minute::hm(9, 5));
        assert_eq!(history[1].end, None);
    }

    #[test]
    fn same_minute_record_is_nudged_forward() {
        let mut log = StatusLog::new();
        log.record(PackageId(1), PackageStatus::ReadyForPickup, Minute::hm(8, 0));
        log.record(PackageId(1), PackageStatus::OutForDelivery, Minute::hm(8, 0));

        let history = log.history(PackageId(1)).unwrap();
        // The closed entry keeps one queryable minute; the new entry starts
        // right where it ends.
        assert_eq!(history[0].end, Some(Minute::hm(8, 1)));
        assert_eq!(history[1].start, Minute::hm(8, 1));

        let at_eight = log.query(PackageId(1), Minute::hm(8, 0)).unwrap();
        assert_eq!(at_eight.snapshot, PackageStatus::ReadyForPickup);
    }

    #[test]
    fn query_selects_the_containing_interval() {
        let mut log = StatusLog::new();
        log.record(PackageId(1), PackageStatus::Pending, Minute::hm(8, 0));
        log.record(PackageId(1), PackageStatus::ReadyForPickup, Minute::hm(9, 0));
        log.record(PackageId(1), PackageStatus::OutForDelivery, Minute::hm(10, 0));

        let status_at = |h, m| log.query(PackageId(1), Minute::hm(h, m)).unwrap().snapshot;
        assert_eq!(status_at(8, 0), PackageStatus::Pending);
        assert_eq!(status_at(8, 59), PackageStatus::Pending);
        assert_eq!(status_at(9, 0), PackageStatus::ReadyForPickup);   // boundary
        assert_eq!(status_at(9, 59), PackageStatus::ReadyForPickup);
        assert_eq!(status_at(10, 0), PackageStatus::OutForDelivery);
        // Open end: any later minute still matches the final entry.
        assert_eq!(status_at(23, 59), PackageStatus::OutForDelivery);
    }

    #[test]
    fn query_before_first_record_clamps_to_first_entry() {
        let mut log = StatusLog::new();
        log.record(PackageId(1), PackageStatus::Pending, Minute::hm(8, 0));
        let entry = log.query(PackageId(1), Minute::hm(7, 0)).unwrap();
        assert_eq!(entry.snapshot, PackageStatus::Pending);
    }

    #[test]
    fn query_unlogged_entity_fails() {
        let log: StatusLog<PackageId, PackageStatus> = StatusLog::new();
        assert_eq!(
            log.query(PackageId(4), Minute::hm(8, 0)).unwrap_err(),
            ModelError::EntityNotLogged(4)
        );
    }

    #[test]
    fn intervals_stay_contiguous_under_dense_recording() {
        // One record per minute for an hour, like a package held in Pending.
        let mut log = StatusLog::new();
        for m in 0..60 {
            log.record(PackageId(1), PackageStatus::Pending, Minute::hm(8, m));
        }

        let history = log.history(PackageId(1)).unwrap();
        assert_eq!(history.len(), 60);
        for pair in history.windows(2) {
            assert_eq!(pair[0].end, Some(pair[1].start));
        }
        assert_eq!(history.last().unwrap().end, None);

        // Every minute in range falls in exactly one interval.
        for m in 0..60 {
            let at = Minute::hm(8, m);
            let matching = history.iter().filter(|e| e.contains(at)).count();
            assert_eq!(matching, 1, "minute {at} matched {matching} entries");
        }
    }

    #[test]
    fn snapshots_are_copies_not_references() {
        let mut store = EntityStore::new();
        store.insert(PackageId(1), package(1));
        let mut log = StatusLog::new();

        log.record(PackageId(1), store.get(PackageId(1)).unwrap().status, Minute::hm(8, 0));
        store.get_mut(PackageId(1)).unwrap().mark_ready();

        // Mutating the live entity must not rewrite history.
        let entry = log.query(PackageId(1), Minute::hm(8, 0)).unwrap();
        assert_eq!(entry.snapshot, PackageStatus::Pending);
    }
}

// ── Package lifecycle ─────────────────────────────────────────────────────────

mod package_lifecycle {
    use super::*;

    #[test]
    fn full_on_time_lifecycle() {
        let mut p = package(1);
        assert_eq!(p.status, PackageStatus::Pending);
        assert!(p.status.needs_delivery());

        p.mark_ready();
        assert_eq!(p.status, PackageStatus::ReadyForPickup);

        p.load_onto(TruckId(2));
        assert_eq!(p.status, PackageStatus::OutForDelivery);
        assert_eq!(p.assigned_truck, Some(TruckId(2)));

        p.mark_delivered(Minute::hm(10, 0));
        assert_eq!(p.status, PackageStatus::Delivered);
        assert!(p.status.is_terminal());
    }

    #[test]
    fn late_iff_strictly_after_deadline() {
        let deadline = Some(Minute::hm(10, 30));

        let mut on_time = package(1);
        on_time.deadline = deadline;
        on_time.mark_ready();
        on_time.load_onto(TruckId(1));
        on_time.mark_delivered(Minute::hm(10, 30)); // exactly at deadline
        assert_eq!(on_time.status, PackageStatus::Delivered);

        let mut late = package(2);
        late.deadline = deadline;
        late.mark_ready();
        late.load_onto(TruckId(1));
        late.mark_delivered(Minute::hm(10, 31));
        assert_eq!(late.status, PackageStatus::DeliveredLate);
    }

    #[test]
    fn no_deadline_is_never_late() {
        let mut p = package(1);
        p.mark_ready();
        p.load_onto(TruckId(1));
        p.mark_delivered(Minute::hm(23, 59));
        assert_eq!(p.status, PackageStatus::Delivered);
    }

    #[test]
    fn availability_respects_the_clock() {
        let mut p = package(1);
        p.available_at = Some(Minute::hm(9, 5));
        assert!(!p.is_available(Minute::hm(9, 4)));
        assert!(p.is_available(Minute::hm(9, 5)));

        let anytime = package(2);
        assert!(anytime.is_available(Minute::MIDNIGHT));
    }
}

// ── Truck ─────────────────────────────────────────────────────────────────────

mod truck {
    use super::*;

    #[test]
    fn starts_docked_and_empty() {
        let t = Truck::new(TruckId(1), 16, 18.0, 2);
        assert_eq!(t.status, TruckStatus::AtHub);
        assert!(t.is_docked());
        assert!(t.load.is_empty());
        assert_eq!(t.remaining_capacity(), 16);
    }

    #[test]
    fn remaining_capacity_tracks_load() {
        let mut t = Truck::new(TruckId(1), 2, 18.0, 2);
        t.load.push(PackageId(1));
        assert_eq!(t.remaining_capacity(), 1);
        t.load.push(PackageId(2));
        assert_eq!(t.remaining_capacity(), 0);
    }

    #[test]
    fn snapshot_is_detached_from_the_live_truck() {
        let mut t = Truck::new(TruckId(1), 16, 18.0, 2);
        let snap = t.snapshot();
        t.miles_traveled = 12.5;
        t.status = TruckStatus::OutForDeliveries;
        assert_eq!(snap.miles_traveled, 0.0);
        assert_eq!(snap.status, TruckStatus::AtHub);
    }
}
