//! Unit tests for pf-spatial.

use pf_core::Location;

use crate::{DistanceMap, SpatialError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn loc(street: &str) -> Location {
    Location::new(street, "Salt Lake City", "UT", "84111")
}

fn three_stop_map() -> (DistanceMap, Location, Location, Location) {
    let (hub, a, b) = (loc("hub"), loc("a"), loc("b"));
    let mut map = DistanceMap::new();
    map.insert_symmetric(hub.clone(), a.clone(), 3.0);
    map.insert_symmetric(hub.clone(), b.clone(), 5.0);
    map.insert_symmetric(a.clone(), b.clone(), 1.5);
    (map, hub, a, b)
}

// ── DistanceMap ───────────────────────────────────────────────────────────────

#[test]
fn symmetric_insert_loads_both_legs() {
    let (map, hub, a, _) = three_stop_map();
    assert_eq!(map.distance(&hub, &a).unwrap(), 3.0);
    assert_eq!(map.distance(&a, &hub).unwrap(), 3.0);
}

#[test]
fn directed_insert_loads_one_leg() {
    let (one_way, back) = (loc("one-way"), loc("back"));
    let mut map = DistanceMap::new();
    map.insert(one_way.clone(), back.clone(), 2.0);
    assert_eq!(map.distance(&one_way, &back).unwrap(), 2.0);
    // The destination is a known address with no outgoing legs.
    assert!(map.contains(&back));
    assert!(matches!(
        map.distance(&back, &one_way),
        Err(SpatialError::MissingLeg { .. })
    ));
}

#[test]
fn self_leg_is_zero_without_loading() {
    let (map, hub, ..) = three_stop_map();
    assert_eq!(map.distance(&hub, &hub).unwrap(), 0.0);
}

#[test]
fn unknown_origin_is_an_error() {
    let (map, hub, ..) = three_stop_map();
    let ghost = loc("nowhere");
    assert!(matches!(
        map.distance(&ghost, &hub),
        Err(SpatialError::UnknownLocation(_))
    ));
}

#[test]
fn round_trip_closes_the_tour() {
    let (map, hub, a, b) = three_stop_map();
    // hub → a (3.0) → b (1.5) → hub (5.0)
    let total = map.round_trip(&hub, [&a, &b]).unwrap();
    assert!((total - 9.5).abs() < 1e-6);
}

#[test]
fn round_trip_with_no_stops_is_zero() {
    let (map, hub, ..) = three_stop_map();
    assert_eq!(map.round_trip(&hub, []).unwrap(), 0.0);
}
