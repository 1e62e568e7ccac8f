//! smallday — smallest example for the parcel-fleet simulator.
//!
//! One depot, two 16-slot trucks, a dozen packages across a synthetic
//! 7-stop street grid: three with morning deadlines, one reaching the hub
//! late, one pinned to truck 2, and a three-package delivery group.  Swap
//! the embedded manifest for a real city's distance table to run a full
//! depot day.
//!
//! Set `RUST_LOG=pf_sim=debug` to watch individual dispatches and legs.

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

use pf_core::{GroupId, Location, Minute, PackageId, TruckId};
use pf_model::{Package, Truck};
use pf_sim::{HubBuilder, SimObserver};
use pf_spatial::DistanceMap;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:           u64 = 42;
const OPEN:           (u16, u16) = (8, 0); // depot opens 08:00
const TRUCK_CAPACITY: usize = 16;
const TRUCK_MPH:      f32 = 18.0;

/// Stops on a planar mile grid; index 0 is the depot.
const STOPS: &[(&str, f32, f32)] = &[
    ("4001 South 700 East",    0.0, 0.0),
    ("195 W Oakland Ave",      2.5, 1.0),
    ("2010 W 500 S",           1.0, 3.0),
    ("1330 2100 S",            3.5, 3.5),
    ("300 State St",           5.0, 1.5),
    ("3595 Main St",           1.5, 5.5),
    ("600 E 900 South",        4.0, 5.0),
];

// ── Street grid ───────────────────────────────────────────────────────────────

/// Build the all-pairs distance table from the grid coordinates, rounded
/// to tenths of a mile like a printed distance matrix.
fn build_distances() -> (DistanceMap, Vec<Location>) {
    let addresses: Vec<Location> = STOPS
        .iter()
        .map(|&(street, _, _)| Location::new(street, "Salt Lake City", "UT", "84107"))
        .collect();

    let mut distances = DistanceMap::new();
    for (i, &(_, xa, ya)) in STOPS.iter().enumerate() {
        for (j, &(_, xb, yb)) in STOPS.iter().enumerate().skip(i + 1) {
            let miles = (((xa - xb).powi(2) + (ya - yb).powi(2)).sqrt() * 10.0).round() / 10.0;
            distances.insert_symmetric(addresses[i].clone(), addresses[j].clone(), miles);
        }
    }
    (distances, addresses)
}

// ── Console observer ──────────────────────────────────────────────────────────

/// Prints one line per dispatch and per delivery.
#[derive(Default)]
struct ConsoleObserver;

impl SimObserver for ConsoleObserver {
    fn on_truck_dispatched(&mut self, truck: TruckId, now: Minute, stops: usize) {
        println!("{now}  {truck} departs with {stops} packages");
    }

    fn on_package_delivered(&mut self, package: PackageId, truck: TruckId, now: Minute, late: bool) {
        let tag = if late { "  ** LATE **" } else { "" };
        println!("{now}  {truck} delivers {package}{tag}");
    }

    fn on_truck_docked(&mut self, truck: TruckId, now: Minute) {
        println!("{now}  {truck} back at the depot");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== smallday — parcel-fleet simulator ===");
    println!("Trucks: 2 × {TRUCK_CAPACITY} slots @ {TRUCK_MPH} mph  |  Seed: {SEED}");
    println!();

    // 1. Street grid and distance table.
    let (distances, addresses) = build_distances();
    let depot = addresses[0].clone();
    println!("Distance table: {} addresses", distances.len());

    // 2. The day's manifest.  Masses are randomized; everything that
    //    drives the simulation is fixed.
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut mass = |_: u32| rng.gen_range(0.5..20.0f32);

    let open = Minute::hm(OPEN.0, OPEN.1);
    let packages = vec![
        // Morning deadlines.
        Package::new(PackageId(1), addresses[1].clone(), None, Some(Minute::hm(9, 0)), mass(1)),
        Package::new(PackageId(2), addresses[2].clone(), None, Some(Minute::hm(10, 30)), mass(2)),
        Package::new(PackageId(3), addresses[3].clone(), None, Some(Minute::hm(10, 30)), mass(3)),
        // A three-stop delivery group.
        Package::new(PackageId(4), addresses[4].clone(), None, None, mass(4)).in_group(GroupId(1)),
        Package::new(PackageId(5), addresses[4].clone(), None, None, mass(5)).in_group(GroupId(1)),
        Package::new(PackageId(6), addresses[5].clone(), None, None, mass(6)).in_group(GroupId(1)),
        // Pinned to truck 2.
        Package::new(PackageId(7), addresses[6].clone(), None, None, mass(7)).requiring_truck(TruckId(2)),
        // On a delayed inbound flight; reaches the hub mid-morning.
        Package::new(PackageId(8), addresses[2].clone(), Some(Minute::hm(9, 5)), Some(Minute::hm(10, 30)), mass(8)),
        // Unconstrained fill.
        Package::new(PackageId(9), addresses[3].clone(), None, None, mass(9)),
        Package::new(PackageId(10), addresses[5].clone(), None, None, mass(10)),
        Package::new(PackageId(11), addresses[6].clone(), None, None, mass(11)),
        Package::new(PackageId(12), addresses[1].clone(), None, None, mass(12)),
    ];
    println!("Manifest: {} packages", packages.len());
    println!();

    // 3. Assemble the hub.
    let mut builder = HubBuilder::new("SLC DEPOT", depot, open)
        .distances(distances)
        .truck(Truck::new(TruckId(1), TRUCK_CAPACITY, TRUCK_MPH, 2))
        .truck(Truck::new(TruckId(2), TRUCK_CAPACITY, TRUCK_MPH, 2));
    for package in packages {
        builder = builder.package(package);
    }
    let mut hub = builder.build()?;

    // 4. Run the day.
    let mut observer = ConsoleObserver::default();
    let summary = hub.run(&mut observer)?;

    println!();
    println!("Day done in {} simulated minutes", summary.ticks);
    println!(
        "Delivered: {} on time, {} late  |  Fleet miles: {:.1}",
        summary.delivered, summary.delivered_late, summary.total_miles
    );
    println!();

    // 5. Point-in-time queries against the status logs.
    for &(h, m) in &[(8, 30), (9, 30), (10, 30)] {
        let at = Minute::hm(h, m);
        println!("-- status at {at} --");
        for id in hub.packages.ids() {
            let status = hub.package_status_at(id, at)?;
            println!("  {id}: {status}");
        }
        for id in hub.trucks.ids() {
            let snapshot = hub.truck_snapshot_at(id, at)?;
            println!("  {id}: {} ({:.1} mi)", snapshot.status, snapshot.miles_traveled);
        }
    }

    Ok(())
}
