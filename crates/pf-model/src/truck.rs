//! The truck: its declared characteristics, mutable run state, and the
//! snapshot type its status log records.
//!
//! Movement arithmetic (leg distances, arrival minutes) lives in `pf-sim`,
//! which owns the hub context a truck moves through; this module is the
//! data and the two-state machine.

use std::fmt;

use pf_core::{Location, Minute, PackageId, TruckId};

// ── TruckStatus ───────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TruckStatus {
    /// Docked at the hub, idle and loadable.
    AtHub,
    /// Driving its planned route (or heading back empty).
    OutForDeliveries,
}

impl fmt::Display for TruckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AtHub            => "AT_HUB",
            Self::OutForDeliveries => "OUT_FOR_DELIVERIES",
        })
    }
}

// ── Truck ─────────────────────────────────────────────────────────────────────

/// One delivery vehicle.  Created docked at the hub with no packages.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Truck {
    pub id: TruckId,

    /// Maximum number of packages on board at once.
    pub capacity: usize,

    /// Average road speed, miles per hour.  Sole input to arrival arithmetic.
    pub avg_speed_mph: f32,

    /// Fixed per-stop service delay, minutes.  Declared on the fleet
    /// manifest; arrival arithmetic runs on distance and speed alone.
    pub stop_service_min: u32,

    pub status: TruckStatus,

    /// Package ids currently on board, in delivery order once planned.
    pub load: Vec<PackageId>,

    /// Cumulative road miles over the whole day.
    pub miles_traveled: f32,

    /// Every location visited, in visit order (starts with the hub on the
    /// first dispatch).
    pub route_traveled: Vec<Location>,

    /// Where the truck is currently heading, while en route.
    pub next_destination: Option<Location>,

    /// Expected arrival minute at `next_destination`.
    pub arrival_at: Option<Minute>,
}

impl Truck {
    pub fn new(id: TruckId, capacity: usize, avg_speed_mph: f32, stop_service_min: u32) -> Self {
        Self {
            id,
            capacity,
            avg_speed_mph,
            stop_service_min,
            status: TruckStatus::AtHub,
            load: Vec::new(),
            miles_traveled: 0.0,
            route_traveled: Vec::new(),
            next_destination: None,
            arrival_at: None,
        }
    }

    /// `true` while docked at the hub.
    #[inline]
    pub fn is_docked(&self) -> bool {
        self.status == TruckStatus::AtHub
    }

    /// Package slots still free.
    #[inline]
    pub fn remaining_capacity(&self) -> usize {
        self.capacity.saturating_sub(self.load.len())
    }

    /// An owned copy of the truck's loggable state, taken at record time so
    /// later mutation cannot rewrite history.
    pub fn snapshot(&self) -> TruckSnapshot {
        TruckSnapshot {
            status:           self.status,
            miles_traveled:   self.miles_traveled,
            route_traveled:   self.route_traveled.clone(),
            next_destination: self.next_destination.clone(),
            arrival_at:       self.arrival_at,
        }
    }
}

// ── TruckSnapshot ─────────────────────────────────────────────────────────────

/// The status-log record payload for a truck: everything a point-in-time
/// query needs to reconstruct where the truck was and what it was doing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TruckSnapshot {
    pub status: TruckStatus,
    pub miles_traveled: f32,
    pub route_traveled: Vec<Location>,
    pub next_destination: Option<Location>,
    pub arrival_at: Option<Minute>,
}
