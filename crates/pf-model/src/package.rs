//! The package lifecycle.
//!
//! ```text
//! Pending → ReadyForPickup → OutForDelivery → Delivered
//!                                           ↘ DeliveredLate
//! ```
//!
//! No transition skips a state and the two `Delivered*` states are terminal.
//! The transition methods assert legality: an illegal transition means the
//! loading policy or the truck advancement produced an inconsistent state,
//! which is a programming error, not a recoverable condition.

use std::fmt;

use pf_core::{GroupId, Location, Minute, PackageId, TruckId};

// ── PackageStatus ─────────────────────────────────────────────────────────────

/// Where a package is in its delivery lifecycle.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PackageStatus {
    /// Declared on the manifest but not yet at the hub.
    Pending,
    /// At the hub, waiting for a truck.
    ReadyForPickup,
    /// On a truck.
    OutForDelivery,
    /// Dropped at its destination on time.
    Delivered,
    /// Dropped at its destination after its deadline.
    DeliveredLate,
}

impl PackageStatus {
    /// Terminal states never transition again.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::DeliveredLate)
    }

    /// Still at the hub (physically or on paper) and in need of a truck.
    #[inline]
    pub fn needs_delivery(self) -> bool {
        matches!(self, Self::Pending | Self::ReadyForPickup)
    }
}

impl fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pending        => "PENDING",
            Self::ReadyForPickup => "READY_FOR_PICKUP",
            Self::OutForDelivery => "OUT_FOR_DELIVERY",
            Self::Delivered      => "DELIVERED",
            Self::DeliveredLate  => "DELIVERED_LATE",
        };
        f.write_str(name)
    }
}

// ── Package ───────────────────────────────────────────────────────────────────

/// One parcel on the day's manifest.
///
/// Created once at load time in `Pending`; mutated only through the
/// transition methods below; never destroyed during a run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    pub id: PackageId,
    pub destination: Location,

    /// Earliest minute the package is physically at the hub.
    /// `None` — available from the open of day.
    pub available_at: Option<Minute>,

    /// Delivery deadline.  `None` — no time constraint.
    pub deadline: Option<Minute>,

    pub mass_kg: f32,

    /// Pins the package to one specific truck, if set.
    pub required_truck: Option<TruckId>,

    /// Packages sharing a group must board the same truck in the same
    /// loading pass.
    pub group: Option<GroupId>,

    pub status: PackageStatus,

    /// The truck this package was loaded onto, once `OutForDelivery`.
    pub assigned_truck: Option<TruckId>,
}

impl Package {
    pub fn new(
        id: PackageId,
        destination: Location,
        available_at: Option<Minute>,
        deadline: Option<Minute>,
        mass_kg: f32,
    ) -> Self {
        Self {
            id,
            destination,
            available_at,
            deadline,
            mass_kg,
            required_truck: None,
            group: None,
            status: PackageStatus::Pending,
            assigned_truck: None,
        }
    }

    /// Builder-style: pin to a specific truck.
    pub fn requiring_truck(mut self, truck: TruckId) -> Self {
        self.required_truck = Some(truck);
        self
    }

    /// Builder-style: join a delivery group.
    pub fn in_group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }

    /// `true` once `now` has reached the hub-availability minute.
    #[inline]
    pub fn is_available(&self, now: Minute) -> bool {
        self.available_at.is_none_or(|at| at <= now)
    }

    /// `true` while waiting at the hub for a truck.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.status == PackageStatus::ReadyForPickup
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// `Pending → ReadyForPickup`, driven by the clock reaching
    /// `available_at`.
    pub fn mark_ready(&mut self) {
        debug_assert_eq!(self.status, PackageStatus::Pending);
        self.status = PackageStatus::ReadyForPickup;
    }

    /// `ReadyForPickup → OutForDelivery`, driven by the loading policy.
    pub fn load_onto(&mut self, truck: TruckId) {
        debug_assert_eq!(self.status, PackageStatus::ReadyForPickup);
        debug_assert!(
            self.required_truck.is_none_or(|required| required == truck),
            "package {} loaded onto a truck it is not pinned to",
            self.id
        );
        self.status = PackageStatus::OutForDelivery;
        self.assigned_truck = Some(truck);
    }

    /// `OutForDelivery → Delivered | DeliveredLate`, driven by the truck
    /// reaching the destination.  Late iff a deadline is set and the
    /// delivery minute is strictly after it.
    pub fn mark_delivered(&mut self, now: Minute) {
        debug_assert_eq!(self.status, PackageStatus::OutForDelivery);
        let late = self.deadline.is_some_and(|deadline| deadline < now);
        self.status = if late {
            PackageStatus::DeliveredLate
        } else {
            PackageStatus::Delivered
        };
    }
}
