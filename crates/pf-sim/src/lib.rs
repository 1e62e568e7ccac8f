//! `pf-sim` — the minute-stepped driver of the parcel-fleet simulator.
//!
//! # The tick loop
//!
//! ```text
//! while any package is non-terminal or any truck is en route:
//!   ① Promote  — packages whose hub-availability minute has passed move
//!                Pending → ReadyForPickup (Pending is re-logged every
//!                minute so the timeline stays dense).
//!   ② Trucks   — two sweeps, each in ascending id order:
//!                  load    — the loading policy may fill a docked truck,
//!                            plan its route, and dispatch it;
//!                  advance — an en-route truck arriving at a stop delivers
//!                            the head of its load and aims at the next
//!                            stop (or home); reaching the hub empty it
//!                            docks, becoming loadable next tick.
//!   ③ Advance the clock one minute.
//! ```
//!
//! Everything is synchronous and single-threaded; given the same hub
//! contents the run is fully deterministic.  The [`Hub`] is the explicit
//! context object holding the clock, both entity stores, both status logs,
//! and the distance map — there is no ambient global state.
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`hub`]      | `Hub` context, `HubBuilder`, point-in-time reads  |
//! | [`driver`]   | `Hub::run`, tick orchestration, `RunSummary`      |
//! | [`loading`]  | `LoadDecision` cascade and the loading pass       |
//! | [`route`]    | nearest-neighbor-with-deadlines delivery ordering |
//! | [`transit`]  | dispatch, per-leg arrival arithmetic, docking     |
//! | [`observer`] | `SimObserver` progress hooks                      |
//! | [`error`]    | `SimError`, `SimResult`                           |

pub mod driver;
pub mod error;
pub mod hub;
pub mod loading;
pub mod observer;
pub mod route;
pub mod transit;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use driver::RunSummary;
pub use error::{SimError, SimResult};
pub use hub::{Hub, HubBuilder};
pub use loading::{LoadDecision, loading_decision};
pub use observer::{NoopObserver, SimObserver};
pub use route::plan_delivery_order;
