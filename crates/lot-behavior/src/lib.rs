//! `lot-behavior` — the per-tick transitions of slots and vehicles.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                   |
//! |-------------------|------------------------------------------------------------|
//! | [`context`]       | `World<'a>` — mutable view of the lot threaded through every transition |
//! | [`reservation`]   | nearest-slot search and `reserve_nearest`                  |
//! | [`slot`]          | `step_slot` — expiry, then occupancy / takeover            |
//! | [`vehicle`]       | `step_vehicle`, `retire_vehicle` — the vehicle state machine |
//! | [`stats`]         | `ParkStats` — latency samples and expired-reservation count |
//!
//! # Design notes
//!
//! Transitions run sequentially against live state.  An agent stepped later
//! in the tick sees every move already made by agents stepped before it; the
//! scheduler in `lot-sim` fixes that order (slots, then vehicles, each in
//! registration order).  Nothing here allocates a snapshot.
//!
//! No transition fails.  Blocked moves are retried next tick, a vehicle that
//! finds no slot heads for an exit, and reservation holders that have
//! already exited are skipped.

pub mod context;
pub mod reservation;
pub mod slot;
pub mod stats;
pub mod vehicle;


pub use context::World;
pub use reservation::{nearest_slot, reserve_nearest};
pub use slot::step_slot;
pub use stats::ParkStats;
pub use vehicle::{Transition, retire_vehicle, step_vehicle};
