//! `lot-agent` — agent records and storage for the `rust_lot` simulator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`slot`]      | `Slot`, `SlotStatus` — parking indicator + reservation    |
//! | [`vehicle`]   | `Vehicle`, `VehicleState` — per-vehicle record            |
//! | [`store`]     | `AgentStore` — central table indexed by typed handles     |
//!
//! Slots and vehicles never own each other.  A slot's reservation holder and
//! a vehicle's target slot are plain `VehicleId` / `SlotId` handles into the
//! `AgentStore`, which keeps every record for the whole run (exited vehicles
//! stay in the table with state `Exited`), so a handle never dangles into
//! freed memory.

pub mod slot;
pub mod store;
pub mod vehicle;


pub use slot::{Slot, SlotStatus};
pub use store::{AgentStore, SlotCounts};
pub use vehicle::{Vehicle, VehicleState};
