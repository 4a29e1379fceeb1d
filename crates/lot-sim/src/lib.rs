//! `lot-sim` — the step scheduler for the rust_lot parking simulator.
//!
//! # One tick
//!
//! ```text
//! clock += 1
//!   ① Slots     — in SlotId order: expiry, then occupancy / takeover.
//!   ② Lanes     — static; nothing to do.
//!   ③ Vehicles  — in VehicleId order: one state-machine step each.
//!                 Vehicles reporting Exit are retired by the scheduler.
//!   ④ Spawn     — admission round and queue replenishment.
//! ```
//!
//! Every phase works on live state.  A vehicle stepped later in ③ sees the
//! moves of every vehicle stepped before it, and a slot in ① sees the grid
//! as the previous tick left it.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lot_core::LotConfig;
//! use lot_sim::{LotBuilder, NoopObserver};
//!
//! let mut lot = LotBuilder::new(LotConfig::default()).build()?;
//! lot.run(&mut NoopObserver);
//! println!("{:.2}", lot.stats.mean_unreserved());
//! ```

pub mod builder;
pub mod error;
pub mod lot;
pub mod observer;
pub mod summary;


pub use builder::LotBuilder;
pub use error::{SimError, SimResult};
pub use lot::ParkingLot;
pub use observer::{NoopObserver, SimObserver};
pub use summary::TickSummary;
