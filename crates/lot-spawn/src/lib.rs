//! `lot-spawn` — the pending-vehicle queue and the admission policy that
//! feeds it onto the grid.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`queue`]     | `SpawnQueue` — FIFO of vehicles not yet placed           |
//! | [`manager`]   | `SpawnManager` — per-tick admission and replenishment    |
//!
//! # Admission cycle (summary)
//!
//! ```text
//! if 0 < queue.len() <= QUEUE_LOW_WATER:
//!     for entry in SPAWN_POINTS:
//!         roll spawn_probability
//!         pop front → place at spawn_entry (or entry) unless a vehicle is there
//!         remaining -= 1
//!         if remaining > queue.len(): append a fresh vehicle
//! ```
//!
//! The remaining budget counts vehicles still to be admitted over the whole
//! run, so the queue drains to empty once the budget is spent.

pub mod manager;
pub mod queue;


pub use manager::SpawnManager;
pub use queue::SpawnQueue;
