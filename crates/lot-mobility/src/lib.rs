//! `lot-mobility` — how a vehicle gets from one cell to the next.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`planner`]  | `plan_step` — greedy, lane-constrained choice of one direction  |
//! | [`engine`]   | `step_toward`, `step_into` — execute a move if the cell is clear |
//!
//! # Movement model (greedy, one cell per tick)
//!
//! There is no path search.  Each tick a moving vehicle reads the lane marker
//! under it:
//!
//! 1. Exactly one permitted direction → take it.
//! 2. Several → close the row gap to the target first (until within one
//!    row), then the column gap, falling back to any permitted direction in
//!    the order up → right → down → left.
//!
//! The chosen cell is entered only if no other vehicle stands on it;
//! otherwise the vehicle waits and tries again next tick.  Nothing breaks
//! ties between vehicles that block each other.

pub mod engine;
pub mod planner;

#[cfg(test)]
mod tests;

pub use engine::{StepOutcome, step_into, step_toward};
pub use planner::plan_step;
