//! `lot-core` — foundational types for the `rust_lot` parking-lot simulator.
//!
//! This crate is a dependency of every other `lot-*` crate.  It has no
//! `lot-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `VehicleId`, `SlotId`                                 |
//! | [`cell`]        | `Cell`, `Direction`, Manhattan distance               |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng` (the single simulation RNG)                  |
//! | [`config`]      | `LotConfig` and the fixed admission constants         |
//! | [`error`]       | `LotError`, `LotResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, Direction};
pub use config::LotConfig;
pub use error::{LotError, LotResult};
pub use ids::{SlotId, VehicleId};
pub use rng::SimRng;
pub use time::Tick;
