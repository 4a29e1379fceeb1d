//! `lot-spatial` — lot geometry, lane rules, and the spatial grid.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`layout`]  | `LotLayout` — fixed dimensions, slots, entries, exits        |
//! | [`lane`]    | `LaneMarker`, `LaneTable` — static per-cell direction masks  |
//! | [`grid`]    | `Grid`, `Occupant`, `CellView` — who is standing where       |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                           |
//!
//! The lane table is built once from the layout and never mutated.  The grid
//! owns it and exposes it through [`Grid::lane`] so that movement code reads
//! one structure for both "where may I go" and "is anybody there".

pub mod error;
pub mod grid;
pub mod lane;
pub mod layout;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use grid::{CellView, Grid, Occupant};
pub use lane::{LaneMarker, LaneTable};
pub use layout::{LotLayout, SlotSite};
