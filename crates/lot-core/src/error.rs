//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert them into
//! `LotError` via `From` impls or wrap `LotError` as one variant.

use thiserror::Error;

use crate::{Cell, SlotId, VehicleId};

/// The top-level error type for `lot-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LotError {
    #[error("vehicle {0} not found")]
    VehicleNotFound(VehicleId),

    #[error("slot {0} not found")]
    SlotNotFound(SlotId),

    #[error("cell {0} lies outside the lot")]
    OutOfBounds(Cell),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `lot-*` crates.
pub type LotResult<T> = Result<T, LotError>;
