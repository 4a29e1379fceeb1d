//! Spatial-subsystem error type.

use thiserror::Error;

use lot_core::{Cell, LotError};

use crate::Occupant;

/// Errors produced by `lot-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("cell {0} lies outside the grid")]
    OutOfBounds(Cell),

    #[error("{0:?} is already on the grid")]
    AlreadyPlaced(Occupant),

    #[error("{0:?} is not on the grid")]
    NotPlaced(Occupant),
}

impl From<SpatialError> for LotError {
    fn from(e: SpatialError) -> Self {
        match e {
            SpatialError::OutOfBounds(cell) => LotError::OutOfBounds(cell),
            other => LotError::Config(other.to_string()),
        }
    }
}

pub type SpatialResult<T> = Result<T, SpatialError>;
