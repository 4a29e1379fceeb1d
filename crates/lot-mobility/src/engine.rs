//! Executing moves on the grid.

use lot_core::{Cell, VehicleId};
use lot_spatial::{Grid, Occupant};

use crate::plan_step;

/// Result of one movement attempt.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// The vehicle now stands on this cell.
    Moved(Cell),
    /// The chosen cell holds another vehicle (or lies off-grid); stay put.
    Blocked(Cell),
    /// The lane under the vehicle permits no direction.
    NoLane,
}

impl StepOutcome {
    #[inline]
    pub fn moved(self) -> bool {
        matches!(self, StepOutcome::Moved(_))
    }
}

/// Plan one lane-constrained step from `from` toward `target` and take it if
/// the destination is clear.
pub fn step_toward(grid: &mut Grid, vehicle: VehicleId, from: Cell, target: Cell) -> StepOutcome {
    match plan_step(grid.lane(from), from, target) {
        Some(dir) => step_into(grid, vehicle, from.step(dir)),
        None      => StepOutcome::NoLane,
    }
}

/// Move `vehicle` onto `to` if no other vehicle stands there.  Lanes are not
/// consulted; used for pulling into and out of slots.
pub fn step_into(grid: &mut Grid, vehicle: VehicleId, to: Cell) -> StepOutcome {
    if !grid.is_clear(to) {
        return StepOutcome::Blocked(to);
    }
    match grid.move_to(Occupant::Vehicle(vehicle), to) {
        Ok(())  => StepOutcome::Moved(to),
        Err(_)  => StepOutcome::Blocked(to),
    }
}
