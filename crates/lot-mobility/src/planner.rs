//! Greedy direction choice.

use lot_core::{Cell, Direction};
use lot_spatial::LaneMarker;

/// Direction a vehicle at `from` should take toward `target` given the lane
/// marker under it.  `None` when the marker permits nothing.
pub fn plan_step(lane: LaneMarker, from: Cell, target: Cell) -> Option<Direction> {
    if let Some(dir) = lane.forced() {
        return Some(dir);
    }

    let preferred = if from.row.abs_diff(target.row) > 1 {
        row_phase(lane, from, target)
    } else {
        column_phase(lane, from, target)
    };

    preferred.or_else(|| lane.directions().next())
}

fn row_phase(lane: LaneMarker, from: Cell, target: Cell) -> Option<Direction> {
    if from.row < target.row && lane.down {
        Some(Direction::Down)
    } else if from.row > target.row && lane.up {
        Some(Direction::Up)
    } else {
        lane.directions().find(|d| d.is_vertical())
    }
}

fn column_phase(lane: LaneMarker, from: Cell, target: Cell) -> Option<Direction> {
    if from.col < target.col && lane.right {
        Some(Direction::Right)
    } else if from.col > target.col && lane.left {
        Some(Direction::Left)
    } else {
        None
    }
}
