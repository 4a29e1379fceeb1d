//! Unit tests for lot-mobility.

use lot_core::{Cell, VehicleId};
use lot_spatial::{Grid, LaneTable, LotLayout, Occupant};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn lanes() -> LaneTable {
    LaneTable::build(LotLayout::standard())
}

fn grid_with(vehicles: &[(u32, Cell)]) -> Grid {
    let mut g = Grid::new(LotLayout::standard());
    for &(id, cell) in vehicles {
        g.place(Occupant::Vehicle(VehicleId(id)), cell).unwrap();
    }
    g
}

// ── plan_step ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use lot_core::Direction;
    use lot_spatial::LaneMarker;

    use super::*;
    use crate::plan_step;

    fn plan(from: Cell, target: Cell) -> Option<Direction> {
        plan_step(lanes().marker(from), from, target)
    }

    #[test]
    fn forced_lane_ignores_target() {
        assert_eq!(plan(Cell::new(5, 6), Cell::new(0, 0)), Some(Direction::Right));
        assert_eq!(plan(Cell::new(4, 6), Cell::new(13, 14)), Some(Direction::Left));
    }

    #[test]
    fn closes_row_gap_first() {
        // (1,0) permits down and right; target is four rows below.
        assert_eq!(plan(Cell::new(1, 0), Cell::new(5, 3)), Some(Direction::Down));
        // (12,14) permits up and left; target is three rows above.
        assert_eq!(plan(Cell::new(12, 14), Cell::new(9, 4)), Some(Direction::Up));
    }

    #[test]
    fn row_phase_falls_back_to_any_vertical() {
        // (4,13) permits down and left; target lies above but up is illegal.
        assert_eq!(plan(Cell::new(4, 13), Cell::new(1, 5)), Some(Direction::Down));
    }

    #[test]
    fn column_phase_within_one_row() {
        assert_eq!(plan(Cell::new(1, 0), Cell::new(1, 2)), Some(Direction::Right));
        assert_eq!(plan(Cell::new(1, 0), Cell::new(2, 6)), Some(Direction::Right));
        assert_eq!(plan(Cell::new(4, 13), Cell::new(4, 3)), Some(Direction::Left));
    }

    #[test]
    fn column_phase_falls_back_in_priority_order() {
        // (1,1) permits up and right; target is to the left.
        assert_eq!(plan(Cell::new(1, 1), Cell::new(1, 0)), Some(Direction::Up));
        // Already on the target column: no column move, so first legal.
        assert_eq!(plan(Cell::new(4, 13), Cell::new(4, 13)), Some(Direction::Down));
    }

    #[test]
    fn row_phase_without_verticals_takes_any_lane() {
        let lane = LaneMarker { up: false, right: true, down: false, left: true };
        let d = plan_step(lane, Cell::new(5, 5), Cell::new(12, 5));
        assert_eq!(d, Some(Direction::Right));
    }

    #[test]
    fn closed_lane_plans_nothing() {
        assert_eq!(plan(Cell::new(2, 2), Cell::new(9, 9)), None);
    }
}

// ── engine ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use super::*;
    use crate::{StepOutcome, step_into, step_toward};

    #[test]
    fn moves_into_clear_cell() {
        let mut g = grid_with(&[(0, Cell::new(1, 0))]);
        let out = step_toward(&mut g, VehicleId(0), Cell::new(1, 0), Cell::new(1, 2));
        assert_eq!(out, StepOutcome::Moved(Cell::new(1, 1)));
        assert_eq!(g.vehicle_at(Cell::new(1, 1)), Some(VehicleId(0)));
        assert!(g.is_clear(Cell::new(1, 0)));
    }

    #[test]
    fn blocked_by_other_vehicle() {
        let mut g = grid_with(&[(0, Cell::new(1, 0)), (1, Cell::new(1, 1))]);
        let out = step_toward(&mut g, VehicleId(0), Cell::new(1, 0), Cell::new(1, 2));
        assert_eq!(out, StepOutcome::Blocked(Cell::new(1, 1)));
        assert_eq!(g.vehicle_at(Cell::new(1, 0)), Some(VehicleId(0)));
        assert!(!out.moved());
    }

    #[test]
    fn no_lane_under_vehicle() {
        let mut g = grid_with(&[(0, Cell::new(2, 2))]);
        let out = step_toward(&mut g, VehicleId(0), Cell::new(2, 2), Cell::new(0, 0));
        assert_eq!(out, StepOutcome::NoLane);
    }

    #[test]
    fn step_into_ignores_lanes_but_not_vehicles() {
        let mut g = grid_with(&[(0, Cell::new(1, 4)), (1, Cell::new(3, 4))]);
        assert!(step_into(&mut g, VehicleId(0), Cell::new(2, 4)).moved());
        assert_eq!(
            step_into(&mut g, VehicleId(0), Cell::new(3, 4)),
            StepOutcome::Blocked(Cell::new(3, 4))
        );
        assert_eq!(
            step_into(&mut g, VehicleId(1), Cell::new(3, -1)),
            StepOutcome::Blocked(Cell::new(3, -1))
        );
    }
}
