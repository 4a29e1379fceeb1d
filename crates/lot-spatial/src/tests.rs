//! Unit tests for lot-spatial.
//!
//! Lane expectations are read straight off the layout diagram in `layout.rs`.

#[cfg(test)]
mod layout {
    use lot_core::Cell;

    use crate::LotLayout;

    #[test]
    fn sixty_slots_in_row_major_order() {
        let sites = LotLayout::standard().slot_sites();
        assert_eq!(sites.len(), 60);
        assert_eq!(sites[0].cell, Cell::new(2, 2));
        assert_eq!(sites[5].cell, Cell::new(2, 8)); // column 7 skipped
        assert_eq!(sites[59].cell, Cell::new(11, 12));
        assert!(sites.iter().all(|s| s.cell.col != 7));
    }

    #[test]
    fn entries_face_the_adjacent_aisle() {
        assert_eq!(LotLayout::entry_for(Cell::new(2, 4)), Cell::new(1, 4));
        assert_eq!(LotLayout::entry_for(Cell::new(3, 4)), Cell::new(4, 4));
        assert_eq!(LotLayout::entry_for(Cell::new(10, 9)), Cell::new(9, 9));
        assert_eq!(LotLayout::entry_for(Cell::new(11, 9)), Cell::new(12, 9));
    }

    #[test]
    fn exits_by_quadrant() {
        let l = LotLayout::standard();
        assert_eq!(l.exit_for(Cell::new(3, 3)), Cell::new(0, 0));
        assert_eq!(l.exit_for(Cell::new(3, 10)), Cell::new(1, 14));
        assert_eq!(l.exit_for(Cell::new(10, 10)), Cell::new(13, 14));
        assert_eq!(l.exit_for(Cell::new(10, 3)), Cell::new(12, 0));
    }

    #[test]
    fn midpoint_ties_resolve_in_rule_order() {
        let l = LotLayout::standard();
        assert_eq!(l.exit_for(Cell::new(7, 7)), Cell::new(0, 0));
        assert_eq!(l.exit_for(Cell::new(7, 8)), Cell::new(1, 14));
        assert_eq!(l.exit_for(Cell::new(9, 7)), Cell::new(13, 14));
    }

    #[test]
    fn index_of_rejects_off_grid() {
        let l = LotLayout::standard();
        assert_eq!(l.index_of(Cell::new(0, 0)), Some(0));
        assert_eq!(l.index_of(Cell::new(1, 0)), Some(15));
        assert_eq!(l.index_of(Cell::new(-1, 0)), None);
        assert_eq!(l.index_of(Cell::new(0, 15)), None);
        assert_eq!(l.index_of(Cell::new(14, 0)), None);
    }
}

#[cfg(test)]
mod lanes {
    use lot_core::{Cell, Direction};

    use crate::{LaneTable, LotLayout};

    fn table() -> LaneTable {
        LaneTable::build(LotLayout::standard())
    }

    #[test]
    fn spawn_cells() {
        let t = table();
        let m = t.marker(Cell::new(1, 0));
        assert!(m.down && m.right && !m.up && !m.left);
        assert_eq!(t.marker(Cell::new(13, 0)).forced(), Some(Direction::Right));
        assert_eq!(t.marker(Cell::new(0, 14)).forced(), Some(Direction::Left));
        let m = t.marker(Cell::new(12, 14));
        assert!(m.up && m.left);
        assert_eq!(m.option_count(), 2);
    }

    #[test]
    fn off_grid_directions_are_masked() {
        let t = table();
        // Rule says down + left; left would leave the grid.
        assert_eq!(t.marker(Cell::new(0, 0)).forced(), Some(Direction::Down));
        // Rule says up + right; right would leave the grid.
        assert_eq!(t.marker(Cell::new(1, 14)).forced(), Some(Direction::Up));
        assert!(!t.marker(Cell::new(13, 14)).right);
    }

    #[test]
    fn slots_and_trees_are_closed() {
        let t = table();
        assert_eq!(t.marker(Cell::new(2, 2)).option_count(), 0);
        assert_eq!(t.marker(Cell::new(6, 7)).option_count(), 0);
        assert_eq!(t.marker(Cell::new(-3, 2)).option_count(), 0);
    }

    #[test]
    fn aisle_directions() {
        let t = table();
        assert_eq!(t.marker(Cell::new(4, 6)).forced(), Some(Direction::Left));
        assert_eq!(t.marker(Cell::new(5, 6)).forced(), Some(Direction::Right));
        assert_eq!(t.marker(Cell::new(3, 0)).forced(), Some(Direction::Down));
        assert_eq!(t.marker(Cell::new(3, 14)).forced(), Some(Direction::Up));
        // Column 1 crossing row 1: up and right.
        let m = t.marker(Cell::new(1, 1));
        assert!(m.up && m.right);
    }

    #[test]
    fn directions_follow_priority_order() {
        let t = table();
        let dirs: Vec<_> = t.marker(Cell::new(4, 13)).directions().collect();
        assert_eq!(dirs, vec![Direction::Down, Direction::Left]);
    }
}

#[cfg(test)]
mod grid {
    use lot_core::{Cell, SlotId, VehicleId};

    use crate::{Grid, LotLayout, Occupant, SpatialError};

    fn grid() -> Grid {
        Grid::new(LotLayout::standard())
    }

    #[test]
    fn place_and_query() {
        let mut g = grid();
        let cell = Cell::new(2, 2);
        g.place(Occupant::Slot(SlotId(0)), cell).unwrap();
        g.place(Occupant::Vehicle(VehicleId(4)), cell).unwrap();

        let view = g.contents(cell).unwrap();
        assert_eq!(view.slot, Some(SlotId(0)));
        assert_eq!(view.vehicles, &[VehicleId(4)]);
        assert_eq!(g.vehicle_at(cell), Some(VehicleId(4)));
        assert!(!g.is_clear(cell));
        assert_eq!(g.vehicle_count(), 1);
    }

    #[test]
    fn move_updates_both_cells() {
        let mut g = grid();
        let v = Occupant::Vehicle(VehicleId(1));
        g.place(v, Cell::new(1, 0)).unwrap();
        g.move_to(v, Cell::new(1, 1)).unwrap();
        assert!(g.is_clear(Cell::new(1, 0)));
        assert_eq!(g.vehicle_at(Cell::new(1, 1)), Some(VehicleId(1)));
        assert_eq!(g.position(v), Some(Cell::new(1, 1)));
    }

    #[test]
    fn remove_returns_last_cell() {
        let mut g = grid();
        let v = Occupant::Vehicle(VehicleId(1));
        g.place(v, Cell::new(0, 3)).unwrap();
        assert_eq!(g.remove(v).unwrap(), Cell::new(0, 3));
        assert!(g.is_clear(Cell::new(0, 3)));
        assert_eq!(g.position(v), None);
        assert!(matches!(g.remove(v), Err(SpatialError::NotPlaced(_))));
    }

    #[test]
    fn placement_errors() {
        let mut g = grid();
        let v = Occupant::Vehicle(VehicleId(0));
        assert!(matches!(g.place(v, Cell::new(14, 0)), Err(SpatialError::OutOfBounds(_))));
        g.place(v, Cell::new(0, 0)).unwrap();
        assert!(matches!(g.place(v, Cell::new(0, 1)), Err(SpatialError::AlreadyPlaced(_))));
        assert!(matches!(g.move_to(v, Cell::new(0, -1)), Err(SpatialError::OutOfBounds(_))));
    }

    #[test]
    fn off_grid_is_never_clear() {
        let g = grid();
        assert!(!g.is_clear(Cell::new(-1, 0)));
        assert!(g.contents(Cell::new(0, 15)).is_none());
    }
}
