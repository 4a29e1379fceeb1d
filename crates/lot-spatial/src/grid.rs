//! Multi-occupancy grid: which vehicle and which slot stand on each cell.
//!
//! A cell normally holds one slot indicator (if it is a parking space) and at
//! most one vehicle.  The grid itself does not enforce the one-vehicle rule;
//! movers ask [`Grid::is_clear`] before every move.  Agents are identified by
//! their typed handles, so cell contents are read through [`CellView`] rather
//! than by inspecting agent types at runtime.

use std::collections::HashMap;

use lot_core::{Cell, SlotId, VehicleId};

use crate::{LaneMarker, LaneTable, LotLayout, SpatialError, SpatialResult};

/// An agent that physically occupies a cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Occupant {
    Vehicle(VehicleId),
    Slot(SlotId),
}

#[derive(Clone, Debug, Default)]
struct CellContents {
    vehicles: Vec<VehicleId>,
    slot:     Option<SlotId>,
}

/// Read-only view of one cell.
#[derive(Copy, Clone, Debug)]
pub struct CellView<'a> {
    pub vehicles: &'a [VehicleId],
    pub slot:     Option<SlotId>,
    pub lane:     LaneMarker,
}

/// The lot grid.
///
/// `cells` is dense and row-major; `positions` maps every placed agent back
/// to its cell so `remove` and `move_to` need no search.
#[derive(Clone, Debug)]
pub struct Grid {
    layout:    LotLayout,
    lanes:     LaneTable,
    cells:     Vec<CellContents>,
    positions: HashMap<Occupant, Cell>,
}

impl Grid {
    /// An empty grid for `layout`, with its lane table built.
    pub fn new(layout: LotLayout) -> Self {
        Self {
            layout,
            lanes:     LaneTable::build(layout),
            cells:     vec![CellContents::default(); layout.cell_count()],
            positions: HashMap::new(),
        }
    }

    #[inline]
    pub fn layout(&self) -> LotLayout {
        self.layout
    }

    /// Lane marker at `cell` (closed off-grid).
    #[inline]
    pub fn lane(&self, cell: Cell) -> LaneMarker {
        self.lanes.marker(cell)
    }

    /// Contents of `cell`, or `None` off-grid.
    pub fn contents(&self, cell: Cell) -> Option<CellView<'_>> {
        let i = self.layout.index_of(cell)?;
        let c = &self.cells[i];
        Some(CellView {
            vehicles: &c.vehicles,
            slot:     c.slot,
            lane:     self.lanes.marker(cell),
        })
    }

    /// The vehicle standing on `cell`, if any.
    #[inline]
    pub fn vehicle_at(&self, cell: Cell) -> Option<VehicleId> {
        self.contents(cell).and_then(|v| v.vehicles.first().copied())
    }

    /// The slot at `cell`, if it is a parking space.
    #[inline]
    pub fn slot_at(&self, cell: Cell) -> Option<SlotId> {
        self.contents(cell).and_then(|v| v.slot)
    }

    /// `true` if `cell` is on the grid and no vehicle stands on it.
    #[inline]
    pub fn is_clear(&self, cell: Cell) -> bool {
        self.contents(cell).is_some_and(|v| v.vehicles.is_empty())
    }

    /// Current cell of a placed agent.
    #[inline]
    pub fn position(&self, agent: Occupant) -> Option<Cell> {
        self.positions.get(&agent).copied()
    }

    /// Number of vehicles currently on the grid.
    pub fn vehicle_count(&self) -> usize {
        self.positions
            .keys()
            .filter(|o| matches!(o, Occupant::Vehicle(_)))
            .count()
    }

    /// Put `agent` on `cell`.
    pub fn place(&mut self, agent: Occupant, cell: Cell) -> SpatialResult<()> {
        if self.positions.contains_key(&agent) {
            return Err(SpatialError::AlreadyPlaced(agent));
        }
        let i = self.layout.index_of(cell).ok_or(SpatialError::OutOfBounds(cell))?;
        self.insert_at(i, agent);
        self.positions.insert(agent, cell);
        Ok(())
    }

    /// Move a placed agent to `cell`.  Occupancy is the caller's concern.
    pub fn move_to(&mut self, agent: Occupant, cell: Cell) -> SpatialResult<()> {
        let to = self.layout.index_of(cell).ok_or(SpatialError::OutOfBounds(cell))?;
        let from = self.position(agent).ok_or(SpatialError::NotPlaced(agent))?;
        if let Some(i) = self.layout.index_of(from) {
            self.erase_at(i, agent);
        }
        self.insert_at(to, agent);
        self.positions.insert(agent, cell);
        Ok(())
    }

    /// Take `agent` off the grid, returning the cell it stood on.
    pub fn remove(&mut self, agent: Occupant) -> SpatialResult<Cell> {
        let cell = self.positions.remove(&agent).ok_or(SpatialError::NotPlaced(agent))?;
        if let Some(i) = self.layout.index_of(cell) {
            self.erase_at(i, agent);
        }
        Ok(cell)
    }

    fn insert_at(&mut self, i: usize, agent: Occupant) {
        match agent {
            Occupant::Vehicle(v) => self.cells[i].vehicles.push(v),
            Occupant::Slot(s)    => self.cells[i].slot = Some(s),
        }
    }

    fn erase_at(&mut self, i: usize, agent: Occupant) {
        match agent {
            Occupant::Vehicle(v) => self.cells[i].vehicles.retain(|&x| x != v),
            Occupant::Slot(s) => {
                if self.cells[i].slot == Some(s) {
                    self.cells[i].slot = None;
                }
            }
        }
    }
}
