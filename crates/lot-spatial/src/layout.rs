//! The fixed geometry of the parking lot.
//!
//! ```text
//!        col  0 1 2 3 4 5 6 7 8 9 ...      14
//! row  0      ← ← ← ← ← ← ← ← ← ← ← ← ← ← ←     exit (0,0)       spawn (0,14)
//! row  1      → → → → → → → → → → → → → → →     spawn (1,0)      exit (1,14)
//! row  2      ↓ ↑ S S S S S T S S S S S ↓ ↑
//! row  3      ↓ ↑ S S S S S T S S S S S ↓ ↑
//! row  4      ↓ ← ← ← ← ← ← ← ← ← ← ← ← ← ←
//! row  5      → → → → → → → → → → → → → → ↑
//!  ...        (pattern repeats for rows 6–9 and 10–11)
//! row 12      ← ← ← ← ← ← ← ← ← ← ← ← ← ← ←     exit (12,0)      spawn (12,14)
//! row 13      → → → → → → → → → → → → → → →     spawn (13,0)     exit (13,14)
//! ```
//!
//! `S` marks a slot, `T` the tree column in the middle of each slot row.
//! Columns 0 and 13 run down, columns 1 and 14 run up.

use lot_core::Cell;

use crate::LaneMarker;

/// Rows that contain parking slots.
pub const SLOT_ROWS: [i32; 6] = [2, 3, 6, 7, 10, 11];

/// First and last slot column (inclusive).
pub const SLOT_COLS: (i32, i32) = (2, 12);

/// Column of each slot row occupied by a tree instead of a slot.
pub const TREE_COL: i32 = 7;

/// Fixed spawn entry cells, visited in this order by the spawn manager.
pub const SPAWN_POINTS: [Cell; 4] = [
    Cell::new(1, 0),
    Cell::new(13, 0),
    Cell::new(0, 14),
    Cell::new(12, 14),
];

/// A physical slot: the cell a parked vehicle stands on and the aisle cell a
/// vehicle must reach before pulling in.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SlotSite {
    pub cell:  Cell,
    pub entry: Cell,
}

/// Dimensions and static rules of the lot.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct LotLayout {
    pub height: i32,
    pub width:  i32,
}

impl Default for LotLayout {
    fn default() -> Self {
        Self::standard()
    }
}

impl LotLayout {
    /// The 14-row × 15-column lot.
    pub const fn standard() -> Self {
        Self { height: 14, width: 15 }
    }

    /// Number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        (self.height * self.width) as usize
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.height).contains(&cell.row) && (0..self.width).contains(&cell.col)
    }

    /// Row-major index of an in-bounds cell.
    #[inline]
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| (cell.row * self.width + cell.col) as usize)
    }

    /// Iterator over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |r| (0..self.width).map(move |c| Cell::new(r, c)))
    }

    /// Every slot in row-major order.  The position in this list is the
    /// slot's `SlotId`.
    pub fn slot_sites(&self) -> Vec<SlotSite> {
        let (first, last) = SLOT_COLS;
        SLOT_ROWS
            .iter()
            .flat_map(|&row| {
                (first..=last)
                    .filter(|&col| col != TREE_COL)
                    .map(move |col| SlotSite {
                        cell:  Cell::new(row, col),
                        entry: Self::entry_for(Cell::new(row, col)),
                    })
            })
            .collect()
    }

    /// Even slot rows are entered from above, odd ones from below.
    #[inline]
    pub fn entry_for(slot: Cell) -> Cell {
        if slot.row % 2 == 0 {
            Cell::new(slot.row - 1, slot.col)
        } else {
            Cell::new(slot.row + 1, slot.col)
        }
    }

    /// Cells where trees stand.  They hold no lane and no slot.
    pub fn tree_cells(&self) -> Vec<Cell> {
        SLOT_ROWS.iter().map(|&r| Cell::new(r, TREE_COL)).collect()
    }

    /// Exit cell for a vehicle at `from`, chosen by quadrant.
    pub fn exit_for(&self, from: Cell) -> Cell {
        let mid_row = self.height / 2;
        let mid_col = self.width / 2;
        let top  = from.row <= mid_row;
        let left = from.col <= mid_col;
        let right = from.col >= mid_col;

        if top && left {
            Cell::new(0, 0)
        } else if top && right {
            Cell::new(1, self.width - 1)
        } else if from.row >= mid_row && right {
            Cell::new(self.height - 1, self.width - 1)
        } else {
            Cell::new(self.height - 2, 0)
        }
    }

    /// Raw lane rule for `cell`, before off-grid directions are masked.
    pub fn lane_rule(&self, cell: Cell) -> LaneMarker {
        let (i, j) = (cell.row, cell.col);
        let last_row = self.height - 1;
        let last_col = self.width - 1;

        LaneMarker {
            up:    (j == 1 || j == last_col) && i != 0,
            right: ((i == 5 || i == 9) && j != last_col) || i == 1 || i == last_row,
            down:  (j == 0 || j == last_col - 1) && i != last_row,
            left:  ((i == 4 || i == 8) && j != 0) || i == 0 || i == last_row - 1,
        }
    }
}
