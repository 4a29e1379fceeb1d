//! Static per-cell lane markers.
//!
//! Each cell carries a mask of the directions a vehicle standing on it may
//! move in.  A marker with exactly one option forces the move; with more
//! than one the vehicle steers toward its target.  Cells with no options
//! (slots, trees, the space between aisles) are never entered by lane
//! movement.

use lot_core::{Cell, Direction};

use crate::LotLayout;

/// Permitted directions out of one cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneMarker {
    pub up:    bool,
    pub right: bool,
    pub down:  bool,
    pub left:  bool,
}

impl LaneMarker {
    /// A marker that permits nothing.
    pub const CLOSED: LaneMarker = LaneMarker { up: false, right: false, down: false, left: false };

    #[inline]
    pub fn allows(self, dir: Direction) -> bool {
        match dir {
            Direction::Up    => self.up,
            Direction::Right => self.right,
            Direction::Down  => self.down,
            Direction::Left  => self.left,
        }
    }

    /// Number of permitted directions (0–4).
    #[inline]
    pub fn option_count(self) -> u8 {
        self.up as u8 + self.right as u8 + self.down as u8 + self.left as u8
    }

    /// Permitted directions in priority order up → right → down → left.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.allows(d))
    }

    /// The single permitted direction, if the move is forced.
    #[inline]
    pub fn forced(self) -> Option<Direction> {
        if self.option_count() == 1 { self.directions().next() } else { None }
    }

    fn without(mut self, dir: Direction) -> Self {
        match dir {
            Direction::Up    => self.up = false,
            Direction::Right => self.right = false,
            Direction::Down  => self.down = false,
            Direction::Left  => self.left = false,
        }
        self
    }
}

/// Immutable table of lane markers for every cell of the lot.
#[derive(Clone, Debug)]
pub struct LaneTable {
    layout:  LotLayout,
    markers: Vec<LaneMarker>,
}

impl LaneTable {
    /// Evaluate the layout's lane rules for every cell.  Directions that
    /// would step off the grid are masked off; tree cells stay closed.
    pub fn build(layout: LotLayout) -> Self {
        let trees = layout.tree_cells();
        let markers = layout
            .cells()
            .map(|cell| {
                if trees.contains(&cell) {
                    return LaneMarker::CLOSED;
                }
                Direction::ALL.into_iter().fold(layout.lane_rule(cell), |m, dir| {
                    if layout.contains(cell.step(dir)) { m } else { m.without(dir) }
                })
            })
            .collect();
        Self { layout, markers }
    }

    /// Marker at `cell`.  Off-grid cells are closed.
    #[inline]
    pub fn marker(&self, cell: Cell) -> LaneMarker {
        self.layout
            .index_of(cell)
            .map_or(LaneMarker::CLOSED, |i| self.markers[i])
    }

    pub fn layout(&self) -> LotLayout {
        self.layout
    }
}
