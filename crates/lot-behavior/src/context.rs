//! Mutable simulation state passed to every transition.

use lot_agent::AgentStore;
use lot_spatial::Grid;

use crate::ParkStats;

/// The parts of the lot a transition may read and write.
///
/// Built by `lot-sim` from disjoint field borrows of `ParkingLot` and
/// handed, in turn, to each slot and vehicle of the tick.  There is no other
/// shared state.
pub struct World<'a> {
    pub grid: &'a mut Grid,

    pub agents: &'a mut AgentStore,

    pub stats: &'a mut ParkStats,

    /// Ticks a new reservation is held.
    pub holding_ticks: i32,
}

impl<'a> World<'a> {
    #[inline]
    pub fn new(
        grid:          &'a mut Grid,
        agents:        &'a mut AgentStore,
        stats:         &'a mut ParkStats,
        holding_ticks: i32,
    ) -> Self {
        Self { grid, agents, stats, holding_ticks }
    }
}
