//! Per-tick headline numbers.

use lot_core::Tick;

/// Counts taken at the end of a tick, handed to
/// [`SimObserver::on_tick_end`][crate::SimObserver::on_tick_end].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSummary {
    pub tick: Tick,

    /// Vehicles not yet exited, queued ones included.
    pub active: usize,

    /// Vehicles waiting in the spawn queue.
    pub queued: usize,

    /// Vehicles standing on the grid.
    pub placed: usize,

    pub free_slots:     usize,
    pub reserved_slots: usize,
    pub occupied_slots: usize,

    /// Vehicles still to be admitted over the rest of the run.
    pub remaining_budget: usize,

    /// Reservations that have timed out so far.
    pub expired_reservations: u64,
}
