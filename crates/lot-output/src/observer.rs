//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lot_core::Tick;
use lot_sim::{ParkingLot, SimObserver, TickSummary};

use crate::row::{NO_ID, SlotSnapshotRow, TickSummaryRow, VehicleSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes vehicle and slot snapshots and tick
/// summaries to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `lot.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `lot.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, s: &TickSummary) {
        let row = TickSummaryRow {
            tick:                 tick.0,
            active:               s.active as u64,
            queued:               s.queued as u64,
            placed:               s.placed as u64,
            free_slots:           s.free_slots as u64,
            reserved_slots:       s.reserved_slots as u64,
            occupied_slots:       s.occupied_slots as u64,
            remaining_budget:     s.remaining_budget as u64,
            expired_reservations: s.expired_reservations,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, lot: &ParkingLot) {
        let vehicles: Vec<VehicleSnapshotRow> = lot
            .agents
            .vehicles
            .iter()
            .filter(|v| v.is_active())
            .map(|v| {
                let (grid_row, grid_col) = v.position.map_or((-1, -1), |c| (c.row, c.col));
                VehicleSnapshotRow {
                    vehicle_id:      v.id.0,
                    tick:            tick.0,
                    grid_row,
                    grid_col,
                    state:           v.state.as_str(),
                    has_reservation: v.has_reservation,
                    is_bad_agent:    v.is_bad_agent,
                    target_slot:     v.target_slot.map_or(NO_ID, |s| s.0),
                }
            })
            .collect();

        let slots: Vec<SlotSnapshotRow> = lot
            .agents
            .slots
            .iter()
            .map(|s| SlotSnapshotRow {
                slot_id:        s.id.0,
                tick:           tick.0,
                grid_row:       s.cell.row,
                grid_col:       s.cell.col,
                status:         s.status.code(),
                reserved_ticks: s.reserved_ticks,
                holder:         s.holder.map_or(NO_ID, |h| h.0),
            })
            .collect();

        if !vehicles.is_empty() {
            let result = self.writer.write_vehicle_snapshots(&vehicles);
            self.store_err(result);
        }
        if !slots.is_empty() {
            let result = self.writer.write_slot_snapshots(&slots);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
