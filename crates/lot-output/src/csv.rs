//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `vehicle_snapshots.csv`
//! - `slot_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, SlotSnapshotRow, TickSummaryRow, VehicleSnapshotRow};

pub(crate) const VEHICLE_HEADERS: [&str; 8] = [
    "vehicle_id", "tick", "grid_row", "grid_col", "state", "has_reservation", "is_bad_agent", "target_slot",
];

pub(crate) const SLOT_HEADERS: [&str; 7] = [
    "slot_id", "tick", "grid_row", "grid_col", "status", "reserved_ticks", "holder",
];

pub(crate) const SUMMARY_HEADERS: [&str; 9] = [
    "tick", "active", "queued", "placed", "free_slots", "reserved_slots", "occupied_slots",
    "remaining_budget", "expired_reservations",
];

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    vehicles:  Writer<File>,
    slots:     Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut vehicles = Writer::from_path(dir.join("vehicle_snapshots.csv"))?;
        vehicles.write_record(VEHICLE_HEADERS)?;

        let mut slots = Writer::from_path(dir.join("slot_snapshots.csv"))?;
        slots.write_record(SLOT_HEADERS)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADERS)?;

        Ok(Self {
            vehicles,
            slots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_vehicle_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.vehicles.write_record(&[
                row.vehicle_id.to_string(),
                row.tick.to_string(),
                row.grid_row.to_string(),
                row.grid_col.to_string(),
                row.state.to_string(),
                (row.has_reservation as u8).to_string(),
                (row.is_bad_agent as u8).to_string(),
                row.target_slot.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_slot_snapshots(&mut self, rows: &[SlotSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.slots.write_record(&[
                row.slot_id.to_string(),
                row.tick.to_string(),
                row.grid_row.to_string(),
                row.grid_col.to_string(),
                row.status.to_string(),
                row.reserved_ticks.to_string(),
                row.holder.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.active.to_string(),
            row.queued.to_string(),
            row.placed.to_string(),
            row.free_slots.to_string(),
            row.reserved_slots.to_string(),
            row.occupied_slots.to_string(),
            row.remaining_budget.to_string(),
            row.expired_reservations.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.vehicles.flush()?;
        self.slots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
