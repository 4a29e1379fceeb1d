//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `vehicle_snapshots`, `slot_snapshots` and `tick_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, SlotSnapshotRow, TickSummaryRow, VehicleSnapshotRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS vehicle_snapshots (
                 vehicle_id      INTEGER NOT NULL,
                 tick            INTEGER NOT NULL,
                 grid_row        INTEGER NOT NULL,
                 grid_col        INTEGER NOT NULL,
                 state           TEXT    NOT NULL,
                 has_reservation INTEGER NOT NULL,
                 is_bad_agent    INTEGER NOT NULL,
                 target_slot     INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS slot_snapshots (
                 slot_id        INTEGER NOT NULL,
                 tick           INTEGER NOT NULL,
                 grid_row       INTEGER NOT NULL,
                 grid_col       INTEGER NOT NULL,
                 status         INTEGER NOT NULL,
                 reserved_ticks INTEGER NOT NULL,
                 holder         INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick                 INTEGER PRIMARY KEY,
                 active               INTEGER NOT NULL,
                 queued               INTEGER NOT NULL,
                 placed               INTEGER NOT NULL,
                 free_slots           INTEGER NOT NULL,
                 reserved_slots       INTEGER NOT NULL,
                 occupied_slots       INTEGER NOT NULL,
                 remaining_budget     INTEGER NOT NULL,
                 expired_reservations INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_vehicle_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO vehicle_snapshots \
                 (vehicle_id, tick, grid_row, grid_col, state, has_reservation, is_bad_agent, target_slot) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.vehicle_id,
                    row.tick as i64,
                    row.grid_row,
                    row.grid_col,
                    row.state,
                    row.has_reservation as i64,
                    row.is_bad_agent as i64,
                    row.target_slot,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_slot_snapshots(&mut self, rows: &[SlotSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO slot_snapshots \
                 (slot_id, tick, grid_row, grid_col, status, reserved_ticks, holder) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.slot_id,
                    row.tick as i64,
                    row.grid_row,
                    row.grid_col,
                    row.status,
                    row.reserved_ticks,
                    row.holder,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries \
             (tick, active, queued, placed, free_slots, reserved_slots, occupied_slots, \
              remaining_budget, expired_reservations) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            rusqlite::params![
                row.tick as i64,
                row.active as i64,
                row.queued as i64,
                row.placed as i64,
                row.free_slots as i64,
                row.reserved_slots as i64,
                row.occupied_slots as i64,
                row.remaining_budget as i64,
                row.expired_reservations as i64,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
