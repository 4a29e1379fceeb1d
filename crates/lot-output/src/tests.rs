//! Integration tests for lot-output.

use lot_core::LotConfig;
use lot_sim::{LotBuilder, ParkingLot};

fn small_lot(total_ticks: u64, interval: u64) -> ParkingLot {
    LotBuilder::new(LotConfig {
        perm_vehicles:         2,
        temp_vehicles:         1,
        active_vehicles:       4,
        spawn_probability:     1.0,
        total_ticks,
        output_interval_ticks: interval,
        ..LotConfig::default()
    })
    .build()
    .unwrap()
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{NO_ID, SlotSnapshotRow, TickSummaryRow, VehicleSnapshotRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("vehicle_snapshots.csv").exists());
        assert!(dir.path().join("slot_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(dir.path().join("vehicle_snapshots.csv")),
            ["vehicle_id", "tick", "grid_row", "grid_col", "state", "has_reservation", "is_bad_agent", "target_slot"]
        );
        assert_eq!(
            headers(dir.path().join("slot_snapshots.csv")),
            ["slot_id", "tick", "grid_row", "grid_col", "status", "reserved_ticks", "holder"]
        );
        assert_eq!(headers(dir.path().join("tick_summaries.csv"))[0], "tick");
    }

    #[test]
    fn csv_vehicle_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_vehicle_snapshots(&[
            VehicleSnapshotRow {
                vehicle_id: 3, tick: 7, grid_row: 1, grid_col: 4, state: "approaching",
                has_reservation: true, is_bad_agent: false, target_slot: 2,
            },
            VehicleSnapshotRow {
                vehicle_id: 4, tick: 7, grid_row: -1, grid_col: -1, state: "queued",
                has_reservation: false, is_bad_agent: true, target_slot: NO_ID,
            },
        ]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("vehicle_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][4], "approaching");
        assert_eq!(&rows[0][5], "1");
        assert_eq!(&rows[1][2], "-1");
        assert_eq!(&rows[1][6], "1");
        assert_eq!(&rows[1][7], u32::MAX.to_string().as_str());
    }

    #[test]
    fn csv_slot_and_summary_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_slot_snapshots(&[SlotSnapshotRow {
            slot_id: 0, tick: 2, grid_row: 2, grid_col: 2, status: 1, reserved_ticks: 14, holder: 9,
        }]).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick: 2, active: 5, queued: 3, placed: 2, free_slots: 58, reserved_slots: 1,
            occupied_slots: 1, remaining_budget: 40, expired_reservations: 0,
        }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("slot_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][4], "1");       // status
        assert_eq!(&rows[0][5], "14");      // reserved_ticks

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][4], "58");      // free_slots
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use super::small_lot;
    use crate::{CsvWriter, SimOutputObserver};

    #[test]
    fn run_writes_every_tick_and_snapshot() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let mut lot = small_lot(6, 3);
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        lot.run(&mut obs);
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), 6);

        // Two snapshots (ticks 3 and 6), 60 slots each.
        let mut rdr = csv::Reader::from_path(dir.path().join("slot_snapshots.csv")).unwrap();
        let ticks: Vec<String> = rdr.records().map(|r| r.unwrap()[1].to_owned()).collect();
        assert_eq!(ticks.len(), 120);
        assert!(ticks.iter().all(|t| t == "3" || t == "6"));

        let mut rdr = csv::Reader::from_path(dir.path().join("vehicle_snapshots.csv")).unwrap();
        assert!(rdr.records().count() >= 2 * 3);
    }

    #[test]
    fn zero_interval_writes_no_snapshots() {
        let dir = tempfile::tempdir().unwrap();
        let mut lot = small_lot(4, 0);
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        lot.run(&mut obs);

        let mut rdr = csv::Reader::from_path(dir.path().join("slot_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count(), 0);
    }
}

#[cfg(test)]
mod frame_tests {
    use lot_sim::NoopObserver;

    use super::small_lot;
    use crate::{LotFrame, ParkResults};

    #[test]
    fn frame_lists_placed_vehicles_and_all_slots() {
        let mut lot = small_lot(10, 0);
        lot.run_ticks(1, &mut NoopObserver);
        let frame = LotFrame::capture(&lot);

        assert_eq!(frame.light_agents.len(), 60);
        assert_eq!(frame.vehicle_agents.len(), lot.grid.vehicle_count());
        let occupied = frame.light_agents.iter().filter(|l| l.status == 2).count();
        assert!(occupied >= 3);
        for v in &frame.vehicle_agents {
            assert!((0..15).contains(&v.x));
            assert!((0..14).contains(&v.z));
        }
    }

    #[test]
    fn frame_json_uses_frontend_keys() {
        let lot = small_lot(10, 0);
        let json = LotFrame::capture(&lot).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["vehicleAgents"].is_array());
        assert_eq!(value["lightAgents"].as_array().unwrap().len(), 60);
        let first = &value["vehicleAgents"][0];
        assert!(first.get("index").is_some());
        assert!(first.get("x").is_some());
        assert!(first.get("z").is_some());
    }

    #[test]
    fn frame_write_json_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let lot = small_lot(10, 0);
        let frame = LotFrame::capture(&lot);
        let path = dir.path().join("frame.json");
        frame.write_json(&path).unwrap();

        let back: LotFrame = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(back, frame);
    }

    #[test]
    fn results_default_to_zero() {
        let lot = small_lot(10, 0);
        let r = ParkResults::capture(&lot);
        assert_eq!(r.avg_unreserved_ticks, 0.0);
        assert_eq!(r.avg_reserved_ticks, 0.0);
        assert_eq!(r.expired_reservations, 0);
    }

    #[test]
    fn results_follow_the_lot() {
        let mut lot = small_lot(10, 0);
        lot.run_ticks(60, &mut NoopObserver);
        let r = ParkResults::capture(&lot);

        assert_eq!(r.parked_unreserved, lot.unreserved_latencies().len());
        assert_eq!(r.avg_unreserved_ticks, lot.stats.mean_unreserved());
        let json = r.to_json().unwrap();
        assert!(json.contains("avg_unreserved_ticks"));
        assert!(json.contains("expired_reservations"));
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::row::{SlotSnapshotRow, TickSummaryRow, VehicleSnapshotRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn count(dir: &TempDir, table: &str) -> i64 {
        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0)).unwrap()
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_row_counts() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_vehicle_snapshots(&[
            VehicleSnapshotRow {
                vehicle_id: 0, tick: 1, grid_row: 1, grid_col: 0, state: "seeking",
                has_reservation: false, is_bad_agent: false, target_slot: u32::MAX,
            },
            VehicleSnapshotRow {
                vehicle_id: 1, tick: 1, grid_row: 2, grid_col: 2, state: "parked",
                has_reservation: false, is_bad_agent: false, target_slot: 0,
            },
        ]).unwrap();
        w.write_slot_snapshots(&[SlotSnapshotRow {
            slot_id: 0, tick: 1, grid_row: 2, grid_col: 2, status: 2, reserved_ticks: -1, holder: u32::MAX,
        }]).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick: 1, active: 2, queued: 0, placed: 2, free_slots: 59, reserved_slots: 0,
            occupied_slots: 1, remaining_budget: 0, expired_reservations: 0,
        }).unwrap();
        w.finish().unwrap();

        assert_eq!(count(&dir, "vehicle_snapshots"), 2);
        assert_eq!(count(&dir, "slot_snapshots"), 1);
        assert_eq!(count(&dir, "tick_summaries"), 1);
    }

    #[test]
    fn sqlite_state_as_text() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_vehicle_snapshots(&[VehicleSnapshotRow {
            vehicle_id: 5, tick: 0, grid_row: 0, grid_col: 3, state: "leaving",
            has_reservation: false, is_bad_agent: true, target_slot: u32::MAX,
        }]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (state, bad): (String, i64) = conn.query_row(
            "SELECT state, is_bad_agent FROM vehicle_snapshots WHERE vehicle_id = 5",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        ).unwrap();
        assert_eq!(state, "leaving");
        assert_eq!(bad, 1);
    }
}
