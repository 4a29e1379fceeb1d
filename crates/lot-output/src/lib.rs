//! `lot-output` — simulation output for the rust_lot parking simulator.
//!
//! Two table backends, both implementing [`OutputWriter`] and driven by
//! [`SimOutputObserver`] (a `lot_sim::SimObserver`):
//!
//! | Feature   | Backend | Files created                                                      |
//! |-----------|---------|--------------------------------------------------------------------|
//! | *(none)*  | CSV     | `vehicle_snapshots.csv`, `slot_snapshots.csv`, `tick_summaries.csv` |
//! | `sqlite`  | SQLite  | `output.db`                                                        |
//!
//! Plus two JSON shapes for a visual frontend and a results page:
//!
//! | Type           | JSON                                                           |
//! |----------------|----------------------------------------------------------------|
//! | [`LotFrame`]   | `{"vehicleAgents":[{index,x,z}], "lightAgents":[{index,status}]}` |
//! | [`ParkResults`]| mean ticks-to-park (unreserved / reserved), expired reservations |
//!
//! # Usage
//!
//! ```rust,ignore
//! use lot_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! lot.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod frame;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use frame::{LightAgent, LotFrame, ParkResults, VehicleAgent};
pub use observer::SimOutputObserver;
pub use row::{SlotSnapshotRow, TickSummaryRow, VehicleSnapshotRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
