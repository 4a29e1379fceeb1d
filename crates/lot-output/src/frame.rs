//! JSON shapes consumed by the visual frontend and the results page.

use std::fs;
use std::path::Path;

use lot_sim::ParkingLot;
use serde::{Deserialize, Serialize};

use crate::OutputResult;

/// One placed vehicle.  `x` is the column, `z` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleAgent {
    pub index: u32,
    pub x:     i32,
    pub z:     i32,
}

/// One slot indicator.  `status` is Free 0, Reserved 1, Occupied 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightAgent {
    pub index:  u32,
    pub status: u8,
}

/// Everything the frontend needs to draw one tick.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotFrame {
    pub vehicle_agents: Vec<VehicleAgent>,
    pub light_agents:   Vec<LightAgent>,
}

impl LotFrame {
    /// Placed vehicles and every slot, in registration order.
    pub fn capture(lot: &ParkingLot) -> Self {
        let vehicle_agents = lot
            .vehicle_positions()
            .filter_map(|(id, pos, _)| {
                pos.map(|c| VehicleAgent { index: id.0, x: c.col, z: c.row })
            })
            .collect();
        let light_agents = lot
            .slot_statuses()
            .map(|(id, status)| LightAgent { index: id.0, status: status.code() })
            .collect();
        Self { vehicle_agents, light_agents }
    }

    pub fn to_json(&self) -> OutputResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn write_json(&self, path: &Path) -> OutputResult<()> {
        fs::write(path, serde_json::to_vec_pretty(self)?)?;
        Ok(())
    }
}

/// Aggregate results of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParkResults {
    /// Mean ticks-to-park of vehicles without a reservation; 0 with no samples.
    pub avg_unreserved_ticks: f64,
    /// Mean ticks-to-park of vehicles with a reservation; 0 with no samples.
    pub avg_reserved_ticks:   f64,
    pub parked_unreserved:    usize,
    pub parked_reserved:      usize,
    pub expired_reservations: u64,
}

impl ParkResults {
    pub fn capture(lot: &ParkingLot) -> Self {
        Self {
            avg_unreserved_ticks: lot.stats.mean_unreserved(),
            avg_reserved_ticks:   lot.stats.mean_reserved(),
            parked_unreserved:    lot.unreserved_latencies().len(),
            parked_reserved:      lot.reserved_latencies().len(),
            expired_reservations: lot.expired_reservations(),
        }
    }

    pub fn to_json(&self) -> OutputResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
