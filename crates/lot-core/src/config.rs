//! Construction-time configuration for a parking-lot run.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature) and handed to `lot_sim::LotBuilder`.  Values are consumed,
//! not validated: [`LotConfig::clamped`] pulls every knob into its legal range.

/// Pending-queue length at or below which the spawn manager admits vehicles.
pub const QUEUE_LOW_WATER: usize = 4;

/// Upper bound on the number of vehicles queued at construction.
pub const INITIAL_QUEUE_LEN: usize = 4;

/// `(start, end, step)` of the parked-duration draw for the initial queue.
pub const INITIAL_PARKED_TICKS: (i32, i32, i32) = (5, 50, 5);

/// `(start, end, step)` of the parked-duration draw for temporarily parked
/// and replenished vehicles.
pub const PARKED_TICKS: (i32, i32, i32) = (5, 50, 2);

/// Parked duration that marks a vehicle as permanent (never leaves).
pub const PERMANENT: i32 = -1;

/// Top-level configuration for one simulation run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LotConfig {
    /// Vehicles parked at construction that never leave.
    pub perm_vehicles: usize,

    /// Vehicles parked at construction that leave after a random duration.
    pub temp_vehicles: usize,

    /// Total number of moving vehicles admitted over the whole run.
    pub active_vehicles: usize,

    /// Per-entry, per-tick probability that a queued vehicle is admitted.
    pub spawn_probability: f64,

    /// Probability that a replenished vehicle arrives with a reservation.
    pub reserve_probability: f64,

    /// Probability that a replenished vehicle ignores other reservations.
    pub bad_agent_probability: f64,

    /// Ticks a reservation is held before it expires.
    pub reservation_holding_ticks: i32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Total ticks for `ParkingLot::run`.
    pub total_ticks: u64,

    /// Snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            perm_vehicles:             3,
            temp_vehicles:             5,
            active_vehicles:           50,
            spawn_probability:         0.2,
            reserve_probability:       0.1,
            bad_agent_probability:     0.0,
            reservation_holding_ticks: 15,
            seed:                      42,
            total_ticks:               200,
            output_interval_ticks:     1,
        }
    }
}

impl LotConfig {
    /// Copy of `self` with probabilities in `[0, 1]` and a holding time of
    /// at least one tick.  NaN probabilities become 0.
    pub fn clamped(&self) -> Self {
        Self {
            spawn_probability:         clamp_probability(self.spawn_probability),
            reserve_probability:       clamp_probability(self.reserve_probability),
            bad_agent_probability:     clamp_probability(self.bad_agent_probability),
            reservation_holding_ticks: self.reservation_holding_ticks.max(1),
            ..self.clone()
        }
    }
}

fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}
