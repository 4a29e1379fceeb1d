//! Admission policy.

use lot_agent::{Vehicle, VehicleState};
use lot_behavior::{World, reserve_nearest};
use lot_core::config::{INITIAL_PARKED_TICKS, INITIAL_QUEUE_LEN, PARKED_TICKS};
use lot_core::{Cell, LotConfig, SimRng, VehicleId};
use lot_spatial::Occupant;
use lot_spatial::layout::SPAWN_POINTS;
use tracing::{debug, warn};

use crate::SpawnQueue;

/// Turns queued vehicles into grid placements and keeps the queue topped up
/// until the run's active-vehicle budget is spent.
#[derive(Clone, Debug)]
pub struct SpawnManager {
    /// Vehicles still to be admitted over the rest of the run.
    remaining: usize,

    spawn_probability:     f64,
    reserve_probability:   f64,
    bad_agent_probability: f64,
}

impl SpawnManager {
    pub fn new(config: &LotConfig) -> Self {
        Self {
            remaining:             config.active_vehicles,
            spawn_probability:     config.spawn_probability,
            reserve_probability:   config.reserve_probability,
            bad_agent_probability: config.bad_agent_probability,
        }
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Register the first `min(INITIAL_QUEUE_LEN, remaining)` vehicles and
    /// queue them.  They carry no reservation and are never bad agents.
    pub fn seed_queue(&self, world: &mut World<'_>, queue: &mut SpawnQueue, rng: &mut SimRng) {
        let (start, end, step) = INITIAL_PARKED_TICKS;
        for _ in 0..self.remaining.min(INITIAL_QUEUE_LEN) {
            let parked = rng.gen_stepped(start, end, step);
            let id = world.agents.add_vehicle(|id| Vehicle::queued(id, parked));
            queue.push_back(id);
        }
    }

    /// Run one admission round.  Returns the number of vehicles placed.
    ///
    /// Does nothing unless the queue wants admission.  Each spawn point
    /// rolls independently, in `SPAWN_POINTS` order.
    pub fn admit(&mut self, world: &mut World<'_>, queue: &mut SpawnQueue, rng: &mut SimRng) -> usize {
        if !queue.wants_admission() {
            return 0;
        }

        let mut placed = 0;
        for entry in SPAWN_POINTS {
            if !rng.gen_bool(self.spawn_probability) {
                continue;
            }
            let Some(id) = queue.pop_front() else { continue };

            let at = world
                .agents
                .vehicle(id)
                .and_then(|v| v.spawn_entry)
                .unwrap_or(entry);
            if !world.grid.is_clear(at) {
                queue.push_front(id);
                debug!(vehicle = %id, cell = %at, "placement cell taken, requeued");
                continue;
            }
            if let Err(e) = world.grid.place(Occupant::Vehicle(id), at) {
                queue.push_front(id);
                warn!(vehicle = %id, error = %e, "could not place vehicle");
                continue;
            }
            if let Some(v) = world.agents.vehicle_mut(id) {
                v.position = Some(at);
                v.state = VehicleState::Seeking;
            }
            self.remaining = self.remaining.saturating_sub(1);
            placed += 1;
            debug!(vehicle = %id, cell = %at, remaining = self.remaining, "vehicle admitted");

            if self.remaining > queue.len() {
                let fresh = self.replenish(world, rng, entry);
                queue.push_back(fresh);
            }
        }
        placed
    }

    /// Create one queued vehicle, rolling for a reservation (made from
    /// `entry`) and, independently, for the bad-agent flag.
    fn replenish(&self, world: &mut World<'_>, rng: &mut SimRng, entry: Cell) -> VehicleId {
        let (start, end, step) = PARKED_TICKS;
        let parked = rng.gen_stepped(start, end, step);
        let id = world.agents.add_vehicle(|id| Vehicle::queued(id, parked));

        if rng.gen_bool(self.reserve_probability) {
            reserve_nearest(world, id, entry);
        }
        if rng.gen_bool(self.bad_agent_probability) {
            if let Some(v) = world.agents.vehicle_mut(id) {
                v.is_bad_agent = true;
            }
        }
        id
    }
}
