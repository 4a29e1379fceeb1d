//! The `ParkingLot` struct and its tick loop.

use lot_agent::{AgentStore, SlotStatus, VehicleState};
use lot_behavior::{ParkStats, Transition, World, retire_vehicle, step_slot, step_vehicle};
use lot_core::{Cell, LotConfig, SimRng, SlotId, Tick, VehicleId};
use lot_spatial::Grid;
use lot_spawn::{SpawnManager, SpawnQueue};
use tracing::trace;

use crate::{SimObserver, TickSummary};

/// The whole simulation state.
///
/// Create via [`LotBuilder`][crate::LotBuilder].  [`step`][Self::step]
/// advances one tick; everything else reads.
pub struct ParkingLot {
    /// Clamped construction-time configuration.
    pub config: LotConfig,

    /// Last completed tick.  `Tick::ZERO` before the first step.
    pub clock: Tick,

    /// Who stands where, plus the static lane table.
    pub grid: Grid,

    /// Every slot and every vehicle ever created, in registration order.
    pub agents: AgentStore,

    /// Latency samples and expired-reservation count.
    pub stats: ParkStats,

    /// Vehicles waiting to be admitted.
    pub queue: SpawnQueue,

    pub spawner: SpawnManager,

    /// The single simulation RNG.
    pub rng: SimRng,
}

impl ParkingLot {
    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance one tick.
    pub fn step(&mut self) {
        self.clock = self.clock.next();

        let Self { config, grid, agents, stats, queue, spawner, rng, .. } = self;
        let mut world = World::new(grid, agents, stats, config.reservation_holding_ticks);

        for slot in world.agents.slot_ids() {
            step_slot(&mut world, slot);
        }

        // Lane markers are static.

        for id in world.agents.vehicle_ids() {
            if step_vehicle(&mut world, id) == Transition::Exit {
                retire_vehicle(&mut world, id);
            }
        }

        spawner.admit(&mut world, queue, rng);

        trace!(
            tick   = %self.clock,
            active = self.agents.active_count(),
            queued = self.queue.len(),
            "tick complete"
        );
    }

    /// Run until `config.total_ticks`, calling observer hooks at every tick
    /// boundary.  Use [`NoopObserver`][crate::NoopObserver] if you don't
    /// need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.clock.0 < self.config.total_ticks {
            self.observed_step(observer);
        }
        observer.on_sim_end(self.clock);
    }

    /// Run exactly `n` ticks from the current position, ignoring
    /// `total_ticks`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.observed_step(observer);
        }
    }

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.next();
        observer.on_tick_start(now);
        self.step();
        observer.on_tick_end(now, &self.summary());

        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, self);
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `(id, position, state)` of every vehicle that has not exited.
    /// Queued vehicles have no position.
    pub fn vehicle_positions(&self) -> impl Iterator<Item = (VehicleId, Option<Cell>, VehicleState)> + '_ {
        self.agents
            .vehicles
            .iter()
            .filter(|v| v.is_active())
            .map(|v| (v.id, v.position, v.state))
    }

    /// `(id, status)` of every slot in id order.
    pub fn slot_statuses(&self) -> impl Iterator<Item = (SlotId, SlotStatus)> + '_ {
        self.agents.slots.iter().map(|s| (s.id, s.status))
    }

    /// Ticks-to-park of every vehicle that parked without a reservation.
    pub fn unreserved_latencies(&self) -> &[u32] {
        &self.stats.unreserved_ticks
    }

    /// Ticks-to-park of every vehicle that parked on a reservation.
    pub fn reserved_latencies(&self) -> &[u32] {
        &self.stats.reserved_ticks
    }

    pub fn expired_reservations(&self) -> u64 {
        self.stats.expired_reservations
    }

    /// Headline counts for the current state.
    pub fn summary(&self) -> TickSummary {
        let slots = self.agents.slot_counts();
        TickSummary {
            tick:                 self.clock,
            active:               self.agents.active_count(),
            queued:               self.queue.len(),
            placed:               self.grid.vehicle_count(),
            free_slots:           slots.free,
            reserved_slots:       slots.reserved,
            occupied_slots:       slots.occupied,
            remaining_budget:     self.spawner.remaining(),
            expired_reservations: self.stats.expired_reservations,
        }
    }

    /// `true` once every admitted vehicle is parked for good or gone and no
    /// more will arrive.
    pub fn is_settled(&self) -> bool {
        self.queue.is_empty()
            && self.agents.vehicles.iter().all(|v| {
                v.state == VehicleState::Exited
                    || (v.state == VehicleState::Parked && v.is_permanent())
            })
    }
}
