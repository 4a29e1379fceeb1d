//! Fluent builder for constructing a [`ParkingLot`].

use lot_agent::{AgentStore, SlotStatus, Vehicle};
use lot_behavior::{ParkStats, World};
use lot_core::config::{PARKED_TICKS, PERMANENT};
use lot_core::{LotConfig, SimRng, SlotId, Tick};
use lot_spatial::{Grid, LotLayout, Occupant};
use lot_spawn::{SpawnManager, SpawnQueue};
use tracing::info;

use crate::{ParkingLot, SimError, SimResult};

/// Builder for [`ParkingLot`].
///
/// # Inputs
///
/// | Method          | Default                    |
/// |-----------------|----------------------------|
/// | `new(config)`   | required                   |
/// | `.seed(s)`      | `config.seed`              |
///
/// # Construction order
///
/// 1. Reject NaN probabilities, clamp the rest.
/// 2. Place one slot indicator per physical slot.
/// 3. Park permanent, then temporary vehicles on distinct random slots.
///    If they outnumber the slots, every slot gets a permanent vehicle and
///    no temporary ones are created.
/// 4. Queue the first `min(4, active_vehicles)` moving vehicles.
///
/// # Example
///
/// ```rust,ignore
/// let mut lot = LotBuilder::new(config).seed(7).build()?;
/// lot.run(&mut NoopObserver);
/// ```
pub struct LotBuilder {
    config: LotConfig,
}

impl LotBuilder {
    pub fn new(config: LotConfig) -> Self {
        Self { config }
    }

    /// Override the RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Validate the configuration and return a lot at `Tick::ZERO`.
    pub fn build(self) -> SimResult<ParkingLot> {
        // ── Validate ──────────────────────────────────────────────────────
        let probabilities = [
            ("spawn_probability",     self.config.spawn_probability),
            ("reserve_probability",   self.config.reserve_probability),
            ("bad_agent_probability", self.config.bad_agent_probability),
        ];
        for (name, p) in probabilities {
            if p.is_nan() {
                return Err(SimError::Config(format!("{name} is NaN")));
            }
        }
        let mut config = self.config.clamped();

        // ── Slots ─────────────────────────────────────────────────────────
        let layout = LotLayout::standard();
        let sites = layout.slot_sites();
        let mut grid = Grid::new(layout);
        for (i, site) in sites.iter().enumerate() {
            grid.place(Occupant::Slot(SlotId(i as u32)), site.cell)?;
        }
        let mut agents = AgentStore::with_slots(&sites);
        let mut rng = SimRng::new(config.seed);

        // ── Pre-parked vehicles ───────────────────────────────────────────
        if config.perm_vehicles + config.temp_vehicles > sites.len() {
            info!(
                perm  = config.perm_vehicles,
                temp  = config.temp_vehicles,
                slots = sites.len(),
                "parked vehicles exceed slots, clamping"
            );
            config.perm_vehicles = sites.len();
            config.temp_vehicles = 0;
        }

        let slot_ids: Vec<SlotId> = agents.slot_ids().collect();
        let chosen = rng.choose_distinct(&slot_ids, config.perm_vehicles + config.temp_vehicles);
        let (start, end, step) = PARKED_TICKS;
        for (k, slot_id) in chosen.into_iter().enumerate() {
            let parked = if k < config.perm_vehicles {
                PERMANENT
            } else {
                rng.gen_stepped(start, end, step)
            };
            let Some(slot) = agents.slot_mut(slot_id) else { continue };
            slot.status = SlotStatus::Occupied;
            let cell = slot.cell;

            let id = agents.add_vehicle(|id| Vehicle::parked(id, cell, slot_id, parked));
            grid.place(Occupant::Vehicle(id), cell)?;
        }

        // ── Initial queue ─────────────────────────────────────────────────
        let mut stats = ParkStats::default();
        let mut queue = SpawnQueue::new();
        let spawner = SpawnManager::new(&config);
        {
            let mut world = World::new(&mut grid, &mut agents, &mut stats, config.reservation_holding_ticks);
            spawner.seed_queue(&mut world, &mut queue, &mut rng);
        }

        Ok(ParkingLot {
            config,
            clock: Tick::ZERO,
            grid,
            agents,
            stats,
            queue,
            spawner,
            rng,
        })
    }
}
