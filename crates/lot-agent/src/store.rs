//! Central agent table: every slot and every vehicle, indexed by handle.
//!
//! # Registration order
//!
//! Slots are created once, row-major, at lot construction.  Vehicles are
//! appended as they are created (pre-parked first, then queued, then
//! replenished), so ascending `VehicleId` *is* registration order and the
//! scheduler steps vehicles by walking the ids.

use lot_core::{SlotId, VehicleId};
use lot_spatial::SlotSite;

use crate::{Slot, SlotStatus, Vehicle};

/// Number of slots in each status.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct SlotCounts {
    pub free:     usize,
    pub reserved: usize,
    pub occupied: usize,
}

/// Storage for all agents of one run.
#[derive(Clone, Debug, Default)]
pub struct AgentStore {
    pub slots:    Vec<Slot>,
    pub vehicles: Vec<Vehicle>,
}

impl AgentStore {
    /// A store with one free slot per site, ids in site order.
    pub fn with_slots(sites: &[SlotSite]) -> Self {
        let slots = sites
            .iter()
            .enumerate()
            .map(|(i, &site)| Slot::new(SlotId(i as u32), site))
            .collect();
        Self { slots, vehicles: Vec::new() }
    }

    // ── Vehicles ──────────────────────────────────────────────────────────

    /// Register a new vehicle; `make` receives the id it will be stored under.
    pub fn add_vehicle(&mut self, make: impl FnOnce(VehicleId) -> Vehicle) -> VehicleId {
        let id = VehicleId(self.vehicles.len() as u32);
        self.vehicles.push(make(id));
        id
    }

    #[inline]
    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(id.index())
    }

    #[inline]
    pub fn vehicle_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(id.index())
    }

    /// The vehicle behind `id` unless it has already exited.
    #[inline]
    pub fn live_vehicle_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(id.index()).filter(|v| v.is_active())
    }

    /// All vehicle ids in registration order.
    pub fn vehicle_ids(&self) -> impl Iterator<Item = VehicleId> + use<> {
        (0..self.vehicles.len() as u32).map(VehicleId)
    }

    /// Vehicles that have not exited, queued ones included.
    pub fn active_count(&self) -> usize {
        self.vehicles.iter().filter(|v| v.is_active()).count()
    }

    /// Vehicles currently on the grid.
    pub fn placed(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        self.vehicles.iter().filter(|v| v.position.is_some())
    }

    // ── Slots ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.slots.get(id.index())
    }

    #[inline]
    pub fn slot_mut(&mut self, id: SlotId) -> Option<&mut Slot> {
        self.slots.get_mut(id.index())
    }

    /// All slot ids in registration order.
    pub fn slot_ids(&self) -> impl Iterator<Item = SlotId> + use<> {
        (0..self.slots.len() as u32).map(SlotId)
    }

    /// The slot whose reservation `holder` currently holds.
    pub fn slot_held_by(&self, holder: VehicleId) -> Option<SlotId> {
        self.slots
            .iter()
            .find(|s| s.holder == Some(holder))
            .map(|s| s.id)
    }

    pub fn slot_counts(&self) -> SlotCounts {
        self.slots.iter().fold(SlotCounts::default(), |mut c, s| {
            match s.status {
                SlotStatus::Free     => c.free += 1,
                SlotStatus::Reserved => c.reserved += 1,
                SlotStatus::Occupied => c.occupied += 1,
            }
            c
        })
    }
}
