//! Nearest-slot search and reservation.

use lot_agent::{AgentStore, Slot};
use lot_core::{Cell, SlotId, VehicleId};
use tracing::debug;

use crate::World;

/// The slot accepted by `accept` whose entry point is closest (Manhattan) to
/// `from`.  Ties go to the lowest `SlotId`.
pub fn nearest_slot(
    agents: &AgentStore,
    from:   Cell,
    accept: impl Fn(&Slot) -> bool,
) -> Option<SlotId> {
    agents
        .slots
        .iter()
        .filter(|s| accept(s))
        .min_by_key(|s| (from.manhattan(s.entry), s.id))
        .map(|s| s.id)
}

/// Reserve the free slot nearest to `from` for `vehicle`.
///
/// On success the slot becomes `Reserved` for `world.holding_ticks`, the
/// vehicle targets it and records `from` as its spawn entry if it has none.
/// On failure the vehicle is left unreserved with no target.
pub fn reserve_nearest(world: &mut World<'_>, vehicle: VehicleId, from: Cell) -> Option<SlotId> {
    let found = nearest_slot(world.agents, from, Slot::is_free);
    let holding = world.holding_ticks;

    let v = world.agents.live_vehicle_mut(vehicle)?;
    let Some(slot_id) = found else {
        v.has_reservation = false;
        v.target_slot = None;
        debug!(%vehicle, %from, "no free slot to reserve");
        return None;
    };

    v.has_reservation = true;
    v.target_slot = Some(slot_id);
    v.spawn_entry.get_or_insert(from);

    if let Some(slot) = world.agents.slot_mut(slot_id) {
        slot.reserve(vehicle, holding);
    }
    debug!(%vehicle, slot = %slot_id, ticks = holding, "reservation made");
    Some(slot_id)
}
