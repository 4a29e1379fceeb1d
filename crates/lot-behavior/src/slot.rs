//! The slot controller.
//!
//! ```text
//! Free ──reserve──▶ Reserved ──vehicle parks──▶ Occupied ──vehicle leaves──▶ Free
//!   │                  │                            ▲
//!   │                  └──timer reaches 0──▶ Free   │
//!   └───────────────────vehicle parks───────────────┘
//! ```
//!
//! Each tick runs two checks in this order:
//!
//! 1. **Expiry.**  A reserved slot counts its timer down; at 0 it frees
//!    itself, clears the holder's reservation flag and bumps the expiry count.
//! 2. **Occupancy.**  If a vehicle stands on the slot the status is forced
//!    to `Occupied` and any reservation record is dropped.  When the vehicle
//!    is not the holder, the holder is displaced and gets a new reservation
//!    near where it is (or where it will spawn).
//!
//! A slot that expires in step 1 has no holder left for step 2, so one
//! reservation can never be both expired and reassigned in the same tick.

use lot_agent::SlotStatus;
use lot_core::{SlotId, VehicleId};
use tracing::{debug, info};

use crate::{World, reserve_nearest};

/// Run one tick of the slot controller for `slot`.
pub fn step_slot(world: &mut World<'_>, slot: SlotId) {
    expire(world, slot);
    observe_occupancy(world, slot);
}

fn expire(world: &mut World<'_>, slot_id: SlotId) {
    let Some(slot) = world.agents.slot_mut(slot_id) else { return };
    if slot.status != SlotStatus::Reserved {
        return;
    }

    slot.reserved_ticks -= 1;
    if slot.reserved_ticks > 0 {
        return;
    }

    slot.status = SlotStatus::Free;
    let holder = slot.clear_reservation();
    if let Some(v) = holder.and_then(|h| world.agents.live_vehicle_mut(h)) {
        v.has_reservation = false;
    }
    world.stats.expired_reservations += 1;
    info!(slot = %slot_id, ?holder, "reservation expired");
}

fn observe_occupancy(world: &mut World<'_>, slot_id: SlotId) {
    let Some(cell) = world.agents.slot(slot_id).map(|s| s.cell) else { return };
    let Some(occupant) = world.grid.vehicle_at(cell) else { return };

    let Some(slot) = world.agents.slot_mut(slot_id) else { return };
    slot.status = SlotStatus::Occupied;

    match slot.clear_reservation() {
        None => {}
        Some(holder) if holder == occupant => {
            if let Some(v) = world.agents.live_vehicle_mut(holder) {
                v.has_reservation = false;
            }
        }
        Some(holder) => {
            debug!(slot = %slot_id, %holder, taken_by = %occupant, "reserved slot taken");
            reassign(world, holder);
        }
    }
}

/// Move `holder`'s reservation to the free slot nearest its position, or its
/// spawn entry while it is still queued.
fn reassign(world: &mut World<'_>, holder: VehicleId) {
    let Some(v) = world.agents.live_vehicle_mut(holder) else { return };
    v.has_reservation = false;
    v.target_slot = None;

    let Some(from) = v.position.or(v.spawn_entry) else { return };
    match reserve_nearest(world, holder, from) {
        Some(to) => debug!(%holder, slot = %to, "reservation reassigned"),
        None     => debug!(%holder, "reservation lost, no free slot"),
    }
}
