//! The vehicle state machine.
//!
//! | State                     | Per-tick action                                          |
//! |---------------------------|----------------------------------------------------------|
//! | `Seeking` / `Approaching` | pick a target slot unless reserved, step toward its entry, maybe start parking |
//! | `Parking`                 | step one row toward the slot; `Parked` once the row matches |
//! | `Parked`                  | count down; at 0 pull out of the slot and start leaving  |
//! | `Leaving`                 | step toward the quadrant exit                            |
//! | `Queued` / `Exited`       | nothing                                                  |
//!
//! A vehicle never removes itself.  Reaching the exit is reported as
//! [`Transition::Exit`] and the scheduler calls [`retire_vehicle`].

use lot_agent::{SlotStatus, Vehicle, VehicleState};
use lot_core::{Cell, Direction, SlotId, VehicleId};
use lot_mobility::{StepOutcome, step_into, step_toward};
use lot_spatial::Occupant;
use tracing::{debug, warn};

use crate::{World, nearest_slot};

/// What the scheduler must do with a vehicle after its step.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Transition {
    Idle,
    /// The vehicle stands on its exit cell and must be retired.
    Exit,
}

/// Run one tick of the state machine for `id`.
pub fn step_vehicle(world: &mut World<'_>, id: VehicleId) -> Transition {
    let Some((state, Some(pos))) = world.agents.vehicle(id).map(|v| (v.state, v.position)) else {
        return Transition::Idle;
    };

    match state {
        VehicleState::Seeking | VehicleState::Approaching => drive_to_slot(world, id, pos),
        VehicleState::Parking => {
            pull_in(world, id, pos);
            Transition::Idle
        }
        VehicleState::Parked => {
            count_down(world, id, pos);
            Transition::Idle
        }
        VehicleState::Leaving => drive_to_exit(world, id, pos),
        VehicleState::Queued | VehicleState::Exited => Transition::Idle,
    }
}

/// Take an exited vehicle off the grid and out of the active set.  Any
/// reservation it still holds is released.
pub fn retire_vehicle(world: &mut World<'_>, id: VehicleId) {
    if let Err(e) = world.grid.remove(Occupant::Vehicle(id)) {
        warn!(vehicle = %id, error = %e, "retired vehicle was not on the grid");
    }

    if let Some(slot_id) = world.agents.slot_held_by(id) {
        if let Some(slot) = world.agents.slot_mut(slot_id) {
            slot.clear_reservation();
            if slot.status == SlotStatus::Reserved {
                slot.status = SlotStatus::Free;
            }
        }
    }

    if let Some(v) = world.agents.vehicle_mut(id) {
        v.position = None;
        v.state = VehicleState::Exited;
        v.has_reservation = false;
        v.target_slot = None;
        debug!(vehicle = %id, "vehicle exited");
    }
}

// ── Seeking / approaching ─────────────────────────────────────────────────────

fn drive_to_slot(world: &mut World<'_>, id: VehicleId, pos: Cell) -> Transition {
    let Some(target) = choose_target(world, id, pos) else {
        let exit = world.grid.layout().exit_for(pos);
        if let Some(v) = world.agents.vehicle_mut(id) {
            v.state = VehicleState::Leaving;
            v.target_slot = None;
            v.exit_target = Some(exit);
        }
        debug!(vehicle = %id, %exit, "no slot available, leaving");
        return drive_to_exit(world, id, pos);
    };

    let Some(entry) = world.agents.slot(target).map(|s| s.entry) else {
        return Transition::Idle;
    };
    let now = match step_toward(world.grid, id, pos, entry) {
        StepOutcome::Moved(to) => to,
        StepOutcome::Blocked(_) | StepOutcome::NoLane => pos,
    };

    if let Some(v) = world.agents.vehicle_mut(id) {
        v.position = Some(now);
        v.state = VehicleState::Approaching;
        v.ticks_to_park += 1;
    }

    let at_entry = now.col == entry.col && now.row.abs_diff(entry.row) <= 1;
    if !at_entry {
        return Transition::Idle;
    }
    if let Some(slot) = world.agents.slot_mut(target) {
        if slot.status != SlotStatus::Occupied {
            slot.status = SlotStatus::Occupied;
            if let Some(v) = world.agents.vehicle_mut(id) {
                v.state = VehicleState::Parking;
            }
            debug!(vehicle = %id, slot = %target, "parking");
        }
    }
    Transition::Idle
}

/// The slot `id` drives toward this tick.  A reserved vehicle keeps its
/// slot; everyone else re-picks the nearest acceptable one.
fn choose_target(world: &mut World<'_>, id: VehicleId, pos: Cell) -> Option<SlotId> {
    let v = world.agents.vehicle(id)?;
    if v.has_reservation {
        if let Some(slot) = v.target_slot {
            return Some(slot);
        }
    }

    let bad = v.is_bad_agent;
    let found = nearest_slot(world.agents, pos, |s| {
        s.status == SlotStatus::Free || (bad && s.status == SlotStatus::Reserved)
    });
    if let Some(v) = world.agents.vehicle_mut(id) {
        v.target_slot = found;
    }
    found
}

// ── Parking ───────────────────────────────────────────────────────────────────

fn pull_in(world: &mut World<'_>, id: VehicleId, pos: Cell) {
    let Some(v) = world.agents.vehicle(id) else { return };
    let Some(slot_cell) = v.target_slot.and_then(|s| world.agents.slot(s)).map(|s| s.cell) else {
        return;
    };

    let mut now = pos;
    if now.row != slot_cell.row {
        let dir = if slot_cell.row > now.row { Direction::Down } else { Direction::Up };
        if let StepOutcome::Moved(to) = step_into(world.grid, id, now.step(dir)) {
            now = to;
        }
    }

    let parked = now.row == slot_cell.row;
    let Some(v) = world.agents.vehicle_mut(id) else { return };
    v.position = Some(now);
    v.ticks_to_park += 1;
    if parked {
        v.state = VehicleState::Parked;
        let (reserved, ticks) = (v.has_reservation, v.ticks_to_park);
        world.stats.record_park(reserved, ticks);
        debug!(vehicle = %id, cell = %now, ticks, reserved, "parked");
    }
}

// ── Parked ────────────────────────────────────────────────────────────────────

fn count_down(world: &mut World<'_>, id: VehicleId, pos: Cell) {
    let Some(v) = world.agents.vehicle_mut(id) else { return };
    if v.is_permanent() {
        return;
    }
    v.parked_ticks -= 1;
    if v.parked_ticks > 0 {
        return;
    }

    let out = if pos.row % 2 == 0 { pos.step(Direction::Up) } else { pos.step(Direction::Down) };
    let slot_id = world.grid.slot_at(pos).or(v.target_slot);
    if !step_into(world.grid, id, out).moved() {
        v.parked_ticks += 1;
        return;
    }

    let exit = world.grid.layout().exit_for(out);
    v.position = Some(out);
    v.state = VehicleState::Leaving;
    v.target_slot = None;
    v.exit_target = Some(exit);

    if let Some(slot) = slot_id.and_then(|s| world.agents.slot_mut(s)) {
        slot.status = SlotStatus::Free;
        slot.clear_reservation();
    }
    debug!(vehicle = %id, from = %pos, %exit, "left slot");
}

// ── Leaving ───────────────────────────────────────────────────────────────────

fn drive_to_exit(world: &mut World<'_>, id: VehicleId, pos: Cell) -> Transition {
    let exit = world.grid.layout().exit_for(pos);
    if pos == exit {
        set_exit(world.agents.vehicle_mut(id), exit, pos);
        return Transition::Exit;
    }

    let now = match step_toward(world.grid, id, pos, exit) {
        StepOutcome::Moved(to) => to,
        StepOutcome::Blocked(_) | StepOutcome::NoLane => pos,
    };
    set_exit(world.agents.vehicle_mut(id), exit, now);

    if now == exit { Transition::Exit } else { Transition::Idle }
}

fn set_exit(v: Option<&mut Vehicle>, exit: Cell, now: Cell) {
    if let Some(v) = v {
        v.position = Some(now);
        v.exit_target = Some(exit);
    }
}
