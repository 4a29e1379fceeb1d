//! Per-vehicle record and lifecycle states.

use lot_core::config::PERMANENT;
use lot_core::{Cell, SlotId, VehicleId};

/// Lifecycle of a vehicle.
///
/// ```text
/// Queued → Seeking → Approaching → Parking → Parked → Leaving → Exited
///             └──────────┴── no slot available ──────────┘
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleState {
    /// Waiting in the spawn queue; not on the grid.
    #[default]
    Queued,
    /// Just admitted; no target chosen yet.
    Seeking,
    /// Moving toward a target slot's entry point.
    Approaching,
    /// Pulling from the entry point into the slot.
    Parking,
    /// Standing on a slot, counting down its parked time.
    Parked,
    /// Heading for an exit cell.
    Leaving,
    /// Left the lot; no longer on the grid or in the active set.
    Exited,
}

impl VehicleState {
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleState::Queued      => "queued",
            VehicleState::Seeking     => "seeking",
            VehicleState::Approaching => "approaching",
            VehicleState::Parking     => "parking",
            VehicleState::Parked      => "parked",
            VehicleState::Leaving     => "leaving",
            VehicleState::Exited      => "exited",
        }
    }
}

/// One vehicle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub id: VehicleId,

    /// `None` before admission and after exit.
    pub position: Option<Cell>,

    pub state: VehicleState,

    /// Ticks left to stay parked; `-1` for permanent vehicles.
    pub parked_ticks: i32,

    pub target_slot: Option<SlotId>,

    pub exit_target: Option<Cell>,

    /// `true` exactly while some slot names this vehicle as its holder.
    pub has_reservation: bool,

    /// Entry cell the reservation was made from; also the placement cell.
    pub spawn_entry: Option<Cell>,

    /// Ticks spent driving toward a slot.
    pub ticks_to_park: u32,

    /// May target slots reserved by other vehicles.
    pub is_bad_agent: bool,
}

impl Vehicle {
    /// A vehicle waiting in the spawn queue.
    pub fn queued(id: VehicleId, parked_ticks: i32) -> Self {
        Self {
            id,
            position:        None,
            state:           VehicleState::Queued,
            parked_ticks,
            target_slot:     None,
            exit_target:     None,
            has_reservation: false,
            spawn_entry:     None,
            ticks_to_park:   0,
            is_bad_agent:    false,
        }
    }

    /// A vehicle already standing on `slot` at `cell`.
    pub fn parked(id: VehicleId, cell: Cell, slot: SlotId, parked_ticks: i32) -> Self {
        Self {
            position:    Some(cell),
            state:       VehicleState::Parked,
            target_slot: Some(slot),
            ..Self::queued(id, parked_ticks)
        }
    }

    /// Never leaves its slot.
    #[inline]
    pub fn is_permanent(&self) -> bool {
        self.parked_ticks == PERMANENT
    }

    /// On the grid or waiting to get onto it.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state != VehicleState::Exited
    }
}
