//! Parking slot indicator.

use lot_core::{Cell, SlotId, VehicleId};
use lot_spatial::SlotSite;

/// Availability of a slot.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotStatus {
    #[default]
    Free,
    Reserved,
    Occupied,
}

impl SlotStatus {
    /// Numeric code used by the frontend: Free 0, Reserved 1, Occupied 2.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            SlotStatus::Free     => 0,
            SlotStatus::Reserved => 1,
            SlotStatus::Occupied => 2,
        }
    }
}

/// A parking space together with its availability indicator.
///
/// Only `status`, `reserved_ticks` and `holder` change after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    pub id: SlotId,

    /// The cell a parked vehicle stands on.
    pub cell: Cell,

    /// The aisle cell a vehicle must reach before pulling in.
    pub entry: Cell,

    pub status: SlotStatus,

    /// Ticks left on the reservation; `-1` when not reserved.
    pub reserved_ticks: i32,

    /// Vehicle entitled to the slot while a reservation is on record.
    pub holder: Option<VehicleId>,
}

impl Slot {
    pub fn new(id: SlotId, site: SlotSite) -> Self {
        Self {
            id,
            cell:           site.cell,
            entry:          site.entry,
            status:         SlotStatus::Free,
            reserved_ticks: -1,
            holder:         None,
        }
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.status == SlotStatus::Free
    }

    /// Mark the slot reserved for `holder` for `ticks` ticks.
    pub fn reserve(&mut self, holder: VehicleId, ticks: i32) {
        self.status = SlotStatus::Reserved;
        self.reserved_ticks = ticks;
        self.holder = Some(holder);
    }

    /// Drop the reservation record without touching `status`.
    pub fn clear_reservation(&mut self) -> Option<VehicleId> {
        self.reserved_ticks = -1;
        self.holder.take()
    }
}
