//! Plain data row types written by output backends.

/// Marker for an absent id (no target slot, no reservation holder).
pub const NO_ID: u32 = u32::MAX;

/// One vehicle at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleSnapshotRow {
    pub vehicle_id:      u32,
    pub tick:            u64,
    /// `-1` while the vehicle is off the grid (queued).
    pub grid_row:        i32,
    pub grid_col:        i32,
    pub state:           &'static str,
    pub has_reservation: bool,
    pub is_bad_agent:    bool,
    /// [`NO_ID`] when the vehicle has no target.
    pub target_slot:     u32,
}

/// One slot at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSnapshotRow {
    pub slot_id:        u32,
    pub tick:           u64,
    pub grid_row:       i32,
    pub grid_col:       i32,
    /// Free 0, Reserved 1, Occupied 2.
    pub status:         u8,
    pub reserved_ticks: i32,
    /// [`NO_ID`] when nobody holds a reservation.
    pub holder:         u32,
}

/// Headline counts for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:                 u64,
    pub active:               u64,
    pub queued:               u64,
    pub placed:               u64,
    pub free_slots:           u64,
    pub reserved_slots:       u64,
    pub occupied_slots:       u64,
    pub remaining_budget:     u64,
    pub expired_reservations: u64,
}
