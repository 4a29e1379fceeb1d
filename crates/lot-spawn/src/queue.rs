//! `SpawnQueue` — vehicles waiting for admission.

use std::collections::VecDeque;

use lot_core::VehicleId;
use lot_core::config::QUEUE_LOW_WATER;

/// FIFO of vehicles registered in the agent store but not yet on the grid.
///
/// Admission pops the front; a vehicle whose placement cell is taken goes
/// back to the front; replenished vehicles join the tail.
#[derive(Clone, Debug, Default)]
pub struct SpawnQueue {
    inner: VecDeque<VehicleId>,
}

impl SpawnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&mut self, vehicle: VehicleId) {
        self.inner.push_back(vehicle);
    }

    pub fn push_front(&mut self, vehicle: VehicleId) {
        self.inner.push_front(vehicle);
    }

    pub fn pop_front(&mut self) -> Option<VehicleId> {
        self.inner.pop_front()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// `true` when the queue is non-empty and at or below the low-water mark.
    #[inline]
    pub fn wants_admission(&self) -> bool {
        (1..=QUEUE_LOW_WATER).contains(&self.inner.len())
    }
}
