//! Deterministic simulation-level RNG.
//!
//! # Determinism strategy
//!
//! The simulation is single-threaded and every random draw (pre-parked slot
//! choice, parked durations, spawn / reservation / bad-agent rolls) happens in
//! a fixed order inside one tick.  A single `SmallRng` seeded from the run's
//! global seed is therefore enough: the same seed and configuration always
//! reproduce the same run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG owned by the parking lot.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A value drawn uniformly from `start, start + step, …` strictly below
    /// `end`.  Returns `start` when the range is empty.
    pub fn gen_stepped(&mut self, start: i32, end: i32, step: i32) -> i32 {
        if step <= 0 || end <= start {
            return start;
        }
        let count = (end - start + step - 1) / step;
        start + step * self.0.gen_range(0..count)
    }

    /// Choose `amount` distinct elements (fewer if the slice is shorter).
    pub fn choose_distinct<T: Copy>(&mut self, slice: &[T], amount: usize) -> Vec<T> {
        use rand::seq::SliceRandom;
        slice.choose_multiple(&mut self.0, amount).copied().collect()
    }
}
