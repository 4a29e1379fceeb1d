//! Simulation observer trait for progress reporting and data collection.

use lot_core::Tick;

use crate::{ParkingLot, TickSummary};

/// Callbacks invoked by [`ParkingLot::run`][crate::ParkingLot::run] and
/// [`ParkingLot::run_ticks`][crate::ParkingLot::run_ticks].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} active, {} queued", summary.active, summary.queued);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the tick is processed.  `tick` is the tick about to run.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick, with the counts it left behind.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called every `config.output_interval_ticks` ticks with read-only
    /// access to the whole lot.
    fn on_snapshot(&mut self, _tick: Tick, _lot: &ParkingLot) {}

    /// Called once after the final tick of [`ParkingLot::run`].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
