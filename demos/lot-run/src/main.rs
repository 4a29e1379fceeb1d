//! lot-run — run one parking-lot simulation from the command line.
//!
//! ```text
//! lot-run [config.json]
//! ```
//!
//! The optional JSON file holds any subset of `LotConfig` fields; missing
//! ones take their defaults (3 permanent, 5 temporary, 50 moving vehicles,
//! spawn 0.2, reserve 0.1, holding time 15 ticks, 200 ticks).  Set
//! `RUST_LOG=debug` to watch individual vehicles park and leave.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lot_core::{LotConfig, Tick};
use lot_output::{CsvWriter, LotFrame, OutputWriter, ParkResults, SimOutputObserver};
use lot_sim::{LotBuilder, ParkingLot, SimObserver, TickSummary};

const OUTPUT_DIR: &str = "output/lot-run";

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
    peak_placed:   usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0, peak_placed: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        self.summary_rows += 1;
        self.peak_placed = self.peak_placed.max(summary.placed);
        self.inner.on_tick_end(tick, summary);
    }

    fn on_snapshot(&mut self, tick: Tick, lot: &ParkingLot) {
        self.snapshot_rows += lot.vehicle_positions().count() + lot.agents.slots.len();
        self.inner.on_snapshot(tick, lot);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_config(path: Option<String>) -> Result<LotConfig> {
    let Some(path) = path else {
        return Ok(LotConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    // 1. Configuration.
    let config = load_config(std::env::args().nth(1))?;
    println!("=== lot-run — rust_lot parking simulator ===");
    println!(
        "Parked: {} permanent + {} temporary  |  Moving: {}  |  Ticks: {}  |  Seed: {}",
        config.perm_vehicles,
        config.temp_vehicles,
        config.active_vehicles,
        config.total_ticks,
        config.seed,
    );
    println!(
        "Spawn {:.2}  |  Reserve {:.2}  |  Bad agents {:.2}  |  Holding {} ticks",
        config.spawn_probability,
        config.reserve_probability,
        config.bad_agent_probability,
        config.reservation_holding_ticks,
    );
    println!();

    // 2. Build the lot.
    let mut lot = LotBuilder::new(config).build()?;
    info!(slots = lot.agents.slots.len(), queued = lot.queue.len(), "lot built");

    // 3. Set up output.
    let out = Path::new(OUTPUT_DIR);
    std::fs::create_dir_all(out)?;
    let writer = CsvWriter::new(out)?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    lot.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Final frame and results.
    LotFrame::capture(&lot).write_json(&out.join("final_frame.json"))?;
    let results = ParkResults::capture(&lot);

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  snapshot rows      : {}", obs.snapshot_rows);
    println!("  tick_summaries.csv : {} rows", obs.summary_rows);
    println!("  final_frame.json   : written");
    println!("  peak vehicles      : {}", obs.peak_placed);
    println!();

    let s = lot.summary();
    println!("{:<12} {:>6}", "Slots", "Count");
    println!("{}", "-".repeat(19));
    println!("{:<12} {:>6}", "free", s.free_slots);
    println!("{:<12} {:>6}", "reserved", s.reserved_slots);
    println!("{:<12} {:>6}", "occupied", s.occupied_slots);
    println!();

    println!(
        "Average ticks to park without a reservation: {:.2} ({} vehicles)",
        results.avg_unreserved_ticks, results.parked_unreserved,
    );
    println!(
        "Average ticks to park with a reservation:    {:.2} ({} vehicles)",
        results.avg_reserved_ticks, results.parked_reserved,
    );
    println!("Expired reservations: {}", results.expired_reservations);
    println!();
    println!("{}", results.to_json()?);

    Ok(())
}
