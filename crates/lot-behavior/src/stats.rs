//! Aggregate run statistics.

/// Ticks-to-park samples, split by whether the vehicle parked on a
/// reservation, plus a running count of reservations that timed out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParkStats {
    pub unreserved_ticks: Vec<u32>,
    pub reserved_ticks:   Vec<u32>,
    /// Monotonically increasing.
    pub expired_reservations: u64,
}

impl ParkStats {
    pub fn record_park(&mut self, reserved: bool, ticks: u32) {
        if reserved {
            self.reserved_ticks.push(ticks);
        } else {
            self.unreserved_ticks.push(ticks);
        }
    }

    /// Mean ticks-to-park without a reservation; 0 with no samples.
    pub fn mean_unreserved(&self) -> f64 {
        mean(&self.unreserved_ticks)
    }

    /// Mean ticks-to-park with a reservation; 0 with no samples.
    pub fn mean_reserved(&self) -> f64 {
        mean(&self.reserved_ticks)
    }
}

fn mean(xs: &[u32]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().map(|&x| x as f64).sum::<f64>() / xs.len() as f64
}
