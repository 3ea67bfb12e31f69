use tracing::debug;

use crate::domain::accumulator::Accumulator;

/// Owns one [`Accumulator`]. Changing its state is the only side effect of
/// [`CalculatorService::add`]; printing the result is up to the caller.
#[derive(Debug, Default)]
pub struct CalculatorService {
    accumulator: Accumulator<f64>,
}

impl CalculatorService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, x: f64, y: f64) -> f64 {
        let previous: f64 = self.accumulator.result();
        let result: f64 = self.accumulator.add(x, y);
        debug!(x, y, previous, result, "accumulator overwritten");
        result
    }

    pub fn result(&self) -> f64 {
        self.accumulator.result()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_service_holds_zero() {
        let service = CalculatorService::new();
        assert_eq!(service.result(), 0.0);
    }

    #[test]
    fn add_returns_and_stores_sum() {
        let mut service = CalculatorService::new();
        assert_eq!(service.add(5.0, 3.0), 8.0);
        assert_eq!(service.result(), 8.0);
    }

    #[test]
    fn add_twice_keeps_latest_only() {
        let mut service = CalculatorService::new();
        service.add(5.0, 3.0);
        service.add(1.0, 1.0);
        assert_eq!(service.result(), 2.0);
    }

    #[test]
    fn add_negative_to_zero() {
        let mut service = CalculatorService::new();
        assert_eq!(service.add(-2.0, 2.0), 0.0);
    }
}
