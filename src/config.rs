//! Runtime configuration for the weather station loop.

use std::time::Duration;

/// Settings for [`run_station`](crate::observer::station::run_station).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationConfig {
    /// Number of measurement cycles to run.
    pub cycles: u32,
    /// Pause between cycles. Zero disables pacing.
    pub interval: Duration,
    /// Seed for the measurement generator; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            cycles: 5,
            interval: Duration::from_secs(2),
            seed: None,
        }
    }
}

impl StationConfig {
    /// Creates a configuration with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of cycles.
    #[must_use]
    pub fn cycles(mut self, cycles: u32) -> Self {
        self.cycles = cycles;
        self
    }

    /// Sets the pause between cycles.
    #[must_use]
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the generator seed.
    #[must_use]
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo_pacing() {
        let config = StationConfig::default();
        assert_eq!(config.cycles, 5);
        assert_eq!(config.interval, Duration::from_secs(2));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_setters() {
        let config = StationConfig::new()
            .cycles(3)
            .interval(Duration::ZERO)
            .seed(Some(9));
        assert_eq!(config.cycles, 3);
        assert!(config.interval.is_zero());
        assert_eq!(config.seed, Some(9));
    }
}
