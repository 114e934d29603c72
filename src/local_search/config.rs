//! Annealing configuration.

use std::time::Duration;

/// Configuration for the simulated-annealing local search.
///
/// # Examples
///
/// ```
/// use euctsp::local_search::AnnealConfig;
/// use std::time::Duration;
///
/// let config = AnnealConfig::default()
///     .with_time_limit(Duration::from_secs(30))
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// Starting temperature. Higher values accept more worsening moves
    /// early on.
    pub initial_temperature: f64,

    /// Temperature floor. The loop exits once temperature drops to or
    /// below this value.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1), applied after every
    /// evaluated move.
    pub cooling_factor: f64,

    /// Wall-clock budget. `None` runs until the temperature floor.
    pub time_limit: Option<Duration>,

    /// The clock is polled once every this many loop passes, to bound
    /// timing overhead.
    pub time_check_interval: usize,

    /// Observer/logging milestone period, in evaluated moves.
    pub milestone_interval: usize,

    /// Random seed. `None` draws a seed from the thread RNG, forfeiting
    /// reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            min_temperature: 0.1,
            cooling_factor: 0.9995,
            time_limit: None,
            time_check_interval: 100,
            milestone_interval: 10_000,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, factor: f64) -> Self {
        self.cooling_factor = factor;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_time_check_interval(mut self, interval: usize) -> Self {
        self.time_check_interval = interval;
        self
    }

    pub fn with_milestone_interval(mut self, interval: usize) -> Self {
        self.milestone_interval = interval;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if self.cooling_factor <= 0.0 || self.cooling_factor >= 1.0 {
            return Err(format!(
                "cooling_factor must be in (0, 1), got {}",
                self.cooling_factor
            ));
        }
        if self.time_check_interval == 0 {
            return Err("time_check_interval must be positive".into());
        }
        if self.milestone_interval == 0 {
            return Err("milestone_interval must be positive".into());
        }
        Ok(())
    }
}
