//! Simulation configuration.

use crate::constants::{DEFAULT_SIM_MAX_TICKS, DEFAULT_SIM_RUNS};

/// Configuration for a batch of simulated sessions.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of sessions to play
    pub num_runs: u32,

    /// Base seed; run `i` uses `seed + i` (None = fresh entropy per run)
    pub seed: Option<u64>,

    /// Ticks after which a still-flying run is stopped
    pub max_ticks_per_run: u64,

    /// Print a line per run
    pub verbose: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: DEFAULT_SIM_RUNS,
            seed: None,
            max_ticks_per_run: DEFAULT_SIM_MAX_TICKS,
            verbose: false,
        }
    }
}
