//! Headless session runner.
//!
//! Plays batches of seeded sessions with a simple autopilot and summarizes
//! how long the bird survived and how many pipes it cleared. Uses the same
//! [`Session`](crate::game::Session) as the terminal game, so results match
//! real play.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::Autopilot;
pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
