//! Skyflap - a terminal flappy bird.
//!
//! The library holds the simulation, its configuration and the terminal
//! renderer; the binaries wire them to a real terminal or a headless
//! autopilot.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod simulator;
pub mod ui;

pub use config::GameConfig;
pub use constants::TICK_INTERVAL_MS;
pub use error::{Error, Result};
pub use game::{CrashCause, GameInput, Phase, Session, SessionEvent, SessionState};
