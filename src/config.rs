//! Game tuning configuration.
//!
//! Every field has a default matching the classic 800x600 layout, so a config
//! file only needs to list the values it overrides.

use crate::constants::*;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Tunables for the world, the bird and the pipe stream.
///
/// Coordinates follow screen convention: y grows downward, the visible area
/// spans `[0, width] x [0, height]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: f64,
    pub height: f64,
    /// Simulation step length in milliseconds.
    pub tick_ms: u64,

    /// Velocity added to the bird every tick.
    pub gravity: f64,
    /// Magnitude of the upward velocity a flap sets.
    pub flap_impulse: f64,
    /// Downward velocity a freshly spawned bird starts with.
    pub bird_initial_velocity: f64,
    /// Side length of the square bird.
    pub bird_size: f64,

    pub pipe_width: f64,
    /// Leftward distance a pipe travels per tick.
    pub pipe_speed: f64,
    /// Distance from the gap center to the inner edge of each segment.
    pub pipe_gap: f64,
    /// Spawn cursor slack: a new pipe is due once the cursor has dropped this
    /// far below `width`.
    pub pair_spacing: f64,
    pub min_gap_center: f64,
    pub max_gap_center: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            tick_ms: TICK_INTERVAL_MS,
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            bird_initial_velocity: BIRD_INITIAL_VELOCITY,
            bird_size: BIRD_SIZE,
            pipe_width: PIPE_WIDTH,
            pipe_speed: PIPE_SPEED,
            pipe_gap: PIPE_GAP,
            pair_spacing: PAIR_SPACING,
            min_gap_center: MIN_GAP_CENTER,
            max_gap_center: MAX_GAP_CENTER,
        }
    }
}

impl GameConfig {
    /// Parse a config from TOML text and validate it.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|source| Error::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate the config file at `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text, path)
    }

    /// Load the config for this run.
    ///
    /// An explicit path must exist. Without one, the platform config directory
    /// is consulted and defaults are used if it holds no config file.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("bird_size", self.bird_size)?;
        positive("flap_impulse", self.flap_impulse)?;
        positive("pipe_width", self.pipe_width)?;
        positive("pipe_speed", self.pipe_speed)?;
        positive("pipe_gap", self.pipe_gap)?;
        if self.tick_ms == 0 {
            return Err(Error::invalid("tick_ms", "must be at least 1"));
        }
        if !self.gravity.is_finite() || self.gravity < 0.0 {
            return Err(Error::invalid("gravity", "must be a non-negative number"));
        }
        if !self.bird_initial_velocity.is_finite() {
            return Err(Error::invalid("bird_initial_velocity", "must be finite"));
        }
        if !self.pair_spacing.is_finite() || self.pair_spacing < 0.0 {
            return Err(Error::invalid("pair_spacing", "must be non-negative"));
        }
        if self.pair_spacing > self.width {
            return Err(Error::invalid("pair_spacing", "must not exceed width"));
        }
        if !self.min_gap_center.is_finite() || !self.max_gap_center.is_finite() {
            return Err(Error::invalid("min_gap_center", "gap bounds must be finite"));
        }
        if self.min_gap_center > self.max_gap_center {
            return Err(Error::invalid(
                "min_gap_center",
                format!(
                    "({}) is greater than max_gap_center ({})",
                    self.min_gap_center, self.max_gap_center
                ),
            ));
        }
        if self.pipe_gap * 2.0 >= self.height {
            return Err(Error::invalid("pipe_gap", "opening is taller than the world"));
        }
        if self.bird_size >= self.height || self.bird_size >= self.width {
            return Err(Error::invalid("bird_size", "bird does not fit in the world"));
        }
        Ok(())
    }

    /// Top-left corner where every bird is spawned.
    pub fn bird_spawn(&self) -> (f64, f64) {
        (
            self.width / 4.0 - self.bird_size / 2.0,
            self.height / 2.0 - self.bird_size / 2.0,
        )
    }

    /// Vertical extent of each pipe segment. Long enough that, for any gap
    /// center in range, both segments reach past the edges of the world.
    pub fn pipe_segment_length(&self) -> f64 {
        self.max_gap_center.max(self.height - self.min_gap_center) + self.height
    }
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(field, format!("must be positive, got {value}")))
    }
}

/// Platform project directories for skyflap, if a home directory is known.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "skyflap")
}

/// `config.toml` inside the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
