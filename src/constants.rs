// Timing constants
pub const TICK_INTERVAL_MS: u64 = 15;
/// Largest wall-clock gap fed into the fixed-step clock after a stall.
pub const MAX_FRAME_DT_MS: u64 = 100;
/// How long the terminal loop waits for input before redrawing.
pub const INPUT_POLL_MS: u64 = 5;

// World constants
pub const WORLD_WIDTH: f64 = 800.0;
pub const WORLD_HEIGHT: f64 = 600.0;

// Bird constants
pub const BIRD_SIZE: f64 = 15.0;
pub const GRAVITY: f64 = 1.0;
pub const FLAP_IMPULSE: f64 = 15.0;
pub const BIRD_INITIAL_VELOCITY: f64 = 3.0;

// Pipe constants
pub const PIPE_WIDTH: f64 = 50.0;
pub const PIPE_SPEED: f64 = 10.0;
pub const PIPE_GAP: f64 = 75.0;
pub const PAIR_SPACING: f64 = 50.0;
pub const MIN_GAP_CENTER: f64 = 200.0;
pub const MAX_GAP_CENTER: f64 = 550.0;

// Simulator constants
pub const DEFAULT_SIM_RUNS: u32 = 100;
pub const DEFAULT_SIM_MAX_TICKS: u64 = 20_000;
