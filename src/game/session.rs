//! Session controller: phase machine, unified tick and fixed-step clock.
//!
//! One [`Session`] owns the config and a [`SessionState`]. Input and time are
//! fed in from outside; every call returns the [`SessionEvent`]s it produced
//! so the UI and logs never have to diff state.

use super::bird::Bird;
use super::input::{FlapLatch, GameInput};
use super::pipes::ObstacleManager;
use crate::config::GameConfig;
use crate::constants::MAX_FRAME_DT_MS;
use rand::Rng;
use tracing::{debug, info, trace};

/// Coarse session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Start screen, nothing moves.
    Idle,
    /// Ticks advance the bird and the pipes.
    Running,
    /// Crash detected; resolved to `Idle` before the tick returns.
    Over,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    Pipe,
    Ceiling,
    Floor,
}

/// Something that happened while handling input or a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    Started,
    Flapped,
    PipeSpawned { gap_center: f64 },
    Scored { score: u32 },
    Crashed { cause: CrashCause, score: u32 },
    Reset,
}

/// All mutable session data.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub phase: Phase,
    pub score: u32,
    /// Final score of the previous run, shown on the start screen.
    pub last_score: Option<u32>,
    pub best_score: u32,
    pub bird: Bird,
    pub obstacles: ObstacleManager,
    pub latch: FlapLatch,
    /// Ticks taken in the current run.
    pub tick_count: u64,
    /// Wall time not yet consumed by a whole tick.
    pub accumulated_ms: u64,
}

impl SessionState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            phase: Phase::Idle,
            score: 0,
            last_score: None,
            best_score: 0,
            bird: Bird::new(config),
            obstacles: ObstacleManager::new(config),
            latch: FlapLatch::new(),
            tick_count: 0,
            accumulated_ms: 0,
        }
    }
}

/// Drives one game from start screen to crash and back, indefinitely.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    state: SessionState,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        let state = SessionState::new(&config);
        Self { config, state }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_running(&self) -> bool {
        self.state.phase == Phase::Running
    }

    /// Apply one input action.
    pub fn handle_input<R: Rng>(&mut self, input: GameInput, rng: &mut R) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        match input {
            GameInput::FlapDown => {
                if self.state.latch.press() {
                    trigger_flap(&mut self.state, &self.config, rng, &mut events);
                }
            }
            GameInput::FlapUp => self.state.latch.release(),
            GameInput::Quit | GameInput::Other => {}
        }
        events
    }

    /// Run exactly one tick. Inert unless the session is running.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        step(&mut self.state, &self.config, rng, &mut events);
        events
    }

    /// Feed `dt_ms` of wall time and run as many whole ticks as it covers.
    ///
    /// Outside `Running` the clock is stopped and any leftover time dropped.
    pub fn advance<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if self.state.phase != Phase::Running {
            self.state.accumulated_ms = 0;
            return events;
        }

        self.state.accumulated_ms += dt_ms.min(MAX_FRAME_DT_MS);
        while self.state.accumulated_ms >= self.config.tick_ms {
            self.state.accumulated_ms -= self.config.tick_ms;
            step(&mut self.state, &self.config, rng, &mut events);
            if self.state.phase != Phase::Running {
                break;
            }
        }
        events
    }

    /// Abandon the current run and return to the start screen.
    pub fn reset(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        reset(&mut self.state, &self.config, &mut events);
        events
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }
}

/// A latched flap press: starts the run from `Idle`, otherwise flaps.
fn trigger_flap<R: Rng>(
    state: &mut SessionState,
    config: &GameConfig,
    rng: &mut R,
    events: &mut Vec<SessionEvent>,
) {
    match state.phase {
        Phase::Idle => {
            state.phase = Phase::Running;
            state.score = 0;
            state.tick_count = 0;
            state.accumulated_ms = 0;
            info!("session started");
            events.push(SessionEvent::Started);

            // The first tick runs with the press, then the opening flap lands.
            step(state, config, rng, events);
            if state.phase == Phase::Running {
                state.bird.flap();
                events.push(SessionEvent::Flapped);
            }
        }
        Phase::Running => {
            state.bird.flap();
            events.push(SessionEvent::Flapped);
        }
        Phase::Over => {}
    }
}

/// The unified tick. Order matters for scoring and collision:
/// bird physics, crash check, scoring, pipe scroll and spawn, reset.
fn step<R: Rng>(
    state: &mut SessionState,
    config: &GameConfig,
    rng: &mut R,
    events: &mut Vec<SessionEvent>,
) {
    if state.phase != Phase::Running {
        return;
    }
    state.tick_count += 1;

    state.bird.advance();
    trace!(
        tick = state.tick_count,
        y = state.bird.y(),
        velocity = state.bird.velocity(),
        "bird advanced"
    );

    if let Some(cause) = detect_crash(state, config) {
        state.phase = Phase::Over;
        info!(?cause, score = state.score, ticks = state.tick_count, "bird crashed");
        events.push(SessionEvent::Crashed {
            cause,
            score: state.score,
        });
    } else {
        award_passed_pipes(state, events);

        let report = state.obstacles.tick(config, rng);
        if let Some(gap_center) = report.spawned {
            events.push(SessionEvent::PipeSpawned { gap_center });
        }
    }

    if state.phase == Phase::Over {
        reset(state, config, events);
    }
}

/// Out of the vertical band, or touching any pipe segment.
fn detect_crash(state: &SessionState, config: &GameConfig) -> Option<CrashCause> {
    let bounds = state.bird.bounds();
    if bounds.y0 < 0.0 {
        return Some(CrashCause::Ceiling);
    }
    if bounds.exits_vertical(config.height) {
        return Some(CrashCause::Floor);
    }
    state
        .obstacles
        .pipes()
        .iter()
        .any(|pipe| pipe.collides_with(&bounds, config))
        .then_some(CrashCause::Pipe)
}

/// One point per pipe, the first tick the bird's leading edge reaches it.
fn award_passed_pipes(state: &mut SessionState, events: &mut Vec<SessionEvent>) {
    let leading_edge = state.bird.right();
    for pipe in state.obstacles.pipes_mut() {
        if !pipe.passed && leading_edge >= pipe.x {
            pipe.passed = true;
            state.score += 1;
            debug!(score = state.score, "pipe passed");
            events.push(SessionEvent::Scored { score: state.score });
        }
    }
}

fn reset(state: &mut SessionState, config: &GameConfig, events: &mut Vec<SessionEvent>) {
    if state.phase != Phase::Idle {
        state.last_score = Some(state.score);
        state.best_score = state.best_score.max(state.score);
    }
    state.phase = Phase::Idle;
    state.score = 0;
    state.tick_count = 0;
    state.accumulated_ms = 0;
    state.obstacles.clear(config);
    state.bird.reset_to_initial();
    state.bird = Bird::new(config);
    events.push(SessionEvent::Reset);
}
