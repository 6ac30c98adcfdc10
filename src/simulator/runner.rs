//! Plays sessions tick by tick with the autopilot at the controls.

use super::autopilot::Autopilot;
use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::config::GameConfig;
use crate::game::{GameInput, Session, SessionEvent};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Run the full batch and return a report.
pub fn run_simulation(sim: &SimConfig, game: &GameConfig) -> SimReport {
    let autopilot = Autopilot::default();
    let mut runs = Vec::with_capacity(sim.num_runs as usize);

    for run_idx in 0..sim.num_runs {
        let mut rng = match sim.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(game, &autopilot, sim.max_ticks_per_run, &mut rng);
        debug!(run = run_idx + 1, score = stats.score, ticks = stats.ticks, "run finished");
        if sim.verbose {
            println!(
                "Run {}/{} - score {}, ticks {}, crash {:?}",
                run_idx + 1,
                sim.num_runs,
                stats.score,
                stats.ticks,
                stats.crash
            );
        }
        runs.push(stats);
    }

    let report = SimReport::from_runs(runs);
    info!(
        runs = report.num_runs,
        avg_score = report.avg_score,
        max_score = report.max_score,
        "simulation complete"
    );
    report
}

/// Play one session from the first flap until it crashes or hits `max_ticks`.
pub fn simulate_single_run<R: Rng>(
    game: &GameConfig,
    autopilot: &Autopilot,
    max_ticks: u64,
    rng: &mut R,
) -> RunStats {
    let mut session = Session::new(game.clone());
    let mut stats = RunStats {
        score: 0,
        ticks: 0,
        crash: None,
        flaps: 0,
    };

    let mut events = press(&mut session, rng);
    loop {
        for event in &events {
            match *event {
                SessionEvent::Flapped => stats.flaps += 1,
                SessionEvent::Scored { score } => stats.score = score,
                SessionEvent::Crashed { cause, score } => {
                    stats.crash = Some(cause);
                    stats.score = score;
                }
                _ => {}
            }
        }
        if stats.crash.is_some() || stats.ticks >= max_ticks {
            break;
        }

        events = if autopilot.should_flap(session.state(), session.config()) {
            press(&mut session, rng)
        } else {
            Vec::new()
        };
        events.extend(session.tick(rng));
        stats.ticks += 1;
    }

    stats
}

/// A full key press: down then up.
fn press<R: Rng>(session: &mut Session, rng: &mut R) -> Vec<SessionEvent> {
    let mut events = session.handle_input(GameInput::FlapDown, rng);
    events.extend(session.handle_input(GameInput::FlapUp, rng));
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(runs: u32, seed: u64) -> SimConfig {
        SimConfig {
            num_runs: runs,
            seed: Some(seed),
            max_ticks_per_run: 2_000,
            verbose: false,
        }
    }

    #[test]
    fn test_report_covers_every_run() {
        let report = run_simulation(&sim(5, 1), &GameConfig::default());
        assert_eq!(report.num_runs, 5);
        assert_eq!(report.run_stats.len(), 5);
        for run in &report.run_stats {
            assert!(run.ticks <= 2_000);
            assert!(run.flaps >= 1);
            assert!(run.crash.is_some() || run.ticks == 2_000);
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let a = run_simulation(&sim(3, 99), &GameConfig::default());
        let b = run_simulation(&sim(3, 99), &GameConfig::default());
        assert_eq!(a.run_stats, b.run_stats);
    }

    #[test]
    fn test_tick_limit_stops_run() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let stats = simulate_single_run(&GameConfig::default(), &Autopilot::default(), 10, &mut rng);
        assert_eq!(stats.ticks, 10);
        assert!(stats.crash.is_none());
    }
}
