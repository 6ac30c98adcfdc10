//! Integration test: full session lifecycle
//!
//! Drives sessions through the public API the way the terminal loop does:
//! key presses, ticks and wall-clock time.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skyflap::game::Bird;
use skyflap::{CrashCause, GameConfig, GameInput, Phase, Session, SessionEvent};

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// One physical key press: down then up.
fn press(session: &mut Session, rng: &mut ChaCha8Rng) -> Vec<SessionEvent> {
    let mut events = session.handle_input(GameInput::FlapDown, rng);
    events.extend(session.handle_input(GameInput::FlapUp, rng));
    events
}

/// A bird that barely moves, parked in front of gaps centered on it.
fn hover_config() -> GameConfig {
    GameConfig {
        gravity: 0.0,
        bird_initial_velocity: 0.0,
        flap_impulse: 0.001,
        min_gap_center: 300.0,
        max_gap_center: 300.0,
        ..GameConfig::default()
    }
}

// =============================================================================
// Start-up scenario
// =============================================================================

#[test]
fn test_first_press_starts_with_pipe_at_right_edge() {
    let mut rng = rng(1);
    let mut session = Session::new(GameConfig::default());
    assert_eq!(session.phase(), Phase::Idle);

    let events = press(&mut session, &mut rng);

    assert_eq!(session.phase(), Phase::Running);
    assert_eq!(events.first(), Some(&SessionEvent::Started));
    assert!(events.contains(&SessionEvent::Flapped));
    assert_eq!(session.state().bird.velocity(), -15.0);
    let pipes = session.state().obstacles.pipes();
    assert_eq!(pipes.len(), 1);
    assert_eq!(pipes[0].x, 800.0);
    assert!((200.0..=550.0).contains(&pipes[0].gap_center));
}

#[test]
fn test_unattended_bird_falls_out_and_resets() {
    let mut rng = rng(2);
    let mut session = Session::new(GameConfig::default());
    press(&mut session, &mut rng);

    let mut crash = None;
    let mut prev_y = session.state().bird.y();
    let mut rising = true;
    for _ in 0..200 {
        let events = session.tick(&mut rng);
        if let Some(SessionEvent::Crashed { cause, score }) = events
            .iter()
            .find(|e| matches!(e, SessionEvent::Crashed { .. }))
        {
            crash = Some((*cause, *score));
            assert_eq!(events.last(), Some(&SessionEvent::Reset));
            break;
        }
        let y = session.state().bird.y();
        if !rising {
            assert!(y > prev_y, "bird should keep falling");
        }
        rising = y < prev_y;
        prev_y = y;
    }

    // The first pipe is still far right when the bird hits the floor.
    assert_eq!(crash, Some((CrashCause::Floor, 0)));
    let state = session.state();
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.score, 0);
    assert!(state.obstacles.is_empty());
    assert_eq!(state.bird, Bird::new(session.config()));
    assert_eq!(state.last_score, Some(0));
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_hovering_bird_scores_each_pipe_once() {
    let mut rng = rng(3);
    let mut session = Session::new(hover_config());
    press(&mut session, &mut rng);

    // The first pipe starts at x = 800 and scrolls 10 per tick; it reaches
    // the bird's leading edge (207.5) on the 61st tick.
    for _ in 0..60 {
        session.tick(&mut rng);
    }
    assert_eq!(session.state().score, 0);
    let events = session.tick(&mut rng);
    assert!(events.contains(&SessionEvent::Scored { score: 1 }));

    // The second pipe spawns 51 ticks after the first.
    for _ in 0..50 {
        session.tick(&mut rng);
    }
    assert_eq!(session.state().score, 1);
    session.tick(&mut rng);
    assert_eq!(session.state().score, 2);
    assert_eq!(session.phase(), Phase::Running);
}

#[test]
fn test_long_hover_keeps_pipe_count_bounded() {
    let mut rng = rng(4);
    let mut session = Session::new(hover_config());
    press(&mut session, &mut rng);

    let mut scored = 0;
    for _ in 0..3_000 {
        for event in session.tick(&mut rng) {
            if let SessionEvent::Scored { score } = event {
                scored += 1;
                assert_eq!(score, scored);
            }
        }
        assert!(session.state().obstacles.len() <= 2);
    }
    assert_eq!(session.phase(), Phase::Running);
    assert_eq!(session.state().score, scored);
    assert!(scored > 50);
}

// =============================================================================
// Input latching and clock
// =============================================================================

#[test]
fn test_holding_flap_key_flaps_once() {
    let mut rng = rng(5);
    let mut session = Session::new(GameConfig::default());
    press(&mut session, &mut rng);
    for _ in 0..3 {
        session.tick(&mut rng);
    }

    let mut flaps = 0;
    for _ in 0..5 {
        flaps += session
            .handle_input(GameInput::FlapDown, &mut rng)
            .iter()
            .filter(|e| **e == SessionEvent::Flapped)
            .count();
    }
    assert_eq!(flaps, 1);
    session.handle_input(GameInput::FlapUp, &mut rng);
    assert_eq!(press(&mut session, &mut rng), vec![SessionEvent::Flapped]);
}

#[test]
fn test_wall_clock_drives_ticks() {
    let mut rng = rng(6);
    let mut session = Session::new(GameConfig::default());

    // Clock is stopped on the start screen.
    assert!(session.advance(60, &mut rng).is_empty());
    assert_eq!(session.state().accumulated_ms, 0);

    press(&mut session, &mut rng);
    let before = session.state().bird.velocity();
    session.advance(45, &mut rng);
    assert_eq!(session.state().bird.velocity(), before + 3.0);
    assert_eq!(session.state().tick_count, 4);
}

#[test]
fn test_same_seed_same_pipes() {
    let run = |seed| {
        let mut rng = rng(seed);
        let mut session = Session::new(hover_config());
        press(&mut session, &mut rng);
        let mut gaps = Vec::new();
        for _ in 0..300 {
            for event in session.tick(&mut rng) {
                if let SessionEvent::PipeSpawned { gap_center } = event {
                    gaps.push(gap_center);
                }
            }
        }
        gaps
    };
    assert_eq!(run(11), run(11));
}
