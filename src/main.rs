use anyhow::Context;
use clap::Parser;
use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use skyflap::constants::INPUT_POLL_MS;
use skyflap::input::map_key_event;
use skyflap::logging::{self, LogTarget};
use skyflap::{build_info, ui, GameConfig, GameInput, Session};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, trace};

/// Skyflap - flap through the pipes. Space, Up or Enter to flap; Esc or q to quit.
#[derive(Debug, Parser)]
#[command(name = "skyflap", version)]
struct Cli {
    /// Config file (TOML). Defaults to config.toml in the platform config dir.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for pipe placement, for reproducible games.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Directory for skyflap.log. Defaults to the platform data dir.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::load(cli.config.as_deref()).context("failed to load config")?;

    let log_dir = cli.log_dir.clone().unwrap_or_else(logging::default_log_dir);
    let _log_guard = logging::init(&cli.log_level, LogTarget::File(log_dir))
        .context("failed to set up logging")?;
    info!(version = %build_info::version_string(), seed = ?cli.seed, "skyflap starting");

    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut session = Session::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let reports_release = supports_keyboard_enhancement().unwrap_or(false);
    if reports_release {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut session, &mut rng, reports_release);

    // Cleanup terminal, even if the loop failed
    if reports_release {
        let _ = terminal.backend_mut().execute(PopKeyboardEnhancementFlags);
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let best = session.state().best_score;
    result?;
    info!(best, "skyflap exiting");
    println!("Best score: {}", best);
    Ok(())
}

/// Draw, read input, advance the clock; until the player quits.
fn run(
    terminal: &mut Tui,
    session: &mut Session,
    rng: &mut ChaCha8Rng,
    reports_release: bool,
) -> anyhow::Result<()> {
    let mut last_frame = Instant::now();

    loop {
        terminal
            .draw(|frame| ui::draw_ui(frame, session))
            .context("failed to draw frame")?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                for input in map_key_event(&key_event, reports_release) {
                    if input == GameInput::Quit {
                        return Ok(());
                    }
                    for event in session.handle_input(input, rng) {
                        trace!(?event, "input event");
                    }
                }
            }
        }

        // Whole milliseconds only; the remainder carries into the next frame.
        let elapsed_ms = last_frame.elapsed().as_millis() as u64;
        last_frame += Duration::from_millis(elapsed_ms);
        for event in session.advance(elapsed_ms, rng) {
            trace!(?event, "tick event");
        }
    }
}
