//! Terminal lane racer (default binary).
//!
//! Dodge the oncoming cars. Starts immediately; exits on quit, on a crash, or
//! right away if the terminal is too small to fit the road and score panel.

use anyhow::Result;
use tracing::info;

use tui_racer::core::{GameSession, Layout, Outcome, SimpleRng, Termination};
use tui_racer::input::KeyPoller;
use tui_racer::logging;
use tui_racer::term::{TerminalRenderer, Window};
use tui_racer::RaceConfig;

fn main() -> Result<()> {
    let config = RaceConfig::from_env();
    logging::init(&config)?;

    // Check the size before touching terminal modes so the error prints cleanly.
    let (height, width) = TerminalRenderer::size()?;
    let layout = Layout::for_display(height, width)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(layout, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let outcome = result?;
    let how = match outcome.reason {
        Termination::Quit => "quit",
        Termination::Collision => "crashed",
    };
    println!(
        "You {how} with a score of {} (level {}).",
        outcome.score, outcome.level
    );
    Ok(())
}

fn run(layout: Layout, config: &RaceConfig) -> Result<Outcome> {
    let seed = config.seed_or_random();
    info!(seed, "starting race");

    let game = Window::stdout(layout.game_panel());
    let panel = Window::stdout(layout.score_panel());
    let mut session = GameSession::new(
        layout,
        game,
        panel,
        KeyPoller::new(),
        SimpleRng::new(seed),
    );
    Ok(session.run()?)
}
