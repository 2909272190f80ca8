//! Game session - owns the player, the obstacles and the score, and runs ticks.
//!
//! A session exclusively owns both render surfaces (road and score panel), the
//! input source and the random source. Nothing is shared; one tick runs to
//! completion before the next poll.
//!
//! # Tick
//!
//! 1. Poll one key (bounded by the current timeout)
//! 2. Quit ends the session
//! 3. Pause blocks until pause (resume) or quit; steering moves one lane
//! 4. Any collision ends the session before anything is drawn
//! 5. Maybe spawn an obstacle (difficulty = level)
//! 6. Draw the player, scroll and draw the obstacles
//! 7. Reap the lowest obstacle and score it
//! 8. Derive the level, 9. shorten the timeout, 10. repaint the score panel

use tracing::info;

use crate::collision::collides;
use crate::error::RaceError;
use crate::layout::Layout;
use crate::obstacles::ObstacleManager;
use crate::rng::RandomSource;
use crate::scoring::Scoreboard;
use crate::sprite::Sprite;
use crate::surface::{InputSource, RenderSurface};
use crate::types::{GameAction, LANE_PADDING, PAUSE_HINT, QUIT_HINT, STEER_HINT};

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Quit,
    Collision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Paused,
    Terminated(Termination),
}

/// Final numbers of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub score: u32,
    pub level: u32,
    pub ticks: u64,
    pub reason: Termination,
}

const PAUSED_LABEL: &str = "PAUSED";

pub struct GameSession<S, I, R> {
    layout: Layout,
    game: S,
    panel: S,
    input: I,
    rng: R,
    player: Sprite,
    obstacles: ObstacleManager,
    scoreboard: Scoreboard,
    state: SessionState,
    ticks: u64,
}

impl<S, I, R> GameSession<S, I, R>
where
    S: RenderSurface,
    I: InputSource,
    R: RandomSource,
{
    /// Validate the display size, then start a session.
    ///
    /// Fails with [`RaceError::SurfaceTooSmall`] before touching any surface.
    pub fn for_display(
        height: u16,
        width: u16,
        game: S,
        panel: S,
        input: I,
        rng: R,
    ) -> Result<Self, RaceError> {
        let layout = Layout::for_display(height, width)?;
        Ok(Self::new(layout, game, panel, input, rng))
    }

    /// Start a session on an already validated layout.
    ///
    /// `game` and `panel` are expected to be sized like the layout's panels.
    pub fn new(layout: Layout, game: S, panel: S, mut input: I, mut rng: R) -> Self {
        let lanes = layout.lanes();
        let col = rng.choose(&lanes).unwrap_or(lanes[0]);
        let player = Sprite::player(layout.player_row(), col);

        let scoreboard = Scoreboard::new();
        input.set_timeout(scoreboard.tick_timeout_ms());

        let mut session = Self {
            layout,
            game,
            panel,
            input,
            rng,
            player,
            obstacles: ObstacleManager::new(lanes),
            scoreboard,
            state: SessionState::Running,
            ticks: 0,
        };
        session.paint_hints();
        info!(
            row = player.row(),
            col = player.col(),
            display = ?layout.display(),
            "session started"
        );
        session
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    pub fn level(&self) -> u32 {
        self.scoreboard.level()
    }

    pub fn tick_timeout_ms(&self) -> u32 {
        self.scoreboard.tick_timeout_ms()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn player(&self) -> &Sprite {
        &self.player
    }

    pub fn obstacles(&self) -> &ObstacleManager {
        &self.obstacles
    }

    pub fn game_surface(&self) -> &S {
        &self.game
    }

    pub fn score_surface(&self) -> &S {
        &self.panel
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Tick until the session ends.
    pub fn run(&mut self) -> Result<Outcome, RaceError> {
        self.paint_score()?;
        loop {
            if let SessionState::Terminated(reason) = self.tick()? {
                return Ok(self.outcome(reason));
            }
        }
    }

    /// Run one tick. A terminated session stays terminated.
    pub fn tick(&mut self) -> Result<SessionState, RaceError> {
        if let SessionState::Terminated(_) = self.state {
            return Ok(self.state);
        }
        self.ticks += 1;

        match self.input.poll_key()? {
            Some(GameAction::Quit) => return Ok(self.terminate(Termination::Quit)),
            Some(GameAction::Pause) => {
                if let Some(reason) = self.pause()? {
                    return Ok(self.terminate(reason));
                }
            }
            Some(GameAction::SteerLeft) => self.steer(-1),
            Some(GameAction::SteerRight) => self.steer(1),
            None => {}
        }

        if collides(&self.player, self.obstacles.iter()) {
            return Ok(self.terminate(Termination::Collision));
        }

        let level = self.scoreboard.level();
        self.obstacles.maybe_spawn(&self.player, level, &mut self.rng);

        self.player.draw(&mut self.game);
        self.obstacles.scroll(&mut self.game);
        self.obstacles.draw_all(&mut self.game);

        let reaped = self.obstacles.reap(&mut self.game);
        if let Some(level) = self.scoreboard.add(reaped) {
            info!(level, score = self.scoreboard.score(), "level up");
        }
        self.input.set_timeout(self.scoreboard.tick_timeout_ms());

        self.game.refresh()?;
        self.paint_score()?;
        Ok(self.state)
    }

    /// Block until pause is pressed again. Quit still ends the session; every
    /// other key is ignored.
    fn pause(&mut self) -> Result<Option<Termination>, RaceError> {
        self.state = SessionState::Paused;
        info!(tick = self.ticks, "paused");
        let row = self.status_row();
        self.panel.write_text(row, LANE_PADDING, PAUSED_LABEL);
        self.panel.refresh()?;

        loop {
            match self.input.poll_key()? {
                Some(GameAction::Pause) => break,
                Some(GameAction::Quit) => return Ok(Some(Termination::Quit)),
                _ => {}
            }
        }

        let blank = " ".repeat(PAUSED_LABEL.len());
        self.panel.write_text(row, LANE_PADDING, &blank);
        self.panel.refresh()?;
        self.state = SessionState::Running;
        info!(tick = self.ticks, "resumed");
        Ok(None)
    }

    /// Move the player one lane left (`-1`) or right (`1`), stopping at the edges.
    fn steer(&mut self, delta: isize) {
        let lanes = self.obstacles.lanes();
        let Some(current) = lanes.iter().position(|&c| c == self.player.col()) else {
            return;
        };
        let target = current as isize + delta;
        if target < 0 || target as usize >= lanes.len() {
            return;
        }
        let row = self.player.row();
        self.player.move_to(row, lanes[target as usize], &mut self.game);
    }

    fn terminate(&mut self, reason: Termination) -> SessionState {
        self.state = SessionState::Terminated(reason);
        info!(
            ?reason,
            score = self.scoreboard.score(),
            level = self.scoreboard.level(),
            ticks = self.ticks,
            "session over"
        );
        self.state
    }

    fn outcome(&self, reason: Termination) -> Outcome {
        Outcome {
            score: self.scoreboard.score(),
            level: self.scoreboard.level(),
            ticks: self.ticks,
            reason,
        }
    }

    fn middle_row(&self) -> u16 {
        self.panel.dimensions().0 / 2
    }

    fn status_row(&self) -> u16 {
        self.middle_row() + 2
    }

    fn paint_hints(&mut self) {
        let mid = self.middle_row();
        self.panel.write_text(mid.saturating_sub(7), LANE_PADDING, STEER_HINT);
        self.panel.write_text(mid.saturating_sub(6), LANE_PADDING, PAUSE_HINT);
        self.panel.write_text(mid.saturating_sub(5), LANE_PADDING, QUIT_HINT);
    }

    fn paint_score(&mut self) -> Result<(), RaceError> {
        let mid = self.middle_row();
        let level = format!("Level: {}", self.scoreboard.level());
        let score = format!("Score: {}", self.scoreboard.score());
        self.panel.write_text(mid.saturating_sub(2), LANE_PADDING, &level);
        self.panel.write_text(mid, LANE_PADDING, &score);
        self.panel.refresh()?;
        Ok(())
    }
}
