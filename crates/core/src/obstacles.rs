//! Obstacle cars: spawning, scrolling and reaping.
//!
//! Obstacles live in a FIFO. New cars are always pushed at the back on row 0,
//! and since every car scrolls one row per tick the front car is always the
//! lowest one on screen. Reaping therefore only ever looks at the front.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::collision::collides;
use crate::rng::RandomSource;
use crate::sprite::Sprite;
use crate::surface::RenderSurface;
use crate::types::{
    DOUBLE_SPAWN_DRAW_MAX, DOUBLE_SPAWN_GAP_ROWS, LANE_COUNT, MAX_DIFFICULTY, REAP_MARGIN_ROWS,
    SPAWN_CHANCE_PERCENT,
};

/// Result of one spawn attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// The tick's spawn draw said no.
    Skipped,
    /// The candidate would overlap the most recent car.
    Overlapping,
    /// A difficulty-driven double spawn came too close to the previous car.
    TooClose,
    /// A car was added in the given lane column.
    Spawned { col: u16 },
}

impl SpawnOutcome {
    pub fn spawned(&self) -> bool {
        matches!(self, SpawnOutcome::Spawned { .. })
    }
}

#[derive(Debug, Clone)]
pub struct ObstacleManager {
    lanes: [u16; LANE_COUNT],
    cars: VecDeque<Sprite>,
}

impl ObstacleManager {
    pub fn new(lanes: [u16; LANE_COUNT]) -> Self {
        Self {
            lanes,
            cars: VecDeque::new(),
        }
    }

    pub fn lanes(&self) -> [u16; LANE_COUNT] {
        self.lanes
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Oldest car first.
    pub fn iter(&self) -> impl Iterator<Item = &Sprite> {
        self.cars.iter()
    }

    pub fn front(&self) -> Option<&Sprite> {
        self.cars.front()
    }

    pub fn back(&self) -> Option<&Sprite> {
        self.cars.back()
    }

    /// Maybe add a car on row 0.
    ///
    /// `player` is not consulted today; spawning only reacts to the other
    /// obstacles. `difficulty` (the level) makes close back-to-back spawns
    /// more likely to be dropped, capped at `MAX_DIFFICULTY`.
    pub fn maybe_spawn<R: RandomSource>(
        &mut self,
        _player: &Sprite,
        difficulty: u32,
        rng: &mut R,
    ) -> SpawnOutcome {
        if rng.next_in(0, 99) >= SPAWN_CHANCE_PERCENT {
            return SpawnOutcome::Skipped;
        }

        let Some(col) = rng.choose(&self.lanes) else {
            return SpawnOutcome::Skipped;
        };
        let candidate = Sprite::obstacle(0, col);

        let Some(last) = self.cars.back() else {
            return self.push(candidate);
        };

        if collides(&candidate, [last]) {
            trace!(col, last_row = last.row(), "spawn rejected: overlaps previous car");
            return SpawnOutcome::Overlapping;
        }

        if self.cars.len() >= 2 {
            let difficulty = difficulty.min(MAX_DIFFICULTY);
            let double = rng.next_in(0, DOUBLE_SPAWN_DRAW_MAX) < difficulty;
            if double && candidate.row() + DOUBLE_SPAWN_GAP_ROWS > last.row() {
                trace!(
                    col,
                    last_row = last.row(),
                    difficulty,
                    "spawn rejected: double spawn too close"
                );
                return SpawnOutcome::TooClose;
            }
        }

        self.push(candidate)
    }

    fn push(&mut self, car: Sprite) -> SpawnOutcome {
        trace!(col = car.col(), count = self.cars.len() + 1, "obstacle spawned");
        self.cars.push_back(car);
        SpawnOutcome::Spawned { col: car.col() }
    }

    /// Move every car down one row, erasing it from its old position.
    pub fn scroll<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) {
        for car in self.cars.iter_mut() {
            let (row, col) = (car.row() + 1, car.col());
            car.move_to(row, col, surface);
        }
    }

    /// Remove the front car once it reaches the bottom margin.
    ///
    /// Returns the number of cars removed: 0 or 1.
    pub fn reap<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) -> u32 {
        let (height, _) = surface.dimensions();
        let limit = height.saturating_sub(REAP_MARGIN_ROWS);

        match self.cars.front() {
            Some(front) if front.row() >= limit => {}
            _ => return 0,
        }

        let Some(car) = self.cars.pop_front() else {
            return 0;
        };
        car.clear(surface);
        debug!(row = car.row(), col = car.col(), remaining = self.cars.len(), "obstacle reaped");
        1
    }

    pub fn draw_all<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        for car in &self.cars {
            car.draw(surface);
        }
    }
}
