//! Obstacle manager tests: spawn spacing and FIFO reaping under random play

use std::io;

use tui_racer::core::{
    collides, layout::lane_columns, ObstacleManager, RandomSource, Rect, RenderSurface,
    ScriptedRandom, SimpleRng, SpawnOutcome, Sprite,
};
use tui_racer::term::Window;

fn road(height: u16) -> Window<io::Sink> {
    Window::new(Rect::new(0, 0, 14, height), io::sink())
}

fn assert_spaced(obstacles: &ObstacleManager) {
    let cars: Vec<&Sprite> = obstacles.iter().collect();
    for pair in cars.windows(2) {
        assert!(
            !collides(pair[1], [pair[0]]),
            "adjacent obstacles overlap: {:?} / {:?}",
            pair[0],
            pair[1]
        );
        // Older cars are never above newer ones.
        assert!(pair[0].row() >= pair[1].row());
    }
}

#[test]
fn test_random_play_keeps_obstacles_spaced_and_ordered() {
    let player = Sprite::player(14, 5);
    for seed in 1..20u32 {
        let mut rng = SimpleRng::new(seed);
        let mut surface = road(24);
        let mut obstacles = ObstacleManager::new(lane_columns());

        for tick in 0..500u32 {
            let difficulty = tick / 50;
            obstacles.maybe_spawn(&player, difficulty, &mut rng);
            assert_spaced(&obstacles);

            obstacles.scroll(&mut surface);
            obstacles.draw_all(&mut surface);

            let before = obstacles.len();
            let reaped = obstacles.reap(&mut surface);
            assert!(reaped <= 1);
            assert_eq!(obstacles.len() + reaped as usize, before);
        }
    }
}

#[test]
fn test_spawns_only_in_allowed_lanes_on_top_row() {
    let lanes = lane_columns();
    let player = Sprite::player(14, 5);
    let mut rng = SimpleRng::new(77);
    let mut surface = road(24);
    let mut obstacles = ObstacleManager::new(lanes);

    for _ in 0..300 {
        let before = obstacles.back().copied();
        if let SpawnOutcome::Spawned { col } = obstacles.maybe_spawn(&player, 3, &mut rng) {
            assert!(lanes.contains(&col));
            let newest = obstacles.back().unwrap();
            assert_eq!(newest.row(), 0);
            assert_ne!(Some(*newest), before);
        }
        obstacles.scroll(&mut surface);
        obstacles.reap(&mut surface);
    }
}

#[test]
fn test_reap_only_takes_front_at_bottom_margin() {
    let mut surface = road(20);
    let mut obstacles = ObstacleManager::new(lane_columns());
    let player = Sprite::player(12, 1);

    // Two cars five rows apart in lane 9.
    let mut rng = ScriptedRandom::new([0, 2]);
    obstacles.maybe_spawn(&player, 0, &mut rng);
    for _ in 0..5 {
        obstacles.scroll(&mut surface);
    }
    let mut rng = ScriptedRandom::new([0, 2]);
    assert!(obstacles.maybe_spawn(&player, 0, &mut rng).spawned());

    // Height 20: front is reaped once its row reaches 16.
    for _ in 0..10 {
        obstacles.scroll(&mut surface);
        assert_eq!(obstacles.reap(&mut surface), 0);
    }
    obstacles.scroll(&mut surface);
    assert_eq!(obstacles.front().unwrap().row(), 16);
    assert_eq!(obstacles.reap(&mut surface), 1);
    assert_eq!(obstacles.len(), 1);
    assert_eq!(obstacles.front().unwrap().row(), 11);
    assert_eq!(obstacles.reap(&mut surface), 0);
}

#[test]
fn test_reaped_car_is_erased_from_surface() {
    let mut surface = road(20);
    let mut obstacles = ObstacleManager::new(lane_columns());
    let mut rng = ScriptedRandom::new([0, 0]);
    obstacles.maybe_spawn(&Sprite::player(12, 9), 0, &mut rng);
    for _ in 0..16 {
        obstacles.scroll(&mut surface);
    }
    obstacles.draw_all(&mut surface);
    assert_eq!(surface.frame().get(1, 17).unwrap().ch, tui_racer::term::CAR_CHAR);

    assert_eq!(obstacles.reap(&mut surface), 1);
    for row in 1..surface.dimensions().0 - 1 {
        assert!(!surface.frame().row_text(row).contains(tui_racer::term::CAR_CHAR));
    }
}

/// Always spawns, always in the same lane.
struct SameLane(u32);

impl RandomSource for SameLane {
    fn next_in(&mut self, lo: u32, hi: u32) -> u32 {
        self.0.clamp(lo, hi)
    }
}

#[test]
fn test_same_lane_spawns_wait_for_clearance() {
    let mut surface = road(40);
    let mut obstacles = ObstacleManager::new(lane_columns());
    let player = Sprite::player(24, 9);
    let mut rng = SameLane(0);

    let mut spawn_ticks = Vec::new();
    for tick in 0..16 {
        if obstacles.maybe_spawn(&player, 0, &mut rng).spawned() {
            spawn_ticks.push(tick);
        }
        obstacles.scroll(&mut surface);
    }
    // A car in the same lane blocks row 0 until it has moved 5 rows down.
    assert_eq!(spawn_ticks, vec![0, 5, 10, 15]);
}

#[test]
fn test_spawn_only_guards_against_the_newest_car() {
    // Lanes 0, 1, 0 on consecutive ticks, no double-spawn pressure.
    let player = Sprite::player(14, 5);
    let mut rng = ScriptedRandom::new([0, 0, 0, 1, 0, 0]);
    let mut surface = road(24);
    let mut obstacles = ObstacleManager::new(lane_columns());

    for _ in 0..3 {
        assert!(obstacles.maybe_spawn(&player, 0, &mut rng).spawned());
        obstacles.scroll(&mut surface);
    }

    let cars: Vec<Sprite> = obstacles.iter().copied().collect();
    let positions: Vec<(u16, u16)> = cars.iter().map(|c| (c.row(), c.col())).collect();
    assert_eq!(positions, vec![(3, 1), (2, 5), (1, 1)]);

    // Neighbours in spawn order are clear of each other...
    assert!(!collides(&cars[1], [&cars[0]]));
    assert!(!collides(&cars[2], [&cars[1]]));
    // ...but the first and third cars share lane 0 and overlap.
    assert!(collides(&cars[2], [&cars[0]]));
    let first = cars[0].body();
    assert!(cars[2].body().iter().any(|p| first.contains(p)));
}
