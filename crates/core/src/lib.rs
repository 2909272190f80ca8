//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and the tick loop. It never touches a
//! terminal directly: drawing and key reading go through the
//! [`RenderSurface`] and [`InputSource`] traits, and randomness through
//! [`RandomSource`]. That makes it:
//!
//! - **Deterministic**: a scripted random source and scripted keys replay a game exactly
//! - **Testable**: surfaces can be in-memory grids
//! - **Portable**: the terminal crate is just one implementation of the traits
//!
//! # Module Structure
//!
//! - [`sprite`]: car shape, bounding box, draw/clear/move
//! - [`collision`]: corner-in-box collision test
//! - [`obstacles`]: FIFO of obstacle cars with spawn, scroll and reap
//! - [`scoring`]: score, derived level and tick timeout
//! - [`layout`]: display validation, panel placement and lane columns
//! - [`session`]: the game session and its tick loop
//! - [`rng`]: LCG and scripted random sources
//!
//! # Game Rules
//!
//! - Three lanes; obstacles enter at the top of a random lane
//! - Each tick has a 30% chance of trying to spawn an obstacle
//! - Higher levels drop more of the spawns that would follow too closely
//! - One point per obstacle that leaves the road; a level every 10 points
//! - The game speeds up 10ms per level, from 100ms down to 50ms per tick
//! - Touching any obstacle ends the game
//!
//! # Example
//!
//! ```
//! use tui_racer_core::{collides, Sprite};
//!
//! let player = Sprite::player(14, 5);
//! let oncoming = Sprite::obstacle(11, 5);
//! assert!(collides(&player, [&oncoming]));
//! ```

pub mod collision;
pub mod error;
pub mod layout;
pub mod obstacles;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod sprite;
pub mod surface;

pub use tui_racer_types as types;

// Re-export commonly used types for convenience
pub use collision::collides;
pub use error::RaceError;
pub use layout::{Layout, Rect};
pub use obstacles::{ObstacleManager, SpawnOutcome};
pub use rng::{RandomSource, ScriptedRandom, SimpleRng};
pub use scoring::{level_for_score, tick_timeout_ms, Scoreboard};
pub use session::{GameSession, Outcome, SessionState, Termination};
pub use sprite::{BoundingBox, Point, Sprite, SpriteKind};
pub use surface::{InputSource, RenderSurface};
