//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and provides
//! [`KeyPoller`], the crossterm implementation of the core `InputSource`.
//!
//! | Key | Action |
//! |-----|--------|
//! | ← or H or A | Steer left |
//! | → or L or D | Steer right |
//! | P | Pause/Resume |
//! | Q or Ctrl+C | Quit |

pub mod map;
pub mod poller;

pub use tui_racer_core as core;
pub use tui_racer_types as types;

pub use map::{handle_key_event, should_quit};
pub use poller::KeyPoller;
