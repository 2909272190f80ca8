//! Terminal rendering module.
//!
//! The game draws into two bordered [`Window`]s (the road and the score
//! panel). Each window implements the core `RenderSurface` trait on top of a
//! small framebuffer and flushes only the cells that changed since its last
//! refresh.
//!
//! Goals:
//! - Keep `core` free of terminal I/O
//! - Redraw as little as possible per tick
//! - Keep window contents inspectable in tests (any `Write` can be the sink)

pub mod fb;
pub mod renderer;
pub mod window;

pub use tui_racer_core as core;
pub use tui_racer_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Palette, Rgb, CAR_CHAR};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use window::Window;
