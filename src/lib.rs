//! TUI Racer (workspace facade crate).
//!
//! Re-exports the member crates as `tui_racer::{core,input,term,types}` and
//! holds the binary's environment configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_racer_core as core;
pub use tui_racer_input as input;
pub use tui_racer_term as term;
pub use tui_racer_types as types;

pub use config::RaceConfig;
