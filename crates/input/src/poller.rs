//! Crossterm-backed input source.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use tracing::trace;

use crate::core::InputSource;
use crate::map::handle_key_event;
use crate::types::{GameAction, BASE_TICK_MS};

/// Reads at most one terminal event per poll.
///
/// Events that do not map to an action (resizes, mouse, unbound keys) are
/// consumed and reported as `None`, so a poll never waits longer than the
/// timeout.
#[derive(Debug, Clone)]
pub struct KeyPoller {
    timeout: Duration,
}

impl Default for KeyPoller {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyPoller {
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_millis(BASE_TICK_MS as u64),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl InputSource for KeyPoller {
    fn poll_key(&mut self) -> io::Result<Option<GameAction>> {
        if !event::poll(self.timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => {
                let action = handle_key_event(key);
                trace!(code = ?key.code, ?action, "key");
                Ok(action)
            }
            _ => Ok(None),
        }
    }

    fn set_timeout(&mut self, timeout_ms: u32) {
        self.timeout = Duration::from_millis(timeout_ms as u64);
    }
}
