use std::fmt;
use std::io;

/// Errors surfaced by the game session.
#[derive(Debug)]
pub enum RaceError {
    /// The display cannot fit the game and score panels.
    SurfaceTooSmall {
        height: u16,
        width: u16,
        min_height: u16,
        min_width: u16,
    },
    /// Flushing a surface or reading a key failed.
    Io(io::Error),
}

impl fmt::Display for RaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceTooSmall {
                height,
                width,
                min_height,
                min_width,
            } => write!(
                f,
                "the terminal window is too small: {width}x{height}, need at least {min_width}x{min_height}"
            ),
            Self::Io(err) => write!(f, "terminal i/o failed: {err}"),
        }
    }
}

impl std::error::Error for RaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::SurfaceTooSmall { .. } => None,
        }
    }
}

impl From<io::Error> for RaceError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
