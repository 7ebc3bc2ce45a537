//! Overlay position selection.
//!
//! Coordinates are ffmpeg overlay-filter expressions rather than absolute
//! pixels: the right- and bottom-aligned corners subtract the overlay's own
//! dimensions (`overlay_w`/`overlay_h`) from the frame size, so the
//! watermark lands fully inside the frame whatever the resolution of the
//! base file or the size of the watermark image.

use crate::error::CoreError;

use rand::Rng;

use std::fmt;
use std::str::FromStr;

/// A named overlay anchor, 10 px in from the corresponding frame edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Position {
    /// All four corners, in the order random selection indexes them.
    pub const ALL: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// The overlay-filter x/y expressions for this corner.
    #[must_use]
    pub fn coords(self) -> (&'static str, &'static str) {
        match self {
            Position::TopLeft => ("10", "10"),
            Position::TopRight => ("main_w-overlay_w-10", "10"),
            Position::BottomLeft => ("10", "main_h-overlay_h-10"),
            Position::BottomRight => ("main_w-overlay_w-10", "main_h-overlay_h-10"),
        }
    }

    /// Builds the complete two-input overlay filter graph for this corner.
    #[must_use]
    pub fn overlay_filter(self) -> String {
        let (x, y) = self.coords();
        format!("[0:v][1:v]overlay={x}:{y}")
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
        };
        write!(f, "{name}")
    }
}

/// User-selected strategy for choosing overlay placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionMode {
    /// The same corner for every file in the run.
    Fixed(Position),
    /// A corner drawn uniformly at random, independently for every file.
    Random,
}

impl PositionMode {
    /// Resolves the mode to a concrete corner.
    ///
    /// Random mode draws fresh on every call; callers resolve once per file.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        match self {
            PositionMode::Fixed(position) => *position,
            PositionMode::Random => Position::ALL[rng.gen_range(0..Position::ALL.len())],
        }
    }
}

impl Default for PositionMode {
    fn default() -> Self {
        PositionMode::Random
    }
}

impl FromStr for PositionMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tl" => Ok(PositionMode::Fixed(Position::TopLeft)),
            "tr" => Ok(PositionMode::Fixed(Position::TopRight)),
            "bl" => Ok(PositionMode::Fixed(Position::BottomLeft)),
            "br" => Ok(PositionMode::Fixed(Position::BottomRight)),
            "random" => Ok(PositionMode::Random),
            _ => Err(CoreError::InvalidPositionMode(s.to_string())),
        }
    }
}

impl fmt::Display for PositionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionMode::Fixed(position) => write!(f, "{position}"),
            PositionMode::Random => write!(f, "random"),
        }
    }
}
