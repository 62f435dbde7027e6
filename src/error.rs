//! Error types for the board engine.
//!
//! Only one condition is a hard error: touching a coordinate outside the
//! board. Everything a player can cause through normal input (selecting
//! an empty cell, aiming at an unreachable destination) is reported as a
//! rejected outcome, not an `Err`.

use crate::board::Coord;

/// Coordinate access outside the board dimensions.
///
/// The presentation layer normally only passes coordinates it obtained
/// from the board itself, so this indicates a caller bug rather than bad
/// player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("coordinate {coord} is out of bounds for the {width}x{height} board")]
pub struct OutOfBounds {
    pub coord: Coord,
    pub width: usize,
    pub height: usize,
}

/// Why a `select` call was rejected as a no-op.
///
/// Rejections never mutate the board or the selection state; they exist
/// so the presentation layer can show feedback instead of guessing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    /// Selected an empty cell while nothing was armed.
    #[error("cell {0} is empty; select a ball first")]
    EmptySelection(Coord),
    /// No unobstructed path of empty cells connects the armed ball to
    /// the chosen destination.
    #[error("no open path from {from} to {to}")]
    UnreachableDestination { from: Coord, to: Coord },
}

/// Invalid game configuration detected at construction time.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board dimensions must be nonzero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("match threshold must be at least 2, got {0}")]
    InvalidThreshold(usize),
    #[error("color palette must not be empty")]
    EmptyPalette,
    #[error("spawn counts must be at least 1 (per turn: {spawn_per_turn}, initial: {initial_spawn})")]
    InvalidSpawnCounts {
        spawn_per_turn: usize,
        initial_spawn: usize,
    },
    #[error("board is {width}x{height} but the configuration expects {expected_width}x{expected_height}")]
    BoardMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },
}
