//! The failure taxonomy of the analysis pipeline.

use thiserror::Error;

/// Errors surfaced by the analysis pipeline.
///
/// All of these abort the run. There is no partial-result mode; the two
/// outputs are only meaningful once the full loop and enclosure computation
/// succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// The sketch is not a rectangular grid with exactly one start tile.
    #[error("malformed grid: {0}")]
    MalformedGrid(#[from] MalformedGrid),

    /// The start tile does not have exactly two neighbors pointing back at
    /// it.
    #[error("start tile at ({x}, {y}) has {found} connecting neighbors, expected exactly 2")]
    AmbiguousStart { x: usize, y: usize, found: usize },

    /// The loop walk hit a branching or dead-end tile, or ran before the
    /// start tile was resolved.
    #[error("invariant violation at ({x}, {y}): {reason}")]
    InvariantViolation {
        x: usize,
        y: usize,
        reason: &'static str,
    },
}

/// The ways a sketch can fail to be a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedGrid {
    #[error("empty sketch")]
    Empty,
    #[error("line {row} has length {len}, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("unknown glyph {glyph:?} at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },
    #[error("no start tile in sketch")]
    MissingStart,
    #[error("more than one start tile, at ({x1}, {y1}) and ({x2}, {y2})")]
    MultipleStarts {
        x1: usize,
        y1: usize,
        x2: usize,
        y2: usize,
    },
}
