//! Extraction of the pipe loop and the farthest point on it.


use crate::error::MazeError;
use crate::grid::{Coord, Direction, Grid};

/// The simple cycle of tiles reachable from the start tile.
#[derive(Debug)]
pub struct Cycle {
    path: Vec<Coord>,
    mask: Vec<bool>,
    columns: usize,
}

impl Cycle {
    /// Number of tiles on the loop.
    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The farthest traversal distance from the start tile.
    ///
    /// The loop is a simple cycle of even length, so this is half the loop
    /// length whichever way the walk went.
    #[inline]
    pub fn farthest(&self) -> usize {
        self.path.len() / 2
    }

    /// Test whether the tile at `c` is on the loop.
    #[inline]
    pub fn contains(&self, (x, y): Coord) -> bool {
        self.mask[y * self.columns + x]
    }

    /// Loop tiles in traversal order, starting at the start tile.
    #[inline]
    pub fn tiles(&self) -> impl Iterator<Item = Coord> + '_ {
        self.path.iter().copied()
    }
}

/// Walk the loop from the start tile, leaving through the first of its two
/// resolved directions.
pub fn extract(grid: &Grid) -> Result<Cycle, MazeError> {
    let start = grid.start();

    let Some(initial) = grid.tile(start).links().iter().next() else {
        return Err(violation(start, "start tile is unresolved"));
    };

    extract_from(grid, initial)
}

/// Walk the loop with a pinned initial direction.
///
/// Either of the start tile's two directions may be chosen; the quantities
/// computed from the resulting cycle are invariant under that choice.
pub fn extract_from(grid: &Grid, initial: Direction) -> Result<Cycle, MazeError> {
    let start = grid.start();

    if !grid.tile(start).links().contains(initial) {
        return Err(violation(start, "initial direction is not a start connection"));
    }

    let mut path = Vec::new();
    let mut mask = vec![false; grid.columns_len() * grid.rows_len()];

    let mut pos = start;
    let mut dir = initial;

    loop {
        path.push(pos);
        mask[pos.1 * grid.columns_len() + pos.0] = true;

        let Some(next) = grid.connected(pos, dir) else {
            return Err(violation(pos, "pipe dead-ends"));
        };

        if next == start {
            break;
        }

        let tile = grid.tile(next);

        if tile.links().len() != 2 {
            return Err(violation(next, "branching tile on the loop"));
        }

        let Some(out) = tile.links().iter().find(|d| *d != dir.reverse()) else {
            return Err(violation(next, "pipe dead-ends"));
        };

        pos = next;
        dir = out;
    }

    log::debug!(
        "loop of {} tiles, farthest point {}",
        path.len(),
        path.len() / 2
    );

    Ok(Cycle {
        path,
        mask,
        columns: grid.columns_len(),
    })
}

fn violation((x, y): Coord, reason: &'static str) -> MazeError {
    MazeError::InvariantViolation { x, y, reason }
}
