//! Resolution of the ambiguous start tile.

#[cfg(test)]
mod tests;

use arrayvec::ArrayVec;

use crate::error::MazeError;
use crate::grid::{Direction, Grid, Links};

/// Patch the start tile's connection set from its neighbors.
///
/// A neighbor qualifies if it exists and its shape-implied links point back
/// at the start tile. Exactly two must qualify; those two directions become
/// the start tile's links. Anything else means the input is malformed and
/// resolution fails with [`MazeError::AmbiguousStart`].
///
/// Calling this again after a successful resolution is a no-op returning
/// the same directions, since qualification only looks at the neighbors'
/// shape-implied sets.
pub fn resolve(grid: &mut Grid) -> Result<[Direction; 2], MazeError> {
    let start = grid.start();

    let mut qualifying = ArrayVec::<Direction, 4>::new();

    for d in Direction::ALL {
        let Some(n) = grid.step(start, d) else {
            continue;
        };

        if grid.tile(n).links().contains(d.reverse()) {
            qualifying.push(d);
        }
    }

    let &[a, b] = &qualifying[..] else {
        return Err(MazeError::AmbiguousStart {
            x: start.0,
            y: start.1,
            found: qualifying.len(),
        });
    };

    grid.tile_mut(start).set_links(Links::pair(a, b));

    log::debug!("start at ({}, {}) connects {a:?} and {b:?}", start.0, start.1);

    Ok([a, b])
}
