//! Pipe-maze loop analysis.
//!
//! The pipeline is a strict chain: a sketch parses into a [`Grid`], the
//! ambiguous start tile is resolved, the loop is walked into a [`Cycle`],
//! and a magnified flood fill counts the tiles the loop encloses. Each
//! stage consumes the previous stage's output; there are no back-edges.

pub mod cli;
mod error;
mod grid;
pub mod magnify;
pub mod start;
pub mod walk;

pub use self::error::{MalformedGrid, MazeError};
pub use self::grid::{Coord, Direction, Grid, Links, Shape, Tile};
pub use self::walk::Cycle;

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use anyhow::{anyhow, bail, Context, Result};
    pub use bstr::{BStr, ByteSlice};

    pub use crate::{Coord, Cycle, Direction, Grid, MalformedGrid, MazeError, Shape};

    pub type ArrayVec<T, const N: usize = 4> = arrayvec::ArrayVec<T, N>;
}

/// Run the full analysis over a maze sketch.
///
/// Returns the farthest traversal distance on the loop and the number of
/// enclosed tiles.
///
/// # Examples
///
/// ```
/// let sketch = b".....\n.S-7.\n.|.|.\n.L-J.\n.....";
/// assert_eq!(maze::solve(sketch)?, (4, 1));
/// # Ok::<_, maze::MazeError>(())
/// ```
pub fn solve(input: &[u8]) -> Result<(usize, usize), MazeError> {
    let mut grid = Grid::parse(input)?;
    start::resolve(&mut grid)?;
    let cycle = walk::extract(&grid)?;
    let enclosed = magnify::enclosed(&grid, &cycle);
    Ok((cycle.farthest(), enclosed))
}
