//! Enclosure counting over a magnified plane.
//!
//! Flood fill on the original grid cannot tell "outside" from "inside"
//! where two pipe strands touch only at a corner. Each tile is therefore
//! expanded into a 4x4 sub-block whose interior reflects the pipe's true
//! occupied area, leaving a gap between corner-touching bodies, and the
//! fill runs over the magnified plane instead.


use std::collections::VecDeque;

use crate::grid::{Grid, Shape};
use crate::walk::Cycle;

/// Magnification factor per axis.
const SCALE: usize = 4;

/// The body pattern of a tile shape, `#` marking occupied sub-cells.
///
/// Ground fills the whole block so that non-pipe tiles introduce no
/// artificial gap; an unresolved start tile is treated the same way.
fn pattern(shape: Shape) -> [&'static [u8; SCALE]; SCALE] {
    match shape {
        Shape::Vertical => [b".##.", b".##.", b".##.", b".##."],
        Shape::Horizontal => [b"....", b"####", b"####", b"...."],
        Shape::BendNe => [b".##.", b".###", b".###", b"...."],
        Shape::BendNw => [b".##.", b"###.", b"###.", b"...."],
        Shape::BendSw => [b"....", b"###.", b"###.", b".##."],
        Shape::BendSe => [b"....", b".###", b".###", b".##."],
        Shape::Ground | Shape::Start => [b"####", b"####", b"####", b"####"],
    }
}

/// The whole grid expanded [`SCALE`] times per axis.
///
/// Built once per analysis run and dropped after counting. The plane
/// border coincides with the original grid border.
struct Plane {
    columns: usize,
    rows: usize,
    body: Vec<bool>,
}

impl Plane {
    fn new(grid: &Grid) -> Self {
        let columns = grid.columns_len() * SCALE;
        let rows = grid.rows_len() * SCALE;
        let mut body = vec![false; columns * rows];

        for y in 0..grid.rows_len() {
            for x in 0..grid.columns_len() {
                let pat = pattern(grid.tile((x, y)).resolved_shape());

                for (sy, row) in pat.iter().enumerate() {
                    for (sx, &b) in row.iter().enumerate() {
                        if b == b'#' {
                            body[(y * SCALE + sy) * columns + (x * SCALE + sx)] = true;
                        }
                    }
                }
            }
        }

        Self {
            columns,
            rows,
            body,
        }
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.columns + x
    }
}

/// Count original tiles strictly enclosed by the loop.
///
/// A multi-source flood fill visits every sub-cell that is not part of a
/// loop tile's body. A component touching the plane border at any single
/// sub-cell is outside; for every fully surrounded component, each
/// original tile that contributed at least one body sub-cell counts as
/// enclosed, once per tile. Linear in plane size.
pub fn enclosed(grid: &Grid, cycle: &Cycle) -> usize {
    let plane = Plane::new(grid);

    let wall = |x: usize, y: usize| {
        plane.body[plane.index(x, y)] && cycle.contains((x / SCALE, y / SCALE))
    };

    let mut visited = vec![false; plane.columns * plane.rows];
    let mut enclosed = vec![false; grid.columns_len() * grid.rows_len()];
    let mut queue = VecDeque::new();
    let mut component = Vec::new();

    for y in 0..plane.rows {
        for x in 0..plane.columns {
            if visited[plane.index(x, y)] || wall(x, y) {
                continue;
            }

            // Flood one component with an explicit queue to bound stack
            // depth on larger grids.
            let mut touches_border = false;
            component.clear();

            visited[plane.index(x, y)] = true;
            queue.push_back((x, y));

            while let Some((cx, cy)) = queue.pop_front() {
                if cx == 0 || cy == 0 || cx + 1 == plane.columns || cy + 1 == plane.rows {
                    touches_border = true;
                }

                if plane.body[plane.index(cx, cy)] {
                    component.push((cy / SCALE) * grid.columns_len() + cx / SCALE);
                }

                let neighbors = [
                    (cx, cy.wrapping_sub(1)),
                    (cx, cy + 1),
                    (cx.wrapping_sub(1), cy),
                    (cx + 1, cy),
                ];

                for (nx, ny) in neighbors {
                    if nx >= plane.columns || ny >= plane.rows {
                        continue;
                    }

                    if visited[plane.index(nx, ny)] || wall(nx, ny) {
                        continue;
                    }

                    visited[plane.index(nx, ny)] = true;
                    queue.push_back((nx, ny));
                }
            }

            if !touches_border {
                for &tile in &component {
                    enclosed[tile] = true;
                }
            }
        }
    }

    let count = enclosed.iter().filter(|e| **e).count();

    log::debug!(
        "{count} enclosed tiles over a {}x{} plane",
        plane.columns,
        plane.rows
    );

    count
}
