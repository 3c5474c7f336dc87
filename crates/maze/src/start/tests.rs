use crate::error::MazeError;
use crate::grid::{Direction, Grid, Links, Shape};
use crate::start;

#[test]
fn resolves_square_loop() {
    let mut grid = Grid::parse(b".....\n.S-7.\n.|.|.\n.L-J.\n.....").unwrap();

    let dirs = start::resolve(&mut grid).unwrap();

    assert_eq!(dirs, [Direction::South, Direction::East]);
    assert_eq!(
        grid.tile((1, 1)).links(),
        Links::pair(Direction::South, Direction::East)
    );
    assert_eq!(grid.tile((1, 1)).resolved_shape(), Shape::BendSe);
}

#[test]
fn neighbors_must_point_back() {
    // The bend north of the start opens north and east, not south, so only
    // the east and south neighbors qualify.
    let mut grid = Grid::parse(b".L..\n.S-7\n.|..\n.L-J").unwrap();

    let dirs = start::resolve(&mut grid).unwrap();

    assert_eq!(dirs, [Direction::South, Direction::East]);
}

#[test]
fn under_connected_start() {
    let mut grid = Grid::parse(b"S7\n.|").unwrap();

    assert_eq!(
        start::resolve(&mut grid).unwrap_err(),
        MazeError::AmbiguousStart {
            x: 0,
            y: 0,
            found: 1,
        }
    );
}

#[test]
fn over_connected_start() {
    let mut grid = Grid::parse(b".|.\n-S-\n.|.").unwrap();

    assert_eq!(
        start::resolve(&mut grid).unwrap_err(),
        MazeError::AmbiguousStart {
            x: 1,
            y: 1,
            found: 4,
        }
    );
}

#[test]
fn idempotent() {
    let mut grid = Grid::parse(b".....\n.S-7.\n.|.|.\n.L-J.\n.....").unwrap();

    let first = start::resolve(&mut grid).unwrap();
    let links = grid.tile((1, 1)).links();

    let second = start::resolve(&mut grid).unwrap();

    assert_eq!(first, second);
    assert_eq!(grid.tile((1, 1)).links(), links);
}
