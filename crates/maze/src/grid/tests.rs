use crate::error::{MalformedGrid, MazeError};

use super::{Direction, Grid, Links, Shape};

#[test]
fn shape_links() {
    use Direction::{East, North, South, West};

    assert_eq!(Shape::Vertical.links(), Links::pair(North, South));
    assert_eq!(Shape::Horizontal.links(), Links::pair(East, West));
    assert_eq!(Shape::BendNe.links(), Links::pair(North, East));
    assert_eq!(Shape::BendNw.links(), Links::pair(North, West));
    assert_eq!(Shape::BendSw.links(), Links::pair(South, West));
    assert_eq!(Shape::BendSe.links(), Links::pair(South, East));
    assert!(Shape::Ground.links().is_empty());
    assert!(Shape::Start.links().is_empty());
}

#[test]
fn unknown_glyphs_rejected() {
    for b in [b'X', b'0', b' ', b'*'] {
        assert!(Shape::from_glyph(b).is_none());
    }
}

#[test]
fn parse_square_loop() {
    let grid = Grid::parse(b".....\n.S-7.\n.|.|.\n.L-J.\n.....").unwrap();

    assert_eq!(grid.columns_len(), 5);
    assert_eq!(grid.rows_len(), 5);
    assert_eq!(grid.start(), (1, 1));
    assert_eq!(grid.tile((2, 1)).shape(), Shape::Horizontal);
    assert_eq!(grid.tile((3, 3)).shape(), Shape::BendNw);

    // The horizontal run connects east into the bend..
    assert_eq!(grid.connected((2, 1), Direction::East), Some((3, 1)));
    // ..but not north into ground.
    assert_eq!(grid.connected((2, 1), Direction::North), None);
}

#[test]
fn blank_line_terminates_sketch() {
    let grid = Grid::parse(b"S7\nLJ\n\nthis is not part of the sketch").unwrap();

    assert_eq!(grid.columns_len(), 2);
    assert_eq!(grid.rows_len(), 2);
}

#[test]
fn one_sided_declarations_do_not_connect() {
    // A vertical pipe above a horizontal one: each declares links, but
    // neither points at the other.
    let grid = Grid::parse(b"S.\n|.\n-.").unwrap();

    assert_eq!(grid.connected((0, 1), Direction::South), None);
    assert_eq!(grid.connected((0, 2), Direction::North), None);
}

#[test]
fn step_respects_bounds() {
    let grid = Grid::parse(b"S7\nLJ").unwrap();

    assert_eq!(grid.step((0, 0), Direction::North), None);
    assert_eq!(grid.step((0, 0), Direction::West), None);
    assert_eq!(grid.step((1, 1), Direction::South), None);
    assert_eq!(grid.step((1, 1), Direction::East), None);
    assert_eq!(grid.step((0, 0), Direction::East), Some((1, 0)));
}

#[test]
fn ragged_rows() {
    assert_eq!(
        Grid::parse(b"S-7\n|.|.\nL-J").unwrap_err(),
        MazeError::MalformedGrid(MalformedGrid::RaggedRow {
            row: 2,
            len: 4,
            expected: 3,
        })
    );
}

#[test]
fn missing_start() {
    assert_eq!(
        Grid::parse(b"F7\nLJ").unwrap_err(),
        MazeError::MalformedGrid(MalformedGrid::MissingStart)
    );
}

#[test]
fn multiple_starts() {
    assert_eq!(
        Grid::parse(b"SS\nLJ").unwrap_err(),
        MazeError::MalformedGrid(MalformedGrid::MultipleStarts {
            x1: 0,
            y1: 0,
            x2: 1,
            y2: 0,
        })
    );
}

#[test]
fn unknown_glyph() {
    assert_eq!(
        Grid::parse(b"S7\nLX").unwrap_err(),
        MazeError::MalformedGrid(MalformedGrid::UnknownGlyph {
            glyph: 'X',
            x: 1,
            y: 1,
        })
    );
}

#[test]
fn empty_input() {
    assert_eq!(
        Grid::parse(b"").unwrap_err(),
        MazeError::MalformedGrid(MalformedGrid::Empty)
    );
    assert_eq!(
        Grid::parse(b"\nS7\nLJ").unwrap_err(),
        MazeError::MalformedGrid(MalformedGrid::Empty)
    );
}

#[test]
fn resolved_shape_follows_links() {
    let mut grid = Grid::parse(b"S7\nLJ").unwrap();

    assert_eq!(grid.tile((0, 0)).resolved_shape(), Shape::Ground);

    let mut links = Links::EMPTY;
    links.insert(Direction::South);
    links.insert(Direction::East);
    grid.tile_mut((0, 0)).set_links(links);

    assert_eq!(grid.tile((0, 0)).resolved_shape(), Shape::BendSe);
    assert_eq!(grid.tile((0, 0)).shape(), Shape::Start);
}
