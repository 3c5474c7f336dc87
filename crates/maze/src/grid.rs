//! The maze grid and the connectivity implied by tile shapes.

#[cfg(test)]
mod tests;

use core::fmt;

use bstr::ByteSlice;

use crate::error::{MalformedGrid, MazeError};

/// A tile coordinate as `(x, y)`, with `x` growing east and `y` growing
/// south.
pub type Coord = (usize, usize);

/// One of the four cardinal directions a pipe can open towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in the order neighbors are examined.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The direction pointing back at the sender.
    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            Direction::North => 1,
            Direction::South => 1 << 1,
            Direction::East => 1 << 2,
            Direction::West => 1 << 3,
        }
    }
}

/// A set of outward connection directions.
///
/// Every non-ground shape declares exactly two of these; ground declares
/// none, and the start tile declares none until it has been resolved.
///
/// # Examples
///
/// ```
/// use maze::{Direction, Shape};
///
/// let links = Shape::BendNe.links();
/// assert!(links.contains(Direction::North));
/// assert!(links.contains(Direction::East));
/// assert_eq!(links.len(), 2);
/// ```
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub struct Links(u8);

impl Links {
    /// The empty set.
    pub const EMPTY: Links = Links(0);

    /// The set holding the two given directions.
    #[inline]
    pub const fn pair(a: Direction, b: Direction) -> Self {
        Links(a.bit() | b.bit())
    }

    /// Test whether the set contains `d`.
    #[inline]
    pub fn contains(self, d: Direction) -> bool {
        self.0 & d.bit() != 0
    }

    /// Add `d` to the set.
    #[inline]
    pub fn insert(&mut self, d: Direction) {
        self.0 |= d.bit();
    }

    /// Number of directions in the set.
    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Test whether the set is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the directions in the set.
    #[inline]
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl fmt::Debug for Links {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// The closed set of tile shapes in the sketch alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Vertical,
    Horizontal,
    BendNe,
    BendNw,
    BendSw,
    BendSe,
    Ground,
    Start,
}

impl Shape {
    /// Decode a sketch glyph.
    ///
    /// Glyphs outside the alphabet are rejected here rather than defaulted,
    /// so a bad sketch fails at parse time.
    #[inline]
    pub fn from_glyph(b: u8) -> Option<Shape> {
        match b {
            b'|' => Some(Shape::Vertical),
            b'-' => Some(Shape::Horizontal),
            b'L' => Some(Shape::BendNe),
            b'J' => Some(Shape::BendNw),
            b'7' => Some(Shape::BendSw),
            b'F' => Some(Shape::BendSe),
            b'.' => Some(Shape::Ground),
            b'S' => Some(Shape::Start),
            _ => None,
        }
    }

    /// The connection set implied by the shape alone.
    pub fn links(self) -> Links {
        use Direction::{East, North, South, West};

        match self {
            Shape::Vertical => Links::pair(North, South),
            Shape::Horizontal => Links::pair(East, West),
            Shape::BendNe => Links::pair(North, East),
            Shape::BendNw => Links::pair(North, West),
            Shape::BendSw => Links::pair(South, West),
            Shape::BendSe => Links::pair(South, East),
            Shape::Ground | Shape::Start => Links::EMPTY,
        }
    }
}

/// One grid cell: its parsed shape and its outward connection set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    shape: Shape,
    links: Links,
}

impl Tile {
    #[inline]
    fn new(shape: Shape) -> Self {
        Self {
            shape,
            links: shape.links(),
        }
    }

    /// The shape the tile was parsed as.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// The tile's outward connection set.
    #[inline]
    pub fn links(&self) -> Links {
        self.links
    }

    /// The effective shape: a resolved start tile is reported as the run or
    /// bend its connections form, an unresolved one as ground.
    pub fn resolved_shape(&self) -> Shape {
        use Direction::{East, North, South, West};

        if !matches!(self.shape, Shape::Start) {
            return self.shape;
        }

        let l = self.links;

        match (
            l.contains(North),
            l.contains(South),
            l.contains(East),
            l.contains(West),
        ) {
            (true, true, false, false) => Shape::Vertical,
            (false, false, true, true) => Shape::Horizontal,
            (true, false, true, false) => Shape::BendNe,
            (true, false, false, true) => Shape::BendNw,
            (false, true, false, true) => Shape::BendSw,
            (false, true, true, false) => Shape::BendSe,
            _ => Shape::Ground,
        }
    }

    #[inline]
    pub(crate) fn set_links(&mut self, links: Links) {
        self.links = links;
    }
}

/// A rectangular arena of tiles indexed by coordinate.
///
/// Tiles are created once at parse time and referenced by position
/// throughout; connections are direction flags plus coordinate lookups, so
/// there is no shared or cyclic ownership.
#[derive(Debug)]
pub struct Grid {
    columns: usize,
    rows: usize,
    tiles: Vec<Tile>,
    start: Coord,
}

impl Grid {
    /// Parse a maze sketch.
    ///
    /// Rows are consumed until end of input or the first blank line. The
    /// sketch must be rectangular and contain exactly one start tile.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze::Shape;
    ///
    /// let grid = maze::Grid::parse(b".....\n.S-7.\n.|.|.\n.L-J.\n.....")?;
    ///
    /// assert_eq!(grid.columns_len(), 5);
    /// assert_eq!(grid.rows_len(), 5);
    /// assert_eq!(grid.start(), (1, 1));
    /// assert_eq!(grid.tile((3, 1)).shape(), Shape::BendSw);
    /// # Ok::<_, maze::MazeError>(())
    /// ```
    pub fn parse(input: &[u8]) -> Result<Self, MazeError> {
        let mut columns = 0;
        let mut rows = 0;
        let mut tiles = Vec::new();
        let mut start = None;

        for (y, line) in input.lines().enumerate() {
            if line.is_empty() {
                break;
            }

            if y == 0 {
                columns = line.len();
            } else if line.len() != columns {
                return Err(MalformedGrid::RaggedRow {
                    row: y + 1,
                    len: line.len(),
                    expected: columns,
                }
                .into());
            }

            for (x, &b) in line.iter().enumerate() {
                let Some(shape) = Shape::from_glyph(b) else {
                    return Err(MalformedGrid::UnknownGlyph {
                        glyph: char::from(b),
                        x,
                        y,
                    }
                    .into());
                };

                if matches!(shape, Shape::Start) {
                    if let Some((x1, y1)) = start {
                        return Err(MalformedGrid::MultipleStarts {
                            x1,
                            y1,
                            x2: x,
                            y2: y,
                        }
                        .into());
                    }

                    start = Some((x, y));
                }

                tiles.push(Tile::new(shape));
            }

            rows += 1;
        }

        if tiles.is_empty() {
            return Err(MalformedGrid::Empty.into());
        }

        let Some(start) = start else {
            return Err(MalformedGrid::MissingStart.into());
        };

        Ok(Self {
            columns,
            rows,
            tiles,
            start,
        })
    }

    /// Get number of columns in the grid.
    #[inline]
    pub fn columns_len(&self) -> usize {
        self.columns
    }

    /// Get number of rows in the grid.
    #[inline]
    pub fn rows_len(&self) -> usize {
        self.rows
    }

    /// Coordinate of the start tile.
    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Get the tile at the given coordinate.
    #[inline]
    #[track_caller]
    pub fn tile(&self, c: Coord) -> &Tile {
        match self.try_tile(c) {
            Some(tile) => tile,
            None => panic!("missing tile at ({}, {})", c.0, c.1),
        }
    }

    /// Get the tile at the given coordinate.
    #[inline]
    pub fn try_tile(&self, (x, y): Coord) -> Option<&Tile> {
        if x >= self.columns || y >= self.rows {
            return None;
        }

        self.tiles.get(y * self.columns + x)
    }

    #[inline]
    pub(crate) fn tile_mut(&mut self, (x, y): Coord) -> &mut Tile {
        &mut self.tiles[y * self.columns + x]
    }

    /// Step one tile in the given direction, `None` when leaving the grid.
    #[inline]
    pub fn step(&self, (x, y): Coord, d: Direction) -> Option<Coord> {
        let c = match d {
            Direction::North => (x, y.checked_sub(1)?),
            Direction::South => (x, y + 1),
            Direction::East => (x + 1, y),
            Direction::West => (x.checked_sub(1)?, y),
        };

        (c.0 < self.columns && c.1 < self.rows).then_some(c)
    }

    /// The neighbor connected to `c` through `d`.
    ///
    /// A connection only exists once the mutual check passes: the tile at
    /// `c` must open towards `d` and the neighbor must open back. One-sided
    /// declarations never connect.
    #[inline]
    pub fn connected(&self, c: Coord, d: Direction) -> Option<Coord> {
        if !self.tile(c).links().contains(d) {
            return None;
        }

        let n = self.step(c, d)?;

        self.tile(n).links().contains(d.reverse()).then_some(n)
    }
}
