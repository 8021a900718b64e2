//! Maze squares and the grid holding them

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::MazeError;

/// State of a single square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Unvisited passage
    Open,
    /// Impassable, never changes
    Wall,
    /// Where the search begins
    Start,
    /// What the search is looking for
    Goal,
    /// Passage already explored by the search
    Visited,
}

impl Cell {
    const S_OPEN: char = '⬜';
    const S_WALL: char = '⬛';
    const S_START: char = '🟩';
    const S_GOAL: char = '🟥';
    const S_VISITED: char = '🟦';

    /// Character used for this square in the text form
    pub fn symbol(self) -> char {
        match self {
            Cell::Open => Self::S_OPEN,
            Cell::Wall => Self::S_WALL,
            Cell::Start => Self::S_START,
            Cell::Goal => Self::S_GOAL,
            Cell::Visited => Self::S_VISITED,
        }
    }

    /// Inverse of [Self::symbol]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            Self::S_OPEN => Some(Cell::Open),
            Self::S_WALL => Some(Cell::Wall),
            Self::S_START => Some(Cell::Start),
            Self::S_GOAL => Some(Cell::Goal),
            Self::S_VISITED => Some(Cell::Visited),
            _ => None,
        }
    }

    /// Can a search stand on this square
    pub fn is_passable(self) -> bool {
        match self {
            Cell::Wall => false,
            Cell::Open | Cell::Start | Cell::Goal | Cell::Visited => true,
        }
    }
}

/// Location in the maze, origin at the top left
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Adjacent point, or `None` when it would have a negative coordinate
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.offset();
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

/// The four ways out of a square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
}

impl Direction {
    /// Every direction, in the order searches try them
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    /// (row, col) delta
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
        }
    }
}

/// Rectangular maze, indexed `[row][col]`
///
/// The outer border is always wall. Public access is read-only; squares
/// change only through maze generation and the solvers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Build a grid from rows of squares
    ///
    /// Returns error, if there are no squares, rows differ in length or
    /// some border square is not a wall.
    pub fn from_rows(cells: Vec<Vec<Cell>>) -> Result<Self, MazeError> {
        let width = cells.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(MazeError::Empty);
        }
        let height = cells.len();

        for (row, squares) in cells.iter().enumerate() {
            if squares.len() != width {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: width,
                    found: squares.len(),
                });
            }
            for (col, cell) in squares.iter().enumerate() {
                let border = row == 0 || row == height - 1 || col == 0 || col == width - 1;
                if border && *cell != Cell::Wall {
                    return Err(MazeError::OpenBorder { row, col });
                }
            }
        }
        Ok(Self { cells })
    }

    /// Parse a grid from its text form, one row per line
    ///
    /// # Examples
    /// ```
    /// use maze_search::{Cell, Grid, Point};
    /// let grid = Grid::parse_emojis("⬛⬛⬛\n⬛🟩⬛\n⬛⬛⬛").unwrap();
    /// assert_eq!(grid.get(Point::new(1, 1)), Some(Cell::Start));
    /// ```
    pub fn parse_emojis(emojis: &str) -> Result<Self, MazeError> {
        let cells = emojis
            .lines()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, symbol)| {
                        Cell::from_symbol(symbol)
                            .ok_or(MazeError::UnexpectedSymbol { symbol, row, col })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(cells)
    }

    pub fn width(&self) -> usize {
        self.cells[0].len()
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Square at `point`, `None` outside the grid
    pub fn get(&self, point: Point) -> Option<Cell> {
        self.cells.get(point.row)?.get(point.col).copied()
    }

    pub(crate) fn set(&mut self, point: Point, cell: Cell) {
        self.cells[point.row][point.col] = cell;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Number of squares in the given state
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|c| **c == cell).count()
    }

    /// Location of the only square in the given state
    ///
    /// Returns [MazeError::InvalidMaze], if there are none or several.
    pub fn locate(&self, cell: Cell) -> Result<Point, MazeError> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, squares)| {
                squares
                    .iter()
                    .positions(move |c| *c == cell)
                    .map(move |col| Point::new(row, col))
            })
            .exactly_one()
            .map_err(|found| MazeError::InvalidMaze {
                cell,
                found: found.count(),
            })
    }

    /// Start and goal locations
    pub fn endpoints(&self) -> Result<(Point, Point), MazeError> {
        Ok((self.locate(Cell::Start)?, self.locate(Cell::Goal)?))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .cells
            .iter()
            .map(|row| row.iter().map(|c| c.symbol()).join(""))
            .join("\n");
        f.write_str(&text)
    }
}

impl FromStr for Grid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_emojis(s)
    }
}
