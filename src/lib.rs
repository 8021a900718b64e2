//! Generate a perfect maze and watch a search explore it, one tick at a time
//!
//! A [MazeGenerator] builds a [Grid]; a [Solver] (depth-first or
//! breadth-first) then takes the grid over and marks squares as visited,
//! suspending after every tick so that a driver can render the
//! intermediate state.
//!
//! # Examples
//! ```
//! use maze_search::{Algorithm, Cell, MazeGenerator, Point};
//!
//! let mut gen = MazeGenerator::new(Some(7));
//! let grid = gen.generate(11, 11).unwrap();
//! assert_eq!(grid.get(Point::new(1, 1)), Some(Cell::Start));
//!
//! let mut solver = Algorithm::BreadthFirst.solver();
//! solver.solve(grid).unwrap();
//! while !solver.tick() {
//!     // render solver.grid() here
//! }
//! assert!(solver.goal_reached());
//! ```
//!
//! ## Text form
//! ```
//! use maze_search::{Algorithm, Grid};
//!
//! let maze = "
//! ⬛⬛⬛⬛⬛
//! ⬛🟩⬜⬜⬛
//! ⬛⬛⬛⬜⬛
//! ⬛🟥⬜⬜⬛
//! ⬛⬛⬛⬛⬛";
//! let grid = Grid::parse_emojis(maze.trim()).unwrap();
//! let report = maze_search::driver::run(&mut Algorithm::DepthFirst.solver(), grid).unwrap();
//! assert_eq!(report.ticks, 6);
//! report.print_report();
//! ```

use thiserror::Error;

pub mod driver;
pub mod grid;
pub mod maze_generator;
pub mod solver;

pub use crate::grid::{Cell, Direction, Grid, Point};
pub use crate::maze_generator::MazeGenerator;
pub use crate::solver::{Algorithm, Solver, SolverState};

/// Errors raised while building a maze or starting a search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Generation needs odd dimensions of at least [MazeGenerator::MIN_SIZE]
    #[error(
        "maze dimensions must be odd and at least {}, got {width}x{height}",
        MazeGenerator::MIN_SIZE
    )]
    InvalidDimensions { width: usize, height: usize },
    /// The grid does not hold exactly one square of the given kind
    #[error("expected exactly one {cell:?} square in maze, found {found}")]
    InvalidMaze { cell: Cell, found: usize },
    /// No rows, or rows without squares
    #[error("maze is empty")]
    Empty,
    /// Rows of differing length
    #[error("row {row} has {found} squares, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Unknown character in the text form
    #[error("unexpected character `{symbol}` at row={row}, col={col}")]
    UnexpectedSymbol { symbol: char, row: usize, col: usize },
    /// Border square that is not a wall
    #[error("border square at row={row}, col={col} is not a wall")]
    OpenBorder { row: usize, col: usize },
}
