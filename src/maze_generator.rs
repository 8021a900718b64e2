//! Map generation

use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::grid::{Cell, Direction, Grid};
use crate::MazeError;

/// Perfect maze generator
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    /// Smallest accepted width and height
    pub const MIN_SIZE: usize = 5;

    /// Create generator, reproducible if `seed` is given
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate a perfect maze (exactly one path between any two passages)
    ///
    /// Start is placed at (1, 1) and goal at (height - 2, width - 2).
    ///
    /// Every interior square with even row and column becomes a wall
    /// "pole", which then falls over in a random direction onto an open
    /// neighbour. Only the first row of poles may fall upwards; below
    /// that, an upward fall could close a loop of walls and cut off part
    /// of the maze.
    ///
    /// Returns [MazeError::InvalidDimensions], if either dimension is even
    /// or smaller than [Self::MIN_SIZE].
    pub fn generate(&mut self, width: usize, height: usize) -> Result<Grid, MazeError> {
        if width < Self::MIN_SIZE || height < Self::MIN_SIZE || width % 2 == 0 || height % 2 == 0
        {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        let mut cells: Vec<Vec<Cell>> = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| {
                        if y == 0 || y == height - 1 || x == 0 || x == width - 1 {
                            Cell::Wall
                        } else {
                            Cell::Open
                        }
                    })
                    .collect()
            })
            .collect();

        for y in (2..height - 1).step_by(2) {
            for x in (2..width - 1).step_by(2) {
                cells[y][x] = Cell::Wall;

                loop {
                    let direction = Direction::ALL[self.random.gen_range(0..Direction::ALL.len())];
                    if direction == Direction::Up && y != 2 {
                        continue;
                    }
                    let (dy, dx) = direction.offset();
                    let target = &mut cells[(y as isize + dy) as usize][(x as isize + dx) as usize];
                    if *target == Cell::Open {
                        *target = Cell::Wall;
                        break;
                    }
                }
            }
        }

        cells[1][1] = Cell::Start;
        cells[height - 2][width - 2] = Cell::Goal;

        let grid = Grid::from_rows(cells)?;
        debug!(
            "Generated {}x{} maze with {} open squares",
            width,
            height,
            grid.count(Cell::Open)
        );
        Ok(grid)
    }
}
