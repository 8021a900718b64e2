//! Tick-by-tick maze search
//!
//! A [Solver] takes ownership of a [Grid] in [Solver::solve] and then
//! explores it one tick at a time: every call to [Solver::tick] processes
//! exactly one frontier square and returns. Between ticks the grid can be
//! read through [Solver::grid] but is never touched, so a driver decides
//! the pace of the search.

use clap::ValueEnum;
use log::{debug, info, trace};

use crate::grid::{Cell, Direction, Grid, Point};
use crate::MazeError;

mod breadth_first;
mod depth_first;

use breadth_first::BreadthFirst;
use depth_first::DepthFirst;

/// Lifecycle of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverState {
    /// No grid yet
    #[default]
    Idle,
    /// Exploring, waiting for the next tick
    Running,
    /// Goal found, frontier exhausted or stopped with [Solver::finish]
    Finished,
}

/// Available search strategies
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Follow one corridor to its end before backtracking
    DepthFirst,
    /// Widen the explored area one step at a time
    BreadthFirst,
}

impl Algorithm {
    /// Fresh idle solver of this kind
    pub fn solver(self) -> Solver {
        Solver::new(self)
    }
}

/// Everything a strategy may touch during a tick
#[derive(Debug, Default)]
pub(crate) struct Search {
    grid: Option<Grid>,
    state: SolverState,
    goal_reached: bool,
    stop_on_goal: bool,
    ticks: usize,
}

impl Search {
    /// Adopt `grid` and mark `start` as visited
    fn begin(&mut self, mut grid: Grid, start: Point) {
        grid.set(start, Cell::Visited);
        self.grid = Some(grid);
        self.state = SolverState::Running;
        self.goal_reached = false;
        self.ticks = 0;
    }
}

/// Squares waiting to be explored
#[derive(Debug)]
enum Frontier {
    DepthFirst(DepthFirst),
    BreadthFirst(BreadthFirst),
}

/// Maze search advancing one tick at a time
///
/// Only the state machine is exposed: the grid is readable between ticks
/// and changes only inside [Self::tick].
///
/// ```compile_fail
/// use maze_search::{Algorithm, Solver};
/// let mut solver = Solver::new(Algorithm::DepthFirst);
/// solver.explore();
/// ```
///
/// ```compile_fail
/// use maze_search::{Algorithm, Point, Solver};
/// let mut solver = Solver::new(Algorithm::DepthFirst);
/// solver.begin(Point::new(0, 0));
/// ```
///
/// ```compile_fail
/// use maze_search::{Cell, MazeGenerator, Point, Solver, Algorithm};
/// let mut solver = Solver::new(Algorithm::BreadthFirst);
/// solver.solve(MazeGenerator::new(Some(1)).generate(5, 5).unwrap()).unwrap();
/// solver.grid().unwrap().set(Point::new(1, 2), Cell::Visited);
/// ```
#[derive(Debug)]
pub struct Solver {
    search: Search,
    frontier: Frontier,
}

impl Solver {
    /// Idle solver using the given strategy
    pub fn new(algorithm: Algorithm) -> Self {
        let frontier = match algorithm {
            Algorithm::DepthFirst => Frontier::DepthFirst(DepthFirst::default()),
            Algorithm::BreadthFirst => Frontier::BreadthFirst(BreadthFirst::default()),
        };
        Self {
            search: Search::default(),
            frontier,
        }
    }

    /// End the tick the moment the goal is seen
    ///
    /// By default a tick that comes across the goal still runs to its
    /// natural end: depth-first search walks on until it visits one more
    /// square, breadth-first search examines the remaining neighbours.
    pub fn stop_at_goal(mut self, stop: bool) -> Self {
        self.search.stop_on_goal = stop;
        self
    }

    /// Start searching `grid`
    ///
    /// Locates the start and goal squares and marks the start as visited.
    /// Returns [MazeError::InvalidMaze], if either is missing or repeated;
    /// in that case nothing changes and the solver stays as it was.
    pub fn solve(&mut self, grid: Grid) -> Result<(), MazeError> {
        let (start, goal) = grid.endpoints()?;
        debug!(
            "Solving {}x{} maze from {:?} to {:?}",
            grid.width(),
            grid.height(),
            start,
            goal
        );
        self.search.begin(grid, start);
        match &mut self.frontier {
            Frontier::DepthFirst(dfs) => dfs.begin(start),
            Frontier::BreadthFirst(bfs) => bfs.begin(start),
        }
        Ok(())
    }

    /// Advance the search by one tick
    ///
    /// Returns `true` once the search is finished. Does nothing before
    /// [Self::solve] or after the search has finished.
    pub fn tick(&mut self) -> bool {
        match self.search.state {
            SolverState::Idle => return false,
            SolverState::Finished => return true,
            SolverState::Running => (),
        }

        let search = &mut self.search;
        search.ticks += 1;
        let frontier_left = match &mut self.frontier {
            Frontier::DepthFirst(dfs) => dfs.explore(search),
            Frontier::BreadthFirst(bfs) => bfs.explore(search),
        };

        trace!("Tick {}: frontier left = {}", search.ticks, frontier_left);
        if search.goal_reached || !frontier_left {
            search.state = SolverState::Finished;
            info!(
                "Search finished after {} ticks, goal reached = {}",
                search.ticks, search.goal_reached
            );
        }
        self.is_finished()
    }

    /// Stop the search; later ticks are no-ops
    pub fn finish(&mut self) {
        self.search.state = SolverState::Finished;
    }

    pub fn state(&self) -> SolverState {
        self.search.state
    }

    pub fn is_finished(&self) -> bool {
        self.search.state == SolverState::Finished
    }

    /// Has the search come across the goal square
    pub fn goal_reached(&self) -> bool {
        self.search.goal_reached
    }

    /// Ticks processed since [Self::solve]
    pub fn ticks(&self) -> usize {
        self.search.ticks
    }

    /// Current state of the grid under search
    pub fn grid(&self) -> Option<&Grid> {
        self.search.grid.as_ref()
    }

    /// Hand the grid back, leaving the solver idle
    pub fn take_grid(&mut self) -> Option<Grid> {
        self.search.state = SolverState::Idle;
        self.search.grid.take()
    }
}

/// Neighbour of `point` towards `direction`, with its current state
///
/// Panics if the neighbour lies outside the grid, which a walled border
/// rules out for every passable square.
fn neighbor(grid: &Grid, point: Point, direction: Direction) -> (Point, Cell) {
    match point
        .step(direction)
        .and_then(|next| Some((next, grid.get(next)?)))
    {
        Some(found) => found,
        None => panic!("{:?} has no neighbour towards {:?}", point, direction),
    }
}
