//! Drive a search to completion, optionally animating it on the terminal

use std::thread;
use std::time::Duration;

use log::info;

use crate::grid::{Cell, Grid};
use crate::solver::Solver;
use crate::MazeError;

/// Outcome of a finished search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    /// Ticks the search took
    pub ticks: usize,
    /// Squares marked as visited, start included
    pub visited: usize,
    /// Whether the goal was found
    pub goal_reached: bool,
}

impl SolveReport {
    fn of(solver: &Solver) -> Self {
        Self {
            ticks: solver.ticks(),
            visited: solver.grid().map_or(0, |grid| grid.count(Cell::Visited)),
            goal_reached: solver.goal_reached(),
        }
    }

    /// Print report
    pub fn print_report(&self) {
        if self.goal_reached {
            println!(
                "Goal reached after {} ticks, {} squares visited.",
                self.ticks, self.visited
            );
        } else {
            println!(
                "Goal not reachable; gave up after {} ticks, {} squares visited.",
                self.ticks, self.visited
            );
        }
    }
}

/// Solve `grid` and tick until finished, calling `on_frame` with the grid
/// before the first tick and after every tick
fn drive<F>(solver: &mut Solver, grid: Grid, mut on_frame: F) -> Result<SolveReport, MazeError>
where
    F: FnMut(&Grid),
{
    solver.solve(grid)?;
    if let Some(grid) = solver.grid() {
        on_frame(grid);
    }
    loop {
        let finished = solver.tick();
        if let Some(grid) = solver.grid() {
            on_frame(grid);
        }
        if finished {
            break;
        }
    }
    Ok(SolveReport::of(solver))
}

/// Run the search to the end without drawing anything
pub fn run(solver: &mut Solver, grid: Grid) -> Result<SolveReport, MazeError> {
    drive(solver, grid, |_| ())
}

/// Animate the search on the terminal
///
/// ## Arguments
/// - `solver`: Search to run, restarted on `grid`.
/// - `grid`: Maze to solve.
/// - `frame_length`: Pause between ticks.
pub fn playback(
    solver: &mut Solver,
    grid: Grid,
    frame_length: Duration,
) -> Result<SolveReport, MazeError> {
    fn print_grid(grid: &Grid) {
        print!("\x1B[2J\x1B[1;1H");
        println!("{}", grid);
    }

    let mut first = true;
    let report = drive(solver, grid, |grid| {
        if !first {
            thread::sleep(frame_length);
        }
        first = false;
        print_grid(grid);
    })?;
    info!("Animation finished after {} ticks", report.ticks);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::{drive, run, SolveReport};
    use crate::{Algorithm, Cell, Grid, MazeError, MazeGenerator};

    #[test]
    fn run_reports_outcome() {
        let emojis = "
⬛⬛⬛⬛⬛
⬛🟩⬜⬜⬛
⬛⬛⬛⬜⬛
⬛🟥⬜⬜⬛
⬛⬛⬛⬛⬛"
            .trim();
        let grid = Grid::parse_emojis(emojis).unwrap();

        for report in [
            run(&mut Algorithm::DepthFirst.solver(), grid.clone()).unwrap(),
            run(&mut Algorithm::BreadthFirst.solver(), grid).unwrap(),
        ] {
            assert_eq!(
                report,
                SolveReport {
                    ticks: 6,
                    visited: 6,
                    goal_reached: true
                }
            );
        }
    }

    #[test]
    fn one_frame_per_tick() {
        let grid = MazeGenerator::new(Some(4)).generate(13, 9).unwrap();
        let mut solver = Algorithm::BreadthFirst.solver();
        let mut frames = Vec::new();

        let report = drive(&mut solver, grid, |g| frames.push(g.clone())).unwrap();

        assert_eq!(frames.len(), report.ticks + 1);
        assert_eq!(frames[0].count(Cell::Visited), 1);
        assert!(frames
            .windows(2)
            .all(|w| w[0].count(Cell::Visited) <= w[1].count(Cell::Visited)));
        assert_eq!(frames.last().unwrap().count(Cell::Visited), report.visited);
    }

    #[test]
    fn invalid_maze_is_not_driven() {
        let grid = Grid::parse_emojis("⬛⬛⬛\n⬛🟥⬛\n⬛⬛⬛").unwrap();
        let mut frames = 0;
        let result = drive(&mut Algorithm::DepthFirst.solver(), grid, |_| frames += 1);
        assert_eq!(
            result,
            Err(MazeError::InvalidMaze {
                cell: Cell::Start,
                found: 0
            })
        );
        assert_eq!(frames, 0);
    }
}
