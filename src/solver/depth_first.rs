use std::array;

use crate::grid::{Cell, Direction, Point};

use super::{neighbor, Search};

/// Square on the current path, with the directions not yet tried
#[derive(Debug, Clone)]
struct Frame {
    point: Point,
    directions: array::IntoIter<Direction, 4>,
}

impl Frame {
    fn new(point: Point) -> Self {
        Self {
            point,
            directions: Direction::ALL.into_iter(),
        }
    }
}

/// Depth-first frontier, one newly visited square per tick
///
/// Keeps the recursion path on an explicit stack so that the search can
/// be suspended between visits. Neighbours are tried down, up, right,
/// left.
///
/// Finding the goal does not cut the tick short unless the search stops
/// at the goal: it carries on down the remaining branches until it visits
/// one more square (or runs out of squares) and only then finishes.
#[derive(Debug, Default)]
pub(crate) struct DepthFirst {
    stack: Vec<Frame>,
}

impl DepthFirst {
    pub(crate) fn begin(&mut self, start: Point) {
        self.stack.clear();
        self.stack.push(Frame::new(start));
    }

    /// Walk until one square is visited; `false` once the stack runs dry
    pub(crate) fn explore(&mut self, search: &mut Search) -> bool {
        let Some(grid) = search.grid.as_mut() else {
            return false;
        };

        while let Some(frame) = self.stack.last_mut() {
            let point = frame.point;
            let Some(direction) = frame.directions.next() else {
                self.stack.pop();
                continue;
            };

            let (next, cell) = neighbor(grid, point, direction);
            match cell {
                Cell::Goal => {
                    search.goal_reached = true;
                    if search.stop_on_goal {
                        return true;
                    }
                }
                Cell::Open | Cell::Start => {
                    grid.set(next, Cell::Visited);
                    self.stack.push(Frame::new(next));
                    return true;
                }
                Cell::Wall | Cell::Visited => (),
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::{Algorithm, Cell, Grid, Point, Solver};

    /// Newly visited squares of each tick until the search finishes
    fn visits_per_tick(solver: &mut Solver) -> Vec<Vec<Point>> {
        let mut visits = Vec::new();
        let mut finished = false;
        while !finished {
            let before = solver.grid().unwrap().clone();
            finished = solver.tick();
            let after = solver.grid().unwrap();
            let mut new = Vec::new();
            for row in 0..after.height() {
                for col in 0..after.width() {
                    let p = Point::new(row, col);
                    if before.get(p) != after.get(p) {
                        new.push(p);
                    }
                }
            }
            visits.push(new);
        }
        visits
    }

    #[test]
    fn follows_corridor_in_order() {
        let emojis = "
⬛⬛⬛⬛⬛
⬛🟩⬜⬜⬛
⬛⬛⬛⬜⬛
⬛🟥⬜⬜⬛
⬛⬛⬛⬛⬛"
            .trim();
        let mut solver = Algorithm::DepthFirst.solver();
        solver.solve(Grid::parse_emojis(emojis).unwrap()).unwrap();

        let visits = visits_per_tick(&mut solver);
        assert_eq!(
            visits,
            vec![
                vec![Point::new(1, 2)],
                vec![Point::new(1, 3)],
                vec![Point::new(2, 3)],
                vec![Point::new(3, 3)],
                vec![Point::new(3, 2)],
                vec![],
            ]
        );
        assert!(solver.goal_reached());
        assert_eq!(solver.grid().unwrap().get(Point::new(3, 1)), Some(Cell::Goal));
    }

    #[test]
    fn down_is_tried_before_up() {
        let emojis = "
⬛⬛⬛⬛⬛
⬛⬛⬜⬛⬛
⬛⬛🟩⬛⬛
⬛⬛⬜⬛⬛
⬛⬛🟥⬛⬛
⬛⬛⬛⬛⬛"
            .trim();
        let mut solver = Algorithm::DepthFirst.solver();
        solver.solve(Grid::parse_emojis(emojis).unwrap()).unwrap();

        assert!(!solver.tick());
        let grid = solver.grid().unwrap();
        assert_eq!(grid.get(Point::new(3, 2)), Some(Cell::Visited));
        assert_eq!(grid.get(Point::new(1, 2)), Some(Cell::Open));
    }

    const GOAL_BELOW_START: &str = "
⬛⬛⬛⬛⬛
⬛⬜🟩⬜⬛
⬛⬛🟥⬛⬛
⬛⬛⬛⬛⬛";

    #[test]
    fn keeps_exploring_after_goal_within_tick() {
        let mut solver = Algorithm::DepthFirst.solver();
        solver
            .solve(Grid::parse_emojis(GOAL_BELOW_START.trim()).unwrap())
            .unwrap();

        assert!(solver.tick());
        assert!(solver.goal_reached());
        let grid = solver.grid().unwrap();
        assert_eq!(grid.get(Point::new(1, 3)), Some(Cell::Visited));
        assert_eq!(grid.get(Point::new(1, 1)), Some(Cell::Open));
    }

    #[test]
    fn stopping_at_goal_ends_tick_immediately() {
        let mut solver = Algorithm::DepthFirst.solver().stop_at_goal(true);
        solver
            .solve(Grid::parse_emojis(GOAL_BELOW_START.trim()).unwrap())
            .unwrap();

        assert!(solver.tick());
        assert!(solver.goal_reached());
        let grid = solver.grid().unwrap();
        assert_eq!(grid.get(Point::new(1, 3)), Some(Cell::Open));
        assert_eq!(grid.get(Point::new(1, 1)), Some(Cell::Open));
        assert_eq!(grid.count(Cell::Visited), 1);
    }

    #[test]
    fn unreachable_goal_exhausts_frontier() {
        let emojis = "
⬛⬛⬛⬛⬛⬛
⬛🟩⬜⬛🟥⬛
⬛⬛⬛⬛⬛⬛"
            .trim();
        let mut solver = Algorithm::DepthFirst.solver();
        solver.solve(Grid::parse_emojis(emojis).unwrap()).unwrap();

        assert!(!solver.tick());
        assert!(solver.tick());
        assert!(!solver.goal_reached());
        assert_eq!(solver.ticks(), 2);
        assert_eq!(solver.grid().unwrap().count(Cell::Visited), 2);
    }
}
