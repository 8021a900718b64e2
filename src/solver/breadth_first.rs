use std::collections::VecDeque;

use crate::grid::{Cell, Direction, Point};

use super::{neighbor, Search};

/// Breadth-first frontier, one dequeued square per tick
///
/// Each tick takes the oldest square from the queue and marks all of its
/// open neighbours (down, up, right, left) as visited, so squares are
/// visited in order of their distance from the start.
#[derive(Debug, Default)]
pub(crate) struct BreadthFirst {
    queue: VecDeque<Point>,
}

impl BreadthFirst {
    pub(crate) fn begin(&mut self, start: Point) {
        self.queue.clear();
        self.queue.push_back(start);
    }

    /// Expand the oldest square; `false` once the queue is empty
    pub(crate) fn explore(&mut self, search: &mut Search) -> bool {
        let Some(grid) = search.grid.as_mut() else {
            return false;
        };
        let Some(point) = self.queue.pop_front() else {
            return false;
        };

        for direction in Direction::ALL {
            let (next, cell) = neighbor(grid, point, direction);
            match cell {
                Cell::Goal => {
                    search.goal_reached = true;
                    if search.stop_on_goal {
                        return true;
                    }
                }
                Cell::Open => {
                    grid.set(next, Cell::Visited);
                    self.queue.push_back(next);
                }
                Cell::Wall | Cell::Start | Cell::Visited => (),
            }
        }
        !self.queue.is_empty()
    }
}
