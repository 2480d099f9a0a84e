//! Solves Ricochet Robots puzzles with a level-synchronous breadth first search.
//!
//! The search explores game states in order of the number of moves needed to reach them, so the
//! first accepted state it finds is reached with a minimal number of moves. [`solve`] searches the
//! full multi-robot game; [`find_route`] searches the simpler case of a single robot moving on an
//! otherwise empty board.

mod breadth_first;
mod error;
mod single_robot;
pub mod util;

use getset::Getters;
use tracing::info;

use ricochet_board::{Board, Direction, Position, PositionEncoding, Robot, RobotPositions, Round};

pub use breadth_first::BreadthFirst;
pub use error::SolverError;
pub use single_robot::find_route;

/// Side length of a standard board.
pub const BOARD_WIDTH: PositionEncoding = 16;
/// Number of robots on a standard board.
pub const ROBOT_COUNT: usize = 4;
/// Maximum number of moves a search will expand before giving up and reporting no solution.
pub const MAX_MOVES: usize = 20;

/// Returns the side length of a standard board.
pub fn get_board_width() -> PositionEncoding {
    BOARD_WIDTH
}

/// Returns the number of robots on a standard board.
pub fn get_robot_count() -> usize {
    ROBOT_COUNT
}

/// Returns the maximum number of moves a search will consider.
pub fn get_max_moves() -> usize {
    MAX_MOVES
}

/// Finds a solution to get from the `start_positions` to a target.
pub trait Solver {
    /// Returns the shortest [`Path`] to the target, or `None` if it can't be reached within
    /// [`MAX_MOVES`].
    fn solve(&mut self, round: &Round, start_positions: RobotPositions) -> Option<Path>;
}

/// A path from a starting position to another position.
///
/// Contains the starting positions of the robots, their final positions and a path from the former
/// to the latter. The path consists of tuples of a robot and the direction it moved in.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct Path {
    start_pos: RobotPositions,
    end_pos: RobotPositions,
    movements: Vec<(Robot, Direction)>,
}

impl Path {
    /// Creates a new path containing the starting and final positions of the robots and a path
    /// to reach the target.
    pub fn new(
        start_pos: RobotPositions,
        end_pos: RobotPositions,
        movements: Vec<(Robot, Direction)>,
    ) -> Self {
        debug_assert!(!movements.is_empty() || start_pos == end_pos);
        Self {
            start_pos,
            end_pos,
            movements,
        }
    }

    /// Creates a new path which ends on the starting position.
    pub fn new_start_on_target(start_pos: RobotPositions) -> Self {
        Self::new(start_pos.clone(), start_pos, Vec::new())
    }

    /// Returns the number of moves in the path.
    pub fn len(&self) -> usize {
        self.movements.len()
    }

    /// Checks if the path has a length of 0.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single move of one robot from `start` to `end`.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct Move {
    robot: Robot,
    start: Position,
    end: Position,
}

/// The result of solving a multi-robot puzzle.
///
/// `length` is `-1` if no solution exists within [`MAX_MOVES`], in which case `moves` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct Solution {
    length: i32,
    moves: Vec<Move>,
}

impl Solution {
    fn unsolvable() -> Self {
        Self {
            length: -1,
            moves: Vec::new(),
        }
    }

    fn from_path(board: &Board, path: Path) -> Self {
        let mut moves = Vec::with_capacity(path.movements().len());
        let mut positions = path.start_pos().clone();

        for &(robot, dir) in path.movements() {
            let start = positions[robot];
            positions = positions.move_in_direction(board, robot, dir);
            let end = positions[robot];
            moves.push(Move { robot, start, end });
        }

        Self {
            length: moves.len() as i32,
            moves,
        }
    }
}

/// The result of solving a single-robot puzzle with [`find_route`].
///
/// `length` is `-1` if no route exists within [`MAX_MOVES`], in which case `directions` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct Route {
    length: i32,
    directions: Vec<Direction>,
}

impl Route {
    /// Creates a new route.
    pub fn new(length: i32, directions: Vec<Direction>) -> Self {
        Self { length, directions }
    }
}

/// Validates `board`, `state` and `goal`, returning the first applicable [`SolverError`].
fn validate(board: &Board, state: &RobotPositions, goal: Position) -> Result<(), SolverError> {
    board.validate()?;
    state.ensure_distinct()?;
    if !board.contains(goal) {
        return Err(SolverError::GoalOutOfBounds(goal));
    }
    Ok(())
}

/// Finds the shortest sequence of moves that brings `robot` onto `goal`, starting from `state`.
///
/// Other robots may be moved out of the way and act as obstacles for each other; `robot` is the
/// only one that has to end on `goal`. Returns a [`Solution`] with a length of `-1` if no such
/// sequence exists within [`MAX_MOVES`]. Returns an error only when `board`, `state` or `goal`
/// are themselves malformed.
pub fn solve(
    board: &Board,
    state: RobotPositions,
    robot: Robot,
    goal: Position,
) -> Result<Solution, SolverError> {
    validate(board, &state, goal)?;

    if state[robot] == goal {
        return Ok(Solution {
            length: 0,
            moves: Vec::new(),
        });
    }

    info!(?robot, ?goal, "starting solve");

    let path = BreadthFirst::new().search(board, state, |positions| positions[robot] == goal);

    Ok(match path {
        Some(path) => Solution::from_path(board, path),
        None => Solution::unsolvable(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // A robot already on the goal must solve in zero moves even though other robots are free to
    // move, which would otherwise let the search report a bogus one-move solution (the first
    // expanded successor still has the goal robot on `goal`, since only other robots moved).
    #[test]
    fn robot_already_on_goal_solves_in_zero_moves() {
        let board = Board::new_empty(4).wall_enclosure();
        let goal = Position::new(0, 0);
        let state = RobotPositions::from_tuples(&[(0, 0), (1, 1), (2, 2), (3, 3)]);

        let solution = solve(&board, state, Robot::Red, goal).unwrap();

        assert_eq!(*solution.length(), 0);
        assert!(solution.moves().is_empty());
    }
}
