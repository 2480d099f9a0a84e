use ricochet_board::{BoardError, Position};

/// Errors returned when a solve request cannot even be attempted because its input is malformed.
///
/// These are distinct from "no solution exists within the move cap", which is a normal, successful
/// result (a [`Solution`](crate::Solution) or [`Route`](crate::Route) with a length of `-1`).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SolverError {
    /// The board itself is malformed, see [`BoardError`].
    #[error(transparent)]
    Board(#[from] BoardError),
    /// The goal position lies outside the board.
    #[error("goal position {0:?} is out of bounds for this board")]
    GoalOutOfBounds(Position),
}
