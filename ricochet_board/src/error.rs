use crate::{Position, PositionEncoding};

/// Errors returned when a [`Board`](crate::Board) or [`RobotPositions`](crate::RobotPositions)
/// violates one of the invariants required by the solver.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    /// The board's rows are not all the same length as its column count.
    #[error("board is not square: {side_length} columns but a row of length {row_length}")]
    NonSquare {
        /// Number of columns (and expected row length).
        side_length: usize,
        /// Length of the offending row.
        row_length: usize,
    },
    /// The outer border of the board is missing a wall somewhere.
    #[error("board is missing a wall on its outer border at column {column}, row {row}")]
    UnenclosedBorder {
        /// Column of the first missing border wall found.
        column: PositionEncoding,
        /// Row of the first missing border wall found.
        row: PositionEncoding,
    },
    /// Two or more robots start on the same cell.
    #[error("two or more robots occupy the same starting position {0:?}")]
    DuplicateRobotPosition(Position),
}
