use fxhash::FxHashMap;
use ricochet_board::{Board, Direction, Position, DIRECTIONS};
use tracing::debug;

use crate::{Route, SolverError, MAX_MOVES};

/// Finds the shortest sequence of moves that slides a single robot from `start` to `end`,
/// ignoring every other robot on the board.
///
/// This mirrors [`crate::solve`] but searches over bare [`Position`]s instead of the full
/// [`RobotPositions`](ricochet_board::RobotPositions) state, since with only one robot on the
/// board the search space and the moves needed to describe it are both simpler.
pub fn find_route(board: &Board, start: Position, end: Position) -> Result<Route, SolverError> {
    board.validate()?;
    if !board.contains(start) {
        return Err(SolverError::GoalOutOfBounds(start));
    }
    if !board.contains(end) {
        return Err(SolverError::GoalOutOfBounds(end));
    }

    if start == end {
        return Ok(Route::new(0, Vec::new()));
    }

    // Maps a reached position to the position and direction it was reached from. The start
    // position has no entry, which terminates the walk back in `reconstruct`.
    let mut visited: FxHashMap<Position, (Position, Direction)> = FxHashMap::default();

    let mut current_level = vec![start];
    let mut next_level = Vec::new();
    let mut found = false;

    'outer: for _depth in 0..MAX_MOVES {
        for &pos in &current_level {
            for &dir in &DIRECTIONS {
                let stop = slide(board, pos, dir);
                if stop == pos || visited.contains_key(&stop) {
                    continue;
                }
                visited.insert(stop, (pos, dir));
                if stop == end {
                    found = true;
                    break 'outer;
                }
                next_level.push(stop);
            }
        }
        if next_level.is_empty() {
            break;
        }
        current_level.clear();
        std::mem::swap(&mut current_level, &mut next_level);
    }

    if !found {
        debug!(cap = MAX_MOVES, "single-robot search exhausted without reaching the goal");
        return Ok(Route::new(-1, Vec::new()));
    }

    let mut directions = Vec::new();
    let mut cur = end;
    while let Some(&(prev, dir)) = visited.get(&cur) {
        directions.push(dir);
        cur = prev;
    }
    directions.reverse();

    Ok(Route::new(directions.len() as i32, directions))
}

/// Slides a single robot from `from` in `direction` until it hits a wall.
fn slide(board: &Board, from: Position, direction: Direction) -> Position {
    let mut pos = from;
    while !board.is_adjacent_to_wall(pos, direction) {
        pos = pos.to_direction(direction, board.side_length());
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::find_route;
    use crate::Route;
    use ricochet_board::{Board, Direction, Position};

    #[test]
    fn already_there() {
        let board = Board::new_empty(8).wall_enclosure();
        let pos = Position::new(3, 3);
        assert_eq!(find_route(&board, pos, pos).unwrap(), Route::new(0, vec![]));
    }

    #[test]
    fn straight_slide_to_the_wall() {
        let board = Board::new_empty(8).wall_enclosure();
        let start = Position::new(0, 0);
        let end = Position::new(7, 0);
        assert_eq!(
            find_route(&board, start, end).unwrap(),
            Route::new(1, vec![Direction::Right])
        );
    }

    #[test]
    fn two_moves_around_a_corner_wall() {
        // A wall corner at (2, 0): a wall to the right of (2, 0) stops eastward sliding there,
        // and a wall below (2, 0) stops a subsequent southward slide at row 4.
        let board = Board::new_empty(8)
            .wall_enclosure()
            .set_vertical_line(2, 0, 1)
            .set_horizontal_line(2, 4, 1);
        let start = Position::new(0, 0);
        let end = Position::new(2, 4);
        let route = find_route(&board, start, end).unwrap();
        assert_eq!(route.length(), 2);
        assert_eq!(route.directions(), &[Direction::Right, Direction::Down]);
    }

    #[test]
    fn unreachable_within_enclosed_pocket() {
        let board = Board::new_empty(4)
            .wall_enclosure()
            .set_vertical_line(1, 0, 4);
        let start = Position::new(0, 0);
        let end = Position::new(3, 3);
        assert_eq!(find_route(&board, start, end).unwrap(), Route::new(-1, vec![]));
    }

    #[test]
    fn rejects_out_of_bounds_goal() {
        let board = Board::new_empty(4).wall_enclosure();
        let start = Position::new(0, 0);
        let end = Position::new(10, 10);
        assert!(find_route(&board, start, end).is_err());
    }
}
