//! Parses boards from a textual format.
//!
//! A board of side length `w` is drawn as a grid of `2w + 1` rows. Even rows (0-indexed) carry
//! the horizontal walls: a `+` marks every cell corner and the two characters between corners are
//! either `--` (wall) or two spaces (no wall). Odd rows carry the vertical walls: a `|` or a space
//! at every cell edge, with an optional two-character target label in between.
//!
//! A target label's first character names the symbol (`B`ullseye, `P`yramid, `M`oon, `S`quare, or
//! `U`nstoppable for the wild spiral target) and its second names the color (`R`ed, `Y`ellow,
//! `G`reen, `B`lue, or `W`hite for the wild color, which always maps to the spiral target
//! regardless of the first character).
//!
//! ```txt
//! +--+--+
//! |     |
//! +--+--+
//! |    PR
//! +--+--+
//! ```

use std::collections::BTreeMap;

use crate::{Board, Field, Position, PositionEncoding, Symbol, Target, Walls};

/// An error encountered while parsing a textual board.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AsciiParseError {
    /// The input is empty.
    #[error("input is empty")]
    EmptyInput,
    /// The number of rows is not `2w + 1` for any whole number `w`.
    #[error("expected an odd number of rows of at least 3, found {found} rows")]
    RowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row does not have the expected length of `3w + 1` characters.
    #[error("row {row} has length {found}, expected {expected}")]
    RowLength {
        /// 0-indexed row that failed.
        row: usize,
        /// Expected character count.
        expected: usize,
        /// Character count found.
        found: usize,
    },
    /// An even row is missing a `+` corner mark.
    #[error("row {row}, column {col}: expected a '+' corner mark")]
    MissingCorner {
        /// 0-indexed row that failed.
        row: usize,
        /// 0-indexed character column that failed.
        col: usize,
    },
    /// An even row has something other than `--` or two spaces between corners.
    #[error("row {row}, column {col}: invalid wall segment {found:?}, expected \"--\" or \"  \"")]
    InvalidWallSegment {
        /// 0-indexed row that failed.
        row: usize,
        /// 0-indexed character column that failed.
        col: usize,
        /// The two characters that were found.
        found: String,
    },
    /// An odd row has something other than `|` or a space at a cell edge.
    #[error("row {row}, column {col}: expected '|' or ' ', found {found:?}")]
    InvalidVerticalMark {
        /// 0-indexed row that failed.
        row: usize,
        /// 0-indexed character column that failed.
        col: usize,
        /// The character that was found.
        found: char,
    },
    /// A two-character target label could not be interpreted.
    #[error("row {row}, column {col}: invalid target label {found:?}")]
    InvalidTargetLabel {
        /// 0-indexed row that failed.
        row: usize,
        /// 0-indexed character column that failed.
        col: usize,
        /// The label that was found.
        found: String,
    },
    /// The outer border of the parsed board is missing a wall.
    #[error("parsed board is missing a wall on its outer border at column {column}, row {row}")]
    UnenclosedBorder {
        /// Column of the first missing border wall found.
        column: PositionEncoding,
        /// Row of the first missing border wall found.
        row: PositionEncoding,
    },
}

/// Parses a board and its targets from the textual format described in the module documentation.
pub fn parse(text: &str) -> Result<(Board, BTreeMap<Target, Position>), AsciiParseError> {
    let rows: Vec<&str> = text.lines().collect();
    if rows.is_empty() {
        return Err(AsciiParseError::EmptyInput);
    }
    if rows.len() < 3 || rows.len() % 2 == 0 {
        return Err(AsciiParseError::RowCount { found: rows.len() });
    }

    let side_length = ((rows.len() - 1) / 2) as PositionEncoding;
    let expected_len = 3 * side_length as usize + 1;
    for (i, row) in rows.iter().enumerate() {
        let len = row.chars().count();
        if len != expected_len {
            return Err(AsciiParseError::RowLength {
                row: i,
                expected: expected_len,
                found: len,
            });
        }
    }

    let row_chars: Vec<Vec<char>> = rows.iter().map(|row| row.chars().collect()).collect();

    // horz[y][x]: wall on the top edge of cell (x, y), i.e. between row y-1 and row y.
    let mut horz = vec![vec![false; side_length as usize]; side_length as usize + 1];
    for y in 0..=side_length as usize {
        let row = &row_chars[2 * y];
        for x in 0..side_length as usize {
            if row[3 * x] != '+' {
                return Err(AsciiParseError::MissingCorner { row: 2 * y, col: 3 * x });
            }
            let segment: String = row[3 * x + 1..3 * x + 3].iter().collect();
            horz[y][x] = match segment.as_str() {
                "--" => true,
                "  " => false,
                _ => {
                    return Err(AsciiParseError::InvalidWallSegment {
                        row: 2 * y,
                        col: 3 * x + 1,
                        found: segment,
                    })
                }
            };
        }
        if row[3 * side_length as usize] != '+' {
            return Err(AsciiParseError::MissingCorner {
                row: 2 * y,
                col: 3 * side_length as usize,
            });
        }
    }

    // vert[y][x]: wall on the left edge of cell (x, y), i.e. between column x-1 and column x.
    let mut vert = vec![vec![false; side_length as usize + 1]; side_length as usize];
    let mut targets = BTreeMap::new();
    for y in 0..side_length as usize {
        let row = &row_chars[2 * y + 1];
        for x in 0..=side_length as usize {
            vert[y][x] = match row[3 * x] {
                '|' => true,
                ' ' => false,
                c => {
                    return Err(AsciiParseError::InvalidVerticalMark {
                        row: 2 * y + 1,
                        col: 3 * x,
                        found: c,
                    })
                }
            };
        }
        for x in 0..side_length as usize {
            let label: String = row[3 * x + 1..3 * x + 3].iter().collect();
            if label != "  " {
                let target = parse_target(&label, 2 * y + 1, 3 * x + 1)?;
                targets.insert(target, Position::new(x as PositionEncoding, y as PositionEncoding));
            }
        }
    }

    if let Some(col) = horz[0].iter().position(|&wall| !wall) {
        return Err(AsciiParseError::UnenclosedBorder {
            column: col as PositionEncoding,
            row: 0,
        });
    }
    if let Some(col) = horz[side_length as usize].iter().position(|&wall| !wall) {
        return Err(AsciiParseError::UnenclosedBorder {
            column: col as PositionEncoding,
            row: side_length,
        });
    }
    if let Some(row) = vert.iter().position(|row| !row[0]) {
        return Err(AsciiParseError::UnenclosedBorder {
            column: 0,
            row: row as PositionEncoding,
        });
    }
    if let Some(row) = vert
        .iter()
        .position(|row| !row[side_length as usize])
    {
        return Err(AsciiParseError::UnenclosedBorder {
            column: side_length,
            row: row as PositionEncoding,
        });
    }

    let mut walls: Walls = vec![vec![Field::default(); side_length as usize]; side_length as usize];
    for x in 0..side_length as usize {
        for y in 0..side_length as usize {
            walls[x][y].down = horz[y + 1][x];
            walls[x][y].right = vert[y][x + 1];
        }
    }

    Ok((Board::new(walls), targets))
}

fn parse_target(label: &str, row: usize, col: usize) -> Result<Target, AsciiParseError> {
    let mut chars = label.chars();
    let symbol_ch = chars.next().expect("label is exactly two characters");
    let color_ch = chars.next().expect("label is exactly two characters");

    if color_ch == 'W' || symbol_ch == 'U' {
        return Ok(Target::Spiral);
    }

    let symbol = match symbol_ch {
        'B' => Symbol::Circle,
        'P' => Symbol::Triangle,
        'M' => Symbol::Hexagon,
        'S' => Symbol::Square,
        _ => {
            return Err(AsciiParseError::InvalidTargetLabel {
                row,
                col,
                found: label.to_string(),
            })
        }
    };

    match color_ch {
        'R' => Ok(Target::Red(symbol)),
        'Y' => Ok(Target::Yellow(symbol)),
        'G' => Ok(Target::Green(symbol)),
        'B' => Ok(Target::Blue(symbol)),
        _ => Err(AsciiParseError::InvalidTargetLabel {
            row,
            col,
            found: label.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn parses_smallest_enclosed_board() {
        let text = "+--+\n|  |\n+--+\n";
        let (board, targets) = parse(text).unwrap();
        assert_eq!(board.side_length(), 1);
        assert!(targets.is_empty());
        assert!(board.is_adjacent_to_wall(Position::new(0, 0), Direction::Up));
        assert!(board.is_adjacent_to_wall(Position::new(0, 0), Direction::Down));
        assert!(board.is_adjacent_to_wall(Position::new(0, 0), Direction::Left));
        assert!(board.is_adjacent_to_wall(Position::new(0, 0), Direction::Right));
    }

    #[test]
    fn parses_interior_wall_and_target() {
        let text = "+--+--+\n|     |\n+--+--+\n|   PR|\n+--+--+\n";
        let (board, targets) = parse(text).unwrap();
        assert_eq!(board.side_length(), 2);
        assert_eq!(targets.get(&Target::Red(Symbol::Triangle)), Some(&Position::new(1, 1)));
        assert!(board.is_adjacent_to_wall(Position::new(0, 0), Direction::Down));
    }

    #[test]
    fn wild_target_label() {
        let text = "+--+\n|  |\n+--+\n";
        let with_target = "+--+\n|UW|\n+--+\n";
        assert!(parse(text).is_ok());
        let (_, targets) = parse(with_target).unwrap();
        assert_eq!(targets.get(&Target::Spiral), Some(&Position::new(0, 0)));
    }

    #[test]
    fn rejects_missing_border_wall() {
        let text = "+--+\n   |\n+--+\n";
        assert_eq!(
            parse(text).unwrap_err(),
            AsciiParseError::UnenclosedBorder { column: 0, row: 0 }
        );
    }

    #[test]
    fn rejects_wrong_row_length() {
        let text = "+--+\n|  |\n+-+\n";
        assert!(matches!(
            parse(text).unwrap_err(),
            AsciiParseError::RowLength { row: 2, .. }
        ));
    }

    #[test]
    fn rejects_even_row_count() {
        let text = "+--+\n|  |\n";
        assert!(matches!(
            parse(text).unwrap_err(),
            AsciiParseError::RowCount { found: 2 }
        ));
    }
}
