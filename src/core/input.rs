//! Text-to-position mapping for console front ends.
//!
//! Parsing never fails loudly. A line that does not parse maps to a sentinel
//! position chosen by the caller, which the engine then rejects through its
//! ordinary validation path.

use super::position::Position;

/// Parse `"row,column"`, tolerating whitespace around either number.
///
/// ```
/// use grid_games::core::{parse_position, Position};
///
/// assert_eq!(parse_position(" 2, 1 "), Some(Position::new(2, 1)));
/// assert_eq!(parse_position("bloop"), None);
/// ```
#[must_use]
pub fn parse_position(input: &str) -> Option<Position> {
    let (row, column) = input.trim().split_once(',')?;
    let row = row.trim().parse().ok()?;
    let column = column.trim().parse().ok()?;
    Some(Position::new(row, column))
}

/// Parse `"row,column"`, falling back to `fallback` on any failure.
#[must_use]
pub fn parse_position_or(input: &str, fallback: Position) -> Position {
    parse_position(input).unwrap_or(fallback)
}

/// Parse a `"row,column row,column"` move, with an optional `->` between the
/// two halves. Each half that fails to parse becomes `Position::OFF_BOARD`.
#[must_use]
pub fn parse_move(input: &str) -> (Position, Position) {
    let cleaned = input.replace("->", " ");
    let mut halves = cleaned.split_whitespace();

    let from = halves
        .next()
        .map_or(Position::OFF_BOARD, |s| parse_position_or(s, Position::OFF_BOARD));
    let to = halves
        .next()
        .map_or(Position::OFF_BOARD, |s| parse_position_or(s, Position::OFF_BOARD));

    (from, to)
}
