//! Tic-tac-toe integration tests.

use grid_games::core::{parse_position_or, Position};
use grid_games::error::EngineError;
use grid_games::games::tictactoe::{Marker, TicTacToe, ValidationReason};

fn at(row: i32, column: i32) -> Position {
    Position::new(row, column)
}

// =============================================================================
// Win Detection Tests
// =============================================================================

/// Test that three X markers across the top row win.
#[test]
fn test_top_row_wins_for_x() {
    let mut game = TicTacToe::new();

    game.place_marker(at(1, 1), Marker::X).unwrap();
    assert!(!game.has_winning_line());
    game.place_marker(at(1, 2), Marker::X).unwrap();
    assert!(!game.has_winning_line());
    game.place_marker(at(1, 3), Marker::X).unwrap();

    assert!(game.has_winning_line());
    assert!(game.is_won());
    assert_eq!(game.winner(), Some(Marker::X));
}

/// Test a column win reached through alternating play.
#[test]
fn test_alternating_play_column_win() {
    let mut game = TicTacToe::new();
    let moves = [(1, 2), (1, 1), (2, 2), (2, 1), (3, 3), (3, 1)];

    for (row, column) in moves {
        let marker = game.turn();
        game.try_place(at(row, column), marker).unwrap();
    }

    assert_eq!(game.winner(), Some(Marker::O));
    assert!(game.is_over());
    assert!(!game.is_draw());
}

/// Test that a full board with no line is a draw.
#[test]
fn test_full_board_draw() {
    let mut game = TicTacToe::new();
    let moves = [
        (1, 1), (1, 2), (1, 3),
        (2, 2), (2, 1), (2, 3),
        (3, 2), (3, 1), (3, 3),
    ];

    for (row, column) in moves {
        let marker = game.turn();
        game.try_place(at(row, column), marker).unwrap();
    }

    assert!(!game.is_won());
    assert!(game.is_draw());
    assert!(game.is_over());
}

// =============================================================================
// Validation Tests
// =============================================================================

/// Test that an empty in-bounds cell on the right turn is valid.
#[test]
fn test_valid_move() {
    let game = TicTacToe::new();
    let check = game.validate_move(at(3, 3), Marker::X);

    assert!(check.is_valid);
    assert_eq!(check.reason, ValidationReason::Valid);
}

/// Test that placing on a taken cell is rejected.
#[test]
fn test_occupied() {
    let mut game = TicTacToe::new();
    game.place_marker(at(2, 2), Marker::X).unwrap();

    let check = game.validate_move(at(2, 2), Marker::O);
    assert!(!check.is_valid);
    assert_eq!(check.reason, ValidationReason::Occupied);
}

/// Test that off-board positions report out of bounds before any other reason.
#[test]
fn test_out_of_bounds_before_everything_else() {
    let mut game = TicTacToe::new();
    for cell in [(1, 1), (1, 2), (1, 3)] {
        game.place_marker(at(cell.0, cell.1), Marker::X).unwrap();
    }
    assert!(game.is_won());

    // Wrong turn and game won would also apply.
    for (row, column) in [(0, 0), (4, 1), (1, -2), (i32::MIN, i32::MAX)] {
        let check = game.validate_move(at(row, column), Marker::X);
        assert_eq!(check.reason, ValidationReason::OutOfBounds, "({row}, {column})");
    }
}

/// Test that occupancy is reported before the turn check.
#[test]
fn test_occupied_before_wrong_turn() {
    let mut game = TicTacToe::new();
    game.place_marker(at(1, 1), Marker::X).unwrap();

    // O to move; X asks for an occupied cell.
    let check = game.validate_move(at(1, 1), Marker::X);
    assert_eq!(check.reason, ValidationReason::Occupied);
}

/// Test that the marker not on turn is rejected.
#[test]
fn test_wrong_turn() {
    let game = TicTacToe::new();
    let check = game.validate_move(at(1, 1), Marker::O);
    assert_eq!(check.reason, ValidationReason::WrongTurn);
}

/// Test that no placement is valid once the game is won.
#[test]
fn test_game_won_rejects_further_moves() {
    let mut game = TicTacToe::new();
    for cell in [(1, 1), (2, 2), (3, 3)] {
        game.place_marker(at(cell.0, cell.1), Marker::X).unwrap();
    }
    // The last placement by X handed the turn to O.
    let check = game.validate_move(at(1, 3), Marker::O);
    assert_eq!(check.reason, ValidationReason::GameWon);
}

/// Test that a rejected placement returns its reason and changes nothing.
#[test]
fn test_try_place_reports_reason_and_keeps_state() {
    let mut game = TicTacToe::new();
    game.try_place(at(2, 2), Marker::X).unwrap();
    let before = game.clone();

    let err = game.try_place(at(2, 2), Marker::O).unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidPlacement {
            reason: ValidationReason::Occupied
        }
    );
    assert_eq!(err.to_string(), "invalid placement: Marker already placed in this position");
    assert_eq!(game, before);
}

// =============================================================================
// Input Mapping Tests
// =============================================================================

/// Test that unparseable input maps to a position rejected as out of bounds.
#[test]
fn test_unparseable_input_is_out_of_bounds() {
    let game = TicTacToe::new();
    for input in ["", "middle", "2;2", "2,"] {
        let position = parse_position_or(input, Position::ORIGIN);
        let check = game.validate_move(position, Marker::X);
        assert_eq!(check.reason, ValidationReason::OutOfBounds, "{input:?}");
    }
}

/// Test that parsed input places a marker at the 1-based position.
#[test]
fn test_parsed_input_places_marker() {
    let mut game = TicTacToe::new();
    let position = parse_position_or(" 3 , 1 ", Position::ORIGIN);

    game.try_place(position, Marker::X).unwrap();
    assert_eq!(game.marker_at(at(3, 1)), Some(Marker::X));
}
