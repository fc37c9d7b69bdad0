//! Tests for the time-travel game engine.

use rewind_tictactoe::{
    Board, GameEngine, GameStatus, HistoryOrder, MoveError, Player, Position, Square,
    single_cell_diff, terminal_mark,
};

fn played(cells: &[usize]) -> GameEngine {
    let mut engine = GameEngine::new();
    for cell in cells {
        engine.play(*cell).expect("legal move");
    }
    engine
}

#[test]
fn test_winner_detection_examples() {
    use rewind_tictactoe::Square::{Empty as E, Occupied};
    let a = Occupied(Player::X);
    let b = Occupied(Player::O);

    let won = Board::from_squares([a, a, a, E, E, E, E, E, E]);
    assert_eq!(terminal_mark(&won), Some(Player::X));

    let full = Board::from_squares([a, b, a, b, a, b, b, a, b]);
    assert_eq!(terminal_mark(&full), None);
}

#[test]
fn test_diff_and_description_for_center_opening() {
    let before = Board::new();
    let after = before.with_mark(Position::Center, Player::X);
    assert_eq!(single_cell_diff(&before, &after).map(Position::to_index), Some(4));

    let engine = played(&[4]);
    let labels: Vec<_> = engine.history_descriptions().map(|d| d.label).collect();
    assert_eq!(labels, vec!["Go to game start", "Go to move #1(1, 1)"]);
}

#[test]
fn test_branch_discard_scenario() {
    let mut engine = played(&[0, 4, 8, 2]);
    assert_eq!(engine.history().len(), 5);
    let old_step_3 = *engine.history().get(3).expect("entry").board();

    engine.jump_to(2).expect("step exists");
    let k = Position::valid_moves(engine.current_board())
        .into_iter()
        .find(|pos| old_step_3.is_empty(*pos))
        .expect("an empty cell");
    engine.play(k.to_index()).expect("legal move");

    assert_eq!(engine.history().len(), 4);
    assert_eq!(engine.viewed_step(), 3);
    let new_step_3 = engine.history().get(3).expect("entry").board();
    assert_ne!(*new_step_3, old_step_3);
    assert_eq!(new_step_3.get(k), Square::Occupied(Player::X));
    assert!(engine.history().get(4).is_none());
}

#[test]
fn test_illegal_play_on_won_board_is_noop() {
    // X wins the left column.
    let mut engine = played(&[0, 1, 3, 2, 6]);
    assert_eq!(engine.status(), GameStatus::Won(Player::X));

    let history = engine.history().clone();
    let step = engine.viewed_step();
    for cell in 0..9 {
        assert!(engine.play(cell).is_err());
        assert_eq!(engine.history(), &history);
        assert_eq!(engine.viewed_step(), step);
    }
}

#[test]
fn test_order_toggle_reverses_descriptions() {
    let mut engine = played(&[4, 0, 8]);
    engine.jump_to(1).expect("step exists");
    let ascending: Vec<_> = engine.history_descriptions().collect();

    engine.toggle_history_order();
    assert_eq!(engine.order(), HistoryOrder::Descending);
    let descending: Vec<_> = engine.history_descriptions().collect();

    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);
    assert_eq!(descending.iter().filter(|d| d.is_current).count(), 1);
    assert_eq!(descending.iter().find(|d| d.is_current).map(|d| d.step), Some(1));
}

#[test]
fn test_descriptions_use_column_then_row() {
    // Cell 5 is row 1, column 2; cell 6 is row 2, column 0.
    let engine = played(&[5, 6]);
    let labels: Vec<_> = engine.history_descriptions().map(|d| d.label).collect();
    assert_eq!(labels[1], "Go to move #1(2, 1)");
    assert_eq!(labels[2], "Go to move #2(0, 2)");
}

#[test]
fn test_jump_then_status_shows_historical_turn() {
    let mut engine = played(&[4, 0, 8]);
    assert_eq!(engine.status().to_string(), "Next player: O");
    engine.jump_to(2).expect("step exists");
    assert_eq!(engine.status().to_string(), "Next player: X");
    engine.jump_to(0).expect("step exists");
    assert_eq!(engine.status().to_string(), "Next player: X");
    assert_eq!(engine.history().len(), 4);
}

#[test]
fn test_jump_to_won_step_and_back() {
    let mut engine = played(&[0, 3, 1, 4, 2]);
    engine.jump_to(4).expect("step exists");
    assert!(!engine.status().is_won());
    engine.jump_to(5).expect("step exists");
    assert_eq!(engine.status().to_string(), "Winner: X");
}

#[test]
fn test_out_of_range_jump_is_reported() {
    let mut engine = played(&[4]);
    assert!(matches!(
        engine.jump_to(9),
        Err(MoveError::StepOutOfRange { step: 9, len: 2 })
    ));
    assert_eq!(engine.viewed_step(), 1);
}

#[test]
fn test_snapshot_serializes() {
    let engine = played(&[4]);
    let json = serde_json::to_value(engine.snapshot()).expect("serializable");
    assert_eq!(json["status_line"], "Next player: O");
    assert_eq!(json["order"], "ascending");
    assert_eq!(json["history"][1]["label"], "Go to move #1(1, 1)");
    assert_eq!(json["history"][1]["is_current"], true);
}
