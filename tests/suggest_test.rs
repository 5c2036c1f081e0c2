//! Tests for one-shot move suggestions.

use tictactoe::{infer_player, suggest};
use tictactoe_engine::{Board, GameError, Move, Player, StrategyKind};

#[test]
fn test_infers_player_from_counts() {
    assert_eq!(infer_player(&Board::new()), Player::One);
    assert_eq!(infer_player(&"X../.../...".parse().expect("board")), Player::Two);
    assert_eq!(infer_player(&"XO./.../...".parse().expect("board")), Player::One);
}

#[test]
fn test_exhaustive_suggestion_carries_scores() {
    let board: Board = "XX./OO./...".parse().expect("board");
    let suggestion = suggest(&board, None, StrategyKind::Exhaustive, None).expect("playable");

    assert_eq!(suggestion.player, Player::One);
    assert_eq!(suggestion.mv, Move::new(0, 2).expect("move"));
    assert_eq!(suggestion.label, "top-right");
    let scores = suggestion.scores.as_ref().expect("scores");
    assert_eq!(scores.len(), 5);
    assert!(scores.iter().any(|s| s.mv == suggestion.mv && s.score == 1));
}

#[test]
fn test_heuristic_suggestion_blocks() {
    let board: Board = "X../OO./X..".parse().expect("board");
    let suggestion =
        suggest(&board, Some(Player::One), StrategyKind::Heuristic, Some(1)).expect("playable");
    assert_eq!(suggestion.mv, Move::new(1, 2).expect("move"));
    assert!(suggestion.scores.is_none());
}

#[test]
fn test_suggestion_json_shape() {
    let board: Board = "XX./OO./...".parse().expect("board");
    let suggestion = suggest(&board, None, StrategyKind::Exhaustive, None).expect("playable");
    let json = serde_json::to_value(&suggestion).expect("json");

    assert_eq!(json["player"], "one");
    assert_eq!(json["strategy"], "exhaustive");
    assert_eq!(json["move"], serde_json::json!([0, 2]));
    assert_eq!(json["scores"][0]["move"], serde_json::json!([0, 2]));
}

#[test]
fn test_decided_board_has_no_suggestion() {
    let board: Board = "XXX/OO./...".parse().expect("board");
    assert_eq!(
        suggest(&board, None, StrategyKind::Exhaustive, None),
        Err(GameError::NoLegalMoves)
    );
}
