//! Tests for move history, cursor and time travel.

use tictactoe_timeline::{
    Board, Cell, GameState, GameStatus, MoveOutcome, Player, Position, Rejection, check_winner,
    is_draw, move_list, status_text,
};

fn play_indices(game: &mut GameState, indices: &[usize]) {
    for &i in indices {
        let pos = Position::from_index(i).expect("valid index");
        assert!(game.play_move(pos).is_played(), "move {i} should be accepted");
    }
}

#[test]
fn test_turns_alternate_starting_with_x() {
    let mut game = GameState::new();
    play_indices(&mut game, &[0, 1]);

    assert_eq!(game.history()[1].board().get(Position::TopLeft), Cell::Occupied(Player::X));
    assert_eq!(game.history()[2].board().get(Position::TopCenter), Cell::Occupied(Player::O));
    assert_eq!(game.next_player(), Player::X);
}

#[test]
fn test_horizontal_win() {
    let mut game = GameState::new();
    play_indices(&mut game, &[0, 3, 1, 4, 2]);

    assert_eq!(check_winner(game.history()[5].board()), Some(Player::X));
    assert_eq!(status_text(game.current_snapshot()), "Winner: X");
}

#[test]
fn test_vertical_win() {
    let mut game = GameState::new();
    play_indices(&mut game, &[0, 1, 3, 4, 6]);

    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(status_text(game.current_snapshot()), "Winner: X");
}

#[test]
fn test_occupied_cell_changes_nothing() {
    let mut game = GameState::new();
    play_indices(&mut game, &[4, 0]);
    let len = game.history().len();
    let cursor = game.cursor();

    for pos in [Position::Center, Position::TopLeft] {
        assert_eq!(game.play_move(pos), MoveOutcome::Rejected(Rejection::Occupied(pos)));
        assert_eq!(game.history().len(), len);
        assert_eq!(game.cursor(), cursor);
    }
}

#[test]
fn test_moves_after_win_change_nothing() {
    let mut game = GameState::new();
    play_indices(&mut game, &[0, 3, 1, 4, 2]);
    let before = game.clone();

    for pos in Position::valid_moves(game.current_snapshot().board()) {
        assert!(!game.play_move(pos).is_played());
    }
    assert_eq!(game, before);
}

#[test]
fn test_jump_then_play_truncates_future() {
    let mut game = GameState::new();
    play_indices(&mut game, &[0, 3, 1, 4]);
    let original = game.history().to_vec();

    for k in 0..original.len() {
        let mut branch = game.clone();
        branch.jump_to(k).expect("in range");
        let free = Position::valid_moves(branch.current_snapshot().board())[0];
        assert!(branch.play_move(free).is_played());

        assert_eq!(branch.history().len(), k + 2);
        assert_eq!(branch.cursor(), k + 1);
        assert_eq!(&branch.history()[..=k], &original[..=k]);
    }
}

#[test]
fn test_jump_does_not_modify_history() {
    let mut game = GameState::new();
    play_indices(&mut game, &[8, 0, 6]);
    let history = game.history().to_vec();

    game.jump_to(1).expect("in range");
    assert_eq!(game.history(), history.as_slice());
    assert_eq!(game.cursor(), 1);
    assert_eq!(game.next_player(), Player::O);
}

#[test]
fn test_jump_to_start_shows_empty_board() {
    let mut game = GameState::new();
    play_indices(&mut game, &[0]);

    game.jump_to(0).expect("in range");
    assert_eq!(*game.current_snapshot().board(), Board::new());
    assert_eq!(status_text(game.current_snapshot()), "Next player: X");
}

#[test]
fn test_jump_back_from_win_allows_new_branch() {
    let mut game = GameState::new();
    play_indices(&mut game, &[0, 3, 1, 4, 2]);
    game.jump_to(4).expect("in range");

    assert_eq!(game.winner(), None);
    assert!(game.play_move(Position::BottomRight).is_played());
    assert_eq!(game.move_count(), 5);
    assert_eq!(game.winner(), None);
}

#[test]
fn test_jump_out_of_range_leaves_state() {
    let mut game = GameState::new();
    play_indices(&mut game, &[0, 1]);
    let before = game.clone();

    assert!(game.jump_to(3).is_err());
    assert!(game.jump_to(usize::MAX).is_err());
    assert_eq!(game, before);
}

#[test]
fn test_move_list_follows_cursor() {
    let mut game = GameState::new();
    play_indices(&mut game, &[0, 1, 2]);
    game.jump_to(2).expect("in range");

    let labels: Vec<_> = move_list(&game).into_iter().map(|e| (e.label, e.is_current)).collect();
    assert_eq!(
        labels,
        vec![
            ("Go to game start".to_string(), false),
            ("Go to move #1".to_string(), false),
            ("Go to move #2".to_string(), true),
            ("Go to move #3".to_string(), false),
        ]
    );
}

#[test]
fn test_game_state_serializes() {
    let mut game = GameState::new();
    play_indices(&mut game, &[4, 0]);
    game.jump_to(1).expect("in range");

    let json = serde_json::to_string(&game).expect("serialize");
    let restored: GameState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, game);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut game = GameState::new();
    play_indices(&mut game, &[0, 4, 8, 1, 7, 6, 2, 5, 3]);

    assert!(is_draw(game.current_snapshot().board()));
    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.status().is_over());
    assert_eq!(status_text(game.current_snapshot()), "Next player: O");

    game.jump_to(8).expect("in range");
    assert_eq!(game.status(), GameStatus::InProgress { next: Player::X });
    assert!(!game.status().is_over());
}

#[test]
fn test_won_status_is_over() {
    let mut game = GameState::new();
    play_indices(&mut game, &[0, 3, 1, 4, 2]);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert!(game.status().is_over());
}

#[test]
fn test_deserialize_rejects_empty_history() {
    let result = serde_json::from_str::<GameState>(r#"{"history":[],"cursor":0}"#);
    let err = result.expect_err("empty history has no initial snapshot");
    assert!(err.to_string().contains("History starts with the empty board"));
}

#[test]
fn test_deserialize_rejects_cursor_past_history() {
    let mut value = serde_json::to_value(GameState::new()).expect("serialize");
    value["cursor"] = serde_json::json!(7);

    let err = serde_json::from_value::<GameState>(value).expect_err("cursor out of bounds");
    assert!(err.to_string().contains("Cursor points at an existing history entry"));
}

#[test]
fn test_deserialize_rejects_move_after_win() {
    let mut game = GameState::new();
    play_indices(&mut game, &[0, 3, 1, 4, 2]);
    let mut value = serde_json::to_value(&game).expect("serialize");

    let after_win = game.current_snapshot().board().with_mark(Position::BottomRight, Player::O);
    let extra = serde_json::to_value(tictactoe_timeline::Snapshot::new(after_win, Player::X))
        .expect("serialize");
    value["history"].as_array_mut().expect("history array").push(extra);

    assert!(serde_json::from_value::<GameState>(value).is_err());
}
