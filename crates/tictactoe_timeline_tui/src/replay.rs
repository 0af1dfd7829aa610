//! Headless replay: apply moves and report the resulting game.

use serde::Serialize;
use tictactoe_timeline::{
    GameState, JumpError, MoveOutcome, Player, Position, Snapshot, move_list, status_text,
};
use tracing::{info, instrument};

/// Everything `replay` prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Status line of the displayed snapshot.
    pub status: String,
    /// Winner on the displayed snapshot.
    pub winner: Option<Player>,
    /// Index of the displayed snapshot.
    pub cursor: usize,
    /// Moves that were not recorded.
    pub rejected: Vec<RejectedMove>,
    /// The move list.
    pub history: Vec<HistoryEntry>,
    /// Board of the displayed snapshot, `null` for empty cells.
    pub board: [Option<Player>; 9],
}

/// A move argument that was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedMove {
    /// 1-based position of the argument on the command line.
    pub argument: usize,
    /// Requested cell.
    pub position: Position,
    /// Why it was skipped.
    pub reason: String,
}

/// One move-list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// History index.
    pub index: usize,
    /// Move-list label.
    pub label: String,
    /// True for the displayed entry.
    pub current: bool,
    /// Player to move from this entry.
    pub next_player: Player,
}

fn cells(snapshot: &Snapshot) -> [Option<Player>; 9] {
    (*snapshot.board().cells()).map(|cell| cell.player())
}

/// Plays `moves` from the start, then optionally jumps.
///
/// # Errors
///
/// Returns [`JumpError`] if `jump` is past the end of the resulting history.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(moves: &[Position], jump: Option<usize>) -> Result<(GameState, ReplayReport), JumpError> {
    let (mut game, outcomes) = GameState::replay(moves.iter().copied());
    if let Some(index) = jump {
        game.jump_to(index)?;
    }

    let rejected = moves
        .iter()
        .zip(&outcomes)
        .enumerate()
        .filter_map(|(i, (&position, outcome))| match outcome {
            MoveOutcome::Rejected(reason) => Some(RejectedMove {
                argument: i + 1,
                position,
                reason: reason.to_string(),
            }),
            MoveOutcome::Played { .. } => None,
        })
        .collect::<Vec<_>>();

    let history = move_list(&game)
        .into_iter()
        .zip(game.history())
        .map(|(entry, snapshot)| HistoryEntry {
            index: entry.index,
            label: entry.label,
            current: entry.is_current,
            next_player: snapshot.next_player(),
        })
        .collect();

    let current = game.current_snapshot();
    let report = ReplayReport {
        status: status_text(current),
        winner: current.winner(),
        cursor: game.cursor(),
        rejected,
        history,
        board: cells(current),
    };
    info!(cursor = report.cursor, rejected = report.rejected.len(), "Replay finished");
    Ok((game, report))
}

/// Plain-text rendering of a replay.
pub fn render_text(game: &GameState, report: &ReplayReport) -> String {
    let mut out = String::new();
    out.push_str(&game.current_snapshot().board().display());
    out.push_str("\n\n");
    out.push_str(&report.status);
    out.push_str("\n\n");
    for entry in &report.history {
        let marker = if entry.current { '>' } else { ' ' };
        out.push_str(&format!("{marker} {}\n", entry.label));
    }
    if !report.rejected.is_empty() {
        out.push_str(&format!("\nRejected {} move(s):\n", report.rejected.len()));
        for rejected in &report.rejected {
            out.push_str(&format!("  #{}: {}\n", rejected.argument, rejected.reason));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(indices: &[usize]) -> Vec<Position> {
        indices
            .iter()
            .map(|&i| Position::from_index(i).expect("valid index"))
            .collect()
    }

    #[test]
    fn test_report_for_win() {
        let (_, report) = replay(&positions(&[0, 3, 1, 4, 2]), None).expect("no jump");
        assert_eq!(report.status, "Winner: X");
        assert_eq!(report.winner, Some(Player::X));
        assert_eq!(report.cursor, 5);
        assert_eq!(report.history.len(), 6);
        assert!(report.history[5].current);
        assert_eq!(report.board[0], Some(Player::X));
        assert_eq!(report.board[8], None);
    }

    #[test]
    fn test_rejected_moves_are_listed() {
        let (_, report) = replay(&positions(&[0, 0, 3, 1, 4, 2, 8]), None).expect("no jump");
        let arguments: Vec<_> = report.rejected.iter().map(|r| r.argument).collect();
        // #2 hits an occupied cell; #7 comes after X's top-row win.
        assert_eq!(arguments, vec![2, 7]);
        assert_eq!(report.rejected[0].reason, "Top-left is already occupied");
        assert_eq!(report.rejected[1].reason, "Player X has already won");
    }

    #[test]
    fn test_jump_changes_displayed_entry() {
        let (game, report) = replay(&positions(&[0, 1]), Some(0)).expect("in range");
        assert_eq!(game.history().len(), 3);
        assert_eq!(report.cursor, 0);
        assert_eq!(report.status, "Next player: X");
        assert_eq!(report.board, [None; 9]);
    }

    #[test]
    fn test_jump_out_of_range() {
        assert_eq!(
            replay(&positions(&[0]), Some(2)).unwrap_err(),
            JumpError::OutOfRange { requested: 2, len: 2 }
        );
    }

    #[test]
    fn test_text_marks_current_entry() {
        let (game, report) = replay(&positions(&[4]), Some(0)).expect("in range");
        let text = render_text(&game, &report);
        assert!(text.contains("Next player: X"));
        assert!(text.contains("> Go to game start\n"));
        assert!(text.contains("  Go to move #1\n"));
    }

    #[test]
    fn test_grid_numbers_are_move_arguments() {
        let (game, report) = replay(&positions(&[5]), None).expect("no jump");
        let text = render_text(&game, &report);
        assert!(text.starts_with("0|1|2\n-+-+-\n3|4|X\n-+-+-\n6|7|8\n"));

        // The number shown on a free cell replays onto that cell.
        let shown = Position::from_label_or_number("4").expect("grid number");
        let (next, _) = replay(&[Position::MiddleRight, shown], None).expect("no jump");
        assert_eq!(next.move_count(), 2);
        assert_eq!(
            next.current_snapshot().board().get(Position::Center),
            tictactoe_timeline::Cell::Occupied(Player::O)
        );
    }

    #[test]
    fn test_json_uses_null_for_empty_cells() {
        let (_, report) = replay(&positions(&[4]), None).expect("no jump");
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["board"][4], "X");
        assert!(json["board"][0].is_null());
        assert_eq!(json["status"], "Next player: O");
    }
}
