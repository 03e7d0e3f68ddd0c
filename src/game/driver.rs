use crate::config::GameConfig;
use crate::error::ConfigError;

use super::board::{Board, PlacementOutcome};
use super::player::Player;

/// Game-level result of a move-sequence playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    NotDone,
    Draw,
    Winner(Player),
}

/// One game: a board plus the move-sequence driver.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
}

impl Game {
    /// Create a game from a validated configuration.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Game {
            board: Board::new(config.width, config.height, config.connect),
        })
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play two pre-supplied move sequences against each other: Red's move
    /// at index i, then Black's move at index i, for increasing i.
    ///
    /// Returns the outcome together with the index of the move pair that
    /// ended the game. Invalid moves (column out of range or full) are
    /// skipped with a note on stderr and do not end the game. If either
    /// sequence runs out before a win or draw, playback stops immediately
    /// and the reported index is the length of Red's sequence.
    pub fn play_move_sequence(
        &mut self,
        red_moves: &[usize],
        black_moves: &[usize],
    ) -> (GameOutcome, usize) {
        let rounds = red_moves.len().max(black_moves.len());
        for index in 0..rounds {
            let Some(&column) = red_moves.get(index) else {
                return (GameOutcome::NotDone, red_moves.len());
            };
            if let Some(outcome) = self.half_turn(column, Player::Red, index) {
                return (outcome, index);
            }

            let Some(&column) = black_moves.get(index) else {
                return (GameOutcome::NotDone, red_moves.len());
            };
            if let Some(outcome) = self.half_turn(column, Player::Black, index) {
                return (outcome, index);
            }
        }
        (GameOutcome::NotDone, red_moves.len())
    }

    /// Apply one half-turn. `Some` means the game ended; an invalid move is
    /// skipped without mutating the board.
    fn half_turn(&mut self, column: usize, color: Player, index: usize) -> Option<GameOutcome> {
        match self.board.place_piece(column, color) {
            Ok(PlacementOutcome::Win) => Some(GameOutcome::Winner(color)),
            Ok(PlacementOutcome::BoardFull) => Some(GameOutcome::Draw),
            Ok(PlacementOutcome::NoWin) => None,
            Err(err) => {
                eprintln!(
                    "Warning: move {} for {} skipped: {}",
                    index + 1,
                    color.name(),
                    err
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_game() -> Game {
        Game::new(&GameConfig::default()).unwrap()
    }

    #[test]
    fn test_rejects_invalid_configuration() {
        let config = GameConfig {
            width: 0,
            ..GameConfig::default()
        };
        assert!(Game::new(&config).is_err());
    }

    #[test]
    fn test_horizontal_win_for_red() {
        let mut game = standard_game();
        let result = game.play_move_sequence(&[1, 2, 3, 4, 5, 5], &[0, 0, 0, 5, 5]);
        assert_eq!(result, (GameOutcome::Winner(Player::Red), 3));
    }

    #[test]
    fn test_vertical_win_stops_before_later_moves() {
        let mut game = standard_game();
        let result = game.play_move_sequence(&[1, 1, 1, 1, 3], &[2, 2, 2, 3, 3]);
        assert_eq!(result, (GameOutcome::Winner(Player::Red), 3));
        // Black's fourth move and the fifth pair were never processed.
        assert_eq!(game.board().fill_level(3), 0);
    }

    #[test]
    fn test_red_win_on_fifth_move() {
        let mut game = standard_game();
        let result = game.play_move_sequence(&[1, 1, 1, 3, 1], &[2, 2, 2, 4]);
        assert_eq!(result, (GameOutcome::Winner(Player::Red), 4));
    }

    #[test]
    fn test_upward_diagonal_win_for_red() {
        let mut game = standard_game();
        let result = game.play_move_sequence(&[0, 1, 3, 2, 3, 3], &[1, 2, 2, 3, 4]);
        assert_eq!(result, (GameOutcome::Winner(Player::Red), 5));
    }

    #[test]
    fn test_downward_diagonal_win_for_black() {
        let mut game = standard_game();
        let result = game.play_move_sequence(&[2, 1, 1, 0, 0], &[3, 2, 1, 0, 0]);
        assert_eq!(result, (GameOutcome::Winner(Player::Black), 4));
    }

    #[test]
    fn test_black_sequence_exhausted_reports_red_length() {
        let mut game = standard_game();
        let result = game.play_move_sequence(&[0, 1, 2, 3, 4], &[6, 6]);
        // Stops once Black has no third move; index is Red's full length,
        // not the number of pairs actually played.
        assert_eq!(result, (GameOutcome::NotDone, 5));
        assert_eq!(game.board().fill_level(3), 0);
    }

    #[test]
    fn test_red_sequence_exhausted_reports_red_length() {
        let mut game = standard_game();
        let result = game.play_move_sequence(&[0, 1], &[6, 6, 6]);
        assert_eq!(result, (GameOutcome::NotDone, 2));
    }

    #[test]
    fn test_both_sequences_exhausted_without_result() {
        let mut game = standard_game();
        let result = game.play_move_sequence(&[0, 1, 2], &[4, 5, 6]);
        assert_eq!(result, (GameOutcome::NotDone, 3));
    }

    #[test]
    fn test_invalid_moves_are_skipped_not_fatal() {
        let mut game = standard_game();
        // Red's out-of-range moves are skipped; the wins still come from the
        // valid tail of the sequence.
        let result = game.play_move_sequence(&[9, 1, 1, 1, 1], &[2, 2, 2, 6, 6]);
        assert_eq!(result, (GameOutcome::Winner(Player::Red), 4));
        assert_eq!(game.board().fill_level(1), 4);
    }

    #[test]
    fn test_full_column_moves_are_skipped() {
        let mut game = Game::new(&GameConfig {
            width: 7,
            height: 2,
            connect: 4,
        })
        .unwrap();
        // Column 0 fills after one pair; later drops there are skipped.
        let result = game.play_move_sequence(&[0, 0, 1, 2, 4], &[0, 0, 1, 2, 3]);
        assert_eq!(result, (GameOutcome::NotDone, 5));
        assert_eq!(game.board().fill_level(0), 2);
    }

    #[test]
    fn test_draw_on_tiny_board() {
        let mut game = Game::new(&GameConfig {
            width: 2,
            height: 1,
            connect: 4,
        })
        .unwrap();
        let result = game.play_move_sequence(&[0, 1], &[1, 0]);
        assert_eq!(result, (GameOutcome::Draw, 0));
    }
}
