//! Pluggable move selection. The core engine only validates moves and
//! reports outcomes; where the columns come from (random, interactive,
//! scripted) is behind this trait.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::Board;

/// Interface for anything that can supply a column on demand.
pub trait MoveSource {
    /// Select a column for the next piece. The column is not required to be
    /// legal; the driver skips invalid moves.
    fn next_column(&mut self, board: &Board) -> usize;

    /// Return the source's display name.
    fn name(&self) -> &str;
}

/// A source that selects uniformly at random from the open columns.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    pub fn new() -> Self {
        RandomSource {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded constructor for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        RandomSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for RandomSource {
    fn next_column(&mut self, board: &Board) -> usize {
        let columns = board.legal_columns();
        assert!(!columns.is_empty(), "no open columns available");
        columns[self.rng.random_range(0..columns.len())]
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_random_source_selects_open_column() {
        let mut source = RandomSource::new();
        let board = Board::new(7, 6, 4);

        for _ in 0..100 {
            let column = source.next_column(&board);
            assert!(board.valid_location(column), "column {} is not open", column);
        }
    }

    #[test]
    fn test_random_source_avoids_full_columns() {
        let mut source = RandomSource::seeded(7);
        let mut board = Board::new(3, 2, 4);
        board.place_piece(1, Player::Red).unwrap();
        board.place_piece(1, Player::Black).unwrap();

        for _ in 0..50 {
            assert_ne!(source.next_column(&board), 1);
        }
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let board = Board::new(7, 6, 4);
        let mut a = RandomSource::seeded(42);
        let mut b = RandomSource::seeded(42);

        for _ in 0..20 {
            assert_eq!(a.next_column(&board), b.next_column(&board));
        }
    }

    #[test]
    fn test_random_source_name() {
        assert_eq!(RandomSource::new().name(), "Random");
    }
}
