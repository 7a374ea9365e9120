//! Board plus the two counters the rules depend on

use super::{Board, Move, Role, GOAT_COUNT};
use crate::rules::apply_move;

/// Sub-phase of the game, derived from goats placed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Goats still have pieces in hand
    Placement,
    /// All goats have entered; every move is a slide or jump
    Movement,
}

impl Phase {
    #[inline]
    pub fn of(goats_placed: u8) -> Phase {
        if goats_placed < GOAT_COUNT {
            Phase::Placement
        } else {
            Phase::Movement
        }
    }
}

/// Everything the rule and AI code reads about a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub board: Board,
    pub goats_placed: u8,
    pub goats_captured: u8,
}

impl Position {
    pub fn new(board: Board, goats_placed: u8, goats_captured: u8) -> Self {
        Self {
            board,
            goats_placed,
            goats_captured,
        }
    }

    /// Fresh game: corner tigers, nothing placed or captured
    pub fn initial() -> Self {
        Self::new(Board::new(), 0, 0)
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        Phase::of(self.goats_placed)
    }

    /// Position after `side` plays `mv`.
    ///
    /// Applies the move to the board and capture count, then advances the
    /// placement counter for placements (capped at [`GOAT_COUNT`]).
    #[must_use]
    pub fn after(&self, mv: Move, side: Role) -> Position {
        let (board, goats_captured) = apply_move(&self.board, mv, side, self.goats_captured);
        let goats_placed = if mv.is_placement() {
            (self.goats_placed + 1).min(GOAT_COUNT)
        } else {
            self.goats_placed
        };
        Position {
            board,
            goats_placed,
            goats_captured,
        }
    }
}
