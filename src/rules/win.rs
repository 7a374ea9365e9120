//! Win condition checking
//!
//! Win conditions:
//! 1. Tigers win once they have captured [`CAPTURES_TO_WIN`] goats
//! 2. Goats win when no tiger has a legal move

use crate::board::{Board, Role, CAPTURES_TO_WIN, GOAT_COUNT};

use super::movegen::is_blocked;

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinReason {
    /// Tigers reached the capture target
    CaptureThreshold,
    /// Every tiger is immobilised
    TigersBlocked,
}

impl std::fmt::Display for WinReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinReason::CaptureThreshold => f.write_str("capture threshold reached"),
            WinReason::TigersBlocked => f.write_str("capturing side fully blocked"),
        }
    }
}

/// Terminal or non-terminal verdict on a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Won { winner: Role, reason: WinReason },
}

impl GameStatus {
    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Won { .. })
    }

    #[inline]
    pub fn winner(&self) -> Option<Role> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            GameStatus::Ongoing => None,
        }
    }

    #[inline]
    pub fn reason(&self) -> Option<WinReason> {
        match self {
            GameStatus::Won { reason, .. } => Some(*reason),
            GameStatus::Ongoing => None,
        }
    }
}

/// Decide whether the game is over and who won.
///
/// Neither condition depends on whose turn it is; `side_to_move` is part of
/// the signature so callers can evaluate any ply uniformly.
///
/// A board without tigers is reported as ongoing rather than as a goat win.
///
/// # Arguments
/// * `board` - Current board state
/// * `captured` - Goats captured so far
/// * `_side_to_move` - Side about to move
#[must_use]
pub fn evaluate_win(board: &Board, captured: u8, _side_to_move: Role) -> GameStatus {
    if captured >= CAPTURES_TO_WIN {
        return GameStatus::Won {
            winner: Role::Tiger,
            reason: WinReason::CaptureThreshold,
        };
    }

    let tigers = board.pieces(Role::Tiger);
    if tigers.is_empty() {
        return GameStatus::Ongoing;
    }

    // Tiger moves never depend on the goat phase; pass the full count so
    // the check reads the same in both phases.
    if tigers
        .iter()
        .all(|tiger| is_blocked(tiger, Role::Tiger, board, GOAT_COUNT))
    {
        return GameStatus::Won {
            winner: Role::Goat,
            reason: WinReason::TigersBlocked,
        };
    }

    GameStatus::Ongoing
}
