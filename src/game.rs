//! Caller-side game bookkeeping
//!
//! The rule and AI functions are pure; [`GameState`] is the owner that
//! validates moves, advances the counters, flips the turn and keeps the
//! snapshots needed for undo.

use thiserror::Error;

use crate::board::{Board, Move, Phase, Position, Role};
use crate::rules::{all_moves, evaluate_win, legal_moves, GameStatus};

/// Why [`GameState::play`] refused a move
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleError {
    #[error("the game is already over")]
    GameOver,
    #[error("illegal move {0}")]
    IllegalMove(Move),
    #[error("move belongs to the side not on turn")]
    WrongTurn,
}

/// State before one move, with the move that left it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub position: Position,
    pub to_move: Role,
    pub mv: Move,
}

/// A game in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub to_move: Role,
    pub goats_placed: u8,
    pub goats_captured: u8,
    /// Oldest first
    pub history: Vec<Snapshot>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: corner tigers, goats to move
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Position::initial(), Role::Goat)
    }

    /// Game starting from an arbitrary position, without history
    #[must_use]
    pub fn from_position(position: Position, to_move: Role) -> Self {
        Self {
            board: position.board,
            to_move,
            goats_placed: position.goats_placed,
            goats_captured: position.goats_captured,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.board, self.goats_placed, self.goats_captured)
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        Phase::of(self.goats_placed)
    }

    pub fn status(&self) -> GameStatus {
        evaluate_win(&self.board, self.goats_captured, self.to_move)
    }

    /// Every legal move for the side to move
    pub fn legal_moves(&self) -> Vec<Move> {
        all_moves(&self.board, self.to_move, self.goats_placed)
    }

    /// Most recent move played by `role`
    pub fn last_move_by(&self, role: Role) -> Option<Move> {
        self.history
            .iter()
            .rev()
            .find(|snapshot| snapshot.to_move == role)
            .map(|snapshot| snapshot.mv)
    }

    /// Validate and play `mv` for the side to move.
    ///
    /// Slides between the ends of a jump path are treated as the jump.
    ///
    /// # Returns
    /// The status after the move.
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, RuleError> {
        if self.status().is_over() {
            return Err(RuleError::GameOver);
        }

        let mv = self.validate(mv)?;
        let before = self.position();
        self.history.push(Snapshot {
            position: before,
            to_move: self.to_move,
            mv,
        });

        let after = before.after(mv, self.to_move);
        self.board = after.board;
        self.goats_placed = after.goats_placed;
        self.goats_captured = after.goats_captured;
        self.to_move = self.to_move.opponent();

        Ok(self.status())
    }

    /// Take back the last move. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            return false;
        };
        self.board = snapshot.position.board;
        self.goats_placed = snapshot.position.goats_placed;
        self.goats_captured = snapshot.position.goats_captured;
        self.to_move = snapshot.to_move;
        true
    }

    /// Normalised form of `mv` if the side to move may play it
    fn validate(&self, mv: Move) -> Result<Move, RuleError> {
        let side = self.to_move;
        match mv.source() {
            None => {
                if side != Role::Goat {
                    return Err(RuleError::WrongTurn);
                }
                let to = mv.destination();
                if self.phase() == Phase::Placement && self.board.is_empty(to) {
                    Ok(mv)
                } else {
                    Err(RuleError::IllegalMove(mv))
                }
            }
            Some(from) => {
                if self.board.get(from) == Some(side.opponent()) {
                    return Err(RuleError::WrongTurn);
                }
                let to = mv.destination();
                if legal_moves(from, side, &self.board, self.goats_placed).contains(to) {
                    Ok(Move::between(from, to))
                } else {
                    Err(RuleError::IllegalMove(mv))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Node, GOAT_COUNT};
    use crate::rules::WinReason;

    fn n(id: u8) -> Node {
        Node::new(id)
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.to_move, Role::Goat);
        assert_eq!(game.phase(), Phase::Placement);
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert_eq!(game.legal_moves().len(), 20);
        assert!(game.history.is_empty());
    }

    #[test]
    fn test_play_placement_then_tiger() {
        let mut game = GameState::new();
        assert_eq!(game.play(Move::Place(n(11))), Ok(GameStatus::Ongoing));
        assert_eq!(game.goats_placed, 1);
        assert_eq!(game.to_move, Role::Tiger);

        game.play(Move::between(n(0), n(1))).expect("tiger slide is legal");
        assert_eq!(game.to_move, Role::Goat);
        assert_eq!(game.history.len(), 2);
        assert_eq!(game.last_move_by(Role::Tiger), Some(Move::between(n(0), n(1))));
        assert_eq!(game.last_move_by(Role::Goat), Some(Move::Place(n(11))));
    }

    #[test]
    fn test_wrong_turn() {
        let mut game = GameState::new();
        assert_eq!(game.play(Move::between(n(0), n(1))), Err(RuleError::WrongTurn));

        game.play(Move::Place(n(11))).expect("placement is legal");
        assert_eq!(game.play(Move::Place(n(12))), Err(RuleError::WrongTurn));
    }

    #[test]
    fn test_illegal_moves_rejected() {
        let mut game = GameState::new();
        assert_eq!(
            game.play(Move::Place(n(0))),
            Err(RuleError::IllegalMove(Move::Place(n(0))))
        );

        game.play(Move::Place(n(11))).expect("placement is legal");
        let far = Move::between(n(0), n(12));
        assert_eq!(game.play(far), Err(RuleError::IllegalMove(far)));
        assert_eq!(game.history.len(), 1);
    }

    #[test]
    fn test_goat_cannot_slide_while_placing() {
        let mut game = GameState::new();
        game.play(Move::Place(n(11))).expect("placement is legal");
        game.play(Move::between(n(0), n(1))).expect("tiger slide is legal");
        let slide = Move::between(n(11), n(12));
        assert_eq!(game.play(slide), Err(RuleError::IllegalMove(slide)));
    }

    #[test]
    fn test_slide_over_goat_is_played_as_jump() {
        let mut game = GameState::new();
        game.play(Move::Place(n(1))).expect("placement is legal");
        let status = game
            .play(Move::Slide { from: n(0), to: n(2) })
            .expect("jump is legal");
        assert_eq!(status, GameStatus::Ongoing);
        assert_eq!(game.goats_captured, 1);
        assert!(game.board.is_empty(n(1)));
        assert!(game.last_move_by(Role::Tiger).is_some_and(|mv| mv.is_capture()));
    }

    #[test]
    fn test_undo_restores_snapshot() {
        let mut game = GameState::new();
        let fresh = game.clone();
        game.play(Move::Place(n(1))).expect("placement is legal");
        game.play(Move::between(n(0), n(2))).expect("jump is legal");

        assert!(game.undo());
        assert_eq!(game.goats_captured, 0);
        assert_eq!(game.board.get(n(1)), Some(Role::Goat));
        assert_eq!(game.to_move, Role::Tiger);

        assert!(game.undo());
        assert_eq!(game, fresh);
        assert!(!game.undo());
    }

    #[test]
    fn test_game_over_rejects_moves() {
        let board = Board::empty()
            .with(n(0), Role::Tiger)
            .with(n(1), Role::Goat)
            .with(n(2), Role::Goat)
            .with(n(5), Role::Goat)
            .with(n(9), Role::Goat)
            .with(n(11), Role::Goat);
        let mut game = GameState::from_position(Position::new(board, GOAT_COUNT, 0), Role::Goat);
        assert_eq!(
            game.status().reason(),
            Some(WinReason::TigersBlocked)
        );
        assert_eq!(
            game.play(Move::between(n(11), n(12))),
            Err(RuleError::GameOver)
        );
    }

    #[test]
    fn test_blocking_move_ends_game() {
        let board = Board::empty()
            .with(n(0), Role::Tiger)
            .with(n(1), Role::Goat)
            .with(n(2), Role::Goat)
            .with(n(6), Role::Goat)
            .with(n(9), Role::Goat);
        let mut game = GameState::from_position(Position::new(board, GOAT_COUNT, 0), Role::Goat);
        let status = game.play(Move::between(n(6), n(5))).expect("slide is legal");
        assert_eq!(status.winner(), Some(Role::Goat));
    }
}
