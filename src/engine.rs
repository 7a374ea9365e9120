//! AI engine dispatching between the three difficulty tiers
//!
//! - **Easy**: uniformly random legal move
//! - **Medium**: tigers take a random capture when one exists, otherwise random
//! - **Hard**: goats place by the placement heuristic; every other move comes
//!   from the alpha-beta search at the phase's configured depth
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tigerhunt::{AIEngine, Difficulty, GameState, Role};
//!
//! let mut engine = AIEngine::new();
//! let mut rng = StdRng::seed_from_u64(42);
//! let game = GameState::new();
//!
//! let result = engine.choose_move_with_stats(&game, Difficulty::Hard, Role::Goat, &mut rng);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use log::{info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::board::{Move, Phase, Role};
use crate::config::EngineConfig;
use crate::eval::choose_placement;
use crate::game::GameState;
use crate::rules::all_moves;
use crate::search::{SearchResult, Searcher};

/// AI strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Unknown difficulty name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown difficulty {0:?} (expected easy, medium or hard)")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => f.write_str("easy"),
            Difficulty::Medium => f.write_str("medium"),
            Difficulty::Hard => f.write_str("hard"),
        }
    }
}

/// Which path of the dispatcher produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Uniform choice among all legal moves
    Random,
    /// Uniform choice among captures
    Greedy,
    /// Goat placement heuristic
    Placement,
    /// Capture that wins on the spot
    FastWin,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// The AI side had no legal move
    NoMove,
}

/// Result of a move choice with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move, if any
    pub best_move: Option<Move>,
    /// Score behind the choice (0 for the random tiers)
    pub score: i32,
    /// Path that chose the move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of search plies visited
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn random(mv: Move, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move: Some(mv),
            score: 0,
            search_type,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn placement(mv: Move, score: i32, time_ms: u64) -> Self {
        Self {
            best_move: Some(mv),
            score,
            search_type: SearchType::Placement,
            time_ms,
            nodes: 0,
        }
    }

    /// Create a result from the searcher, fast path included
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        let search_type = match (result.best_move, result.fast_win) {
            (None, _) => SearchType::NoMove,
            (Some(_), true) => SearchType::FastWin,
            (Some(_), false) => SearchType::AlphaBeta,
        };
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type,
            time_ms,
            nodes: result.nodes,
        }
    }

    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type: SearchType::NoMove,
            time_ms,
            nodes: 0,
        }
    }
}

/// Move chooser for every tier.
///
/// Holds the configuration and a reusable searcher; the game itself stays
/// with the caller and is passed in on every call.
#[derive(Debug)]
pub struct AIEngine {
    config: EngineConfig,
    searcher: Searcher,
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AIEngine {
    /// Engine with the built-in defaults (depths 4 and 6, jitter 10).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Engine with custom configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use tigerhunt::{AIEngine, EngineConfig};
    ///
    /// let mut config = EngineConfig::default();
    /// config.search.movement_depth = 4;
    /// let engine = AIEngine::with_config(config);
    /// assert_eq!(engine.config().search.movement_depth, 4);
    /// ```
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            searcher: Searcher::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Choose a move for `ai_role`, which should be the side to move.
    ///
    /// Returns `None` only when `ai_role` has no legal move.
    pub fn choose_move<R: Rng>(
        &mut self,
        state: &GameState,
        difficulty: Difficulty,
        ai_role: Role,
        rng: &mut R,
    ) -> Option<Move> {
        self.choose_move_with_stats(state, difficulty, ai_role, rng)
            .best_move
    }

    /// Choose a move and report how it was found.
    pub fn choose_move_with_stats<R: Rng>(
        &mut self,
        state: &GameState,
        difficulty: Difficulty,
        ai_role: Role,
        rng: &mut R,
    ) -> MoveResult {
        let start = Instant::now();

        let moves = all_moves(&state.board, ai_role, state.goats_placed);
        if moves.is_empty() {
            warn!("{} {} has no legal move", difficulty, ai_role);
            return MoveResult::no_move(elapsed_ms(start));
        }

        let result = match difficulty {
            Difficulty::Easy => Self::random_move(&moves, rng, elapsed_ms(start)),
            Difficulty::Medium => {
                let captures: Vec<Move> = moves.iter().copied().filter(Move::is_capture).collect();
                match captures.choose(rng) {
                    Some(&mv) if ai_role == Role::Tiger => {
                        MoveResult::random(mv, SearchType::Greedy, elapsed_ms(start))
                    }
                    _ => Self::random_move(&moves, rng, elapsed_ms(start)),
                }
            }
            Difficulty::Hard => self.hard_move(state, ai_role, rng, start),
        };

        info!(
            "{} {} plays {} via {:?} (score {}, {} nodes, {}ms)",
            difficulty,
            ai_role,
            result
                .best_move
                .map_or_else(|| "nothing".to_string(), |mv| mv.to_string()),
            result.search_type,
            result.score,
            result.nodes,
            result.time_ms
        );
        result
    }

    fn random_move<R: Rng>(moves: &[Move], rng: &mut R, time_ms: u64) -> MoveResult {
        match moves.choose(rng) {
            Some(&mv) => MoveResult::random(mv, SearchType::Random, time_ms),
            None => MoveResult::no_move(time_ms),
        }
    }

    fn hard_move<R: Rng>(
        &mut self,
        state: &GameState,
        ai_role: Role,
        rng: &mut R,
        start: Instant,
    ) -> MoveResult {
        let phase = state.phase();

        if ai_role == Role::Goat && phase == Phase::Placement {
            if let Some((node, score)) =
                choose_placement(&state.board, self.config.placement.jitter, rng)
            {
                return MoveResult::placement(Move::Place(node), score, elapsed_ms(start));
            }
        }

        let depth = self.config.search.depth_for(phase);
        let result = self.searcher.search(&state.position(), ai_role, depth, rng);
        MoveResult::from_search(result, elapsed_ms(start))
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// Choose a move for `ai_role` with the default engine configuration.
///
/// # Returns
/// `None` when `ai_role` has no legal move, which in a correctly driven game
/// only happens after [`evaluate_win`](crate::rules::evaluate_win) already
/// reported the game over.
pub fn choose_move<R: Rng>(
    state: &GameState,
    difficulty: Difficulty,
    ai_role: Role,
    rng: &mut R,
) -> Option<Move> {
    AIEngine::new().choose_move(state, difficulty, ai_role, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Node, Position, GOAT_COUNT};
    use crate::eval::exposes_goat;
    use crate::game::Snapshot;
    use crate::search::WIN_SCORE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn n(id: u8) -> Node {
        Node::new(id)
    }

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    /// Small depths keep the hard-tier tests quick
    fn fast_engine() -> AIEngine {
        let mut config = EngineConfig::default();
        config.search.placement_depth = 2;
        config.search.movement_depth = 3;
        AIEngine::with_config(config)
    }

    #[test]
    fn test_engine_default() {
        let engine = AIEngine::default();
        assert_eq!(engine.config(), &EngineConfig::default());
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(" HARD ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("brutal".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn test_easy_move_is_legal() {
        let game = GameState::new();
        let legal = game.legal_moves();
        let mut engine = AIEngine::new();
        for seed in 0..16 {
            let result =
                engine.choose_move_with_stats(&game, Difficulty::Easy, Role::Goat, &mut rng(seed));
            assert_eq!(result.search_type, SearchType::Random);
            assert!(legal.contains(&result.best_move.expect("goats can place")));
        }
    }

    #[test]
    fn test_medium_tiger_takes_capture() {
        let board = Board::new()
            .with(n(1), Role::Goat)
            .with(n(11), Role::Goat);
        let game = GameState::from_position(Position::new(board, 2, 0), Role::Tiger);
        let mut engine = AIEngine::new();
        for seed in 0..8 {
            let result =
                engine.choose_move_with_stats(&game, Difficulty::Medium, Role::Tiger, &mut rng(seed));
            assert_eq!(result.search_type, SearchType::Greedy);
            assert_eq!(result.best_move, Some(Move::between(n(0), n(2))));
        }
    }

    #[test]
    fn test_medium_without_capture_is_random() {
        let game = GameState::from_position(Position::initial(), Role::Tiger);
        let mut engine = AIEngine::new();
        let result =
            engine.choose_move_with_stats(&game, Difficulty::Medium, Role::Tiger, &mut rng(1));
        assert_eq!(result.search_type, SearchType::Random);
    }

    #[test]
    fn test_medium_goat_is_random() {
        let game = GameState::new();
        let mut engine = AIEngine::new();
        let result =
            engine.choose_move_with_stats(&game, Difficulty::Medium, Role::Goat, &mut rng(2));
        assert_eq!(result.search_type, SearchType::Random);
    }

    #[test]
    fn test_hard_goat_placement_is_safe() {
        let game = GameState::new();
        let mut engine = AIEngine::new();
        for seed in 0..8 {
            let result =
                engine.choose_move_with_stats(&game, Difficulty::Hard, Role::Goat, &mut rng(seed));
            assert_eq!(result.search_type, SearchType::Placement);
            let node = result.best_move.expect("goats can place").destination();
            assert!(!exposes_goat(&game.board, node));
        }
    }

    #[test]
    fn test_hard_tiger_fast_win() {
        let board = Board::new()
            .with(n(1), Role::Goat)
            .with(n(11), Role::Goat);
        let game = GameState::from_position(Position::new(board, 9, 7), Role::Tiger);
        let mut engine = AIEngine::new();
        let result =
            engine.choose_move_with_stats(&game, Difficulty::Hard, Role::Tiger, &mut rng(3));
        assert_eq!(result.search_type, SearchType::FastWin);
        assert_eq!(result.best_move, Some(Move::between(n(0), n(2))));
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_hard_tiger_searches() {
        let mut game = GameState::new();
        game.play(Move::Place(n(11))).expect("placement is legal");
        let mut engine = fast_engine();
        let result =
            engine.choose_move_with_stats(&game, Difficulty::Hard, Role::Tiger, &mut rng(4));
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        assert!(game.legal_moves().contains(&result.best_move.expect("tigers can move")));
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_hard_goat_movement_searches() {
        let board = Board::empty()
            .with(n(0), Role::Tiger)
            .with(n(1), Role::Goat)
            .with(n(2), Role::Goat)
            .with(n(6), Role::Goat)
            .with(n(9), Role::Goat);
        let game = GameState::from_position(Position::new(board, GOAT_COUNT, 0), Role::Goat);
        let mut engine = fast_engine();
        let result =
            engine.choose_move_with_stats(&game, Difficulty::Hard, Role::Goat, &mut rng(5));
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        assert_eq!(result.best_move, Some(Move::between(n(6), n(5))));
    }

    #[test]
    fn test_hard_ignores_history_at_root() {
        // Backing out with 2-3 is the only move that does not lose
        let tigers = [2, 4, 17, 22];
        let goats = [0, 1, 6, 7, 8, 9, 11, 12, 13, 15, 16, 18, 19, 20, 21, 23];
        let mut board = Board::empty();
        for id in tigers {
            board.place(n(id), Role::Tiger);
        }
        for id in goats {
            board.place(n(id), Role::Goat);
        }
        let mut before = board;
        before.remove(n(2));
        before.place(n(3), Role::Tiger);

        let mut game = GameState::from_position(Position::new(board, GOAT_COUNT, 2), Role::Tiger);
        game.history.push(Snapshot {
            position: Position::new(before, GOAT_COUNT, 2),
            to_move: Role::Tiger,
            mv: Move::between(n(3), n(2)),
        });
        assert_eq!(game.last_move_by(Role::Tiger), Some(Move::between(n(3), n(2))));

        let mut engine = AIEngine::new();
        let result =
            engine.choose_move_with_stats(&game, Difficulty::Hard, Role::Tiger, &mut rng(8));
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        assert!(result.score > -WIN_SCORE, "picked {:?} at {}", result.best_move, result.score);
        assert_ne!(result.best_move, Some(Move::between(n(4), n(3))));
    }

    #[test]
    fn test_no_move_returns_none() {
        let board = Board::empty()
            .with(n(0), Role::Goat)
            .with(n(1), Role::Tiger)
            .with(n(5), Role::Tiger);
        let game = GameState::from_position(Position::new(board, GOAT_COUNT, 0), Role::Goat);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let mut engine = AIEngine::new();
            let result = engine.choose_move_with_stats(&game, difficulty, Role::Goat, &mut rng(6));
            assert_eq!(result.search_type, SearchType::NoMove);
            assert!(result.best_move.is_none());
        }
    }

    #[test]
    fn test_free_choose_move() {
        let game = GameState::new();
        let mv = choose_move(&game, Difficulty::Easy, Role::Goat, &mut rng(7));
        assert!(mv.is_some_and(|mv| mv.is_placement()));
    }
}
