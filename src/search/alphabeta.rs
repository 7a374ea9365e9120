//! Depth-limited minimax with alpha-beta pruning
//!
//! Scores are always from the AI's side: the AI's plies maximise, the
//! opponent's plies minimise. Each branch works on its own [`Position`]
//! value produced by [`Position::after`], so nothing is undone on the way
//! back up.
//!
//! # Features
//!
//! - Capture-first, centre-first move ordering
//! - One-ply anti-reversal filter against each side's own previous move
//! - Fast-path return of a capture that wins outright
//! - Uniform random choice among equally scored root moves
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tigerhunt::board::{Position, Role};
//! use tigerhunt::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let mut rng = StdRng::seed_from_u64(7);
//! let result = searcher.search(&Position::initial(), Role::Tiger, 3, &mut rng);
//! assert!(result.best_move.is_some());
//! ```

use std::cmp::Reverse;

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Move, Position, Role, CAPTURES_TO_WIN};
use crate::eval::{evaluate, Weights};
use crate::rules::{all_moves, capture_moves, evaluate_win};

/// Score of a decided game before the remaining-depth bonus
pub const WIN_SCORE: i32 = Weights::WIN;

/// Bound for the alpha-beta window, above any terminal score
const INF: i32 = WIN_SCORE + 1000;

/// Leaf scores stay strictly inside the terminal band
const LEAF_LIMIT: i32 = WIN_SCORE - 1;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Siblings skipped because the window closed
    pub beta_cutoffs: u64,
    /// Heuristic evaluations at depth zero
    pub leaf_evaluations: u64,
    /// Plies ended by a decided game
    pub terminal_hits: u64,
    /// Candidates dropped by the anti-reversal filter
    pub repetition_skips: u64,
    /// Non-terminal plies where the side to move had no move at all
    pub no_move_plies: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Score of the best move from the AI's side
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Total plies visited
    pub nodes: u64,
    /// Set when the move came from the winning-capture fast path
    pub fast_win: bool,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Score of a decided game for `ai_role`, preferring quick wins and slow losses
#[inline]
fn terminal_score(winner: Role, ai_role: Role, depth: u8) -> i32 {
    let score = WIN_SCORE + i32::from(depth);
    if winner == ai_role {
        score
    } else {
        -score
    }
}

/// Sort moves so that pruning happens early: captures first, then moves
/// toward the middle of the board. The sort is stable, so equal moves keep
/// generation order.
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|mv| Reverse((mv.is_capture(), mv.destination().centrality())));
}

/// Captures that reach the win threshold for `side` right now.
///
/// Only tigers one capture short of [`CAPTURES_TO_WIN`] have one.
pub fn winning_captures(position: &Position, side: Role) -> Vec<Move> {
    if side != Role::Tiger || position.goats_captured.saturating_add(1) < CAPTURES_TO_WIN {
        return Vec::new();
    }
    capture_moves(&position.board)
}

/// Minimax searcher for the hard tier
#[derive(Debug)]
pub struct Searcher {
    /// Side the current search plays for
    ai_role: Role,
    nodes: u64,
    stats: SearchStats,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ai_role: Role::Tiger,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    /// Pick the best move for `ai_role`, which must be the side to move.
    ///
    /// Root moves are never filtered for reversal; the filter only applies
    /// inside the tree.
    ///
    /// # Arguments
    /// * `position` - Position to search from
    /// * `ai_role` - Side the search plays for
    /// * `depth` - Plies to look ahead (at least 1)
    /// * `rng` - Random source for tie-breaking
    pub fn search<R: Rng>(
        &mut self,
        position: &Position,
        ai_role: Role,
        depth: u8,
        rng: &mut R,
    ) -> SearchResult {
        let depth = depth.max(1);
        self.ai_role = ai_role;
        self.nodes = 0;
        self.stats = SearchStats::default();

        if let Some(&mv) = winning_captures(position, ai_role).choose(rng) {
            debug!("fast-path capture {} wins for {}", mv, ai_role);
            return SearchResult {
                best_move: Some(mv),
                score: terminal_score(ai_role, ai_role, depth),
                depth,
                nodes: 0,
                fast_win: true,
                stats: SearchStats::default(),
            };
        }

        let moves = self.candidates(position, ai_role, None);
        if moves.is_empty() {
            warn!("{} has no legal move in a non-terminal search root", ai_role);
            return SearchResult {
                best_move: None,
                score: terminal_score(ai_role.opponent(), ai_role, depth),
                depth,
                nodes: 0,
                fast_win: false,
                stats: self.stats.clone(),
            };
        }

        let mut best_score = -INF;
        let mut tied: Vec<Move> = Vec::new();

        for &mv in &moves {
            let child = position.after(mv, ai_role);
            // One below the best so far: equal scores come back exact
            let score =
                self.minimax(&child, depth - 1, best_score - 1, INF, false, None, Some(mv));

            if score > best_score {
                best_score = score;
                tied.clear();
                tied.push(mv);
            } else if score == best_score {
                tied.push(mv);
            }
        }

        let best_move = tied.choose(rng).copied();

        if self.stats.no_move_plies > 0 {
            debug!(
                "{} non-terminal plies had no move and were scored as losses",
                self.stats.no_move_plies
            );
        }
        debug!(
            "{} depth {}: {} nodes, {} cutoffs, {} leaves, best {:?} score {} ({} tied)",
            ai_role,
            depth,
            self.nodes,
            self.stats.beta_cutoffs,
            self.stats.leaf_evaluations,
            best_move.map(|mv| mv.to_string()),
            best_score,
            tied.len()
        );

        SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes: self.nodes,
            fast_win: false,
            stats: self.stats.clone(),
        }
    }

    /// Ordered, anti-reversal filtered moves for `side`.
    ///
    /// The filter is dropped when it would leave nothing to play.
    fn candidates(&mut self, position: &Position, side: Role, own_last: Option<Move>) -> Vec<Move> {
        let mut moves = all_moves(&position.board, side, position.goats_placed);
        order_moves(&mut moves);

        let Some(last) = own_last else {
            return moves;
        };
        let kept: Vec<Move> = moves
            .iter()
            .copied()
            .filter(|mv| !mv.is_reverse_of(&last))
            .collect();

        if kept.is_empty() {
            return moves;
        }
        self.stats.repetition_skips += (moves.len() - kept.len()) as u64;
        kept
    }

    /// Recursive minimax with alpha-beta pruning.
    ///
    /// `own_last` is the last move of the side to move at this ply and
    /// `opp_last` the move that led here.
    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        position: &Position,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        own_last: Option<Move>,
        opp_last: Option<Move>,
    ) -> i32 {
        self.nodes += 1;

        let ai_role = self.ai_role;
        let side = if maximizing { ai_role } else { ai_role.opponent() };

        let status = evaluate_win(&position.board, position.goats_captured, side);
        if let Some(winner) = status.winner() {
            self.stats.terminal_hits += 1;
            return terminal_score(winner, ai_role, depth);
        }

        if depth == 0 {
            self.stats.leaf_evaluations += 1;
            let score = evaluate(
                &position.board,
                ai_role,
                position.goats_captured,
                position.goats_placed,
            );
            return score.clamp(-LEAF_LIMIT, LEAF_LIMIT);
        }

        let moves = self.candidates(position, side, own_last);
        if moves.is_empty() {
            // A side that cannot move is scored as having lost
            self.stats.no_move_plies += 1;
            return terminal_score(side.opponent(), ai_role, depth);
        }

        let total = moves.len();
        if maximizing {
            let mut value = -INF;
            for (i, &mv) in moves.iter().enumerate() {
                let child = position.after(mv, side);
                let score =
                    self.minimax(&child, depth - 1, alpha, beta, false, opp_last, Some(mv));
                value = value.max(score);
                alpha = alpha.max(value);
                if beta <= alpha {
                    self.stats.beta_cutoffs += (total - i - 1) as u64;
                    break;
                }
            }
            value
        } else {
            let mut value = INF;
            for (i, &mv) in moves.iter().enumerate() {
                let child = position.after(mv, side);
                let score =
                    self.minimax(&child, depth - 1, alpha, beta, true, opp_last, Some(mv));
                value = value.min(score);
                beta = beta.min(value);
                if beta <= alpha {
                    self.stats.beta_cutoffs += (total - i - 1) as u64;
                    break;
                }
            }
            value
        }
    }
}
