//! Alpha-Beta search with the extra-turn rule
//!
//! This module implements the minimax search used by the Dots-and-Boxes AI.
//! It runs on a single private board through `make_move`/`undo_move`, so no
//! board is copied per node.
//!
//! # Features
//!
//! - Alpha-beta pruning over shuffled moves (ties break randomly)
//! - Extra turn: a move closing a box is followed by the same side
//! - Proven results (finished games) dominate every heuristic estimate
//!
//! # Example
//!
//! ```
//! use dots_boxes::board::Board;
//! use dots_boxes::search::Searcher;
//! use dots_boxes::Difficulty;
//!
//! let mut searcher = Searcher::with_seed(Difficulty::Medium, 42);
//! let board = Board::new();
//!
//! let result = searcher.search(&board, 2);
//! if let Some(edge) = result.best_move {
//!     println!("Best move: {edge}");
//! }
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, Edge, Player};
use crate::engine::Difficulty;
use crate::eval::{evaluate, Score};
use crate::rules::legal_moves_with;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Total alpha-beta cutoffs
    pub cutoffs: u64,
    /// Cutoffs on the first move tried
    pub first_move_cutoffs: u64,
    /// Moves that closed a box and kept the turn
    pub extra_turns: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.cutoffs as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Edge>,
    /// Value of the best move from the maximizing side's view
    pub score: i32,
    /// Depth searched
    pub depth: u32,
    /// Total nodes visited
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Depth-bounded alpha-beta searcher.
pub struct Searcher {
    difficulty: Difficulty,
    rng: StdRng,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    /// Searcher with an OS-seeded move shuffle
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, StdRng::from_os_rng())
    }

    /// Searcher with a reproducible move shuffle
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, StdRng::seed_from_u64(seed))
    }

    fn with_rng(difficulty: Difficulty, rng: StdRng) -> Self {
        Self {
            difficulty,
            rng,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Search window half-width: wider than any score the board can produce.
    #[inline]
    pub fn window(board: &Board) -> i32 {
        Score::LIMIT + board.total_boxes() as i32 + 1
    }

    /// Search `depth` plies for the side to move on `board`.
    ///
    /// Works on a private copy; `board` is never touched.
    #[must_use]
    pub fn search(&mut self, board: &Board, depth: u32) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let mut work_board = board.clone();
        let bound = Self::window(board);
        let maximizing = board.current_player() == Player::Max;

        let (score, best_move) = self.alpha_beta(&mut work_board, depth, -bound, bound, maximizing);
        debug_assert_eq!(&work_board, board, "search left a move applied");

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Minimax with alpha-beta pruning.
    ///
    /// Every applied move is undone before the next sibling is tried. A move
    /// that closes a box is searched with the same side to move; any other
    /// move hands the board to the opponent and back around the recursive
    /// call. Both kinds cost one ply of depth.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Edge>) {
        self.nodes += 1;

        if depth == 0 || board.is_finished() {
            return (evaluate(board, self.difficulty), None);
        }

        let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        let moves = legal_moves_with(board, &mut self.rng);
        for (i, &edge) in moves.iter().enumerate() {
            if !board.make_move(edge) {
                continue;
            }

            let value = if board.completed_box() {
                self.stats.extra_turns += 1;
                self.alpha_beta(board, depth - 1, alpha, beta, maximizing).0
            } else {
                board.switch_player();
                let value = self.alpha_beta(board, depth - 1, alpha, beta, !maximizing).0;
                board.switch_player();
                value
            };

            board.undo_move(edge);

            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_move = Some(edge);
                }
                alpha = alpha.max(value);
            } else {
                if value < best_value {
                    best_value = value;
                    best_move = Some(edge);
                }
                beta = beta.min(value);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                if i == 0 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }

        (best_value, best_move)
    }
}
