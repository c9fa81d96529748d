//! Main AI engine choosing moves for the computer side
//!
//! The engine owns one searcher per algorithm and a configuration that is
//! passed in explicitly. It never touches the caller's board: alpha-beta
//! works on a private copy with apply/undo, the heuristic search on cloned
//! states.
//!
//! # Example
//!
//! ```
//! use dots_boxes::{AIEngine, Algorithm, Board, Difficulty, EngineConfig};
//!
//! let config = EngineConfig::for_board(4, 4, Algorithm::AlphaBeta, Difficulty::Easy);
//! let mut engine = AIEngine::with_config(config.with_seed(3));
//! let mut board = Board::new();
//!
//! let edge = engine.choose_move(&board).unwrap();
//! assert!(board.make_move(edge));
//! ```

use std::fmt;
use std::time::Instant;

use clap::ValueEnum;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::board::{Board, Edge};
use crate::eval::evaluate;
use crate::search::{IdaSearcher, Searcher};

/// Edges on the default 4x4 board; larger boards search shallower
const BASE_EDGES: usize = 24;

/// Extra edges that cost one ply of depth
const EDGES_PER_PLY: usize = 12;

/// Depth cap of the heuristic search, which clones a board per state
pub const IDA_MAX_DEPTH: u32 = 3;

/// Playing strength.
///
/// Selects the leaf estimate (cheap at `Easy`, chain simulation otherwise),
/// the default depth, and whether the heuristic search biases its step costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Search depth on the default board
    pub const fn base_depth(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

/// Move-selection algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Algorithm {
    /// Depth-bounded minimax with alpha-beta pruning
    #[default]
    AlphaBeta,
    /// IDA*-style search with a cost-biased heuristic
    IterativeDeepening,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::AlphaBeta => "alpha-beta",
            Algorithm::IterativeDeepening => "iterative-deepening",
        })
    }
}

/// Errors from [`AIEngine::choose_move`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("the game is already finished")]
    GameFinished,
    #[error("search depth must be at least 1")]
    ZeroDepth,
    #[error("{0} search produced no move")]
    NoMove(Algorithm),
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub algorithm: Algorithm,
    pub difficulty: Difficulty,
    /// Plies searched per move
    pub depth: u32,
    /// Seed for the move shuffle; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Configuration with a depth scaled to the board size.
    ///
    /// Starts from [`Difficulty::base_depth`] and drops one ply for every
    /// full 12 edges above the 24 of the default board, never below 1.
    pub fn for_board(
        rows: usize,
        cols: usize,
        algorithm: Algorithm,
        difficulty: Difficulty,
    ) -> Self {
        let edges = rows * cols.saturating_sub(1) + cols * rows.saturating_sub(1);
        let reduction = (edges.saturating_sub(BASE_EDGES) / EDGES_PER_PLY) as u32;
        let mut depth = difficulty.base_depth().saturating_sub(reduction).max(1);
        if algorithm == Algorithm::IterativeDeepening {
            depth = depth.min(IDA_MAX_DEPTH);
        }

        Self {
            algorithm,
            difficulty,
            depth,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::for_board(4, 4, Algorithm::default(), Difficulty::default())
    }
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Chosen move
    pub edge: Edge,
    /// Alpha-beta value of the move, or for the heuristic search the
    /// estimate of the board after it. Maximizer's point of view.
    pub score: i32,
    /// Algorithm that chose the move
    pub algorithm: Algorithm,
    /// Alpha-beta nodes visited or search states created
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// AI engine for Dots-and-Boxes.
///
/// Holds both searchers so switching algorithms keeps the RNG streams.
pub struct AIEngine {
    config: EngineConfig,
    searcher: Searcher,
    ida: IdaSearcher,
}

impl AIEngine {
    /// Engine with the default configuration: alpha-beta, medium, depth 3.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let (searcher, ida) = match config.seed {
            Some(seed) => (
                Searcher::with_seed(config.difficulty, seed),
                IdaSearcher::with_seed(config.difficulty, seed),
            ),
            None => (
                Searcher::new(config.difficulty),
                IdaSearcher::new(config.difficulty),
            ),
        };

        Self {
            config,
            searcher,
            ida,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.config.depth = depth;
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.config.algorithm = algorithm;
    }

    /// Choose a move for the side to move on `board`.
    ///
    /// The caller applies the returned edge; `board` is not modified.
    ///
    /// # Errors
    ///
    /// [`EngineError::GameFinished`] on a finished board and
    /// [`EngineError::ZeroDepth`] when the configured depth is 0.
    pub fn choose_move(&mut self, board: &Board) -> Result<Edge, EngineError> {
        self.choose_move_with_stats(board).map(|result| result.edge)
    }

    /// Choose a move and report how it was found.
    #[instrument(
        skip_all,
        fields(algorithm = %self.config.algorithm, player = %board.current_player())
    )]
    pub fn choose_move_with_stats(&mut self, board: &Board) -> Result<MoveResult, EngineError> {
        if board.is_finished() {
            return Err(EngineError::GameFinished);
        }
        if self.config.depth == 0 {
            return Err(EngineError::ZeroDepth);
        }

        let start = Instant::now();
        let algorithm = self.config.algorithm;

        let (edge, score, nodes, depth) = match algorithm {
            Algorithm::AlphaBeta => {
                let result = self.searcher.search(board, self.config.depth);
                let edge = result.best_move.ok_or(EngineError::NoMove(algorithm))?;
                debug!(
                    cutoffs = result.stats.cutoffs,
                    extra_turns = result.stats.extra_turns,
                    "alpha-beta statistics"
                );
                (edge, result.score, result.nodes, result.depth)
            }
            Algorithm::IterativeDeepening => {
                let depth = self.config.depth.min(IDA_MAX_DEPTH);
                let result = self.ida.search(board, depth);
                let edge = result.best_move.ok_or(EngineError::NoMove(algorithm))?;
                let score = match result.board {
                    Some(mut after) => evaluate(&mut after, self.config.difficulty),
                    None => 0,
                };
                (edge, score, result.states, depth)
            }
        };

        let time_ms = start.elapsed().as_millis() as u64;
        debug!(%edge, score, nodes, depth, time_ms, "move chosen");

        Ok(MoveResult {
            edge,
            score,
            algorithm,
            nodes,
            time_ms,
        })
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
