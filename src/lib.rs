//! Dots-and-Boxes AI engine
//!
//! Players take turns drawing edges between neighbouring points of a grid.
//! Whoever draws the fourth side of a box owns it and moves again; the side
//! with more boxes when every edge is drawn wins.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Boxes, edges and the board with apply/undo
//! - [`rules`]: Legal moves, turn advancement, game result
//! - [`eval`]: Terminal scores and heuristic estimates
//! - [`search`]: Alpha-beta and IDA*-style searches
//! - [`engine`]: Main AI engine selecting between the searches
//! - [`game`]: A game session for front ends
//!
//! # Quick Start
//!
//! ```
//! use dots_boxes::{AIEngine, Board, EngineConfig};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_config(EngineConfig::default().with_seed(1));
//!
//! let edge = engine.choose_move(&board).unwrap();
//! board.make_move(edge);
//! dots_boxes::rules::advance_turn(&mut board);
//! println!("{board}");
//! ```
//!
//! # Scoring
//!
//! Values are from the maximizing side's ([`Player::Max`], `X`) point of
//! view. A finished game scores at least [`eval::Score::LIMIT`] in magnitude,
//! which no heuristic estimate reaches, so proven results always win.

pub mod board;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, Direction, Edge, Player, Square};
pub use engine::{AIEngine, Algorithm, Difficulty, EngineConfig, EngineError, MoveResult};
pub use game::{Game, GameError, TurnOutcome};
