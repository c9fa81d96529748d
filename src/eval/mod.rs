//! Evaluation module for Dots-and-Boxes positions
//!
//! This module scores board positions for the searches.
//! The evaluation considers:
//! - Finished games (proven results dominate every estimate)
//! - Boxes still open to each side (cheap estimate)
//! - Boxes capturable right now by running out open chains (chain estimate)

pub mod heuristic;
pub mod scores;

pub use heuristic::{chain_score, evaluate, naive_score, terminal_score};
pub use scores::Score;
