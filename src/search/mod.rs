//! Search module for the Dots-and-Boxes AI
//!
//! Contains:
//! - Alpha-Beta search over a single board with apply/undo
//! - IDA*-style heuristic search over cloned board states
//! - The search tree node used by the heuristic search

pub mod alphabeta;
pub mod ida;
pub mod state;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
pub use ida::{IdaResult, IdaSearcher};
pub use state::SearchState;
