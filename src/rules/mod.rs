//! Game rules for Dots-and-Boxes
//!
//! This module implements the rule set on top of the board model:
//! - Legal move enumeration (canonical edges, shuffled for search)
//! - Turn advancement (closing a box grants another move)
//! - End of game and winner

pub mod moves;
pub mod turn;

// Re-exports for convenient access
pub use moves::{is_legal, legal_moves, legal_moves_with};
pub use turn::{advance_turn, winner, Outcome};
