//! Legal move enumeration
//!
//! Every undrawn edge is reported once, in canonical (down/right) form.
//! The list is shuffled so that equally valued moves are not always resolved
//! in favour of the first enumerated edge.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Edge};

/// Legal moves in random order, shuffled with the thread-local RNG.
pub fn legal_moves(board: &Board) -> Vec<Edge> {
    legal_moves_with(board, &mut rand::rng())
}

/// Legal moves in random order, shuffled with the caller's RNG.
///
/// Searches pass their own seeded RNG so a match can be replayed.
pub fn legal_moves_with<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Vec<Edge> {
    let mut moves = board.available_edges();
    moves.shuffle(rng);
    moves
}

/// Whether the edge is inside the grid and not yet drawn
#[inline]
pub fn is_legal(board: &Board, edge: Edge) -> bool {
    board.contains(edge) && !board.is_set(edge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_legal_moves_empty_board() {
        let board = Board::new();
        let moves = legal_moves(&board);
        assert_eq!(moves.len(), 24);

        let mut sorted = moves.clone();
        sorted.sort();
        let mut canonical = board.available_edges();
        canonical.sort();
        assert_eq!(sorted, canonical);
    }

    #[test]
    fn test_legal_moves_exclude_drawn_edges() {
        let mut board = Board::new();
        board.make_move(Edge::right(0, 0));
        board.make_move(Edge::down(2, 3));

        let moves = legal_moves(&board);
        assert_eq!(moves.len(), 22);
        assert!(!moves.contains(&Edge::right(0, 0)));
        assert!(!moves.contains(&Edge::down(2, 3)));
        assert!(moves.iter().all(|&e| is_legal(&board, e)));
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let board = Board::with_size(5, 5).unwrap();
        let a = legal_moves_with(&board, &mut StdRng::seed_from_u64(7));
        let b = legal_moves_with(&board, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_changes_order() {
        // 40 edges: the chance of every seed keeping canonical order is nil
        let board = Board::with_size(5, 5).unwrap();
        let canonical = board.available_edges();
        let shuffled = (0..8u64)
            .map(|seed| legal_moves_with(&board, &mut StdRng::seed_from_u64(seed)))
            .any(|moves| moves != canonical);
        assert!(shuffled);
    }

    #[test]
    fn test_is_legal() {
        let mut board = Board::new();
        assert!(is_legal(&board, Edge::down(0, 0)));
        assert!(!is_legal(&board, Edge::down(3, 0)));
        board.make_move(Edge::down(0, 0));
        assert!(!is_legal(&board, Edge::down(0, 0)));
    }

    #[test]
    fn test_finished_board_has_no_moves() {
        let mut board = Board::with_size(3, 3).unwrap();
        for edge in board.available_edges() {
            board.make_move(edge);
        }
        assert!(board.is_finished());
        assert!(legal_moves(&board).is_empty());
    }
}
