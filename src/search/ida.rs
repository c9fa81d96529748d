//! Iterative-deepening heuristic search
//!
//! An IDA*-style alternative to alpha-beta. Every node is a [`SearchState`]
//! with its own board copy, scored by `f = g + h` for the side to move at the
//! root (the computer). Each iteration expands depth-first below the current
//! `f` limit; the smallest cut value becomes the next limit.
//!
//! Step costs favour the computer: moves that close a box, or that leave it
//! able to take two or more boxes, are free on its own turns.
//!
//! # Example
//!
//! ```
//! use dots_boxes::board::Board;
//! use dots_boxes::search::IdaSearcher;
//! use dots_boxes::Difficulty;
//!
//! let mut searcher = IdaSearcher::with_seed(Difficulty::Hard, 7);
//! let result = searcher.search(&Board::new(), 2);
//! assert!(result.best_move.is_some());
//! ```

use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, Edge, Player};
use crate::engine::Difficulty;

use super::state::SearchState;

/// Result of an iterative-deepening search
#[derive(Debug, Clone)]
pub struct IdaResult {
    /// Move leading from the root towards the best state found
    pub best_move: Option<Edge>,
    /// Board after `best_move`
    pub board: Option<Board>,
    /// Final `f` limit, infinite once a terminal or dead-end state won
    pub limit: f64,
    /// Search states created, root included
    pub states: u64,
}

/// Heuristic iterative-deepening searcher.
pub struct IdaSearcher {
    difficulty: Difficulty,
    rng: StdRng,
    computer: Player,
    states: u64,
}

impl IdaSearcher {
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
            computer: Player::Max,
            states: 0,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Search for the side to move on `board` with a budget of `depth` plies.
    ///
    /// No move is produced when the budget is 0 or the game is over.
    #[must_use]
    pub fn search(&mut self, board: &Board, depth: u32) -> IdaResult {
        self.computer = board.current_player();
        self.states = 1;

        let root = Rc::new(SearchState::root(board, self.computer));
        let mut best = Rc::clone(&root);
        let mut limit = root.f();
        let mut depth = depth;

        while limit.is_finite() && depth != 0 {
            (best, limit, depth) = self.expand(&root, limit, depth);
        }

        let step = SearchState::first_step(&best);
        IdaResult {
            best_move: step.as_ref().and_then(|s| s.edge()),
            board: step.map(|s| s.board().clone()),
            limit,
            states: self.states,
        }
    }

    /// Bounded depth-first expansion.
    ///
    /// Returns the best state reached below `state`, its `f` value and the
    /// depth budget left there. Finished and dead-end states report an
    /// infinite `f` so they are never expanded again.
    fn expand(
        &mut self,
        state: &Rc<SearchState>,
        limit: f64,
        depth: u32,
    ) -> (Rc<SearchState>, f64, u32) {
        if state.f() > limit {
            return (Rc::clone(state), state.f(), depth);
        }
        if depth == 0 {
            return (Rc::clone(state), state.f(), 0);
        }
        if state.board().is_finished() {
            return (Rc::clone(state), f64::INFINITY, 0);
        }

        let children =
            SearchState::successors(state, self.difficulty, self.computer, &mut self.rng);
        self.states += children.len() as u64;

        let mut best: Option<(Rc<SearchState>, f64, u32)> = None;
        for child in &children {
            let candidate = self.expand(child, limit, depth - 1);
            // First minimum wins
            if best.as_ref().map_or(true, |(_, f, _)| candidate.1 < *f) {
                best = Some(candidate);
            }
        }

        best.unwrap_or_else(|| (Rc::clone(state), f64::INFINITY, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free_box_board(to_move: Player) -> Board {
        let mut board = Board::new();
        for edge in [Edge::right(0, 0), Edge::down(0, 0), Edge::down(0, 1)] {
            board.make_move(edge);
        }
        board.set_current_player(to_move);
        board
    }

    #[test]
    fn test_search_empty_board() {
        let board = Board::new();
        let mut searcher = IdaSearcher::with_seed(Difficulty::Medium, 1);
        let result = searcher.search(&board, 2);

        let edge = result.best_move.expect("a move on an empty board");
        assert!(board.contains(edge));
        assert!(result.states > 24);

        let after = result.board.unwrap();
        assert_eq!(after.edges_drawn(), 1);
        assert!(after.is_set(edge));
    }

    #[test]
    fn test_takes_free_box() {
        for seed in 0..4 {
            let mut searcher = IdaSearcher::with_seed(Difficulty::Medium, seed);
            let result = searcher.search(&free_box_board(Player::Min), 2);
            assert_eq!(result.best_move, Some(Edge::right(1, 0)));

            let after = result.board.unwrap();
            assert_eq!(after.score(Player::Min), 1);
            assert_eq!(after.current_player(), Player::Min);
        }
    }

    #[test]
    fn test_limit_raised_to_cut_value() {
        // Root h = 24/4 = 6. Every child costs 1 and has h = 23/4, so the
        // first pass cuts all of them at 6.75 and the second reaches depth 0
        // under the raised limit.
        let board = Board::new();
        let mut searcher = IdaSearcher::with_seed(Difficulty::Medium, 2);
        let result = searcher.search(&board, 2);

        assert_eq!(result.limit, 6.75);
        assert_eq!(result.states, 1 + 24 + 24);
        let after = result.board.unwrap();
        assert_eq!(after.edges_drawn(), 1);
        assert_eq!(after.current_player(), Player::Min);
        assert!(result.best_move.is_some_and(|edge| after.is_set(edge)));
    }

    #[test]
    fn test_cut_node_resumes_with_remaining_depth() {
        // Pass 1 cuts the children at 6.75 with two plies left. Pass 2
        // expands them and cuts every grandchild at 2 + 22/4 with no plies
        // left, so the move comes from the grandchild's parent.
        let board = Board::new();
        let mut searcher = IdaSearcher::with_seed(Difficulty::Medium, 2);
        let result = searcher.search(&board, 3);

        assert_eq!(result.states, 1 + 24 + (24 + 24 * 23));
        assert_eq!(result.limit, 7.5);
        let after = result.board.unwrap();
        assert_eq!(after.edges_drawn(), 1);
        assert!(result.best_move.is_some_and(|edge| after.is_set(edge)));
    }

    #[test]
    fn test_takes_last_box() {
        let mut board = Board::with_size(2, 2).unwrap();
        for edge in [Edge::right(0, 0), Edge::right(1, 0), Edge::down(0, 0)] {
            board.make_move(edge);
        }
        board.switch_player();

        let mut searcher = IdaSearcher::with_seed(Difficulty::Hard, 3);
        let result = searcher.search(&board, 3);
        assert_eq!(result.best_move, Some(Edge::down(0, 1)));
        assert!(result.limit.is_infinite());
        assert!(result.board.unwrap().is_finished());
    }

    #[test]
    fn test_no_move_without_budget() {
        let mut searcher = IdaSearcher::with_seed(Difficulty::Medium, 0);
        let result = searcher.search(&Board::new(), 0);
        assert_eq!(result.best_move, None);
        assert!(result.board.is_none());
        assert_eq!(result.states, 1);
    }

    #[test]
    fn test_no_move_on_finished_board() {
        let mut board = Board::with_size(2, 2).unwrap();
        for edge in board.available_edges() {
            board.make_move(edge);
        }
        let mut searcher = IdaSearcher::with_seed(Difficulty::Medium, 0);
        let result = searcher.search(&board, 3);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_easy_still_moves() {
        let mut searcher = IdaSearcher::with_seed(Difficulty::Easy, 5);
        let board = free_box_board(Player::Max);
        let result = searcher.search(&board, 2);
        assert!(result.best_move.is_some_and(|edge| board.contains(edge)));
    }

    #[test]
    fn test_seeded_search_is_reproducible() {
        let board = Board::new();
        let a = IdaSearcher::with_seed(Difficulty::Hard, 13).search(&board, 2);
        let b = IdaSearcher::with_seed(Difficulty::Hard, 13).search(&board, 2);
        assert_eq!(a.best_move, b.best_move);
        assert_eq!(a.states, b.states);
    }
}
