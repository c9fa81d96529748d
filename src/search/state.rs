//! Search tree node for the iterative-deepening search
//!
//! Each state owns a snapshot of the board and points back at the state it
//! was expanded from. States are never modified after creation.

use std::rc::Rc;

use rand::Rng;

use crate::board::{Board, Edge, Player};
use crate::engine::Difficulty;
use crate::eval::chain_score;
use crate::rules::legal_moves_with;

/// One board position in the search tree.
#[derive(Debug)]
pub struct SearchState {
    board: Board,
    parent: Option<Rc<SearchState>>,
    /// Edge played from the parent to reach this state
    edge: Option<Edge>,
    g: f64,
    h: f64,
    f: f64,
}

impl SearchState {
    /// Root state for `board`, estimated for `computer`
    pub fn root(board: &Board, computer: Player) -> Self {
        let mut board = board.clone();
        let h = Self::estimate_h(&mut board, computer);
        Self {
            board,
            parent: None,
            edge: None,
            g: 0.0,
            h,
            f: h,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn parent(&self) -> Option<&Rc<SearchState>> {
        self.parent.as_ref()
    }

    #[inline]
    pub fn edge(&self) -> Option<Edge> {
        self.edge
    }

    /// Path cost from the root
    #[inline]
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Heuristic estimate
    #[inline]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// `g + h`
    #[inline]
    pub fn f(&self) -> f64 {
        self.f
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Number of moves between this state and the root
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut state = self;
        while let Some(parent) = state.parent.as_deref() {
            depth += 1;
            state = parent;
        }
        depth
    }

    /// States from the root down to `state`, root first
    pub fn path_to_root(state: &Rc<SearchState>) -> Vec<Rc<SearchState>> {
        let mut path = vec![Rc::clone(state)];
        let mut current = Rc::clone(state);
        while let Some(parent) = current.parent.clone() {
            path.push(Rc::clone(&parent));
            current = parent;
        }
        path.reverse();
        path
    }

    /// The state one move below the root on the path to `state`;
    /// `None` if `state` is the root.
    pub fn first_step(state: &Rc<SearchState>) -> Option<Rc<SearchState>> {
        let mut current = Rc::clone(state);
        loop {
            let parent = current.parent.clone()?;
            if parent.is_root() {
                return Some(current);
            }
            current = parent;
        }
    }

    /// Heuristic estimate of `board` for `computer`; lower is better for it.
    ///
    /// Combines about a quarter of the remaining edges (roughly the boxes
    /// still in play), the score difference, and the boxes the side to move
    /// can take right now. The board is left unchanged.
    pub fn estimate_h(board: &mut Board, computer: Player) -> f64 {
        let remaining = board.edges_remaining() as f64 / 4.0;
        let player = computer.opponent();
        let player_score = board.score(player) as f64;
        let computer_score = board.score(computer) as f64;

        if board.current_player() == computer {
            remaining + player_score - computer_score - chain_score(board, computer) as f64
        } else {
            remaining - player_score + computer_score + chain_score(board, player) as f64
        }
    }

    /// Every position reachable in one move, in shuffled order.
    ///
    /// Step cost is 1, except on the computer's own turn above `Easy`: free
    /// when the computer can take two or more boxes, otherwise free only for
    /// moves that close a box.
    pub fn successors<R: Rng + ?Sized>(
        state: &Rc<SearchState>,
        difficulty: Difficulty,
        computer: Player,
        rng: &mut R,
    ) -> Vec<Rc<SearchState>> {
        let parent_board = &state.board;
        legal_moves_with(parent_board, rng)
            .into_iter()
            .filter_map(|edge| {
                let mut board = parent_board.clone();
                if !board.make_move(edge) {
                    return None;
                }
                if !board.completed_box() {
                    board.set_current_player(parent_board.current_player().opponent());
                }

                let step = if difficulty != Difficulty::Easy && board.current_player() == computer {
                    let capturable = chain_score(&mut board, computer) - board.score(computer);
                    if capturable >= 2 || board.completed_box() {
                        0.0
                    } else {
                        1.0
                    }
                } else {
                    1.0
                };

                let g = state.g + step;
                let h = Self::estimate_h(&mut board, computer);
                Some(Rc::new(SearchState {
                    board,
                    parent: Some(Rc::clone(state)),
                    edge: Some(edge),
                    g,
                    h,
                    f: g + h,
                }))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn free_box_board() -> Board {
        let mut board = Board::new();
        for edge in [Edge::right(0, 0), Edge::down(0, 0), Edge::down(0, 1)] {
            board.make_move(edge);
        }
        board.set_current_player(Player::Min);
        board
    }

    #[test]
    fn test_root_state() {
        let board = free_box_board();
        let root = SearchState::root(&board, Player::Min);
        assert!(root.is_root());
        assert_eq!(root.depth(), 0);
        assert_eq!(root.g(), 0.0);
        // 21 edges left, Min to move and can take one box
        assert_eq!(root.h(), 21.0 / 4.0 - 1.0);
        assert_eq!(root.f(), root.h());
        assert_eq!(root.board(), &board);
    }

    #[test]
    fn test_estimate_leaves_board_unchanged() {
        let mut board = free_box_board();
        let before = board.clone();
        let _ = SearchState::estimate_h(&mut board, Player::Min);
        let _ = SearchState::estimate_h(&mut board, Player::Max);
        assert_eq!(board, before);
    }

    #[test]
    fn test_successors_apply_turn_rule() {
        let root = Rc::new(SearchState::root(&free_box_board(), Player::Min));
        let mut rng = StdRng::seed_from_u64(4);
        let children = SearchState::successors(&root, Difficulty::Medium, Player::Min, &mut rng);
        assert_eq!(children.len(), 21);

        for child in &children {
            assert_eq!(child.depth(), 1);
            assert!(Rc::ptr_eq(child.parent().unwrap(), &root));
            assert_eq!(child.f(), child.g() + child.h());

            if child.edge() == Some(Edge::right(1, 0)) {
                assert_eq!(child.board().current_player(), Player::Min);
                assert_eq!(child.board().score(Player::Min), 1);
                assert_eq!(child.g(), 0.0);
            } else {
                assert_eq!(child.board().current_player(), Player::Max);
                assert_eq!(child.g(), 1.0);
            }
        }
    }

    #[test]
    fn test_open_double_box_makes_quiet_moves_free() {
        // Boxes (0,0) and (0,1) each miss only the shared edge down(0,1)
        let mut board = Board::new();
        for edge in [
            Edge::right(0, 0),
            Edge::right(1, 0),
            Edge::down(0, 0),
            Edge::right(0, 1),
            Edge::right(1, 1),
            Edge::down(0, 2),
        ] {
            board.make_move(edge);
        }
        assert_eq!(board.current_player(), Player::Max);

        let root = Rc::new(SearchState::root(&board, Player::Min));
        let mut rng = StdRng::seed_from_u64(6);
        let children = SearchState::successors(&root, Difficulty::Medium, Player::Min, &mut rng);
        assert_eq!(children.len(), 18);

        for child in &children {
            if child.edge() == Some(Edge::down(0, 1)) {
                // Max takes both boxes and keeps the turn
                assert_eq!(child.board().score(Player::Max), 2);
                assert_eq!(child.board().current_player(), Player::Max);
                assert_eq!(child.g(), 1.0);
            } else {
                // Nothing closed, but Min can now take two boxes
                assert!(!child.board().completed_box());
                assert_eq!(child.board().current_player(), Player::Min);
                assert_eq!(child.g(), 0.0);
            }
        }
    }

    #[test]
    fn test_easy_costs_are_uniform() {
        let root = Rc::new(SearchState::root(&free_box_board(), Player::Min));
        let mut rng = StdRng::seed_from_u64(4);
        let children = SearchState::successors(&root, Difficulty::Easy, Player::Min, &mut rng);
        assert!(children.iter().all(|child| child.g() == 1.0));
    }

    #[test]
    fn test_path_and_first_step() {
        let root = Rc::new(SearchState::root(&Board::new(), Player::Max));
        let mut rng = StdRng::seed_from_u64(8);
        let child = SearchState::successors(&root, Difficulty::Hard, Player::Max, &mut rng)
            .swap_remove(0);
        let grandchild = SearchState::successors(&child, Difficulty::Hard, Player::Max, &mut rng)
            .swap_remove(0);

        let path = SearchState::path_to_root(&grandchild);
        assert_eq!(path.len(), 3);
        assert!(Rc::ptr_eq(&path[0], &root));
        assert!(Rc::ptr_eq(&path[2], &grandchild));

        let step = SearchState::first_step(&grandchild).unwrap();
        assert!(Rc::ptr_eq(&step, &child));
        assert!(SearchState::first_step(&root).is_none());
        assert_eq!(grandchild.board().edges_drawn(), 2);
    }
}
