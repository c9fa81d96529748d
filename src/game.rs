//! Game session tying a live board to the engine
//!
//! `Game` is what a front end talks to: it validates human input, applies
//! the turn rule after every edge and asks the engine for the computer's
//! moves.

use thiserror::Error;
use tracing::trace;

use crate::board::{Board, BoardError, Edge, Player};
use crate::engine::{AIEngine, EngineConfig, EngineError};
use crate::rules::{advance_turn, winner, Outcome};

/// Errors from playing a move in a [`Game`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game is over")]
    GameOver,
    #[error("edge {0} is already drawn")]
    EdgeTaken(Edge),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// What happened on one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Edge that was drawn
    pub edge: Edge,
    /// Player who drew it
    pub mover: Player,
    /// Boxes closed by the edge (0, 1 or 2)
    pub completed: u32,
    /// Side to move next
    pub next: Player,
}

/// A game in progress.
pub struct Game {
    board: Board,
    engine: AIEngine,
    /// Sides entered by a person, indexed `[Max, Min]`
    humans: [bool; 2],
}

#[inline]
fn slot(player: Player) -> usize {
    match player {
        Player::Max => 0,
        Player::Min => 1,
    }
}

impl Game {
    /// New game on a `rows` x `cols` grid of points.
    ///
    /// `human` is the side entered by a person; `None` lets the engine play
    /// both sides.
    pub fn new(
        rows: usize,
        cols: usize,
        config: EngineConfig,
        human: Option<Player>,
    ) -> Result<Self, GameError> {
        let humans = match human {
            Some(player) => [slot(player) == 0, slot(player) == 1],
            None => [false, false],
        };
        Self::with_humans(rows, cols, config, humans)
    }

    /// Game where both sides are entered by people.
    ///
    /// The engine is still available for hints through [`Game::engine_mut`].
    pub fn two_player(rows: usize, cols: usize, config: EngineConfig) -> Result<Self, GameError> {
        Self::with_humans(rows, cols, config, [true, true])
    }

    fn with_humans(
        rows: usize,
        cols: usize,
        config: EngineConfig,
        humans: [bool; 2],
    ) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::with_size(rows, cols)?,
            engine: AIEngine::with_config(config),
            humans,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn engine(&self) -> &AIEngine {
        &self.engine
    }

    #[inline]
    pub fn engine_mut(&mut self) -> &mut AIEngine {
        &mut self.engine
    }

    /// Whether `player` is entered by a person
    #[inline]
    pub fn is_human(&self, player: Player) -> bool {
        self.humans[slot(player)]
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.board.current_player()
    }

    /// Whether the side to move is controlled by the engine
    #[inline]
    pub fn is_computer_turn(&self) -> bool {
        !self.is_human(self.board.current_player())
    }

    /// Draw `edge` for the side to move and pass the turn unless a box was
    /// closed.
    pub fn play(&mut self, edge: Edge) -> Result<TurnOutcome, GameError> {
        if self.board.is_finished() {
            return Err(GameError::GameOver);
        }
        let edge = self.board.validate(edge)?;
        if self.board.is_set(edge) {
            return Err(GameError::EdgeTaken(edge));
        }

        let mover = self.board.current_player();
        let before = self.board.score(mover);
        if !self.board.make_move(edge) {
            return Err(GameError::EdgeTaken(edge));
        }
        let completed = self.board.score(mover) - before;
        let next = advance_turn(&mut self.board);

        trace!(%edge, %mover, completed, %next, "edge played");
        Ok(TurnOutcome {
            edge,
            mover,
            completed,
            next,
        })
    }

    /// Let the engine pick and play a move for the side to move.
    pub fn computer_move(&mut self) -> Result<TurnOutcome, GameError> {
        if self.board.is_finished() {
            return Err(GameError::GameOver);
        }
        let edge = self.engine.choose_move(&self.board)?;
        self.play(edge)
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.board.is_finished()
    }

    #[inline]
    pub fn score(&self, player: Player) -> u32 {
        self.board.score(player)
    }

    /// Winner once the game is over; `None` while playing or on a tie
    pub fn winner(&self) -> Option<Player> {
        winner(&self.board)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        Outcome::of(&self.board)
    }
}
