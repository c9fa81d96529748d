//! Board structure with reversible edge placement

use std::fmt;

use super::square::{Side, Square};
use super::{BoardError, Direction, Edge, Player, DEFAULT_POINTS, MAX_POINTS, MIN_POINTS};

/// Game board: a grid of points and the boxes between them.
///
/// `rows` and `cols` count points, so the board holds
/// `(rows - 1) * (cols - 1)` boxes. Every edge is stored on each box it
/// borders; `make_move`/`undo_move` keep both copies consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    squares: Vec<Square>,
    /// Boxes owned by the maximizing side
    max_score: u32,
    /// Boxes owned by the minimizing side
    min_score: u32,
    /// Side to move
    current: Player,
    /// Last applied edge closed at least one box (mover keeps the turn)
    completed_box: bool,
    /// Applied edges, most recent last, for undo
    history: Vec<MoveRecord>,
}

/// Record of a move for undo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MoveRecord {
    edge: Edge,
    completed_before: bool,
}

impl Board {
    /// Empty board with the default 4x4 grid of points
    pub fn new() -> Self {
        Self::empty(DEFAULT_POINTS, DEFAULT_POINTS)
    }

    /// Empty board with `rows x cols` points.
    pub fn with_size(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let range = MIN_POINTS..=MAX_POINTS;
        if !range.contains(&rows) || !range.contains(&cols) {
            return Err(BoardError::Dimensions { rows, cols });
        }
        Ok(Self::empty(rows, cols))
    }

    fn empty(rows: usize, cols: usize) -> Self {
        let edges = 2 * rows * cols - rows - cols;
        Self {
            rows,
            cols,
            squares: vec![Square::default(); (rows - 1) * (cols - 1)],
            max_score: 0,
            min_score: 0,
            current: Player::Max,
            completed_box: false,
            history: Vec::with_capacity(edges),
        }
    }

    /// Points per column
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Points per row
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of boxes on the board
    #[inline]
    pub fn total_boxes(&self) -> u32 {
        ((self.rows - 1) * (self.cols - 1)) as u32
    }

    /// Number of edges on the board
    #[inline]
    pub fn total_edges(&self) -> usize {
        2 * self.rows * self.cols - self.rows - self.cols
    }

    /// Edges drawn so far
    #[inline]
    pub fn edges_drawn(&self) -> usize {
        self.history.len()
    }

    /// Edges still available
    #[inline]
    pub fn edges_remaining(&self) -> usize {
        self.total_edges() - self.history.len()
    }

    /// Box at `(row, col)`, where the box's top-left corner is point `(row, col)`
    #[inline]
    pub fn square(&self, row: usize, col: usize) -> &Square {
        debug_assert!(row + 1 < self.rows && col + 1 < self.cols, "box ({row}, {col}) off the board");
        &self.squares[row * (self.cols - 1) + col]
    }

    #[inline]
    fn square_index(&self, row: usize, col: usize) -> usize {
        row * (self.cols - 1) + col
    }

    /// Score of a side
    #[inline]
    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::Max => self.max_score,
            Player::Min => self.min_score,
        }
    }

    /// Side to move
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current
    }

    #[inline]
    pub fn set_current_player(&mut self, player: Player) {
        self.current = player;
    }

    /// Pass the turn to the other side
    #[inline]
    pub fn switch_player(&mut self) {
        self.current = self.current.opponent();
    }

    /// Whether the last applied edge closed a box
    #[inline]
    pub fn completed_box(&self) -> bool {
        self.completed_box
    }

    /// All boxes are owned
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.max_score + self.min_score == self.total_boxes()
    }

    /// Whether the edge lies inside this grid
    #[inline]
    pub fn contains(&self, edge: Edge) -> bool {
        let (r, c) = (edge.row as usize, edge.col as usize);
        match edge.dir {
            Direction::Right => r < self.rows && c + 1 < self.cols,
            Direction::Down => r + 1 < self.rows && c < self.cols,
        }
    }

    /// Build an edge, rejecting coordinates outside the grid
    pub fn edge(&self, row: usize, col: usize, dir: Direction) -> Result<Edge, BoardError> {
        let out_of_bounds = || BoardError::OutOfBounds {
            edge: Edge::new(row.min(u8::MAX as usize) as u8, col.min(u8::MAX as usize) as u8, dir),
            rows: self.rows,
            cols: self.cols,
        };
        if row >= self.rows || col >= self.cols {
            return Err(out_of_bounds());
        }
        let edge = Edge::new(row as u8, col as u8, dir);
        if self.contains(edge) {
            Ok(edge)
        } else {
            Err(out_of_bounds())
        }
    }

    /// Check an externally supplied edge against the grid
    pub fn validate(&self, edge: Edge) -> Result<Edge, BoardError> {
        if self.contains(edge) {
            Ok(edge)
        } else {
            Err(BoardError::OutOfBounds {
                edge,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Boxes bordering an edge (one on the outer boundary, two inside)
    /// and which of their sides the edge is.
    fn bordering(&self, edge: Edge) -> [Option<(usize, Side)>; 2] {
        let (r, c) = (edge.row as usize, edge.col as usize);
        match edge.dir {
            Direction::Right => [
                (r + 1 < self.rows).then(|| (self.square_index(r, c), Side::Up)),
                (r > 0).then(|| (self.square_index(r - 1, c), Side::Down)),
            ],
            Direction::Down => [
                (c + 1 < self.cols).then(|| (self.square_index(r, c), Side::Left)),
                (c > 0).then(|| (self.square_index(r, c - 1), Side::Right)),
            ],
        }
    }

    /// Whether an edge is already drawn (`false` outside the grid)
    #[inline]
    pub fn is_set(&self, edge: Edge) -> bool {
        self.contains(edge)
            && self
                .bordering(edge)
                .into_iter()
                .flatten()
                .any(|(idx, side)| self.squares[idx].has(side))
    }

    /// Draw an edge for the side to move.
    ///
    /// Returns `false` and leaves the board untouched if the edge is outside
    /// the grid or already drawn. Otherwise every box the edge closes is
    /// credited to the mover and `completed_box` reports whether any was.
    /// The turn is not advanced here.
    pub fn make_move(&mut self, edge: Edge) -> bool {
        if !self.contains(edge) || self.is_set(edge) {
            return false;
        }

        let mover = self.current;
        let completed_before = self.completed_box;
        let mut closed = 0u32;

        for (idx, side) in self.bordering(edge).into_iter().flatten() {
            let square = &mut self.squares[idx];
            square.set(side, true);
            if square.is_completed() {
                square.owner = Some(mover);
                closed += 1;
            }
        }

        match mover {
            Player::Max => self.max_score += closed,
            Player::Min => self.min_score += closed,
        }
        self.completed_box = closed > 0;
        self.history.push(MoveRecord {
            edge,
            completed_before,
        });

        debug_assert!(self.max_score + self.min_score <= self.total_boxes());
        true
    }

    /// Exact inverse of [`make_move`](Self::make_move).
    ///
    /// Boxes closed by the edge lose their owner and the owner's score drops.
    /// Undoing an edge that is not drawn is a no-op.
    pub fn undo_move(&mut self, edge: Edge) {
        if !self.contains(edge) || !self.is_set(edge) {
            return;
        }

        for (idx, side) in self.bordering(edge).into_iter().flatten() {
            let square = &mut self.squares[idx];
            if let Some(owner) = square.owner.take() {
                match owner {
                    Player::Max => self.max_score -= 1,
                    Player::Min => self.min_score -= 1,
                }
            }
            square.set(side, false);
        }

        match self.history.iter().rposition(|rec| rec.edge == edge) {
            Some(pos) if pos + 1 == self.history.len() => {
                let rec = self.history.remove(pos);
                self.completed_box = rec.completed_before;
            }
            Some(pos) => {
                // Out-of-order undo: nothing sensible to restore.
                self.history.remove(pos);
                self.completed_box = false;
            }
            None => self.completed_box = false,
        }
    }

    /// Canonical edge closing each box that has exactly three sides drawn.
    ///
    /// An edge shared by two such boxes is reported once.
    pub fn almost_completed_edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for row in 0..self.rows - 1 {
            for col in 0..self.cols - 1 {
                let Some(side) = self.square(row, col).missing_side() else {
                    continue;
                };
                let edge = Self::side_to_edge(row, col, side);
                if !edges.contains(&edge) {
                    edges.push(edge);
                }
            }
        }
        edges
    }

    /// Translate a box side into the canonical edge.
    /// The box `(i, j)` has point `(i, j)` as its top-left corner.
    fn side_to_edge(row: usize, col: usize, side: Side) -> Edge {
        let (r, c) = (row as u8, col as u8);
        match side {
            Side::Up => Edge::right(r, c),
            Side::Down => Edge::right(r + 1, c),
            Side::Left => Edge::down(r, c),
            Side::Right => Edge::down(r, c + 1),
        }
    }

    /// Undrawn edges in random order; see [`crate::rules::legal_moves`]
    pub fn legal_moves(&self) -> Vec<Edge> {
        crate::rules::legal_moves(self)
    }

    /// Undrawn edges in canonical row-major order (down before right at each point)
    pub fn available_edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.edges_remaining());
        for row in 0..self.rows {
            for col in 0..self.cols {
                let (r, c) = (row as u8, col as u8);
                for edge in [Edge::down(r, c), Edge::right(r, c)] {
                    if self.contains(edge) && !self.is_set(edge) {
                        edges.push(edge);
                    }
                }
            }
        }
        edges
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// ASCII grid: `*---*` for drawn horizontal edges, `|` for vertical ones
    /// and the owner's symbol inside closed boxes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let box_rows = self.rows - 1;
        let box_cols = self.cols - 1;

        for i in 0..box_rows {
            for j in 0..box_cols {
                f.write_str(if self.square(i, j).up { "*---" } else { "*   " })?;
            }
            f.write_str("*\n")?;

            for j in 0..box_cols {
                let square = self.square(i, j);
                let owner = square.owner.map_or(' ', Player::symbol);
                write!(f, "{} {} ", if square.left { '|' } else { ' ' }, owner)?;
            }
            let last = self.square(i, box_cols - 1);
            writeln!(f, "{}", if last.right { '|' } else { ' ' })?;
        }

        for j in 0..box_cols {
            f.write_str(if self.square(box_rows - 1, j).down { "*---" } else { "*   " })?;
        }
        f.write_str("*")
    }
}
