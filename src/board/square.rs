//! A single box of the grid and its four sides

use super::Player;

/// Side of a box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Up,
    Down,
    Left,
    Right,
}

/// One box: four side flags plus the player who closed it.
///
/// Interior sides are shared with a neighbouring box; [`Board`](super::Board)
/// keeps both copies in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Square {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub owner: Option<Player>,
}

impl Square {
    /// Read one side flag
    #[inline]
    pub fn has(&self, side: Side) -> bool {
        match side {
            Side::Up => self.up,
            Side::Down => self.down,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, side: Side, value: bool) {
        match side {
            Side::Up => self.up = value,
            Side::Down => self.down = value,
            Side::Left => self.left = value,
            Side::Right => self.right = value,
        }
    }

    /// Number of sides drawn (0-4)
    #[inline]
    pub fn sides(&self) -> u8 {
        self.up as u8 + self.down as u8 + self.left as u8 + self.right as u8
    }

    /// All four sides drawn
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.up && self.down && self.left && self.right
    }

    /// The missing side of a box with exactly three sides drawn
    pub fn missing_side(&self) -> Option<Side> {
        if self.sides() != 3 {
            return None;
        }
        [Side::Up, Side::Down, Side::Left, Side::Right]
            .into_iter()
            .find(|&side| !self.has(side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_square() {
        let sq = Square::default();
        assert_eq!(sq.sides(), 0);
        assert!(!sq.is_completed());
        assert_eq!(sq.missing_side(), None);
        assert_eq!(sq.owner, None);
    }

    #[test]
    fn test_missing_side_with_three_sides() {
        let sq = Square {
            up: true,
            down: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(sq.sides(), 3);
        assert_eq!(sq.missing_side(), Some(Side::Left));
    }

    #[test]
    fn test_completed_has_no_missing_side() {
        let sq = Square {
            up: true,
            down: true,
            left: true,
            right: true,
            owner: None,
        };
        assert!(sq.is_completed());
        assert_eq!(sq.missing_side(), None);
    }

    #[test]
    fn test_set_and_has() {
        let mut sq = Square::default();
        sq.set(Side::Down, true);
        assert!(sq.has(Side::Down));
        assert!(!sq.has(Side::Up));
        sq.set(Side::Down, false);
        assert_eq!(sq, Square::default());
    }
}
