//! Score constants for Dots-and-Boxes evaluation

/// Score bounds shared by the evaluation and the searches
pub struct Score;

impl Score {
    /// Floor of every finished-game score.
    ///
    /// Larger than any box count a supported board can hold, so a proven
    /// win or loss always outranks a heuristic estimate.
    pub const LIMIT: i32 = 1000;

    /// Finished game with equal scores
    pub const TIE: i32 = 0;
}
