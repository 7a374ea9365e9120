//! Evaluation weights
//!
//! Hand-tuned constants for the static evaluation and the placement
//! heuristic. Terminal scores sit above every non-terminal score.

/// Scoring weights, keyed by the side being scored for
pub struct Weights;

impl Weights {
    // Terminal band
    /// Base score of a decided game (plus remaining depth)
    pub const WIN: i32 = 20_000;

    // Tiger perspective
    /// Per goat captured
    pub const TIGER_CAPTURE: i32 = 2_000;
    /// Bonus once a single capture would win
    pub const TIGER_NEAR_WIN: i32 = 5_000;
    /// Per jump currently available
    pub const TIGER_CAPTURE_CHANCE: i32 = 500;
    /// Per tiger with no legal move
    pub const TIGER_TRAPPED: i32 = 1_500;
    /// Per legal tiger move
    pub const TIGER_MOBILITY: i32 = 30;
    /// Per pair of adjacent tigers
    pub const TIGER_COORDINATION: i32 = 60;

    // Goat perspective
    /// Per goat lost
    pub const GOAT_LOSS: i32 = 2_500;
    /// Per tiger with no legal move
    pub const GOAT_TRAP: i32 = 1_500;
    /// Per legal tiger move
    pub const GOAT_TIGER_MOBILITY: i32 = 50;
    /// Per jump the tigers could make
    pub const GOAT_EXPOSED: i32 = 1_000;
    /// Per pair of adjacent goats
    pub const GOAT_CONNECTION: i32 = 40;
    /// Per goat on a central junction
    pub const GOAT_CENTRAL: i32 = 70;

    // Placement heuristic
    /// Placing where a tiger can jump it next turn
    pub const PLACE_DANGER: i32 = -10_000;
    /// Per tiger next to the candidate node
    pub const PLACE_CROWD_TIGER: i32 = 200;
    /// Per goat next to the candidate node
    pub const PLACE_WALL: i32 = 50;
    /// Candidate is a core node
    pub const PLACE_CORE: i32 = 100;
    /// Candidate is on the ring around the core
    pub const PLACE_RING: i32 = 60;
}

/// Captures at which the near-win bonus applies
pub const NEAR_WIN_CAPTURES: u8 = crate::board::CAPTURES_TO_WIN - 1;
