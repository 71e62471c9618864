//! Shared data types and ruleset constants
//!
//! Everything in this crate is pure data with no external dependencies, so it
//! can be used from the engine, a renderer, or the persistence layer alike.
//!
//! # Playfield
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Start anchor**: (4, 0), where a promoted shape begins falling
//! - **Preview anchor**: (12, 0), off-grid anchor for the next-shape preview
//!
//! # Scoring
//!
//! Clearing `n` rows at level `L` awards `n * POINTS_PER_LEVEL * L` points.
//! The level increments the first time the score exceeds
//! `L * LEVEL_THRESHOLD`.
//!
//! # Timing
//!
//! The engine holds no clock. The driving layer ticks it on the interval
//! given by `TICK_INTERVALS_MS[level - 1]`, flooring at
//! `TICK_INTERVAL_FLOOR_MS` from level 19 on.

/// Playfield dimensions
pub const GRID_COLUMNS: u8 = 10;
pub const GRID_ROWS: u8 = 20;

/// Anchor where a newly promoted shape starts falling
pub const START_COLUMN: i8 = 4;
pub const START_ROW: i8 = 0;

/// Anchor of the next-shape preview pane (outside the playfield)
pub const PREVIEW_COLUMN: i8 = 12;
pub const PREVIEW_ROW: i8 = 0;

/// Points per cleared row are scaled by this and the current level
pub const POINTS_PER_LEVEL: u32 = 10;

/// The level increments once the score exceeds `level * LEVEL_THRESHOLD`
pub const LEVEL_THRESHOLD: u32 = 300;

/// Tick interval per level, milliseconds. Index 0 is level 1.
pub const TICK_INTERVALS_MS: [u32; 19] = [
    650, 600, 550, 500, 450, 400, 350, 325, 300, 275, 250, 225, 200, 175, 150,
    125, 100, 75, 50,
];

/// Interval floor for level 19 and beyond
pub const TICK_INTERVAL_FLOOR_MS: u32 = 50;

/// The seven tetromino kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Line,
    T,
    L,
    J,
    Z,
    S,
}

impl ShapeKind {
    /// All kinds, in ruleset order (used for uniform random draws)
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Square,
        ShapeKind::Line,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::Z,
        ShapeKind::S,
    ];
}

/// Rotation states, in clockwise order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Angle {
    Zero,
    Ninety,
    OneEighty,
    TwoSeventy,
}

impl Angle {
    pub const ALL: [Angle; 4] = [
        Angle::Zero,
        Angle::Ninety,
        Angle::OneEighty,
        Angle::TwoSeventy,
    ];

    /// One clockwise step, wrapping past 270 back to 0
    pub fn rotated_cw(self) -> Self {
        match self {
            Angle::Zero => Angle::Ninety,
            Angle::Ninety => Angle::OneEighty,
            Angle::OneEighty => Angle::TwoSeventy,
            Angle::TwoSeventy => Angle::Zero,
        }
    }

    /// One counter-clockwise step, wrapping past 0 back to 270
    pub fn rotated_ccw(self) -> Self {
        match self {
            Angle::Zero => Angle::TwoSeventy,
            Angle::TwoSeventy => Angle::OneEighty,
            Angle::OneEighty => Angle::Ninety,
            Angle::Ninety => Angle::Zero,
        }
    }
}

/// The six block colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Orange,
    Blue,
    Purple,
    Red,
    Teal,
    Yellow,
}

impl BlockColor {
    pub const ALL: [BlockColor; 6] = [
        BlockColor::Orange,
        BlockColor::Blue,
        BlockColor::Purple,
        BlockColor::Red,
        BlockColor::Teal,
        BlockColor::Yellow,
    ];
}

/// A unit cell, owned either by a falling shape or by the grid once settled
///
/// Equality is by (column, row, color).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub color: BlockColor,
    pub column: i8,
    pub row: i8,
}

impl Block {
    pub fn new(color: BlockColor, column: i8, row: i8) -> Self {
        Self { color, column, row }
    }
}

/// Explicit session phase tag
///
/// Replaces "current shape is None" as a hidden state signal: mutators are
/// defined no-ops outside `Falling`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No session yet
    Idle,
    /// A session is running
    Falling,
    /// Terminal; the grid stays addressable for a final reveal
    GameOver,
}

/// Engine-to-driver notification, one per state transition
///
/// The driver drains these after each engine call and performs rendering,
/// animation, or audio in response.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A session started with a fresh current/next pair
    SessionBegun,
    /// A session was restored from a snapshot
    SessionResumed,
    /// The current shape shifted or rotated to a legal position
    ShapeMoved,
    /// The current shape settled into the grid
    ShapeLanded,
    /// Hard drop finished; the driver re-invokes `lower` to land normally
    ShapeDropped,
    /// Line-clear resolution finished (also fired for an empty clear).
    ///
    /// `cleared` holds each full row's blocks at their pre-clear positions;
    /// `remnants` holds the surviving partial rows at their post-shift
    /// positions. Both are in top-to-bottom scan order.
    LinesCleared {
        cleared: Vec<Vec<Block>>,
        remnants: Vec<Vec<Block>>,
    },
    /// The score crossed the current level's threshold
    LevelUp { level: u32 },
    /// Terminal: board full at spawn height, or an explicit forfeit
    SessionEnded { score: u32, level: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_cw_wraps() {
        assert_eq!(Angle::Zero.rotated_cw(), Angle::Ninety);
        assert_eq!(Angle::TwoSeventy.rotated_cw(), Angle::Zero);
    }

    #[test]
    fn test_angle_ccw_wraps() {
        assert_eq!(Angle::Zero.rotated_ccw(), Angle::TwoSeventy);
        assert_eq!(Angle::Ninety.rotated_ccw(), Angle::Zero);
    }

    #[test]
    fn test_angle_cw_ccw_inverse() {
        for angle in Angle::ALL {
            assert_eq!(angle.rotated_cw().rotated_ccw(), angle);
            assert_eq!(angle.rotated_ccw().rotated_cw(), angle);
        }
    }

    #[test]
    fn test_block_equality() {
        let a = Block::new(BlockColor::Red, 3, 7);
        let b = Block::new(BlockColor::Red, 3, 7);
        let c = Block::new(BlockColor::Blue, 3, 7);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_interval_table_is_monotonic() {
        for pair in TICK_INTERVALS_MS.windows(2) {
            assert!(pair[0] > pair[1]);
        }
        assert_eq!(TICK_INTERVALS_MS[0], 650);
        assert_eq!(TICK_INTERVALS_MS[18], TICK_INTERVAL_FLOOR_MS);
    }
}
