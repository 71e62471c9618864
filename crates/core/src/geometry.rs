//! Geometry tables - block offsets and bottom-block sets per shape kind
//!
//! Pure data: for every (kind, angle) pair there is exactly one ordered list
//! of 4 (column, row) offsets relative to the shape anchor, plus the index
//! set of the blocks that face the floor at that angle. The tables are
//! exhaustive over all 7 kinds x 4 angles with no fallback path; a missing
//! entry would be a programming error, not a runtime condition.

use blockfall_types::{Angle, ShapeKind};

/// Offset of a single block relative to the shape anchor
pub type BlockOffset = (i8, i8);

/// The 4 block offsets of a shape at one angle
pub type ShapeOffsets = [BlockOffset; 4];

/// Get the block offsets for a shape kind at an angle
pub fn offsets(kind: ShapeKind, angle: Angle) -> ShapeOffsets {
    match kind {
        ShapeKind::Square => square_offsets(angle),
        ShapeKind::Line => line_offsets(angle),
        ShapeKind::T => t_offsets(angle),
        ShapeKind::L => l_offsets(angle),
        ShapeKind::J => j_offsets(angle),
        ShapeKind::Z => z_offsets(angle),
        ShapeKind::S => s_offsets(angle),
    }
}

/// Indices (into the 4-block list) of the blocks that face the floor
///
/// Used for landing detection only; collision checks examine all 4 blocks.
pub fn bottom_indices(kind: ShapeKind, angle: Angle) -> &'static [usize] {
    match kind {
        ShapeKind::Square => &[2, 3],
        ShapeKind::Line => match angle {
            Angle::Zero | Angle::OneEighty => &[3],
            Angle::Ninety | Angle::TwoSeventy => &[0, 1, 2, 3],
        },
        ShapeKind::T => match angle {
            Angle::Zero => &[0, 2, 3],
            Angle::Ninety => &[2, 3],
            Angle::OneEighty => &[0, 1, 2],
            Angle::TwoSeventy => &[0, 3],
        },
        ShapeKind::L => match angle {
            Angle::Zero => &[2, 3],
            Angle::Ninety => &[0, 2, 3],
            Angle::OneEighty => &[0, 3],
            Angle::TwoSeventy => &[0, 1, 2],
        },
        ShapeKind::J => match angle {
            Angle::Zero => &[2, 3],
            Angle::Ninety => &[0, 1, 2],
            Angle::OneEighty => &[0, 3],
            Angle::TwoSeventy => &[0, 1, 3],
        },
        ShapeKind::Z => match angle {
            Angle::Zero | Angle::OneEighty => &[0, 2],
            Angle::Ninety | Angle::TwoSeventy => &[0, 2, 3],
        },
        ShapeKind::S => match angle {
            Angle::Zero | Angle::OneEighty => &[1, 3],
            Angle::Ninety | Angle::TwoSeventy => &[0, 2, 3],
        },
    }
}

/// Square: 2x2, rotation-invariant (intentional, not a bug)
fn square_offsets(_angle: Angle) -> ShapeOffsets {
    [(0, 0), (1, 0), (0, 1), (1, 1)]
}

/// Line: vertical at 0/180, horizontal (anchored on the second block)
/// at 90/270
fn line_offsets(angle: Angle) -> ShapeOffsets {
    match angle {
        Angle::Zero | Angle::OneEighty => [(0, 0), (0, 1), (0, 2), (0, 3)],
        Angle::Ninety | Angle::TwoSeventy => [(-1, 0), (0, 0), (1, 0), (2, 0)],
    }
}

fn t_offsets(angle: Angle) -> ShapeOffsets {
    match angle {
        // stem below the bar
        Angle::Zero => [(-1, 1), (0, 1), (1, 1), (0, 2)],
        // stem to the left
        Angle::Ninety => [(0, 0), (0, 1), (0, 2), (-1, 1)],
        // stem above the bar
        Angle::OneEighty => [(1, 2), (0, 2), (-1, 2), (0, 1)],
        // stem to the right
        Angle::TwoSeventy => [(0, 2), (0, 1), (0, 0), (1, 1)],
    }
}

fn l_offsets(angle: Angle) -> ShapeOffsets {
    match angle {
        Angle::Zero => [(-1, 0), (-1, 1), (-1, 2), (0, 2)],
        Angle::Ninety => [(1, 1), (0, 1), (-1, 1), (-1, 2)],
        Angle::OneEighty => [(0, 2), (0, 1), (0, 0), (-1, 0)],
        Angle::TwoSeventy => [(-1, 2), (0, 2), (1, 2), (1, 1)],
    }
}

fn j_offsets(angle: Angle) -> ShapeOffsets {
    match angle {
        Angle::Zero => [(1, 0), (1, 1), (1, 2), (0, 2)],
        Angle::Ninety => [(1, 2), (0, 2), (-1, 2), (-1, 1)],
        Angle::OneEighty => [(-1, 2), (-1, 1), (-1, 0), (0, 0)],
        Angle::TwoSeventy => [(-1, 1), (0, 1), (1, 1), (1, 2)],
    }
}

/// Z has only two distinct silhouettes, repeated at 0/180 and 90/270
fn z_offsets(angle: Angle) -> ShapeOffsets {
    match angle {
        Angle::Zero | Angle::OneEighty => [(0, 2), (0, 1), (1, 1), (1, 0)],
        Angle::Ninety | Angle::TwoSeventy => [(-1, 1), (0, 1), (0, 2), (1, 2)],
    }
}

/// S mirrors Z: two distinct silhouettes, repeated at 0/180 and 90/270
fn s_offsets(angle: Angle) -> ShapeOffsets {
    match angle {
        Angle::Zero | Angle::OneEighty => [(-1, 0), (-1, 1), (0, 1), (0, 2)],
        Angle::Ninety | Angle::TwoSeventy => [(1, 1), (0, 1), (0, 2), (-1, 2)],
    }
}
