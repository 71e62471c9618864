//! Shape - a movable tetromino instance
//!
//! A shape is an anchor position plus the 4 blocks derived from the geometry
//! table for its (kind, angle). Shift and rotate keep anchor and blocks
//! consistent; none of the transformations validate the result - validity is
//! the engine's responsibility.

use arrayvec::ArrayVec;

use crate::geometry;
use blockfall_types::{Angle, Block, BlockColor, ShapeKind};

/// A falling tetromino: kind, angle, color, anchor, and its 4 blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    kind: ShapeKind,
    angle: Angle,
    color: BlockColor,
    column: i8,
    row: i8,
    blocks: [Block; 4],
}

impl Shape {
    /// Build a shape at an anchor, deriving blocks from the geometry table
    pub fn new(
        kind: ShapeKind,
        angle: Angle,
        color: BlockColor,
        column: i8,
        row: i8,
    ) -> Self {
        let blocks = derive_blocks(kind, angle, color, column, row);
        Self {
            kind,
            angle,
            color,
            column,
            row,
            blocks,
        }
    }

    /// Restore a shape whose stored blocks are authoritative
    ///
    /// Used when loading a snapshot: a shape serialized mid-session keeps the
    /// exact block positions it was saved with instead of re-deriving them.
    pub fn from_parts(
        kind: ShapeKind,
        angle: Angle,
        color: BlockColor,
        column: i8,
        row: i8,
        blocks: [Block; 4],
    ) -> Self {
        Self {
            kind,
            angle,
            color,
            column,
            row,
            blocks,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    pub fn color(&self) -> BlockColor {
        self.color
    }

    /// Anchor position as (column, row)
    pub fn anchor(&self) -> (i8, i8) {
        (self.column, self.row)
    }

    pub fn blocks(&self) -> &[Block; 4] {
        &self.blocks
    }

    /// Translate anchor and all blocks by the same delta; no validity check
    pub fn shift(&mut self, d_column: i8, d_row: i8) {
        self.column += d_column;
        self.row += d_row;
        for block in &mut self.blocks {
            block.column += d_column;
            block.row += d_row;
        }
    }

    /// Recompute block offsets for an angle at the same anchor
    pub fn rotate_to(&mut self, angle: Angle) {
        self.angle = angle;
        self.blocks =
            derive_blocks(self.kind, angle, self.color, self.column, self.row);
    }

    /// One clockwise rotation step (wraps past 270 back to 0)
    pub fn rotate_cw(&mut self) {
        self.rotate_to(self.angle.rotated_cw());
    }

    /// One counter-clockwise rotation step (wraps past 0 back to 270)
    pub fn rotate_ccw(&mut self) {
        self.rotate_to(self.angle.rotated_ccw());
    }

    /// Re-anchor the shape and recompute its blocks at the current angle
    ///
    /// Used when the preview shape is promoted to the start anchor.
    pub fn move_to(&mut self, column: i8, row: i8) {
        self.column = column;
        self.row = row;
        self.rotate_to(self.angle);
    }

    /// The floor-facing subset of the shape's blocks for landing checks
    pub fn bottom_blocks(&self) -> ArrayVec<Block, 4> {
        geometry::bottom_indices(self.kind, self.angle)
            .iter()
            .map(|&i| self.blocks[i])
            .collect()
    }
}

fn derive_blocks(
    kind: ShapeKind,
    angle: Angle,
    color: BlockColor,
    column: i8,
    row: i8,
) -> [Block; 4] {
    let offs = geometry::offsets(kind, angle);
    offs.map(|(dc, dr)| Block::new(color, column + dc, row + dr))
}
