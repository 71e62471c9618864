//! Serde record types mirroring the core model
//!
//! The core crates stay serde-free; this module owns the serialized shape of
//! a snapshot and converts between records and live core values. Enum fields
//! serialize as strings, angles as their degree labels.

use serde::{Deserialize, Serialize};

use blockfall_core::Shape;
use blockfall_types::{Angle, Block, BlockColor, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindRecord {
    Square,
    Line,
    T,
    L,
    J,
    Z,
    S,
}

impl From<ShapeKind> for KindRecord {
    fn from(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Square => KindRecord::Square,
            ShapeKind::Line => KindRecord::Line,
            ShapeKind::T => KindRecord::T,
            ShapeKind::L => KindRecord::L,
            ShapeKind::J => KindRecord::J,
            ShapeKind::Z => KindRecord::Z,
            ShapeKind::S => KindRecord::S,
        }
    }
}

impl From<KindRecord> for ShapeKind {
    fn from(record: KindRecord) -> Self {
        match record {
            KindRecord::Square => ShapeKind::Square,
            KindRecord::Line => ShapeKind::Line,
            KindRecord::T => ShapeKind::T,
            KindRecord::L => ShapeKind::L,
            KindRecord::J => ShapeKind::J,
            KindRecord::Z => ShapeKind::Z,
            KindRecord::S => ShapeKind::S,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleRecord {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "90")]
    Ninety,
    #[serde(rename = "180")]
    OneEighty,
    #[serde(rename = "270")]
    TwoSeventy,
}

impl From<Angle> for AngleRecord {
    fn from(angle: Angle) -> Self {
        match angle {
            Angle::Zero => AngleRecord::Zero,
            Angle::Ninety => AngleRecord::Ninety,
            Angle::OneEighty => AngleRecord::OneEighty,
            Angle::TwoSeventy => AngleRecord::TwoSeventy,
        }
    }
}

impl From<AngleRecord> for Angle {
    fn from(record: AngleRecord) -> Self {
        match record {
            AngleRecord::Zero => Angle::Zero,
            AngleRecord::Ninety => Angle::Ninety,
            AngleRecord::OneEighty => Angle::OneEighty,
            AngleRecord::TwoSeventy => Angle::TwoSeventy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRecord {
    Orange,
    Blue,
    Purple,
    Red,
    Teal,
    Yellow,
}

impl From<BlockColor> for ColorRecord {
    fn from(color: BlockColor) -> Self {
        match color {
            BlockColor::Orange => ColorRecord::Orange,
            BlockColor::Blue => ColorRecord::Blue,
            BlockColor::Purple => ColorRecord::Purple,
            BlockColor::Red => ColorRecord::Red,
            BlockColor::Teal => ColorRecord::Teal,
            BlockColor::Yellow => ColorRecord::Yellow,
        }
    }
}

impl From<ColorRecord> for BlockColor {
    fn from(record: ColorRecord) -> Self {
        match record {
            ColorRecord::Orange => BlockColor::Orange,
            ColorRecord::Blue => BlockColor::Blue,
            ColorRecord::Purple => BlockColor::Purple,
            ColorRecord::Red => BlockColor::Red,
            ColorRecord::Teal => BlockColor::Teal,
            ColorRecord::Yellow => BlockColor::Yellow,
        }
    }
}

/// One settled or falling block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRecord {
    pub color: ColorRecord,
    pub column: i8,
    pub row: i8,
}

impl From<Block> for BlockRecord {
    fn from(block: Block) -> Self {
        Self {
            color: block.color.into(),
            column: block.column,
            row: block.row,
        }
    }
}

impl From<BlockRecord> for Block {
    fn from(record: BlockRecord) -> Self {
        Block::new(record.color.into(), record.column, record.row)
    }
}

/// A serialized shape; the stored block positions are authoritative on load
///
/// The shape color is not stored separately - it is restored from the first
/// block, as every block of a shape shares one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub blocks: [BlockRecord; 4],
    pub column: i8,
    pub row: i8,
    pub angle: AngleRecord,
    pub kind: KindRecord,
}

impl From<&Shape> for ShapeRecord {
    fn from(shape: &Shape) -> Self {
        let (column, row) = shape.anchor();
        Self {
            blocks: (*shape.blocks()).map(BlockRecord::from),
            column,
            row,
            angle: shape.angle().into(),
            kind: shape.kind().into(),
        }
    }
}

impl ShapeRecord {
    /// Rebuild the live shape, keeping the stored blocks instead of
    /// re-deriving them from the geometry table
    pub fn to_shape(&self) -> Shape {
        let blocks = self.blocks.map(Block::from);
        Shape::from_parts(
            self.kind.into(),
            self.angle.into(),
            blocks[0].color,
            self.column,
            self.row,
            blocks,
        )
    }
}
