//! Snapshot codec and the save-slot collection
//!
//! `encode` captures a live engine into a pure record; `decode` rebuilds an
//! engine-independent session from one. Neither aliases live engine state -
//! a snapshot is always a deep copy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::records::{BlockRecord, ShapeRecord};
use blockfall_core::{Game, RestoredSession};
use blockfall_types::Block;

/// One saved game: shapes, settled blocks row-major, score, level, timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub filled_cells: Vec<Vec<BlockRecord>>,
    pub current_shape: Option<ShapeRecord>,
    pub next_shape: Option<ShapeRecord>,
    pub score: u32,
    pub level: u32,
    pub date: DateTime<Utc>,
}

/// The save-slot collection, ordered by insertion
///
/// Order preservation is the only ordering contract; the presentation layer
/// decides display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveList {
    pub all_saves: Vec<SaveRecord>,
}

impl SaveList {
    /// Append a save slot
    pub fn push(&mut self, record: SaveRecord) {
        self.all_saves.push(record);
    }

    /// Remove the slot at `index`, keeping the remaining slots in their
    /// original relative order
    pub fn remove(&mut self, index: usize) -> Option<SaveRecord> {
        if index < self.all_saves.len() {
            Some(self.all_saves.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&SaveRecord> {
        self.all_saves.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SaveRecord> {
        self.all_saves.iter()
    }

    pub fn len(&self) -> usize {
        self.all_saves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_saves.is_empty()
    }
}

/// Capture the engine's state as a snapshot stamped with the current time
pub fn encode(game: &Game) -> SaveRecord {
    SaveRecord {
        filled_cells: game
            .grid()
            .occupied_rows()
            .into_iter()
            .map(|row| row.into_iter().map(BlockRecord::from).collect())
            .collect(),
        current_shape: game.current_shape().map(ShapeRecord::from),
        next_shape: game.next_shape().map(ShapeRecord::from),
        score: game.score(),
        level: game.level(),
        date: Utc::now(),
    }
}

/// Rebuild a session from a snapshot; apply it with `Game::restore`
pub fn decode(record: &SaveRecord) -> RestoredSession {
    RestoredSession {
        current: record.current_shape.as_ref().map(ShapeRecord::to_shape),
        next: record.next_shape.as_ref().map(ShapeRecord::to_shape),
        settled: record
            .filled_cells
            .iter()
            .flatten()
            .map(|&block| Block::from(block))
            .collect(),
        score: record.score,
        level: record.level,
    }
}
