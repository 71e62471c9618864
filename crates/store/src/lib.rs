//! Persistence - snapshot codec, save slots, and injected storage
//!
//! Converts engine state to and from a serializable snapshot (shapes, settled
//! blocks, score, level, timestamp) and manages the save-slot collection. The
//! engine itself never touches storage: an external save controller calls
//! [`encode`]/[`decode`] here and moves the JSON through a [`SaveStorage`]
//! implementation supplied by the host.
//!
//! # Format
//!
//! A save file is one JSON document holding the full slot collection:
//!
//! ```json
//! {
//!   "all_saves": [
//!     {
//!       "filled_cells": [[{"color": "red", "column": 0, "row": 19}]],
//!       "current_shape": { "...": "..." },
//!       "next_shape": { "...": "..." },
//!       "score": 120,
//!       "level": 2,
//!       "date": "2026-08-06T12:00:00Z"
//!     }
//!   ]
//! }
//! ```
//!
//! Loading tolerates a missing or corrupt file by yielding an empty
//! collection - a bad save never takes the session down.

pub mod codec;
pub mod high_scores;
pub mod records;
pub mod storage;

pub use codec::{decode, encode, SaveList, SaveRecord};
pub use high_scores::{load_high_scores, store_high_scores, HighScores};
pub use records::{BlockRecord, ShapeRecord};
pub use storage::{load_saves, store_saves, FileStorage, SaveStorage};
