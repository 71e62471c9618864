//! Core rules engine - pure, deterministic, and testable
//!
//! Everything needed to play a session lives here: geometry tables, the
//! shape and grid models, scoring, and the engine state machine. The crate
//! has zero dependencies on UI, timers, or I/O, which keeps it:
//!
//! - **Deterministic**: an injected random source reproduces whole sessions
//! - **Driven**: an external clock calls [`Game::lower`]; there is no
//!   internal scheduling and no reentrancy
//! - **Portable**: usable from a terminal frontend, a GUI, or headless tests
//!
//! # Module structure
//!
//! - [`geometry`]: per-kind, per-angle block offsets and bottom-block sets
//! - [`shape`]: a movable tetromino built from the geometry tables
//! - [`grid`]: the 10x20 settled-block store
//! - [`engine`]: move/rotate/lower/drop, line clears, scoring, game over
//! - [`rng`]: the injectable random source and the default LCG
//! - [`scoring`]: clear points, level thresholds, tick intervals
//!
//! # Example
//!
//! ```
//! use blockfall_core::Game;
//!
//! let mut game = Game::new(12345);
//! game.begin_session();
//!
//! game.move_left();
//! game.rotate();
//! game.lower(); // the driver calls this on the level's tick interval
//!
//! for event in game.take_events() {
//!     // render, animate, play audio
//!     let _ = event;
//! }
//! ```

pub mod engine;
pub mod geometry;
pub mod grid;
pub mod rng;
pub mod scoring;
pub mod shape;

pub use engine::{Game, RestoredSession};
pub use grid::Grid;
pub use rng::{RandomSource, SimpleRng};
pub use shape::Shape;
