//! Engine - the game state machine
//!
//! Owns the grid and the current/next shape pair and implements the full
//! rules: move/rotate/lower with revert-on-illegal, landing detection,
//! incremental line-clear resolution with gravity, scoring and leveling, and
//! game-over detection. The engine is driven, not self-scheduling: an
//! external clock calls [`Game::lower`] on the interval for the current
//! level, and every operation runs to completion on one logical thread.
//!
//! State transitions surface as [`GameEvent`] values in an internal queue;
//! the driver drains them with [`Game::take_events`] after each call.

use crate::grid::Grid;
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring;
use crate::shape::Shape;
use blockfall_types::{
    Angle, Block, BlockColor, GameEvent, Phase, ShapeKind, GRID_COLUMNS,
    GRID_ROWS, PREVIEW_COLUMN, PREVIEW_ROW, START_COLUMN, START_ROW,
};

/// A restored play session decoded from a snapshot
///
/// Pure data, no aliasing of live engine state: applying it via
/// [`Game::restore`] deep-copies everything into the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RestoredSession {
    pub current: Option<Shape>,
    pub next: Option<Shape>,
    pub settled: Vec<Block>,
    pub score: u32,
    pub level: u32,
}

/// The rules engine for one play session
pub struct Game {
    grid: Grid,
    current: Option<Shape>,
    next: Option<Shape>,
    score: u32,
    level: u32,
    phase: Phase,
    events: Vec<GameEvent>,
    rng: Box<dyn RandomSource>,
}

impl Game {
    /// Create an idle engine with the default seeded generator
    pub fn new(seed: u32) -> Self {
        Self::with_source(Box::new(SimpleRng::new(seed)))
    }

    /// Create an idle engine with an injected random source
    pub fn with_source(rng: Box<dyn RandomSource>) -> Self {
        Self {
            grid: Grid::new(),
            current: None,
            next: None,
            score: 0,
            level: 1,
            phase: Phase::Idle,
            events: Vec::new(),
            rng,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_shape(&self) -> Option<&Shape> {
        self.current.as_ref()
    }

    pub fn next_shape(&self) -> Option<&Shape> {
        self.next.as_ref()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Drain the pending notification queue, oldest first
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start a session, spawning whichever of the current/next pair is absent
    ///
    /// Idempotent over an already-populated pair, so beginning after a
    /// snapshot restore re-randomizes nothing.
    pub fn begin_session(&mut self) {
        if self.current.is_none() {
            self.current = Some(self.random_shape(START_COLUMN, START_ROW));
        }
        if self.next.is_none() {
            self.next = Some(self.random_shape(PREVIEW_COLUMN, PREVIEW_ROW));
        }
        self.phase = Phase::Falling;
        self.events.push(GameEvent::SessionBegun);
    }

    /// Apply a decoded snapshot and resume play
    pub fn restore(&mut self, session: RestoredSession) {
        self.grid.clear();
        for block in session.settled {
            if Grid::in_bounds(block.column, block.row) {
                self.grid.set(block.column, block.row, Some(block));
            }
        }
        self.current = session.current;
        self.next = session.next;
        self.score = session.score;
        self.level = session.level;
        self.phase = Phase::Falling;
        self.events.push(GameEvent::SessionResumed);
    }

    /// Mark the session over (board full at spawn height, or forfeit)
    ///
    /// Grid contents stay addressable for a final sweep; they are not
    /// cleared here.
    pub fn end_session(&mut self) {
        self.phase = Phase::GameOver;
        self.events.push(GameEvent::SessionEnded {
            score: self.score,
            level: self.level,
        });
    }

    /// Empty the grid row by row for the game-over reveal animation
    pub fn take_all_rows(&mut self) -> Vec<Vec<Block>> {
        self.grid.drain_rows()
    }

    /// Single source of truth for move/rotate/spawn validity: any block out
    /// of bounds or over an occupied cell
    pub fn is_illegal_position(&self, shape: &Shape) -> bool {
        shape.blocks().iter().any(|block| {
            !Grid::in_bounds(block.column, block.row)
                || self.grid.is_occupied(block.column, block.row)
        })
    }

    /// Whether a legally positioned shape is resting on the floor or stack
    ///
    /// Checks only the shape's bottom-facing blocks; a shape can be legal
    /// yet touching (ready to settle).
    pub fn is_touching_below(&self, shape: &Shape) -> bool {
        shape.bottom_blocks().iter().any(|block| {
            block.row == GRID_ROWS as i8 - 1
                || self.grid.is_occupied(block.column, block.row + 1)
        })
    }

    pub fn move_left(&mut self) {
        self.shift_current(-1);
    }

    pub fn move_right(&mut self) {
        self.shift_current(1);
    }

    fn shift_current(&mut self, d_column: i8) {
        let Some(mut shape) = self.active() else { return };
        shape.shift(d_column, 0);
        if self.is_illegal_position(&shape) {
            return; // the attempted shift is not committed
        }
        self.current = Some(shape);
        self.events.push(GameEvent::ShapeMoved);
    }

    /// Rotate one clockwise step; on an illegal result, revert to the exact
    /// prior orientation (no wall-kick search)
    pub fn rotate(&mut self) {
        let Some(mut shape) = self.active() else { return };
        shape.rotate_cw();
        if self.is_illegal_position(&shape) {
            return;
        }
        self.current = Some(shape);
        self.events.push(GameEvent::ShapeMoved);
    }

    /// One gravity tick: shift the current shape down a row
    ///
    /// Downward collision settles at the original position unless that
    /// position is itself illegal, which means the board is full at spawn
    /// height and the session ends. A legal drop that lands exactly at
    /// floor/stack level settles immediately.
    pub fn lower(&mut self) {
        let Some(mut shape) = self.active() else { return };
        shape.shift(0, 1);
        if self.is_illegal_position(&shape) {
            shape.shift(0, -1);
            if self.is_illegal_position(&shape) {
                // illegal even at the original position: full at spawn height
                self.current = None;
                self.end_session();
            } else {
                self.settle();
            }
            return;
        }
        self.current = Some(shape);
        self.events.push(GameEvent::ShapeMoved);
        if self.is_touching_below(&shape) {
            self.settle();
        }
    }

    /// Drop to the last legal row and notify; landing itself happens when
    /// the driver re-invokes [`Game::lower`], so the settle path is uniform
    pub fn hard_drop(&mut self) {
        let Some(mut shape) = self.active() else { return };
        while !self.is_illegal_position(&shape) {
            shape.shift(0, 1);
        }
        shape.shift(0, -1);
        self.current = Some(shape);
        self.events.push(GameEvent::ShapeDropped);
    }

    /// Copy the current shape's blocks into the grid, clear the active slot,
    /// and resolve line clears
    pub fn settle(&mut self) {
        if self.phase != Phase::Falling {
            return;
        }
        let Some(shape) = self.current.take() else { return };
        for block in shape.blocks() {
            self.grid.set(block.column, block.row, Some(*block));
        }
        self.events.push(GameEvent::ShapeLanded);
        self.resolve_line_clears();
    }

    /// Scan rows top to bottom, clearing full rows and dropping remnant rows
    /// as each clear is discovered, then score and spawn the next pair.
    ///
    /// Gravity is applied incrementally per discovered clear, not as one
    /// final shift; the two are not equivalent for multi-row clears with
    /// gaps, and the incremental order is the ruleset.
    fn resolve_line_clears(&mut self) {
        let mut cleared: Vec<Vec<Block>> = Vec::new();
        let mut remnants: Vec<Vec<Block>> = Vec::new();

        for row in 0..GRID_ROWS as i8 {
            let row_blocks = self.grid.row_blocks(row);
            if row_blocks.len() == GRID_COLUMNS as usize {
                for block in &row_blocks {
                    self.grid.set(block.column, block.row, None);
                }
                // every remnant row recorded so far drops one row,
                // bottom-most remnant first
                for remnant in remnants.iter_mut().rev() {
                    for block in remnant.iter_mut() {
                        self.grid.set(block.column, block.row, None);
                        block.row += 1;
                        self.grid.set(block.column, block.row, Some(*block));
                    }
                }
                cleared.push(row_blocks);
            } else if !row_blocks.is_empty() {
                remnants.push(row_blocks);
            }
        }

        if !cleared.is_empty() {
            self.score += scoring::points_for_clear(cleared.len(), self.level);
            if scoring::crossed_level_threshold(self.score, self.level) {
                self.level += 1;
                self.events.push(GameEvent::LevelUp { level: self.level });
            }
        }

        self.spawn_next_pair();
        self.events.push(GameEvent::LinesCleared { cleared, remnants });
    }

    /// Promote next to the start anchor and draw a fresh preview shape; an
    /// illegal start position ends the session instead of starting the shape
    fn spawn_next_pair(&mut self) {
        if self.phase != Phase::Falling {
            return;
        }
        let mut promoted = match self.next.take() {
            Some(shape) => shape,
            None => self.random_shape(PREVIEW_COLUMN, PREVIEW_ROW),
        };
        promoted.move_to(START_COLUMN, START_ROW);
        self.next = Some(self.random_shape(PREVIEW_COLUMN, PREVIEW_ROW));
        if self.is_illegal_position(&promoted) {
            self.end_session();
        } else {
            self.current = Some(promoted);
        }
    }

    /// Copy of the current shape when the session accepts mutators
    fn active(&self) -> Option<Shape> {
        if self.phase != Phase::Falling {
            return None;
        }
        self.current
    }

    /// Uniform draws over the fixed enumerations: kind, then angle, then
    /// color (scripted sources rely on this order)
    fn random_shape(&mut self, column: i8, row: i8) -> Shape {
        let kind =
            ShapeKind::ALL[self.rng.next_range(ShapeKind::ALL.len() as u32) as usize];
        let angle =
            Angle::ALL[self.rng.next_range(Angle::ALL.len() as u32) as usize];
        let color = BlockColor::ALL
            [self.rng.next_range(BlockColor::ALL.len() as u32) as usize];
        Shape::new(kind, angle, color, column, row)
    }
}
