//! Cell level operations for the grid editor
//!
//! - Single cell editing (set_cell, toggle_cell)
//! - Clear

use tupper_engine::{EngineError, PixelMatrix, Result, codec};

use crate::grid::GridUndoOp;

use super::{GridEditState, GridSnapshot};

impl GridEditState {
    // ═══════════════════════════════════════════════════════════════════════
    // Cell Editing
    // ═══════════════════════════════════════════════════════════════════════

    /// Set a single cell and re-derive `k`.
    ///
    /// Fails with `OutOfBounds` outside `[0, 106) x [0, 17)`, leaving the state
    /// untouched. Every write makes `k` canonical again, even when the cell
    /// already holds `value`: a typed `"18"` or the blank `k` after `clear()`
    /// becomes `encode(pixels)`. Only a write that changes neither is a no-op.
    pub fn set_cell(&mut self, x: i32, y: i32, value: bool) -> Result<()> {
        let Some(old_value) = self.pixels.get(x, y) else {
            return Err(EngineError::out_of_bounds(x, y));
        };

        let new_k = if old_value == value {
            let canonical = codec::encode(&self.pixels);
            if canonical == self.k {
                return Ok(());
            }
            canonical
        } else {
            let mut new_pixels = self.pixels.clone();
            new_pixels.set(x, y, value)?;
            codec::encode(&new_pixels)
        };

        let op = GridUndoOp::SetCell {
            x,
            y,
            old_value,
            new_value: value,
            old_k: self.k.clone(),
            new_k,
        };
        self.push_undo_action(op)
    }

    /// Flip a single cell
    pub fn toggle_cell(&mut self, x: i32, y: i32) -> Result<()> {
        let Some(current) = self.pixels.get(x, y) else {
            return Err(EngineError::out_of_bounds(x, y));
        };
        self.set_cell(x, y, !current)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Clear
    // ═══════════════════════════════════════════════════════════════════════

    /// Clear every cell and blank `k`.
    ///
    /// `k` becomes `""` rather than `"0"`: the decimal view shows an empty box.
    pub fn clear(&mut self) -> Result<()> {
        if self.k.is_empty() && self.pixels.is_clear() {
            return Ok(());
        }
        let op = GridUndoOp::Clear { old: self.snapshot() };
        self.push_undo_action(op)
    }

    pub(crate) fn cleared_snapshot() -> GridSnapshot {
        GridSnapshot {
            k: String::new(),
            pixels: PixelMatrix::new(),
        }
    }
}
