//! Paint gesture for the grid editor
//!
//! Turns pointer input, already resolved to cell coordinates, into
//! `set_cell` calls:
//! - `press` starts painting and paints the cell under the pointer
//! - `drag` paints while painting, at most one cell per event, skipping the
//!   cell that was touched last
//! - `release`/`cancel` stop painting immediately
//!
//! Every touched cell is written, so `k` is canonical after the first cell
//! of a gesture. Each cell edit commits as it is issued; a gesture is
//! grouped into one undo step when it ends. Cells outside the grid are
//! rejected here, so a gesture never surfaces `OutOfBounds`.

use tupper_engine::Result;

use super::{GridAtomicUndoGuard, GridEditState, GridOperationType};

/// Whether a paint gesture is in progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaintState {
    #[default]
    Idle,
    Painting,
}

/// Press/drag/release state machine of the grid canvas
#[derive(Debug)]
pub struct PaintTool {
    state: PaintState,
    last_cell: Option<(i32, i32)>,
    /// Strokes toggle cells instead of setting them
    blend: bool,
    undo_guard: Option<GridAtomicUndoGuard>,
}

impl Default for PaintTool {
    fn default() -> Self {
        Self {
            state: PaintState::Idle,
            last_cell: None,
            blend: true,
            undo_guard: None,
        }
    }
}

impl PaintTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PaintState {
        self.state
    }

    pub fn is_painting(&self) -> bool {
        self.state == PaintState::Painting
    }

    pub fn last_cell(&self) -> Option<(i32, i32)> {
        self.last_cell
    }

    pub fn blend(&self) -> bool {
        self.blend
    }

    pub fn set_blend(&mut self, blend: bool) {
        self.blend = blend;
    }

    pub fn toggle_blend(&mut self) {
        self.blend = !self.blend;
    }

    /// Value a stroke writes over a cell currently holding `current`
    pub fn resolve_value(&self, current: bool, erase: bool) -> bool {
        if erase {
            false
        } else if self.blend {
            !current
        } else {
            true
        }
    }

    /// Start a gesture and paint the pressed cell.
    ///
    /// Returns whether the cell changed.
    pub fn press(&mut self, edit: &mut GridEditState, x: i32, y: i32, erase: bool) -> Result<bool> {
        if self.is_painting() {
            // missed release, close the previous gesture first
            self.release(edit);
        }
        self.state = PaintState::Painting;
        self.undo_guard = Some(edit.begin_typed_atomic_undo("Paint", GridOperationType::EditPixels));
        self.paint(edit, x, y, erase)
    }

    /// Paint the cell under a moving pointer.
    ///
    /// Ignored while idle and when the pointer is still on the last touched cell.
    pub fn drag(&mut self, edit: &mut GridEditState, x: i32, y: i32, erase: bool) -> Result<bool> {
        if !self.is_painting() || self.last_cell == Some((x, y)) {
            return Ok(false);
        }
        self.paint(edit, x, y, erase)
    }

    /// End the gesture; its edits stay committed and undo as one step
    pub fn release(&mut self, edit: &mut GridEditState) {
        self.state = PaintState::Idle;
        self.last_cell = None;
        if let Some(guard) = self.undo_guard.take() {
            guard.end(edit);
        }
    }

    /// Pointer left the canvas; same as [`PaintTool::release`]
    pub fn cancel(&mut self, edit: &mut GridEditState) {
        self.release(edit);
    }

    fn paint(&mut self, edit: &mut GridEditState, x: i32, y: i32, erase: bool) -> Result<bool> {
        self.last_cell = Some((x, y));
        let Some(current) = edit.cell(x, y) else {
            log::debug!("paint at ({x}, {y}) is outside of the grid, ignored");
            return Ok(false);
        };
        let value = self.resolve_value(current, erase);
        // unchanged cells still go through set_cell so `k` is re-derived
        edit.set_cell(x, y, value)?;
        Ok(value != current)
    }
}
