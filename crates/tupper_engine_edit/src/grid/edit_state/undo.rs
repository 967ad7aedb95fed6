//! Undo and redo of grid edits
//!
//! An undo entry always carries `k` and the pixels it belongs to. A paint
//! gesture opens a group on press and collapses it on release, so a whole
//! stroke comes back with one undo.

use tupper_engine::Result;

use crate::grid::undo_stack::GridUndoStack;
use crate::grid::{GridOperationType, GridUndoOp, GridUndoState};

use super::{GridAtomicUndoGuard, GridEditState};

impl GridEditState {
    /// Open a group of cell edits that undo as one step
    #[must_use]
    pub fn begin_atomic_undo(&mut self, description: impl Into<String>) -> GridAtomicUndoGuard {
        self.begin_typed_atomic_undo(description, GridOperationType::Unknown)
    }

    /// Same as [`GridEditState::begin_atomic_undo`], tagged with the kind of edit
    #[must_use]
    pub fn begin_typed_atomic_undo(&mut self, description: impl Into<String>, operation_type: GridOperationType) -> GridAtomicUndoGuard {
        let base_count = self.undo_stack.undo_len();
        GridAtomicUndoGuard::new(description.into(), base_count, operation_type)
    }

    /// Apply `op` and record it; a new edit drops whatever could be redone
    pub(crate) fn push_undo_action(&mut self, op: GridUndoOp) -> Result<()> {
        op.redo(self)?;
        self.undo_stack.push(op);
        Ok(())
    }

    /// Collapse everything recorded since `base_count` into one entry.
    ///
    /// A gesture that changed nothing leaves no entry behind.
    pub fn end_atomic_undo(&mut self, base_count: usize, description: String, operation_type: GridOperationType) {
        if base_count >= self.undo_stack.undo_len() {
            return;
        }
        let operations = self.undo_stack.drain_from(base_count);
        self.undo_stack.create_atomic(description, operations, operation_type);
    }

    pub fn undo_stack_len(&self) -> usize {
        self.undo_stack.undo_len()
    }

    pub fn redo_stack_len(&self) -> usize {
        self.undo_stack.redo_len()
    }

    pub fn undo_stack(&self) -> &GridUndoStack {
        &self.undo_stack
    }
}

// undo pushes onto the redo stack and redo back onto the undo stack, keeping
// the rest of the redo stack for repeated redo

impl GridUndoState for GridEditState {
    fn undo_description(&self) -> Option<String> {
        self.undo_stack.undo_description()
    }

    fn can_undo(&self) -> bool {
        self.undo_stack.can_undo()
    }

    fn undo(&mut self) -> Result<()> {
        let Some(op) = self.undo_stack.pop_undo() else {
            return Ok(());
        };
        let result = op.undo(self);
        if let Err(err) = &result {
            log::warn!("undo of '{}' failed: {err}", op.get_description());
        }
        self.undo_stack.push_redo(op);
        result
    }

    fn redo_description(&self) -> Option<String> {
        self.undo_stack.redo_description()
    }

    fn can_redo(&self) -> bool {
        self.undo_stack.can_redo()
    }

    fn redo(&mut self) -> Result<()> {
        let Some(op) = self.undo_stack.pop_redo() else {
            return Ok(());
        };
        let result = op.redo(self);
        if let Err(err) = &result {
            log::warn!("redo of '{}' failed: {err}", op.get_description());
        }
        self.undo_stack.push_undone(op);
        result
    }
}
