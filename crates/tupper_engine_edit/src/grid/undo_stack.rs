//! Undo stack for the grid editor

use serde::{Deserialize, Serialize};
use tupper_engine::Result;

use super::{GridOperationType, GridUndoOp};

/// Trait for types that support undo/redo operations
pub trait GridUndoState {
    /// Get description of the next undo operation
    fn undo_description(&self) -> Option<String>;

    /// Check if undo is available
    fn can_undo(&self) -> bool;

    /// Perform undo operation
    fn undo(&mut self) -> Result<()>;

    /// Get description of the next redo operation
    fn redo_description(&self) -> Option<String>;

    /// Check if redo is available
    fn can_redo(&self) -> bool;

    /// Perform redo operation
    fn redo(&mut self) -> Result<()>;
}

/// Undo and redo stacks of the grid editor
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GridUndoStack {
    undo_stack: Vec<GridUndoOp>,
    redo_stack: Vec<GridUndoOp>,
}

impl GridUndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new operation; this invalidates the redo stack
    pub fn push(&mut self, op: GridUndoOp) {
        self.undo_stack.push(op);
        self.redo_stack.clear();
    }

    /// Push an operation that was just redone, keeping the remaining redo stack
    pub(crate) fn push_undone(&mut self, op: GridUndoOp) {
        self.undo_stack.push(op);
    }

    pub fn pop_undo(&mut self) -> Option<GridUndoOp> {
        self.undo_stack.pop()
    }

    pub fn push_redo(&mut self, op: GridUndoOp) {
        self.redo_stack.push(op);
    }

    pub fn pop_redo(&mut self) -> Option<GridUndoOp> {
        self.redo_stack.pop()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.last().map(|op| op.get_description())
    }

    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(|op| op.get_description())
    }

    /// Remove and return all undo operations from `base_count` on
    pub fn drain_from(&mut self, base_count: usize) -> Vec<GridUndoOp> {
        let base_count = base_count.min(self.undo_stack.len());
        self.undo_stack.drain(base_count..).collect()
    }

    /// Push `operations` back as a single atomic step
    pub fn create_atomic(&mut self, description: String, operations: Vec<GridUndoOp>, operation_type: GridOperationType) {
        if operations.is_empty() {
            return;
        }
        self.undo_stack.push(GridUndoOp::Atomic {
            description,
            operations,
            operation_type,
        });
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
