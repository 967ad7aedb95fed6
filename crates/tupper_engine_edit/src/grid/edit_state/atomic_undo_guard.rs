//! Grid atomic undo guard

use crate::grid::GridOperationType;

use super::GridEditState;

/// Marks the start of a group of operations that undo/redo as one step.
///
/// Close the group with [`GridAtomicUndoGuard::end`] or
/// [`GridEditState::end_atomic_undo`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridAtomicUndoGuard {
    base_count: usize,
    description: String,
    operation_type: GridOperationType,
}

impl GridAtomicUndoGuard {
    pub fn new(description: String, base_count: usize, operation_type: GridOperationType) -> Self {
        Self {
            base_count,
            description,
            operation_type,
        }
    }

    /// Undo stack length when the group was opened
    pub fn base_count(&self) -> usize {
        self.base_count
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn operation_type(&self) -> GridOperationType {
        self.operation_type
    }

    /// Collapse everything pushed since the group was opened into one undo step
    pub fn end(self, state: &mut GridEditState) {
        state.end_atomic_undo(self.base_count, self.description, self.operation_type);
    }
}
