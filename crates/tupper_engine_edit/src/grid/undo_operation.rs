//! Undo operations for grid editing
//!
//! Every operation restores `k` and pixels together, so undo and redo can
//! never leave the two representations out of step.

use serde::{Deserialize, Serialize};
use tupper_engine::Result;

use super::{GridEditState, GridSnapshot};

/// Type of operation for grouping related undos
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridOperationType {
    /// Unknown/default operation
    Unknown,
    /// Cell editing (painting, clearing)
    EditPixels,
    /// Whole grid replaced from typed input
    Replace,
}

/// Which text view a replaced grid was typed into
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridSource {
    Decimal,
    Binary,
}

/// Serializable undo operation enum for grid editing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridUndoOp {
    /// Atomic group of operations
    Atomic {
        description: String,
        operations: Vec<GridUndoOp>,
        operation_type: GridOperationType,
    },

    /// Single cell changed, with `k` before and after
    SetCell {
        x: i32,
        y: i32,
        old_value: bool,
        new_value: bool,
        old_k: String,
        new_k: String,
    },

    /// Whole grid replaced from decimal or binary input
    ReplaceGrid { source: GridSource, old: GridSnapshot, new: GridSnapshot },

    /// All cells cleared and `k` blanked
    Clear { old: GridSnapshot },
}

impl GridUndoOp {
    /// Get a description of this operation for display
    pub fn get_description(&self) -> String {
        match self {
            GridUndoOp::Atomic { description, .. } => description.clone(),
            GridUndoOp::SetCell { new_value, .. } => {
                if *new_value {
                    "Set cell".to_string()
                } else {
                    "Erase cell".to_string()
                }
            }
            GridUndoOp::ReplaceGrid { source, .. } => match source {
                GridSource::Decimal => "Enter k".to_string(),
                GridSource::Binary => "Enter binary".to_string(),
            },
            GridUndoOp::Clear { .. } => "Clear grid".to_string(),
        }
    }

    /// Get the operation type for grouping
    pub fn get_operation_type(&self) -> GridOperationType {
        match self {
            GridUndoOp::Atomic { operation_type, .. } => *operation_type,
            GridUndoOp::SetCell { .. } => GridOperationType::EditPixels,
            GridUndoOp::ReplaceGrid { .. } => GridOperationType::Replace,
            GridUndoOp::Clear { .. } => GridOperationType::EditPixels,
        }
    }

    /// Undo this operation
    pub fn undo(&self, state: &mut GridEditState) -> Result<()> {
        match self {
            GridUndoOp::Atomic { operations, .. } => {
                for op in operations.iter().rev() {
                    op.undo(state)?;
                }
                Ok(())
            }

            GridUndoOp::SetCell { x, y, old_value, old_k, .. } => state.set_cell_internal(*x, *y, *old_value, old_k),

            GridUndoOp::ReplaceGrid { old, .. } | GridUndoOp::Clear { old } => {
                state.set_snapshot_internal(old.clone());
                Ok(())
            }
        }
    }

    /// Redo this operation
    pub fn redo(&self, state: &mut GridEditState) -> Result<()> {
        match self {
            GridUndoOp::Atomic { operations, .. } => {
                for op in operations.iter() {
                    op.redo(state)?;
                }
                Ok(())
            }

            GridUndoOp::SetCell { x, y, new_value, new_k, .. } => state.set_cell_internal(*x, *y, *new_value, new_k),

            GridUndoOp::ReplaceGrid { new, .. } => {
                state.set_snapshot_internal(new.clone());
                Ok(())
            }

            GridUndoOp::Clear { .. } => {
                state.set_snapshot_internal(GridEditState::cleared_snapshot());
                Ok(())
            }
        }
    }
}
