//! Grid editing module
//!
//! Provides the model layer for editing a Tupper grid:
//! - `GridEditState` - owns `k` and the pixel matrix and keeps them consistent
//! - Undo/redo operations for every edit
//! - `PaintTool` - the press/drag/release gesture that turns pointer input into cell edits
//!
//! Front ends only read from the state and call its methods to modify it.

mod edit_state;
mod paint;
mod undo_operation;
mod undo_stack;

pub use edit_state::*;
pub use paint::{PaintState, PaintTool};
pub use undo_operation::{GridOperationType, GridSource, GridUndoOp};
pub use undo_stack::{GridUndoStack, GridUndoState};
