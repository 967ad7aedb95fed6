//! Grid edit state module structure
//!
//! - `state.rs` - Struct definition, constructors, getters
//! - `cell_operations.rs` - Single cell edits and clear
//! - `value_operations.rs` - Replacing the grid from decimal or binary input
//! - `undo.rs` - Undo/redo system
//! - `internal.rs` - Internal setters for undo operations

mod atomic_undo_guard;

mod state;

mod cell_operations;
mod internal;
mod undo;
mod value_operations;

pub use atomic_undo_guard::GridAtomicUndoGuard;
pub use state::{GridEditState, GridSnapshot};
