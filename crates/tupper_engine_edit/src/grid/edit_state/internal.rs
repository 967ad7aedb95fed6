//! Internal setters for the grid editor
//!
//! These methods are called by undo operations to directly modify state
//! without creating new undo entries. They should not be called directly
//! by user code.

use tupper_engine::Result;

use super::{GridEditState, GridSnapshot};

impl GridEditState {
    /// Replace `k` and pixels together (internal, no undo)
    pub(crate) fn set_snapshot_internal(&mut self, snapshot: GridSnapshot) {
        self.k = snapshot.k;
        self.pixels = snapshot.pixels;
    }

    /// Set one cell along with the `k` it encodes to (internal, no undo)
    pub(crate) fn set_cell_internal(&mut self, x: i32, y: i32, value: bool, k: &str) -> Result<()> {
        self.pixels.set(x, y, value)?;
        self.k = k.to_string();
        Ok(())
    }
}
