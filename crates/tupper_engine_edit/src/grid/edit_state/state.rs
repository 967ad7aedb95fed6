//! Grid Edit State
//!
//! The session state of the editor: the canonical `k` string and the pixel
//! matrix. This struct is the only writer of both; every mutation computes
//! the new pair first and commits them together, so a reader never sees
//! pixels without the matching `k`.
//!
//! `k` is the user facing form, the matrix the form used for spatial
//! editing. Two asymmetries are kept on purpose:
//! - `clear()` leaves `k` blank (`""`), not `"0"`
//! - only fresh decimal entry rejects values below 1; derived values such
//!   as `"0"` for an all-clear grid are never re-validated
//!
//! # Undo/Redo System
//!
//! All modifications go through the undo system:
//! - Single operations push one item to the undo stack
//! - Paint gestures use `begin_atomic_undo()`/`end()` to group their cell edits
//! - Every undo item restores `k` and pixels together

use serde::{Deserialize, Serialize};
use tupper_engine::{PixelMatrix, Result, TUPPER_K, codec};

use crate::grid::undo_stack::GridUndoStack;

/// Read-only copy of the session state for rendering
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    /// Canonical decimal `k`, blank after a clear
    pub k: String,
    pub pixels: PixelMatrix,
}

/// Main state container for grid editing
#[derive(Debug)]
pub struct GridEditState {
    /// Canonical decimal `k`
    pub(crate) k: String,

    /// Canonical pixel grid
    pub(crate) pixels: PixelMatrix,

    pub(crate) undo_stack: GridUndoStack,
}

impl Default for GridEditState {
    fn default() -> Self {
        Self::new()
    }
}

impl GridEditState {
    // ═══════════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════════

    /// Create a session showing Tupper's formula
    pub fn new() -> Self {
        Self::from_parts(TUPPER_K.to_string(), codec::decode(TUPPER_K).unwrap_or_default())
    }

    /// Create a session from a caller supplied `k`, decoded once.
    ///
    /// `k` is validated like decimal entry: it must be an integer of at least 1.
    pub fn from_k(k: &str) -> Result<Self> {
        let mut state = Self::from_parts(String::new(), PixelMatrix::new());
        let snapshot = state.validated_decimal(k)?;
        state.set_snapshot_internal(snapshot);
        Ok(state)
    }

    /// Create a session from a pixel grid, deriving `k`
    pub fn from_pixels(pixels: PixelMatrix) -> Self {
        let k = codec::encode(&pixels);
        Self::from_parts(k, pixels)
    }

    fn from_parts(k: String, pixels: PixelMatrix) -> Self {
        Self {
            k,
            pixels,
            undo_stack: GridUndoStack::new(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    /// Canonical decimal `k`; blank after `clear()`
    pub fn k(&self) -> &str {
        &self.k
    }

    pub fn pixels(&self) -> &PixelMatrix {
        &self.pixels
    }

    /// Cell value at `(x, y)`, `None` outside the grid
    pub fn cell(&self, x: i32, y: i32) -> Option<bool> {
        self.pixels.get(x, y)
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            k: self.k.clone(),
            pixels: self.pixels.clone(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Display transforms (never mutate)
    // ═══════════════════════════════════════════════════════════════════════

    /// Unpadded binary of `floor(k / 17)` for the binary text view.
    ///
    /// Blank while `k` is blank.
    pub fn display_binary(&self) -> String {
        if self.k.trim().is_empty() {
            return String::new();
        }
        match codec::quotient_binary(&self.k) {
            Ok(binary) => binary,
            Err(err) => {
                log::warn!("k is not a decimal integer: {err}");
                String::new()
            }
        }
    }

    /// `k` for the decimal text view
    pub fn display_decimal(&self) -> &str {
        &self.k
    }
}
