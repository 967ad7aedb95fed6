//! Replacing the whole grid from typed input
//!
//! Both operations validate and convert before touching any state; a
//! rejected input leaves `k` and pixels exactly as they were.

use tupper_engine::{EngineError, Result, codec};

use crate::grid::{GridSource, GridUndoOp};

use super::{GridEditState, GridSnapshot};

impl GridEditState {
    /// Replace the grid from a typed decimal `k`.
    ///
    /// Fails with `InvalidInput` unless `input` is an integer of at least 1.
    pub fn set_from_decimal(&mut self, input: &str) -> Result<()> {
        let new = self.validated_decimal(input)?;
        let op = GridUndoOp::ReplaceGrid {
            source: GridSource::Decimal,
            old: self.snapshot(),
            new,
        };
        self.push_undo_action(op)
    }

    /// Replace the grid from typed binary digits of the quotient.
    ///
    /// Any bit string is accepted, including all zeros; `k` is re-derived
    /// from the resulting grid.
    pub fn set_from_binary(&mut self, input: &str) -> Result<()> {
        let pixels = codec::decode_binary(input)?;
        let k = codec::encode(&pixels);
        let op = GridUndoOp::ReplaceGrid {
            source: GridSource::Binary,
            old: self.snapshot(),
            new: GridSnapshot { k, pixels },
        };
        self.push_undo_action(op)
    }

    pub(crate) fn validated_decimal(&self, input: &str) -> Result<GridSnapshot> {
        if codec::parse_decimal(input)?.bits() == 0 {
            return Err(EngineError::invalid_input("k must be greater than 0"));
        }
        let k = input.trim().to_string();
        let pixels = codec::decode(&k)?;
        Ok(GridSnapshot { k, pixels })
    }
}
