//! Shared test helpers for grid tests

#![allow(dead_code)]

use tupper_engine_edit::codec;
use tupper_engine_edit::grid::{GridEditState, GridSnapshot};

/// A session cleared to an empty grid
pub fn create_cleared_state() -> GridEditState {
    let mut state = GridEditState::new();
    state.clear().unwrap();
    state
}

/// Assert that `k` is exactly what the grid encodes to
pub fn assert_consistent(state: &GridEditState) {
    assert_eq!(state.k(), codec::encode(state.pixels()), "k does not match pixels");
}

/// Assert the session state equals a snapshot taken earlier
pub fn assert_unchanged(state: &GridEditState, before: &GridSnapshot) {
    assert_eq!(&state.snapshot(), before, "state changed");
}
