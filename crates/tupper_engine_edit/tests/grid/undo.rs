//! Undo/redo tests

use pretty_assertions::assert_eq;
use tupper_engine_edit::grid::{GridEditState, GridOperationType, GridUndoState};

use crate::helpers::{assert_consistent, create_cleared_state};

#[test]
fn test_undo_set_cell_restores_k() {
    let mut state = create_cleared_state();
    state.set_cell(0, 16, true).unwrap();
    assert_eq!(state.k(), "17");

    state.undo().unwrap();

    assert_eq!(state.k(), "");
    assert!(state.pixels().is_clear());
}

#[test]
fn test_undo_clear() {
    let mut state = GridEditState::new();
    let before = state.snapshot();

    state.clear().unwrap();
    state.undo().unwrap();

    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_undo_redo_decimal_entry() {
    let mut state = GridEditState::new();
    let before = state.snapshot();

    state.set_from_decimal("85").unwrap();
    assert_eq!(state.undo_description(), Some("Enter k".to_string()));

    state.undo().unwrap();
    assert_eq!(state.snapshot(), before);
    assert!(state.can_redo());

    state.redo().unwrap();
    assert_eq!(state.k(), "85");
    assert_eq!(state.display_binary(), "101");
}

#[test]
fn test_new_edit_clears_redo() {
    let mut state = create_cleared_state();
    state.set_cell(1, 1, true).unwrap();
    state.undo().unwrap();
    assert_eq!(state.redo_stack_len(), 1);

    state.set_cell(2, 2, true).unwrap();

    assert_eq!(state.redo_stack_len(), 0);
}

#[test]
fn test_atomic_group_undoes_as_one() {
    let mut state = create_cleared_state();
    let base_len = state.undo_stack_len();

    let guard = state.begin_typed_atomic_undo("Stroke", GridOperationType::EditPixels);
    state.set_cell(0, 0, true).unwrap();
    state.set_cell(1, 0, true).unwrap();
    state.set_cell(2, 0, true).unwrap();
    guard.end(&mut state);

    assert_eq!(state.undo_stack_len(), base_len + 1);
    assert_eq!(state.undo_description(), Some("Stroke".to_string()));

    state.undo().unwrap();
    assert!(state.pixels().is_clear());
    assert_eq!(state.k(), "");

    state.redo().unwrap();
    assert_eq!(state.pixels().count_set(), 3);
    assert_consistent(&state);
}

#[test]
fn test_empty_atomic_group_pushes_nothing() {
    let mut state = GridEditState::new();

    let guard = state.begin_atomic_undo("Nothing");
    guard.end(&mut state);

    assert!(!state.can_undo());
}

#[test]
fn test_undo_on_empty_stack_is_noop() {
    let mut state = GridEditState::new();
    let before = state.snapshot();

    state.undo().unwrap();
    state.redo().unwrap();

    assert_eq!(state.snapshot(), before);
}
