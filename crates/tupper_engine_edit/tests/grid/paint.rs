//! Paint gesture tests

use pretty_assertions::assert_eq;
use tupper_engine_edit::grid::{GridEditState, GridUndoState, PaintState, PaintTool};

use crate::helpers::{assert_consistent, create_cleared_state};

#[test]
fn test_press_paints_and_starts_gesture() {
    let mut state = create_cleared_state();
    let mut tool = PaintTool::new();

    assert!(tool.press(&mut state, 4, 4, false).unwrap());

    assert_eq!(tool.state(), PaintState::Painting);
    assert_eq!(state.cell(4, 4), Some(true));
    assert_consistent(&state);
}

#[test]
fn test_drag_while_idle_is_ignored() {
    let mut state = create_cleared_state();
    let mut tool = PaintTool::new();

    assert!(!tool.drag(&mut state, 4, 4, false).unwrap());

    assert!(state.pixels().is_clear());
}

#[test]
fn test_drag_skips_repeated_cell() {
    let mut state = create_cleared_state();
    let mut tool = PaintTool::new();

    tool.press(&mut state, 1, 1, false).unwrap();
    assert!(tool.drag(&mut state, 2, 1, false).unwrap());
    // blend would toggle the cell back if the repeat was not skipped
    assert!(!tool.drag(&mut state, 2, 1, false).unwrap());

    assert_eq!(state.cell(2, 1), Some(true));
    assert_eq!(tool.last_cell(), Some((2, 1)));
}

#[test]
fn test_blend_toggles_cells() {
    let mut state = create_cleared_state();
    state.set_cell(3, 3, true).unwrap();
    let mut tool = PaintTool::new();
    assert!(tool.blend());

    tool.press(&mut state, 3, 3, false).unwrap();
    tool.release(&mut state);

    assert_eq!(state.cell(3, 3), Some(false));
}

#[test]
fn test_draw_mode_sets_cells() {
    let mut state = create_cleared_state();
    state.set_cell(3, 3, true).unwrap();
    let mut tool = PaintTool::new();
    tool.toggle_blend();

    assert!(!tool.press(&mut state, 3, 3, false).unwrap());
    assert!(tool.drag(&mut state, 4, 3, false).unwrap());
    tool.release(&mut state);

    assert_eq!(state.cell(3, 3), Some(true));
    assert_eq!(state.cell(4, 3), Some(true));
}

#[test]
fn test_erase_clears_cells() {
    let mut state = create_cleared_state();
    state.set_cell(3, 3, true).unwrap();
    let mut tool = PaintTool::new();

    tool.press(&mut state, 3, 3, true).unwrap();
    assert!(!tool.drag(&mut state, 4, 3, true).unwrap());
    tool.release(&mut state);

    assert!(state.pixels().is_clear());
    assert_eq!(state.k(), "0");
}

#[test]
fn test_release_ends_gesture() {
    let mut state = create_cleared_state();
    let mut tool = PaintTool::new();

    tool.press(&mut state, 0, 0, false).unwrap();
    tool.release(&mut state);

    assert_eq!(tool.state(), PaintState::Idle);
    assert!(!tool.drag(&mut state, 1, 0, false).unwrap());
    assert_eq!(state.cell(1, 0), Some(false));
}

#[test]
fn test_cancel_keeps_committed_edits() {
    let mut state = create_cleared_state();
    let mut tool = PaintTool::new();

    tool.press(&mut state, 0, 0, false).unwrap();
    tool.drag(&mut state, 1, 0, false).unwrap();
    tool.cancel(&mut state);

    assert!(!tool.is_painting());
    assert_eq!(state.pixels().count_set(), 2);
    assert_consistent(&state);
}

#[test]
fn test_gesture_is_one_undo_step() {
    let mut state = create_cleared_state();
    let base_len = state.undo_stack_len();
    let mut tool = PaintTool::new();

    tool.press(&mut state, 0, 16, false).unwrap();
    for x in 1..10 {
        tool.drag(&mut state, x, 16, false).unwrap();
    }
    tool.release(&mut state);

    assert_eq!(state.pixels().count_set(), 10);
    assert_eq!(state.undo_stack_len(), base_len + 1);
    assert_eq!(state.undo_description(), Some("Paint".to_string()));

    state.undo().unwrap();
    assert!(state.pixels().is_clear());
    assert_eq!(state.k(), "");
}

#[test]
fn test_outside_cells_are_ignored() {
    let mut state = create_cleared_state();
    let mut tool = PaintTool::new();

    assert!(!tool.press(&mut state, -1, 0, false).unwrap());
    assert!(!tool.drag(&mut state, 106, 0, false).unwrap());
    assert!(!tool.drag(&mut state, 0, 17, false).unwrap());
    assert!(tool.drag(&mut state, 0, 0, false).unwrap());
    tool.release(&mut state);

    assert_eq!(state.pixels().count_set(), 1);
}

#[test]
fn test_press_while_painting_closes_previous_gesture() {
    let mut state = create_cleared_state();
    let base_len = state.undo_stack_len();
    let mut tool = PaintTool::new();

    tool.press(&mut state, 0, 0, false).unwrap();
    tool.press(&mut state, 5, 5, false).unwrap();
    tool.release(&mut state);

    assert_eq!(state.undo_stack_len(), base_len + 2);
}

#[test]
fn test_unchanged_cell_still_rederives_k() {
    let mut state = GridEditState::new();
    state.set_from_decimal("18").unwrap();
    let mut tool = PaintTool::new();
    tool.set_blend(false);

    assert!(!tool.press(&mut state, 0, 16, false).unwrap());
    tool.release(&mut state);

    assert_eq!(state.k(), "17");
    assert_consistent(&state);
}
