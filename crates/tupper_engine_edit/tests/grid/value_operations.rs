//! Decimal and binary entry tests

use pretty_assertions::assert_eq;
use tupper_engine_edit::TUPPER_K;
use tupper_engine_edit::codec;
use tupper_engine_edit::grid::GridEditState;

use crate::helpers::{assert_consistent, assert_unchanged};

#[test]
fn test_new_shows_tupper_k() {
    let state = GridEditState::new();

    assert_eq!(state.k(), TUPPER_K);
    assert_eq!(state.pixels(), &codec::decode(TUPPER_K).unwrap());
}

#[test]
fn test_from_k() {
    let state = GridEditState::from_k("85").unwrap();
    assert_eq!(state.k(), "85");
    assert_eq!(state.display_binary(), "101");

    assert!(GridEditState::from_k("0").unwrap_err().is_invalid_input());
}

#[test]
fn test_set_from_decimal() {
    let mut state = GridEditState::new();

    state.set_from_decimal("17").unwrap();

    assert_eq!(state.k(), "17");
    assert_eq!(state.pixels().count_set(), 1);
    assert_eq!(state.cell(0, 16), Some(true));
}

#[test]
fn test_set_from_decimal_keeps_typed_k() {
    let mut state = GridEditState::new();

    // the remainder stays in k until the grid is edited
    state.set_from_decimal("18").unwrap();
    assert_eq!(state.k(), "18");
    assert_eq!(state.display_binary(), "1");

    state.set_cell(0, 15, true).unwrap();
    assert_eq!(state.k(), "51");
    assert_consistent(&state);
}

#[test]
fn test_set_from_decimal_trims_whitespace() {
    let mut state = GridEditState::new();

    state.set_from_decimal("  34\n").unwrap();

    assert_eq!(state.k(), "34");
}

#[test]
fn test_set_from_decimal_rejects_invalid() {
    let mut state = GridEditState::new();
    let before = state.snapshot();

    for input in ["0", "000", "abc", "", "-17", "1.5"] {
        let err = state.set_from_decimal(input).unwrap_err();
        assert!(err.is_invalid_input(), "input {input:?}");
        assert_unchanged(&state, &before);
    }
}

#[test]
fn test_set_from_binary() {
    let mut state = GridEditState::new();

    state.set_from_binary("101").unwrap();

    assert_eq!(state.k(), "85");
    assert_eq!(state.display_binary(), "101");
    assert_consistent(&state);
}

#[test]
fn test_set_from_binary_accepts_zero() {
    let mut state = GridEditState::new();

    state.set_from_binary("0000").unwrap();

    assert_eq!(state.k(), "0");
    assert!(state.pixels().is_clear());
    assert_eq!(state.display_binary(), "0");
}

#[test]
fn test_set_from_binary_rejects_non_bits() {
    let mut state = GridEditState::new();
    let before = state.snapshot();

    assert!(state.set_from_binary("1021").unwrap_err().is_invalid_input());

    assert_unchanged(&state, &before);
}

#[test]
fn test_binary_view_round_trips_tupper_k() {
    let mut state = GridEditState::new();
    let binary = state.display_binary();

    state.set_from_binary(&binary).unwrap();

    assert_eq!(state.k(), TUPPER_K);
}

#[test]
fn test_snapshot_serializes() {
    let state = GridEditState::from_k("85").unwrap();

    let json = serde_json::to_string(&state.snapshot()).unwrap();
    let snapshot: tupper_engine_edit::grid::GridSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(snapshot, state.snapshot());
}
