//! Tests for grid editing
//!
//! These tests verify that all edit actions:
//! 1. Keep `k` and the pixel grid consistent
//! 2. Leave the state untouched when they fail
//! 3. Can be undone

mod helpers;

mod paint;
mod undo;
mod value_operations;
