// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use tally_core::{Board, Task};

/// Asserts that the order values of the board are exactly `1..=N`, in list sequence.
///
/// # Panics
///
/// Panics if an order value is out of place.
pub fn assert_dense_order(board: &Board) {
    let orders: Vec<u32> = board.tasks().iter().map(Task::order).collect();
    let expected: Vec<u32> = (1..=orders.len()).map(|a| a as u32).collect();
    assert_eq!(orders, expected, "order values must be dense and 1-based");
}

/// Asserts the task names of the board, in list sequence.
///
/// # Panics
///
/// Panics if the names differ.
pub fn assert_names(board: &Board, expected: &[&str]) {
    let names: Vec<&str> = board.tasks().iter().map(Task::name).collect();
    assert_eq!(names, expected, "task names mismatch");
}
