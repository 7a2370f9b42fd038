// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use tally_core::{Board, Config, Cost, CurrencyInput, Locale, TaskForm, TaskId};

/// Creates a test configuration with the given highlight threshold in whole units.
#[must_use]
pub fn test_config(threshold: u64) -> Config {
    Config {
        locale: Locale::EnUs,
        highlight_threshold: Cost::from_units(threshold),
    }
}

/// Creates a create-mode form with every field filled in.
///
/// # Example
///
/// ```ignore
/// let form = filled_form(&board, "Buy milk", 550, "2024-01-10");
/// ```
#[must_use]
pub fn filled_form(board: &Board, name: &str, cents: u64, due: &str) -> TaskForm {
    let mut form = board.new_form();
    form.name = name.to_string();
    form.cost = CurrencyInput::with_value(board.config().locale, Cost::from_cents(cents));
    form.due = due.to_string();
    form
}

/// Creates a board holding one task per name, in the given order.
///
/// # Panics
///
/// Panics if two names collide.
#[must_use]
pub fn board_with(names: &[&str]) -> Board {
    let mut board = Board::new(test_config(1000));
    for name in names {
        let form = filled_form(&board, name, 100, "2024-01-10");
        board.submit(&form).expect("fixture names must be unique");
    }
    board
}

/// Finds the id of the task with the given name.
///
/// # Panics
///
/// Panics if no task has this name.
#[must_use]
pub fn id_of(board: &Board, name: &str) -> TaskId {
    board
        .tasks()
        .iter()
        .find(|a| a.name() == name)
        .map(|a| a.id())
        .unwrap_or_else(|| panic!("no task named {name}"))
}
