// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The reference walkthroughs of a session, step by step.

use chrono::NaiveDate;
use tally_core::{Board, Cost, DeleteConfirmation, Direction, FormError};

use crate::common::{assert_dense_order, assert_names, board_with, filled_form, id_of, test_config};

#[test]
fn scenario_add_to_empty_board() {
    let mut board = Board::new(test_config(1000));
    let form = filled_form(&board, "Buy milk", 550, "2024-01-10");
    board.submit(&form).unwrap();

    let tasks = board.tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id().to_string(), "1");
    assert_eq!(tasks[0].order(), 1);
    assert_eq!(tasks[0].name(), "Buy milk");
    assert_eq!(tasks[0].cost(), Cost::from_cents(550));
    assert_eq!(tasks[0].due(), NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
}

#[test]
fn scenario_case_insensitive_duplicate_is_rejected() {
    let mut board = board_with(&["Buy milk"]);
    let before = board.tasks().to_vec();

    let form = filled_form(&board, "buy milk", 100, "2024-02-01");
    let err = board.submit(&form).unwrap_err();

    assert_eq!(
        err,
        FormError::DuplicateName {
            name: "Buy milk".to_string()
        }
    );
    assert_eq!(board.tasks(), before.as_slice());
}

#[test]
fn scenario_move_second_task_up() {
    let mut board = board_with(&["A", "B", "C"]);
    assert!(board.move_task(id_of(&board, "B"), Direction::Up));

    assert_names(&board, &["B", "A", "C"]);
    assert_dense_order(&board);
}

#[test]
fn scenario_delete_then_cancel() {
    let mut board = board_with(&["A", "B"]);
    let before = board.tasks().to_vec();

    assert!(board.request_delete(id_of(&board, "A")));
    assert!(board.cancel_delete());

    assert_eq!(board.tasks(), before.as_slice());
    assert_eq!(board.confirmation(), &DeleteConfirmation::Idle);
}

#[test]
fn scenario_delete_then_confirm() {
    let mut board = board_with(&["A", "B"]);

    assert!(board.request_delete(id_of(&board, "A")));
    let removed = board.confirm_delete().unwrap();

    assert_eq!(removed.name(), "A");
    assert_names(&board, &["B"]);
    assert_eq!(board.tasks()[0].order(), 1);
    assert_eq!(board.confirmation(), &DeleteConfirmation::Idle);
}
