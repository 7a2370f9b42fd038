// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Create and edit flows through the form.

use tally_core::{FormError, TaskId};

use crate::common::{assert_dense_order, assert_names, board_with, filled_form, id_of};

#[test]
fn unique_submission_appends_with_next_order() {
    let mut board = board_with(&["A", "B", "C"]);
    for (i, name) in ["D", "E", "F"].into_iter().enumerate() {
        let before = board.tasks().len();
        let form = filled_form(&board, name, 100, "2024-01-10");
        let order = board.submit(&form).unwrap().map(|a| a.order());

        assert_eq!(board.tasks().len(), before + 1);
        assert_eq!(order, Some(before as u32 + 1), "submission #{i}");
    }
    assert_dense_order(&board);
}

#[test]
fn duplicate_of_another_task_leaves_board_unchanged() {
    let mut board = board_with(&["Alpha", "Beta"]);
    let before = board.tasks().to_vec();

    for name in ["alpha", "BETA", "  Beta  "] {
        let form = filled_form(&board, name, 100, "2024-01-10");
        assert!(matches!(
            board.submit(&form),
            Err(FormError::DuplicateName { .. })
        ));
    }
    assert_eq!(board.tasks(), before.as_slice());
}

#[test]
fn edit_with_unchanged_name_succeeds() {
    let mut board = board_with(&["A", "B"]);
    let id = id_of(&board, "B");

    let mut form = board.begin_edit(id).unwrap();
    form.due = "2025-12-31".to_string();
    let task = board.submit(&form).unwrap().unwrap();

    assert_eq!(task.id(), id);
    assert_eq!(task.name(), "B");
    assert_eq!(task.due().to_string(), "2025-12-31");
}

#[test]
fn edit_keeps_id_and_position() {
    let mut board = board_with(&["A", "B", "C"]);
    let id = id_of(&board, "B");

    let mut form = board.begin_edit(id).unwrap();
    form.name = "Bravo".to_string();
    form.cost.set_text("$12.34");
    board.submit(&form).unwrap();

    assert_names(&board, &["A", "Bravo", "C"]);
    let task = &board.tasks()[1];
    assert_eq!(task.id(), id);
    assert_eq!(task.order(), 2);
    assert_eq!(task.cost().to_string(), "12.34");
}

#[test]
fn rejected_form_keeps_its_values() {
    let mut board = board_with(&["A"]);
    let form = filled_form(&board, "a", 4200, "2024-03-01");
    let copy = form.clone();

    assert!(board.submit(&form).is_err());
    assert_eq!(form, copy);
}

#[test]
fn ids_are_never_reused() {
    let mut board = board_with(&["A", "B", "C"]);
    board.request_delete(id_of(&board, "C"));
    board.confirm_delete();

    let form = filled_form(&board, "D", 100, "2024-01-10");
    let id = board.submit(&form).unwrap().map(|a| a.id());

    assert_eq!(id, TaskId::new(4));
}
