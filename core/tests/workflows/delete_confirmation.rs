// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Delete goes through a confirmation step.

use tally_core::TaskId;

use crate::common::{assert_dense_order, assert_names, board_with, id_of};

#[test]
fn delete_intent_alone_never_removes() {
    let mut board = board_with(&["A", "B", "C"]);
    assert!(board.request_delete(id_of(&board, "B")));

    assert_eq!(board.tasks().len(), 3);
    assert_eq!(
        board.confirmation().pending().map(|a| a.name()),
        Some("B")
    );
}

#[test]
fn second_request_while_pending_is_rejected() {
    let mut board = board_with(&["A", "B"]);
    assert!(board.request_delete(id_of(&board, "A")));
    assert!(!board.request_delete(id_of(&board, "B")));

    board.confirm_delete();
    assert_names(&board, &["B"]);
}

#[test]
fn confirm_recompacts_order() {
    let mut board = board_with(&["A", "B", "C", "D"]);
    board.request_delete(id_of(&board, "B"));
    board.confirm_delete();

    assert_names(&board, &["A", "C", "D"]);
    assert_dense_order(&board);
}

#[test]
fn confirm_without_request_is_noop() {
    let mut board = board_with(&["A"]);
    assert!(board.confirm_delete().is_none());
    assert!(!board.cancel_delete());
    assert_names(&board, &["A"]);
}

#[test]
fn confirm_after_task_vanished_is_noop() {
    let mut board = board_with(&["A", "B"]);
    let id = id_of(&board, "A");
    board.request_delete(id);
    board.confirm_delete();

    // A stale second click on the same row.
    assert!(!board.request_delete(id));
    assert!(board.confirm_delete().is_none());
    assert_names(&board, &["B"]);
}

#[test]
fn delete_unknown_id_is_noop() {
    let mut board = board_with(&["A"]);
    assert!(!board.request_delete(TaskId::new(99).unwrap()));
    assert!(!board.confirmation().is_pending());
}
