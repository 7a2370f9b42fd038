// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Single-step moves and drag reordering keep the order dense.

use tally_core::{Direction, TaskId};

use crate::common::{assert_dense_order, assert_names, board_with, id_of};

#[test]
fn every_move_keeps_order_dense() {
    let mut board = board_with(&["A", "B", "C", "D", "E"]);
    let moves = [
        ("C", Direction::Up),
        ("C", Direction::Up),
        ("A", Direction::Down),
        ("E", Direction::Up),
        ("D", Direction::Down),
    ];
    for (name, direction) in moves {
        board.move_task(id_of(&board, name), direction);
        assert_dense_order(&board);
    }
    assert_names(&board, &["C", "B", "A", "E", "D"]);
}

#[test]
fn moves_at_the_edges_are_noops() {
    let mut board = board_with(&["A", "B", "C"]);
    let before = board.tasks().to_vec();

    assert!(!board.move_task(id_of(&board, "A"), Direction::Up));
    assert!(!board.move_task(id_of(&board, "C"), Direction::Down));
    assert!(!board.move_task(TaskId::new(42).unwrap(), Direction::Down));

    assert_eq!(board.tasks(), before.as_slice());
}

#[test]
fn row_affordances_follow_position() {
    let board = board_with(&["A", "B", "C"]);
    let rows = board.rows();
    assert!(!rows[0].can_move_up && rows[0].can_move_down);
    assert!(rows[1].can_move_up && rows[1].can_move_down);
    assert!(rows[2].can_move_up && !rows[2].can_move_down);
}

#[test]
fn drag_reorders_on_every_hover() {
    let mut board = board_with(&["A", "B", "C", "D"]);
    let mut drag = board.begin_drag(3).unwrap();

    for (target, expected) in [
        (2, ["A", "B", "D", "C"]),
        (1, ["A", "D", "B", "C"]),
        (0, ["D", "A", "B", "C"]),
    ] {
        assert!(board.drag_hover(&mut drag, target));
        assert_names(&board, &expected);
        assert_dense_order(&board);
    }

    assert_eq!(board.end_drag(drag), 0);
}

#[test]
fn drag_equals_repeated_single_steps() {
    let mut dragged = board_with(&["A", "B", "C", "D"]);
    let mut drag = dragged.begin_drag(0).unwrap();
    dragged.drag_hover(&mut drag, 3);

    let mut stepped = board_with(&["A", "B", "C", "D"]);
    let id = id_of(&stepped, "A");
    for _ in 0..3 {
        stepped.move_task(id, Direction::Down);
    }

    assert_eq!(dragged.tasks(), stepped.tasks());
}
