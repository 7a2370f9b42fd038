// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{Cost, Task, TaskId};

/// A row of the task list, with the affordances it exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskRow<'a> {
    /// The task shown in this row.
    pub task: &'a Task,

    /// Zero-based position in the list.
    pub index: usize,

    /// Whether the cost reaches the highlight threshold.
    pub highlighted: bool,

    /// Move-up is disabled on the first row.
    pub can_move_up: bool,

    /// Move-down is disabled on the last row.
    pub can_move_down: bool,
}

impl TaskRow<'_> {
    /// The id of the task in this row.
    pub fn id(&self) -> TaskId {
        self.task.id()
    }
}

/// Builds the rows for `tasks`, which must already be in display order.
pub fn task_rows(tasks: &[Task], threshold: Cost) -> Vec<TaskRow<'_>> {
    let len = tasks.len();
    tasks
        .iter()
        .enumerate()
        .map(|(index, task)| TaskRow {
            task,
            index,
            highlighted: task.cost() >= threshold,
            can_move_up: index > 0,
            can_move_down: index + 1 < len,
        })
        .collect()
}
