// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::num::NonZeroU64;

use crate::{Direction, Task, TaskDraft, TaskId};

/// In-memory ordered collection of tasks.
///
/// Tasks are kept in display sequence, and `order` always equals `position + 1`.
/// Ids come from a counter that only grows, so a deleted id is never handed out again.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    allocated: u64,
}

impl TaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The tasks, ascending by order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no task.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Finds a task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|a| a.id() == id)
    }

    /// The current position of a task.
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|a| a.id() == id)
    }

    /// Appends a new task. The caller is responsible for validating the draft.
    pub fn add(&mut self, draft: TaskDraft) -> &Task {
        let id = self.next_id();
        let order = order_of(self.tasks.len());
        tracing::debug!(%id, order, name = %draft.name, "adding task");
        self.tasks.push(Task::new(id, draft, order));
        &self.tasks[self.tasks.len() - 1]
    }

    /// Replaces every field of a task except its id and order.
    pub fn edit(&mut self, id: TaskId, draft: TaskDraft) -> Option<&Task> {
        let Some(task) = self.tasks.iter_mut().find(|a| a.id() == id) else {
            tracing::debug!(%id, "edit of unknown task ignored");
            return None;
        };

        tracing::debug!(%id, name = %draft.name, "editing task");
        task.apply(draft);
        Some(&*task)
    }

    /// Removes a task and closes the gap in the order sequence.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let Some(index) = self.position(id) else {
            tracing::debug!(%id, "delete of unknown task ignored");
            return None;
        };

        tracing::debug!(%id, index, "deleting task");
        let task = self.tasks.remove(index);
        self.renumber();
        Some(task)
    }

    /// Moves a task one step. Returns false if the task is unknown or already at the edge.
    pub fn reorder(&mut self, id: TaskId, direction: Direction) -> bool {
        let Some(index) = self.position(id) else {
            tracing::debug!(%id, "reorder of unknown task ignored");
            return false;
        };

        match direction.target(index, self.tasks.len()) {
            Some(target) => self.reorder_by_drag(index, target),
            None => {
                tracing::debug!(%id, %direction, "task already at the edge");
                false
            }
        }
    }

    /// Moves the task at `from` to `to`, shifting the ones in between.
    ///
    /// Returns false, leaving the store untouched, if either index is out of range.
    pub fn reorder_by_drag(&mut self, from: usize, to: usize) -> bool {
        let len = self.tasks.len();
        if from >= len || to >= len {
            tracing::debug!(from, to, len, "reorder out of range ignored");
            return false;
        }

        tracing::debug!(from, to, "reordering task");
        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        self.renumber();
        true
    }

    fn renumber(&mut self) {
        for (i, task) in self.tasks.iter_mut().enumerate() {
            task.set_order(order_of(i));
        }
    }

    fn next_id(&mut self) -> TaskId {
        let id = NonZeroU64::MIN.saturating_add(self.allocated);
        self.allocated = self.allocated.saturating_add(1);
        TaskId::from(id)
    }
}

fn order_of(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}
