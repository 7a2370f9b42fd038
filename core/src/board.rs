// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::list::task_rows;
use crate::{
    Config, Cost, DeleteConfirmation, Direction, DragSession, FormError, Task, TaskForm, TaskId,
    TaskRow, TaskStore,
};

/// Owner of a session's state: the task store, the pending delete confirmation and the
/// task being edited.
///
/// Front ends read from the board and request changes through its methods; they never
/// mutate the store directly.
#[derive(Debug, Clone, Default)]
pub struct Board {
    config: Config,
    store: TaskStore,
    confirmation: DeleteConfirmation,
    editing: Option<TaskId>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: TaskStore::new(),
            confirmation: DeleteConfirmation::Idle,
            editing: None,
        }
    }

    /// The configuration of the board.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The task store.
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// The tasks, ascending by order.
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// The rows of the task list.
    pub fn rows(&self) -> Vec<TaskRow<'_>> {
        task_rows(self.store.tasks(), self.config.highlight_threshold)
    }

    /// Formats a cost with the configured locale.
    pub fn format_cost(&self, cost: Cost) -> String {
        self.config.locale.format(cost)
    }

    /// An empty form for a new task.
    pub fn new_form(&self) -> TaskForm {
        TaskForm::new(self.config.locale)
    }

    /// Opens the edit form of a task, pre-filled with its current values.
    pub fn begin_edit(&mut self, id: TaskId) -> Option<TaskForm> {
        let Some(task) = self.store.get(id) else {
            tracing::debug!(%id, "edit of unknown task ignored");
            return None;
        };

        self.editing = Some(id);
        Some(TaskForm::edit(task, self.config.locale))
    }

    /// The task currently open for editing.
    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    /// Closes the edit form without saving.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Validates a form and applies it: adds a task in create mode, replaces the edited
    /// task's fields in edit mode.
    ///
    /// On error nothing changes. On success the edit form, if any, is closed; the returned
    /// task is `None` when the edited task was deleted in the meantime.
    pub fn submit(&mut self, form: &TaskForm) -> Result<Option<&Task>, FormError> {
        let draft = form.validate(self.store.tasks())?;
        match form.editing() {
            Some(id) => {
                if self.editing == Some(id) {
                    self.editing = None;
                }
                Ok(self.store.edit(id, draft))
            }
            None => Ok(Some(self.store.add(draft))),
        }
    }

    /// The pending delete confirmation.
    pub fn confirmation(&self) -> &DeleteConfirmation {
        &self.confirmation
    }

    /// Signals the intent to delete a task. Nothing is removed until confirmed.
    ///
    /// Returns false if the task is unknown or another confirmation is pending.
    pub fn request_delete(&mut self, id: TaskId) -> bool {
        match self.store.get(id) {
            Some(task) => self.confirmation.request(task.clone()),
            None => {
                tracing::debug!(%id, "delete of unknown task ignored");
                false
            }
        }
    }

    /// Deletes the task waiting for confirmation.
    pub fn confirm_delete(&mut self) -> Option<Task> {
        let task = self.confirmation.confirm()?;
        if self.editing == Some(task.id()) {
            self.editing = None;
        }
        self.store.delete(task.id())
    }

    /// Keeps the task waiting for confirmation.
    pub fn cancel_delete(&mut self) -> bool {
        self.confirmation.cancel().is_some()
    }

    /// Moves a task one step up or down.
    pub fn move_task(&mut self, id: TaskId, direction: Direction) -> bool {
        self.store.reorder(id, direction)
    }

    /// Starts dragging the row at `index`.
    pub fn begin_drag(&self, index: usize) -> Option<DragSession> {
        DragSession::begin(&self.store, index)
    }

    /// Hovers a dragged row over the row at `index`.
    pub fn drag_hover(&mut self, session: &mut DragSession, index: usize) -> bool {
        session.hover(&mut self.store, index)
    }

    /// Drops a dragged row, returning its final position.
    pub fn end_drag(&self, session: DragSession) -> usize {
        session.end()
    }
}
