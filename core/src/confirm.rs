// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::Task;

/// Gate in front of destructive deletes.
///
/// `Idle -> Confirming(task) -> Idle`, leaving through either confirm or cancel. Only one
/// confirmation can be pending at a time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum DeleteConfirmation {
    /// Nothing pending.
    #[default]
    Idle,

    /// Waiting for the user to confirm deleting the task.
    Confirming(Task),
}

impl DeleteConfirmation {
    /// Starts confirming the deletion of `task`. Rejected if another one is pending.
    pub fn request(&mut self, task: Task) -> bool {
        match self {
            DeleteConfirmation::Idle => {
                tracing::debug!(id = %task.id(), "confirming delete");
                *self = DeleteConfirmation::Confirming(task);
                true
            }
            DeleteConfirmation::Confirming(pending) => {
                tracing::debug!(
                    pending = %pending.id(),
                    requested = %task.id(),
                    "delete already pending, request ignored"
                );
                false
            }
        }
    }

    /// The task waiting for confirmation.
    pub fn pending(&self) -> Option<&Task> {
        match self {
            DeleteConfirmation::Idle => None,
            DeleteConfirmation::Confirming(task) => Some(task),
        }
    }

    /// Whether a confirmation is pending.
    pub fn is_pending(&self) -> bool {
        matches!(self, DeleteConfirmation::Confirming(_))
    }

    /// Leaves the confirming state, handing back the task to delete.
    pub fn confirm(&mut self) -> Option<Task> {
        match std::mem::take(self) {
            DeleteConfirmation::Idle => None,
            DeleteConfirmation::Confirming(task) => Some(task),
        }
    }

    /// Leaves the confirming state without deleting. Returns the retained task.
    pub fn cancel(&mut self) -> Option<Task> {
        let task = self.confirm();
        if let Some(task) = &task {
            tracing::debug!(id = %task.id(), "delete cancelled");
        }
        task
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{Cost, TaskDraft, TaskStore};

    fn tasks() -> TaskStore {
        let mut store = TaskStore::new();
        for name in ["A", "B"] {
            store.add(TaskDraft {
                name: name.to_string(),
                cost: Cost::ZERO,
                due: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            });
        }
        store
    }

    #[test]
    fn test_request_then_confirm() {
        let store = tasks();
        let mut c = DeleteConfirmation::default();
        assert!(!c.is_pending());

        assert!(c.request(store.tasks()[0].clone()));
        assert_eq!(c.pending().map(Task::name), Some("A"));

        let task = c.confirm().unwrap();
        assert_eq!(task.name(), "A");
        assert_eq!(c, DeleteConfirmation::Idle);
    }

    #[test]
    fn test_request_then_cancel() {
        let store = tasks();
        let mut c = DeleteConfirmation::default();
        c.request(store.tasks()[0].clone());
        assert_eq!(c.cancel().map(|a| a.id()), Some(store.tasks()[0].id()));
        assert_eq!(c, DeleteConfirmation::Idle);
    }

    #[test]
    fn test_only_one_pending() {
        let store = tasks();
        let mut c = DeleteConfirmation::default();
        assert!(c.request(store.tasks()[0].clone()));
        assert!(!c.request(store.tasks()[1].clone()));
        assert_eq!(c.pending().map(Task::name), Some("A"));
    }

    #[test]
    fn test_confirm_and_cancel_when_idle() {
        let mut c = DeleteConfirmation::default();
        assert_eq!(c.confirm(), None);
        assert_eq!(c.cancel(), None);
    }
}
