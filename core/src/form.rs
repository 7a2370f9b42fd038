// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::{CurrencyInput, Locale, Task, TaskDraft, TaskId};

/// Format of the due date field.
pub const DUE_FORMAT: &str = "%Y-%m-%d";

/// Why a form submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The name is empty after trimming.
    #[error("Name is required")]
    MissingName,

    /// No cost has been entered.
    #[error("Cost is required")]
    MissingCost,

    /// The due date is empty.
    #[error("Due date is required")]
    MissingDue,

    /// The due date is not an ISO date.
    #[error("Invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDue(String),

    /// Another task already has this name, ignoring case.
    #[error("A task named '{name}' already exists")]
    DuplicateName {
        /// The name of the existing task.
        name: String,
    },
}

/// Collects and validates a candidate task.
///
/// The form never touches the store; a successful [`TaskForm::validate`] hands back a
/// [`TaskDraft`] for the owner to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    editing: Option<TaskId>,

    /// Name field.
    pub name: String,

    /// Cost field.
    pub cost: CurrencyInput,

    /// Due date field, `YYYY-MM-DD`.
    pub due: String,
}

impl TaskForm {
    /// An empty form for a new task.
    pub fn new(locale: Locale) -> Self {
        Self {
            editing: None,
            name: String::new(),
            cost: CurrencyInput::new(locale),
            due: String::new(),
        }
    }

    /// A form pre-filled with the current values of `task`.
    pub fn edit(task: &Task, locale: Locale) -> Self {
        Self {
            editing: Some(task.id()),
            name: task.name().to_owned(),
            cost: CurrencyInput::with_value(locale, task.cost()),
            due: task.due().format(DUE_FORMAT).to_string(),
        }
    }

    /// The id of the task being edited, `None` in create mode.
    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    /// Validates the fields against the existing tasks.
    ///
    /// The task being edited is excluded from the duplicate check by id, so resubmitting
    /// it with its own name succeeds.
    pub fn validate<'a>(
        &self,
        tasks: impl IntoIterator<Item = &'a Task>,
    ) -> Result<TaskDraft, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }

        let cost = self.cost.value().ok_or(FormError::MissingCost)?;

        let due = self.due.trim();
        if due.is_empty() {
            return Err(FormError::MissingDue);
        }
        let due = NaiveDate::parse_from_str(due, DUE_FORMAT)
            .map_err(|_| FormError::InvalidDue(due.to_string()))?;

        if let Some(existing) = tasks
            .into_iter()
            .filter(|a| Some(a.id()) != self.editing)
            .find(|a| a.is_named(name))
        {
            tracing::debug!(name, existing = %existing.id(), "duplicate task name");
            return Err(FormError::DuplicateName {
                name: existing.name().to_owned(),
            });
        }

        Ok(TaskDraft {
            name: name.to_owned(),
            cost,
            due,
        })
    }
}
