// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Tally core: an in-memory task list with costs, due dates and manual ordering.

mod board;
mod config;
mod confirm;
mod cost;
mod currency;
mod drag;
mod form;
mod list;
mod store;
mod task;

pub use crate::board::Board;
pub use crate::config::{APP_NAME, Config};
pub use crate::confirm::DeleteConfirmation;
pub use crate::cost::{Cost, CostError};
pub use crate::currency::{CurrencyInput, Locale};
pub use crate::drag::DragSession;
pub use crate::form::{DUE_FORMAT, FormError, TaskForm};
pub use crate::list::{TaskRow, task_rows};
pub use crate::store::TaskStore;
pub use crate::task::{Direction, Task, TaskDraft, TaskId};
