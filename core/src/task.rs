// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};
use std::num::NonZeroU64;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::Cost;

/// Identifier of a task, unique within a session and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(NonZeroU64);

impl TaskId {
    /// Creates an id from its numeric value, `None` for zero.
    #[must_use]
    pub const fn new(value: u64) -> Option<Self> {
        match NonZeroU64::new(value) {
            Some(a) => Some(Self(a)),
            None => None,
        }
    }

    /// The numeric value of the id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl From<NonZeroU64> for TaskId {
    fn from(value: NonZeroU64) -> Self {
        Self(value)
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<NonZeroU64>()
            .map(Self)
            .map_err(|_| format!("Invalid task id: {s}"))
    }
}

impl serde::Serialize for TaskId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A single to-do record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Task {
    id: TaskId,
    name: String,
    cost: Cost,
    due: NaiveDate,
    order: u32,
}

impl Task {
    pub(crate) fn new(id: TaskId, draft: TaskDraft, order: u32) -> Self {
        Self {
            id,
            name: draft.name,
            cost: draft.cost,
            due: draft.due,
            order,
        }
    }

    /// The immutable identifier.
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// The task name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cost of the task.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The due date.
    pub fn due(&self) -> NaiveDate {
        self.due
    }

    /// The 1-based display rank.
    pub fn order(&self) -> u32 {
        self.order
    }

    pub(crate) fn apply(&mut self, draft: TaskDraft) {
        self.name = draft.name;
        self.cost = draft.cost;
        self.due = draft.due;
    }

    pub(crate) fn set_order(&mut self, order: u32) {
        self.order = order;
    }

    /// Whether the task is named `name`, ignoring case.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Validated task payload, as produced by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Non-empty, trimmed name.
    pub name: String,

    /// The cost.
    pub cost: Cost,

    /// The due date.
    pub due: NaiveDate,
}

/// Direction of a single-step move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the start of the list.
    Up,

    /// Towards the end of the list.
    Down,
}

const DIRECTION_UP: &str = "up";
const DIRECTION_DOWN: &str = "down";

impl Direction {
    /// Computes the target index from `index`, `None` if it would leave `0..len`.
    pub fn target(self, index: usize, len: usize) -> Option<usize> {
        let target = match self {
            Direction::Up => index.checked_sub(1)?,
            Direction::Down => index.checked_add(1)?,
        };
        (target < len).then_some(target)
    }
}

impl AsRef<str> for Direction {
    fn as_ref(&self) -> &str {
        match self {
            Direction::Up => DIRECTION_UP,
            Direction::Down => DIRECTION_DOWN,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            DIRECTION_UP => Ok(Direction::Up),
            DIRECTION_DOWN => Ok(Direction::Down),
            _ => Err(format!("Invalid direction: {value}")),
        }
    }
}
