// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use tally_core::{DUE_FORMAT, Locale, Task, TaskRow};

use crate::table::{Column, PaddingDirection, Table};
use crate::util::ArgOutputFormat;

#[derive(Debug)]
pub struct TaskFormatter {
    columns: Vec<TaskColumn>,
    format: ArgOutputFormat,
}

impl TaskFormatter {
    pub fn new(locale: Locale) -> Self {
        Self {
            columns: vec![
                TaskColumn::Order,
                TaskColumn::Id,
                TaskColumn::Name,
                TaskColumn::Cost(locale),
                TaskColumn::Due,
            ],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, rows: &'a [TaskRow<'a>]) -> Display<'a> {
        Display {
            rows,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    rows: &'a [TaskRow<'a>],
    formatter: &'a TaskFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            ArgOutputFormat::Json => {
                let rows: Vec<_> = self.rows.iter().map(TaskJson::from).collect();
                let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            ArgOutputFormat::Table if self.rows.is_empty() => writeln!(f, "No tasks."),
            ArgOutputFormat::Table => {
                write!(f, "{}", Table::new(&self.formatter.columns, self.rows))
            }
        }
    }
}

#[derive(Debug, serde::Serialize)]
struct TaskJson<'a> {
    #[serde(flatten)]
    task: &'a Task,
    highlighted: bool,
}

impl<'a> From<&TaskRow<'a>> for TaskJson<'a> {
    fn from(row: &TaskRow<'a>) -> Self {
        Self {
            task: row.task,
            highlighted: row.highlighted,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum TaskColumn {
    Order,
    Id,
    Name,
    Cost(Locale),
    Due,
}

impl<'r> Column<TaskRow<'r>> for TaskColumn {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(match self {
            TaskColumn::Order => "#",
            TaskColumn::Id => "ID",
            TaskColumn::Name => "Name",
            TaskColumn::Cost(_) => "Cost",
            TaskColumn::Due => "Due",
        })
    }

    fn format<'a>(&self, row: &'a TaskRow<'r>) -> Cow<'a, str> {
        let task = row.task;
        match self {
            TaskColumn::Order => task.order().to_string().into(),
            TaskColumn::Id => task.id().to_string().into(),
            TaskColumn::Name => task.name().to_string().into(),
            TaskColumn::Cost(locale) => locale.format(task.cost()).into(),
            TaskColumn::Due => task.due().format(DUE_FORMAT).to_string().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            TaskColumn::Order | TaskColumn::Id | TaskColumn::Cost(_) => PaddingDirection::Right,
            TaskColumn::Name | TaskColumn::Due => PaddingDirection::Left,
        }
    }

    fn get_color(&self, row: &TaskRow<'r>) -> Option<Color> {
        match self {
            TaskColumn::Name | TaskColumn::Cost(_) if row.highlighted => Some(Color::Yellow),
            _ => None,
        }
    }
}
