// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;
use tally_core::{Board, CurrencyInput, FormError, TaskForm, TaskId};
use tokio::{fs, io::AsyncReadExt};

use crate::script::{Fields, ScriptError, Step, parse_line};
use crate::task_formatter::TaskFormatter;
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone)]
pub struct CmdBatch {
    pub file: Option<PathBuf>,
    pub output_format: ArgOutputFormat,
}

impl CmdBatch {
    pub const NAME: &str = "batch";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Replay a script of list events and print the resulting list")
            .arg(
                arg!(file: [FILE] "Script to replay, read from standard input if omitted")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            file: matches.get_one("file").cloned(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, board: &mut Board) -> Result<(), Box<dyn Error>> {
        let source = match &self.file {
            Some(path) => fs::read_to_string(path)
                .await
                .map_err(|e| format!("Failed to read script at {}: {}", path.display(), e))?,
            None => {
                let mut buf = String::new();
                tokio::io::stdin().read_to_string(&mut buf).await?;
                buf
            }
        };

        let formatter =
            TaskFormatter::new(board.config().locale).with_output_format(self.output_format);
        let alerts = replay(board, &source, &formatter, &mut io::stdout(), &mut io::stderr())?;
        tracing::debug!(alerts, "script replayed");

        print!("{}", formatter.format(&board.rows()));
        Ok(())
    }
}

/// Why a line of the script was rejected.
#[derive(Debug, thiserror::Error)]
pub enum Rejection {
    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("Task {0} cannot be deleted while another deletion is waiting for confirmation")]
    DeletePending(TaskId),
}

/// Replays a script against a board, writing `list` output to `out` and one alert per
/// rejected line to `alerts`. Returns the number of alerts.
pub fn replay(
    board: &mut Board,
    source: &str,
    formatter: &TaskFormatter,
    out: &mut impl io::Write,
    alerts: &mut impl io::Write,
) -> io::Result<usize> {
    let mut count = 0;
    for (i, line) in source.lines().enumerate() {
        let result = match parse_line(line) {
            Ok(Some(Step::List)) => {
                write!(out, "{}", formatter.format(&board.rows()))?;
                Ok(())
            }
            Ok(Some(step)) => apply(board, step),
            Ok(None) => Ok(()),
            Err(e) => Err(e.into()),
        };

        if let Err(e) = result {
            tracing::debug!(line = i + 1, err = %e, "line rejected");
            writeln!(alerts, "{} line {}: {}", "Alert:".yellow(), i + 1, e)?;
            count += 1;
        }
    }
    Ok(count)
}

fn apply(board: &mut Board, step: Step) -> Result<(), Rejection> {
    match step {
        Step::Add(fields) => {
            let mut form = board.new_form();
            fill(&mut form, fields);
            board.submit(&form)?;
        }
        Step::Edit(id, fields) => {
            let Some(mut form) = board.begin_edit(id) else {
                return Ok(());
            };
            fill(&mut form, fields);
            if let Err(e) = board.submit(&form) {
                board.cancel_edit();
                return Err(e.into());
            }
        }
        Step::Delete(id) => {
            if !board.request_delete(id) && board.confirmation().is_pending() {
                return Err(Rejection::DeletePending(id));
            }
        }
        Step::Confirm => {
            board.confirm_delete();
        }
        Step::Cancel => {
            board.cancel_delete();
        }
        Step::Move(id, direction) => {
            board.move_task(id, direction);
        }
        Step::Drag(from, to) => {
            let len = board.tasks().len();
            if from >= len || to >= len {
                tracing::debug!(from, to, len, "out-of-range drag ignored");
                return Ok(());
            }
            if let Some(mut session) = board.begin_drag(from) {
                // hover over every row in between, one step at a time
                let mut index = from;
                while index != to {
                    index = if index < to { index + 1 } else { index - 1 };
                    board.drag_hover(&mut session, index);
                }
                board.end_drag(session);
            }
        }
        Step::List => {} // printed by the caller
    }
    Ok(())
}

fn fill(form: &mut TaskForm, fields: Fields) {
    let locale = form.cost.locale();
    form.name = fields.name;
    form.cost = match fields.cost {
        Some(cost) => CurrencyInput::with_value(locale, cost),
        None => CurrencyInput::new(locale),
    };
    form.due = fields.due;
}
