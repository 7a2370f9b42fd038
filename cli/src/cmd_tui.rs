// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::Command;
use tally_core::Board;

use crate::task_formatter::TaskFormatter;
use crate::tui;

/// Opens the interactive task list, printing the list when it closes.
#[derive(Debug, Clone, Copy)]
pub struct CmdTui;

impl CmdTui {
    pub const NAME: &str = "tui";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Manage the task list in an interactive terminal UI")
    }

    pub async fn run(self, board: &mut Board) -> Result<(), Box<dyn Error>> {
        tracing::debug!("starting terminal UI...");
        tui::run_board(board)?;

        let formatter = TaskFormatter::new(board.config().locale);
        print!("{}", formatter.format(&board.rows()));
        Ok(())
    }
}
