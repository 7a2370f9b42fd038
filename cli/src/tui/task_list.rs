// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};
use tally_core::{DUE_FORMAT, Direction, TaskRow};

use crate::tui::board_store::BoardStore;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};

const EMPTY_HINT: &str = "No tasks yet. Press <a> to add one.";

/// The task table with the selection, move arrows and drag state.
#[derive(Debug, Default)]
pub struct TaskList;

impl TaskList {
    pub fn new() -> Self {
        Self
    }
}

fn row<'a>(row: &TaskRow<'_>, store: &BoardStore) -> Row<'a> {
    let task = row.task;
    let arrows = format!(
        "{}{}",
        if row.can_move_up { "↑" } else { " " },
        if row.can_move_down { "↓" } else { " " },
    );
    let cost = store.board.format_cost(task.cost());
    let cells = [
        Cell::from(task.order().to_string()),
        Cell::from(task.name().to_string()),
        Cell::from(Text::from(cost).right_aligned()),
        Cell::from(task.due().format(DUE_FORMAT).to_string()),
        Cell::from(arrows),
    ];

    let style = match row.highlighted {
        true => Style::new().yellow(),
        false => Style::new(),
    };
    Row::new(cells).style(style)
}

impl Component<BoardStore> for TaskList {
    fn render(&self, store: &RefCell<BoardStore>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let rows = store.board.rows();
        if rows.is_empty() {
            Paragraph::new(EMPTY_HINT).centered().render(area, buf);
            return;
        }

        let header = Row::new(["#", "Name", "Cost", "Due", ""]).style(Style::new().bold());
        let widths = [
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(16),
            Constraint::Length(10),
            Constraint::Length(2),
        ];
        let (symbol, highlight) = match store.drag {
            Some(_) => ("≡ ", Style::new().reversed().italic()),
            None => ("> ", Style::new().reversed()),
        };

        let table = Table::new(rows.iter().map(|r| row(r, &store)), widths)
            .header(header)
            .row_highlight_style(highlight)
            .highlight_symbol(symbol);

        let mut state = TableState::default().with_selected(Some(store.selected));
        StatefulWidget::render(table, area, buf, &mut state);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<BoardStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let (selected, len, id, dragging) = {
            let s = store.borrow();
            (s.selected, s.board.tasks().len(), s.selected_id(), s.drag.is_some())
        };

        let select = |index| match dragging {
            true => Action::DragTo(index),
            false => Action::Select(index),
        };

        match event.code {
            KeyCode::Up => {
                if let Some(index) = selected.checked_sub(1) {
                    dispatcher.dispatch(select(index));
                }
                Some(Message::Handled)
            }
            KeyCode::Down => {
                if selected + 1 < len {
                    dispatcher.dispatch(select(selected + 1));
                }
                Some(Message::Handled)
            }
            KeyCode::Char(' ') => {
                dispatcher.dispatch(if dragging { Action::Drop } else { Action::Grab });
                Some(Message::Handled)
            }
            KeyCode::Esc if dragging => {
                dispatcher.dispatch(Action::CancelDrag);
                Some(Message::Handled)
            }
            KeyCode::Char('q') => {
                if dragging {
                    dispatcher.dispatch(Action::Drop);
                }
                Some(Message::Exit)
            }
            // everything else waits until the row is dropped
            _ if dragging => Some(Message::Handled),
            KeyCode::Char('a') => {
                dispatcher.dispatch(Action::OpenCreateForm);
                Some(Message::Handled)
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(id) = id {
                    dispatcher.dispatch(Action::OpenEditForm(id));
                }
                Some(Message::Handled)
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = id {
                    dispatcher.dispatch(Action::RequestDelete(id));
                }
                Some(Message::Handled)
            }
            KeyCode::Char(c @ ('K' | 'J')) => {
                let direction = if c == 'K' { Direction::Up } else { Direction::Down };
                if let Some(id) = id {
                    dispatcher.dispatch(Action::Move(id, direction));
                }
                Some(Message::Handled)
            }
            KeyCode::Esc => Some(Message::Handled),
            _ => None,
        }
    }
}
