// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::tui::board_store::BoardStore;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};

/// A centered area `percent_x` wide and `height` rows tall.
pub fn popup_area(area: Rect, percent_x: u16, height: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

fn dialog(title: &str, text: String, hints: Line<'static>, color: Color) -> Paragraph<'static> {
    let block = Block::bordered()
        .border_set(border::ROUNDED)
        .title(Line::from(format!(" {title} ").bold()).centered())
        .title_bottom(hints.centered())
        .fg(color);

    Paragraph::new(text)
        .centered()
        .wrap(Wrap { trim: true })
        .block(block)
}

/// Asks whether the task waiting for confirmation should be deleted.
#[derive(Debug, Default)]
pub struct ConfirmDialog;

impl Component<BoardStore> for ConfirmDialog {
    fn render(&self, store: &RefCell<BoardStore>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let Some(task) = store.board.confirmation().pending() else {
            return;
        };

        let hints = Line::from(vec![
            " Yes ".into(),
            "<y>".blue().bold(),
            " No ".into(),
            "<n> ".blue().bold(),
        ]);
        let area = popup_area(area, 50, 5);
        Clear.render(area, buf);
        dialog(
            "Delete task",
            format!("Delete '{}'?", task.name()),
            hints,
            Color::Red,
        )
        .render(area, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        _store: &RefCell<BoardStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        match event.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => dispatcher.dispatch(Action::ConfirmDelete),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => dispatcher.dispatch(Action::CancelDelete),
            _ => {}
        }
        Some(Message::Handled)
    }
}

/// Shows the current alert until any key is pressed.
#[derive(Debug, Default)]
pub struct AlertDialog;

impl Component<BoardStore> for AlertDialog {
    fn render(&self, store: &RefCell<BoardStore>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let Some(alert) = &store.alert else {
            return;
        };

        let hints = Line::from(vec![" Dismiss ".into(), "<any key> ".blue().bold()]);
        let area = popup_area(area, 50, 5);
        Clear.render(area, buf);
        dialog("Alert", alert.clone(), hints, Color::Yellow).render(area, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        _store: &RefCell<BoardStore>,
        _area: Rect,
        _event: KeyEvent,
    ) -> Option<Message> {
        dispatcher.dispatch(Action::DismissAlert);
        Some(Message::Handled)
    }
}
