// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, marker::PhantomData};

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::Block;

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};

/// A bordered page with a title and a line of key hints at the bottom.
pub struct SinglePage<S, C: Component<S>> {
    title: String,
    inner: C,
    instructions: Vec<(&'static str, &'static str)>,
    on_escape: Option<Action>,
    _phantom: PhantomData<S>,
}

impl<S, C: Component<S>> SinglePage<S, C> {
    pub fn new(title: impl ToString, inner: C) -> Self {
        Self {
            title: title.to_string(),
            inner,
            instructions: Vec::new(),
            on_escape: None,
            _phantom: PhantomData,
        }
    }

    /// Key hints as (label, key) pairs.
    pub fn with_instructions(mut self, instructions: Vec<(&'static str, &'static str)>) -> Self {
        self.instructions = instructions;
        self
    }

    /// Dispatches `action` on Esc instead of exiting.
    pub fn with_escape(mut self, action: Action) -> Self {
        self.on_escape = Some(action);
        self
    }

    fn block(&self) -> Block<'_> {
        Block::bordered().border_set(border::ROUNDED)
    }

    fn instructions(&self) -> Line<'static> {
        let spans = self.instructions.iter().flat_map(|(label, key)| {
            [
                Span::from(format!(" {label} ")),
                Span::from(format!("<{key}>")).blue().bold(),
            ]
        });
        let mut line = Line::from_iter(spans);
        if !self.instructions.is_empty() {
            line.push_span(" ");
        }
        line
    }
}

impl<S, C: Component<S>> Component<S> for SinglePage<S, C> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let title = Line::from(format!(" {} ", self.title).bold());
        let block = self
            .block()
            .title(title.centered())
            .title_bottom(self.instructions().centered())
            .white();

        let inner_area = block.inner(area);
        block.render(area, buf);
        self.inner.render(store, inner_area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        let inner_area = self.block().inner(area);
        self.inner.get_cursor_position(store, inner_area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let inner_area = self.block().inner(area);
        if let Some(msg) = self.inner.on_key(dispatcher, store, inner_area, event) {
            return Some(msg);
        }

        match (event.code, &self.on_escape) {
            (KeyCode::Esc, Some(action)) => {
                dispatcher.dispatch(action.clone());
                Some(Message::Handled)
            }
            (KeyCode::Esc, None) => Some(Message::Exit),
            _ => None,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.inner.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.inner.deactivate(dispatcher, store);
    }
}
