// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, marker::PhantomData};

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};
use tally_core::CurrencyInput;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::util::{
    byte_offset_of_grapheme, byte_range_of_grapheme_at, grapheme_count, width_of_prefix,
};

/// A vertical list of fields, one focused at a time. Enter submits the form.
pub struct Form<S, C: FormItem<S>> {
    items: Vec<C>,
    item_index: usize,
    _phantom: PhantomData<S>,
}

impl<S, C: FormItem<S>> Form<S, C> {
    pub fn new(items: Vec<C>) -> Self {
        Self {
            items,
            item_index: 0,
            _phantom: PhantomData,
        }
    }

    fn layout(&self) -> Layout {
        Layout::vertical(self.items.iter().map(|_| Constraint::Max(3))).margin(1)
    }

    fn navigate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>, offset: isize) {
        let len = self.items.len();
        if len == 0 {
            return;
        }

        if let Some(item) = self.items.get_mut(self.item_index) {
            item.deactivate(dispatcher, store);
        }

        self.item_index = match offset > 0 {
            true => (self.item_index + 1) % len,
            false => (self.item_index + len - 1) % len,
        };

        if let Some(item) = self.items.get_mut(self.item_index) {
            item.activate(dispatcher, store);
        }
    }
}

impl<S, C: FormItem<S>> Component<S> for Form<S, C> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let areas = self.layout().split(area);
        let last = self.items.len().saturating_sub(1);
        for (i, (item, area)) in self.items.iter().zip(areas.iter()).enumerate() {
            item_render(i == last, item, *area, buf);
            item.render(store, item_inner(*area), buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        let areas = self.layout().split(area);
        let item = self.items.get(self.item_index)?;
        let area = areas.get(self.item_index)?;
        item.get_cursor_position(store, *area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let areas = self.layout().split(area);
        if let (Some(item), Some(subarea)) =
            (self.items.get_mut(self.item_index), areas.get(self.item_index))
            && let Some(msg) = item.on_key(dispatcher, store, *subarea, event)
        {
            return Some(msg);
        }

        match event.code {
            KeyCode::Up | KeyCode::BackTab => {
                self.navigate(dispatcher, store, -1);
                Some(Message::CursorUpdated)
            }
            KeyCode::Down | KeyCode::Tab => {
                self.navigate(dispatcher, store, 1);
                Some(Message::CursorUpdated)
            }
            KeyCode::Enter => {
                dispatcher.dispatch(Action::SubmitForm);
                Some(Message::Handled)
            }
            _ => None,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.item_index = 0;
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.activate(dispatcher, store);
        }
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.deactivate(dispatcher, store);
        }
    }
}

pub trait FormItem<S>: Component<S> {
    fn item_title(&self) -> &str;
    fn item_state(&self) -> FormItemState;
}

impl<S> FormItem<S> for Box<dyn FormItem<S>> {
    fn item_title(&self) -> &str {
        (**self).item_title()
    }

    fn item_state(&self) -> FormItemState {
        (**self).item_state()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormItemState {
    Active,
    Inactive,
}

impl From<bool> for FormItemState {
    fn from(active: bool) -> Self {
        match active {
            true => FormItemState::Active,
            false => FormItemState::Inactive,
        }
    }
}

/// Reads a field from the store and writes it back through the dispatcher.
pub trait Access<S, T> {
    fn get(store: &RefCell<S>) -> T;
    fn set(dispatcher: &mut Dispatcher, value: T);
}

/// A single line text field.
#[derive(Debug)]
pub struct Input<S, A: Access<S, String>> {
    title: String,
    active: bool,
    /// Cursor position, in grapheme clusters.
    cursor: usize,
    _phantom_s: PhantomData<S>,
    _phantom_a: PhantomData<A>,
}

impl<S, A: Access<S, String>> Input<S, A> {
    pub fn new(title: impl ToString) -> Self {
        Self {
            title: title.to_string(),
            active: false,
            cursor: 0,
            _phantom_s: PhantomData,
            _phantom_a: PhantomData,
        }
    }
}

impl<S, A: Access<S, String>> Component<S> for Input<S, A> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        Paragraph::new(A::get(store)).render(area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        if !self.active {
            return None;
        }

        let width = width_of_prefix(&A::get(store), self.cursor);
        let x = area.x + (width as u16) + 2; // sider 1 + padding 1
        let y = area.y + 1; // title line
        Some((x, y))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        use KeyCode::*;
        if !self.active {
            return None;
        }

        let mut v = A::get(store);
        match event.code {
            Left => self.cursor = self.cursor.saturating_sub(1),
            Right => self.cursor = (self.cursor + 1).min(grapheme_count(&v)),
            Home => self.cursor = 0,
            End => self.cursor = grapheme_count(&v),
            Backspace if self.cursor > 0 => {
                if let Some(range) = byte_range_of_grapheme_at(&v, self.cursor - 1) {
                    v.replace_range(range, "");
                    A::set(dispatcher, v);
                    self.cursor -= 1;
                }
            }
            Delete => {
                if let Some(range) = byte_range_of_grapheme_at(&v, self.cursor) {
                    v.replace_range(range, "");
                    A::set(dispatcher, v);
                }
            }
            Char(c) => {
                v.insert(byte_offset_of_grapheme(&v, self.cursor), c);
                let before = grapheme_count(&A::get(store));
                A::set(dispatcher, v);
                // a combining mark joins the previous cluster instead of adding one
                if grapheme_count(&A::get(store)) > before {
                    self.cursor += 1;
                }
            }
            Backspace => {}
            _ => return None,
        };

        Some(Message::CursorUpdated)
    }

    fn activate(&mut self, _dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.active = true;
        self.cursor = grapheme_count(&A::get(store));
    }

    fn deactivate(&mut self, _dispatcher: &mut Dispatcher, _store: &RefCell<S>) {
        self.active = false;
    }
}

impl<S, A: Access<S, String>> FormItem<S> for Input<S, A> {
    fn item_title(&self) -> &str {
        &self.title
    }

    fn item_state(&self) -> FormItemState {
        self.active.into()
    }
}

/// A cents-entry currency field: digits shift in from the right, Backspace drops the
/// last digit and Delete clears the field. The cursor always sits at the end.
#[derive(Debug)]
pub struct CurrencyField<S, A: Access<S, CurrencyInput>> {
    title: String,
    active: bool,
    _phantom_s: PhantomData<S>,
    _phantom_a: PhantomData<A>,
}

impl<S, A: Access<S, CurrencyInput>> CurrencyField<S, A> {
    pub fn new(title: impl ToString) -> Self {
        Self {
            title: title.to_string(),
            active: false,
            _phantom_s: PhantomData,
            _phantom_a: PhantomData,
        }
    }
}

impl<S, A: Access<S, CurrencyInput>> Component<S> for CurrencyField<S, A> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        Paragraph::new(A::get(store).text()).render(area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        if !self.active {
            return None;
        }

        let width = A::get(store).text().width();
        Some((area.x + (width as u16) + 2, area.y + 1))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if !self.active {
            return None;
        }

        let mut v = A::get(store);
        let changed = match event.code {
            KeyCode::Char(c) => v.push(c),
            KeyCode::Backspace => {
                v.pop();
                true
            }
            KeyCode::Delete => v.set_text(""),
            _ => return None,
        };

        if changed {
            A::set(dispatcher, v);
        }
        Some(Message::CursorUpdated)
    }

    fn activate(&mut self, _dispatcher: &mut Dispatcher, _store: &RefCell<S>) {
        self.active = true;
    }

    fn deactivate(&mut self, _dispatcher: &mut Dispatcher, _store: &RefCell<S>) {
        self.active = false;
    }
}

impl<S, A: Access<S, CurrencyInput>> FormItem<S> for CurrencyField<S, A> {
    fn item_title(&self) -> &str {
        &self.title
    }

    fn item_state(&self) -> FormItemState {
        self.active.into()
    }
}

const S_STEP_ACTIVE: &str = "◆";
const S_STEP_INACTIVE: &str = "◇";
const S_SIDER_CONNECTOR: &str = "│";
const S_SIDER_BOTTOM: &str = "└";

fn item_render<S>(is_last: bool, item: &impl FormItem<S>, area: Rect, buf: &mut Buffer) {
    let (color, symbol) = match item.item_state() {
        FormItemState::Active => (Color::Blue, S_STEP_ACTIVE),
        FormItemState::Inactive => (Color::Gray, S_STEP_INACTIVE),
    };

    let area_title = Rect::new(area.x + 2, area.y, area.width.saturating_sub(2), 1);
    Clear.render(area_title, buf);
    Paragraph::new(item.item_title())
        .bold()
        .fg(color)
        .render(area_title, buf);

    if let Some(c) = buf.cell_mut((area.x, area.y)) {
        c.set_symbol(symbol);
        c.set_fg(color);
    }

    for y in 1..area.height {
        let symbol = match is_last && y == area.height - 1 {
            true => S_SIDER_BOTTOM,
            false => S_SIDER_CONNECTOR,
        };
        if let Some(c) = buf.cell_mut((area.x, area.y + y)) {
            c.set_symbol(symbol);
            c.set_fg(color);
        }
    }
}

fn item_inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}
