// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, mem, rc::Rc};

use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::Clear;
use tally_core::Board;

use crate::tui::board_store::{BoardStore, Mode};
use crate::tui::component::{Component, Message};
use crate::tui::component_page::SinglePage;
use crate::tui::dialog::{AlertDialog, ConfirmDialog, popup_area};
use crate::tui::dispatcher::Dispatcher;
use crate::tui::task_editor::{TaskEditor, new_task_editor};
use crate::tui::task_list::TaskList;

/// Runs the interactive list on top of `board` until the user quits.
pub fn run_board(board: &mut Board) -> Result<(), Box<dyn Error>> {
    let store = Rc::new(RefCell::new(BoardStore::new(mem::take(board))));

    let mut terminal = ratatui::init();
    let result = {
        let mut app = App::new(&store);
        loop {
            if let Err(e) = app.draw(&store, &mut terminal) {
                break Err(e);
            }

            match app.read_event(&store, &terminal) {
                Err(e) => break Err(e),
                Ok(Some(Message::Exit)) => break Ok(()),
                Ok(_) => {} // next frame
            }
        }
    }; // release the dispatcher and its store handle here
    ratatui::restore();

    let mut owned_store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    owned_store.drop_drag();
    *board = owned_store.into_board();
    result
}

pub struct App {
    dispatcher: Dispatcher,
    list: SinglePage<BoardStore, TaskList>,
    editor: TaskEditor,
    confirm: ConfirmDialog,
    alert: AlertDialog,
    mode: Mode,
}

impl App {
    pub fn new(store: &Rc<RefCell<BoardStore>>) -> Self {
        let mut dispatcher = Dispatcher::new();
        BoardStore::register_to(store.clone(), &mut dispatcher);

        let list = SinglePage::new("Tally", TaskList::new()).with_instructions(vec![
            ("Add", "a"),
            ("Edit", "e"),
            ("Delete", "d"),
            ("Move", "K/J"),
            ("Drag", "Space"),
            ("Quit", "q"),
        ]);

        Self {
            dispatcher,
            list,
            editor: new_task_editor(),
            confirm: ConfirmDialog,
            alert: AlertDialog,
            mode: store.borrow().mode,
        }
    }

    pub fn draw(
        &self,
        store: &RefCell<BoardStore>,
        terminal: &mut DefaultTerminal,
    ) -> Result<(), Box<dyn Error>> {
        terminal.draw(|frame| {
            let area = frame.area();
            self.render(store, area, frame.buffer_mut());
            if let Some(pos) = self.get_cursor_position(store, area) {
                frame.set_cursor_position(pos);
            }
        })?;
        Ok(())
    }

    pub fn read_event(
        &mut self,
        store: &RefCell<BoardStore>,
        terminal: &DefaultTerminal,
    ) -> Result<Option<Message>, Box<dyn Error>> {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                Ok(self.on_key(store, area, key))
            }
            _ => Ok(None),
        }
    }

    pub fn render(&self, store: &RefCell<BoardStore>, area: Rect, buf: &mut Buffer) {
        self.list.render(store, area, buf);

        let (mode, alert) = {
            let s = store.borrow();
            (s.mode, s.alert.is_some())
        };
        match mode {
            Mode::List => {}
            Mode::Form => {
                let area = editor_area(area);
                Clear.render(area, buf);
                self.editor.render(store, area, buf);
            }
            Mode::Confirm => self.confirm.render(store, area, buf),
        }

        if alert {
            self.alert.render(store, area, buf);
        }
    }

    pub fn get_cursor_position(&self, store: &RefCell<BoardStore>, area: Rect) -> Option<(u16, u16)> {
        let editing = {
            let s = store.borrow();
            s.mode == Mode::Form && s.alert.is_none()
        };
        match editing {
            true => self.editor.get_cursor_position(store, editor_area(area)),
            false => None,
        }
    }

    /// Routes a key to the alert if one is shown, otherwise to the screen of the mode.
    pub fn on_key(
        &mut self,
        store: &RefCell<BoardStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let (mode, alert) = {
            let s = store.borrow();
            (s.mode, s.alert.is_some())
        };

        let dispatcher = &mut self.dispatcher;
        let msg = match (alert, mode) {
            (true, _) => self.alert.on_key(dispatcher, store, area, event),
            (false, Mode::List) => self.list.on_key(dispatcher, store, area, event),
            (false, Mode::Form) => {
                self.editor
                    .on_key(dispatcher, store, editor_area(area), event)
            }
            (false, Mode::Confirm) => self.confirm.on_key(dispatcher, store, area, event),
        };

        self.sync_focus(store);
        msg
    }

    /// Resets the editor focus when the form opens or closes.
    fn sync_focus(&mut self, store: &RefCell<BoardStore>) {
        let mode = store.borrow().mode;
        if mode == self.mode {
            return;
        }

        if self.mode == Mode::Form {
            self.editor.deactivate(&mut self.dispatcher, store);
        }
        if mode == Mode::Form {
            self.editor.activate(&mut self.dispatcher, store);
        }
        self.mode = mode;
    }
}

fn editor_area(area: Rect) -> Rect {
    // three fields of three rows, form margin and page border
    popup_area(area, 60, 13)
}
