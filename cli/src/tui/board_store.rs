// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use tally_core::{Board, Direction, DragSession, TaskForm, TaskId};

use crate::tui::dispatcher::{Action, Dispatcher};

/// Which screen has the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    Form,
    Confirm,
}

/// State of the terminal UI on top of a [`Board`].
#[derive(Debug)]
pub struct BoardStore {
    pub board: Board,
    pub mode: Mode,

    /// Index of the selected row.
    pub selected: usize,

    /// The open form, meaningful only in [`Mode::Form`].
    pub form: TaskForm,

    /// Message shown over everything until dismissed.
    pub alert: Option<String>,

    /// The row being dragged and the index it was picked up at.
    pub drag: Option<(DragSession, usize)>,
}

impl BoardStore {
    pub fn new(board: Board) -> Self {
        let form = board.new_form();
        Self {
            board,
            mode: Mode::List,
            selected: 0,
            form,
            alert: None,
            drag: None,
        }
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Id of the selected task, if the list is not empty.
    pub fn selected_id(&self) -> Option<TaskId> {
        self.board.tasks().get(self.selected).map(|t| t.id())
    }

    pub fn select(&mut self, index: usize) {
        let len = self.board.tasks().len();
        self.selected = index.min(len.saturating_sub(1));
    }

    pub fn open_create_form(&mut self) {
        self.form = self.board.new_form();
        self.mode = Mode::Form;
    }

    pub fn open_edit_form(&mut self, id: TaskId) {
        if let Some(form) = self.board.begin_edit(id) {
            self.form = form;
            self.mode = Mode::Form;
        }
    }

    /// Submits the open form. On error the form stays open with its values and the
    /// error is raised as an alert.
    pub fn submit_form(&mut self) {
        match self.board.submit(&self.form) {
            Ok(task) => {
                let id = task.map(|t| t.id());
                self.mode = Mode::List;
                if let Some(index) = id.and_then(|id| self.board.store().position(id)) {
                    self.selected = index;
                }
            }
            Err(e) => {
                tracing::debug!(err = %e, "form rejected");
                self.alert = Some(e.to_string());
            }
        }
    }

    pub fn close_form(&mut self) {
        self.board.cancel_edit();
        self.mode = Mode::List;
    }

    pub fn request_delete(&mut self, id: TaskId) {
        if self.board.request_delete(id) {
            self.mode = Mode::Confirm;
        }
    }

    pub fn confirm_delete(&mut self) {
        self.board.confirm_delete();
        self.mode = Mode::List;
        self.select(self.selected);
    }

    pub fn cancel_delete(&mut self) {
        self.board.cancel_delete();
        self.mode = Mode::List;
    }

    /// Moves a task one step, keeping it selected.
    pub fn move_task(&mut self, id: TaskId, direction: Direction) {
        if self.board.move_task(id, direction)
            && let Some(index) = self.board.store().position(id)
        {
            self.selected = index;
        }
    }

    /// Picks up the selected row.
    pub fn grab(&mut self) {
        if self.drag.is_none()
            && let Some(session) = self.board.begin_drag(self.selected)
        {
            self.drag = Some((session, self.selected));
        }
    }

    /// Hovers the dragged row over `index`, which becomes the selection.
    pub fn drag_to(&mut self, index: usize) {
        let Some((session, _)) = self.drag.as_mut() else {
            return;
        };

        self.board.drag_hover(session, index);
        self.selected = session.index();
    }

    pub fn drop_drag(&mut self) {
        if let Some((session, _)) = self.drag.take() {
            self.selected = self.board.end_drag(session);
        }
    }

    /// Puts the dragged row back where it was picked up.
    pub fn cancel_drag(&mut self) {
        if let Some((mut session, origin)) = self.drag.take() {
            self.board.drag_hover(&mut session, origin);
            self.selected = self.board.end_drag(session);
        }
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            let mut that = that.borrow_mut();
            match action {
                Action::Select(index) => that.select(*index),
                Action::OpenCreateForm => that.open_create_form(),
                Action::OpenEditForm(id) => that.open_edit_form(*id),
                Action::UpdateName(v) => that.form.name = v.clone(),
                Action::UpdateCost(v) => that.form.cost = v.clone(),
                Action::UpdateDue(v) => that.form.due = v.clone(),
                Action::SubmitForm => that.submit_form(),
                Action::CloseForm => that.close_form(),
                Action::RequestDelete(id) => that.request_delete(*id),
                Action::ConfirmDelete => that.confirm_delete(),
                Action::CancelDelete => that.cancel_delete(),
                Action::Move(id, direction) => that.move_task(*id, *direction),
                Action::Grab => that.grab(),
                Action::DragTo(index) => that.drag_to(*index),
                Action::Drop => that.drop_drag(),
                Action::CancelDrag => that.cancel_drag(),
                Action::DismissAlert => that.alert = None,
            }
        }));
        dispatcher.register(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{Config, Cost, CurrencyInput, Locale};

    fn setup(names: &[&str]) -> (Rc<RefCell<BoardStore>>, Dispatcher) {
        let mut board = Board::new(Config::default());
        for name in names {
            let mut form = board.new_form();
            form.name = name.to_string();
            form.cost = CurrencyInput::with_value(Locale::EnUs, Cost::from_units(1));
            form.due = "2024-01-10".to_string();
            board.submit(&form).unwrap();
        }

        let store = Rc::new(RefCell::new(BoardStore::new(board)));
        let mut dispatcher = Dispatcher::new();
        BoardStore::register_to(store.clone(), &mut dispatcher);
        (store, dispatcher)
    }

    fn names(store: &Rc<RefCell<BoardStore>>) -> Vec<String> {
        let store = store.borrow();
        store.board.tasks().iter().map(|t| t.name().to_string()).collect()
    }

    #[test]
    fn test_create_through_actions() {
        let (store, mut dispatcher) = setup(&["A"]);
        dispatcher.dispatch(Action::OpenCreateForm);
        assert_eq!(store.borrow().mode, Mode::Form);

        dispatcher.dispatch(Action::UpdateName("B".to_string()));
        let mut cost = CurrencyInput::new(Locale::EnUs);
        cost.push('5');
        dispatcher.dispatch(Action::UpdateCost(cost));
        dispatcher.dispatch(Action::UpdateDue("2024-02-01".to_string()));
        dispatcher.dispatch(Action::SubmitForm);

        let s = store.borrow();
        assert_eq!(s.mode, Mode::List);
        assert_eq!(s.selected, 1);
        assert_eq!(s.alert, None);
        assert_eq!(s.board.tasks()[1].cost(), Cost::from_cents(5));
    }

    #[test]
    fn test_rejected_form_stays_open_with_alert() {
        let (store, mut dispatcher) = setup(&["Milk"]);
        dispatcher.dispatch(Action::OpenCreateForm);
        dispatcher.dispatch(Action::UpdateName("MILK".to_string()));
        dispatcher.dispatch(Action::SubmitForm);

        {
            let s = store.borrow();
            assert_eq!(s.mode, Mode::Form);
            assert_eq!(s.form.name, "MILK");
            assert!(s.alert.is_some());
        }
        dispatcher.dispatch(Action::DismissAlert);
        assert_eq!(store.borrow().alert, None);
        assert_eq!(names(&store), vec!["Milk"]);
    }

    #[test]
    fn test_edit_and_close() {
        let (store, mut dispatcher) = setup(&["A", "B"]);
        let id = store.borrow().board.tasks()[1].id();

        dispatcher.dispatch(Action::OpenEditForm(id));
        assert_eq!(store.borrow().form.name, "B");
        assert_eq!(store.borrow().board.editing(), Some(id));

        dispatcher.dispatch(Action::CloseForm);
        assert_eq!(store.borrow().mode, Mode::List);
        assert_eq!(store.borrow().board.editing(), None);
    }

    #[test]
    fn test_delete_confirmation_clamps_selection() {
        let (store, mut dispatcher) = setup(&["A", "B"]);
        dispatcher.dispatch(Action::Select(1));
        let id = store.borrow().selected_id().unwrap();

        dispatcher.dispatch(Action::RequestDelete(id));
        assert_eq!(store.borrow().mode, Mode::Confirm);
        dispatcher.dispatch(Action::CancelDelete);
        assert_eq!(names(&store), vec!["A", "B"]);

        dispatcher.dispatch(Action::RequestDelete(id));
        dispatcher.dispatch(Action::ConfirmDelete);
        assert_eq!(names(&store), vec!["A"]);
        assert_eq!(store.borrow().selected, 0);
        assert_eq!(store.borrow().mode, Mode::List);
    }

    #[test]
    fn test_move_keeps_selection_on_task() {
        let (store, mut dispatcher) = setup(&["A", "B", "C"]);
        let id = store.borrow().board.tasks()[2].id();
        dispatcher.dispatch(Action::Select(2));
        dispatcher.dispatch(Action::Move(id, Direction::Up));
        assert_eq!(names(&store), vec!["A", "C", "B"]);
        assert_eq!(store.borrow().selected, 1);
    }

    #[test]
    fn test_drag_and_drop() {
        let (store, mut dispatcher) = setup(&["A", "B", "C"]);
        dispatcher.dispatch(Action::Grab);
        dispatcher.dispatch(Action::DragTo(1));
        assert_eq!(names(&store), vec!["B", "A", "C"]);
        dispatcher.dispatch(Action::DragTo(2));
        assert_eq!(names(&store), vec!["B", "C", "A"]);
        dispatcher.dispatch(Action::Drop);

        let s = store.borrow();
        assert!(s.drag.is_none());
        assert_eq!(s.selected, 2);
    }

    #[test]
    fn test_cancel_drag_restores_position() {
        let (store, mut dispatcher) = setup(&["A", "B", "C"]);
        dispatcher.dispatch(Action::Select(2));
        dispatcher.dispatch(Action::Grab);
        dispatcher.dispatch(Action::DragTo(1));
        dispatcher.dispatch(Action::DragTo(0));
        assert_eq!(names(&store), vec!["C", "A", "B"]);

        dispatcher.dispatch(Action::CancelDrag);
        assert_eq!(names(&store), vec!["A", "B", "C"]);
        assert_eq!(store.borrow().selected, 2);
    }

    #[test]
    fn test_select_clamps() {
        let (store, mut dispatcher) = setup(&["A", "B"]);
        dispatcher.dispatch(Action::Select(9));
        assert_eq!(store.borrow().selected, 1);
    }
}
