// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use tally_core::CurrencyInput;

use crate::tui::board_store::BoardStore;
use crate::tui::component_form::{Access, CurrencyField, Form, FormItem, Input};
use crate::tui::component_page::SinglePage;
use crate::tui::dispatcher::{Action, Dispatcher};

pub type TaskFields = Form<BoardStore, Box<dyn FormItem<BoardStore>>>;

pub type TaskEditor = SinglePage<BoardStore, TaskFields>;

pub fn new_task_editor() -> TaskEditor {
    SinglePage::new("Task", new_task_fields())
        .with_instructions(vec![("Next", "Tab"), ("Save", "Enter"), ("Close", "Esc")])
        .with_escape(Action::CloseForm)
}

pub fn new_task_fields() -> TaskFields {
    Form::new(vec![
        Box::new(Input::<BoardStore, NameAccess>::new("Name")),
        Box::new(CurrencyField::<BoardStore, CostAccess>::new("Cost")),
        Box::new(Input::<BoardStore, DueAccess>::new("Due (YYYY-MM-DD)")),
    ])
}

macro_rules! text_access {
    ($acc: ident, $field: ident, $action: ident) => {
        struct $acc;

        impl Access<BoardStore, String> for $acc {
            fn get(store: &RefCell<BoardStore>) -> String {
                store.borrow().form.$field.clone()
            }

            fn set(dispatcher: &mut Dispatcher, value: String) {
                dispatcher.dispatch(Action::$action(value));
            }
        }
    };
}

text_access!(NameAccess, name, UpdateName);
text_access!(DueAccess, due, UpdateDue);

struct CostAccess;

impl Access<BoardStore, CurrencyInput> for CostAccess {
    fn get(store: &RefCell<BoardStore>) -> CurrencyInput {
        store.borrow().form.cost.clone()
    }

    fn set(dispatcher: &mut Dispatcher, value: CurrencyInput) {
        dispatcher.dispatch(Action::UpdateCost(value));
    }
}
