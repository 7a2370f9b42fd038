// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod board_store;
mod component;
mod component_form;
mod component_page;
mod dialog;
mod dispatcher;
mod task_editor;
mod task_list;

pub use app::run_board;
