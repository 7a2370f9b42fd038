// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration test for the common module.
//!
//! Verifies that common test utilities work correctly.

mod common;

use common::{assert_dense_order, assert_names, board_with, id_of, test_config};
use tally_core::Cost;

#[test]
fn common_module_fixtures_work() {
    let board = board_with(&["A", "B"]);
    assert_names(&board, &["A", "B"]);
    assert_dense_order(&board);
    assert_eq!(id_of(&board, "B").to_string(), "2");
}

#[test]
fn common_module_config_works() {
    let config = test_config(250);
    assert_eq!(config.highlight_threshold, Cost::from_units(250));
}
