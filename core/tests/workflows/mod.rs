// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the tally-core crate.
//!
//! These tests drive a `Board` the way a front end does: through forms, list actions,
//! delete confirmations and drag gestures.

mod delete_confirmation;
mod form_submission;
mod reordering;
mod scenarios;
