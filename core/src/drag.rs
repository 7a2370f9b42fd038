// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{TaskId, TaskStore};

/// An in-flight drag of one row.
///
/// Reordering happens on every hover, not only on drop: each time the dragged row passes
/// over another row it is moved there immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    id: TaskId,
    index: usize,
}

impl DragSession {
    /// Picks up the row at `index`.
    pub fn begin(store: &TaskStore, index: usize) -> Option<Self> {
        let task = store.tasks().get(index)?;
        tracing::debug!(id = %task.id(), index, "drag started");
        Some(Self {
            id: task.id(),
            index,
        })
    }

    /// The dragged task.
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// The current position of the dragged row.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Hovers the dragged row over the row at `target`, moving it there.
    ///
    /// Returns true if the list changed. The source index is re-read from the store, so a
    /// row moved by another event is still tracked; a dragged task that no longer exists
    /// makes every hover a no-op.
    pub fn hover(&mut self, store: &mut TaskStore, target: usize) -> bool {
        let Some(current) = store.position(self.id) else {
            tracing::debug!(id = %self.id, "dragged task is gone");
            return false;
        };

        self.index = current;
        if current == target || !store.reorder_by_drag(current, target) {
            return false;
        }

        self.index = target;
        true
    }

    /// Drops the row where it currently is.
    pub fn end(self) -> usize {
        tracing::debug!(id = %self.id, index = self.index, "drag ended");
        self.index
    }
}
