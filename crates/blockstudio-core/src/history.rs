//! Linear undo/redo over full-state snapshots.

use crate::component::{ComponentId, PlacedComponent};
use serde::{Deserialize, Serialize};

/// An immutable capture of the canvas state: deep copies of every
/// component plus the selection at the time of the action. Snapshots
/// never alias live store data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub components: Vec<PlacedComponent>,
    pub selected: Option<ComponentId>,
}

impl Snapshot {
    /// Snapshot of an empty canvas with nothing selected.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(components: Vec<PlacedComponent>, selected: Option<ComponentId>) -> Self {
        Self {
            components,
            selected,
        }
    }
}

/// Append-only snapshot sequence with a cursor at the "current" entry.
///
/// One snapshot is recorded per discrete user action (add, move-end,
/// resize-end, delete, property change, template load), never per
/// intermediate drag frame. Recording after an undo discards the redo
/// branch.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Snapshot>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Snapshot::empty())
    }
}

impl History {
    /// Start a new history seeded with the initial state at cursor 0.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Record a snapshot after a discrete user action.
    ///
    /// Truncates everything past the cursor, appends, and moves the cursor
    /// to the new last entry.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;
    }

    /// Step the cursor back and return the snapshot there.
    /// No-op at the beginning of history.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step the cursor forward and return the snapshot there.
    /// No-op at the end of history.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Discard everything and restart from a single snapshot at cursor 0.
    /// Used when a template replaces the whole canvas.
    pub fn reset(&mut self, snapshot: Snapshot) {
        self.entries = vec![snapshot];
        self.cursor = 0;
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> &Snapshot {
        &self.entries[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
