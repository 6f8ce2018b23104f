use crate::models::IngredientLine;

/// Maximum retained snapshots; older states are evicted first.
pub const MAX_HISTORY: usize = 50;

/// One stored state of the working set.
pub type Snapshot = Vec<IngredientLine>;

/// Linear snapshot history with a cursor.
///
/// Only `commit` appends; `jump_to_first` and `redo` reposition the cursor
/// and never write, so a state replacement triggered by either can not echo
/// itself back into the history. Invariant: `index < entries.len()` whenever
/// the history is non-empty.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    entries: Vec<Snapshot>,
    index: usize,
}

impl SnapshotHistory {
    /// Start a fresh history whose only entry is `initial`.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// Record `state` as the new head.
    ///
    /// Returns false without writing when `state` equals the snapshot at
    /// the cursor, so no-op edits never grow the history. Committing while
    /// the cursor sits mid-history discards the redo tail. When the bound
    /// is exceeded the oldest entry is dropped and the cursor shifts.
    pub fn commit(&mut self, state: &[IngredientLine]) -> bool {
        if self.entries[self.index] == state {
            return false;
        }

        self.entries.truncate(self.index + 1);
        self.entries.push(state.to_vec());
        self.index += 1;

        if self.entries.len() > MAX_HISTORY {
            self.entries.remove(0);
            self.index -= 1;
        }

        true
    }

    /// Move the cursor to the first retained state and return it.
    ///
    /// Returns None when already there.
    pub fn jump_to_first(&mut self) -> Option<Snapshot> {
        if self.index == 0 {
            return None;
        }
        self.index = 0;
        Some(self.entries[0].clone())
    }

    /// Advance the cursor one step and return the state there.
    ///
    /// Returns None at the tail.
    pub fn redo(&mut self) -> Option<Snapshot> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.entries[self.index].clone())
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn at_first(&self) -> bool {
        self.index == 0
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }
}
