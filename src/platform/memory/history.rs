//! # Undo History
//!
//! Records buffer edits and groups them into compound changes. Edits made
//! while no compound change is open become undo steps of their own.

/// One recorded replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub offset: usize,
    pub removed: String,
    pub inserted: String,
}

impl Edit {
    pub fn new(offset: usize, removed: String, inserted: String) -> Self {
        Self {
            offset,
            removed,
            inserted,
        }
    }
}

/// Group of edits undone and redone together
pub type EditGroup = Vec<Edit>;

#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    done: Vec<EditGroup>,
    undone: Vec<EditGroup>,
    open: Option<EditGroup>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, edit: Edit) {
        self.undone.clear();
        match &mut self.open {
            Some(group) => group.push(edit),
            None => self.done.push(vec![edit]),
        }
    }

    pub fn begin_compound_change(&mut self) {
        self.close();
        self.open = Some(Vec::new());
    }

    pub fn end_compound_change(&mut self) {
        self.close();
    }

    pub fn is_compound_open(&self) -> bool {
        self.open.is_some()
    }

    fn close(&mut self) {
        if let Some(group) = self.open.take() {
            if !group.is_empty() {
                self.done.push(group);
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.done.is_empty() || self.open.as_ref().is_some_and(|group| !group.is_empty())
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Number of completed undo steps
    pub fn depth(&self) -> usize {
        self.done.len()
    }

    /// Take the most recent group for reverting. An open compound change is
    /// committed first and reopened empty afterwards.
    pub fn take_undo(&mut self) -> Option<EditGroup> {
        let reopen = self.open.is_some();
        self.close();
        let group = self.done.pop();
        if let Some(group) = &group {
            self.undone.push(group.clone());
        }
        if reopen {
            self.open = Some(Vec::new());
        }
        group
    }

    /// Put back the group last taken by [`Self::take_undo`]
    pub fn revert_undo(&mut self) {
        if let Some(group) = self.undone.pop() {
            self.done.push(group);
        }
    }

    /// Put back the group last taken by [`Self::take_redo`]
    pub fn revert_redo(&mut self) {
        if let Some(group) = self.done.pop() {
            self.undone.push(group);
        }
    }

    /// Take the most recently undone group for reapplying
    pub fn take_redo(&mut self) -> Option<EditGroup> {
        let reopen = self.open.is_some();
        self.close();
        let group = self.undone.pop();
        if let Some(group) = &group {
            self.done.push(group.clone());
        }
        if reopen {
            self.open = Some(Vec::new());
        }
        group
    }
}
