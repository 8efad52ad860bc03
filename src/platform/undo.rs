//! # Undo Coordination
//!
//! Brackets edits into compound changes and routes undo/redo to the host.
//! Both capabilities are optional; without them every call is a no-op.

use crate::platform::host::{RedoFacility, Shared, UndoFacility};

pub struct UndoCoordinator {
    undo: Option<Shared<dyn UndoFacility>>,
    redo: Option<Shared<dyn RedoFacility>>,
}

impl UndoCoordinator {
    pub fn new(
        undo: Option<Shared<dyn UndoFacility>>,
        redo: Option<Shared<dyn RedoFacility>>,
    ) -> Self {
        if undo.is_some() && redo.is_none() {
            tracing::warn!("host offers no redo; redo() will step backward like undo()");
        }
        Self { undo, redo }
    }

    pub fn has_undo(&self) -> bool {
        self.undo.is_some()
    }

    pub fn has_redo(&self) -> bool {
        self.redo.is_some()
    }

    /// Close the open compound change and start the next one
    pub fn mark(&self) {
        if let Some(undo) = &self.undo {
            let mut undo = undo.borrow_mut();
            undo.end_compound_change();
            undo.begin_compound_change();
            tracing::trace!("undo mark set");
        }
    }

    pub fn undo(&self) {
        if let Some(undo) = &self.undo {
            let mut undo = undo.borrow_mut();
            if undo.undoable() {
                undo.undo();
            }
        }
    }

    /// Step forward when the host supports it, otherwise step backward
    pub fn redo(&self) {
        match &self.redo {
            Some(redo) => {
                let mut redo = redo.borrow_mut();
                if redo.redoable() {
                    redo.redo();
                }
            }
            None => {
                tracing::debug!("redo: no redo capability, aliasing to undo");
                self.undo();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingUndo {
        calls: Vec<&'static str>,
        steps: usize,
        forward: usize,
    }

    impl UndoFacility for RecordingUndo {
        fn begin_compound_change(&mut self) {
            self.calls.push("begin");
        }

        fn end_compound_change(&mut self) {
            self.calls.push("end");
        }

        fn undoable(&self) -> bool {
            self.steps > 0
        }

        fn undo(&mut self) {
            self.calls.push("undo");
            self.steps -= 1;
            self.forward += 1;
        }
    }

    impl RedoFacility for RecordingUndo {
        fn redoable(&self) -> bool {
            self.forward > 0
        }

        fn redo(&mut self) {
            self.calls.push("redo");
            self.forward -= 1;
            self.steps += 1;
        }
    }

    fn recording(steps: usize) -> Rc<RefCell<RecordingUndo>> {
        Rc::new(RefCell::new(RecordingUndo {
            steps,
            ..Default::default()
        }))
    }

    #[test]
    fn mark_should_end_then_begin() {
        let facility = recording(0);
        let coordinator = UndoCoordinator::new(Some(facility.clone()), None);
        coordinator.mark();
        assert_eq!(facility.borrow().calls, vec!["end", "begin"]);
    }

    #[test]
    fn missing_facility_should_make_everything_a_no_op() {
        let coordinator = UndoCoordinator::new(None, None);
        coordinator.mark();
        coordinator.mark();
        coordinator.undo();
        coordinator.redo();
        assert!(!coordinator.has_undo());
        assert!(!coordinator.has_redo());
    }

    #[test]
    fn undo_should_skip_when_nothing_is_undoable() {
        let facility = recording(0);
        let coordinator = UndoCoordinator::new(Some(facility.clone()), None);
        coordinator.undo();
        assert!(facility.borrow().calls.is_empty());
    }

    #[test]
    fn redo_without_capability_should_step_backward() {
        let facility = recording(2);
        let coordinator = UndoCoordinator::new(Some(facility.clone()), None);
        coordinator.redo();
        assert_eq!(facility.borrow().calls, vec!["undo"]);
        assert_eq!(facility.borrow().steps, 1);
    }

    #[test]
    fn redo_with_capability_should_step_forward() {
        let facility = recording(1);
        let coordinator = UndoCoordinator::new(Some(facility.clone()), Some(facility.clone()));
        coordinator.undo();
        coordinator.redo();
        assert_eq!(facility.borrow().calls, vec!["undo", "redo"]);
        assert_eq!(facility.borrow().steps, 1);
    }

    #[test]
    fn redo_with_capability_should_skip_when_nothing_to_redo() {
        let facility = recording(1);
        let coordinator = UndoCoordinator::new(Some(facility.clone()), Some(facility.clone()));
        coordinator.redo();
        assert!(facility.borrow().calls.is_empty());
    }
}
