//! # In-Memory Host
//!
//! Reference host implementation backing the console and the tests.
//!
//! ```text
//! MemoryHost ── Rc<RefCell<MemoryEditor>> ──▶ Document, TextWidget,
//!                                             ProjectionMapping,
//!                                             UndoFacility, RedoFacility,
//!                                             EditorPart
//! ```

pub mod buffer;
pub mod editor;
pub mod fold;
pub mod history;

pub use buffer::TextBuffer;
pub use editor::MemoryEditor;
pub use fold::{Fold, FoldMap, Projection};
pub use history::{Edit, EditGroup, UndoHistory};

use crate::platform::host::HostHandles;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// Shared owner of a [`MemoryEditor`]
#[derive(Debug, Clone)]
pub struct MemoryHost {
    editor: Rc<RefCell<MemoryEditor>>,
}

impl MemoryHost {
    pub fn new(text: &str) -> Self {
        Self::from_editor(MemoryEditor::new(text))
    }

    pub fn from_editor(editor: MemoryEditor) -> Self {
        Self {
            editor: Rc::new(RefCell::new(editor)),
        }
    }

    /// Handles with every capability present
    pub fn handles(&self) -> HostHandles {
        HostHandles {
            document: self.editor.clone(),
            widget: self.editor.clone(),
            part: self.editor.clone(),
            projection: Some(self.editor.clone()),
            undo: Some(self.editor.clone()),
            redo: Some(self.editor.clone()),
        }
    }

    pub fn editor(&self) -> Ref<'_, MemoryEditor> {
        self.editor.borrow()
    }

    pub fn editor_mut(&self) -> RefMut<'_, MemoryEditor> {
        self.editor.borrow_mut()
    }

    /// Whole document text
    pub fn text(&self) -> String {
        self.editor.borrow().buffer().get_text()
    }

    /// Text currently shown by the widget
    pub fn visible_text(&self) -> String {
        self.editor.borrow().projection().text()
    }

    pub fn fold(&self, start: usize, end: usize) -> bool {
        self.editor.borrow_mut().fold(start, end)
    }

    pub fn unfold(&self, start: usize) -> bool {
        self.editor.borrow_mut().unfold(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_should_share_one_editor() {
        let host = MemoryHost::new("abc");
        let handles = host.handles();
        handles
            .document
            .borrow_mut()
            .replace(0, 0, "x")
            .unwrap();
        assert_eq!(host.text(), "xabc");
        assert_eq!(handles.widget.borrow().char_count(), 4);
    }

    #[test]
    fn capabilities_should_be_removable() {
        let host = MemoryHost::new("");
        let handles = host.handles().without_projection().without_redo();
        assert!(handles.projection.is_none());
        assert!(handles.undo.is_some());
        assert!(handles.redo.is_none());
        assert!(host.handles().without_undo().redo.is_none());
    }

    #[test]
    fn fold_should_change_visible_text_only() {
        let host = MemoryHost::new("a\nb\nc");
        assert!(host.fold(0, 1));
        assert_eq!(host.visible_text(), "a\nc");
        assert_eq!(host.text(), "a\nb\nc");
        assert!(host.unfold(0));
        assert_eq!(host.visible_text(), "a\nb\nc");
    }
}
