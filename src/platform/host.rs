//! # Host Abstraction Layer
//!
//! Trait abstractions for the host editor the platform adapts to. The host
//! owns the document and the widget; the platform only borrows them through
//! shared handles.
//!
//! ## Architecture
//!
//! ```text
//! Modal engine ──▶ EditorPlatform ──▶ Document          (logical space)
//!                                 ──▶ TextWidget        (presentation space)
//!                                 ──▶ ProjectionMapping (optional)
//!                                 ──▶ UndoFacility      (optional)
//!                                 ──▶ RedoFacility      (optional)
//!                                 ──▶ EditorPart        (save)
//! ```
//!
//! Handles are `Rc<RefCell<dyn _>>`: everything runs on the host's UI
//! thread and no call re-enters the platform.

use crate::platform::error::BadLocation;
use crate::platform::types::{CaretSize, Region};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared single-threaded handle to a host collaborator
pub type Shared<T> = Rc<RefCell<T>>;

/// Backing document, addressed in logical space
pub trait Document {
    /// Total length in characters, delimiters included
    fn length(&self) -> usize;

    /// Read `length` characters starting at `offset`
    fn text(&self, offset: usize, length: usize) -> Result<String, BadLocation>;

    /// Replace `length` characters at `offset` with `text`
    fn replace(&mut self, offset: usize, length: usize, text: &str) -> Result<(), BadLocation>;

    fn line_count(&self) -> usize;

    fn line_of_offset(&self, offset: usize) -> Result<usize, BadLocation>;

    /// Start offset and length (without delimiter) of `line`
    fn line_region(&self, line: usize) -> Result<Region, BadLocation>;
}

/// Visible text widget, addressed in presentation space
pub trait TextWidget {
    /// Read widget text between `start` and `end`, both inclusive
    fn text(&self, start: usize, end: usize) -> Result<String, BadLocation>;

    fn char_count(&self) -> usize;

    fn line_count(&self) -> usize;

    fn line_at_offset(&self, offset: usize) -> Result<usize, BadLocation>;

    fn caret_offset(&self) -> usize;

    fn set_caret_offset(&mut self, offset: usize);

    /// Scroll so that the caret is visible
    fn show_selection(&mut self);

    fn line_indent(&self, line: usize) -> usize;

    /// Apply `indent` to `count` lines starting at `line`
    fn set_line_indent(&mut self, line: usize, count: usize, indent: usize);

    fn caret_size(&self) -> CaretSize;

    fn set_caret_size(&mut self, size: CaretSize);

    /// Acquire a graphics context bound to the widget's current font.
    /// Callers must dispose it; see [`ScopedGraphics`].
    fn acquire_graphics(&self) -> Box<dyn GraphicsContext>;
}

/// Transient graphics resource used for font measurement
pub trait GraphicsContext {
    /// Average character width of the current font, if it can be measured
    fn average_char_width(&self) -> Option<usize>;

    /// Release the underlying resource
    fn dispose(&mut self);
}

/// Owns a graphics context for one scope and disposes it on every exit path
pub struct ScopedGraphics {
    context: Box<dyn GraphicsContext>,
}

impl ScopedGraphics {
    pub fn acquire(widget: &dyn TextWidget) -> Self {
        Self {
            context: widget.acquire_graphics(),
        }
    }

    pub fn average_char_width(&self) -> Option<usize> {
        self.context.average_char_width()
    }
}

impl Drop for ScopedGraphics {
    fn drop(&mut self) {
        self.context.dispose();
    }
}

/// Offset and line translation between document and widget, accounting for
/// folded regions
pub trait ProjectionMapping {
    fn model_offset_to_widget_offset(&self, offset: usize) -> usize;

    fn widget_offset_to_model_offset(&self, offset: usize) -> usize;

    fn model_line_to_widget_line(&self, line: usize) -> usize;

    fn widget_line_to_model_line(&self, line: usize) -> usize;
}

/// Host undo manager with compound-change bracketing
pub trait UndoFacility {
    fn begin_compound_change(&mut self);

    fn end_compound_change(&mut self);

    fn undoable(&self) -> bool;

    fn undo(&mut self);
}

/// Forward counterpart of [`UndoFacility`]; hosts may not offer it
pub trait RedoFacility {
    fn redoable(&self) -> bool;

    fn redo(&mut self);
}

/// The editor part that owns persistence of the document
pub trait EditorPart {
    fn is_dirty(&self) -> bool;

    fn save(&mut self) -> std::io::Result<()>;
}

/// Every collaborator the platform talks to, with optional capabilities
/// already resolved
#[derive(Clone)]
pub struct HostHandles {
    pub document: Shared<dyn Document>,
    pub widget: Shared<dyn TextWidget>,
    pub part: Shared<dyn EditorPart>,
    pub projection: Option<Shared<dyn ProjectionMapping>>,
    pub undo: Option<Shared<dyn UndoFacility>>,
    pub redo: Option<Shared<dyn RedoFacility>>,
}

impl HostHandles {
    pub fn without_projection(mut self) -> Self {
        self.projection = None;
        self
    }

    pub fn without_undo(mut self) -> Self {
        self.undo = None;
        self.redo = None;
        self
    }

    pub fn without_redo(mut self) -> Self {
        self.redo = None;
        self
    }
}

impl std::fmt::Debug for HostHandles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostHandles")
            .field("projection", &self.projection.is_some())
            .field("undo", &self.undo.is_some())
            .field("redo", &self.redo.is_some())
            .finish_non_exhaustive()
    }
}
