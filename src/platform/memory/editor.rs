//! # Memory Editor
//!
//! A complete in-process host: one document, its folded presentation,
//! an undo history and the widget state (caret, viewport, line indents).
//!
//! Built for tests and the console, not for large documents: every
//! translation and widget read rebuilds the projection, and every edit
//! rebuilds the buffer text.

use crate::config::{DEFAULT_AVERAGE_CHAR_WIDTH, DEFAULT_CARET_HEIGHT, DEFAULT_VIEWPORT_HEIGHT};
use crate::platform::error::BadLocation;
use crate::platform::host::{
    Document, EditorPart, GraphicsContext, ProjectionMapping, RedoFacility, TextWidget,
    UndoFacility,
};
use crate::platform::memory::buffer::TextBuffer;
use crate::platform::memory::fold::{FoldMap, Projection};
use crate::platform::memory::history::{Edit, UndoHistory};
use crate::platform::types::{CaretSize, Region};
use std::cell::Cell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Debug)]
pub struct MemoryEditor {
    buffer: TextBuffer,
    folds: FoldMap,
    history: UndoHistory,
    caret: usize,
    caret_size: CaretSize,
    top_line: usize,
    viewport_height: usize,
    indents: HashMap<usize, usize>,
    dirty: bool,
    save_path: Option<PathBuf>,
    save_count: usize,
    char_width: Option<usize>,
    graphics_outstanding: Rc<Cell<usize>>,
}

impl MemoryEditor {
    pub fn new(text: &str) -> Self {
        Self {
            buffer: TextBuffer::from_text(text),
            folds: FoldMap::new(),
            history: UndoHistory::new(),
            caret: 0,
            caret_size: CaretSize::new(DEFAULT_AVERAGE_CHAR_WIDTH, DEFAULT_CARET_HEIGHT),
            top_line: 0,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            indents: HashMap::new(),
            dirty: false,
            save_path: None,
            save_count: 0,
            char_width: Some(DEFAULT_AVERAGE_CHAR_WIDTH),
            graphics_outstanding: Rc::new(Cell::new(0)),
        }
    }

    pub fn with_viewport_height(mut self, height: usize) -> Self {
        self.viewport_height = height.max(1);
        self
    }

    /// Font width reported by graphics contexts; `None` makes measuring fail
    pub fn with_char_width(mut self, width: Option<usize>) -> Self {
        self.char_width = width;
        self
    }

    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = Some(path.into());
        self
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn folds(&self) -> &FoldMap {
        &self.folds
    }

    pub fn fold(&mut self, start: usize, end: usize) -> bool {
        self.folds.collapse(start, end)
    }

    pub fn unfold(&mut self, start: usize) -> bool {
        self.folds.expand(start)
    }

    pub fn unfold_all(&mut self) {
        self.folds.clear();
    }

    pub fn projection(&self) -> Projection<'_> {
        self.folds.project(&self.buffer)
    }

    pub fn top_line(&self) -> usize {
        self.top_line
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Graphics contexts acquired and not yet disposed
    pub fn graphics_outstanding(&self) -> usize {
        self.graphics_outstanding.get()
    }

    /// Apply history steps without recording them; all or nothing
    fn replay<'a>(&mut self, steps: impl IntoIterator<Item = (usize, usize, &'a str)>) -> bool {
        let mut buffer = self.buffer.clone();
        for (offset, length, text) in steps {
            if buffer.replace(offset, length, text).is_none() {
                tracing::warn!(
                    "history replay out of range: offset={} length={}",
                    offset,
                    length
                );
                return false;
            }
        }
        self.buffer = buffer;
        self.dirty = true;
        true
    }
}

impl Document for MemoryEditor {
    fn length(&self) -> usize {
        self.buffer.length()
    }

    fn text(&self, offset: usize, length: usize) -> Result<String, BadLocation> {
        self.buffer
            .slice(offset, length)
            .ok_or_else(|| BadLocation::new(offset, length, self.buffer.length()))
    }

    fn replace(&mut self, offset: usize, length: usize, text: &str) -> Result<(), BadLocation> {
        let bound = self.buffer.length();
        let removed = self
            .buffer
            .replace(offset, length, text)
            .ok_or_else(|| BadLocation::new(offset, length, bound))?;
        self.history
            .record(Edit::new(offset, removed, text.to_string()));
        self.dirty = true;
        Ok(())
    }

    fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    fn line_of_offset(&self, offset: usize) -> Result<usize, BadLocation> {
        self.buffer
            .line_of_offset(offset)
            .ok_or_else(|| BadLocation::new(offset, 0, self.buffer.length()))
    }

    fn line_region(&self, line: usize) -> Result<Region, BadLocation> {
        let offset = self
            .buffer
            .line_start(line)
            .ok_or_else(|| BadLocation::new(line, 0, self.buffer.line_count()))?;
        Ok(Region::new(offset, self.buffer.line_length(line)))
    }
}

impl TextWidget for MemoryEditor {
    fn text(&self, start: usize, end: usize) -> Result<String, BadLocation> {
        let projection = self.projection();
        let count = projection.length();
        if end >= count || start > end + 1 {
            return Err(BadLocation::new(
                start,
                end.saturating_add(1).saturating_sub(start),
                count,
            ));
        }
        Ok(projection
            .text()
            .chars()
            .skip(start)
            .take(end + 1 - start)
            .collect())
    }

    fn char_count(&self) -> usize {
        self.projection().length()
    }

    fn line_count(&self) -> usize {
        self.projection().line_count()
    }

    fn line_at_offset(&self, offset: usize) -> Result<usize, BadLocation> {
        let projection = self.projection();
        projection
            .line_at_offset(offset)
            .ok_or_else(|| BadLocation::new(offset, 0, projection.length()))
    }

    fn caret_offset(&self) -> usize {
        self.caret.min(self.projection().length())
    }

    fn set_caret_offset(&mut self, offset: usize) {
        self.caret = offset.min(self.projection().length());
    }

    fn show_selection(&mut self) {
        let caret = self.caret_offset();
        let line = self.projection().line_at_offset(caret).unwrap_or(0);
        if line < self.top_line {
            self.top_line = line;
        } else if line >= self.top_line + self.viewport_height {
            self.top_line = line + 1 - self.viewport_height;
        }
    }

    fn line_indent(&self, line: usize) -> usize {
        self.indents.get(&line).copied().unwrap_or(0)
    }

    fn set_line_indent(&mut self, line: usize, count: usize, indent: usize) {
        let end = line.saturating_add(count).min(TextWidget::line_count(&*self));
        for target in line..end {
            if indent == 0 {
                self.indents.remove(&target);
            } else {
                self.indents.insert(target, indent);
            }
        }
    }

    fn caret_size(&self) -> CaretSize {
        self.caret_size
    }

    fn set_caret_size(&mut self, size: CaretSize) {
        self.caret_size = size;
    }

    fn acquire_graphics(&self) -> Box<dyn GraphicsContext> {
        self.graphics_outstanding
            .set(self.graphics_outstanding.get() + 1);
        Box::new(MemoryGraphics {
            char_width: self.char_width,
            outstanding: self.graphics_outstanding.clone(),
            disposed: false,
        })
    }
}

impl ProjectionMapping for MemoryEditor {
    fn model_offset_to_widget_offset(&self, offset: usize) -> usize {
        self.projection().model_offset_to_widget_offset(offset)
    }

    fn widget_offset_to_model_offset(&self, offset: usize) -> usize {
        self.projection().widget_offset_to_model_offset(offset)
    }

    fn model_line_to_widget_line(&self, line: usize) -> usize {
        self.projection().model_line_to_widget_line(line)
    }

    fn widget_line_to_model_line(&self, line: usize) -> usize {
        self.projection().widget_line_to_model_line(line)
    }
}

impl UndoFacility for MemoryEditor {
    fn begin_compound_change(&mut self) {
        self.history.begin_compound_change();
    }

    fn end_compound_change(&mut self) {
        self.history.end_compound_change();
    }

    fn undoable(&self) -> bool {
        self.history.can_undo()
    }

    fn undo(&mut self) {
        let Some(group) = self.history.take_undo() else {
            return;
        };
        let steps = group
            .iter()
            .rev()
            .map(|edit| (edit.offset, edit.inserted.chars().count(), edit.removed.as_str()));
        if !self.replay(steps) {
            self.history.revert_undo();
        }
    }
}

impl RedoFacility for MemoryEditor {
    fn redoable(&self) -> bool {
        self.history.can_redo()
    }

    fn redo(&mut self) {
        let Some(group) = self.history.take_redo() else {
            return;
        };
        let steps = group
            .iter()
            .map(|edit| (edit.offset, edit.removed.chars().count(), edit.inserted.as_str()));
        if !self.replay(steps) {
            self.history.revert_redo();
        }
    }
}

impl EditorPart for MemoryEditor {
    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn save(&mut self) -> std::io::Result<()> {
        if let Some(path) = &self.save_path {
            std::fs::write(path, self.buffer.get_text())?;
        }
        self.dirty = false;
        self.save_count += 1;
        Ok(())
    }
}

/// Graphics context handed out by [`MemoryEditor`]
struct MemoryGraphics {
    char_width: Option<usize>,
    outstanding: Rc<Cell<usize>>,
    disposed: bool,
}

impl GraphicsContext for MemoryGraphics {
    fn average_char_width(&self) -> Option<usize> {
        self.char_width
    }

    fn dispose(&mut self) {
        if !self.disposed {
            self.disposed = true;
            self.outstanding.set(self.outstanding.get().saturating_sub(1));
        }
    }
}
