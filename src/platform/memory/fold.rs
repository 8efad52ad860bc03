//! # Fold Map
//!
//! Collapsed line ranges and the projection they induce. A fold keeps its
//! first line visible and hides the rest; the visible lines, joined by
//! `\n`, are what the widget shows.

use crate::platform::memory::buffer::TextBuffer;
use serde::{Deserialize, Serialize};

/// Collapsed range of logical lines, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fold {
    pub start: usize,
    pub end: usize,
}

impl Fold {
    fn hides(&self, line: usize) -> bool {
        line > self.start && line <= self.end
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoldMap {
    folds: Vec<Fold>,
}

impl FoldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn folds(&self) -> &[Fold] {
        &self.folds
    }

    pub fn is_empty(&self) -> bool {
        self.folds.is_empty()
    }

    /// Collapse `start..=end`; single-line ranges hide nothing and are ignored
    pub fn collapse(&mut self, start: usize, end: usize) -> bool {
        if end <= start || self.folds.iter().any(|f| f.start == start) {
            return false;
        }
        self.folds.push(Fold { start, end });
        self.folds.sort_by_key(|f| f.start);
        true
    }

    /// Expand the fold whose header is `start`
    pub fn expand(&mut self, start: usize) -> bool {
        let before = self.folds.len();
        self.folds.retain(|f| f.start != start);
        self.folds.len() != before
    }

    pub fn clear(&mut self) {
        self.folds.clear();
    }

    pub fn is_hidden(&self, line: usize) -> bool {
        self.folds.iter().any(|f| f.hides(line))
    }

    /// Build the projection of `buffer` under the current folds
    pub fn project<'a>(&self, buffer: &'a TextBuffer) -> Projection<'a> {
        let visible: Vec<usize> = (0..buffer.line_count())
            .filter(|&line| !self.is_hidden(line))
            .collect();
        let mut starts = Vec::with_capacity(visible.len());
        let mut next = 0;
        for &line in &visible {
            starts.push(next);
            next += buffer.line_length(line) + 1;
        }
        Projection {
            buffer,
            visible,
            starts,
        }
    }
}

/// Snapshot of the presentation of one buffer state
#[derive(Debug)]
pub struct Projection<'a> {
    buffer: &'a TextBuffer,
    /// Logical line of each presentation line
    visible: Vec<usize>,
    /// Presentation offset where each presentation line starts
    starts: Vec<usize>,
}

impl Projection<'_> {
    pub fn line_count(&self) -> usize {
        self.visible.len()
    }

    /// Presentation length in characters, delimiters included
    pub fn length(&self) -> usize {
        match (self.starts.last(), self.visible.last()) {
            (Some(&start), Some(&line)) => start + self.buffer.line_length(line),
            _ => 0,
        }
    }

    pub fn text(&self) -> String {
        self.visible
            .iter()
            .filter_map(|&line| self.buffer.get_line(line).map(String::as_str))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Presentation line containing `offset`
    pub fn line_at_offset(&self, offset: usize) -> Option<usize> {
        if offset > self.length() {
            return None;
        }
        Some(self.starts.partition_point(|&start| start <= offset).saturating_sub(1))
    }

    /// Presentation line of the last visible logical line at or before `line`
    fn header_of(&self, line: usize) -> usize {
        self.visible
            .partition_point(|&visible| visible <= line)
            .saturating_sub(1)
    }

    pub fn model_line_to_widget_line(&self, line: usize) -> usize {
        let count = self.buffer.line_count();
        if line >= count {
            return self.visible.len() + (line - count);
        }
        self.header_of(line)
    }

    pub fn widget_line_to_model_line(&self, line: usize) -> usize {
        match self.visible.get(line) {
            Some(&logical) => logical,
            None => self.buffer.line_count() + (line - self.visible.len()),
        }
    }

    /// Hidden offsets land where the hidden region would begin, just past
    /// the fold header's delimiter
    pub fn model_offset_to_widget_offset(&self, offset: usize) -> usize {
        let Some(line) = self.buffer.line_of_offset(offset) else {
            return self.length() + (offset - self.buffer.length());
        };
        let line_start = self.buffer.line_start(line).unwrap_or(0);
        let widget_line = self.header_of(line);
        let widget_start = self.starts.get(widget_line).copied().unwrap_or(0);
        if self.visible.get(widget_line) == Some(&line) {
            widget_start + (offset - line_start)
        } else {
            let header = self.visible.get(widget_line).copied().unwrap_or(0);
            widget_start + self.buffer.line_length(header) + 1
        }
    }

    pub fn widget_offset_to_model_offset(&self, offset: usize) -> usize {
        let Some(widget_line) = self.line_at_offset(offset) else {
            return self.buffer.length() + (offset - self.length());
        };
        match (self.visible.get(widget_line), self.starts.get(widget_line)) {
            (Some(&logical), Some(&start)) => {
                self.buffer.line_start(logical).unwrap_or(0) + (offset - start)
            }
            _ => offset,
        }
    }
}
