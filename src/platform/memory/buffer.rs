//! # Text Buffer
//!
//! Line-based text storage addressed by character offsets. Lines are
//! delimited by `\n`; line lengths never include the delimiter.

/// Content of a text buffer
#[derive(Debug, Clone, PartialEq)]
pub struct TextBuffer {
    lines: Vec<String>,
}

impl TextBuffer {
    /// Create new empty buffer
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Create buffer from text; a trailing newline yields a trailing empty line
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    /// Get all lines as slice
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn get_line(&self, index: usize) -> Option<&String> {
        self.lines.get(index)
    }

    /// Line length in characters
    pub fn line_length(&self, index: usize) -> usize {
        self.lines
            .get(index)
            .map_or(0, |line| line.chars().count())
    }

    /// Total length in characters, delimiters included
    pub fn length(&self) -> usize {
        let chars: usize = self.lines.iter().map(|line| line.chars().count()).sum();
        chars + self.lines.len().saturating_sub(1)
    }

    /// Offset of the first character of `line`
    pub fn line_start(&self, line: usize) -> Option<usize> {
        if line >= self.lines.len() {
            return None;
        }
        Some(
            self.lines[..line]
                .iter()
                .map(|l| l.chars().count() + 1)
                .sum(),
        )
    }

    /// Line containing `offset`; the delimiter belongs to the line it ends
    pub fn line_of_offset(&self, offset: usize) -> Option<usize> {
        let mut start = 0;
        for (index, line) in self.lines.iter().enumerate() {
            let end = start + line.chars().count();
            if offset <= end {
                return Some(index);
            }
            start = end + 1;
        }
        None
    }

    /// Read `length` characters at `offset`
    pub fn slice(&self, offset: usize, length: usize) -> Option<String> {
        self.end_of(offset, length)?;
        Some(self.get_text().chars().skip(offset).take(length).collect())
    }

    /// Replace `length` characters at `offset`, returning the removed text
    pub fn replace(&mut self, offset: usize, length: usize, text: &str) -> Option<String> {
        let end = self.end_of(offset, length)?;
        let mut chars: Vec<char> = self.get_text().chars().collect();
        let removed: String = chars.splice(offset..end, text.chars()).collect();
        let updated: String = chars.into_iter().collect();
        self.set_text(&updated);
        Some(removed)
    }

    /// End of the range `offset..offset + length` if it lies in the buffer
    fn end_of(&self, offset: usize, length: usize) -> Option<usize> {
        offset
            .checked_add(length)
            .filter(|&end| end <= self.length())
    }

    /// Get text content as single string
    pub fn get_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Set entire content from string
    pub fn set_text(&mut self, text: &str) {
        *self = Self::from_text(text);
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
