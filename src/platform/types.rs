//! # Core Platform Types
//!
//! Common types used throughout the platform layer: coordinate spaces,
//! space-tagged offsets, line descriptors and editor modes.

use serde::{Deserialize, Serialize};

/// Coordinate space an offset or line number is expressed in.
///
/// `Logical` refers to the underlying document, `Presentation` to what the
/// text widget currently shows (folded regions collapse out of it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Space {
    #[default]
    Logical,
    Presentation,
}

impl Space {
    /// The space on the other side of a translation
    pub fn other(self) -> Self {
        match self {
            Space::Logical => Space::Presentation,
            Space::Presentation => Space::Logical,
        }
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Space::Logical => write!(f, "logical"),
            Space::Presentation => write!(f, "presentation"),
        }
    }
}

impl std::str::FromStr for Space {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "logical" | "model" => Ok(Space::Logical),
            "presentation" | "view" => Ok(Space::Presentation),
            other => Err(format!("unknown space: {other}")),
        }
    }
}

/// Character offset carrying the space it was produced in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "space", content = "offset", rename_all = "lowercase")]
pub enum SpaceOffset {
    Logical(usize),
    Presentation(usize),
}

impl SpaceOffset {
    pub fn tagged(space: Space, value: usize) -> Self {
        match space {
            Space::Logical => SpaceOffset::Logical(value),
            Space::Presentation => SpaceOffset::Presentation(value),
        }
    }

    pub fn space(self) -> Space {
        match self {
            SpaceOffset::Logical(_) => Space::Logical,
            SpaceOffset::Presentation(_) => Space::Presentation,
        }
    }

    pub fn value(self) -> usize {
        match self {
            SpaceOffset::Logical(value) | SpaceOffset::Presentation(value) => value,
        }
    }
}

/// Direction of a translation between the two spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ToPresentation,
    ToLogical,
}

impl Direction {
    /// Direction that takes a value from `from` into the other space
    pub fn from_space(from: Space) -> Self {
        match from {
            Space::Logical => Direction::ToPresentation,
            Space::Presentation => Direction::ToLogical,
        }
    }
}

/// Raw line region as reported by the document: start offset and length,
/// excluding the line delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub offset: usize,
    pub length: usize,
}

impl Region {
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }
}

/// Descriptor of one document line, expressed in a single space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineInformation {
    pub space: Space,
    pub line: usize,
    pub offset: usize,
    pub length: usize,
}

impl LineInformation {
    pub fn new(space: Space, line: usize, offset: usize, length: usize) -> Self {
        Self {
            space,
            line,
            offset,
            length,
        }
    }

    /// Start of the line as a tagged offset
    pub fn start(&self) -> SpaceOffset {
        SpaceOffset::tagged(self.space, self.offset)
    }

    /// Offset just past the last character of the line (before the delimiter)
    pub fn end(&self) -> SpaceOffset {
        SpaceOffset::tagged(self.space, self.offset + self.length)
    }
}

/// Editor mode announced by the modal engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorMode {
    #[default]
    Normal,
    Insert,
    CommandLine,
}

/// Caret dimensions in widget units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaretSize {
    pub width: usize,
    pub height: usize,
}

impl CaretSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}
