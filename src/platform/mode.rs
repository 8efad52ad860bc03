//! # Mode Management
//!
//! Tracks the mode announced by the modal engine and drives its two visible
//! effects: caret width and command-line display state.

use crate::config::INSERT_CARET_WIDTH;
use crate::platform::error::{PlatformError, Result};
use crate::platform::host::{ScopedGraphics, TextWidget};
use crate::platform::types::{CaretSize, EditorMode};
use serde::Serialize;

/// Command-line display state owned by the platform; hosts render it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandLine {
    enabled: bool,
    content: String,
    action_line: String,
}

impl CommandLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content<S: Into<String>>(&mut self, content: S) {
        self.content = content.into();
    }

    /// Secondary status text (pending operator, count, register)
    pub fn action_line(&self) -> &str {
        &self.action_line
    }

    pub fn set_action_line<S: Into<String>>(&mut self, action_line: S) {
        self.action_line = action_line.into();
    }
}

#[derive(Debug)]
pub struct ModeController {
    mode: EditorMode,
    command_line: CommandLine,
    insert_caret_width: usize,
}

impl ModeController {
    pub fn new() -> Self {
        Self::with_insert_caret_width(INSERT_CARET_WIDTH)
    }

    pub fn with_insert_caret_width(width: usize) -> Self {
        Self {
            mode: EditorMode::Normal,
            command_line: CommandLine::new(),
            insert_caret_width: width,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn command_line(&self) -> &CommandLine {
        &self.command_line
    }

    pub fn set_command_line<S: Into<String>>(&mut self, text: S) {
        self.command_line.set_content(text);
    }

    pub fn set_action_line<S: Into<String>>(&mut self, text: S) {
        self.command_line.set_action_line(text);
    }

    pub fn to_command_line_mode(&mut self) {
        self.command_line.set_enabled(true);
        self.transition(EditorMode::CommandLine);
    }

    pub fn to_insert_mode(&mut self, widget: &mut dyn TextWidget) {
        set_caret_width(widget, self.insert_caret_width);
        self.command_line.set_enabled(false);
        self.transition(EditorMode::Insert);
    }

    /// Size the caret to the font's average character width
    pub fn to_normal_mode(&mut self, widget: &mut dyn TextWidget) -> Result<()> {
        let width = {
            let graphics = ScopedGraphics::acquire(widget);
            graphics.average_char_width()
        }
        .ok_or_else(|| PlatformError::Measurement("average character width unavailable".into()))?;
        set_caret_width(widget, width);
        self.command_line.set_enabled(false);
        self.transition(EditorMode::Normal);
        Ok(())
    }

    fn transition(&mut self, mode: EditorMode) {
        tracing::debug!("Changing mode from {:?} to {:?}", self.mode, mode);
        self.mode = mode;
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}

fn set_caret_width(widget: &mut dyn TextWidget, width: usize) {
    let size = widget.caret_size();
    widget.set_caret_size(CaretSize::new(width, size.height));
}
