//! # Editor Platform
//!
//! The façade the modal engine talks to. It owns the active space, the mode
//! and the command-line state; the document and widget stay with the host.
//!
//! ```text
//! Modal engine
//!     │ set_space / text / replace / position / line_information / ...
//!     ▼
//! EditorPlatform ── SpaceTranslator ── TextAccessor ── LineInformationBuilder
//!                ── CaretPositioner ── UndoCoordinator ── ModeController
//! ```

use crate::config::PlatformOptions;
use crate::platform::caret::CaretPositioner;
use crate::platform::error::Result;
use crate::platform::host::{EditorPart, HostHandles, Shared, TextWidget};
use crate::platform::line_info::LineInformationBuilder;
use crate::platform::mode::{CommandLine, ModeController};
use crate::platform::text_access::TextAccessor;
use crate::platform::translator::SpaceTranslator;
use crate::platform::types::{EditorMode, LineInformation, Space, SpaceOffset};
use crate::platform::undo::UndoCoordinator;

pub struct EditorPlatform {
    space: Space,
    default_space: Space,
    translator: SpaceTranslator,
    text: TextAccessor,
    lines: LineInformationBuilder,
    caret: CaretPositioner,
    undo: UndoCoordinator,
    modes: ModeController,
    widget: Shared<dyn TextWidget>,
    part: Shared<dyn EditorPart>,
}

impl EditorPlatform {
    pub fn new(handles: HostHandles) -> Self {
        Self::with_options(handles, PlatformOptions::default())
    }

    pub fn with_options(handles: HostHandles, options: PlatformOptions) -> Self {
        tracing::info!(
            "creating editor platform: {:?}, initial space {}",
            handles,
            options.initial_space
        );
        let HostHandles {
            document,
            widget,
            part,
            projection,
            undo,
            redo,
        } = handles;

        Self {
            space: options.initial_space,
            default_space: options.initial_space,
            translator: SpaceTranslator::new(projection),
            text: TextAccessor::new(document.clone(), widget.clone()),
            lines: LineInformationBuilder::new(document, widget.clone()),
            caret: CaretPositioner::new(widget.clone()),
            undo: UndoCoordinator::new(undo, redo),
            modes: ModeController::with_insert_caret_width(options.insert_caret_width),
            widget,
            part,
        }
    }

    // === Space ===

    pub fn space(&self) -> Space {
        self.space
    }

    pub fn set_space(&mut self, space: Space) {
        if self.space != space {
            tracing::debug!("switching space from {} to {}", self.space, space);
        }
        self.space = space;
    }

    pub fn default_space(&self) -> Space {
        self.default_space
    }

    pub fn set_default_space(&mut self) {
        self.set_space(self.default_space);
    }

    pub fn translator(&self) -> &SpaceTranslator {
        &self.translator
    }

    // === Text ===

    /// Read `length` characters at `index` in the active space
    pub fn text(&self, index: usize, length: usize) -> Result<String> {
        self.text.text(self.space, index, length)
    }

    /// Replace text in logical space, optionally as its own undo step
    pub fn replace(&self, index: usize, length: usize, text: &str, mark_undo: bool) -> Result<()> {
        let undo = mark_undo.then_some(&self.undo);
        self.text.replace(self.space, index, length, text, undo)
    }

    // === Lines ===

    /// Line containing the caret
    pub fn line_information(&self) -> Result<LineInformation> {
        self.line_information_of_offset(self.position())
    }

    pub fn line_information_at(&self, line: usize) -> Result<LineInformation> {
        self.lines.for_line(&self.translator, self.space, line)
    }

    /// Line containing `offset`; an offset tagged with the other space is
    /// translated first
    pub fn line_information_of_offset(&self, offset: SpaceOffset) -> Result<LineInformation> {
        let offset = self.translator.to_space(offset, self.space);
        self.lines
            .for_offset(&self.translator, self.space, offset.value())
    }

    pub fn number_of_lines(&self) -> usize {
        self.lines.line_count(self.space)
    }

    // === Caret ===

    pub fn position(&self) -> SpaceOffset {
        self.caret.get(&self.translator, self.space)
    }

    pub fn set_position(&self, position: SpaceOffset) {
        self.caret.set(&self.translator, position);
    }

    /// Move the caret to an offset in the active space
    pub fn set_position_index(&self, index: usize) {
        self.set_position(SpaceOffset::tagged(self.space, index));
    }

    // === Modes ===

    pub fn mode(&self) -> EditorMode {
        self.modes.mode()
    }

    pub fn command_line(&self) -> &CommandLine {
        self.modes.command_line()
    }

    pub fn set_command_line<S: Into<String>>(&mut self, text: S) {
        self.modes.set_command_line(text);
    }

    pub fn set_action_line<S: Into<String>>(&mut self, text: S) {
        self.modes.set_action_line(text);
    }

    pub fn to_command_line_mode(&mut self) {
        self.modes.to_command_line_mode();
    }

    pub fn to_insert_mode(&mut self) {
        let mut widget = self.widget.borrow_mut();
        self.modes.to_insert_mode(&mut *widget);
    }

    pub fn to_normal_mode(&mut self) -> Result<()> {
        let mut widget = self.widget.borrow_mut();
        self.modes.to_normal_mode(&mut *widget)
    }

    // === Undo ===

    pub fn undo(&self) {
        self.undo.undo();
    }

    pub fn redo(&self) {
        self.undo.redo();
    }

    pub fn set_undo_mark(&self) {
        self.undo.mark();
    }

    // === Document ===

    /// Flush the document if it has unsaved changes; reports whether it did
    pub fn save(&self) -> Result<bool> {
        let mut part = self.part.borrow_mut();
        if !part.is_dirty() {
            return Ok(false);
        }
        part.save()?;
        tracing::info!("document saved");
        Ok(true)
    }

    /// Set the indent of `line_count` widget lines starting at `line` to the
    /// indent of `line` plus `delta`, then mark an undo step
    pub fn shift(&self, line: usize, line_count: usize, delta: isize) {
        {
            let mut widget = self.widget.borrow_mut();
            let indent = widget.line_indent(line).saturating_add_signed(delta);
            tracing::debug!(
                "shift: lines {}..{} to indent {}",
                line,
                line.saturating_add(line_count),
                indent
            );
            widget.set_line_indent(line, line_count, indent);
        }
        self.set_undo_mark();
    }
}
