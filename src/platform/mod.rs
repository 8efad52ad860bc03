//! # Platform Module
//!
//! The contract a vim-style command engine uses to drive a host editor:
//!
//! - **Spaces**: every read, write and caret query is expressed in the active
//!   [`Space`], translated through the host projection when one exists
//! - **Undo**: edits are bracketed into compound changes
//! - **Modes**: mode changes resize the caret and toggle the command line
//!
//! `memory` holds a complete in-process host used by the console and tests.

pub mod caret;
pub mod editor_platform;
pub mod error;
pub mod host;
pub mod line_info;
pub mod memory;
pub mod mode;
pub mod text_access;
pub mod translator;
pub mod types;
pub mod undo;

pub use caret::CaretPositioner;
pub use editor_platform::EditorPlatform;
pub use error::{BadLocation, PlatformError, Result};
pub use host::{
    Document, EditorPart, GraphicsContext, HostHandles, ProjectionMapping, RedoFacility,
    ScopedGraphics, Shared, TextWidget, UndoFacility,
};
pub use line_info::LineInformationBuilder;
pub use memory::{MemoryEditor, MemoryHost};
pub use mode::{CommandLine, ModeController};
pub use text_access::TextAccessor;
pub use translator::{IdentityMapping, SpaceTranslator};
pub use types::{CaretSize, Direction, EditorMode, LineInformation, Region, Space, SpaceOffset};
pub use undo::UndoCoordinator;
