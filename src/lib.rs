//! # vimbridge - Platform Layer for a Vim-style Command Engine
//!
//! Lets a modal command engine drive a host text editor without knowing how
//! the host stores text or folds it on screen.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  calls   ┌─────────────────┐  traits  ┌──────────────┐
//! │ Modal engine │─────────▶│ EditorPlatform  │─────────▶│ Host editor  │
//! │              │          │                 │          │              │
//! │ - Keys       │          │ - Active space  │          │ - Document   │
//! │ - Motions    │          │ - Undo brackets │          │ - Widget     │
//! │ - Operators  │          │ - Mode state    │          │ - Projection │
//! └──────────────┘          └─────────────────┘          └──────────────┘
//! ```
//!
//! Offsets exist in two spaces: **logical** (the document) and
//! **presentation** (the widget, with folded lines removed). The engine picks
//! the active space; every query is answered in it.

pub mod cmd_args;
pub mod config;
pub mod console;
pub mod platform;

// Re-export main types for easy access
pub use platform::*;
