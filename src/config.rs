//! Configuration constants and utilities for vimbridge

use crate::platform::types::Space;
use serde::{Deserialize, Serialize};

/// Caret width while inserting
pub const INSERT_CARET_WIDTH: usize = 1;

/// Character width reported by the in-memory host's font
pub const DEFAULT_AVERAGE_CHAR_WIDTH: usize = 8;

/// Caret height of the in-memory host
pub const DEFAULT_CARET_HEIGHT: usize = 16;

/// Visible lines of the in-memory host's widget
pub const DEFAULT_VIEWPORT_HEIGHT: usize = 24;

/// Default log filter for the console binary
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable name for the console's log filter
pub const LOG_LEVEL_ENV_VAR: &str = "VIMBRIDGE_LOG_LEVEL";

/// Environment variable name for overriding the viewport height
pub const VIEWPORT_HEIGHT_ENV_VAR: &str = "VIMBRIDGE_VIEWPORT_HEIGHT";

/// Get the log filter, checking environment variable first, then falling back to default
pub fn get_log_level() -> String {
    std::env::var_os(LOG_LEVEL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// Get the viewport height; unparsable or zero values fall back to default
pub fn get_viewport_height() -> usize {
    std::env::var(VIEWPORT_HEIGHT_ENV_VAR)
        .ok()
        .and_then(|val| val.trim().parse::<usize>().ok())
        .filter(|&height| height > 0)
        .unwrap_or(DEFAULT_VIEWPORT_HEIGHT)
}

/// Construction options for [`crate::platform::EditorPlatform`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformOptions {
    pub initial_space: Space,
    pub insert_caret_width: usize,
}

impl Default for PlatformOptions {
    fn default() -> Self {
        Self {
            initial_space: Space::Logical,
            insert_caret_width: INSERT_CARET_WIDTH,
        }
    }
}
