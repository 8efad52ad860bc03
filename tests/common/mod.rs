//! Shared fixtures for platform integration tests

#![allow(dead_code)]

use vimbridge::platform::{EditorPlatform, MemoryEditor, MemoryHost};

/// Twelve short lines: "line 00" .. "line 11", eight characters apart
pub fn numbered_text() -> String {
    (0..12)
        .map(|n| format!("line {n:02}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Logical offset of the start of `line` in [`numbered_text`]
pub fn line_start(line: usize) -> usize {
    line * 8
}

pub fn setup(text: &str) -> (MemoryHost, EditorPlatform) {
    let host = MemoryHost::new(text);
    let platform = EditorPlatform::new(host.handles());
    (host, platform)
}

pub fn setup_with(editor: MemoryEditor) -> (MemoryHost, EditorPlatform) {
    let host = MemoryHost::from_editor(editor);
    let platform = EditorPlatform::new(host.handles());
    (host, platform)
}

/// Platform whose host offers neither projection nor undo
pub fn setup_bare(text: &str) -> (MemoryHost, EditorPlatform) {
    let host = MemoryHost::new(text);
    let platform = EditorPlatform::new(host.handles().without_projection().without_undo());
    (host, platform)
}
