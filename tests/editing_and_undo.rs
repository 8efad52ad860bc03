//! Mutation, undo bracketing and persistence through the platform

mod common;

use common::{numbered_text, setup, setup_bare, setup_with};
use vimbridge::platform::{EditorPlatform, MemoryEditor, MemoryHost, PlatformError, Space, TextWidget};

#[test]
fn replace_in_presentation_should_always_fail() {
    let (host, mut platform) = setup("0123456789");
    platform.set_space(Space::Presentation);
    for (index, length, text, mark) in [
        (0, 0, "x", false),
        (3, 2, "", true),
        (15, 0, "x", true),
        (0, 10, "replacement", false),
    ] {
        let err = platform.replace(index, length, text, mark).unwrap_err();
        assert!(
            matches!(err, PlatformError::WrongSpace { operation: "replace()", .. }),
            "unexpected error {err:?}"
        );
    }
    assert_eq!(host.text(), "0123456789");
    assert!(!host.editor().history().is_compound_open());
}

#[test]
fn replace_past_end_should_write_at_document_end() {
    let (host, platform) = setup("0123456789");
    platform.replace(15, 0, "x", true).unwrap();
    assert_eq!(host.text(), "0123456789x");
}

#[test]
fn replace_with_bad_length_should_surface_host_fault() {
    let (host, platform) = setup("0123456789");
    let err = platform.replace(8, 5, "", false).unwrap_err();
    assert!(matches!(err, PlatformError::BadLocation(_)));
    assert_eq!(host.text(), "0123456789");
}

#[test]
fn undo_should_revert_compound_change_as_one_step() {
    let (host, platform) = setup("abc");
    platform.set_undo_mark();
    platform.replace(0, 0, "1", false).unwrap();
    platform.replace(4, 0, "2", false).unwrap();
    platform.replace(2, 1, "", false).unwrap();
    platform.set_undo_mark();
    assert_eq!(host.text(), "1ac2");

    platform.undo();
    assert_eq!(host.text(), "abc");
}

#[test]
fn marked_replace_should_split_undo_steps() {
    let (host, platform) = setup("abc");
    platform.set_undo_mark();
    platform.replace(3, 0, "d", false).unwrap();
    platform.replace(4, 0, "e", true).unwrap();
    platform.set_undo_mark();

    platform.undo();
    assert_eq!(host.text(), "abcd");
    platform.undo();
    assert_eq!(host.text(), "abc");
    platform.undo();
    assert_eq!(host.text(), "abc");
}

#[test]
fn undo_marks_without_facility_should_be_harmless() {
    let (host, platform) = setup_bare("abc");
    platform.set_undo_mark();
    platform.set_undo_mark();
    platform.replace(0, 0, "x", true).unwrap();
    platform.undo();
    platform.redo();
    assert_eq!(host.text(), "xabc");
}

#[test]
fn redo_without_redo_capability_should_undo() {
    let host = MemoryHost::new("abc");
    let platform = EditorPlatform::new(host.handles().without_redo());
    platform.replace(0, 0, "1", true).unwrap();
    platform.replace(0, 0, "2", true).unwrap();
    platform.set_undo_mark();
    platform.undo();
    assert_eq!(host.text(), "1abc");
    platform.redo();
    assert_eq!(host.text(), "abc");
}

#[test]
fn redo_should_reapply_undone_step() {
    let (host, platform) = setup("abc");
    platform.replace(0, 0, "1", true).unwrap();
    platform.set_undo_mark();
    platform.undo();
    platform.redo();
    assert_eq!(host.text(), "1abc");
    platform.redo();
    assert_eq!(host.text(), "1abc");
}

#[test]
fn save_should_write_dirty_document_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("buffer.txt");
    let (host, platform) = setup_with(MemoryEditor::new("draft").with_save_path(&path));

    assert!(!platform.save().unwrap());
    assert!(!path.exists());

    platform.replace(5, 0, " two", true).unwrap();
    assert!(platform.save().unwrap());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "draft two");
    assert_eq!(host.editor().save_count(), 1);
}

#[test]
fn save_failure_should_be_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("buffer.txt");
    let (_host, platform) = setup_with(MemoryEditor::new("draft").with_save_path(path));
    platform.replace(0, 0, "x", false).unwrap();
    assert!(matches!(platform.save(), Err(PlatformError::Save(_))));
}

#[test]
fn shift_should_indent_range_from_first_line() {
    let (host, platform) = setup(&numbered_text());
    platform.shift(2, 3, 4);
    platform.shift(3, 2, 4);
    let editor = host.editor();
    assert_eq!(editor.line_indent(2), 4);
    assert_eq!(editor.line_indent(3), 8);
    assert_eq!(editor.line_indent(4), 8);
    assert_eq!(editor.line_indent(5), 0);
}

#[test]
fn huge_replace_length_should_surface_host_fault() {
    let (host, platform) = setup("0123456789");
    let err = platform.replace(2, usize::MAX, "", false).unwrap_err();
    assert!(matches!(err, PlatformError::BadLocation(_)));
    assert_eq!(host.text(), "0123456789");
}

#[test]
fn huge_text_length_should_surface_host_fault_in_both_spaces() {
    let (_host, mut platform) = setup("0123456789");
    for space in [Space::Logical, Space::Presentation] {
        platform.set_space(space);
        let err = platform.text(2, usize::MAX).unwrap_err();
        assert!(
            matches!(err, PlatformError::BadLocation(_)),
            "unexpected error {err:?} in {space} space"
        );
    }
}

#[test]
fn shift_with_huge_count_should_stop_at_last_line() {
    let (host, platform) = setup(&numbered_text());
    platform.shift(1, usize::MAX, 2);
    let editor = host.editor();
    assert_eq!(editor.line_indent(0), 0);
    assert_eq!(editor.line_indent(1), 2);
    assert_eq!(editor.line_indent(11), 2);
    assert_eq!(editor.line_indent(12), 0);
}
