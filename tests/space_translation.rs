//! Coordinate-space behaviour of the platform against the in-memory host

mod common;

use common::{line_start, numbered_text, setup, setup_bare};
use vimbridge::platform::{Direction, LineInformation, Space, SpaceOffset};

#[test]
fn offsets_should_round_trip_without_folds() {
    let text = numbered_text();
    let (_host, platform) = setup(&text);
    let translator = platform.translator();
    for offset in 0..=text.chars().count() {
        let logical = translator.offset_to_other(offset, Direction::ToLogical);
        assert_eq!(
            translator.offset_to_other(logical, Direction::ToPresentation),
            offset
        );
    }
}

#[test]
fn missing_projection_should_translate_identically_even_when_folded() {
    let (host, platform) = setup_bare(&numbered_text());
    host.fold(2, 6);
    let translator = platform.translator();
    assert!(translator.is_identity());
    for value in [0, 9, 40, 95, 500] {
        assert_eq!(translator.offset_to_other(value, Direction::ToPresentation), value);
        assert_eq!(translator.offset_to_other(value, Direction::ToLogical), value);
        assert_eq!(translator.line_to_other(value, Direction::ToPresentation), value);
        assert_eq!(translator.line_to_other(value, Direction::ToLogical), value);
    }
}

#[test]
fn presentation_text_should_read_inclusive_range() {
    let (_host, mut platform) = setup("0123456789");
    platform.set_space(Space::Presentation);
    assert_eq!(platform.text(5, 3).unwrap(), "567");
    assert_eq!(platform.text(9, 1).unwrap(), "9");
    assert!(platform.text(8, 3).is_err());
}

#[test]
fn logical_text_should_ignore_folds() {
    let (host, mut platform) = setup(&numbered_text());
    host.fold(0, 3);
    assert_eq!(platform.text(line_start(2), 7).unwrap(), "line 02");
    platform.set_space(Space::Presentation);
    assert_eq!(platform.text(8, 7).unwrap(), "line 04");
}

#[test]
fn space_switch_should_restore_queries_without_folds() {
    let (_host, mut platform) = setup(&numbered_text());
    platform.set_position_index(line_start(5) + 3);

    let capture = |platform: &vimbridge::platform::EditorPlatform| {
        (
            platform.position().value(),
            platform.line_information().unwrap(),
            platform.line_information_at(7).unwrap(),
            platform.number_of_lines(),
        )
    };

    platform.set_space(Space::Logical);
    let before = capture(&platform);
    platform.set_space(Space::Presentation);
    let during = capture(&platform);
    platform.set_space(Space::Logical);
    let after = capture(&platform);

    assert_eq!(before, after);
    assert_eq!(before.0, during.0);
    assert_eq!(before.1.line, during.1.line);
    assert_eq!(before.1.offset, during.1.offset);
    assert_eq!(before.3, during.3);
}

#[test]
fn folded_document_should_describe_lines_per_space() {
    let (host, mut platform) = setup(&numbered_text());
    host.fold(2, 5);

    assert_eq!(platform.number_of_lines(), 12);
    assert_eq!(
        platform.line_information_at(6).unwrap(),
        LineInformation::new(Space::Logical, 6, line_start(6), 7)
    );

    platform.set_space(Space::Presentation);
    assert_eq!(platform.number_of_lines(), 9);
    // presentation line 3 is logical line 6
    assert_eq!(
        platform.line_information_at(3).unwrap(),
        LineInformation::new(Space::Presentation, 3, 24, 7)
    );
}

#[test]
fn caret_should_keep_logical_position_across_switch() {
    let (host, mut platform) = setup(&numbered_text());
    host.fold(2, 5);
    platform.set_position(SpaceOffset::Logical(line_start(8) + 2));

    platform.set_space(Space::Presentation);
    assert_eq!(platform.position(), SpaceOffset::Presentation(line_start(5) + 2));

    platform.set_space(Space::Logical);
    assert_eq!(platform.position(), SpaceOffset::Logical(line_start(8) + 2));
}

#[test]
fn tagged_position_should_apply_regardless_of_active_space() {
    let (host, mut platform) = setup(&numbered_text());
    host.fold(2, 5);
    platform.set_space(Space::Presentation);
    platform.set_position(SpaceOffset::Logical(line_start(9)));
    assert_eq!(platform.position(), SpaceOffset::Presentation(line_start(6)));
}

#[test]
fn caret_in_hidden_region_should_land_after_fold_header() {
    let (host, mut platform) = setup(&numbered_text());
    host.fold(2, 5);
    platform.set_position(SpaceOffset::Logical(line_start(4) + 1));
    platform.set_space(Space::Presentation);
    assert_eq!(platform.position(), SpaceOffset::Presentation(line_start(3)));
    assert_eq!(platform.line_information().unwrap().line, 3);
}
