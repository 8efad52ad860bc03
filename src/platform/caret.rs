//! # Caret Positioning
//!
//! The widget caret lives in presentation space; logical positions are
//! translated on the way in and out.

use crate::platform::host::{Shared, TextWidget};
use crate::platform::translator::SpaceTranslator;
use crate::platform::types::{Direction, Space, SpaceOffset};

pub struct CaretPositioner {
    widget: Shared<dyn TextWidget>,
}

impl CaretPositioner {
    pub fn new(widget: Shared<dyn TextWidget>) -> Self {
        Self { widget }
    }

    /// Caret position expressed in `space`
    pub fn get(&self, translator: &SpaceTranslator, space: Space) -> SpaceOffset {
        let widget_offset = self.widget.borrow().caret_offset();
        match space {
            Space::Logical => SpaceOffset::Logical(
                translator.offset_to_other(widget_offset, Direction::ToLogical),
            ),
            Space::Presentation => SpaceOffset::Presentation(widget_offset),
        }
    }

    /// Move the caret and scroll it into view. The offset's own tag decides
    /// whether it needs translating.
    pub fn set(&self, translator: &SpaceTranslator, position: SpaceOffset) {
        let widget_offset = match position {
            SpaceOffset::Logical(offset) => {
                translator.offset_to_other(offset, Direction::ToPresentation)
            }
            SpaceOffset::Presentation(offset) => offset,
        };
        tracing::debug!("set caret: {:?} -> widget offset {}", position, widget_offset);
        let mut widget = self.widget.borrow_mut();
        widget.set_caret_offset(widget_offset);
        widget.show_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::memory::{MemoryEditor, MemoryHost};

    const TEXT: &str = "aa\nbb\ncc\ndd\nee";

    fn setup(host: &MemoryHost) -> (CaretPositioner, SpaceTranslator) {
        let handles = host.handles();
        (
            CaretPositioner::new(handles.widget),
            SpaceTranslator::new(handles.projection),
        )
    }

    #[test]
    fn logical_position_should_translate_to_widget() {
        let host = MemoryHost::new(TEXT);
        host.fold(1, 3);
        let (caret, translator) = setup(&host);
        caret.set(&translator, SpaceOffset::Logical(13));
        assert_eq!(host.editor().caret_offset(), 7);
        assert_eq!(caret.get(&translator, Space::Logical), SpaceOffset::Logical(13));
        assert_eq!(
            caret.get(&translator, Space::Presentation),
            SpaceOffset::Presentation(7)
        );
    }

    #[test]
    fn presentation_position_should_be_used_as_is() {
        let host = MemoryHost::new(TEXT);
        host.fold(1, 3);
        let (caret, translator) = setup(&host);
        caret.set(&translator, SpaceOffset::Presentation(4));
        assert_eq!(host.editor().caret_offset(), 4);
    }

    #[test]
    fn set_should_scroll_caret_into_view() {
        let text = (0..40).map(|n| format!("line {n}")).collect::<Vec<_>>().join("\n");
        let host = MemoryHost::from_editor(MemoryEditor::new(&text).with_viewport_height(5));
        let (caret, translator) = setup(&host);
        let offset = host.editor().buffer().line_start(20).unwrap();
        caret.set(&translator, SpaceOffset::Logical(offset));
        assert_eq!(host.editor().top_line(), 16);
    }
}
