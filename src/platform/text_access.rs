//! # Text Access
//!
//! Reads document text in either space and mutates it in logical space only.

use crate::platform::error::{BadLocation, PlatformError, Result};
use crate::platform::host::{Document, Shared, TextWidget};
use crate::platform::types::Space;
use crate::platform::undo::UndoCoordinator;

pub struct TextAccessor {
    document: Shared<dyn Document>,
    widget: Shared<dyn TextWidget>,
}

impl TextAccessor {
    pub fn new(document: Shared<dyn Document>, widget: Shared<dyn TextWidget>) -> Self {
        Self { document, widget }
    }

    /// Read `length` characters at `index` in `space`.
    ///
    /// Presentation reads go through the widget with an inclusive end bound
    /// of `index + length - 1`.
    pub fn text(&self, space: Space, index: usize, length: usize) -> Result<String> {
        let text = match space {
            Space::Logical => self.document.borrow().text(index, length)?,
            Space::Presentation => {
                let widget = self.widget.borrow();
                let Some(past_end) = index.checked_add(length) else {
                    return Err(BadLocation::new(index, length, widget.char_count()).into());
                };
                let Some(end) = past_end.checked_sub(1) else {
                    return Ok(String::new());
                };
                widget.text(index, end)?
            }
        };
        Ok(text)
    }

    /// Replace `length` characters at `index` with `text`.
    ///
    /// An `index` past the end of the document is pulled back to the end.
    pub fn replace(
        &self,
        space: Space,
        index: usize,
        length: usize,
        text: &str,
        undo: Option<&UndoCoordinator>,
    ) -> Result<()> {
        if space != Space::Logical {
            return Err(PlatformError::WrongSpace {
                operation: "replace()",
                required: Space::Logical,
                active: space,
            });
        }

        let doc_length = self.document.borrow().length();
        let index = if index > doc_length {
            tracing::warn!(
                "replace: index {} beyond document length {}, clamping",
                index,
                doc_length
            );
            doc_length
        } else {
            index
        };

        if let Some(undo) = undo {
            undo.mark();
        }

        tracing::debug!("replace: index={} length={} text={:?}", index, length, text);
        self.document.borrow_mut().replace(index, length, text)?;
        Ok(())
    }
}
