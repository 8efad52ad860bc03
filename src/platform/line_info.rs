//! # Line Information
//!
//! Builds space-tagged line descriptors. Line regions always come from the
//! document; in presentation space the line number and start offset are
//! translated back into presentation coordinates.

use crate::platform::error::Result;
use crate::platform::host::{Document, Shared, TextWidget};
use crate::platform::translator::SpaceTranslator;
use crate::platform::types::{Direction, LineInformation, Space};

pub struct LineInformationBuilder {
    document: Shared<dyn Document>,
    widget: Shared<dyn TextWidget>,
}

impl LineInformationBuilder {
    pub fn new(document: Shared<dyn Document>, widget: Shared<dyn TextWidget>) -> Self {
        Self { document, widget }
    }

    /// Describe `line`, given in `space`
    pub fn for_line(
        &self,
        translator: &SpaceTranslator,
        space: Space,
        line: usize,
    ) -> Result<LineInformation> {
        let info = match space {
            Space::Logical => {
                let region = self.document.borrow().line_region(line)?;
                LineInformation::new(Space::Logical, line, region.offset, region.length)
            }
            Space::Presentation => {
                let logical_line = translator.line_to_other(line, Direction::ToLogical);
                let region = self.document.borrow().line_region(logical_line)?;
                LineInformation::new(
                    Space::Presentation,
                    translator.line_to_other(logical_line, Direction::ToPresentation),
                    translator.offset_to_other(region.offset, Direction::ToPresentation),
                    region.length,
                )
            }
        };
        tracing::trace!("line information for {} line {}: {:?}", space, line, info);
        Ok(info)
    }

    /// Describe the line containing `offset`, given in `space`
    pub fn for_offset(
        &self,
        translator: &SpaceTranslator,
        space: Space,
        offset: usize,
    ) -> Result<LineInformation> {
        let line = match space {
            Space::Logical => self.document.borrow().line_of_offset(offset)?,
            Space::Presentation => self.widget.borrow().line_at_offset(offset)?,
        };
        self.for_line(translator, space, line)
    }

    pub fn line_count(&self, space: Space) -> usize {
        match space {
            Space::Logical => self.document.borrow().line_count(),
            Space::Presentation => self.widget.borrow().line_count(),
        }
    }
}
