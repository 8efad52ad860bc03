//! # Space Translation
//!
//! Maps offsets and line numbers between logical and presentation space.
//! The host's projection is used when it exists; otherwise an identity
//! mapping is installed once, at construction.

use crate::platform::host::{ProjectionMapping, Shared};
use crate::platform::types::{Direction, SpaceOffset, Space};
use std::cell::RefCell;
use std::rc::Rc;

/// Projection used when the host cannot translate
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityMapping;

impl ProjectionMapping for IdentityMapping {
    fn model_offset_to_widget_offset(&self, offset: usize) -> usize {
        offset
    }

    fn widget_offset_to_model_offset(&self, offset: usize) -> usize {
        offset
    }

    fn model_line_to_widget_line(&self, line: usize) -> usize {
        line
    }

    fn widget_line_to_model_line(&self, line: usize) -> usize {
        line
    }
}

pub struct SpaceTranslator {
    mapping: Shared<dyn ProjectionMapping>,
    identity: bool,
}

impl SpaceTranslator {
    pub fn new(projection: Option<Shared<dyn ProjectionMapping>>) -> Self {
        match projection {
            Some(mapping) => Self {
                mapping,
                identity: false,
            },
            None => {
                tracing::debug!("host has no projection; translating with identity");
                Self::identity()
            }
        }
    }

    pub fn identity() -> Self {
        Self {
            mapping: Rc::new(RefCell::new(IdentityMapping)),
            identity: true,
        }
    }

    /// True when no host projection is available
    pub fn is_identity(&self) -> bool {
        self.identity
    }

    pub fn offset_to_other(&self, offset: usize, direction: Direction) -> usize {
        let mapping = self.mapping.borrow();
        let translated = match direction {
            Direction::ToPresentation => mapping.model_offset_to_widget_offset(offset),
            Direction::ToLogical => mapping.widget_offset_to_model_offset(offset),
        };
        tracing::trace!("offset {} -> {} ({:?})", offset, translated, direction);
        translated
    }

    pub fn line_to_other(&self, line: usize, direction: Direction) -> usize {
        let mapping = self.mapping.borrow();
        match direction {
            Direction::ToPresentation => mapping.model_line_to_widget_line(line),
            Direction::ToLogical => mapping.widget_line_to_model_line(line),
        }
    }

    /// Express a tagged offset in `target` space
    pub fn to_space(&self, offset: SpaceOffset, target: Space) -> SpaceOffset {
        if offset.space() == target {
            return offset;
        }
        let value = self.offset_to_other(offset.value(), Direction::from_space(offset.space()));
        SpaceOffset::tagged(target, value)
    }
}

impl std::fmt::Debug for SpaceTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpaceTranslator")
            .field("identity", &self.identity)
            .finish()
    }
}
