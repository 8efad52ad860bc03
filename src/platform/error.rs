//! # Platform Errors
//!
//! Precondition violations and wrapped host faults. Missing host
//! capabilities are never reported here; they degrade to identity or no-op.

use crate::platform::types::Space;
use thiserror::Error;

/// Invalid range reported by the host document or widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bad location: offset {offset} length {length} exceeds bound {bound}")]
pub struct BadLocation {
    pub offset: usize,
    pub length: usize,
    pub bound: usize,
}

impl BadLocation {
    pub fn new(offset: usize, length: usize, bound: usize) -> Self {
        Self {
            offset,
            length,
            bound,
        }
    }
}

/// Platform error
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Operation {operation} allowed in {required} space only (active: {active})")]
    WrongSpace {
        operation: &'static str,
        required: Space,
        active: Space,
    },

    #[error("host rejected range: {0}")]
    BadLocation(#[from] BadLocation),

    #[error("font measurement failed: {0}")]
    Measurement(String),

    #[error("save failed: {0}")]
    Save(#[from] std::io::Error),
}

/// Platform result
pub type Result<T> = std::result::Result<T, PlatformError>;
