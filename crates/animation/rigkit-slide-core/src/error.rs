//! Error types for slide gestures and host access.

use thiserror::Error;

use crate::config::Scope;
use crate::ids::{KeyRef, ObjectId};

/// Failures reported by an [`crate::host::AnimationHost`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HostError {
    #[error("object {0} not found")]
    MissingObject(ObjectId),

    #[error("keyframe {0} not found")]
    MissingKeyframe(KeyRef),

    #[error("host rejected the edit: {reason}")]
    Rejected { reason: String },
}

/// Errors raised while invoking or driving a slide gesture.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SlideError {
    /// Nothing in scope has a usable pivot window; no mutation happened.
    #[error("no keyframes to slide in scope '{scope}'")]
    Unavailable { scope: Scope },

    /// A pivot window has zero or negative width.
    #[error("degenerate pivot window on object {object}: start={start}, end={end}")]
    DegenerateWindow { object: ObjectId, start: f32, end: f32 },

    /// The pointer mapped to a frame that is not a finite number.
    #[error("non-finite target end {value} for object {object}")]
    NonFiniteTarget { object: ObjectId, value: f32 },

    /// Operation requested from the wrong controller state.
    #[error("invalid gesture state: {current} -> {requested}")]
    InvalidState {
        current: String,
        requested: String,
    },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("scene parse error: {reason}")]
    Parse { reason: String },

    #[error(transparent)]
    Host(#[from] HostError),
}

impl SlideError {
    /// True for errors that end a gesture that already started.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            SlideError::Unavailable { .. }
                | SlideError::InvalidState { .. }
                | SlideError::InvalidConfig { .. }
                | SlideError::Parse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SlideError>;
