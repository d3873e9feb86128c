//! Output contracts of the slide operator.

use serde::{Deserialize, Serialize};

/// Status returned to the host after `invoke`/`modal`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ModalStatus {
    Running,
    Finished,
    Cancelled,
}

/// How the last gesture ended.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// Times committed.
    Confirmed,
    /// Times left as last applied; the host undo restores them.
    Cancelled,
    /// A fatal error ended the gesture.
    Aborted,
}

impl Outcome {
    pub fn status(self) -> ModalStatus {
        match self {
            Outcome::Confirmed => ModalStatus::Finished,
            Outcome::Cancelled | Outcome::Aborted => ModalStatus::Cancelled,
        }
    }
}

/// Controller state.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Capturing,
    Dragging,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
