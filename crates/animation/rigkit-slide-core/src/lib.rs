//! RigKit Slide Keyframes core (host-agnostic)
//!
//! Ripple-edit of keyframe timing: the window spanned by the selected keyframes
//! of each timeline in scope is rescaled to follow the pointer, and every
//! keyframe after the window is shifted so downstream spacing is preserved.
//!
//! Hosts implement [`AnimationHost`] and drive [`SlideKeyframes`] with
//! `poll` → `invoke` → `modal` (one call per input event).

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod guard;
pub mod host;
pub mod ids;
pub mod inputs;
pub mod memory;
pub mod outputs;
pub mod ripple;
pub mod scene;
pub mod scope;
pub mod snapshot;
pub mod window;

// Re-exports for consumers (adapters)
pub use config::{Config, PointerMapping, Scope};
pub use controller::{SlideKeyframes, OPERATOR_DESCRIPTION, OPERATOR_ID, OPERATOR_LABEL};
pub use data::{Curve, Handles, Keyframe, SceneObject, Timeline, Vec2};
pub use error::{HostError, Result, SlideError};
pub use host::{AnimationHost, CoordinateMapping, EditScope, KeySample, ReportLevel};
pub use ids::{KeyRef, ObjectId};
pub use inputs::{InputEvent, Keybinding, DEFAULT_KEYBINDING};
pub use memory::{EditEvent, MemoryScene};
pub use outputs::{ModalStatus, Outcome, Phase};
pub use scene::parse_scene_json;
pub use snapshot::{GestureState, TimelineSnapshot};
pub use window::PivotWindow;
