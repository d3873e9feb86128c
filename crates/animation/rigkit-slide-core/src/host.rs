//! Host seam: the narrow read/write interface onto the content-creation
//! application's objects, animation curves and message reporting.
//!
//! Adapters implement [`AnimationHost`] and pass it into scope resolution,
//! window detection and [`crate::controller::SlideKeyframes`]. The in-memory
//! [`crate::memory::MemoryScene`] is the reference implementation.

use serde::{Deserialize, Serialize};

use crate::config::PointerMapping;
use crate::error::HostError;
use crate::ids::{KeyRef, ObjectId};

/// The slice of a keyframe the slide core reads.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KeySample {
    pub time: f32,
    pub selected: bool,
}

/// Severity of a user-visible message.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ReportLevel {
    Info,
    Warning,
    Error,
}

/// Maps a horizontal pointer coordinate to a frame.
pub trait CoordinateMapping {
    fn x_to_time(&self, x: f32) -> f32;
}

pub trait AnimationHost {
    // Object / animation store
    fn active_object(&self) -> Option<ObjectId>;
    fn selected_objects(&self) -> Vec<ObjectId>;
    /// Every object in the working set.
    fn objects(&self) -> Vec<ObjectId>;
    fn object_name(&self, object: ObjectId) -> Option<String>;
    /// Whether the object currently has an action with curves to edit.
    fn has_animation(&self, object: ObjectId) -> bool;

    // Curve store
    fn curve_count(&self, object: ObjectId) -> usize;
    fn key_count(&self, object: ObjectId, curve: usize) -> usize;
    fn key(&self, key: KeyRef) -> Option<KeySample>;
    fn set_key_time(&mut self, key: KeyRef, time: f32) -> Result<(), HostError>;

    /// Enter the host context required to edit this object's keyframes.
    fn begin_edit(&mut self, _object: ObjectId) {}
    /// Leave the context entered by `begin_edit`; also where hosts refresh curves.
    fn end_edit(&mut self, _object: ObjectId) {}

    /// The host's actual pixel-to-frame mapping for the active view, if known.
    fn view_mapping(&self) -> Option<PointerMapping> {
        None
    }

    // Reporting sink
    fn report(&mut self, level: ReportLevel, message: &str);
}

/// Scoped edit context for one object's timeline.
///
/// `begin_edit` runs on construction and `end_edit` on drop, so every exit path
/// (including `?` on a failed write) releases the host context.
pub struct EditScope<'a, H: AnimationHost + ?Sized> {
    host: &'a mut H,
    object: ObjectId,
}

impl<'a, H: AnimationHost + ?Sized> EditScope<'a, H> {
    pub fn begin(host: &'a mut H, object: ObjectId) -> Self {
        host.begin_edit(object);
        Self { host, object }
    }

    #[inline]
    pub fn set_key_time(&mut self, key: KeyRef, time: f32) -> Result<(), HostError> {
        debug_assert_eq!(key.object, self.object);
        self.host.set_key_time(key, time)
    }
}

impl<H: AnimationHost + ?Sized> Drop for EditScope<'_, H> {
    fn drop(&mut self) {
        self.host.end_edit(self.object);
    }
}

impl<H: AnimationHost + ?Sized> std::fmt::Debug for EditScope<'_, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditScope")
            .field("object", &self.object)
            .finish_non_exhaustive()
    }
}

/// Iterate `(KeyRef, KeySample)` over every keyframe of an object's timeline.
pub fn for_each_key<H: AnimationHost + ?Sized>(
    host: &H,
    object: ObjectId,
    mut f: impl FnMut(KeyRef, KeySample),
) {
    for curve in 0..host.curve_count(object) {
        for key in 0..host.key_count(object, curve) {
            let key_ref = KeyRef::new(object, curve, key);
            if let Some(sample) = host.key(key_ref) {
                f(key_ref, sample);
            }
        }
    }
}
