//! Immutable per-gesture snapshot of original keyframe times.

use crate::config::PointerMapping;
use crate::host::{for_each_key, AnimationHost, CoordinateMapping};
use crate::ids::{KeyRef, ObjectId};
use crate::window::PivotWindow;

/// Original times of every keyframe on one timeline plus its pivot window.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineSnapshot {
    pub object: ObjectId,
    pub window: PivotWindow,
    keys: Vec<KeyRef>,
    times: Vec<f32>,
}

impl TimelineSnapshot {
    /// Read every keyframe time of `object` from the host.
    pub fn capture<H: AnimationHost + ?Sized>(
        host: &H,
        object: ObjectId,
        window: PivotWindow,
    ) -> Self {
        let mut keys = Vec::new();
        let mut times = Vec::new();
        for_each_key(host, object, |key, sample| {
            keys.push(key);
            times.push(sample.time);
        });
        Self {
            object,
            window,
            keys,
            times,
        }
    }

    /// Build a snapshot from explicit times on a single curve.
    pub fn from_times(object: ObjectId, window: PivotWindow, times: &[f32]) -> Self {
        Self {
            object,
            window,
            keys: (0..times.len()).map(|i| KeyRef::new(object, 0, i)).collect(),
            times: times.to_vec(),
        }
    }

    #[inline]
    pub fn keys(&self) -> &[KeyRef] {
        &self.keys
    }

    #[inline]
    pub fn original_times(&self) -> &[f32] {
        &self.times
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// State owned by one running gesture.
#[derive(Clone, Debug)]
pub struct GestureState {
    pub timelines: Vec<TimelineSnapshot>,
    /// Pointer mapping captured when the gesture started.
    pub mapping: PointerMapping,
    /// Frame under the pointer when the gesture started.
    pub anchor_time: f32,
    /// Pointer displacement since the start, in frames.
    pub offset: f32,
    pub last_x: f32,
}

impl GestureState {
    pub fn new(timelines: Vec<TimelineSnapshot>, mapping: PointerMapping, anchor_x: f32) -> Self {
        Self {
            timelines,
            mapping,
            anchor_time: mapping.x_to_time(anchor_x),
            offset: 0.0,
            last_x: anchor_x,
        }
    }

    /// Record a pointer sample; the offset is relative to the start sample.
    pub fn track_pointer(&mut self, x: f32) {
        self.last_x = x;
        self.offset = self.mapping.x_to_time(x) - self.anchor_time;
    }

    /// Current target end of one timeline: its original end plus the drag offset.
    #[inline]
    pub fn target_end(&self, snapshot: &TimelineSnapshot) -> f32 {
        snapshot.window.end + self.offset
    }

    pub fn key_count(&self) -> usize {
        self.timelines.iter().map(TimelineSnapshot::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_offset_is_relative_to_anchor() {
        let snap =
            TimelineSnapshot::from_times(ObjectId(0), PivotWindow::new(0.0, 30.0), &[0.0, 30.0]);
        let mut state = GestureState::new(vec![snap], PointerMapping::default(), 120.0);
        assert_eq!(state.target_end(&state.timelines[0]), 30.0);
        state.track_pointer(420.0);
        assert_eq!(state.offset, 30.0);
        assert_eq!(state.target_end(&state.timelines[0]), 60.0);
        assert_eq!(state.key_count(), 2);
    }
}
