//! Ripple transform: rescale the pivot window and shift everything after it.
//!
//! ```text
//! before:  A ---- B ------ C ------ D ---- E      window = [B, C]
//! after:   A ---- B ------------- C ------ D ---- E
//! ```
//!
//! Keys before `start` stay put, keys in `[start, end]` scale about `start`,
//! keys after `end` translate by `target_end - end`. Every call works from the
//! original times, so the same `(snapshot, target_end)` always gives the same
//! result no matter which targets were applied before.

use crate::snapshot::TimelineSnapshot;
use crate::window::PivotWindow;

/// New time for one keyframe given its original time.
#[inline]
pub fn ripple_time(time: f32, window: PivotWindow, target_end: f32) -> f32 {
    if time < window.start {
        time
    } else if time == window.end {
        target_end
    } else if time < window.end {
        window.start + (time - window.start) * window.scale_for(target_end)
    } else {
        time + (target_end - window.end)
    }
}

/// New times for every keyframe of the snapshot, in snapshot order.
pub fn apply(snapshot: &TimelineSnapshot, target_end: f32) -> Vec<f32> {
    let mut out = Vec::with_capacity(snapshot.len());
    apply_into(snapshot, target_end, &mut out);
    out
}

/// Same as [`apply`], reusing `out`'s allocation.
pub fn apply_into(snapshot: &TimelineSnapshot, target_end: f32, out: &mut Vec<f32>) {
    out.clear();
    out.extend(
        snapshot
            .original_times()
            .iter()
            .map(|&t| ripple_time(t, snapshot.window, target_end)),
    );
}
