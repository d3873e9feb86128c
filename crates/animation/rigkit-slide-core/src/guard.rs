//! Degenerate guard: refuse to scale a window with no positive width.

use crate::error::{Result, SlideError};
use crate::ids::ObjectId;
use crate::snapshot::{GestureState, TimelineSnapshot};
use crate::window::PivotWindow;

/// Require a finite window with `end - start > 0`.
pub fn check_window(object: ObjectId, window: PivotWindow) -> Result<()> {
    let finite = window.start.is_finite() && window.end.is_finite();
    if finite && window.width() > 0.0 {
        Ok(())
    } else {
        Err(SlideError::DegenerateWindow {
            object,
            start: window.start,
            end: window.end,
        })
    }
}

/// Validate every snapshot before any of them is mutated.
pub fn check_all(timelines: &[TimelineSnapshot]) -> Result<()> {
    timelines
        .iter()
        .try_for_each(|s| check_window(s.object, s.window))
}

/// Validate windows and the target end of every timeline for the next pass.
pub fn check_pass(state: &GestureState) -> Result<()> {
    check_all(&state.timelines)?;
    for snapshot in &state.timelines {
        let target = state.target_end(snapshot);
        if !target.is_finite() {
            return Err(SlideError::NonFiniteTarget {
                object: snapshot.object,
                value: target,
            });
        }
    }
    Ok(())
}
