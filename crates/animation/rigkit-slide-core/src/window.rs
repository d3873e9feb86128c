//! Pivot window detection and the operator's enablement predicate.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::host::{for_each_key, AnimationHost};
use crate::ids::ObjectId;
use crate::scope::{self, display_name};

/// `[start, end]` spanned by the selected keyframes of one timeline.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PivotWindow {
    pub start: f32,
    pub end: f32,
}

impl PivotWindow {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.end - self.start
    }

    /// Scale factor that maps this window onto `[start, target_end]`.
    #[inline]
    pub fn scale_for(&self, target_end: f32) -> f32 {
        (target_end - self.start) / self.width()
    }
}

/// Min/max time among selected keyframes across every curve of the timeline,
/// collapsed to `(t, t)` when every selected key sits on one frame.
///
/// Returns `None` only when nothing is selected.
pub fn selection_bounds<H: AnimationHost + ?Sized>(
    host: &H,
    object: ObjectId,
) -> Option<PivotWindow> {
    let mut bounds: Option<(f32, f32)> = None;
    for_each_key(host, object, |_, sample| {
        if !sample.selected {
            return;
        }
        let t = sample.time;
        bounds = Some(match bounds {
            None => (t, t),
            Some((lo, hi)) => (if t < lo { t } else { lo }, if t > hi { t } else { hi }),
        });
    });

    bounds.map(|(start, end)| PivotWindow { start, end })
}

/// The usable pivot window of a timeline.
///
/// Returns `None` when fewer than two distinct selected times exist.
pub fn detect<H: AnimationHost + ?Sized>(host: &H, object: ObjectId) -> Option<PivotWindow> {
    selection_bounds(host, object).filter(|w| w.start != w.end)
}

/// Objects in scope paired with their detected window; objects without a
/// window are skipped.
pub fn eligible<H: AnimationHost + ?Sized>(
    cfg: &Config,
    host: &H,
) -> Vec<(ObjectId, PivotWindow)> {
    scope::resolve(cfg, host)
        .into_iter()
        .filter_map(|obj| match detect(host, obj) {
            Some(window) => {
                if cfg.debug {
                    log::debug!(
                        "slide keyframes: {} window start={} end={}",
                        display_name(host, obj),
                        window.start,
                        window.end
                    );
                }
                Some((obj, window))
            }
            None => {
                if cfg.debug {
                    log::debug!(
                        "slide keyframes: {} neglected, selected keyframes span a single frame",
                        display_name(host, obj)
                    );
                }
                None
            }
        })
        .collect()
}

/// Every timeline in scope that has a selected keyframe, paired with its
/// selection bounds. Collapsed bounds are kept so the guard can refuse them.
pub fn captured<H: AnimationHost + ?Sized>(
    cfg: &Config,
    host: &H,
) -> Vec<(ObjectId, PivotWindow)> {
    scope::resolve(cfg, host)
        .into_iter()
        .filter_map(|obj| selection_bounds(host, obj).map(|window| (obj, window)))
        .collect()
}

/// Enablement predicate: at least one timeline in scope has a usable window.
pub fn poll<H: AnimationHost + ?Sized>(cfg: &Config, host: &H) -> bool {
    !eligible(cfg, host).is_empty()
}
