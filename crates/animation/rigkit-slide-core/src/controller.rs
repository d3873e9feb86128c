//! Slide Keyframes operator: the modal state machine driving ripple passes
//! from pointer input.
//!
//! ```text
//! Idle --invoke--> Capturing --> Dragging --Confirm--> Idle (Confirmed)
//!                      |            |  ^ \--Cancel---> Idle (Cancelled)
//!                      |            |  |
//!                      |            +--+ PointerMove: re-apply from snapshot
//!                      +------------+--fatal--------> Idle (Aborted)
//! ```
//!
//! Cancel does not restore times; the host's undo does. Abort leaves whatever
//! the last successful pass wrote.

use crate::config::{Config, PointerMapping};
use crate::error::{Result, SlideError};
use crate::guard;
use crate::host::{AnimationHost, EditScope, ReportLevel};
use crate::inputs::InputEvent;
use crate::outputs::{ModalStatus, Outcome, Phase};
use crate::ripple;
use crate::snapshot::{GestureState, TimelineSnapshot};
use crate::window;

pub const OPERATOR_ID: &str = "anim.slide_keyframes";
pub const OPERATOR_LABEL: &str = "Slide Keyframes";
pub const OPERATOR_DESCRIPTION: &str =
    "Scale the selected keyframes, sliding the following keyframes to keep their spacing";

#[derive(Debug)]
pub struct SlideKeyframes {
    cfg: Config,
    phase: Phase,
    gesture: Option<GestureState>,
    outcome: Option<Outcome>,
    last_error: Option<SlideError>,
    /// Set once a pass writes a time that differs from the snapshot.
    moved: bool,
    scratch: Vec<f32>,
}

impl SlideKeyframes {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            phase: Phase::Idle,
            gesture: None,
            outcome: None,
            last_error: None,
            moved: false,
            scratch: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// How the most recent gesture ended, once back in `Idle`.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The error that aborted the most recent gesture.
    pub fn last_error(&self) -> Option<&SlideError> {
        self.last_error.as_ref()
    }

    pub fn gesture(&self) -> Option<&GestureState> {
        self.gesture.as_ref()
    }

    /// Enablement predicate: true when the configured scope yields at least one
    /// timeline with a usable pivot window.
    pub fn poll<H: AnimationHost + ?Sized>(&self, host: &H) -> bool {
        window::poll(&self.cfg, host)
    }

    /// Begin a gesture with the pointer at `pointer_x`.
    ///
    /// Errors with [`SlideError::Unavailable`] when `poll` would fail; nothing is
    /// mutated in that case. Every in-scope timeline with a selected key is
    /// captured, and a degenerate window on any of them (a selection collapsed
    /// to one frame included) aborts the gesture before any write and returns
    /// `ModalStatus::Cancelled`.
    pub fn invoke<H: AnimationHost + ?Sized>(
        &mut self,
        host: &mut H,
        pointer_x: f32,
    ) -> Result<ModalStatus> {
        if self.phase != Phase::Idle {
            return Err(SlideError::InvalidState {
                current: self.phase.to_string(),
                requested: Phase::Capturing.to_string(),
            });
        }
        self.cfg.validate()?;

        if !window::poll(&self.cfg, &*host) {
            return Err(SlideError::Unavailable {
                scope: self.cfg.scope,
            });
        }

        self.phase = Phase::Capturing;
        self.outcome = None;
        self.last_error = None;
        self.moved = false;

        let timelines: Vec<TimelineSnapshot> = window::captured(&self.cfg, &*host)
            .into_iter()
            .map(|(obj, win)| TimelineSnapshot::capture(&*host, obj, win))
            .collect();
        if let Err(err) = guard::check_all(&timelines) {
            return Ok(self.abort(host, err));
        }

        let mapping = self.mapping(&*host);
        let state = GestureState::new(timelines, mapping, pointer_x);
        if self.cfg.debug {
            log::debug!(
                "slide keyframes: captured {} timeline(s), {} keyframe(s), anchor frame {}",
                state.timelines.len(),
                state.key_count(),
                state.anchor_time
            );
        }
        self.gesture = Some(state);
        self.phase = Phase::Dragging;

        // Identity pass: target_end == end for every timeline.
        if let Err(err) = self.apply_pass(host) {
            return Ok(self.abort(host, err));
        }
        Ok(ModalStatus::Running)
    }

    /// Consume one input event of a running gesture.
    pub fn modal<H: AnimationHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: InputEvent,
    ) -> Result<ModalStatus> {
        if self.phase != Phase::Dragging {
            return Err(SlideError::InvalidState {
                current: self.phase.to_string(),
                requested: Phase::Dragging.to_string(),
            });
        }

        match event {
            InputEvent::PointerMove { x } => {
                let Some(state) = self.gesture.as_mut() else {
                    return Ok(ModalStatus::Running);
                };
                if self.cfg.skip_stationary_moves && x == state.last_x {
                    return Ok(ModalStatus::Running);
                }
                state.track_pointer(x);
                match self.apply_pass(host) {
                    Ok(()) => Ok(ModalStatus::Running),
                    Err(err) => Ok(self.abort(host, err)),
                }
            }
            InputEvent::Confirm => {
                if self.cfg.debug {
                    self.log_scale_factors();
                }
                self.report(host, ReportLevel::Info, "Slide complete.");
                Ok(self.finish(Outcome::Confirmed))
            }
            InputEvent::Cancel => {
                self.report(host, ReportLevel::Info, "Undo to cancel.");
                Ok(self.finish(Outcome::Cancelled))
            }
            InputEvent::Other => Ok(ModalStatus::Running),
        }
    }

    fn mapping<H: AnimationHost + ?Sized>(&self, host: &H) -> PointerMapping {
        host.view_mapping().unwrap_or(self.cfg.pointer)
    }

    /// Recompute every in-scope timeline from the original snapshot and write it.
    /// All timelines are validated before the first write.
    fn apply_pass<H: AnimationHost + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        let Some(state) = self.gesture.as_ref() else {
            return Err(SlideError::InvalidState {
                current: self.phase.to_string(),
                requested: "apply".into(),
            });
        };
        guard::check_pass(state)?;

        for snapshot in &state.timelines {
            let target_end = state.target_end(snapshot);
            ripple::apply_into(snapshot, target_end, &mut self.scratch);
            let mut edit = EditScope::begin(&mut *host, snapshot.object);
            let originals = snapshot.original_times();
            for ((key, &time), &original) in
                snapshot.keys().iter().zip(&self.scratch).zip(originals)
            {
                edit.set_key_time(*key, time)?;
                self.moved |= time != original;
            }
        }
        Ok(())
    }

    fn log_scale_factors(&self) {
        let Some(state) = self.gesture.as_ref() else {
            return;
        };
        for snapshot in &state.timelines {
            log::debug!(
                "slide keyframes: object {} scaled with factor {}",
                snapshot.object,
                snapshot.window.scale_for(state.target_end(snapshot))
            );
        }
    }

    fn abort<H: AnimationHost + ?Sized>(&mut self, host: &mut H, err: SlideError) -> ModalStatus {
        debug_assert!(err.is_fatal(), "abort on recoverable error: {err}");
        log::error!("slide keyframes aborted: {err}");
        let body = if !self.moved {
            format!("Cannot slide those keyframes: {err}.")
        } else {
            format!("Cannot slide those keyframes: {err}. Undo and retry.")
        };
        self.report(host, ReportLevel::Error, &body);
        self.last_error = Some(err);
        self.finish(Outcome::Aborted)
    }

    fn finish(&mut self, outcome: Outcome) -> ModalStatus {
        self.gesture = None;
        self.phase = Phase::Idle;
        self.outcome = Some(outcome);
        outcome.status()
    }

    fn report<H: AnimationHost + ?Sized>(&self, host: &mut H, level: ReportLevel, body: &str) {
        let message = self.cfg.message(body);
        match level {
            ReportLevel::Info => log::info!("{message}"),
            ReportLevel::Warning => log::warn!("{message}"),
            ReportLevel::Error => log::error!("{message}"),
        }
        host.report(level, &message);
    }
}

impl Default for SlideKeyframes {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
