//! Core configuration for rigkit-slide-core.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlideError};
use crate::host::CoordinateMapping;

/// Which objects' keyframes a slide gesture considers.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// The active object only.
    #[default]
    Active,
    /// Every selected object.
    Selected,
    /// Every object in the working set.
    All,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Scope::Active => "active",
            Scope::Selected => "selected",
            Scope::All => "all",
        };
        f.write_str(s)
    }
}

/// Maps a horizontal pointer coordinate (pixels) to a frame.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerMapping {
    /// `frame = x / pixels_per_frame`, independent of the view.
    Fixed { pixels_per_frame: f32 },
    /// `frame = origin_frame + x / pixels_per_frame` for a panned/zoomed view.
    View {
        origin_frame: f32,
        pixels_per_frame: f32,
    },
}

impl PointerMapping {
    pub fn pixels_per_frame(&self) -> f32 {
        match *self {
            PointerMapping::Fixed { pixels_per_frame } => pixels_per_frame,
            PointerMapping::View {
                pixels_per_frame, ..
            } => pixels_per_frame,
        }
    }
}

impl Default for PointerMapping {
    fn default() -> Self {
        PointerMapping::Fixed {
            pixels_per_frame: 10.0,
        }
    }
}

impl CoordinateMapping for PointerMapping {
    fn x_to_time(&self, x: f32) -> f32 {
        match *self {
            PointerMapping::Fixed { pixels_per_frame } => x / pixels_per_frame,
            PointerMapping::View {
                origin_frame,
                pixels_per_frame,
            } => origin_frame + x / pixels_per_frame,
        }
    }
}

/// Settings shared by scope resolution, window detection and the slide operator.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scope: Scope,
    /// Emit per-pass diagnostics through `log::debug!`.
    pub debug: bool,
    /// Prefix of every message reported to the host.
    pub message_prefix: String,
    /// Fallback mapping when the host does not provide its view mapping.
    pub pointer: PointerMapping,
    /// Ignore pointer moves that did not change the horizontal coordinate.
    pub skip_stationary_moves: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scope: Scope::Active,
            debug: false,
            message_prefix: "RigKit".to_string(),
            pointer: PointerMapping::default(),
            skip_stationary_moves: true,
        }
    }
}

impl Config {
    /// Shorthand for a default config with another scope.
    pub fn with_scope(scope: Scope) -> Self {
        Self {
            scope,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        let ppf = self.pointer.pixels_per_frame();
        if !ppf.is_finite() || ppf <= 0.0 {
            return Err(SlideError::InvalidConfig {
                reason: format!("pixels_per_frame must be finite and > 0, got {ppf}"),
            });
        }
        if let PointerMapping::View { origin_frame, .. } = self.pointer {
            if !origin_frame.is_finite() {
                return Err(SlideError::InvalidConfig {
                    reason: "origin_frame must be finite".into(),
                });
            }
        }
        Ok(())
    }

    /// Format a user-visible message with the configured prefix.
    pub(crate) fn message(&self, body: &str) -> String {
        if self.message_prefix.is_empty() {
            body.to_string()
        } else {
            format!("{} - {}", self.message_prefix, body)
        }
    }
}
