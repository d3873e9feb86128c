//! Keyframe data model used by the in-memory host and scene fixtures.
//!
//! The slide core itself only sees keyframes through [`crate::host::AnimationHost`];
//! these types are the reference storage behind [`crate::memory::MemoryScene`].

use serde::{Deserialize, Serialize};

use crate::ids::ObjectId;

/// 2D point in (frame, value) space used by bezier handles.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// Bezier handles of a keyframe. Opaque to the slide core: never read or written.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Handles {
    #[serde(default)]
    pub left: Option<Vec2>,
    #[serde(default)]
    pub right: Option<Vec2>,
}

/// A control point on a curve.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Keyframe {
    /// Frame coordinate; the only field a slide mutates.
    pub time: f32,
    pub value: f32,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub handles: Option<Handles>,
}

impl Keyframe {
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            selected: false,
            handles: None,
        }
    }

    pub fn selected(time: f32, value: f32) -> Self {
        Self {
            selected: true,
            ..Self::new(time, value)
        }
    }
}

/// One animated channel (e.g. "location[0]").
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Curve {
    pub path: String,
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
}

impl Curve {
    pub fn new(path: impl Into<String>, keyframes: Vec<Keyframe>) -> Self {
        Self {
            path: path.into(),
            keyframes,
        }
    }

    /// Keyframe times in storage order.
    pub fn times(&self) -> Vec<f32> {
        self.keyframes.iter().map(|k| k.time).collect()
    }
}

/// The curves of one object's current action.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Timeline {
    #[serde(default)]
    pub curves: Vec<Curve>,
}

impl Timeline {
    pub fn new(curves: Vec<Curve>) -> Self {
        Self { curves }
    }

    /// Validate basic invariants (finite keyframe times).
    pub fn validate_basic(&self) -> Result<(), String> {
        for curve in &self.curves {
            for (idx, k) in curve.keyframes.iter().enumerate() {
                if !k.time.is_finite() {
                    return Err(format!(
                        "Keyframe time must be finite for '{}' (key {idx})",
                        curve.path
                    ));
                }
            }
        }
        Ok(())
    }
}

/// An object in the host scene, animated or not.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub timeline: Option<Timeline>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_nan_time() {
        let tl = Timeline::new(vec![Curve::new(
            "location[0]",
            vec![Keyframe::new(0.0, 1.0), Keyframe::new(f32::NAN, 2.0)],
        )]);
        let err = tl.validate_basic().unwrap_err();
        assert!(err.contains("location[0]"));
    }

    #[test]
    fn keyframe_json_defaults() {
        let k: Keyframe = serde_json::from_str(r#"{ "time": 4.0, "value": 1.5 }"#).unwrap();
        assert!(!k.selected);
        assert!(k.handles.is_none());
    }
}
