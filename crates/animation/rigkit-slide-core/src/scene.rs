//! JSON scene loading into the in-memory host.

use serde::Deserialize;

use crate::data::{Curve, Timeline};
use crate::error::{Result, SlideError};
use crate::memory::MemoryScene;

/// Public API: parse a JSON scene description into a [`MemoryScene`].
///
/// ```json
/// { "objects": [
///     { "name": "Cube", "active": true, "selected": true,
///       "animation": { "curves": [
///         { "path": "location[0]",
///           "keyframes": [ { "time": 0, "value": 0, "selected": true } ] } ] } } ] }
/// ```
///
/// Notes:
/// - Objects without `animation` are unanimated (skipped by scope resolution).
/// - At most one object may be `active`.
/// - Keyframe times must be finite.
pub fn parse_scene_json(s: &str) -> Result<MemoryScene> {
    let raw: RawScene = serde_json::from_str(s).map_err(|e| SlideError::Parse {
        reason: e.to_string(),
    })?;

    let mut scene = MemoryScene::new();
    let mut active_seen = false;
    for obj in raw.objects {
        let timeline = match obj.animation {
            Some(anim) => {
                let tl = Timeline::new(anim.curves);
                tl.validate_basic().map_err(|reason| SlideError::Parse {
                    reason: format!("object '{}': {reason}", obj.name),
                })?;
                Some(tl)
            }
            None => None,
        };
        let id = scene.add_object(&obj.name, timeline);
        if obj.selected {
            scene.select(id);
        }
        if obj.active {
            if active_seen {
                return Err(SlideError::Parse {
                    reason: format!("more than one active object ('{}')", obj.name),
                });
            }
            active_seen = true;
            scene.set_active(Some(id));
        }
    }
    Ok(scene)
}

#[derive(Deserialize)]
struct RawScene {
    #[serde(default)]
    objects: Vec<RawObject>,
}

#[derive(Deserialize)]
struct RawObject {
    name: String,
    #[serde(default)]
    selected: bool,
    #[serde(default)]
    active: bool,
    #[serde(default)]
    animation: Option<RawAnimation>,
}

#[derive(Deserialize)]
struct RawAnimation {
    #[serde(default)]
    curves: Vec<Curve>,
}
