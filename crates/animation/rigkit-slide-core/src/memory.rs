//! In-memory [`AnimationHost`] used by tests, fixtures and headless tools.

use hashbrown::{HashMap, HashSet};

use crate::config::PointerMapping;
use crate::data::{Keyframe, SceneObject, Timeline};
use crate::error::HostError;
use crate::host::{AnimationHost, KeySample, ReportLevel};
use crate::ids::{IdAllocator, KeyRef, ObjectId};

/// Edit-bracket call recorded by [`MemoryScene`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EditEvent {
    Begin(ObjectId),
    End(ObjectId),
}

#[derive(Debug, Default)]
pub struct MemoryScene {
    ids: IdAllocator,
    /// Insertion order; `objects()` reports in this order.
    order: Vec<ObjectId>,
    objects: HashMap<ObjectId, SceneObject>,
    selected: Vec<ObjectId>,
    active: Option<ObjectId>,
    view: Option<PointerMapping>,
    /// Objects whose keyframes reject writes.
    locked: HashSet<ObjectId>,
    reports: Vec<(ReportLevel, String)>,
    edits: Vec<EditEvent>,
    writes: u64,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_object(&mut self, name: &str, timeline: Option<Timeline>) -> ObjectId {
        let id = self.ids.alloc_object();
        self.order.push(id);
        self.objects.insert(
            id,
            SceneObject {
                id,
                name: name.to_string(),
                timeline,
            },
        );
        id
    }

    pub fn find(&self, name: &str) -> Option<ObjectId> {
        self.order
            .iter()
            .copied()
            .find(|id| self.objects.get(id).is_some_and(|o| o.name == name))
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(&id)
    }

    pub fn timeline(&self, id: ObjectId) -> Option<&Timeline> {
        self.objects.get(&id).and_then(|o| o.timeline.as_ref())
    }

    /// Keyframe times of one curve in storage order (empty if absent).
    pub fn times(&self, id: ObjectId, curve: usize) -> Vec<f32> {
        self.timeline(id)
            .and_then(|tl| tl.curves.get(curve))
            .map(|c| c.times())
            .unwrap_or_default()
    }

    pub fn set_active(&mut self, id: Option<ObjectId>) {
        self.active = id;
    }

    pub fn select(&mut self, id: ObjectId) {
        if !self.selected.contains(&id) {
            self.selected.push(id);
        }
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    pub fn set_view_mapping(&mut self, mapping: Option<PointerMapping>) {
        self.view = mapping;
    }

    /// Make every keyframe write to `id` fail with [`HostError::Rejected`].
    pub fn lock(&mut self, id: ObjectId) {
        self.locked.insert(id);
    }

    pub fn reports(&self) -> &[(ReportLevel, String)] {
        &self.reports
    }

    pub fn edits(&self) -> &[EditEvent] {
        &self.edits
    }

    /// Total number of successful keyframe time writes.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    fn keyframe(&self, key: KeyRef) -> Option<&Keyframe> {
        self.timeline(key.object)?
            .curves
            .get(key.curve)?
            .keyframes
            .get(key.key)
    }
}

impl AnimationHost for MemoryScene {
    fn active_object(&self) -> Option<ObjectId> {
        self.active
    }

    fn selected_objects(&self) -> Vec<ObjectId> {
        self.selected.clone()
    }

    fn objects(&self) -> Vec<ObjectId> {
        self.order.clone()
    }

    fn object_name(&self, object: ObjectId) -> Option<String> {
        self.objects.get(&object).map(|o| o.name.clone())
    }

    fn has_animation(&self, object: ObjectId) -> bool {
        self.timeline(object).is_some()
    }

    fn curve_count(&self, object: ObjectId) -> usize {
        self.timeline(object).map_or(0, |tl| tl.curves.len())
    }

    fn key_count(&self, object: ObjectId, curve: usize) -> usize {
        self.timeline(object)
            .and_then(|tl| tl.curves.get(curve))
            .map_or(0, |c| c.keyframes.len())
    }

    fn key(&self, key: KeyRef) -> Option<KeySample> {
        self.keyframe(key).map(|k| KeySample {
            time: k.time,
            selected: k.selected,
        })
    }

    fn set_key_time(&mut self, key: KeyRef, time: f32) -> Result<(), HostError> {
        if self.locked.contains(&key.object) {
            return Err(HostError::Rejected {
                reason: format!("object {} is locked", key.object),
            });
        }
        let obj = self
            .objects
            .get_mut(&key.object)
            .ok_or(HostError::MissingObject(key.object))?;
        let kf = obj
            .timeline
            .as_mut()
            .and_then(|tl| tl.curves.get_mut(key.curve))
            .and_then(|c| c.keyframes.get_mut(key.key))
            .ok_or(HostError::MissingKeyframe(key))?;
        kf.time = time;
        self.writes += 1;
        Ok(())
    }

    fn begin_edit(&mut self, object: ObjectId) {
        self.edits.push(EditEvent::Begin(object));
    }

    fn end_edit(&mut self, object: ObjectId) {
        self.edits.push(EditEvent::End(object));
    }

    fn view_mapping(&self) -> Option<PointerMapping> {
        self.view
    }

    fn report(&mut self, level: ReportLevel, message: &str) {
        self.reports.push((level, message.to_string()));
    }
}
