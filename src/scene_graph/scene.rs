use std::time::{Duration, Instant};

use glam::DVec3;
use id_arena::Arena;

use crate::scene_graph::collection::{Collection, CollectionId};
use crate::scene_graph::deferred::{DeferredTask, ScheduledTask};
use crate::scene_graph::object3d::{LightData, LightKind, Object3D, ObjectData, ObjectId};

pub const ROOT_COLLECTION_NAME: &str = "Scene Collection";

/// Objects, the collections they are linked into, and the host's deferred work
/// queue.
pub struct Scene {
    pub objects: Arena<Object3D>,
    pub collections: Arena<Collection>,
    root_collection: CollectionId,
    deferred: Vec<ScheduledTask>,
}

impl Scene {
    pub fn new() -> Self {
        let mut collections = Arena::new();
        let root_collection = collections.alloc(Collection::new(ROOT_COLLECTION_NAME));

        Self {
            objects: Arena::new(),
            collections,
            root_collection,
            deferred: Vec::new(),
        }
    }

    pub fn root_collection(&self) -> CollectionId {
        self.root_collection
    }

    /// Creates an unlinked collection.
    pub fn new_collection(&mut self, name: impl Into<String>) -> CollectionId {
        self.collections.alloc(Collection::new(name))
    }

    pub fn link_child_collection(&mut self, parent: CollectionId, child: CollectionId) {
        if let Some(parent) = self.collections.get_mut(parent) {
            if !parent.child_ids.contains(&child) {
                parent.child_ids.push(child);
            }
        }
    }

    /// Creates an object that is not yet part of any collection.
    pub fn new_object(&mut self, name: impl Into<String>, data: ObjectData) -> ObjectId {
        self.objects.alloc(Object3D::new(name, data))
    }

    /// Light data with a white default color.
    pub fn new_light(&self, name: impl Into<String>, kind: LightKind) -> LightData {
        LightData {
            name: name.into(),
            kind,
            color: DVec3::ONE,
        }
    }

    /// Links `object` into `collection`. Linking the same pair twice is a no-op.
    pub fn link(&mut self, collection: CollectionId, object: ObjectId) {
        if let Some(collection) = self.collections.get_mut(collection) {
            if !collection.contains(object) {
                collection.object_ids.push(object);
            }
        }
    }

    pub fn get_object(&self, id: ObjectId) -> Option<&Object3D> {
        self.objects.get(id)
    }

    pub fn get_object_mut(&mut self, id: ObjectId) -> Option<&mut Object3D> {
        self.objects.get_mut(id)
    }

    pub fn get_collection(&self, id: CollectionId) -> Option<&Collection> {
        self.collections.get(id)
    }

    pub fn get_object_by_name(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .find(|(_, object)| object.name == name)
            .map(|(id, _)| id)
    }

    pub fn get_collection_by_name(&self, name: &str) -> Option<CollectionId> {
        self.collections
            .iter()
            .find(|(_, collection)| collection.name == name)
            .map(|(id, _)| id)
    }

    /// Objects linked into `collection`, in link order.
    pub fn collection_objects(
        &self,
        collection: CollectionId,
    ) -> impl Iterator<Item = (ObjectId, &Object3D)> + '_ {
        self.collections
            .get(collection)
            .into_iter()
            .flat_map(|collection| collection.object_ids.iter())
            .filter_map(move |&id| self.objects.get(id).map(|object| (id, object)))
    }

    /// Queues `task` to run once, no earlier than `delay` from now.
    pub fn schedule_deferred(&mut self, task: DeferredTask, delay: Duration) {
        self.deferred.push(ScheduledTask::after(task, delay));
    }

    pub fn pending_deferred(&self) -> usize {
        self.deferred.len()
    }

    pub fn next_deferred_due(&self) -> Option<Instant> {
        self.deferred.iter().map(|scheduled| scheduled.due).min()
    }

    /// Hands every task due at `now` to `run`, in scheduling order, and drops
    /// it from the queue. Returns how many ran.
    pub fn run_deferred(&mut self, now: Instant, mut run: impl FnMut(DeferredTask)) -> usize {
        let (due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.deferred)
            .into_iter()
            .partition(|scheduled| scheduled.due <= now);

        self.deferred = pending;

        for scheduled in &due {
            run(scheduled.task);
        }

        due.len()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light(scene: &mut Scene, name: &str) -> ObjectId {
        let data = scene.new_light(name, LightKind::Spot);
        scene.new_object(name, ObjectData::Light(data))
    }

    #[test]
    fn objects_start_unlinked() {
        let mut scene = Scene::new();
        light(&mut scene, "Lamp");

        assert_eq!(scene.collection_objects(scene.root_collection()).count(), 0);
    }

    #[test]
    fn link_keeps_order_and_ignores_duplicates() {
        let mut scene = Scene::new();
        let collection = scene.new_collection("map.json");
        let a = light(&mut scene, "A");
        let b = light(&mut scene, "B");

        scene.link(collection, b);
        scene.link(collection, a);
        scene.link(collection, b);

        let names: Vec<_> = scene
            .collection_objects(collection)
            .map(|(_, object)| object.name.as_str())
            .collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn new_light_is_white() {
        let scene = Scene::new();
        assert_eq!(scene.new_light("Lamp", LightKind::Point).color, DVec3::ONE);
    }

    #[test]
    fn deferred_tasks_run_once_when_due() {
        let mut scene = Scene::new();
        scene.schedule_deferred(DeferredTask::ReloadLibraries, Duration::from_secs(3600));

        let mut ran = Vec::new();
        assert_eq!(scene.run_deferred(Instant::now(), |task| ran.push(task)), 0);
        assert_eq!(scene.pending_deferred(), 1);

        let later = Instant::now() + Duration::from_secs(7200);
        assert_eq!(scene.run_deferred(later, |task| ran.push(task)), 1);
        assert_eq!(scene.run_deferred(later, |task| ran.push(task)), 0);
        assert_eq!(ran, [DeferredTask::ReloadLibraries]);
        assert!(scene.next_deferred_due().is_none());
    }
}
