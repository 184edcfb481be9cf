use id_arena::Id;

use crate::scene_graph::object3d::ObjectId;

pub type CollectionId = Id<Collection>;

/// Named group of linked objects. Links are append-only.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub name: String,
    pub object_ids: Vec<ObjectId>,
    pub child_ids: Vec<CollectionId>,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn contains(&self, object_id: ObjectId) -> bool {
        self.object_ids.contains(&object_id)
    }
}
