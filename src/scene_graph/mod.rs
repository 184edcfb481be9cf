pub mod collection;
pub mod deferred;
pub mod object3d;
pub mod scene;
pub mod scene_model;
pub mod transform;

// Re-export main types for convenience
pub use collection::{Collection, CollectionId};
pub use deferred::DeferredTask;
pub use object3d::{LightData, LightKind, Object3D, ObjectData, ObjectId, RotationMode};
pub use scene::Scene;
pub use scene_model::{SceneModel, SceneModelId};
pub use transform::Transform;
