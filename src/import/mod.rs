//! Classification of raw entity records and assembly of the imported scene.

pub mod assembler;
pub mod asset_path;
pub mod kind;
pub mod light;
pub mod record;
pub mod static_mesh;
pub mod validity;

pub use assembler::{ImportReport, MapImporter};
pub use kind::EntityKind;
pub use light::LightEntity;
pub use record::RawEntityRecord;
pub use static_mesh::{InstancedStaticMeshEntity, MeshComponent, StaticMeshEntity};
pub use validity::{Validity, ValidityFlag};

/// A classified entity record.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    StaticMesh(StaticMeshEntity),
    InstancedStaticMesh(InstancedStaticMeshEntity),
    Light(LightEntity),
}

impl Entity {
    pub fn name(&self) -> &str {
        match self {
            Entity::StaticMesh(mesh) => &mesh.component.name,
            Entity::InstancedStaticMesh(mesh) => &mesh.component.name,
            Entity::Light(light) => &light.name,
        }
    }

    pub fn validity(&self) -> Validity {
        match self {
            Entity::StaticMesh(mesh) => mesh.component.validity,
            Entity::InstancedStaticMesh(mesh) => mesh.component.validity,
            Entity::Light(light) => light.validity,
        }
    }

    /// Asset path of the referenced mesh. Lights have none.
    pub fn asset_path(&self) -> Option<&str> {
        match self {
            Entity::StaticMesh(mesh) => mesh.component.asset_path.as_deref(),
            Entity::InstancedStaticMesh(mesh) => mesh.component.asset_path.as_deref(),
            Entity::Light(_) => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.validity().is_invalid()
    }
}

/// Classifies `record` as `kind`. Never fails: problems are reported through
/// the entity's validity flags. Returns `None` only for
/// [`EntityKind::Unrecognized`].
pub fn classify(record: &RawEntityRecord, kind: EntityKind) -> Option<Entity> {
    match kind {
        EntityKind::StaticMesh => Some(Entity::StaticMesh(StaticMeshEntity::from_record(record))),
        EntityKind::InstancedStaticMesh => Some(Entity::InstancedStaticMesh(
            InstancedStaticMeshEntity::from_record(record),
        )),
        EntityKind::Light(light_kind) => {
            Some(Entity::Light(LightEntity::from_record(record, light_kind)))
        }
        EntityKind::Unrecognized => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dispatches_on_kind() {
        let value = json!({
            "Type": "StaticMeshComponent",
            "Outer": "Wall",
            "Properties": { "StaticMesh": { "ObjectPath": "/Game/SM_Wall.0" } },
        });
        let record = RawEntityRecord::new(&value);

        let entity = classify(&record, EntityKind::StaticMesh).unwrap();
        assert!(matches!(entity, Entity::StaticMesh(_)));
        assert_eq!(entity.name(), "Wall");
        assert_eq!(entity.asset_path(), Some("Game/SM_Wall.uasset"));
        assert!(!entity.is_invalid());

        assert!(classify(&record, EntityKind::Unrecognized).is_none());
    }

    #[test]
    fn classification_is_repeatable() {
        let value = json!({
            "Type": "InstancedStaticMeshComponent",
            "Properties": { "StaticMesh": { "ObjectPath": "/Game/SM_Grass.0" } },
            "PerInstanceSMData": [{}, {}],
        });
        let record = RawEntityRecord::new(&value);

        assert_eq!(
            classify(&record, EntityKind::InstancedStaticMesh),
            classify(&record, EntityKind::InstancedStaticMesh)
        );
    }

    #[test]
    fn lights_have_no_asset() {
        let value = json!({ "Type": "PointLightComponent", "Properties": { "Temperature": 3000.0 } });
        let entity = classify(&RawEntityRecord::new(&value), EntityKind::from_type_name("PointLightComponent"))
            .unwrap();

        assert!(entity.asset_path().is_none());
        assert!(matches!(entity, Entity::Light(ref light) if light.kind == crate::scene_graph::LightKind::Point));
    }
}
