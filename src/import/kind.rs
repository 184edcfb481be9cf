use crate::scene_graph::object3d::LightKind;

/// Entity kinds keyed by a record's `Type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    StaticMesh,
    /// Both plain and hierarchical instanced mesh components.
    InstancedStaticMesh,
    Light(LightKind),
    /// Any other component type. Ignored by the importer.
    Unrecognized,
}

impl EntityKind {
    pub fn from_type_name(type_name: &str) -> Self {
        match type_name {
            "StaticMeshComponent" => Self::StaticMesh,
            "InstancedStaticMeshComponent" | "HierarchicalInstancedStaticMeshComponent" => {
                Self::InstancedStaticMesh
            }
            "SpotLightComponent" => Self::Light(LightKind::Spot),
            "PointLightComponent" => Self::Light(LightKind::Point),
            _ => Self::Unrecognized,
        }
    }

    pub fn is_mesh(self) -> bool {
        matches!(self, Self::StaticMesh | Self::InstancedStaticMesh)
    }

    pub fn is_light(self) -> bool {
        matches!(self, Self::Light(_))
    }
}
