use glam::DMat4;
use itertools::Itertools;
use serde_json::Value;

use crate::import::asset_path::{asset_path_from_object_path, BASIC_SHAPES_MARKER};
use crate::import::record::{Properties, RawEntityRecord};
use crate::import::validity::{Validity, ValidityFlag};
use crate::math::convert::{
    convert_position, convert_rotation_euler, convert_rotation_quat, convert_scale,
};
use crate::scene_graph::transform::Transform;

/// Name used for records without an `Outer`.
pub const UNNAMED_ENTITY: &str = "Error";

const USER_CONSTRUCTION_SCRIPT: &str = "EComponentCreationMethod::UserConstructionScript";

/// Fields shared by plain and instanced mesh components.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshComponent {
    pub name: String,
    pub validity: Validity,
    /// Set once the mesh reference has passed validation.
    pub asset_path: Option<String>,
    pub transform: Transform,
}

impl MeshComponent {
    /// Runs the mesh validation chain and reads the component's own transform.
    /// Stops at the first blocking flag.
    fn from_record(record: &RawEntityRecord) -> Self {
        let mut component = Self {
            name: record.outer().unwrap_or(UNNAMED_ENTITY).to_string(),
            validity: Validity::default(),
            asset_path: None,
            transform: Transform::IDENTITY,
        };

        let Some(properties) = record.properties() else {
            component.validity.set(ValidityFlag::NoEntity);
            return component;
        };

        let Some(mesh) = properties.object("StaticMesh").filter(|mesh| !mesh.is_empty()) else {
            component.validity.set(ValidityFlag::NoMesh);
            return component;
        };

        let Some(object_path) = mesh.string("ObjectPath").filter(|path| !path.is_empty()) else {
            component.validity.set(ValidityFlag::NoPath);
            return component;
        };

        if object_path.contains(BASIC_SHAPES_MARKER) {
            component.validity.set(ValidityFlag::BaseShape);
            return component;
        }

        if properties.flag("bRenderInMainPass") == Some(false) {
            component.validity.set(ValidityFlag::NotRendered);
            return component;
        }

        if properties.flag("bVisible") == Some(false) {
            component.validity.set(ValidityFlag::Invisible);
        }

        if properties.string("CreationMethod") == Some(USER_CONSTRUCTION_SCRIPT) {
            component.validity.set(ValidityFlag::BadCreationMethod);
        }

        component.asset_path = Some(asset_path_from_object_path(object_path));
        component.transform = relative_transform(&properties);

        component
    }
}

/// Component transform from `RelativeLocation`, `RelativeRotation` and
/// `RelativeScale3D`. Missing blocks leave the identity in place.
pub fn relative_transform(properties: &Properties) -> Transform {
    let mut transform = Transform::IDENTITY;

    if let Some(location) = properties.object("RelativeLocation") {
        let [x, y, z] = location.xyz().map(|axis| axis.unwrap_or(0.0));
        transform.set_translation(convert_position(x, y, z));
    }

    if let Some(rotation) = properties.object("RelativeRotation") {
        let [roll, pitch, yaw] = rotation.roll_pitch_yaw();
        transform.set_rotation(convert_rotation_euler(roll, pitch, yaw));
    }

    if let Some(scale) = properties.object("RelativeScale3D") {
        let [x, y, z] = scale.xyz();
        transform.set_scale(convert_scale(x, y, z));
    }

    transform
}

/// Local transform of one `PerInstanceSMData` element. Elements without a
/// `TransformData` block are placed at the identity.
pub fn instance_transform(instance: &Value) -> Transform {
    let mut transform = Transform::IDENTITY;

    let Some(data) = Properties::from_value(instance).and_then(|i| i.object("TransformData"))
    else {
        return transform;
    };

    if let Some(translation) = data.object("Translation") {
        let [x, y, z] = translation.xyz().map(|axis| axis.unwrap_or(0.0));
        transform.set_translation(convert_position(x, y, z));
    }

    if let Some(rotation) = data.object("Rotation") {
        let [w, x, y, z] = rotation.wxyz();
        transform.set_rotation(convert_rotation_quat(w, x, y, z));
    }

    if let Some(scale) = data.object("Scale3D") {
        let [x, y, z] = scale.xyz();
        transform.set_scale(convert_scale(x, y, z));
    }

    transform
}

/// A single placed mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticMeshEntity {
    pub component: MeshComponent,
}

impl StaticMeshEntity {
    pub fn from_record(record: &RawEntityRecord) -> Self {
        Self {
            component: MeshComponent::from_record(record),
        }
    }

    pub fn transform(&self) -> &Transform {
        &self.component.transform
    }
}

/// A mesh repeated once per element of `PerInstanceSMData`.
#[derive(Debug, Clone, PartialEq)]
pub struct InstancedStaticMeshEntity {
    pub component: MeshComponent,
    /// In source order.
    pub instances: Vec<Transform>,
}

impl InstancedStaticMeshEntity {
    pub fn from_record(record: &RawEntityRecord) -> Self {
        let mut component = MeshComponent::from_record(record);

        if component.validity.is_invalid() {
            return Self {
                component,
                instances: Vec::new(),
            };
        }

        let Some(per_instance_data) = record.per_instance_data() else {
            component.validity.set(ValidityFlag::NoPerInstanceData);
            return Self {
                component,
                instances: Vec::new(),
            };
        };

        let instances = per_instance_data.iter().map(instance_transform).collect_vec();

        Self {
            component,
            instances,
        }
    }

    pub fn base_transform(&self) -> &Transform {
        &self.component.transform
    }

    /// World matrix of every instance: base * instance, in source order.
    pub fn world_matrices(&self) -> impl Iterator<Item = DMat4> + '_ {
        let base = self.base_transform();
        self.instances.iter().map(move |instance| base.compose(instance))
    }
}
