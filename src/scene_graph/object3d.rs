use glam::{DMat4, DQuat, DVec3};
use id_arena::Id;

use crate::math::euler::{decompose_xyz, quat_from_euler_xyz};
use crate::scene_graph::scene_model::SceneModelId;
use crate::scene_graph::transform::Transform;

pub type ObjectId = Id<Object3D>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationMode {
    /// Euler angles, X applied first.
    #[default]
    Xyz,
    Quaternion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightKind {
    Spot,
    Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LightData {
    pub name: String,
    pub kind: LightKind,
    pub color: DVec3,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectData {
    Mesh(SceneModelId),
    Light(LightData),
}

#[derive(Debug, Clone)]
pub struct Object3D {
    pub name: String,
    pub data: ObjectData,
    pub location: DVec3,
    pub rotation_mode: RotationMode,
    pub rotation_euler: DVec3,
    pub rotation_quaternion: DQuat,
    pub scale: DVec3,
}

impl Object3D {
    pub fn new(name: impl Into<String>, data: ObjectData) -> Self {
        Self {
            name: name.into(),
            data,
            location: DVec3::ZERO,
            rotation_mode: RotationMode::default(),
            rotation_euler: DVec3::ZERO,
            rotation_quaternion: DQuat::IDENTITY,
            scale: DVec3::ONE,
        }
    }

    pub fn model_id(&self) -> Option<SceneModelId> {
        match self.data {
            ObjectData::Mesh(id) => Some(id),
            ObjectData::Light(_) => None,
        }
    }

    pub fn light(&self) -> Option<&LightData> {
        match &self.data {
            ObjectData::Light(light) => Some(light),
            ObjectData::Mesh(_) => None,
        }
    }

    pub fn rotation(&self) -> DQuat {
        match self.rotation_mode {
            RotationMode::Xyz => quat_from_euler_xyz(self.rotation_euler),
            RotationMode::Quaternion => self.rotation_quaternion,
        }
    }

    /// Copies location, Euler rotation and scale, switching to XYZ rotation.
    pub fn set_transform(&mut self, transform: &Transform) {
        self.rotation_mode = RotationMode::Xyz;
        self.location = transform.translation();
        self.rotation_euler = transform.rotation();
        self.scale = transform.scale();
    }

    pub fn matrix_world(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(self.scale, self.rotation(), self.location)
    }

    /// Decomposes `matrix` into location, rotation and scale for the current
    /// rotation mode.
    pub fn set_matrix_world(&mut self, matrix: DMat4) {
        let (location, rotation_euler, scale) = decompose_xyz(&matrix);
        self.location = location;
        self.scale = scale;

        match self.rotation_mode {
            RotationMode::Xyz => self.rotation_euler = rotation_euler,
            RotationMode::Quaternion => {
                self.rotation_quaternion = quat_from_euler_xyz(rotation_euler)
            }
        }
    }
}
