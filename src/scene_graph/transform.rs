use glam::{DMat4, DVec3};

use crate::math::euler::quat_from_euler_xyz;

/// Location, XYZ Euler rotation (radians) and scale of a placement, in target
/// scene units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    translation: DVec3,
    rotation: DVec3,
    scale: DVec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: DVec3::ZERO,
        rotation: DVec3::ZERO,
        scale: DVec3::ONE,
    };

    pub fn new(translation: DVec3, rotation: DVec3, scale: DVec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    pub fn from_translation(translation: DVec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn set_translation(&mut self, translation: DVec3) {
        self.translation = translation;
    }

    pub fn set_rotation(&mut self, rotation: DVec3) {
        self.rotation = rotation;
    }

    pub fn set_scale(&mut self, scale: DVec3) {
        self.scale = scale;
    }

    pub fn translation(&self) -> DVec3 {
        self.translation
    }

    pub fn rotation(&self) -> DVec3 {
        self.rotation
    }

    pub fn scale(&self) -> DVec3 {
        self.scale
    }

    /// Translation * rotation * scale.
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(
            self.scale,
            quat_from_euler_xyz(self.rotation),
            self.translation,
        )
    }

    /// World matrix of `local` placed under this transform.
    pub fn compose(&self, local: &Transform) -> DMat4 {
        self.matrix() * local.matrix()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
