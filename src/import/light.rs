use glam::DVec3;

use crate::import::record::RawEntityRecord;
use crate::import::static_mesh::UNNAMED_ENTITY;
use crate::import::validity::{Validity, ValidityFlag};
use crate::lighting::color_temperature::temperature_to_rgb;
use crate::math::convert::{convert_position, convert_scale};
use crate::scene_graph::object3d::LightKind;
use crate::scene_graph::transform::Transform;

#[derive(Debug, Clone, PartialEq)]
pub struct LightEntity {
    pub name: String,
    pub validity: Validity,
    pub kind: LightKind,
    /// Meters.
    pub location: DVec3,
    /// Roll, pitch and yaw in degrees, exactly as exported.
    pub rotation_degrees: DVec3,
    pub scale: DVec3,
    pub color: DVec3,
}

impl LightEntity {
    pub fn from_record(record: &RawEntityRecord, kind: LightKind) -> Self {
        let mut light = Self {
            name: record.outer().unwrap_or(UNNAMED_ENTITY).to_string(),
            validity: Validity::default(),
            kind,
            location: DVec3::ZERO,
            rotation_degrees: DVec3::ZERO,
            scale: DVec3::ONE,
            color: DVec3::ONE,
        };

        let Some(properties) = record.properties() else {
            light.validity.set(ValidityFlag::NoEntity);
            return light;
        };

        if let Some(location) = properties.object("RelativeLocation") {
            let [x, y, z] = location.xyz().map(|axis| axis.unwrap_or(0.0));
            light.location = convert_position(x, y, z);
        }

        // Unlike meshes, pitch and yaw keep their exported sign.
        if let Some(rotation) = properties.object("RelativeRotation") {
            light.rotation_degrees = DVec3::from_array(rotation.roll_pitch_yaw());
        }

        if let Some(scale) = properties.object("RelativeScale3D") {
            let [x, y, z] = scale.xyz();
            light.scale = convert_scale(x, y, z);
        }

        if let Some(temperature) = properties.number("Temperature") {
            light.color = temperature_to_rgb(temperature);
        }

        light
    }

    /// Placement transform, with the rotation converted to radians.
    pub fn transform(&self) -> Transform {
        let rotation = DVec3::new(
            self.rotation_degrees.x.to_radians(),
            self.rotation_degrees.y.to_radians(),
            self.rotation_degrees.z.to_radians(),
        );

        Transform::new(self.location, rotation, self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn classify(value: &Value, kind: LightKind) -> LightEntity {
        LightEntity::from_record(&RawEntityRecord::new(value), kind)
    }

    #[test]
    fn missing_properties_invalidate() {
        let light = classify(&json!({ "Type": "PointLightComponent", "Outer": "Lamp" }), LightKind::Point);

        assert!(light.validity.contains(ValidityFlag::NoEntity));
        assert!(light.validity.is_invalid());
        assert_eq!(light.name, "Lamp");
    }

    #[test]
    fn defaults_to_white_at_origin() {
        let light = classify(
            &json!({ "Type": "SpotLightComponent", "Properties": { "Intensity": 8.0 } }),
            LightKind::Spot,
        );

        assert!(!light.validity.is_invalid());
        assert_eq!(light.name, UNNAMED_ENTITY);
        assert_eq!(light.color, DVec3::ONE);
        assert_eq!(light.transform(), Transform::IDENTITY);
    }

    #[test]
    fn converts_location_and_temperature() {
        let light = classify(
            &json!({
                "Type": "PointLightComponent",
                "Outer": "Torch",
                "Properties": {
                    "RelativeLocation": { "X": 100.0, "Y": 200.0, "Z": 300.0 },
                    "RelativeScale3D": { "Y": 3.0 },
                    "Temperature": 500.0,
                },
            }),
            LightKind::Point,
        );

        assert_eq!(light.location, DVec3::new(1.0, -2.0, 3.0));
        assert_eq!(light.scale, DVec3::new(1.0, 3.0, 1.0));
        assert_eq!(light.color, DVec3::new(4.70366907, 0.0, 0.0));
    }

    #[test]
    fn rotation_keeps_exported_sign() {
        let light = classify(
            &json!({
                "Type": "SpotLightComponent",
                "Properties": { "RelativeRotation": { "Roll": 10.0, "Pitch": -90.0, "Yaw": 45.0 } },
            }),
            LightKind::Spot,
        );

        assert_eq!(light.rotation_degrees, DVec3::new(10.0, -90.0, 45.0));

        let rotation = light.transform().rotation();
        assert!(rotation.abs_diff_eq(
            DVec3::new(10f64.to_radians(), (-90f64).to_radians(), 45f64.to_radians()),
            1e-12
        ));
    }
}
