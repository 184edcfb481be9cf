//! Typed lookups over one raw entity record.
//!
//! Every accessor returns `Option`; callers pick the documented default.

use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy)]
pub struct RawEntityRecord<'a> {
    value: &'a Value,
}

impl<'a> RawEntityRecord<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// `Type`, if present and non-empty.
    pub fn entity_type(&self) -> Option<&'a str> {
        self.value
            .get("Type")
            .and_then(Value::as_str)
            .filter(|type_name| !type_name.is_empty())
    }

    /// `Outer`, the name of the owning actor.
    pub fn outer(&self) -> Option<&'a str> {
        self.value.get("Outer").and_then(Value::as_str)
    }

    /// `Properties`, if present and non-empty.
    pub fn properties(&self) -> Option<Properties<'a>> {
        self.value
            .get("Properties")
            .and_then(Value::as_object)
            .filter(|properties| !properties.is_empty())
            .map(Properties)
    }

    /// `PerInstanceSMData`, if present as an array (possibly empty).
    pub fn per_instance_data(&self) -> Option<&'a [Value]> {
        self.value
            .get("PerInstanceSMData")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }
}

/// A JSON object nested inside a record.
#[derive(Debug, Clone, Copy)]
pub struct Properties<'a>(&'a Map<String, Value>);

impl<'a> Properties<'a> {
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(Properties)
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    pub fn object(&self, key: &str) -> Option<Properties<'a>> {
        self.get(key).and_then(Properties::from_value)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn string(&self, key: &str) -> Option<&'a str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `{ "X", "Y", "Z" }` with each axis optional.
    pub fn xyz(&self) -> [Option<f64>; 3] {
        [self.number("X"), self.number("Y"), self.number("Z")]
    }

    /// `{ "Roll", "Pitch", "Yaw" }` in degrees, each defaulting to 0.
    pub fn roll_pitch_yaw(&self) -> [f64; 3] {
        ["Roll", "Pitch", "Yaw"].map(|key| self.number(key).unwrap_or(0.0))
    }

    /// `{ "W", "X", "Y", "Z" }`, defaulting to the identity rotation.
    pub fn wxyz(&self) -> [f64; 4] {
        [
            self.number("W").unwrap_or(1.0),
            self.number("X").unwrap_or(0.0),
            self.number("Y").unwrap_or(0.0),
            self.number("Z").unwrap_or(0.0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_type_and_outer() {
        let value = json!({ "Type": "PointLightComponent", "Outer": "Lamp_3" });
        let record = RawEntityRecord::new(&value);

        assert_eq!(record.entity_type(), Some("PointLightComponent"));
        assert_eq!(record.outer(), Some("Lamp_3"));
    }

    #[test]
    fn empty_or_missing_type_is_none() {
        assert_eq!(RawEntityRecord::new(&json!({})).entity_type(), None);
        assert_eq!(RawEntityRecord::new(&json!({ "Type": "" })).entity_type(), None);
        assert_eq!(RawEntityRecord::new(&json!({ "Type": 3 })).entity_type(), None);
    }

    #[test]
    fn empty_properties_are_missing() {
        let value = json!({ "Properties": {} });
        assert!(RawEntityRecord::new(&value).properties().is_none());

        let value = json!({ "Properties": null });
        assert!(RawEntityRecord::new(&value).properties().is_none());
    }

    #[test]
    fn per_instance_data_distinguishes_empty_from_absent() {
        let empty = json!({ "PerInstanceSMData": [] });
        assert_eq!(RawEntityRecord::new(&empty).per_instance_data().map(<[_]>::len), Some(0));
        assert!(RawEntityRecord::new(&json!({})).per_instance_data().is_none());
    }

    #[test]
    fn vector_defaults() {
        let value = json!({ "Rot": { "Yaw": 90.0 }, "Quat": { "Z": 1.0, "W": 0.0 }, "Scale": { "X": 2 } });
        let properties = Properties::from_value(&value).unwrap();

        assert_eq!(properties.object("Rot").unwrap().roll_pitch_yaw(), [0.0, 0.0, 90.0]);
        assert_eq!(properties.object("Quat").unwrap().wxyz(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(properties.object("Scale").unwrap().xyz(), [Some(2.0), None, None]);
    }

    #[test]
    fn null_values_are_absent() {
        let value = json!({ "bVisible": null });
        let properties = Properties::from_value(&value).unwrap();
        assert_eq!(properties.flag("bVisible"), None);
    }
}
