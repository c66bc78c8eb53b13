//! The sensor attribute bag consumed by the code generator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named configuration attribute. Only a subset is relevant per family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    Armor,
    ThreadSize,
    UnthreadedLength,
    CaseLength,
    CableLength,
    CableType,
    Range,
    MeasurementUnit,
    Sensitivity,
    ExtraOptions,
    MountingThreads,
    Safety,
}

impl Attribute {
    pub const ALL: [Attribute; 12] = [
        Attribute::Armor,
        Attribute::ThreadSize,
        Attribute::UnthreadedLength,
        Attribute::CaseLength,
        Attribute::CableLength,
        Attribute::CableType,
        Attribute::Range,
        Attribute::MeasurementUnit,
        Attribute::Sensitivity,
        Attribute::ExtraOptions,
        Attribute::MountingThreads,
        Attribute::Safety,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Armor => "armor",
            Attribute::ThreadSize => "threadSize",
            Attribute::UnthreadedLength => "unthreadedLength",
            Attribute::CaseLength => "caseLength",
            Attribute::CableLength => "cableLength",
            Attribute::CableType => "cableType",
            Attribute::Range => "range",
            Attribute::MeasurementUnit => "measurementUnit",
            Attribute::Sensitivity => "sensitivity",
            Attribute::ExtraOptions => "extraOptions",
            Attribute::MountingThreads => "mountingThreads",
            Attribute::Safety => "safety",
        }
    }

    /// Parse an attribute name. `measurement` is accepted for `measurementUnit`.
    pub fn from_name(name: &str) -> Option<Self> {
        if name == "measurement" {
            return Some(Attribute::MeasurementUnit);
        }
        Self::ALL.into_iter().find(|a| a.name() == name)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// String values for every attribute.
///
/// Defaults are the catalog-wide starting values; use
/// [`SensorAttributes::for_model`] to get the defaults of one model family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SensorAttributes {
    pub armor: String,
    pub thread_size: String,
    pub unthreaded_length: String,
    pub case_length: String,
    pub cable_length: String,
    pub cable_type: String,
    pub range: String,
    #[serde(alias = "measurement")]
    pub measurement_unit: String,
    pub sensitivity: String,
    pub extra_options: String,
    pub mounting_threads: String,
    pub safety: String,
}

impl Default for SensorAttributes {
    fn default() -> Self {
        Self {
            armor: "L".to_string(),
            thread_size: "M2".to_string(),
            unthreaded_length: "00".to_string(),
            case_length: "02".to_string(),
            cable_length: "05".to_string(),
            cable_type: "1".to_string(),
            range: "10".to_string(),
            measurement_unit: "P".to_string(),
            sensitivity: "010".to_string(),
            extra_options: "0".to_string(),
            mounting_threads: "01".to_string(),
            safety: "0".to_string(),
        }
    }
}

impl SensorAttributes {
    /// Defaults for the family `model_id` belongs to.
    ///
    /// Unknown models get the catalog-wide defaults.
    pub fn for_model(model_id: &str) -> Self {
        let mut attrs = Self::default();
        if let Some(family) = super::family_for(model_id) {
            for field in family.fields {
                attrs.set(field.attribute, field.default);
            }
        }
        attrs
    }

    pub fn get(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Armor => &self.armor,
            Attribute::ThreadSize => &self.thread_size,
            Attribute::UnthreadedLength => &self.unthreaded_length,
            Attribute::CaseLength => &self.case_length,
            Attribute::CableLength => &self.cable_length,
            Attribute::CableType => &self.cable_type,
            Attribute::Range => &self.range,
            Attribute::MeasurementUnit => &self.measurement_unit,
            Attribute::Sensitivity => &self.sensitivity,
            Attribute::ExtraOptions => &self.extra_options,
            Attribute::MountingThreads => &self.mounting_threads,
            Attribute::Safety => &self.safety,
        }
    }

    pub fn set(&mut self, attribute: Attribute, value: impl Into<String>) {
        let value = value.into();
        match attribute {
            Attribute::Armor => self.armor = value,
            Attribute::ThreadSize => self.thread_size = value,
            Attribute::UnthreadedLength => self.unthreaded_length = value,
            Attribute::CaseLength => self.case_length = value,
            Attribute::CableLength => self.cable_length = value,
            Attribute::CableType => self.cable_type = value,
            Attribute::Range => self.range = value,
            Attribute::MeasurementUnit => self.measurement_unit = value,
            Attribute::Sensitivity => self.sensitivity = value,
            Attribute::ExtraOptions => self.extra_options = value,
            Attribute::MountingThreads => self.mounting_threads = value,
            Attribute::Safety => self.safety = value,
        }
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, attribute: Attribute, value: impl Into<String>) -> Self {
        self.set(attribute, value);
        self
    }
}
