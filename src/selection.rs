//! The accumulated wizard selection.
//!
//! A `Selection` is a plain value. The core never mutates one in place;
//! edits go through [`crate::transition::apply_change`], which returns a new
//! value with the reset cascade applied.
//!
//! On disk, enumerated fields use their catalog labels and an empty string
//! means "unset", so a file exported with blank form fields loads as-is:
//!
//! ```toml
//! [project]
//! customer = "ACME Power"
//!
//! [sensor]
//! area = "Safe"
//! contactType = "Non-Contact"
//! measurementType = ""
//! ```

use crate::catalog::{
    Area, BearingType, ContactType, ExtensionCableLength, MachineType, MeasurementType,
    MonitoringMake, MonitoringType, PadMoc, StudMoc, Vm7Module,
};
use crate::codegen::{self, SensorAttributes};
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Selection {
    pub project: ProjectDetails,
    pub machine: MachineDetails,
    pub sensor: SensorSelection,
    pub accessories: Accessories,
    pub junction_box: JunctionBox,
    pub monitoring: Monitoring,
}

impl Selection {
    /// Generated product code for the current sensor, `"..."` when no model is chosen.
    pub fn sensor_code(&self) -> String {
        codegen::generate_code(&self.sensor.model_id, &self.sensor.attributes)
    }
}

/// Free-text project metadata. Only echoed into summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDetails {
    pub engineer: String,
    pub email: String,
    pub offer_no: String,
    pub customer: String,
    pub project: String,
    #[serde(rename = "ref")]
    pub reference: String,
    pub branch: String,
}

/// Names of the project fields, as used by the wizard policy and `--set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectField {
    Engineer,
    Email,
    OfferNo,
    Customer,
    Project,
    #[serde(rename = "ref")]
    Reference,
    Branch,
}

impl ProjectField {
    pub const ALL: [ProjectField; 7] = [
        ProjectField::Engineer,
        ProjectField::Email,
        ProjectField::OfferNo,
        ProjectField::Customer,
        ProjectField::Project,
        ProjectField::Reference,
        ProjectField::Branch,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ProjectField::Engineer => "engineer",
            ProjectField::Email => "email",
            ProjectField::OfferNo => "offerNo",
            ProjectField::Customer => "customer",
            ProjectField::Project => "project",
            ProjectField::Reference => "ref",
            ProjectField::Branch => "branch",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl ProjectDetails {
    pub fn get(&self, field: ProjectField) -> &str {
        match field {
            ProjectField::Engineer => &self.engineer,
            ProjectField::Email => &self.email,
            ProjectField::OfferNo => &self.offer_no,
            ProjectField::Customer => &self.customer,
            ProjectField::Project => &self.project,
            ProjectField::Reference => &self.reference,
            ProjectField::Branch => &self.branch,
        }
    }

    pub fn set(&mut self, field: ProjectField, value: String) {
        let slot = match field {
            ProjectField::Engineer => &mut self.engineer,
            ProjectField::Email => &mut self.email,
            ProjectField::OfferNo => &mut self.offer_no,
            ProjectField::Customer => &mut self.customer,
            ProjectField::Project => &mut self.project,
            ProjectField::Reference => &mut self.reference,
            ProjectField::Branch => &mut self.branch,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MachineDetails {
    pub machine: String,
    #[serde(
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub machine_type: Option<MachineType>,
    #[serde(
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub bearing_type: Option<BearingType>,
    /// Numeric-as-string, echoed verbatim.
    pub machine_speed: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SensorSelection {
    #[serde(
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub area: Option<Area>,
    #[serde(
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub contact_type: Option<ContactType>,
    #[serde(
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub measurement_type: Option<MeasurementType>,
    /// Catalog model identifier, empty when none is chosen.
    pub model_id: String,
    pub quantity: u32,
    pub attributes: SensorAttributes,
}

impl Default for SensorSelection {
    fn default() -> Self {
        Self {
            area: None,
            contact_type: None,
            measurement_type: None,
            model_id: String::new(),
            quantity: 1,
            attributes: SensorAttributes::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Accessories {
    pub extension_cable: ExtensionCable,
    pub mounting_pad: MountingPad,
    pub mounting_stud: MountingStud,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionCable {
    pub required: bool,
    pub length: ExtensionCableLength,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountingPad {
    pub required: bool,
    pub moc: PadMoc,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountingStud {
    pub required: bool,
    /// Free-text thread specification.
    pub thread: String,
    /// Thread depth in millimetres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
    pub moc: StudMoc,
}

/// Junction-box inputs. Whether a box is required is derived from `moc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JunctionBox {
    /// Material of construction. Blank means no junction box.
    pub moc: String,
    pub inputs: u32,
    pub outputs: u32,
    pub gland_moc: String,
}

impl JunctionBox {
    pub fn is_required(&self) -> bool {
        !self.moc.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Monitoring {
    pub required: bool,
    #[serde(
        rename = "type",
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub system_type: Option<MonitoringType>,
    #[serde(
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub make: Option<MonitoringMake>,
    pub model: String,
    pub vm7: Vm7Config,
}

/// Installed quantity per VM-7 module. Every module is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Vm7Config {
    pub vm761: u32,
    pub vm751: u32,
    pub vm742: u32,
    pub vm741: u32,
    pub vm701: u32,
    pub vm702: u32,
    pub vm703: u32,
    pub vm704: u32,
    pub vm706: u32,
    pub vm721: u32,
    pub vm722: u32,
    pub vz71: u32,
    pub vz75: u32,
    pub vz76: u32,
    pub vm771: u32,
    pub vm772: u32,
    pub vm773: u32,
}

/// Maps each module to its counter field.
macro_rules! vm7_fields {
    ($($variant:ident => $field:ident),* $(,)?) => {
        impl Vm7Config {
            pub fn get(&self, module: Vm7Module) -> u32 {
                match module {
                    $(Vm7Module::$variant => self.$field,)*
                }
            }

            pub fn set(&mut self, module: Vm7Module, quantity: u32) {
                match module {
                    $(Vm7Module::$variant => self.$field = quantity,)*
                }
            }
        }
    };
}

vm7_fields! {
    Vm761 => vm761,
    Vm751 => vm751,
    Vm742 => vm742,
    Vm741 => vm741,
    Vm701 => vm701,
    Vm702 => vm702,
    Vm703 => vm703,
    Vm704 => vm704,
    Vm706 => vm706,
    Vm721 => vm721,
    Vm722 => vm722,
    Vz71 => vz71,
    Vz75 => vz75,
    Vz76 => vz76,
    Vm771 => vm771,
    Vm772 => vm772,
    Vm773 => vm773,
}

impl Vm7Config {
    /// Every module with its quantity, in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (Vm7Module, u32)> + '_ {
        Vm7Module::ALL.into_iter().map(|m| (m, self.get(m)))
    }

    /// Modules with a non-zero quantity, in catalog order.
    pub fn installed(&self) -> impl Iterator<Item = (Vm7Module, u32)> + '_ {
        self.entries().filter(|&(_, qty)| qty > 0)
    }

    pub fn is_empty(&self) -> bool {
        self.installed().next().is_none()
    }
}

/// Deserialize an optional label, treating `""` the same as absent.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(label) => {
            let de: serde::de::value::StrDeserializer<'_, D::Error> = label.into_deserializer();
            T::deserialize(de).map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let selection = Selection::default();
        assert_eq!(selection.sensor.quantity, 1);
        assert_eq!(selection.sensor.model_id, "");
        assert_eq!(selection.sensor_code(), "...");
        assert!(!selection.junction_box.is_required());
        assert!(selection.monitoring.vm7.is_empty());
        assert_eq!(
            selection.accessories.extension_cable.length,
            ExtensionCableLength::M10
        );
    }

    #[test]
    fn test_junction_box_required_ignores_whitespace() {
        let blank = JunctionBox {
            moc: "   ".to_string(),
            ..JunctionBox::default()
        };
        assert!(!blank.is_required());
        let frp = JunctionBox {
            moc: "FRP".to_string(),
            ..JunctionBox::default()
        };
        assert!(frp.is_required());
    }

    #[test]
    fn test_empty_labels_load_as_unset() {
        let json = r#"{
            "project": {"customer": "ACME", "ref": "R-7"},
            "machine": {"machineType": ""},
            "sensor": {"area": "Safe", "contactType": "", "quantity": 4},
            "monitoring": {"required": true, "type": "API", "make": "FM"}
        }"#;
        let selection: Selection = serde_json::from_str(json).unwrap();
        assert_eq!(selection.project.customer, "ACME");
        assert_eq!(selection.project.reference, "R-7");
        assert_eq!(selection.machine.machine_type, None);
        assert_eq!(selection.sensor.area, Some(Area::Safe));
        assert_eq!(selection.sensor.contact_type, None);
        assert_eq!(selection.sensor.quantity, 4);
        assert_eq!(selection.monitoring.system_type, Some(MonitoringType::Api));
        assert_eq!(
            selection.monitoring.make,
            Some(MonitoringMake::ForbesMarshall)
        );
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let json = r#"{"sensor": {"area": "safe"}}"#;
        assert!(serde_json::from_str::<Selection>(json).is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut selection = Selection::default();
        selection.sensor.area = Some(Area::Hazardous);
        selection.sensor.model_id = "Monitran".to_string();
        selection.monitoring.vm7.set(Vm7Module::Vz71, 2);

        let text = toml::to_string(&selection).unwrap();
        let back: Selection = toml::from_str(&text).unwrap();
        assert_eq!(back, selection);
    }

    #[test]
    fn test_vm7_rejects_unknown_modules() {
        let json = r#"{"vm701": 1, "vm999": 2}"#;
        assert!(serde_json::from_str::<Vm7Config>(json).is_err());
    }

    #[test]
    fn test_vm7_installed_in_catalog_order() {
        let mut vm7 = Vm7Config::default();
        vm7.set(Vm7Module::Vm773, 1);
        vm7.set(Vm7Module::Vm761, 2);
        let installed: Vec<_> = vm7.installed().collect();
        assert_eq!(
            installed,
            vec![(Vm7Module::Vm761, 2), (Vm7Module::Vm773, 1)]
        );
        assert_eq!(vm7.entries().count(), 17);
    }

    #[test]
    fn test_project_fields_by_name() {
        let mut details = ProjectDetails::default();
        for field in ProjectField::ALL {
            assert_eq!(ProjectField::from_name(field.name()), Some(field));
            details.set(field, field.name().to_uppercase());
        }
        assert_eq!(details.get(ProjectField::OfferNo), "OFFERNO");
        assert_eq!(details.reference, "REF");
    }
}
