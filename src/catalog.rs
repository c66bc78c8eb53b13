//! Typed vocabulary of the configurator.
//!
//! Every enum here round-trips through the exact label shown to the user.
//! Label parsing is exact and case-sensitive: `"safe"` is not `"Safe"`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Installation environment classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    Safe,
    Hazardous,
}

impl Area {
    pub const ALL: [Area; 2] = [Area::Safe, Area::Hazardous];

    pub fn label(&self) -> &'static str {
        match self {
            Area::Safe => "Safe",
            Area::Hazardous => "Hazardous",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.label() == label)
    }
}

/// Whether the sensor touches the machine surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactType {
    Contact,
    #[serde(rename = "Non-Contact")]
    NonContact,
}

impl ContactType {
    pub const ALL: [ContactType; 2] = [ContactType::Contact, ContactType::NonContact];

    pub fn label(&self) -> &'static str {
        match self {
            ContactType::Contact => "Contact",
            ContactType::NonContact => "Non-Contact",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Measurement technology. Which values are offered depends on [`ContactType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasurementType {
    Acceleration,
    Velocity,
    #[serde(rename = "Loop Powered")]
    LoopPowered,
    #[serde(rename = "Eddy Current")]
    EddyCurrent,
    #[serde(rename = "Loop Powered Eddy Current")]
    LoopPoweredEddyCurrent,
}

impl MeasurementType {
    pub const ALL: [MeasurementType; 5] = [
        MeasurementType::Acceleration,
        MeasurementType::Velocity,
        MeasurementType::LoopPowered,
        MeasurementType::EddyCurrent,
        MeasurementType::LoopPoweredEddyCurrent,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MeasurementType::Acceleration => "Acceleration",
            MeasurementType::Velocity => "Velocity",
            MeasurementType::LoopPowered => "Loop Powered",
            MeasurementType::EddyCurrent => "Eddy Current",
            MeasurementType::LoopPoweredEddyCurrent => "Loop Powered Eddy Current",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineType {
    Horizontal,
    Vertical,
}

impl MachineType {
    pub const ALL: [MachineType; 2] = [MachineType::Horizontal, MachineType::Vertical];

    pub fn label(&self) -> &'static str {
        match self {
            MachineType::Horizontal => "Horizontal",
            MachineType::Vertical => "Vertical",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BearingType {
    Antifriction,
    #[serde(rename = "Oil Sleeve Type")]
    OilSleeve,
}

impl BearingType {
    pub const ALL: [BearingType; 2] = [BearingType::Antifriction, BearingType::OilSleeve];

    pub fn label(&self) -> &'static str {
        match self {
            BearingType::Antifriction => "Antifriction",
            BearingType::OilSleeve => "Oil Sleeve Type",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label)
    }
}

/// Monitoring system architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonitoringType {
    Standalone,
    #[serde(rename = "API")]
    Api,
}

impl MonitoringType {
    pub const ALL: [MonitoringType; 2] = [MonitoringType::Standalone, MonitoringType::Api];

    pub fn label(&self) -> &'static str {
        match self {
            MonitoringType::Standalone => "Standalone",
            MonitoringType::Api => "API",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

/// Monitoring system manufacturer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonitoringMake {
    Shinkawa,
    #[serde(rename = "FM")]
    ForbesMarshall,
}

impl MonitoringMake {
    pub const ALL: [MonitoringMake; 2] = [MonitoringMake::Shinkawa, MonitoringMake::ForbesMarshall];

    /// Stored value (`"FM"` for Forbes Marshall).
    pub fn label(&self) -> &'static str {
        match self {
            MonitoringMake::Shinkawa => "Shinkawa",
            MonitoringMake::ForbesMarshall => "FM",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MonitoringMake::Shinkawa => "Shinkawa",
            MonitoringMake::ForbesMarshall => "Forbes Marshall",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}

/// Extension cable length; the code is the zero-padded metre count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExtensionCableLength {
    #[default]
    #[serde(rename = "010")]
    M10,
    #[serde(rename = "015")]
    M15,
    #[serde(rename = "020")]
    M20,
    #[serde(rename = "030")]
    M30,
}

impl ExtensionCableLength {
    pub const ALL: [ExtensionCableLength; 4] = [
        ExtensionCableLength::M10,
        ExtensionCableLength::M15,
        ExtensionCableLength::M20,
        ExtensionCableLength::M30,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ExtensionCableLength::M10 => "010",
            ExtensionCableLength::M15 => "015",
            ExtensionCableLength::M20 => "020",
            ExtensionCableLength::M30 => "030",
        }
    }

    pub fn metres(&self) -> u32 {
        match self {
            ExtensionCableLength::M10 => 10,
            ExtensionCableLength::M15 => 15,
            ExtensionCableLength::M20 => 20,
            ExtensionCableLength::M30 => 30,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

/// Mounting pad material of construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PadMoc {
    #[default]
    #[serde(rename = "MS with SS insert (Standard)")]
    MildSteelWithInsert,
    #[serde(rename = "SS304 (Non Standard)")]
    Ss304,
    #[serde(rename = "SS316L (Non Standard)")]
    Ss316L,
}

impl PadMoc {
    pub const ALL: [PadMoc; 3] = [PadMoc::MildSteelWithInsert, PadMoc::Ss304, PadMoc::Ss316L];

    pub fn label(&self) -> &'static str {
        match self {
            PadMoc::MildSteelWithInsert => "MS with SS insert (Standard)",
            PadMoc::Ss304 => "SS304 (Non Standard)",
            PadMoc::Ss316L => "SS316L (Non Standard)",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}

/// Mounting stud material of construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StudMoc {
    #[default]
    #[serde(rename = "SS304 (Standard)")]
    Ss304,
    #[serde(rename = "SS316L (Non Standard)")]
    Ss316L,
}

impl StudMoc {
    pub const ALL: [StudMoc; 2] = [StudMoc::Ss304, StudMoc::Ss316L];

    pub fn label(&self) -> &'static str {
        match self {
            StudMoc::Ss304 => "SS304 (Standard)",
            StudMoc::Ss316L => "SS316L (Non Standard)",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}

/// Grouping of VM-7 rack modules, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Vm7Group {
    Hardware,
    Blanks,
    Software,
}

/// A module of the multi-module "VM 7" monitoring system.
///
/// Declaration order is the report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vm7Module {
    Vm761,
    Vm751,
    Vm742,
    Vm741,
    Vm701,
    Vm702,
    Vm703,
    Vm704,
    Vm706,
    Vm721,
    Vm722,
    Vz71,
    Vz75,
    Vz76,
    Vm771,
    Vm772,
    Vm773,
}

impl Vm7Module {
    pub const ALL: [Vm7Module; 17] = [
        Vm7Module::Vm761,
        Vm7Module::Vm751,
        Vm7Module::Vm742,
        Vm7Module::Vm741,
        Vm7Module::Vm701,
        Vm7Module::Vm702,
        Vm7Module::Vm703,
        Vm7Module::Vm704,
        Vm7Module::Vm706,
        Vm7Module::Vm721,
        Vm7Module::Vm722,
        Vm7Module::Vz71,
        Vm7Module::Vz75,
        Vm7Module::Vz76,
        Vm7Module::Vm771,
        Vm7Module::Vm772,
        Vm7Module::Vm773,
    ];

    /// Short identifier, as used on the command line (`vm761`, `vz71`, ...).
    pub fn id(&self) -> &'static str {
        match self {
            Vm7Module::Vm761 => "vm761",
            Vm7Module::Vm751 => "vm751",
            Vm7Module::Vm742 => "vm742",
            Vm7Module::Vm741 => "vm741",
            Vm7Module::Vm701 => "vm701",
            Vm7Module::Vm702 => "vm702",
            Vm7Module::Vm703 => "vm703",
            Vm7Module::Vm704 => "vm704",
            Vm7Module::Vm706 => "vm706",
            Vm7Module::Vm721 => "vm721",
            Vm7Module::Vm722 => "vm722",
            Vm7Module::Vz71 => "vz71",
            Vm7Module::Vz75 => "vz75",
            Vm7Module::Vz76 => "vz76",
            Vm7Module::Vm771 => "vm771",
            Vm7Module::Vm772 => "vm772",
            Vm7Module::Vm773 => "vm773",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Vm7Module::Vm761 => "VM-761B/2B (Rack)",
            Vm7Module::Vm751 => "VM-751B/3B/4B (Power Supply)",
            Vm7Module::Vm742 => "VM-742B (Network Comm)",
            Vm7Module::Vm741 => "VM-741B (Local Comm/Phase)",
            Vm7Module::Vm701 => "VM-701B (Vib/Disp Monitor)",
            Vm7Module::Vm702 => "VM-702B (Abs Vib Monitor)",
            Vm7Module::Vm703 => "VM-703B (Tach/Ecc Monitor)",
            Vm7Module::Vm704 => "VM-704B (Temp Monitor)",
            Vm7Module::Vm706 => "VM-706B (Rod Drop Monitor)",
            Vm7Module::Vm721 => "VM-721B (18-Ch Relay)",
            Vm7Module::Vm722 => "VM-722B (9-Ch Relay)",
            Vm7Module::Vz71 => "VZ-71 (30mm Blank)",
            Vm7Module::Vz75 => "VZ-75 (20mm Blank)",
            Vm7Module::Vz76 => "VZ-76 (50mm Blank)",
            Vm7Module::Vm771 => "VM-771B",
            Vm7Module::Vm772 => "VM-772B",
            Vm7Module::Vm773 => "VM-773B",
        }
    }

    pub fn group(&self) -> Vm7Group {
        match self {
            Vm7Module::Vz71 | Vm7Module::Vz75 | Vm7Module::Vz76 => Vm7Group::Blanks,
            Vm7Module::Vm771 | Vm7Module::Vm772 | Vm7Module::Vm773 => Vm7Group::Software,
            _ => Vm7Group::Hardware,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }
}

macro_rules! impl_display_via {
    ($($ty:ty => $method:ident),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.$method())
                }
            }
        )*
    };
}

impl_display_via! {
    Area => label,
    ContactType => label,
    MeasurementType => label,
    MachineType => label,
    BearingType => label,
    MonitoringType => label,
    MonitoringMake => label,
    ExtensionCableLength => code,
    PadMoc => label,
    StudMoc => label,
    Vm7Module => label,
}
