//! The at-a-glance view of a selection.

use super::jb::{self, JbQuantity};
use crate::PLACEHOLDER;
use crate::selection::Selection;
use serde::{Serialize, Serializer};
use std::fmt;

/// A derived value that is only known once its inputs are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derived<T> {
    Pending,
    Value(T),
}

impl<T: fmt::Display> fmt::Display for Derived<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Derived::Pending => f.write_str(PLACEHOLDER),
            Derived::Value(value) => value.fmt(f),
        }
    }
}

impl<T: Serialize> Serialize for Derived<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Derived::Pending => serializer.serialize_str(PLACEHOLDER),
            Derived::Value(value) => value.serialize(serializer),
        }
    }
}

/// Display-ready projection of a selection. No field is ever empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveSummary {
    pub customer: String,
    pub project: String,
    pub machine: String,
    pub machine_type: String,
    pub sensor_model: String,
    pub sensor_code: String,
    pub sensor_qty: u32,
    pub ext_cable: String,
    pub mount_pad: String,
    pub mount_stud: String,
    pub jb_required: String,
    pub jb_terminal: Derived<u64>,
    pub jb_gland: Derived<u64>,
    pub jb_gland_moc: String,
    pub jb_qty: Derived<JbQuantity>,
    pub monitoring_system: String,
}

fn or_placeholder(value: &str) -> String {
    if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

fn yes_no(flag: bool) -> String {
    String::from(if flag { "Yes" } else { "No" })
}

pub fn live_summary(selection: &Selection) -> LiveSummary {
    let sensor = &selection.sensor;
    let accessories = &selection.accessories;
    let sizing = jb::calculate(&selection.junction_box, sensor.quantity);

    let ext_cable = if accessories.extension_cable.required {
        format!("Yes ({}m)", accessories.extension_cable.length.metres())
    } else {
        "No".to_string()
    };

    let monitoring = &selection.monitoring;
    let monitoring_system = match (monitoring.required, monitoring.model.as_str()) {
        (false, _) => "Not Required".to_string(),
        (true, "") => "Yes, pending selection".to_string(),
        (true, model) => model.to_string(),
    };

    LiveSummary {
        customer: or_placeholder(&selection.project.customer),
        project: or_placeholder(&selection.project.project),
        machine: or_placeholder(&selection.machine.machine),
        machine_type: selection
            .machine
            .machine_type
            .map_or_else(|| PLACEHOLDER.to_string(), |t| t.label().to_string()),
        sensor_model: or_placeholder(&sensor.model_id),
        sensor_code: selection.sensor_code(),
        sensor_qty: sensor.quantity,
        ext_cable,
        mount_pad: yes_no(accessories.mounting_pad.required),
        mount_stud: yes_no(accessories.mounting_stud.required),
        jb_required: yes_no(sizing.is_some()),
        jb_terminal: sizing.map_or(Derived::Pending, |s| Derived::Value(s.terminals)),
        jb_gland: sizing.map_or(Derived::Pending, |s| Derived::Value(s.glands)),
        jb_gland_moc: or_placeholder(&selection.junction_box.gland_moc),
        jb_qty: sizing.map_or(Derived::Pending, |s| Derived::Value(s.quantity)),
        monitoring_system,
    }
}

impl LiveSummary {
    /// `(section, field, value)` rows in panel order.
    pub fn rows(&self) -> Vec<(&'static str, &'static str, String)> {
        vec![
            ("Project", "Customer", self.customer.clone()),
            ("Project", "Project", self.project.clone()),
            ("Machine", "Name", self.machine.clone()),
            ("Machine", "Type", self.machine_type.clone()),
            ("Sensor", "Model", self.sensor_model.clone()),
            ("Sensor", "Full Code", self.sensor_code.clone()),
            ("Sensor", "Quantity", self.sensor_qty.to_string()),
            ("Accessories", "Ext. Cable", self.ext_cable.clone()),
            ("Accessories", "Mounting Pad", self.mount_pad.clone()),
            ("Accessories", "Mounting Stud", self.mount_stud.clone()),
            ("Junction Box", "Required", self.jb_required.clone()),
            ("Junction Box", "Terminal", self.jb_terminal.to_string()),
            ("Junction Box", "Gland", self.jb_gland.to_string()),
            ("Junction Box", "Gland MOC", self.jb_gland_moc.clone()),
            ("Junction Box", "JB Quantity", self.jb_qty.to_string()),
            ("Monitoring", "System", self.monitoring_system.clone()),
        ]
    }
}
