//! Selection transitions.
//!
//! [`apply_change`] is a pure reducer: it takes a selection by value, applies
//! one field change and returns the result. Resets of dependent fields are
//! not coded per handler; they follow the [`DEPENDENTS`] graph, so clearing
//! `area` walks `contactType -> measurementType -> modelId -> attributes`.
//!
//! Changes the resolver would never offer (a model outside the current
//! triple, a measurement type for the wrong contact type) are ignored and
//! logged, leaving the selection untouched.

use crate::catalog::{
    Area, BearingType, ContactType, ExtensionCableLength, MachineType, MeasurementType,
    MonitoringMake, MonitoringType, PadMoc, StudMoc, Vm7Module,
};
use crate::codegen::{Attribute, SensorAttributes};
use crate::error::{ConfiguratorError, ConfiguratorResult};
use crate::resolver;
use crate::selection::{ProjectField, Selection, Vm7Config};
use std::fmt;
use tracing::{debug, warn};

/// An addressable field of a [`Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Project(ProjectField),
    Machine,
    MachineType,
    BearingType,
    MachineSpeed,
    Area,
    ContactType,
    MeasurementType,
    ModelId,
    Quantity,
    /// The whole attribute bag. Only reachable through a reset.
    Attributes,
    Attribute(Attribute),
    ExtCable,
    ExtLength,
    MountPad,
    PadMoc,
    MountStud,
    ThreadStd,
    ThreadDepth,
    StudMoc,
    JbMoc,
    JbIn,
    JbOut,
    GlandMoc,
    MonitoringRequired,
    MonitoringType,
    MonitoringMake,
    MonitoringModel,
    /// Every VM-7 counter. Only reachable through a reset.
    Vm7Config,
    Vm7(Vm7Module),
}

/// Direct dependents of each field. Resetting a field resets its
/// dependents, transitively.
pub const DEPENDENTS: &[(Field, &[Field])] = &[
    (Field::Area, &[Field::ContactType]),
    (Field::ContactType, &[Field::MeasurementType]),
    (Field::MeasurementType, &[Field::ModelId]),
    (Field::ModelId, &[Field::Attributes]),
    (Field::MonitoringRequired, &[Field::MonitoringType]),
    (Field::MonitoringType, &[Field::MonitoringMake]),
    (Field::MonitoringMake, &[Field::MonitoringModel]),
    (Field::MonitoringModel, &[Field::Vm7Config]),
];

impl Field {
    fn dependents(self) -> &'static [Field] {
        DEPENDENTS
            .iter()
            .find(|(field, _)| *field == self)
            .map(|(_, deps)| *deps)
            .unwrap_or(&[])
    }

    /// Resolve a field name as accepted by `--set`.
    pub fn from_name(name: &str) -> Option<Self> {
        if let Some(field) = ProjectField::from_name(name) {
            return Some(Field::Project(field));
        }
        if let Some(module) = name.strip_prefix("vm7.") {
            return Vm7Module::from_id(module).map(Field::Vm7);
        }
        if let Some(attribute) = Attribute::from_name(name) {
            return Some(Field::Attribute(attribute));
        }

        let field = match name {
            "machine" => Field::Machine,
            "machineType" => Field::MachineType,
            "bearingType" => Field::BearingType,
            "machineSpeed" => Field::MachineSpeed,
            "area" => Field::Area,
            "contactType" => Field::ContactType,
            "measurementType" => Field::MeasurementType,
            "modelId" | "model" => Field::ModelId,
            "quantity" => Field::Quantity,
            "extCable" => Field::ExtCable,
            "extLength" => Field::ExtLength,
            "mountPad" => Field::MountPad,
            "padMoc" => Field::PadMoc,
            "mountStud" => Field::MountStud,
            "threadStd" => Field::ThreadStd,
            "threadDepth" => Field::ThreadDepth,
            "studMoc" => Field::StudMoc,
            "jbMoc" => Field::JbMoc,
            "jbIn" => Field::JbIn,
            "jbOut" => Field::JbOut,
            "glandMoc" => Field::GlandMoc,
            "monitoringRequired" => Field::MonitoringRequired,
            "monitoringType" => Field::MonitoringType,
            "monitoringMake" => Field::MonitoringMake,
            "monitoringModel" => Field::MonitoringModel,
            _ => return None,
        };
        Some(field)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Project(field) => field.name(),
            Field::Attribute(attribute) => attribute.name(),
            Field::Vm7(module) => return write!(f, "vm7.{}", module.id()),
            Field::Machine => "machine",
            Field::MachineType => "machineType",
            Field::BearingType => "bearingType",
            Field::MachineSpeed => "machineSpeed",
            Field::Area => "area",
            Field::ContactType => "contactType",
            Field::MeasurementType => "measurementType",
            Field::ModelId => "modelId",
            Field::Quantity => "quantity",
            Field::Attributes => "attributes",
            Field::ExtCable => "extCable",
            Field::ExtLength => "extLength",
            Field::MountPad => "mountPad",
            Field::PadMoc => "padMoc",
            Field::MountStud => "mountStud",
            Field::ThreadStd => "threadStd",
            Field::ThreadDepth => "threadDepth",
            Field::StudMoc => "studMoc",
            Field::JbMoc => "jbMoc",
            Field::JbIn => "jbIn",
            Field::JbOut => "jbOut",
            Field::GlandMoc => "glandMoc",
            Field::MonitoringRequired => "monitoringRequired",
            Field::MonitoringType => "monitoringType",
            Field::MonitoringMake => "monitoringMake",
            Field::MonitoringModel => "monitoringModel",
            Field::Vm7Config => "vm7",
        };
        f.write_str(name)
    }
}

/// A single edit to a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Project(ProjectField, String),
    Machine(String),
    MachineType(Option<MachineType>),
    BearingType(Option<BearingType>),
    MachineSpeed(String),
    Area(Option<Area>),
    ContactType(Option<ContactType>),
    MeasurementType(Option<MeasurementType>),
    /// Empty string clears the model.
    Model(String),
    /// Values below 1 are coerced to 1.
    Quantity(i64),
    Attribute(Attribute, String),
    ExtensionCable(bool),
    ExtensionCableLength(ExtensionCableLength),
    MountingPad(bool),
    PadMoc(PadMoc),
    MountingStud(bool),
    StudThread(String),
    StudDepth(Option<u32>),
    StudMoc(StudMoc),
    JunctionBoxMoc(String),
    JunctionBoxInputs(u32),
    JunctionBoxOutputs(u32),
    GlandMoc(String),
    MonitoringRequired(bool),
    MonitoringType(Option<MonitoringType>),
    MonitoringMake(Option<MonitoringMake>),
    /// Empty string clears the model.
    MonitoringModel(String),
    Vm7(Vm7Module, u32),
}

impl SelectionChange {
    /// The field this change writes.
    pub fn field(&self) -> Field {
        match self {
            SelectionChange::Project(field, _) => Field::Project(*field),
            SelectionChange::Machine(_) => Field::Machine,
            SelectionChange::MachineType(_) => Field::MachineType,
            SelectionChange::BearingType(_) => Field::BearingType,
            SelectionChange::MachineSpeed(_) => Field::MachineSpeed,
            SelectionChange::Area(_) => Field::Area,
            SelectionChange::ContactType(_) => Field::ContactType,
            SelectionChange::MeasurementType(_) => Field::MeasurementType,
            SelectionChange::Model(_) => Field::ModelId,
            SelectionChange::Quantity(_) => Field::Quantity,
            SelectionChange::Attribute(attribute, _) => Field::Attribute(*attribute),
            SelectionChange::ExtensionCable(_) => Field::ExtCable,
            SelectionChange::ExtensionCableLength(_) => Field::ExtLength,
            SelectionChange::MountingPad(_) => Field::MountPad,
            SelectionChange::PadMoc(_) => Field::PadMoc,
            SelectionChange::MountingStud(_) => Field::MountStud,
            SelectionChange::StudThread(_) => Field::ThreadStd,
            SelectionChange::StudDepth(_) => Field::ThreadDepth,
            SelectionChange::StudMoc(_) => Field::StudMoc,
            SelectionChange::JunctionBoxMoc(_) => Field::JbMoc,
            SelectionChange::JunctionBoxInputs(_) => Field::JbIn,
            SelectionChange::JunctionBoxOutputs(_) => Field::JbOut,
            SelectionChange::GlandMoc(_) => Field::GlandMoc,
            SelectionChange::MonitoringRequired(_) => Field::MonitoringRequired,
            SelectionChange::MonitoringType(_) => Field::MonitoringType,
            SelectionChange::MonitoringMake(_) => Field::MonitoringMake,
            SelectionChange::MonitoringModel(_) => Field::MonitoringModel,
            SelectionChange::Vm7(module, _) => Field::Vm7(*module),
        }
    }

    /// Parse a `field=value` assignment.
    pub fn parse(assignment: &str) -> ConfiguratorResult<Self> {
        let (name, value) =
            assignment
                .split_once('=')
                .ok_or_else(|| ConfiguratorError::MalformedAssignment {
                    input: assignment.to_string(),
                })?;
        let name = name.trim();
        let field = Field::from_name(name).ok_or_else(|| ConfiguratorError::UnknownField {
            field: name.to_string(),
        })?;
        Self::from_field(field, value.trim())
    }

    /// Build a change for `field` from its textual value.
    pub fn from_field(field: Field, value: &str) -> ConfiguratorResult<Self> {
        let invalid = |expected: String| ConfiguratorError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            expected,
        };

        let change = match field {
            Field::Project(field) => SelectionChange::Project(field, value.to_string()),
            Field::Machine => SelectionChange::Machine(value.to_string()),
            Field::MachineType => SelectionChange::MachineType(optional_label(
                value,
                MachineType::from_label,
                || invalid(one_of(MachineType::ALL.iter().map(MachineType::label))),
            )?),
            Field::BearingType => SelectionChange::BearingType(optional_label(
                value,
                BearingType::from_label,
                || invalid(one_of(BearingType::ALL.iter().map(BearingType::label))),
            )?),
            Field::MachineSpeed => SelectionChange::MachineSpeed(value.to_string()),
            Field::Area => SelectionChange::Area(optional_label(value, Area::from_label, || {
                invalid(one_of(Area::ALL.iter().map(Area::label)))
            })?),
            Field::ContactType => SelectionChange::ContactType(optional_label(
                value,
                ContactType::from_label,
                || invalid(one_of(ContactType::ALL.iter().map(ContactType::label))),
            )?),
            Field::MeasurementType => SelectionChange::MeasurementType(optional_label(
                value,
                MeasurementType::from_label,
                || invalid(one_of(MeasurementType::ALL.iter().map(MeasurementType::label))),
            )?),
            Field::ModelId => SelectionChange::Model(value.to_string()),
            Field::Quantity => SelectionChange::Quantity(
                value
                    .parse()
                    .map_err(|_| invalid("an integer".to_string()))?,
            ),
            Field::Attribute(attribute) => SelectionChange::Attribute(attribute, value.to_string()),
            Field::ExtCable => SelectionChange::ExtensionCable(
                parse_flag(value).ok_or_else(|| invalid(FLAG_VALUES.to_string()))?,
            ),
            Field::ExtLength => SelectionChange::ExtensionCableLength(
                ExtensionCableLength::from_code(value).ok_or_else(|| {
                    invalid(one_of(
                        ExtensionCableLength::ALL.iter().map(ExtensionCableLength::code),
                    ))
                })?,
            ),
            Field::MountPad => SelectionChange::MountingPad(
                parse_flag(value).ok_or_else(|| invalid(FLAG_VALUES.to_string()))?,
            ),
            Field::PadMoc => SelectionChange::PadMoc(
                PadMoc::from_label(value)
                    .ok_or_else(|| invalid(one_of(PadMoc::ALL.iter().map(PadMoc::label))))?,
            ),
            Field::MountStud => SelectionChange::MountingStud(
                parse_flag(value).ok_or_else(|| invalid(FLAG_VALUES.to_string()))?,
            ),
            Field::ThreadStd => SelectionChange::StudThread(value.to_string()),
            Field::ThreadDepth => {
                let depth = if value.is_empty() {
                    None
                } else {
                    Some(
                        value
                            .parse()
                            .map_err(|_| invalid("a depth in mm, or nothing".to_string()))?,
                    )
                };
                SelectionChange::StudDepth(depth)
            }
            Field::StudMoc => SelectionChange::StudMoc(
                StudMoc::from_label(value)
                    .ok_or_else(|| invalid(one_of(StudMoc::ALL.iter().map(StudMoc::label))))?,
            ),
            Field::JbMoc => SelectionChange::JunctionBoxMoc(value.to_string()),
            Field::JbIn => SelectionChange::JunctionBoxInputs(
                value
                    .parse()
                    .map_err(|_| invalid("a non-negative integer".to_string()))?,
            ),
            Field::JbOut => SelectionChange::JunctionBoxOutputs(
                value
                    .parse()
                    .map_err(|_| invalid("a non-negative integer".to_string()))?,
            ),
            Field::GlandMoc => SelectionChange::GlandMoc(value.to_string()),
            Field::MonitoringRequired => SelectionChange::MonitoringRequired(
                parse_flag(value).ok_or_else(|| invalid(FLAG_VALUES.to_string()))?,
            ),
            Field::MonitoringType => SelectionChange::MonitoringType(optional_label(
                value,
                MonitoringType::from_label,
                || invalid(one_of(MonitoringType::ALL.iter().map(MonitoringType::label))),
            )?),
            Field::MonitoringMake => SelectionChange::MonitoringMake(optional_label(
                value,
                MonitoringMake::from_label,
                || invalid(one_of(MonitoringMake::ALL.iter().map(MonitoringMake::label))),
            )?),
            Field::MonitoringModel => SelectionChange::MonitoringModel(value.to_string()),
            Field::Vm7(module) => SelectionChange::Vm7(
                module,
                value
                    .parse()
                    .map_err(|_| invalid("a non-negative integer".to_string()))?,
            ),
            Field::Attributes | Field::Vm7Config => {
                return Err(ConfiguratorError::UnknownField {
                    field: field.to_string(),
                });
            }
        };
        Ok(change)
    }
}

const FLAG_VALUES: &str = "one of: true, false, yes, no";

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "true" | "yes" | "YES" => Some(true),
        "false" | "no" | "NO" => Some(false),
        _ => None,
    }
}

fn one_of<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    let labels: Vec<&str> = labels.collect();
    format!("one of: {}", labels.join(", "))
}

/// Empty means unset; anything else must be an exact label.
fn optional_label<T>(
    value: &str,
    parse: impl Fn(&str) -> Option<T>,
    invalid: impl FnOnce() -> ConfiguratorError,
) -> ConfiguratorResult<Option<T>> {
    if value.is_empty() {
        return Ok(None);
    }
    parse(value).map(Some).ok_or_else(invalid)
}

/// Apply one change and its reset cascade.
///
/// Setting a field to the value it already holds is a no-op and does not
/// reset dependents.
pub fn apply_change(mut selection: Selection, change: SelectionChange) -> Selection {
    let field = change.field();
    if !write(&mut selection, change) {
        return selection;
    }
    reset_dependents(&mut selection, field);
    selection
}

/// Apply changes in order.
pub fn apply_changes(
    selection: Selection,
    changes: impl IntoIterator<Item = SelectionChange>,
) -> Selection {
    changes.into_iter().fold(selection, apply_change)
}

fn reset_dependents(selection: &mut Selection, field: Field) {
    for &dependent in field.dependents() {
        debug!(changed = %field, reset = %dependent, "cascading reset");
        reset(selection, dependent);
        reset_dependents(selection, dependent);
    }
}

/// Return a cascade target to its initial value.
fn reset(selection: &mut Selection, field: Field) {
    let sensor = &mut selection.sensor;
    let monitoring = &mut selection.monitoring;
    match field {
        Field::ContactType => sensor.contact_type = None,
        Field::MeasurementType => sensor.measurement_type = None,
        Field::ModelId => sensor.model_id.clear(),
        Field::Attributes => sensor.attributes = SensorAttributes::for_model(&sensor.model_id),
        Field::MonitoringType => monitoring.system_type = None,
        Field::MonitoringMake => monitoring.make = None,
        Field::MonitoringModel => monitoring.model.clear(),
        Field::Vm7Config => monitoring.vm7 = Vm7Config::default(),
        // only fields listed in DEPENDENTS are ever reset
        _ => {}
    }
}

/// Write a change. Returns whether the selection changed.
fn write(selection: &mut Selection, change: SelectionChange) -> bool {
    let field = change.field();
    let machine = &mut selection.machine;
    let sensor = &mut selection.sensor;
    let accessories = &mut selection.accessories;
    let jb = &mut selection.junction_box;
    let monitoring = &mut selection.monitoring;

    let changed = match change {
        SelectionChange::Project(name, value) => {
            let changed = selection.project.get(name) != value;
            if changed {
                selection.project.set(name, value);
            }
            changed
        }
        SelectionChange::Machine(value) => replace(&mut machine.machine, value),
        SelectionChange::MachineType(value) => replace(&mut machine.machine_type, value),
        SelectionChange::BearingType(value) => replace(&mut machine.bearing_type, value),
        SelectionChange::MachineSpeed(value) => replace(&mut machine.machine_speed, value),
        SelectionChange::Area(value) => replace(&mut sensor.area, value),
        SelectionChange::ContactType(value) => replace(&mut sensor.contact_type, value),
        SelectionChange::MeasurementType(Some(measurement))
            if !resolver::measurement_options(sensor.area, sensor.contact_type)
                .contains(&measurement) =>
        {
            warn!(%measurement, "measurement type not offered for the current contact type, ignoring");
            false
        }
        SelectionChange::MeasurementType(value) => replace(&mut sensor.measurement_type, value),
        SelectionChange::Model(value)
            if !value.is_empty()
                && !resolver::sensor_models(
                    sensor.area,
                    sensor.contact_type,
                    sensor.measurement_type,
                )
                .contains(&value.as_str()) =>
        {
            warn!(model = %value, "model not offered for the current sensor selection, ignoring");
            false
        }
        SelectionChange::Model(value) => replace(&mut sensor.model_id, value),
        SelectionChange::Quantity(requested) => {
            let quantity = u32::try_from(requested.max(1)).unwrap_or(u32::MAX);
            if i64::from(quantity) != requested {
                debug!(requested, coerced = quantity, "sensor quantity coerced");
            }
            replace(&mut sensor.quantity, quantity)
        }
        SelectionChange::Attribute(attribute, value) => {
            let changed = sensor.attributes.get(attribute) != value;
            if changed {
                sensor.attributes.set(attribute, value);
            }
            changed
        }
        SelectionChange::ExtensionCable(value) => {
            replace(&mut accessories.extension_cable.required, value)
        }
        SelectionChange::ExtensionCableLength(value) => {
            replace(&mut accessories.extension_cable.length, value)
        }
        SelectionChange::MountingPad(value) => replace(&mut accessories.mounting_pad.required, value),
        SelectionChange::PadMoc(value) => replace(&mut accessories.mounting_pad.moc, value),
        SelectionChange::MountingStud(value) => {
            replace(&mut accessories.mounting_stud.required, value)
        }
        SelectionChange::StudThread(value) => replace(&mut accessories.mounting_stud.thread, value),
        SelectionChange::StudDepth(value) => replace(&mut accessories.mounting_stud.depth, value),
        SelectionChange::StudMoc(value) => replace(&mut accessories.mounting_stud.moc, value),
        SelectionChange::JunctionBoxMoc(value) => replace(&mut jb.moc, value),
        SelectionChange::JunctionBoxInputs(value) => replace(&mut jb.inputs, value),
        SelectionChange::JunctionBoxOutputs(value) => replace(&mut jb.outputs, value),
        SelectionChange::GlandMoc(value) => replace(&mut jb.gland_moc, value),
        SelectionChange::MonitoringRequired(value) => replace(&mut monitoring.required, value),
        SelectionChange::MonitoringType(value) => replace(&mut monitoring.system_type, value),
        SelectionChange::MonitoringMake(value) => replace(&mut monitoring.make, value),
        SelectionChange::MonitoringModel(value)
            if !value.is_empty()
                && !resolver::monitoring_models(monitoring.system_type, monitoring.make)
                    .contains(&value.as_str()) =>
        {
            warn!(model = %value, "monitoring model not offered for the current type and make, ignoring");
            false
        }
        SelectionChange::MonitoringModel(value) => replace(&mut monitoring.model, value),
        SelectionChange::Vm7(module, _) if monitoring.model != resolver::VM7_MODEL => {
            warn!(module = module.id(), "VM-7 module counts only apply to the VM 7 model, ignoring");
            false
        }
        SelectionChange::Vm7(module, quantity) => {
            let changed = monitoring.vm7.get(module) != quantity;
            if changed {
                monitoring.vm7.set(module, quantity);
            }
            changed
        }
    };

    if changed {
        debug!(%field, "field updated");
    }
    changed
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
