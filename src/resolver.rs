//! Option resolver: narrows the choices offered at each sensor and
//! monitoring step.
//!
//! Pure table lookups. Nothing is cached; callers re-resolve whenever an
//! upstream field changes. An unmatched key yields an empty list.

use crate::catalog::{Area, ContactType, MeasurementType, MonitoringMake, MonitoringType};

const CONTACT_MEASUREMENTS: &[MeasurementType] = &[
    MeasurementType::Acceleration,
    MeasurementType::Velocity,
    MeasurementType::LoopPowered,
];

const NON_CONTACT_MEASUREMENTS: &[MeasurementType] = &[
    MeasurementType::EddyCurrent,
    MeasurementType::LoopPoweredEddyCurrent,
];

/// One populated row of the sensor catalog.
struct ModelRow {
    area: Area,
    contact: ContactType,
    measurement: MeasurementType,
    models: &'static [&'static str],
}

const SENSOR_MODELS: &[ModelRow] = &[
    ModelRow {
        area: Area::Safe,
        contact: ContactType::NonContact,
        measurement: MeasurementType::EddyCurrent,
        models: &[
            "FL-202F08 [Linear Range: 2 mm, Tip Dia.: 8mm]",
            "FL-143F27 [Linear Range: 13.5 mm, Tip Dia.: 27mm]",
            "FL-202F05 [Linear Range: 2 mm, Tip Dia.: 5mm]",
            "FL-202F08R [Linear Range: 2 mm, Tip Dia.: 8mm, Reverse Mount]",
            "FL-263F55 [Linear Range: 26 mm, Tip Dia.: 55mm]",
            "FL-143F28 [Linear Range: 13.5 mm, Tip Dia.: 27mm]",
            "FL-602F18 [Linear Range: 6 mm, Tip Dia.: 18mm]",
            "FL-263F50 [Linear Range: 26 mm, Tip Dia.: 50mm]",
            "FL-302F10 [Linear Range: 3 mm, Tip Dia.: 10mm]",
            "FL-302F10R [Linear Range: 3 mm, Tip Dia.: 10mm, R]",
            "FL-452F11 [Linear Range: 4.5 mm, Tip Dia.: 11mm]",
        ],
    },
    ModelRow {
        area: Area::Safe,
        contact: ContactType::NonContact,
        measurement: MeasurementType::LoopPoweredEddyCurrent,
        models: &["WL-142K05"],
    },
    ModelRow {
        area: Area::Safe,
        contact: ContactType::Contact,
        measurement: MeasurementType::Velocity,
        models: &["Forbes Marshall: FM-VEL-004B", "Shinkawa: CV-86"],
    },
    ModelRow {
        area: Area::Safe,
        contact: ContactType::Contact,
        measurement: MeasurementType::Acceleration,
        models: &["Forbes Marshall: FM-ACCL-100", "Shinkawa: CB-101"],
    },
    ModelRow {
        area: Area::Safe,
        contact: ContactType::Contact,
        measurement: MeasurementType::LoopPowered,
        models: &["Shinkawa: CBT", "Forbes Marshall: FM-LPS"],
    },
    ModelRow {
        area: Area::Hazardous,
        contact: ContactType::Contact,
        measurement: MeasurementType::Velocity,
        models: &["Shinkawa: CV-86/EX"],
    },
    ModelRow {
        area: Area::Hazardous,
        contact: ContactType::Contact,
        measurement: MeasurementType::Acceleration,
        models: &["Shinkawa: CA-302", "CA-72"],
    },
    ModelRow {
        area: Area::Hazardous,
        contact: ContactType::Contact,
        measurement: MeasurementType::LoopPowered,
        models: &["Monitran", "Wilcoxon"],
    },
    ModelRow {
        area: Area::Hazardous,
        contact: ContactType::NonContact,
        measurement: MeasurementType::EddyCurrent,
        models: &[
            "FL-202F08/E50 [Linear Range: 2 mm, Tip Dia.: 8mm]",
            "FL-143F27/E50 [Linear Range: 13.5 mm, Tip Dia.: 27mm]",
            "FL-202F05/E50 [Linear Range: 2 mm, Tip Dia.: 5mm]",
            "FL-202F08R/E50 [Linear Range: 2 mm, Tip Dia.: 8mm, R]",
            "FL-263F55/E50 [Linear Range: 26 mm, Tip Dia.: 55mm]",
            "FL-143F28/E50 [Linear Range: 13.5 mm, Tip Dia.: 27mm]",
            "FL-602F18/E50 [Linear Range: 6 mm, Tip Dia.: 18mm]",
            "FL-263F50/E50 [Linear Range: 26 mm, Tip Dia.: 50mm]",
            "FL-302F10/E50 [Linear Range: 3 mm, Tip Dia.: 10mm]",
            "FL-302F10R/E50 [Linear Range: 3 mm, Tip Dia.: 10mm, Reverse Mount]",
            "FL-452F11/E50 [Linear Range: 4.5 mm, Tip Dia.: 11mm]",
        ],
    },
    ModelRow {
        area: Area::Hazardous,
        contact: ContactType::NonContact,
        measurement: MeasurementType::LoopPoweredEddyCurrent,
        models: &["WL-142K05/NB1"],
    },
];

struct MonitoringRow {
    system: MonitoringType,
    make: MonitoringMake,
    models: &'static [&'static str],
}

const MONITORING_MODELS: &[MonitoringRow] = &[
    MonitoringRow {
        system: MonitoringType::Standalone,
        make: MonitoringMake::Shinkawa,
        models: &["VM 21", "VM 25"],
    },
    MonitoringRow {
        system: MonitoringType::Standalone,
        make: MonitoringMake::ForbesMarshall,
        models: &["FM Vibtrans II"],
    },
    MonitoringRow {
        system: MonitoringType::Api,
        make: MonitoringMake::Shinkawa,
        models: &["VM 5", "VM 7"],
    },
    MonitoringRow {
        system: MonitoringType::Api,
        make: MonitoringMake::ForbesMarshall,
        models: &["Vibtrans R"],
    },
];

/// Monitoring model that carries a per-module breakdown.
pub const VM7_MODEL: &str = "VM 7";

/// Measurement types offered for a contact type.
///
/// `area` is accepted for symmetry with [`sensor_models`] but does not
/// narrow this list.
pub fn measurement_options(
    _area: Option<Area>,
    contact: Option<ContactType>,
) -> &'static [MeasurementType] {
    match contact {
        Some(ContactType::Contact) => CONTACT_MEASUREMENTS,
        Some(ContactType::NonContact) => NON_CONTACT_MEASUREMENTS,
        None => &[],
    }
}

/// Sensor model identifiers valid for a fully specified triple, in catalog order.
pub fn sensor_models(
    area: Option<Area>,
    contact: Option<ContactType>,
    measurement: Option<MeasurementType>,
) -> &'static [&'static str] {
    let (Some(area), Some(contact), Some(measurement)) = (area, contact, measurement) else {
        return &[];
    };

    SENSOR_MODELS
        .iter()
        .find(|row| row.area == area && row.contact == contact && row.measurement == measurement)
        .map(|row| row.models)
        .unwrap_or(&[])
}

/// Monitoring models offered for a system type and make.
pub fn monitoring_models(
    system: Option<MonitoringType>,
    make: Option<MonitoringMake>,
) -> &'static [&'static str] {
    let (Some(system), Some(make)) = (system, make) else {
        return &[];
    };

    MONITORING_MODELS
        .iter()
        .find(|row| row.system == system && row.make == make)
        .map(|row| row.models)
        .unwrap_or(&[])
}

/// String-keyed form of [`measurement_options`].
///
/// Labels are matched exactly; anything unrecognised is treated as unset.
pub fn measurement_options_for(area: &str, contact: &str) -> Vec<&'static str> {
    measurement_options(Area::from_label(area), ContactType::from_label(contact))
        .iter()
        .map(MeasurementType::label)
        .collect()
}

/// String-keyed form of [`sensor_models`].
pub fn sensor_models_for(area: &str, contact: &str, measurement: &str) -> Vec<&'static str> {
    sensor_models(
        Area::from_label(area),
        ContactType::from_label(contact),
        MeasurementType::from_label(measurement),
    )
    .to_vec()
}

/// String-keyed form of [`monitoring_models`].
pub fn monitoring_models_for(system: &str, make: &str) -> Vec<&'static str> {
    monitoring_models(
        MonitoringType::from_label(system),
        MonitoringMake::from_label(make),
    )
    .to_vec()
}

/// Every model identifier in the catalog, in table order.
pub fn all_sensor_models() -> impl Iterator<Item = &'static str> {
    SENSOR_MODELS.iter().flat_map(|row| row.models.iter().copied())
}
