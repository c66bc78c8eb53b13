//! Declarative part-number rules, one per model family.
//!
//! A rule is data: which vendor, part number and certification marker it matches,
//! which attributes it consumes (with their allowed values and family
//! defaults), and how the code string is laid out. Layout segments are
//! joined with `-`; pieces within a segment are concatenated.

use super::attributes::{Attribute, SensorAttributes};
use super::model_ref::ModelRef;
use serde::Serialize;

/// One selectable value of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

const fn choice(value: &'static str, label: &'static str) -> Choice {
    Choice { value, label }
}

/// An attribute as consumed by one family.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    pub attribute: Attribute,
    pub label: &'static str,
    pub options: &'static [Choice],
    pub default: &'static str,
}

impl FieldSpec {
    /// The stored value if the family accepts it, else the family default.
    pub fn resolve<'a>(&self, attrs: &'a SensorAttributes) -> &'a str {
        let value = attrs.get(self.attribute);
        if self.accepts(value) {
            value
        } else {
            self.default
        }
    }

    pub fn accepts(&self, value: &str) -> bool {
        self.options.iter().any(|c| c.value == value)
    }
}

/// A fragment of a layout segment.
#[derive(Debug, Clone, Copy)]
pub enum Piece {
    Lit(&'static str),
    Value(Attribute),
    /// Value left-padded with zeros to the given width.
    ZeroPad(Attribute, usize),
    /// `then` if the value equals `equals`, otherwise `otherwise`.
    Either {
        attribute: Attribute,
        equals: &'static str,
        then: &'static str,
        otherwise: &'static str,
    },
    /// The model's certification marker, or nothing.
    Certification,
}

pub type Segment = &'static [Piece];

/// How a rule constrains the certification marker of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CertificationMatch {
    Any,
    Absent,
    Exactly(&'static str),
}

impl CertificationMatch {
    fn matches(&self, certification: Option<&str>) -> bool {
        match self {
            CertificationMatch::Any => true,
            CertificationMatch::Absent => certification.is_none(),
            CertificationMatch::Exactly(marker) => certification == Some(*marker),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CertificationMatch::Any => 0,
            CertificationMatch::Absent => 1,
            CertificationMatch::Exactly(_) => 2,
        }
    }
}

impl std::fmt::Display for CertificationMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CertificationMatch::Any => f.write_str("any"),
            CertificationMatch::Absent => f.write_str("none"),
            CertificationMatch::Exactly(marker) => f.write_str(marker),
        }
    }
}

/// What follows the joined segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SuffixRule {
    None,
    /// Append the model's certification marker verbatim, e.g. `/E50`.
    AppendCertification,
}

#[derive(Debug, Clone, Copy)]
pub struct FamilyRule {
    pub name: &'static str,
    /// Vendor prefix the catalog id carries, e.g. `Shinkawa` in `Shinkawa: CBT`.
    /// `None` matches only ids without one.
    pub vendor: Option<&'static str>,
    pub part: &'static str,
    pub certification: CertificationMatch,
    pub fields: &'static [FieldSpec],
    pub layout: &'static [Segment],
    pub suffix: SuffixRule,
}

/// The data-only part of a rule: what it matches and what it consumes.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FamilySchema {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<&'static str>,
    pub part: &'static str,
    pub certification: CertificationMatch,
    pub fields: &'static [FieldSpec],
}

impl FamilyRule {
    pub fn schema(&self) -> FamilySchema {
        FamilySchema {
            name: self.name,
            vendor: self.vendor,
            part: self.part,
            certification: self.certification,
            fields: self.fields,
        }
    }

    pub fn matches(&self, model: &ModelRef<'_>) -> bool {
        model.vendor == self.vendor
            && model.part == self.part
            && self.certification.matches(model.certification)
    }

    /// Higher is more specific. Rules are tried in descending order.
    pub fn specificity(&self) -> (usize, u8) {
        (self.part.len(), self.certification.rank())
    }

    pub fn field(&self, attribute: Attribute) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.attribute == attribute)
    }

    fn value<'a>(&self, attribute: Attribute, attrs: &'a SensorAttributes) -> &'a str {
        match self.field(attribute) {
            Some(spec) => spec.resolve(attrs),
            None => attrs.get(attribute),
        }
    }

    pub fn render(&self, model: &ModelRef<'_>, attrs: &SensorAttributes) -> String {
        let segments: Vec<String> = self
            .layout
            .iter()
            .map(|segment| {
                let mut out = String::new();
                for piece in segment.iter() {
                    match *piece {
                        Piece::Lit(text) => out.push_str(text),
                        Piece::Value(attribute) => out.push_str(self.value(attribute, attrs)),
                        Piece::ZeroPad(attribute, width) => {
                            let value = self.value(attribute, attrs);
                            out.push_str(&format!("{value:0>width$}"));
                        }
                        Piece::Either {
                            attribute,
                            equals,
                            then,
                            otherwise,
                        } => {
                            let hit = self.value(attribute, attrs) == equals;
                            out.push_str(if hit { then } else { otherwise });
                        }
                        Piece::Certification => {
                            out.push_str(model.certification.unwrap_or_default())
                        }
                    }
                }
                out
            })
            .collect();

        let mut code = segments.join("-");
        if self.suffix == SuffixRule::AppendCertification {
            if let Some(marker) = model.certification {
                code.push_str(marker);
            }
        }
        code
    }
}

// Attribute vocabularies

const ARMOR: &[Choice] = &[
    choice("L", "Without Armor"),
    choice("A", "With Armor (No Fluoro)"),
    choice("T", "With Armor (Fluoro)"),
];

const FL_THREAD: &[Choice] = &[
    choice("M1", "Metric (M1)"),
    choice("M2", "Metric (M2)"),
    choice("U1", "UNF (U1)"),
    choice("U2", "UNF (U2)"),
];

const WL_THREAD: &[Choice] = &[
    choice("M1", "M8X1"),
    choice("M2", "M10X1"),
    choice("U1", "1/4-28 UNF-2A"),
    choice("U2", "3/8-24 UNF-2A"),
];

const UNTHREADED_LENGTH: &[Choice] = &[
    choice("00", "0 mm"),
    choice("01", "10 mm"),
    choice("02", "20 mm"),
    choice("03", "30 mm"),
    choice("04", "40 mm"),
    choice("05", "50 mm"),
    choice("06", "60 mm"),
    choice("07", "70 mm"),
    choice("08", "80 mm"),
    choice("09", "90 mm"),
    choice("10", "100 mm"),
    choice("11", "110 mm"),
    choice("12", "120 mm"),
    choice("13", "130 mm"),
    choice("14", "140 mm"),
    choice("15", "150 mm"),
    choice("16", "160 mm"),
    choice("17", "170 mm"),
    choice("18", "180 mm"),
    choice("19", "190 mm"),
    choice("20", "200 mm"),
    choice("21", "210 mm"),
    choice("22", "220 mm"),
    choice("23", "230 mm"),
];

const CASE_LENGTH: &[Choice] = &[
    choice("02", "20 mm"),
    choice("03", "30 mm"),
    choice("04", "40 mm"),
    choice("05", "50 mm"),
    choice("06", "60 mm"),
    choice("07", "70 mm"),
    choice("08", "80 mm"),
    choice("09", "90 mm"),
    choice("10", "100 mm"),
    choice("11", "110 mm"),
    choice("12", "120 mm"),
    choice("13", "130 mm"),
    choice("14", "140 mm"),
    choice("15", "150 mm"),
    choice("16", "160 mm"),
    choice("17", "170 mm"),
    choice("18", "180 mm"),
    choice("19", "190 mm"),
    choice("20", "200 mm"),
    choice("21", "210 mm"),
    choice("22", "220 mm"),
    choice("23", "230 mm"),
    choice("24", "240 mm"),
    choice("25", "250 mm"),
];

const FL_CABLE_LENGTH: &[Choice] = &[
    choice("05", "0.5m"),
    choice("10", "1.0m"),
    choice("50", "5.0m"),
    choice("90", "9.0m"),
];

const WL_CABLE_LENGTH: &[Choice] = &[
    choice("1", "0.5m"),
    choice("2", "1.0m"),
    choice("3", "5.0m"),
    choice("4", "7.0m"),
    choice("5", "9.0m"),
];

const CABLE_TYPE: &[Choice] = &[
    choice("1", "Connector / 2 pin connector"),
    choice("2", "5m integral cable / With integral cable"),
    choice("3", "10m integral cable"),
];

const EX_CABLE_TYPE: &[Choice] = &[choice("1", "Connector Type"), choice("2", "With Integral cable")];

const EX_ARMOR: &[Choice] = &[choice("0", "Without"), choice("1", "With")];

const SAFETY: &[Choice] = &[
    choice("0", "TIIS EX ia II B T3 X"),
    choice("1", "TIIS EX ia II B T4 X"),
    choice("2", "TIIS EX ia II C T3 X"),
    choice("7", "NEPSI EX ia II B T4 X"),
    choice("8", "KTL EX ia II C T4"),
];

const CB_EXTRA_OPTIONS: &[Choice] = &[
    choice("0", "Standard (None)"),
    choice("F", "Filtered"),
    choice("T", "Temperature Output"),
    choice("Y", "5% Tolerance"),
];

const CB_SENSITIVITY: &[Choice] = &[
    choice("010", "10mV/g (±800g)"),
    choice("030", "30mV/g (±250g)"),
    choice("050", "50mV/g (±160g)"),
    choice("100", "100mV/g (±80g)"),
    choice("250", "250mV/g (±32g)"),
    choice("500", "500mV/g (±16g)"),
];

const CB_MOUNTING: &[Choice] = &[
    choice("01", "¼-28\" UNF Female"),
    choice("02", "¼-28\" UNF Male"),
    choice("05", "Quick Fit Female"),
    choice("06", "M6 x 1mm Male"),
    choice("08", "M8 x 1.25mm Male"),
    choice("10", "M10 x 1.5mm Male"),
];

const CBT_RANGE: &[Choice] = &[
    choice("10", "0-10 mm/sec"),
    choice("20", "0-20 mm/sec"),
    choice("25", "0-25 mm/sec"),
    choice("50", "0-50 mm/sec"),
    choice("100", "0-100 mm/sec"),
];

const LPS_RANGE: &[Choice] = &[
    choice("10", "0-10 mm/sec"),
    choice("15", "0-15 mm/sec"),
    choice("20", "0-20 mm/sec"),
    choice("25", "0-25 mm/sec"),
    choice("30", "0-30 mm/sec"),
    choice("40", "0-40 mm/sec"),
    choice("50", "0-50 mm/sec"),
];

const PEAK_RMS: &[Choice] = &[choice("P", "Peak"), choice("R", "RMS")];

const MONITRAN_MOUNTING: &[Choice] = &[choice("IC", "1/4\" UNF Female"), choice("ICQ", "Q/F Female")];

const MONITRAN_RANGE: &[Choice] = &[
    choice("10", "0-10"),
    choice("20", "0-20"),
    choice("25", "0-25"),
    choice("50", "0-50"),
    choice("100", "0-100"),
];

const WILCOXON_OUTPUT: &[Choice] = &[choice("R", "RMS (R)"), choice("P", "Peak (P)")];

const WILCOXON_FULL_SCALE: &[Choice] = &[
    choice("05", "0.5 ips (12.8 mm/sec)"),
    choice("10", "1.0 ips (25.4 mm/sec)"),
    choice("20", "2.0 ips (50.8 mm/sec)"),
    choice("30", "3.0 ips (76.2 mm/sec)"),
];

// Field specs

const fn field(
    attribute: Attribute,
    label: &'static str,
    options: &'static [Choice],
    default: &'static str,
) -> FieldSpec {
    FieldSpec {
        attribute,
        label,
        options,
        default,
    }
}

const F_ARMOR: FieldSpec = field(Attribute::Armor, "Armor", ARMOR, "L");
const F_FL_THREAD: FieldSpec = field(Attribute::ThreadSize, "Thread Size", FL_THREAD, "M2");
const F_WL_THREAD: FieldSpec = field(Attribute::ThreadSize, "Thread Size", WL_THREAD, "M2");
const F_UNTHREADED: FieldSpec = field(
    Attribute::UnthreadedLength,
    "Unthreaded Length",
    UNTHREADED_LENGTH,
    "00",
);
const F_CASE: FieldSpec = field(Attribute::CaseLength, "Case Length", CASE_LENGTH, "02");
const F_FL_CABLE: FieldSpec = field(Attribute::CableLength, "Cable Length", FL_CABLE_LENGTH, "05");
const F_WL_CABLE: FieldSpec = field(Attribute::CableLength, "Cable Length", WL_CABLE_LENGTH, "1");
const F_CABLE_TYPE: FieldSpec = field(Attribute::CableType, "Cable Type", CABLE_TYPE, "1");
const F_EX_CABLE_TYPE: FieldSpec = field(Attribute::CableType, "Cable Type", EX_CABLE_TYPE, "1");
const F_EX_ARMOR: FieldSpec = field(Attribute::Armor, "Armor", EX_ARMOR, "0");
const F_SAFETY: FieldSpec = field(Attribute::Safety, "Safety", SAFETY, "0");
const F_CB_EXTRA: FieldSpec = field(
    Attribute::ExtraOptions,
    "Extra Options",
    CB_EXTRA_OPTIONS,
    "0",
);
const F_CB_SENSITIVITY: FieldSpec =
    field(Attribute::Sensitivity, "Sensitivity", CB_SENSITIVITY, "010");
const F_CB_MOUNTING: FieldSpec = field(
    Attribute::MountingThreads,
    "Mounting Threads",
    CB_MOUNTING,
    "01",
);
const F_CBT_RANGE: FieldSpec = field(Attribute::Range, "Range (mm/sec)", CBT_RANGE, "10");
const F_LPS_RANGE: FieldSpec = field(Attribute::Range, "Range (mm/sec)", LPS_RANGE, "10");
const F_UNIT: FieldSpec = field(Attribute::MeasurementUnit, "Unit", PEAK_RMS, "P");
const F_MONITRAN_MOUNTING: FieldSpec = field(
    Attribute::MountingThreads,
    "Mounting",
    MONITRAN_MOUNTING,
    "ICQ",
);
const F_MONITRAN_RANGE: FieldSpec = field(
    Attribute::Range,
    "Velocity (mm/s rms)",
    MONITRAN_RANGE,
    "10",
);
const F_WILCOXON_OUTPUT: FieldSpec = field(
    Attribute::MeasurementUnit,
    "Output Type",
    WILCOXON_OUTPUT,
    "P",
);
const F_WILCOXON_SCALE: FieldSpec =
    field(Attribute::Range, "Full Scale", WILCOXON_FULL_SCALE, "10");

// Layout pieces

const ARMOR_V: Piece = Piece::Value(Attribute::Armor);
const THREAD_V: Piece = Piece::Value(Attribute::ThreadSize);
const UNTHREADED_V: Piece = Piece::Value(Attribute::UnthreadedLength);
const CASE_V: Piece = Piece::Value(Attribute::CaseLength);
const CABLE_V: Piece = Piece::Value(Attribute::CableLength);
const CABLE_TYPE_V: Piece = Piece::Value(Attribute::CableType);
const UNIT_V: Piece = Piece::Value(Attribute::MeasurementUnit);
const RANGE_V: Piece = Piece::Value(Attribute::Range);
const SAFETY_V: Piece = Piece::Value(Attribute::Safety);
/// Metric thread stays `M1`; every other choice collapses to `U1`.
const THREAD_M1_OR_U1: Piece = Piece::Either {
    attribute: Attribute::ThreadSize,
    equals: "M1",
    then: "M1",
    otherwise: "U1",
};

const FL_FULL_FIELDS: &[FieldSpec] = &[F_ARMOR, F_FL_THREAD, F_UNTHREADED, F_CASE, F_FL_CABLE];
const FL_REVERSE_FIELDS: &[FieldSpec] = &[F_FL_THREAD, F_UNTHREADED, F_CASE, F_FL_CABLE];
const FL_FIXED_FIELDS: &[FieldSpec] = &[F_ARMOR, F_FL_CABLE];
const FL_263F50_FIELDS: &[FieldSpec] = &[F_ARMOR, F_FL_THREAD, F_CASE, F_FL_CABLE];

/// Standard eddy-current probe: thread collapsed to M1/U1.
macro_rules! fl_probe {
    ($part:literal) => {
        FamilyRule {
            name: $part,
            vendor: None,
            part: $part,
            certification: CertificationMatch::Any,
            fields: FL_FULL_FIELDS,
            layout: &[
                &[Piece::Lit($part)],
                &[ARMOR_V],
                &[THREAD_M1_OR_U1],
                &[UNTHREADED_V],
                &[CASE_V],
                &[CABLE_V],
            ],
            suffix: SuffixRule::AppendCertification,
        }
    };
}

/// Reverse-mount probe: no armor, thread passed through.
macro_rules! fl_reverse_probe {
    ($part:literal) => {
        FamilyRule {
            name: $part,
            vendor: None,
            part: $part,
            certification: CertificationMatch::Any,
            fields: FL_REVERSE_FIELDS,
            layout: &[
                &[Piece::Lit($part)],
                &[THREAD_V],
                &[UNTHREADED_V],
                &[CASE_V],
                &[CABLE_V],
            ],
            suffix: SuffixRule::AppendCertification,
        }
    };
}

/// Large-tip probe: thread and lengths fixed.
macro_rules! fl_fixed_probe {
    ($part:literal) => {
        FamilyRule {
            name: $part,
            vendor: None,
            part: $part,
            certification: CertificationMatch::Any,
            fields: FL_FIXED_FIELDS,
            layout: &[
                &[Piece::Lit($part)],
                &[ARMOR_V],
                &[Piece::Lit("M1")],
                &[Piece::Lit("00")],
                &[Piece::Lit("00")],
                &[CABLE_V],
            ],
            suffix: SuffixRule::AppendCertification,
        }
    };
}

/// Velocity/acceleration sensor with the `-1<cable>1` tail.
macro_rules! fm_cable_sensor {
    ($part:literal) => {
        FamilyRule {
            name: $part,
            vendor: Some("Forbes Marshall"),
            part: $part,
            certification: CertificationMatch::Any,
            fields: &[F_CABLE_TYPE],
            layout: &[&[Piece::Lit($part)], &[Piece::Lit("1"), CABLE_TYPE_V, Piece::Lit("1")]],
            suffix: SuffixRule::None,
        }
    };
}

pub static FAMILIES: &[FamilyRule] = &[
    FamilyRule {
        name: "FL-202F08",
        vendor: None,
        part: "FL-202F08",
        certification: CertificationMatch::Any,
        fields: FL_FULL_FIELDS,
        layout: &[
            &[Piece::Lit("FL-202F08")],
            &[ARMOR_V],
            &[THREAD_V],
            &[UNTHREADED_V],
            &[CASE_V],
            &[CABLE_V],
        ],
        suffix: SuffixRule::AppendCertification,
    },
    fl_probe!("FL-143F27"),
    fl_probe!("FL-202F05"),
    fl_reverse_probe!("FL-202F08R"),
    fl_fixed_probe!("FL-263F55"),
    fl_fixed_probe!("FL-143F28"),
    fl_probe!("FL-602F18"),
    FamilyRule {
        name: "FL-263F50",
        vendor: None,
        part: "FL-263F50",
        certification: CertificationMatch::Any,
        fields: FL_263F50_FIELDS,
        layout: &[
            &[Piece::Lit("FL-263F50")],
            &[ARMOR_V],
            &[THREAD_M1_OR_U1],
            &[Piece::Lit("00")],
            &[CASE_V],
            &[CABLE_V],
        ],
        suffix: SuffixRule::AppendCertification,
    },
    fl_probe!("FL-302F10"),
    fl_reverse_probe!("FL-302F10R"),
    fl_probe!("FL-452F11"),
    FamilyRule {
        name: "WL-142K05",
        vendor: None,
        part: "WL-142K05",
        certification: CertificationMatch::Any,
        fields: &[F_ARMOR, F_WL_THREAD, F_UNTHREADED, F_CASE, F_WL_CABLE],
        layout: &[
            &[Piece::Lit("WL-142K05"), Piece::Certification],
            &[ARMOR_V],
            &[THREAD_V],
            &[UNTHREADED_V],
            &[CASE_V],
            &[CABLE_V],
        ],
        suffix: SuffixRule::None,
    },
    fm_cable_sensor!("FM-VEL-004B"),
    FamilyRule {
        name: "CV-86",
        vendor: Some("Shinkawa"),
        part: "CV-86",
        certification: CertificationMatch::Absent,
        fields: &[F_CABLE_TYPE],
        layout: &[&[Piece::Lit("CV-86"), CABLE_TYPE_V]],
        suffix: SuffixRule::None,
    },
    fm_cable_sensor!("FM-ACCL-100"),
    FamilyRule {
        name: "CB-101",
        vendor: Some("Shinkawa"),
        part: "CB-101",
        certification: CertificationMatch::Any,
        fields: &[F_CB_EXTRA, F_CB_SENSITIVITY, F_CB_MOUNTING],
        layout: &[
            &[Piece::Lit("CB-101")],
            &[Piece::Value(Attribute::ExtraOptions)],
            &[Piece::Value(Attribute::Sensitivity)],
            &[Piece::Lit("50")],
            &[Piece::Value(Attribute::MountingThreads)],
        ],
        suffix: SuffixRule::None,
    },
    FamilyRule {
        name: "CBT",
        vendor: Some("Shinkawa"),
        part: "CBT",
        certification: CertificationMatch::Any,
        fields: &[F_CBT_RANGE, F_UNIT],
        layout: &[
            &[Piece::Lit("CBT")],
            &[Piece::ZeroPad(Attribute::Range, 3)],
            &[UNIT_V],
            &[Piece::Lit("50")],
        ],
        suffix: SuffixRule::None,
    },
    FamilyRule {
        name: "FM-LPS",
        vendor: Some("Forbes Marshall"),
        part: "FM-LPS",
        certification: CertificationMatch::Any,
        fields: &[F_LPS_RANGE, F_UNIT],
        layout: &[
            &[Piece::Lit("FM-LPS")],
            &[Piece::ZeroPad(Attribute::Range, 2)],
            &[UNIT_V],
        ],
        suffix: SuffixRule::None,
    },
    FamilyRule {
        name: "CV-86/EX",
        vendor: Some("Shinkawa"),
        part: "CV-86",
        certification: CertificationMatch::Exactly("/EX"),
        fields: &[F_EX_CABLE_TYPE, F_SAFETY],
        layout: &[
            &[Piece::Lit("CV-86")],
            &[CABLE_TYPE_V, Piece::Lit("/EX")],
            &[SAFETY_V],
        ],
        suffix: SuffixRule::None,
    },
    FamilyRule {
        name: "CA-302",
        vendor: Some("Shinkawa"),
        part: "CA-302",
        certification: CertificationMatch::Any,
        fields: &[F_EX_ARMOR, F_SAFETY],
        layout: &[
            &[Piece::Lit("CA-302")],
            &[Piece::Lit("00"), ARMOR_V, Piece::Lit("/EX")],
            &[SAFETY_V],
        ],
        suffix: SuffixRule::None,
    },
    FamilyRule {
        name: "CA-72",
        vendor: None,
        part: "CA-72",
        certification: CertificationMatch::Any,
        fields: &[F_CABLE_TYPE],
        layout: &[&[Piece::Lit("CA-72")], &[CABLE_TYPE_V]],
        suffix: SuffixRule::None,
    },
    FamilyRule {
        name: "Monitran",
        vendor: None,
        part: "Monitran",
        certification: CertificationMatch::Any,
        fields: &[F_MONITRAN_MOUNTING, F_MONITRAN_RANGE],
        layout: &[
            &[
                Piece::Lit("MTN/2285"),
                Piece::Either {
                    attribute: Attribute::MountingThreads,
                    equals: "IC",
                    then: "IC",
                    otherwise: "ICQ",
                },
            ],
            &[RANGE_V],
        ],
        suffix: SuffixRule::None,
    },
    FamilyRule {
        name: "Wilcoxon",
        vendor: None,
        part: "Wilcoxon",
        certification: CertificationMatch::Any,
        fields: &[F_WILCOXON_OUTPUT, F_WILCOXON_SCALE],
        layout: &[
            &[Piece::Lit("PC420V"), UNIT_V],
            &[RANGE_V],
            &[Piece::Lit("IS")],
        ],
        suffix: SuffixRule::None,
    },
];
