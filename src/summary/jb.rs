//! Junction-box sizing.
//!
//! The live view and the text report both call [`calculate`]; neither
//! re-derives the formulas.

use crate::selection::JunctionBox;
use serde::{Serialize, Serializer};
use std::fmt;

/// Terminals per input, as a tenth: 3 terminals with a 20% margin.
const TENTHS_OF_TERMINALS_PER_INPUT: u64 = 36;

/// Number of junction boxes needed for the sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JbQuantity {
    Count(u64),
    /// Sensors are fitted but the box has no inputs.
    NotApplicable,
}

impl fmt::Display for JbQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JbQuantity::Count(count) => write!(f, "{count}"),
            JbQuantity::NotApplicable => f.write_str("N/A"),
        }
    }
}

impl Serialize for JbQuantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JbQuantity::Count(count) => serializer.serialize_u64(*count),
            JbQuantity::NotApplicable => serializer.serialize_str("N/A"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JbSizing {
    pub terminals: u64,
    pub glands: u64,
    pub quantity: JbQuantity,
}

/// `ceil(inputs * 3 * 1.2)`, computed exactly.
pub fn terminals(inputs: u32) -> u64 {
    (u64::from(inputs) * TENTHS_OF_TERMINALS_PER_INPUT).div_ceil(10)
}

pub fn glands(inputs: u32, outputs: u32) -> u64 {
    u64::from(inputs) + u64::from(outputs)
}

pub fn quantity(inputs: u32, sensor_quantity: u32) -> JbQuantity {
    if inputs > 0 {
        JbQuantity::Count(u64::from(sensor_quantity.div_ceil(inputs)))
    } else if sensor_quantity > 0 {
        JbQuantity::NotApplicable
    } else {
        JbQuantity::Count(0)
    }
}

/// Sizing for a required junction box, `None` when no box is required.
pub fn calculate(jb: &JunctionBox, sensor_quantity: u32) -> Option<JbSizing> {
    if !jb.is_required() {
        return None;
    }
    Some(JbSizing {
        terminals: terminals(jb.inputs),
        glands: glands(jb.inputs, jb.outputs),
        quantity: quantity(jb.inputs, sensor_quantity),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jb(moc: &str, inputs: u32, outputs: u32) -> JunctionBox {
        JunctionBox {
            moc: moc.to_string(),
            inputs,
            outputs,
            gland_moc: String::new(),
        }
    }

    #[test]
    fn test_reference_scenario() {
        let sizing = calculate(&jb("FRP", 2, 1), 5).unwrap();
        assert_eq!(sizing.terminals, 8);
        assert_eq!(sizing.glands, 3);
        assert_eq!(sizing.quantity, JbQuantity::Count(3));
    }

    #[test]
    fn test_terminals_round_up() {
        // 3.6, 7.2, 10.8, 14.4, 18
        assert_eq!(
            (1..=5).map(terminals).collect::<Vec<_>>(),
            vec![4, 8, 11, 15, 18]
        );
        assert_eq!(terminals(0), 0);
        assert_eq!(terminals(10), 36);
        assert_eq!(terminals(u32::MAX), 15_461_882_262);
    }

    #[test]
    fn test_zero_inputs() {
        assert_eq!(quantity(0, 5), JbQuantity::NotApplicable);
        assert_eq!(quantity(0, 0), JbQuantity::Count(0));
        assert_eq!(quantity(4, 4), JbQuantity::Count(1));
        assert_eq!(quantity(4, 5), JbQuantity::Count(2));
    }

    #[test]
    fn test_not_required() {
        assert_eq!(calculate(&jb("", 2, 1), 5), None);
        assert_eq!(calculate(&jb("  ", 2, 1), 5), None);
    }

    #[test]
    fn test_quantity_serializes_as_number_or_text() {
        assert_eq!(serde_json::to_string(&JbQuantity::Count(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&JbQuantity::NotApplicable).unwrap(),
            "\"N/A\""
        );
    }
}
