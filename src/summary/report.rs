//! The flattened plain-text order report.
//!
//! Section order, labels and spacing are an output contract: downstream
//! consumers paste this text into offers, so every line is reproduced
//! exactly, including the leading spaces.

use super::jb::{self, JbQuantity};
use crate::PLACEHOLDER;
use crate::resolver::VM7_MODEL;
use crate::selection::Selection;
use std::fmt::Write;

const NOT_AVAILABLE: &str = "N/A";

fn or_na(value: &str) -> &str {
    if value.is_empty() { NOT_AVAILABLE } else { value }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Render the full report. Lines end in `\n`; nothing is trimmed.
pub fn text_summary(selection: &Selection) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_report(&mut out, selection);
    out
}

fn write_report(out: &mut String, selection: &Selection) -> std::fmt::Result {
    let project = &selection.project;
    write!(
        out,
        "CUSTOMER: {}\nPROJECT: {}\n\n",
        or_na(&project.customer),
        or_na(&project.project)
    )?;

    write_sensor(out, selection)?;
    write_accessories(out, selection)?;
    write_junction_box(out, selection)?;
    write_monitoring(out, selection)
}

fn write_sensor(out: &mut String, selection: &Selection) -> std::fmt::Result {
    let sensor = &selection.sensor;
    write!(
        out,
        "1. SENSOR:\n Model: {}\n Quantity: {}",
        or_na(&sensor.model_id),
        sensor.quantity
    )?;
    let code = selection.sensor_code();
    if code != PLACEHOLDER {
        write!(out, "\n Full Code: {code}")?;
    }
    out.push_str("\n\n");
    Ok(())
}

fn write_accessories(out: &mut String, selection: &Selection) -> std::fmt::Result {
    let accessories = &selection.accessories;
    out.push_str("2. ACCESSORIES\n\n");

    let cable = &accessories.extension_cable;
    write!(out, " Extension Cable\n  If required: {}\n", yes_no(cable.required))?;
    if cable.required {
        writeln!(out, "  Length: {}m", cable.length.metres())?;
        writeln!(out, "  Code: FM-EXTC-SS-{}", cable.length.code())?;
    }
    out.push('\n');

    let pad = &accessories.mounting_pad;
    write!(out, " Mounting Pad\n  If required: {}\n", yes_no(pad.required))?;
    if pad.required {
        writeln!(out, "  MOC: {}", pad.moc)?;
        out.push_str("  Code: FM-MP-001\n");
    }
    out.push('\n');

    let stud = &accessories.mounting_stud;
    write!(out, " Mounting Stud\n  If required: {}\n", yes_no(stud.required))?;
    if stud.required {
        writeln!(out, "  Thread: {}", or_na(&stud.thread))?;
        match stud.depth {
            Some(depth) => writeln!(out, "  Depth: {depth} mm")?,
            None => writeln!(out, "  Depth: {NOT_AVAILABLE} mm")?,
        }
        writeln!(out, "  MOC: {}", stud.moc)?;
        out.push_str("  Code: FM-MS-001\n");
    }
    out.push('\n');
    Ok(())
}

fn write_junction_box(out: &mut String, selection: &Selection) -> std::fmt::Result {
    let jb = &selection.junction_box;
    out.push_str(" Junction Box\n");
    match jb::calculate(jb, selection.sensor.quantity) {
        Some(sizing) => {
            writeln!(out, "  MOC: {}", jb.moc)?;
            writeln!(
                out,
                "  Terminal: {} (calc: {} * 3 * 1.2)",
                sizing.terminals, jb.inputs
            )?;
            writeln!(
                out,
                "  Glands: {} (calc: {} + {})",
                sizing.glands, jb.inputs, jb.outputs
            )?;
            writeln!(out, "  Gland MOC: {}", or_na(&jb.gland_moc))?;
            match sizing.quantity {
                JbQuantity::Count(count) => writeln!(out, "  JB Quantity: {count}")?,
                JbQuantity::NotApplicable => writeln!(out, "  JB Quantity: N/A (JB In is 0)")?,
            }
        }
        None => out.push_str("  MOC: Not Required\n"),
    }
    out.push('\n');
    Ok(())
}

fn write_monitoring(out: &mut String, selection: &Selection) -> std::fmt::Result {
    let monitoring = &selection.monitoring;
    out.push_str("3. MONITORING SYSTEM:\n");
    if !monitoring.required || monitoring.model.is_empty() {
        out.push_str("  System: Not Required\n");
        return Ok(());
    }

    writeln!(out, "  System: {}", monitoring.model)?;
    if monitoring.model == VM7_MODEL && !monitoring.vm7.is_empty() {
        out.push_str(" \n VM-7B Configuration Breakdown:\n");
        for (module, quantity) in monitoring.vm7.installed() {
            writeln!(out, "  - {}: {quantity}", module.label())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PadMoc, Vm7Module};

    #[test]
    fn test_empty_selection_report() {
        let expected = concat!(
            "CUSTOMER: N/A\nPROJECT: N/A\n\n",
            "1. SENSOR:\n Model: N/A\n Quantity: 1\n\n",
            "2. ACCESSORIES\n\n",
            " Extension Cable\n  If required: No\n\n",
            " Mounting Pad\n  If required: No\n\n",
            " Mounting Stud\n  If required: No\n\n",
            " Junction Box\n  MOC: Not Required\n\n",
            "3. MONITORING SYSTEM:\n  System: Not Required\n",
        );
        assert_eq!(text_summary(&Selection::default()), expected);
    }

    #[test]
    fn test_full_report() {
        let mut selection = Selection::default();
        selection.project.customer = "ACME".to_string();
        selection.project.project = "Boiler Feed".to_string();
        selection.sensor.model_id = "Shinkawa: CBT".to_string();
        selection.sensor.quantity = 5;
        selection.sensor.attributes.range = "20".to_string();
        selection.accessories.extension_cable.required = true;
        selection.accessories.mounting_pad.required = true;
        selection.accessories.mounting_pad.moc = PadMoc::Ss316L;
        selection.accessories.mounting_stud.required = true;
        selection.accessories.mounting_stud.thread = "M8".to_string();
        selection.junction_box.moc = "FRP".to_string();
        selection.junction_box.inputs = 2;
        selection.junction_box.outputs = 1;
        selection.monitoring.required = true;
        selection.monitoring.model = "VM 7".to_string();
        selection.monitoring.vm7.set(Vm7Module::Vm701, 2);
        selection.monitoring.vm7.set(Vm7Module::Vz71, 1);

        let expected = concat!(
            "CUSTOMER: ACME\nPROJECT: Boiler Feed\n\n",
            "1. SENSOR:\n Model: Shinkawa: CBT\n Quantity: 5\n Full Code: CBT-020-P-50\n\n",
            "2. ACCESSORIES\n\n",
            " Extension Cable\n  If required: Yes\n  Length: 10m\n  Code: FM-EXTC-SS-010\n\n",
            " Mounting Pad\n  If required: Yes\n  MOC: SS316L (Non Standard)\n  Code: FM-MP-001\n\n",
            " Mounting Stud\n  If required: Yes\n  Thread: M8\n  Depth: N/A mm\n",
            "  MOC: SS304 (Standard)\n  Code: FM-MS-001\n\n",
            " Junction Box\n  MOC: FRP\n  Terminal: 8 (calc: 2 * 3 * 1.2)\n",
            "  Glands: 3 (calc: 2 + 1)\n  Gland MOC: N/A\n  JB Quantity: 3\n\n",
            "3. MONITORING SYSTEM:\n  System: VM 7\n \n VM-7B Configuration Breakdown:\n",
            "  - VM-701B (Vib/Disp Monitor): 2\n  - VZ-71 (30mm Blank): 1\n",
        );
        assert_eq!(text_summary(&selection), expected);
    }

    #[test]
    fn test_vm7_header_only_with_installed_modules() {
        let mut selection = Selection::default();
        selection.monitoring.required = true;
        selection.monitoring.model = "VM 7".to_string();
        let report = text_summary(&selection);
        assert!(report.ends_with("3. MONITORING SYSTEM:\n  System: VM 7\n"));
    }

    #[test]
    fn test_required_monitoring_without_model() {
        let mut selection = Selection::default();
        selection.monitoring.required = true;
        assert!(text_summary(&selection).ends_with("  System: Not Required\n"));
    }

    #[test]
    fn test_zero_inputs_report() {
        let mut selection = Selection::default();
        selection.junction_box.moc = "SS316".to_string();
        selection.junction_box.gland_moc = "Brass".to_string();
        let report = text_summary(&selection);
        assert!(report.contains("  Terminal: 0 (calc: 0 * 3 * 1.2)\n"));
        assert!(report.contains("  Gland MOC: Brass\n"));
        assert!(report.contains("  JB Quantity: N/A (JB In is 0)\n"));
    }

    #[test]
    fn test_unknown_model_code_is_echoed() {
        let mut selection = Selection::default();
        selection.sensor.model_id = "Custom probe".to_string();
        assert!(text_summary(&selection).contains(" Full Code: Custom probe\n"));
    }
}
