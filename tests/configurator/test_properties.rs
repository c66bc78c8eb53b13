//! Properties that hold for every selection, checked through the public API.
//!
//! Run with: cargo test --test configurator_tests test_properties

use vibconf::codegen::{Attribute, family_for};
use vibconf::resolver::all_sensor_models;
use vibconf::summary::JbQuantity;
use vibconf::{
    PLACEHOLDER, Selection, SelectionChange, SensorAttributes, apply_change, apply_changes,
    generate_code, live_summary, sensor_models, text_summary,
};

fn select(changes: &[&str]) -> Selection {
    let changes = changes
        .iter()
        .map(|assignment| SelectionChange::parse(assignment).unwrap());
    apply_changes(Selection::default(), changes)
}

#[test]
fn test_generation_is_idempotent_for_every_catalog_model() {
    for model in all_sensor_models() {
        let attributes = SensorAttributes::for_model(model);
        let first = generate_code(model, &attributes);
        let second = generate_code(model, &attributes);
        assert_eq!(first, second, "{model} generated two different codes");
        assert_ne!(first, PLACEHOLDER, "{model} generated the placeholder");
    }
}

#[test]
fn test_placeholder_only_without_model() {
    let mut attributes = SensorAttributes::default();
    for attribute in Attribute::ALL {
        attributes.set(attribute, "Z");
        assert_eq!(generate_code("", &attributes), PLACEHOLDER);
    }
}

#[test]
fn test_area_change_cascades_down_to_the_code() {
    let selection = select(&[
        "area=Safe",
        "contactType=Non-Contact",
        "measurementType=Eddy Current",
        "model=FL-202F08 [Linear Range: 2 mm, Tip Dia.: 8mm]",
        "armor=A",
    ]);
    assert_eq!(selection.sensor_code(), "FL-202F08-A-M2-00-02-05");

    let changed = apply_change(selection, SelectionChange::parse("area=Hazardous").unwrap());
    assert_eq!(changed.sensor.contact_type, None);
    assert_eq!(changed.sensor.measurement_type, None);
    assert!(changed.sensor.model_id.is_empty());
    assert_eq!(changed.sensor.attributes, SensorAttributes::default());
    assert_eq!(changed.sensor_code(), PLACEHOLDER);
    assert_eq!(live_summary(&changed).sensor_code, PLACEHOLDER);
}

#[test]
fn test_same_value_does_not_reset_dependents() {
    let selection = select(&["area=Safe", "contactType=Contact"]);
    let unchanged = apply_change(selection.clone(), SelectionChange::parse("area=Safe").unwrap());
    assert_eq!(unchanged, selection);
}

#[test]
fn test_live_and_text_views_agree_on_junction_box() {
    let selection = select(&["quantity=7", "jbMoc=SS316", "jbIn=3", "jbOut=2"]);
    let live = live_summary(&selection);
    let text = text_summary(&selection);

    let terminals = live.jb_terminal.to_string();
    let glands = live.jb_gland.to_string();
    let quantity = live.jb_qty.to_string();
    assert!(text.contains(&format!("  Terminal: {terminals} (calc: 3 * 3 * 1.2)\n")));
    assert!(text.contains(&format!("  Glands: {glands} (calc: 3 + 2)\n")));
    assert!(text.contains(&format!("  JB Quantity: {quantity}\n")));
}

#[test]
fn test_reverse_mount_prefixes_do_not_collide() {
    assert_eq!(
        family_for("FL-302F10R [Linear Range: 3 mm, Tip Dia.: 10mm, R]").map(|f| f.name),
        Some("FL-302F10R")
    );
    assert_eq!(
        family_for("FL-202F08R [Linear Range: 2 mm, Tip Dia.: 8mm, Reverse Mount]")
            .map(|f| f.name),
        Some("FL-202F08R")
    );
    assert_eq!(
        family_for("FL-302F10 [Linear Range: 3 mm, Tip Dia.: 10mm]").map(|f| f.name),
        Some("FL-302F10")
    );
}

#[test]
fn test_eddy_current_probe_code() {
    let selection = select(&[
        "area=Safe",
        "contactType=Non-Contact",
        "measurementType=Eddy Current",
        "model=FL-202F08 [Linear Range: 2 mm, Tip Dia.: 8mm]",
    ]);
    assert_eq!(selection.sensor_code(), "FL-202F08-L-M2-00-02-05");
}

#[test]
fn test_hazardous_probe_code_carries_suffix() {
    let selection = select(&[
        "area=Hazardous",
        "contactType=Non-Contact",
        "measurementType=Eddy Current",
        "model=FL-202F08/E50 [Linear Range: 2 mm, Tip Dia.: 8mm]",
    ]);
    assert_eq!(selection.sensor_code(), "FL-202F08-L-M2-00-02-05/E50");
}

#[test]
fn test_junction_box_sizing_scenario() {
    let selection = select(&["quantity=5", "jbMoc=FRP", "jbIn=2", "jbOut=1"]);
    let live = live_summary(&selection);
    assert_eq!(live.jb_required, "Yes");
    assert_eq!(live.jb_terminal.to_string(), "8");
    assert_eq!(live.jb_gland.to_string(), "3");
    assert_eq!(live.jb_qty.to_string(), "3");
}

#[test]
fn test_junction_box_without_inputs() {
    let selection = select(&["quantity=4", "jbMoc=FRP"]);
    let text = text_summary(&selection);
    assert!(text.contains("  JB Quantity: N/A (JB In is 0)\n"));

    let summary = live_summary(&selection);
    assert_eq!(
        summary.jb_qty,
        vibconf::summary::Derived::Value(JbQuantity::NotApplicable)
    );
}

#[test]
fn test_loop_powered_code() {
    let selection = select(&[
        "area=Safe",
        "contactType=Contact",
        "measurementType=Loop Powered",
        "model=Shinkawa: CBT",
        "range=20",
        "measurementUnit=P",
    ]);
    assert_eq!(selection.sensor_code(), "CBT-020-P-50");
}

#[test]
fn test_unknown_triple_offers_nothing() {
    use vibconf::catalog::{Area, ContactType, MeasurementType};

    assert!(vibconf::resolver::sensor_models_for("Safe", "Contact", "Nonexistent").is_empty());
    assert!(sensor_models(Some(Area::Safe), Some(ContactType::Contact), None).is_empty());
    assert!(
        sensor_models(
            Some(Area::Safe),
            Some(ContactType::Contact),
            Some(MeasurementType::EddyCurrent)
        )
        .is_empty()
    );
}
