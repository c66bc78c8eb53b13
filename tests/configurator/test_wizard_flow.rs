//! End-to-end walks through the wizard, one edit at a time.

use vibconf::catalog::{MonitoringMake, MonitoringType, Vm7Module};
use vibconf::selection::ProjectField;
use vibconf::{SelectionChange, Wizard, WizardError, WizardStep, live_summary, text_summary};

fn set(wizard: &mut Wizard, assignment: &str) {
    let change = SelectionChange::parse(assignment)
        .unwrap_or_else(|e| panic!("could not parse '{assignment}': {e}"));
    wizard.apply(change);
}

fn fill_project_details(wizard: &mut Wizard) {
    for assignment in [
        "engineer=R. Iyer",
        "email=r.iyer@example.com",
        "offerNo=OF-2291",
        "customer=ACME Power",
        "project=Boiler Feed Pumps",
        "ref=RFQ-17",
        "branch=Pune",
    ] {
        set(wizard, assignment);
    }
}

#[test]
fn test_full_walk_produces_report() {
    let mut wizard = Wizard::default();
    assert!(matches!(
        wizard.next(),
        Err(WizardError::IncompleteProjectDetails { .. })
    ));

    fill_project_details(&mut wizard);
    set(&mut wizard, "machine=BFP-A");
    set(&mut wizard, "machineType=Horizontal");
    assert_eq!(wizard.next().unwrap(), WizardStep::Sensor);

    set(&mut wizard, "area=Safe");
    set(&mut wizard, "contactType=Contact");
    set(&mut wizard, "measurementType=Velocity");
    set(&mut wizard, "model=Shinkawa: CV-86");
    set(&mut wizard, "cableType=2");
    set(&mut wizard, "quantity=6");
    assert_eq!(wizard.next().unwrap(), WizardStep::Accessories);

    set(&mut wizard, "extCable=yes");
    set(&mut wizard, "extLength=010");
    set(&mut wizard, "jbMoc=SS316");
    set(&mut wizard, "jbIn=4");
    set(&mut wizard, "jbOut=1");
    set(&mut wizard, "glandMoc=Brass");
    assert_eq!(wizard.next().unwrap(), WizardStep::Monitoring);
    assert_eq!(wizard.next().unwrap(), WizardStep::Summary);

    let selection = wizard.selection();
    let live = live_summary(selection);
    assert_eq!(live.customer, "ACME Power");
    assert_eq!(live.machine_type, "Horizontal");
    assert_eq!(live.sensor_code, "CV-862");
    assert_eq!(live.ext_cable, "Yes (10m)");
    assert_eq!(live.monitoring_system, "Not Required");

    let report = text_summary(selection);
    assert!(report.starts_with("CUSTOMER: ACME Power\nPROJECT: Boiler Feed Pumps\n\n"));
    assert!(report.contains("1. SENSOR:\n Model: Shinkawa: CV-86\n Quantity: 6\n Full Code: CV-862\n\n"));
    assert!(report.contains("  Length: 10m\n  Code: FM-EXTC-SS-010\n"));
    // ceil(4 * 3.6) = 15, ceil(6 / 4) = 2
    assert!(report.contains("  Terminal: 15 (calc: 4 * 3 * 1.2)\n"));
    assert!(report.contains("  JB Quantity: 2\n"));
    assert!(report.ends_with("3. MONITORING SYSTEM:\n  System: Not Required\n"));
}

#[test]
fn test_monitoring_cascade() {
    let mut wizard = Wizard::new(vec![ProjectField::Customer]);
    set(&mut wizard, "monitoringRequired=true");
    set(&mut wizard, "monitoringType=API");
    set(&mut wizard, "monitoringMake=Shinkawa");
    set(&mut wizard, "monitoringModel=VM 7");
    set(&mut wizard, "vm7.vm701=4");
    assert_eq!(wizard.selection().monitoring.vm7.get(Vm7Module::Vm701), 4);

    // switching make clears the model and every VM-7 counter
    set(&mut wizard, "monitoringMake=FM");
    let monitoring = &wizard.selection().monitoring;
    assert_eq!(monitoring.system_type, Some(MonitoringType::Api));
    assert_eq!(monitoring.make, Some(MonitoringMake::ForbesMarshall));
    assert!(monitoring.model.is_empty());
    assert!(monitoring.vm7.is_empty());
    assert_eq!(
        live_summary(wizard.selection()).monitoring_system,
        "Yes, pending selection"
    );

    // a model the make does not offer is ignored
    set(&mut wizard, "monitoringModel=VM 21");
    assert!(wizard.selection().monitoring.model.is_empty());

    // turning monitoring off clears the whole chain
    set(&mut wizard, "monitoringRequired=false");
    let monitoring = &wizard.selection().monitoring;
    assert_eq!(monitoring.system_type, None);
    assert_eq!(monitoring.make, None);
}

#[test]
fn test_vm7_breakdown_in_report() {
    let mut wizard = Wizard::default();
    set(&mut wizard, "monitoringRequired=yes");
    set(&mut wizard, "monitoringType=API");
    set(&mut wizard, "monitoringMake=Shinkawa");
    set(&mut wizard, "monitoringModel=VM 7");
    set(&mut wizard, "vm7.vm761=1");
    set(&mut wizard, "vm7.vm701=3");
    set(&mut wizard, "vm7.vz76=2");

    let report = text_summary(wizard.selection());
    assert!(report.ends_with(
        "3. MONITORING SYSTEM:\n  System: VM 7\n \n VM-7B Configuration Breakdown:\n  - VM-761B/2B (Rack): 1\n  - VM-701B (Vib/Disp Monitor): 3\n  - VZ-76 (50mm Blank): 2\n"
    ));
}

#[test]
fn test_vm7_counts_ignored_for_other_models() {
    let mut wizard = Wizard::default();
    set(&mut wizard, "monitoringRequired=yes");
    set(&mut wizard, "monitoringType=Standalone");
    set(&mut wizard, "monitoringMake=Shinkawa");
    set(&mut wizard, "monitoringModel=VM 21");
    set(&mut wizard, "vm7.vm701=3");

    assert!(wizard.selection().monitoring.vm7.is_empty());
    let report = text_summary(wizard.selection());
    assert!(report.ends_with("  System: VM 21\n"));
}

#[test]
fn test_reset_starts_over() {
    let mut wizard = Wizard::default();
    fill_project_details(&mut wizard);
    wizard.go_to(WizardStep::Monitoring).unwrap();
    wizard.reset();

    assert_eq!(wizard.step(), WizardStep::Details);
    assert_eq!(live_summary(wizard.selection()).customer, "...");
}
