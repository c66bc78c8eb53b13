//! Commands run against selection files on disk.
//!
//! Output goes through `OutputManager::new_with_writers` so both streams
//! can be inspected.

use std::cell::RefCell;
use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;
use tempfile::TempDir;
use vibconf::commands;
use vibconf::io::{ExitCode, OutputFormat, OutputManager};
use vibconf::selection::ProjectField;
use vibconf::{ConfiguratorError, Settings};

#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn output(format: OutputFormat) -> (OutputManager, SharedBuffer, SharedBuffer) {
    let stdout = SharedBuffer::default();
    let stderr = SharedBuffer::default();
    let manager =
        OutputManager::new_with_writers(format, Box::new(stdout.clone()), Box::new(stderr.clone()));
    (manager, stdout, stderr)
}

const ORDER_TOML: &str = r#"
[project]
engineer = "R. Iyer"
email = "r.iyer@example.com"
offerNo = "OF-2291"
customer = "ACME Power"
project = "Boiler Feed Pumps"
ref = "RFQ-17"
branch = "Pune"

[sensor]
area = "Safe"
contactType = "Contact"
measurementType = "Loop Powered"
modelId = "Shinkawa: CBT"
quantity = 5

[sensor.attributes]
range = "20"
measurementUnit = "P"

[junctionBox]
moc = "FRP"
inputs = 2
outputs = 1
"#;

const INCOMPLETE_JSON: &str = r#"{
  "project": { "customer": "ACME Power", "email": "" },
  "sensor": { "area": "Hazardous", "contactType": "Non-Contact", "measurementType": "" }
}"#;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_summary_json_envelope() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir, "order.toml", ORDER_TOML);

    let (mut out, stdout, _) = output(OutputFormat::Json);
    let code = commands::summary(&mut out, &path, &[], false);
    assert_eq!(code, ExitCode::Success);

    let json: serde_json::Value = serde_json::from_str(&stdout.contents()).unwrap();
    println!("=== SUMMARY JSON ===\n{json:#}");
    assert_eq!(json["status"], "success");
    assert_eq!(json["exit_code"], 0);
    let data = &json["data"];
    assert_eq!(data["customer"], "ACME Power");
    assert_eq!(data["sensorCode"], "CBT-020-P-50");
    assert_eq!(data["jbRequired"], "Yes");
    assert_eq!(data["jbTerminal"], 8);
    assert_eq!(data["jbGland"], 3);
    assert_eq!(data["jbQty"], 3);
    assert_eq!(data["machineType"], "...");
}

#[test]
fn test_summary_sets_go_through_the_reducer() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir, "order.toml", ORDER_TOML);

    let selection = commands::prepare_selection(
        &path,
        &["jbIn=0".to_string(), "measurementType=Velocity".to_string()],
    )
    .unwrap();
    // measurement change clears the model and the attributes with it
    assert!(selection.sensor.model_id.is_empty());
    assert_eq!(selection.sensor_code(), "...");
    assert_eq!(selection.junction_box.inputs, 0);

    // the file itself is untouched
    assert_eq!(std::fs::read_to_string(&path).unwrap(), ORDER_TOML);

    let (mut out, stdout, _) = output(OutputFormat::Text);
    let code = commands::summary(&mut out, &path, &["jbIn=0".to_string()], true);
    assert_eq!(code, ExitCode::Success);
    assert!(stdout.contents().contains("  JB Quantity: N/A (JB In is 0)\n"));
}

#[test]
fn test_summary_rejects_bad_assignments() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir, "order.toml", ORDER_TOML);

    let (mut out, stdout, _) = output(OutputFormat::Json);
    let code = commands::summary(&mut out, &path, &["jbIn=two".to_string()], false);
    assert_eq!(code, ExitCode::ParseError);

    let json: serde_json::Value = serde_json::from_str(&stdout.contents()).unwrap();
    assert_eq!(json["status"], "error");
    assert_eq!(json["code"], "INVALID_VALUE");
    assert_eq!(json["exit_code"], 4);

    assert!(matches!(
        commands::prepare_selection(&path, &["colour=red".to_string()]),
        Err(ConfiguratorError::UnknownField { .. })
    ));
}

#[test]
fn test_json_selection_and_text_table() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir, "order.json", INCOMPLETE_JSON);

    let (mut out, stdout, _) = output(OutputFormat::Text);
    let code = commands::summary(&mut out, &path, &[], false);
    assert_eq!(code, ExitCode::Success);

    let text = stdout.contents();
    assert!(text.contains("ACME Power"));
    assert!(text.contains("Not Required"));
    assert!(!text.contains("VM-7B Configuration"));
}

#[test]
fn test_check_blocks_incomplete_details() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir, "order.json", INCOMPLETE_JSON);

    let (mut out, stdout, _) = output(OutputFormat::Json);
    let code = commands::check(&mut out, &path, &ProjectField::ALL);
    assert_eq!(code, ExitCode::BlockingError);
    assert!(code.is_blocking());

    let json: serde_json::Value = serde_json::from_str(&stdout.contents()).unwrap();
    assert_eq!(json["code"], "INCOMPLETE_PROJECT_DETAILS");
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("engineer"));
    assert!(!message.contains("customer"));

    // only the customer is required: navigation is open
    let (mut out, stdout, _) = output(OutputFormat::Json);
    let code = commands::check(&mut out, &path, &[ProjectField::Customer]);
    assert_eq!(code, ExitCode::Success);
    let json: serde_json::Value = serde_json::from_str(&stdout.contents()).unwrap();
    assert_eq!(json["data"]["reachable_step"], 5);
    assert_eq!(json["data"]["label"], "Final Summary");
}

#[test]
fn test_check_text_mode_reports_on_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir, "order.json", INCOMPLETE_JSON);

    let (mut out, stdout, stderr) = output(OutputFormat::Text);
    let code = commands::check(&mut out, &path, &ProjectField::ALL);
    assert_eq!(code, ExitCode::BlockingError);
    assert!(stdout.contents().contains("Selection is held at 1. Details & Machine"));
    assert!(
        stderr
            .contents()
            .starts_with("Error: Project details incomplete, missing: engineer, email, offerNo")
    );
}

#[test]
fn test_unsupported_and_missing_files() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir, "order.yaml", "sensor: {}");

    let (mut out, _, stderr) = output(OutputFormat::Text);
    let code = commands::summary(&mut out, &path, &[], false);
    assert_eq!(code, ExitCode::UnsupportedOperation);
    assert!(stderr.contents().contains("Unsupported file type 'yaml'"));

    let missing = temp_dir.path().join("missing.toml");
    let (mut out, _, _) = output(OutputFormat::Text);
    assert_eq!(
        commands::check(&mut out, &missing, &ProjectField::ALL),
        ExitCode::IoError
    );
}

#[test]
fn test_code_command() {
    let (mut out, stdout, _) = output(OutputFormat::Json);
    let code = commands::code(
        &mut out,
        "FL-202F08/E50 [Linear Range: 2 mm, Tip Dia.: 8mm]",
        &["armor=A".to_string(), "cableLength=10".to_string()],
    );
    assert_eq!(code, ExitCode::Success);

    let json: serde_json::Value = serde_json::from_str(&stdout.contents()).unwrap();
    assert_eq!(json["data"]["code"], "FL-202F08-A-M2-00-02-10/E50");
    assert_eq!(json["data"]["attributes"]["armor"], "A");

    let (mut out, stdout, _) = output(OutputFormat::Text);
    commands::code(&mut out, "Shinkawa: CV-86", &[]);
    assert_eq!(stdout.contents(), "CV-861\n");
}

#[test]
fn test_options_commands() {
    let (mut out, stdout, _) = output(OutputFormat::Json);
    let code = commands::options_monitoring(&mut out, "API", "Shinkawa");
    assert_eq!(code, ExitCode::Success);
    let json: serde_json::Value = serde_json::from_str(&stdout.contents()).unwrap();
    assert_eq!(json["data"], serde_json::json!(["VM 5", "VM 7"]));

    let (mut out, _, stderr) = output(OutputFormat::Text);
    let code = commands::options_models(&mut out, "Safe", "Contact", "Nonexistent");
    assert_eq!(code, ExitCode::NotFound);
    assert_eq!(
        stderr.contents(),
        "sensor models 'Safe / Contact / Nonexistent' not found\n"
    );
}

#[test]
fn test_init_writes_loadable_settings() {
    let temp_dir = TempDir::new().unwrap();
    let path = Settings::init_config_file_in(temp_dir.path(), false).unwrap();
    assert!(path.ends_with(".vibconf/settings.toml"));

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.wizard.required_fields, ProjectField::ALL.to_vec());

    let err = Settings::init_config_file_in(temp_dir.path(), false).unwrap_err();
    assert!(err.to_string().contains("--force"));
    assert!(Settings::init_config_file_in(temp_dir.path(), true).is_ok());
}
