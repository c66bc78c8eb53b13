//! CLI command implementations.
//!
//! Each command writes through an [`OutputManager`] and returns the
//! [`ExitCode`] the process should end with. Nothing here touches the
//! selection file beyond reading it.

use crate::codegen::{self, Attribute, FamilySchema, SensorAttributes};
use crate::config::Settings;
use crate::display::{THEME, families_table, live_summary_table, vm7_table};
use crate::error::{ConfiguratorError, ConfiguratorResult, ErrorReport};
use crate::io::{ExitCode, OutputManager, load_selection};
use crate::resolver;
use crate::selection::{ProjectField, Selection};
use crate::summary::{live_summary, text_summary};
use crate::transition::{SelectionChange, apply_changes};
use crate::wizard::{WizardStep, reachable_step, validate_project_details};
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Map a failed write to stdout/stderr to an exit code.
fn finish(result: std::io::Result<ExitCode>) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error writing output: {e}");
            ExitCode::GeneralError
        }
    }
}

fn fail<E: ErrorReport>(output: &mut OutputManager, error: &E) -> ExitCode {
    finish(output.error(error))
}

/// Execute `options measurement`
pub fn options_measurement(output: &mut OutputManager, area: &str, contact: &str) -> ExitCode {
    let options = resolver::measurement_options_for(area, contact);
    finish(output.collection(options, "measurement types", contact))
}

/// Execute `options models`
pub fn options_models(
    output: &mut OutputManager,
    area: &str,
    contact: &str,
    measurement: &str,
) -> ExitCode {
    let models = resolver::sensor_models_for(area, contact, measurement);
    let filter = format!("{area} / {contact} / {measurement}");
    finish(output.collection(models, "sensor models", &filter))
}

/// Execute `options monitoring`
pub fn options_monitoring(output: &mut OutputManager, system: &str, make: &str) -> ExitCode {
    let models = resolver::monitoring_models_for(system, make);
    let filter = format!("{system} / {make}");
    finish(output.collection(models, "monitoring models", &filter))
}

/// Result of `code`
#[derive(Debug, Serialize)]
pub struct CodeResult {
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<&'static str>,
    pub attributes: SensorAttributes,
    pub code: String,
}

impl fmt::Display for CodeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Build the attribute bag for `model`: family defaults, then `name=value` overrides.
pub fn attributes_for(model: &str, assignments: &[String]) -> ConfiguratorResult<SensorAttributes> {
    let mut attributes = SensorAttributes::for_model(model);
    for assignment in assignments {
        let (name, value) =
            assignment
                .split_once('=')
                .ok_or_else(|| ConfiguratorError::MalformedAssignment {
                    input: assignment.clone(),
                })?;
        let attribute =
            Attribute::from_name(name.trim()).ok_or_else(|| ConfiguratorError::UnknownField {
                field: name.trim().to_string(),
            })?;
        attributes.set(attribute, value.trim());
    }
    Ok(attributes)
}

/// Execute `code`
pub fn code(output: &mut OutputManager, model: &str, assignments: &[String]) -> ExitCode {
    let attributes = match attributes_for(model, assignments) {
        Ok(attributes) => attributes,
        Err(e) => return fail(output, &e),
    };

    let result = CodeResult {
        model: model.to_string(),
        family: codegen::family_for(model).map(|rule| rule.name),
        code: codegen::generate_code(model, &attributes),
        attributes,
    };
    finish(output.success(result))
}

/// Execute `families`
pub fn families(output: &mut OutputManager) -> ExitCode {
    let rules = codegen::families();
    let schemas: Vec<FamilySchema> = rules.iter().map(|rule| rule.schema()).collect();
    finish(output.render(&schemas, &families_table(rules)))
}

/// Load a selection file and apply `--set` edits through the reducer.
pub fn prepare_selection(path: &Path, assignments: &[String]) -> ConfiguratorResult<Selection> {
    let selection = load_selection(path)?;
    let changes = assignments
        .iter()
        .map(|assignment| SelectionChange::parse(assignment))
        .collect::<ConfiguratorResult<Vec<_>>>()?;
    Ok(apply_changes(selection, changes))
}

#[derive(Debug, Serialize)]
struct TextReport<'a> {
    report: &'a str,
}

/// Execute `summary`
pub fn summary(
    output: &mut OutputManager,
    path: &Path,
    assignments: &[String],
    text: bool,
) -> ExitCode {
    let selection = match prepare_selection(path, assignments) {
        Ok(selection) => selection,
        Err(e) => return fail(output, &e),
    };

    if text {
        let report = text_summary(&selection);
        return finish(output.render(&TextReport { report: &report }, &report));
    }

    let live = live_summary(&selection);
    let mut rendered = live_summary_table(&live);
    if selection.monitoring.model == resolver::VM7_MODEL
        && let Some(table) = vm7_table(&selection.monitoring.vm7)
    {
        rendered.push('\n');
        rendered.push_str(&THEME.apply(&THEME.header, "VM-7B Configuration"));
        rendered.push('\n');
        rendered.push_str(&table);
    }
    finish(output.render(&live, &rendered))
}

/// Result of `check`
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub reachable_step: usize,
    pub label: &'static str,
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = format!("{}. {}", self.reachable_step, self.label);
        write!(
            f,
            "{}",
            THEME.success_with_icon(&format!(
                "Project details complete, every step up to {} is reachable",
                THEME.apply(&THEME.emphasis, step)
            ))
        )
    }
}

/// Execute `check`
pub fn check(output: &mut OutputManager, path: &Path, required: &[ProjectField]) -> ExitCode {
    let selection = match load_selection(path) {
        Ok(selection) => selection,
        Err(e) => return fail(output, &e),
    };

    if let Err(error) = validate_project_details(&selection, required) {
        if let Err(e) = output.info(&THEME.error_with_icon(&format!(
            "Selection is held at {}",
            WizardStep::Details
        ))) {
            eprintln!("Error writing output: {e}");
        }
        return fail(output, &error);
    }

    let step = reachable_step(&selection, required);
    finish(output.success(CheckResult {
        reachable_step: step.number(),
        label: step.label(),
    }))
}

/// Execute `init`
pub fn init(output: &mut OutputManager, force: bool) -> ExitCode {
    match Settings::init_config_file(force) {
        Ok(path) => {
            let message = format!("Created configuration file at: {}", path.display());
            finish(output.success(THEME.success_with_icon(&message)))
        }
        Err(e) => fail(output, &e),
    }
}

/// Execute `config`
pub fn config(output: &mut OutputManager, settings: &Settings) -> ExitCode {
    let toml_str = match settings.to_toml() {
        Ok(toml_str) => toml_str,
        Err(e) => return fail(output, &e),
    };
    let text = format!("Current Configuration:\n{}\n{toml_str}", "=".repeat(50));
    finish(output.render(settings, &text))
}
