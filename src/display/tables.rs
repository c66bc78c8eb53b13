//! Table formatting utilities for structured output.

use crate::PLACEHOLDER;
use crate::codegen::FamilyRule;
use crate::selection::Vm7Config;
use crate::summary::LiveSummary;
use comfy_table::{
    Attribute, Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
};

/// Builder for creating formatted tables.
pub struct TableBuilder {
    table: Table,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    /// Create a new table builder.
    pub fn new() -> Self {
        Self { table: styled() }
    }

    /// Set the table headers.
    pub fn set_headers(mut self, headers: Vec<&str>) -> Self {
        self.table.set_header(header_cells(headers));
        self
    }

    /// Add a row to the table.
    pub fn add_row(mut self, row: Vec<String>) -> Self {
        self.table.add_row(row);
        self
    }

    /// Build and return the formatted table.
    pub fn build(self) -> String {
        self.table.to_string()
    }
}

fn styled() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    // Apply rounded corners
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table
}

fn header_cells(headers: Vec<&str>) -> Vec<Cell> {
    headers
        .into_iter()
        .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
        .collect()
}

/// The live summary panel, one row per field.
///
/// Section names are only printed on the first row of each section.
/// Values still waiting on upstream input are dimmed.
pub fn live_summary_table(summary: &LiveSummary) -> String {
    let mut table = styled();
    table.set_header(header_cells(vec!["Section", "Field", "Value"]));

    let mut previous = "";
    for (section, field, value) in summary.rows() {
        let section_cell = if section == previous {
            Cell::new("")
        } else {
            Cell::new(section).add_attribute(Attribute::Bold)
        };
        previous = section;

        let value_cell = if value == PLACEHOLDER {
            Cell::new(value).fg(Color::DarkGrey)
        } else if field == "Full Code" {
            Cell::new(value).fg(Color::Yellow)
        } else {
            Cell::new(value)
        };
        table.add_row(vec![section_cell, Cell::new(field), value_cell]);
    }

    table.to_string()
}

/// Family rule table with each family's attribute schema.
pub fn families_table(families: &[FamilyRule]) -> String {
    let mut table = styled();
    table.set_header(header_cells(vec![
        "Family",
        "Part",
        "Certification",
        "Attributes (default)",
    ]));

    for rule in families {
        let attributes = rule
            .fields
            .iter()
            .map(|spec| {
                let values: Vec<&str> = spec.options.iter().map(|c| c.value).collect();
                format!(
                    "{} = {} [{}]",
                    spec.attribute,
                    spec.default,
                    values.join(", ")
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        table.add_row(vec![
            Cell::new(rule.name).add_attribute(Attribute::Bold),
            Cell::new(rule.part),
            Cell::new(rule.certification.to_string()),
            Cell::new(attributes),
        ]);
    }

    table.to_string()
}

/// VM-7 modules with a non-zero quantity. `None` when nothing is installed.
pub fn vm7_table(config: &Vm7Config) -> Option<String> {
    if config.is_empty() {
        return None;
    }

    let mut builder = TableBuilder::new().set_headers(vec!["Module", "Group", "Qty"]);
    for (module, quantity) in config.installed() {
        builder = builder.add_row(vec![
            module.label().to_string(),
            format!("{:?}", module.group()),
            quantity.to_string(),
        ]);
    }
    Some(builder.build())
}
