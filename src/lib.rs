//! Vibration-sensor configurator.
//!
//! The core is pure: [`resolver`] narrows the option lists, [`codegen`]
//! turns a model and its attributes into a product code, [`transition`]
//! applies edits with their reset cascade and [`summary`] compiles the live
//! view and the order report. [`wizard`] gates step navigation. Everything
//! else is the shell around it.

pub mod catalog;
pub mod codegen;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod io;
pub mod logging;
pub mod resolver;
pub mod selection;
pub mod summary;
pub mod transition;
pub mod wizard;

/// Shown wherever a derived value is not known yet.
pub const PLACEHOLDER: &str = "...";

// Explicit exports for better API clarity
pub use codegen::{SensorAttributes, generate_code};
pub use config::Settings;
pub use error::{ConfiguratorError, ConfiguratorResult, ErrorReport, WizardError, WizardResult};
pub use resolver::{measurement_options, monitoring_models, sensor_models};
pub use selection::Selection;
pub use summary::{LiveSummary, live_summary, text_summary};
pub use transition::{Field, SelectionChange, apply_change, apply_changes};
pub use wizard::{Wizard, WizardStep};
