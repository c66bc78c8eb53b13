//! Input/Output handling for the CLI.
//!
//! This module provides:
//! - Selection file loading (TOML, JSON)
//! - Unified output formatting (text, JSON)
//! - Consistent error reporting and exit codes

pub mod exit_code;
pub mod format;
pub mod input;
pub mod output;

pub use exit_code::ExitCode;
pub use format::{ErrorDetails, JsonResponse, OutputFormat, ResponseMeta};
pub use input::{SelectionFormat, load_selection};
pub use output::OutputManager;
