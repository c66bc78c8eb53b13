//! Terminal display utilities for CLI output.
//!
//! Provides styled tables and a shared color theme.

pub mod tables;
pub mod theme;

pub use tables::{TableBuilder, families_table, live_summary_table, vm7_table};
pub use theme::{THEME, Theme};
