//! Output management for CLI commands.
//!
//! Handles formatting and display for different output formats,
//! providing a unified interface for text and JSON output.

use crate::error::ErrorReport;
use crate::io::exit_code::ExitCode;
use crate::io::format::{JsonResponse, OutputFormat, ResponseMeta};
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};

/// A reader that went away (`vibconf ... | head`) is not an error.
fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Manages output formatting and display.
///
/// Provides methods for outputting success results, collections,
/// and errors in either text or JSON format based on configuration.
pub struct OutputManager {
    format: OutputFormat,
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
}

impl OutputManager {
    /// Create a new output manager with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            stdout: Box::new(io::stdout()),
            stderr: Box::new(io::stderr()),
        }
    }

    /// Create an output manager with custom writers.
    pub fn new_with_writers(
        format: OutputFormat,
        stdout: Box<dyn Write>,
        stderr: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            stdout,
            stderr,
        }
    }

    fn write_json<T: Serialize>(&mut self, response: &JsonResponse<T>) -> io::Result<()> {
        writeln!(self.stdout, "{}", serde_json::to_string_pretty(response)?)
    }

    /// Output a successful result.
    ///
    /// In JSON mode, wraps the data in a success response.
    /// In text mode, displays the data using its Display implementation.
    pub fn success<T>(&mut self, data: T) -> io::Result<ExitCode>
    where
        T: Serialize + Display,
    {
        let written = match self.format {
            OutputFormat::Json => {
                let response = JsonResponse::success(&data).with_meta(ResponseMeta::now());
                self.write_json(&response)
            }
            OutputFormat::Text => writeln!(self.stdout, "{data}"),
        };
        ignore_broken_pipe(written)?;
        Ok(ExitCode::Success)
    }

    /// Output structured data, or pre-rendered text in text mode.
    ///
    /// Used where the text view (a table, the order report) is not the
    /// `Display` of the data.
    pub fn render<T>(&mut self, data: &T, text: &str) -> io::Result<ExitCode>
    where
        T: Serialize,
    {
        let written = match self.format {
            OutputFormat::Json => {
                let response = JsonResponse::success(data).with_meta(ResponseMeta::now());
                self.write_json(&response)
            }
            OutputFormat::Text if text.ends_with('\n') => write!(self.stdout, "{text}"),
            OutputFormat::Text => writeln!(self.stdout, "{text}"),
        };
        ignore_broken_pipe(written)?;
        Ok(ExitCode::Success)
    }

    /// Output a not found result.
    pub fn not_found(&mut self, entity: &str, name: &str) -> io::Result<ExitCode> {
        let written = match self.format {
            OutputFormat::Json => {
                let response = JsonResponse::not_found(entity, name);
                self.write_json(&response)
            }
            OutputFormat::Text => writeln!(self.stderr, "{entity} '{name}' not found"),
        };
        ignore_broken_pipe(written)?;
        Ok(ExitCode::NotFound)
    }

    /// Output a collection with proper formatting.
    ///
    /// Empty collections are treated as not found, `filter` names the
    /// inputs that produced nothing.
    pub fn collection<T, I>(
        &mut self,
        items: I,
        entity_name: &str,
        filter: &str,
    ) -> io::Result<ExitCode>
    where
        T: Serialize + Display,
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();

        if items.is_empty() {
            return self.not_found(entity_name, filter);
        }

        let written = match self.format {
            OutputFormat::Json => {
                let response = JsonResponse::success(&items).with_meta(ResponseMeta::now());
                self.write_json(&response)
            }
            OutputFormat::Text => self.write_list(&items, entity_name),
        };
        ignore_broken_pipe(written)?;
        Ok(ExitCode::Success)
    }

    fn write_list<T: Display>(&mut self, items: &[T], entity_name: &str) -> io::Result<()> {
        writeln!(self.stdout, "Found {} {entity_name}:", items.len())?;
        writeln!(self.stdout, "{}", "=".repeat(40))?;
        for item in items {
            writeln!(self.stdout, "{item}")?;
        }
        Ok(())
    }

    fn write_error_text<E: ErrorReport + ?Sized>(&mut self, error: &E) -> io::Result<()> {
        writeln!(self.stderr, "Error: {error}")?;
        for suggestion in error.recovery_suggestions() {
            writeln!(self.stderr, "  Suggestion: {suggestion}")?;
        }
        Ok(())
    }

    /// Output an error with suggestions.
    ///
    /// JSON errors go to stdout so scripts read one stream.
    pub fn error<E: ErrorReport + ?Sized>(&mut self, error: &E) -> io::Result<ExitCode> {
        let written = match self.format {
            OutputFormat::Json => {
                let response = JsonResponse::from_error(error).with_meta(ResponseMeta::now());
                self.write_json(&response)
            }
            OutputFormat::Text => self.write_error_text(error),
        };
        ignore_broken_pipe(written)?;
        Ok(ExitCode::from_error(error))
    }

    /// Output informational message (text mode only).
    pub fn info(&mut self, message: &str) -> io::Result<()> {
        if matches!(self.format, OutputFormat::Text) {
            ignore_broken_pipe(writeln!(self.stdout, "{message}"))?;
        }
        Ok(())
    }
}
