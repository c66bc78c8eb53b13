//! Reading selection files.
//!
//! A selection file is input only; nothing is ever written back. The
//! format follows the extension: `.toml` or `.json`.

use crate::error::{ConfiguratorError, ConfiguratorResult};
use crate::selection::Selection;
use std::path::Path;
use tracing::debug;

/// Supported selection file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionFormat {
    Toml,
    Json,
}

impl SelectionFormat {
    /// Detect the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> ConfiguratorResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(ConfiguratorError::UnsupportedFileType {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
        }
    }
}

/// Decode a selection from text in the given format.
pub fn parse_selection(
    content: &str,
    format: SelectionFormat,
    path: &Path,
) -> ConfiguratorResult<Selection> {
    let decoded = match format {
        SelectionFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        SelectionFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    };

    decoded.map_err(|reason| ConfiguratorError::Decode {
        path: path.to_path_buf(),
        format: format.name(),
        reason,
    })
}

/// Read and decode a selection file.
pub fn load_selection(path: impl AsRef<Path>) -> ConfiguratorResult<Selection> {
    let path = path.as_ref();
    let format = SelectionFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| ConfiguratorError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), format = format.name(), "loading selection");
    parse_selection(&content, format, path)
}
