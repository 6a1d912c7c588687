//! Encoding, decoding and file handling for serialized models.
//!
//! Models cross the process boundary as TOML documents with a format version
//! header. Only identical tool builds exchange models, so a version mismatch
//! is an error rather than something to migrate.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::AppModel;
use crate::constants::{MODEL_FILE_HEADER, MODEL_FORMAT_VERSION};
use crate::core::ModelError;
use crate::utils::fs::atomic_write;

#[derive(Serialize)]
struct ModelDocumentRef<'a> {
    format_version: u32,
    model: &'a AppModel,
}

#[derive(Deserialize)]
struct ModelDocument {
    model: AppModel,
}

#[derive(Deserialize)]
struct VersionHeader {
    format_version: Option<u32>,
}

impl AppModel {
    /// Encode the model as a TOML document.
    ///
    /// The encoding is canonical: sets and the property map are ordered, so
    /// equal models always produce identical bytes.
    pub fn to_toml_string(&self) -> Result<String, ModelError> {
        let document = ModelDocumentRef {
            format_version: MODEL_FORMAT_VERSION,
            model: self,
        };
        Ok(toml::to_string(&document)?)
    }

    /// Decode a model produced by [`to_toml_string`](Self::to_toml_string).
    pub fn from_toml_str(content: &str) -> Result<Self, ModelError> {
        Self::decode(content, "<string>")
    }

    fn decode(content: &str, source_name: &str) -> Result<Self, ModelError> {
        let parse_error = |reason: String| ModelError::ModelParseError {
            source_name: source_name.to_string(),
            reason,
        };

        let header: VersionHeader =
            toml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        match header.format_version {
            Some(MODEL_FORMAT_VERSION) => {}
            Some(other) => {
                return Err(parse_error(format!(
                    "format version {other} does not match supported version {MODEL_FORMAT_VERSION}"
                )));
            }
            None => return Err(parse_error("missing format_version".to_string())),
        }

        let document: ModelDocument =
            toml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        Ok(document.model)
    }

    /// Save the model to disk.
    ///
    /// Writes a "do not edit" header followed by the TOML encoding. The write is
    /// atomic (temp file + rename), so a reader never sees a partial model.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut content = String::from(MODEL_FILE_HEADER);
        content.push_str(&self.to_toml_string()?);

        atomic_write(path, content.as_bytes()).with_context(|| {
            format!(
                "Cannot write application model: {}\n\n\
                    Possible causes:\n\
                    - Permission denied\n\
                    - Disk is full or read-only\n\
                    - File is locked by another process",
                path.display()
            )
        })?;

        Ok(())
    }

    /// Load a model saved by [`save`](Self::save).
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).with_context(|| {
            format!(
                "Cannot read application model: {}\n\n\
                    Possible causes:\n\
                    - File doesn't exist (run 'app-model assemble' to create it)\n\
                    - Permission denied (check file ownership)",
                path.display()
            )
        })?;

        let model = Self::decode(&content, &path.display().to_string())?;
        Ok(model)
    }
}
