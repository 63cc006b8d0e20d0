// src/core/fs_ops.rs
//! File boundary of the pipeline: every read and write carries its path in the error

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Snapshots are indented by four spaces
const JSON_INDENT: &[u8] = b"    ";

pub struct FsOps;

impl FsOps {
    pub fn ensure_dir_exists(path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            app_log!(info, "Created directory: {}", path.display());
        }
        Ok(())
    }

    pub fn read_file_safe(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Writes the whole content at once, creating parent directories first
    pub fn write_file_safe(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            Self::ensure_dir_exists(parent)?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        app_log!(info, "Written file: {}", path.display());
        Ok(())
    }

    pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
        let content = Self::read_file_safe(path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON file: {}", path.display()))
    }

    /// Serializes fully in memory before touching the file, so a failed
    /// serialization never leaves a truncated snapshot behind.
    pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
        let content = Self::to_json(value)
            .with_context(|| format!("Failed to serialize JSON for: {}", path.display()))?;
        Self::write_file_safe(path, &content)
    }

    pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        value.serialize(&mut serializer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
