//! Upload candidate inspection and validation.
//!
//! Every file the user picks is inspected and validated here, strictly
//! before any network traffic: a candidate that fails the MIME allow-list or
//! the size cap is rejected with a message naming the file and never reaches
//! the API.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::UploadConfig;
use crate::constants::BYTES_PER_MEGABYTE;

/// MIME types by lowercase file extension. Extensions outside this table
/// resolve to `application/octet-stream` and fall to the allow-list check.
static MIME_BY_EXTENSION: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("png", "image/png"),
        ("gif", "image/gif"),
        ("webp", "image/webp"),
        ("bmp", "image/bmp"),
        ("tif", "image/tiff"),
        ("tiff", "image/tiff"),
        ("svg", "image/svg+xml"),
    ])
});

/// Infer the MIME type of a path from its extension.
#[must_use]
pub fn mime_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .and_then(|ext| MIME_BY_EXTENSION.get(ext.as_str()).copied())
        .unwrap_or("application/octet-stream")
}

/// A file picked for upload, inspected but not yet validated.
#[derive(Debug, Clone)]
pub struct UploadCandidate {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl UploadCandidate {
    /// Inspect a path: resolve its display name, MIME type and size.
    pub fn inspect(path: &Path) -> Result<Self, UploadRejection> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| path.display().to_string());

        let metadata = std::fs::metadata(path).map_err(|e| UploadRejection::Unreadable {
            file: file_name.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            mime_type: mime_for_path(path).to_string(),
            size_bytes: metadata.len(),
            path: path.to_path_buf(),
            file_name,
        })
    }
}

/// Reasons a candidate never reaches the network.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum UploadRejection {
    #[error("{file} is not a supported image type")]
    UnsupportedType { file: String, mime: String },

    #[error("{file} exceeds maximum file size of {limit_mb}MB")]
    TooLarge { file: String, size: u64, limit_mb: u64 },

    #[error("{file} could not be read: {reason}")]
    Unreadable { file: String, reason: String },

    #[error("{file} skipped: batch exceeds the {limit} file limit")]
    TooMany { file: String, limit: usize },
}

impl UploadRejection {
    /// The file the rejection names.
    #[must_use]
    pub fn file(&self) -> &str {
        match self {
            Self::UnsupportedType { file, .. }
            | Self::TooLarge { file, .. }
            | Self::Unreadable { file, .. }
            | Self::TooMany { file, .. } => file,
        }
    }
}

/// Validation policy applied to every candidate before upload.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub allowed_types: Vec<String>,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::from_config(&UploadConfig::default())
    }
}

impl UploadPolicy {
    #[must_use]
    pub fn from_config(config: &UploadConfig) -> Self {
        Self {
            allowed_types: config.allowed_types.clone(),
            max_file_size: config.max_file_size_mb * BYTES_PER_MEGABYTE,
            max_files: config.max_files,
        }
    }

    /// Validate one candidate against the policy.
    pub fn validate(&self, candidate: &UploadCandidate) -> Result<(), UploadRejection> {
        if !self.allowed_types.iter().any(|t| t == &candidate.mime_type) {
            return Err(UploadRejection::UnsupportedType {
                file: candidate.file_name.clone(),
                mime: candidate.mime_type.clone(),
            });
        }

        if candidate.size_bytes > self.max_file_size {
            return Err(UploadRejection::TooLarge {
                file: candidate.file_name.clone(),
                size: candidate.size_bytes,
                limit_mb: self.max_file_size / BYTES_PER_MEGABYTE,
            });
        }

        Ok(())
    }

    /// Inspect and validate a batch of paths, splitting it into accepted
    /// candidates (in selection order) and rejections. Paths past the batch
    /// limit are rejected without being inspected.
    #[must_use]
    pub fn partition_batch(&self, paths: &[PathBuf]) -> (Vec<UploadCandidate>, Vec<UploadRejection>) {
        let mut accepted = Vec::new();
        let mut rejected = Vec::new();

        for (index, path) in paths.iter().enumerate() {
            if index >= self.max_files {
                rejected.push(UploadRejection::TooMany {
                    file: path.display().to_string(),
                    limit: self.max_files,
                });
                continue;
            }

            match UploadCandidate::inspect(path) {
                Ok(candidate) => match self.validate(&candidate) {
                    Ok(()) => accepted.push(candidate),
                    Err(rejection) => rejected.push(rejection),
                },
                Err(rejection) => rejected.push(rejection),
            }
        }

        (accepted, rejected)
    }
}
