#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free while still
//! exposing a thoroughly documented error surface for library consumers.

use std::path::{Path, PathBuf};

/// Unified error type returned by the catalog loader, collector, and CLI.
///
/// Each variant captures sufficient context for diagnostics while avoiding
/// accidental exposure of sensitive data. Every variant is terminal for a
/// run: the pipeline performs no retries and produces no partial document.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps I/O errors that occur while reading a catalog file.
    #[error("failed to read catalog from {path:?}: {source}")]
    Catalog {
        /// Location of the catalog file.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors.
    #[error("failed to parse catalog: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Returned when the catalog violates invariants.
    #[error("invalid catalog: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Remote repository host failures: network, not-found, authentication.
    #[error("repository host error: {message}")]
    Api {
        /// Human readable message describing the host error.
        message: String
    },
    /// Wraps I/O errors that occur while writing the rendered document.
    #[error("failed to write document: {source}")]
    Render {
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    }
}

impl Error {
    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Constructs a repository host error from the provided displayable
    /// value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the host error.
    pub fn api<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Api {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// This method is primarily intended for CLI contexts where the variant
    /// name does not add value to end users. The returned string matches the
    /// [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

impl From<masterror::AppError> for Error {
    fn from(error: masterror::AppError) -> Self {
        Self::Api {
            message: error.to_string()
        }
    }
}

/// Creates an [`Error::Catalog`] variant capturing the failing path and
/// source.
///
/// # Parameters
///
/// * `path` - Location of the catalog file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn catalog_io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Catalog {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::Render`] variant capturing the failing write.
///
/// # Parameters
///
/// * `source` - I/O error reported while writing the document.
pub fn render_io_error(source: std::io::Error) -> Error {
    Error::Render {
        source
    }
}
