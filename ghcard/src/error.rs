#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the card pipeline."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.
//!
//! Aggregation and language distribution are total functions and never
//! produce any of these variants.

use std::path::{Path, PathBuf};

/// Unified error type returned by the resolver, the GitHub client and the
/// CLI.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Required upstream credentials are absent or unusable.
    #[error("configuration error: {message}")]
    Configuration {
        /// Human readable message describing the missing setting.
        message: String
    },
    /// No repository, user or organization matched the identifier.
    #[error("not found: {message}")]
    NotFound {
        /// Message reported by the upstream source.
        message: String
    },
    /// Transport or API failure other than a missing entity.
    #[error("upstream error: {message}")]
    Upstream {
        /// Message reported by the upstream source.
        message: String
    },
    /// Returned when caller input violates invariants.
    #[error("invalid input: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Wraps I/O errors that occur while reading batch documents.
    #[error("failed to read batch document from {path:?}: {source}")]
    Io {
        /// Location of the batch document.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors.
    #[error("failed to parse batch document: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Wraps serialization errors when writing card output.
    #[error("failed to serialize card data: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    }
}

impl Error {
    /// Constructs a configuration error from the provided message.
    pub fn configuration<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Configuration {
            message: message.into()
        }
    }

    /// Constructs a not-found error from the provided message.
    pub fn not_found<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::NotFound {
            message: message.into()
        }
    }

    /// Constructs an upstream error carrying the upstream message verbatim.
    pub fn upstream<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Upstream {
            message: message.into()
        }
    }

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

    /// Returns `true` when the error reports a missing entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// HTTP status a request handler should answer with for this error.
    ///
    /// ```
    /// use ghcard::Error;
    ///
    /// assert_eq!(Error::not_found("nobody").http_status(), 404);
    /// assert_eq!(Error::upstream("bad gateway").http_status(), 502);
    /// ```
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::NotFound { .. } => 404,
            Self::Upstream { .. } => 502,
            Self::Configuration { .. }
            | Self::Io { .. }
            | Self::Parse { .. }
            | Self::Serialize { .. } => 500
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// The returned string matches the [`std::fmt::Display`] implementation.
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

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source
        }
    }
}

impl From<octocrab::Error> for Error {
    fn from(error: octocrab::Error) -> Self {
        Self::Upstream {
            message: error.to_string()
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the batch document that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}
