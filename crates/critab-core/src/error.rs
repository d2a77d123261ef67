// Critab - Criterion result tables
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for result aggregation.
//!
//! Every failure carries the path or name that caused it so the command-line
//! front end can abort with a message pointing at the offending entry.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for aggregation operations.
pub type Result<T> = std::result::Result<T, AggregateError>;

/// Errors raised while turning a Criterion output tree into a table.
///
/// # Examples
///
/// ```
/// use critab_core::AggregateError;
///
/// let err = AggregateError::MalformedName {
///     name: "gamal-enc".to_string(),
///     reason: "missing '.' separator".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "Malformed result directory name 'gamal-enc': missing '.' separator"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregateError {
    /// The root directory (or a required subpath) does not exist.
    #[error("Path not found: {}", path.display())]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// A result directory name does not follow `<scheme>.<benchmark>(<args>)`.
    #[error("Malformed result directory name '{name}': {reason}")]
    MalformedName {
        /// The offending directory name.
        name: String,
        /// Which part of the grammar was violated.
        reason: String,
    },

    /// An accepted parameterization has no `base/estimates.json`.
    #[error("Missing estimate file: {}", path.display())]
    MissingEstimate {
        /// The expected file path.
        path: PathBuf,
    },

    /// The estimate file exists but does not hold a usable mean point estimate.
    #[error("Malformed estimate file {}: {reason}", path.display())]
    MalformedEstimate {
        /// The estimate file path.
        path: PathBuf,
        /// What was wrong with the content.
        reason: String,
    },

    /// Two accepted files map onto the same table cell.
    #[error(
        "Ambiguous result for benchmark '{benchmark}', series '{series}': both {} and {} match",
        first.display(),
        second.display()
    )]
    FilterAmbiguity {
        /// Benchmark (or scale) of the contested cell.
        benchmark: String,
        /// Series label of the contested cell.
        series: String,
        /// First file that claimed the cell.
        first: PathBuf,
        /// Second file that claimed the cell.
        second: PathBuf,
    },

    /// Any other I/O failure while listing directories or reading files.
    #[error("I/O error for '{}': {message}", path.display())]
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name.
        parameter: String,
        /// Reason for invalidity.
        reason: String,
    },
}

impl AggregateError {
    /// Create an I/O error with path context, mapping `NotFound` to the
    /// dedicated variant.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            return Self::NotFound { path };
        }
        Self::Io {
            path,
            message: source.to_string(),
        }
    }

    /// Create a malformed-name error.
    pub fn malformed_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed-estimate error.
    pub fn malformed_estimate(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedEstimate {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// The filesystem path this error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::NotFound { path }
            | Self::MissingEstimate { path }
            | Self::MalformedEstimate { path, .. }
            | Self::Io { path, .. } => Some(path),
            Self::FilterAmbiguity { second, .. } => Some(second),
            Self::MalformedName { .. } | Self::InvalidConfig { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_not_found_maps_to_not_found() {
        let err = AggregateError::io_error(
            "/missing/root",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(
            err,
            AggregateError::NotFound {
                path: PathBuf::from("/missing/root")
            }
        );
    }

    #[test]
    fn test_io_error_other_kind() {
        let err = AggregateError::io_error(
            "/locked",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, AggregateError::Io { .. }));
        assert!(err.to_string().contains("/locked"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_display_names_path() {
        let err = AggregateError::MissingEstimate {
            path: PathBuf::from("root/basic.send()/64/base/estimates.json"),
        };
        assert!(err.to_string().contains("basic.send()/64/base/estimates.json"));
        assert_eq!(
            err.path(),
            Some(std::path::Path::new("root/basic.send()/64/base/estimates.json"))
        );
    }

    #[test]
    fn test_ambiguity_display() {
        let err = AggregateError::FilterAmbiguity {
            benchmark: "send".to_string(),
            series: "basic".to_string(),
            first: PathBuf::from("a"),
            second: PathBuf::from("b"),
        };
        let msg = err.to_string();
        assert!(msg.contains("'send'"));
        assert!(msg.contains("'basic'"));
        assert!(msg.contains("both a and b"));
    }

    #[test]
    fn test_name_errors_have_no_path() {
        let err = AggregateError::malformed_name("x", "y");
        assert!(err.path().is_none());
    }
}
