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

//! Structured error types for the critab CLI.
//!
//! Every command returns `Result<(), CliError>`; `main` prints the message
//! and exits with a failure status.

use critab_core::AggregateError;
use critab_csv::CsvError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for critab CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use critab_cli::error::CliError;
///
/// fn write(path: &str, content: &str) -> Result<(), CliError> {
///     std::fs::write(path, content).map_err(|e| CliError::io_error(path, e))?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum CliError {
    /// Writing output failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Reading or aggregating the Criterion output failed. The message names
    /// the offending path.
    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    /// CSV rendering failed.
    #[error("CSV output error: {0}")]
    Csv(#[from] CsvError),

    /// JSON serialization error.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// Inconsistent command-line arguments.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// I/O error with the path it occurred on.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Invalid argument combination.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}
