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

//! Error types for CSV rendering.

use thiserror::Error;

/// CSV rendering error types.
///
/// # Examples
///
/// ```
/// use critab_csv::CsvError;
///
/// let err = CsvError::WidthMismatch {
///     expected: 5,
///     actual: 3,
///     row: "basic".to_string(),
/// };
/// assert!(err.to_string().contains("expected 5 columns"));
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// A grid row does not have one value per column.
    #[error("Row width mismatch: expected {expected} columns, got {actual} in row '{row}'")]
    WidthMismatch {
        /// Number of columns.
        expected: usize,
        /// Number of values in the row.
        actual: usize,
        /// Label of the offending row.
        row: String,
    },

    /// I/O error while writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),

    /// Invalid UTF-8 in CSV output.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// Context where the invalid UTF-8 was encountered.
        context: String,
    },
}

/// Convenience type alias for `Result` with `CsvError`.
pub type Result<T> = std::result::Result<T, CsvError>;
