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

//! Two-dimensional view shared by every renderer.

use serde::Serialize;

/// A labelled grid of optional values, ready for rendering.
///
/// Absent cells stay `None`; renderers print them blank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    /// Title of the grid (used as a heading by text renderers).
    pub title: String,
    /// Header of the row-label column (may be empty).
    pub corner: String,
    /// Column headers.
    pub columns: Vec<String>,
    /// Rows as (label, one value per column).
    pub rows: Vec<GridRow>,
}

/// One row of a [`Grid`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridRow {
    /// Row label.
    pub label: String,
    /// One entry per column.
    pub values: Vec<Option<f64>>,
}

impl Grid {
    /// Look up a value by row label and column header.
    pub fn value(&self, row: &str, column: &str) -> Option<f64> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows
            .iter()
            .find(|r| r.label == row)
            .and_then(|r| r.values.get(col).copied().flatten())
    }

    /// Row labels in order.
    pub fn row_labels(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.label.as_str()).collect()
    }

    /// Whether the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Format a table value.
///
/// With `precision` the value is printed with that many decimals. Without it,
/// whole numbers keep one decimal (`2500.0`) and other values use the
/// shortest representation that round-trips.
///
/// # Examples
///
/// ```
/// use critab_core::format_value;
///
/// assert_eq!(format_value(2500.0, None), "2500.0");
/// assert_eq!(format_value(1.999, None), "1.999");
/// assert_eq!(format_value(1.999, Some(1)), "2.0");
/// ```
pub fn format_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, value),
        None if value.fract() == 0.0 && value.is_finite() => format!("{:.1}", value),
        None => format!("{}", value),
    }
}
