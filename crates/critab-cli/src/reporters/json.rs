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

//! JSON export for tables.

use crate::error::CliError;
use chrono::{SecondsFormat, Utc};
use critab_core::Grid;
use serde::Serialize;
use std::path::Path;

/// Unit of every table value.
pub const UNIT: &str = "ms";

/// JSON document wrapping a grid with provenance.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// Grid title.
    pub title: &'a str,
    /// RFC 3339 generation time.
    pub generated_at: String,
    /// Criterion output directory the values were read from.
    pub root: String,
    /// Value unit.
    pub unit: &'static str,
    /// Column headers.
    pub columns: &'a [String],
    /// Rows; missing cells are `null`.
    pub rows: &'a [critab_core::GridRow],
}

impl<'a> JsonReport<'a> {
    /// Wrap `grid`, stamped with the current time.
    pub fn new(grid: &'a Grid, root: &Path) -> Self {
        Self {
            title: &grid.title,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            root: root.display().to_string(),
            unit: UNIT,
            columns: &grid.columns,
            rows: &grid.rows,
        }
    }
}

/// Renders a grid as pretty-printed JSON.
pub fn render_json(grid: &Grid, root: &Path) -> Result<String, CliError> {
    let mut json = serde_json::to_string_pretty(&JsonReport::new(grid, root))?;
    json.push('\n');
    Ok(json)
}
