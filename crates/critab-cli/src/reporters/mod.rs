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

//! Output formats for tables.
//!
//! - `text`: aligned columns
//! - `csv`: via `critab-csv`
//! - `markdown`: GitHub table
//! - `json`: grid plus provenance
//! - `all`: text table then CSV, each under a banner

pub mod console;
pub mod json;
pub mod markdown;

use crate::error::CliError;
use clap::ValueEnum;
use critab_core::Grid;
use critab_csv::{grid_to_csv, ToCsvConfig};
use std::fmt;
use std::path::Path;

pub use console::{render_sections, render_text};
pub use json::render_json;
pub use markdown::render_markdown;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    Text,
    /// Comma-separated values
    Csv,
    /// Markdown table
    Markdown,
    /// JSON document
    Json,
    /// Text table followed by CSV
    #[default]
    All,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
            OutputFormat::All => "all",
        };
        f.write_str(name)
    }
}

/// Render `grid` in `format`. `root` is recorded in JSON output.
pub fn render(
    grid: &Grid,
    format: OutputFormat,
    precision: Option<usize>,
    root: &Path,
) -> Result<String, CliError> {
    let csv_config = ToCsvConfig {
        precision,
        ..Default::default()
    };
    match format {
        OutputFormat::Text => Ok(render_text(grid, precision)),
        OutputFormat::Csv => Ok(grid_to_csv(grid, csv_config)?),
        OutputFormat::Markdown => Ok(render_markdown(grid, precision)),
        OutputFormat::Json => render_json(grid, root),
        OutputFormat::All => {
            let text = render_text(grid, precision);
            let csv = grid_to_csv(grid, csv_config)?;
            Ok(render_sections(grid, &text, &csv))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use critab_core::GridRow;

    fn grid() -> Grid {
        Grid {
            title: "Running times (ms)".into(),
            corner: String::new(),
            columns: vec!["send".into()],
            rows: vec![GridRow {
                label: "basic".into(),
                values: vec![Some(2500.0)],
            }],
        }
    }

    #[test]
    fn test_render_csv() {
        let out = render(&grid(), OutputFormat::Csv, None, Path::new(".")).unwrap();
        assert_eq!(out, ",send\nbasic,2500.0\n");
    }

    #[test]
    fn test_render_all_has_both_sections() {
        let out = render(&grid(), OutputFormat::All, None, Path::new(".")).unwrap();
        assert!(out.contains("Running times (ms)"));
        assert!(out.contains("CSV output"));
        assert!(out.ends_with(",send\nbasic,2500.0\n"));
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::default().to_string(), "all");
        assert_eq!(OutputFormat::from_str("markdown", true).unwrap(), OutputFormat::Markdown);
    }
}
