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

//! Aligned plain-text tables.

use critab_core::{format_value, Grid};

/// Placeholder for a missing cell.
pub const MISSING: &str = "-";

/// Renders a grid as an aligned text table.
///
/// The label column is left-aligned, value columns are right-aligned.
pub fn render_text(grid: &Grid, precision: Option<usize>) -> String {
    let cells: Vec<Vec<String>> = grid
        .rows
        .iter()
        .map(|row| {
            row.values
                .iter()
                .map(|v| v.map_or_else(|| MISSING.to_string(), |v| format_value(v, precision)))
                .collect()
        })
        .collect();

    let label_width = grid
        .rows
        .iter()
        .map(|r| r.label.chars().count())
        .chain(std::iter::once(grid.corner.chars().count()))
        .max()
        .unwrap_or(0);

    let widths: Vec<usize> = grid
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(col.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&format!("{:<w$}", grid.corner, w = label_width));
    for (col, w) in grid.columns.iter().zip(&widths) {
        out.push_str(&format!("  {:>w$}", col, w = *w));
    }
    out.push('\n');

    for (row, values) in grid.rows.iter().zip(&cells) {
        out.push_str(&format!("{:<w$}", row.label, w = label_width));
        for (value, w) in values.iter().zip(&widths) {
            out.push_str(&format!("  {:>w$}", value, w = *w));
        }
        out.push('\n');
    }
    out
}

/// Section header in the style of the report banners.
pub fn section(title: &str) -> String {
    format!("{}\n{}\n{}\n", "=".repeat(80), title, "=".repeat(80))
}

/// Text table followed by its CSV rendering, each under a banner.
pub fn render_sections(grid: &Grid, text: &str, csv: &str) -> String {
    let mut out = String::new();
    out.push_str(&section(&grid.title));
    out.push_str(text);
    out.push('\n');
    out.push_str(&section("CSV output"));
    out.push_str(csv);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use critab_core::GridRow;

    fn grid() -> Grid {
        Grid {
            title: "Running times (ms)".into(),
            corner: String::new(),
            columns: vec!["send".into(), "moderate".into()],
            rows: vec![
                GridRow {
                    label: "const-mod-priv".into(),
                    values: vec![Some(2500.0), Some(12.25)],
                },
                GridRow {
                    label: "plain".into(),
                    values: vec![Some(1.5), None],
                },
            ],
        }
    }

    #[test]
    fn test_render_text_alignment() {
        let text = render_text(&grid(), None);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "                  send  moderate");
        assert_eq!(lines[1], "const-mod-priv  2500.0     12.25");
        assert_eq!(lines[2], "plain              1.5         -");
    }

    #[test]
    fn test_render_text_precision() {
        let text = render_text(&grid(), Some(2));
        assert!(text.contains("2500.00"));
        assert!(text.contains("1.50"));
    }

    #[test]
    fn test_sections() {
        let out = render_sections(&grid(), "TEXT\n", "CSV\n");
        assert!(out.starts_with(&"=".repeat(80)));
        assert!(out.contains("Running times (ms)\n"));
        assert!(out.contains("CSV output\n"));
        assert!(out.find("TEXT").unwrap() < out.find("CSV\n").unwrap());
    }
}
