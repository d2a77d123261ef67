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

//! Markdown export for tables.

use critab_core::{format_value, Grid};

/// Renders a grid as a Markdown table under a level-2 heading.
///
/// Missing cells are left empty. Pipes in labels are escaped.
pub fn render_markdown(grid: &Grid, precision: Option<usize>) -> String {
    let mut md = String::new();

    md.push_str(&format!("## {}\n\n", grid.title));

    md.push_str(&format!("| {} |", escape(&grid.corner)));
    for col in &grid.columns {
        md.push_str(&format!(" {} |", escape(col)));
    }
    md.push('\n');

    md.push_str("|---|");
    for _ in &grid.columns {
        md.push_str("---:|");
    }
    md.push('\n');

    for row in &grid.rows {
        md.push_str(&format!("| {} |", escape(&row.label)));
        for value in &row.values {
            let cell = value.map(|v| format_value(v, precision)).unwrap_or_default();
            md.push_str(&format!(" {} |", cell));
        }
        md.push('\n');
    }

    md
}

fn escape(text: &str) -> String {
    text.replace('|', "\\|")
}
