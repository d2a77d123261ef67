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

//! Render tables as CSV.

use crate::error::{CsvError, Result};
use critab_core::{format_value, AggregatedTable, Grid, ScalingTable};
use std::io::Write;

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Include header row (default: true)
    pub include_headers: bool,
    /// Quote style for fields (default: necessary)
    pub quote_style: csv::QuoteStyle,
    /// Fixed number of decimals; `None` keeps the shortest form (default: None)
    pub precision: Option<usize>,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
            quote_style: csv::QuoteStyle::Necessary,
            precision: None,
        }
    }
}

/// Render an aggregated table: one row per series, one column per benchmark.
///
/// # Example
/// ```no_run
/// use critab_core::{aggregate, AggregateOptions};
/// use critab_csv::to_csv;
/// use std::path::Path;
///
/// let table = aggregate(Path::new("target/criterion"), &AggregateOptions::default()).unwrap();
/// print!("{}", to_csv(&table).unwrap());
/// // ,send,process,read,report,moderate
/// // basic,2500.0,...
/// ```
pub fn to_csv(table: &AggregatedTable) -> Result<String> {
    to_csv_with_config(table, ToCsvConfig::default())
}

/// Render an aggregated table with custom configuration.
pub fn to_csv_with_config(table: &AggregatedTable, config: ToCsvConfig) -> Result<String> {
    grid_to_csv(&table.to_grid(""), config)
}

/// Render a scaling table: one row per x value, one column per series.
pub fn scaling_to_csv(table: &ScalingTable) -> Result<String> {
    scaling_to_csv_with_config(table, ToCsvConfig::default())
}

/// Render a scaling table with custom configuration.
pub fn scaling_to_csv_with_config(table: &ScalingTable, config: ToCsvConfig) -> Result<String> {
    grid_to_csv(&table.to_grid(), config)
}

/// Render any grid to a string.
pub fn grid_to_csv(grid: &Grid, config: ToCsvConfig) -> Result<String> {
    // Approximate: 12 bytes per cell
    let mut buffer = Vec::with_capacity((grid.rows.len() + 1) * (grid.columns.len() + 1) * 12);
    grid_to_csv_writer(grid, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV output".to_string(),
    })
}

/// Write a grid to `writer`.
///
/// Missing values are written as empty fields. A grid without columns
/// writes nothing.
///
/// # Errors
///
/// [`CsvError::WidthMismatch`] when a row does not have one value per column;
/// I/O and CSV errors from the writer.
pub fn grid_to_csv_writer<W: Write>(grid: &Grid, writer: W, config: ToCsvConfig) -> Result<()> {
    if grid.columns.is_empty() {
        return Ok(());
    }

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(config.quote_style)
        .from_writer(writer);

    if config.include_headers {
        let header = std::iter::once(grid.corner.as_str()).chain(grid.columns.iter().map(String::as_str));
        wtr.write_record(header)?;
    }

    for row in &grid.rows {
        if row.values.len() != grid.columns.len() {
            return Err(CsvError::WidthMismatch {
                expected: grid.columns.len(),
                actual: row.values.len(),
                row: row.label.clone(),
            });
        }
        let record = std::iter::once(row.label.clone()).chain(
            row.values
                .iter()
                .map(|v| v.map(|v| format_value(v, config.precision)).unwrap_or_default()),
        );
        wtr.write_record(record)?;
    }

    wtr.flush()?;
    Ok(())
}
