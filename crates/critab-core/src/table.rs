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

//! Immutable benchmark x series tables.
//!
//! A table is built in one go from a list of [`Sample`]s and never changes
//! afterwards. Each (benchmark, series) cell is backed by exactly one file;
//! a second sample for the same cell is rejected.

use crate::error::{AggregateError, Result};
use crate::grid::{Grid, GridRow};
use crate::policy::{Marker, SeriesLabel};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::PathBuf;

/// How series are ordered inside a benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesOrder {
    /// Known scheme order, then marker order.
    #[default]
    Canonical,
    /// Lexicographic order of the rendered label.
    Natural,
}

/// Comparator for series labels.
#[derive(Debug, Clone, Default)]
pub struct SeriesRanking {
    order: SeriesOrder,
    schemes: Vec<String>,
    markers: Vec<String>,
}

impl SeriesRanking {
    /// Rank labels by `order`, using `schemes` and `markers` for canonical order.
    pub fn new(order: SeriesOrder, schemes: &[String], markers: &[String]) -> Self {
        Self {
            order,
            schemes: schemes.to_vec(),
            markers: markers.iter().map(|m| m.trim().to_string()).collect(),
        }
    }

    /// The configured order.
    pub fn order(&self) -> SeriesOrder {
        self.order
    }

    /// Compare two labels.
    pub fn compare(&self, a: &SeriesLabel, b: &SeriesLabel) -> Ordering {
        match self.order {
            SeriesOrder::Natural => a.to_string().cmp(&b.to_string()),
            SeriesOrder::Canonical => self
                .canonical_key(a)
                .cmp(&self.canonical_key(b))
                .then_with(|| a.to_string().cmp(&b.to_string())),
        }
    }

    fn canonical_key(&self, label: &SeriesLabel) -> (usize, usize) {
        let scheme = self
            .schemes
            .iter()
            .position(|s| s == label.scheme())
            .unwrap_or(self.schemes.len());
        let marker = match label.marker() {
            None => 0,
            Some(Marker::Recognised(m)) => self
                .markers
                .iter()
                .position(|k| k == m)
                .map_or(self.markers.len() + 1, |i| i + 1),
            Some(Marker::Implicit) => self.markers.len() + 2,
        };
        (scheme, marker)
    }
}

/// One accepted estimate, ready to be placed in a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Benchmark (table column).
    pub benchmark: String,
    /// Series (table row).
    pub series: SeriesLabel,
    /// Scaled timing value.
    pub value: f64,
    /// File the value was read from.
    pub source: PathBuf,
}

/// A table cell with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Series label.
    pub series: SeriesLabel,
    /// Scaled timing value.
    pub value: f64,
    /// File the value was read from.
    pub source: PathBuf,
}

/// All cells of one benchmark, in series order.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRow {
    /// Benchmark name.
    pub benchmark: String,
    /// Cells in series order.
    pub cells: Vec<Cell>,
}

/// Mapping benchmark -> series -> timing.
///
/// Benchmarks appear in the order they were configured; benchmarks without
/// any sample are left out.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedTable {
    rows: Vec<BenchmarkRow>,
    series: Vec<SeriesLabel>,
}

impl AggregatedTable {
    /// Fold samples into a table.
    ///
    /// Samples for benchmarks outside `benchmarks` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AggregateError::FilterAmbiguity`] when two samples target the
    /// same (benchmark, series) cell.
    pub fn from_samples<I>(benchmarks: &[String], ranking: &SeriesRanking, samples: I) -> Result<Self>
    where
        I: IntoIterator<Item = Sample>,
    {
        let columns = samples.into_iter().try_fold(
            vec![Vec::<Cell>::new(); benchmarks.len()],
            |mut columns, sample| {
                let Some(idx) = benchmarks.iter().position(|b| *b == sample.benchmark) else {
                    tracing::debug!(benchmark = %sample.benchmark, "ignoring sample for unlisted benchmark");
                    return Ok(columns);
                };
                if let Some(existing) = columns[idx].iter().find(|c| c.series == sample.series) {
                    return Err(AggregateError::FilterAmbiguity {
                        benchmark: sample.benchmark,
                        series: sample.series.to_string(),
                        first: existing.source.clone(),
                        second: sample.source,
                    });
                }
                columns[idx].push(Cell {
                    series: sample.series,
                    value: sample.value,
                    source: sample.source,
                });
                Ok(columns)
            },
        )?;

        let rows = benchmarks
            .iter()
            .zip(columns)
            .filter(|(_, cells)| !cells.is_empty())
            .map(|(benchmark, cells)| BenchmarkRow {
                benchmark: benchmark.clone(),
                cells,
            })
            .collect();

        Ok(Self::sorted(rows, ranking))
    }

    fn sorted(mut rows: Vec<BenchmarkRow>, ranking: &SeriesRanking) -> Self {
        for row in &mut rows {
            row.cells.sort_by(|a, b| ranking.compare(&a.series, &b.series));
        }

        let mut series: Vec<SeriesLabel> = Vec::new();
        for cell in rows.iter().flat_map(|r| r.cells.iter()) {
            if !series.contains(&cell.series) {
                series.push(cell.series.clone());
            }
        }
        series.sort_by(|a, b| ranking.compare(a, b));

        Self { rows, series }
    }

    /// Rows in benchmark order.
    pub fn rows(&self) -> &[BenchmarkRow] {
        &self.rows
    }

    /// Benchmarks present in the table, in configured order.
    pub fn benchmarks(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.benchmark.as_str()).collect()
    }

    /// Every series present in any benchmark, in ranking order.
    pub fn series(&self) -> &[SeriesLabel] {
        &self.series
    }

    /// Look up a cell.
    pub fn get(&self, benchmark: &str, series: &SeriesLabel) -> Option<f64> {
        self.cell(benchmark, |c| c.series == *series).map(|c| c.value)
    }

    /// Look up a cell by rendered series label (e.g. `"mod-priv-64"`).
    pub fn get_by_label(&self, benchmark: &str, label: &str) -> Option<f64> {
        self.cell(benchmark, |c| c.series.to_string() == label)
            .map(|c| c.value)
    }

    fn cell(&self, benchmark: &str, pred: impl Fn(&Cell) -> bool) -> Option<&Cell> {
        self.rows
            .iter()
            .find(|r| r.benchmark == benchmark)
            .and_then(|r| r.cells.iter().find(|c| pred(c)))
    }

    /// Number of filled cells.
    pub fn len(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).sum()
    }

    /// Whether the table has no cells.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Presentation view: rows = series, columns = benchmarks.
    pub fn to_grid(&self, title: impl Into<String>) -> Grid {
        let columns: Vec<String> = self.rows.iter().map(|r| r.benchmark.clone()).collect();
        let rows = self
            .series
            .iter()
            .map(|series| GridRow {
                label: series.to_string(),
                values: self
                    .rows
                    .iter()
                    .map(|r| {
                        r.cells
                            .iter()
                            .find(|c| c.series == *series)
                            .map(|c| c.value)
                    })
                    .collect(),
            })
            .collect();

        Grid {
            title: title.into(),
            corner: String::new(),
            columns,
            rows,
        }
    }
}
