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

//! Scaling series: timing as a function of a numeric parameter.
//!
//! The x value of a point is [`Parameterization::scale`], e.g. the moderator
//! count in `Processed message of size 100 with 16 moderators`.

use crate::config::AggregateOptions;
use crate::error::{AggregateError, Result};
use crate::estimate::{estimate_path, EstimateRecord};
use crate::grid::{Grid, GridRow};
use crate::param::Parameterization;
use crate::scan::{list_dirs, result_dirs};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Which slice of the result tree to chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalingView {
    /// One scheme, one series per benchmark.
    PerScheme {
        /// Scheme to chart.
        scheme: String,
        /// Only accept parameterizations whose name starts with the scheme.
        prefix_required: bool,
    },
    /// One benchmark, one series per known scheme.
    PerBenchmark {
        /// Benchmark to chart.
        benchmark: String,
    },
}

impl fmt::Display for ScalingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingView::PerScheme { scheme, .. } => write!(f, "{} scaling", scheme),
            ScalingView::PerBenchmark { benchmark } => write!(f, "{} scaling", benchmark),
        }
    }
}

/// One measured point.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingPoint {
    /// Numeric parameter.
    pub x: u64,
    /// Series name (benchmark or scheme).
    pub series: String,
    /// Scaled timing value.
    pub value: f64,
    /// File the value was read from.
    pub source: PathBuf,
}

/// Points grouped by x, ascending, with series in configured order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingTable {
    title: String,
    series: Vec<String>,
    points: BTreeMap<u64, Vec<Option<f64>>>,
}

impl ScalingTable {
    /// Fold points into a table. Series not listed in `series_order` are
    /// ignored; listed series without any point are dropped.
    ///
    /// # Errors
    ///
    /// [`AggregateError::FilterAmbiguity`] if two points share (x, series).
    pub fn from_points<I>(title: impl Into<String>, series_order: &[String], points: I) -> Result<Self>
    where
        I: IntoIterator<Item = ScalingPoint>,
    {
        let mut sources: BTreeMap<(u64, usize), PathBuf> = BTreeMap::new();
        let filled = points.into_iter().try_fold(
            BTreeMap::<u64, Vec<Option<f64>>>::new(),
            |mut filled, point| {
                let Some(idx) = series_order.iter().position(|s| *s == point.series) else {
                    return Ok(filled);
                };
                if let Some(first) = sources.get(&(point.x, idx)) {
                    return Err(AggregateError::FilterAmbiguity {
                        benchmark: point.series,
                        series: format!("scale {}", point.x),
                        first: first.clone(),
                        second: point.source,
                    });
                }
                sources.insert((point.x, idx), point.source);
                filled.entry(point.x).or_insert_with(|| vec![None; series_order.len()])[idx] =
                    Some(point.value);
                Ok(filled)
            },
        )?;

        let keep: Vec<usize> = (0..series_order.len())
            .filter(|&i| filled.values().any(|row| row[i].is_some()))
            .collect();

        Ok(Self {
            title: title.into(),
            series: keep.iter().map(|&i| series_order[i].clone()).collect(),
            points: filled
                .into_iter()
                .map(|(x, row)| (x, keep.iter().map(|&i| row[i]).collect()))
                .collect(),
        })
    }

    /// Table title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Series present, in order.
    pub fn series(&self) -> &[String] {
        &self.series
    }

    /// x values, ascending.
    pub fn xs(&self) -> Vec<u64> {
        self.points.keys().copied().collect()
    }

    /// Value of `series` at `x`.
    pub fn get(&self, x: u64, series: &str) -> Option<f64> {
        let idx = self.series.iter().position(|s| s == series)?;
        self.points.get(&x).and_then(|row| row[idx])
    }

    /// Whether there are no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Presentation view: rows = x values, columns = series.
    pub fn to_grid(&self) -> Grid {
        Grid {
            title: self.title.clone(),
            corner: String::new(),
            columns: self.series.clone(),
            rows: self
                .points
                .iter()
                .map(|(x, values)| GridRow {
                    label: x.to_string(),
                    values: values.clone(),
                })
                .collect(),
        }
    }
}

/// Collect a scaling table.
///
/// Parameterizations without a numeric scale are skipped; the `report`
/// directory is never read.
pub fn collect_scaling(root: &Path, options: &AggregateOptions, view: &ScalingView) -> Result<ScalingTable> {
    options.validate()?;

    let mut points = Vec::new();
    for (name, dir) in result_dirs(root, options.strict_names)? {
        let (series, prefix) = match view {
            ScalingView::PerScheme {
                scheme,
                prefix_required,
            } => {
                if name.scheme() != scheme || !options.knows_benchmark(name.benchmark()) {
                    continue;
                }
                (name.benchmark(), prefix_required.then_some(scheme.as_str()))
            }
            ScalingView::PerBenchmark { benchmark } => {
                if name.benchmark() != benchmark || !options.knows_scheme(name.scheme()) {
                    continue;
                }
                (name.scheme(), None)
            }
        };

        for (param_name, param_dir) in list_dirs(&dir)? {
            let param = Parameterization::new(param_name);
            if param.is_report() {
                continue;
            }
            if let Some(prefix) = prefix {
                if !param.name().starts_with(prefix) {
                    debug!(param = param.name(), "parameterization lacks scheme prefix");
                    continue;
                }
            }
            let Some(x) = param.scale() else {
                debug!(param = param.name(), "parameterization has no numeric scale");
                continue;
            };
            let path = estimate_path(&param_dir);
            let record = EstimateRecord::read(&path)?;
            points.push(ScalingPoint {
                x,
                series: series.to_string(),
                value: record.table_value(),
                source: path,
            });
        }
    }

    let order = match view {
        ScalingView::PerScheme { .. } => &options.benchmarks,
        ScalingView::PerBenchmark { .. } => &options.schemes,
    };
    ScalingTable::from_points(view.to_string(), order, points)
}
