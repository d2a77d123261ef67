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


//! Scaling command - timing against the numeric parameter of each run

use super::{write_output, Source};
use crate::error::CliError;
use crate::reporters::{render, OutputFormat};
use critab_core::{collect_scaling, ScalingView};
use std::path::PathBuf;
use tracing::{info, warn};

/// Everything the scaling command needs.
#[derive(Debug, Clone)]
pub struct ScalingRequest {
    /// Where to read from.
    pub source: Source,
    /// Which slice of the tree to chart.
    pub view: ScalingView,
    /// Output format.
    pub format: OutputFormat,
    /// Fixed number of decimals.
    pub precision: Option<usize>,
    /// Output file (stdout when absent).
    pub output: Option<PathBuf>,
}

/// Collect a scaling table and print it.
///
/// Rows are scale values in ascending order, columns are the series of
/// the selected view.
///
/// # Errors
///
/// Returns `Err` on configuration, read, rendering or write failures, and
/// when two parameterizations land on the same point.
pub fn scaling(request: &ScalingRequest) -> Result<(), CliError> {
    let config = request.source.load()?;
    let table = collect_scaling(&config.root, &config.options, &request.view)?;
    if table.is_empty() {
        warn!(view = %request.view, "no parameterization with a numeric scale");
    }
    info!(points = table.xs().len(), series = table.series().len(), "collected {}", table.title());

    let grid = table.to_grid();
    let rendered = render(&grid, request.format, request.precision, &config.root)?;
    write_output(&rendered, request.output.as_deref())
}
