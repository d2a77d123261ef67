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

//! Table command - benchmark x series running-time table

use super::{write_output, Source};
use crate::error::CliError;
use crate::reporters::{render, OutputFormat};
use clap::ValueEnum;
use critab_core::{aggregate, FilterPolicy, SeriesOrder, DEFAULT_MARKER};
use std::path::PathBuf;
use tracing::{info, warn};

/// Title of the running-time table.
pub const TABLE_TITLE: &str = "Running times (ms)";

/// Filter policy selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// One marker; rows labelled by scheme
    Single,
    /// Several markers; rows labelled scheme-marker
    Labeled,
    /// Every parameterization; rows labelled by scheme
    Unfiltered,
}

/// Command-line adjustments to the configured filter policy.
#[derive(Debug, Clone, Default)]
pub struct PolicyOverride {
    /// Explicit policy kind.
    pub kind: Option<PolicyKind>,
    /// Marker for the single-marker policy.
    pub marker: Option<String>,
    /// Markers for the labeled policy.
    pub markers: Vec<String>,
    /// Keep unmarked parameterizations (labeled policy).
    pub include_unmarked: bool,
}

impl PolicyOverride {
    /// Combine with the configured policy.
    ///
    /// Without `kind`, `--markers` implies `labeled` and `--marker` implies
    /// `single`. Options that do not belong to the resulting policy are
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns `Err` on inconsistent options or an invalid resulting policy.
    pub fn apply(&self, current: FilterPolicy) -> Result<FilterPolicy, CliError> {
        let kind = self.kind.or(if !self.markers.is_empty() {
            Some(PolicyKind::Labeled)
        } else if self.marker.is_some() {
            Some(PolicyKind::Single)
        } else {
            None
        });

        let policy = match (kind, current) {
            (None, FilterPolicy::Labeled {
                markers,
                include_unmarked,
            }) => FilterPolicy::Labeled {
                markers,
                include_unmarked: include_unmarked || self.include_unmarked,
            },
            (None, current) => current,
            (Some(PolicyKind::Single), current) => {
                let configured = match current {
                    FilterPolicy::SingleMarker { marker } => Some(marker),
                    _ => None,
                };
                FilterPolicy::SingleMarker {
                    marker: self
                        .marker
                        .clone()
                        .or(configured)
                        .unwrap_or_else(|| DEFAULT_MARKER.to_string()),
                }
            }
            (Some(PolicyKind::Labeled), current) => {
                let (configured, configured_unmarked) = match current {
                    FilterPolicy::Labeled {
                        markers,
                        include_unmarked,
                    } => (markers, include_unmarked),
                    _ => (Vec::new(), false),
                };
                let markers = if self.markers.is_empty() {
                    configured
                } else {
                    self.markers.clone()
                };
                if markers.is_empty() {
                    return Err(CliError::invalid_input("--policy labeled requires --markers"));
                }
                FilterPolicy::Labeled {
                    markers,
                    include_unmarked: configured_unmarked || self.include_unmarked,
                }
            }
            (Some(PolicyKind::Unfiltered), _) => FilterPolicy::Unfiltered,
        };

        if self.marker.is_some() && !matches!(policy, FilterPolicy::SingleMarker { .. }) {
            return Err(CliError::invalid_input("--marker only applies to the single policy"));
        }
        if !self.markers.is_empty() && !matches!(policy, FilterPolicy::Labeled { .. }) {
            return Err(CliError::invalid_input("--markers only applies to the labeled policy"));
        }
        if self.include_unmarked && !matches!(policy, FilterPolicy::Labeled { .. }) {
            return Err(CliError::invalid_input(
                "--include-unmarked only applies to the labeled policy",
            ));
        }

        policy.validate()?;
        Ok(policy)
    }
}

/// Everything the table command needs.
#[derive(Debug, Clone, Default)]
pub struct TableRequest {
    /// Where to read from.
    pub source: Source,
    /// Policy adjustments.
    pub policy: PolicyOverride,
    /// Series order override.
    pub order: Option<SeriesOrder>,
    /// Output format.
    pub format: OutputFormat,
    /// Fixed number of decimals.
    pub precision: Option<usize>,
    /// Output file (stdout when absent).
    pub output: Option<PathBuf>,
}

/// Aggregate the Criterion output and print the running-time table.
///
/// Nothing is written when aggregation fails.
///
/// # Errors
///
/// Returns `Err` on configuration, aggregation, rendering or write failures.
pub fn table(request: &TableRequest) -> Result<(), CliError> {
    let config = request.source.load()?;
    let mut options = config.aggregate_options();
    options.policy = request.policy.apply(options.policy)?;
    if let Some(order) = request.order {
        options.order = order;
    }

    let table = aggregate(&config.root, &options)?;
    if table.is_empty() {
        warn!(root = %config.root.display(), "no estimate matched the configured schemes and benchmarks");
    }
    info!(cells = table.len(), series = table.series().len(), policy = %options.policy, "aggregated table");

    let grid = table.to_grid(TABLE_TITLE);
    let rendered = render(&grid, request.format, request.precision, &config.root)?;
    write_output(&rendered, request.output.as_deref())
}
