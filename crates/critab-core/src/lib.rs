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

//! Criterion point estimates → benchmark tables.
//!
//! Criterion writes one directory per benchmark group and one subdirectory
//! per parameterization:
//!
//! ```text
//! target/criterion/
//! ├── report/
//! ├── basic.send()/
//! │   └── Sent message of size 100 with 64 moderators/
//! │       └── base/estimates.json
//! └── plain.send()/
//!     └── plain.send() message of size 100/
//!         └── base/estimates.json
//! ```
//!
//! This crate decodes the group names as `<scheme>.<benchmark>(<args>)`,
//! selects parameterizations with a [`FilterPolicy`], and folds the mean
//! point estimates into an immutable [`AggregatedTable`].
//!
//! # Features
//!
//! - **Explicit name grammar**: [`ResultName::parse`] with typed errors
//! - **Filter policies**: single marker, labeled markers, or unfiltered
//! - **Scaling tables**: timing against the numeric parameter of each run
//! - **Raw dump**: every estimate document keyed by parameterization
//! - **YAML configuration**: [`ReportConfig`] with published-table defaults
//!
//! # Examples
//!
//! ```no_run
//! use critab_core::{aggregate, ReportConfig};
//!
//! let config = ReportConfig::default();
//! let table = aggregate(&config.root, &config.options).unwrap();
//! let grid = table.to_grid("Running times");
//! for row in &grid.rows {
//!     println!("{}: {:?}", row.label, row.values);
//! }
//! ```
//!
//! ## Scaling
//!
//! ```no_run
//! use critab_core::{collect_scaling, AggregateOptions, ScalingView};
//! use std::path::Path;
//!
//! let view = ScalingView::PerBenchmark { benchmark: "process".to_string() };
//! let table = collect_scaling(Path::new("target/criterion"), &AggregateOptions::default(), &view).unwrap();
//! for x in table.xs() {
//!     println!("{} moderators: {:?}", x, table.get(x, "basic"));
//! }
//! ```

mod aggregate;
mod config;
mod dump;
mod error;
mod estimate;
mod grid;
mod name;
mod param;
mod policy;
mod scaling;
mod scan;
mod table;

// Re-export public API
pub use aggregate::{aggregate, read_samples};
pub use config::{AggregateOptions, ReportConfig, DEFAULT_BENCHMARKS, DEFAULT_ROOT, DEFAULT_SCHEMES};
pub use dump::dump_estimates;
pub use error::{AggregateError, Result};
pub use estimate::{
    estimate_path, read_json, EstimateRecord, BASELINE_DIR, ESTIMATES_FILE, NANOS_PER_TABLE_UNIT,
};
pub use grid::{format_value, Grid, GridRow};
pub use name::ResultName;
pub use param::{Parameterization, PLAIN_TOKEN, REPORT_DIR};
pub use policy::{FilterPolicy, Marker, SeriesLabel, DEFAULT_MARKER, IMPLICIT_MARKER};
pub use scaling::{collect_scaling, ScalingPoint, ScalingTable, ScalingView};
pub use scan::{list_dirs, result_dirs, scan, EstimateSource};
pub use table::{AggregatedTable, BenchmarkRow, Cell, Sample, SeriesOrder, SeriesRanking};
