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


//! Report commands: running-time table, scaling series, raw dump.

use crate::commands::{self, PolicyKind, PolicyOverride, ScalingRequest, Source, TableRequest};
use crate::error::CliError;
use crate::reporters::OutputFormat;
use clap::{Subcommand, ValueEnum};
use critab_core::{ScalingView, SeriesOrder};
use std::path::PathBuf;

/// Series order on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Configured scheme order, then marker order
    Canonical,
    /// Lexicographic by label
    Natural,
}

impl From<OrderArg> for SeriesOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Canonical => SeriesOrder::Canonical,
            OrderArg::Natural => SeriesOrder::Natural,
        }
    }
}

/// Report commands.
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Print the benchmark x series table of mean running times
    ///
    /// Reads `<group>/<parameterization>/base/estimates.json` for every
    /// known scheme and benchmark under ROOT. Fails without output if any
    /// selected estimate is missing or malformed.
    Table {
        /// Criterion output directory [default: target/criterion]
        #[arg(value_name = "ROOT")]
        root: Option<PathBuf>,

        /// YAML configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Filter policy (inferred from --marker/--markers when omitted)
        #[arg(long, value_enum)]
        policy: Option<PolicyKind>,

        /// Marker substring for the single policy
        #[arg(long, value_name = "MARKER")]
        marker: Option<String>,

        /// Marker substrings for the labeled policy
        #[arg(long, value_name = "MARKERS", value_delimiter = ',')]
        markers: Vec<String>,

        /// Keep parameterizations without any marker (labeled policy)
        #[arg(long)]
        include_unmarked: bool,

        /// Series order within a benchmark
        #[arg(long, value_enum)]
        order: Option<OrderArg>,

        /// Skip malformed directory names instead of failing
        #[arg(long)]
        lenient: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::All)]
        format: OutputFormat,

        /// Fixed number of decimals
        #[arg(short, long)]
        precision: Option<usize>,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print running time against the numeric parameter of each run
    ///
    /// With --scheme, one series per benchmark of that scheme. With
    /// --benchmark, one series per scheme.
    Scaling {
        /// Criterion output directory [default: target/criterion]
        #[arg(value_name = "ROOT")]
        root: Option<PathBuf>,

        /// YAML configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Chart one scheme
        #[arg(long, conflicts_with = "benchmark", required_unless_present = "benchmark")]
        scheme: Option<String>,

        /// Chart one benchmark across schemes
        #[arg(long)]
        benchmark: Option<String>,

        /// Only parameterizations whose name starts with the scheme
        #[arg(long, requires = "scheme")]
        prefix: bool,

        /// Skip malformed directory names instead of failing
        #[arg(long)]
        lenient: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::All)]
        format: OutputFormat,

        /// Fixed number of decimals
        #[arg(short, long)]
        precision: Option<usize>,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print every raw estimate document as one JSON object
    Dump {
        /// Criterion output directory [default: target/criterion]
        #[arg(value_name = "ROOT")]
        root: Option<PathBuf>,

        /// YAML configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl ReportCommands {
    /// Run the report command.
    ///
    /// # Errors
    ///
    /// Returns `Err` on invalid options or any read, aggregation or write
    /// failure.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ReportCommands::Table {
                root,
                config,
                policy,
                marker,
                markers,
                include_unmarked,
                order,
                lenient,
                format,
                precision,
                output,
            } => commands::table(&TableRequest {
                source: Source {
                    root,
                    config,
                    lenient,
                },
                policy: PolicyOverride {
                    kind: policy,
                    marker,
                    markers,
                    include_unmarked,
                },
                order: order.map(SeriesOrder::from),
                format,
                precision,
                output,
            }),
            ReportCommands::Scaling {
                root,
                config,
                scheme,
                benchmark,
                prefix,
                lenient,
                format,
                precision,
                output,
            } => {
                let view = match (scheme, benchmark) {
                    (Some(scheme), None) => ScalingView::PerScheme {
                        scheme,
                        prefix_required: prefix,
                    },
                    (None, Some(benchmark)) => ScalingView::PerBenchmark { benchmark },
                    _ => {
                        return Err(CliError::invalid_input(
                            "scaling needs exactly one of --scheme or --benchmark",
                        ))
                    }
                };
                commands::scaling(&ScalingRequest {
                    source: Source {
                        root,
                        config,
                        lenient,
                    },
                    view,
                    format,
                    precision,
                    output,
                })
            }
            ReportCommands::Dump {
                root,
                config,
                pretty,
                output,
            } => commands::dump(
                &Source {
                    root,
                    config,
                    lenient: false,
                },
                pretty,
                output.as_deref(),
            ),
        }
    }
}
