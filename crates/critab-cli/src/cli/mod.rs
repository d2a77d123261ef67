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


//! Command-line definitions.
//!
//! - [`report`]: `table`, `scaling` and `dump`
//! - [`utility`]: `completion`

mod report;
mod utility;

use crate::error::CliError;
use clap::{ArgAction, Parser, Subcommand};

pub use report::{OrderArg, ReportCommands};
pub use utility::UtilityCommands;

/// critab - tables and scaling series from Criterion output
#[derive(Parser)]
#[command(name = "critab")]
#[command(author, version, about = "critab - tables and scaling series from Criterion output", long_about = None)]
pub struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Commands {
    // Report commands - flattened to appear at top level
    #[command(flatten)]
    Report(ReportCommands),

    // Utility commands - flattened to appear at top level
    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Run the selected command.
    ///
    /// # Errors
    ///
    /// Propagates the command's error.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Report(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
