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


//! Utility commands.

use super::Cli;
use crate::commands;
use crate::error::CliError;
use clap::{CommandFactory, Subcommand};
use clap_complete::shells::{Bash, Elvish, Fish, PowerShell, Zsh};

/// Utility commands.
#[derive(Subcommand)]
pub enum UtilityCommands {
    /// Generate shell completion scripts
    ///
    /// Supported shells: bash, zsh, fish, powershell, elvish
    Completion {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: String,

        /// Print installation instructions instead of the script
        #[arg(short, long)]
        install: bool,
    },
}

impl UtilityCommands {
    /// Run the utility command.
    ///
    /// # Errors
    ///
    /// Returns `Err` for an unsupported shell.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            UtilityCommands::Completion { shell, install } => {
                if install {
                    println!("{}", commands::print_installation_instructions(&shell));
                    Ok(())
                } else {
                    generate_completion(&shell)
                }
            }
        }
    }
}

fn generate_completion(shell: &str) -> Result<(), CliError> {
    let mut cmd = Cli::command();
    match shell.to_lowercase().as_str() {
        "bash" => commands::generate_completion_for_command(Bash, &mut cmd),
        "zsh" => commands::generate_completion_for_command(Zsh, &mut cmd),
        "fish" => commands::generate_completion_for_command(Fish, &mut cmd),
        "powershell" | "pwsh" => commands::generate_completion_for_command(PowerShell, &mut cmd),
        "elvish" => commands::generate_completion_for_command(Elvish, &mut cmd),
        _ => {
            return Err(CliError::invalid_input(format!(
                "Unsupported shell: {}. Supported shells: bash, zsh, fish, powershell, elvish",
                shell
            )))
        }
    }
    Ok(())
}
