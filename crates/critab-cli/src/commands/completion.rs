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


//! Shell completion generation

use clap::Command;
use clap_complete::{generate, Generator};
use std::io;

/// Write the completion script for `cmd` to stdout.
///
/// # Examples
///
/// ```no_run
/// use clap::Command;
/// use clap_complete::shells::Bash;
/// use critab_cli::commands::generate_completion_for_command;
///
/// let mut cmd = Command::new("critab");
/// generate_completion_for_command(Bash, &mut cmd);
/// ```
pub fn generate_completion_for_command<G: Generator>(generator: G, cmd: &mut Command) {
    let name = cmd.get_name().to_string();
    generate(generator, cmd, name, &mut io::stdout());
}

/// Installation instructions for `shell` (case-insensitive).
///
/// Unknown shells yield `"Unsupported shell"`.
///
/// ```
/// use critab_cli::commands::print_installation_instructions;
///
/// assert!(print_installation_instructions("Zsh").contains("_critab"));
/// assert_eq!(print_installation_instructions("tcsh"), "Unsupported shell");
/// ```
pub fn print_installation_instructions(shell: &str) -> String {
    match shell.to_lowercase().as_str() {
        "bash" => {
            r#"# Bash: load in the current session
eval "$(critab completion bash)"

# or install for every session
critab completion bash > ~/.local/share/bash-completion/completions/critab
"#
        }
        "zsh" => {
            r#"# Zsh: save into a directory on $fpath
critab completion zsh > ~/.zsh/completions/_critab

# then in ~/.zshrc
fpath=(~/.zsh/completions $fpath)
autoload -U compinit && compinit
"#
        }
        "fish" => {
            r#"# Fish: picked up by new sessions
critab completion fish > ~/.config/fish/completions/critab.fish
"#
        }
        "powershell" | "pwsh" => {
            r#"# PowerShell: add to the file named by $PROFILE
critab completion powershell | Out-String | Invoke-Expression
"#
        }
        "elvish" => {
            r#"# Elvish: add to ~/.config/elvish/rc.elv
eval (critab completion elvish | slurp)
"#
        }
        _ => "Unsupported shell",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructions_name_the_binary() {
        for shell in ["bash", "zsh", "fish", "powershell", "pwsh", "elvish"] {
            let text = print_installation_instructions(shell);
            assert!(text.contains("critab completion"), "{shell}");
        }
    }

    #[test]
    fn test_instructions_case_insensitive() {
        assert_eq!(
            print_installation_instructions("FISH"),
            print_installation_instructions("fish")
        );
    }

    #[test]
    fn test_unsupported_shell() {
        assert_eq!(print_installation_instructions("cmd.exe"), "Unsupported shell");
    }
}
