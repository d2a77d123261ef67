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

//! CLI command implementations

mod completion;
mod dump;
mod scaling;
mod table;

pub use completion::{generate_completion_for_command, print_installation_instructions};
pub use dump::dump;
pub use scaling::{scaling, ScalingRequest};
pub use table::{table, PolicyKind, PolicyOverride, TableRequest};

use crate::error::CliError;
use colored::Colorize;
use critab_core::ReportConfig;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where to read from: an optional configuration file, an optional root
/// override, and whether malformed names are skipped.
#[derive(Debug, Clone, Default)]
pub struct Source {
    /// Criterion output directory; overrides the configuration file.
    pub root: Option<PathBuf>,
    /// YAML configuration file.
    pub config: Option<PathBuf>,
    /// Skip malformed directory names instead of failing.
    pub lenient: bool,
}

impl Source {
    /// Load the configuration and apply the overrides.
    ///
    /// Without a configuration file the published-table defaults apply.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the configuration file cannot be read or is invalid.
    pub fn load(&self) -> Result<ReportConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => {
                debug!(path = %path.display(), "loading configuration");
                ReportConfig::from_yaml_file(path)?
            }
            None => ReportConfig::default(),
        };
        if let Some(root) = &self.root {
            config = config.with_root(root.clone());
        }
        if self.lenient {
            config.options.strict_names = false;
        }
        Ok(config)
    }
}

/// Write content to a file or stdout.
///
/// When writing to a file a confirmation is printed to stderr.
///
/// # Errors
///
/// Returns `Err` if writing fails.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(p) => {
            fs::write(p, content).map_err(|e| CliError::io_error(p, e))?;
            eprintln!("{} Wrote {}", "✓".green().bold(), p.display());
            Ok(())
        }
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_source_defaults() {
        let config = Source::default().load().unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_source_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("critab.yaml");
        fs::write(&path, "root: from/config\nschemes: [basic]\n").unwrap();

        let source = Source {
            root: Some(PathBuf::from("from/cli")),
            config: Some(path),
            lenient: true,
        };
        let config = source.load().unwrap();
        assert_eq!(config.root, PathBuf::from("from/cli"));
        assert_eq!(config.options.schemes, vec!["basic"]);
        assert!(!config.options.strict_names);
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        write_output(",send\n", Some(path.as_path())).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), ",send\n");

        let missing = dir.path().join("missing/out.csv");
        let err = write_output("x", Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
