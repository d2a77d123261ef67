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

//! Aggregation configuration.
//!
//! Defaults reproduce the published running-time table: four schemes, five
//! benchmarks, and the 64-moderator parameterization.
//!
//! ```yaml
//! root: target/criterion
//! schemes: [basic, mod-priv, const-mod-priv, plain]
//! benchmarks: [send, process, read, report, moderate]
//! policy:
//!   kind: single
//!   marker: "64 "
//! order: canonical
//! strict_names: true
//! ```

use crate::error::{AggregateError, Result};
use crate::policy::FilterPolicy;
use crate::table::{SeriesOrder, SeriesRanking};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Schemes of the published table, in display order.
pub const DEFAULT_SCHEMES: &[&str] = &["basic", "mod-priv", "const-mod-priv", "plain"];

/// Benchmarks of the published table, in display order.
pub const DEFAULT_BENCHMARKS: &[&str] = &["send", "process", "read", "report", "moderate"];

/// Criterion's default output directory.
pub const DEFAULT_ROOT: &str = "target/criterion";

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_schemes() -> Vec<String> {
    owned(DEFAULT_SCHEMES)
}

fn default_benchmarks() -> Vec<String> {
    owned(DEFAULT_BENCHMARKS)
}

fn default_true() -> bool {
    true
}

fn default_root() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT)
}

/// What to aggregate and how to order it.
///
/// # Example
///
/// ```
/// use critab_core::{AggregateOptions, FilterPolicy, SeriesOrder};
///
/// let options = AggregateOptions::default()
///     .with_schemes(&["basic", "plain"])
///     .with_policy(FilterPolicy::Unfiltered)
///     .with_order(SeriesOrder::Natural);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateOptions {
    /// Schemes whose directories are processed; others are skipped.
    #[serde(default = "default_schemes")]
    pub schemes: Vec<String>,
    /// Benchmarks kept in the output, in display order.
    #[serde(default = "default_benchmarks")]
    pub benchmarks: Vec<String>,
    /// Parameterization filter.
    #[serde(default)]
    pub policy: FilterPolicy,
    /// Series order within a benchmark.
    #[serde(default)]
    pub order: SeriesOrder,
    /// Fail on directory names outside the grammar instead of skipping them.
    #[serde(default = "default_true")]
    pub strict_names: bool,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            schemes: default_schemes(),
            benchmarks: default_benchmarks(),
            policy: FilterPolicy::default(),
            order: SeriesOrder::default(),
            strict_names: true,
        }
    }
}

impl AggregateOptions {
    /// Sets the known schemes.
    pub fn with_schemes<S: AsRef<str>>(mut self, schemes: &[S]) -> Self {
        self.schemes = schemes.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Sets the known benchmarks and their display order.
    pub fn with_benchmarks<S: AsRef<str>>(mut self, benchmarks: &[S]) -> Self {
        self.benchmarks = benchmarks.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Sets the parameterization filter.
    pub fn with_policy(mut self, policy: FilterPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the series order.
    pub fn with_order(mut self, order: SeriesOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets whether malformed directory names are fatal.
    pub fn with_strict_names(mut self, strict: bool) -> Self {
        self.strict_names = strict;
        self
    }

    /// Whether `scheme` is one of the known schemes.
    pub fn knows_scheme(&self, scheme: &str) -> bool {
        self.schemes.iter().any(|s| s == scheme)
    }

    /// Whether `benchmark` is one of the known benchmarks.
    pub fn knows_benchmark(&self, benchmark: &str) -> bool {
        self.benchmarks.iter().any(|b| b == benchmark)
    }

    /// Comparator implementing [`Self::order`].
    pub fn ranking(&self) -> SeriesRanking {
        SeriesRanking::new(self.order, &self.schemes, &self.policy.markers())
    }

    /// Validate the options.
    ///
    /// # Errors
    ///
    /// Returns [`AggregateError::InvalidConfig`] for empty or duplicated
    /// scheme/benchmark lists and for unusable markers.
    pub fn validate(&self) -> Result<()> {
        check_list("schemes", &self.schemes)?;
        check_list("benchmarks", &self.benchmarks)?;
        self.policy.validate()
    }
}

fn check_list(parameter: &str, items: &[String]) -> Result<()> {
    if items.is_empty() {
        return Err(AggregateError::invalid_config(parameter, "must not be empty"));
    }
    let mut seen = HashSet::new();
    for item in items {
        if item.trim().is_empty() {
            return Err(AggregateError::invalid_config(parameter, "entries must not be blank"));
        }
        if !seen.insert(item.as_str()) {
            return Err(AggregateError::invalid_config(
                parameter,
                format!("duplicate entry '{}'", item),
            ));
        }
    }
    Ok(())
}

/// Configuration file contents: where to read and what to aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Criterion output directory.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Aggregation options.
    #[serde(flatten)]
    pub options: AggregateOptions,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            options: AggregateOptions::default(),
        }
    }
}

impl ReportConfig {
    /// Parse a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(text)
            .map_err(|e| AggregateError::invalid_config("config", e.to_string()))?;
        config.options.validate()?;
        Ok(config)
    }

    /// Load a YAML configuration file.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| AggregateError::io_error(path, e))?;
        let config: Self = serde_yaml::from_reader(BufReader::new(file)).map_err(|e| {
            AggregateError::invalid_config(path.display().to_string(), e.to_string())
        })?;
        config.options.validate()?;
        Ok(config)
    }

    /// Sets the root directory.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Aggregation options, cloned.
    pub fn aggregate_options(&self) -> AggregateOptions {
        self.options.clone()
    }

    /// Render as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| AggregateError::invalid_config("config", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.root, PathBuf::from("target/criterion"));
        assert_eq!(config.options.schemes, vec!["basic", "mod-priv", "const-mod-priv", "plain"]);
        assert_eq!(
            config.options.benchmarks,
            vec!["send", "process", "read", "report", "moderate"]
        );
        assert!(config.options.strict_names);
        assert!(config.options.validate().is_ok());
        assert_eq!(config.aggregate_options(), AggregateOptions::default());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = ReportConfig::from_yaml_str("schemes: [basic]\norder: natural\n").unwrap();
        assert_eq!(config.options.schemes, vec!["basic"]);
        assert_eq!(config.options.order, SeriesOrder::Natural);
        assert_eq!(config.options.benchmarks.len(), 5);
        assert_eq!(config.options.policy, FilterPolicy::default());
    }

    #[test]
    fn test_yaml_roundtrip_of_defaults() {
        let yaml = ReportConfig::default().to_yaml().unwrap();
        assert_eq!(ReportConfig::from_yaml_str(&yaml).unwrap(), ReportConfig::default());
    }

    #[test]
    fn test_validation_errors() {
        let err = ReportConfig::from_yaml_str("schemes: []\n").unwrap_err();
        assert!(matches!(err, AggregateError::InvalidConfig { ref parameter, .. } if parameter == "schemes"));

        let err = ReportConfig::from_yaml_str("benchmarks: [send, send]\n").unwrap_err();
        assert!(err.to_string().contains("duplicate entry 'send'"));

        let err = ReportConfig::from_yaml_str("policy:\n  kind: single\n  marker: \"\"\n").unwrap_err();
        assert!(matches!(err, AggregateError::InvalidConfig { .. }));
    }

    #[test]
    fn test_from_yaml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("critab.yaml");
        fs::write(&path, "root: out/criterion\npolicy:\n  kind: unfiltered\n").unwrap();

        let config = ReportConfig::from_yaml_file(&path).unwrap();
        assert_eq!(config.root, PathBuf::from("out/criterion"));
        assert_eq!(config.options.policy, FilterPolicy::Unfiltered);

        let missing = ReportConfig::from_yaml_file(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(missing, AggregateError::NotFound { .. }));
    }

    #[test]
    fn test_knows() {
        let options = AggregateOptions::default();
        assert!(options.knows_scheme("mod-priv"));
        assert!(!options.knows_scheme("mod_priv"));
        assert!(options.knows_benchmark("moderate"));
        assert!(!options.knows_benchmark("setup_mod"));
    }
}
