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

//! Shared test fixtures for critab.
//!
//! Builds synthetic Criterion output trees in temporary directories so every
//! crate tests against the same on-disk layout.
//!
//! # Quick Start
//!
//! ```rust
//! use critab_test::{fixtures, CriterionTree};
//!
//! // Build a custom tree
//! let tree = CriterionTree::new()
//!     .report_dir()
//!     .estimate("basic.send()", "Sent message of size 100 with 64 moderators", 2_500_000);
//! assert!(tree.path().join("basic.send()").is_dir());
//!
//! // Or use a canonical one
//! let tree = fixtures::published();
//! assert!(tree.path().join("plain.send()").is_dir());
//! ```
//!
//! Fixture construction panics on I/O failure; it is meant for tests only.

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Canonical fixture trees.
pub mod fixtures;

/// Criterion-like `estimates.json` content for a mean of `mean_ns`.
///
/// Median and standard deviation are derived from the mean so that documents
/// differ per entry, and confidence intervals are ±1%.
pub fn estimates_json(mean_ns: u64) -> Value {
    let mean = mean_ns as f64;
    let stat = |point: f64| {
        json!({
            "confidence_interval": {
                "confidence_level": 0.95,
                "lower_bound": point * 0.99,
                "upper_bound": point * 1.01
            },
            "point_estimate": point,
            "standard_error": point * 0.005
        })
    };
    let mut doc = json!({
        "mean": stat(mean),
        "median": stat(mean * 0.98),
        "median_abs_dev": stat(mean * 0.01),
        "slope": null,
        "std_dev": stat(mean * 0.02)
    });
    // Criterion writes floats; an integer keeps table values exact.
    doc["mean"]["point_estimate"] = json!(mean_ns);
    doc
}

/// Builder for a Criterion output directory.
///
/// Every method writes immediately and returns the builder, so a tree is
/// described as one expression. The directory is removed when the tree is
/// dropped.
#[derive(Debug)]
pub struct CriterionTree {
    dir: TempDir,
}

impl Default for CriterionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl CriterionTree {
    /// An empty tree.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temporary directory"),
        }
    }

    /// Root of the tree.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of a parameterization directory.
    pub fn param_dir(&self, group: &str, param: &str) -> PathBuf {
        self.path().join(group).join(param)
    }

    /// Adds the harness summary directory `report/` with an index page.
    pub fn report_dir(self) -> Self {
        self.file("report/index.html", "<html></html>")
    }

    /// Writes an arbitrary file relative to the root.
    pub fn file(self, rel: &str, content: &str) -> Self {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directory");
        }
        fs::write(&path, content).expect("write fixture file");
        self
    }

    /// Writes `group/param/base/estimates.json` with a mean of `mean_ns`.
    pub fn estimate(self, group: &str, param: &str, mean_ns: u64) -> Self {
        let text = serde_json::to_string_pretty(&estimates_json(mean_ns)).expect("serialize estimates");
        self.raw_estimate(group, param, &text)
    }

    /// Writes `group/param/base/estimates.json` with the given text verbatim.
    pub fn raw_estimate(self, group: &str, param: &str, text: &str) -> Self {
        let rel = format!("{}/{}/base/estimates.json", group, param);
        self.file(&rel, text)
    }

    /// Writes a conforming estimate under the group's `report` subdirectory.
    pub fn estimate_in_report(self, group: &str, mean_ns: u64) -> Self {
        self.estimate(group, "report", mean_ns)
    }

    /// Creates a parameterization directory without any estimate file.
    pub fn empty_param(self, group: &str, param: &str) -> Self {
        fs::create_dir_all(self.param_dir(group, param)).expect("create parameterization");
        self
    }

    /// Removes a file or directory below the root.
    pub fn remove(self, rel: &str) -> Self {
        let path = self.path().join(rel);
        if path.is_dir() {
            fs::remove_dir_all(&path).expect("remove fixture directory");
        } else {
            fs::remove_file(&path).expect("remove fixture file");
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_layout() {
        let tree = CriterionTree::new().estimate("basic.send()", "Sent", 42);
        let path = tree.path().join("basic.send()/Sent/base/estimates.json");
        let doc: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(doc["mean"]["point_estimate"], json!(42));
        assert!(doc["median"]["point_estimate"].is_number());
    }

    #[test]
    fn test_empty_param_and_remove() {
        let tree = CriterionTree::new().empty_param("basic.read()", "Read");
        assert!(tree.param_dir("basic.read()", "Read").is_dir());
        assert!(!tree.param_dir("basic.read()", "Read").join("base").exists());

        let tree = tree.remove("basic.read()");
        assert!(!tree.path().join("basic.read()").exists());
    }

    #[test]
    fn test_tree_is_cleaned_up() {
        let tree = CriterionTree::new().report_dir();
        let root = tree.path().to_path_buf();
        assert!(root.join("report").is_dir());
        drop(tree);
        assert!(!root.exists());
    }
}
