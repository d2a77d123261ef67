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

//! Raw estimate dump, keyed by parameterization name.

use crate::error::{AggregateError, Result};
use crate::estimate::{estimate_path, read_json};
use crate::param::{Parameterization, REPORT_DIR};
use crate::scan::list_dirs;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Collect every estimate document below `root`.
///
/// Only top-level directories whose name ends with `()` are visited. Inside
/// them, every parameterization except `report` contributes its parsed
/// `base/estimates.json`. No field is validated.
///
/// # Errors
///
/// [`AggregateError::NotFound`] for a missing root,
/// [`AggregateError::MissingEstimate`] and
/// [`AggregateError::MalformedEstimate`] per file, and
/// [`AggregateError::FilterAmbiguity`] when two groups share a
/// parameterization name.
pub fn dump_estimates(root: &Path) -> Result<BTreeMap<String, Value>> {
    if !root.exists() {
        return Err(AggregateError::NotFound {
            path: root.to_path_buf(),
        });
    }

    let mut dumped = BTreeMap::new();
    let mut sources: BTreeMap<String, PathBuf> = BTreeMap::new();

    for (group, group_dir) in list_dirs(root)? {
        if group == REPORT_DIR || !group.ends_with("()") {
            debug!(dir = %group_dir.display(), "not a parameterless group");
            continue;
        }
        for (param_name, param_dir) in list_dirs(&group_dir)? {
            let param = Parameterization::new(param_name);
            if param.is_report() {
                continue;
            }
            let path = estimate_path(&param_dir);
            if let Some(first) = sources.get(param.name()) {
                return Err(AggregateError::FilterAmbiguity {
                    benchmark: group,
                    series: param.name().to_string(),
                    first: first.clone(),
                    second: path,
                });
            }
            let value = read_json(&path)?;
            sources.insert(param.name().to_string(), path);
            dumped.insert(param.name().to_string(), value);
        }
    }

    info!(root = %root.display(), entries = dumped.len(), "dumped estimates");
    Ok(dumped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use critab_test::CriterionTree;

    #[test]
    fn test_dump_keys_and_filters() {
        let tree = CriterionTree::new()
            .estimate("plain.send()", "plain.send() message of size 100", 1_000)
            .estimate("basic.send()", "Sent message of size 100 with 64 moderators", 2_000)
            .estimate("mod-priv.send(k, m, pk_i)", "with 64 moderators", 3_000)
            .estimate_in_report("basic.send()", 4)
            .report_dir();

        let dump = dump_estimates(tree.path()).unwrap();
        let keys: Vec<&str> = dump.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["Sent message of size 100 with 64 moderators", "plain.send() message of size 100"]
        );
        assert_eq!(
            dump["plain.send() message of size 100"]
                .pointer("/mean/point_estimate")
                .and_then(Value::as_u64),
            Some(1_000)
        );
    }

    #[test]
    fn test_dump_does_not_validate_fields() {
        let tree = CriterionTree::new().raw_estimate("basic.read()", "Read", r#"{"mean": {}}"#);
        let dump = dump_estimates(tree.path()).unwrap();
        assert_eq!(dump["Read"], serde_json::json!({"mean": {}}));
    }

    #[test]
    fn test_dump_errors() {
        let tree = CriterionTree::new().raw_estimate("basic.read()", "Read", "{not json");
        assert!(matches!(
            dump_estimates(tree.path()).unwrap_err(),
            AggregateError::MalformedEstimate { .. }
        ));

        let tree = CriterionTree::new()
            .estimate("basic.read()", "same", 1)
            .estimate("plain.read()", "same", 2);
        assert!(matches!(
            dump_estimates(tree.path()).unwrap_err(),
            AggregateError::FilterAmbiguity { .. }
        ));
    }
}
