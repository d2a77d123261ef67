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

//! The published benchmark tree: four schemes, five benchmarks, three
//! moderator counts, plus the harness `report` directory and a group that no
//! table lists.

use crate::CriterionTree;

/// Schemes, in table order.
pub const SCHEMES: &[&str] = &["basic", "mod-priv", "const-mod-priv", "plain"];

/// Benchmarks, in table order.
pub const BENCHMARKS: &[&str] = &["send", "process", "read", "report", "moderate"];

/// Benchmarks the `plain` scheme runs.
pub const PLAIN_BENCHMARKS: &[&str] = &["send", "process", "read"];

/// Moderator counts of the moderated schemes.
pub const MODERATOR_COUNTS: &[u64] = &[8, 16, 64];

/// Group directory name, e.g. `basic.send()`.
pub fn group_name(scheme: &str, benchmark: &str) -> String {
    format!("{}.{}()", scheme, benchmark)
}

/// Parameterization directory name. `None` gives the unmoderated `plain`
/// variant.
pub fn param_name(scheme: &str, benchmark: &str, moderators: Option<u64>) -> String {
    match moderators {
        Some(n) => format!("{}.{}() message of size 100 with {} moderators", scheme, benchmark, n),
        None => format!("{}.{}() message of size 100", scheme, benchmark),
    }
}

/// Mean in nanoseconds stored for a cell of [`published`]. Distinct per
/// (scheme, benchmark, moderators) so misplaced values are caught.
pub fn published_mean(scheme: &str, benchmark: &str, moderators: Option<u64>) -> u64 {
    let s = SCHEMES.iter().position(|x| *x == scheme).unwrap_or(SCHEMES.len()) as u64;
    let b = BENCHMARKS.iter().position(|x| *x == benchmark).unwrap_or(BENCHMARKS.len()) as u64;
    (s + 1) * 1_000_000 + (b + 1) * 10_000 + moderators.unwrap_or(0) * 100
}

/// Build the published tree.
pub fn published() -> CriterionTree {
    let mut tree = CriterionTree::new()
        .report_dir()
        .estimate("basic.setup_mod()", "setup with 64 moderators", 123);

    for scheme in SCHEMES {
        if *scheme == "plain" {
            for benchmark in PLAIN_BENCHMARKS {
                tree = tree.estimate(
                    &group_name(scheme, benchmark),
                    &param_name(scheme, benchmark, None),
                    published_mean(scheme, benchmark, None),
                );
            }
            continue;
        }
        for benchmark in BENCHMARKS {
            let group = group_name(scheme, benchmark);
            for n in MODERATOR_COUNTS {
                tree = tree.estimate(
                    &group,
                    &param_name(scheme, benchmark, Some(*n)),
                    published_mean(scheme, benchmark, Some(*n)),
                );
            }
            tree = tree.estimate_in_report(&group, 1);
        }
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_layout() {
        let tree = published();
        assert!(tree.path().join("report").is_dir());
        assert!(tree
            .param_dir("mod-priv.read()", &param_name("mod-priv", "read", Some(16)))
            .join("base/estimates.json")
            .is_file());
        assert!(!tree.path().join("plain.moderate()").exists());
    }

    #[test]
    fn test_means_are_distinct() {
        let a = published_mean("basic", "send", Some(64));
        let b = published_mean("basic", "send", Some(16));
        let c = published_mean("mod-priv", "send", Some(64));
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(published_mean("plain", "read", None), 4_030_000);
    }
}
