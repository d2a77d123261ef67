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

//! Property-based tests for the name grammar and table ordering.

use critab_core::{aggregate, AggregateOptions, ResultName, SeriesLabel};
use critab_test::CriterionTree;
use proptest::prelude::*;

// ===== Generators =====

fn scheme() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z_-]{0,11}").expect("scheme regex")
}

fn benchmark() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z_.]{0,11}").expect("benchmark regex")
}

fn arg() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_][a-z0-9_]{0,5}").expect("arg regex")
}

const BENCHMARKS: &[&str] = &["send", "process", "read", "report", "moderate"];

// ===== Grammar =====

proptest! {
    #[test]
    fn prop_display_parses_back(s in scheme(), b in benchmark(), args in prop::collection::vec(arg(), 0..4)) {
        let text = format!("{}.{}({})", s, b, args.join(", "));
        let name = ResultName::parse(&text).unwrap();
        prop_assert_eq!(name.scheme(), s.as_str());
        prop_assert_eq!(name.benchmark(), b.as_str());
        prop_assert_eq!(name.args(), args.as_slice());
        prop_assert_eq!(name.to_string(), text);
    }

    #[test]
    fn prop_names_without_dot_are_rejected(text in "[a-z()_ -]{0,20}") {
        prop_assert!(ResultName::parse(&text).is_err());
    }

    #[test]
    fn prop_names_without_trailing_paren_are_rejected(s in scheme(), b in benchmark(), tail in "[a-z ]{1,5}") {
        let text = format!("{}.{}(){}", s, b, tail);
        prop_assert!(ResultName::parse(&text).is_err());
    }
}

// ===== Ordering =====

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_row_order_follows_benchmark_list(
        created in Just(BENCHMARKS.to_vec()).prop_shuffle(),
        listed in Just(BENCHMARKS.to_vec()).prop_shuffle(),
    ) {
        let mut tree = CriterionTree::new();
        for (i, bench) in created.iter().enumerate() {
            tree = tree.estimate(
                &format!("basic.{}()", bench),
                "Sent message of size 100 with 64 moderators",
                (i as u64 + 1) * 1_000,
            );
        }

        let options = AggregateOptions::default().with_benchmarks(&listed);
        let table = aggregate(tree.path(), &options).unwrap();
        prop_assert_eq!(table.benchmarks(), listed.clone());

        for (i, bench) in created.iter().enumerate() {
            let expected = i as f64 + 1.0;
            prop_assert_eq!(table.get(bench, &SeriesLabel::scheme_only("basic")), Some(expected));
        }
    }

    #[test]
    fn prop_aggregation_is_idempotent(means in prop::collection::vec(1u64..10_000_000_000, 4)) {
        let schemes = ["basic", "mod-priv", "const-mod-priv"];
        let mut tree = CriterionTree::new().report_dir();
        for (scheme, mean) in schemes.iter().zip(&means) {
            tree = tree.estimate(
                &format!("{}.read()", scheme),
                "Read message of size 100 with 64 moderators",
                *mean,
            );
        }
        tree = tree.estimate("plain.read()", "plain.read() message of size 100", means[3]);

        let options = AggregateOptions::default();
        let first = aggregate(tree.path(), &options).unwrap();
        let second = aggregate(tree.path(), &options).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), 4);
    }
}
