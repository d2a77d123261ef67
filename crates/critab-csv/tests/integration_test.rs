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

//! CSV output of real aggregation results.

use critab_core::{aggregate, collect_scaling, AggregateOptions, ScalingView};
use critab_csv::{scaling_to_csv, to_csv, to_csv_with_config, ToCsvConfig};
use critab_test::fixtures;
use critab_test::CriterionTree;

#[test]
fn test_published_table_header_and_rows() {
    let tree = fixtures::published();
    let table = aggregate(tree.path(), &AggregateOptions::default()).unwrap();
    let csv = to_csv(&table).unwrap();

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], ",send,process,read,report,moderate");
    let labels: Vec<&str> = lines[1..].iter().map(|l| l.split(',').next().unwrap()).collect();
    assert_eq!(labels, vec!["basic", "mod-priv", "const-mod-priv", "plain"]);

    // plain has no report/moderate runs
    assert!(lines[4].ends_with(",,"));
    assert_eq!(lines[4].split(',').count(), 6);
}

#[test]
fn test_scaled_value_in_csv() {
    let tree = CriterionTree::new().raw_estimate(
        "basic.send()",
        "Sent message of size 100 with 64 moderators",
        r#"{"mean": {"point_estimate": 2500000}}"#,
    );
    let table = aggregate(tree.path(), &AggregateOptions::default()).unwrap();
    assert_eq!(to_csv(&table).unwrap(), ",send\nbasic,2500.0\n");

    let config = ToCsvConfig {
        include_headers: false,
        precision: Some(3),
        ..Default::default()
    };
    assert_eq!(to_csv_with_config(&table, config).unwrap(), "basic,2500.000\n");
}

#[test]
fn test_scaling_csv() {
    let tree = CriterionTree::new()
        .estimate("basic.read()", "Read message of size 100 with 16 moderators", 16_000)
        .estimate("basic.read()", "Read message of size 100 with 8 moderators", 8_000)
        .estimate("mod-priv.read()", "Read message of size 100 with 8 moderators", 9_000);
    let view = ScalingView::PerBenchmark {
        benchmark: "read".to_string(),
    };
    let table = collect_scaling(tree.path(), &AggregateOptions::default(), &view).unwrap();
    assert_eq!(scaling_to_csv(&table).unwrap(), ",basic,mod-priv\n8,8.0,9.0\n16,16.0,\n");
}
