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

//! The result aggregator: scan, read, fold.

use crate::config::AggregateOptions;
use crate::error::Result;
use crate::estimate::EstimateRecord;
use crate::scan::{scan, EstimateSource};
use crate::table::{AggregatedTable, Sample};
use std::path::Path;

/// Build a benchmark x series table from a Criterion output directory.
///
/// Reading stops at the first failure; no partial table is returned.
///
/// # Errors
///
/// - [`crate::AggregateError::NotFound`] if `root` does not exist
/// - [`crate::AggregateError::MalformedName`] for names outside the grammar
///   (strict mode)
/// - [`crate::AggregateError::MissingEstimate`] if an accepted
///   parameterization has no `base/estimates.json`
/// - [`crate::AggregateError::MalformedEstimate`] if a file lacks
///   `mean.point_estimate`
/// - [`crate::AggregateError::FilterAmbiguity`] if two files map to one cell
///
/// # Example
///
/// ```no_run
/// use critab_core::{aggregate, AggregateOptions};
/// use std::path::Path;
///
/// let table = aggregate(Path::new("target/criterion"), &AggregateOptions::default()).unwrap();
/// for row in table.rows() {
///     println!("{}: {} series", row.benchmark, row.cells.len());
/// }
/// ```
pub fn aggregate(root: &Path, options: &AggregateOptions) -> Result<AggregatedTable> {
    options.validate()?;
    let samples = read_samples(scan(root, options)?)?;
    AggregatedTable::from_samples(&options.benchmarks, &options.ranking(), samples)
}

/// Read every selected estimate file, in order.
pub fn read_samples(sources: Vec<EstimateSource>) -> Result<Vec<Sample>> {
    sources.into_iter().map(read_sample).collect()
}

fn read_sample(source: EstimateSource) -> Result<Sample> {
    let record = EstimateRecord::read(&source.path)?;
    tracing::trace!(path = %source.path.display(), mean_ns = record.mean_ns(), "read estimate");
    Ok(Sample {
        benchmark: source.name.benchmark().to_string(),
        series: source.series,
        value: record.table_value(),
        source: source.path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AggregateError;
    use crate::policy::SeriesLabel;
    use critab_test::CriterionTree;

    #[test]
    fn test_point_estimate_scaled() {
        let tree = CriterionTree::new().estimate(
            "basic.send()",
            "Sent message of size 100 with 64 moderators",
            2_500_000,
        );
        let table = aggregate(tree.path(), &AggregateOptions::default()).unwrap();
        assert_eq!(table.get("send", &SeriesLabel::scheme_only("basic")), Some(2500.0));
    }

    #[test]
    fn test_missing_estimate_propagates() {
        let tree = CriterionTree::new()
            .estimate("basic.send()", "Sent message of size 100 with 64 moderators", 1)
            .empty_param("basic.read()", "Read message of size 100 with 64 moderators");
        let err = aggregate(tree.path(), &AggregateOptions::default()).unwrap_err();
        match err {
            AggregateError::MissingEstimate { path } => {
                assert!(path.to_string_lossy().contains("basic.read()"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_options_rejected_before_io() {
        let options = AggregateOptions::default().with_benchmarks::<&str>(&[]);
        let err = aggregate(Path::new("/does/not/matter"), &options).unwrap_err();
        assert!(matches!(err, AggregateError::InvalidConfig { .. }));
    }
}
