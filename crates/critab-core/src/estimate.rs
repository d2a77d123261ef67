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

//! Criterion `estimates.json` records.
//!
//! Only `mean.point_estimate` is required. The document is kept as a
//! [`serde_json::Value`] so confidence intervals and the other statistics
//! Criterion writes stay available to callers.

use crate::error::{AggregateError, Result};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Directory under a parameterization holding the saved baseline.
pub const BASELINE_DIR: &str = "base";

/// File name of the statistics summary.
pub const ESTIMATES_FILE: &str = "estimates.json";

/// JSON pointer to the required mean point estimate.
pub const MEAN_POINTER: &str = "/mean/point_estimate";

/// Divisor applied to nanosecond estimates for table values.
pub const NANOS_PER_TABLE_UNIT: f64 = 1_000.0;

/// Path of the estimate file for a parameterization directory.
pub fn estimate_path(param_dir: &Path) -> PathBuf {
    param_dir.join(BASELINE_DIR).join(ESTIMATES_FILE)
}

/// Read and parse a JSON file.
///
/// The file handle is owned by the reader and released when this function
/// returns, whether or not parsing succeeded.
///
/// # Errors
///
/// - [`AggregateError::MissingEstimate`] if the file does not exist
/// - [`AggregateError::MalformedEstimate`] if the content is not JSON
/// - [`AggregateError::Io`] for other read failures
pub fn read_json(path: &Path) -> Result<Value> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AggregateError::MissingEstimate {
            path: path.to_path_buf(),
        },
        _ => AggregateError::io_error(path, e),
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        if e.is_io() {
            AggregateError::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        } else {
            AggregateError::malformed_estimate(path, format!("invalid JSON: {}", e))
        }
    })
}

/// A parsed estimate file with a validated mean point estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateRecord {
    mean_ns: u64,
}

impl EstimateRecord {
    /// Read the record stored at `path`.
    pub fn read(path: &Path) -> Result<Self> {
        let raw = read_json(path)?;
        Self::from_value(path, raw)
    }

    /// Validate an already parsed document.
    ///
    /// The point estimate is read as an integer number of nanoseconds;
    /// fractional nanoseconds are truncated.
    ///
    /// # Examples
    ///
    /// ```
    /// use critab_core::EstimateRecord;
    /// use serde_json::json;
    /// use std::path::Path;
    ///
    /// let path = Path::new("estimates.json");
    /// let record = EstimateRecord::from_value(path, json!({"mean": {"point_estimate": 2500000}})).unwrap();
    /// assert_eq!(record.table_value(), 2500.0);
    ///
    /// assert!(EstimateRecord::from_value(path, json!({"mean": {}})).is_err());
    /// ```
    pub fn from_value(path: &Path, raw: Value) -> Result<Self> {
        let point = raw.pointer(MEAN_POINTER).ok_or_else(|| {
            AggregateError::malformed_estimate(path, "missing field mean.point_estimate")
        })?;
        let mean_ns = nanos(point).map_err(|reason| AggregateError::malformed_estimate(path, reason))?;
        Ok(Self { mean_ns })
    }

    /// Mean point estimate in whole nanoseconds.
    pub fn mean_ns(&self) -> u64 {
        self.mean_ns
    }

    /// Mean point estimate scaled for table output.
    pub fn table_value(&self) -> f64 {
        self.mean_ns as f64 / NANOS_PER_TABLE_UNIT
    }
}

fn nanos(point: &Value) -> std::result::Result<u64, String> {
    if let Some(n) = point.as_u64() {
        return Ok(n);
    }
    match point.as_f64() {
        Some(f) if !f.is_finite() => Err(format!("mean.point_estimate is not finite: {}", f)),
        Some(f) if f < 0.0 => Err(format!("mean.point_estimate is negative: {}", f)),
        Some(f) => Ok(f.trunc() as u64),
        None => Err(format!("mean.point_estimate is not a number: {}", point)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn path() -> &'static Path {
        Path::new("x/base/estimates.json")
    }

    #[test]
    fn test_integer_point_estimate() {
        let record =
            EstimateRecord::from_value(path(), json!({"mean": {"point_estimate": 2500000}})).unwrap();
        assert_eq!(record.mean_ns(), 2_500_000);
        assert_eq!(record.table_value(), 2500.0);
    }

    #[test]
    fn test_fraction_is_truncated() {
        let record =
            EstimateRecord::from_value(path(), json!({"mean": {"point_estimate": 1999.99}})).unwrap();
        assert_eq!(record.mean_ns(), 1999);
        assert_eq!(record.table_value(), 1.999);
    }

    #[test]
    fn test_missing_field() {
        let err = EstimateRecord::from_value(path(), json!({"mean": {}})).unwrap_err();
        match err {
            AggregateError::MalformedEstimate { path: p, reason } => {
                assert_eq!(p, path());
                assert!(reason.contains("mean.point_estimate"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(EstimateRecord::from_value(path(), json!({})).is_err());
    }

    #[test]
    fn test_rejects_non_numeric_and_negative() {
        let text = EstimateRecord::from_value(path(), json!({"mean": {"point_estimate": "12"}}));
        assert!(matches!(text, Err(AggregateError::MalformedEstimate { .. })));
        let neg = EstimateRecord::from_value(path(), json!({"mean": {"point_estimate": -4.0}}));
        assert!(matches!(neg, Err(AggregateError::MalformedEstimate { .. })));
    }

    #[test]
    fn test_read_from_disk() {
        let dir = TempDir::new().unwrap();
        let file = estimate_path(dir.path());
        fs::create_dir_all(file.parent().unwrap()).unwrap();

        let missing = EstimateRecord::read(&file).unwrap_err();
        assert_eq!(missing, AggregateError::MissingEstimate { path: file.clone() });

        fs::write(&file, r#"{"mean": {"point_estimate": 42000}}"#).unwrap();
        assert_eq!(EstimateRecord::read(&file).unwrap().table_value(), 42.0);

        fs::write(&file, "[1, 2").unwrap();
        assert!(matches!(
            EstimateRecord::read(&file),
            Err(AggregateError::MalformedEstimate { .. })
        ));
    }
}
