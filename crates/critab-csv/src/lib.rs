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

//! CSV output for critab tables.
//!
//! Aggregated tables are written with one row per series and one column per
//! benchmark; the first header cell is empty. Missing combinations are empty
//! fields, never zeros.
//!
//! # Examples
//!
//! ```no_run
//! use critab_core::{aggregate, AggregateOptions};
//! use critab_csv::{to_csv_with_config, ToCsvConfig};
//! use std::path::Path;
//!
//! let table = aggregate(Path::new("target/criterion"), &AggregateOptions::default()).unwrap();
//! let config = ToCsvConfig {
//!     delimiter: b'\t',
//!     precision: Some(1),
//!     ..Default::default()
//! };
//! println!("{}", to_csv_with_config(&table, config).unwrap());
//! ```

mod error;
mod to_csv;

// Re-export public API
pub use error::{CsvError, Result};
pub use to_csv::{
    grid_to_csv, grid_to_csv_writer, scaling_to_csv, scaling_to_csv_with_config, to_csv,
    to_csv_with_config, ToCsvConfig,
};
