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


//! Dump command - every raw estimate document as one JSON object

use super::{write_output, Source};
use crate::error::CliError;
use critab_core::dump_estimates;
use std::path::Path;
use tracing::info;

/// Dump every `base/estimates.json` under the root, keyed by
/// parameterization name.
///
/// # Errors
///
/// Returns `Err` if an estimate is missing or unparsable, if two groups
/// share a parameterization name, or on serialization and write failures.
pub fn dump(source: &Source, pretty: bool, output: Option<&Path>) -> Result<(), CliError> {
    let config = source.load()?;
    let dumped = dump_estimates(&config.root)?;
    info!(entries = dumped.len(), "dumped estimates");

    let mut json = if pretty {
        serde_json::to_string_pretty(&dumped)?
    } else {
        serde_json::to_string(&dumped)?
    };
    json.push('\n');
    write_output(&json, output)
}
