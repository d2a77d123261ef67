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

//! Directory enumeration and name validation.
//!
//! Nothing in this module reads an estimate file: it only decides which files
//! would contribute and under which label. Listings are sorted by name so the
//! result never depends on the order the filesystem returns entries in.

use crate::config::AggregateOptions;
use crate::error::{AggregateError, Result};
use crate::estimate::estimate_path;
use crate::name::ResultName;
use crate::param::{Parameterization, REPORT_DIR};
use crate::policy::SeriesLabel;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// An estimate file selected for aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateSource {
    /// Decoded top-level directory name.
    pub name: ResultName,
    /// Parameterization directory below it.
    pub param: Parameterization,
    /// Row label the value will be stored under.
    pub series: SeriesLabel,
    /// Path of `base/estimates.json`.
    pub path: PathBuf,
}

/// List the subdirectories of `dir` as (name, path), sorted by name.
///
/// Symlinks are followed. Entries that are not directories, and dangling
/// links, are skipped.
///
/// # Errors
///
/// [`AggregateError::NotFound`] if `dir` does not exist, [`AggregateError::Io`]
/// for other listing failures.
pub fn list_dirs(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let entries = fs::read_dir(dir).map_err(|e| AggregateError::io_error(dir, e))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AggregateError::io_error(dir, e))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| AggregateError::io_error(&path, e))?;
        let is_dir = if file_type.is_symlink() {
            match fs::metadata(&path) {
                Ok(meta) => meta.is_dir(),
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "skipping dangling link");
                    continue;
                }
            }
        } else {
            file_type.is_dir()
        };
        if !is_dir {
            debug!(path = %path.display(), "skipping non-directory entry");
            continue;
        }
        dirs.push((entry.file_name().to_string_lossy().into_owned(), path));
    }

    dirs.sort();
    Ok(dirs)
}

/// Top-level result directories of `root`, decoded.
///
/// The harness `report` directory is always excluded. Names outside the
/// grammar are an error when `strict` is set and are skipped otherwise.
pub fn result_dirs(root: &Path, strict: bool) -> Result<Vec<(ResultName, PathBuf)>> {
    if !root.exists() {
        return Err(AggregateError::NotFound {
            path: root.to_path_buf(),
        });
    }

    let mut decoded = Vec::new();
    for (dir_name, path) in list_dirs(root)? {
        if dir_name == REPORT_DIR {
            continue;
        }
        match ResultName::parse(&dir_name) {
            Ok(name) => decoded.push((name, path)),
            Err(e) if strict => return Err(e),
            Err(e) => warn!("skipping {}: {}", path.display(), e),
        }
    }
    Ok(decoded)
}

/// Select the estimate files that feed a table.
///
/// # Errors
///
/// Fails on a missing root, on malformed names in strict mode, and on listing
/// failures. Estimate files themselves are not opened.
pub fn scan(root: &Path, options: &AggregateOptions) -> Result<Vec<EstimateSource>> {
    let mut sources = Vec::new();

    for (name, dir) in result_dirs(root, options.strict_names)? {
        if !options.knows_scheme(name.scheme()) {
            debug!(scheme = name.scheme(), dir = %dir.display(), "skipping unknown scheme");
            continue;
        }
        if !options.knows_benchmark(name.benchmark()) {
            debug!(benchmark = name.benchmark(), dir = %dir.display(), "skipping unlisted benchmark");
            continue;
        }

        for (param_name, param_dir) in list_dirs(&dir)? {
            let param = Parameterization::new(param_name);
            match options.policy.select(name.scheme(), &param) {
                Some(series) => sources.push(EstimateSource {
                    name: name.clone(),
                    param,
                    series,
                    path: estimate_path(&param_dir),
                }),
                None => debug!(param = param.name(), dir = %dir.display(), "parameterization filtered out"),
            }
        }
    }

    info!(
        root = %root.display(),
        sources = sources.len(),
        policy = %options.policy,
        "selected estimate files"
    );
    Ok(sources)
}
