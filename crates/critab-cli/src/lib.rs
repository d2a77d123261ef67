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


//! critab command-line library.
//!
//! # Commands
//!
//! - **table**: benchmark x series table of mean running times
//! - **scaling**: running time against the numeric parameter of each run
//! - **dump**: every raw `estimates.json` as one JSON object
//! - **completion**: shell completion scripts
//!
//! Tables render as aligned text, CSV, Markdown or JSON; the default `all`
//! prints the text table followed by CSV.
//!
//! # Examples
//!
//! ```no_run
//! use critab_cli::commands::{table, Source, TableRequest};
//! use critab_cli::reporters::OutputFormat;
//!
//! # fn main() -> Result<(), critab_cli::error::CliError> {
//! table(&TableRequest {
//!     source: Source {
//!         root: Some("target/criterion".into()),
//!         ..Default::default()
//!     },
//!     format: OutputFormat::Csv,
//!     ..Default::default()
//! })?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod reporters;
