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

//! Log output setup.
//!
//! Logs go to stderr so CSV and JSON on stdout stay machine-readable.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count.
pub fn default_directive(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("critab={}", level)
}

/// Build the filter: `RUST_LOG` when set, the `-v` level otherwise.
pub fn env_filter(verbose: u8) -> EnvFilter {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(spec) if !spec.trim().is_empty() => EnvFilter::new(spec),
        _ => EnvFilter::new(default_directive(verbose)),
    }
}

/// Install the global subscriber.
pub fn init(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "critab=warn");
        assert_eq!(default_directive(1), "critab=info");
        assert_eq!(default_directive(2), "critab=debug");
        assert_eq!(default_directive(7), "critab=trace");
    }
}
