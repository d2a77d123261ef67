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

//! Second-level parameterization directories.
//!
//! Below each `<scheme>.<benchmark>()` directory Criterion creates one
//! directory per benchmark id, e.g.
//! `mod-priv.report() message of size 100 with 64 moderators`, plus a
//! `report` directory holding its HTML summary.

/// Name of the harness-generated summary directory. Never holds estimates
/// that belong in a table.
pub const REPORT_DIR: &str = "report";

/// Token identifying parameterizations of the unmoderated baseline scheme.
pub const PLAIN_TOKEN: &str = "plain";

/// A parameterization directory name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Parameterization {
    name: String,
}

impl Parameterization {
    /// Wrap a directory name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The directory name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is Criterion's summary `report` directory.
    pub fn is_report(&self) -> bool {
        self.name == REPORT_DIR
    }

    /// Whether the name mentions the plain baseline scheme.
    pub fn is_plain(&self) -> bool {
        self.name.contains(PLAIN_TOKEN)
    }

    /// Whether `marker` occurs anywhere in the name.
    pub fn contains_marker(&self, marker: &str) -> bool {
        !marker.is_empty() && self.name.contains(marker)
    }

    /// Whether `marker` occurs at the start of a token: at the beginning of
    /// the name or after a non-alphanumeric character. Markers that do not
    /// start with an alphanumeric character match anywhere.
    pub fn contains_marker_at_token(&self, marker: &str) -> bool {
        let Some(first) = marker.chars().next() else {
            return false;
        };
        if !first.is_alphanumeric() {
            return self.name.contains(marker);
        }
        self.name.match_indices(marker).any(|(i, _)| {
            self.name[..i]
                .chars()
                .next_back()
                .map_or(true, |c| !c.is_alphanumeric())
        })
    }

    /// Returns the longest of `markers` that occurs at a token start, the
    /// first listed on ties. `"8 "` therefore never claims `128 moderators`.
    pub fn find_marker<'m, S: AsRef<str>>(&self, markers: &'m [S]) -> Option<&'m str> {
        markers
            .iter()
            .map(|m| m.as_ref())
            .filter(|m| self.contains_marker_at_token(m))
            .fold(None, |best: Option<&'m str>, m| match best {
                Some(b) if b.len() >= m.len() => Some(b),
                _ => Some(m),
            })
    }

    /// The numeric parameter: the second-to-last whitespace-delimited token,
    /// parsed as an unsigned integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use critab_core::Parameterization;
    ///
    /// let p = Parameterization::new("Processed message of size 100 with 16 moderators");
    /// assert_eq!(p.scale(), Some(16));
    /// assert_eq!(Parameterization::new("plain.read() message of size 100").scale(), None);
    /// ```
    pub fn scale(&self) -> Option<u64> {
        let mut tokens = self.name.split_whitespace().rev();
        tokens.next()?;
        tokens.next()?.parse().ok()
    }
}

impl From<&str> for Parameterization {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
