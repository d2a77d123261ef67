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

//! Parameterization filter policies and series labels.

use crate::error::{AggregateError, Result};
use crate::param::Parameterization;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker shown for accepted parameterizations that carry no recognised marker.
pub const IMPLICIT_MARKER: &str = "1";

/// Marker of the published table: the 64-moderator runs.
pub const DEFAULT_MARKER: &str = "64 ";

/// Marker part of a series label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Marker {
    /// One of the configured markers, trimmed.
    Recognised(String),
    /// Accepted without any configured marker; rendered as [`IMPLICIT_MARKER`].
    Implicit,
}

impl Marker {
    /// Rendered form.
    pub fn as_str(&self) -> &str {
        match self {
            Marker::Recognised(m) => m,
            Marker::Implicit => IMPLICIT_MARKER,
        }
    }
}

/// Row label of a table: a scheme, optionally qualified by a marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesLabel {
    scheme: String,
    marker: Option<Marker>,
}

impl SeriesLabel {
    /// A label consisting of the scheme name alone.
    pub fn scheme_only(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            marker: None,
        }
    }

    /// A label qualified by a recognised marker. Surrounding whitespace of
    /// the marker is dropped.
    pub fn with_marker(scheme: impl Into<String>, marker: &str) -> Self {
        Self {
            scheme: scheme.into(),
            marker: Some(Marker::Recognised(marker.trim().to_string())),
        }
    }

    /// A label for a parameterization accepted without a recognised marker.
    ///
    /// Renders like a `1` marker but never equals one.
    pub fn unmarked(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            marker: Some(Marker::Implicit),
        }
    }

    /// The scheme part.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The marker part, if any.
    pub fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }
}

impl fmt::Display for SeriesLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.marker {
            Some(marker) => write!(f, "{}-{}", self.scheme, marker.as_str()),
            None => f.write_str(&self.scheme),
        }
    }
}

/// Which parameterizations contribute to a table.
///
/// The summary `report` directory is rejected by every policy.
///
/// # Examples
///
/// ```
/// use critab_core::{FilterPolicy, Parameterization};
///
/// let policy = FilterPolicy::SingleMarker { marker: "64 ".to_string() };
/// let hit = Parameterization::new("Sent message of size 100 with 64 moderators");
/// let miss = Parameterization::new("Sent message of size 100 with 16 moderators");
///
/// assert_eq!(policy.select("basic", &hit).unwrap().to_string(), "basic");
/// assert!(policy.select("basic", &miss).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterPolicy {
    /// Accept parameterizations containing `marker`, or the `plain` token.
    /// Rows are labelled by scheme.
    #[serde(rename = "single")]
    SingleMarker {
        /// Marker substring, e.g. `"64 "`.
        marker: String,
    },

    /// Accept parameterizations containing any of `markers` at the start of
    /// a token, labelling each row `<scheme>-<marker>`; the longest matching
    /// marker wins. Plain parameterizations are labelled by
    /// scheme; others are accepted under the implicit marker only when
    /// `include_unmarked` is set.
    Labeled {
        /// Recognised markers, in display order.
        markers: Vec<String>,
        /// Keep parameterizations without a recognised marker.
        #[serde(default)]
        include_unmarked: bool,
    },

    /// Accept every parameterization; rows are labelled by scheme. Two
    /// parameterizations of the same benchmark and scheme are an error.
    Unfiltered,
}

impl FilterPolicy {
    /// Decide whether `param` (below a directory of `scheme`) contributes,
    /// and under which label.
    pub fn select(&self, scheme: &str, param: &Parameterization) -> Option<SeriesLabel> {
        if param.is_report() {
            return None;
        }

        match self {
            FilterPolicy::SingleMarker { marker } => {
                if param.contains_marker(marker) || param.is_plain() {
                    Some(SeriesLabel::scheme_only(scheme))
                } else {
                    None
                }
            }
            FilterPolicy::Labeled {
                markers,
                include_unmarked,
            } => match param.find_marker(markers) {
                Some(marker) => Some(SeriesLabel::with_marker(scheme, marker)),
                None if param.is_plain() => Some(SeriesLabel::scheme_only(scheme)),
                None if *include_unmarked => Some(SeriesLabel::unmarked(scheme)),
                None => None,
            },
            FilterPolicy::Unfiltered => Some(SeriesLabel::scheme_only(scheme)),
        }
    }

    /// Markers in their configured order (empty for `Unfiltered`).
    pub fn markers(&self) -> Vec<String> {
        match self {
            FilterPolicy::SingleMarker { marker } => vec![marker.trim().to_string()],
            FilterPolicy::Labeled { markers, .. } => {
                markers.iter().map(|m| m.trim().to_string()).collect()
            }
            FilterPolicy::Unfiltered => Vec::new(),
        }
    }

    /// Reject markers that would match everything or nothing.
    pub fn validate(&self) -> Result<()> {
        match self {
            FilterPolicy::SingleMarker { marker } if marker.trim().is_empty() => Err(
                AggregateError::invalid_config("policy.marker", "marker must not be empty"),
            ),
            FilterPolicy::Labeled { markers, .. } => {
                if markers.is_empty() {
                    return Err(AggregateError::invalid_config(
                        "policy.markers",
                        "at least one marker is required",
                    ));
                }
                if markers.iter().any(|m| m.trim().is_empty()) {
                    return Err(AggregateError::invalid_config(
                        "policy.markers",
                        "markers must not be empty",
                    ));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl Default for FilterPolicy {
    fn default() -> Self {
        FilterPolicy::SingleMarker {
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl fmt::Display for FilterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterPolicy::SingleMarker { marker } => write!(f, "single marker {:?}", marker),
            FilterPolicy::Labeled { markers, .. } => write!(f, "labeled markers {:?}", markers),
            FilterPolicy::Unfiltered => f.write_str("unfiltered"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(name: &str) -> Parameterization {
        Parameterization::new(name)
    }

    #[test]
    fn test_label_display() {
        assert_eq!(SeriesLabel::scheme_only("basic").to_string(), "basic");
        assert_eq!(
            SeriesLabel::with_marker("mod-priv", "64 ").to_string(),
            "mod-priv-64"
        );
    }

    #[test]
    fn test_single_marker_policy() {
        let policy = FilterPolicy::default();
        assert!(policy
            .select("basic", &p("Sent message of size 100 with 64 moderators"))
            .is_some());
        assert!(policy.select("basic", &p("other")).is_none());
        assert_eq!(
            policy.select("plain", &p("plain.send() message of size 100")),
            Some(SeriesLabel::scheme_only("plain"))
        );
    }

    #[test]
    fn test_report_rejected_by_every_policy() {
        let policies = [
            FilterPolicy::default(),
            FilterPolicy::Labeled {
                markers: vec!["report".to_string()],
                include_unmarked: true,
            },
            FilterPolicy::Unfiltered,
        ];
        for policy in &policies {
            assert!(policy.select("basic", &p("report")).is_none(), "{policy}");
        }
    }

    #[test]
    fn test_labeled_policy() {
        let policy = FilterPolicy::Labeled {
            markers: vec!["64 ".to_string(), "16 ".to_string()],
            include_unmarked: false,
        };
        assert_eq!(
            policy.select("mod-priv", &p("with 16 moderators")),
            Some(SeriesLabel::with_marker("mod-priv", "16"))
        );
        assert_eq!(
            policy.select("plain", &p("plain.read() message of size 100")),
            Some(SeriesLabel::scheme_only("plain"))
        );
        assert_eq!(policy.select("mod-priv", &p("Sent message of size 100")), None);
    }

    #[test]
    fn test_labeled_policy_implicit_marker() {
        let policy = FilterPolicy::Labeled {
            markers: vec!["64 ".to_string()],
            include_unmarked: true,
        };
        let label = policy
            .select("basic", &p("Sent message of size 100"))
            .unwrap();
        assert_eq!(label.marker(), Some(&Marker::Implicit));
        assert_eq!(label.to_string(), "basic-1");
    }

    #[test]
    fn test_unmarked_differs_from_one_marker() {
        let policy = FilterPolicy::Labeled {
            markers: vec!["1 ".to_string()],
            include_unmarked: true,
        };
        let one = policy
            .select("basic", &p("Sent message of size 100 with 1 moderators"))
            .unwrap();
        let unmarked = policy.select("basic", &p("Sent message of size 100")).unwrap();

        assert_eq!(one, SeriesLabel::with_marker("basic", "1"));
        assert_eq!(unmarked, SeriesLabel::unmarked("basic"));
        assert_ne!(one, unmarked);
        assert_eq!(one.to_string(), unmarked.to_string());
    }

    #[test]
    fn test_unfiltered_policy() {
        let policy = FilterPolicy::Unfiltered;
        assert_eq!(
            policy.select("basic", &p("anything")),
            Some(SeriesLabel::scheme_only("basic"))
        );
    }

    #[test]
    fn test_validate() {
        assert!(FilterPolicy::default().validate().is_ok());
        assert!(FilterPolicy::SingleMarker { marker: " ".into() }.validate().is_err());
        assert!(FilterPolicy::Labeled { markers: vec![], include_unmarked: false }
            .validate()
            .is_err());
        assert!(FilterPolicy::Unfiltered.validate().is_ok());
    }

    #[test]
    fn test_policy_yaml_shape() {
        let policy: FilterPolicy = serde_yaml::from_str("kind: single\nmarker: \"64 \"\n").unwrap();
        assert_eq!(policy, FilterPolicy::default());

        let policy: FilterPolicy =
            serde_yaml::from_str("kind: labeled\nmarkers: [\"64 \", \"16 \"]\n").unwrap();
        assert_eq!(
            policy,
            FilterPolicy::Labeled {
                markers: vec!["64 ".into(), "16 ".into()],
                include_unmarked: false
            }
        );

        let policy: FilterPolicy = serde_yaml::from_str("kind: unfiltered\n").unwrap();
        assert_eq!(policy, FilterPolicy::Unfiltered);
    }
}
