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

//! Result directory name grammar.
//!
//! Criterion names each benchmark group directory after the group id. The
//! benchmarks measured here use group ids of the form
//! `<scheme>.<benchmark>(<args>)`, for example `mod-priv.report()` or
//! `basic.send(k, m, pk_i)`.
//!
//! ```text
//! result-name = scheme "." benchmark "(" [ args ] ")"
//! scheme      = 1*( any char except "." )
//! benchmark   = 1*( any char except "(" and ")" )
//! args        = arg *( "," arg )
//! ```
//!
//! The scheme stops at the first `.`, the benchmark stops at the first `(`
//! after it, and the name must end with `)`.

use crate::error::{AggregateError, Result};
use std::fmt;
use std::str::FromStr;

/// A decoded `<scheme>.<benchmark>(<args>)` directory name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResultName {
    scheme: String,
    benchmark: String,
    args: Vec<String>,
}

impl ResultName {
    /// Parse a result directory name.
    ///
    /// # Errors
    ///
    /// Returns [`AggregateError::MalformedName`] when the name does not match
    /// the grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use critab_core::ResultName;
    ///
    /// let name = ResultName::parse("basic.send(k, m, pk_i)").unwrap();
    /// assert_eq!(name.scheme(), "basic");
    /// assert_eq!(name.benchmark(), "send");
    /// assert_eq!(name.args(), ["k", "m", "pk_i"]);
    ///
    /// assert!(ResultName::parse("gamal-enc").is_err());
    /// ```
    pub fn parse(name: &str) -> Result<Self> {
        let malformed = |reason: &str| AggregateError::malformed_name(name, reason);

        let (scheme, rest) = name
            .split_once('.')
            .ok_or_else(|| malformed("missing '.' separator"))?;
        if scheme.is_empty() {
            return Err(malformed("empty scheme"));
        }

        let inner_end = rest
            .strip_suffix(')')
            .ok_or_else(|| malformed("missing trailing ')'"))?;
        let open = inner_end
            .find('(')
            .ok_or_else(|| malformed("missing '(' after benchmark"))?;

        let benchmark = &inner_end[..open];
        if benchmark.is_empty() {
            return Err(malformed("empty benchmark"));
        }
        if benchmark.contains(')') {
            return Err(malformed("unbalanced ')' in benchmark"));
        }

        let inner = &inner_end[open + 1..];
        if inner.contains('(') || inner.contains(')') {
            return Err(malformed("nested parentheses in arguments"));
        }

        let args = if inner.trim().is_empty() {
            Vec::new()
        } else {
            let args: Vec<String> = inner.split(',').map(|a| a.trim().to_string()).collect();
            if args.iter().any(String::is_empty) {
                return Err(malformed("empty argument"));
            }
            args
        };

        Ok(Self {
            scheme: scheme.to_string(),
            benchmark: benchmark.to_string(),
            args,
        })
    }

    /// The scheme token (text before the first `.`).
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The benchmark token (text between the `.` and the `(`).
    pub fn benchmark(&self) -> &str {
        &self.benchmark
    }

    /// The argument list, trimmed. Empty for `name()`.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl FromStr for ResultName {
    type Err = AggregateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ResultName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}({})", self.scheme, self.benchmark, self.args.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(name: &str) -> String {
        match ResultName::parse(name) {
            Err(AggregateError::MalformedName { reason, .. }) => reason,
            other => panic!("expected MalformedName for {name:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_empty_args() {
        let name = ResultName::parse("const-mod-priv.moderate()").unwrap();
        assert_eq!(name.scheme(), "const-mod-priv");
        assert_eq!(name.benchmark(), "moderate");
        assert!(name.args().is_empty());
    }

    #[test]
    fn test_parse_with_args() {
        let name = ResultName::parse("mod_priv.process(k_p, ks, c1, c2, ad, ctx)").unwrap();
        assert_eq!(name.scheme(), "mod_priv");
        assert_eq!(name.benchmark(), "process");
        assert_eq!(name.args(), ["k_p", "ks", "c1", "c2", "ad", "ctx"]);
    }

    #[test]
    fn test_scheme_stops_at_first_dot() {
        let name = ResultName::parse("a.b.c()").unwrap();
        assert_eq!(name.scheme(), "a");
        assert_eq!(name.benchmark(), "b.c");
    }

    #[test]
    fn test_rejects_missing_separator() {
        assert_eq!(reason("SetupMod(pk_reg, 1^lambda)"), "missing '.' separator");
        assert_eq!(reason("gamal-enc"), "missing '.' separator");
    }

    #[test]
    fn test_rejects_missing_parentheses() {
        assert_eq!(reason("plain.send"), "missing trailing ')'");
        assert_eq!(reason("plain.send)"), "missing '(' after benchmark");
    }

    #[test]
    fn test_rejects_empty_tokens() {
        assert_eq!(reason(".send()"), "empty scheme");
        assert_eq!(reason("basic.()"), "empty benchmark");
        assert_eq!(reason("basic.send(a,)"), "empty argument");
    }

    #[test]
    fn test_rejects_unbalanced() {
        assert_eq!(reason("basic.se)nd()"), "unbalanced ')' in benchmark");
        assert_eq!(reason("basic.send((x))"), "nested parentheses in arguments");
    }

    #[test]
    fn test_display_normalizes_spacing() {
        let name: ResultName = "basic.send(k,m ,  pk_i)".parse().unwrap();
        assert_eq!(name.to_string(), "basic.send(k, m, pk_i)");
        let name: ResultName = "plain.read()".parse().unwrap();
        assert_eq!(name.to_string(), "plain.read()");
    }
}
