// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/flags/flag_map.rs
//!
//! Aggregated compiler flags
//!
//! The flag map collects every flag seen across the compilation database,
//! keyed by flag text. A later entry overwrites the value recorded by an
//! earlier one. The map always starts with `-x c++` and `-std=c++17` so
//! that headers are parsed as C++17 even when no entry says so, and any
//! older standard requested by an entry is removed again by
//! [`FlagMap::normalize`].

use std::collections::BTreeMap;

use crate::flags::database::CompileEntry;
use crate::flags::scanner::{FlagPair, FlagPairs};

/// Flags every map starts with.
pub const DEFAULT_FLAGS: &[FlagPair<'static>] = &[("-x", "c++"), ("-std=c++17", "")];

/// Standard selections replaced by the default `-std=c++17`.
pub const LEGACY_STANDARDS: &[&str] = &["-std=c++11", "-std=c++14", "-std=gnu++11", "-std=gnu++14"];

/// Sorted, de-duplicated flag → value map
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlagMap {
    flags: BTreeMap<String, String>,
}

impl FlagMap {
    /// Creates a map holding only the default flags.
    pub fn new() -> Self {
        let flags = DEFAULT_FLAGS
            .iter()
            .map(|&(flag, value)| (flag.to_string(), value.to_string()))
            .collect();

        Self { flags }
    }

    /// Builds a normalized map from a whole compilation database.
    pub fn from_entries(entries: &[CompileEntry]) -> Self {
        let mut map = Self::new();

        for entry in entries {
            if let Some(tokens) = entry.tokens() {
                map.extend(FlagPairs::new(tokens.into_iter()));
            }
        }

        map.normalize();
        map
    }

    /// Records a flag, replacing any previous value.
    pub fn insert(&mut self, flag: &str, value: &str) {
        self.flags.insert(flag.to_string(), value.to_string());
    }

    /// Returns the value recorded for `flag`.
    pub fn get(&self, flag: &str) -> Option<&str> {
        self.flags.get(flag).map(String::as_str)
    }

    /// Checks whether `flag` is present.
    pub fn contains(&self, flag: &str) -> bool {
        self.flags.contains_key(flag)
    }

    /// Number of distinct flags.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// True if the map holds no flags.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Iterates flags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.flags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Removes legacy `-std` selections so C++17 is the only standard left.
    pub fn normalize(&mut self) {
        for legacy in LEGACY_STANDARDS {
            if self.flags.remove(*legacy).is_some() {
                log::debug!("dropped legacy standard {}", legacy);
            }
        }
    }

    /// Renders the map as the body of a Python list of strings.
    ///
    /// Each flag becomes a `'flag',` line, followed by a `'value',` line
    /// unless the value is empty. Text is copied verbatim between the
    /// quotes, so escapes written by the build system reach Python as-is.
    /// Lines are indented by four spaces and joined with newlines. The
    /// block ends with a newline only when the last flag has no value.
    pub fn render(&self) -> String {
        let mut block = self
            .iter()
            .flat_map(|(flag, value)| {
                let value_line = (!value.is_empty()).then(|| quoted_line(value));
                std::iter::once(quoted_line(flag)).chain(value_line)
            })
            .collect::<Vec<_>>()
            .join("\n");

        if self.flags.values().next_back().is_some_and(String::is_empty) {
            block.push('\n');
        }

        block
    }
}

impl Default for FlagMap {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Extend<FlagPair<'a>> for FlagMap {
    fn extend<T: IntoIterator<Item = FlagPair<'a>>>(&mut self, pairs: T) {
        for (flag, value) in pairs {
            self.insert(flag, value);
        }
    }
}

fn quoted_line(text: &str) -> String {
    format!("    '{}',", text)
}
