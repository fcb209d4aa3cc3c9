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

//! src/flags/database.rs
//!
//! Compilation database loading
//!
//! `compile_commands.json` is produced by the build system (CMake's
//! `CMAKE_EXPORT_COMPILE_COMMANDS`, Bear, ...). Each entry describes how one
//! translation unit was compiled, either as a single shell `command` string
//! or as an already split `arguments` array. Only the compiler invocation
//! matters here; `directory` and `file` are ignored.

use serde::Deserialize;
use std::{fs, path::Path};

use crate::flags::FlagsError;

/// One compiler invocation from the database
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct CompileEntry {
    /// Whole command line as one string, split on whitespace
    #[serde(default)]
    pub command: Option<String>,

    /// Command line already split into arguments
    #[serde(default)]
    pub arguments: Option<Vec<String>>,
}

impl CompileEntry {
    /// Creates an entry from a single command string.
    pub fn from_command(command: &str) -> Self {
        Self {
            command: Some(command.to_string()),
            arguments: None,
        }
    }

    /// Returns the tokens of the invocation, or `None` if the entry has
    /// no command at all.
    ///
    /// `command` takes precedence over `arguments` when both are present.
    pub fn tokens(&self) -> Option<Vec<&str>> {
        if let Some(command) = &self.command {
            return Some(command.split_whitespace().collect());
        }

        self.arguments
            .as_ref()
            .map(|args| args.iter().map(String::as_str).collect())
    }
}

/// Parses a compilation database from its JSON text.
///
/// `path` is only used for error messages.
///
/// # Errors
///
/// Returns `FlagsError::MalformedDatabase` for invalid JSON and
/// `FlagsError::MissingCommand` for an entry without a command.
pub fn parse_database(content: &str, path: &Path) -> Result<Vec<CompileEntry>, FlagsError> {
    let entries: Vec<CompileEntry> =
        serde_json::from_str(content).map_err(|source| FlagsError::MalformedDatabase {
            path: path.to_path_buf(),
            source,
        })?;

    if let Some(index) = entries.iter().position(|e| e.tokens().is_none()) {
        return Err(FlagsError::MissingCommand(index));
    }

    log::debug!("loaded {} compile entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Reads and parses the compilation database at `path`.
///
/// # Errors
///
/// Returns `FlagsError::Read` if the file cannot be read, otherwise the
/// errors of [`parse_database`].
pub fn load_database(path: &Path) -> Result<Vec<CompileEntry>, FlagsError> {
    let content = fs::read_to_string(path).map_err(|source| FlagsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_database(&content, path)
}
