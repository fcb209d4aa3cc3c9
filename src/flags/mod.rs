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

//! src/flags/mod.rs
//!
//! Compiler flag extraction for YCM
//!
//! This module turns a compilation database into a `.ycm_extra_conf.py`:
//! - Database loading (`compile_commands.json`)
//! - Flag/value scanning over each command line
//! - Aggregation and normalization into a sorted flag map
//! - Template substitution and the guarded, atomic write

pub mod database;
pub mod error;
pub mod extractor;
pub mod flag_map;
pub mod scanner;
pub mod template;

pub use database::CompileEntry;
pub use error::FlagsError;
pub use extractor::{run, AssumeYes, Confirm, ExtractorPaths, Outcome, Prompt};
pub use flag_map::FlagMap;
pub use scanner::{FlagPairs, ScanState};
pub use template::{Template, TemplateError};

#[cfg(test)]
mod tests;
