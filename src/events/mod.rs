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

//! src/events/mod.rs
//!
//! Event-handle code generation
//!
//! This module produces the `static const auto ... = create_event_handle(...)`
//! declarations consumed by the engine's event system:
//! - Taxonomy enums with their fixed generation order
//! - A declarative table of exclusion rules
//! - The generator that walks the cross product and renders declarations

pub mod generator;
pub mod rules;
pub mod types;

pub use generator::{generate, write_declarations, Candidate, EventHandle};
pub use rules::{first_exclusion, is_valid, ExclusionRule, EXCLUSION_RULES};
pub use types::*;

#[cfg(test)]
mod tests;
