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

//! src/events/rules.rs
//!
//! Exclusion rules for event-handle candidates
//!
//! Not every (type, code, modifier, state) tuple names an event the
//! engine can produce. Mouse events carry no key code and never resize or
//! focus; window events carry neither a code nor a modifier. Keyboard
//! events have no restrictions.
//!
//! Rules are evaluated in table order and the first match wins.

use crate::events::generator::Candidate;
use crate::events::types::{EventState, EventType};

/// A named predicate that removes candidates from generation.
#[derive(Clone, Copy)]
pub struct ExclusionRule {
    /// Short human-readable description, used in logs and tests
    pub name: &'static str,

    /// Returns true when the candidate must be skipped
    pub excludes: fn(&Candidate) -> bool,
}

impl std::fmt::Debug for ExclusionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExclusionRule").field("name", &self.name).finish()
    }
}

impl PartialEq for ExclusionRule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// All exclusion rules, in evaluation order.
pub const EXCLUSION_RULES: &[ExclusionRule] = &[
    ExclusionRule {
        name: "mouse events carry no key code",
        excludes: mouse_with_code,
    },
    ExclusionRule {
        name: "mouse events never resize or focus",
        excludes: mouse_with_window_state,
    },
    ExclusionRule {
        name: "window events carry no key code",
        excludes: window_with_code,
    },
    ExclusionRule {
        name: "window events carry no modifier",
        excludes: window_with_modifier,
    },
];

fn mouse_with_code(candidate: &Candidate) -> bool {
    candidate.event_type == EventType::Mouse && !candidate.code.is_none()
}

fn mouse_with_window_state(candidate: &Candidate) -> bool {
    candidate.event_type == EventType::Mouse
        && matches!(candidate.state, EventState::Resize | EventState::Focus)
}

fn window_with_code(candidate: &Candidate) -> bool {
    candidate.event_type == EventType::Window && !candidate.code.is_none()
}

fn window_with_modifier(candidate: &Candidate) -> bool {
    candidate.event_type == EventType::Window && !candidate.modifier.is_none()
}

/// Returns the first rule that excludes `candidate`, if any.
pub fn first_exclusion(candidate: &Candidate) -> Option<&'static ExclusionRule> {
    EXCLUSION_RULES.iter().find(|rule| (rule.excludes)(candidate))
}

/// Checks whether a candidate survives every exclusion rule.
pub fn is_valid(candidate: &Candidate) -> bool {
    first_exclusion(candidate).is_none()
}
