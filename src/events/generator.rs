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

//! src/events/generator.rs
//!
//! Event-handle declaration generator
//!
//! Walks the cross product of the four event taxonomies in nested order
//! (type, then code, then modifier, then state), drops the tuples rejected
//! by the exclusion rules and emits one C++ constant per survivor:
//!
//! ```text
//! static const auto keyboard_a_left_shift_down = create_event_handle(EventType::keyboard, EventCode::a, EventModifier::left_shift, EventState::down);
//! ```
//!
//! Output is a pure function of the taxonomies and the rule table, so
//! running the generator twice always yields the same file.

use std::fmt;
use std::io::{self, Write};

use crate::events::rules;
use crate::events::types::{EventCode, EventModifier, EventState, EventType};

/// One (type, code, modifier, state) tuple from the cross product.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Candidate {
    pub event_type: EventType,
    pub code: EventCode,
    pub modifier: EventModifier,
    pub state: EventState,
}

impl Candidate {
    /// Iterates every candidate tuple in generation order.
    ///
    /// The iterator is lazy; it yields
    /// `|types| * |codes| * |modifiers| * |states|` tuples, valid or not.
    pub fn all() -> impl Iterator<Item = Candidate> {
        EventType::ALL.iter().flat_map(|&event_type| {
            EventCode::ALL.iter().flat_map(move |&code| {
                EventModifier::ALL.iter().flat_map(move |&modifier| {
                    EventState::ALL.iter().map(move |&state| Candidate {
                        event_type,
                        code,
                        modifier,
                        state,
                    })
                })
            })
        })
    }

    /// Builds the constant name for this tuple.
    ///
    /// `none` components are left out of the name, so
    /// (mouse, none, left_mouse, drag) becomes `mouse_left_mouse_drag`.
    pub fn handle_name(&self) -> String {
        let mut name = format!("{}_", self.event_type);

        if !self.code.is_none() {
            name.push_str(self.code.name());
            name.push('_');
        }

        if !self.modifier.is_none() {
            name.push_str(self.modifier.name());
            name.push('_');
        }

        name.push_str(self.state.name());
        name
    }
}

/// A named constant for one valid candidate
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventHandle {
    /// Constant name, e.g. `keyboard_esc_up`
    pub name: String,

    /// The tuple the handle is created from
    pub candidate: Candidate,
}

impl EventHandle {
    fn new(candidate: Candidate) -> Self {
        Self {
            name: candidate.handle_name(),
            candidate,
        }
    }
}

impl fmt::Display for EventHandle {
    /// Formats the handle as a C++ declaration.
    ///
    /// Unlike the name, the initializer spells out `none` components.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Candidate {
            event_type,
            code,
            modifier,
            state,
        } = self.candidate;

        write!(
            f,
            "static const auto {} = create_event_handle(EventType::{}, EventCode::{}, EventModifier::{}, EventState::{});",
            self.name, event_type, code, modifier, state
        )
    }
}

/// Generates the handle for every valid candidate, in generation order.
pub fn generate() -> Vec<EventHandle> {
    Candidate::all()
        .filter(|candidate| match rules::first_exclusion(candidate) {
            Some(rule) => {
                log::trace!("skipping {:?}: {}", candidate, rule.name);
                false
            }
            None => true,
        })
        .map(EventHandle::new)
        .collect()
}

/// Writes every declaration followed by the `Total vars = N` summary line.
///
/// Returns the number of declarations written.
///
/// # Errors
///
/// Returns any I/O error raised by `out`.
pub fn write_declarations<W: Write>(out: &mut W) -> io::Result<usize> {
    let mut total = 0;

    for handle in generate() {
        writeln!(out, "{}", handle)?;
        total += 1;
    }

    writeln!(out, "Total vars = {}", total)?;
    log::debug!("generated {} event handles", total);

    Ok(total)
}
