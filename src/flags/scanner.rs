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

//! src/flags/scanner.rs
//!
//! Flag/value pairing over a compiler command line
//!
//! Tokens are read left to right. A token starting with `-` is a flag; any
//! other token is a value. A flag immediately followed by a value is
//! recorded with that value (`-I include`), otherwise it is recorded with
//! an empty value (`-Wall`). Output flags (`-o`, `-c`) are never recorded
//! and swallow the value that follows them.
//!
//! # State machine
//!
//! ```text
//!             flag (kept)                 value
//!   Idle ───────────────────▶ Awaiting ──────────▶ Idle   emit (flag, value)
//!    │                          │  flag: emit (pending, "")
//!    │ flag (ignored)           ▼
//!    └──────────────────▶ Discarding ────────────▶ Idle   value dropped
//! ```
//!
//! A value seen in `Idle` (the compiler itself, source files) is skipped.
//! At the end of the command a pending flag is emitted with an empty value.

/// Flags whose values name outputs rather than configure compilation.
pub const IGNORED_FLAGS: &[&str] = &["-o", "-c"];

/// A flag and its value; the value is empty for standalone flags.
pub type FlagPair<'a> = (&'a str, &'a str);

/// Checks whether a token is a flag rather than a value.
pub fn is_flag(token: &str) -> bool {
    token.starts_with('-')
}

/// Checks whether a flag is dropped from the flag map.
pub fn is_ignored(flag: &str) -> bool {
    IGNORED_FLAGS.contains(&flag)
}

/// Scanner state between two tokens
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ScanState<'a> {
    /// No flag is waiting for a value
    #[default]
    Idle,
    /// A kept flag is waiting for a possible value
    AwaitingValue(&'a str),
    /// An ignored flag will swallow the next value
    Discarding(&'a str),
}

impl<'a> ScanState<'a> {
    /// Feeds one token, returning the next state and the pair it completes.
    pub fn advance(self, token: &'a str) -> (Self, Option<FlagPair<'a>>) {
        if is_flag(token) {
            let emitted = match self {
                ScanState::AwaitingValue(pending) => Some((pending, "")),
                ScanState::Idle | ScanState::Discarding(_) => None,
            };

            let next = if is_ignored(token) {
                ScanState::Discarding(token)
            } else {
                ScanState::AwaitingValue(token)
            };

            return (next, emitted);
        }

        match self {
            ScanState::AwaitingValue(pending) => (ScanState::Idle, Some((pending, token))),
            ScanState::Discarding(flag) => {
                log::trace!("dropping {} {}", flag, token);
                (ScanState::Idle, None)
            }
            ScanState::Idle => (ScanState::Idle, None),
        }
    }

    /// Ends the command, returning the pending flag if one is left.
    pub fn finish(self) -> Option<FlagPair<'a>> {
        match self {
            ScanState::AwaitingValue(pending) => Some((pending, "")),
            ScanState::Idle | ScanState::Discarding(_) => None,
        }
    }
}

/// Iterator over the flag pairs of one command line
///
/// # Example
/// ```
/// use ror_devtools::flags::scanner::FlagPairs;
///
/// let pairs: Vec<_> = FlagPairs::new("g++ -I inc -Wall -c a.cpp".split_whitespace()).collect();
/// assert_eq!(pairs, [("-I", "inc"), ("-Wall", "")]);
/// ```
pub struct FlagPairs<'a, I> {
    tokens: I,
    state: ScanState<'a>,
    finished: bool,
}

impl<'a, I> FlagPairs<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    /// Creates a scanner over the given tokens.
    pub fn new(tokens: I) -> Self {
        Self {
            tokens,
            state: ScanState::Idle,
            finished: false,
        }
    }
}

impl<'a, I> Iterator for FlagPairs<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = FlagPair<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        for token in self.tokens.by_ref() {
            let (next, emitted) = self.state.advance(token);
            self.state = next;

            if emitted.is_some() {
                return emitted;
            }
        }

        self.finished = true;
        std::mem::take(&mut self.state).finish()
    }
}

/// Scans one command line split on whitespace.
pub fn scan_command(command: &str) -> FlagPairs<'_, std::str::SplitWhitespace<'_>> {
    FlagPairs::new(command.split_whitespace())
}
