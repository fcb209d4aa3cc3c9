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

//! src/flags/template.rs
//!
//! `$`-placeholder templates
//!
//! Templates use the same syntax as Python's `string.Template`, which the
//! YCM configuration templates are written for:
//! - `$name` and `${name}` are replaced by the value for `name`
//! - `$$` is a literal `$`
//! - identifiers are ASCII letters, digits and `_`, not starting with a digit
//!
//! Any other use of `$` is an error, as is a placeholder without a value.
//!
//! # Architecture
//! A nom parser splits the template into segments; substitution walks the
//! segments and looks each placeholder up.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till1, take_while},
    character::complete::{char, satisfy},
    combinator::{map, recognize},
    sequence::{delimited, preceded},
    IResult, Parser,
};
use std::collections::HashMap;
use thiserror::Error;

/// Template errors with position context
#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error("Invalid placeholder on line {line}, column {column}")]
    InvalidPlaceholder { line: usize, column: usize },

    #[error("No value for placeholder '${0}'")]
    UnknownPlaceholder(String),
}

/// Piece of a parsed template
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Segment<'a> {
    /// Literal text, copied as-is
    Text(&'a str),
    /// `$$`
    Dollar,
    /// `$name` or `${name}`
    Placeholder(&'a str),
}

/// Parsed template borrowing its source text
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Template<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> Template<'a> {
    /// Parses template text.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::InvalidPlaceholder` pointing at the first
    /// `$` that does not start a valid placeholder or escape.
    pub fn parse(source: &'a str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut input = source;

        while !input.is_empty() {
            match parse_segment(input) {
                Ok((rest, segment)) => {
                    segments.push(segment);
                    input = rest;
                }
                Err(_) => {
                    let offset = source.len() - input.len();
                    return Err(invalid_placeholder_at(source, offset));
                }
            }
        }

        Ok(Self { segments })
    }

    /// The parsed segments, in source order.
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Names of all placeholders, in source order, with repeats.
    pub fn placeholders(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(*name),
            Segment::Text(_) | Segment::Dollar => None,
        })
    }

    /// Replaces every placeholder with its value.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::UnknownPlaceholder` for the first placeholder
    /// missing from `values`.
    pub fn substitute(&self, values: &HashMap<&str, String>) -> Result<String, TemplateError> {
        let mut output = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Text(text) => output.push_str(text),
                Segment::Dollar => output.push('$'),
                Segment::Placeholder(name) => {
                    let value = values
                        .get(name)
                        .ok_or_else(|| TemplateError::UnknownPlaceholder(name.to_string()))?;
                    output.push_str(value);
                }
            }
        }

        Ok(output)
    }
}

/// Parses and substitutes in one step.
///
/// # Errors
///
/// Returns any error of [`Template::parse`] or [`Template::substitute`].
pub fn render(source: &str, values: &HashMap<&str, String>) -> Result<String, TemplateError> {
    Template::parse(source)?.substitute(values)
}

/// Parse one segment starting at `input`
///
/// The escape must be tried before the placeholders, and `${` before `$`.
pub fn parse_segment(input: &str) -> IResult<&str, Segment<'_>> {
    alt((
        map(tag("$$"), |_| Segment::Dollar),
        map(delimited(tag("${"), identifier, char('}')), Segment::Placeholder),
        map(preceded(char('$'), identifier), Segment::Placeholder),
        map(take_till1(|c: char| c == '$'), Segment::Text),
    ))
    .parse(input)
}

/// Parse a placeholder identifier (`[_A-Za-z][_A-Za-z0-9]*`)
pub fn identifier(input: &str) -> IResult<&str, &str> {
    recognize((
        satisfy(|c: char| c == '_' || c.is_ascii_alphabetic()),
        take_while(|c: char| c == '_' || c.is_ascii_alphanumeric()),
    ))
    .parse(input)
}

fn invalid_placeholder_at(source: &str, offset: usize) -> TemplateError {
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let column = match before.rfind('\n') {
        Some(newline) => before.len() - newline,
        None => before.len() + 1,
    };

    TemplateError::InvalidPlaceholder { line, column }
}
