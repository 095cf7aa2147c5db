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

//! src/core/parser.rs
//!
//! Steno notation parser
//!
//! This module turns written strokes ("STPH", "R-R", "#H-F", "4-6") into
//! [`Keymask`] values, and `/`-separated outlines into [`Outline`]s.
//!
//! # Architecture
//! The parser uses nom combinators over the slot table in `keymask.rs`.
//! It performs two passes over the (uppercased) input:
//! 1. Recognise: does the input follow letter order, number order, or number
//!    order with letters standing in for digits (`#H-F`)?
//! 2. Align: walk the slot table, taking the next input character at every
//!    slot whose letter or digit it matches. Each taken key sets its bit.
//!
//! Every slot is optional, so any subset of keys written in steno order is
//! accepted. The hyphen slot only ever consumes a `-` and never sets a bit.

use nom::{
    character::complete::{char, satisfy},
    combinator::{map, opt},
    IResult, Parser,
};
use thiserror::Error;
use tracing::debug;

use crate::core::keymask::{Keymask, StenoSlot, LETTER_ORDER, NUMBER_ORDER, STENO_ORDER};
use crate::core::outline::Outline;

/// Separator between the strokes of an outline
pub const STROKE_SEPARATOR: char = '/';

/// Stroke parse errors
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    #[error(
        "Input keys {0} did not seem to be in steno order ({letters} or {numbers})",
        letters = LETTER_ORDER,
        numbers = NUMBER_ORDER
    )]
    InvalidStrokeSyntax(String),
}

/// Which characters a slot accepts
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Notation {
    /// `STKPWHRAO*-EUFRPBLGTSDZ`, no number bar
    Letters,
    /// `#12K3W4R50*-EU6R7B8G9SDZ`, number bar optional
    Numbers,
    /// Either character at digit slots, number bar required
    Mixed,
}

impl Notation {
    fn accepts(self, slot: &StenoSlot, c: char) -> bool {
        match slot {
            StenoSlot::Hyphen => c == '-',
            StenoSlot::Key(key) => match self {
                Notation::Letters => c == key.letter,
                Notation::Numbers => c == key.number(),
                Notation::Mixed => c == key.letter || c == key.number(),
            },
        }
    }
}

/// Parse a single stroke
///
/// Input is ASCII case-insensitive. Letter notation wins when the input is valid in
/// it; otherwise number notation sets the number bar (whether or not the input
/// starts with `#`).
///
/// # Example
/// ```
/// use steno_dictgen::core::parser::parse_stroke;
///
/// let mask = parse_stroke("#h-f")?;
/// assert_eq!(mask, parse_stroke("4-6")?);
/// assert_eq!(mask.to_string(), "4-6");
/// # Ok::<(), steno_dictgen::core::parser::ParseError>(())
/// ```
pub fn parse_stroke(input: &str) -> Result<Keymask, ParseError> {
    let input = input.to_ascii_uppercase();

    let valid_letters = recognizes(Notation::Letters, &input);
    let valid_numbers = recognizes(Notation::Numbers, &input) || recognizes(Notation::Mixed, &input);
    debug!(input = %input, valid_letters, valid_numbers, "stroke notation checked");

    if !valid_letters && !valid_numbers {
        return Err(ParseError::InvalidStrokeSyntax(input));
    }

    let number_mode = !valid_letters;
    let keys = if number_mode {
        input.strip_prefix('#').unwrap_or(&input)
    } else {
        input.as_str()
    };

    match steno_keys(Notation::Mixed, keys) {
        Ok(("", mask)) if number_mode => Ok(mask | Keymask::NUM),
        Ok(("", mask)) => Ok(mask),
        _ => Err(ParseError::InvalidStrokeSyntax(input.clone())),
    }
}

/// Parse a `/`-separated outline
///
/// Fails on the first stroke that does not parse; no partial outline is
/// returned.
pub fn parse_outline(input: &str) -> Result<Outline, ParseError> {
    let strokes = input
        .split(STROKE_SEPARATOR)
        .map(parse_stroke)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Outline::from_strokes(strokes))
}

/// True if the whole input is a stroke in the given notation
fn recognizes(notation: Notation, input: &str) -> bool {
    matches!(stroke(notation, input), Ok(("", _)))
}

/// Parse an optional or mandatory number bar followed by keys in order
fn stroke(notation: Notation, input: &str) -> IResult<&str, Keymask> {
    let (input, _) = match notation {
        Notation::Letters => (input, None),
        Notation::Numbers => opt(char('#')).parse(input)?,
        Notation::Mixed => map(char('#'), Some).parse(input)?,
    };

    steno_keys(notation, input)
}

/// Walk steno order, taking at most one input character per slot
///
/// Leftmost matching is enough: every slot is optional, so taking a key at the
/// earliest slot that accepts it never rules out a later key.
fn steno_keys(notation: Notation, input: &str) -> IResult<&str, Keymask> {
    let mut input = input;
    let mut mask = Keymask::EMPTY;

    for slot in &STENO_ORDER {
        let (rest, taken) = opt(satisfy(|c| notation.accepts(slot, c))).parse(input)?;
        if taken.is_some() {
            mask |= slot.mask();
        }
        input = rest;
    }

    Ok((input, mask))
}
