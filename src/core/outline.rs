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

//! Multi-stroke dictionary entries ("briefs")

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::core::keymask::Keymask;
use crate::core::parser::{parse_outline, ParseError, STROKE_SEPARATOR};

/// One or more strokes typed in sequence
///
/// Outlines compare positionally: `A/B` equals `A/B` but not `B/A`.
/// Hash, Eq and Ord all follow the stroke sequence, so outlines can key
/// a map by value.
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Outline {
    strokes: Vec<Keymask>,
}

impl Outline {
    /// Outline of exactly one stroke
    pub fn single(stroke: Keymask) -> Self {
        Self {
            strokes: vec![stroke],
        }
    }

    /// Builds an outline from parsed strokes
    ///
    /// An empty list becomes a single empty stroke, so an outline always
    /// has at least one stroke (the same shape `""` parses to).
    pub(crate) fn from_strokes(strokes: Vec<Keymask>) -> Self {
        if strokes.is_empty() {
            Self::single(Keymask::EMPTY)
        } else {
            Self { strokes }
        }
    }

    pub fn strokes(&self) -> &[Keymask] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Never true: an outline has at least one stroke
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// The stroke if this outline has exactly one
    pub fn as_single(&self) -> Option<Keymask> {
        match self.strokes.as_slice() {
            [stroke] => Some(*stroke),
            _ => None,
        }
    }
}

impl From<Keymask> for Outline {
    fn from(stroke: Keymask) -> Self {
        Self::single(stroke)
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stroke) in self.strokes.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", STROKE_SEPARATOR)?;
            }
            write!(f, "{}", stroke)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Outline({:?})", self.to_string())
    }
}

impl FromStr for Outline {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_outline(s)
    }
}

impl Serialize for Outline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Outline {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let notation = String::deserialize(deserializer)?;
        parse_outline(&notation).map_err(serde::de::Error::custom)
    }
}
