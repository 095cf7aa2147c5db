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

//! Plover dictionaries and collision detection
//!
//! A dictionary maps outlines to definitions. Outlines key the map by value,
//! so lookups and collision checks against another dictionary are plain map
//! lookups rather than pairwise scans.
//!
//! On disk a dictionary is a JSON object whose keys are outlines in canonical
//! notation, sorted, two-space indented, with `<`/`>` left unescaped.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::outline::Outline;
use crate::core::parser::{parse_outline, ParseError};

/// Dictionary loading and encoding errors
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// A key did not parse as an outline
    #[error("Invalid outline '{key}' in dictionary: {source}")]
    DictionaryParseFailure { key: String, source: ParseError },

    #[error("Invalid dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outline to definition mapping
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(
    try_from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct Dictionary {
    entries: BTreeMap<Outline, String>,
}

/// An outline defined in both dictionaries
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Collision {
    pub outline: Outline,
    pub ours: String,
    pub theirs: String,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Brief {} collides with other dictionary ({} vs {})",
            self.outline, self.ours, self.theirs
        )
    }
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the definition it replaced
    pub fn insert(&mut self, outline: Outline, definition: String) -> Option<String> {
        self.entries.insert(outline, definition)
    }

    pub fn get(&self, outline: &Outline) -> Option<&str> {
        self.entries.get(outline).map(String::as_str)
    }

    pub fn contains(&self, outline: &Outline) -> bool {
        self.entries.contains_key(outline)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in outline order
    pub fn iter(&self) -> impl Iterator<Item = (&Outline, &str)> {
        self.entries
            .iter()
            .map(|(outline, definition)| (outline, definition.as_str()))
    }

    /// Build a dictionary from raw `outline → definition` pairs
    ///
    /// Keys are parsed in sorted order; the first one that fails aborts the
    /// whole load. Spellings that normalise to the same outline (`#S` and
    /// `1`) collapse into one entry, the last in key order winning.
    pub fn from_definitions(definitions: BTreeMap<String, String>) -> Result<Self, DictionaryError> {
        let mut dictionary = Dictionary::new();

        for (key, definition) in definitions {
            let outline = match parse_outline(&key) {
                Ok(outline) => outline,
                Err(source) => return Err(DictionaryError::DictionaryParseFailure { key, source }),
            };

            if let Some(previous) = dictionary.insert(outline.clone(), definition) {
                debug!(key = %key, outline = %outline, previous = %previous, "Duplicate outline spelling");
            }
        }

        Ok(dictionary)
    }

    /// Canonical `outline → definition` pairs, sorted by outline text
    pub fn to_definitions(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(outline, definition)| (outline.to_string(), definition.clone()))
            .collect()
    }

    /// Parse a dictionary file's contents
    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        let definitions: BTreeMap<String, String> = serde_json::from_str(json)?;
        Self::from_definitions(definitions)
    }

    /// Encode for writing to disk, with a trailing newline
    pub fn to_json(&self) -> Result<String, DictionaryError> {
        let mut json = serde_json::to_string_pretty(&self.to_definitions())?;
        json.push('\n');
        Ok(json)
    }

    /// Every entry of `self` whose outline `other` also defines
    ///
    /// Definitions are not compared: an outline in both is a collision even
    /// when both sides type the same thing. Results follow `self`'s order.
    pub fn collisions_with(&self, other: &Dictionary) -> Vec<Collision> {
        self.entries
            .iter()
            .filter_map(|(outline, ours)| {
                other.entries.get(outline).map(|theirs| Collision {
                    outline: outline.clone(),
                    ours: ours.clone(),
                    theirs: theirs.clone(),
                })
            })
            .inspect(|collision| {
                warn!(
                    brief = %collision.outline,
                    ours = %collision.ours,
                    theirs = %collision.theirs,
                    "Brief collides with other dictionary"
                );
            })
            .collect()
    }
}

impl TryFrom<BTreeMap<String, String>> for Dictionary {
    type Error = DictionaryError;

    fn try_from(definitions: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        Dictionary::from_definitions(definitions)
    }
}

impl From<Dictionary> for BTreeMap<String, String> {
    fn from(dictionary: Dictionary) -> Self {
        dictionary.to_definitions()
    }
}

impl FromIterator<(Outline, String)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (Outline, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
