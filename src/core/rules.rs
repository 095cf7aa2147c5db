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

//! src/core/rules.rs
//!
//! Chord assignments for navigation keys and modifiers
//!
//! A rules file is a flat JSON object from field name to stroke:
//!
//! ```json
//! { "escape": "SKP", "pageUp": "TKPWU", "layer": "-FRLG", "shift": "-FRPLG" }
//! ```
//!
//! Loading only parses strokes. Nothing is cross-checked until the rules go
//! through `core::validator`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::keymask::Keymask;
use crate::core::parser::{parse_stroke, ParseError};
use crate::core::types::{Modifier, ModifierCombo, NavKey};

/// Rules loading errors
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum RulesError {
    #[error("Invalid stroke for rules field '{field}': {source}")]
    InvalidRulesField { field: String, source: ParseError },
}

/// A field of a rules file
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RulesField {
    Key(NavKey),
    Modifier(Modifier),
}

impl RulesField {
    /// Case-insensitive lookup by name
    pub fn from_name(name: &str) -> Option<Self> {
        NavKey::from_field_name(name)
            .map(RulesField::Key)
            .or_else(|| Modifier::from_field_name(name).map(RulesField::Modifier))
    }

    pub fn name(self) -> &'static str {
        match self {
            RulesField::Key(key) => key.field_name(),
            RulesField::Modifier(modifier) => modifier.field_name(),
        }
    }
}

/// One chord per navigation key and per modifier
///
/// Fields left out of the source stay [`Keymask::EMPTY`].
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(
    try_from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct Rules {
    pub escape: Keymask,
    pub space: Keymask,
    pub tab: Keymask,
    pub r#return: Keymask,
    pub home: Keymask,
    pub page_up: Keymask,
    pub page_down: Keymask,
    pub end: Keymask,
    pub backspace: Keymask,
    pub delete: Keymask,
    pub up: Keymask,
    pub down: Keymask,
    pub left: Keymask,
    pub right: Keymask,
    pub layer: Keymask,
    pub shift: Keymask,
    pub ctrl: Keymask,
    pub alt: Keymask,
    pub gui: Keymask,
}

impl Rules {
    /// Build rules from name/stroke pairs
    ///
    /// Names match case-insensitively. Every stroke is parsed, and the first
    /// one that fails aborts loading, unknown names included. Unknown names
    /// are then logged and skipped.
    pub fn from_fields<I, K, V>(fields: I) -> Result<Self, RulesError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut rules = Rules::default();

        for (name, stroke) in fields {
            let (name, stroke) = (name.as_ref(), stroke.as_ref());

            let mask = parse_stroke(stroke).map_err(|source| RulesError::InvalidRulesField {
                field: name.to_string(),
                source,
            })?;

            let Some(field) = RulesField::from_name(name) else {
                warn!(field = name, stroke = %mask, "Ignoring unknown rules field");
                continue;
            };
            debug!(field = field.name(), stroke = %mask, "parsed");

            *rules.field_mut(field) = mask;
        }

        Ok(rules)
    }

    /// Canonical name/stroke map, every field included
    pub fn to_fields(&self) -> BTreeMap<String, String> {
        NavKey::ALL
            .into_iter()
            .map(RulesField::Key)
            .chain(Modifier::ALL.into_iter().map(RulesField::Modifier))
            .map(|field| (field.name().to_string(), self.field(field).to_string()))
            .collect()
    }

    pub fn field(&self, field: RulesField) -> Keymask {
        match field {
            RulesField::Key(key) => self.key(key),
            RulesField::Modifier(modifier) => self.modifier(modifier),
        }
    }

    pub fn key(&self, key: NavKey) -> Keymask {
        match key {
            NavKey::Escape => self.escape,
            NavKey::Space => self.space,
            NavKey::Tab => self.tab,
            NavKey::Return => self.r#return,
            NavKey::Home => self.home,
            NavKey::PageUp => self.page_up,
            NavKey::PageDown => self.page_down,
            NavKey::End => self.end,
            NavKey::Backspace => self.backspace,
            NavKey::Delete => self.delete,
            NavKey::Up => self.up,
            NavKey::Down => self.down,
            NavKey::Left => self.left,
            NavKey::Right => self.right,
        }
    }

    pub fn modifier(&self, modifier: Modifier) -> Keymask {
        match modifier {
            Modifier::Layer => self.layer,
            Modifier::Shift => self.shift,
            Modifier::Ctrl => self.ctrl,
            Modifier::Alt => self.alt,
            Modifier::Gui => self.gui,
        }
    }

    /// Chord for a modifier combination: every member's mask held together
    pub fn combo(&self, combo: &ModifierCombo) -> Keymask {
        combo
            .modifiers
            .iter()
            .fold(Keymask::EMPTY, |mask, modifier| mask | self.modifier(*modifier))
    }

    fn field_mut(&mut self, field: RulesField) -> &mut Keymask {
        match field {
            RulesField::Key(NavKey::Escape) => &mut self.escape,
            RulesField::Key(NavKey::Space) => &mut self.space,
            RulesField::Key(NavKey::Tab) => &mut self.tab,
            RulesField::Key(NavKey::Return) => &mut self.r#return,
            RulesField::Key(NavKey::Home) => &mut self.home,
            RulesField::Key(NavKey::PageUp) => &mut self.page_up,
            RulesField::Key(NavKey::PageDown) => &mut self.page_down,
            RulesField::Key(NavKey::End) => &mut self.end,
            RulesField::Key(NavKey::Backspace) => &mut self.backspace,
            RulesField::Key(NavKey::Delete) => &mut self.delete,
            RulesField::Key(NavKey::Up) => &mut self.up,
            RulesField::Key(NavKey::Down) => &mut self.down,
            RulesField::Key(NavKey::Left) => &mut self.left,
            RulesField::Key(NavKey::Right) => &mut self.right,
            RulesField::Modifier(Modifier::Layer) => &mut self.layer,
            RulesField::Modifier(Modifier::Shift) => &mut self.shift,
            RulesField::Modifier(Modifier::Ctrl) => &mut self.ctrl,
            RulesField::Modifier(Modifier::Alt) => &mut self.alt,
            RulesField::Modifier(Modifier::Gui) => &mut self.gui,
        }
    }
}

impl TryFrom<BTreeMap<String, String>> for Rules {
    type Error = RulesError;

    fn try_from(fields: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        Rules::from_fields(fields)
    }
}

impl From<Rules> for BTreeMap<String, String> {
    fn from(rules: Rules) -> Self {
        rules.to_fields()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for key in NavKey::ALL {
            assert_eq!(RulesField::from_name(key.field_name()), Some(RulesField::Key(key)));
        }
        for modifier in Modifier::ALL {
            assert_eq!(
                RulesField::from_name(modifier.field_name()),
                Some(RulesField::Modifier(modifier))
            );
        }
        assert_eq!(RulesField::from_name("hyper"), None);
    }

    #[test]
    fn test_combo_mask_is_union() {
        let rules = Rules {
            shift: Keymask::RIGHT_P,
            ctrl: Keymask::STAR,
            ..Rules::default()
        };
        let shift_ctrl = crate::core::types::STANDARD_COMBOS[5];

        assert_eq!(rules.combo(&shift_ctrl), Keymask::RIGHT_P | Keymask::STAR);
    }
}
