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

//! src/core/factory.rs
//!
//! Dictionary generation
//!
//! The factory builds two tables from a [`Rules`] value and takes their cross
//! product:
//! - **Modifier table**: chord and Qwerty wrapper for each modifier combination
//!   (`shift-ctrl` → `-FRPLG | *FRLG`, `Shift_L(Control_L(..))`)
//! - **Key table**: chord and Qwerty key for each navigation key, plus
//!   fingerspellings and number-row chords when enabled
//!
//! Every modifier/key pair becomes one entry, `modifier | key` mapped to
//! `{#<wrapped key>}{^}{>}`. Pairs are inserted in table order; when two
//! pairs land on the same chord, the later one wins.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::dictionary::Dictionary;
use crate::core::fingerspelling::FINGERSPELLINGS;
use crate::core::keymask::Keymask;
use crate::core::outline::Outline;
use crate::core::rules::Rules;
use crate::core::types::{ModifierCombo, NavKey, QwertyKey, NONSTANDARD_COMBOS, STANDARD_COMBOS};

/// Number-row chords on the left hand: `#S #T #P #H #A #O`
pub const LEFT_DIGIT_CHORDS: [Keymask; 6] = [
    Keymask::STENO_1,
    Keymask::STENO_2,
    Keymask::STENO_3,
    Keymask::STENO_4,
    Keymask::STENO_5,
    Keymask::STENO_0,
];

/// What the six left-hand number chords type
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NumberOption {
    /// No entries
    #[default]
    Off,
    /// 1 2 3 4 5 0
    DigitsLow,
    /// 6 7 8 9 5 0
    DigitsHigh,
    /// F1 F2 F3 F4 F5 F12
    FunctionsLow,
    /// F6 F7 F8 F9 F10 F11
    FunctionsHigh,
}

impl NumberOption {
    /// Keys for `LEFT_DIGIT_CHORDS`, position by position
    pub const fn keys(self) -> Option<[QwertyKey; 6]> {
        match self {
            NumberOption::Off => None,
            NumberOption::DigitsLow => Some([
                QwertyKey::N1,
                QwertyKey::N2,
                QwertyKey::N3,
                QwertyKey::N4,
                QwertyKey::N5,
                QwertyKey::N0,
            ]),
            NumberOption::DigitsHigh => Some([
                QwertyKey::N6,
                QwertyKey::N7,
                QwertyKey::N8,
                QwertyKey::N9,
                QwertyKey::N5,
                QwertyKey::N0,
            ]),
            NumberOption::FunctionsLow => Some([
                QwertyKey::F1,
                QwertyKey::F2,
                QwertyKey::F3,
                QwertyKey::F4,
                QwertyKey::F5,
                QwertyKey::F12,
            ]),
            NumberOption::FunctionsHigh => Some([
                QwertyKey::F6,
                QwertyKey::F7,
                QwertyKey::F8,
                QwertyKey::F9,
                QwertyKey::F10,
                QwertyKey::F11,
            ]),
        }
    }
}

/// Optional expansions the factory performs
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FactoryOpts {
    /// Also generate ctrl-gui, shift-ctrl-gui, ctrl-alt-gui and
    /// shift-ctrl-alt-gui ("hyper")
    pub nonstandard_mod_combos: bool,
    /// Add the fingerspelling alphabet to the key table
    pub fingerspellings: bool,
    /// Mode for `#S #T #P #H #A #O`
    pub numbers_left: NumberOption,
    /// Mode for the same chords with `*` added
    pub number_stars_left: NumberOption,
}

impl Default for FactoryOpts {
    fn default() -> Self {
        Self {
            nonstandard_mod_combos: true,
            fingerspellings: true,
            numbers_left: NumberOption::DigitsLow,
            number_stars_left: NumberOption::FunctionsLow,
        }
    }
}

impl FactoryOpts {
    /// Navigation keys and the standard modifier combinations only
    pub fn minimal() -> Self {
        Self {
            nonstandard_mod_combos: false,
            fingerspellings: false,
            numbers_left: NumberOption::Off,
            number_stars_left: NumberOption::Off,
        }
    }
}

/// Format of every generated definition
pub fn definition(combo: &ModifierCombo, key: QwertyKey) -> String {
    format!("{{#{}}}{{^}}{{>}}", combo.wrap(key))
}

/// Generates dictionaries from rules
#[derive(Clone, Debug, Default)]
pub struct DictionaryFactory {
    opts: FactoryOpts,
}

impl DictionaryFactory {
    pub fn new(opts: FactoryOpts) -> Self {
        Self { opts }
    }

    pub fn opts(&self) -> &FactoryOpts {
        &self.opts
    }

    /// Modifier chords with the combination they hold, in generation order
    pub fn modifier_table(&self, rules: &Rules) -> Vec<(Keymask, &'static ModifierCombo)> {
        let nonstandard: &'static [ModifierCombo] = if self.opts.nonstandard_mod_combos {
            &NONSTANDARD_COMBOS
        } else {
            &[]
        };

        STANDARD_COMBOS
            .iter()
            .chain(nonstandard)
            .map(|combo| (rules.combo(combo), combo))
            .collect()
    }

    /// Key chords with the Qwerty key they type, in generation order
    pub fn key_table(&self, rules: &Rules) -> Vec<(Keymask, QwertyKey)> {
        let mut keys: Vec<(Keymask, QwertyKey)> = NavKey::ALL
            .into_iter()
            .map(|key| (rules.key(key), key.qwerty()))
            .collect();

        if self.opts.fingerspellings {
            keys.extend(FINGERSPELLINGS.iter().map(|spelling| (spelling.stroke, spelling.letter)));
        }

        if let Some(numbers) = self.opts.numbers_left.keys() {
            keys.extend(LEFT_DIGIT_CHORDS.into_iter().zip(numbers));
        }

        if let Some(numbers) = self.opts.number_stars_left.keys() {
            keys.extend(
                LEFT_DIGIT_CHORDS
                    .into_iter()
                    .map(|chord| chord | Keymask::STAR)
                    .zip(numbers),
            );
        }

        keys
    }

    /// Cross product of the modifier and key tables
    ///
    /// Rules are not validated here; run `validate_rules` first, or overlapping
    /// chords will silently overwrite each other.
    pub fn generate(&self, rules: &Rules) -> Dictionary {
        let modifiers = self.modifier_table(rules);
        let keys = self.key_table(rules);
        let mut dictionary = Dictionary::new();

        for (modifier_mask, combo) in &modifiers {
            for (key_mask, key) in &keys {
                let outline = Outline::single(*modifier_mask | *key_mask);
                let entry = definition(combo, *key);

                if let Some(previous) = dictionary.insert(outline.clone(), entry) {
                    debug!(
                        outline = %outline,
                        previous = %previous,
                        combo = combo.name,
                        key = %key,
                        "Overwrote generated entry"
                    );
                }
            }
        }

        info!(
            modifiers = modifiers.len(),
            keys = keys.len(),
            entries = dictionary.len(),
            "Generated dictionary"
        );
        dictionary
    }
}
