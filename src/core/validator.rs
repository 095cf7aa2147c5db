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

//! Rules validation
//!
//! Checks a [`Rules`] value for every way two generated chords could land on
//! the same stroke, or a chord could shadow a Plover fingerspelling.
//!
//! Validation never stops at the first problem. Every check runs, and every
//! violation is collected into a [`ValidationReport`] in a fixed order:
//! 1. Blank key masks, then blank modifier masks
//! 2. Duplicate key masks, then duplicate modifier masks
//! 3. `mod+key` equal to a modifier, then `mod+key` equal to a key
//! 4. Two different `mod+key` pairs equal (reported from both sides)
//! 5. Fingerspelling matches
//!
//! Modifiers here means all 16 combinations, non-standard ones included,
//! whether or not the dictionary will be generated with them.
//!
//! # Example
//! ```
//! use steno_dictgen::core::rules::Rules;
//! use steno_dictgen::core::validator::validate_rules;
//!
//! let report = validate_rules(&Rules::default());
//! assert!(!report.is_valid());
//! assert_eq!(report.violations[0].to_string(), "Mask for escape must not be blank");
//! ```

use thiserror::Error;
use tracing::debug;

use crate::core::keymask::Keymask;
use crate::core::rules::Rules;
use crate::core::types::{all_combos, NavKey};

/// A single problem found in a rules file
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum RuleViolation {
    #[error("Mask for {name} must not be blank")]
    Blank { name: String },

    #[error("Masks for {first} and {second} must not be the same ({mask})")]
    Duplicate {
        first: String,
        second: String,
        mask: Keymask,
    },

    #[error("Mask for {name} matches a fingerspelling ({mask})")]
    Fingerspelling { name: String, mask: Keymask },
}

/// Rules that did not pass validation, with everything that was wrong
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("Rules failed validation with {} violation(s)", .violations.len())]
pub struct RulesValidationFailure {
    pub violations: Vec<RuleViolation>,
}

/// Every violation found, in check order
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationReport {
    pub violations: Vec<RuleViolation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing was found
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// `Ok` for a clean report, otherwise every violation as one error
    pub fn into_result(self) -> Result<(), RulesValidationFailure> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(RulesValidationFailure {
                violations: self.violations,
            })
        }
    }

    fn blank(&mut self, name: impl Into<String>) {
        self.violations.push(RuleViolation::Blank { name: name.into() });
    }

    fn duplicate(&mut self, first: impl Into<String>, second: impl Into<String>, mask: Keymask) {
        self.violations.push(RuleViolation::Duplicate {
            first: first.into(),
            second: second.into(),
            mask,
        });
    }

    fn fingerspelling(&mut self, name: impl Into<String>, mask: Keymask) {
        self.violations.push(RuleViolation::Fingerspelling {
            name: name.into(),
            mask,
        });
    }
}

/// A chord with the name it is reported under
type Named = (&'static str, Keymask);

/// Run every check against `rules`
pub fn validate_rules(rules: &Rules) -> ValidationReport {
    let keys: Vec<Named> = NavKey::ALL
        .into_iter()
        .map(|key| (key.field_name(), rules.key(key)))
        .collect();
    let mods: Vec<Named> = all_combos()
        .map(|combo| (combo.name, rules.combo(combo)))
        .collect();

    let mut report = ValidationReport::new();

    check_blank(&mut report, &keys);
    check_blank(&mut report, &mods);
    check_distinct(&mut report, &keys);
    check_distinct(&mut report, &mods);
    check_combos_against(&mut report, &mods, &keys, &mods);
    check_combos_against(&mut report, &mods, &keys, &keys);
    check_combo_pairs(&mut report, &mods, &keys);
    check_fingerspellings(&mut report, &mods, &keys);

    debug!(violations = report.len(), "rules validated");
    report
}

fn check_blank(report: &mut ValidationReport, masks: &[Named]) {
    for (name, mask) in masks {
        if mask.is_empty() {
            report.blank(*name);
        }
    }
}

fn check_distinct(report: &mut ValidationReport, masks: &[Named]) {
    for (i, (first, mask)) in masks.iter().enumerate() {
        for (second, other) in &masks[i + 1..] {
            if mask == other {
                report.duplicate(*first, *second, *mask);
            }
        }
    }
}

/// `mod+key` must not equal any single chord in `targets`
fn check_combos_against(report: &mut ValidationReport, mods: &[Named], keys: &[Named], targets: &[Named]) {
    for (mod_name, mod_mask) in mods {
        for (key_name, key_mask) in keys {
            let combined = *mod_mask | *key_mask;
            for (target_name, target) in targets {
                if combined == *target {
                    report.duplicate(format!("{}+{}", mod_name, key_name), *target_name, *target);
                }
            }
        }
    }
}

/// No two different `mod+key` pairs may produce the same chord
fn check_combo_pairs(report: &mut ValidationReport, mods: &[Named], keys: &[Named]) {
    for (i, (mod_name, mod_mask)) in mods.iter().enumerate() {
        for (j, (key_name, key_mask)) in keys.iter().enumerate() {
            let combined = *mod_mask | *key_mask;
            for (k, (other_mod_name, other_mod)) in mods.iter().enumerate() {
                for (l, (other_key_name, other_key)) in keys.iter().enumerate() {
                    if i == k && j == l {
                        continue;
                    }
                    if combined == *other_mod | *other_key {
                        report.duplicate(
                            format!("{}+{}", mod_name, key_name),
                            format!("{}+{}", other_mod_name, other_key_name),
                            combined,
                        );
                    }
                }
            }
        }
    }
}

/// Modifiers, bare keys (reported once) and every `mod+key`
fn check_fingerspellings(report: &mut ValidationReport, mods: &[Named], keys: &[Named]) {
    for (i, (mod_name, mod_mask)) in mods.iter().enumerate() {
        if mod_mask.is_fingerspelling() {
            report.fingerspelling(*mod_name, *mod_mask);
        }
        for (key_name, key_mask) in keys {
            if i == 0 && key_mask.is_fingerspelling() {
                report.fingerspelling(*key_name, *key_mask);
            }
            let combined = *mod_mask | *key_mask;
            if combined.is_fingerspelling() {
                report.fingerspelling(format!("{}+{}", mod_name, key_name), combined);
            }
        }
    }
}
