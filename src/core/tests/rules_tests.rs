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

use std::collections::BTreeMap;

use crate::core::{
    keymask::Keymask,
    parser::ParseError,
    rules::{Rules, RulesError},
    types::{Modifier, NavKey},
};

const RULES_JSON: &str = r#"{
    "escape": "SKP",
    "space": "SP",
    "tab": "TPW",
    "return": "TRE",
    "home": "PWH",
    "pageUp": "TKPWU",
    "pageDown": "TKPWH",
    "end": "TKW",
    "backspace": "KPW",
    "delete": "PWR",
    "up": "PU",
    "down": "TKPH",
    "left": "TPHRE",
    "right": "TREU",
    "layer": "-FRLG",
    "shift": "-FRPLG",
    "ctrl": "-FRLGTS",
    "alt": "-FRBLG",
    "gui": "-FRLGDZ"
}"#;

#[test]
fn test_rules_unmarshal() {
    use Keymask as K;

    let expected = Rules {
        escape: K::LEFT_S | K::LEFT_K | K::LEFT_P,
        space: K::LEFT_S | K::LEFT_P,
        tab: K::LEFT_T | K::LEFT_P | K::LEFT_W,
        r#return: K::LEFT_T | K::LEFT_R | K::RIGHT_E,
        home: K::LEFT_P | K::LEFT_W | K::LEFT_H,
        page_up: K::LEFT_T | K::LEFT_K | K::LEFT_P | K::LEFT_W | K::RIGHT_U,
        page_down: K::LEFT_T | K::LEFT_K | K::LEFT_P | K::LEFT_W | K::LEFT_H,
        end: K::LEFT_T | K::LEFT_K | K::LEFT_W,
        backspace: K::LEFT_K | K::LEFT_P | K::LEFT_W,
        delete: K::LEFT_P | K::LEFT_W | K::LEFT_R,
        up: K::LEFT_P | K::RIGHT_U,
        down: K::LEFT_T | K::LEFT_K | K::LEFT_P | K::LEFT_H,
        left: K::LEFT_T | K::LEFT_P | K::LEFT_H | K::LEFT_R | K::RIGHT_E,
        right: K::LEFT_T | K::LEFT_R | K::RIGHT_E | K::RIGHT_U,
        layer: K::RIGHT_F | K::RIGHT_R | K::RIGHT_L | K::RIGHT_G,
        shift: K::RIGHT_F | K::RIGHT_R | K::RIGHT_P | K::RIGHT_L | K::RIGHT_G,
        ctrl: K::RIGHT_F | K::RIGHT_R | K::RIGHT_L | K::RIGHT_G | K::RIGHT_T | K::RIGHT_S,
        alt: K::RIGHT_F | K::RIGHT_R | K::RIGHT_B | K::RIGHT_L | K::RIGHT_G,
        gui: K::RIGHT_F | K::RIGHT_R | K::RIGHT_L | K::RIGHT_G | K::RIGHT_D | K::RIGHT_Z,
    };

    let actual: Rules = serde_json::from_str(RULES_JSON).unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn test_field_names_ignore_case() {
    let rules = Rules::from_fields([("PAGEUP", "TKPWU"), ("Shift", "-FRPLG")]).unwrap();

    assert_eq!(rules.key(NavKey::PageUp).to_string(), "TKPWU");
    assert_eq!(rules.modifier(Modifier::Shift).to_string(), "-FRPLG");
}

#[test]
fn test_missing_fields_stay_blank() {
    let rules = Rules::from_fields([("escape", "SKP")]).unwrap();

    assert!(!rules.escape.is_empty());
    assert!(rules.space.is_empty());
    assert!(rules.gui.is_empty());
}

#[test]
fn test_unknown_fields_are_skipped() {
    let rules = Rules::from_fields([("escape", "SKP"), ("hyper", "-FRLGZ")]).unwrap();
    assert_eq!(rules, Rules::from_fields([("escape", "SKP")]).unwrap());
}

#[test]
fn test_unknown_field_with_bad_stroke_fails() {
    let err = Rules::from_fields([("escape", "SKP"), ("hyper", "ZS")]).unwrap_err();

    assert_eq!(
        err,
        RulesError::InvalidRulesField {
            field: "hyper".to_string(),
            source: ParseError::InvalidStrokeSyntax("ZS".to_string()),
        }
    );
}

#[test]
fn test_bad_stroke_names_field() {
    let err = Rules::from_fields([("escape", "SKP"), ("tab", "ZZ")]).unwrap_err();

    assert_eq!(
        err,
        RulesError::InvalidRulesField {
            field: "tab".to_string(),
            source: ParseError::InvalidStrokeSyntax("ZZ".to_string()),
        }
    );
    assert!(err.to_string().starts_with("Invalid stroke for rules field 'tab'"));
}

#[test]
fn test_bad_stroke_fails_deserialize() {
    let json = r#"{ "escape": "SKP", "layer": "not a stroke" }"#;
    assert!(serde_json::from_str::<Rules>(json).is_err());
}

#[test]
fn test_to_fields_round_trips() {
    let rules: Rules = serde_json::from_str(RULES_JSON).unwrap();
    let fields: BTreeMap<String, String> = rules.to_fields();

    assert_eq!(fields.len(), 19);
    assert_eq!(fields["pageUp"], "TKPWU");
    assert_eq!(fields["left"], "TPHRE");
    assert_eq!(Rules::try_from(fields).unwrap(), rules);
}

#[test]
fn test_serialize_uses_field_names() {
    let rules: Rules = serde_json::from_str(RULES_JSON).unwrap();
    let json = serde_json::to_value(rules).unwrap();

    assert_eq!(json["return"], "TRE");
    assert_eq!(json["ctrl"], "-FRLGTS");
}
