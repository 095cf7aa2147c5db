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

use super::super::*;
use std::{collections::BTreeMap, fs, path::PathBuf};
use tempfile::TempDir;

use crate::core::{Keymask, Outline, RulesError};

const RULES_JSON: &str = r#"{
    "escape": "SKP",
    "space": "SP",
    "layer": "-FRLG",
    "shift": "-FRPLG"
}"#;

fn write_temp(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_expand_path_leaves_plain_paths() {
    assert_eq!(expand_path("/tmp/rules.json"), PathBuf::from("/tmp/rules.json"));
    assert_eq!(expand_path("rules.json"), PathBuf::from("rules.json"));
}

#[test]
fn test_expand_path_expands_tilde() {
    if std::env::var_os("HOME").is_none() {
        return;
    }

    let expanded = expand_path("~/rules.json");
    assert!(!expanded.starts_with("~"));
    assert!(expanded.ends_with("rules.json"));
}

#[test]
fn test_read_rules_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_temp(&temp_dir, "rules.json", RULES_JSON);

    let rules = read_rules_file(&path).unwrap();
    assert_eq!(rules.escape, Keymask::LEFT_S | Keymask::LEFT_K | Keymask::LEFT_P);
    assert_eq!(rules.layer.to_string(), "-FRLG");
    assert!(rules.gui.is_empty());
}

#[test]
fn test_read_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nonexistent.json");

    match read_rules_file(&path).unwrap_err() {
        FileError::NotFound(missing) => assert_eq!(missing, path),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
}

#[test]
fn test_read_rules_bad_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_temp(&temp_dir, "rules.json", "{ \"escape\": ");

    assert!(matches!(read_rules_file(&path), Err(FileError::Json { .. })));
}

#[test]
fn test_read_rules_bad_stroke() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_temp(&temp_dir, "rules.json", r#"{ "escape": "XYZ" }"#);

    match read_rules_file(&path).unwrap_err() {
        FileError::Rules { path: bad, source } => {
            assert_eq!(bad, path);
            assert!(matches!(source, RulesError::InvalidRulesField { ref field, .. } if field == "escape"));
        }
        other => panic!("Expected Rules error, got: {:?}", other),
    }
}

#[test]
fn test_read_dictionary_file_normalises() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_temp(&temp_dir, "dict.json", r##"{ "ka-t": "cat", "#h-f": "46" }"##);

    let dictionary = read_dictionary_file(&path).unwrap();
    assert_eq!(dictionary.len(), 2);
    assert_eq!(dictionary.get(&"KAT".parse::<Outline>().unwrap()), Some("cat"));
    assert_eq!(dictionary.get(&"4-6".parse::<Outline>().unwrap()), Some("46"));
}

#[test]
fn test_read_dictionary_bad_key() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_temp(&temp_dir, "dict.json", r#"{ "ZS": "bad" }"#);

    let err = read_dictionary_file(&path).unwrap_err();
    assert!(matches!(err, FileError::Dictionary { .. }));
    assert!(err.to_string().contains("dict.json"));
}

#[test]
fn test_to_pretty_json() {
    let mut map = BTreeMap::new();
    map.insert("b", "{>}");
    map.insert("a", "<&>");

    assert_eq!(
        to_pretty_json(&map).unwrap(),
        "{\n  \"a\": \"<&>\",\n  \"b\": \"{>}\"\n}\n"
    );
}

#[test]
fn test_write_dictionary_file_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_temp(
        &temp_dir,
        "source.json",
        r#"{ "TKOG": "dog", "KAT": "cat", "SKP-FRLG": "{#Escape}{^}{>}" }"#,
    );
    let dictionary = read_dictionary_file(&source).unwrap();

    let path = temp_dir.path().join("dict.json");
    let backup = write_dictionary_file(&dictionary, &path, true).unwrap();
    assert_eq!(backup, None);

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\n  \"KAT\": \"cat\",\n  \"SKP-FRLG\": \"{#Escape}{^}{>}\",\n  \"TKOG\": \"dog\"\n}\n"
    );
    assert_eq!(read_dictionary_file(&path).unwrap(), dictionary);
}

#[test]
fn test_write_output_backs_up_existing() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_temp(&temp_dir, "dict.json", "old\n");

    let backup = write_output(&path, "new\n", true).unwrap().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    assert_eq!(fs::read_to_string(backup).unwrap(), "old\n");
}
