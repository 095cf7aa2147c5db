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
use std::{fs, thread, time::Duration};
use tempfile::TempDir;

// ============================================================================
// OutputFile Tests
// ============================================================================

#[test]
fn test_output_file_may_not_exist_yet() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dict.json");

    let output = OutputFile::new(path.clone()).unwrap();
    assert_eq!(output.path(), path);
    assert_eq!(output.backup_dir(), temp_dir.path().join("backups"));

    // nothing to back up, so no directory yet
    assert!(!output.backup_dir().exists());
    assert!(output.list_backups().unwrap().is_empty());
}

#[test]
fn test_output_file_rejects_path_without_name() {
    let err = OutputFile::new("/").unwrap_err();
    assert!(matches!(err, FileError::InvalidPath(_)));
}

#[test]
fn test_bare_file_name_backs_up_locally() {
    let output = OutputFile::new("dict.json").unwrap();
    assert_eq!(output.backup_dir(), std::path::Path::new("backups"));
}

// ============================================================================
// OutputTransaction Tests
// ============================================================================

#[test]
fn test_transaction_basic_flow() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dict.json");
    let original_content = "{\n  \"KAT\": \"cat\"\n}\n";
    fs::write(&path, original_content).unwrap();

    let output = OutputFile::new(path.clone()).unwrap();
    let tx = OutputTransaction::begin(&output, true).unwrap();

    let backups = output.list_backups().unwrap();
    assert_eq!(backups.len(), 1, "Should have created one backup");
    assert_eq!(tx.backup_path(), Some(backups[0].as_path()));

    let new_content = "{\n  \"TKOG\": \"dog\"\n}\n";
    tx.commit(new_content).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), new_content);

    // backup survives the commit with the old content
    let backups_after = output.list_backups().unwrap();
    assert_eq!(backups_after.len(), 1);
    assert_eq!(fs::read_to_string(&backups_after[0]).unwrap(), original_content);
}

#[test]
fn test_backup_name_has_timestamp() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("progress.json");
    fs::write(&path, "{}\n").unwrap();

    let output = OutputFile::new(path).unwrap();
    let tx = OutputTransaction::begin(&output, true).unwrap();
    let backup_path = tx.backup_path().unwrap();

    assert_eq!(backup_path.parent().unwrap(), output.backup_dir());

    // "progress.json.2025-10-10_221500" -> "2025-10-10_221500"
    let filename = backup_path.file_name().unwrap().to_str().unwrap();
    let parts: Vec<&str> = filename.split('.').collect();
    assert_eq!(parts.len(), 3, "Filename should be name.ext.timestamp");
    assert_eq!(parts[0], "progress");
    assert_eq!(parts[1], "json");

    let parsed = chrono::NaiveDateTime::parse_from_str(parts[2], BACKUP_TIMESTAMP_FORMAT);
    assert!(parsed.is_ok(), "Timestamp should parse: {}", parts[2]);
}

#[test]
fn test_no_backup_when_disabled() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dict.json");
    fs::write(&path, "old").unwrap();

    let output = OutputFile::new(path.clone()).unwrap();
    let tx = OutputTransaction::begin(&output, false).unwrap();
    tx.commit("new").unwrap();

    assert_eq!(tx.backup_path(), None);
    assert!(output.list_backups().unwrap().is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
}

#[test]
fn test_no_backup_for_new_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dict.json");

    let output = OutputFile::new(path.clone()).unwrap();
    let tx = OutputTransaction::begin(&output, true).unwrap();
    assert_eq!(tx.backup_path(), None);

    tx.commit("{}\n").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
}

#[test]
fn test_transaction_rollback() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dict.json");
    let original_content = "original";
    fs::write(&path, original_content).unwrap();

    let output = OutputFile::new(path.clone()).unwrap();
    let tx = OutputTransaction::begin(&output, true).unwrap();

    tx.commit("replaced").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "replaced");

    tx.rollback().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), original_content);
}

#[test]
fn test_rollback_removes_new_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dict.json");

    let output = OutputFile::new(path.clone()).unwrap();
    let tx = OutputTransaction::begin(&output, true).unwrap();
    tx.commit("{}\n").unwrap();
    assert!(path.exists());

    tx.rollback().unwrap();
    assert!(!path.exists());
}

#[test]
fn test_rollback_without_backup_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dict.json");
    fs::write(&path, "old").unwrap();

    let output = OutputFile::new(path.clone()).unwrap();
    let tx = OutputTransaction::begin(&output, false).unwrap();
    tx.commit("new").unwrap();

    assert!(matches!(tx.rollback(), Err(FileError::BackupFailed(_))));
    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
}

#[test]
fn test_multiple_backups_dont_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dict.json");
    fs::write(&path, "first").unwrap();

    let output = OutputFile::new(path.clone()).unwrap();
    OutputTransaction::begin(&output, true).unwrap().commit("second").unwrap();

    // wait for a different timestamp
    thread::sleep(Duration::from_millis(1100));

    OutputTransaction::begin(&output, true).unwrap().commit("third").unwrap();

    let backups = output.list_backups().unwrap();
    assert_eq!(backups.len(), 2);
    assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "first");
    assert_eq!(fs::read_to_string(&backups[1]).unwrap(), "second");
}

#[test]
fn test_backups_of_other_files_are_not_listed() {
    let temp_dir = TempDir::new().unwrap();
    let dict = temp_dir.path().join("dict.json");
    let other = temp_dir.path().join("other.json");
    fs::write(&dict, "a").unwrap();
    fs::write(&other, "b").unwrap();

    let dict_output = OutputFile::new(dict).unwrap();
    let other_output = OutputFile::new(other).unwrap();
    OutputTransaction::begin(&dict_output, true).unwrap();
    OutputTransaction::begin(&other_output, true).unwrap();

    assert_eq!(dict_output.list_backups().unwrap().len(), 1);
    assert_eq!(other_output.list_backups().unwrap().len(), 1);
}
