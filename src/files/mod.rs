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

//! Reading and writing rules, dictionary and progress files.
//!
//! Key features:
//!
//! - **Tilde expansion**: `~/plover/commands.json` works as a path argument
//! - **Atomic writes**: Uses temp-file-then-rename to prevent corruption
//! - **Automatic backups**: An existing output is copied to `backups/` first
//! - **Stable output**: Two-space indented JSON, sorted keys, no HTML escaping
//!
//! # Example
//!
//! ```no_run
//! use steno_dictgen::core::{DictionaryFactory, FactoryOpts};
//! use steno_dictgen::files;
//! use std::path::Path;
//!
//! let rules = files::read_rules_file(&files::expand_path("~/commands.json"))?;
//! let dictionary = DictionaryFactory::new(FactoryOpts::default()).generate(&rules);
//! files::write_dictionary_file(&dictionary, Path::new("dict.json"), true)?;
//! # Ok::<(), steno_dictgen::files::FileError>(())
//! ```

mod error;
mod transaction;

pub use error::FileError;
pub use transaction::{OutputFile, OutputTransaction, BACKUP_DIR, BACKUP_TIMESTAMP_FORMAT};

use serde::Serialize;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

use crate::core::{Dictionary, Rules};

/// Expands a leading `~` to the home directory.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Reads a whole file, mapping a missing file to `FileError::NotFound`.
pub fn read_text(path: &Path) -> Result<String, FileError> {
    if !path.exists() {
        return Err(FileError::NotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Parses `path` as JSON into `T`.
pub fn read_json<T>(path: &Path) -> Result<T, FileError>
where
    T: serde::de::DeserializeOwned,
{
    let content = read_text(path)?;
    serde_json::from_str(&content).map_err(|source| FileError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a rules file: a JSON object of field name to stroke notation.
pub fn read_rules_file(path: &Path) -> Result<Rules, FileError> {
    let fields: BTreeMap<String, String> = read_json(path)?;
    let rules = Rules::try_from(fields).map_err(|source| FileError::Rules {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), "Rules file read");
    Ok(rules)
}

/// Reads a dictionary file, normalising every outline.
pub fn read_dictionary_file(path: &Path) -> Result<Dictionary, FileError> {
    let definitions: BTreeMap<String, String> = read_json(path)?;
    let dictionary = Dictionary::from_definitions(definitions).map_err(|source| {
        FileError::Dictionary {
            path: path.to_path_buf(),
            source,
        }
    })?;

    info!(path = %path.display(), entries = dictionary.len(), "Dictionary file read");
    Ok(dictionary)
}

/// Encodes `value` the way every output of this tool is written.
///
/// Two-space indentation and a trailing newline. Characters such as `<`,
/// `>` and `&` are left as is.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Atomically writes `content` to `path`, backing up an existing file first
/// when `backup` is set.
///
/// Returns the backup's path, if one was made.
pub fn write_output(path: &Path, content: &str, backup: bool) -> Result<Option<PathBuf>, FileError> {
    let output = OutputFile::new(path)?;
    let tx = OutputTransaction::begin(&output, backup)?;
    tx.commit(content)?;
    Ok(tx.backup_path().map(Path::to_path_buf))
}

/// Writes a dictionary as sorted, pretty JSON.
pub fn write_dictionary_file(
    dictionary: &Dictionary,
    path: &Path,
    backup: bool,
) -> Result<Option<PathBuf>, FileError> {
    let json = to_pretty_json(&dictionary.to_definitions())?;
    info!(path = %path.display(), entries = dictionary.len(), "Writing dictionary file");
    write_output(path, &json, backup)
}

#[cfg(test)]
mod tests;
