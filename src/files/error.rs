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

//! Error types for reading and writing steno files.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::{DictionaryError, RulesError};

/// Errors that can occur while loading or saving rules, dictionaries and
/// progress files.
#[derive(Debug, Error)]
pub enum FileError {
    /// Input file does not exist.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Output path has no file name to back up or write to.
    #[error("Invalid output path: {0}")]
    InvalidPath(PathBuf),

    /// File is not the JSON shape we expect.
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A rules field failed to parse.
    #[error("Invalid rules file {path}: {source}")]
    Rules {
        path: PathBuf,
        #[source]
        source: RulesError,
    },

    /// A dictionary key failed to parse.
    #[error("Invalid dictionary file {path}: {source}")]
    Dictionary {
        path: PathBuf,
        #[source]
        source: DictionaryError,
    },

    /// Failed to serialise a value for writing.
    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    /// Failed to create backup file.
    #[error("Failed to create backup: {0}")]
    BackupFailed(String),

    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),

    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
