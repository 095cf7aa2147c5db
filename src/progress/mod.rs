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

//! Typey Type progress files
//!
//! A progress file maps each practised word to the number of times it was
//! chorded correctly. Exports tend to carry stray whitespace around words
//! (`" the"` next to `"the"`), and progress from two browsers needs merging.

use std::{
    collections::BTreeMap,
    fmt,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::files::{self, FileError};

/// Word to correct-chord count, sorted by word.
pub type Progress = BTreeMap<String, u64>;

/// Totals reported after cleaning or merging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    pub words: usize,
    pub chords: u64,
}

impl fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} words chorded correctly {} times", self.words, self.chords)
    }
}

/// Trims whitespace from every word, summing the counts of words that
/// collapse together.
///
/// The summary counts the words as they were before trimming.
pub fn clean(progress: Progress) -> (Progress, ProgressSummary) {
    let summary = ProgressSummary {
        words: progress.len(),
        chords: total_chords(&progress),
    };

    let mut trimmed = Progress::new();
    for (word, count) in progress {
        let key = word.trim();
        if key.len() != word.len() {
            debug!(word = %word, trimmed = %key, "Trimmed word");
        }
        add_count(&mut trimmed, key.to_string(), count);
    }

    (trimmed, summary)
}

/// Sums two progress maps.
///
/// Words in both keep one entry with the combined count.
pub fn merge(a: Progress, b: Progress) -> (Progress, ProgressSummary) {
    let mut merged = a;
    for (word, count) in b {
        add_count(&mut merged, word, count);
    }

    let summary = ProgressSummary {
        words: merged.len(),
        chords: total_chords(&merged),
    };
    (merged, summary)
}

/// Counts saturate at `u64::MAX` rather than wrapping.
fn add_count(progress: &mut Progress, word: String, count: u64) {
    let entry = progress.entry(word).or_default();
    *entry = entry.saturating_add(count);
}

fn total_chords(progress: &Progress) -> u64 {
    progress.values().fold(0, |total, count| total.saturating_add(*count))
}

pub fn read_progress_file(path: &Path) -> Result<Progress, FileError> {
    let progress: Progress = files::read_json(path)?;
    info!(path = %path.display(), words = progress.len(), "Progress file read");
    Ok(progress)
}

/// Writes `progress` sorted and unescaped, returning the backup path if one
/// was made.
pub fn write_progress_file(
    progress: &Progress,
    path: &Path,
    backup: bool,
) -> Result<Option<PathBuf>, FileError> {
    let json = files::to_pretty_json(progress)?;
    info!(path = %path.display(), words = progress.len(), "Writing progress file");
    files::write_output(path, &json, backup)
}
