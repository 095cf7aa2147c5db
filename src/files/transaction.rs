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

//! Output transactions with automatic backups
//!
//! Every file this tool writes goes through an [`OutputTransaction`]: an
//! existing file is copied into `backups/` next to it before anything is
//! touched, and the new content replaces it with an atomic rename.

use atomic_write_file::AtomicWriteFile;
use chrono::Local;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use super::FileError;

/// Name of the directory, next to each output, that holds its backups.
pub const BACKUP_DIR: &str = "backups";

/// Timestamp appended to backup file names.
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H%M%S";

/// An output file and the backup directory beside it.
///
/// Unlike an input, the output does not need to exist yet. The backup
/// directory is only created once there is something to back up.
#[derive(Debug, Clone)]
pub struct OutputFile {
    path: PathBuf,
    backup_dir: PathBuf,
}

impl OutputFile {
    /// # Errors
    ///
    /// Returns `FileError::InvalidPath` if `path` has no file name
    /// (for example `/` or `..`).
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, FileError> {
        let path = path.into();
        if path.file_name().is_none() {
            return Err(FileError::InvalidPath(path));
        }

        let backup_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(BACKUP_DIR),
            _ => PathBuf::from(BACKUP_DIR),
        };

        Ok(Self { path, backup_dir })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Backups of this output, oldest first.
    pub fn list_backups(&self) -> Result<Vec<PathBuf>, FileError> {
        if !self.backup_dir.is_dir() {
            return Ok(Vec::new());
        }

        let prefix = format!("{}.", self.file_name()?);
        let mut backups: Vec<PathBuf> = fs::read_dir(&self.backup_dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        // the timestamp format sorts chronologically
        backups.sort();
        Ok(backups)
    }

    fn file_name(&self) -> Result<&str, FileError> {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| FileError::InvalidPath(self.path.clone()))
    }

    /// Copies the current output to `backups/<name>.<timestamp>`.
    ///
    /// Returns `None` when there is no file to back up.
    fn create_timestamped_backup(&self) -> Result<Option<PathBuf>, FileError> {
        if !self.path.exists() {
            return Ok(None);
        }

        fs::create_dir_all(&self.backup_dir).map_err(|e| {
            FileError::BackupFailed(format!("{}: {}", self.backup_dir.display(), e))
        })?;

        let timestamp = Local::now().format(BACKUP_TIMESTAMP_FORMAT);
        let backup_path = self
            .backup_dir
            .join(format!("{}.{}", self.file_name()?, timestamp));

        fs::copy(&self.path, &backup_path).map_err(|e| {
            FileError::BackupFailed(format!("{}: {}", backup_path.display(), e))
        })?;

        info!(backup = %backup_path.display(), "Backed up existing output");
        Ok(Some(backup_path))
    }
}

/// Atomic write of one output file.
///
/// # Lifecycle
///
/// 1. `begin()` backs up the existing file, if any
/// 2. `commit()` writes the new content atomically
/// 3. `rollback()` puts the file back the way `begin()` found it
///
/// # Example
///
/// ```no_run
/// use steno_dictgen::files::{OutputFile, OutputTransaction};
///
/// let output = OutputFile::new("dict.json")?;
/// let tx = OutputTransaction::begin(&output, true)?;
/// tx.commit("{}\n")?;
/// # Ok::<(), steno_dictgen::files::FileError>(())
/// ```
#[derive(Debug)]
pub struct OutputTransaction<'a> {
    output: &'a OutputFile,
    backup_path: Option<PathBuf>,
    existed: bool,
}

impl<'a> OutputTransaction<'a> {
    /// Begins a transaction, backing up the current output when `backup` is
    /// set and the file exists.
    ///
    /// # Errors
    ///
    /// Returns `FileError::BackupFailed` if the backup cannot be written. No
    /// changes are made in that case.
    pub fn begin(output: &'a OutputFile, backup: bool) -> Result<Self, FileError> {
        let existed = output.path.exists();
        let backup_path = if backup {
            output.create_timestamped_backup()?
        } else {
            None
        };

        Ok(Self {
            output,
            backup_path,
            existed,
        })
    }

    /// Backup taken by `begin()`, if one was needed.
    pub fn backup_path(&self) -> Option<&Path> {
        self.backup_path.as_deref()
    }

    /// Writes `new_content` to the output through a temp file and rename.
    ///
    /// On error the previous file is untouched. The transaction stays
    /// usable, so a later failure can still call `rollback()`.
    pub fn commit(&self, new_content: &str) -> Result<(), FileError> {
        let mut file = AtomicWriteFile::options()
            .open(&self.output.path)
            .map_err(|e| FileError::WriteFailed(format!("Failed to open for atomic write: {}", e)))?;

        file.write_all(new_content.as_bytes())
            .map_err(|e| FileError::WriteFailed(format!("Failed to write content: {}", e)))?;

        file.commit()
            .map_err(|e| FileError::WriteFailed(format!("Failed to commit atomic write: {}", e)))?;

        info!(path = %self.output.path.display(), bytes = new_content.len(), "Wrote output");
        Ok(())
    }

    /// Restores the output to its state when the transaction began.
    ///
    /// A file that did not exist before is removed. A file that existed but
    /// was not backed up cannot be restored.
    pub fn rollback(&self) -> Result<(), FileError> {
        if let Some(backup_path) = &self.backup_path {
            let backup_content = fs::read(backup_path)?;

            let mut file = AtomicWriteFile::options()
                .open(&self.output.path)
                .map_err(|e| FileError::WriteFailed(format!("Failed to open for rollback: {}", e)))?;
            file.write_all(&backup_content)
                .map_err(|e| FileError::WriteFailed(format!("Failed to write backup: {}", e)))?;
            file.commit()
                .map_err(|e| FileError::WriteFailed(format!("Failed to commit rollback: {}", e)))?;

            debug!(backup = %backup_path.display(), "Restored output from backup");
            return Ok(());
        }

        if self.existed {
            return Err(FileError::BackupFailed(format!(
                "No backup of {} to roll back to",
                self.output.path.display()
            )));
        }

        if self.output.path.exists() {
            fs::remove_file(&self.output.path)?;
            debug!(path = %self.output.path.display(), "Removed new output");
        }
        Ok(())
    }
}
