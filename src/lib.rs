// Copyright 2025 bakri (tidynest@proton.me)
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

//! Steno Dictionary Generator
//!
//! Tools for stenographers using Plover: a stroke notation codec, a
//! validator for command rules files, and a generator that turns those
//! rules into a dictionary of keyboard shortcuts.
//!
//! # Features
//!
//! - **Stroke Codec:** Parse and print steno notation (`TKPWUFRLG`, `4-6`, `R*R`)
//! - **Rules Validation:** Exhaustive collision checks between commands,
//!   modifiers, their combinations and fingerspelled letters
//! - **Dictionary Generation:** Every modifier combination crossed with
//!   every navigation key, letter and number
//! - **Dictionary Comparison:** Report briefs two dictionaries both define
//! - **Atomic Operations:** Safe file writes with timestamped backups
//!
//! # Architecture
//!
//! - **`core`:** Business logic (keymasks, outlines, rules, validation, factory)
//! - **`files`:** File operations (reading, writing, atomic updates, backups)
//! - **`progress`:** Typey Type progress file cleanup and merging
//! - **`logging`:** `tracing` subscriber setup
//!
//! # Examples
//!
//! ## Parsing a stroke
//!
//! ```
//! use steno_dictgen::core::parse_stroke;
//!
//! let stroke = parse_stroke("#H-F")?;
//! assert_eq!(stroke.to_string(), "4-6");
//! # Ok::<(), steno_dictgen::core::ParseError>(())
//! ```
//!
//! ## Validating rules and generating a dictionary
//!
//! ```no_run
//! use steno_dictgen::core::{validate_rules, DictionaryFactory, FactoryOpts};
//! use steno_dictgen::files::read_rules_file;
//! use std::path::Path;
//!
//! let rules = read_rules_file(Path::new("commands.json"))?;
//! let report = validate_rules(&rules);
//! for violation in &report.violations {
//!     eprintln!("{}", violation);
//! }
//!
//! if report.is_valid() {
//!     let dictionary = DictionaryFactory::new(FactoryOpts::default()).generate(&rules);
//!     println!("Generated {} entries", dictionary.len());
//! }
//! # Ok::<(), steno_dictgen::files::FileError>(())
//! ```

pub mod core;
pub mod files;
pub mod logging;
pub mod progress;

// Re-export commonly used types for convenience
pub use crate::core::{Dictionary, Keymask, Outline, Rules};
