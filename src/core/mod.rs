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

//! src/core/mod.rs
//!
//! Core steno logic
//!
//! This module contains the data structures and algorithms of the generator:
//! - Stroke notation: `Keymask` values and their parser/formatter
//! - Outlines (multi-stroke briefs) and dictionaries keyed by them
//! - Rules files and their exhaustive collision validation
//! - The dictionary factory
//!
//! Nothing here touches the filesystem or the terminal, so all of it is unit
//! tested directly.

pub mod dictionary;
pub mod factory;
pub mod fingerspelling;
pub mod keymask;
pub mod outline;
pub mod parser;
pub mod rules;
pub mod types;
pub mod validator;

pub use dictionary::{Collision, Dictionary, DictionaryError};
pub use factory::{DictionaryFactory, FactoryOpts, NumberOption};
pub use keymask::Keymask;
pub use outline::Outline;
pub use parser::{parse_outline, parse_stroke, ParseError};
pub use rules::{Rules, RulesError};
pub use types::*;
pub use validator::{validate_rules, RuleViolation, RulesValidationFailure, ValidationReport};

#[cfg(test)]
mod tests;
