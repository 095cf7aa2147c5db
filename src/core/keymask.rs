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

//! src/core/keymask.rs
//!
//! Bitmask representation of a single steno stroke
//!
//! Every physical key on a steno machine owns one bit, numbered from the
//! leftmost key in steno order (S-, bit 21) down to the rightmost (-Z, bit 0).
//! A 23rd bit above them marks the stroke as "number mode" (the `#` bar).
//!
//! The steno order itself lives in [`STENO_ORDER`], a table of slots that both
//! the parser (`core/parser.rs`) and the [`fmt::Display`] implementation below
//! walk left to right. The hyphen that separates left-hand from right-hand keys
//! is a named slot in that table rather than a magic string index.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Write};
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

use crate::core::parser::{parse_stroke, ParseError};

/// Canonical letter order, hyphen included
pub const LETTER_ORDER: &str = "STKPWHRAO*-EUFRPBLGTSDZ";

/// Canonical number order, hyphen included
pub const NUMBER_ORDER: &str = "12K3W4R50*-EU6R7B8G9SDZ";

/// A set of steno keys pressed together
///
/// Keymasks are plain values: two masks are the same stroke iff their bits
/// are equal, and `a | b` is the stroke with both sets of keys held.
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Keymask(u32);

impl Keymask {
    /// No keys at all
    pub const EMPTY: Self = Self(0);

    /// The number bar
    pub const NUM: Self = Self(1 << 22);
    pub const LEFT_S: Self = Self(1 << 21);
    pub const LEFT_T: Self = Self(1 << 20);
    pub const LEFT_K: Self = Self(1 << 19);
    pub const LEFT_P: Self = Self(1 << 18);
    pub const LEFT_W: Self = Self(1 << 17);
    pub const LEFT_H: Self = Self(1 << 16);
    pub const LEFT_R: Self = Self(1 << 15);
    pub const LEFT_A: Self = Self(1 << 14);
    pub const LEFT_O: Self = Self(1 << 13);
    pub const STAR: Self = Self(1 << 12);
    pub const RIGHT_E: Self = Self(1 << 11);
    pub const RIGHT_U: Self = Self(1 << 10);
    pub const RIGHT_F: Self = Self(1 << 9);
    pub const RIGHT_R: Self = Self(1 << 8);
    pub const RIGHT_P: Self = Self(1 << 7);
    pub const RIGHT_B: Self = Self(1 << 6);
    pub const RIGHT_L: Self = Self(1 << 5);
    pub const RIGHT_G: Self = Self(1 << 4);
    pub const RIGHT_T: Self = Self(1 << 3);
    pub const RIGHT_S: Self = Self(1 << 2);
    pub const RIGHT_D: Self = Self(1 << 1);
    pub const RIGHT_Z: Self = Self(1);

    /// Left-hand consonants
    pub const ALL_LEFTS: Self = Self::LEFT_S
        .union(Self::LEFT_T)
        .union(Self::LEFT_K)
        .union(Self::LEFT_P)
        .union(Self::LEFT_W)
        .union(Self::LEFT_H)
        .union(Self::LEFT_R);

    /// Right-hand consonants
    pub const ALL_RIGHTS: Self = Self::RIGHT_F
        .union(Self::RIGHT_R)
        .union(Self::RIGHT_P)
        .union(Self::RIGHT_B)
        .union(Self::RIGHT_L)
        .union(Self::RIGHT_G)
        .union(Self::RIGHT_T)
        .union(Self::RIGHT_S)
        .union(Self::RIGHT_D)
        .union(Self::RIGHT_Z);

    /// A, O, E and U
    pub const VOWELS: Self = Self::LEFT_A
        .union(Self::LEFT_O)
        .union(Self::RIGHT_E)
        .union(Self::RIGHT_U);

    /// Keys that print as a digit when the number bar is held
    pub const DIGIT_KEYS: Self = Self::LEFT_S
        .union(Self::LEFT_T)
        .union(Self::LEFT_P)
        .union(Self::LEFT_H)
        .union(Self::LEFT_A)
        .union(Self::LEFT_O)
        .union(Self::RIGHT_F)
        .union(Self::RIGHT_P)
        .union(Self::RIGHT_L)
        .union(Self::RIGHT_T);

    pub const STENO_1: Self = Self::NUM.union(Self::LEFT_S);
    pub const STENO_2: Self = Self::NUM.union(Self::LEFT_T);
    pub const STENO_3: Self = Self::NUM.union(Self::LEFT_P);
    pub const STENO_4: Self = Self::NUM.union(Self::LEFT_H);
    pub const STENO_5: Self = Self::NUM.union(Self::LEFT_A);
    pub const STENO_0: Self = Self::NUM.union(Self::LEFT_O);
    pub const STENO_6: Self = Self::NUM.union(Self::RIGHT_F);
    pub const STENO_7: Self = Self::NUM.union(Self::RIGHT_P);
    pub const STENO_8: Self = Self::NUM.union(Self::RIGHT_L);
    pub const STENO_9: Self = Self::NUM.union(Self::RIGHT_T);

    /// Builds a mask from raw bits, discarding anything above the number bar
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & ((1 << 23) - 1))
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// `self | other`, usable in const context
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// `self` without any of the keys in `other`
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every key of `other` is held in `self`
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if any key of `other` is held in `self`
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn has_left(self) -> bool {
        self.intersects(Self::ALL_LEFTS)
    }

    pub const fn has_right(self) -> bool {
        self.intersects(Self::ALL_RIGHTS)
    }

    pub const fn has_star(self) -> bool {
        self.contains(Self::STAR)
    }

    pub const fn has_vowel(self) -> bool {
        self.intersects(Self::VOWELS)
    }

    pub const fn has_number_bar(self) -> bool {
        self.contains(Self::NUM)
    }

    /// True if any key that doubles as a digit is held
    pub const fn has_digits(self) -> bool {
        self.intersects(Self::DIGIT_KEYS)
    }
}

impl BitOr for Keymask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for Keymask {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for Keymask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// One key position in steno order
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StenoKey {
    /// Character in letter notation
    pub letter: char,
    /// Character in number notation, for keys that double as a digit
    pub digit: Option<char>,
    /// The key's bit
    pub mask: Keymask,
}

impl StenoKey {
    /// Character used for this key when the number bar is held
    pub const fn number(&self) -> char {
        match self.digit {
            Some(digit) => digit,
            None => self.letter,
        }
    }
}

/// A position in steno order: either a key or the hyphen placeholder
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StenoSlot {
    Key(StenoKey),
    /// Separates left-hand keys from right-hand keys; carries no bit
    Hyphen,
}

impl StenoSlot {
    /// The slot's bit, empty for the hyphen
    pub const fn mask(&self) -> Keymask {
        match self {
            StenoSlot::Key(key) => key.mask,
            StenoSlot::Hyphen => Keymask::EMPTY,
        }
    }
}

const fn key(letter: char, digit: Option<char>, mask: Keymask) -> StenoSlot {
    StenoSlot::Key(StenoKey { letter, digit, mask })
}

/// Steno order, left to right
pub const STENO_ORDER: [StenoSlot; 23] = [
    key('S', Some('1'), Keymask::LEFT_S),
    key('T', Some('2'), Keymask::LEFT_T),
    key('K', None, Keymask::LEFT_K),
    key('P', Some('3'), Keymask::LEFT_P),
    key('W', None, Keymask::LEFT_W),
    key('H', Some('4'), Keymask::LEFT_H),
    key('R', None, Keymask::LEFT_R),
    key('A', Some('5'), Keymask::LEFT_A),
    key('O', Some('0'), Keymask::LEFT_O),
    key('*', None, Keymask::STAR),
    StenoSlot::Hyphen,
    key('E', None, Keymask::RIGHT_E),
    key('U', None, Keymask::RIGHT_U),
    key('F', Some('6'), Keymask::RIGHT_F),
    key('R', None, Keymask::RIGHT_R),
    key('P', Some('7'), Keymask::RIGHT_P),
    key('B', None, Keymask::RIGHT_B),
    key('L', Some('8'), Keymask::RIGHT_L),
    key('G', None, Keymask::RIGHT_G),
    key('T', Some('9'), Keymask::RIGHT_T),
    key('S', None, Keymask::RIGHT_S),
    key('D', None, Keymask::RIGHT_D),
    key('Z', None, Keymask::RIGHT_Z),
];

/// Formats the stroke in canonical steno notation
///
/// - Letter notation (`STKPWHRAO*EUFRPBLGTSDZ`) unless the number bar is held
/// - Number notation (`12K3W4R50*EU6R7B8G9SDZ`) otherwise, with a leading `#`
///   only when no digit key is held (`#-D`, `#*`)
/// - `*` when the star is held; otherwise `-` when a right-hand consonant is
///   held and no vowel separates it from the left hand
impl fmt::Display for Keymask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        let numbers = self.has_number_bar();
        if numbers && !self.has_digits() {
            f.write_char('#')?;
        }

        for slot in &STENO_ORDER {
            match slot {
                StenoSlot::Key(key) if self.contains(key.mask) => {
                    f.write_char(if numbers { key.number() } else { key.letter })?;
                }
                StenoSlot::Key(_) => {}
                StenoSlot::Hyphen => {
                    // hyphens never go alongside stars
                    if !self.has_star() && self.has_right() && !self.has_vowel() {
                        f.write_char('-')?;
                    }
                }
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Keymask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keymask({:#025b} {:?})", self.0, self.to_string())
    }
}

impl FromStr for Keymask {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_stroke(s)
    }
}

impl Serialize for Keymask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Keymask {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let notation = String::deserialize(deserializer)?;
        parse_stroke(&notation).map_err(serde::de::Error::custom)
    }
}
