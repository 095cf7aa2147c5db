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

//! Plover's left-hand fingerspelling alphabet
//!
//! Plover fingerspells with `*` held; the chords below leave the star out so
//! that it stays free for modifier masks.

use crate::core::keymask::Keymask;
use crate::core::types::QwertyKey;

/// A fingerspelling chord and the letter it types
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fingerspelling {
    pub stroke: Keymask,
    pub letter: QwertyKey,
}

const fn spell(stroke: Keymask, letter: QwertyKey) -> Fingerspelling {
    Fingerspelling { stroke, letter }
}

const S: Keymask = Keymask::LEFT_S;
const T: Keymask = Keymask::LEFT_T;
const K: Keymask = Keymask::LEFT_K;
const P: Keymask = Keymask::LEFT_P;
const W: Keymask = Keymask::LEFT_W;
const H: Keymask = Keymask::LEFT_H;
const R: Keymask = Keymask::LEFT_R;

/// A to Z, plus the alternate Z (`STK`) last
pub const FINGERSPELLINGS: [Fingerspelling; 27] = [
    spell(Keymask::LEFT_A, QwertyKey::A),
    spell(P.union(W), QwertyKey::B),
    spell(K.union(R), QwertyKey::C),
    spell(T.union(K), QwertyKey::D),
    spell(Keymask::RIGHT_E, QwertyKey::E),
    spell(T.union(P), QwertyKey::F),
    spell(T.union(K).union(P).union(W), QwertyKey::G),
    spell(H, QwertyKey::H),
    spell(Keymask::RIGHT_E.union(Keymask::RIGHT_U), QwertyKey::I),
    spell(S.union(K).union(W).union(R), QwertyKey::J),
    spell(K, QwertyKey::K),
    spell(H.union(R), QwertyKey::L),
    spell(P.union(H), QwertyKey::M),
    spell(T.union(P).union(H), QwertyKey::N),
    spell(Keymask::LEFT_O, QwertyKey::O),
    spell(P, QwertyKey::P),
    spell(K.union(W), QwertyKey::Q),
    spell(R, QwertyKey::R),
    spell(S, QwertyKey::S),
    spell(T, QwertyKey::T),
    spell(Keymask::RIGHT_U, QwertyKey::U),
    spell(S.union(R), QwertyKey::V),
    spell(W, QwertyKey::W),
    spell(K.union(P), QwertyKey::X),
    spell(K.union(W).union(R), QwertyKey::Y),
    spell(S.union(T).union(K).union(P).union(W), QwertyKey::Z),
    spell(S.union(T).union(K), QwertyKey::Z),
];

impl Keymask {
    /// True if this exact chord is one of the fingerspellings
    pub fn is_fingerspelling(self) -> bool {
        FINGERSPELLINGS.iter().any(|spelling| spelling.stroke == self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strokes_are_distinct() {
        for (i, a) in FINGERSPELLINGS.iter().enumerate() {
            for b in &FINGERSPELLINGS[i + 1..] {
                assert_ne!(a.stroke, b.stroke, "{} and {} share a chord", a.letter, b.letter);
            }
        }
    }

    #[test]
    fn test_no_star_or_number_bar() {
        for spelling in &FINGERSPELLINGS {
            assert!(!spelling.stroke.has_star());
            assert!(!spelling.stroke.has_number_bar());
        }
    }

    #[test]
    fn test_supersets_do_not_match() {
        assert!(Keymask::LEFT_S.is_fingerspelling());
        assert!(!(Keymask::LEFT_S | Keymask::STAR).is_fingerspelling());
        assert!(!(Keymask::LEFT_S | Keymask::LEFT_T | Keymask::LEFT_K | Keymask::LEFT_H).is_fingerspelling());
    }
}
