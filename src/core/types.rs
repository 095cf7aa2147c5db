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

//! src/core/types.rs
//!
//! Key tables shared by rules, validation and the dictionary factory
//!
//! This module defines the fixed vocabulary of the generator:
//! - `NavKey`: the 14 navigation keys a rules file assigns chords to
//! - `Modifier`: the 5 steno modifiers (layer plus the four Qwerty modifiers)
//! - `ModifierCombo`: named sets of modifiers held together (`shift-ctrl`)
//! - `QwertyKey` / `QwertyMod`: key names as Plover's `{#...}` syntax spells
//!   them (xdotool names)
//!
//! Everything here is constant data; tables are plain `const`/`static` arrays
//! walked in declaration order wherever order matters (validation messages,
//! generation overwrite order).

use std::fmt;

use Modifier::{Alt, Ctrl, Gui, Layer, Shift};

/// A key name as written inside a Plover key combo (`{#Page_Up}`)
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct QwertyKey(&'static str);

impl QwertyKey {
    pub const ESCAPE: Self = Self("Escape");
    pub const SPACE: Self = Self("Space");
    pub const TAB: Self = Self("Tab");
    pub const RETURN: Self = Self("Return");
    pub const HOME: Self = Self("Home");
    pub const PAGE_UP: Self = Self("Page_Up");
    pub const PAGE_DOWN: Self = Self("Page_Down");
    pub const END: Self = Self("End");
    pub const BACKSPACE: Self = Self("BackSpace");
    pub const DELETE: Self = Self("Delete");
    pub const LEFT: Self = Self("Left");
    pub const UP: Self = Self("Up");
    pub const DOWN: Self = Self("Down");
    pub const RIGHT: Self = Self("Right");

    pub const A: Self = Self("a");
    pub const B: Self = Self("b");
    pub const C: Self = Self("c");
    pub const D: Self = Self("d");
    pub const E: Self = Self("e");
    pub const F: Self = Self("f");
    pub const G: Self = Self("g");
    pub const H: Self = Self("h");
    pub const I: Self = Self("i");
    pub const J: Self = Self("j");
    pub const K: Self = Self("k");
    pub const L: Self = Self("l");
    pub const M: Self = Self("m");
    pub const N: Self = Self("n");
    pub const O: Self = Self("o");
    pub const P: Self = Self("p");
    pub const Q: Self = Self("q");
    pub const R: Self = Self("r");
    pub const S: Self = Self("s");
    pub const T: Self = Self("t");
    pub const U: Self = Self("u");
    pub const V: Self = Self("v");
    pub const W: Self = Self("w");
    pub const X: Self = Self("x");
    pub const Y: Self = Self("y");
    pub const Z: Self = Self("z");

    pub const F1: Self = Self("F1");
    pub const F2: Self = Self("F2");
    pub const F3: Self = Self("F3");
    pub const F4: Self = Self("F4");
    pub const F5: Self = Self("F5");
    pub const F6: Self = Self("F6");
    pub const F7: Self = Self("F7");
    pub const F8: Self = Self("F8");
    pub const F9: Self = Self("F9");
    pub const F10: Self = Self("F10");
    pub const F11: Self = Self("F11");
    pub const F12: Self = Self("F12");

    pub const N0: Self = Self("0");
    pub const N1: Self = Self("1");
    pub const N2: Self = Self("2");
    pub const N3: Self = Self("3");
    pub const N4: Self = Self("4");
    pub const N5: Self = Self("5");
    pub const N6: Self = Self("6");
    pub const N7: Self = Self("7");
    pub const N8: Self = Self("8");
    pub const N9: Self = Self("9");

    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for QwertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Qwerty modifier keys, as Plover names them
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum QwertyMod {
    Shift,
    Control,
    Alt,
    Super,
}

impl QwertyMod {
    pub const fn name(self) -> &'static str {
        match self {
            QwertyMod::Shift => "Shift_L",
            QwertyMod::Control => "Control_L",
            QwertyMod::Alt => "Alt_L",
            QwertyMod::Super => "Super_L",
        }
    }

    /// Hold this modifier around `inner`: `Shift_L(inner)`
    pub fn wrap(self, inner: &str) -> String {
        format!("{}({})", self.name(), inner)
    }
}

impl fmt::Display for QwertyMod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Navigation keys a rules file assigns chords to
///
/// The order of [`NavKey::ALL`] is the order rules are validated and
/// reported in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NavKey {
    Escape,
    Space,
    Tab,
    Return,
    Home,
    PageUp,
    PageDown,
    End,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
}

impl NavKey {
    pub const ALL: [NavKey; 14] = [
        NavKey::Escape,
        NavKey::Space,
        NavKey::Tab,
        NavKey::Return,
        NavKey::Home,
        NavKey::PageUp,
        NavKey::PageDown,
        NavKey::End,
        NavKey::Backspace,
        NavKey::Delete,
        NavKey::Up,
        NavKey::Down,
        NavKey::Left,
        NavKey::Right,
    ];

    /// Name of the key in a rules file and in validation messages
    pub const fn field_name(self) -> &'static str {
        match self {
            NavKey::Escape => "escape",
            NavKey::Space => "space",
            NavKey::Tab => "tab",
            NavKey::Return => "return",
            NavKey::Home => "home",
            NavKey::PageUp => "pageUp",
            NavKey::PageDown => "pageDown",
            NavKey::End => "end",
            NavKey::Backspace => "backspace",
            NavKey::Delete => "delete",
            NavKey::Up => "up",
            NavKey::Down => "down",
            NavKey::Left => "left",
            NavKey::Right => "right",
        }
    }

    /// The Qwerty key this navigation key sends
    pub const fn qwerty(self) -> QwertyKey {
        match self {
            NavKey::Escape => QwertyKey::ESCAPE,
            NavKey::Space => QwertyKey::SPACE,
            NavKey::Tab => QwertyKey::TAB,
            NavKey::Return => QwertyKey::RETURN,
            NavKey::Home => QwertyKey::HOME,
            NavKey::PageUp => QwertyKey::PAGE_UP,
            NavKey::PageDown => QwertyKey::PAGE_DOWN,
            NavKey::End => QwertyKey::END,
            NavKey::Backspace => QwertyKey::BACKSPACE,
            NavKey::Delete => QwertyKey::DELETE,
            NavKey::Up => QwertyKey::UP,
            NavKey::Down => QwertyKey::DOWN,
            NavKey::Left => QwertyKey::LEFT,
            NavKey::Right => QwertyKey::RIGHT,
        }
    }

    /// Case-insensitive lookup by field name (`pageUp`, `PAGEUP`)
    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.field_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for NavKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Steno modifiers
///
/// `Layer` is the plain "navigation layer" chord and holds no Qwerty
/// modifier; the other four each hold one.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Modifier {
    Layer,
    Shift,
    Ctrl,
    Alt,
    Gui,
}

impl Modifier {
    pub const ALL: [Modifier; 5] = [
        Modifier::Layer,
        Modifier::Shift,
        Modifier::Ctrl,
        Modifier::Alt,
        Modifier::Gui,
    ];

    pub const fn field_name(self) -> &'static str {
        match self {
            Modifier::Layer => "layer",
            Modifier::Shift => "shift",
            Modifier::Ctrl => "ctrl",
            Modifier::Alt => "alt",
            Modifier::Gui => "gui",
        }
    }

    /// The Qwerty modifier held, `None` for the layer
    pub const fn qwerty(self) -> Option<QwertyMod> {
        match self {
            Modifier::Layer => None,
            Modifier::Shift => Some(QwertyMod::Shift),
            Modifier::Ctrl => Some(QwertyMod::Control),
            Modifier::Alt => Some(QwertyMod::Alt),
            Modifier::Gui => Some(QwertyMod::Super),
        }
    }

    /// Case-insensitive lookup by field name
    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|modifier| modifier.field_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// A named set of modifiers held in one chord
///
/// Modifiers are listed outermost first (shift, ctrl, alt, gui), which is
/// also the nesting order of the generated key combo:
/// `shift-ctrl` + Escape becomes `Shift_L(Control_L(Escape))`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ModifierCombo {
    pub name: &'static str,
    pub modifiers: &'static [Modifier],
}

impl ModifierCombo {
    const fn new(name: &'static str, modifiers: &'static [Modifier]) -> Self {
        Self { name, modifiers }
    }

    /// Wrap a Qwerty key in every modifier of this combo
    pub fn wrap(&self, key: QwertyKey) -> String {
        self.modifiers
            .iter()
            .rev()
            .filter_map(|modifier| modifier.qwerty())
            .fold(key.name().to_string(), |inner, qwerty| qwerty.wrap(&inner))
    }
}

impl fmt::Display for ModifierCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Combinations every generated dictionary carries
pub static STANDARD_COMBOS: [ModifierCombo; 12] = [
    ModifierCombo::new("layer", &[Layer]),
    ModifierCombo::new("shift", &[Shift]),
    ModifierCombo::new("ctrl", &[Ctrl]),
    ModifierCombo::new("alt", &[Alt]),
    ModifierCombo::new("gui", &[Gui]),
    ModifierCombo::new("shift-ctrl", &[Shift, Ctrl]),
    ModifierCombo::new("shift-alt", &[Shift, Alt]),
    ModifierCombo::new("shift-gui", &[Shift, Gui]),
    ModifierCombo::new("ctrl-alt", &[Ctrl, Alt]),
    ModifierCombo::new("alt-gui", &[Alt, Gui]),
    ModifierCombo::new("shift-ctrl-alt", &[Shift, Ctrl, Alt]),
    ModifierCombo::new("shift-alt-gui", &[Shift, Alt, Gui]),
];

/// Gui combinations outside the usual single-stroke command set
///
/// Always validated; generated only when enabled in `FactoryOpts`.
pub static NONSTANDARD_COMBOS: [ModifierCombo; 4] = [
    ModifierCombo::new("ctrl-gui", &[Ctrl, Gui]),
    ModifierCombo::new("shift-ctrl-gui", &[Shift, Ctrl, Gui]),
    ModifierCombo::new("ctrl-alt-gui", &[Ctrl, Alt, Gui]),
    ModifierCombo::new("shift-ctrl-alt-gui", &[Shift, Ctrl, Alt, Gui]),
];

/// Standard combos followed by the non-standard ones
pub fn all_combos() -> impl Iterator<Item = &'static ModifierCombo> {
    STANDARD_COMBOS.iter().chain(NONSTANDARD_COMBOS.iter())
}
