//! Keyboard shortcuts for the standalone window.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use eframe::egui;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Modifier {
    None,
    Ctrl,
    Alt,
    Shift,
    CtrlShift,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modifier::None => "",
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::CtrlShift => "Ctrl+Shift",
        };
        write!(f, "{}", s)
    }
}

/// A single-key shortcut, written as `"Ctrl+R"` in config files.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hotkey {
    pub modifier: Modifier,
    pub key: char,
}

impl Hotkey {
    pub fn new(modifier: Modifier, key: char) -> Self {
        Self { modifier, key }
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifier == Modifier::None {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifier, self.key)
        }
    }
}

impl FromStr for Hotkey {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('+').map(|p| p.trim()).collect();
        let (last, mods) = match parts.split_last() {
            Some((last, mods)) if !last.is_empty() => (last, mods),
            _ => return Err("empty hotkey".to_string()),
        };
        let mut chars = last.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_ascii_uppercase(),
            _ => return Err(format!("key must be a single character, got '{}'", last)),
        };
        let mut lowers: Vec<String> = mods.iter().map(|m| m.to_lowercase()).collect();
        lowers.sort();
        let lowers: Vec<&str> = lowers.iter().map(String::as_str).collect();
        let modifier = match lowers.as_slice() {
            [] => Modifier::None,
            ["ctrl"] | ["control"] => Modifier::Ctrl,
            ["alt"] => Modifier::Alt,
            ["shift"] => Modifier::Shift,
            ["ctrl", "shift"] => Modifier::CtrlShift,
            _ => return Err(format!("unknown modifier combo '{:?}'", mods)),
        };
        Ok(Hotkey { modifier, key })
    }
}

impl TryFrom<String> for Hotkey {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Hotkey> for String {
    fn from(hk: Hotkey) -> Self {
        hk.to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotkeys {
    pub reset: Option<Hotkey>,
    pub toggle_mode: Option<Hotkey>,
    pub save_png: Option<Hotkey>,
}

impl Default for Hotkeys {
    fn default() -> Self {
        Self {
            reset: Some(Hotkey::new(Modifier::None, 'R')),
            toggle_mode: Some(Hotkey::new(Modifier::None, 'M')),
            save_png: Some(Hotkey::new(Modifier::None, 'S')),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HotkeyName {
    Reset,
    ToggleMode,
    SavePng,
}

impl Hotkeys {
    pub fn get(&self, name: HotkeyName) -> Option<&Hotkey> {
        match name {
            HotkeyName::Reset => self.reset.as_ref(),
            HotkeyName::ToggleMode => self.toggle_mode.as_ref(),
            HotkeyName::SavePng => self.save_png.as_ref(),
        }
    }

    /// Shortcuts triggered in this frame's input.
    pub fn pressed(&self, input: &egui::InputState) -> Vec<HotkeyName> {
        [HotkeyName::Reset, HotkeyName::ToggleMode, HotkeyName::SavePng]
            .into_iter()
            .filter(|name| is_hotkey_pressed(self.get(*name), input))
            .collect()
    }
}

/// Button tooltip with the bound shortcut appended, e.g. `Reset [R]`.
pub fn format_button_tooltip(description: &str, hotkey: Option<&Hotkey>) -> String {
    match hotkey {
        Some(hk) => format!("{} [{}]", description, hk),
        None => description.to_string(),
    }
}

fn key_from_char(c: char) -> Option<egui::Key> {
    let c = c.to_ascii_uppercase();
    if c == ' ' {
        return Some(egui::Key::Space);
    }
    if c.is_ascii_alphanumeric() {
        egui::Key::from_name(&c.to_string())
    } else {
        None
    }
}

fn modifiers_match(mods: &egui::Modifiers, modifier: Modifier) -> bool {
    let ctrl = mods.ctrl || mods.command;
    let alt = mods.alt;
    let shift = mods.shift;
    match modifier {
        Modifier::None => !ctrl && !alt,
        Modifier::Ctrl => ctrl && !alt,
        Modifier::Alt => alt && !ctrl,
        Modifier::Shift => shift && !ctrl && !alt,
        Modifier::CtrlShift => ctrl && shift && !alt,
    }
}

fn is_hotkey_pressed(hk: Option<&Hotkey>, input: &egui::InputState) -> bool {
    let Some(hk) = hk else { return false };
    let Some(key) = key_from_char(hk.key) else {
        return false;
    };
    modifiers_match(&input.modifiers, hk.modifier) && input.key_pressed(key)
}
