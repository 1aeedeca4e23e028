//! Keyboard shortcuts handled by the editor

use std::fmt;

/// Modifier state and physical key code of a keydown
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyCombo {
    pub ctrl: bool,
    pub shift: bool,
    /// `KeyboardEvent.code`, e.g. `"KeyS"`
    pub code: String,
}

impl KeyCombo {
    pub fn new(ctrl: bool, shift: bool, code: impl Into<String>) -> Self {
        Self {
            ctrl,
            shift,
            code: code.into(),
        }
    }

    /// Ctrl + `code`
    pub fn ctrl(code: impl Into<String>) -> Self {
        Self::new(true, false, code)
    }

    /// Ctrl + Shift + `code`
    pub fn ctrl_shift(code: impl Into<String>) -> Self {
        Self::new(true, true, code)
    }
}

/// File shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shortcut {
    /// Ctrl+Shift+S
    SaveAs,
    /// Ctrl+S
    Save,
    /// Ctrl+O
    Open,
}

impl Shortcut {
    pub const ALL: [Shortcut; 3] = [Shortcut::SaveAs, Shortcut::Save, Shortcut::Open];

    /// Map a key combination to a shortcut; `None` means the key is left alone.
    ///
    /// Ctrl+Shift+S is checked before Ctrl+S. Shift is ignored for Ctrl+O.
    pub fn from_combo(combo: &KeyCombo) -> Option<Self> {
        if !combo.ctrl {
            return None;
        }
        match (combo.shift, combo.code.as_str()) {
            (true, "KeyS") => Some(Shortcut::SaveAs),
            (false, "KeyS") => Some(Shortcut::Save),
            (_, "KeyO") => Some(Shortcut::Open),
            _ => None,
        }
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shortcut::SaveAs => "Ctrl+Shift+S (save as)",
            Shortcut::Save => "Ctrl+S (save)",
            Shortcut::Open => "Ctrl+O (open)",
        };
        f.write_str(name)
    }
}
