//! Per-page session state

use crate::shortcut::Shortcut;

/// The file the editor is currently bound to
#[derive(Debug)]
pub struct Session<H> {
    current: Option<H>,
}

impl<H> Default for Session<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H> Session<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&H> {
        self.current.as_ref()
    }

    pub fn has_file(&self) -> bool {
        self.current.is_some()
    }

    /// Handle a save shortcut should write to; save-as always asks for a new one
    pub fn save_target(&self, shortcut: Shortcut) -> Option<&H> {
        match shortcut {
            Shortcut::SaveAs | Shortcut::Open => None,
            Shortcut::Save => self.current.as_ref(),
        }
    }

    /// Bind the session to a handle after a successful open or save
    pub fn replace(&mut self, handle: H) -> Option<H> {
        self.current.replace(handle)
    }
}
