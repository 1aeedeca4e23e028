//! NFS Notepad: a browser text editor on the native file system pickers
//!
//! This crate provides:
//! - Open / save / save-as through the host's file pickers
//! - A bounded, timestamped on-page activity log
//! - Ctrl+O / Ctrl+S / Ctrl+Shift+S dispatch with explicit session state
//! - WASM bindings wiring it all to a `<textarea>` and a `<ul>`

pub mod activity;
pub mod capability;
pub mod config;
pub mod file_io;
pub mod session;
pub mod shortcut;
pub mod wasm;

use std::cell::RefCell;
use std::rc::Rc;

// Re-export WASM types for direct use
pub use wasm::NotepadApp;

// Re-export primary types
pub use activity::{ActivityLog, Clock, LogEntry, LogView, NullView, DEFAULT_LOG_CAPACITY};
pub use capability::Capability;
pub use config::{Config, ConfigError, Messages};
pub use file_io::{FileHost, FileIo, FsError, MemoryHandle, MemoryHost, OpenedFile, PickerOptions};
pub use session::Session;
pub use shortcut::{KeyCombo, Shortcut};

/// The editing surface: document text plus a blocking alert
pub trait Surface {
    /// Current document text
    fn content(&self) -> String;

    /// Replace the document text
    fn set_content(&mut self, text: &str);

    /// Show a blocking message to the user
    fn alert(&mut self, message: &str);
}

/// What a shortcut did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Saved to a newly picked file
    SavedAs,
    /// Saved to the current file (or a newly picked one if there was none)
    Saved,
    /// Loaded a file into the editor
    Opened,
    /// File system access is unavailable; nothing was attempted
    Unsupported,
    /// The operation failed; session state is unchanged
    Failed(Shortcut, FsError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::SavedAs | Outcome::Saved | Outcome::Opened)
    }
}

/// The editor controller combining all components
pub struct Notepad<H: FileHost, S: Surface, V: LogView, C: Clock> {
    config: Config,
    capability: Capability,
    files: FileIo<H>,
    session: Session<H::Handle>,
    surface: S,
    log: ActivityLog<V, C>,
}

impl<H, S, V, C> Notepad<H, S, V, C>
where
    H: FileHost,
    S: Surface,
    V: LogView,
    C: Clock,
{
    /// Create a controller and log whether file system access is available
    pub fn new(
        config: Config,
        capability: Capability,
        host: H,
        surface: S,
        view: V,
        clock: C,
    ) -> Self {
        let mut log = ActivityLog::new(config.log_capacity, view, clock);
        log.add(
            config
                .messages
                .support_status(capability.file_system_access),
        );

        Self {
            config,
            capability,
            files: FileIo::new(host),
            session: Session::new(),
            surface,
            log,
        }
    }

    /// Run the shortcut bound to `combo`, if any
    pub async fn handle_key(&mut self, combo: &KeyCombo) -> Option<Outcome> {
        let shortcut = Shortcut::from_combo(combo)?;
        Some(self.run(shortcut).await)
    }

    /// Run a shortcut to completion
    pub async fn run(&mut self, shortcut: Shortcut) -> Outcome {
        if !self.capability.file_system_access {
            log::warn!("{} needs file system access, which is unavailable", shortcut);
            self.surface.alert(&self.config.messages.unsupported_alert);
            return Outcome::Unsupported;
        }

        match shortcut {
            Shortcut::SaveAs | Shortcut::Save => self.save(shortcut).await,
            Shortcut::Open => self.open().await,
        }
    }

    async fn save(&mut self, shortcut: Shortcut) -> Outcome {
        let contents = self.surface.content();
        let target = self.session.save_target(shortcut);

        match self.files.save_file(target, &contents).await {
            Ok(handle) => {
                self.session.replace(handle);
                if shortcut == Shortcut::SaveAs {
                    self.log.add(&self.config.messages.saved_as);
                    Outcome::SavedAs
                } else {
                    self.log.add(&self.config.messages.saved);
                    Outcome::Saved
                }
            }
            Err(err) => {
                self.log.add(&self.config.messages.save_failed);
                Outcome::Failed(shortcut, err)
            }
        }
    }

    async fn open(&mut self) -> Outcome {
        match self.files.open_file().await {
            Ok(opened) => {
                self.session.replace(opened.handle);
                self.surface.set_content(&opened.text);
                self.log.add(&self.config.messages.opened);
                Outcome::Opened
            }
            Err(err) => {
                self.log.add(&self.config.messages.open_failed);
                Outcome::Failed(Shortcut::Open, err)
            }
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn session(&self) -> &Session<H::Handle> {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn log(&self) -> &ActivityLog<V, C> {
        &self.log
    }

    pub fn host(&self) -> &H {
        self.files.host()
    }
}

/// A notepad shared between event handlers, running one shortcut at a time
pub struct SharedNotepad<H: FileHost, S: Surface, V: LogView, C: Clock> {
    inner: Rc<RefCell<Notepad<H, S, V, C>>>,
}

impl<H, S, V, C> Clone for SharedNotepad<H, S, V, C>
where
    H: FileHost,
    S: Surface,
    V: LogView,
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<H, S, V, C> SharedNotepad<H, S, V, C>
where
    H: FileHost,
    S: Surface,
    V: LogView,
    C: Clock,
{
    pub fn new(notepad: Notepad<H, S, V, C>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(notepad)),
        }
    }

    /// Run `shortcut` unless another one is still pending, in which case it
    /// is dropped and `None` is returned
    // The borrow is held across the host awaits; that is the exclusion.
    #[allow(clippy::await_holding_refcell_ref)]
    pub async fn dispatch(&self, shortcut: Shortcut) -> Option<Outcome> {
        let Ok(mut notepad) = self.inner.try_borrow_mut() else {
            log::warn!("{} ignored: another file operation is pending", shortcut);
            return None;
        };
        let outcome = notepad.run(shortcut).await;
        log::debug!("{} finished: {:?}", shortcut, outcome);
        Some(outcome)
    }

    pub fn is_busy(&self) -> bool {
        self.inner.try_borrow_mut().is_err()
    }

    /// Inspect the notepad; `None` while a shortcut is pending
    pub fn with<R>(&self, f: impl FnOnce(&Notepad<H, S, V, C>) -> R) -> Option<R> {
        self.inner.try_borrow().ok().map(|notepad| f(&notepad))
    }
}
