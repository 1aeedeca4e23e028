//! WASM bindings for the editor

mod console;
mod dom;
mod host;

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlTextAreaElement, KeyboardEvent};

use crate::{Capability, Config, ConfigError, KeyCombo, Notepad, SharedNotepad, Shortcut};

pub use console::ConsoleLogger;
pub use dom::{BrowserClock, DomLogView, DomSurface};
pub use host::{probe_file_system_access, BrowserFileHost, FileHandle};

/// Notepad wired to the page
pub type BrowserNotepad = Notepad<BrowserFileHost, DomSurface, DomLogView, BrowserClock>;

type SharedBrowserNotepad = SharedNotepad<BrowserFileHost, DomSurface, DomLogView, BrowserClock>;

/// Failures while attaching to the page
#[derive(Debug, Error)]
pub enum AppError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{0} has the wrong type")]
    WrongElementType(String),
    #[error("could not register keydown listener")]
    Listener,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    console::init(log::LevelFilter::Info);
}

/// Whether the host exposes the native file pickers
#[wasm_bindgen(js_name = isFileSystemAccessSupported)]
pub fn is_file_system_access_supported() -> bool {
    probe_file_system_access()
}

impl KeyCombo {
    /// Read modifiers and key code from a keydown event
    pub fn from_event(event: &KeyboardEvent) -> Self {
        Self::new(event.ctrl_key(), event.shift_key(), event.code())
    }
}

type KeyListener = Closure<dyn FnMut(KeyboardEvent)>;

/// WASM-exposed editor wrapper
#[wasm_bindgen]
pub struct NotepadApp {
    notepad: SharedBrowserNotepad,
    capability: Capability,
    document: Document,
    listener: Option<KeyListener>,
}

#[wasm_bindgen]
impl NotepadApp {
    /// Create an editor bound to `#content` and `#logList`
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<NotepadApp, JsError> {
        Ok(Self::build(Config::default())?)
    }

    /// Create an editor from a JSON config (missing fields use defaults)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<NotepadApp, JsError> {
        let config = Config::from_json(json).map_err(AppError::from)?;
        Ok(Self::build(config)?)
    }

    /// Start handling the file shortcuts on the document
    pub fn attach(&mut self) -> Result<(), JsError> {
        if self.listener.is_some() {
            return Ok(());
        }

        let notepad = self.notepad.clone();
        let listener = KeyListener::new(move |event: KeyboardEvent| {
            let Some(shortcut) = Shortcut::from_combo(&KeyCombo::from_event(&event)) else {
                return;
            };
            event.prevent_default();

            let notepad = notepad.clone();
            spawn_local(async move {
                notepad.dispatch(shortcut).await;
            });
        });

        self.document
            .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
            .map_err(|_| AppError::Listener)?;
        self.listener = Some(listener);
        Ok(())
    }

    /// Stop handling shortcuts
    pub fn detach(&mut self) {
        if let Some(listener) = self.listener.take() {
            let _ = self
                .document
                .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
        }
    }

    /// Whether a file is currently bound to the editor.
    /// Reports false while a file operation is pending.
    #[wasm_bindgen(js_name = hasOpenFile)]
    pub fn has_open_file(&self) -> bool {
        self.notepad
            .with(|notepad| notepad.session().has_file())
            .unwrap_or(false)
    }

    /// Resolved file system access flag
    #[wasm_bindgen(js_name = isSupported)]
    pub fn is_supported(&self) -> bool {
        self.capability.file_system_access
    }

    /// Rendered log lines, oldest first (empty while a file operation is pending)
    #[wasm_bindgen(js_name = logLines)]
    pub fn log_lines(&self) -> Vec<String> {
        self.notepad
            .with(|notepad| notepad.log().lines())
            .unwrap_or_default()
    }
}

impl NotepadApp {
    fn build(config: Config) -> Result<Self, AppError> {
        log::set_max_level(config.log_level);

        let window = web_sys::window().ok_or(AppError::NoWindow)?;
        let document = window.document().ok_or(AppError::NoDocument)?;

        let textarea: HtmlTextAreaElement =
            dom::element_by_id(&document, &config.content_element_id)?;
        let list: web_sys::Element = dom::element_by_id(&document, &config.log_element_id)?;

        let capability =
            Capability::resolve(config.file_system_access, probe_file_system_access);
        log::info!(
            "file system access {}",
            if capability.file_system_access { "available" } else { "unavailable" }
        );

        let notepad = Notepad::new(
            config,
            capability,
            BrowserFileHost,
            DomSurface::new(window, textarea),
            DomLogView::new(document.clone(), list),
            BrowserClock,
        );

        Ok(Self {
            notepad: SharedNotepad::new(notepad),
            capability,
            document,
            listener: None,
        })
    }
}

impl Drop for NotepadApp {
    fn drop(&mut self) {
        self.detach();
    }
}
