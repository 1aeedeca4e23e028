//! DOM-backed surface, log view and clock

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlTextAreaElement, Window};

use super::AppError;
use crate::activity::{Clock, LogView};
use crate::Surface;

/// Look up a required element by id and cast it
pub(crate) fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, AppError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| AppError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| AppError::WrongElementType(id.to_string()))
}

/// The `<textarea>` holding the document, plus `window.alert`
pub struct DomSurface {
    window: Window,
    textarea: HtmlTextAreaElement,
}

impl DomSurface {
    pub fn new(window: Window, textarea: HtmlTextAreaElement) -> Self {
        Self { window, textarea }
    }
}

impl Surface for DomSurface {
    fn content(&self) -> String {
        self.textarea.value()
    }

    fn set_content(&mut self, text: &str) {
        self.textarea.set_value(text);
    }

    fn alert(&mut self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", err);
        }
    }
}

/// `<li>` items appended to a list element
///
/// The list is emptied on construction; afterwards its children are exactly
/// the log's entries.
pub struct DomLogView {
    document: Document,
    list: Element,
}

impl DomLogView {
    pub fn new(document: Document, list: Element) -> Self {
        if list.child_element_count() > 0 {
            log::debug!("clearing {} stale log items", list.child_element_count());
        }
        list.set_text_content(None);
        Self { document, list }
    }
}

impl LogView for DomLogView {
    fn append(&mut self, text: &str) -> bool {
        let item = match self.document.create_element("li") {
            Ok(item) => item,
            Err(err) => {
                log::warn!("could not create log item: {:?}", err);
                return false;
            }
        };
        item.set_text_content(Some(text));
        match self.list.append_child(&item) {
            Ok(_) => true,
            Err(err) => {
                log::warn!("could not append log item: {:?}", err);
                false
            }
        }
    }

    fn remove_oldest(&mut self) {
        if let Some(first) = self.list.first_element_child() {
            first.remove();
        }
    }
}

/// Timestamps from `Date.prototype.toString()`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> String {
        String::from(js_sys::Date::new_0().to_string())
    }
}
