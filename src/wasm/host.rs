//! File System Access API bindings

use async_trait::async_trait;
use js_sys::{Array, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::capability::OPEN_PICKER_ENTRY_POINT;
use crate::file_io::{FileHost, FsError, PickerOptions};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = showOpenFilePicker)]
    fn show_open_file_picker(options: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_name = showSaveFilePicker)]
    fn show_save_file_picker(options: &JsValue) -> Result<Promise, JsValue>;

    /// `FileSystemFileHandle`
    #[wasm_bindgen(extends = js_sys::Object)]
    #[derive(Debug, Clone)]
    pub type FileHandle;

    #[wasm_bindgen(method, catch, js_name = getFile)]
    fn get_file(this: &FileHandle) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = createWritable)]
    fn create_writable(this: &FileHandle) -> Result<Promise, JsValue>;

    /// `FileSystemWritableFileStream`
    #[wasm_bindgen(extends = js_sys::Object)]
    type WritableFile;

    #[wasm_bindgen(method, catch)]
    fn write(this: &WritableFile, data: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn close(this: &WritableFile) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn abort(this: &WritableFile) -> Result<Promise, JsValue>;
}

/// True iff the global object exposes the open-file picker
pub fn probe_file_system_access() -> bool {
    Reflect::has(&js_sys::global(), &JsValue::from_str(OPEN_PICKER_ENTRY_POINT)).unwrap_or(false)
}

/// Await a promise returned by a `catch` binding
async fn settle(promise: Result<Promise, JsValue>) -> Result<JsValue, FsError> {
    let promise = promise.map_err(classify)?;
    JsFuture::from(promise).await.map_err(classify)
}

/// Map a thrown JS value onto the error taxonomy
fn classify(err: JsValue) -> FsError {
    if let Some(dom) = err.dyn_ref::<web_sys::DomException>() {
        return match dom.name().as_str() {
            "AbortError" => FsError::Cancelled,
            "NotAllowedError" | "SecurityError" => FsError::Io(dom.message()),
            "EncodingError" => FsError::Decode(dom.message()),
            _ => FsError::Io(format!("{}: {}", dom.name(), dom.message())),
        };
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        let name = String::from(error.name());
        let message = String::from(error.message());
        if is_missing_picker(&name, &message) {
            return FsError::Unsupported(message);
        }
        return FsError::Io(format!("{}: {}", name, message));
    }
    FsError::Io(describe(&err))
}

/// A picker entry point that is undefined or not callable
fn is_missing_picker(error_name: &str, message: &str) -> bool {
    match error_name {
        "ReferenceError" => true,
        "TypeError" => PICKER_ENTRY_POINTS
            .iter()
            .any(|entry| message.contains(entry)),
        _ => false,
    }
}

const PICKER_ENTRY_POINTS: [&str; 2] = ["showOpenFilePicker", "showSaveFilePicker"];

fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Convert picker options into the JS object the pickers take
fn options_to_js(options: &PickerOptions) -> Result<JsValue, FsError> {
    let json = options
        .to_json()
        .map_err(|err| FsError::Io(format!("could not encode picker options: {}", err)))?;
    js_sys::JSON::parse(&json).map_err(|err| FsError::Io(describe(&err)))
}

/// [`FileHost`] backed by `showOpenFilePicker` / `showSaveFilePicker`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserFileHost;

#[async_trait(?Send)]
impl FileHost for BrowserFileHost {
    type Handle = FileHandle;

    async fn pick_open(&self, options: &PickerOptions) -> Result<FileHandle, FsError> {
        let options = options_to_js(options)?;
        let picked = settle(show_open_file_picker(&options)).await?;

        // The picker resolves to an array of handles; only the first is used
        let first = Array::from(&picked).get(0);
        if first.is_undefined() {
            return Err(FsError::Cancelled);
        }
        Ok(first.unchecked_into::<FileHandle>())
    }

    async fn pick_save(&self, options: &PickerOptions) -> Result<FileHandle, FsError> {
        let options = options_to_js(options)?;
        let picked = settle(show_save_file_picker(&options)).await?;
        Ok(picked.unchecked_into::<FileHandle>())
    }

    async fn read_text(&self, handle: &FileHandle) -> Result<String, FsError> {
        let file = settle(handle.get_file()).await?;
        let file: web_sys::File = file
            .dyn_into()
            .map_err(|value| FsError::Io(format!("getFile returned {:?}", value)))?;

        let text = JsFuture::from(file.text()).await.map_err(|err| match classify(err) {
            FsError::Io(message) => FsError::Decode(message),
            other => other,
        })?;
        text.as_string()
            .ok_or_else(|| FsError::Decode("file text was not a string".to_string()))
    }

    async fn write_text(&self, handle: &FileHandle, contents: &str) -> Result<(), FsError> {
        // A fresh writable starts empty, so the write replaces the file
        let writable: WritableFile = settle(handle.create_writable()).await?.unchecked_into();
        if let Err(err) = settle(writable.write(&JsValue::from_str(contents))).await {
            discard(&writable).await;
            return Err(err);
        }
        settle(writable.close()).await?;
        Ok(())
    }
}

/// Abort a writable after a failed write so the original file is kept
async fn discard(writable: &WritableFile) {
    if let Err(err) = settle(writable.abort()).await {
        log::warn!("could not abort writable stream: {}", err);
    }
}
