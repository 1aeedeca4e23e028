//! Browser tests, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use nfs_notepad::wasm::{
    is_file_system_access_supported, BrowserClock, BrowserFileHost, DomLogView, FileHandle,
};
use nfs_notepad::{ActivityLog, Clock, FileHost, FsError, NotepadApp, PickerOptions};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn log_list() -> (web_sys::Document, web_sys::Element) {
    let document = web_sys::window().unwrap().document().unwrap();
    let list = document.create_element("ul").unwrap();
    document.body().unwrap().append_child(&list).unwrap();
    (document, list)
}

#[wasm_bindgen_test]
fn test_capability_check_matches_global() {
    let expected = js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("showOpenFilePicker"))
        .unwrap();
    assert_eq!(is_file_system_access_supported(), expected);
}

#[wasm_bindgen_test]
fn test_dom_log_is_capped() {
    let (document, list) = log_list();
    let mut log = ActivityLog::new(16, DomLogView::new(document, list.clone()), BrowserClock);

    for i in 0..20 {
        log.add(&format!("line {}", i));
    }

    assert_eq!(list.child_element_count(), 16);
    let first = list.first_element_child().unwrap().text_content().unwrap();
    assert!(first.starts_with("line 4 ["));
    let last = list.last_element_child().unwrap().text_content().unwrap();
    assert!(last.starts_with("line 19 ["));
}

#[wasm_bindgen_test]
fn test_browser_clock_is_date_string() {
    let now = BrowserClock.now();
    assert!(!now.is_empty());
    assert!(!js_sys::Date::parse(&now).is_nan());
}

#[wasm_bindgen_test]
fn test_picker_options_parse_as_js() {
    let json = PickerOptions::open_text().to_json().unwrap();
    let value = js_sys::JSON::parse(&json).unwrap();
    let types = js_sys::Reflect::get(&value, &JsValue::from_str("types")).unwrap();
    assert!(js_sys::Array::is_array(&types));
}

#[wasm_bindgen_test]
fn test_stale_log_items_are_cleared() {
    let (document, list) = log_list();
    for _ in 0..3 {
        let stale = document.create_element("li").unwrap();
        list.append_child(&stale).unwrap();
    }

    let mut log = ActivityLog::new(2, DomLogView::new(document, list.clone()), BrowserClock);
    assert_eq!(list.child_element_count(), 0);

    log.add("a");
    log.add("b");
    log.add("c");
    assert_eq!(list.child_element_count(), 2);
    let first = list.first_element_child().unwrap().text_content().unwrap();
    assert!(first.starts_with("b ["));
}

/// Page with its own textarea and log list; `window.alert` is stubbed out
fn mount_editor(suffix: &str) -> NotepadApp {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let body = document.body().unwrap();

    let content = document.create_element("textarea").unwrap();
    content.set_id(&format!("content-{}", suffix));
    body.append_child(&content).unwrap();
    let list = document.create_element("ul").unwrap();
    list.set_id(&format!("logList-{}", suffix));
    body.append_child(&list).unwrap();

    js_sys::Reflect::set(
        &window,
        &JsValue::from_str("alert"),
        &js_sys::Function::new_no_args(""),
    )
    .unwrap();

    let config = format!(
        r#"{{"fileSystemAccess": false, "contentElementId": "content-{0}", "logElementId": "logList-{0}"}}"#,
        suffix
    );
    NotepadApp::with_config(&config).unwrap()
}

/// Dispatch a keydown on the document; true if a listener prevented the default
fn press(ctrl: bool, shift: bool, code: &str) -> bool {
    let init = KeyboardEventInit::new();
    init.set_ctrl_key(ctrl);
    init.set_shift_key(shift);
    init.set_code(code);
    init.set_cancelable(true);
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();

    let document = web_sys::window().unwrap().document().unwrap();
    document.dispatch_event(&event).unwrap();
    event.default_prevented()
}

#[wasm_bindgen_test]
fn test_shortcuts_prevent_default() {
    let mut app = mount_editor("keys");
    app.attach().unwrap();

    assert!(press(true, false, "KeyS"));
    assert!(press(true, true, "KeyS"));
    assert!(press(true, false, "KeyO"));

    assert!(!press(true, false, "KeyP"));
    assert!(!press(false, false, "KeyS"));

    app.detach();
}

#[wasm_bindgen_test]
fn test_detach_stops_interception() {
    let mut app = mount_editor("detach");
    app.attach().unwrap();
    assert!(press(true, false, "KeyS"));

    app.detach();
    assert!(!press(true, false, "KeyS"));
}

#[wasm_bindgen_test]
async fn test_unsupported_shortcut_keeps_state() {
    let mut app = mount_editor("unsupported");
    app.attach().unwrap();
    let lines_before = app.log_lines();

    assert!(press(true, false, "KeyO"));
    // Let the spawned task run
    wasm_bindgen_futures::JsFuture::from(js_sys::Promise::resolve(&JsValue::NULL))
        .await
        .unwrap();

    assert!(!app.is_supported());
    assert!(!app.has_open_file());
    assert_eq!(app.log_lines(), lines_before);
    app.detach();
}

/// Handle whose writable rejects `write`, recording calls in `calls`
fn failing_handle(error: &str) -> (FileHandle, js_sys::Array) {
    let make = js_sys::Function::new_with_args(
        "error",
        "const calls = [];
         const handle = {
           createWritable: async () => ({
             write: async () => { calls.push('write'); throw new TypeError(error); },
             abort: async () => { calls.push('abort'); },
             close: async () => { calls.push('close'); },
           }),
         };
         return [handle, calls];",
    );
    let pair: js_sys::Array = make
        .call1(&JsValue::NULL, &JsValue::from_str(error))
        .unwrap()
        .unchecked_into();
    (pair.get(0).unchecked_into(), pair.get(1).unchecked_into())
}

#[wasm_bindgen_test]
async fn test_failed_write_aborts_stream() {
    let (handle, calls) = failing_handle("The stream is closed");

    let result = BrowserFileHost.write_text(&handle, "X").await;

    assert!(matches!(result, Err(FsError::Io(_))));
    let calls: Vec<String> = calls.iter().filter_map(|c| c.as_string()).collect();
    assert_eq!(calls, vec!["write", "abort"]);
}
