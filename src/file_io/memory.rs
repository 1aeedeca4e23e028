//! In-memory file host with scripted picker answers

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};

use async_trait::async_trait;

use super::{FileHost, FsError, PickerOptions};

/// Handle into a [`MemoryHost`]: the file's name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemoryHandle(String);

impl MemoryHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// File host backed by a map of names to bytes
///
/// Picker calls answer from queues filled with [`queue_open`](Self::queue_open)
/// and [`queue_save`](Self::queue_save); an empty queue behaves like the user
/// dismissing the dialog.
#[derive(Debug, Default)]
pub struct MemoryHost {
    files: RefCell<BTreeMap<String, Vec<u8>>>,
    open_picks: RefCell<VecDeque<String>>,
    save_picks: RefCell<VecDeque<String>>,
    save_picks_used: Cell<usize>,
    writes: Cell<usize>,
    fail_writes: Cell<bool>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, name: &str, text: &str) {
        self.insert_bytes(name, text.as_bytes().to_vec());
    }

    pub fn insert_bytes(&self, name: &str, bytes: Vec<u8>) {
        self.files.borrow_mut().insert(name.to_string(), bytes);
    }

    /// Text of a stored file, if it exists and is UTF-8
    pub fn contents(&self, name: &str) -> Option<String> {
        self.files
            .borrow()
            .get(name)
            .and_then(|bytes| String::from_utf8(bytes.clone()).ok())
    }

    /// Next open picker call selects `name`
    pub fn queue_open(&self, name: &str) {
        self.open_picks.borrow_mut().push_back(name.to_string());
    }

    /// Next save picker call selects `name`
    pub fn queue_save(&self, name: &str) {
        self.save_picks.borrow_mut().push_back(name.to_string());
    }

    /// Make every write fail with an I/O error
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of completed writes
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Number of save picker calls that returned a handle
    pub fn save_picks_used(&self) -> usize {
        self.save_picks_used.get()
    }
}

#[async_trait(?Send)]
impl FileHost for MemoryHost {
    type Handle = MemoryHandle;

    async fn pick_open(&self, _options: &PickerOptions) -> Result<MemoryHandle, FsError> {
        let name = self
            .open_picks
            .borrow_mut()
            .pop_front()
            .ok_or(FsError::Cancelled)?;
        if !self.files.borrow().contains_key(&name) {
            return Err(FsError::Io(format!("{}: not found", name)));
        }
        Ok(MemoryHandle(name))
    }

    async fn pick_save(&self, _options: &PickerOptions) -> Result<MemoryHandle, FsError> {
        let name = self
            .save_picks
            .borrow_mut()
            .pop_front()
            .ok_or(FsError::Cancelled)?;
        self.save_picks_used.set(self.save_picks_used.get() + 1);
        Ok(MemoryHandle(name))
    }

    async fn read_text(&self, handle: &MemoryHandle) -> Result<String, FsError> {
        let bytes = self
            .files
            .borrow()
            .get(handle.name())
            .cloned()
            .ok_or_else(|| FsError::Io(format!("{}: not found", handle.name())))?;
        String::from_utf8(bytes).map_err(|err| FsError::Decode(err.to_string()))
    }

    async fn write_text(&self, handle: &MemoryHandle, contents: &str) -> Result<(), FsError> {
        if self.fail_writes.get() {
            return Err(FsError::Io(format!("{}: write refused", handle.name())));
        }
        self.files
            .borrow_mut()
            .insert(handle.name().to_string(), contents.as_bytes().to_vec());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
