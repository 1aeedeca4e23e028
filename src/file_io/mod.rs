//! File I/O adapter over the host's file pickers
//!
//! [`FileHost`] is the seam to the host: four primitives, each a single
//! awaited call. [`FileIo`] builds open / save / save-as on top of them and
//! reports failures to the developer console before handing them back.

mod error;
mod memory;
mod picker;

use async_trait::async_trait;

pub use error::FsError;
pub use memory::{MemoryHandle, MemoryHost};
pub use picker::{FilePickerAcceptType, PickerOptions};

/// Host file-system primitives
#[async_trait(?Send)]
pub trait FileHost {
    /// Opaque reference to a file in host storage
    type Handle: Clone;

    /// Ask the user for a file to open
    async fn pick_open(&self, options: &PickerOptions) -> Result<Self::Handle, FsError>;

    /// Ask the user where to save a new file
    async fn pick_save(&self, options: &PickerOptions) -> Result<Self::Handle, FsError>;

    /// Read the whole file as text
    async fn read_text(&self, handle: &Self::Handle) -> Result<String, FsError>;

    /// Replace the whole file with `contents` and close it
    async fn write_text(&self, handle: &Self::Handle, contents: &str) -> Result<(), FsError>;
}

/// Result of a successful open
#[derive(Debug, Clone, PartialEq)]
pub struct OpenedFile<H> {
    pub handle: H,
    pub text: String,
}

/// Open and save operations
pub struct FileIo<H: FileHost> {
    host: H,
}

impl<H: FileHost> FileIo<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Pick a text file and read it
    pub async fn open_file(&self) -> Result<OpenedFile<H::Handle>, FsError> {
        let handle = self
            .host
            .pick_open(&PickerOptions::open_text())
            .await
            .map_err(|err| report("failed to pick a file to open", err))?;

        let text = self
            .host
            .read_text(&handle)
            .await
            .map_err(|err| report("failed to read text from the picked file", err))?;

        log::debug!("opened file ({} bytes)", text.len());
        Ok(OpenedFile { handle, text })
    }

    /// Write `contents` to `handle`, or to a newly picked file when absent.
    /// Returns the handle that was written.
    pub async fn save_file(
        &self,
        handle: Option<&H::Handle>,
        contents: &str,
    ) -> Result<H::Handle, FsError> {
        let handle = match handle {
            Some(existing) => existing.clone(),
            None => self
                .host
                .pick_save(&PickerOptions::save_text())
                .await
                .map_err(|err| report("failed to save", err))?,
        };

        self.host
            .write_text(&handle, contents)
            .await
            .map_err(|err| report("failed to save", err))?;

        log::debug!("saved file ({} bytes)", contents.len());
        Ok(handle)
    }
}

fn report(context: &str, err: FsError) -> FsError {
    if err.is_cancelled() {
        log::info!("{}: {}", context, err);
    } else {
        log::error!("{}: {}", context, err);
    }
    err
}
