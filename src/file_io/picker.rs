//! Options object passed to the host file pickers
//!
//! Serializes to the shape the pickers expect:
//! ```text
//! { "types": [ { "description": "Text Files",
//!                "accept": { "text/plain": [".txt", ".text"] } } ] }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const TEXT_MIME: &str = "text/plain";
pub const TEXT_DESCRIPTION: &str = "Text Files";

/// One entry of the picker's type filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePickerAcceptType {
    pub description: String,
    /// MIME type -> accepted extensions
    pub accept: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PickerOptions {
    pub types: Vec<FilePickerAcceptType>,
}

impl PickerOptions {
    /// Plain text filter accepting the given extensions
    pub fn text(extensions: &[&str]) -> Self {
        let mut accept = BTreeMap::new();
        accept.insert(
            TEXT_MIME.to_string(),
            extensions.iter().map(|ext| ext.to_string()).collect(),
        );
        Self {
            types: vec![FilePickerAcceptType {
                description: TEXT_DESCRIPTION.to_string(),
                accept,
            }],
        }
    }

    /// Filter used when opening
    pub fn open_text() -> Self {
        Self::text(&[".txt", ".text"])
    }

    /// Filter suggested when saving as a new file
    pub fn save_text() -> Self {
        Self::text(&[".txt"])
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
