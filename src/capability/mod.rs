//! Host capability flags, resolved once at startup

/// Name of the global entry point whose presence signals file system access
pub const OPEN_PICKER_ENTRY_POINT: &str = "showOpenFilePicker";

/// Optional host features the editor depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capability {
    /// Native open/save file pickers are available
    pub file_system_access: bool,
}

impl Capability {
    pub fn new(file_system_access: bool) -> Self {
        Self { file_system_access }
    }

    /// Combine a configured override with the probed value; the override wins
    pub fn resolve(configured: Option<bool>, probe: impl FnOnce() -> bool) -> Self {
        let file_system_access = match configured {
            Some(forced) => {
                log::debug!("file system access forced to {} by config", forced);
                forced
            }
            None => probe(),
        };
        Self { file_system_access }
    }
}
