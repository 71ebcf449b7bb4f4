use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const VENDOR_NAME: &str = "lacodda";
pub const APP_NAME: &str = "taskdo";

/// Resolves platform-specific application data paths.
///
/// All persistent state (database, configuration) lives under the vendor/app
/// directory in the OS-conventional application data location.
#[derive(Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);

        Self { base_path }
    }

    pub fn get_path(&self, file_name: &str) -> anyhow::Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}
