//! Built-in extension categories and the optional JSON profile that
//! overrides them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Extension lists grouped by category, used to seed the default
/// excluded-extension set and the settings set.
///
/// A profile file is plain JSON with the same field names; missing fields
/// fall back to the built-in lists, and an unreadable or malformed file
/// falls back entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeProfile {
    pub image_extensions: Vec<String>,
    pub video_extensions: Vec<String>,
    pub audio_extensions: Vec<String>,
    pub document_extensions: Vec<String>,
    pub executable_extensions: Vec<String>,
    pub settings_extensions: Vec<String>,
    pub additional_ignore_types: Vec<String>,
    pub default_output_file: String,
}

impl Default for TypeProfile {
    fn default() -> Self {
        Self {
            image_extensions: strings(&[
                ".png", ".jpg", ".jpeg", ".gif", ".bmp", ".svg", ".ico", ".webp", ".tiff",
            ]),
            video_extensions: strings(&[".mp4", ".mov", ".avi", ".mkv", ".webm", ".wmv"]),
            audio_extensions: strings(&[".mp3", ".wav", ".flac", ".ogg", ".m4a"]),
            document_extensions: strings(&[
                ".pdf", ".doc", ".docx", ".ppt", ".pptx", ".xls", ".xlsx", ".odt",
            ]),
            executable_extensions: strings(&[
                ".exe", ".dll", ".so", ".dylib", ".bin", ".o", ".a", ".class", ".jar", ".pyc",
                ".wasm",
            ]),
            settings_extensions: strings(&[
                ".json", ".yaml", ".yml", ".toml", ".ini", ".cfg", ".conf", ".properties",
                ".plist",
            ]),
            additional_ignore_types: strings(&[
                ".zip", ".tar", ".gz", ".7z", ".rar", ".lock", ".db", ".sqlite", ".ttf", ".woff",
                ".woff2", ".eot",
            ]),
            default_output_file: "output.txt".to_string(),
        }
    }
}

impl TypeProfile {
    /// Loads a profile from a JSON file, falling back to the built-in
    /// defaults when the file is missing or malformed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(profile) => profile,
                Err(e) => {
                    tracing::warn!("ignoring malformed profile {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::debug!("profile {} not loaded ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// The union of every non-settings category plus the additional list,
    /// deduplicated and in deterministic order.
    pub fn ignore_types(&self) -> Vec<String> {
        let mut set = BTreeSet::new();
        for list in [
            &self.image_extensions,
            &self.video_extensions,
            &self.audio_extensions,
            &self.document_extensions,
            &self.executable_extensions,
            &self.additional_ignore_types,
        ] {
            set.extend(list.iter().cloned());
        }
        set.into_iter().collect()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
