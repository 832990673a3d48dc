use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Kind of filesystem node seen during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    File,
    Directory,
}

/// A single filesystem node discovered while listing a directory.
///
/// Entries are plain data: they are rebuilt fresh from the filesystem each
/// time a directory is listed and never cached across render passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Absolute path of the node.
    pub path: PathBuf,
    /// Display name (final path component).
    pub name: String,
    /// Node kind.
    pub kind: EntryKind,
    /// Lower-cased extension with its leading dot, files only.
    ///
    /// `None` for directories and for names without an extension
    /// (including leading-dot names like `.gitignore`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Lower-cased extension of a file name, dot included.
pub(crate) fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
}

/// Summary counters from a completed run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RunReport {
    /// Tree lines written, including the root line.
    pub tree_entries: usize,
    /// Files whose bodies were rendered successfully.
    pub files_rendered: usize,
}
