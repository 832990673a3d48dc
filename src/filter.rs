//! The include/exclude rule engine shared by both render passes.

use crate::error::RepodocError;
use crate::options::RepodocOptions;
use crate::types::{Entry, EntryKind};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Directory names always pruned from the walk: version-control metadata,
/// editor state, dependency caches and build caches.
const ARTIFACT_DIRS: &[&str] = &[
    ".git",
    ".vscode",
    ".idea",
    "__pycache__",
    "node_modules",
    "target",
];

/// An exclusion list equal to `["none"]` means "exclude nothing" and is the
/// way callers re-enable a dimension that is filtered by default.
const SENTINEL_NONE: &str = "none";

/// Compiled, immutable snapshot of every filter input.
///
/// Built once per run from [`RepodocOptions`] and passed by reference into
/// both renderers, so the same decision function governs the tree view and
/// the content dump. [`Filter::includes`] is pure: for a given snapshot it
/// returns the same answer for the same entry on every call.
#[derive(Debug)]
pub struct Filter {
    root: PathBuf,
    output_path: PathBuf,
    exclude_files: HashSet<String>,
    exclude_types: HashSet<String>,
    exclude_dirs: HashSet<String>,
    settings_types: HashSet<String>,
    ignore_settings: bool,
    include_dir: Option<PathBuf>,
    include_patterns: Option<GlobSet>,
}

impl Filter {
    pub fn new(options: &RepodocOptions) -> Result<Self, RepodocError> {
        let include_dir = options
            .include_dir
            .as_deref()
            .map(absolute)
            .transpose()?;
        // The walk starts at the include subtree when one is configured.
        let root = match &include_dir {
            Some(dir) => dir.clone(),
            None => absolute(&options.root)?,
        };
        let include_patterns = match &options.include_patterns {
            Some(patterns) => {
                let mut builder = GlobSetBuilder::new();
                for pattern in patterns {
                    builder.add(Glob::new(pattern)?);
                }
                Some(builder.build()?)
            }
            None => None,
        };
        Ok(Self {
            root,
            output_path: absolute(&options.output_path)?,
            exclude_files: name_set(&options.exclude_files),
            exclude_types: extension_set(&options.exclude_types),
            exclude_dirs: name_set(&options.exclude_dirs),
            settings_types: extension_set(&options.settings_types),
            ignore_settings: options.ignore_settings,
            include_dir,
            include_patterns,
        })
    }

    /// The directory the walk starts from; also the base for the relative
    /// paths in content markers.
    pub fn processing_root(&self) -> &Path {
        &self.root
    }

    /// Decides whether an entry survives. First matching rule wins; the
    /// order is load-bearing because rules can conflict (a whitelisted
    /// pattern inside an excluded directory, for instance).
    pub fn includes(&self, entry: &Entry) -> bool {
        // The output artifact never documents itself.
        if entry.path == self.output_path {
            return false;
        }
        // Secrets are dropped before any whitelist can resurrect them.
        if entry.kind == EntryKind::File && looks_like_env_file(&entry.name) {
            return false;
        }
        if entry.kind == EntryKind::Directory && ARTIFACT_DIRS.contains(&entry.name.as_str()) {
            return false;
        }
        if entry.name.starts_with('.') && entry.path != self.root {
            return false;
        }
        if entry.kind == EntryKind::Directory && self.exclude_dirs.contains(&entry.name) {
            return false;
        }
        if let Some(include_dir) = &self.include_dir {
            // Ancestors pass so the walk can still descend into the subtree.
            if !entry.path.starts_with(include_dir) && !include_dir.starts_with(&entry.path) {
                return false;
            }
        }
        if entry.kind == EntryKind::File {
            if let Some(patterns) = &self.include_patterns {
                if !patterns.is_match(&entry.name) {
                    return false;
                }
            }
            if self.exclude_files.contains(&entry.name) {
                return false;
            }
            if let Some(ext) = &entry.extension {
                if self.exclude_types.contains(ext) {
                    return false;
                }
                if self.ignore_settings && self.settings_types.contains(ext) {
                    return false;
                }
            }
        }
        true
    }
}

/// Environment/secrets files are excluded unconditionally, whatever the
/// other settings say.
fn looks_like_env_file(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.starts_with(".env") || lower == "environment"
}

fn name_set(names: &[String]) -> HashSet<String> {
    if is_sentinel_none(names) {
        return HashSet::new();
    }
    names.iter().cloned().collect()
}

/// Extensions compare case-insensitively and always carry a leading dot.
fn extension_set(extensions: &[String]) -> HashSet<String> {
    if is_sentinel_none(extensions) {
        return HashSet::new();
    }
    extensions
        .iter()
        .map(|ext| {
            let lower = ext.to_ascii_lowercase();
            if lower.starts_with('.') {
                lower
            } else {
                format!(".{lower}")
            }
        })
        .collect()
}

fn is_sentinel_none(values: &[String]) -> bool {
    values.len() == 1 && values[0] == SENTINEL_NONE
}

fn absolute(path: &Path) -> Result<PathBuf, RepodocError> {
    std::path::absolute(path).map_err(|e| RepodocError::io(path, e))
}
