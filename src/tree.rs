//! The visual tree pass: an indented listing of every surviving entry.

use crate::engine::{MAX_DEPTH, list_dir};
use crate::error::RepodocError;
use crate::filter::Filter;
use crate::sink::Sink;
use std::path::Path;

/// Renders the tree of surviving entries under `root`, returning the number
/// of lines written including the root line.
///
/// Unreadable directories are skipped with a warning and contribute no
/// entries; only sink failures abort the pass.
pub fn render_tree(
    root: &Path,
    sink: &mut dyn Sink,
    filter: &Filter,
) -> Result<usize, RepodocError> {
    sink.write_line(&format!("{}/", display_name(root)))?;
    Ok(1 + tree_level(root, sink, filter, "", 0)?)
}

fn tree_level(
    dir: &Path,
    sink: &mut dyn Sink,
    filter: &Filter,
    prefix: &str,
    depth: usize,
) -> Result<usize, RepodocError> {
    if depth >= MAX_DEPTH {
        tracing::warn!("not descending into {}: depth limit reached", dir.display());
        return Ok(0);
    }
    let entries = match list_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("skipping unreadable directory {}: {}", dir.display(), e);
            return Ok(0);
        }
    };
    let survivors: Vec<_> = entries.into_iter().filter(|e| filter.includes(e)).collect();
    let mut written = 0;
    for (idx, entry) in survivors.iter().enumerate() {
        let is_last = idx + 1 == survivors.len();
        let glyph = if is_last { "└── " } else { "├── " };
        sink.write_line(&format!("{prefix}{glyph}{}", entry.name))?;
        written += 1;
        if entry.is_dir() {
            let child_prefix = if is_last {
                format!("{prefix}    ")
            } else {
                format!("{prefix}│   ")
            };
            written += tree_level(&entry.path, sink, filter, &child_prefix, depth + 1)?;
        }
    }
    Ok(written)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
