//! The content pass: every surviving file's body between begin/end markers,
//! in the same depth-first order as the tree pass.

use crate::engine::{MAX_DEPTH, list_dir};
use crate::error::RepodocError;
use crate::filter::Filter;
use crate::sink::Sink;
use std::fs;
use std::path::Path;

/// Renders the contents of every surviving file under `root`, returning the
/// number of files whose bodies were read and decoded successfully.
///
/// Files that cannot be read or decode as text are not skipped: a one-line
/// message takes the body's place between the same markers, and the file is
/// left out of the returned count.
pub fn render_contents(
    root: &Path,
    sink: &mut dyn Sink,
    filter: &Filter,
) -> Result<usize, RepodocError> {
    content_level(root, root, sink, filter, 0)
}

fn content_level(
    dir: &Path,
    root: &Path,
    sink: &mut dyn Sink,
    filter: &Filter,
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
    let mut rendered = 0;
    for entry in entries.iter().filter(|e| filter.includes(e)) {
        if entry.is_dir() {
            rendered += content_level(&entry.path, root, sink, filter, depth + 1)?;
            continue;
        }
        let relative = entry.path.strip_prefix(root).unwrap_or(&entry.path);
        let indent = "  ".repeat(depth);
        sink.write_line(&format!("{indent}[File Begins] {}", relative.display()))?;
        let (body, ok) = read_body(&entry.path);
        for line in body.lines() {
            sink.write_line(&format!("{indent}{line}"))?;
        }
        sink.write_line(&format!("{indent}[File Ends] {}", relative.display()))?;
        sink.write_line("")?;
        if ok {
            rendered += 1;
        } else {
            tracing::debug!("body not rendered for {}", entry.path.display());
        }
    }
    Ok(rendered)
}

/// Reads a file body in best-effort mode.
///
/// Returns the text to print and whether it is the file's actual content.
/// Read failures and binary files produce a placeholder instead; invalid
/// UTF-8 sequences in otherwise-text files are replaced, not fatal.
fn read_body(path: &Path) -> (String, bool) {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => return (format!("Error reading file: {e}"), false),
    };
    if content_inspector::inspect(&bytes).is_binary() {
        return ("[Binary file, content omitted]".to_string(), false);
    }
    (String::from_utf8_lossy(&bytes).into_owned(), true)
}
