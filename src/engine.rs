use crate::content::render_contents;
use crate::error::RepodocError;
use crate::filter::Filter;
use crate::options::{OutputFormat, RepodocOptions};
#[cfg(feature = "document")]
use crate::sink::DocumentSink;
use crate::sink::{Sink, TextSink};
use crate::tree::render_tree;
use crate::types::{Entry, EntryKind, RunReport, extension_of};
use std::fs;
use std::io;
use std::path::Path;

/// Hard bound on traversal recursion depth. Deeper trees stop descending
/// with a warning instead of risking stack exhaustion.
pub(crate) const MAX_DEPTH: usize = 128;

/// Lists a directory's entries in lexicographic name order.
///
/// Both render passes list through this one function, so the order the two
/// passes see is identical for the same directory.
pub(crate) fn list_dir(dir: &Path) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for item in fs::read_dir(dir)? {
        let item = item?;
        let file_type = item.file_type()?;
        let path = item.path();
        let kind = if file_type.is_dir() || (file_type.is_symlink() && path.is_dir()) {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        let name = item.file_name().to_string_lossy().into_owned();
        let extension = match kind {
            EntryKind::File => extension_of(&name),
            EntryKind::Directory => None,
        };
        entries.push(Entry {
            path,
            name,
            kind,
            extension,
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Runs a full documentation pass: tree section, then content section
/// (unless suppressed), through the sink the configured format selects.
///
/// Fails before any output exists when the configuration is unusable (an
/// unreadable root, a bad glob pattern, a format this build cannot emit).
/// Unreadable directories and undecodable files below the root are absorbed
/// by the renderers and never fail the run.
pub fn repodoc(options: RepodocOptions) -> Result<RunReport, RepodocError> {
    let filter = Filter::new(&options)?;
    let root = filter.processing_root().to_path_buf();
    tracing::debug!("documenting {}", root.display());
    // Probe the root before the sink exists so configuration errors leave
    // no partial artifact behind.
    let _ = fs::read_dir(&root).map_err(|e| RepodocError::InvalidRoot {
        path: root.clone(),
        source: e,
    })?;
    let mut sink = make_sink(&options)?;
    let report = render_sections(&root, sink.as_mut(), &filter, options.skip_contents)?;
    sink.finalize()?;
    tracing::debug!(
        "wrote {} tree entries, {} file bodies",
        report.tree_entries,
        report.files_rendered
    );
    Ok(report)
}

fn make_sink(options: &RepodocOptions) -> Result<Box<dyn Sink>, RepodocError> {
    match options.format {
        OutputFormat::Text => Ok(Box::new(TextSink::create(&options.output_path)?)),
        #[cfg(feature = "document")]
        OutputFormat::Document => Ok(Box::new(DocumentSink::new(&options.output_path))),
        #[cfg(not(feature = "document"))]
        OutputFormat::Document => Err(RepodocError::DocumentSupport),
    }
}

fn render_sections(
    root: &Path,
    sink: &mut dyn Sink,
    filter: &Filter,
    skip_contents: bool,
) -> Result<RunReport, RepodocError> {
    sink.write_heading(1, "Repository Documentation")?;
    sink.write_heading(2, "Directory/File Tree Begins -->")?;
    let tree_entries = render_tree(root, sink, filter)?;
    sink.write_line("")?;
    sink.write_heading(2, "<-- Directory/File Tree Ends")?;
    let files_rendered = if skip_contents {
        0
    } else {
        sink.write_heading(2, "File Content Begins -->")?;
        let rendered = render_contents(root, sink, filter)?;
        sink.write_line("")?;
        sink.write_heading(2, "<-- File Content Ends")?;
        rendered
    };
    Ok(RunReport {
        tree_entries,
        files_rendered,
    })
}
