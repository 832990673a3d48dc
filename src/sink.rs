//! Output destinations for the renderers.
//!
//! Both renderers are written against the [`Sink`] trait only, never a
//! concrete sink type; that is what lets one traversal serve both the flat
//! text stream and the structured block document.

use crate::error::RepodocError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
#[cfg(feature = "document")]
use std::path::PathBuf;

/// Destination for rendered output.
///
/// Heading levels follow document convention: 1 for the artifact title,
/// 2 for section markers.
pub trait Sink {
    /// Appends one line of body text.
    fn write_line(&mut self, line: &str) -> Result<(), RepodocError>;
    /// Appends a heading at the given level.
    fn write_heading(&mut self, level: u8, text: &str) -> Result<(), RepodocError>;
    /// Flushes or saves the accumulated output. Called exactly once, after
    /// both render passes, even when the content pass was suppressed.
    fn finalize(&mut self) -> Result<(), RepodocError>;
}

/// Flat-text sink: lines go straight to the underlying writer.
pub struct TextSink<W: Write> {
    writer: W,
}

impl TextSink<BufWriter<File>> {
    /// Opens (or truncates) the artifact file for incremental writing.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, RepodocError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| RepodocError::io(path, e))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for TextSink<W> {
    fn write_line(&mut self, line: &str) -> Result<(), RepodocError> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    fn write_heading(&mut self, _level: u8, text: &str) -> Result<(), RepodocError> {
        // A heading in flat text is the text followed by a blank line.
        writeln!(self.writer, "{text}\n")?;
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), RepodocError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// One block of the structured document.
#[cfg(feature = "document")]
#[derive(Debug, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Block {
    Heading { level: u8, text: String },
    Paragraph { text: String },
}

/// Structured-document sink: blocks accumulate in memory and are saved as
/// a JSON document in one piece by [`Sink::finalize`].
#[cfg(feature = "document")]
pub struct DocumentSink {
    path: PathBuf,
    blocks: Vec<Block>,
}

#[cfg(feature = "document")]
impl DocumentSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            blocks: Vec::new(),
        }
    }
}

#[cfg(feature = "document")]
impl Sink for DocumentSink {
    fn write_line(&mut self, line: &str) -> Result<(), RepodocError> {
        self.blocks.push(Block::Paragraph {
            text: line.to_string(),
        });
        Ok(())
    }

    fn write_heading(&mut self, level: u8, text: &str) -> Result<(), RepodocError> {
        self.blocks.push(Block::Heading {
            level,
            text: text.to_string(),
        });
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), RepodocError> {
        #[derive(serde::Serialize)]
        struct Document<'a> {
            blocks: &'a [Block],
        }
        let json = serde_json::to_string_pretty(&Document {
            blocks: &self.blocks,
        })?;
        std::fs::write(&self.path, json).map_err(|e| RepodocError::io(&self.path, e))?;
        Ok(())
    }
}
