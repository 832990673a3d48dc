use crate::defaults::TypeProfile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output encoding, chosen once before traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Flat text stream written incrementally.
    Text,
    /// Structured block document saved in one piece at the end.
    /// Requires the `document` cargo feature.
    Document,
}

impl OutputFormat {
    /// Infers the format from the output artifact's extension:
    /// `.json` selects the block document, everything else plain text.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some("json") => OutputFormat::Document,
            _ => OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepodocOptions {
    pub root: PathBuf,
    pub output_path: PathBuf,
    pub format: OutputFormat,
    pub exclude_files: Vec<String>,
    pub exclude_types: Vec<String>,
    pub exclude_dirs: Vec<String>,
    pub settings_types: Vec<String>,
    pub ignore_settings: bool,
    pub include_dir: Option<PathBuf>,
    pub include_patterns: Option<Vec<String>>,
    pub skip_contents: bool,
}
impl Default for RepodocOptions {
    fn default() -> Self {
        let profile = TypeProfile::default();
        Self {
            root: PathBuf::from("."),
            output_path: PathBuf::from(&profile.default_output_file),
            format: OutputFormat::Text,
            exclude_files: Vec::new(),
            exclude_types: profile.ignore_types(),
            exclude_dirs: Vec::new(),
            settings_types: profile.settings_extensions,
            ignore_settings: false,
            include_dir: None,
            include_patterns: None,
            skip_contents: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct RepodocBuilder {
    options: RepodocOptions,
}
impl RepodocBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: RepodocOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    /// Sets the artifact path and infers the format from its extension;
    /// call [`RepodocBuilder::format`] afterwards to override.
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.options.format = OutputFormat::from_path(&path);
        self.options.output_path = path;
        self
    }
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.options.format = format;
        self
    }
    pub fn exclude_files(mut self, names: Vec<String>) -> Self {
        self.options.exclude_files = names;
        self
    }
    pub fn exclude_types(mut self, extensions: Vec<String>) -> Self {
        self.options.exclude_types = extensions;
        self
    }
    pub fn exclude_dirs(mut self, names: Vec<String>) -> Self {
        self.options.exclude_dirs = names;
        self
    }
    pub fn settings_types(mut self, extensions: Vec<String>) -> Self {
        self.options.settings_types = extensions;
        self
    }
    pub fn ignore_settings(mut self, yes: bool) -> Self {
        self.options.ignore_settings = yes;
        self
    }
    pub fn include_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.include_dir = Some(dir.into());
        self
    }
    pub fn include_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.include_patterns = Some(patterns);
        self
    }
    pub fn skip_contents(mut self, yes: bool) -> Self {
        self.options.skip_contents = yes;
        self
    }
    pub fn build(self) -> RepodocOptions {
        self.options
    }
}
