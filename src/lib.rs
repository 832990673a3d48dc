//! # Repodoc
//!
//! `repodoc` snapshots a directory tree into a single reviewable document:
//! a visual tree of every surviving file and directory, followed by each
//! surviving file's contents wrapped in begin/end markers.
//!
//! One rule set decides, per filesystem entry, whether it is included; one
//! deterministic depth-first walk feeds both the tree view and the content
//! dump, so the two always correspond index-for-index. Output goes through
//! the [`Sink`] abstraction, either as a flat text stream or, with the
//! `document` feature (on by default), as a structured block document saved
//! as JSON.
//!
//! # Features
//!
//! - `document`: Enables the structured-document output format
//!   ([`DocumentSink`]). Requesting it in a build without the feature is a
//!   configuration error, never a silent downgrade to text.
//!
//! # Example
//!
//! ```no_run
//! use repodoc::{RepodocBuilder, repodoc};
//!
//! let options = RepodocBuilder::new(".")
//!     .output_path("snapshot.txt")
//!     .exclude_dirs(vec!["fixtures".into()])
//!     .include_patterns(vec!["*.rs".into(), "*.toml".into()])
//!     .build();
//!
//! let report = repodoc(options).expect("documentation run failed");
//! println!(
//!     "{} tree entries, {} file bodies",
//!     report.tree_entries, report.files_rendered
//! );
//! ```

mod content;
mod defaults;
mod engine;
mod error;
mod filter;
mod options;
mod sink;
mod tree;
mod types;

pub use content::render_contents;
pub use defaults::TypeProfile;
pub use engine::repodoc;
pub use error::RepodocError;
pub use filter::Filter;
pub use options::{OutputFormat, RepodocBuilder, RepodocOptions};
#[cfg(feature = "document")]
pub use sink::DocumentSink;
pub use sink::{Sink, TextSink};
pub use tree::render_tree;
pub use types::{Entry, EntryKind, RunReport};
