//! Command-line interface for repodoc.
//!
//! Validates the configuration, builds the option set from flags plus the
//! extension profile, and runs the documentation pass.

use clap::Parser;
use repodoc::{RepodocBuilder, RepodocOptions, TypeProfile, repodoc};
use std::path::PathBuf;
use std::process::exit;

/// repodoc — snapshot a repository into a single reviewable document
#[derive(Parser)]
#[command(
    name = "repodoc",
    version,
    about,
    long_about = None,
    after_help = "To disable the default type exclusions: --ignore-types none. \
                  To include only Python sources: --include-files '*.py'"
)]
struct Cli {
    /// Repository root to document
    #[arg(short = 'r', long, default_value = ".")]
    repo_path: PathBuf,

    /// Output artifact path; a .json extension selects the structured
    /// document format (defaults to the profile's output file name)
    #[arg(short = 'o', long)]
    output_file: Option<PathBuf>,

    /// File names to exclude ("none" clears the set)
    #[arg(long, num_args = 0..)]
    ignore_files: Vec<String>,

    /// Extensions to exclude; defaults to the profile's media/binary lists
    /// ("none" clears the set)
    #[arg(long, num_args = 0..)]
    ignore_types: Option<Vec<String>>,

    /// Directory names to exclude ("none" clears the set)
    #[arg(long, num_args = 0..)]
    exclude_dir: Vec<String>,

    /// Also exclude settings/metadata extensions (.json, .yaml, ...)
    #[arg(long)]
    ignore_settings: bool,

    /// Restrict the walk to one subtree of the repository
    #[arg(long)]
    include_dir: Option<PathBuf>,

    /// File-name glob whitelist; files matching no pattern are excluded
    #[arg(long, num_args = 0..)]
    include_files: Option<Vec<String>>,

    /// Emit the tree only, skipping the file content section
    #[arg(long)]
    skip_contents: bool,

    /// Extension profile file overriding the built-in lists
    #[arg(long)]
    config: Option<PathBuf>,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_options(self, profile: TypeProfile, output_file: PathBuf) -> RepodocOptions {
        let mut builder = RepodocBuilder::new(self.repo_path)
            .output_path(output_file)
            .exclude_files(self.ignore_files)
            .exclude_types(
                self.ignore_types
                    .unwrap_or_else(|| profile.ignore_types()),
            )
            .exclude_dirs(self.exclude_dir)
            .settings_types(profile.settings_extensions)
            .ignore_settings(self.ignore_settings)
            .skip_contents(self.skip_contents);

        if let Some(dir) = self.include_dir {
            builder = builder.include_dir(dir);
        }
        if let Some(patterns) = self.include_files {
            builder = builder.include_patterns(patterns);
        }

        builder.build()
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "repodoc=debug"
    } else {
        "repodoc=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let profile = match &cli.config {
        Some(path) => TypeProfile::load(path),
        None => TypeProfile::default(),
    };
    let output_file = cli
        .output_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&profile.default_output_file));

    // Configuration errors are fatal before any traversal begins.
    let processing_root = cli.include_dir.as_ref().unwrap_or(&cli.repo_path);
    if !processing_root.is_dir() {
        eprintln!(
            "Error: {} is not a valid directory.",
            processing_root.display()
        );
        exit(1);
    }
    if let Some(parent) = output_file.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            eprintln!(
                "Error: output directory {} does not exist.",
                parent.display()
            );
            exit(1);
        }
    }

    let options = cli.into_options(profile, output_file);
    match repodoc(options) {
        Ok(report) => {
            tracing::info!(
                "wrote {} tree entries and {} file bodies",
                report.tree_entries,
                report.files_rendered
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit(1);
        }
    }
}
