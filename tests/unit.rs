use repodoc::{Entry, EntryKind, Filter, RepodocBuilder, TypeProfile, repodoc};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn file(path: &str) -> Entry {
    let path = PathBuf::from(path);
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()));
    Entry {
        path,
        name,
        kind: EntryKind::File,
        extension,
    }
}

fn dir(path: &str) -> Entry {
    let path = PathBuf::from(path);
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    Entry {
        path,
        name,
        kind: EntryKind::Directory,
        extension: None,
    }
}

#[test]
fn output_artifact_always_excluded() {
    let options = RepodocBuilder::new("/repo")
        .output_path("/repo/output.txt")
        .include_patterns(vec!["*".into()])
        .build();
    let filter = Filter::new(&options).unwrap();
    assert!(!filter.includes(&file("/repo/output.txt")));
    assert!(filter.includes(&file("/repo/other.txt")));
}

#[test]
fn env_files_excluded_even_when_whitelisted() {
    let options = RepodocBuilder::new("/repo")
        .output_path("/out/output.txt")
        .include_patterns(vec!["*".into()])
        .build();
    let filter = Filter::new(&options).unwrap();
    assert!(!filter.includes(&file("/repo/.env")));
    assert!(!filter.includes(&file("/repo/.env.production")));
    assert!(!filter.includes(&file("/repo/.ENV")));
    assert!(!filter.includes(&file("/repo/environment")));
    assert!(!filter.includes(&file("/repo/ENVIRONMENT")));
    // A directory named environment is not a secrets file.
    assert!(filter.includes(&dir("/repo/environment")));
}

#[test]
fn artifact_directories_excluded() {
    let options = RepodocBuilder::new("/repo")
        .output_path("/out/output.txt")
        .build();
    let filter = Filter::new(&options).unwrap();
    for name in ["node_modules", "__pycache__", "target"] {
        assert!(!filter.includes(&dir(&format!("/repo/{name}"))), "{name}");
    }
    // The rule applies to directories only.
    assert!(filter.includes(&file("/repo/node_modules")));
}

#[test]
fn dotfiles_hidden_except_processing_root() {
    let options = RepodocBuilder::new("/repo/.hidden")
        .output_path("/out/output.txt")
        .build();
    let filter = Filter::new(&options).unwrap();
    assert!(filter.includes(&dir("/repo/.hidden")));
    assert!(!filter.includes(&file("/repo/.hidden/.gitignore")));
    assert!(!filter.includes(&dir("/repo/.hidden/.github")));
}

#[test]
fn excluded_directory_names() {
    let options = RepodocBuilder::new("/repo")
        .output_path("/out/output.txt")
        .exclude_dirs(vec!["ios".into()])
        .build();
    let filter = Filter::new(&options).unwrap();
    assert!(!filter.includes(&dir("/repo/ios")));
    // Name match applies to directories, not files.
    assert!(filter.includes(&file("/repo/ios")));
}

#[test]
fn sentinel_none_clears_a_dimension() {
    let options = RepodocBuilder::new("/repo")
        .output_path("/out/output.txt")
        .build();
    let filter = Filter::new(&options).unwrap();
    // Default profile hides media extensions.
    assert!(!filter.includes(&file("/repo/logo.png")));

    let options = RepodocBuilder::new("/repo")
        .output_path("/out/output.txt")
        .exclude_types(vec!["none".into()])
        .build();
    let filter = Filter::new(&options).unwrap();
    assert!(filter.includes(&file("/repo/logo.png")));

    let options = RepodocBuilder::new("/repo")
        .output_path("/out/output.txt")
        .exclude_dirs(vec!["none".into()])
        .build();
    let filter = Filter::new(&options).unwrap();
    assert!(filter.includes(&dir("/repo/none")));
}

#[test]
fn extension_matching_is_case_insensitive() {
    let options = RepodocBuilder::new("/repo")
        .output_path("/out/output.txt")
        .exclude_types(vec![".PY".into()])
        .build();
    let filter = Filter::new(&options).unwrap();
    assert!(!filter.includes(&file("/repo/utils.py")));
    assert!(!filter.includes(&file("/repo/UTILS.PY")));
    // File names, by contrast, match case-sensitively.
    let options = RepodocBuilder::new("/repo")
        .output_path("/out/output.txt")
        .exclude_files(vec!["Makefile".into()])
        .build();
    let filter = Filter::new(&options).unwrap();
    assert!(!filter.includes(&file("/repo/Makefile")));
    assert!(filter.includes(&file("/repo/makefile")));
}

#[test]
fn include_subtree_passes_ancestors_and_descendants() {
    let options = RepodocBuilder::new("/repo")
        .output_path("/out/output.txt")
        .include_dir("/repo/ios")
        .build();
    let filter = Filter::new(&options).unwrap();
    assert!(filter.includes(&dir("/repo")));
    assert!(filter.includes(&dir("/repo/ios")));
    assert!(filter.includes(&file("/repo/ios/AppDelegate.swift")));
    assert!(!filter.includes(&file("/repo/README.md")));
    assert!(!filter.includes(&dir("/repo/android")));
}

#[test]
fn whitelist_gates_files_not_directories() {
    let options = RepodocBuilder::new("/repo")
        .output_path("/out/output.txt")
        .include_patterns(vec!["*.py".into()])
        .build();
    let filter = Filter::new(&options).unwrap();
    assert!(filter.includes(&file("/repo/utils.py")));
    assert!(!filter.includes(&file("/repo/README.md")));
    assert!(filter.includes(&dir("/repo/android")));
}

#[test]
fn whitelist_match_does_not_override_later_rules() {
    let options = RepodocBuilder::new("/repo")
        .output_path("/out/output.txt")
        .include_patterns(vec!["*.py".into()])
        .exclude_types(vec![".py".into()])
        .build();
    let filter = Filter::new(&options).unwrap();
    assert!(!filter.includes(&file("/repo/utils.py")));
}

#[test]
fn settings_extensions_filtered_as_a_group() {
    let options = RepodocBuilder::new("/repo")
        .output_path("/out/output.txt")
        .build();
    let filter = Filter::new(&options).unwrap();
    assert!(filter.includes(&file("/repo/package.json")));

    let options = RepodocBuilder::new("/repo")
        .output_path("/out/output.txt")
        .ignore_settings(true)
        .build();
    let filter = Filter::new(&options).unwrap();
    assert!(!filter.includes(&file("/repo/package.json")));
    assert!(!filter.includes(&file("/repo/setup.cfg")));
    assert!(filter.includes(&file("/repo/main.py")));
}

#[test]
fn profile_defaults_and_fallback() {
    let profile = TypeProfile::load("/nonexistent/profile.json");
    let ignored = profile.ignore_types();
    assert!(ignored.contains(&".png".to_string()));
    assert!(ignored.contains(&".zip".to_string()));
    // Settings extensions are a separate dimension, not ignored by default.
    assert!(!ignored.contains(&".json".to_string()));
    assert_eq!(profile.default_output_file, "output.txt");
}

#[test]
fn profile_file_overrides_builtin_lists() {
    let base = tempdir().unwrap();
    let path = base.path().join("profile.json");
    fs::write(
        &path,
        r#"{ "image_extensions": [".xpm"], "default_output_file": "snapshot.txt" }"#,
    )
    .unwrap();
    let profile = TypeProfile::load(&path);
    assert!(profile.ignore_types().contains(&".xpm".to_string()));
    assert!(!profile.ignore_types().contains(&".png".to_string()));
    assert_eq!(profile.default_output_file, "snapshot.txt");
    // Unspecified categories keep their defaults.
    assert!(profile.settings_extensions.contains(&".json".to_string()));
}

#[test]
fn binary_files_get_placeholder_bodies() {
    let base = tempdir().unwrap();
    let root = base.path().join("repo");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("notes.txt"), "plain text\n").unwrap();
    fs::write(root.join("blob.dat"), [0u8, 159, 146, 150]).unwrap();
    let output = base.path().join("out.txt");
    let options = RepodocBuilder::new(&root)
        .output_path(&output)
        .exclude_types(vec!["none".into()])
        .build();
    let report = repodoc(options).unwrap();
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("[File Begins] blob.dat"));
    assert!(text.contains("[Binary file, content omitted]"));
    assert!(text.contains("[File Ends] blob.dat"));
    assert!(text.contains("plain text"));
    // Only the text file counts as rendered.
    assert_eq!(report.files_rendered, 1);
}
