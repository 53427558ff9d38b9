use std::fs;
use std::path::Path;

use tempfile::{tempdir, TempDir};

use verbump::rewrite::{self, RunOptions};
use verbump::version::{discover_doc_version, read_state_version};
use verbump::{DOC_MATCHERS, RELEASE_MATCHERS};

const CURRENT: &str = "1.4.2";

const MANIFEST: &str = r#"[package]
name = "verbump"
version = "1.4.2"
edition = "2021"

[dependencies]
serde = { version = "1.0", features = ["derive"] }
"#;

const README: &str = r#"# verbump

## Install

```sh
cargo install verbump --version 1.4.2
```

Or download verbump-1.4.2-x86_64-unknown-linux-gnu.tar.gz and unpack it.
"#;

fn fixture_repo() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("VERSION"), "1.4.2\n").unwrap();
    fs::write(dir.path().join("Cargo.toml"), MANIFEST).unwrap();
    fs::write(dir.path().join("README.md"), README).unwrap();
    dir
}

fn read(root: &Path, file: &str) -> String {
    fs::read_to_string(root.join(file)).unwrap()
}

fn apply_options() -> RunOptions {
    RunOptions {
        preview: false,
        context_lines: 3,
        color: false,
    }
}

fn preview_options() -> RunOptions {
    RunOptions {
        preview: true,
        context_lines: 3,
        color: false,
    }
}

#[test]
fn full_bump_rewrites_every_release_file() {
    let repo = fixture_repo();
    let root = repo.path();

    let summary = rewrite::run(root, RELEASE_MATCHERS, CURRENT, "1.5.0", apply_options()).unwrap();

    assert_eq!(read(root, "VERSION"), "1.5.0\n");
    assert!(read(root, "Cargo.toml").contains("version = \"1.5.0\""));

    let readme = read(root, "README.md");
    assert!(readme.contains("cargo install verbump --version 1.5.0"));
    assert!(readme.contains("verbump-1.5.0-x86_64-unknown-linux-gnu.tar.gz"));
    assert!(!readme.contains("1.4.2"));

    assert!(!summary.previewed);
    let files: Vec<&str> = summary.files.iter().map(|f| f.file.as_str()).collect();
    assert_eq!(files, vec!["VERSION", "Cargo.toml", "README.md"]);
    assert!(summary.files.iter().all(|f| f.changed));

    // The state record now announces the new version for the next run.
    assert_eq!(read_state_version(root).unwrap(), "1.5.0");
}

#[test]
fn dependency_version_pins_survive_a_bump() {
    let repo = fixture_repo();
    let root = repo.path();

    rewrite::run(root, RELEASE_MATCHERS, CURRENT, "2.0.0", apply_options()).unwrap();

    assert!(read(root, "Cargo.toml").contains("serde = { version = \"1.0\""));
}

#[test]
fn bump_round_trips_to_the_original_contents() {
    let repo = fixture_repo();
    let root = repo.path();

    rewrite::run(root, RELEASE_MATCHERS, CURRENT, "1.5.0", apply_options()).unwrap();
    rewrite::run(root, RELEASE_MATCHERS, "1.5.0", CURRENT, apply_options()).unwrap();

    assert_eq!(read(root, "VERSION"), "1.4.2\n");
    assert_eq!(read(root, "Cargo.toml"), MANIFEST);
    assert_eq!(read(root, "README.md"), README);
}

#[test]
fn missing_match_in_a_later_file_leaves_every_file_untouched() {
    let repo = fixture_repo();
    let root = repo.path();

    // Break the last file in the table. Earlier files still match, but
    // nothing may be written.
    fs::write(root.join("README.md"), "# verbump\n\nNo install line.\n").unwrap();

    let err =
        rewrite::run(root, RELEASE_MATCHERS, CURRENT, "1.5.0", apply_options()).unwrap_err();

    assert_eq!(err.code.as_str(), "rewrite.match_not_found");
    assert!(err.message.contains("README.md"));
    assert!(err
        .message
        .contains("cargo install verbump --version 1.4.2"));

    assert_eq!(read(root, "VERSION"), "1.4.2\n");
    assert_eq!(read(root, "Cargo.toml"), MANIFEST);
}

#[test]
fn preview_never_mutates_the_repository() {
    let repo = fixture_repo();
    let root = repo.path();

    let summary =
        rewrite::run(root, RELEASE_MATCHERS, CURRENT, "1.5.0", preview_options()).unwrap();

    assert!(summary.previewed);
    assert_eq!(read(root, "VERSION"), "1.4.2\n");
    assert_eq!(read(root, "Cargo.toml"), MANIFEST);
    assert_eq!(read(root, "README.md"), README);
}

#[test]
fn docs_sync_touches_only_the_documentation() {
    let repo = fixture_repo();
    let root = repo.path();

    let old = discover_doc_version(root).unwrap();
    assert_eq!(old, CURRENT);

    rewrite::run(root, DOC_MATCHERS, &old, "1.5.0", apply_options()).unwrap();

    assert!(read(root, "README.md").contains("cargo install verbump --version 1.5.0"));
    assert_eq!(read(root, "VERSION"), "1.4.2\n");
    assert_eq!(read(root, "Cargo.toml"), MANIFEST);
}

#[test]
fn docs_sync_discovers_the_version_it_just_wrote() {
    let repo = fixture_repo();
    let root = repo.path();

    rewrite::run(root, DOC_MATCHERS, CURRENT, "3.0.0", apply_options()).unwrap();

    assert_eq!(discover_doc_version(root).unwrap(), "3.0.0");
}

#[test]
fn missing_target_file_aborts_with_io_error() {
    let repo = fixture_repo();
    let root = repo.path();
    fs::remove_file(root.join("Cargo.toml")).unwrap();

    let err =
        rewrite::run(root, RELEASE_MATCHERS, CURRENT, "1.5.0", apply_options()).unwrap_err();

    assert_eq!(err.code.as_str(), "internal.io_error");
    // The file before it in the table must not have been written.
    assert_eq!(read(root, "VERSION"), "1.4.2\n");
}
