//! Current-version resolution for the two tools.
//!
//! The full bump tool reads the one-line `VERSION` state record; the
//! docs-sync tool derives the version by scanning the README for its
//! install line. Both fail hard when no version can be resolved — the
//! tools never guess.

use std::path::Path;

use crate::core::error::{Error, Result};
use crate::utils::{io, parser};

/// One-line state record holding the current version.
/// It is also a rewrite target, so a successful bump updates it in place.
pub const STATE_FILE: &str = "VERSION";

/// Document scanned for the current version by the docs-sync tool.
pub const DOC_SOURCE_FILE: &str = "README.md";

/// Extraction pattern matched against the README install line.
/// The single capture group is the version.
pub const DOC_VERSION_PATTERN: &str = r"cargo install verbump --version (\S+)";

/// Read the current version from the state record, trimmed.
pub fn read_state_version(root: &Path) -> Result<String> {
    let path = root.join(STATE_FILE);
    let content = io::read_file(&path, "read version state")?;

    let version = content.trim();
    if version.is_empty() {
        return Err(Error::version_not_found(STATE_FILE, None)
            .with_hint("Write the current version as a single line in VERSION"));
    }

    Ok(version.to_string())
}

/// Derive the current version from the README's install line.
pub fn discover_doc_version(root: &Path) -> Result<String> {
    let path = root.join(DOC_SOURCE_FILE);
    let content = io::read_file(&path, "read documentation")?;

    parser::extract_first(&content, DOC_VERSION_PATTERN).ok_or_else(|| {
        Error::version_not_found(DOC_SOURCE_FILE, Some(DOC_VERSION_PATTERN.to_string())).with_hint(
            "The install section must contain 'cargo install verbump --version <version>'",
        )
    })
}
