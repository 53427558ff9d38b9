//! The rewrite core: stage every file's substitution in memory, then
//! preview the result as diffs or commit it to disk.
//!
//! Staging everything before the first write means a matching failure in
//! any file aborts the run with nothing modified. Each individual write
//! is atomic (temp file plus rename); cross-file atomicity against a
//! crash mid-apply is out of scope.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::diff::{self, DiffOptions};
use crate::core::error::{Error, Result};
use crate::core::matchers::{MatcherTable, VERSION_PLACEHOLDER};
use crate::utils::{io, parser};

/// One file's staged rewrite: the full before/after content pair plus the
/// number of literal occurrences replaced.
#[derive(Debug, Clone)]
pub struct FileChange {
    /// Repository-relative path as listed in the matcher table.
    pub file: String,
    /// Resolved on-disk path.
    pub path: PathBuf,
    pub old_content: String,
    pub new_content: String,
    pub match_count: usize,
}

impl FileChange {
    pub fn is_changed(&self) -> bool {
        self.old_content != self.new_content
    }
}

/// Per-file entry in a run summary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileChangeInfo {
    pub file: String,
    pub match_count: usize,
    pub changed: bool,
}

/// Result of one rewrite run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteSummary {
    pub old_version: String,
    pub new_version: String,
    pub previewed: bool,
    pub files: Vec<FileChangeInfo>,
}

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Print diffs instead of writing files.
    pub preview: bool,
    /// Diff context line count.
    pub context_lines: usize,
    /// Color diff output.
    pub color: bool,
}

/// Instantiate a template with a version value.
/// Single literal substitution of the placeholder token, no regex.
pub fn instantiate(template: &str, version: &str) -> String {
    template.replacen(VERSION_PLACEHOLDER, version, 1)
}

/// Rewrite one file's content through its templates, in order.
///
/// Each template is matched against the current (possibly already
/// rewritten) content, so template order within a file is significant.
/// Every literal occurrence of the instantiated old text is replaced;
/// the total occurrence count across templates is returned with the
/// final content.
pub fn rewrite_content(
    file: &str,
    content: &str,
    templates: &[&str],
    old_version: &str,
    new_version: &str,
) -> Result<(String, usize)> {
    let mut current = content.to_string();
    let mut match_count = 0;

    for template in templates {
        let old_text = instantiate(template, old_version);
        let new_text = instantiate(template, new_version);

        let occurrences = parser::count_occurrences(&current, &old_text);
        if occurrences == 0 {
            return Err(Error::match_not_found(old_text, file));
        }

        current = current.replace(&old_text, &new_text);
        match_count += occurrences;
    }

    Ok((current, match_count))
}

/// Stage the rewrite for every file in the table, failing fast on the
/// first missing match. No file is touched.
pub fn plan(
    root: &Path,
    table: MatcherTable,
    old_version: &str,
    new_version: &str,
) -> Result<Vec<FileChange>> {
    let mut changes = Vec::new();

    for (file, templates) in table {
        let path = root.join(file);
        let old_content = io::read_file(&path, "read rewrite target")?;
        let (new_content, match_count) =
            rewrite_content(file, &old_content, templates, old_version, new_version)?;

        changes.push(FileChange {
            file: (*file).to_string(),
            path,
            old_content,
            new_content,
            match_count,
        });
    }

    Ok(changes)
}

/// Commit a staged plan to disk, one atomic write per file.
pub fn apply(changes: &[FileChange]) -> Result<()> {
    for change in changes {
        io::write_file_atomic(&change.path, &change.new_content, "write rewrite target")?;
        log_status!(
            "rewrite",
            "Updated {} ({} occurrences)",
            change.file,
            change.match_count
        );
    }

    Ok(())
}

/// Top-level orchestration: stage every file, then either print each
/// file's unified diff to stdout or apply every staged write.
pub fn run(
    root: &Path,
    table: MatcherTable,
    old_version: &str,
    new_version: &str,
    options: RunOptions,
) -> Result<RewriteSummary> {
    let changes = plan(root, table, old_version, new_version)?;

    if options.preview {
        let diff_options = DiffOptions {
            context_lines: options.context_lines,
            color: options.color,
        };
        for change in &changes {
            for line in diff::unified(
                &change.file,
                &change.old_content,
                &change.new_content,
                diff_options,
            ) {
                println!("{}", line);
            }
        }
    } else {
        apply(&changes)?;
        log_status!("rewrite", "Version bumped: {} -> {}", old_version, new_version);
    }

    Ok(RewriteSummary {
        old_version: old_version.to_string(),
        new_version: new_version.to_string(),
        previewed: options.preview,
        files: changes
            .iter()
            .map(|c| FileChangeInfo {
                file: c.file.clone(),
                match_count: c.match_count,
                changed: c.is_changed(),
            })
            .collect(),
    })
}
