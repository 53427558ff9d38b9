//! Unified diff rendering for preview mode.

use similar::{ChangeTag, TextDiff};

/// Green highlight for addition lines (256-color, black on green).
pub const GREEN: &str = "\x1b[38;5;16;48;5;2m";
/// Red highlight for removal lines (256-color, black on red).
pub const RED: &str = "\x1b[38;5;16;48;5;1m";
/// Reset escape terminating a highlighted line.
pub const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy)]
pub struct DiffOptions {
    /// Context lines shown around each change.
    pub context_lines: usize,
    /// Wrap addition/removal lines in terminal escapes.
    pub color: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            context_lines: 3,
            color: true,
        }
    }
}

/// Render a unified diff between two versions of a file as output lines.
///
/// The `---`/`+++` file header and `@@` hunk headers are never colored;
/// with color enabled, addition and removal lines are wrapped in the
/// green and red escapes. Identical contents render to nothing.
pub fn unified(file: &str, old: &str, new: &str, options: DiffOptions) -> Vec<String> {
    if old == new {
        return Vec::new();
    }

    let diff = TextDiff::from_lines(old, new);
    let mut unified_diff = diff.unified_diff();
    unified_diff.context_radius(options.context_lines);

    let mut lines = Vec::new();
    lines.push(format!("--- {}", file));
    lines.push(format!("+++ {}", file));

    for hunk in unified_diff.iter_hunks() {
        lines.push(hunk.header().to_string());
        for change in hunk.iter_changes() {
            let value = change.value();
            let value = value.strip_suffix('\n').unwrap_or(value);
            lines.push(match change.tag() {
                ChangeTag::Delete => paint(format!("-{}", value), RED, options.color),
                ChangeTag::Insert => paint(format!("+{}", value), GREEN, options.color),
                ChangeTag::Equal => format!(" {}", value),
            });
        }
    }

    lines
}

fn paint(line: String, escape: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", escape, line, RESET)
    } else {
        line
    }
}
