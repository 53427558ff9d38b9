//! Compiled-in tables of version-bearing files and their match templates.
//!
//! Each template contains the `$$VERSION$$` placeholder exactly once.
//! Instantiating a template with a version value yields the literal text
//! that is searched for and replaced. All paths are relative to the root
//! of the repository, and table order is the order files are processed
//! and diffed in.

/// Placeholder token substituted with a version value during both
/// matching and replacing.
pub const VERSION_PLACEHOLDER: &str = "$$VERSION$$";

/// An ordered mapping from file path to that file's match templates.
pub type MatcherTable = &'static [(&'static str, &'static [&'static str])];

/// Targets for a full release bump.
///
/// `VERSION` is the one-line state record holding the current version; it
/// is read at startup and, being listed here, rewritten along with the
/// other targets on a successful run.
pub const RELEASE_MATCHERS: MatcherTable = &[
    ("VERSION", &["$$VERSION$$"]),
    ("Cargo.toml", &["version = \"$$VERSION$$\""]),
    (
        "README.md",
        &[
            "cargo install verbump --version $$VERSION$$",
            "verbump-$$VERSION$$-x86_64-unknown-linux-gnu.tar.gz",
        ],
    ),
];

/// Documentation-only targets, synced by `verbump-docs`.
pub const DOC_MATCHERS: MatcherTable = &[(
    "README.md",
    &[
        "cargo install verbump --version $$VERSION$$",
        "verbump-$$VERSION$$-x86_64-unknown-linux-gnu.tar.gz",
    ],
)];
