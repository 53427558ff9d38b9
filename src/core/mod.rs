// Public modules
pub mod diff;
pub mod error;
pub mod matchers;
pub mod rewrite;
pub mod version;

// Re-export common types for convenience
pub use diff::DiffOptions;
pub use error::{Error, ErrorCode, Result};
pub use matchers::{MatcherTable, DOC_MATCHERS, RELEASE_MATCHERS, VERSION_PLACEHOLDER};
pub use rewrite::{FileChange, FileChangeInfo, RewriteSummary, RunOptions};
