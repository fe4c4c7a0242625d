use crate::config::{Context, DiffConfig};
use crate::diff_result::DiffResult;
use crate::stats::DiffStats;

/// Wrapper around text diff operations
pub struct TextDiff;

impl TextDiff {
    /// Create a diff between two texts with the default configuration
    pub fn diff(old_text: &str, new_text: &str) -> DiffResult {
        DiffConfig::default().diff(old_text, new_text)
    }

    /// Start a configured diff
    pub fn configure() -> DiffConfig {
        DiffConfig::default()
    }

    /// Generate a unified diff string (like git diff)
    pub fn unified_diff(old_text: &str, new_text: &str, context: Context) -> String {
        DiffConfig::default()
            .context(context)
            .unified_diff(old_text, new_text)
    }

    /// Diff two texts and count the changed lines
    pub fn stats(old_text: &str, new_text: &str) -> DiffStats {
        DiffStats::from_result(&Self::diff(old_text, new_text))
    }
}
