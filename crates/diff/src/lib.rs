// Line diff library for DiffBoard
// This crate computes line-level diffs, their statistics and unified patches

mod config;
mod diff_result;
mod diff_run;
mod lines;
mod patch;
mod stats;
mod text_diff;

pub use config::{Context, DiffConfig, DEFAULT_NEW_LABEL, DEFAULT_OLD_LABEL};
pub use diff_result::DiffResult;
pub use diff_run::{DiffRun, DiffRunKind, LineRange};
pub use lines::{split_lines, LineEndingMode};
pub use patch::{patch_hunks, render_unified_patch, PatchHunk, PatchLine};
pub use stats::DiffStats;
pub use text_diff::TextDiff;

/// Compute the line-level diff of two texts with the default configuration
pub fn diff_lines(old_text: &str, new_text: &str) -> DiffResult {
    TextDiff::diff(old_text, new_text)
}

/// Count added, removed and modified lines of a diff
pub fn compute_stats(result: &DiffResult) -> DiffStats {
    DiffStats::from_result(result)
}
