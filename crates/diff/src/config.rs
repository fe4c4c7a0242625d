use std::time::{Duration, Instant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::diff_result::DiffResult;
use crate::lines::{split_lines, LineEndingMode};
use crate::patch;

/// Label used for the old side of a patch unless configured otherwise
pub const DEFAULT_OLD_LABEL: &str = "Original";

/// Label used for the new side of a patch unless configured otherwise
pub const DEFAULT_NEW_LABEL: &str = "Modified";

/// How many unchanged lines a patch hunk carries around each change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Context {
    /// Every unchanged line; the whole file becomes one hunk
    #[default]
    Full,

    /// Up to this many unchanged lines before and after each change
    Lines(usize),
}

/// Configuration for computing and rendering diffs
#[derive(Debug, Clone)]
pub struct DiffConfig {
    line_ending_mode: LineEndingMode,
    timeout: Option<Duration>,
    context: Context,
    old_label: String,
    new_label: String,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            line_ending_mode: LineEndingMode::default(),
            timeout: None,
            context: Context::default(),
            old_label: DEFAULT_OLD_LABEL.to_string(),
            new_label: DEFAULT_NEW_LABEL.to_string(),
        }
    }
}

impl DiffConfig {
    /// Set how line terminators are treated
    pub fn line_ending_mode(mut self, mode: LineEndingMode) -> Self {
        self.line_ending_mode = mode;
        self
    }

    /// Give up on finding a minimal diff after this long.
    ///
    /// Regions still unresolved when the timeout fires are reported as a
    /// removal followed by an addition, so the result stays complete but may
    /// not be minimal.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the patch context
    pub fn context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Shorthand for `context(Context::Lines(lines))`
    pub fn context_lines(self, lines: usize) -> Self {
        self.context(Context::Lines(lines))
    }

    /// Set the file labels written in the patch header
    pub fn labels(mut self, old_label: impl Into<String>, new_label: impl Into<String>) -> Self {
        self.old_label = old_label.into();
        self.new_label = new_label.into();
        self
    }

    /// The configured line ending mode
    pub fn get_line_ending_mode(&self) -> LineEndingMode {
        self.line_ending_mode
    }

    /// The configured timeout, if any
    pub fn get_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// The configured patch context
    pub fn get_context(&self) -> Context {
        self.context
    }

    /// Compute the line-level diff of two texts
    pub fn diff(&self, old_text: &str, new_text: &str) -> DiffResult {
        let old_text = self.line_ending_mode.normalize(old_text);
        let new_text = self.line_ending_mode.normalize(new_text);
        let old_lines = split_lines(&old_text);
        let new_lines = split_lines(&new_text);

        log::debug!(
            "diffing {} old lines against {} new lines ({} line endings)",
            old_lines.len(),
            new_lines.len(),
            self.line_ending_mode
        );

        let deadline = self.timeout.map(|timeout| Instant::now() + timeout);
        DiffResult::compute(&old_lines, &new_lines, deadline)
    }

    /// Diff two texts and render the result as a unified patch
    pub fn unified_diff(&self, old_text: &str, new_text: &str) -> String {
        let result = self.diff(old_text, new_text);
        self.render(&result)
    }

    /// Render an existing result with this configuration's labels and context
    pub fn render(&self, result: &DiffResult) -> String {
        patch::render_unified_patch(result, &self.old_label, &self.new_label, self.context)
    }
}
