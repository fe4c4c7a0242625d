//! Unified patch rendering.
//!
//! A hunk is a maximal group of changed runs padded with unchanged context
//! lines. Groups whose context would overlap or touch are merged into one
//! hunk; with [`Context::Full`] the whole file becomes a single hunk.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::Context;
use crate::diff_result::DiffResult;
use crate::diff_run::{DiffRun, DiffRunKind, LineRange};

/// One line of a hunk
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PatchLine {
    /// `Kept` marks a context line
    pub kind: DiffRunKind,

    /// The line content, without terminator
    pub content: String,
}

impl fmt::Display for PatchLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.patch_prefix(), self.content)
    }
}

/// A block of a unified patch
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PatchHunk {
    /// Old lines covered by the hunk, context plus removed
    pub old: LineRange,

    /// New lines covered by the hunk, context plus added
    pub new: LineRange,

    /// The hunk body
    pub lines: Vec<PatchLine>,
}

impl PatchHunk {
    fn starting_at(old_start: usize, new_start: usize) -> Self {
        Self {
            old: LineRange::new(old_start, 0),
            new: LineRange::new(new_start, 0),
            lines: Vec::new(),
        }
    }

    fn push(&mut self, kind: DiffRunKind, lines: &[String]) {
        if kind.in_old() {
            self.old.count += lines.len();
        }
        if kind.in_new() {
            self.new.count += lines.len();
        }
        self.lines.extend(lines.iter().map(|content| PatchLine {
            kind,
            content: content.clone(),
        }));
    }

    /// The `@@ -a,b +c,d @@` marker.
    ///
    /// Starts are 1-based; a side without lines names the line before the
    /// hunk instead, so an insertion at the top of a file reads `-0,0`.
    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            header_start(self.old),
            self.old.count,
            header_start(self.new),
            self.new.count
        )
    }
}

fn header_start(range: LineRange) -> usize {
    if range.is_empty() {
        range.start
    } else {
        range.start + 1
    }
}

/// Group a diff result into patch hunks
pub fn patch_hunks(result: &DiffResult, context: Context) -> Vec<PatchHunk> {
    let radius = match context {
        Context::Full => usize::MAX,
        Context::Lines(lines) => lines,
    };

    let runs = result.runs();
    let mut hunks = Vec::new();
    let mut current: Option<PatchHunk> = None;

    for (index, run) in runs.iter().enumerate() {
        if run.has_changes() {
            let previous = index.checked_sub(1).map(|i| &runs[i]);
            let hunk = current.get_or_insert_with(|| open_hunk(previous, run, radius));
            hunk.push(run.kind, &run.lines);
            continue;
        }

        let Some(hunk) = current.as_mut() else {
            continue;
        };

        let is_last = index + 1 == runs.len();
        if !is_last && run.len() <= radius.saturating_mul(2) {
            // the context of the next change group reaches this one
            hunk.push(DiffRunKind::Kept, &run.lines);
        } else {
            let trailing = run.len().min(radius);
            hunk.push(DiffRunKind::Kept, &run.lines[..trailing]);
            hunks.extend(current.take());
        }
    }

    hunks.extend(current);
    hunks
}

/// Start a hunk at `run`, with leading context taken from the tail of the
/// unchanged run before it
fn open_hunk(previous: Option<&DiffRun>, run: &DiffRun, radius: usize) -> PatchHunk {
    let leading: &[String] = match previous {
        Some(previous) if previous.kind == DiffRunKind::Kept => {
            let take = previous.len().min(radius);
            &previous.lines[previous.len() - take..]
        }
        _ => &[],
    };

    let mut hunk = PatchHunk::starting_at(
        run.old_range().start - leading.len(),
        run.new_range().start - leading.len(),
    );
    hunk.push(DiffRunKind::Kept, leading);
    hunk
}

/// Render a diff result as a unified patch.
///
/// The text starts with `--- {old_label}` and `+++ {new_label}` header lines,
/// followed by every hunk. A result without changes renders the header only.
/// Every line, including the last, ends with `\n`.
pub fn render_unified_patch(
    result: &DiffResult,
    old_label: &str,
    new_label: &str,
    context: Context,
) -> String {
    let mut out = format!("--- {old_label}\n+++ {new_label}\n");
    for hunk in patch_hunks(result, context) {
        out.push_str(&hunk.header());
        out.push('\n');
        for line in &hunk.lines {
            out.push_str(&line.to_string());
            out.push('\n');
        }
    }
    out
}
