use std::collections::HashMap;
use std::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use similar::{Algorithm, DiffOp};

use crate::diff_run::{DiffRun, DiffRunKind};

/// The line-level difference between two texts.
///
/// Taking `Kept` and `Removed` runs in order yields the old lines; taking
/// `Kept` and `Added` runs in order yields the new lines. No two adjacent runs
/// share a kind, and inside every change region the `Removed` run comes first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffResult {
    /// The runs, in text order
    runs: Vec<DiffRun>,

    /// The number of lines in the old text
    old_line_count: usize,

    /// The number of lines in the new text
    new_line_count: usize,
}

impl DiffResult {
    /// Diff two already split line sequences
    pub(crate) fn compute(old_lines: &[&str], new_lines: &[&str], deadline: Option<Instant>) -> Self {
        let (old_tokens, new_tokens) = intern(old_lines, new_lines);
        let ops = similar::capture_diff_slices_deadline(
            Algorithm::Myers,
            &old_tokens,
            &new_tokens,
            deadline,
        );
        let matches = earliest_matches(&old_tokens, &new_tokens, &ops);

        let mut builder = RunBuilder::default();
        let mut next = (0, 0);
        for (old_index, new_index) in matches {
            builder.gap(old_lines, new_lines, next, (old_index, new_index));
            builder.keep(&old_lines[old_index..=old_index], old_index, new_index);
            next = (old_index + 1, new_index + 1);
        }
        builder.gap(old_lines, new_lines, next, (old_lines.len(), new_lines.len()));

        let runs = builder.finish();
        log::trace!(
            "diffed {} old lines against {} new lines into {} runs",
            old_lines.len(),
            new_lines.len(),
            runs.len()
        );

        Self {
            runs,
            old_line_count: old_lines.len(),
            new_line_count: new_lines.len(),
        }
    }

    /// Create a new empty diff result
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the runs
    pub fn runs(&self) -> &[DiffRun] {
        &self.runs
    }

    /// Get the number of runs
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Get a run by index
    pub fn run(&self, index: usize) -> Option<&DiffRun> {
        self.runs.get(index)
    }

    /// True when both texts had no lines
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The number of lines in the old text
    pub fn old_line_count(&self) -> usize {
        self.old_line_count
    }

    /// The number of lines in the new text
    pub fn new_line_count(&self) -> usize {
        self.new_line_count
    }

    /// Check if the diff has any changes
    pub fn has_changes(&self) -> bool {
        self.runs.iter().any(|run| run.has_changes())
    }

    /// Get the number of added lines
    pub fn added_lines(&self) -> usize {
        self.count_lines(DiffRunKind::Added)
    }

    /// Get the number of removed lines
    pub fn removed_lines(&self) -> usize {
        self.count_lines(DiffRunKind::Removed)
    }

    /// Get the number of kept lines
    pub fn kept_lines(&self) -> usize {
        self.count_lines(DiffRunKind::Kept)
    }

    fn count_lines(&self, kind: DiffRunKind) -> usize {
        self.runs
            .iter()
            .filter(|run| run.kind == kind)
            .map(DiffRun::len)
            .sum()
    }

    /// Lines of the old text, rebuilt from `Kept` and `Removed` runs
    pub fn old_lines(&self) -> impl Iterator<Item = &str> {
        self.lines_where(DiffRunKind::in_old)
    }

    /// Lines of the new text, rebuilt from `Kept` and `Added` runs
    pub fn new_lines(&self) -> impl Iterator<Item = &str> {
        self.lines_where(DiffRunKind::in_new)
    }

    /// All added lines joined with `\n`
    pub fn added_text(&self) -> String {
        self.join_kind(DiffRunKind::Added)
    }

    /// All removed lines joined with `\n`
    pub fn removed_text(&self) -> String {
        self.join_kind(DiffRunKind::Removed)
    }

    fn lines_where(&self, keep: fn(&DiffRunKind) -> bool) -> impl Iterator<Item = &str> {
        self.runs
            .iter()
            .filter(move |run| keep(&run.kind))
            .flat_map(|run| run.lines.iter().map(String::as_str))
    }

    fn join_kind(&self, kind: DiffRunKind) -> String {
        self.runs
            .iter()
            .filter(|run| run.kind == kind)
            .flat_map(|run| run.lines.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Map every distinct line to a small integer so the differ compares words
/// instead of strings
fn intern<'a>(old_lines: &[&'a str], new_lines: &[&'a str]) -> (Vec<usize>, Vec<usize>) {
    let mut ids: HashMap<&'a str, usize> = HashMap::with_capacity(old_lines.len() + new_lines.len());
    let mut tokens = |lines: &[&'a str]| -> Vec<usize> {
        lines
            .iter()
            .map(|&line| {
                let next = ids.len();
                *ids.entry(line).or_insert(next)
            })
            .collect()
    };
    let old_tokens = tokens(old_lines);
    let new_tokens = tokens(new_lines);
    (old_tokens, new_tokens)
}

/// The matched `(old, new)` line pairs of an edit script.
///
/// Each match is moved back to the first identical line after the previous
/// match on both sides. The number of matches does not change, so the script
/// stays minimal, but a repeated line inside a change region pairs with its
/// earliest copy.
fn earliest_matches(old: &[usize], new: &[usize], ops: &[DiffOp]) -> Vec<(usize, usize)> {
    let mut matches = Vec::new();
    let (mut old_floor, mut new_floor) = (0, 0);

    for op in ops {
        let DiffOp::Equal {
            old_index,
            new_index,
            len,
        } = *op
        else {
            continue;
        };

        for offset in 0..len {
            let (old_index, new_index) = (old_index + offset, new_index + offset);
            let token = old[old_index];
            let old_index = (old_floor..old_index)
                .find(|&i| old[i] == token)
                .unwrap_or(old_index);
            let new_index = (new_floor..new_index)
                .find(|&i| new[i] == token)
                .unwrap_or(new_index);

            matches.push((old_index, new_index));
            old_floor = old_index + 1;
            new_floor = new_index + 1;
        }
    }
    matches
}

/// Folds an edit script into coalesced runs
#[derive(Default)]
struct RunBuilder {
    runs: Vec<DiffRun>,
    removed: Vec<String>,
    added: Vec<String>,
    /// Where the pending change region starts in (old, new)
    region_start: Option<(usize, usize)>,
}

impl RunBuilder {
    fn keep(&mut self, lines: &[&str], old_index: usize, new_index: usize) {
        self.flush();
        match self.runs.last_mut() {
            Some(last) if last.kind == DiffRunKind::Kept => {
                last.lines.extend(owned_lines(lines));
            }
            _ => self.runs.push(DiffRun::new(
                DiffRunKind::Kept,
                owned_lines(lines),
                old_index,
                new_index,
            )),
        }
    }

    fn remove(&mut self, lines: &[&str], old_index: usize, new_index: usize) {
        self.region_start.get_or_insert((old_index, new_index));
        self.removed.extend(owned_lines(lines));
    }

    fn add(&mut self, lines: &[&str], old_index: usize, new_index: usize) {
        // an insert reports the old position after any deletions in the
        // region, so back up to where the region began
        let region_old = old_index - self.removed.len();
        self.region_start.get_or_insert((region_old, new_index));
        self.added.extend(owned_lines(lines));
    }

    /// Record the unmatched lines between two positions as a deletion
    /// followed by an insertion
    fn gap(&mut self, old: &[&str], new: &[&str], from: (usize, usize), to: (usize, usize)) {
        if from.0 < to.0 {
            self.remove(&old[from.0..to.0], from.0, from.1);
        }
        if from.1 < to.1 {
            self.add(&new[from.1..to.1], to.0, from.1);
        }
    }

    /// Emit the pending change region as `Removed` then `Added`
    fn flush(&mut self) {
        let Some((old_start, new_start)) = self.region_start.take() else {
            return;
        };

        let removed_count = self.removed.len();
        if !self.removed.is_empty() {
            let lines = std::mem::take(&mut self.removed);
            self.runs
                .push(DiffRun::new(DiffRunKind::Removed, lines, old_start, new_start));
        }
        if !self.added.is_empty() {
            let lines = std::mem::take(&mut self.added);
            self.runs.push(DiffRun::new(
                DiffRunKind::Added,
                lines,
                old_start + removed_count,
                new_start,
            ));
        }
    }

    fn finish(mut self) -> Vec<DiffRun> {
        self.flush();
        self.runs
    }
}

fn owned_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}
