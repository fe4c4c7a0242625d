use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of a run of lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DiffRunKind {
    /// The lines exist unchanged in both versions
    #[display(fmt = "Kept")]
    Kept,

    /// The lines only exist in the new version
    #[display(fmt = "Added")]
    Added,

    /// The lines only exist in the old version
    #[display(fmt = "Removed")]
    Removed,
}

impl DiffRunKind {
    /// The prefix character a unified patch uses for lines of this kind
    pub fn patch_prefix(&self) -> char {
        match self {
            DiffRunKind::Kept => ' ',
            DiffRunKind::Added => '+',
            DiffRunKind::Removed => '-',
        }
    }

    /// Whether lines of this kind belong to the old text
    pub fn in_old(&self) -> bool {
        matches!(self, DiffRunKind::Kept | DiffRunKind::Removed)
    }

    /// Whether lines of this kind belong to the new text
    pub fn in_new(&self) -> bool {
        matches!(self, DiffRunKind::Kept | DiffRunKind::Added)
    }
}

/// Represents a range of lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineRange {
    /// The starting line (0-based)
    pub start: usize,

    /// The number of lines
    pub count: usize,
}

impl LineRange {
    /// Create a new range from start and count
    pub fn new(start: usize, count: usize) -> Self {
        Self { start, count }
    }

    /// Check if this range is empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// A maximal span of lines sharing one classification
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffRun {
    /// What happened to the lines
    pub kind: DiffRunKind,

    /// The lines of the run, without terminators
    pub lines: Vec<String>,

    /// First line of the run in the old text (0-based).
    ///
    /// For an `Added` run this is the old line the insertion happens before.
    pub old_start: usize,

    /// First line of the run in the new text (0-based).
    ///
    /// For a `Removed` run this is the new line the deletion happens before.
    pub new_start: usize,
}

impl DiffRun {
    /// Create a run
    pub fn new(kind: DiffRunKind, lines: Vec<String>, old_start: usize, new_start: usize) -> Self {
        Self {
            kind,
            lines,
            old_start,
            new_start,
        }
    }

    /// Number of lines in the run
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Runs produced by the differ are never empty, but hand-built ones may be
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Check if this run is a change
    pub fn has_changes(&self) -> bool {
        self.kind != DiffRunKind::Kept
    }

    /// Lines of the old text covered by this run (empty for `Added`)
    pub fn old_range(&self) -> LineRange {
        let count = if self.kind.in_old() { self.len() } else { 0 };
        LineRange::new(self.old_start, count)
    }

    /// Lines of the new text covered by this run (empty for `Removed`)
    pub fn new_range(&self) -> LineRange {
        let count = if self.kind.in_new() { self.len() } else { 0 };
        LineRange::new(self.new_start, count)
    }
}
