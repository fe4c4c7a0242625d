use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::diff_result::DiffResult;

/// Aggregate line counts of a diff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[display(fmt = "+{} -{} ~{}", added, removed, modified)]
pub struct DiffStats {
    /// Lines only in the new text
    pub added: usize,

    /// Lines only in the old text
    pub removed: usize,

    /// `min(added, removed)`.
    ///
    /// This is an estimate of lines changed in place, not an alignment of
    /// removed lines against added ones. Consumers rely on this exact value.
    pub modified: usize,
}

impl DiffStats {
    /// Count the lines of a diff result
    pub fn from_result(result: &DiffResult) -> Self {
        let added = result.added_lines();
        let removed = result.removed_lines();
        Self {
            added,
            removed,
            modified: added.min(removed),
        }
    }

    /// Added plus removed lines
    pub fn total_changes(&self) -> usize {
        self.added + self.removed
    }

    /// Check if there are any changes
    pub fn has_changes(&self) -> bool {
        self.total_changes() > 0
    }
}

impl From<&DiffResult> for DiffStats {
    fn from(result: &DiffResult) -> Self {
        Self::from_result(result)
    }
}
