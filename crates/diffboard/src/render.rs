//! Text renderings of a comparison for the terminal
//!
//! Every renderer takes an optional [`Theme`]; without one the output is
//! plain text.

use colored::Colorize;
use serde_json::json;

use line_diff::{
    patch_hunks, DiffResult, DiffRunKind, DiffStats, DEFAULT_NEW_LABEL, DEFAULT_OLD_LABEL,
};

use crate::app::{ViewMode, DIFF_ONLY_CONTEXT};
use crate::theme::Theme;

/// Widest the left column of the side-by-side view gets
const MAX_COLUMN_WIDTH: usize = 60;

/// Placeholder for unchanged rows hidden in diff-only mode
const ELLIPSIS: &str = "...";

fn paint(theme: Option<Theme>, kind: DiffRunKind, text: &str) -> String {
    match theme {
        Some(theme) => theme.paint(kind, text).to_string(),
        None => text.to_string(),
    }
}

fn paint_header(theme: Option<Theme>, text: &str) -> String {
    match theme {
        Some(theme) => theme.paint_header(text).to_string(),
        None => text.to_string(),
    }
}

/// Unified patch of the whole file, or of the changes only in diff-only mode
pub fn unified(result: &DiffResult, view_mode: ViewMode, theme: Option<Theme>) -> String {
    let mut out = String::new();
    for header in [
        format!("--- {DEFAULT_OLD_LABEL}"),
        format!("+++ {DEFAULT_NEW_LABEL}"),
    ] {
        let header = match theme {
            Some(_) => header.bold().to_string(),
            None => header,
        };
        out.push_str(&header);
        out.push('\n');
    }

    for hunk in patch_hunks(result, view_mode.context()) {
        out.push_str(&paint_header(theme, &hunk.header()));
        out.push('\n');
        for line in &hunk.lines {
            out.push_str(&paint(theme, line.kind, &line.to_string()));
            out.push('\n');
        }
    }
    out
}

/// A row of the side-by-side view
#[derive(Debug, Clone, PartialEq, Eq)]
enum Row<'a> {
    Kept(&'a str),
    Changed {
        left: Option<&'a str>,
        right: Option<&'a str>,
    },
}

impl Row<'_> {
    fn is_change(&self) -> bool {
        matches!(self, Row::Changed { .. })
    }
}

/// Pair removed and added lines of each change region row by row
fn rows(result: &DiffResult) -> Vec<Row<'_>> {
    let mut rows = Vec::new();
    let mut runs = result.runs().iter().peekable();

    while let Some(run) = runs.next() {
        match run.kind {
            DiffRunKind::Kept => rows.extend(run.lines.iter().map(|line| Row::Kept(line.as_str()))),
            DiffRunKind::Added => rows.extend(run.lines.iter().map(|line| Row::Changed {
                left: None,
                right: Some(line.as_str()),
            })),
            DiffRunKind::Removed => {
                let added = runs
                    .next_if(|next| next.kind == DiffRunKind::Added)
                    .map(|next| next.lines.as_slice())
                    .unwrap_or_default();
                let height = run.len().max(added.len());
                rows.extend((0..height).map(|i| Row::Changed {
                    left: run.lines.get(i).map(String::as_str),
                    right: added.get(i).map(String::as_str),
                }));
            }
        }
    }
    rows
}

/// Which rows diff-only mode keeps: changes and their nearby unchanged rows
fn visible_rows(rows: &[Row<'_>], view_mode: ViewMode) -> Vec<bool> {
    if view_mode == ViewMode::ShowAll {
        return vec![true; rows.len()];
    }

    let mut visible = vec![false; rows.len()];
    for (index, _) in rows.iter().enumerate().filter(|(_, row)| row.is_change()) {
        let start = index.saturating_sub(DIFF_ONLY_CONTEXT);
        let end = (index + DIFF_ONLY_CONTEXT + 1).min(rows.len());
        visible[start..end].iter_mut().for_each(|v| *v = true);
    }
    visible
}

/// Two-column view: the left editor against the right one.
///
/// The marker between the columns is blank for unchanged rows, `|` for a
/// changed line, `<` for a line only on the left and `>` for a line only on
/// the right.
pub fn side_by_side(result: &DiffResult, view_mode: ViewMode, theme: Option<Theme>) -> String {
    let rows = rows(result);
    let visible = visible_rows(&rows, view_mode);

    let width = rows
        .iter()
        .map(|row| match row {
            Row::Kept(line) => line.chars().count(),
            Row::Changed { left, .. } => left.map_or(0, |line| line.chars().count()),
        })
        .max()
        .unwrap_or(0)
        .min(MAX_COLUMN_WIDTH);

    let mut out = String::new();
    let mut hidden = false;
    for (row, visible) in rows.iter().zip(visible) {
        if !visible {
            if !hidden {
                out.push_str(&paint_header(theme, ELLIPSIS));
                out.push('\n');
            }
            hidden = true;
            continue;
        }
        hidden = false;

        let line = match *row {
            Row::Kept(line) => {
                let left = format!("{line:<width$}");
                format!(
                    "{}   {}",
                    paint(theme, DiffRunKind::Kept, &left),
                    paint(theme, DiffRunKind::Kept, line)
                )
            }
            Row::Changed { left, right } => {
                let marker = match (left, right) {
                    (Some(_), Some(_)) => '|',
                    (Some(_), None) => '<',
                    _ => '>',
                };
                let left = format!("{:<width$}", left.unwrap_or_default());
                format!(
                    "{} {} {}",
                    paint(theme, DiffRunKind::Removed, &left),
                    marker,
                    paint(theme, DiffRunKind::Added, right.unwrap_or_default())
                )
            }
        };
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// `Added: A  Removed: R  Modified: M`
pub fn stats_line(stats: &DiffStats) -> String {
    format!(
        "Added: {}  Removed: {}  Modified: {}",
        stats.added, stats.removed, stats.modified
    )
}

/// Statistics and runs as an indented JSON document
pub fn json(result: &DiffResult, stats: &DiffStats) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&json!({
        "stats": stats,
        "runs": result.runs(),
    }))
}
