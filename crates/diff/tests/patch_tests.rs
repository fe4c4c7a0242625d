use line_diff::{
    diff_lines, patch_hunks, render_unified_patch, Context, DiffRunKind, LineRange, PatchLine,
    TextDiff,
};
use pretty_assertions::assert_eq;

fn numbered(lines: impl IntoIterator<Item = String>) -> String {
    let mut text = String::new();
    for line in lines {
        text.push_str(&line);
        text.push('\n');
    }
    text
}

/// Ten lines with lines 2 and 9 changed
fn two_distant_changes() -> (String, String) {
    let old = numbered((1..=10).map(|i| format!("l{i}")));
    let new = numbered((1..=10).map(|i| match i {
        2 | 9 => format!("L{i}"),
        _ => format!("l{i}"),
    }));
    (old, new)
}

#[test]
fn test_full_context_single_change() {
    let patch = TextDiff::unified_diff("a\nb\nc\n", "a\nB\nc\n", Context::Full);

    assert_eq!(
        patch,
        "--- Original\n+++ Modified\n@@ -1,3 +1,3 @@\n a\n-b\n+B\n c\n"
    );
}

#[test]
fn test_full_context_is_one_hunk() {
    let (old, new) = two_distant_changes();
    let result = diff_lines(&old, &new);

    let hunks = patch_hunks(&result, Context::Full);
    assert_eq!(hunks.len(), 1);
    assert_eq!(hunks[0].header(), "@@ -1,10 +1,10 @@");
}

#[test]
fn test_no_changes_renders_header_only() {
    let result = diff_lines("same\ntext\n", "same\ntext\n");

    assert_eq!(
        render_unified_patch(&result, "Original", "Modified", Context::Full),
        "--- Original\n+++ Modified\n"
    );
    assert!(patch_hunks(&result, Context::Lines(3)).is_empty());
}

#[test]
fn test_insertion_into_empty_file() {
    let patch = TextDiff::unified_diff("", "x\ny\n", Context::Full);

    assert_eq!(patch, "--- Original\n+++ Modified\n@@ -0,0 +1,2 @@\n+x\n+y\n");
}

#[test]
fn test_deletion_of_whole_file() {
    let patch = TextDiff::unified_diff("x\n", "", Context::Full);

    assert_eq!(patch, "--- Original\n+++ Modified\n@@ -1,1 +0,0 @@\n-x\n");
}

#[test]
fn test_bounded_context_merges_close_changes() {
    let (old, new) = two_distant_changes();
    let result = diff_lines(&old, &new);

    // a gap of six unchanged lines is covered by two radii of three
    let hunks = patch_hunks(&result, Context::Lines(3));
    assert_eq!(hunks.len(), 1);
    assert_eq!(hunks[0].header(), "@@ -1,10 +1,10 @@");
}

#[test]
fn test_bounded_context_splits_distant_changes() {
    let (old, new) = two_distant_changes();
    let result = diff_lines(&old, &new);

    let hunks = patch_hunks(&result, Context::Lines(2));
    let headers: Vec<_> = hunks.iter().map(|hunk| hunk.header()).collect();
    assert_eq!(headers, vec!["@@ -1,4 +1,4 @@", "@@ -7,4 +7,4 @@"]);
    assert_eq!(hunks[1].old, LineRange::new(6, 4));
    assert_eq!(hunks[1].new, LineRange::new(6, 4));

    assert_eq!(
        hunks[1].lines,
        vec![
            PatchLine {
                kind: DiffRunKind::Kept,
                content: "l7".to_string()
            },
            PatchLine {
                kind: DiffRunKind::Kept,
                content: "l8".to_string()
            },
            PatchLine {
                kind: DiffRunKind::Removed,
                content: "l9".to_string()
            },
            PatchLine {
                kind: DiffRunKind::Added,
                content: "L9".to_string()
            },
            PatchLine {
                kind: DiffRunKind::Kept,
                content: "l10".to_string()
            },
        ]
    );
}

#[test]
fn test_zero_context() {
    let result = diff_lines("a\nb\nc\n", "A\nb\nC\n");

    let hunks = patch_hunks(&result, Context::Lines(0));
    let headers: Vec<_> = hunks.iter().map(|hunk| hunk.header()).collect();
    assert_eq!(headers, vec!["@@ -1,1 +1,1 @@", "@@ -3,1 +3,1 @@"]);
    assert!(hunks
        .iter()
        .flat_map(|hunk| &hunk.lines)
        .all(|line| line.kind != DiffRunKind::Kept));
}

#[test]
fn test_custom_labels() {
    let patch = TextDiff::configure()
        .labels("left.txt", "right.txt")
        .unified_diff("a\n", "b\n");

    assert!(patch.starts_with("--- left.txt\n+++ right.txt\n@@ -1,1 +1,1 @@\n"));
}

#[test]
fn test_rendering_is_deterministic() {
    let (old, new) = two_distant_changes();
    let config = TextDiff::configure().context_lines(1);

    let result = config.diff(&old, &new);
    assert_eq!(config.render(&result), config.render(&result));
    assert_eq!(config.render(&result), config.unified_diff(&old, &new));
}

#[test]
fn test_every_line_is_newline_terminated() {
    let patch = TextDiff::unified_diff("a\nb", "a\nc", Context::Full);

    assert!(patch.ends_with('\n'));
    assert!(!patch.ends_with("\n\n"));
}

#[test]
fn snapshot_full_context_patch() {
    let patch = TextDiff::configure()
        .context(Context::Full)
        .unified_diff("fn main() {\n    println!(\"hi\");\n}\n", "fn main() {\n    println!(\"hello\");\n    run();\n}\n");

    insta::assert_snapshot!("full_context_patch", patch);
}

#[test]
fn snapshot_split_hunks_patch() {
    let (old, new) = two_distant_changes();
    let patch = TextDiff::configure().context_lines(2).unified_diff(&old, &new);

    insta::assert_snapshot!("split_hunks_patch", patch);
}
