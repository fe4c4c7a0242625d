use std::time::Duration;

use line_diff::{diff_lines, DiffRunKind, LineEndingMode, TextDiff};
use pretty_assertions::assert_eq;

#[test]
fn test_newlines_at_end() {
    // A single trailing newline does not introduce an extra empty line
    let with_newline = "Line 1\nLine 2\n";
    let without_newline = "Line 1\nLine 2";

    let result = diff_lines(with_newline, without_newline);
    assert!(!result.has_changes());
    assert_eq!(result.old_line_count(), 2);
    assert_eq!(result.new_line_count(), 2);

    // A second newline is a real blank line
    let result = diff_lines("Line 1\n", "Line 1\n\n");
    assert_eq!(result.added_lines(), 1);
    assert_eq!(result.run(1).unwrap().lines, vec![String::new()]);
}

#[test]
fn test_single_newline_is_one_blank_line() {
    let result = diff_lines("", "\n");

    assert_eq!(result.new_line_count(), 1);
    assert_eq!(result.added_lines(), 1);
}

#[test]
fn test_crlf_is_normalized_by_default() {
    let result = diff_lines("a\r\nb\r\n", "a\nb\n");

    assert!(!result.has_changes());
    assert_eq!(result.kept_lines(), 2);
}

#[test]
fn test_crlf_preserved_on_request() {
    let result = TextDiff::configure()
        .line_ending_mode(LineEndingMode::Preserve)
        .diff("a\r\nb\n", "a\nb\n");

    let kinds: Vec<_> = result.runs().iter().map(|run| run.kind).collect();
    assert_eq!(
        kinds,
        vec![DiffRunKind::Removed, DiffRunKind::Added, DiffRunKind::Kept]
    );
    assert_eq!(result.removed_text(), "a\r");
}

#[test]
fn test_very_large_diff() {
    let mut old = String::new();
    let mut new = String::new();

    // 1000 lines, every 10th one different
    for i in 0..1000 {
        old.push_str(&format!("Line {} of old text\n", i));
        if i % 10 == 0 {
            new.push_str(&format!("MODIFIED Line {} of new text\n", i));
        } else {
            new.push_str(&format!("Line {} of old text\n", i));
        }
    }

    let result = diff_lines(&old, &new);

    assert_eq!(result.added_lines(), 100);
    assert_eq!(result.removed_lines(), 100);
    assert_eq!(result.kept_lines(), 900);
    assert_eq!(TextDiff::stats(&old, &new).modified, 100);
}

#[test]
fn test_unicode_text() {
    let old = "Hello, 世界!\nこんにちは\n👋 Wave\n";
    let new = "Hello, 世界!\nこんばんは\n👋 Wave\n";

    let result = diff_lines(old, new);

    assert_eq!(result.removed_text(), "こんにちは");
    assert_eq!(result.added_text(), "こんばんは");
    assert_eq!(result.kept_lines(), 2);
}

#[test]
fn test_diff_with_only_whitespace_changes() {
    // Whitespace is significant: lines are compared exactly
    let result = diff_lines("fn main() {\n    run();\n}\n", "fn main() {\n\trun();\n}\n");

    assert_eq!(result.removed_text(), "    run();");
    assert_eq!(result.added_text(), "\trun();");
}

#[test]
fn test_blank_lines_are_lines() {
    let result = diff_lines("a\n\nb\n", "a\nb\n");

    assert_eq!(result.removed_lines(), 1);
    assert_eq!(result.removed_text(), "");
    assert_eq!(result.kept_lines(), 2);
}

#[test]
fn test_expired_timeout_still_reconstructs_both_texts() {
    let old = "a\nb\nc\nd\ne\nf\n";
    let new = "a\nx\nc\ny\ne\nf\n";

    let result = TextDiff::configure()
        .timeout(Duration::ZERO)
        .diff(old, new);

    let old_lines: Vec<_> = result.old_lines().collect();
    let new_lines: Vec<_> = result.new_lines().collect();
    assert_eq!(old_lines, vec!["a", "b", "c", "d", "e", "f"]);
    assert_eq!(new_lines, vec!["a", "x", "c", "y", "e", "f"]);

    // Common prefix and suffix are still found without searching
    assert_eq!(result.runs().first().unwrap().kind, DiffRunKind::Kept);
    assert_eq!(result.runs().last().unwrap().kind, DiffRunKind::Kept);
}

#[test]
fn test_generous_timeout_is_minimal() {
    let old = "a\nb\nc\nd\n";
    let new = "a\nx\nc\nd\n";

    let result = TextDiff::configure()
        .timeout(Duration::from_secs(60))
        .diff(old, new);

    assert_eq!(result, diff_lines(old, new));
}
