use line_diff::{diff_lines, DiffRunKind, TextDiff};
use proptest::prelude::*;
use similar::{capture_diff_slices, Algorithm, DiffTag};

// A small alphabet so that generated texts share plenty of lines
fn lines_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d", ""]), 0..24)
}

fn to_text(lines: &[&str]) -> String {
    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join("\n"))
    }
}

/// Lines that a minimal edit script removes plus lines it inserts
fn minimal_edit_count(old: &[&str], new: &[&str]) -> usize {
    capture_diff_slices(Algorithm::Myers, old, new)
        .iter()
        .filter(|op| op.tag() != DiffTag::Equal)
        .map(|op| op.old_range().len() + op.new_range().len())
        .sum()
}

proptest! {
    #[test]
    fn runs_reconstruct_both_texts(old in lines_strategy(), new in lines_strategy()) {
        let result = diff_lines(&to_text(&old), &to_text(&new));

        prop_assert_eq!(result.old_lines().collect::<Vec<_>>(), old.clone());
        prop_assert_eq!(result.new_lines().collect::<Vec<_>>(), new.clone());
        prop_assert_eq!(result.kept_lines() + result.removed_lines(), old.len());
        prop_assert_eq!(result.kept_lines() + result.added_lines(), new.len());
    }

    #[test]
    fn runs_are_coalesced(old in lines_strategy(), new in lines_strategy()) {
        let result = diff_lines(&to_text(&old), &to_text(&new));

        for run in result.runs() {
            prop_assert!(!run.is_empty());
        }
        for pair in result.runs().windows(2) {
            prop_assert_ne!(pair[0].kind, pair[1].kind);
            // removals lead inside a change region
            prop_assert!(!(pair[0].kind == DiffRunKind::Added && pair[1].kind == DiffRunKind::Removed));
        }
    }

    #[test]
    fn diff_is_minimal(old in lines_strategy(), new in lines_strategy()) {
        let result = diff_lines(&to_text(&old), &to_text(&new));

        prop_assert_eq!(
            result.added_lines() + result.removed_lines(),
            minimal_edit_count(&old, &new)
        );
    }

    #[test]
    fn kept_runs_start_at_earliest_copy(old in lines_strategy(), new in lines_strategy()) {
        let result = diff_lines(&to_text(&old), &to_text(&new));
        let runs = result.runs();

        for (index, run) in runs.iter().enumerate().filter(|(_, run)| run.kind == DiffRunKind::Kept) {
            let first = &run.lines[0];
            // the change region right before a kept run holds no copy of its first line
            for previous in runs[..index].iter().rev().take_while(|run| run.has_changes()) {
                prop_assert!(!previous.lines.contains(first));
            }
        }
    }

    #[test]
    fn identical_texts_have_no_changes(lines in lines_strategy()) {
        let text = to_text(&lines);
        let result = diff_lines(&text, &text);

        prop_assert!(!result.has_changes());
        prop_assert!(result.run_count() <= 1);
    }

    #[test]
    fn stats_are_symmetric(old in lines_strategy(), new in lines_strategy()) {
        let forward = TextDiff::stats(&to_text(&old), &to_text(&new));
        let backward = TextDiff::stats(&to_text(&new), &to_text(&old));

        prop_assert_eq!(forward.added, backward.removed);
        prop_assert_eq!(forward.removed, backward.added);
        prop_assert_eq!(forward.modified, backward.modified);
        prop_assert_eq!(forward.modified, forward.added.min(forward.removed));
    }
}
