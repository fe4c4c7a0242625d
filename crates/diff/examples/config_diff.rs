use std::time::Duration;

use line_diff::{LineEndingMode, TextDiff};

fn main() {
    let complex_text1 = "This is a longer text with multiple paragraphs.\nIt contains several lines that will be changed.\nSome lines will remain the same.\nOthers will be modified extensively.";
    let complex_text2 = "This is a longer text with multiple sections.\nIt has several lines that have been modified.\nSome lines will remain the same.\nNew lines are also added here.\nAnd more content at the end.";

    println!("=== Full context (default) ===");
    print!("{}", TextDiff::configure().unified_diff(complex_text1, complex_text2));

    println!("\n=== With 0 context lines ===");
    print!(
        "{}",
        TextDiff::configure()
            .context_lines(0)
            .unified_diff(complex_text1, complex_text2)
    );

    println!("\n=== Custom labels ===");
    print!(
        "{}",
        TextDiff::configure()
            .labels("draft.txt", "final.txt")
            .context_lines(1)
            .unified_diff(complex_text1, complex_text2)
    );

    // Windows line endings are folded into Unix ones unless asked otherwise
    let crlf = "first\r\nsecond\r\n";
    let lf = "first\nsecond\n";

    println!("\n=== Line endings ===");
    println!(
        "unix:     {}",
        TextDiff::configure()
            .line_ending_mode(LineEndingMode::Unix)
            .diff(crlf, lf)
            .has_changes()
    );
    println!(
        "preserve: {}",
        TextDiff::configure()
            .line_ending_mode(LineEndingMode::Preserve)
            .diff(crlf, lf)
            .has_changes()
    );

    println!("\n=== With a timeout ===");
    let result = TextDiff::configure()
        .timeout(Duration::from_millis(50))
        .diff(complex_text1, complex_text2);
    println!("{} runs, {} lines changed", result.run_count(), result.added_lines() + result.removed_lines());
}
