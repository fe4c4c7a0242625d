use line_diff::{compute_stats, diff_lines, Context, DiffRunKind, TextDiff};

fn main() {
    // Two sample texts to compare
    let text1 = "This is the first line.\nHere is the second line.\nAnd the third line.";
    let text2 = "This is the first line.\nThis is a completely different second line.\nAnd the third line.\nPlus a new fourth line.";

    println!("Unified diff:");
    print!("{}", TextDiff::unified_diff(text1, text2, Context::Lines(1)));

    let result = diff_lines(text1, text2);
    let stats = compute_stats(&result);

    println!("\nDiff statistics:");
    println!("  Runs: {}", result.run_count());
    println!("  Added lines: {}", stats.added);
    println!("  Removed lines: {}", stats.removed);
    println!("  Modified lines: {}", stats.modified);
    println!("  Unchanged lines: {}", result.kept_lines());

    println!("\nRuns:");
    for (i, run) in result.runs().iter().enumerate() {
        let color = match run.kind {
            DiffRunKind::Removed => "\x1b[31m",
            DiffRunKind::Added => "\x1b[32m",
            DiffRunKind::Kept => "\x1b[37m",
        };
        println!(
            "Run {}: {}{}\x1b[0m (old line {}, new line {})",
            i + 1,
            color,
            run.kind,
            run.old_start + 1,
            run.new_start + 1
        );
        for line in &run.lines {
            println!("    {}{}", run.kind.patch_prefix(), line);
        }
    }

    println!("\nComparing two versions of a file:");
    let file1 = r#"fn main() {
    println!("Hello, world!");
}
"#;

    let file2 = r#"fn main() {
    // Add a greeting with name
    let name = "Rust";
    println!("Hello, {}!", name);
}
"#;

    print!("{}", TextDiff::unified_diff(file1, file2, Context::Full));
    println!("\nStats: {}", TextDiff::stats(file1, file2));
}
