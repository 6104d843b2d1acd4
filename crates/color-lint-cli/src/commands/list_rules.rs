//! List rules command implementation.

use color_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<25} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<25} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nColor kinds: hex, named, rgb, rgba, hsl, hsla, hsv, hsva, argb");

    println!("\nOverride the configured policy from the command line, e.g.:");
    println!("  color-lint check --mode require --types hex");
    println!("  color-lint check --mode block --types named,rgb");
}
