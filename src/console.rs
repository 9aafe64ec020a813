//! Console helpers shared by the demo binaries.

use colored::Colorize;

/// Print a `=== Title ===` banner, separated from previous output.
pub fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold().cyan());
}

pub fn lines<I, S>(lines: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        println!("  {}", line.as_ref());
    }
}

pub fn key_points(points: &[&str]) {
    println!("\n{}", "=== Key Points ===".bold().green());
    for (i, point) in points.iter().enumerate() {
        println!("{}. {}", i + 1, point);
    }
}
