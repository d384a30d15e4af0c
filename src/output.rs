//! Terminal output rendering for youyaku.

use colored::Colorize;

use crate::stats::TextStats;

/// Print the run header with the model in use.
pub fn render_header(model: &str) {
    println!(
        "{} [model: {}]",
        crate::constants::APP_NAME.bold().cyan(),
        model.yellow()
    );
    println!();
}

/// Print the final summary.
pub fn render_summary(summary: &str) {
    println!("{}", "summary:".cyan().bold());
    println!();
    println!("{summary}");
}

/// Print the statistics line below a summary.
pub fn render_stats(stats: &TextStats) {
    println!();
    println!("{}", format!("[{stats}]").dimmed());
}

/// Print a dimmed progress note.
pub fn render_note(note: &str) {
    println!("{}", note.dimmed());
}

/// Print an error to stderr.
pub fn render_error(err: &str) {
    eprintln!("{} {}", "error:".red().bold(), err);
}
