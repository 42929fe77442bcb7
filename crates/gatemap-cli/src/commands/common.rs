//! Shared console output.

use console::style;

use gatemap_core::Report;
use gatemap_core::report::{
    ALL_RECOGNIZED_MESSAGE, EDIT_REQUIRED_MESSAGE, NO_GATES_MESSAGE, UNRECOGNIZED_HEADER,
};

/// One-line usage, printed on stdout for bad invocations.
pub fn usage() -> String {
    format!(
        "Usage: {} [-v...] [--verify] <input:platform.json> <output:gates.json>",
        env!("CARGO_BIN_NAME")
    )
}

/// Print the conversion summary.
pub fn print_report(report: &Report) {
    if report.no_gates_found {
        println!("{} {}", style("!").yellow().bold(), NO_GATES_MESSAGE);
    }

    if report.is_clean() {
        println!("{} {}", style("✓").green().bold(), ALL_RECOGNIZED_MESSAGE);
        return;
    }

    println!("{}", style(UNRECOGNIZED_HEADER).bold());
    println!();
    for name in &report.unmapped {
        println!(" - {}", style(name).cyan());
    }
    println!();
    println!("{}", style(EDIT_REQUIRED_MESSAGE).yellow());
}
