//! Terminal styling utilities for the interactive session

use console::{style, Emoji};

// Emoji icons with fallbacks for terminals that don't support them
pub static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WAVE: Emoji<'_, '_> = Emoji("👋 ", "");
pub static CYCLE: Emoji<'_, '_> = Emoji("🔄 ", ">> ");

/// Print the application banner with ASCII art
pub fn print_banner(version: &str) {
    let banner = r#"
    ██████╗ ███████╗████████╗███████╗██╗  ██╗████████╗
    ██╔══██╗██╔════╝╚══██╔══╝██╔════╝╚██╗██╔╝╚══██╔══╝
    ██████╔╝█████╗     ██║   █████╗   ╚███╔╝    ██║
    ██╔══██╗██╔══╝     ██║   ██╔══╝   ██╔██╗    ██║
    ██║  ██║███████╗   ██║   ███████╗██╔╝ ██╗   ██║
    ╚═╝  ╚═╝╚══════╝   ╚═╝   ╚══════╝╚═╝  ╚═╝   ╚═╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {}{}",
        FOLDER,
        style("Read a file, transform it, write it back out").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print a recoverable error message
pub fn print_error(message: &str) {
    println!("    {} {}", style("✗").red().bold(), style(message).red());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print the farewell shown when the user chooses to stop
pub fn print_farewell() {
    println!();
    println!(
        "    {}{}",
        WAVE,
        style("Thanks for using retext!").green().bold()
    );
    println!();
}

/// Print the farewell shown when a prompt is interrupted with Ctrl-C
pub fn print_interrupted() {
    println!();
    println!(
        "    {}{}",
        WAVE,
        style("Interrupted. Nothing more written.").yellow()
    );
    println!();
}
