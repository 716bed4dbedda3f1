//! Retext: Interactive Text-Transform CLI
//!
//! Reads a text file, applies a user-selected transformation, and writes the
//! result to a new file. Interactive by default; `--no-confirm` runs a single
//! cycle driven entirely by flags.

use anyhow::Result;
use clap::Parser;

use retext::cli::{list, Cli, Commands};
use retext::session;
use retext::utils::{print_banner, print_error, print_info, print_interrupted};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle subcommands
    if let Some(command) = &cli.command {
        return match command {
            Commands::List => {
                list::run_list();
                Ok(())
            }
        };
    }

    // Flag-driven single cycle; validation failures propagate as errors
    if cli.no_confirm {
        return session::run_once(&cli);
    }

    print_banner(env!("CARGO_PKG_VERSION"));

    if let Err(err) = session::run(&cli) {
        // Ctrl-C during a prompt gets its own farewell; anything else is
        // reported generically and the program ends.
        if session::was_interrupted(&err) {
            print_interrupted();
            return Ok(());
        }
        print_error(&format!("Critical error: {:#}", err));
        print_info("Please restart the program.");
        std::process::exit(1);
    }

    Ok(())
}
