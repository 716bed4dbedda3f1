//! The interactive session loop: read -> transform -> write.
//!
//! Every failure during a prompt stage is recoverable: the user gets a
//! message and the stage asks again. Only two things end the program early,
//! a Ctrl-C during a prompt and an unexpected top-level failure; both are
//! handled by the binary entry point.

mod io;

pub use io::{read_text, write_text, ReadError, WriteError};

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use console::style;

use crate::cli::{self, Cli, PromptError};
use crate::report::SessionSummary;
use crate::transform::Transform;
use crate::utils::{
    clear_spinner, create_spinner, print_error, print_farewell, print_info, print_step_header,
    print_success, CYCLE,
};

/// Answers pre-seeded from CLI flags. Consumed by the first cycle; later
/// cycles prompt for everything.
#[derive(Debug, Default)]
struct Hints {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    transform: Option<Transform>,
}

/// Run the interactive outer loop: process files until the user stops.
pub fn run(cli: &Cli) -> Result<()> {
    // Validate a --transform hint up front so a typo fails before any prompt.
    let transform_hint = cli
        .transform
        .as_deref()
        .map(parse_transform_name)
        .transpose()?;

    let mut hints = Some(Hints {
        input: cli.input.clone(),
        output: cli.output.clone(),
        transform: transform_hint,
    });

    loop {
        run_session(hints.take().unwrap_or_default())?;

        println!();
        if !cli::confirm("Process another file?")? {
            break;
        }
    }

    print_farewell();
    Ok(())
}

/// Run exactly one cycle without prompts. Requires `--input` and
/// `--transform`; refuses to overwrite an existing output unless `--force`.
pub fn run_once(cli: &Cli) -> Result<()> {
    let input = cli
        .input
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("--input is required with --no-confirm"))?;
    let name = cli
        .transform
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("--transform is required with --no-confirm"))?;
    let transform = parse_transform_name(name)?;
    let output = cli
        .output_path()
        .ok_or_else(|| anyhow::anyhow!("output path could not be derived"))?;

    let started = Instant::now();

    let content =
        read_text(input).with_context(|| format!("failed to read '{}'", input.display()))?;

    if output.exists() && !cli.force {
        bail!(
            "output file '{}' already exists (use --force to overwrite)",
            output.display()
        );
    }

    let transformed = transform.apply(&content);
    write_text(&output, &transformed)
        .with_context(|| format!("failed to write '{}'", output.display()))?;

    print_success(&format!(
        "Applied {} to '{}'",
        transform.name(),
        input.display()
    ));

    let mut summary = SessionSummary::new(input.clone(), output, transform);
    summary.record_sizes(&content, &transformed);
    summary.set_elapsed(started.elapsed());
    summary.display();

    Ok(())
}

/// One full read -> transform -> write cycle.
///
/// A failed write ends the cycle with a message but is not an error; the
/// outer loop still offers to process another file.
fn run_session(hints: Hints) -> Result<()> {
    let started = Instant::now();

    print_step_header(1, "Read Input");
    let (input_path, content) = acquire_input(hints.input)?;

    print_step_header(2, "Choose Output");
    let output_path = acquire_output_path(hints.output)?;

    print_step_header(3, "Transform");
    let (transform, transformed) = select_transform(&content, hints.transform)?;

    print_step_header(4, "Write Output");
    let spinner = create_spinner("Writing output file...");
    match write_text(&output_path, &transformed) {
        Ok(()) => {
            clear_spinner(&spinner);
            print_success(&format!(
                "Wrote transformed content to '{}'",
                output_path.display()
            ));
            print_info(&format!(
                "Original size: {} characters",
                content.chars().count()
            ));
            print_info(&format!(
                "Transformed size: {} characters",
                transformed.chars().count()
            ));

            let mut summary = SessionSummary::new(input_path, output_path, transform);
            summary.record_sizes(&content, &transformed);
            summary.set_elapsed(started.elapsed());
            summary.display();
        }
        Err(WriteError::PermissionDenied) => {
            clear_spinner(&spinner);
            print_error(&format!(
                "Permission denied writing to '{}'.",
                output_path.display()
            ));
        }
        Err(WriteError::Io(err)) => {
            clear_spinner(&spinner);
            print_error(&format!(
                "Unexpected error while writing '{}': {}.",
                output_path.display(),
                err
            ));
        }
    }

    Ok(())
}

/// Prompt until a readable, UTF-8 text file is obtained.
///
/// Returns the accepted path and the full decoded contents. Every read
/// failure prints a kind-specific message and asks again; this loop only
/// errors when the prompt itself fails (Ctrl-C or terminal loss).
fn acquire_input(initial: Option<PathBuf>) -> Result<(PathBuf, String), PromptError> {
    let mut pending = initial;
    loop {
        let raw = match pending.take() {
            Some(path) => path.display().to_string(),
            None => cli::input_line("Enter the input filename")?,
        };
        if raw.trim().is_empty() {
            print_error("Filename cannot be empty. Please try again.");
            continue;
        }
        let path = PathBuf::from(raw.trim());

        let spinner = create_spinner("Reading file...");
        match read_text(&path) {
            Ok(content) => {
                clear_spinner(&spinner);
                print_success(&format!("Successfully read '{}'", path.display()));
                return Ok((path, content));
            }
            Err(err) => {
                clear_spinner(&spinner);
                print_error(&read_failure_message(&path, &err));
            }
        }
    }
}

/// User-facing message for each read failure kind.
fn read_failure_message(path: &Path, err: &ReadError) -> String {
    match err {
        ReadError::NotFound => {
            format!("File '{}' not found. Please try again.", path.display())
        }
        ReadError::PermissionDenied => {
            format!(
                "Permission denied reading '{}'. Please try again.",
                path.display()
            )
        }
        ReadError::InvalidUtf8 => {
            format!(
                "Unable to decode '{}' as UTF-8 text. It might be a binary file.",
                path.display()
            )
        }
        ReadError::IsADirectory => {
            format!("'{}' is a directory, not a file.", path.display())
        }
        ReadError::Io(err) => {
            format!(
                "Unexpected error reading '{}': {}. Please try again.",
                path.display(),
                err
            )
        }
    }
}

/// Prompt until an acceptable output path is chosen.
///
/// A path that already exists needs an explicit overwrite confirmation;
/// declining re-prompts for a different path. Existence is checked against
/// the filesystem directly, so an existing-but-unreadable file still
/// triggers the confirmation.
fn acquire_output_path(initial: Option<PathBuf>) -> Result<PathBuf, PromptError> {
    let mut pending = initial;
    loop {
        let raw = match pending.take() {
            Some(path) => path.display().to_string(),
            None => cli::input_line("Enter the output filename")?,
        };
        if raw.trim().is_empty() {
            print_error("Output filename cannot be empty. Please try again.");
            continue;
        }
        let path = PathBuf::from(raw.trim());

        if path.exists() {
            let overwrite = cli::confirm_with_default(
                &format!("'{}' already exists. Overwrite?", path.display()),
                false,
            )?;
            if !overwrite {
                print_info("Please choose a different output filename.");
                continue;
            }
        }

        return Ok(path);
    }
}

/// Present the transform menu and apply the chosen transform to `content`.
///
/// Out-of-range integers and non-integer input each get their own message
/// and re-prompt. A pre-seeded hint skips the menu entirely.
fn select_transform(
    content: &str,
    hint: Option<Transform>,
) -> Result<(Transform, String), PromptError> {
    if let Some(transform) = hint {
        print_success(&format!("Selected: {}", transform.label()));
        return Ok((transform, transform.apply(content)));
    }

    println!();
    println!("    {}Choose a transformation:", CYCLE);
    for (i, transform) in Transform::ALL.iter().enumerate() {
        println!("      {}. {}", style(i).cyan().bold(), transform.label());
    }
    println!();

    loop {
        let raw = cli::input_line("Enter your choice (0-5)")?;
        match raw.parse::<i64>() {
            Ok(choice) => {
                match usize::try_from(choice).ok().and_then(Transform::from_index) {
                    Some(transform) => {
                        print_success(&format!("Selected: {}", transform.label()));
                        return Ok((transform, transform.apply(content)));
                    }
                    None => {
                        print_error("Invalid choice. Please enter a number between 0 and 5.");
                    }
                }
            }
            Err(_) => print_error("Please enter a valid number."),
        }
    }
}

/// Resolve a `--transform` flag value, listing the valid names on failure.
pub fn parse_transform_name(name: &str) -> Result<Transform> {
    Transform::from_name(name).ok_or_else(|| {
        let names: Vec<&str> = Transform::ALL.iter().map(|t| t.name()).collect();
        anyhow::anyhow!(
            "unknown transform '{}'. Valid names: {}",
            name,
            names.join(", ")
        )
    })
}

/// True when `err` came from the user interrupting a prompt (Ctrl-C).
pub fn was_interrupted(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<PromptError>(),
        Some(PromptError::Interrupted)
    )
}
