//! End-of-session summary table

use std::path::PathBuf;
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::transform::Transform;

/// Summary of one read -> transform -> write cycle.
#[derive(Debug)]
pub struct SessionSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub transform: Transform,
    pub original_chars: usize,
    pub transformed_chars: usize,
    pub original_lines: usize,
    pub transformed_lines: usize,
    pub elapsed: Duration,
}

impl SessionSummary {
    pub fn new(input: PathBuf, output: PathBuf, transform: Transform) -> Self {
        Self {
            input,
            output,
            transform,
            original_chars: 0,
            transformed_chars: 0,
            original_lines: 0,
            transformed_lines: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Record character and line counts for both sides of the transform.
    pub fn record_sizes(&mut self, original: &str, transformed: &str) {
        self.original_chars = original.chars().count();
        self.transformed_chars = transformed.chars().count();
        self.original_lines = original.split('\n').count();
        self.transformed_lines = transformed.split('\n').count();
    }

    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("SESSION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Input"),
            Cell::new(self.input.display()),
        ]);
        table.add_row(vec![
            Cell::new("💾 Output"),
            Cell::new(self.output.display()),
        ]);
        table.add_row(vec![
            Cell::new("🔄 Transform"),
            Cell::new(self.transform.label()).fg(Color::Cyan),
        ]);
        table.add_row(vec![
            Cell::new("Characters (original)"),
            Cell::new(self.original_chars),
        ]);
        table.add_row(vec![
            Cell::new("Characters (transformed)"),
            Cell::new(self.transformed_chars).fg(if self.transformed_chars == self.original_chars {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);
        table.add_row(vec![
            Cell::new("Lines (original)"),
            Cell::new(self.original_lines),
        ]);
        table.add_row(vec![
            Cell::new("Lines (transformed)"),
            Cell::new(self.transformed_lines),
        ]);
        table.add_row(vec![
            Cell::new("⏱️  Elapsed"),
            Cell::new(format!("{:.2?}", self.elapsed)),
        ]);

        println!("{table}");
    }
}
