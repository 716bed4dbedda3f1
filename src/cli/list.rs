//! The `list` subcommand: print the transform catalogue as a table.

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Table};
use console::style;

use crate::transform::Transform;

/// Print all available transforms with their flag names and descriptions.
pub fn run_list() {
    println!();
    println!(
        "    {} {}",
        style("🔄").cyan(),
        style("AVAILABLE TRANSFORMS").white().bold()
    );
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Description").add_attribute(Attribute::Bold),
    ]);

    for (i, transform) in Transform::ALL.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i),
            Cell::new(transform.name()),
            Cell::new(transform.description()),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "    Use {} to apply one without prompts.",
        style("retext --no-confirm -i FILE -t NAME").cyan()
    );
}
