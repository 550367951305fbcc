//! Generic list output handler
//!
//! Every list command ends the same way: convert the fetched API models
//! into display rows and print them in the chosen format. This helper keeps
//! that tail in one place.

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::Formattable;

/// Convert API models into display rows and print them.
pub fn print_list<T, D>(items: Vec<T>, format: OutputFormat) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
{
    let display_items: Vec<D> = items.into_iter().map(D::from).collect();
    display_items.print(format)
}

/// Print a list followed by a result-count line (table format only; JSON
/// output stays machine-clean).
pub fn print_list_with_count<T, D>(items: Vec<T>, total: usize, format: OutputFormat) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
{
    print_list::<T, D>(items, format)?;

    if matches!(format, OutputFormat::Table) {
        println!("{}", crate::output::table::result_count(total));
    }

    Ok(())
}
