//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod plain;
pub mod progress;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Table => table::format_table(self),
            OutputFormat::Plain => plain::format_plain(self),
            OutputFormat::Json => json::format_json(self)?,
        })
    }
}

/// Print a single record: a one-row table, or a bare JSON object.
pub fn print_one<T: Tabled + Serialize>(item: T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", json::format_json(&item)?);
            Ok(())
        }
        _ => vec![item].print(format),
    }
}
