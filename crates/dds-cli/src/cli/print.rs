//! Styled terminal rendering of result records.

use console::style;
use dds_core::search::Record;

/// Prints records as numbered key/value blocks, skipping empty fields.
pub fn print_records<T: Record>(records: &[T]) {
    for (i, record) in records.iter().enumerate() {
        println!("{}", style(format!("{}. {}", i + 1, "=".repeat(74))).bold());
        for (name, value) in record.fields() {
            if value.is_empty() {
                continue;
            }
            println!("{:<12}{}", style(name).cyan(), value);
        }
        println!();
    }
}
