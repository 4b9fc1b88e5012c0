/// `--list-flags`: render the flag catalog as a table.
use comfy_table::{Cell, Table, presets::UTF8_BORDERS_ONLY};

use crate::catalog::{Catalog, ValueKind};
use crate::errors::CivetError;

/// Run `civetw --list-flags`.
///
/// # Errors
///
/// Cannot currently fail; the catalog is always available.
pub fn run(catalog: &Catalog) -> Result<(), CivetError> {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec![
        Cell::new("FLAG"),
        Cell::new("VALUE"),
        Cell::new("SECTION"),
        Cell::new("HELP"),
    ]);

    for entry in catalog.entries() {
        let value = match entry.kind {
            ValueKind::None => String::new(),
            ValueKind::Single { placeholder } => format!("<{placeholder}>"),
            ValueKind::Pair { placeholder } => placeholder.to_owned(),
        };
        table.add_row(vec![
            Cell::new(entry.token),
            Cell::new(value),
            Cell::new(entry.section),
            Cell::new(entry.help),
        ]);
    }

    println!("{table}");
    Ok(())
}
