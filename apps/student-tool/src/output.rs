//! Rendering of student listings.

use std::io::Write;

use anyhow::Context;
use prettytable::{format, Cell, Row, Table};
use student_db_core::persistence::write_records;
use student_db_core::{Field, Student};

use crate::cli::OutputFormat;

/// Writes `students` in the requested format.
pub fn render<W: Write>(out: &mut W, students: &[Student], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => render_table(out, students),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(students).context("Failed to encode JSON")?;
            writeln!(out, "{}", json)?;
            Ok(())
        }
        OutputFormat::Csv => {
            write_records(&mut *out, students)?;
            Ok(())
        }
    }
}

/// Writes a boxed text table with one column per field.
pub fn render_table<W: Write>(out: &mut W, students: &[Student]) -> anyhow::Result<()> {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(Row::new(
        Field::ALL
            .iter()
            .map(|f| Cell::new(f.name()).style_spec("b"))
            .collect(),
    ));

    for student in students {
        table.add_row(Row::new(
            Field::ALL
                .iter()
                .map(|f| {
                    let cell = Cell::new(&student.field_text(*f));
                    match f {
                        Field::Age | Field::Score => cell.style_spec("r"), // Right aligned
                        _ => cell,
                    }
                })
                .collect(),
        ));
    }

    table.print(out).context("Failed to write table")?;
    Ok(())
}

/// Writes one student as a two-column field/value table.
pub fn render_detail<W: Write>(out: &mut W, student: &Student) -> anyhow::Result<()> {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    for field in Field::ALL {
        table.add_row(Row::new(vec![
            Cell::new(field.name()).style_spec("b"),
            Cell::new(&student.field_text(field)),
        ]));
    }
    table.print(out).context("Failed to write record")?;
    Ok(())
}
